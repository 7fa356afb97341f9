pub use crate::error::{Error, OpResult};
pub use crate::option_adapter::{OptionAdapter, OptionValues, SECTION_ID_KEY};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
