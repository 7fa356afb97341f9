pub use crate::request::RequestContext;
pub use crate::service::{Panel, PanelOpts, PanelState};
pub use optionpanel_types::error::{Error, OpResult};
pub use optionpanel_types::option_adapter::{OptionAdapter, OptionValues, SECTION_ID_KEY};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
