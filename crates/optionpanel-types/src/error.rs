//! Error type shared by the panel crates and the storage adapters.

pub type OpResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	DbError,
	ConfigError(String),
	ValidationError(String),
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::DbError => write!(f, "database error"),
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Error::NotFound.to_string(), "not found");
		assert_eq!(
			Error::ConfigError("missing namespace".into()).to_string(),
			"config error: missing namespace"
		);
	}

	#[test]
	fn test_from_io() {
		let err: Error = std::io::Error::other("boom").into();
		assert!(matches!(err, Error::Io(_)));
	}
}

// vim: ts=4
