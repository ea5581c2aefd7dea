use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

use crate::types::ECLevel;

// Error
//------------------------------------------------------------------------------

#[derive(Debug)]
pub enum Error {
    /// Caller-fixable parameter violation, reported before any encode attempt.
    InvalidParameter(String),
    /// Payload does not fit the fixed version at the requested level.
    CapacityExceeded { version: i16, ec_level: ECLevel },
    /// The rendered image was built inconsistently; a producer defect.
    RenderData(String),
    /// Filesystem failure while persisting the output.
    Storage { path: PathBuf, source: io::Error },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::CapacityExceeded { version, ec_level } => write!(
                f,
                "data does not fit symbol version {version} at error correction level {ec_level:?}"
            ),
            Self::RenderData(msg) => write!(f, "malformed rendered image: {msg}"),
            Self::Storage { path, source } => {
                write!(f, "could not write file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
