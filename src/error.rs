use crate::fields::FieldType;
use std::path::PathBuf;

/// Failures of the host file collaborator.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("reading {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("writing {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0:?} is not a plain file name")]
    InvalidName(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no server selected")]
    NoServer,
    #[error("loading {filename}")]
    Read {
        filename: String,
        #[source]
        source: TransportError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("no server selected")]
    NoServer,
    #[error("{0} has not been loaded")]
    NotLoaded(String),
    #[error("saving {filename}")]
    Write {
        filename: String,
        #[source]
        source: TransportError,
    },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field {0:?}")]
    UnknownField(String),
    #[error("field {field:?} expects a {expected:?} value")]
    TypeMismatch {
        field: &'static str,
        expected: FieldType,
    },
}
