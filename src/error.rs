//! Error type shared by every stage of the snapshot pipeline.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse dot: {0}")]
    Parse(String),

    #[error("no node named {0:?}")]
    UnknownNode(String),

    #[error("no edge {src:?} - {dst:?}")]
    UnknownEdge { src: String, dst: String },

    #[error("edge {src:?} - {dst:?} has no len attribute")]
    MissingEdgeLength { src: String, dst: String },

    #[error("edge {src:?} - {dst:?} has a non-numeric len: {value:?}")]
    InvalidEdgeLength {
        src: String,
        dst: String,
        value: String,
    },

    #[error("unknown graph option {0:?}: expected overlap, splines, sep or orientation")]
    UnknownGraphOption(String),

    #[error("texmode was set to {0:?}, but can only be 'math', 'verbatim' or 'raw'")]
    UnknownTexMode(String),

    #[error("failed to start {program}: {source}")]
    ToolSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    ToolFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{program} produced output that is not UTF-8")]
    ToolOutput { program: String },

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Wrap an i/o error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
