use std::io;

/** errors raised while reading instances, validating parameters or running the colony.

`EmptySelection` and `DegenerateClass` are never expected during a run: they indicate
a broken construction invariant and are propagated as-is (no retry).
*/
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// a parameter (or the instance) is outside of its valid domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// weighted selection invoked over an empty candidate set
    #[error("weighted selection over an empty candidate set")]
    EmptySelection,
    /// trail desirability queried for a color class without members
    #[error("trail desirability queried for the empty color class {0}")]
    DegenerateClass(usize),
    /// unable to read or write a file
    #[error("unable to access {path}")]
    Io {
        /// file involved
        path: String,
        /// underlying error
        #[source]
        source: io::Error,
    },
    /// malformed DIMACS input
    #[error("unable to parse instance: {0}")]
    Parse(String),
    /// malformed (or unserializable) json document
    #[error("json error")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// wraps an io error with the file it concerns
    pub fn io(path:&str, source:io::Error) -> Self {
        Self::Io { path: path.to_string(), source }
    }
}
