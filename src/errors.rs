use std::fmt;
use std::path::PathBuf;

/// Which data file a load error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Types,
    Pokemon,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataKind::Types => write!(f, "Type"),
            DataKind::Pokemon => write!(f, "Pokémon"),
        }
    }
}

/// Fatal errors raised while loading the data files. Any of these stops the
/// run before the first group is checked.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The data file could not be read
    #[error("{kind} data could not be read from {}: {source}", .path.display())]
    Io {
        kind: DataKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The data file does not match the expected layout
    #[error("{kind} data does not match the provided schema: {source}")]
    Schema {
        kind: DataKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn kind(&self) -> DataKind {
        match self {
            LoadError::Io { kind, .. } | LoadError::Schema { kind, .. } => *kind,
        }
    }
}

/// Type alias for Results using LoadError
pub type LoadResult<T> = Result<T, LoadError>;
