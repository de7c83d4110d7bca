use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading settings, measurement tables or rendering charts.
#[derive(Debug, Error)]
pub enum TlError {
    /// The file does not exist. The only error the dashboard recovers from.
    #[error("file `{}` not found", path.display())]
    NotFound { path: PathBuf },

    #[error("reading `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{}`: missing column `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("`{}` line {line}: `{value}` in column `{column}` is not a number", path.display())]
    NotNumeric {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("`{}`: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("settings `{}`: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("panel catalog `{origin}`: {source}")]
    Catalog {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rendering `{}`: {message}", path.display())]
    Render { path: PathBuf, message: String },
}

impl TlError {
    /// Wrap an I/O error, promoting `NotFound` to its own variant.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            TlError::NotFound { path }
        } else {
            TlError::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TlError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, TlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_not_found_is_promoted() {
        let err = TlError::from_io(
            "Panneau 9_NarrowBands.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "file `Panneau 9_NarrowBands.txt` not found");
    }

    #[test]
    fn other_io_errors_stay_io() {
        let err = TlError::from_io(
            "x.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(!err.is_not_found());
        assert!(matches!(err, TlError::Io { .. }));
    }
}
