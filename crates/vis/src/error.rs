//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::io::Error as IoError;

use tinytemplate::error::Error as TinyTemplateError;

use dugout_stats::error::ProjectionError;

/// The result type that uses [VisError] as the error type.
pub type Result<T> = std::result::Result<T, VisError>;

/// The error type for generating the dashboard.
#[derive(Debug)]
pub enum VisError {
    /// A [std::io::Error] encountered while writing the dashboard
    /// files.
    Io(IoError),

    /// A [tinytemplate::error::Error] encountered while registering or
    /// rendering a template.
    Template(TinyTemplateError),

    /// A [serde_json::Error] encountered while serializing chart specs
    /// or table data.
    Json(serde_json::Error),

    /// A page's default selection does not project through its table.
    Projection(ProjectionError),
}

impl Display for VisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vis_error = "vis error:";

        match self {
            VisError::Io(error) => write!(f, "{vis_error} I/O error: {error}"),
            VisError::Template(error) => write!(f, "{vis_error} template error: {error}"),
            VisError::Json(error) => write!(f, "{vis_error} JSON error: {error}"),
            VisError::Projection(error) => write!(f, "{vis_error} {error}"),
        }
    }
}

impl Error for VisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VisError::Io(error) => Some(error),
            VisError::Template(error) => Some(error),
            VisError::Json(error) => Some(error),
            VisError::Projection(error) => Some(error),
        }
    }
}

impl From<IoError> for VisError {
    fn from(error: IoError) -> Self {
        VisError::Io(error)
    }
}

impl From<TinyTemplateError> for VisError {
    fn from(error: TinyTemplateError) -> Self {
        VisError::Template(error)
    }
}

impl From<serde_json::Error> for VisError {
    fn from(error: serde_json::Error) -> Self {
        VisError::Json(error)
    }
}

impl From<ProjectionError> for VisError {
    fn from(error: ProjectionError) -> Self {
        VisError::Projection(error)
    }
}
