//! Defines the error types for fetching, shaping and projecting tables.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use reqwest::StatusCode;

/// The error type for fetching rows from the external stats source.
#[derive(Debug)]
pub enum SourceError {
    /// A [`reqwest::Error`] encountered while sending the request or
    /// decoding the response body.
    Http(reqwest::Error),

    /// The source answered with a non-success status code.
    Response {
        /// The HTTP status code of the response.
        status_code: StatusCode,
        /// The response body text.
        message: String,
    },
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let source_error = "source error:";

        match self {
            SourceError::Http(error) => write!(f, "{source_error} HTTP error: {error}"),
            SourceError::Response {
                status_code,
                message,
            } => write!(
                f,
                "{source_error} the stats source answered with status code {status_code}: {message}"
            ),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SourceError::Http(error) => Some(error),
            SourceError::Response { .. } => None,
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(error: reqwest::Error) -> Self {
        SourceError::Http(error)
    }
}

/// The error type for constructing a [`StatTable`].
///
/// Construction fails fast: a table is either complete and uniquely
/// keyed, or it does not exist.
///
/// [`StatTable`]: crate::table::StatTable
#[derive(Debug)]
pub enum TableError {
    /// The external source could not produce the raw rows.
    Source(SourceError),

    /// A retained raw column is missing from a fetched row, or carries
    /// a value of an unexpected type.
    SchemaMismatch {
        /// The raw column identifier that did not match.
        column: String,
    },

    /// Two rows collapsed to the same entity key.
    DuplicateKey {
        /// The colliding entity key.
        key: String,
    },
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let table_error = "table error:";

        match self {
            TableError::Source(error) => write!(f, "{table_error} {error}"),
            TableError::SchemaMismatch { column } => write!(
                f,
                "{table_error} the \"{column}\" column is missing from the source rows or has an unexpected type"
            ),
            TableError::DuplicateKey { key } => {
                write!(f, "{table_error} two rows collapsed to the \"{key}\" key")
            }
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TableError::Source(error) => Some(error),
            TableError::SchemaMismatch { .. } => None,
            TableError::DuplicateKey { .. } => None,
        }
    }
}

impl From<SourceError> for TableError {
    fn from(error: SourceError) -> Self {
        TableError::Source(error)
    }
}

/// The error type for projecting a table through a selection.
///
/// The dropdowns of a generated page are seeded from the table itself,
/// so these errors indicate malformed external input rather than a
/// reachable UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// A selected entity key or column label is not in the table.
    SelectionOutOfRange {
        /// The selected name the table does not know.
        name: String,
    },

    /// A correlation chart needs exactly two selected columns.
    ColumnArity {
        /// The number of columns actually selected.
        actual: usize,
    },
}

impl Display for ProjectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let projection_error = "projection error:";

        match self {
            ProjectionError::SelectionOutOfRange { name } => write!(
                f,
                "{projection_error} the \"{name}\" selection is not in the table"
            ),
            ProjectionError::ColumnArity { actual } => write!(
                f,
                "{projection_error} a correlation chart needs exactly two selected columns, got {actual}"
            ),
        }
    }
}

impl Error for ProjectionError {}
