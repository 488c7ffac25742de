use std::fmt::Display;

use dugout_stats::error::TableError;
use dugout_vis::error::VisError;

#[derive(Debug)]
pub(crate) enum CliError {
    Stats(TableError),
    Vis(VisError),
    Path(String),
}

impl From<TableError> for CliError {
    fn from(error: TableError) -> Self {
        CliError::Stats(error)
    }
}

impl From<VisError> for CliError {
    fn from(error: VisError) -> Self {
        CliError::Vis(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Stats(error) => write!(f, "{cli_error} {error}"),
            CliError::Vis(error) => write!(f, "{cli_error} {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
        }
    }
}
