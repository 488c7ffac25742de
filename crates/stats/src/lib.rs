//! Fetching and shaping of MLB season statistics.
//!
//! The entry point is [`load`]: it queries the external leaderboard
//! source for one season and entity kind, and shapes the raw rows into
//! an immutable [`table::StatTable`] indexed by entity display name.
//! [`project::project`] then derives chart-ready subsets of a table
//! from a user [`select::SelectionState`].

mod teams;

pub mod catalog;
pub mod error;
pub mod fetch;
pub mod project;
pub mod select;
pub mod table;

use crate::error::TableError;
use crate::fetch::StatsClient;
use crate::table::EntityKind;
use crate::table::StatTable;

/// Fetch the qualified leaderboard for one season and entity kind and
/// shape it into an indexed table.
///
/// The fetch happens once, synchronously; there is no retry and no
/// partial table on failure.
pub fn load(
    client: &StatsClient,
    season: u16,
    kind: EntityKind,
) -> Result<StatTable, TableError> {
    let rows = client.leaders(season, kind)?;
    let spec = catalog::table_spec(kind);

    StatTable::from_rows(rows, &spec)
}
