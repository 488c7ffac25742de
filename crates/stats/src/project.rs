//! The projection from a table and a selection to a chart-ready frame.

use crate::error::ProjectionError;
use crate::select::Defaults;
use crate::select::SelectionState;
use crate::table::StatTable;
use crate::table::StatValue;

/// The output shape of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMode {
    /// One row per selected entity, one column per selected statistic.
    /// Feeds the horizontal bar charts.
    Comparison,
    /// One row per table entity with exactly two statistic columns.
    /// Feeds the scatter chart; entity selections are ignored.
    Correlation,
}

/// A chart-ready subset of a [`StatTable`].
///
/// Transient by design: recomputed on every selection change, never
/// stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartableFrame {
    /// The projected column labels.
    pub columns: Vec<String>,
    /// The projected rows.
    pub rows: Vec<FrameRow>,
}

/// One row of a [`ChartableFrame`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRow {
    /// The entity key the row belongs to.
    pub key: String,
    /// The row values, in frame column order.
    pub values: Vec<StatValue>,
}

/// Project a table through a selection into a chart-ready frame.
///
/// Empty column or entity selections are backfilled from `defaults`
/// before projecting. Selected names the table does not know fail with
/// [`ProjectionError::SelectionOutOfRange`]; nothing is silently
/// dropped. The inputs are never modified.
pub fn project(
    table: &StatTable,
    selection: &SelectionState,
    defaults: &Defaults,
    mode: ChartMode,
) -> Result<ChartableFrame, ProjectionError> {
    let columns = if selection.columns().is_empty() {
        vec![defaults.column.clone()]
    } else {
        selection.columns().to_vec()
    };

    for column in &columns {
        if !table.contains_column(column) {
            return Err(ProjectionError::SelectionOutOfRange {
                name: column.clone(),
            });
        }
    }

    let keys: Vec<String> = match mode {
        ChartMode::Comparison => {
            if selection.entities().is_empty() {
                vec![defaults.entity.clone()]
            } else {
                selection.entities().to_vec()
            }
        }
        ChartMode::Correlation => {
            if columns.len() != 2 {
                return Err(ProjectionError::ColumnArity {
                    actual: columns.len(),
                });
            }

            table.entity_keys().to_vec()
        }
    };

    let mut rows = Vec::with_capacity(keys.len());

    for key in keys {
        let mut values = Vec::with_capacity(columns.len());

        for column in &columns {
            let value =
                table
                    .value(&key, column)
                    .ok_or_else(|| ProjectionError::SelectionOutOfRange {
                        name: key.clone(),
                    })?;

            values.push(value.clone());
        }

        rows.push(FrameRow { key, values });
    }

    Ok(ChartableFrame { columns, rows })
}
