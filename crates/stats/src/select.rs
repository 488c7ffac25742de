//! Defines the user-controlled selection state of a page.

/// The statistics and entities a user has picked from a page's
/// dropdowns.
///
/// Both sets keep selection order and ignore duplicate inserts. Empty
/// sets are valid; [`project`] backfills them from the page
/// [`Defaults`].
///
/// [`project`]: crate::project::project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    columns: Vec<String>,
    entities: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statistic column to the selection. Reselecting an already
    /// selected column keeps its original position.
    pub fn select_column(&mut self, label: impl Into<String>) {
        let label = label.into();

        if !self.columns.contains(&label) {
            self.columns.push(label);
        }
    }

    /// Add an entity to the selection. Reselecting an already selected
    /// entity keeps its original position.
    pub fn select_entity(&mut self, key: impl Into<String>) {
        let key = key.into();

        if !self.entities.contains(&key) {
            self.entities.push(key);
        }
    }

    /// The selected column labels, in selection order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The selected entity keys, in selection order.
    pub fn entities(&self) -> &[String] {
        &self.entities
    }
}

/// The fixed per-page fallback selection, substituted whenever the
/// corresponding part of a [`SelectionState`] is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// The fallback statistic column label.
    pub column: String,
    /// The fallback entity key.
    pub entity: String,
}

impl Defaults {
    pub fn new(column: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            entity: entity.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selections_keep_insertion_order() {
        let mut selection = SelectionState::new();
        selection.select_entity("Aaron Judge (NYY)");
        selection.select_entity("Yordan Alvarez (HOU)");
        selection.select_column("Home Runs (HR)");

        assert_eq!(
            selection.entities(),
            ["Aaron Judge (NYY)", "Yordan Alvarez (HOU)"]
        );
        assert_eq!(selection.columns(), ["Home Runs (HR)"]);
    }

    #[test]
    fn duplicate_selections_are_ignored() {
        let mut selection = SelectionState::new();
        selection.select_entity("HOU");
        selection.select_entity("NYY");
        selection.select_entity("HOU");

        assert_eq!(selection.entities(), ["HOU", "NYY"]);
    }
}
