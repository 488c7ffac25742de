//! Defines the season-scoped statistics table and its construction.

use std::collections::HashMap;
use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::error::TableError;
use crate::fetch::RawRow;
use crate::teams;

const NAME_KEY: &str = "Name";
const TEAM_KEY: &str = "Team";

/// The kind of entity a table holds one row per.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// One row per qualified batter.
    PlayerBatting,
    /// One row per qualified pitcher.
    PlayerPitching,
    /// One row per club's batting aggregate.
    TeamBatting,
    /// One row per club's pitching aggregate.
    TeamPitching,
}

/// A single cell of a [`StatTable`].
///
/// The source reports most statistics as numbers, but a handful of
/// columns carry preformatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    /// A numeric statistic.
    Number(f64),
    /// A preformatted text statistic.
    Text(String),
}

impl Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatValue::Number(n) => Display::fmt(n, f),
            StatValue::Text(t) => Display::fmt(t, f),
        }
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Number(value)
    }
}

/// The strategy for deriving the row key of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keying {
    /// Concatenate the player name and team abbreviation
    /// as `"{Name} ({Team})"`.
    PlayerTeam,
    /// Use the raw team abbreviation.
    TeamCode,
    /// Replace the team abbreviation with the full franchise name.
    /// Unknown abbreviations pass through unchanged.
    FranchiseName,
}

impl Keying {
    fn derive(self, row: &RawRow) -> Result<String, TableError> {
        match self {
            Keying::PlayerTeam => {
                let name = text_field(row, NAME_KEY)?;
                let team = text_field(row, TEAM_KEY)?;

                Ok(format!("{name} ({team})"))
            }
            Keying::TeamCode => {
                let team = text_field(row, TEAM_KEY)?;
                Ok(team.to_owned())
            }
            Keying::FranchiseName => {
                let team = text_field(row, TEAM_KEY)?;
                let name = teams::franchise_name(team).unwrap_or(team);

                Ok(name.to_owned())
            }
        }
    }
}

fn text_field<'a>(row: &'a RawRow, key: &str) -> Result<&'a str, TableError> {
    row.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| TableError::SchemaMismatch {
            column: key.to_owned(),
        })
}

/// The shape of a table for one entity kind: the ordered allow-list of
/// raw columns with their display labels, and the row keying strategy.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    /// Ordered `(raw identifier, display label)` pairs. Raw columns not
    /// listed here are dropped during construction.
    pub columns: &'static [(&'static str, &'static str)],
    /// The row keying strategy.
    pub keying: Keying,
}

/// An immutable entity-by-statistic table for one season.
///
/// Rows are keyed by entity display name and kept in source order;
/// columns carry display labels in allow-list order. The table never
/// changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTable {
    columns: Vec<String>,
    keys: Vec<String>,
    rows: HashMap<String, Vec<StatValue>>,
}

impl StatTable {
    /// Shape raw source rows into a table.
    ///
    /// Every allow-listed raw column must be present in every row with
    /// a number or text value, and the derived row keys must be unique.
    pub fn from_rows(rows: Vec<RawRow>, spec: &TableSpec) -> Result<StatTable, TableError> {
        let columns = spec
            .columns
            .iter()
            .map(|(_, label)| (*label).to_owned())
            .collect();

        let mut keys: Vec<String> = Vec::with_capacity(rows.len());
        let mut values_by_key: HashMap<String, Vec<StatValue>> = HashMap::with_capacity(rows.len());

        for row in &rows {
            let key = spec.keying.derive(row)?;
            let mut values = Vec::with_capacity(spec.columns.len());

            for (raw, _) in spec.columns {
                let value = row.get(*raw).and_then(stat_value).ok_or_else(|| {
                    TableError::SchemaMismatch {
                        column: (*raw).to_owned(),
                    }
                })?;

                values.push(value);
            }

            if values_by_key.insert(key.clone(), values).is_some() {
                return Err(TableError::DuplicateKey { key });
            }

            keys.push(key);
        }

        Ok(Self {
            columns,
            keys,
            rows: values_by_key,
        })
    }

    /// The column display labels, in allow-list order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The entity keys, in source row order.
    pub fn entity_keys(&self) -> &[String] {
        &self.keys
    }

    /// The number of entities in the table.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the table has no entities.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains_column(&self, label: &str) -> bool {
        self.columns.iter().any(|column| column == label)
    }

    pub fn contains_entity(&self, key: &str) -> bool {
        self.rows.contains_key(key)
    }

    /// The position of a column label in the table, if present.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == label)
    }

    /// All values of one entity, in column order.
    pub fn values(&self, key: &str) -> Option<&[StatValue]> {
        self.rows.get(key).map(Vec::as_slice)
    }

    /// A single cell, addressed by entity key and column label.
    pub fn value(&self, key: &str, column: &str) -> Option<&StatValue> {
        let index = self.column_index(column)?;
        self.rows.get(key)?.get(index)
    }
}

fn stat_value(value: &Value) -> Option<StatValue> {
    match value {
        Value::Number(n) => n.as_f64().map(StatValue::Number),
        Value::String(s) => Some(StatValue::Text(s.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    const PLAYER_COLUMNS: &[(&str, &str)] = &[
        ("HR", "Home Runs (HR)"),
        ("AVG", "Batting Average (AVG)"),
    ];

    const PLAYER_SPEC: TableSpec = TableSpec {
        columns: PLAYER_COLUMNS,
        keying: Keying::PlayerTeam,
    };

    fn player_row(name: &str, team: &str, hr: f64, avg: f64) -> RawRow {
        let row = json!({
            "Season": 2022,
            "Name": name,
            "Team": team,
            "HR": hr,
            "AVG": avg,
        });

        match row {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn team_row(team: &str, hr: f64, avg: f64) -> RawRow {
        let row = json!({
            "Season": 2022,
            "Team": team,
            "HR": hr,
            "AVG": avg,
        });

        match row {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn team_spec(keying: Keying) -> TableSpec {
        TableSpec {
            columns: PLAYER_COLUMNS,
            keying,
        }
    }

    #[test]
    fn from_rows_renames_columns_to_display_labels() {
        let rows = vec![player_row("Aaron Judge", "NYY", 62.0, 0.311)];

        let table = StatTable::from_rows(rows, &PLAYER_SPEC).unwrap();

        assert_eq!(
            table.columns(),
            ["Home Runs (HR)", "Batting Average (AVG)"]
        );
        assert!(!table.contains_column("HR"));
        assert!(!table.contains_column("Season"));
    }

    #[test]
    fn from_rows_keys_players_by_name_and_team() {
        let rows = vec![
            player_row("Aaron Judge", "NYY", 62.0, 0.311),
            player_row("Yordan Alvarez", "HOU", 37.0, 0.306),
        ];

        let table = StatTable::from_rows(rows, &PLAYER_SPEC).unwrap();

        assert_eq!(
            table.entity_keys(),
            ["Aaron Judge (NYY)", "Yordan Alvarez (HOU)"]
        );
        assert_eq!(
            table.value("Aaron Judge (NYY)", "Home Runs (HR)"),
            Some(&StatValue::Number(62.0))
        );
    }

    #[test]
    fn from_rows_keeps_the_team_abbreviation_under_team_code_keying() {
        let rows = vec![team_row("HOU", 214.0, 0.248)];

        let table = StatTable::from_rows(rows, &team_spec(Keying::TeamCode)).unwrap();

        assert_eq!(table.entity_keys(), ["HOU"]);
    }

    #[test]
    fn from_rows_substitutes_the_franchise_name_under_franchise_keying() {
        let rows = vec![team_row("HOU", 214.0, 0.248)];

        let table = StatTable::from_rows(rows, &team_spec(Keying::FranchiseName)).unwrap();

        assert_eq!(table.entity_keys(), ["Houston Astros"]);
    }

    #[test]
    fn from_rows_passes_unknown_abbreviations_through_unchanged() {
        let rows = vec![team_row("XYZ", 1.0, 0.2)];

        let table = StatTable::from_rows(rows, &team_spec(Keying::FranchiseName)).unwrap();

        assert_eq!(table.entity_keys(), ["XYZ"]);
    }

    #[test]
    fn from_rows_fails_when_two_rows_collapse_to_the_same_key() {
        let rows = vec![
            player_row("Will Smith", "LAD", 24.0, 0.260),
            player_row("Will Smith", "LAD", 2.0, 0.180),
        ];

        let error = StatTable::from_rows(rows, &PLAYER_SPEC).unwrap_err();

        assert!(matches!(
            error,
            TableError::DuplicateKey { key } if key == "Will Smith (LAD)"
        ));
    }

    #[test]
    fn from_rows_fails_when_a_retained_column_is_missing() {
        let mut row = player_row("Aaron Judge", "NYY", 62.0, 0.311);
        row.remove("AVG");

        let error = StatTable::from_rows(vec![row], &PLAYER_SPEC).unwrap_err();

        assert!(matches!(
            error,
            TableError::SchemaMismatch { column } if column == "AVG"
        ));
    }

    #[test]
    fn from_rows_fails_when_the_key_column_is_missing() {
        let row = team_row("HOU", 214.0, 0.248);

        let error = StatTable::from_rows(vec![row], &PLAYER_SPEC).unwrap_err();

        assert!(matches!(
            error,
            TableError::SchemaMismatch { column } if column == "Name"
        ));
    }

    #[test]
    fn value_reads_text_cells() {
        let mut row = player_row("Aaron Judge", "NYY", 62.0, 0.311);
        row.insert(String::from("AVG"), json!(".311"));

        let table = StatTable::from_rows(vec![row], &PLAYER_SPEC).unwrap();

        assert_eq!(
            table.value("Aaron Judge (NYY)", "Batting Average (AVG)"),
            Some(&StatValue::Text(String::from(".311")))
        );
    }
}
