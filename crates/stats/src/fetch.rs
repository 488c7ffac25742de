//! Fetching raw leaderboard rows from the external stats source.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::SourceError;
use crate::table::EntityKind;

/// One raw leaderboard row, keyed by the source's column identifiers.
pub type RawRow = Map<String, Value>;

/// A blocking client for the FanGraphs major-league leaderboard API.
pub struct StatsClient {
    client: Client,
    base_url: &'static str,
}

impl StatsClient {
    pub fn new() -> Self {
        let base_url = "https://www.fangraphs.com/api/leaders/major-league/data";
        let client = Client::new();

        Self { client, base_url }
    }

    /// Fetch the qualified leaderboard rows for one season and entity
    /// kind.
    ///
    /// Player queries return one row per qualified player; team queries
    /// return one season-aggregate row per club.
    pub fn leaders(&self, season: u16, kind: EntityKind) -> Result<Vec<RawRow>, SourceError> {
        let season = season.to_string();
        let query = [
            ("pos", "all"),
            ("stats", stats_segment(kind)),
            ("lg", "all"),
            ("qual", "y"),
            ("ind", "0"),
            ("season", season.as_str()),
            ("season1", season.as_str()),
            ("team", team_segment(kind)),
            ("pageitems", "2000"),
            ("pagenum", "1"),
        ];

        let response = self.client.get(self.base_url).query(&query).send()?;

        match response.status() {
            StatusCode::OK => {
                let leaders: LeadersResponse = response.json()?;
                Ok(leaders.data)
            }
            status_code => {
                let message = response.text()?;
                let error = SourceError::Response {
                    status_code,
                    message,
                };
                Err(error)
            }
        }
    }
}

impl Default for StatsClient {
    fn default() -> Self {
        Self::new()
    }
}

fn stats_segment(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::PlayerBatting | EntityKind::TeamBatting => "bat",
        EntityKind::PlayerPitching | EntityKind::TeamPitching => "pit",
    }
}

// team=0 selects player rows; 0,ts selects team-season aggregates.
fn team_segment(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::PlayerBatting | EntityKind::PlayerPitching => "0",
        EntityKind::TeamBatting | EntityKind::TeamPitching => "0,ts",
    }
}

#[derive(Debug, Deserialize)]
struct LeadersResponse {
    data: Vec<RawRow>,
}
