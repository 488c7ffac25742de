//! The parametrized page template the dashboard pages are stamped from.

use std::collections::BTreeMap;

use serde::Serialize;

use dugout_stats::project;
use dugout_stats::project::ChartMode;
use dugout_stats::select::Defaults;
use dugout_stats::select::SelectionState;
use dugout_stats::table::EntityKind;
use dugout_stats::table::StatTable;

use crate::chart;
use crate::chart::ChartSpec;
use crate::chart::DEFAULT_BAR_COLOR;
use crate::colors;
use crate::error::Result;

/// The configuration of one dashboard page.
///
/// Every chart page is an instance of this one template; the per-page
/// differences are data, not code.
#[derive(Debug, Clone)]
pub struct PageSpec {
    /// The route slug, also the page and data file stem.
    pub slug: &'static str,
    /// The label of the page's navigation link.
    pub nav_label: &'static str,
    /// The page heading.
    pub title: &'static str,
    /// The descriptive paragraph under the heading.
    pub blurb: &'static str,
    /// The heading directly above the chart.
    pub chart_heading: &'static str,
    /// The dataset the page is built from.
    pub entity_kind: EntityKind,
    /// The dropdowns the page exposes and their defaults.
    pub controls: PageControls,
    /// Whether bars are painted with the club color lookup.
    pub team_colors: bool,
}

/// The user controls of a page, by chart shape.
#[derive(Debug, Clone)]
pub enum PageControls {
    /// A statistic dropdown and an entity multi-select driving a
    /// horizontal bar chart over the selected entities.
    Comparison {
        stat_prompt: &'static str,
        entity_prompt: &'static str,
        y_axis_title: &'static str,
        default_stat: &'static str,
        default_entity: &'static str,
    },
    /// Two statistic dropdowns driving a scatter chart over every
    /// entity in the table.
    Correlation {
        x_prompt: &'static str,
        y_prompt: &'static str,
        default_x: &'static str,
        default_y: &'static str,
    },
}

/// One page ready for generation: its configuration and its loaded
/// season table.
pub struct Page {
    pub spec: PageSpec,
    pub table: StatTable,
}

impl Page {
    pub fn new(spec: PageSpec, table: StatTable) -> Self {
        Self { spec, table }
    }
}

impl PageSpec {
    pub(crate) fn chart_mode(&self) -> ChartMode {
        match self.controls {
            PageControls::Comparison { .. } => ChartMode::Comparison,
            PageControls::Correlation { .. } => ChartMode::Correlation,
        }
    }

    /// The selection the page opens with, before any user input.
    pub(crate) fn default_selection(&self) -> SelectionState {
        let mut selection = SelectionState::new();

        match self.controls {
            PageControls::Comparison {
                default_stat,
                default_entity,
                ..
            } => {
                selection.select_column(default_stat);
                selection.select_entity(default_entity);
            }
            PageControls::Correlation {
                default_x,
                default_y,
                ..
            } => {
                selection.select_column(default_x);
                selection.select_column(default_y);
            }
        }

        selection
    }

    fn defaults(&self) -> Defaults {
        match self.controls {
            PageControls::Comparison {
                default_stat,
                default_entity,
                ..
            } => Defaults::new(default_stat, default_entity),
            // A correlation projection covers every entity, so its
            // entity default is never consulted.
            PageControls::Correlation { default_x, .. } => Defaults::new(default_x, ""),
        }
    }

    /// The figure the page opens with: the default selection projected
    /// through the table and styled for the page's chart shape.
    pub(crate) fn figure(&self, table: &StatTable) -> Result<ChartSpec> {
        let selection = self.default_selection();
        let defaults = self.defaults();
        let frame = project::project(table, &selection, &defaults, self.chart_mode())?;

        match &self.controls {
            PageControls::Comparison { y_axis_title, .. } => {
                let colors = self.team_colors.then(|| {
                    frame
                        .rows
                        .iter()
                        .map(|row| colors::team_color(&row.key).to_owned())
                        .collect()
                });

                Ok(chart::bar_chart(&frame, y_axis_title, colors))
            }
            PageControls::Correlation { .. } => Ok(chart::scatter_chart(&frame)),
        }
    }
}

/// The page state handed to the generated page's script: the initial
/// figure plus everything the script needs to rebuild the data arrays
/// on a dropdown change.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageConfig {
    mode: &'static str,
    figure: ChartSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_stat: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_entity: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_x: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_y: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    team_colors: Option<BTreeMap<&'static str, &'static str>>,
    default_color: &'static str,
}

pub(crate) fn page_config(spec: &PageSpec, table: &StatTable) -> Result<PageConfig> {
    let figure = spec.figure(table)?;

    let config = match spec.controls {
        PageControls::Comparison {
            default_stat,
            default_entity,
            ..
        } => PageConfig {
            mode: "bar",
            figure,
            default_stat: Some(default_stat),
            default_entity: Some(default_entity),
            default_x: None,
            default_y: None,
            team_colors: spec
                .team_colors
                .then(|| colors::TEAM_COLORS.iter().copied().collect()),
            default_color: DEFAULT_BAR_COLOR,
        },
        PageControls::Correlation {
            default_x,
            default_y,
            ..
        } => PageConfig {
            mode: "scatter",
            figure,
            default_stat: None,
            default_entity: None,
            default_x: Some(default_x),
            default_y: Some(default_y),
            team_colors: None,
            default_color: DEFAULT_BAR_COLOR,
        },
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::Value;
    use serde_json::json;

    use dugout_stats::error::ProjectionError;
    use dugout_stats::fetch::RawRow;
    use dugout_stats::table::Keying;
    use dugout_stats::table::TableSpec;
    use dugout_stats::table::StatTable;

    use crate::error::VisError;

    const COLUMNS: &[(&str, &str)] = &[
        ("W", "Wins (W)"),
        ("ERA", "Earned Run Average (ERA)"),
    ];

    fn raw_row(team: &str, wins: f64, era: f64) -> RawRow {
        let row = json!({
            "Team": team,
            "W": wins,
            "ERA": era,
        });

        match row {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn team_table() -> StatTable {
        let spec = TableSpec {
            columns: COLUMNS,
            keying: Keying::FranchiseName,
        };
        let rows = vec![raw_row("HOU", 106.0, 2.90), raw_row("NYY", 99.0, 3.30)];

        StatTable::from_rows(rows, &spec).unwrap()
    }

    fn team_pitching_spec() -> PageSpec {
        PageSpec {
            slug: "team-pitching",
            nav_label: "Team Pitching",
            title: "MLB Team Pitching Results (2022 Season)",
            blurb: "",
            chart_heading: "Team Pitching Data Bar Chart",
            entity_kind: EntityKind::TeamPitching,
            controls: PageControls::Comparison {
                stat_prompt: "",
                entity_prompt: "",
                y_axis_title: "Team",
                default_stat: "Wins (W)",
                default_entity: "Houston Astros",
            },
            team_colors: true,
        }
    }

    #[test]
    fn figure_projects_the_default_selection() {
        let spec = team_pitching_spec();

        let figure = spec.figure(&team_table()).unwrap();
        let json = serde_json::to_value(&figure).unwrap();

        assert_eq!(json["traces"][0]["y"], json!(["Houston Astros"]));
        assert_eq!(json["traces"][0]["x"], json!([106.0]));
        assert_eq!(json["layout"]["xaxis"]["title"]["text"], "Wins (W)");
    }

    #[test]
    fn figure_paints_bars_with_club_colors() {
        let spec = team_pitching_spec();

        let figure = spec.figure(&team_table()).unwrap();
        let json = serde_json::to_value(&figure).unwrap();

        assert_eq!(json["traces"][0]["marker"]["color"], json!(["#EB6E1F"]));
    }

    #[test]
    fn figure_fails_when_the_default_entity_is_not_in_the_table() {
        let mut spec = team_pitching_spec();
        spec.controls = PageControls::Comparison {
            stat_prompt: "",
            entity_prompt: "",
            y_axis_title: "Team",
            default_stat: "Wins (W)",
            default_entity: "Montreal Expos",
        };

        let error = spec.figure(&team_table()).unwrap_err();

        assert!(matches!(
            error,
            VisError::Projection(ProjectionError::SelectionOutOfRange { name })
                if name == "Montreal Expos"
        ));
    }

    #[test]
    fn page_config_carries_the_club_color_table() {
        let spec = team_pitching_spec();

        let config = page_config(&spec, &team_table()).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["mode"], "bar");
        assert_eq!(json["defaultStat"], "Wins (W)");
        assert_eq!(json["defaultEntity"], "Houston Astros");
        assert_eq!(json["defaultColor"], "darkblue");
        assert_eq!(json["teamColors"]["New York Yankees"], "#003087");
    }
}
