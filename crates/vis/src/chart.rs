//! Plotly figure specs for the dashboard charts.
//!
//! A [`ChartSpec`] is the serialized subset of the Plotly figure schema
//! the generated pages feed to `Plotly.newPlot`. The styling constants
//! are fixed; only the data arrays and axis titles vary per page.

use serde::Serialize;

use dugout_stats::project::ChartableFrame;
use dugout_stats::table::StatValue;

pub(crate) const DEFAULT_BAR_COLOR: &str = "darkblue";

const SCATTER_MARKER_COLOR: &str = "red";
const SCATTER_MARKER_SIZE: u32 = 11;
const AXIS_COLOR: &str = "black";
const TRANSPARENT: &str = "rgba(0,0,0,0)";
const AXIS_TITLE_FONT_SIZE: u32 = 18;
const TICK_FONT_SIZE: u32 = 14;
const BAR_TEXT_FONT_SIZE: u32 = 14;
const MULTI_STAT_AXIS_TITLE: &str = "Value";

#[derive(Debug, Serialize)]
pub(crate) struct ChartSpec {
    pub traces: Vec<Trace>,
    pub layout: PlotLayout,
}

#[derive(Debug, Serialize)]
pub(crate) struct Trace {
    #[serde(rename = "type")]
    kind: TraceKind,
    x: Vec<StatValue>,
    y: Vec<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<Vec<StatValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    textfont: Option<TextFont>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hovertext: Option<Vec<String>>,
    marker: Marker,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum TraceKind {
    Bar,
    Scatter,
}

#[derive(Debug, Serialize)]
enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Mode {
    Markers,
}

#[derive(Debug, Serialize)]
struct TextFont {
    size: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct Marker {
    color: MarkerColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u32>,
    line: MarkerLine,
}

/// A single color for the whole trace, or one color per bar.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MarkerColor {
    Uniform(&'static str),
    PerPoint(Vec<String>),
}

#[derive(Debug, Serialize)]
struct MarkerLine {
    color: &'static str,
    width: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct PlotLayout {
    xaxis: Axis,
    yaxis: Axis,
    paper_bgcolor: &'static str,
    plot_bgcolor: &'static str,
    margin: Margin,
    showlegend: bool,
}

#[derive(Debug, Serialize)]
struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<AxisTitle>,
    tickfont: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gridwidth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gridcolor: Option<&'static str>,
    showline: bool,
    linewidth: f64,
    linecolor: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    categoryorder: Option<&'static str>,
}

impl Axis {
    fn new(title: Option<String>) -> Self {
        Self {
            title: title.map(AxisTitle::new),
            tickfont: Font::tick(),
            showgrid: None,
            gridwidth: None,
            gridcolor: None,
            showline: true,
            linewidth: 1.0,
            linecolor: AXIS_COLOR,
            categoryorder: None,
        }
    }

    fn with_grid(mut self, width: f64) -> Self {
        self.showgrid = Some(true);
        self.gridwidth = Some(width);
        self.gridcolor = Some(AXIS_COLOR);
        self
    }
}

#[derive(Debug, Serialize)]
struct AxisTitle {
    text: String,
    font: Font,
}

impl AxisTitle {
    fn new(text: String) -> Self {
        Self {
            text,
            font: Font::axis_title(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Font {
    size: u32,
    color: &'static str,
}

impl Font {
    fn axis_title() -> Self {
        Self {
            size: AXIS_TITLE_FONT_SIZE,
            color: AXIS_COLOR,
        }
    }

    fn tick() -> Self {
        Self {
            size: TICK_FONT_SIZE,
            color: AXIS_COLOR,
        }
    }
}

#[derive(Debug, Serialize)]
struct Margin {
    l: u32,
    r: u32,
    t: u32,
    b: u32,
}

impl PlotLayout {
    fn new(xaxis: Axis, yaxis: Axis) -> Self {
        Self {
            xaxis,
            yaxis,
            paper_bgcolor: TRANSPARENT,
            plot_bgcolor: TRANSPARENT,
            margin: Margin {
                l: 0,
                r: 0,
                t: 0,
                b: 0,
            },
            showlegend: false,
        }
    }
}

/// Build the horizontal bar figure for a comparison frame.
///
/// One trace per frame column, entity keys on the y axis, values on the
/// x axis with value labels on the bars. When `colors` is given it
/// carries one color per frame row; otherwise every bar is dark blue.
pub(crate) fn bar_chart(
    frame: &ChartableFrame,
    y_axis_title: &str,
    colors: Option<Vec<String>>,
) -> ChartSpec {
    let keys: Vec<StatValue> = frame
        .rows
        .iter()
        .map(|row| StatValue::Text(row.key.clone()))
        .collect();

    let traces = frame
        .columns
        .iter()
        .enumerate()
        .map(|(index, _)| {
            let values: Vec<StatValue> = frame
                .rows
                .iter()
                .map(|row| row.values[index].clone())
                .collect();

            Trace {
                kind: TraceKind::Bar,
                x: values.clone(),
                y: keys.clone(),
                orientation: Some(Orientation::Horizontal),
                mode: None,
                text: Some(values),
                textfont: Some(TextFont {
                    size: BAR_TEXT_FONT_SIZE,
                }),
                hovertext: None,
                marker: Marker {
                    color: match &colors {
                        Some(colors) => MarkerColor::PerPoint(colors.clone()),
                        None => MarkerColor::Uniform(DEFAULT_BAR_COLOR),
                    },
                    size: None,
                    line: MarkerLine {
                        color: AXIS_COLOR,
                        width: 0.5,
                    },
                },
            }
        })
        .collect();

    let x_axis_title = match frame.columns.as_slice() {
        [only] => only.clone(),
        _ => MULTI_STAT_AXIS_TITLE.to_owned(),
    };

    let xaxis = Axis::new(Some(x_axis_title)).with_grid(1.0);
    let mut yaxis = Axis::new(Some(y_axis_title.to_owned()));
    // Display order of the bars is a rendering concern; the frame rows
    // stay in selection order.
    yaxis.categoryorder = Some("total ascending");

    ChartSpec {
        traces,
        layout: PlotLayout::new(xaxis, yaxis),
    }
}

/// Build the scatter figure for a correlation frame.
///
/// The frame's first column lands on the x axis, the second on the y
/// axis, and the entity keys become the hover names.
pub(crate) fn scatter_chart(frame: &ChartableFrame) -> ChartSpec {
    let x: Vec<StatValue> = frame.rows.iter().map(|row| row.values[0].clone()).collect();
    let y: Vec<StatValue> = frame.rows.iter().map(|row| row.values[1].clone()).collect();
    let hovertext: Vec<String> = frame.rows.iter().map(|row| row.key.clone()).collect();

    let trace = Trace {
        kind: TraceKind::Scatter,
        x,
        y,
        orientation: None,
        mode: Some(Mode::Markers),
        text: None,
        textfont: None,
        hovertext: Some(hovertext),
        marker: Marker {
            color: MarkerColor::Uniform(SCATTER_MARKER_COLOR),
            size: Some(SCATTER_MARKER_SIZE),
            line: MarkerLine {
                color: AXIS_COLOR,
                width: 1.0,
            },
        },
    };

    let xaxis = Axis::new(Some(frame.columns[0].clone())).with_grid(0.5);
    let yaxis = Axis::new(Some(frame.columns[1].clone())).with_grid(1.0);

    ChartSpec {
        traces: vec![trace],
        layout: PlotLayout::new(xaxis, yaxis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::Value;
    use serde_json::json;

    use dugout_stats::project::FrameRow;

    fn comparison_frame() -> ChartableFrame {
        ChartableFrame {
            columns: vec![String::from("Home Runs (HR)")],
            rows: vec![
                FrameRow {
                    key: String::from("Aaron Judge (NYY)"),
                    values: vec![StatValue::Number(62.0)],
                },
                FrameRow {
                    key: String::from("Yordan Alvarez (HOU)"),
                    values: vec![StatValue::Number(37.0)],
                },
            ],
        }
    }

    fn correlation_frame() -> ChartableFrame {
        ChartableFrame {
            columns: vec![
                String::from("Innings Pitched (IP)"),
                String::from("Earned Run Average (ERA)"),
            ],
            rows: vec![
                FrameRow {
                    key: String::from("Justin Verlander (HOU)"),
                    values: vec![StatValue::Number(175.0), StatValue::Number(1.75)],
                },
                FrameRow {
                    key: String::from("Sandy Alcantara (MIA)"),
                    values: vec![StatValue::Number(228.2), StatValue::Number(2.28)],
                },
            ],
        }
    }

    fn to_json(spec: &ChartSpec) -> Value {
        serde_json::to_value(spec).unwrap()
    }

    #[test]
    fn bar_chart_builds_a_horizontal_bar_trace() {
        let spec = bar_chart(&comparison_frame(), "Player(s) (Team Abbreviation)", None);
        let json = to_json(&spec);

        assert_eq!(json["traces"][0]["type"], "bar");
        assert_eq!(json["traces"][0]["orientation"], "h");
        assert_eq!(json["traces"][0]["x"], json!([62.0, 37.0]));
        assert_eq!(
            json["traces"][0]["y"],
            json!(["Aaron Judge (NYY)", "Yordan Alvarez (HOU)"])
        );
        assert_eq!(json["traces"][0]["text"], json!([62.0, 37.0]));
        assert_eq!(json["traces"][0]["marker"]["color"], "darkblue");
    }

    #[test]
    fn bar_chart_orders_categories_by_ascending_total() {
        let spec = bar_chart(&comparison_frame(), "Team", None);
        let json = to_json(&spec);

        assert_eq!(json["layout"]["yaxis"]["categoryorder"], "total ascending");
        assert_eq!(json["layout"]["yaxis"]["title"]["text"], "Team");
        assert_eq!(json["layout"]["xaxis"]["title"]["text"], "Home Runs (HR)");
    }

    #[test]
    fn bar_chart_carries_one_color_per_bar_when_given() {
        let colors = vec![String::from("#003087"), String::from("#002D62")];

        let spec = bar_chart(&comparison_frame(), "Team", Some(colors));
        let json = to_json(&spec);

        assert_eq!(
            json["traces"][0]["marker"]["color"],
            json!(["#003087", "#002D62"])
        );
    }

    #[test]
    fn bar_chart_hides_the_legend_and_backgrounds() {
        let spec = bar_chart(&comparison_frame(), "Team", None);
        let json = to_json(&spec);

        assert_eq!(json["layout"]["showlegend"], false);
        assert_eq!(json["layout"]["paper_bgcolor"], "rgba(0,0,0,0)");
        assert_eq!(json["layout"]["plot_bgcolor"], "rgba(0,0,0,0)");
    }

    #[test]
    fn scatter_chart_plots_markers_with_hover_names() {
        let spec = scatter_chart(&correlation_frame());
        let json = to_json(&spec);

        assert_eq!(json["traces"][0]["type"], "scatter");
        assert_eq!(json["traces"][0]["mode"], "markers");
        assert_eq!(json["traces"][0]["x"], json!([175.0, 228.2]));
        assert_eq!(json["traces"][0]["y"], json!([1.75, 2.28]));
        assert_eq!(
            json["traces"][0]["hovertext"],
            json!(["Justin Verlander (HOU)", "Sandy Alcantara (MIA)"])
        );
        assert_eq!(json["traces"][0]["marker"]["color"], "red");
        assert_eq!(json["traces"][0]["marker"]["size"], 11);
    }

    #[test]
    fn scatter_chart_titles_the_axes_with_the_selected_stats() {
        let spec = scatter_chart(&correlation_frame());
        let json = to_json(&spec);

        assert_eq!(
            json["layout"]["xaxis"]["title"]["text"],
            "Innings Pitched (IP)"
        );
        assert_eq!(
            json["layout"]["yaxis"]["title"]["text"],
            "Earned Run Average (ERA)"
        );
    }
}
