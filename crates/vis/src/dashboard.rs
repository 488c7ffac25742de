//! The fixed page set and copy of the 2022 season dashboard.

use dugout_stats::table::EntityKind;

use crate::page::PageControls;
use crate::page::PageSpec;
use crate::template::NavItem;

pub(crate) const BRAND: &str = "2022 MLB Season Dashboard";

pub(crate) const HOME_TITLE: &str = "MLB Comparison Dashboard (2022 Season)";

pub(crate) const HOME_SUBTITLE: &str =
    "Batting and pitching results for every qualified player and club";

pub(crate) const HOME_WELCOME: &str = "Welcome to the Major League Baseball (MLB) Comparison \
    Dashboard! Inside this dashboard, you'll discover multiple graphs and various statistical \
    results coming from the 2022 MLB season. Player pages compare the batters and pitchers that \
    qualified for the season's awards, and team pages compare the thirty clubs. More information \
    about each graph and its results can be found on the other pages of this dashboard. Enjoy \
    using this MLB dashboard!";

/// The dashboard's chart pages, in navigation order.
pub fn pages() -> Vec<PageSpec> {
    vec![
        PageSpec {
            slug: "player-batting",
            nav_label: "Player Batting",
            title: "MLB Player Batting Results (2022 Season)",
            blurb: "This is the page to be at to review MLB batters' results from the 2022 MLB \
                Season! 20 statistical measures and 130 MLB players combine on this page to \
                create a comparison bar chart among players that qualified for the 2022 MLB \
                batting title. To qualify for this achievement, players must have had at least \
                3.1 plate appearances per game (or at least 502 plate appearances during the \
                entire season). To operate this bar chart, simply select the statistical measure \
                that you'd like to compare players with and choose what players you'd like to \
                review on the chart below!",
            chart_heading: "Player Batting Data Bar Chart",
            entity_kind: EntityKind::PlayerBatting,
            controls: PageControls::Comparison {
                stat_prompt: "Please select a statistical measure to compare players with.",
                entity_prompt: "Please select a player(s) you'd like to review above.",
                y_axis_title: "Player(s) (Team Abbreviation)",
                default_stat: "Home Runs (HR)",
                default_entity: "Aaron Judge (NYY)",
            },
            team_colors: false,
        },
        PageSpec {
            slug: "player-pitching",
            nav_label: "Player Pitching",
            title: "MLB Pitching Results (2022 Season)",
            blurb: "This page is the destination for reviewing MLB pitchers' results from the \
                2022 MLB Season! Included in the chart below is more than 20 statistical \
                measures that determine how pitchers performed during play last season. Also \
                included is 45 plotted points that represent the 45 MLB pitchers that qualified \
                for 2022 MLB pitching awards. To qualify to be a pitcher on this graph, pitchers \
                must have pitched at least 1 inning per game (or at least 162 innings during the \
                entire season) last season. To make this scatter plot work, select two \
                statistical measures (for both axes) that you'd like to use to compare pitchers \
                with on this chart!",
            chart_heading: "Pitching Data Scatter Plot",
            entity_kind: EntityKind::PlayerPitching,
            controls: PageControls::Correlation {
                x_prompt: "Please select a statistical measure for the X-axis to compare players \
                    with.",
                y_prompt: "Please select a statistical measure for the Y-axis to compare players \
                    with.",
                default_x: "Innings Pitched (IP)",
                default_y: "Earned Run Average (ERA)",
            },
            team_colors: false,
        },
        PageSpec {
            slug: "team-batting",
            nav_label: "Team Batting",
            title: "MLB Team Batting Results (2022 Season)",
            blurb: "This is the page to be at to review MLB teams' batting results from the 2022 \
                MLB Season! More than 30 statistical measures and all 30 MLB clubs combine on \
                this page to create a comparison bar chart among the league's offenses. Every \
                value is the club's season aggregate over all of its batters. To operate this \
                bar chart, simply select the statistical measure that you'd like to compare \
                teams with and choose what teams you'd like to review on the chart below!",
            chart_heading: "Team Batting Data Bar Chart",
            entity_kind: EntityKind::TeamBatting,
            controls: PageControls::Comparison {
                stat_prompt: "Please select a statistical measure to compare teams with.",
                entity_prompt: "Please select a team(s) you'd like to review above.",
                y_axis_title: "Team Abbreviation",
                default_stat: "Home Runs (HR)",
                default_entity: "HOU",
            },
            team_colors: false,
        },
        PageSpec {
            slug: "team-pitching",
            nav_label: "Team Pitching",
            title: "MLB Team Pitching Results (2022 Season)",
            blurb: "This page is the destination for reviewing MLB teams' pitching results from \
                the 2022 MLB Season! 26 statistical measures and all 30 MLB clubs combine on \
                this page to create a comparison bar chart among the league's pitching staffs. \
                Every value is the club's season aggregate over all of its pitchers, and every \
                bar wears its club's color. To operate this bar chart, simply select the \
                statistical measure that you'd like to compare teams with and choose what teams \
                you'd like to review on the chart below!",
            chart_heading: "Team Pitching Data Bar Chart",
            entity_kind: EntityKind::TeamPitching,
            controls: PageControls::Comparison {
                stat_prompt: "Please select a statistical measure to compare teams with.",
                entity_prompt: "Please select a team(s) you'd like to review above.",
                y_axis_title: "Team",
                default_stat: "Wins (W)",
                default_entity: "Houston Astros",
            },
            team_colors: true,
        },
    ]
}

/// The navigation links as seen from the index page.
pub(crate) fn nav_from_index() -> Vec<NavItem> {
    let mut nav = vec![NavItem::new(String::from("index.html"), "Home")];

    for page in pages() {
        nav.push(NavItem::new(
            format!("pages/{slug}.html", slug = page.slug),
            page.nav_label,
        ));
    }

    nav
}

/// The navigation links as seen from a chart page.
pub(crate) fn nav_from_page() -> Vec<NavItem> {
    let mut nav = vec![NavItem::new(String::from("../index.html"), "Home")];

    for page in pages() {
        nav.push(NavItem::new(
            format!("{slug}.html", slug = page.slug),
            page.nav_label,
        ));
    }

    nav
}
