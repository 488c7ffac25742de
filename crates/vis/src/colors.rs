//! The fixed lookup from franchise names to club colors.

use crate::chart::DEFAULT_BAR_COLOR;

pub(crate) const TEAM_COLORS: [(&str, &str); 30] = [
    ("Arizona Diamondbacks", "#A71930"),
    ("Atlanta Braves", "#CE1141"),
    ("Baltimore Orioles", "#DF4601"),
    ("Boston Red Sox", "#BD3039"),
    ("Chicago Cubs", "#0E3386"),
    ("Chicago White Sox", "#27251F"),
    ("Cincinnati Reds", "#C6011F"),
    ("Cleveland Guardians", "#00385D"),
    ("Colorado Rockies", "#33006F"),
    ("Detroit Tigers", "#0C2340"),
    ("Houston Astros", "#EB6E1F"),
    ("Kansas City Royals", "#004687"),
    ("Los Angeles Angels", "#BA0021"),
    ("Los Angeles Dodgers", "#005A9C"),
    ("Miami Marlins", "#00A3E0"),
    ("Milwaukee Brewers", "#12284B"),
    ("Minnesota Twins", "#002B5C"),
    ("New York Mets", "#002D72"),
    ("New York Yankees", "#003087"),
    ("Oakland Athletics", "#003831"),
    ("Philadelphia Phillies", "#E81828"),
    ("Pittsburgh Pirates", "#FDB827"),
    ("San Diego Padres", "#2F241D"),
    ("Seattle Mariners", "#0C2C56"),
    ("San Francisco Giants", "#FD5A1E"),
    ("St. Louis Cardinals", "#C41E3A"),
    ("Tampa Bay Rays", "#092C5C"),
    ("Texas Rangers", "#003278"),
    ("Toronto Blue Jays", "#134A8E"),
    ("Washington Nationals", "#AB0003"),
];

/// The club color for a franchise, or the default bar color for
/// entities outside the fixed table.
pub(crate) fn team_color(franchise: &str) -> &'static str {
    TEAM_COLORS
        .iter()
        .find(|(name, _)| *name == franchise)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_BAR_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_color_resolves_a_known_franchise() {
        assert_eq!(team_color("New York Yankees"), "#003087");
    }

    #[test]
    fn team_color_falls_back_to_the_default_bar_color() {
        assert_eq!(team_color("Montreal Expos"), DEFAULT_BAR_COLOR);
    }

    #[test]
    fn the_color_table_covers_thirty_franchises_uniquely() {
        assert_eq!(TEAM_COLORS.len(), 30);

        for (index, (name, _)) in TEAM_COLORS.iter().enumerate() {
            let duplicates = TEAM_COLORS[index + 1..]
                .iter()
                .filter(|(other, _)| other == name)
                .count();

            assert_eq!(duplicates, 0, "duplicate franchise: {name}");
        }
    }
}
