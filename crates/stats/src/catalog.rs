//! The per-entity-kind column catalogs.
//!
//! Each catalog is the ordered allow-list of raw source columns paired
//! with the display label the dashboard shows for it. Raw columns not
//! listed here are dropped when a table is constructed.

use crate::table::EntityKind;
use crate::table::Keying;
use crate::table::TableSpec;

/// The table shape for one entity kind.
pub fn table_spec(kind: EntityKind) -> TableSpec {
    match kind {
        EntityKind::PlayerBatting => TableSpec {
            columns: PLAYER_BATTING,
            keying: Keying::PlayerTeam,
        },
        EntityKind::PlayerPitching => TableSpec {
            columns: PLAYER_PITCHING,
            keying: Keying::PlayerTeam,
        },
        EntityKind::TeamBatting => TableSpec {
            columns: TEAM_BATTING,
            keying: Keying::TeamCode,
        },
        EntityKind::TeamPitching => TableSpec {
            columns: TEAM_PITCHING,
            keying: Keying::FranchiseName,
        },
    }
}

const PLAYER_BATTING: &[(&str, &str)] = &[
    ("G", "Games Played (G)"),
    ("PA", "Plate Appearances (PA)"),
    ("H", "Hits (H)"),
    ("2B", "Doubles (2B)"),
    ("3B", "Triples (3B)"),
    ("HR", "Home Runs (HR)"),
    ("R", "Runs Scored (R)"),
    ("RBI", "Runs Batted In (RBI)"),
    ("SO", "Strikeouts (SO)"),
    ("BB", "Walks (BB)"),
    ("IBB", "Intentional Walks (IBB)"),
    ("HBP", "Hit By Pitches (HBP)"),
    ("SB", "Stolen Bases"),
    ("AVG", "Batting Average (AVG)"),
    ("OBP", "On-Base Percentage (OBP)"),
    ("SLG", "Slugging Percentage (SLG)"),
    ("OPS", "On-Base Plus Slugging (OPS)"),
    ("wOBA", "Weighted On-Base Average (wOBA)"),
    ("wRC", "Weighted Runs Created (wRC)"),
    ("WAR", "Wins Above Replacement (WAR)"),
];

const PLAYER_PITCHING: &[(&str, &str)] = &[
    ("W", "Wins (W)"),
    ("L", "Losses (L)"),
    ("G", "Games Played (G)"),
    ("IP", "Innings Pitched (IP)"),
    ("TBF", "Total Batters Faced (TBF)"),
    ("H", "Hits (H)"),
    ("R", "Runs Scored Against (R)"),
    ("ER", "Earned Runs (ER)"),
    ("HR", "Home Runs Allowed (HR)"),
    ("BB", "Walks (BB)"),
    ("HBP", "Batters Hit By Pitches (HBP)"),
    ("SO", "Strikeouts (SO)"),
    ("K/9", "Number of Strikeouts Per 9 Innings (K/9)"),
    ("BB/9", "Number of Walks Per 9 Innings (BB/9)"),
    ("K/BB", "Strikeout to Walk Ratio (K/BB)"),
    ("AVG", "Opponents' Batting Average (AVG)"),
    ("ERA", "Earned Run Average (ERA)"),
    ("WHIP", "Walks And Hits Per Inning Pitched (WHIP)"),
    ("BABIP", "Batting Average on Balls in Play (BABIP)"),
    ("FIP", "Fielding Independent Pitching (FIP)"),
    ("WAR", "Wins Above Replacement (WAR)"),
];

const TEAM_BATTING: &[(&str, &str)] = &[
    ("G", "Games Played (G)"),
    ("PA", "Plate Appearances (PA)"),
    ("H", "Hits (H)"),
    ("1B", "Singles (1B)"),
    ("2B", "Doubles (2B)"),
    ("3B", "Triples (3B)"),
    ("HR", "Home Runs (HR)"),
    ("R", "Runs Scored (R)"),
    ("RBI", "Runs Batted In (RBI)"),
    ("SO", "Strikeouts (SO)"),
    ("K%", "Strikeout Percentage (K%)"),
    ("BB", "Walks (BB)"),
    ("BB%", "Walk Percentage (BB%)"),
    ("IBB", "Intentional Walks (IBB)"),
    ("BB/K", "Walk-to-Strikeout Ratio (BB/K)"),
    ("HBP", "Hit By Pitches (HBP)"),
    ("SF", "Sacrifice Flies (SF)"),
    ("SH", "Sacrifice Hits (Bunts)"),
    ("SB", "Stolen Bases"),
    ("CS", "Caught Stealing (CS)"),
    ("AVG", "Batting Average (AVG)"),
    ("OBP", "On-Base Percentage (OBP)"),
    ("SLG", "Slugging Percentage (SLG)"),
    ("OPS", "On-Base Plus Slugging (OPS)"),
    ("BABIP", "Batting Average on Balls in Play (BABIP)"),
    ("LD%", "Line Drive Percentage (LD%)"),
    ("GB%", "Ground Ball Percentage (GB%)"),
    ("FB%", "Fly Ball Percentage (FB%)"),
    ("wOBA", "Weighted On-Base Average (wOBA)"),
    ("wRC", "Weighted Runs Created (wRC)"),
    ("WAR", "Wins Above Replacement (WAR)"),
];

const TEAM_PITCHING: &[(&str, &str)] = &[
    ("W", "Wins (W)"),
    ("L", "Losses (L)"),
    ("SV", "Saves (SV)"),
    ("G", "Games Played (G)"),
    ("GS", "Games Started (GS)"),
    ("IP", "Innings Pitched (IP)"),
    ("TBF", "Total Batters Faced (TBF)"),
    ("H", "Hits (H)"),
    ("R", "Runs Scored Against (R)"),
    ("ER", "Earned Runs (ER)"),
    ("HR", "Home Runs Allowed (HR)"),
    ("BB", "Walks (BB)"),
    ("IBB", "Intentional Walks (IBB)"),
    ("HBP", "Batters Hit By Pitches (HBP)"),
    ("SO", "Strikeouts (SO)"),
    ("K/9", "Number of Strikeouts Per 9 Innings (K/9)"),
    ("BB/9", "Number of Walks Per 9 Innings (BB/9)"),
    ("K/BB", "Strikeout to Walk Ratio (K/BB)"),
    ("HR/9", "Home Runs Per 9 Innings (HR/9)"),
    ("AVG", "Opponents' Batting Average (AVG)"),
    ("ERA", "Earned Run Average (ERA)"),
    ("WHIP", "Walks And Hits Per Inning Pitched (WHIP)"),
    ("BABIP", "Batting Average on Balls in Play (BABIP)"),
    ("LOB%", "Left On Base Percentage (LOB%)"),
    ("FIP", "Fielding Independent Pitching (FIP)"),
    ("WAR", "Wins Above Replacement (WAR)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [EntityKind; 4] = [
        EntityKind::PlayerBatting,
        EntityKind::PlayerPitching,
        EntityKind::TeamBatting,
        EntityKind::TeamPitching,
    ];

    #[test]
    fn every_catalog_is_nonempty() {
        for kind in KINDS {
            assert!(!table_spec(kind).columns.is_empty());
        }
    }

    #[test]
    fn every_catalog_has_unique_raw_identifiers_and_labels() {
        for kind in KINDS {
            let columns = table_spec(kind).columns;

            for (index, (raw, label)) in columns.iter().enumerate() {
                for (other_raw, other_label) in &columns[index + 1..] {
                    assert_ne!(raw, other_raw, "duplicate raw column in {kind:?}");
                    assert_ne!(label, other_label, "duplicate label in {kind:?}");
                }
            }
        }
    }

    #[test]
    fn labels_carry_the_raw_abbreviation_suffix() {
        // The original dashboard leaves the abbreviation off a couple of
        // labels; those are carried verbatim.
        let exceptions = ["SB", "SH"];

        for kind in KINDS {
            for (raw, label) in table_spec(kind).columns {
                if exceptions.contains(raw) {
                    continue;
                }

                assert!(
                    label.ends_with(&format!("({raw})")),
                    "label {label:?} does not carry its {raw:?} abbreviation"
                );
            }
        }
    }

    #[test]
    fn player_batting_keeps_the_twenty_original_measures() {
        assert_eq!(table_spec(EntityKind::PlayerBatting).columns.len(), 20);
        assert_eq!(table_spec(EntityKind::PlayerPitching).columns.len(), 21);
    }
}
