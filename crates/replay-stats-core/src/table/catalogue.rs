//! The fixed sections of the overall comparison table

use super::{FieldSpec, SectionSpec, ValueFormat};
use crate::highlight::{first_component_higher, integer_part_higher, Highlight};

const OVERALL: &str = "overall";
const ACTION_COUNTS: &str = "actionCounts";

/// Offense, Defense, Neutral and General, in display order
pub fn overall_sections() -> Vec<SectionSpec> {
    vec![
        offense_section(),
        defense_section(),
        neutral_section(),
        general_section(),
    ]
}

pub fn offense_section() -> SectionSpec {
    SectionSpec::new(
        "Offense",
        vec![
            FieldSpec::values("Kills", OVERALL, &["killCount"])
                .highlight(Highlight::Custom(first_component_higher)),
            FieldSpec::values("Damage Done", OVERALL, &["totalDamage"])
                .fixed(1)
                .highlight(Highlight::Custom(integer_part_higher)),
            FieldSpec::ratio(
                "Opening Conversion Rate",
                OVERALL,
                "successfulConversions",
                ValueFormat::PercentFraction,
            )
            .highlight(Highlight::HigherWins),
            FieldSpec::ratio(
                "Openings / Kill",
                OVERALL,
                "openingsPerKill",
                ValueFormat::SimpleRatio,
            )
            .highlight(Highlight::LowerWins),
            FieldSpec::ratio(
                "Damage / Opening",
                OVERALL,
                "damagePerOpening",
                ValueFormat::SimpleRatio,
            )
            .highlight(Highlight::HigherWins),
        ],
    )
}

pub fn defense_section() -> SectionSpec {
    SectionSpec::new(
        "Defense",
        vec![FieldSpec::values(
            "Actions (Roll / Air Dodge / Spot Dodge)",
            ACTION_COUNTS,
            &["rollCount", "airDodgeCount", "spotDodgeCount"],
        )],
    )
}

pub fn neutral_section() -> SectionSpec {
    let opening = |header: &str, field: &str| {
        FieldSpec::ratio(header, OVERALL, field, ValueFormat::CountPercent)
            .highlight(Highlight::HigherCountWins)
    };

    SectionSpec::new(
        "Neutral",
        vec![
            opening("Neutral Wins", "neutralWinRatio"),
            opening("Counter Hits", "counterHitRatio"),
            opening("Beneficial Trades", "beneficialTradeRatio"),
            FieldSpec::values(
                "Actions (Wavedash / Waveland / Dash Dance / Ledgegrab)",
                ACTION_COUNTS,
                &[
                    "wavedashCount",
                    "wavelandCount",
                    "dashDanceCount",
                    "ledgegrabCount",
                ],
            ),
        ],
    )
}

pub fn general_section() -> SectionSpec {
    let per_minute = |header: &str, field: &str| {
        FieldSpec::ratio(header, OVERALL, field, ValueFormat::SimpleRatio)
            .highlight(Highlight::HigherWins)
    };

    SectionSpec::new(
        "General",
        vec![
            per_minute("Inputs / Minute", "inputsPerMinute"),
            per_minute("Digital Inputs / Minute", "digitalInputsPerMinute"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        let titles: Vec<_> = overall_sections().into_iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Offense", "Defense", "Neutral", "General"]);
    }

    #[test]
    fn test_offense_fields() {
        let headers: Vec<_> = offense_section()
            .fields
            .into_iter()
            .map(|f| f.header)
            .collect();
        assert_eq!(
            headers,
            [
                "Kills",
                "Damage Done",
                "Opening Conversion Rate",
                "Openings / Kill",
                "Damage / Opening"
            ]
        );
    }

    #[test]
    fn test_action_rows_have_no_highlight() {
        let defense = defense_section();
        assert!(defense.fields[0].highlight.is_none());
        assert_eq!(defense.fields[0].values.len(), 3);
        let neutral = neutral_section();
        assert_eq!(neutral.fields.len(), 4);
        assert!(neutral.fields[3].highlight.is_none());
        assert_eq!(neutral.fields[3].values.len(), 4);
    }

    #[test]
    fn test_ratio_fields_read_a_single_path() {
        for section in overall_sections() {
            for field in section.fields {
                if field.format.is_ratio() {
                    assert_eq!(field.values.len(), 1, "{}", field.header);
                }
            }
        }
    }
}
