//! Display-string formatting for card fields

use deunicode::deunicode;

use super::tables::{BOLDED_WORDS, SCORE_ABBREVIATIONS};
use crate::formats::RulesElement;

/// The three header words: super type, sub type, level.
///
/// The Display field is split on whitespace. Four-plus-word displays (a
/// class with a parenthesized subtitle) collapse by dropping 2nd words
/// until three remain; short displays pad with empty strings.
#[must_use]
pub fn display_header(record: &RulesElement) -> [String; 3] {
    let display = record.field("Display");
    let mut words: Vec<String> = display.split_whitespace().map(str::to_owned).collect();
    while words.len() > 3 {
        words.remove(1);
    }
    let mut words = words.into_iter();
    std::array::from_fn(|_| words.next().unwrap_or_default())
}

/// Capitalize the first letter of every word, lowercase the rest.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}

/// Wrap each targeting keyword in bold tags wherever it occurs.
#[must_use]
pub fn bold_attack_type(attack_type: &str) -> String {
    let mut text = attack_type.to_owned();
    for word in BOLDED_WORDS {
        text = text.replace(word, &format!("<b>{word}</b>"));
    }
    text
}

/// Abbreviate ability score and defense names in attack/cost text.
///
/// Literal substring substitution: "Strengthened" loses letters too.
#[must_use]
pub fn abbreviate(text: &str) -> String {
    let mut text = text.to_owned();
    for (long, short) in SCORE_ABBREVIATIONS {
        text = text.replace(long, short);
    }
    text
}

/// Assemble the rules-text lines for one power.
///
/// The first line pairs the title-cased action type with the bolded attack
/// type. The rest walk the record's fields in declared order: inclusion
/// starts with the field after "Attack Type" and stops at
/// "_Associated Feats" or "Class". Interior newlines gain a double-tab
/// continuation indent and non-ASCII characters are transliterated.
#[must_use]
pub fn rules_text(record: &RulesElement) -> Vec<String> {
    let action_type = title_case(record.field("Action Type"));
    let attack_type = bold_attack_type(record.field("Attack Type"));

    let mut lines = vec![format!("<b>{action_type}</b>\t{attack_type}")];

    let mut included = false;
    for field in &record.fields {
        if matches!(field.name.as_str(), "_Associated Feats" | "Class") {
            included = false;
        }
        if included && !field.text.trim().is_empty() {
            let line = format!("<b>{}:</b> {}", field.name, field.text);
            let line = line.replace('\n', "\n\t\t");
            lines.push(deunicode(&line));
        }
        if field.name == "Attack Type" {
            included = true;
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::formats::RulesField;

    fn record_with(fields: &[(&str, &str)]) -> RulesElement {
        RulesElement {
            kind: "Power".into(),
            name: "Test Power".into(),
            fields: fields
                .iter()
                .map(|(name, text)| RulesField {
                    name: (*name).into(),
                    text: (*text).into(),
                })
                .collect(),
            flavor: String::new(),
        }
    }

    #[test]
    fn header_keeps_three_words() {
        let record = record_with(&[("Display", "Fighter Attack 1")]);
        assert_eq!(display_header(&record), ["Fighter", "Attack", "1"]);
    }

    #[test]
    fn header_drops_interior_words() {
        // A class with a parenthesized subtitle yields four words.
        let record = record_with(&[("Display", "Warlock (Infernal) Attack 1")]);
        assert_eq!(display_header(&record), ["Warlock", "Attack", "1"]);
    }

    #[test]
    fn header_pads_short_displays() {
        let record = record_with(&[("Display", "Warden Feature")]);
        assert_eq!(display_header(&record), ["Warden", "Feature", ""]);
    }

    #[test]
    fn header_defaults_when_display_missing() {
        let record = record_with(&[]);
        assert_eq!(display_header(&record), ["", "", ""]);
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("standard action"), "Standard Action");
        assert_eq!(title_case("IMMEDIATE REACTION"), "Immediate Reaction");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn attack_type_words_get_bold_tags() {
        assert_eq!(
            bold_attack_type("Melee or Ranged weapon"),
            "<b>Melee</b> or <b>Ranged</b> weapon"
        );
        assert_eq!(bold_attack_type("Close burst 1"), "<b>Close</b> burst 1");
        assert_eq!(bold_attack_type(""), "");
    }

    #[test]
    fn abbreviation_shortens_scores_and_defenses() {
        assert_eq!(abbreviate("Strength vs. Fortitude"), "Str vs. Fort");
        assert_eq!(abbreviate("Wisdom vs. Reflex"), "Wis vs. Ref");
        assert_eq!(abbreviate("1d8 + 4 damage"), "1d8 + 4 damage");
    }

    #[test]
    fn abbreviation_is_literal_substring_substitution() {
        // Not word-boundary aware; the imprecision is part of the contract.
        assert_eq!(abbreviate("Strengthened resolve"), "Strened resolve");
        assert_eq!(abbreviate("Willpower"), "Willpower");
    }

    #[test]
    fn rules_text_first_line_pairs_action_and_attack() {
        let record = record_with(&[
            ("Action Type", "Standard Action"),
            ("Attack Type", "Melee weapon"),
        ]);
        assert_eq!(
            rules_text(&record)[0],
            "<b>Standard Action</b>\t<b>Melee</b> weapon"
        );
    }

    #[test]
    fn rules_text_includes_fields_between_attack_type_and_class() {
        let record = record_with(&[
            ("Power Usage", "At-Will"),
            ("Attack Type", "Melee weapon"),
            ("Target", "One creature"),
            ("Attack", "Strength vs. AC"),
            ("Hit", "1[W] + Strength modifier damage."),
            ("Class", "Fighter"),
            ("Level", "1"),
        ]);
        let lines = rules_text(&record);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "<b>Target:</b> One creature");
        assert_eq!(lines[2], "<b>Attack:</b> Strength vs. AC");
        assert_eq!(lines[3], "<b>Hit:</b> 1[W] + Strength modifier damage.");
    }

    #[test]
    fn rules_text_stops_at_associated_feats() {
        let record = record_with(&[
            ("Attack Type", "Ranged 10"),
            ("Hit", "damage"),
            ("_Associated Feats", "Some Feat"),
            ("Special", "never shown"),
        ]);
        let lines = rules_text(&record);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "<b>Hit:</b> damage");
    }

    #[test]
    fn rules_text_skips_blank_fields() {
        let record = record_with(&[
            ("Attack Type", "Melee weapon"),
            ("Miss", "   "),
            ("Effect", "Shift 1 square."),
        ]);
        let lines = rules_text(&record);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "<b>Effect:</b> Shift 1 square.");
    }

    #[test]
    fn rules_text_indents_wrapped_lines() {
        let record = record_with(&[
            ("Attack Type", "Melee weapon"),
            ("Level 21", "first\nsecond"),
        ]);
        assert_eq!(rules_text(&record)[1], "<b>Level 21:</b> first\n\t\tsecond");
    }

    #[test]
    fn rules_text_transliterates_non_ascii() {
        let record = record_with(&[
            ("Attack Type", "Melee weapon"),
            ("Hit", "2\u{2013}3 damage"),
        ]);
        assert_eq!(rules_text(&record)[1], "<b>Hit:</b> 2-3 damage");
    }
}
