//! Set-document emission
//!
//! The output is Magic Set Editor's line-oriented project format:
//! tab-indented `key: value` lines. Field order inside a `card:` block is
//! the wire contract with the stylesheet; do not reorder.

use std::fmt::Write as _;

use crate::cards::Card;

/// Render the complete set document for a deck.
#[must_use]
pub fn render_set(cards: &[Card], timestamp: &str) -> String {
    let mut out = String::new();
    write_preamble(&mut out);
    for card in cards {
        write_card(&mut out, card, timestamp);
    }
    write_postamble(&mut out);
    out
}

/// Local wall-clock time at seconds precision, as the card blocks carry it.
#[must_use]
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Fixed header: format version, game, stylesheet, styling block.
pub fn write_preamble(out: &mut String) {
    out.push_str("mse version: 0.3.8\n");
    out.push_str("game: D&D\n");
    out.push_str("stylesheet: Ander\n");
    out.push_str("set info:\n");
    out.push_str("\tsymbol:\n");
    out.push_str("styling:\n");
    out.push_str("\tD&D-Ander:\n");
    out.push_str("\t\tborder font color: White\n");
    out.push_str("\t\tlook: default\n");
    out.push_str("\t\ttext size: normal\n");
    out.push_str("\t\tflavor text size: small\n");
    out.push_str("\t\tname size: normal\n");
}

/// Append one `card:` block.
pub fn write_card(out: &mut String, card: &Card, timestamp: &str) {
    let action_icon = card.action_icon.map(String::from).unwrap_or_default();
    let range_icon = card.range_icon.map(String::from).unwrap_or_default();
    let background = card.background.unwrap_or_default();

    out.push_str("card:\n");
    out.push_str("\thas styling: true\n");
    out.push_str("\tstyling data:\n");
    out.push_str("\t\tborder font color: White\n");
    out.push_str("\tnotes: Created with PowerDeck\n");
    let _ = writeln!(out, "\ttime created: {timestamp}");
    let _ = writeln!(out, "\ttime modified: {timestamp}");
    let _ = writeln!(out, "\tname: {}", card.name);
    out.push_str("\timage:\n");
    let _ = writeln!(
        out,
        "\tsuper type: <word-list-type>{}</word-list-type>",
        card.header[0]
    );
    let _ = writeln!(
        out,
        "\tsub type: <word-list-class>{}</word-list-class>",
        card.header[1]
    );
    let _ = writeln!(out, "\tlevel: {}", card.header[2]);
    let _ = writeln!(
        out,
        "\tdescriptors: <word-list-frequency>{}</word-list-frequency><sep> <sym>$</sym> </sep>{}",
        card.power_usage, card.keywords
    );
    let _ = writeln!(
        out,
        "\tfrequency: <word-list-frequency>{}</word-list-frequency>",
        card.power_usage
    );
    let _ = writeln!(out, "\tflags: {}", card.keywords);
    out.push_str("\trule text:\n");
    for line in &card.rules_text {
        let _ = writeln!(out, "\t\t{line}");
    }
    let _ = writeln!(out, "\tflavor text: <i-flavor>{}</i-flavor>", card.flavor_text);
    let _ = writeln!(out, "\taction icon: {action_icon}");
    let _ = writeln!(out, "\trange icon: {range_icon}");
    // Only the first two box labels are ever emitted; a third stays a
    // manual edit in the layout tool.
    if !card.attack.is_empty() {
        let _ = writeln!(out, "\tattack: {}", card.attack);
        out.push_str("\tbox label5: Damage\n");
    }
    let _ = writeln!(out, "\tbackground: {background}");
}

/// Fixed trailer: version-control-none marker and terminator.
pub fn write_postamble(out: &mut String) {
    out.push_str("version control:\n");
    out.push_str("\ttype: none\n");
    out.push_str("apprentice code:");
}
