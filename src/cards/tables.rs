//! Fixed lookup data for card generation

/// Powers every character has; never worth a card.
pub const STANDARD_CARDS: [&str; 5] = [
    "Melee Basic Attack",
    "Ranged Basic Attack",
    "Bull Rush Attack",
    "Grab Attack",
    "Opportunity Attack",
];

/// Fields a well-formed Power record always carries.
pub const MANDATORY_FIELDS: [&str; 3] = ["Display", "Power Usage", "Keywords"];

/// Attack-type words that get bold tags in the first rules-text line.
pub const BOLDED_WORDS: [&str; 5] = ["Melee", "Ranged", "Close", "Area", "Personal"];

/// Long-form ability score and defense names with their card
/// abbreviations. Substitution is literal and ordered, not word-boundary
/// aware.
pub const SCORE_ABBREVIATIONS: [(&str, &str); 9] = [
    ("Strength", "Str"),
    ("Constitution", "Con"),
    ("Dexterity", "Dex"),
    ("Intelligence", "Int"),
    ("Wisdom", "Wis"),
    ("Charisma", "Cha"),
    ("Fortitude", "Fort"),
    ("Reflex", "Ref"),
    ("Will", "Will"),
];
