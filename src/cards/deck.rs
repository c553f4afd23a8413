//! Deck assembly: character power names against the rules database

use super::Card;
use crate::formats::{RulesDatabase, RulesElement};

/// The cards built for one character, plus what fell out along the way.
#[derive(Debug, Default)]
pub struct Deck {
    pub cards: Vec<Card>,
    /// Records dropped for an unrecognized action type. Names with no
    /// database match are not counted here.
    pub skipped: usize,
}

/// Find the database record for each named power.
///
/// The first `type="Power"` element with a matching name wins. Names with
/// no match are dropped without a diagnostic; duplicate names resolve
/// twice.
#[must_use]
pub fn resolve_records<'a>(db: &'a RulesDatabase, names: &[String]) -> Vec<&'a RulesElement> {
    names
        .iter()
        .filter_map(|name| db.find_power(name))
        .collect()
}

/// Build the deck for the given power names.
#[must_use]
pub fn build_deck(db: &RulesDatabase, names: &[String]) -> Deck {
    let mut deck = Deck::default();
    for record in resolve_records(db, names) {
        match Card::from_record(record) {
            Ok(card) => deck.cards.push(card),
            Err(err) => {
                tracing::warn!("skipping card: {err}");
                deck.skipped += 1;
            }
        }
    }
    deck
}
