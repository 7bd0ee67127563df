//! The per-card lookup loop and the inversion of its results into per-set groups.

use {
    std::{
        collections::BTreeMap,
        thread,
        time::Duration
    },
    indexmap::IndexMap,
    log::warn,
    crate::scryfall::Client
};

/// Pause inserted before and after each printings request.
const COURTESY_DELAY: Duration = Duration::from_millis(100);

/// Outcome of a single card's lookup.
#[derive(Debug, PartialEq, Eq)]
pub enum CardResult {
    /// The exact-name lookup produced no usable record.
    NotFound,
    /// A record came back, but without the oracle id needed to enumerate printings.
    NoOracleId,
    /// Every known printing, keyed by upper-cased set code.
    Printings(BTreeMap<String, String>)
}

/// Lookup outcomes keyed by card name, in the order the cards were processed.
pub type Results = IndexMap<String, CardResult>;

/// All cards that showed up in one set.
#[derive(Debug, PartialEq, Eq)]
pub struct SetGroup {
    pub set_name: String,
    pub cards: Vec<String>
}

/// Looks up every card in order, one at a time.
///
/// No single card's failure aborts the batch: lookup misses, service errors,
/// and printings failures all degrade to a marker in that card's entry.
pub fn process_cards(client: &Client, card_names: &[String]) -> Results {
    let mut results = Results::default();
    for (i, card_name) in card_names.iter().enumerate() {
        println!("[{}/{}] {}", i + 1, card_names.len(), card_name);
        let record = match client.card_by_name(card_name) {
            Ok(Some(record)) => record,
            Ok(None) => {
                warn!("skipping {:?}, not found", card_name);
                results.insert(card_name.clone(), CardResult::NotFound);
                continue;
            }
            Err(e) => {
                warn!("skipping {:?}, lookup failed: {:?}", card_name, e);
                results.insert(card_name.clone(), CardResult::NotFound);
                continue;
            }
        };
        let oracle_id = match record.oracle_id {
            Some(oracle_id) => oracle_id,
            None => {
                warn!("skipping {:?}, record has no oracle id", card_name);
                results.insert(card_name.clone(), CardResult::NoOracleId);
                continue;
            }
        };
        thread::sleep(COURTESY_DELAY);
        let mut sets = BTreeMap::default();
        for printing in client.printings(&oracle_id) {
            if let (Some(set_code), Some(set_name)) = (printing.set_code, printing.set_name) {
                if !set_code.is_empty() && !set_name.is_empty() {
                    sets.insert(set_code.to_uppercase(), set_name);
                }
            }
        }
        println!("    found in {} set(s)", sets.len());
        results.insert(card_name.clone(), CardResult::Printings(sets));
        thread::sleep(COURTESY_DELAY);
    }
    results
}

/// Inverts per-card results into per-set groups.
///
/// Cards without printings contribute nothing; group members keep the order
/// the cards were processed in, sorting is left to the renderer.
pub fn reorganize_by_set(results: &Results) -> IndexMap<String, SetGroup> {
    let mut sets_to_cards = IndexMap::default();
    for (card_name, result) in results {
        if let CardResult::Printings(sets) = result {
            for (set_code, set_name) in sets {
                let group = sets_to_cards
                    .entry(set_code.clone())
                    .or_insert_with(|| SetGroup { set_name: set_name.clone(), cards: Vec::default() });
                group.cards.push(card_name.clone());
            }
        }
    }
    sets_to_cards
}
