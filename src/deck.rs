//! Reading deck lists: one card per line, optionally decorated the way
//! deck-builder exports decorate them.

use {
    std::{
        fs::File,
        io::{
            BufRead,
            BufReader
        },
        path::Path
    },
    crate::{
        Error,
        IoResultExt as _
    }
};

/// Extracts the bare card name from a deck-list line, or `None` for a blank line.
///
/// Lines may carry a leading quantity token and a trailing parenthesized
/// set/collector-number suffix, as in `1 Lightning Bolt (LEA) 161`; both are
/// stripped.
pub fn card_name_from_line(line: &str) -> Option<String> {
    let line = line.trim();
    let rest = match line.split_once(char::is_whitespace) {
        Some((_quantity, rest)) => rest,
        None => line
    };
    let name = match rest.find('(') {
        Some(idx) => &rest[..idx],
        None => rest
    };
    let name = name.trim();
    if name.is_empty() { None } else { Some(name.to_owned()) }
}

/// Reads a deck list, returning card names in file order, duplicates preserved.
pub fn read_card_list(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let file = File::open(path).at(path)?;
    let mut cards = Vec::default();
    for line in BufReader::new(file).lines() {
        if let Some(card_name) = card_name_from_line(&line.at(path)?) {
            cards.push(card_name);
        }
    }
    Ok(cards)
}
