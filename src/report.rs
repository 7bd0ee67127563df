//! Rendering aggregated results into the operator-facing text report.

use {
    std::{
        fmt,
        fs::File,
        io::{
            self,
            Write
        },
        path::Path,
        str::FromStr
    },
    itertools::Itertools as _,
    crate::{
        Error,
        IoResultExt as _,
        process::{
            reorganize_by_set,
            CardResult,
            Results
        }
    }
};

const RULE_WIDTH: usize = 60;

/// How the report groups its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Card,
    Set
}

impl Default for GroupBy {
    fn default() -> GroupBy { GroupBy::Card }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GroupBy::Card => "card",
            GroupBy::Set => "set"
        })
    }
}

impl FromStr for GroupBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<GroupBy, Error> {
        match s {
            "card" => Ok(GroupBy::Card),
            "set" => Ok(GroupBy::Set),
            _ => Err(Error::UnknownGrouping(s.to_owned()))
        }
    }
}

/// Derives the report path from the input path: `deck.txt` becomes `deck_common_set.txt`.
pub fn output_filename(input_file: &str) -> String {
    match input_file.strip_suffix(".txt") {
        Some(stem) => format!("{}_common_set.txt", stem),
        None => format!("{}_common_set.txt", input_file)
    }
}

fn banner(w: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(w, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(w, "{}", title)?;
    writeln!(w, "{}", "=".repeat(RULE_WIDTH))
}

/// One section per card, in the order the cards were processed.
pub fn render_by_card(w: &mut impl Write, results: &Results) -> io::Result<()> {
    banner(w, "Set Finder - Results (Grouped by Card)")?;
    for (card_name, result) in results {
        writeln!(w)?;
        writeln!(w, "{}:", card_name)?;
        writeln!(w, "{}", "-".repeat(RULE_WIDTH))?;
        match result {
            CardResult::NotFound | CardResult::NoOracleId => writeln!(w, "  Card not found")?,
            CardResult::Printings(sets) if sets.is_empty() => writeln!(w, "  No sets found")?,
            CardResult::Printings(sets) => {
                for (set_code, set_name) in sets {
                    writeln!(w, "  {} - {}", set_code, set_name)?;
                }
                writeln!(w)?;
                writeln!(w, "  Total: {} set(s)", sets.len())?;
            }
        }
    }
    Ok(())
}

/// One section per set, ordered by set name; member cards alphabetical.
pub fn render_by_set(w: &mut impl Write, results: &Results) -> io::Result<()> {
    let sets_to_cards = reorganize_by_set(results);
    banner(w, "Set Finder - Results (Grouped by Set)")?;
    for (set_code, group) in sets_to_cards.iter().sorted_by(|(_, a), (_, b)| a.set_name.cmp(&b.set_name)) {
        writeln!(w)?;
        writeln!(w, "{} - {}:", set_code, group.set_name)?;
        writeln!(w, "{}", "-".repeat(RULE_WIDTH))?;
        for card_name in group.cards.iter().sorted() {
            writeln!(w, "  - {}", card_name)?;
        }
        writeln!(w)?;
        writeln!(w, "  Total: {} card(s)", group.cards.len())?;
    }
    writeln!(w)?;
    writeln!(w, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(w, "Total sets found: {}", sets_to_cards.len())
}

/// Writes the report for the given grouping, creating the file fresh.
pub fn write_report(path: impl AsRef<Path>, results: &Results, group_by: GroupBy) -> Result<(), Error> {
    let path = path.as_ref();
    let mut file = io::BufWriter::new(File::create(path).at(path)?);
    match group_by {
        GroupBy::Card => render_by_card(&mut file, results).at(path)?,
        GroupBy::Set => render_by_set(&mut file, results).at(path)?
    }
    file.flush().at(path)?;
    Ok(())
}
