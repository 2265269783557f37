//! CSV-based bracket table loader
//!
//! Files carry a `threshold,rate` header with one bracket per row, rates as
//! decimals (0.22 for 22%).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::brackets::{BracketTable, TaxBracket};
use crate::error::Result;

/// Load a bracket table from a CSV file
pub fn load_brackets(path: &Path) -> Result<BracketTable> {
    let file = File::open(path)?;
    let table = load_brackets_from_reader(file)?;
    log::debug!(
        "loaded {} brackets from {}",
        table.brackets().len(),
        path.display()
    );
    Ok(table)
}

/// Load a bracket table from any CSV source
pub fn load_brackets_from_reader<R: Read>(source: R) -> Result<BracketTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut brackets = Vec::new();
    for record in reader.deserialize::<TaxBracket>() {
        brackets.push(record?);
    }

    BracketTable::new(brackets)
}
