use std::{collections::HashMap, error::Error, hash::Hash};

use serde::Deserialize;

/// Loads an embedded CSV into a HashMap based on the primary key of the type
/// # Error
/// Errors if any record cannot be deserialized
pub(crate) fn load<H: Hash + Eq, D: for<'de> Deserialize<'de>, PK: Fn(D) -> (H, D)>(
    data: &[u8],
    map: PK,
) -> Result<HashMap<H, D>, Box<dyn Error>> {
    let rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .from_reader(std::io::Cursor::new(data));
    rdr.into_deserialize()
        .map(|r| r.map(&map).map_err(Into::into))
        .collect()
}
