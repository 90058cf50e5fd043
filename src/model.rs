use serde::{Deserialize, Serialize};

/// A claim together with the source backing it and the date the source
/// was retrieved. Used for every reference value that comes from a
/// published figure rather than from this crate's own arithmetic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Fact<R> {
    pub claim: R,
    pub source: String,
    pub date: String,
}
