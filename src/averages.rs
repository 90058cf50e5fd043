use std::error::Error;

use serde::Deserialize;

use crate::Fact;

#[derive(Debug, Deserialize, Clone)]
struct AverageRow {
    region: String,
    kg_co2e_per_month: f64,
    source: String,
    date: String,
}

static AVERAGES: &'static [u8] = include_bytes!("./averages.csv");

/// Average monthly household footprints (kg CO2e) a result is compared
/// against.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceAverages {
    pub national: Fact<f64>,
    pub urban: Fact<f64>,
    pub rural: Fact<f64>,
}

impl ReferenceAverages {
    /// Loads the averages table embedded in the binary.
    /// # Error
    /// Errors if the embedded table cannot be deserialized or a region is missing
    pub fn load() -> Result<Self, Box<dyn Error>> {
        let mut rows = crate::csv::load(AVERAGES, |r: AverageRow| (r.region.clone(), r))?;
        let mut take = |region: &str| -> Result<Fact<f64>, Box<dyn Error>> {
            let row = rows
                .remove(region)
                .ok_or_else(|| format!("region \"{region}\" missing from averages table"))?;
            Ok(Fact {
                claim: row.kg_co2e_per_month,
                source: row.source,
                date: row.date,
            })
        };
        let averages = ReferenceAverages {
            national: take("national")?,
            urban: take("urban")?,
            rural: take("rural")?,
        };
        log::info!("Loaded reference averages");
        Ok(averages)
    }
}
