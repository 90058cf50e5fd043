use std::{error::Error, fmt};

use serde::{Deserialize, Serialize};

use crate::{City, Diet, Fuel};

/// The calculator form as it arrives from the outside: every field may
/// still be missing or blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub city: Option<String>,
    /// free-text city name, required when `city` is `"other"`
    pub other_city: Option<String>,
    pub electricity_kwh: Option<String>,
    pub vehicle_km: Option<String>,
    pub vehicle_fuel: Option<String>,
    pub flights_per_month: Option<String>,
    pub diet: Option<String>,
    pub appliances: Option<String>,
}

/// A fully populated calculation request. Construction goes through
/// [`RawInput::validate`]; a partially filled form never reaches the
/// calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintInput {
    pub city: City,
    /// label only; the factor lookup always uses [`City::Other`]
    pub city_label: Option<String>,
    pub electricity_kwh: f64,
    pub vehicle_km: f64,
    pub vehicle_fuel: Fuel,
    pub flights_per_month: u32,
    pub diet: Diet,
    pub appliances: u32,
}

/// The single error of this crate: one or more form fields is missing,
/// blank, or not understood. The whole form is rejected; no partial
/// result is ever produced.
#[derive(Debug, Clone, PartialEq)]
pub struct IncompleteInput {
    missing: Vec<&'static str>,
}

impl IncompleteInput {
    /// Names of the fields that did not validate
    pub fn fields(&self) -> &[&'static str] {
        &self.missing
    }
}

impl fmt::Display for IncompleteInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "please fill in all fields to calculate your carbon footprint (missing: {})",
            self.missing.join(", ")
        )
    }
}

impl Error for IncompleteInput {}

fn present<'a>(
    value: &'a Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(name);
            None
        }
    }
}

fn number<T: std::str::FromStr>(
    value: &Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<T> {
    let v = present(value, name, missing)?;
    match v.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            missing.push(name);
            None
        }
    }
}

fn keyed<T>(
    value: &Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
    from_key: fn(&str) -> Option<T>,
) -> Option<T> {
    let v = present(value, name, missing)?;
    match from_key(v) {
        Some(k) => Some(k),
        None => {
            missing.push(name);
            None
        }
    }
}

impl RawInput {
    /// Checks that all seven fields are filled in and understood, and
    /// returns the typed input. Any gap rejects the form wholesale.
    pub fn validate(&self) -> Result<FootprintInput, IncompleteInput> {
        let mut missing = vec![];

        let city = keyed(&self.city, "city", &mut missing, City::from_key);
        // the free text is only kept as a label; lookups use the generic factor
        let city_label = match city {
            Some(City::Other) => {
                present(&self.other_city, "other city", &mut missing).map(str::to_string)
            }
            _ => None,
        };

        let electricity_kwh = number::<f64>(&self.electricity_kwh, "electricity", &mut missing);
        let vehicle_km = number::<f64>(&self.vehicle_km, "vehicle distance", &mut missing);
        let vehicle_fuel = keyed(&self.vehicle_fuel, "vehicle fuel", &mut missing, Fuel::from_key);
        let flights_per_month = number::<u32>(&self.flights_per_month, "flights", &mut missing);
        let diet = keyed(&self.diet, "diet", &mut missing, Diet::from_key);
        let appliances = number::<u32>(&self.appliances, "appliances", &mut missing);

        match (
            city,
            electricity_kwh,
            vehicle_km,
            vehicle_fuel,
            flights_per_month,
            diet,
            appliances,
        ) {
            (
                Some(city),
                Some(electricity_kwh),
                Some(vehicle_km),
                Some(vehicle_fuel),
                Some(flights_per_month),
                Some(diet),
                Some(appliances),
            ) if missing.is_empty() => Ok(FootprintInput {
                city,
                city_label,
                electricity_kwh,
                vehicle_km,
                vehicle_fuel,
                flights_per_month,
                diet,
                appliances,
            }),
            _ => Err(IncompleteInput { missing }),
        }
    }
}
