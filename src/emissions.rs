use serde::Serialize;

use crate::{trees_to_offset, EmissionFactors, FootprintInput, ReferenceAverages};

/// assumed distance of a single (return-trip equivalent) flight, in km
static KM_PER_FLIGHT: f64 = 2500.0;
static DAYS_PER_MONTH: f64 = 30.0;
static MONTHS_PER_YEAR: f64 = 12.0;

/// The emissions breakdown of a single calculation, in kg CO2e.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footprint {
    pub electricity_kg: f64,
    pub travel_kg: f64,
    /// Projects a full year of flying (count × 2500 km × factor) yet is
    /// summed into [`Footprint::total_monthly_kg`] as-is. The original
    /// calculator behaves this way; only the monthly display line divides
    /// by 12 (see [`Footprint::monthly_flights_kg`]).
    pub flights_kg: f64,
    pub food_kg: f64,
    pub appliances_kg: f64,
    pub total_monthly_kg: f64,
    pub annual_electricity_kg: f64,
    pub annual_travel_kg: f64,
    /// same as `flights_kg`, which is already annual-scale
    pub annual_flights_kg: f64,
    pub annual_food_kg: f64,
    pub annual_appliances_kg: f64,
    /// trees to plant annually to absorb the monthly total
    pub trees_to_offset: u32,
    pub above_national_average: bool,
}

impl Footprint {
    /// The flight figure shown on the monthly breakdown line.
    pub fn monthly_flights_kg(&self) -> f64 {
        self.flights_kg / MONTHS_PER_YEAR
    }
}

/// Computes the household footprint of `input` under `factors`.
///
/// Pure and deterministic: the same input and tables always yield the same
/// [`Footprint`], and nothing is accumulated across calls.
pub fn footprint(
    input: &FootprintInput,
    factors: &EmissionFactors,
    averages: &ReferenceAverages,
) -> Footprint {
    let electricity_kg = input.electricity_kwh * factors.electricity(input.city);
    let travel_kg = input.vehicle_km * factors.vehicle(input.vehicle_fuel);
    let flights_kg = f64::from(input.flights_per_month) * KM_PER_FLIGHT * factors.flights();
    let food_kg = factors.diet(input.diet) * DAYS_PER_MONTH;
    let appliances_kg = f64::from(input.appliances) * factors.appliances();

    let total_monthly_kg = electricity_kg + travel_kg + flights_kg + food_kg + appliances_kg;

    Footprint {
        electricity_kg,
        travel_kg,
        flights_kg,
        food_kg,
        appliances_kg,
        total_monthly_kg,
        annual_electricity_kg: electricity_kg * MONTHS_PER_YEAR,
        annual_travel_kg: travel_kg * MONTHS_PER_YEAR,
        annual_flights_kg: flights_kg,
        annual_food_kg: food_kg * MONTHS_PER_YEAR,
        annual_appliances_kg: appliances_kg * MONTHS_PER_YEAR,
        trees_to_offset: trees_to_offset(total_monthly_kg),
        above_national_average: total_monthly_kg > averages.national.claim,
    }
}
