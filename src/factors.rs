use std::error::Error;

use serde::{Deserialize, Serialize};

/// A city with a dedicated grid emission factor. Anything typed into the
/// free-text field resolves to [`City::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Delhi,
    Mumbai,
    Bangalore,
    Hyderabad,
    Chennai,
    Kolkata,
    Other,
}

impl City {
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "delhi" => City::Delhi,
            "mumbai" => City::Mumbai,
            "bangalore" => City::Bangalore,
            "hyderabad" => City::Hyderabad,
            "chennai" => City::Chennai,
            "kolkata" => City::Kolkata,
            "other" => City::Other,
            _ => return None,
        })
    }

    pub fn key(&self) -> &'static str {
        match self {
            City::Delhi => "delhi",
            City::Mumbai => "mumbai",
            City::Bangalore => "bangalore",
            City::Hyderabad => "hyderabad",
            City::Chennai => "chennai",
            City::Kolkata => "kolkata",
            City::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fuel {
    Petrol,
    Diesel,
    Electric,
    /// public transport, treated as a fuel type by the form
    Public,
}

impl Fuel {
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "petrol" => Fuel::Petrol,
            "diesel" => Fuel::Diesel,
            "electric" => Fuel::Electric,
            "public" => Fuel::Public,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Vegetarian,
    Mixed,
    #[serde(rename = "non-vegetarian")]
    NonVegetarian,
}

impl Diet {
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "vegetarian" => Diet::Vegetarian,
            "mixed" => Diet::Mixed,
            "non-vegetarian" => Diet::NonVegetarian,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ElectricityFactors {
    delhi: f64,
    mumbai: f64,
    bangalore: f64,
    hyderabad: f64,
    chennai: f64,
    kolkata: f64,
    other: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct VehicleFactors {
    petrol: f64,
    diesel: f64,
    electric: f64,
    public: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct DietFactors {
    vegetarian: f64,
    mixed: f64,
    #[serde(rename = "non-vegetarian")]
    non_vegetarian: f64,
}

// city-specific grid factors from CEA baseline data; the rest are generic
// per-unit factors for an Indian household
static FACTORS: &'static [u8] = include_bytes!("./factors.json");

/// The fixed multipliers converting usage quantities (kWh, km, days, counts)
/// into kg CO2e. Loaded once at startup and passed explicitly to the
/// calculator; never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct EmissionFactors {
    electricity: ElectricityFactors,
    vehicle: VehicleFactors,
    flights: f64,
    diet: DietFactors,
    appliances: f64,
}

impl EmissionFactors {
    /// Loads the factor table embedded in the binary.
    /// # Error
    /// Errors if the embedded table cannot be deserialized
    pub fn load() -> Result<Self, Box<dyn Error>> {
        let factors: EmissionFactors = serde_json::from_slice(FACTORS)?;
        log::info!("Loaded emission factors");
        Ok(factors)
    }

    /// Grid emission factor in kg CO2e per kWh
    pub fn electricity(&self, city: City) -> f64 {
        match city {
            City::Delhi => self.electricity.delhi,
            City::Mumbai => self.electricity.mumbai,
            City::Bangalore => self.electricity.bangalore,
            City::Hyderabad => self.electricity.hyderabad,
            City::Chennai => self.electricity.chennai,
            City::Kolkata => self.electricity.kolkata,
            City::Other => self.electricity.other,
        }
    }

    /// kg CO2e per km travelled
    pub fn vehicle(&self, fuel: Fuel) -> f64 {
        match fuel {
            Fuel::Petrol => self.vehicle.petrol,
            Fuel::Diesel => self.vehicle.diesel,
            Fuel::Electric => self.vehicle.electric,
            Fuel::Public => self.vehicle.public,
        }
    }

    /// kg CO2e per km flown
    pub fn flights(&self) -> f64 {
        self.flights
    }

    /// kg CO2e per day of eating the given diet
    pub fn diet(&self, diet: Diet) -> f64 {
        match diet {
            Diet::Vegetarian => self.diet.vegetarian,
            Diet::Mixed => self.diet.mixed,
            Diet::NonVegetarian => self.diet.non_vegetarian,
        }
    }

    /// kg CO2e per appliance per month
    pub fn appliances(&self) -> f64 {
        self.appliances
    }
}
