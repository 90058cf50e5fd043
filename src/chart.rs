use crate::Footprint;

static LABELS: [&'static str; 5] = ["Electricity", "Travel", "Flights", "Food", "Appliances"];
static BAR_WIDTH: usize = 40;

/// One slice of the breakdown chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub kg: f64,
    /// fraction of the charted total, in `0.0..=1.0`
    pub share: f64,
}

/// The five-category emissions chart. Plotted over the annualized
/// components, like the original pie chart; colors are left to whatever
/// renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    slices: Vec<Slice>,
}

impl PieChart {
    pub fn new(footprint: &Footprint) -> Self {
        let values = [
            footprint.annual_electricity_kg,
            footprint.annual_travel_kg,
            footprint.annual_flights_kg,
            footprint.annual_food_kg,
            footprint.annual_appliances_kg,
        ];
        let total: f64 = values.iter().sum();
        let slices = LABELS
            .into_iter()
            .zip(values)
            .map(|(label, kg)| Slice {
                label,
                kg,
                share: if total > 0.0 { kg / total } else { 0.0 },
            })
            .collect();
        Self { slices }
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Renders each slice as a label, a percentage and a proportional bar.
    pub fn rows(&self) -> Vec<String> {
        self.slices
            .iter()
            .map(|slice| {
                let filled = (slice.share * BAR_WIDTH as f64).round() as usize;
                format!(
                    "{:<11} {:>5.1}% {}",
                    slice.label,
                    slice.share * 100.0,
                    "#".repeat(filled)
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{footprint, City, Diet, EmissionFactors, FootprintInput, Fuel, ReferenceAverages};

    fn chart() -> PieChart {
        let factors = EmissionFactors::load().unwrap();
        let averages = ReferenceAverages::load().unwrap();
        let input = FootprintInput {
            city: City::Bangalore,
            city_label: None,
            electricity_kwh: 100.0,
            vehicle_km: 50.0,
            vehicle_fuel: Fuel::Petrol,
            flights_per_month: 1,
            diet: Diet::Mixed,
            appliances: 3,
        };
        PieChart::new(&footprint(&input, &factors, &averages))
    }

    #[test]
    fn five_fixed_slices() {
        let chart = chart();
        assert_eq!(
            chart.slices().iter().map(|s| s.label).collect::<Vec<_>>(),
            LABELS
        );
        let shares: f64 = chart.slices().iter().map(|s| s.share).sum();
        assert!((shares - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rows_are_proportional() {
        let rows = chart().rows();
        assert_eq!(rows.len(), 5);
        // flights dominate the bangalore scenario
        let flights = rows.iter().find(|r| r.starts_with("Flights")).unwrap();
        let food = rows.iter().find(|r| r.starts_with("Food")).unwrap();
        let bars = |row: &str| row.chars().filter(|c| *c == '#').count();
        assert!(bars(flights) > bars(food));
    }

    #[test]
    fn empty_footprint_charts_zero_shares() {
        let factors = EmissionFactors::load().unwrap();
        let averages = ReferenceAverages::load().unwrap();
        let mut result = footprint(
            &FootprintInput {
                city: City::Chennai,
                city_label: None,
                electricity_kwh: 0.0,
                vehicle_km: 0.0,
                vehicle_fuel: Fuel::Electric,
                flights_per_month: 0,
                diet: Diet::Vegetarian,
                appliances: 0,
            },
            &factors,
            &averages,
        );
        // force an all-zero breakdown
        result.annual_food_kg = 0.0;
        let chart = PieChart::new(&result);
        assert!(chart.slices().iter().all(|s| s.share == 0.0));
    }
}
