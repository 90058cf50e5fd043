use footprint::*;

fn abs_difference<T: std::ops::Sub<Output = T> + PartialOrd>(x: T, y: T) -> T {
    if x < y {
        y - x
    } else {
        x - y
    }
}

fn form(values: [&str; 8]) -> RawInput {
    let [city, other_city, electricity, vehicle, fuel, flights, diet, appliances] = values;
    let field = |v: &str| (!v.is_empty()).then(|| v.to_string());
    RawInput {
        city: field(city),
        other_city: field(other_city),
        electricity_kwh: field(electricity),
        vehicle_km: field(vehicle),
        vehicle_fuel: field(fuel),
        flights_per_month: field(flights),
        diet: field(diet),
        appliances: field(appliances),
    }
}

/// Verifies the full pipeline against the figures the original web
/// calculator shows for a bangalore household (100 kWh, 50 km by petrol
/// car, 1 flight, mixed diet, 3 appliances).
#[test]
fn acceptance_bangalore() {
    let factors = EmissionFactors::load().unwrap();
    let averages = ReferenceAverages::load().unwrap();

    let input = form(["bangalore", "", "100", "50", "petrol", "1", "mixed", "3"])
        .validate()
        .unwrap();
    let result = footprint(&input, &factors, &averages);

    assert!(abs_difference(result.total_monthly_kg, 1557.0) < 1e-9);
    assert_eq!(result.trees_to_offset, 78);
    assert!(result.above_national_average);

    // the monthly total deliberately includes the annual-scale flight term
    assert!(abs_difference(result.flights_kg, 1250.0) < 1e-9);
    assert!(abs_difference(result.monthly_flights_kg(), 1250.0 / 12.0) < 1e-9);
}

/// All-zero usage still emits through food: a vegetarian diet alone is
/// 45 kg/month, needing 3 trees and sitting below the national average.
#[test]
fn acceptance_idle_household() {
    let factors = EmissionFactors::load().unwrap();
    let averages = ReferenceAverages::load().unwrap();

    let input = form(["chennai", "", "0", "0", "electric", "0", "vegetarian", "0"])
        .validate()
        .unwrap();
    let result = footprint(&input, &factors, &averages);

    assert!(abs_difference(result.total_monthly_kg, 45.0) < 1e-9);
    assert_eq!(result.trees_to_offset, 3);
    assert!(!result.above_national_average);
}

/// A form missing any single field is rejected wholesale; no result exists.
#[test]
fn wholesale_rejection() {
    let complete = ["bangalore", "", "100", "50", "petrol", "1", "mixed", "3"];
    for blank in [0, 2, 3, 4, 5, 6, 7] {
        let mut values = complete;
        values[blank] = "";
        assert!(form(values).validate().is_err());
    }

    // "other" makes the free-text field the seventh required one
    let mut values = complete;
    values[0] = "other";
    assert!(form(values).validate().is_err());
    values[1] = "Pune";
    let input = form(values).validate().unwrap();
    assert_eq!(input.city, City::Other);
    assert_eq!(input.city_label.as_deref(), Some("Pune"));
}

/// A new calculation fully replaces what the previous one rendered; an
/// incomplete form clears everything.
#[test]
fn screen_is_replaced_not_merged() {
    let factors = EmissionFactors::load().unwrap();
    let averages = ReferenceAverages::load().unwrap();
    let mut screen = Screen::new();

    let first = footprint(
        &form(["bangalore", "", "100", "50", "petrol", "1", "mixed", "3"])
            .validate()
            .unwrap(),
        &factors,
        &averages,
    );
    screen.show(
        "first breakdown".to_string(),
        "first impact".to_string(),
        "first comparison".to_string(),
        "first offsets".to_string(),
        PieChart::new(&first),
    );

    let second = footprint(
        &form(["chennai", "", "0", "0", "electric", "0", "vegetarian", "0"])
            .validate()
            .unwrap(),
        &factors,
        &averages,
    );
    screen.show(
        "second breakdown".to_string(),
        "second impact".to_string(),
        "second comparison".to_string(),
        "second offsets".to_string(),
        PieChart::new(&second),
    );

    assert_eq!(screen.breakdown(), Some("second breakdown"));
    let chart = screen.chart().unwrap();
    // food is the only non-zero slice of the second calculation
    assert!(chart
        .slices()
        .iter()
        .all(|s| (s.label == "Food") == (s.kg > 0.0)));

    screen.clear();
    assert!(screen.is_empty());
    assert!(screen.chart().is_none());
}
