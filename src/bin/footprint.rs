use std::error::Error;

use clap::Parser;
use itertools::Itertools;
use num_format::{Locale, ToFormattedString};
use simple_logger::SimpleLogger;
use tinytemplate::TinyTemplate;

use footprint::*;

static TEMPLATE_NAME: &'static str = "t";
static TEMPLATE: &'static str = include_str!("report.md");

/// Estimates a household's monthly carbon footprint and writes a report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The city (delhi, mumbai, bangalore, hyderabad, chennai, kolkata or other)
    #[arg(long)]
    city: Option<String>,
    /// Name of the city when `--city other`
    #[arg(long)]
    other_city: Option<String>,
    /// Monthly electricity use in kWh
    #[arg(long)]
    electricity: Option<String>,
    /// Monthly distance travelled by vehicle in km
    #[arg(long)]
    vehicle: Option<String>,
    /// Vehicle fuel (petrol, diesel, electric or public)
    #[arg(long)]
    vehicle_type: Option<String>,
    /// Flights per month
    #[arg(long)]
    flights: Option<String>,
    /// Diet (vegetarian, mixed or non-vegetarian)
    #[arg(long)]
    diet: Option<String>,
    /// Number of major appliances
    #[arg(long)]
    appliances: Option<String>,
}

#[derive(serde::Serialize)]
struct Program {
    name: &'static str,
    url: &'static str,
    description: &'static str,
}

#[derive(serde::Serialize)]
struct Context {
    generated_at: String,
    total_monthly: String,
    electricity: String,
    travel: String,
    flights_monthly: String,
    food: String,
    appliances: String,
    annual_electricity: String,
    annual_travel: String,
    annual_flights: String,
    annual_food: String,
    annual_appliances: String,
    chart: String,
    national_average: String,
    urban_average: String,
    rural_average: String,
    position: String,
    trees: String,
    programs: Vec<Program>,
}

fn context(result: &Footprint, averages: &ReferenceAverages) -> Result<Context, Box<dyn Error>> {
    let chart = PieChart::new(result);

    Ok(Context {
        generated_at: now_ist()?,
        total_monthly: format!("{:.2}", result.total_monthly_kg),
        electricity: format!("{:.2}", result.electricity_kg),
        travel: format!("{:.2}", result.travel_kg),
        flights_monthly: format!("{:.2}", result.monthly_flights_kg()),
        food: format!("{:.2}", result.food_kg),
        appliances: format!("{:.2}", result.appliances_kg),
        annual_electricity: format!("{:.2}", result.annual_electricity_kg),
        annual_travel: format!("{:.2}", result.annual_travel_kg),
        annual_flights: format!("{:.2}", result.annual_flights_kg),
        annual_food: format!("{:.2}", result.annual_food_kg),
        annual_appliances: format!("{:.2}", result.annual_appliances_kg),
        chart: chart.rows().iter().join("\n"),
        national_average: (averages.national.claim as usize).to_formatted_string(&Locale::en),
        urban_average: (averages.urban.claim as usize).to_formatted_string(&Locale::en),
        rural_average: (averages.rural.claim as usize).to_formatted_string(&Locale::en),
        position: if result.above_national_average {
            "above".to_string()
        } else {
            "below".to_string()
        },
        trees: (result.trees_to_offset as usize).to_formatted_string(&Locale::en),
        programs: PROGRAMS
            .iter()
            .map(|p| Program {
                name: p.name,
                url: p.url,
                description: p.description,
            })
            .collect(),
    })
}

fn render(context: &Context) -> Result<String, Box<dyn Error>> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(TEMPLATE_NAME, TEMPLATE)?;
    Ok(tt.render(TEMPLATE_NAME, context)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let cli = Cli::parse();

    let factors = EmissionFactors::load()?;
    let averages = ReferenceAverages::load()?;

    let raw = RawInput {
        city: cli.city,
        other_city: cli.other_city,
        electricity_kwh: cli.electricity,
        vehicle_km: cli.vehicle,
        vehicle_fuel: cli.vehicle_type,
        flights_per_month: cli.flights,
        diet: cli.diet,
        appliances: cli.appliances,
    };

    let input = match raw.validate() {
        Ok(input) => input,
        Err(error) => {
            println!("{error}");
            return Ok(());
        }
    };

    let result = footprint::footprint(&input, &factors, &averages);

    let rendered = render(&context(&result, &averages)?)?;
    let path = "footprint_report.md";
    std::fs::write(path, &rendered)?;
    log::info!("Report written to {path}");

    println!("{rendered}");

    Ok(())
}
