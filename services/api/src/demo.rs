use crate::infra::load_catalog;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use uniformes::error::AppError;
use uniformes::workflows::uniforms::{
    Catalog, RosterAssessment, RosterImporter, UniformEngine,
};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Roster CSV export to assess
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Location name of the sheet (e.g. "LIMA E ICA PROVINCIA")
    #[arg(long)]
    pub(crate) location: String,
    /// Catalog JSON document (defaults to the configured path)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Assessment date stamped on the output (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) assessed_on: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Assessment date stamped on the output (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) assessed_on: Option<NaiveDate>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        roster,
        location,
        catalog,
        assessed_on,
    } = args;

    let catalog = match catalog {
        Some(path) => load_catalog(&path)?,
        None => load_catalog(&uniformes::config::AppConfig::load()?.catalog.path)?,
    };
    let rows = RosterImporter::from_path(&roster)?;
    let assessed_on = assessed_on.unwrap_or_else(|| Local::now().date_naive());

    let engine = UniformEngine::new();
    let batch = engine.assess_roster(&catalog, &rows, &location, assessed_on, None);
    render_batch(&batch);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let assessed_on = args
        .assessed_on
        .unwrap_or_else(|| Local::now().date_naive());

    println!("Uniform assignment demo");
    let roster = include_bytes!("../../../crates/uniformes/Roster_Miraflores.csv");
    let rows = RosterImporter::from_reader(&roster[..])?;

    let engine = UniformEngine::new();
    let batch = engine.assess_roster(
        &Catalog::standard(),
        &rows,
        "LIMA E ICA PROVINCIA",
        assessed_on,
        None,
    );
    render_batch(&batch);

    Ok(())
}

fn render_batch(batch: &RosterAssessment) {
    println!(
        "\nLocation: {}  (assessed {})",
        batch.location, batch.assessed_on
    );
    println!("{:<30} {:<28} {:>6} {:>10}", "Employee", "Occupation", "Sets", "Total");

    for assessment in &batch.assessments {
        println!(
            "{:<30} {:<28} {:>6} {:>10}",
            assessment.employee,
            assessment.occupation,
            assessment.sets,
            format!("S/ {:.2}", assessment.total)
        );
        for garment in &assessment.garments {
            println!("    {:>3} x {}", garment.quantity, garment.label);
        }
    }

    println!(
        "\n{} employees, grand total S/ {:.2}",
        batch.assessments.len(),
        batch.grand_total
    );
}
