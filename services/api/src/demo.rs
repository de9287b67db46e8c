use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use rcn_engine::catalog::CatalogRegistry;
use rcn_engine::config::CatalogConfig;
use rcn_engine::costing::{run_batch, CostRequest, CostResult, CostingEngine, RowOutcome};
use rcn_engine::error::AppError;

use crate::infra::{bootstrap_registry, parse_non_negative, parse_positive};

#[derive(Args, Debug)]
pub(crate) struct CostArgs {
    /// Building type code, e.g. RES
    #[arg(long)]
    pub(crate) building_type: String,
    /// Region code, e.g. BC-NORTH
    #[arg(long)]
    pub(crate) region: String,
    /// Quality level
    #[arg(long, default_value = "STANDARD")]
    pub(crate) quality: String,
    /// Condition level
    #[arg(long, default_value = "AVERAGE")]
    pub(crate) condition: String,
    /// Complexity level
    #[arg(long, default_value = "STANDARD")]
    pub(crate) complexity: String,
    /// Building age in years
    #[arg(long, value_parser = parse_non_negative)]
    pub(crate) age_years: f64,
    /// Normalized size multiplier derived by the caller
    #[arg(long, default_value_t = 1.0, value_parser = parse_positive)]
    pub(crate) size_factor: f64,
    /// Normalized height multiplier derived by the caller
    #[arg(long, default_value_t = 1.0, value_parser = parse_positive)]
    pub(crate) height_factor: f64,
    /// Catalog document to price against (defaults to the standard table)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Pin a registered catalog version instead of the active one
    #[arg(long)]
    pub(crate) catalog_version: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file of cost requests
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Catalog document to price against (defaults to the standard table)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Building age in years for the worked example
    #[arg(long, default_value_t = 8.0, value_parser = parse_non_negative)]
    pub(crate) age_years: f64,
}

fn build_engine(catalog: Option<PathBuf>) -> Result<CostingEngine, AppError> {
    let registry = Arc::new(CatalogRegistry::new());
    bootstrap_registry(&registry, &CatalogConfig { path: catalog })?;
    Ok(CostingEngine::new(registry))
}

pub(crate) fn run_cost(args: CostArgs) -> Result<(), AppError> {
    let CostArgs {
        building_type,
        region,
        quality,
        condition,
        complexity,
        age_years,
        size_factor,
        height_factor,
        catalog,
        catalog_version,
    } = args;

    let engine = build_engine(catalog)?;
    let request = CostRequest {
        building_type,
        region,
        quality,
        condition,
        complexity,
        age_years,
        size_factor,
        height_factor,
    };

    let result = engine.calculate(&request, catalog_version.as_deref())?;
    render_result(&result);
    Ok(())
}

pub(crate) fn run_batch_file(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs { file, catalog } = args;

    let engine = build_engine(catalog)?;
    let snapshot = engine.registry().snapshot(None)?;
    let reader = File::open(&file)?;
    let report = run_batch(&snapshot, reader);

    println!(
        "Priced {} row(s) against catalog {} ({} ok, {} failed)",
        report.outcomes.len(),
        report.catalog_version,
        report.succeeded,
        report.failed
    );
    for outcome in &report.outcomes {
        match outcome {
            RowOutcome::Success { row, result } => {
                println!("  row {row}: {:.2}", result.final_cost);
            }
            RowOutcome::Error { row, error } => {
                println!("  row {row}: error - {error}");
            }
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { age_years } = args;

    println!("Replacement cost engine demo");

    let engine = build_engine(None)?;
    for info in engine.registry().versions() {
        let marker = if info.active { " (active)" } else { "" };
        println!(
            "- catalog {} updated {}{marker}",
            info.version, info.last_updated
        );
    }

    let request = CostRequest {
        building_type: "RES".to_string(),
        region: "BC-NORTH".to_string(),
        quality: "CUSTOM".to_string(),
        condition: "GOOD".to_string(),
        complexity: "STANDARD".to_string(),
        age_years,
        size_factor: 1.0,
        height_factor: 1.0,
    };

    println!("\nWorked example: custom residential build, north region");
    let result = engine.calculate(&request, None)?;
    render_result(&result);

    println!("\nBatch sample");
    let csv = "buildingType,region,quality,condition,complexity,ageYears,sizeFactor,heightFactor\n\
               COM,BC-CENTRAL,STANDARD,AVERAGE,SIMPLE,15,1.1,1.0\n\
               AGR,BC-SOUTH,ECONOMY,FAIR,SIMPLE,40,1.0,1.0\n\
               RES,BC-EAST,CUSTOM,GOOD,STANDARD,8,1.0,1.0\n";
    let snapshot = engine.registry().snapshot(None)?;
    let report = run_batch(&snapshot, csv.as_bytes());
    for outcome in &report.outcomes {
        match outcome {
            RowOutcome::Success { row, result } => {
                println!("  row {row}: {:.2}", result.final_cost);
            }
            RowOutcome::Error { row, error } => {
                println!("  row {row}: error - {error}");
            }
        }
    }
    println!(
        "{} ok, {} failed against catalog {}",
        report.succeeded, report.failed, report.catalog_version
    );

    Ok(())
}

fn render_result(result: &CostResult) {
    for line in &result.breakdown {
        println!("  {:<24} {:>12.4}", line.label, line.value);
    }
    println!(
        "Final cost {:.2} (catalog {})",
        result.final_cost, result.catalog_version
    );
}
