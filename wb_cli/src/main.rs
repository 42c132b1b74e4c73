//! # Loadsheet CLI Application
//!
//! Command-line front end for the weight-and-balance engine. Collects the
//! load from flags, runs `wb_core::calculate` and prints a load sheet (or the
//! JSON result with `--json`).
//!
//! ## Exit Codes
//!
//! - `0` - load computed and within all limits
//! - `1` - input, configuration or file error
//! - `2` - load computed but outside at least one limit

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use wb_core::config::Compartment;
use wb_core::equations::Equation;
use wb_core::units::Pounds;
use wb_core::{
    calculate, load_configuration, save_configuration, BagManifest, CalculationResult, ConfigDocument,
    Configuration, LoadRequest, WbError, Zone, ZoneOccupancy,
};

/// Loadsheet - aircraft weight and balance
#[derive(Parser)]
#[command(name = "wb_cli")]
#[command(version)]
#[command(about = "Compute ZFW, CG, stabilizer trim and bag loading instructions")]
struct Cli {
    /// Configuration document (JSON); the built-in reference fleet if omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tail number
    #[arg(long, default_value = "N001")]
    tail: String,

    /// Zone A passengers as ADULTS,CHILDREN,INFANTS
    #[arg(long, default_value = "30,5,0", value_parser = parse_counts, allow_hyphen_values = true)]
    zone_a: Counts,

    /// Zone B passengers as ADULTS,CHILDREN,INFANTS
    #[arg(long, default_value = "40,0,0", value_parser = parse_counts, allow_hyphen_values = true)]
    zone_b: Counts,

    /// Zone C passengers as ADULTS,CHILDREN,INFANTS
    #[arg(long, default_value = "20,0,0", value_parser = parse_counts, allow_hyphen_values = true)]
    zone_c: Counts,

    /// Number of standard bags
    #[arg(long, default_value_t = 80, allow_hyphen_values = true)]
    standard_bags: i32,

    /// Number of heavy bags
    #[arg(long, default_value_t = 20, allow_hyphen_values = true)]
    heavy_bags: i32,

    /// Fuel on board (lb)
    #[arg(long, default_value_t = 27_000.0, allow_hyphen_values = true)]
    fuel: f64,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Write the reference configuration to this path and exit
    #[arg(long)]
    write_reference: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy)]
struct Counts {
    adults: i32,
    children: i32,
    infants: i32,
}

fn parse_counts(s: &str) -> Result<Counts, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected ADULTS,CHILDREN,INFANTS, got '{}'", s));
    }
    let parse = |p: &str| p.parse::<i32>().map_err(|e| format!("'{}': {}", p, e));
    Ok(Counts {
        adults: parse(parts[0])?,
        children: parse(parts[1])?,
        infants: parse(parts[2])?,
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &cli.write_reference {
        let doc = ConfigDocument::new("Reference A220 fleet", Configuration::reference());
        return match save_configuration(&doc, path) {
            Ok(()) => {
                info!(path = %path.display(), "wrote reference configuration");
                ExitCode::SUCCESS
            }
            Err(e) => report_error(&e),
        };
    }

    let config = match &cli.config {
        Some(path) => match load_configuration(path) {
            Ok(doc) => doc.configuration,
            Err(e) => return report_error(&e),
        },
        None => Configuration::reference(),
    };

    let request = LoadRequest {
        aircraft_id: cli.tail.clone(),
        zones: [(Zone::A, cli.zone_a), (Zone::B, cli.zone_b), (Zone::C, cli.zone_c)]
            .into_iter()
            .map(|(zone, c)| ZoneOccupancy::new(zone, c.adults, c.children, c.infants))
            .collect(),
        bags: BagManifest::new(cli.standard_bags, cli.heavy_bags),
        fuel: Pounds(cli.fuel),
    };

    match calculate(&config, &request) {
        Ok(result) => {
            if cli.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => return report_error(&WbError::serialization_error(e.to_string())),
                }
            } else {
                print_load_sheet(&config, &result);
            }
            if result.passes() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(e) => report_error(&e),
    }
}

fn report_error(e: &WbError) -> ExitCode {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    ExitCode::FAILURE
}

fn print_load_sheet(config: &Configuration, result: &CalculationResult) {
    let mtow = config
        .aircraft(&result.aircraft_id)
        .map(|a| config.effective_mtow(a))
        .unwrap_or(config.mtow);

    println!("═══════════════════════════════════════");
    println!("  LOAD SHEET - {}", result.aircraft_id);
    println!("═══════════════════════════════════════");
    println!();
    println!("Weights:");
    println!("  Passengers:   {:.0} lb", result.passenger_weight.0);
    println!("  Bags:         {:.0} lb", result.bag_weight.0);
    println!("  ZFW:          {:.0} lb", result.zfw.0);
    println!("  Fuel:         {:.0} lb", result.fuel.0);
    println!("  Total Weight: {:.0} lb (Max: {:.0})", result.total_weight.0, mtow.0);
    if let Some(landing) = result.estimated_landing_weight {
        println!("  Landing (est): {:.0} lb", landing.0);
    }
    println!();
    println!("Balance:");
    println!("  CG:        {:.2} ft (Range: {:.1}-{:.1})",
        result.cg.0,
        config.cg_envelope.min.0,
        config.cg_envelope.max.0
    );
    println!("  As loaded: {:.2} ft", result.initial_cg.0);
    println!("  Stab Trim: {}°", result.stab_trim.0);
    println!();
    println!("Load Instructions:");
    for (compartment, weight) in [
        (Compartment::Forward, result.bag_distribution.forward),
        (Compartment::Aft, result.bag_distribution.aft),
    ] {
        println!("  Bags {:<8} {:.0} lb @ {:.1} ft",
            format!("{}:", compartment.display_name()),
            weight.0,
            config.compartment_arm(compartment).0
        );
    }
    println!();
    println!("Checks:");
    println!("  ZFW:     {}", status_icon(result.checks.zfw_ok));
    println!("  MTOW:    {}", status_icon(result.checks.mtow_ok));
    println!("  CG:      {}", status_icon(result.checks.cg_ok));
    println!("  Landing: {}", status_icon(result.checks.landing_ok));
    println!();
    println!("═══════════════════════════════════════");
    if result.passes() {
        println!("  RESULT: SAFE");
    } else {
        let failed: Vec<String> = result.failed_checks().iter().map(ToString::to_string).collect();
        println!("  RESULT: UNSAFE (failed: {})", failed.join(", "));
    }
    println!("═══════════════════════════════════════");
    println!();
    println!("Formulas Used:");
    for eq in Equation::ALL {
        let meta = eq.metadata();
        println!("  {} = {}", meta.symbol, meta.formula);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
