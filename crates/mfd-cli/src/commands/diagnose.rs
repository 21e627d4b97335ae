use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::builder::PossibleValuesParser;
use clap::Args;
use mfd_catalog::{load_catalog, Catalog};
use mfd_core::{parse_measured_frequencies, MachineParameters, MEASURED_DIRECTIONS};
use mfd_engine::{build_report, diagnose, DiagnosisReport, DEFAULT_TOLERANCE};

#[derive(Args, Debug)]
pub struct DiagnoseArgs {
    /// CSV catalog of fault signatures.
    #[arg(long)]
    pub catalog: PathBuf,
    /// YAML file with machine parameters; unspecified fields are zero.
    #[arg(long)]
    pub params: Option<PathBuf>,
    /// Comma-separated measured frequencies in Hz.
    #[arg(long)]
    pub frequencies: String,
    /// Direction the vibration was measured along.
    #[arg(long, default_value = "Axiale et radiale",
          value_parser = PossibleValuesParser::new(MEASURED_DIRECTIONS))]
    pub direction: String,
    /// Relative tolerance for frequency matching.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,
    /// Output directory for the JSON report artifact.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Rotation frequency fr in Hz, overriding the parameter file.
    #[arg(long)]
    pub fr: Option<f64>,
    /// Supply frequency fs in Hz, overriding the parameter file.
    #[arg(long)]
    pub fs: Option<f64>,
    /// Gear tooth count Z, overriding the parameter file.
    #[arg(long)]
    pub z: Option<f64>,
    /// Bearing rolling-element count Nb, overriding the parameter file.
    #[arg(long)]
    pub nb: Option<f64>,
    /// Rolling-element diameter Db in metres, overriding the parameter file.
    #[arg(long)]
    pub db: Option<f64>,
    /// Bearing pitch diameter Dp in metres, overriding the parameter file.
    #[arg(long)]
    pub dp: Option<f64>,
    /// Bearing contact angle in degrees, overriding the parameter file.
    #[arg(long = "theta-deg")]
    pub theta_deg: Option<f64>,
    /// Known critical frequency in Hz, overriding the parameter file.
    #[arg(long = "f-critical")]
    pub f_critical: Option<f64>,
    /// Belt passing frequency fp in Hz, overriding the parameter file.
    #[arg(long)]
    pub fp: Option<f64>,
    /// Induction motor slip g, overriding the parameter file.
    #[arg(long)]
    pub g: Option<f64>,
    /// Pole-pair count Nr, overriding the parameter file.
    #[arg(long)]
    pub nr: Option<f64>,
    /// Blade passing frequency in Hz, overriding the parameter file.
    #[arg(long = "f-blades")]
    pub f_blades: Option<f64>,
}

pub fn run(args: &DiagnoseArgs) -> Result<(), Box<dyn Error>> {
    let params = resolve_parameters(args)?;
    let measured = parse_measured_frequencies(&args.frequencies)
        .map_err(|err| Box::new(err) as Box<dyn Error>)?;

    // A broken catalog downgrades to a warning and an empty catalog.
    let catalog = match load_catalog(&args.catalog) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("warning: {err}; proceeding with an empty catalog");
            Catalog::empty()
        }
    };
    if catalog.dropped_rows > 0 {
        eprintln!(
            "warning: dropped {} catalog row(s) missing a name or signature",
            catalog.dropped_rows
        );
    }

    let matches = diagnose(
        &measured,
        &catalog.entries,
        &params,
        &args.direction,
        args.tolerance,
    );
    let report = build_report(
        matches,
        catalog.source_hash.clone(),
        &params,
        args.direction.clone(),
        args.tolerance,
    )
    .map_err(|err| Box::new(err) as Box<dyn Error>)?;

    if let Some(out) = &args.out {
        write_json(out.join("report.json"), &report)?;
    }
    print_summary(&report);
    Ok(())
}

fn resolve_parameters(args: &DiagnoseArgs) -> Result<MachineParameters, Box<dyn Error>> {
    let mut params = match &args.params {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            serde_yaml::from_str(&contents)?
        }
        None => MachineParameters::default(),
    };
    if let Some(fr) = args.fr {
        params.fr = fr;
    }
    if let Some(fs) = args.fs {
        params.fs = fs;
    }
    if let Some(z) = args.z {
        params.z = z;
    }
    if let Some(nb) = args.nb {
        params.nb = nb;
    }
    if let Some(db) = args.db {
        params.db = db;
    }
    if let Some(dp) = args.dp {
        params.dp = dp;
    }
    if let Some(degrees) = args.theta_deg {
        params = params.with_contact_angle_degrees(degrees);
    }
    if let Some(f_critical) = args.f_critical {
        params.f_critical = f_critical;
    }
    if let Some(fp) = args.fp {
        params.fp = fp;
    }
    if let Some(g) = args.g {
        params.g = g;
    }
    if let Some(nr) = args.nr {
        params.nr = nr;
    }
    if let Some(f_blades) = args.f_blades {
        params.f_blades = f_blades;
    }
    Ok(params)
}

fn print_summary(report: &DiagnosisReport) {
    if report.no_fault_detected() {
        println!("No known fault detected.");
        return;
    }
    println!("Potential faults detected:");
    for m in &report.matches {
        let typical: Vec<String> = m.typical.iter().map(|t| format!("{t:.2}")).collect();
        println!(
            "  {} at {} Hz (typical: [{}])",
            m.fault,
            m.measured,
            typical.join(", ")
        );
        if !m.cause.is_empty() {
            println!("    probable cause: {}", m.cause);
        }
    }
}

fn write_json<P: AsRef<Path>, T: serde::Serialize>(
    path: P,
    value: &T,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
