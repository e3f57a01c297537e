//! Command-line front end for the Id-Vd characteristic tool.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use mos_api::HttpServerConfig;
use mos_core::chart::AppInfo;
use mos_core::csv_export::write_csv_curves;
use mos_core::curves::{Curve, CurveSet};
use mos_core::inputs::{InputOverrides, VgsOverrides};
use mos_core::psf::write_psf_curves;
use mos_core::validate::validate;

const LOG_ENV: &str = "MOSCURVE_LOG";

#[derive(Parser)]
#[command(name = "moscurve")]
#[command(about = "Ids vs Vds characteristics of square-law NMOS and PMOS devices", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute curves and print a summary
    Curves(CurvesArgs),
    /// Serve the curve computation over HTTP
    Serve(ServeArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Sweep,
    Single,
}

#[derive(Args)]
struct CurvesArgs {
    /// NMOS transconductance coefficient (default: 1e-3)
    #[arg(long, allow_negative_numbers = true)]
    kn: Option<f64>,

    /// PMOS transconductance coefficient (default: 2e-3)
    #[arg(long, allow_negative_numbers = true)]
    kp: Option<f64>,

    /// Threshold voltage (default: 1)
    #[arg(long, allow_negative_numbers = true)]
    vth: Option<f64>,

    /// Gate voltage mode
    #[arg(long, value_enum, default_value = "sweep")]
    mode: ModeArg,

    /// Sweep start (default: Vth - 2)
    #[arg(long, allow_negative_numbers = true)]
    vgs_min: Option<f64>,

    /// Sweep stop (default: 5)
    #[arg(long, allow_negative_numbers = true)]
    vgs_max: Option<f64>,

    /// Gate voltage in single mode (default: Vth + 1)
    #[arg(long, allow_negative_numbers = true)]
    vgs: Option<f64>,

    /// Drain axis start (default: 0)
    #[arg(long, allow_negative_numbers = true)]
    vds_min: Option<f64>,

    /// Drain axis stop (default: 10)
    #[arg(long, allow_negative_numbers = true)]
    vds_max: Option<f64>,

    /// Output precision (1-15 significant digits)
    #[arg(long, default_value_t = 6, value_parser = parse_precision)]
    precision: usize,

    /// Print every sample instead of the endpoints
    #[arg(long)]
    full: bool,

    /// Write curves to PSF text file
    #[arg(short = 'o', long = "psf", value_name = "PATH")]
    psf: Option<PathBuf>,

    /// Write curves to CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,
}

fn parse_precision(value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(p) if (1..=15).contains(&p) => Ok(p),
        _ => Err("precision must be between 1 and 15".to_string()),
    }
}

impl CurvesArgs {
    fn overrides(&self) -> InputOverrides {
        InputOverrides {
            kn: self.kn,
            kp: self.kp,
            vth: self.vth,
            vgs: Some(match self.mode {
                ModeArg::Sweep => VgsOverrides::Sweep {
                    min: self.vgs_min,
                    max: self.vgs_max,
                },
                ModeArg::Single => VgsOverrides::Single { value: self.vgs },
            }),
            vds_min: self.vds_min,
            vds_max: self.vds_max,
        }
    }
}

fn init_logging() {
    let level = std::env::var(LOG_ENV).unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Command::Curves(args) => run_curves(&args),
        Command::Serve(args) => run_serve(args),
    }
}

fn run_curves(args: &CurvesArgs) -> Result<()> {
    let raw = args.overrides().resolve();
    tracing::debug!(?raw, "resolved inputs");

    let params = match validate(&raw) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    };

    let set = CurveSet::compute(&params);
    print_curves(&set, args.precision, args.full);

    if let Some(path) = &args.psf {
        write_psf_curves(&set.curves, path, args.precision)
            .with_context(|| format!("failed to write psf: {}", path.display()))?;
        println!("psf written: {}", path.display());
    }
    if let Some(path) = &args.csv {
        write_csv_curves(&set.curves, path, args.precision)
            .with_context(|| format!("failed to write csv: {}", path.display()))?;
        println!("csv written: {}", path.display());
    }
    Ok(())
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;
    let config = HttpServerConfig {
        bind_addr: args.bind,
    };
    runtime
        .block_on(mos_api::run(config))
        .map_err(anyhow::Error::msg)
}

fn print_curves(set: &CurveSet, precision: usize, full: bool) {
    println!("{}", AppInfo::TITLE);
    println!("{}", set.chart.title);
    println!(
        "curves: {}  x: {}  y: {}",
        set.len(),
        set.chart.x_label,
        set.chart.y_label
    );
    for curve in &set.curves {
        if full {
            print_curve_samples(curve, precision);
        } else {
            print_curve_summary(curve, precision);
        }
    }
}

fn print_curve_summary(curve: &Curve, precision: usize) {
    let (Some(first), Some(last)) = (curve.samples.first(), curve.samples.last()) else {
        println!("{:<20} {:?}", curve.label, curve.region);
        return;
    };
    println!(
        "{:<20} {:<7} Ids({:.*e})={:.*e}  Ids({:.*e})={:.*e}",
        curve.label,
        format!("{:?}", curve.region),
        precision,
        first.vds,
        precision,
        first.ids,
        precision,
        last.vds,
        precision,
        last.ids
    );
}

fn print_curve_samples(curve: &Curve, precision: usize) {
    println!("{} ({:?})", curve.label, curve.region);
    for sample in &curve.samples {
        println!("  {:>14.*e}  {:>14.*e}", precision, sample.vds, precision, sample.ids);
    }
}
