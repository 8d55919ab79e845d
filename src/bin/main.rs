use clap::Parser;
use std::path::PathBuf;

use stroke2series::signals::{self, TestSignal};
use stroke2series::{analyze, fidelity, format, render, stroke, AnalysisConfig, DomainRange};

#[derive(Parser)]
#[command(
    name = "stroke2series",
    about = "Hand-drawn stroke to graphing-ready real Fourier series"
)]
struct Cli {
    /// Input stroke JSON: an array of {x, y, t} objects in canvas pixels
    #[arg(short, long, conflicts_with = "signal")]
    input: Option<PathBuf>,

    /// Generate a built-in test signal instead of reading a stroke
    /// (sine, mix, triangle, square, saw, offset-sine)
    #[arg(short, long)]
    signal: Option<TestSignal>,

    /// Harmonic count (1-50)
    #[arg(short = 'k', long, default_value = "12")]
    harmonics: usize,

    /// Chaikin smoothing passes (1 disables, max 6)
    #[arg(long, default_value = "4")]
    smoothing: i32,

    /// Uniform arc-length sample count
    #[arg(long, default_value = "1024", allow_negative_numbers = true)]
    samples: i64,

    /// RDP simplification tolerance in canvas pixels
    #[arg(long, default_value = "1.2")]
    tolerance: f64,

    /// Skip the Lanczos sigma taper
    #[arg(long)]
    no_taper: bool,

    /// Export domain lower bound
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    domain_a: f64,

    /// Export domain upper bound
    #[arg(long, default_value = "4", allow_hyphen_values = true)]
    domain_b: f64,

    /// Canvas width the stroke was captured at
    #[arg(long, default_value = "960")]
    width: f64,

    /// Canvas height the stroke was captured at
    #[arg(long, default_value = "520")]
    height: f64,

    /// Write coefficients and reconstruction as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write an SVG overlay of the stroke and its reconstruction
    #[arg(long)]
    render: Option<PathBuf>,

    /// Log per-stage progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AnalysisConfig {
        tolerance: cli.tolerance,
        smoothing_passes: cli.smoothing,
        samples: cli.samples,
        width: cli.width,
        height: cli.height,
        harmonics: cli.harmonics,
        taper: !cli.no_taper,
        verbose: cli.verbose,
    };

    let points = match (&cli.input, cli.signal) {
        (Some(path), _) => stroke::load_stroke(path)?,
        (None, Some(signal)) => {
            let samples = config.samples.max(2) as usize;
            signals::values_to_points(&signal.generate(samples), config.width, config.height)
        }
        (None, None) => return Err("either --input or --signal is required".into()),
    };

    let analysis = analyze(&points, &config)?;
    let domain = DomainRange {
        a: cli.domain_a,
        b: cli.domain_b,
    }
    .normalized();

    // Coefficient table, then the two renderings of the series.
    println!("  k        an          bn");
    println!(" a0  {:>10.4}", analysis.coefficients.a0);
    for (i, (a, b)) in analysis
        .coefficients
        .an
        .iter()
        .zip(&analysis.coefficients.bn)
        .enumerate()
    {
        println!("{:>3}  {:>10.4}  {:>10.4}", i + 1, a, b);
    }
    println!();
    println!("{}", format::series_text(&analysis.coefficients));
    println!(
        "{}  {}",
        format::export_expression(&analysis.coefficients, domain),
        domain.restriction(),
    );

    let report = fidelity::report(
        &analysis.resampled.values,
        &analysis.reconstruction,
        &analysis.coefficients,
    );
    eprint!("{}", report);

    if let Some(path) = &cli.output {
        let dump = serde_json::json!({
            "coefficients": &analysis.coefficients,
            "u": &analysis.resampled.u,
            "values": &analysis.resampled.values,
            "x": &analysis.resampled.x,
            "reconstruction": &analysis.reconstruction,
        });
        std::fs::write(path, serde_json::to_string_pretty(&dump)?)?;
        eprintln!("  Output      {}", path.display());
    }

    if let Some(path) = &cli.render {
        render::render_overlay(&analysis, &config, path)?;
        eprintln!("  Render      {}", path.display());
    }

    Ok(())
}
