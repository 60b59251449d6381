use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use hunter_css::{Notation, ParseOptions, parse_background, parse_many};
use hunter_engine::logging::{LoggingConfig, init_logging};
use hunter_engine::{Inference, InferenceConfig, infer, load_image};

#[derive(Parser, Debug)]
#[command(author, version, about, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse gradient functions and print their canonical form
    Parse {
        #[arg(required = true)]
        gradients: Vec<String>,
        /// Rewrite stop colors in this notation (rgb, hex, hsl)
        #[arg(long)]
        notation: Option<Notation>,
        #[arg(long, short = 'j', help = "Print the parsed model as JSON")]
        json: bool,
    },
    /// List every gradient inside a `background` value
    Extract { background: String },
    /// Infer a linear gradient from an image file
    Infer {
        image: PathBuf,
        /// Stop color notation (rgb, hex, hsl)
        #[arg(long, default_value = "rgb")]
        format: Notation,
        /// Samples per axis
        #[arg(long)]
        samples: Option<usize>,
        /// Delta-E above which a new stop is considered
        #[arg(long)]
        threshold: Option<f64>,
        #[arg(long, short = 'j', help = "Print the inference result as JSON")]
        json: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_verbosity(cli.verbose));

    let ok = match cli.command {
        Command::Parse { gradients, notation, json } => run_parse(&gradients, notation, json)?,
        Command::Extract { background } => run_extract(&background),
        Command::Infer { image, format, samples, threshold, json } => {
            let mut config = InferenceConfig::default();
            if let Some(n) = samples {
                config.sample_count = n;
            }
            if let Some(t) = threshold {
                config.breakpoint_delta_e = t;
            }
            run_infer(&image, &config, format, json)?
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

// ── parse ────────────────────────────────────────────────────────────────

/// Returns `false` if any input failed to parse.
fn run_parse(inputs: &[String], notation: Option<Notation>, json: bool) -> anyhow::Result<bool> {
    let mut failed = false;

    for result in parse_many(inputs, &ParseOptions::default()) {
        let gradient = match result {
            Ok(g) => g,
            Err(err) => {
                eprintln!("invalid: {}: {}", err.raw, err.kind);
                failed = true;
                continue;
            }
        };
        let gradient = match notation {
            Some(n) => match gradient.with_notation(n) {
                Ok(g) => g,
                Err(kind) => {
                    eprintln!("invalid: {gradient}: {kind}");
                    failed = true;
                    continue;
                }
            },
            None => gradient,
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&gradient).context("serializing gradient")?);
        } else {
            println!("{gradient}");
        }
    }

    Ok(!failed)
}

// ── extract ──────────────────────────────────────────────────────────────

fn run_extract(background: &str) -> bool {
    let results = parse_background(background, &ParseOptions::default());
    if results.is_empty() {
        log::info!("no gradient functions found");
    }

    let mut failed = false;
    for result in results {
        match result {
            Ok(g) => println!("{g}"),
            Err(err) => {
                eprintln!("invalid: {}: {}", err.raw, err.kind);
                failed = true;
            }
        }
    }
    !failed
}

// ── infer ────────────────────────────────────────────────────────────────

fn run_infer(path: &Path, config: &InferenceConfig, notation: Notation, json: bool) -> anyhow::Result<bool> {
    let buffer = load_image(path).with_context(|| format!("loading {}", path.display()))?;
    let inference = infer(&buffer, config).context("inferring gradient")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&inference).context("serializing inference")?);
        return Ok(true);
    }

    println!("{}", render_inference(&inference, notation));
    Ok(true)
}

/// CSS text for a found gradient, `none` otherwise.
fn render_inference(inference: &Inference, notation: Notation) -> String {
    match inference {
        Inference::Found(gradient) => {
            log::info!("{} axis, {} stop(s)", gradient.axis, gradient.stops.len());
            gradient.css(notation)
        }
        Inference::NotFound(reason) => {
            log::info!("no gradient: {reason:?}");
            "none".to_owned()
        }
    }
}
