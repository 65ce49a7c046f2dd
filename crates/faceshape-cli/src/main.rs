use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use faceshape_core::{
    classify_measurements_with, classify_with, GaussianScorer, ShapeArchetype, StyleCatalog,
};
use serde::Serialize;
use std::borrow::Cow;
use std::path::PathBuf;

mod config;
mod input;
mod render;

use config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "faceshape", version, about = "Classify face shapes from facial landmarks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a face from a landmark (or measurement) JSON file
    Classify {
        /// Landmark JSON file, or `-` for stdin
        input: PathBuf,
        /// Treat the input as a face-measurement object instead of landmarks
        #[arg(short, long)]
        measurements: bool,
        /// Print the result as JSON
        #[arg(short, long)]
        json: bool,
        /// Style catalog TOML overriding the built-in tips
        #[arg(long)]
        tips_file: Option<PathBuf>,
    },
    /// Show style tips for a face shape
    Tips {
        /// Face shape label (e.g., "oval", "heart")
        shape: String,
        #[arg(short, long)]
        json: bool,
        #[arg(long)]
        tips_file: Option<PathBuf>,
    },
    /// List the face shapes
    Shapes {
        #[arg(short, long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ShapeListing {
    shape: ShapeArchetype,
    description: &'static str,
}

fn load_catalog(config: &Config) -> Result<Cow<'static, StyleCatalog>> {
    match &config.tips_file {
        Some(path) => Ok(Cow::Owned(StyleCatalog::load(path)?)),
        None => Ok(Cow::Borrowed(StyleCatalog::builtin())),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let env = Config::from_env();

    match cli.command {
        Commands::Classify {
            input,
            measurements,
            json,
            tips_file,
        } => {
            let config = env.with_overrides(json, tips_file);
            let catalog = load_catalog(&config)?;
            let src = input::read_source(&input)?;

            let result = if measurements {
                let m = input::parse_measurements(&src)?;
                classify_measurements_with(&GaussianScorer, &catalog, &m)
            } else {
                let landmarks = input::parse_landmarks(&src)?;
                tracing::debug!(points = landmarks.len(), "loaded landmarks");
                classify_with(&GaussianScorer, &catalog, &landmarks)
                    .context("could not analyze this photo")?
            };

            match config.output {
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Text => print!("{}", render::classification(&result)),
            }
        }
        Commands::Tips {
            shape,
            json,
            tips_file,
        } => {
            let config = env.with_overrides(json, tips_file);
            let catalog = load_catalog(&config)?;
            if shape.parse::<ShapeArchetype>().is_err() {
                tracing::warn!(shape = %shape, "unknown face shape, showing general tips");
            }
            let tips = catalog.tips_for_label(&shape);

            match config.output {
                OutputFormat::Json => print_json(tips)?,
                OutputFormat::Text => print!("{}", render::tips(tips)),
            }
        }
        Commands::Shapes { json } => {
            let config = env.with_overrides(json, None);
            match config.output {
                OutputFormat::Json => {
                    let listing: Vec<ShapeListing> = ShapeArchetype::ALL
                        .into_iter()
                        .map(|shape| ShapeListing {
                            shape,
                            description: shape.description(),
                        })
                        .collect();
                    print_json(&listing)?;
                }
                OutputFormat::Text => print!("{}", render::shapes()),
            }
        }
    }

    Ok(())
}
