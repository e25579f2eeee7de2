//! Feature Encoder CLI
//!
//! JSON-lines observations → JSON-lines feature bundles (or flat vectors)

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fe_core::{EncoderConfig, FeatureEncoder, RawObservation};
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(name = "fe_cli")]
#[command(about = "Encode football observations into policy features", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(long, global = true, default_value = "false")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON-lines file of observations
    Encode {
        /// Input file, one observation JSON object per line
        #[arg(long)]
        r#in: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Emit flat 290-float vectors instead of keyed bundles
        #[arg(long, default_value = "false")]
        flat: bool,

        /// Encoder config JSON (falls back to FE_ENCODER_CONFIG, then defaults)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the feature dimension descriptor
    Dims,

    /// Print a JSON Schema
    Schema {
        #[arg(value_enum)]
        kind: SchemaKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaKind {
    Observation,
    Bundle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    match cli.command {
        Commands::Encode { r#in, out, flat, config } => {
            let config = match config {
                Some(path) => EncoderConfig::load(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => EncoderConfig::from_env_or_default(),
            };
            let encoder = FeatureEncoder::new(config);

            let input = read_observations(&r#in)?;
            info!(count = input.observations.len(), input = %r#in.display(), "encoding observations");

            let writer: Box<dyn Write> = match &out {
                Some(path) => Box::new(
                    File::create(path).with_context(|| format!("creating {}", path.display()))?,
                ),
                None => Box::new(io::stdout().lock()),
            };
            let written = encode_all(&encoder, &input, flat, BufWriter::new(writer))?;

            info!(written, "done");
        }

        Commands::Dims => {
            let dims = FeatureEncoder::default().feature_dims();
            println!("{}", serde_json::to_string_pretty(&dims)?);
        }

        Commands::Schema { kind } => {
            let schema = match kind {
                SchemaKind::Observation => fe_core::observation_schema(),
                SchemaKind::Bundle => fe_core::bundle_schema(),
            };
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

/// Parsed input with the 1-based source line of each observation
struct ObservationFile {
    line_numbers: Vec<usize>,
    observations: Vec<RawObservation>,
}

/// Blank lines are skipped
fn read_observations(path: &Path) -> Result<ObservationFile> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut parsed = ObservationFile { line_numbers: Vec::new(), observations: Vec::new() };

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("reading line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let obs = RawObservation::from_json_str(&line)
            .with_context(|| format!("{}:{line_no}: invalid observation", path.display()))?;
        parsed.line_numbers.push(line_no);
        parsed.observations.push(obs);
    }

    debug!(count = parsed.observations.len(), "parsed observations");
    Ok(parsed)
}

fn encode_all<W: Write>(
    encoder: &FeatureEncoder,
    input: &ObservationFile,
    flat: bool,
    mut writer: W,
) -> Result<usize> {
    let results = encoder.encode_batch(&input.observations);

    for (line_no, result) in input.line_numbers.iter().zip(results) {
        let bundle = match result {
            Ok(bundle) => bundle,
            Err(err) => bail!("line {line_no}: {err}"),
        };
        if flat {
            serde_json::to_writer(&mut writer, &bundle.to_flat_vector())?;
        } else {
            serde_json::to_writer(&mut writer, &bundle)?;
        }
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(input.observations.len())
}
