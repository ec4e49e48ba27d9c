use anyhow::Context;
use clap::{Parser, Subcommand};
use propx_core::ConlluParser;
use propx_extract::{FeatureExtractor, PropertyDescription};
use propx_similarity::SimilarityMatrix;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Feature extraction and similarity scoring for property descriptions
#[derive(Parser, Debug)]
#[command(name = "propx")]
#[command(about = "Extract property features and score description similarity", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract features for every description and write one JSON per input
    Extract {
        /// Path to the noun dictionary (JSON: name -> [noun phrase])
        #[arg(short, long)]
        dict: PathBuf,

        /// Directory of parsed descriptions (*.conllu)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for <name>.json feature files
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Score every pair of descriptions and write the similarity matrix
    Matrix {
        /// Path to the noun dictionary (JSON: name -> [noun phrase])
        #[arg(short, long)]
        dict: PathBuf,

        /// Directory of parsed descriptions (*.conllu)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the matrix text (3-decimal values)
        #[arg(short, long, default_value = "sim_matrix.txt")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting propx v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Extract { dict, input, out } => extract(&dict, &input, &out),
        Command::Matrix { dict, input, out } => matrix(&dict, &input, &out),
    }
}

fn extract(dict: &Path, input: &Path, out: &Path) -> anyhow::Result<()> {
    let descriptions = load_descriptions(dict, input)?;
    std::fs::create_dir_all(out)
        .with_context(|| format!("creating output directory {}", out.display()))?;

    for (name, description) in &descriptions {
        let path = out.join(format!("{name}.json"));
        std::fs::write(&path, description.features_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(
            "{}: {} feature names",
            name,
            description.features().len()
        );
    }
    info!("Wrote {} feature files to {}", descriptions.len(), out.display());
    Ok(())
}

fn matrix(dict: &Path, input: &Path, out: &Path) -> anyhow::Result<()> {
    let descriptions = load_descriptions(dict, input)?;
    let matrix = SimilarityMatrix::build(&descriptions);
    matrix
        .save(out)
        .with_context(|| format!("writing {}", out.display()))?;
    info!("Labels: {}", matrix.labels().join(" "));
    info!(
        "Wrote {}x{} similarity matrix to {}",
        matrix.len(),
        matrix.len(),
        out.display()
    );
    Ok(())
}

/// Build every description in `input`, in parallel over files.
///
/// The extractor and parser are shared read-only; entries come back labeled
/// with the file base name, in sorted file order.
fn load_descriptions(
    dict: &Path,
    input: &Path,
) -> anyhow::Result<Vec<(String, PropertyDescription)>> {
    let extractor = FeatureExtractor::builder()
        .dict_path(dict)
        .build()
        .with_context(|| format!("loading dictionary {}", dict.display()))?;
    info!(
        "Dictionary loaded: {} feature names",
        extractor.dict().len()
    );

    let mut paths: Vec<PathBuf> = std::fs::read_dir(input)
        .with_context(|| format!("reading input directory {}", input.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "conllu"))
        .collect();
    paths.sort();
    info!("Found {} parsed descriptions in {}", paths.len(), input.display());

    let parser = ConlluParser::new();
    paths
        .par_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let description = PropertyDescription::builder(&extractor)
                .path(path)
                .build(&parser)
                .with_context(|| format!("processing {}", path.display()))?;
            Ok((name, description))
        })
        .collect()
}
