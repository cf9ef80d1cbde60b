use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use posif_cli::config::PosifConfig;
use posif_cli::pipeline::{self, PipelineOptions};
use posif_core::models::{Organism, StrandMode};

fn annotation_path(matches: &ArgMatches) -> Result<PathBuf> {
    if let Some(gff) = matches.get_one::<PathBuf>("gff") {
        return Ok(gff.clone());
    }

    let organism: Organism = matches
        .get_one::<String>("organism")
        .expect("--organism or --gff is required")
        .parse()?;
    let annotations_dir = matches
        .get_one::<PathBuf>("annotations-dir")
        .expect("--annotations-dir has a default");

    Ok(organism.annotation_path(annotations_dir))
}

pub fn run_posif(matches: &ArgMatches) -> Result<()> {
    let strand_mode: StrandMode = matches
        .get_one::<String>("strand-type")
        .expect("--strand-type is required")
        .parse()?;

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(p) => PosifConfig::try_from_path(p)
            .with_context(|| format!("Failed to load config file: {}", p.display()))?,
        None => PosifConfig::default(),
    };
    if let Some(contamination) = matches.get_one::<f64>("contamination") {
        config.detector.contamination = *contamination;
    }

    let options = PipelineOptions {
        annotation: annotation_path(matches)?,
        strand_mode,
        fwd: matches.get_one::<PathBuf>("fwd").cloned(),
        rev: matches.get_one::<PathBuf>("rev").cloned(),
        perbase: matches.get_one::<PathBuf>("perbase").cloned(),
        output_dir: matches
            .get_one::<PathBuf>("output-dir")
            .expect("--output-dir is required")
            .clone(),
        detector: config.detector,
        write_scores: matches.get_flag("scores"),
    };

    info!(
        "Running {} detection (contamination {})",
        options.strand_mode, options.detector.contamination
    );

    let written = pipeline::run(options)?;
    info!("Wrote {} files", written.len());

    Ok(())
}
