use std::fs::{create_dir_all, remove_file, rename};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use posif_annotate::annotate;
use posif_core::consts::{FWD_OUTPUT_FILE, OUTPUT_FILE, REV_OUTPUT_FILE};
use posif_core::models::{AnnotatedRegion, GeneFeature, ScoredSample, Strand, StrandMode};
use posif_core::PosifError;
use posif_detect::{Detector, DetectorConfig};
use posif_io::{AnnotatedWrite, ScoredWrite, read_coverage, read_gene_features};

/// Suffix of files being written before they are moved into place.
const PARTIAL_SUFFIX: &str = ".partial";

/// Everything one `posif run` invocation needs.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// GFF-like annotation table.
    pub annotation: PathBuf,
    pub strand_mode: StrandMode,
    pub fwd: Option<PathBuf>,
    pub rev: Option<PathBuf>,
    pub perbase: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub detector: DetectorConfig,
    /// Also write per-position scores next to each output file.
    pub write_scores: bool,
}

/// Coverage tracks of a run, validated against the strand mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Tracks {
    Stranded { fwd: PathBuf, rev: PathBuf },
    Unstranded { perbase: PathBuf },
}

impl Tracks {
    ///
    /// Pick the tracks the strand mode needs.
    ///
    /// # Errors
    /// [`PosifError::MissingRequiredInput`] when `strand_spec` lacks either
    /// strand or `non_strand_spec` lacks the combined track.
    ///
    pub fn resolve(
        mode: StrandMode,
        fwd: Option<PathBuf>,
        rev: Option<PathBuf>,
        perbase: Option<PathBuf>,
    ) -> Result<Self, PosifError> {
        match mode {
            StrandMode::StrandSpec => match (fwd, rev) {
                (Some(fwd), Some(rev)) => Ok(Tracks::Stranded { fwd, rev }),
                _ => Err(PosifError::MissingRequiredInput(
                    "strand_spec needs both a forward and a reverse coverage track".to_string(),
                )),
            },
            StrandMode::NonStrandSpec => match perbase {
                Some(perbase) => Ok(Tracks::Unstranded { perbase }),
                None => Err(PosifError::MissingRequiredInput(
                    "non_strand_spec needs a per-base coverage track".to_string(),
                )),
            },
        }
    }
}

/// Result of detection and annotation on one track, not yet written.
pub struct TrackOutput {
    pub file_name: &'static str,
    pub rows: Vec<AnnotatedRegion>,
    pub scored: Vec<ScoredSample>,
}

///
/// Detect and annotate the regions of a single coverage track.
///
/// Builds its own detector, so several tracks can be processed at once
/// against the same gene table.
///
pub fn process_track(
    path: &Path,
    strand: Option<Strand>,
    features: &[GeneFeature],
    config: &DetectorConfig,
    file_name: &'static str,
) -> Result<TrackOutput> {
    let samples = read_coverage(path)
        .with_context(|| format!("Failed to read coverage track: {}", path.display()))?;

    let detector = Detector::new(config.clone())?;
    let scored = detector
        .score_samples(&samples)
        .with_context(|| format!("Failed to score coverage track: {}", path.display()))?;
    let regions = detector.regions_from_scored(&scored);
    info!("{}: {} candidate regions", path.display(), regions.len());

    let rows = annotate(&regions, features, strand);

    Ok(TrackOutput {
        file_name,
        rows,
        scored,
    })
}

fn scores_file_name(file_name: &str) -> String {
    format!("{}.scores.tsv", file_name.trim_end_matches(".csv"))
}

fn stage_outputs(
    outputs: &[TrackOutput],
    output_dir: &Path,
    write_scores: bool,
    staged: &mut Vec<(PathBuf, PathBuf)>,
) -> Result<()> {
    for output in outputs {
        let target = output_dir.join(output.file_name);
        let partial = output_dir.join(format!("{}{}", output.file_name, PARTIAL_SUFFIX));
        staged.push((partial.clone(), target));
        output.rows.write_csv(&partial)?;

        if write_scores {
            let name = scores_file_name(output.file_name);
            let target = output_dir.join(&name);
            let partial = output_dir.join(format!("{}{}", name, PARTIAL_SUFFIX));
            staged.push((partial.clone(), target));
            output.scored.write_tsv(&partial)?;
        }
    }
    Ok(())
}

///
/// Write every track output, or nothing.
///
/// Files are first written under a temporary name and only renamed once all
/// of them were written successfully.
///
fn write_outputs(
    outputs: &[TrackOutput],
    output_dir: &Path,
    write_scores: bool,
) -> Result<Vec<PathBuf>> {
    create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::new();
    if let Err(e) = stage_outputs(outputs, output_dir, write_scores, &mut staged) {
        remove_all(staged.iter().map(|(partial, _)| partial));
        return Err(e.context("Failed to write output files"));
    }

    let mut finished = Vec::with_capacity(staged.len());
    for (i, (partial, target)) in staged.iter().enumerate() {
        if let Err(e) = rename(partial, target) {
            remove_all(finished.iter().chain(staged[i..].iter().map(|(p, _)| p)));
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to move output into place: {}", target.display())));
        }
        finished.push(target.clone());
    }

    Ok(finished)
}

/// Best-effort removal of files left by an aborted write.
fn remove_all<'a>(paths: impl Iterator<Item = &'a PathBuf>) {
    for path in paths {
        if path.is_file() {
            let _ = remove_file(path);
        }
    }
}

///
/// Run the whole pipeline: validate inputs, load genes, detect and annotate
/// each track, then write the output files.
///
/// Returns the paths of the files written. On any error nothing is written.
///
pub fn run(options: PipelineOptions) -> Result<Vec<PathBuf>> {
    let tracks = Tracks::resolve(
        options.strand_mode,
        options.fwd,
        options.rev,
        options.perbase,
    )?;

    let features = read_gene_features(&options.annotation).with_context(|| {
        format!(
            "Failed to load annotation table: {}",
            options.annotation.display()
        )
    })?;
    if features.is_empty() {
        warn!(
            "No gene features in {}, every region will be intergenic",
            options.annotation.display()
        );
    }

    let config = &options.detector;
    let outputs = match &tracks {
        Tracks::Stranded { fwd, rev } => {
            let (fwd_output, rev_output) = rayon::join(
                || process_track(fwd, Some(Strand::Plus), &features, config, FWD_OUTPUT_FILE),
                || process_track(rev, Some(Strand::Minus), &features, config, REV_OUTPUT_FILE),
            );
            vec![fwd_output?, rev_output?]
        }
        Tracks::Unstranded { perbase } => {
            vec![process_track(perbase, None, &features, config, OUTPUT_FILE)?]
        }
    };

    let written = write_outputs(&outputs, &options.output_dir, options.write_scores)?;
    for path in &written {
        info!("Output written to {}", path.display());
    }

    Ok(written)
}
