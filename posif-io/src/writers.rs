use std::fs::create_dir_all;
use std::path::Path;

use posif_core::models::{AnnotatedRegion, ScoredSample};

pub const ANNOTATED_HEADER: [&str; 4] = ["name", "start", "end", "location"];
pub const SCORED_HEADER: [&str; 4] = ["position", "readcount", "anomaly_decision", "score"];

fn ensure_parent<T: AsRef<Path>>(path: T) -> std::io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_dir_all(parent)?;
    }
    Ok(())
}

pub trait AnnotatedWrite {
    ///
    /// Write annotated regions to disk as a CSV file with a
    /// `name,start,end,location` header. Missing locations are empty fields.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_csv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;
}

impl AnnotatedWrite for [AnnotatedRegion] {
    fn write_csv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        ensure_parent(&path)?;

        let mut writer = csv::Writer::from_path(path.as_ref())?;
        writer.write_record(ANNOTATED_HEADER)?;
        for row in self {
            writer.write_record([
                row.name.clone(),
                row.start.to_string(),
                row.end.to_string(),
                row.location_label(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

pub trait ScoredWrite {
    ///
    /// Write scored samples to disk as a tab-separated file, decision `-1`
    /// for outliers and `1` for inliers.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;
}

impl ScoredWrite for [ScoredSample] {
    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        ensure_parent(&path)?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_path(path.as_ref())?;
        writer.write_record(SCORED_HEADER)?;
        for sample in self {
            writer.write_record([
                sample.position.to_string(),
                sample.readcount.to_string(),
                sample.decision().to_string(),
                sample.score.to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
