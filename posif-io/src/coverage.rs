use std::io::BufRead;
use std::path::Path;

use log::info;

use posif_core::models::CoverageSample;
use posif_core::utils::get_dynamic_reader;
use posif_core::{PosifError, Result};

/// 0-based column holding the genomic position.
pub const POSITION_COLUMN: usize = 1;
/// 0-based column holding the read count.
pub const READCOUNT_COLUMN: usize = 2;

///
/// Parse a per-base coverage table.
///
/// Tab-separated, no header. Column 1 is the position and column 2 the read
/// count, a finite non-negative number; every other column is ignored.
/// Blank lines are skipped.
///
pub fn parse_coverage<R: BufRead>(reader: R) -> Result<Vec<CoverageSample>> {
    let mut samples = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() <= READCOUNT_COLUMN {
            return Err(PosifError::CoverageParse {
                line: line_num + 1,
                reason: format!("expected at least 3 columns, found {}", fields.len()),
            });
        }

        let position: u32 = fields[POSITION_COLUMN].trim().parse().map_err(|_| {
            PosifError::CoverageParse {
                line: line_num + 1,
                reason: format!("invalid position: {}", fields[POSITION_COLUMN]),
            }
        })?;
        let readcount: f64 = fields[READCOUNT_COLUMN].trim().parse().map_err(|_| {
            PosifError::CoverageParse {
                line: line_num + 1,
                reason: format!("invalid read count: {}", fields[READCOUNT_COLUMN]),
            }
        })?;
        if !readcount.is_finite() || readcount < 0.0 {
            return Err(PosifError::CoverageParse {
                line: line_num + 1,
                reason: format!("read count must be finite and non-negative: {}", readcount),
            });
        }

        samples.push(CoverageSample::new(position, readcount));
    }

    Ok(samples)
}

///
/// Read a per-base coverage file (plain or gzipped).
///
pub fn read_coverage<P: AsRef<Path>>(path: P) -> Result<Vec<CoverageSample>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    let samples = parse_coverage(reader)?;
    info!("Read {} coverage samples from {}", samples.len(), path.display());
    Ok(samples)
}
