use std::io::BufRead;
use std::path::Path;

use log::info;

use posif_core::consts::GENE_FEATURE_TYPE;
use posif_core::models::{GeneFeature, Strand};
use posif_core::utils::get_dynamic_reader;
use posif_core::{PosifError, Result};

const TYPE_COLUMN: usize = 2;
const START_COLUMN: usize = 3;
const END_COLUMN: usize = 4;
const STRAND_COLUMN: usize = 6;
const ATTRIBUTES_COLUMN: usize = 8;

/// Marks the start of an embedded sequence section in GFF3 files.
const FASTA_DIRECTIVE: &str = "##FASTA";

fn parse_coordinate(field: &str, line: usize, what: &str) -> Result<u32> {
    field.trim().parse().map_err(|_| PosifError::FeatureParse {
        line,
        reason: format!("invalid {}: {}", what, field),
    })
}

///
/// Parse the `gene` rows of a GFF-like annotation table.
///
/// Columns 2, 3, 4, 6 and 8 (0-based) hold the feature type, start, end,
/// strand and attribute string. Lines starting with `#` and blank lines are
/// skipped, and reading stops at a `##FASTA` directive. Rows of any other
/// feature type are dropped.
///
pub fn parse_gene_features<R: BufRead>(reader: R) -> Result<Vec<GeneFeature>> {
    let mut features = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = line_num + 1;

        if line.starts_with(FASTA_DIRECTIVE) {
            break;
        }
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() <= ATTRIBUTES_COLUMN {
            return Err(PosifError::FeatureParse {
                line: line_num,
                reason: format!("expected 9 columns, found {}", fields.len()),
            });
        }

        if fields[TYPE_COLUMN] != GENE_FEATURE_TYPE {
            continue;
        }

        let start = parse_coordinate(fields[START_COLUMN], line_num, "start")?;
        let end = parse_coordinate(fields[END_COLUMN], line_num, "end")?;
        let strand = Strand::from_char(fields[STRAND_COLUMN].chars().next().unwrap_or('.'));

        features.push(GeneFeature {
            start,
            end,
            strand,
            attributes: fields[ATTRIBUTES_COLUMN].to_string(),
        });
    }

    Ok(features)
}

///
/// Read the gene table of an annotation file (plain or gzipped).
///
pub fn read_gene_features<P: AsRef<Path>>(path: P) -> Result<Vec<GeneFeature>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    let features = parse_gene_features(reader)?;
    info!("Loaded {} genes from {}", features.len(), path.display());
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::path::PathBuf;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data")
            .join(file_name)
    }

    #[rstest]
    fn test_parse_gene_features_keeps_genes_only() {
        let data = "\
##gff-version 3
#!genome-build ASM19595v2
NC_000962.3\tRefSeq\tregion\t1\t4411532\t.\t+\t.\tID=NC_000962.3:1..4411532;
NC_000962.3\tRefSeq\tgene\t1\t1524\t.\t+\t.\tID=gene-Rv0001;Name=dnaA;
NC_000962.3\tRefSeq\tCDS\t1\t1524\t.\t+\t0\tID=cds-NP_214515.1;Parent=gene-Rv0001;
NC_000962.3\tRefSeq\tgene\t2052\t3260\t.\t-\t.\tID=gene-Rv0002;Name=dnaN;
";
        let features = parse_gene_features(data.as_bytes()).unwrap();
        assert_eq!(
            features,
            vec![
                GeneFeature::new(1, 1524, Strand::Plus, "ID=gene-Rv0001;Name=dnaA;"),
                GeneFeature::new(2052, 3260, Strand::Minus, "ID=gene-Rv0002;Name=dnaN;"),
            ]
        );
    }

    #[rstest]
    fn test_parse_stops_at_fasta_section() {
        let data = "\
chr\tsrc\tgene\t10\t20\t.\t.\t.\tID=g1;
##FASTA
>chr
ACGT
";
        let features = parse_gene_features(data.as_bytes()).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].strand, Strand::Unstranded);
    }

    #[rstest]
    #[case("chr\tsrc\tgene\t10\t20\n", 1)]
    #[case("##x\nchr\tsrc\tgene\tten\t20\t.\t+\t.\tID=g;\n", 2)]
    fn test_parse_gene_features_errors(#[case] data: &str, #[case] bad_line: usize) {
        match parse_gene_features(data.as_bytes()) {
            Err(PosifError::FeatureParse { line, .. }) => assert_eq!(line, bad_line),
            other => panic!("expected a feature parse error, got {:?}", other),
        }
    }

    #[rstest]
    fn test_read_gene_features_file() {
        let features = read_gene_features(get_test_path("annotation.gff")).unwrap();
        assert_eq!(features.len(), 3);
        assert_eq!(features[0].gene_id().unwrap(), "geneA");
    }
}
