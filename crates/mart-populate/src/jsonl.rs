//! JSONL chunk files: one serialized record set per line.

use crate::error::PopulateError;
use crate::metrics::PopulateMetrics;
use mart_types::RecordSet;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Write `sets` to `path`, one JSON object per line.
pub fn write_chunk(path: &Path, sets: &[RecordSet]) -> Result<PopulateMetrics, PopulateError> {
    let start = Instant::now();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let mut bytes_written = 0u64;
    for set in sets {
        let line = serde_json::to_string(set)?;
        bytes_written += line.len() as u64 + 1;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    let metrics = PopulateMetrics {
        record_sets: sets.len() as u64,
        rows_written: sets.len() as u64 * mart_types::Table::ALL.len() as u64,
        write_duration: start.elapsed(),
        bytes_written,
    };
    debug!(
        path = %path.display(),
        record_sets = metrics.record_sets,
        "wrote JSONL chunk"
    );
    Ok(metrics)
}

/// Read every line of a chunk file back as a JSON object.
pub fn read_chunk(path: &Path) -> Result<Vec<Value>, PopulateError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        items.push(serde_json::from_str(&line)?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mart_generator::Generator;

    #[test]
    fn test_chunk_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chunk.jsonl");

        let mut generator = Generator::new(42);
        let sets = generator.record_sets(3).unwrap();

        let metrics = write_chunk(&path, &sets).unwrap();
        assert_eq!(metrics.record_sets, 3);
        assert_eq!(metrics.rows_written, 33);
        assert!(metrics.bytes_written > 0);

        let items = read_chunk(&path).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(
            items[0]["user"]["id"].as_str().unwrap(),
            sets[0].user.id.as_str()
        );
        assert!(items[0].get("products_sku").is_some());
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chunk.jsonl");
        std::fs::write(&path, "{\"a\":1}\n\n{\"b\":2}\n").unwrap();

        let items = read_chunk(&path).unwrap();
        assert_eq!(items.len(), 2);
    }
}
