//! Embarrassingly-parallel batch decode of many tables. Each worker
//! owns its own file handle and shares no mutable state with the
//! others; results land in a `DashMap` keyed by file path.

use std::path::PathBuf;

use dashmap::DashMap;
use rayon::prelude::*;

use crate::decode::{decode_from_reader, DecodeOptions};
use crate::error::AceError;
use crate::model::table::AceTable;

/// One `(path, start_line)` pair, as consumed from an xsdir entry.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub start_line: u64,
}

/// Decodes every entry in parallel, synchronously (each worker does
/// its own blocking file read; no tokio runtime needed here since
/// there is no suspension to schedule within the decode core itself).
pub fn decode_batch(entries: &[BatchEntry], opts: DecodeOptions) -> DashMap<String, Result<AceTable, AceError>> {
    let results = DashMap::with_capacity(entries.len());
    entries.par_iter().for_each(|entry| {
        let key = entry.path.to_string_lossy().into_owned();
        let outcome = decode_one(entry, opts);
        results.insert(key, outcome);
    });
    results
}

fn decode_one(entry: &BatchEntry, opts: DecodeOptions) -> Result<AceTable, AceError> {
    let file = std::fs::File::open(&entry.path)?;
    let mut reader = std::io::BufReader::new(file);
    if entry.start_line > 1 {
        skip_lines(&mut reader, entry.start_line - 1)?;
    }
    decode_from_reader(&mut reader, opts)
}

fn skip_lines<R: std::io::BufRead>(reader: &mut R, n: u64) -> Result<(), AceError> {
    let mut line = String::new();
    for _ in 0..n {
        line.clear();
        reader.read_line(&mut line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    fn minimal_ce_table() -> String {
        let izaw = "0 0.0 0 0.0 0 0.0 0 0.0\n".repeat(4);
        let nxs = "5 0 1 0 0 0 0 0\n0 0 0 0 0 0 0 0\n";
        let jxs = "1 0 0 0 0 0 0 0\n0 0 0 0 0 0 0 0\n0 0 0 0 0 0 0 0\n0 0 0 0 0 0 0 0\n";
        format!(
            "1001.50c 0.999 2.53e-08 01/01/24\n{:<70}{:<10}\n{izaw}{nxs}{jxs}1.0 10.0 0.5 0.0 0.1\n",
            "test", "mat1"
        )
    }

    #[test]
    fn decodes_multiple_entries_concurrently() {
        let dir = tempfile::tempdir().unwrap();
        let p1 = write_fixture(&dir, "a.ace", &minimal_ce_table());
        let p2 = write_fixture(&dir, "b.ace", &minimal_ce_table());
        let entries = vec![
            BatchEntry { path: p1, start_line: 1 },
            BatchEntry { path: p2, start_line: 1 },
        ];
        let results = decode_batch(&entries, DecodeOptions::default());
        assert_eq!(results.len(), 2);
        for entry in results.iter() {
            assert!(entry.value().is_ok());
        }
    }
}
