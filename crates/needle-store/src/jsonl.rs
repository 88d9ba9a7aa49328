//! Line-delimited JSON files: one serialized record per line.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use needle_core::chain::render_amount;
use needle_core::{NeedleError, NeedleResult};

/// `{dir}/k{k}---val{val}.jsonl`
pub fn dataset_path(dir: &Path, k: usize, base_value: f64) -> PathBuf {
    dir.join(format!("k{k}---val{}.jsonl", render_amount(base_value)))
}

/// Read every non-blank line of `path` as a `T`. A malformed line is an error
/// naming its line number.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> NeedleResult<Vec<T>> {
    let file = File::open(path)?;
    let mut out = Vec::new();
    for (n, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let item = serde_json::from_str(line).map_err(|e| {
            NeedleError::Store(format!("{}:{}: {e}", path.display(), n + 1))
        })?;
        out.push(item);
    }
    Ok(out)
}

/// Replace `path` with one line per item, creating parent directories.
pub fn write_jsonl<T: Serialize>(path: &Path, items: &[T]) -> NeedleResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use needle_core::{generate, DatasetRecord, GenerateOptions, NamePool};

    #[test]
    fn test_dataset_path() {
        let p = dataset_path(Path::new("data"), 5, 1600.0);
        assert_eq!(p, PathBuf::from("data/k5---val1600.jsonl"));
    }

    #[test]
    fn test_write_then_read_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("k4---val160.jsonl");
        let records = generate(&NamePool::builtin(), &GenerateOptions::new(5, 4, 160.0, 1)).unwrap();
        write_jsonl(&path, &records).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().all(|l| l.starts_with("{\"idx\":")));

        let back: Vec<DatasetRecord> = read_jsonl(&path).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_read_reports_bad_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.jsonl");
        fs::write(&path, "{\"idx\": 0}\n\nnot json\n").unwrap();
        let err = read_jsonl::<serde_json::Value>(&path).unwrap_err();
        assert!(err.to_string().contains(":3:"), "{err}");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_jsonl::<serde_json::Value>(&dir.path().join("nope.jsonl")).unwrap_err();
        assert!(matches!(err, NeedleError::Io(_)));
    }
}
