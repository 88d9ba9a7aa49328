//! Result files written by the completion layer and read by the scorer.

use std::collections::{BTreeMap, HashSet};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{info, warn};

use needle_core::{
    accuracy, EvaluationRecord, NeedleResult, QuestionKind, ResultLabel, ResultStore, Topology,
};

/// Append-only result file keyed by record index.
///
/// Opening an existing file keeps every parseable line and drops the rest
/// (typically a line cut short by an interrupted run), then appends new
/// answers one flushed line at a time.
pub struct JsonlResultStore {
    path: PathBuf,
    records: Vec<EvaluationRecord>,
    seen: HashSet<usize>,
    writer: BufWriter<File>,
}

impl JsonlResultStore {
    pub fn open(path: &Path) -> NeedleResult<Self> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;
        let existing = if path.exists() {
            load_lenient(path)?
        } else {
            Vec::new()
        };

        // Kept records go to a sibling temp file that is renamed over `path`.
        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut w = BufWriter::new(tmp.as_file_mut());
            for record in &existing {
                serde_json::to_writer(&mut w, record)?;
                w.write_all(b"\n")?;
            }
            w.flush()?;
        }
        tmp.as_file().sync_all()?;
        let file = tmp.persist(path).map_err(|e| e.error)?;

        if !existing.is_empty() {
            info!(path = %path.display(), records = existing.len(), "resuming result file");
        }
        let seen = existing.iter().map(|r| r.idx).collect();
        Ok(Self {
            path: path.to_path_buf(),
            records: existing,
            seen,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ResultStore for JsonlResultStore {
    fn contains(&self, idx: usize) -> bool {
        self.seen.contains(&idx)
    }

    fn put(&mut self, record: EvaluationRecord) -> NeedleResult<()> {
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.seen.insert(record.idx);
        self.records.push(record);
        Ok(())
    }

    fn records(&self) -> Vec<EvaluationRecord> {
        self.records.clone()
    }
}

/// Parse every line that is a valid record; warn about and skip the rest.
fn load_lenient(path: &Path) -> NeedleResult<Vec<EvaluationRecord>> {
    let text = fs::read_to_string(path)?;
    let mut out = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<EvaluationRecord>(line) {
            Ok(r) => out.push(r),
            Err(e) => warn!(path = %path.display(), line = n + 1, "skipping result line: {e}"),
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Directory scoring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub label: ResultLabel,
    pub scored: usize,
    pub accuracy: Option<f64>,
}

/// Score the first `limit` records of every `*.jsonl` file in `dir`,
/// ordered by file name.
pub fn score_dir(dir: &Path, limit: usize) -> NeedleResult<Vec<FileReport>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "jsonl"))
        .collect();
    paths.sort();

    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let records = load_lenient(&path)?;
        reports.push(FileReport {
            label: ResultLabel::from_stem(&stem),
            scored: records.len().min(limit),
            accuracy: accuracy(&records, limit),
            path,
        });
    }
    Ok(reports)
}

/// Accuracy grid for one model and question type: one row per topology,
/// one column per `k`. Cells are `None` when the file is missing or empty.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyTable {
    pub model: String,
    pub question: QuestionKind,
    pub ks: Vec<usize>,
    pub rows: Vec<(Topology, Vec<Option<f64>>)>,
}

/// Group reports whose file stems follow `{model}__{topology}__k{k}__{question}`.
/// Other files are left out.
pub fn accuracy_tables(reports: &[FileReport]) -> Vec<AccuracyTable> {
    type Cells = BTreeMap<(Topology, usize), Option<f64>>;
    let mut groups: BTreeMap<(String, QuestionKind), Cells> = BTreeMap::new();
    for report in reports {
        let label = &report.label;
        if let (Some(model), Some(topology), Some(k), Some(question)) =
            (&label.model, label.topology, label.k, label.question)
        {
            groups
                .entry((model.clone(), question))
                .or_default()
                .insert((topology, k), report.accuracy);
        }
    }

    groups
        .into_iter()
        .map(|((model, question), cells)| {
            let mut ks: Vec<usize> = cells.keys().map(|(_, k)| *k).collect();
            ks.sort_unstable();
            ks.dedup();
            let rows = Topology::ALL
                .into_iter()
                .filter(|t| cells.keys().any(|(topology, _)| topology == t))
                .map(|t| {
                    let row = ks
                        .iter()
                        .map(|k| cells.get(&(t, *k)).copied().flatten())
                        .collect();
                    (t, row)
                })
                .collect();
            AccuracyTable {
                model,
                question,
                ks,
                rows,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use needle_core::Topology;

    fn answer(idx: usize, target: f64, generated: &str) -> EvaluationRecord {
        EvaluationRecord {
            idx,
            question: None,
            target,
            generated: generated.into(),
        }
    }

    #[test]
    fn test_put_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results").join("m__forward__k5__single.jsonl");
        {
            let mut store = JsonlResultStore::open(&path).unwrap();
            assert!(store.is_empty());
            store.put(answer(0, 10.0, "## Answer: 10")).unwrap();
            store.put(answer(1, 20.0, "## Answer: 21")).unwrap();
        }
        let store = JsonlResultStore::open(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.contains(0));
        assert!(store.contains(1));
        assert!(!store.contains(2));
        assert_eq!(store.records()[1].generated, "## Answer: 21");
    }

    #[test]
    fn test_open_drops_truncated_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.jsonl");
        fs::write(
            &path,
            "{\"idx\":0,\"target\":\"5\",\"generated\":\"## Answer: 5\"}\n{\"idx\":1,\"tar",
        )
        .unwrap();
        let mut store = JsonlResultStore::open(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.path(), path.as_path());

        // The kept record is already committed before anything new is put.
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);

        store.put(answer(1, 6.0, "## Answer: 6")).unwrap();
        drop(store);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        for line in text.lines() {
            serde_json::from_str::<EvaluationRecord>(line).unwrap();
        }
    }

    #[test]
    fn test_open_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.jsonl");
        for round in 0..3 {
            let mut store = JsonlResultStore::open(&path).unwrap();
            store.put(answer(round, 1.0, "## Answer: 1")).unwrap();
        }
        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("r.jsonl")]);
        assert_eq!(JsonlResultStore::open(&path).unwrap().len(), 3);
    }

    #[test]
    fn test_accuracy_tables() {
        let report = |stem: &str, accuracy: Option<f64>| FileReport {
            path: PathBuf::from(format!("{stem}.jsonl")),
            label: ResultLabel::from_stem(stem),
            scored: 0,
            accuracy,
        };
        let reports = vec![
            report("QwQ__backward__k5__single", Some(0.5)),
            report("QwQ__forward__k10__single", Some(0.25)),
            report("QwQ__forward__k5__single", Some(1.0)),
            report("QwQ__forward__k5__total", None),
            report("scratch", Some(1.0)),
        ];
        let tables = accuracy_tables(&reports);
        assert_eq!(tables.len(), 2);

        let single = &tables[0];
        assert_eq!(single.model, "QwQ");
        assert_eq!(single.question, QuestionKind::Single);
        assert_eq!(single.ks, vec![5, 10]);
        assert_eq!(
            single.rows,
            vec![
                (Topology::Forward, vec![Some(1.0), Some(0.25)]),
                (Topology::Backward, vec![Some(0.5), None]),
            ]
        );

        let total = &tables[1];
        assert_eq!(total.question, QuestionKind::Total);
        assert_eq!(total.rows, vec![(Topology::Forward, vec![None])]);
    }

    #[test]
    fn test_score_dir() {
        let dir = tempfile::tempdir().unwrap();
        let write = |name: &str, records: &[EvaluationRecord]| {
            let lines: Vec<String> = records
                .iter()
                .map(|r| serde_json::to_string(r).unwrap())
                .collect();
            fs::write(dir.path().join(name), lines.join("\n")).unwrap();
        };
        write(
            "QwQ__forward__k5__single.jsonl",
            &[answer(0, 1600.0, "## Answer: $1,600"), answer(1, 800.0, "no idea")],
        );
        write("QwQ__backward__k5__total.jsonl", &[answer(0, 3.0, "## Answer: 3")]);
        write("empty.jsonl", &[]);
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let reports = score_dir(dir.path(), 100).unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].label.topology, Some(Topology::Backward));
        assert_eq!(reports[0].accuracy, Some(1.0));
        assert_eq!(reports[1].label.topology, Some(Topology::Forward));
        assert_eq!(reports[1].accuracy, Some(0.5));
        assert_eq!(reports[1].scored, 2);
        assert_eq!(reports[2].accuracy, None);
        assert_eq!(reports[2].label.to_string(), "empty");
    }
}
