mod client;
mod config;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use needle_core::{
    generate, output_name, run_completions, CompletionService, CompletionSummary, DatasetRecord,
    GenerateOptions, NamePool, PromptRecord, QuestionKind, Topology,
};
use needle_store::{
    accuracy_tables, dataset_path, read_jsonl, score_dir, write_jsonl, JsonlResultStore,
};

#[derive(Parser)]
#[command(
    name = "needle",
    version,
    about = "Salary-chain benchmarks for multi-hop arithmetic reasoning"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a benchmark dataset (one JSON object per line)
    MakeData {
        /// Participants per chain
        #[arg(short, long)]
        k: Option<usize>,

        /// Number of records
        #[arg(short, long)]
        n: Option<usize>,

        /// Base salary
        #[arg(long)]
        val: Option<f64>,

        /// Dataset seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output directory
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Give up on a record after this many rejected chains
        #[arg(long)]
        max_attempts: Option<usize>,

        /// Generate on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Print the prompts for one topology and question type
    Prompts {
        #[arg(short, long, default_value = "forward")]
        chain_type: CliTopology,

        #[arg(short, long, default_value = "single")]
        question_type: CliQuestion,

        #[arg(short, long)]
        k: Option<usize>,

        #[arg(long)]
        val: Option<f64>,

        /// Dataset directory
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Write JSONL here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Send prompts to an OpenAI-compatible endpoint and store the answers
    Infer {
        /// Model alias or served model id
        #[arg(short, long)]
        model: String,

        #[arg(short, long, default_value = "forward")]
        chain_type: CliTopology,

        #[arg(short, long, default_value = "single")]
        question_type: CliQuestion,

        #[arg(short, long)]
        k: Option<usize>,

        #[arg(long)]
        val: Option<f64>,

        /// Dataset directory
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Result file stem (default: {model}__{chain}__k{k}__{question})
        #[arg(short, long)]
        output_name: Option<String>,

        #[arg(short, long)]
        results_dir: Option<PathBuf>,

        /// API root, e.g. http://localhost:8123/v1
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Run every topology, question type and k for one model
    InferAll {
        /// Model alias or served model id
        #[arg(short, long)]
        model: String,

        /// Participant counts to sweep, e.g. 5,10,20
        #[arg(short, long, value_delimiter = ',')]
        k: Vec<usize>,

        #[arg(long)]
        val: Option<f64>,

        /// Dataset directory
        #[arg(short, long)]
        dir: Option<PathBuf>,

        #[arg(short, long)]
        results_dir: Option<PathBuf>,

        /// API root, e.g. http://localhost:8123/v1
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Score every result file in a directory
    Evaluate {
        #[arg(short, long)]
        results_dir: Option<PathBuf>,

        /// Records scored per file
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show current configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliTopology {
    Parallel,
    Forward,
    Backward,
    Chaotic,
}

impl From<CliTopology> for Topology {
    fn from(val: CliTopology) -> Self {
        match val {
            CliTopology::Parallel => Topology::Parallel,
            CliTopology::Forward => Topology::Forward,
            CliTopology::Backward => Topology::Backward,
            CliTopology::Chaotic => Topology::Chaotic,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CliQuestion {
    Single,
    Total,
}

impl From<CliQuestion> for QuestionKind {
    fn from(val: CliQuestion) -> Self {
        match val {
            CliQuestion::Single => QuestionKind::Single,
            CliQuestion::Total => QuestionKind::Total,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.command {
        Commands::MakeData {
            k,
            n,
            val,
            seed,
            dir,
            max_attempts,
            sequential,
        } => {
            let mut opts = GenerateOptions::new(
                n.unwrap_or(cfg.data.n),
                k.unwrap_or(cfg.data.k),
                val.unwrap_or(cfg.data.val),
                seed.or(cfg.data.seed).unwrap_or_else(rand_seed),
            );
            opts.max_attempts = max_attempts.or(cfg.data.max_attempts);
            opts.parallel = !sequential;
            let dir = dir.unwrap_or_else(|| PathBuf::from(&cfg.data.dir));
            cmd_make_data(&opts, &dir)
        }
        Commands::Prompts {
            chain_type,
            question_type,
            k,
            val,
            dir,
            output,
        } => {
            let dataset = dataset_path(
                &dir.unwrap_or_else(|| PathBuf::from(&cfg.data.dir)),
                k.unwrap_or(cfg.data.k),
                val.unwrap_or(cfg.data.val),
            );
            cmd_prompts(
                &dataset,
                chain_type.into(),
                question_type.into(),
                output.as_deref(),
            )
        }
        Commands::Infer {
            model,
            chain_type,
            question_type,
            k,
            val,
            dir,
            output_name: name,
            results_dir,
            base_url,
        } => {
            let k = k.unwrap_or(cfg.data.k);
            let topology: Topology = chain_type.into();
            let question: QuestionKind = question_type.into();
            let dataset = dataset_path(
                &dir.unwrap_or_else(|| PathBuf::from(&cfg.data.dir)),
                k,
                val.unwrap_or(cfg.data.val),
            );
            let name = name.unwrap_or_else(|| output_name(&model, topology, k, question));
            let output = results_dir
                .unwrap_or_else(|| PathBuf::from(&cfg.inference.results_dir))
                .join(format!("{name}.jsonl"));
            let base_url = base_url.unwrap_or_else(|| cfg.inference.base_url.clone());
            let client = client::ChatClient::new(&cfg.inference, &base_url, &model);
            cmd_infer(&client, &dataset, topology, question, &output)
        }
        Commands::InferAll {
            model,
            k,
            val,
            dir,
            results_dir,
            base_url,
        } => {
            let ks = if k.is_empty() {
                cfg.inference.sweep_k.clone()
            } else {
                k
            };
            let base_url = base_url.unwrap_or_else(|| cfg.inference.base_url.clone());
            let client = client::ChatClient::new(&cfg.inference, &base_url, &model);
            cmd_infer_all(
                &client,
                &model,
                &dir.unwrap_or_else(|| PathBuf::from(&cfg.data.dir)),
                val.unwrap_or(cfg.data.val),
                &ks,
                &results_dir.unwrap_or_else(|| PathBuf::from(&cfg.inference.results_dir)),
            )
        }
        Commands::Evaluate { results_dir, limit } => cmd_evaluate(
            &results_dir.unwrap_or_else(|| PathBuf::from(&cfg.evaluate.results_dir)),
            limit.unwrap_or(cfg.evaluate.limit),
        ),
        Commands::Config => cmd_config(&cfg),
    }
}

fn rand_seed() -> u64 {
    let seed = rand::random();
    tracing::info!(seed, "no seed given, drew one from OS entropy");
    seed
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_make_data(opts: &GenerateOptions, dir: &std::path::Path) -> Result<()> {
    let pool = NamePool::builtin();
    let t0 = Instant::now();
    let records = generate(&pool, opts).context("dataset generation failed")?;
    let path = dataset_path(dir, opts.k, opts.base_value);
    write_jsonl(&path, &records).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(
        records = records.len(),
        seed = opts.seed,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "dataset written"
    );
    println!("data saved: {}", path.display());
    Ok(())
}

fn load_prompts(
    dataset: &std::path::Path,
    topology: Topology,
    question: QuestionKind,
) -> Result<Vec<PromptRecord>> {
    let records: Vec<DatasetRecord> = read_jsonl(dataset).with_context(|| {
        format!(
            "reading dataset {} (run `needle make-data` first)",
            dataset.display()
        )
    })?;
    if records.is_empty() {
        bail!("dataset {} is empty", dataset.display());
    }
    Ok(records
        .iter()
        .map(|r| PromptRecord::from_record(r, topology, question))
        .collect())
}

fn cmd_prompts(
    dataset: &std::path::Path,
    topology: Topology,
    question: QuestionKind,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let prompts = load_prompts(dataset, topology, question)?;
    match output {
        Some(path) => {
            write_jsonl(path, &prompts).with_context(|| format!("writing {}", path.display()))?;
            println!("{} prompts saved: {}", prompts.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for p in &prompts {
                serde_json::to_writer(&mut out, p)?;
                out.write_all(b"\n")?;
            }
            out.flush()?;
        }
    }
    Ok(())
}

fn cmd_infer(
    client: &client::ChatClient,
    dataset: &std::path::Path,
    topology: Topology,
    question: QuestionKind,
    output: &std::path::Path,
) -> Result<()> {
    let summary = infer_one(client, client.model(), dataset, topology, question, output)?;
    println!("done: {} new, {} skipped", summary.completed, summary.skipped);
    Ok(())
}

/// Answer every prompt of one (dataset, topology, question) into `output`.
fn infer_one<C: CompletionService + ?Sized>(
    service: &C,
    label: &str,
    dataset: &std::path::Path,
    topology: Topology,
    question: QuestionKind,
    output: &std::path::Path,
) -> Result<CompletionSummary> {
    let prompts = load_prompts(dataset, topology, question)?;
    let mut store = JsonlResultStore::open(output)
        .with_context(|| format!("opening result file {}", output.display()))?;
    println!(
        "{label}: {} prompts, {} already answered -> {}",
        prompts.len(),
        store.len(),
        store.path().display()
    );
    run_completions(&prompts, service, &mut store).with_context(|| {
        format!(
            "completion run aborted; partial results kept in {}",
            output.display()
        )
    })
}

/// Run every topology, question type and `k` in `ks` for one model. Result
/// files are named by `output_name`, so a rerun resumes each configuration.
/// A `k` without a dataset is skipped with a warning.
fn infer_grid<C: CompletionService + ?Sized>(
    service: &C,
    model: &str,
    data_dir: &std::path::Path,
    base_value: f64,
    ks: &[usize],
    results_dir: &std::path::Path,
) -> Result<Vec<(String, CompletionSummary)>> {
    let mut done = Vec::new();
    for topology in Topology::ALL {
        for &k in ks {
            let dataset = dataset_path(data_dir, k, base_value);
            if !dataset.exists() {
                tracing::warn!(k, dataset = %dataset.display(), "no dataset, skipping");
                continue;
            }
            for question in QuestionKind::ALL {
                let name = output_name(model, topology, k, question);
                let output = results_dir.join(format!("{name}.jsonl"));
                let summary = infer_one(service, &name, &dataset, topology, question, &output)?;
                done.push((name, summary));
            }
        }
    }
    Ok(done)
}

fn cmd_infer_all(
    client: &client::ChatClient,
    model: &str,
    data_dir: &std::path::Path,
    base_value: f64,
    ks: &[usize],
    results_dir: &std::path::Path,
) -> Result<()> {
    if ks.is_empty() {
        bail!("no k values to sweep");
    }
    let done = infer_grid(client, model, data_dir, base_value, ks, results_dir)?;
    let completed: usize = done.iter().map(|(_, s)| s.completed).sum();
    let skipped: usize = done.iter().map(|(_, s)| s.skipped).sum();
    println!(
        "done: {} configurations, {completed} new, {skipped} skipped",
        done.len()
    );
    Ok(())
}

fn cmd_evaluate(results_dir: &std::path::Path, limit: usize) -> Result<()> {
    let reports = score_dir(results_dir, limit)
        .with_context(|| format!("scoring {}", results_dir.display()))?;
    if reports.is_empty() {
        println!("No result files in {}.", results_dir.display());
        return Ok(());
    }
    for report in &reports {
        match report.accuracy {
            Some(acc) => println!("{} \t {acc}", report.label),
            None => println!("{} \t n/a", report.label),
        }
    }

    for table in accuracy_tables(&reports) {
        println!();
        println!("{} / {}", table.model, table.question);
        let header: Vec<String> = table.ks.iter().map(|k| format!("k{k}")).collect();
        println!("{:<10}\t{}", "", header.join("\t"));
        for (topology, cells) in &table.rows {
            let cells: Vec<String> = cells
                .iter()
                .map(|c| c.map_or_else(|| "-".to_string(), |acc| format!("{acc:.2}")))
                .collect();
            println!("{:<10}\t{}", topology.as_str(), cells.join("\t"));
        }
    }
    Ok(())
}

fn cmd_config(cfg: &config::Config) -> Result<()> {
    println!("Config: {}", config::show_config_path());
    println!();
    println!("[data]");
    println!("  dir = {}", cfg.data.dir);
    println!("  k = {}", cfg.data.k);
    println!("  n = {}", cfg.data.n);
    println!("  val = {}", cfg.data.val);
    println!(
        "  seed = {}",
        cfg.data
            .seed
            .map_or_else(|| "(random)".to_string(), |s| s.to_string())
    );
    println!(
        "  max_attempts = {}",
        cfg.data
            .max_attempts
            .map_or_else(|| "(unbounded)".to_string(), |m| m.to_string())
    );
    println!();
    println!("[inference]");
    println!("  base_url = {}", cfg.inference.base_url);
    println!(
        "  api_key = {}",
        if cfg.inference.api_key.is_some() {
            "(set)"
        } else {
            "(from $OPENAI_API_KEY or placeholder)"
        }
    );
    println!("  temperature = {}", cfg.inference.temperature);
    println!("  top_p = {}", cfg.inference.top_p);
    if let Some(max) = cfg.inference.max_tokens {
        println!("  max_tokens = {max}");
    }
    println!("  results_dir = {}", cfg.inference.results_dir);
    println!("  sweep_k = {:?}", cfg.inference.sweep_k);
    for (alias, id) in &cfg.inference.models {
        println!("  models.{alias} = {id}");
    }
    println!();
    println!("[evaluate]");
    println!("  results_dir = {}", cfg.evaluate.results_dir);
    println!("  limit = {}", cfg.evaluate.limit);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use needle_core::EvaluationRecord;

    #[test]
    fn test_make_data_then_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let opts = GenerateOptions::new(10, 5, 1600.0, 99);
        cmd_make_data(&opts, dir.path()).unwrap();

        let dataset = dataset_path(dir.path(), 5, 1600.0);
        assert!(dataset.ends_with("k5---val1600.jsonl"));
        let prompts = load_prompts(&dataset, Topology::Chaotic, QuestionKind::Single).unwrap();
        assert_eq!(prompts.len(), 10);
        assert!(prompts.iter().all(|p| p.question.starts_with("There are 5 workers")));

        let out = dir.path().join("prompts.jsonl");
        cmd_prompts(
            &dataset,
            Topology::Forward,
            QuestionKind::Total,
            Some(out.as_path()),
        )
        .unwrap();
        let back: Vec<PromptRecord> = read_jsonl(&out).unwrap();
        assert_eq!(back.len(), 10);
    }

    #[test]
    fn test_load_prompts_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_prompts(
            &dir.path().join("k5---val1600.jsonl"),
            Topology::Forward,
            QuestionKind::Single,
        )
        .unwrap_err();
        assert!(err.to_string().contains("needle make-data"));
    }

    #[test]
    fn test_evaluate_reads_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m__parallel__k5__total.jsonl");
        let mut store = JsonlResultStore::open(&path).unwrap();
        needle_core::ResultStore::put(
            &mut store,
            EvaluationRecord {
                idx: 0,
                question: None,
                target: 12.0,
                generated: "## Answer: 12".into(),
            },
        )
        .unwrap();
        drop(store);
        cmd_evaluate(dir.path(), 100).unwrap();
    }

    struct FixedAnswer(std::cell::Cell<usize>);

    impl CompletionService for FixedAnswer {
        fn complete(
            &self,
            _messages: &[needle_core::ChatMessage],
        ) -> needle_core::NeedleResult<String> {
            self.0.set(self.0.get() + 1);
            Ok("## Answer: $1".into())
        }
    }

    #[test]
    fn test_infer_grid_covers_every_configuration() {
        let data = tempfile::tempdir().unwrap();
        let results = tempfile::tempdir().unwrap();
        for k in [3, 4] {
            cmd_make_data(&GenerateOptions::new(2, k, 1600.0, 7), data.path()).unwrap();
        }

        let service = FixedAnswer(std::cell::Cell::new(0));
        let done =
            infer_grid(&service, "stub", data.path(), 1600.0, &[3, 4, 9], results.path()).unwrap();
        // 4 topologies x 2 datasets x 2 question types; k9 has no dataset.
        assert_eq!(done.len(), 16);
        assert_eq!(done[0].0, "stub__parallel__k3__single");
        assert_eq!(done[15].0, "stub__chaotic__k4__total");
        assert_eq!(service.0.get(), 32);
        assert!(done.iter().all(|(_, s)| s.completed == 2));

        let files = score_dir(results.path(), 100).unwrap();
        assert_eq!(files.len(), 16);
        assert!(files.iter().all(|f| f.scored == 2 && f.label.is_structured()));
        let tables = accuracy_tables(&files);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].ks, vec![3, 4]);
        assert_eq!(tables[0].rows.len(), 4);

        let again =
            infer_grid(&service, "stub", data.path(), 1600.0, &[3, 4], results.path()).unwrap();
        assert!(again.iter().all(|(_, s)| s.completed == 0 && s.skipped == 2));
        assert_eq!(service.0.get(), 32);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "needle",
            "infer",
            "--model",
            "QwQ",
            "--chain-type",
            "backward",
            "--question-type",
            "total",
            "-k",
            "20",
        ])
        .unwrap();
        match cli.command {
            Commands::Infer { chain_type, k, .. } => {
                assert_eq!(Topology::from(chain_type), Topology::Backward);
                assert_eq!(k, Some(20));
            }
            _ => panic!("expected infer"),
        }
        assert!(Cli::try_parse_from(["needle", "prompts", "--chain-type", "sideways"]).is_err());

        let cli =
            Cli::try_parse_from(["needle", "infer-all", "-m", "QwQ", "-k", "5,10,20"]).unwrap();
        match cli.command {
            Commands::InferAll { k, .. } => assert_eq!(k, vec![5, 10, 20]),
            _ => panic!("expected infer-all"),
        }
    }
}
