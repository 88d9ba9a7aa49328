//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `$NEEDLE_CONFIG` environment variable
//! 2. `~/.config/needle/config.toml`
//! 3. Built-in defaults (everything is optional)

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub inference: InferenceConfig,
    pub evaluate: EvaluateConfig,
}

/// Dataset generation settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub dir: String,
    /// Participants per chain.
    pub k: usize,
    /// Records per dataset.
    pub n: usize,
    /// Base salary.
    pub val: f64,
    /// Dataset seed. Drawn from OS entropy when unset.
    pub seed: Option<u64>,
    /// Attempts per record before giving up. Unbounded when unset.
    pub max_attempts: Option<usize>,
}

/// Completion service settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// OpenAI-compatible API root, e.g. `http://localhost:8123/v1`.
    pub base_url: String,
    /// Falls back to `$OPENAI_API_KEY`, then a placeholder for local servers.
    pub api_key: Option<String>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: Option<u32>,
    pub results_dir: String,
    /// Participant counts visited by `infer-all`.
    pub sweep_k: Vec<usize>,
    /// Short model aliases to served model ids.
    pub models: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EvaluateConfig {
    pub results_dir: String,
    /// Records scored per result file.
    pub limit: usize,
}

// --- Defaults ---

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: "./data".into(),
            k: 5,
            n: 200,
            val: 1600.0,
            seed: None,
            max_attempts: None,
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        let models = [
            ("qwen2.5-32B", "Qwen/Qwen2.5-32B-Instruct"),
            ("qwen3-32B", "Qwen/Qwen3-32B"),
            ("llama3.3-70B", "meta-llama/Llama-3.3-70B-Instruct"),
            ("llama3.1-DS", "deepseek-ai/DeepSeek-R1-Distill-Llama-70B"),
            ("qwen2.5-DS", "deepseek-ai/DeepSeek-R1-Distill-Qwen-32B"),
            ("qwen_long", "Qwen/QwenLong-L1-32B"),
            ("QwQ", "Qwen/QwQ-32B"),
        ]
        .into_iter()
        .map(|(alias, id)| (alias.to_string(), id.to_string()))
        .collect();
        Self {
            base_url: "http://localhost:8123/v1".into(),
            api_key: None,
            temperature: 0.6,
            top_p: 0.95,
            max_tokens: None,
            results_dir: "./results".into(),
            sweep_k: vec![5, 10, 20, 50, 100, 200],
            models,
        }
    }
}

impl Default for EvaluateConfig {
    fn default() -> Self {
        Self {
            results_dir: "./results".into(),
            limit: needle_core::EVAL_LIMIT,
        }
    }
}

impl InferenceConfig {
    /// Served model id for `name`; unknown names pass through unchanged.
    pub fn resolve_model<'a>(&'a self, name: &'a str) -> &'a str {
        self.models.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn resolve_api_key(&self) -> String {
        self.api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .unwrap_or_else(|| "needlechain".into())
    }
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config() -> Result<Config> {
    let path = config_path();

    if let Some(p) = &path {
        if p.exists() {
            let content =
                std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            let config: Config =
                toml::from_str(&content).with_context(|| format!("parsing {}", p.display()))?;
            return Ok(config);
        }
    }

    Ok(Config::default())
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("NEEDLE_CONFIG") {
        return Some(PathBuf::from(p));
    }

    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("needle").join("config.toml"))
}

/// Show the active config path (for `needle config`).
pub fn show_config_path() -> String {
    match config_path() {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}
