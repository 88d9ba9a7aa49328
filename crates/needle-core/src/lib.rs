pub mod assembler;
pub mod chain;
pub mod error;
pub mod names;
pub mod prompt;
pub mod record;
pub mod scoring;
pub mod service;
pub mod topology;

pub use assembler::{generate, generate_trial, trial_rng, GenerateOptions, ACCEPTANCE_SPAN};
pub use chain::{build_parallel, build_sequential, Chain, ChainKind, Fact, Relation};
pub use error::{NeedleError, NeedleResult};
pub use names::NamePool;
pub use prompt::{output_name, ChatMessage, PromptRecord, QuestionKind, Role, SYSTEM_PROMPT};
pub use record::{DatasetRecord, EvaluationRecord, TopologyView};
pub use scoring::{accuracy, extract_final_integer, score, score_record, ResultLabel, EVAL_LIMIT};
pub use service::{run_completions, CompletionService, CompletionSummary, ResultStore};
pub use topology::{arrange, PresentedChain, Topology};
