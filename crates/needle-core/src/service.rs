//! Seams toward the external collaborators: the text completion service and
//! the result store.

use tracing::{debug, info};

use crate::error::NeedleResult;
use crate::prompt::{ChatMessage, PromptRecord};
use crate::record::EvaluationRecord;

pub trait CompletionService {
    /// Send one system + user exchange, return the generated text.
    fn complete(&self, messages: &[ChatMessage]) -> NeedleResult<String>;
}

/// Line-delimited answers addressed by record index.
pub trait ResultStore {
    fn contains(&self, idx: usize) -> bool;
    fn put(&mut self, record: EvaluationRecord) -> NeedleResult<()>;
    /// Every stored record, in storage order.
    fn records(&self) -> Vec<EvaluationRecord>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionSummary {
    pub completed: usize,
    pub skipped: usize,
}

/// Ask `service` for every prompt whose index is not already in `store`.
///
/// Each answer is stored before the next request goes out, so an interrupted
/// run resumes where it stopped. A failed request aborts the run.
pub fn run_completions<C, S>(
    prompts: &[PromptRecord],
    service: &C,
    store: &mut S,
) -> NeedleResult<CompletionSummary>
where
    C: CompletionService + ?Sized,
    S: ResultStore + ?Sized,
{
    let mut summary = CompletionSummary::default();
    for prompt in prompts {
        if store.contains(prompt.idx) {
            summary.skipped += 1;
            continue;
        }
        debug!(idx = prompt.idx, "requesting completion");
        let generated = service.complete(&prompt.messages())?;
        store.put(EvaluationRecord {
            idx: prompt.idx,
            question: Some(prompt.question.clone()),
            target: prompt.target,
            generated,
        })?;
        summary.completed += 1;
    }
    info!(
        completed = summary.completed,
        skipped = summary.skipped,
        "completions finished"
    );
    Ok(summary)
}
