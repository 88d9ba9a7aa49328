//! Prompt templates sent to the completion service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NeedleError;
use crate::record::DatasetRecord;
use crate::topology::Topology;

pub const SYSTEM_PROMPT: &str = "\
You are a financial assistant AI skilled in calculating wages and solving salary-related queries.
I will give you context with the facts about salary of several people.
You need to answer the question based only on the information from the facts.
Before you derive the final answer, provide me a brief explanation.
Output your final verdict by strictly following this format: '## Answer: ${your_answer}' ";

pub const USER_TEMPLATE: &str = "\
There are {num_names} workers in the office.
Their names are as follows: {names}

Salary for each worker is as follows:
{context}

Now, respond to my question:
{question}";

const SINGLE_QUESTION: &str = "How much salary did {p1} get?";
const TOTAL_QUESTION: &str = "How much is the total salary of the referenced people?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Salary of the topology's target participant.
    Single,
    /// Sum of every participant's salary.
    Total,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 2] = [QuestionKind::Single, QuestionKind::Total];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Total => "total",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuestionKind {
    type Err = NeedleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "total" => Ok(Self::Total),
            _ => Err(NeedleError::InvalidQuestion(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// A filled-in user prompt plus the value a correct answer must contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub idx: usize,
    pub question: String,
    pub target: f64,
}

impl PromptRecord {
    pub fn from_record(record: &DatasetRecord, topology: Topology, kind: QuestionKind) -> Self {
        let view = record.view(topology);
        let (question, target) = match kind {
            QuestionKind::Single => (
                SINGLE_QUESTION.replace("{p1}", &view.lastname),
                view.single_val,
            ),
            QuestionKind::Total => (TOTAL_QUESTION.to_string(), view.total_val),
        };
        let num_names = record.name_list().len();
        let question = USER_TEMPLATE
            .replace("{names}", &record.names)
            .replace("{context}", &view.chain)
            .replace("{question}", &question)
            .replace("{num_names}", &num_names.to_string());
        Self {
            idx: record.idx,
            question,
            target,
        }
    }

    /// System + user messages for a chat completion request.
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: Role::System,
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: Role::User,
                content: self.question.clone(),
            },
        ]
    }
}

/// Conventional result-file stem: `{model}__{topology}__k{k}__{question}`.
pub fn output_name(model: &str, topology: Topology, k: usize, kind: QuestionKind) -> String {
    format!("{model}__{topology}__k{k}__{kind}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TopologyView;

    fn record() -> DatasetRecord {
        let view = |last: &str, total: f64, single: f64| TopologyView {
            chain: "Ana received $1600 last week.\nRosa earns twice as much as Ana.".into(),
            total_val: total,
            lastname: last.into(),
            single_val: single,
        };
        DatasetRecord::new(
            7,
            &["Ana".to_string(), "Rosa".to_string()],
            view("Rosa", 1000.0, 800.0),
            view("Rosa", 4800.0, 3200.0),
            view("Ana", 4800.0, 1600.0),
            view("Rosa", 4800.0, 3200.0),
        )
    }

    #[test]
    fn test_single_prompt() {
        let p = PromptRecord::from_record(&record(), Topology::Backward, QuestionKind::Single);
        assert_eq!(p.idx, 7);
        assert_eq!(p.target, 1600.0);
        assert!(p.question.starts_with("There are 2 workers in the office."));
        assert!(p.question.contains("Their names are as follows: Ana, Rosa\n"));
        assert!(p.question.contains("Rosa earns twice as much as Ana."));
        assert!(p.question.ends_with("How much salary did Ana get?"));
        assert!(!p.question.contains('{'));
    }

    #[test]
    fn test_total_prompt() {
        let p = PromptRecord::from_record(&record(), Topology::Parallel, QuestionKind::Total);
        assert_eq!(p.target, 1000.0);
        assert!(p
            .question
            .ends_with("How much is the total salary of the referenced people?"));
    }

    #[test]
    fn test_messages() {
        let p = PromptRecord::from_record(&record(), Topology::Forward, QuestionKind::Single);
        let msgs = p.messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].role, Role::System);
        assert!(msgs[0].content.contains("## Answer: ${your_answer}"));
        assert_eq!(msgs[1].content, p.question);
        let json = serde_json::to_value(&msgs[1]).unwrap();
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn test_parse_question_kind() {
        assert_eq!("total".parse::<QuestionKind>().unwrap(), QuestionKind::Total);
        assert!(matches!(
            "both".parse::<QuestionKind>(),
            Err(NeedleError::InvalidQuestion(_))
        ));
    }

    #[test]
    fn test_output_name() {
        assert_eq!(
            output_name("QwQ", Topology::Chaotic, 20, QuestionKind::Total),
            "QwQ__chaotic__k20__total"
        );
    }
}
