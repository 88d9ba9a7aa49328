//! Answer extraction and exact-match scoring.
//!
//! Extraction is lenient: anything that goes wrong yields `None`, which
//! scores as wrong. A malformed response never aborts an evaluation.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::prompt::QuestionKind;
use crate::record::EvaluationRecord;
use crate::topology::Topology;

pub const ANSWER_MARKER: &str = "## Answer:";

/// Records scored per result file.
pub const EVAL_LIMIT: usize = 100;

fn integer_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\d{1,3}(?:,\d{3})+|\d+").ok())
        .as_ref()
}

fn is_decimal_digit(c: char) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    let mut buf = [0u8; 4];
    PATTERN
        .get_or_init(|| Regex::new(r"\A\p{Nd}\z").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(c.encode_utf8(&mut buf)))
}

/// Value of a Unicode decimal digit (`'７'` is 7, `'٣'` is 3).
///
/// Decimal digits are assigned in contiguous runs of complete 0..=9 sets, so
/// the value is the offset from the start of the run, modulo ten.
fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// The first integer after the last answer marker (or anywhere, if the
/// marker is missing). Spaces and newlines are dropped first, so
/// `"## Answer: $1,234\n"` yields 1234. Digits from any script count.
pub fn extract_final_integer(generated: &str) -> Option<i64> {
    let tail = generated
        .rsplit_once(ANSWER_MARKER)
        .map_or(generated, |(_, tail)| tail);
    let compact: String = tail.chars().filter(|c| *c != '\n' && *c != ' ').collect();
    let found = integer_pattern()?.find(&compact)?;
    found
        .as_str()
        .chars()
        .filter(|c| *c != ',')
        .map(|c| decimal_value(c).and_then(|d| char::from_digit(d, 10)))
        .collect::<Option<String>>()?
        .parse()
        .ok()
}

/// Exact match against the reference truncated toward zero.
pub fn score(reference: f64, extracted: Option<i64>) -> bool {
    match extracted {
        Some(answer) if reference.is_finite() => reference.trunc() as i64 == answer,
        _ => false,
    }
}

pub fn score_record(record: &EvaluationRecord) -> bool {
    score(record.target, extract_final_integer(&record.generated))
}

/// Mean score over the first `limit` records; `None` when nothing was scored.
pub fn accuracy(records: &[EvaluationRecord], limit: usize) -> Option<f64> {
    let scored = &records[..records.len().min(limit)];
    if scored.is_empty() {
        return None;
    }
    let correct = scored.iter().filter(|r| score_record(r)).count();
    Some(correct as f64 / scored.len() as f64)
}

// ---------------------------------------------------------------------------
// Result file labels
// ---------------------------------------------------------------------------

/// Configuration encoded in a result file stem such as
/// `QwQ__chaotic__k20__single`. Unrecognised stems keep only `parts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLabel {
    pub parts: Vec<String>,
    pub model: Option<String>,
    pub topology: Option<Topology>,
    pub k: Option<usize>,
    pub question: Option<QuestionKind>,
}

impl ResultLabel {
    pub fn from_stem(stem: &str) -> Self {
        let parts: Vec<String> = stem.split("__").map(str::to_string).collect();
        let structured = match parts.as_slice() {
            [model, topology, k, question] => {
                let topology = topology.parse::<Topology>().ok();
                let k = k.strip_prefix('k').and_then(|n| n.parse::<usize>().ok());
                let question = question.parse::<QuestionKind>().ok();
                match (topology, k, question) {
                    (Some(t), Some(k), Some(q)) => Some((model.clone(), t, k, q)),
                    _ => None,
                }
            }
            _ => None,
        };
        match structured {
            Some((model, topology, k, question)) => Self {
                parts,
                model: Some(model),
                topology: Some(topology),
                k: Some(k),
                question: Some(question),
            },
            None => Self {
                parts,
                model: None,
                topology: None,
                k: None,
                question: None,
            },
        }
    }

    pub fn is_structured(&self) -> bool {
        self.topology.is_some()
    }
}

impl fmt::Display for ResultLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join("\t"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rec(target: f64, generated: &str) -> EvaluationRecord {
        EvaluationRecord {
            idx: 0,
            question: None,
            target,
            generated: generated.into(),
        }
    }

    #[test]
    fn test_extract_after_marker() {
        assert_eq!(extract_final_integer("blah\n## Answer: $1,234\nmore"), Some(1234));
    }

    #[test]
    fn test_extract_without_marker() {
        assert_eq!(extract_final_integer("no marker here 42"), Some(42));
    }

    #[test]
    fn test_extract_no_integer() {
        assert_eq!(extract_final_integer("## Answer: nothing"), None);
        assert_eq!(extract_final_integer(""), None);
    }

    #[test]
    fn test_extract_uses_last_marker() {
        let text = "## Answer: $10\nWait, let me redo that.\n## Answer: $3,200";
        assert_eq!(extract_final_integer(text), Some(3200));
    }

    #[test]
    fn test_extract_first_integer_after_marker() {
        assert_eq!(extract_final_integer("## Answer: $12800.0"), Some(12800));
        assert_eq!(extract_final_integer("## Answer: 7 then 9"), Some(7));
        assert_eq!(extract_final_integer("## Answer: 1 600"), Some(1600));
    }

    #[test]
    fn test_extract_non_ascii_digits() {
        assert_eq!(extract_final_integer("## Answer: $１２３"), Some(123));
        assert_eq!(extract_final_integer("## Answer: $１,６００"), Some(1600));
        assert_eq!(extract_final_integer("## Answer: ٣٢٠٠"), Some(3200));
        // Spaces are dropped before matching, so the two runs merge.
        assert_eq!(extract_final_integer("## Answer: ١ 1600"), Some(11600));
        assert_eq!(extract_final_integer("## Answer: 𝟏𝟐"), Some(12));
    }

    #[test]
    fn test_decimal_value() {
        assert_eq!(decimal_value('0'), Some(0));
        assert_eq!(decimal_value('９'), Some(9));
        assert_eq!(decimal_value('٧'), Some(7));
        assert_eq!(decimal_value('७'), Some(7));
        assert_eq!(decimal_value('𝟗'), Some(9));
        assert_eq!(decimal_value('𝟘'), Some(0));
        assert_eq!(decimal_value('²'), None);
        assert_eq!(decimal_value('x'), None);
    }

    #[test]
    fn test_extract_overflow_is_none() {
        assert_eq!(extract_final_integer("## Answer: 99999999999999999999999"), None);
    }

    #[test]
    fn test_score() {
        assert!(score(1234.0, Some(1234)));
        assert!(!score(1234.0, Some(1235)));
        assert!(!score(1234.0, None));
        assert!(score(1234.9, Some(1234)));
        assert!(!score(f64::NAN, Some(0)));
    }

    #[test]
    fn test_accuracy_caps_at_limit() {
        let mut records: Vec<EvaluationRecord> =
            (0..100).map(|_| rec(50.0, "## Answer: $50")).collect();
        records.extend((0..50).map(|_| rec(50.0, "## Answer: $51")));
        assert_eq!(accuracy(&records, EVAL_LIMIT), Some(1.0));
        assert_eq!(accuracy(&records, 150), Some(100.0 / 150.0));
        assert_eq!(accuracy(&[], EVAL_LIMIT), None);
    }

    #[test]
    fn test_accuracy_mixed() {
        let records = vec![
            rec(1600.0, "so ## Answer: $1,600"),
            rec(25.0, "I am not sure."),
            rec(100.0, "## Answer: 100"),
            rec(200.0, "## Answer: 400"),
        ];
        assert_eq!(accuracy(&records, EVAL_LIMIT), Some(0.5));
    }

    #[test]
    fn test_result_label() {
        let label = ResultLabel::from_stem("QwQ__chaotic__k20__single");
        assert!(label.is_structured());
        assert_eq!(label.model.as_deref(), Some("QwQ"));
        assert_eq!(label.topology, Some(Topology::Chaotic));
        assert_eq!(label.k, Some(20));
        assert_eq!(label.question, Some(QuestionKind::Single));
        assert_eq!(label.to_string(), "QwQ\tchaotic\tk20\tsingle");

        let loose = ResultLabel::from_stem("scratch__run");
        assert!(!loose.is_structured());
        assert_eq!(loose.to_string(), "scratch\trun");
    }

    proptest! {
        #[test]
        fn prop_extract_never_panics(text in ".*") {
            let _ = extract_final_integer(&text);
        }

        #[test]
        fn prop_extract_grouped_answer(n in 0u32..1_000_000_000, noise in "[a-z ]{0,20}") {
            let digits = n.to_string();
            let mut grouped = String::new();
            for (i, ch) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    grouped.push(',');
                }
                grouped.push(ch);
            }
            let text = format!("{noise}\n## Answer: ${grouped}");
            prop_assert_eq!(extract_final_integer(&text), Some(i64::from(n)));
        }
    }
}
