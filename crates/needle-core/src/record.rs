use serde::{Deserialize, Deserializer, Serialize};

use crate::topology::{PresentedChain, Topology};

/// One topology's contribution to a dataset line.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyView {
    pub chain: String,
    pub total_val: f64,
    pub lastname: String,
    pub single_val: f64,
}

impl From<&PresentedChain<'_>> for TopologyView {
    fn from(p: &PresentedChain<'_>) -> Self {
        Self {
            chain: p.context(),
            total_val: p.total(),
            lastname: p.target_name().to_string(),
            single_val: p.target_value(),
        }
    }
}

/// One benchmark instance. Serializes to a flat JSON object whose keys are
/// `idx`, `names` and `{topology}_{chain|total_val|lastname|single_val}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub idx: usize,
    pub names: String,
    pub parallel_chain: String,
    pub parallel_total_val: f64,
    pub parallel_lastname: String,
    pub parallel_single_val: f64,
    pub forward_chain: String,
    pub forward_total_val: f64,
    pub forward_lastname: String,
    pub forward_single_val: f64,
    pub backward_chain: String,
    pub backward_total_val: f64,
    pub backward_lastname: String,
    pub backward_single_val: f64,
    pub chaotic_chain: String,
    pub chaotic_total_val: f64,
    pub chaotic_lastname: String,
    pub chaotic_single_val: f64,
}

impl DatasetRecord {
    pub fn new(
        idx: usize,
        names: &[String],
        parallel: TopologyView,
        forward: TopologyView,
        backward: TopologyView,
        chaotic: TopologyView,
    ) -> Self {
        Self {
            idx,
            names: names.join(", "),
            parallel_chain: parallel.chain,
            parallel_total_val: parallel.total_val,
            parallel_lastname: parallel.lastname,
            parallel_single_val: parallel.single_val,
            forward_chain: forward.chain,
            forward_total_val: forward.total_val,
            forward_lastname: forward.lastname,
            forward_single_val: forward.single_val,
            backward_chain: backward.chain,
            backward_total_val: backward.total_val,
            backward_lastname: backward.lastname,
            backward_single_val: backward.single_val,
            chaotic_chain: chaotic.chain,
            chaotic_total_val: chaotic.total_val,
            chaotic_lastname: chaotic.lastname,
            chaotic_single_val: chaotic.single_val,
        }
    }

    pub fn view(&self, topology: Topology) -> TopologyView {
        let (chain, total_val, lastname, single_val) = match topology {
            Topology::Parallel => (
                &self.parallel_chain,
                self.parallel_total_val,
                &self.parallel_lastname,
                self.parallel_single_val,
            ),
            Topology::Forward => (
                &self.forward_chain,
                self.forward_total_val,
                &self.forward_lastname,
                self.forward_single_val,
            ),
            Topology::Backward => (
                &self.backward_chain,
                self.backward_total_val,
                &self.backward_lastname,
                self.backward_single_val,
            ),
            Topology::Chaotic => (
                &self.chaotic_chain,
                self.chaotic_total_val,
                &self.chaotic_lastname,
                self.chaotic_single_val,
            ),
        };
        TopologyView {
            chain: chain.clone(),
            total_val,
            lastname: lastname.clone(),
            single_val,
        }
    }

    pub fn name_list(&self) -> Vec<&str> {
        self.names.split(", ").collect()
    }
}

/// A model answer to one prompt, as written by the completion layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    #[serde(default)]
    pub idx: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub target: f64,
    pub generated: String,
}

fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("target {s:?}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(tag: &str, total: f64, single: f64) -> TopologyView {
        TopologyView {
            chain: format!("{tag} chain"),
            total_val: total,
            lastname: format!("{tag}-last"),
            single_val: single,
        }
    }

    fn sample() -> DatasetRecord {
        DatasetRecord::new(
            3,
            &["Ana".to_string(), "Rosa".to_string()],
            view("p", 1.0, 2.0),
            view("f", 3.0, 4.0),
            view("b", 5.0, 6.0),
            view("c", 7.0, 8.0),
        )
    }

    #[test]
    fn test_record_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 18);
        assert_eq!(obj["idx"], 3);
        assert_eq!(obj["names"], "Ana, Rosa");
        for t in Topology::ALL {
            for suffix in ["chain", "total_val", "lastname", "single_val"] {
                assert!(obj.contains_key(&format!("{t}_{suffix}")), "{t}_{suffix}");
            }
        }
        assert_eq!(obj["backward_lastname"], "b-last");
        assert_eq!(obj["chaotic_single_val"], 8.0);
    }

    #[test]
    fn test_record_keys_in_topology_order() {
        let line = serde_json::to_string(&sample()).unwrap();
        let p = line.find("parallel_chain").unwrap();
        let f = line.find("forward_chain").unwrap();
        let b = line.find("backward_chain").unwrap();
        let c = line.find("chaotic_chain").unwrap();
        assert!(p < f && f < b && b < c);
    }

    #[test]
    fn test_view_roundtrip() {
        let rec = sample();
        assert_eq!(rec.view(Topology::Forward), view("f", 3.0, 4.0));
        assert_eq!(rec.view(Topology::Parallel), view("p", 1.0, 2.0));
        assert_eq!(rec.name_list(), vec!["Ana", "Rosa"]);
    }

    #[test]
    fn test_evaluation_target_as_string_or_number() {
        let a: EvaluationRecord =
            serde_json::from_str(r#"{"idx": 1, "target": "1600.0", "generated": "x"}"#).unwrap();
        let b: EvaluationRecord =
            serde_json::from_str(r#"{"target": 25, "generated": "y"}"#).unwrap();
        assert_eq!(a.target, 1600.0);
        assert_eq!(b.target, 25.0);
        assert_eq!(b.idx, 0);
        assert!(serde_json::from_str::<EvaluationRecord>(r#"{"target": "abc", "generated": ""}"#)
            .is_err());
    }
}
