//! Salary chains: one fact and one implied value per participant.
//!
//! A sequential chain links every participant to the one before it, so the
//! last value is only reachable by walking the whole chain. A parallel chain
//! states every salary directly.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{NeedleError, NeedleResult};

/// Multipliers available to a parallel chain's independent salaries.
pub const PARALLEL_FACTORS: [f64; 7] = [0.125, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0];

// ---------------------------------------------------------------------------
// Relation / Fact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Double,
    Half,
    Equal,
}

impl Relation {
    pub const ALL: [Relation; 3] = [Relation::Double, Relation::Half, Relation::Equal];

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Double => 2.0,
            Self::Half => 0.5,
            Self::Equal => 1.0,
        }
    }

    /// Uniform draw over the three relative relations.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double => write!(f, "double"),
            Self::Half => write!(f, "half"),
            Self::Equal => write!(f, "equal"),
        }
    }
}

/// What a participant's sentence states. `reference` is an index into the
/// owning chain, never a name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fact {
    Base { amount: f64 },
    Relative { relation: Relation, reference: usize },
}

// ---------------------------------------------------------------------------
// Chain
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    Sequential,
    Parallel,
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    kind: ChainKind,
    names: Vec<String>,
    facts: Vec<Fact>,
    values: Vec<f64>,
}

impl Chain {
    /// Sequential chain with an explicit relation per link.
    /// `relations.len()` must be `names.len() - 1` (or zero for an empty chain).
    pub fn from_relations(
        names: Vec<String>,
        base: f64,
        relations: &[Relation],
    ) -> NeedleResult<Self> {
        if relations.len() != names.len().saturating_sub(1) {
            return Err(NeedleError::InvalidParameters(format!(
                "{} participants need {} relations, got {}",
                names.len(),
                names.len().saturating_sub(1),
                relations.len()
            )));
        }
        Ok(Self::link(names, base, relations))
    }

    fn link(names: Vec<String>, base: f64, relations: &[Relation]) -> Self {
        let mut facts = Vec::with_capacity(names.len());
        let mut values = Vec::with_capacity(names.len());
        if !names.is_empty() {
            facts.push(Fact::Base { amount: base });
            values.push(base);
        }
        for (i, relation) in relations.iter().enumerate() {
            let prev = values[i];
            facts.push(Fact::Relative {
                relation: *relation,
                reference: i,
            });
            values.push(prev * relation.multiplier());
        }
        Self {
            kind: ChainKind::Sequential,
            names,
            facts,
            values,
        }
    }

    /// Parallel chain with an explicit factor per participant.
    pub fn from_factors(names: Vec<String>, base: f64, factors: &[f64]) -> NeedleResult<Self> {
        if factors.len() != names.len() {
            return Err(NeedleError::InvalidParameters(format!(
                "{} participants need {} factors, got {}",
                names.len(),
                names.len(),
                factors.len()
            )));
        }
        Ok(Self::scatter(names, base, factors))
    }

    fn scatter(names: Vec<String>, base: f64, factors: &[f64]) -> Self {
        let values: Vec<f64> = factors.iter().map(|f| base * f).collect();
        let facts = values.iter().map(|v| Fact::Base { amount: *v }).collect();
        Self {
            kind: ChainKind::Parallel,
            names,
            facts,
            values,
        }
    }

    pub fn kind(&self) -> ChainKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    pub fn value(&self, i: usize) -> f64 {
        self.values[i]
    }

    /// Index of the last-built participant, if any.
    pub fn last(&self) -> Option<usize> {
        self.names.len().checked_sub(1)
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Render participant `i`'s fact as an English sentence.
    pub fn sentence(&self, i: usize) -> String {
        let subject = &self.names[i];
        match self.facts[i] {
            Fact::Base { amount } => {
                let amount = match self.kind {
                    ChainKind::Sequential => render_amount(amount),
                    ChainKind::Parallel => render_scaled(amount),
                };
                format!("{subject} received ${amount} last week.")
            }
            Fact::Relative {
                relation,
                reference,
            } => {
                let other = &self.names[reference];
                match relation {
                    Relation::Double => format!("{subject} earns twice as much as {other}."),
                    Relation::Half => format!("{subject} earns half as much as {other}."),
                    Relation::Equal => format!("{subject} earns the same salary as {other}."),
                }
            }
        }
    }

    pub fn sentences(&self) -> Vec<String> {
        (0..self.len()).map(|i| self.sentence(i)).collect()
    }
}

/// Participant 0 gets the base salary; every later participant is tied to the
/// previous one by a uniformly drawn relation.
pub fn build_sequential<R: Rng + ?Sized>(names: Vec<String>, base: f64, rng: &mut R) -> Chain {
    let relations: Vec<Relation> = (1..names.len()).map(|_| Relation::random(rng)).collect();
    Chain::link(names, base, &relations)
}

/// Every participant gets an independent salary of `base * factor`.
pub fn build_parallel<R: Rng + ?Sized>(names: Vec<String>, base: f64, rng: &mut R) -> Chain {
    let factors: Vec<f64> = names
        .iter()
        .map(|_| *PARALLEL_FACTORS.choose(rng).unwrap_or(&1.0))
        .collect();
    Chain::scatter(names, base, &factors)
}

/// Whole amounts print without a fractional part: `1600`, `12.5`.
pub fn render_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}

/// Scaled amounts always keep a fractional part: `12800.0`, `12.5`.
pub fn render_scaled(amount: f64) -> String {
    format!("{amount:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn names(n: usize) -> Vec<String> {
        ["Ana", "Rosa", "Saul", "Malik", "Cleo", "Liv"][..n]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_value_propagation() {
        let chain = Chain::from_relations(
            names(4),
            100.0,
            &[Relation::Equal, Relation::Double, Relation::Half],
        )
        .unwrap();
        assert_eq!(chain.values(), &[100.0, 100.0, 200.0, 100.0]);
        assert_eq!(chain.kind(), ChainKind::Sequential);
    }

    #[test]
    fn test_sequential_sentences() {
        let chain = Chain::from_relations(
            names(4),
            1600.0,
            &[Relation::Double, Relation::Half, Relation::Equal],
        )
        .unwrap();
        assert_eq!(
            chain.sentences(),
            vec![
                "Ana received $1600 last week.",
                "Rosa earns twice as much as Ana.",
                "Saul earns half as much as Rosa.",
                "Malik earns the same salary as Saul.",
            ]
        );
    }

    #[test]
    fn test_relation_count_mismatch() {
        assert!(Chain::from_relations(names(3), 1.0, &[Relation::Half]).is_err());
        assert!(Chain::from_factors(names(3), 1.0, &[1.0]).is_err());
    }

    #[test]
    fn test_parallel_sentences() {
        let chain = Chain::from_factors(names(3), 100.0, &[0.125, 8.0, 1.0]).unwrap();
        assert_eq!(chain.values(), &[12.5, 800.0, 100.0]);
        assert_eq!(chain.sentence(0), "Ana received $12.5 last week.");
        assert_eq!(chain.sentence(1), "Rosa received $800.0 last week.");
        assert_eq!(chain.kind(), ChainKind::Parallel);
    }

    #[test]
    fn test_build_sequential_links_previous() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let chain = build_sequential(names(6), 1600.0, &mut rng);
        assert_eq!(chain.facts()[0], Fact::Base { amount: 1600.0 });
        for i in 1..chain.len() {
            match chain.facts()[i] {
                Fact::Relative {
                    relation,
                    reference,
                } => {
                    assert_eq!(reference, i - 1);
                    assert_eq!(chain.value(i), chain.value(i - 1) * relation.multiplier());
                }
                Fact::Base { .. } => panic!("only the first participant is BASE"),
            }
        }
    }

    #[test]
    fn test_build_parallel_factors() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let chain = build_parallel(names(6), 1600.0, &mut rng);
        for (fact, value) in chain.facts().iter().zip(chain.values()) {
            assert_eq!(*fact, Fact::Base { amount: *value });
            assert!(PARALLEL_FACTORS.iter().any(|f| 1600.0 * f == *value));
        }
    }

    #[test]
    fn test_relation_draw_covers_all() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let drawn: Vec<Relation> = (0..200).map(|_| Relation::random(&mut rng)).collect();
        for r in Relation::ALL {
            assert!(drawn.contains(&r), "never drew {r}");
        }
    }

    #[test]
    fn test_empty_chain() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let chain = build_sequential(Vec::new(), 1.0, &mut rng);
        assert!(chain.is_empty());
        assert_eq!(chain.last(), None);
        assert_eq!(chain.total(), 0.0);
    }

    #[test]
    fn test_parallel_amounts_keep_fraction() {
        let chain = Chain::from_factors(names(3), 1600.0, &[8.0, 1.0, 0.125]).unwrap();
        assert_eq!(
            chain.sentences(),
            vec![
                "Ana received $12800.0 last week.",
                "Rosa received $1600.0 last week.",
                "Saul received $200.0 last week.",
            ]
        );
        let seq = Chain::from_relations(names(1), 1600.0, &[]).unwrap();
        assert_eq!(seq.sentence(0), "Ana received $1600 last week.");
    }

    #[test]
    fn test_render_amount() {
        assert_eq!(render_amount(1600.0), "1600");
        assert_eq!(render_amount(12.5), "12.5");
        assert_eq!(render_amount(0.390625), "0.390625");
        assert_eq!(render_scaled(12800.0), "12800.0");
        assert_eq!(render_scaled(12.5), "12.5");
    }
}
