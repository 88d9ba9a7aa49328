//! Presentation orders for a built chain.
//!
//! Arranging never touches the chain itself: a [`PresentedChain`] borrows it
//! and carries only an order and a target index, so forward, backward and
//! chaotic views all share one sequential chain.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::chain::{Chain, ChainKind};
use crate::error::{NeedleError, NeedleResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    Parallel,
    Forward,
    Backward,
    Chaotic,
}

impl Topology {
    /// Record field order.
    pub const ALL: [Topology; 4] = [
        Topology::Parallel,
        Topology::Forward,
        Topology::Backward,
        Topology::Chaotic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parallel => "parallel",
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Chaotic => "chaotic",
        }
    }

    /// The kind of chain this topology presents.
    pub fn chain_kind(self) -> ChainKind {
        match self {
            Self::Parallel => ChainKind::Parallel,
            Self::Forward | Self::Backward | Self::Chaotic => ChainKind::Sequential,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Topology {
    type Err = NeedleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "parallel" => Ok(Self::Parallel),
            "forward" => Ok(Self::Forward),
            "backward" => Ok(Self::Backward),
            "chaotic" => Ok(Self::Chaotic),
            _ => Err(NeedleError::InvalidTopology(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// PresentedChain
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PresentedChain<'a> {
    chain: &'a Chain,
    order: Vec<usize>,
    target: usize,
}

impl<'a> PresentedChain<'a> {
    /// Present `chain` in an explicit `order` (a permutation of its indices).
    /// The target depends only on the topology, never on the order.
    pub fn with_order(
        chain: &'a Chain,
        topology: Topology,
        order: Vec<usize>,
    ) -> NeedleResult<Self> {
        if topology.chain_kind() != chain.kind() {
            return Err(NeedleError::TopologyMismatch {
                topology: topology.to_string(),
                kind: chain.kind().to_string(),
            });
        }
        let last = chain.last().ok_or_else(|| {
            NeedleError::InvalidParameters("cannot arrange an empty chain".into())
        })?;
        let mut seen = vec![false; chain.len()];
        if order.len() != chain.len() {
            return Err(NeedleError::InvalidParameters(format!(
                "order has {} entries for a chain of {}",
                order.len(),
                chain.len()
            )));
        }
        for &i in &order {
            match seen.get_mut(i) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(NeedleError::InvalidParameters(format!(
                        "order is not a permutation (index {i})"
                    )))
                }
            }
        }
        let target = match topology {
            Topology::Backward => 0,
            Topology::Forward | Topology::Chaotic | Topology::Parallel => last,
        };
        Ok(Self {
            chain,
            order,
            target,
        })
    }

    /// Chain indices in presentation order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.order.iter().map(|&i| self.chain.name(i)).collect()
    }

    pub fn sentences(&self) -> Vec<String> {
        self.order.iter().map(|&i| self.chain.sentence(i)).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.order.iter().map(|&i| self.chain.value(i)).collect()
    }

    /// Sentences joined by newlines, as shown to the model.
    pub fn context(&self) -> String {
        self.sentences().join("\n")
    }

    pub fn target_name(&self) -> &'a str {
        self.chain.name(self.target)
    }

    pub fn target_value(&self) -> f64 {
        self.chain.value(self.target)
    }

    pub fn total(&self) -> f64 {
        self.chain.total()
    }
}

/// Arrange `chain` under `topology`.
///
/// - forward: chain order, target is the last participant.
/// - backward: reversed, target is the original first participant.
/// - chaotic / parallel: one uniform shuffle, target is the last-built
///   participant wherever it lands.
pub fn arrange<'a, R: Rng + ?Sized>(
    chain: &'a Chain,
    topology: Topology,
    rng: &mut R,
) -> NeedleResult<PresentedChain<'a>> {
    let mut order: Vec<usize> = (0..chain.len()).collect();
    match topology {
        Topology::Forward => {}
        Topology::Backward => order.reverse(),
        Topology::Chaotic | Topology::Parallel => order.shuffle(rng),
    }
    PresentedChain::with_order(chain, topology, order)
}
