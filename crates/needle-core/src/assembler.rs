//! Dataset assembly: one record per trial, rejection-sampled on the forward
//! target's magnitude.
//!
//! Each trial owns a `ChaCha8Rng` on its own stream of the dataset seed, so a
//! trial's output never depends on which worker ran it or in what order.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::chain::{build_parallel, build_sequential};
use crate::error::{NeedleError, NeedleResult};
use crate::names::NamePool;
use crate::record::DatasetRecord;
use crate::topology::{arrange, Topology};

/// Accepted forward targets lie within `base / SPAN ..= base * SPAN`.
pub const ACCEPTANCE_SPAN: f64 = 64.0;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub trials: usize,
    /// Participants per trial.
    pub k: usize,
    pub base_value: f64,
    pub seed: u64,
    /// Whole-trial attempts allowed per record. `None` retries forever.
    pub max_attempts: Option<usize>,
    /// Spread trials over the rayon pool.
    pub parallel: bool,
}

impl GenerateOptions {
    pub fn new(trials: usize, k: usize, base_value: f64, seed: u64) -> Self {
        Self {
            trials,
            k,
            base_value,
            seed,
            max_attempts: None,
            parallel: true,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn validate(&self, pool: &NamePool) -> NeedleResult<()> {
        if self.k == 0 {
            return Err(NeedleError::InvalidParameters(
                "k must be at least 1".into(),
            ));
        }
        if self.k > pool.len() {
            return Err(NeedleError::InvalidParameters(format!(
                "k = {} exceeds the name pool ({} names)",
                self.k,
                pool.len()
            )));
        }
        if !self.base_value.is_finite() || self.base_value <= 0.0 {
            return Err(NeedleError::InvalidParameters(format!(
                "base value must be positive and finite, got {}",
                self.base_value
            )));
        }
        if self.max_attempts == Some(0) {
            return Err(NeedleError::InvalidParameters(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn accepts(&self, forward_target: f64) -> bool {
        forward_target <= self.base_value * ACCEPTANCE_SPAN
            && forward_target >= self.base_value / ACCEPTANCE_SPAN
    }
}

/// The random source for trial `idx` of a dataset seeded with `seed`.
pub fn trial_rng(seed: u64, idx: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(idx as u64);
    rng
}

/// Build one accepted record, regenerating the whole trial (names included)
/// until the forward target falls inside the acceptance span.
pub fn generate_trial<R: Rng + ?Sized>(
    idx: usize,
    pool: &NamePool,
    opts: &GenerateOptions,
    rng: &mut R,
) -> NeedleResult<DatasetRecord> {
    let mut attempts = 0usize;
    loop {
        if opts.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(NeedleError::AcceptanceExhausted { idx, attempts });
        }
        attempts += 1;

        let names = pool.sample(opts.k, rng)?;
        let parallel = build_parallel(names.clone(), opts.base_value, rng);
        let sequential = build_sequential(names.clone(), opts.base_value, rng);

        let p = arrange(&parallel, Topology::Parallel, rng)?;
        let f = arrange(&sequential, Topology::Forward, rng)?;
        let b = arrange(&sequential, Topology::Backward, rng)?;
        let c = arrange(&sequential, Topology::Chaotic, rng)?;

        if !opts.accepts(f.target_value()) {
            debug!(idx, attempts, value = f.target_value(), "forward target out of range");
            continue;
        }
        if attempts > 1 {
            debug!(idx, attempts, "trial accepted after retries");
        }
        return Ok(DatasetRecord::new(
            idx,
            &names,
            (&p).into(),
            (&f).into(),
            (&b).into(),
            (&c).into(),
        ));
    }
}

/// Generate `opts.trials` records in `idx` order.
pub fn generate(pool: &NamePool, opts: &GenerateOptions) -> NeedleResult<Vec<DatasetRecord>> {
    opts.validate(pool)?;
    info!(
        trials = opts.trials,
        k = opts.k,
        base = opts.base_value,
        seed = opts.seed,
        "generating dataset"
    );
    let run = |idx: usize| generate_trial(idx, pool, opts, &mut trial_rng(opts.seed, idx));
    if opts.parallel {
        (0..opts.trials).into_par_iter().map(run).collect()
    } else {
        (0..opts.trials).map(run).collect()
    }
}
