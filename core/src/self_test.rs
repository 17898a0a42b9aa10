//! Reference known-answer check.
//!
//! Two values pin the implementation:
//!   - stream 0 seeded with 1, after CHECK_DRAWS draws, must hold CHECK
//!   - after planting from 1, stream 1 must hold JUMP_MULTIPLIER
//!
//! Reporting pass/fail to a user is the caller's job.

use crate::{
    config::{CHECK, CHECK_DRAWS, JUMP_MULTIPLIER},
    error::LehmerResult,
    generator::Generator,
    types::State,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelfTestReport {
    pub draw_chain_seed: State,
    pub planted_seed:    State,
}

impl SelfTestReport {
    pub fn passed(&self) -> bool {
        self.draw_chain_seed == CHECK && self.planted_seed == JUMP_MULTIPLIER
    }
}

/// Run the check on a fresh generator.
pub fn run() -> LehmerResult<SelfTestReport> {
    let mut rng = Generator::default();

    rng.set_stream(0);
    rng.set_seed(1)?;
    for _ in 0..CHECK_DRAWS {
        rng.draw();
    }
    let draw_chain_seed = rng.seed();

    rng.set_stream(1);
    rng.plant_seeds(1)?;
    let planted_seed = rng.seed();

    rng.shutdown();
    Ok(SelfTestReport { draw_chain_seed, planted_seed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values_pass() {
        let report = run().unwrap();
        assert_eq!(report.draw_chain_seed, CHECK);
        assert_eq!(report.planted_seed, JUMP_MULTIPLIER);
        assert!(report.passed());
    }

    #[test]
    fn any_mismatch_fails() {
        let report = SelfTestReport { draw_chain_seed: CHECK, planted_seed: 1 };
        assert!(!report.passed());
        let report = SelfTestReport { draw_chain_seed: 1, planted_seed: JUMP_MULTIPLIER };
        assert!(!report.passed());
    }
}
