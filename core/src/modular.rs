//! Modular multiplication `(a * s) mod m` without overflow.
//!
//! Uses Schrage's decomposition m = a*q + r. As long as r < q every
//! intermediate product stays below m, so plain i32 arithmetic is enough
//! for a 31-bit prime modulus.

use crate::{
    config::{JUMP_MULTIPLIER, MODULUS, MULTIPLIER},
    types::State,
};

/// A multiplier with its Schrage constants precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModularMultiplier {
    multiplier: State,
    modulus:    State,
    q:          State,
    r:          State,
}

/// Advances a stream by one draw.
pub const DRAW: ModularMultiplier = ModularMultiplier::new(MULTIPLIER);

/// Advances a planted seed by MAX_DRAWS draws.
pub const JUMP: ModularMultiplier = ModularMultiplier::new(JUMP_MULTIPLIER);

impl ModularMultiplier {
    pub const fn new(multiplier: State) -> Self {
        Self::with_modulus(multiplier, MODULUS)
    }

    /// Requires `0 < multiplier < modulus` and `modulus % multiplier < modulus / multiplier`.
    pub const fn with_modulus(multiplier: State, modulus: State) -> Self {
        let q = modulus / multiplier;
        let r = modulus % multiplier;
        assert!(r < q, "Schrage's method needs modulus % multiplier < modulus / multiplier");
        Self { multiplier, modulus, q, r }
    }

    pub const fn multiplier(&self) -> State {
        self.multiplier
    }

    pub const fn modulus(&self) -> State {
        self.modulus
    }

    /// One step of the congruence. `state` must be in `(0, modulus)`; the
    /// result is then in `(0, modulus)` as well.
    #[inline]
    pub fn apply(&self, state: State) -> State {
        debug_assert!(
            state > 0 && state < self.modulus,
            "state {state} outside (0, {})",
            self.modulus
        );
        let t = self.multiplier * (state % self.q) - self.r * (state / self.q);
        if t > 0 {
            t
        } else {
            t + self.modulus
        }
    }
}
