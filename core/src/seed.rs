//! Seed normalization.
//!
//!   x > 0  →  x mod MODULUS
//!   x < 0  →  clock time mod MODULUS
//!   x = 0  →  the caller must supply the seed (InteractiveSeedRequired)
//!
//! A positive multiple of MODULUS reduces to 0 and is treated like 0.

use crate::{
    clock::SeedClock,
    config::MODULUS,
    error::{LehmerError, LehmerResult},
    types::State,
};

pub fn normalize_seed<C: SeedClock + ?Sized>(value: i64, clock: &C) -> LehmerResult<State> {
    let seed = if value < 0 {
        let secs = clock.now_secs();
        // A timestamp landing exactly on a multiple of MODULUS would give 0.
        let seed = secs.rem_euclid(MODULUS as i64).max(1);
        log::info!("Seeding from clock: t={secs}s -> seed {seed}");
        seed
    } else {
        value % MODULUS as i64
    };

    if seed == 0 {
        return Err(LehmerError::InteractiveSeedRequired);
    }
    Ok(seed as State)
}
