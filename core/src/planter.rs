//! Seed planting.
//!
//! Fills every stream from one master seed. Stream j+1 starts where stream j
//! would be after MAX_DRAWS draws, so no two streams overlap until one of
//! them draws more than MAX_DRAWS values.
//!
//! RULE: Planting rewrites states only. Draw counters and the selected
//! stream are left alone.

use crate::{
    bank::StreamBank,
    clock::SeedClock,
    config::STREAMS,
    error::LehmerResult,
    modular::JUMP,
    seed::normalize_seed,
    types::State,
};

/// Normalize `master_seed` and plant every stream from it.
/// Fails without touching the bank if the seed has to be supplied externally.
pub fn plant_seeds<C: SeedClock + ?Sized>(
    bank: &mut StreamBank,
    master_seed: i64,
    clock: &C,
) -> LehmerResult<()> {
    let first = normalize_seed(master_seed, clock)?;
    plant_from(bank, first);
    Ok(())
}

/// Plant from an already normalized stream 0 state.
pub fn plant_from(bank: &mut StreamBank, first: State) {
    bank.set_state(0, first);
    for j in 1..STREAMS {
        let previous = bank.state(j - 1);
        bank.set_state(j, JUMP.apply(previous));
    }
    log::debug!(
        "Planted {STREAMS} streams from {first} (last stream starts at {})",
        bank.state(STREAMS - 1)
    );
}
