//! The multi-stream Lehmer generator.
//!
//! RULES:
//!   - Every operation acts on the selected stream, read from an explicit field.
//!   - Planting rewrites all states but never the draw counters.
//!   - Draw counters only grow. `shutdown` reads them; nothing resets them.
//!   - A seed of 0 is returned to the caller as an error, never resolved here.

use crate::{
    bank::StreamBank,
    clock::{SeedClock, SystemClock},
    config::{DEFAULT_SEED, MODULUS},
    error::{LehmerError, LehmerResult},
    lifecycle::{check_lifecycle, LifecycleWarning},
    modular::DRAW,
    planter,
    seed::normalize_seed,
    selector::StreamSelector,
    snapshot::GeneratorSnapshot,
    types::{DrawCount, State, StreamIndex},
};

/// 256 non-overlapping Lehmer streams planted from one master seed.
///
/// Not synchronized: one generator per worker, or lock it externally.
///
/// # Example
/// ```
/// use lehmer_core::Generator;
///
/// let mut rng = Generator::new(12345, 0).unwrap();
/// let u = rng.draw();
/// assert!(u > 0.0 && u < 1.0);
///
/// rng.set_stream(7);
/// let v = rng.draw();
/// assert!(rng.shutdown().is_empty());
/// # let _ = v;
/// ```
#[derive(Debug)]
pub struct Generator<C: SeedClock = SystemClock> {
    selector:  StreamSelector,
    bank:      StreamBank,
    clock:     C,
    shut_down: bool,
}

impl Generator<SystemClock> {
    /// Select `initial_stream`, then plant all streams from `initial_seed`.
    /// Negative seeds are taken from the wall clock.
    pub fn new(initial_seed: i64, initial_stream: i64) -> LehmerResult<Self> {
        Self::with_clock(initial_seed, initial_stream, SystemClock)
    }
}

impl Default for Generator<SystemClock> {
    /// Planted from DEFAULT_SEED, stream 0.
    fn default() -> Self {
        let mut bank = StreamBank::new();
        planter::plant_from(&mut bank, DEFAULT_SEED as State);
        Self {
            selector: StreamSelector::default(),
            bank,
            clock: SystemClock,
            shut_down: false,
        }
    }
}

impl<C: SeedClock> Generator<C> {
    pub fn with_clock(initial_seed: i64, initial_stream: i64, clock: C) -> LehmerResult<Self> {
        let mut generator = Self {
            selector: StreamSelector::new(initial_stream),
            bank: StreamBank::new(),
            clock,
            shut_down: false,
        };

        // Normalize once so a clock seed is read a single time.
        let seed = normalize_seed(initial_seed, &generator.clock)?;
        generator.bank.set_state(generator.selector.current(), seed);
        planter::plant_from(&mut generator.bank, seed);

        log::debug!(
            "Generator initialized: seed {seed}, stream {}",
            generator.selector.current()
        );
        Ok(generator)
    }

    /// Next uniform value from the selected stream, strictly inside (0, 1).
    pub fn draw(&mut self) -> f64 {
        let state = self.bank.advance(self.selector.current(), &DRAW);
        f64::from(state) / f64::from(MODULUS)
    }

    /// State of the selected stream.
    pub fn seed(&self) -> State {
        self.bank.state(self.selector.current())
    }

    /// Replace the selected stream's state. On `InteractiveSeedRequired`
    /// nothing changes; obtain a positive seed and call again.
    pub fn set_seed(&mut self, value: i64) -> LehmerResult<()> {
        let seed = normalize_seed(value, &self.clock)?;
        self.bank.set_state(self.selector.current(), seed);
        Ok(())
    }

    pub fn stream(&self) -> StreamIndex {
        self.selector.current()
    }

    /// Select a stream. Out-of-range indices wrap modulo STREAMS.
    pub fn set_stream(&mut self, index: i64) {
        self.selector.select(index);
    }

    /// Re-plant every stream from `master_seed`. The selected stream and the
    /// draw counters are kept.
    pub fn plant_seeds(&mut self, master_seed: i64) -> LehmerResult<()> {
        planter::plant_seeds(&mut self.bank, master_seed, &self.clock)
    }

    pub fn states(&self) -> &[State] {
        self.bank.states()
    }

    pub fn draw_counts(&self) -> &[DrawCount] {
        self.bank.draw_counts()
    }

    /// Check every stream for overlap or a full cycle and return the
    /// findings. Safe to call more than once; warnings are logged only on
    /// the first call.
    pub fn shutdown(&mut self) -> Vec<LifecycleWarning> {
        let warnings = check_lifecycle(self.bank.draw_counts());
        if !self.shut_down {
            for warning in &warnings {
                log::warn!("{warning}");
            }
            log::debug!("Generator shut down with {} warning(s)", warnings.len());
            self.shut_down = true;
        }
        warnings
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn snapshot(&self) -> GeneratorSnapshot {
        GeneratorSnapshot {
            current_stream: self.selector.current(),
            states:         self.bank.states().to_vec(),
            draw_counts:    self.bank.draw_counts().to_vec(),
        }
    }

    /// Replace all stream state with `snapshot`. Invalid snapshots are
    /// rejected and leave the generator unchanged.
    pub fn restore(&mut self, snapshot: &GeneratorSnapshot) -> LehmerResult<()> {
        snapshot.validate()?;
        self.bank = StreamBank::from_parts(&snapshot.states, &snapshot.draw_counts).ok_or_else(
            || LehmerError::InvalidSnapshot {
                reason: "stream tables have the wrong length".to_string(),
            },
        )?;
        self.selector.select(snapshot.current_stream as i64);
        log::debug!("Generator restored at stream {}", snapshot.current_stream);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set_draw_count(&mut self, stream: StreamIndex, count: DrawCount) {
        self.bank.set_draw_count(stream, count);
    }
}

impl<C: SeedClock> Drop for Generator<C> {
    fn drop(&mut self) {
        if !self.shut_down {
            log::debug!("Generator dropped without shutdown(); lifecycle check skipped");
        }
    }
}
