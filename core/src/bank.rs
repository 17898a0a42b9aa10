//! Per-stream state and draw counters.
//!
//! The bank is a pair of fixed-size tables indexed by stream. It does not
//! know which stream is selected; callers pass the index explicitly.

use crate::{
    config::STREAMS,
    modular::ModularMultiplier,
    types::{DrawCount, State, StreamIndex},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamBank {
    states:      [State; STREAMS],
    draw_counts: [DrawCount; STREAMS],
}

impl StreamBank {
    /// An unplanted bank. Every state is 0 until the planter runs.
    pub fn new() -> Self {
        Self {
            states:      [0; STREAMS],
            draw_counts: [0; STREAMS],
        }
    }

    /// Rebuild a bank from snapshot tables. Returns None unless both
    /// slices hold exactly STREAMS entries.
    pub fn from_parts(states: &[State], draw_counts: &[DrawCount]) -> Option<Self> {
        Some(Self {
            states:      states.try_into().ok()?,
            draw_counts: draw_counts.try_into().ok()?,
        })
    }

    pub fn state(&self, stream: StreamIndex) -> State {
        self.states[stream]
    }

    pub fn set_state(&mut self, stream: StreamIndex, state: State) {
        self.states[stream] = state;
    }

    /// Count one draw on `stream` and step its state. Returns the new state.
    pub fn advance(&mut self, stream: StreamIndex, step: &ModularMultiplier) -> State {
        self.draw_counts[stream] += 1;
        let next = step.apply(self.states[stream]);
        self.states[stream] = next;
        next
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn draw_counts(&self) -> &[DrawCount] {
        &self.draw_counts
    }

    #[cfg(test)]
    pub(crate) fn set_draw_count(&mut self, stream: StreamIndex, count: DrawCount) {
        self.draw_counts[stream] = count;
    }
}

impl Default for StreamBank {
    fn default() -> Self { Self::new() }
}
