//! Snapshot serialization: full generator state to/from JSON.
//!
//! A snapshot captures everything needed to continue the exact same
//! sequences later: the selected stream, every state, every draw counter.

use crate::{
    config::{MODULUS, STREAMS},
    error::{LehmerError, LehmerResult},
    types::{DrawCount, State, StreamIndex},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    pub current_stream: StreamIndex,
    pub states:         Vec<State>,
    pub draw_counts:    Vec<DrawCount>,
}

impl GeneratorSnapshot {
    pub fn to_json(&self) -> LehmerResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a snapshot.
    pub fn from_json(json: &str) -> LehmerResult<Self> {
        let snapshot: GeneratorSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> LehmerResult<()> {
        if self.current_stream >= STREAMS {
            return Err(invalid(format!(
                "current_stream {} outside [0, {STREAMS})",
                self.current_stream
            )));
        }
        if self.states.len() != STREAMS || self.draw_counts.len() != STREAMS {
            return Err(invalid(format!(
                "expected {STREAMS} states and draw counts, got {} and {}",
                self.states.len(),
                self.draw_counts.len()
            )));
        }
        if let Some((stream, state)) = self
            .states
            .iter()
            .enumerate()
            .find(|&(_, &s)| s <= 0 || s >= MODULUS)
        {
            return Err(invalid(format!("stream {stream} has invalid state {state}")));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> LehmerError {
    LehmerError::InvalidSnapshot { reason }
}
