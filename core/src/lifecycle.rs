//! End-of-life check on stream usage.
//!
//! Runs once, when the caller shuts the generator down. It never fails and
//! never changes generator state; it only reports draws that were already
//! statistically compromised.

use crate::{
    config::{MAX_DRAWS, MODULUS, STREAMS},
    types::{DrawCount, StreamIndex},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LifecycleWarning {
    /// The stream drew more values than the generator's period.
    FullCycle { stream: StreamIndex },
    /// The stream ran into the region reserved for `collided_with`.
    Overlap {
        stream:        StreamIndex,
        collided_with: StreamIndex,
    },
}

impl fmt::Display for LifecycleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullCycle { stream } => write!(f, "Stream {stream} completely cycled"),
            Self::Overlap { stream, collided_with } => {
                write!(f, "Stream {stream} overlapped stream {collided_with}")
            }
        }
    }
}

/// Inspect per-stream draw counters. Warnings come out in stream order;
/// within a stream the full-cycle warning precedes its overlaps.
pub fn check_lifecycle(draw_counts: &[DrawCount]) -> Vec<LifecycleWarning> {
    let period = (MODULUS - 1) as DrawCount;
    let mut warnings = Vec::new();

    for (stream, &count) in draw_counts.iter().enumerate() {
        if count > period {
            warnings.push(LifecycleWarning::FullCycle { stream });
        }

        let mut remaining = count;
        let mut offset = 1;
        while remaining > MAX_DRAWS {
            warnings.push(LifecycleWarning::Overlap {
                stream,
                collided_with: (stream + offset) % STREAMS,
            });
            remaining -= MAX_DRAWS;
            offset += 1;
        }
    }
    warnings
}
