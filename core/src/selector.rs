use crate::{config::STREAMS, types::StreamIndex};

/// The currently selected stream. Any integer is accepted and wrapped
/// into `[0, STREAMS)`, negative values included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSelector {
    current: StreamIndex,
}

impl StreamSelector {
    pub fn new(index: i64) -> Self {
        let mut selector = Self::default();
        selector.select(index);
        selector
    }

    pub fn current(&self) -> StreamIndex {
        self.current
    }

    pub fn select(&mut self, index: i64) {
        self.current = index.rem_euclid(STREAMS as i64) as StreamIndex;
    }
}
