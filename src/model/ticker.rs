use rand::prelude::*;
use std::collections::VecDeque;

use crate::constants::{TICKER_CAPACITY, TICK_INTERVAL_MS};

/// One decorative line in the ticker with its current display opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeLine {
    pub text: &'static str,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct TickerParams {
    /// Maximum number of lines kept; the oldest is dropped past this.
    pub capacity: usize,
    pub interval_ms: i32,
}

impl Default for TickerParams {
    fn default() -> Self {
        Self {
            capacity: TICKER_CAPACITY,
            interval_ms: TICK_INTERVAL_MS,
        }
    }
}

/// Bounded FIFO of code lines fed from a fixed snippet pool.
///
/// Opacity of entry `i` is `(i + 1) / len`, so the newest line is fully
/// opaque and older lines fade out toward the front of the queue.
pub struct CodeTicker<R: Rng = StdRng> {
    pub params: TickerParams,
    pool: &'static [&'static str],
    lines: VecDeque<CodeLine>,
    rng: R,
}

impl CodeTicker<StdRng> {
    pub fn new(params: TickerParams, pool: &'static [&'static str], seed: u64) -> Self {
        Self::with_rng(params, pool, StdRng::seed_from_u64(seed))
    }

    /// Ticker seeded from the platform entropy source.
    pub fn from_entropy(params: TickerParams, pool: &'static [&'static str]) -> Self {
        Self::with_rng(params, pool, StdRng::from_entropy())
    }
}

impl<R: Rng> CodeTicker<R> {
    pub fn with_rng(params: TickerParams, pool: &'static [&'static str], rng: R) -> Self {
        let lines = VecDeque::with_capacity(params.capacity + 1);
        Self {
            params,
            pool,
            lines,
            rng,
        }
    }

    /// Pick a snippet uniformly at random and append it. Returns `None` only
    /// when the pool is empty, in which case the queue is left unchanged.
    pub fn tick(&mut self) -> Option<&'static str> {
        let text = *self.pool.choose(&mut self.rng)?;
        self.push_line(text);
        Some(text)
    }

    /// Append `text` as the newest line, evict past capacity, refresh opacities.
    pub fn push_line(&mut self, text: &'static str) {
        self.lines.push_back(CodeLine { text, opacity: 1.0 });
        while self.lines.len() > self.params.capacity {
            self.lines.pop_front();
        }
        self.refresh_opacity();
    }

    fn refresh_opacity(&mut self) {
        let n = self.lines.len() as f32;
        for (i, line) in self.lines.iter_mut().enumerate() {
            line.opacity = (i as f32 + 1.0) / n;
        }
    }

    #[inline]
    pub fn lines(&self) -> impl Iterator<Item = &CodeLine> {
        self.lines.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
