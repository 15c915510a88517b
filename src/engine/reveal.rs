//! Reveal sequence
//!
//! The "spinning" effect is a finite iterator of independent uniform draws
//! (with replacement) from the eligible set. The engine holds no timers: the
//! host decides how fast to pull items, using `RevealConfig::interval` as the
//! cadence. The last item yielded is the committed pick.

use crate::catalog::MenuItem;
use crate::error::SelectionError;
use rand::Rng;
use std::time::Duration;

/// Number of picks shown before the selection settles
pub const DEFAULT_REVEAL_STEPS: usize = 11;

/// Delay between consecutive picks
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(100);

/// Shape of a reveal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealConfig {
    /// Total picks emitted, including the final one (at least 1)
    pub steps: usize,
    /// Cadence the host should drive the sequence at
    pub interval: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_REVEAL_STEPS,
            interval: DEFAULT_REVEAL_INTERVAL,
        }
    }
}

impl RevealConfig {
    /// Same step count, no delay. Useful for headless runs and tests.
    pub fn instant(self) -> Self {
        Self {
            interval: Duration::ZERO,
            ..self
        }
    }
}

/// One emitted pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStep {
    /// 1-based position in the sequence
    pub step: usize,
    pub total: usize,
    pub item: MenuItem,
}

impl RevealStep {
    /// The final step carries the committed selection
    pub fn is_final(&self) -> bool {
        self.step == self.total
    }
}

/// Draw one item uniformly at random. `None` only for an empty slice.
pub fn draw<'a, R: Rng + ?Sized>(eligible: &'a [MenuItem], rng: &mut R) -> Option<&'a MenuItem> {
    if eligible.is_empty() {
        return None;
    }
    eligible.get(rng.gen_range(0..eligible.len()))
}

/// Finite sequence of uniform picks over a fixed pool
#[derive(Debug, Clone)]
pub struct RevealSequence<R> {
    pool: Vec<MenuItem>,
    rng: R,
    emitted: usize,
    total: usize,
}

impl<R: Rng> RevealSequence<R> {
    /// Items the sequence draws from
    pub fn pool(&self) -> &[MenuItem] {
        &self.pool
    }

    /// Steps still to come
    pub fn remaining(&self) -> usize {
        self.total - self.emitted
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

impl<R: Rng> Iterator for RevealSequence<R> {
    type Item = RevealStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted >= self.total {
            return None;
        }
        let item = draw(&self.pool, &mut self.rng)?.clone();
        self.emitted += 1;
        Some(RevealStep {
            step: self.emitted,
            total: self.total,
            item,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for RevealSequence<R> {}

/// Start a reveal over `eligible` that yields exactly `steps` picks (at least
/// one).
///
/// # Errors
///
/// `EmptySelectionPool` when `eligible` is empty.
pub fn run_selection<R: Rng>(
    eligible: &[MenuItem],
    rng: R,
    steps: usize,
) -> Result<RevealSequence<R>, SelectionError> {
    if eligible.is_empty() {
        return Err(SelectionError::EmptySelectionPool {
            criteria: "an empty eligible set".to_string(),
        });
    }
    Ok(RevealSequence {
        pool: eligible.to_vec(),
        rng,
        emitted: 0,
        total: steps.max(1),
    })
}
