//! Selection state machine
//!
//! `SelectionEngine` is the single owner of catalog, criteria and selection
//! state. A run moves the engine from Idle to Running; each `advance()` shows
//! one more pick, and the last one is committed before returning to Idle.
//!
//! ```text
//! Idle --[start, eligible non-empty]--> Running --[step 1..n-1]--> Running --[step n: commit]--> Idle
//! Idle --[start, eligible empty]------> Idle (EmptySelectionPool)
//! Running --[start]-------------------> Running (SelectionInProgress)
//! Running --[cancel]------------------> Idle (display kept, nothing committed)
//! ```

use super::eligible::compute_eligible_set;
use super::reveal::{run_selection, RevealConfig, RevealSequence, RevealStep};
use crate::catalog::{Catalog, MenuItem};
use crate::criteria::{CriteriaField, CriteriaUpdate, SelectionCriteria};
use crate::error::SelectionError;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::borrow::Cow;
use std::time::Duration;
use tracing::{debug, info, warn};

/// What the presentation layer renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Name shown in the result panel (spinning or committed)
    pub current_display: Option<String>,
    /// True while a reveal sequence is running
    pub is_selecting: bool,
    /// Most recently committed pick
    pub last_pick: Option<MenuItem>,
}

/// The option selection engine
#[derive(Debug)]
pub struct SelectionEngine {
    catalog: Cow<'static, Catalog>,
    criteria: SelectionCriteria,
    state: SelectionState,
    reveal: RevealConfig,
    reset_food_type_on_diet_change: bool,
    rng: StdRng,
    running: Option<RevealSequence<StdRng>>,
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SelectionEngine {
    /// Engine over the built-in catalog
    pub fn builtin() -> Self {
        Self::from_cow(Cow::Borrowed(Catalog::builtin()))
    }

    /// Engine over a caller-supplied catalog
    pub fn new(catalog: Catalog) -> Self {
        Self::from_cow(Cow::Owned(catalog))
    }

    fn from_cow(catalog: Cow<'static, Catalog>) -> Self {
        Self {
            catalog,
            criteria: SelectionCriteria::default(),
            state: SelectionState::default(),
            reveal: RevealConfig::default(),
            reset_food_type_on_diet_change: true,
            rng: StdRng::from_entropy(),
            running: None,
        }
    }

    /// Use a fixed seed so runs are reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_reveal(mut self, reveal: RevealConfig) -> Self {
        self.reveal = reveal;
        self
    }

    /// Toggle the "new diet clears food type" wizard convention
    pub fn with_food_type_reset(mut self, enabled: bool) -> Self {
        self.reset_food_type_on_diet_change = enabled;
        self
    }

    // ---------------------------------------------------------------------
    // Read-only accessors
    // ---------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Distinct cuisines of the catalog in stable order
    pub fn cuisines(&self) -> Vec<&str> {
        self.catalog.cuisines()
    }

    pub fn criteria(&self) -> &SelectionCriteria {
        &self.criteria
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[inline]
    pub fn is_selecting(&self) -> bool {
        self.state.is_selecting
    }

    pub fn reveal_config(&self) -> RevealConfig {
        self.reveal
    }

    /// Delay the host should wait between `advance()` calls
    pub fn interval(&self) -> Duration {
        self.reveal.interval
    }

    /// Steps left in the running sequence (0 when idle)
    pub fn remaining_steps(&self) -> usize {
        self.running.as_ref().map_or(0, RevealSequence::remaining)
    }

    // ---------------------------------------------------------------------
    // Criteria
    // ---------------------------------------------------------------------

    /// Apply a partial criteria update.
    ///
    /// # Errors
    ///
    /// `InvalidCriteriaValue` if the cuisine is not in the catalog. The
    /// criteria are left unchanged in that case.
    pub fn set_criteria(&mut self, update: CriteriaUpdate) -> Result<(), SelectionError> {
        if let Some(cuisine) = &update.cuisine {
            if !self.catalog.has_cuisine(cuisine) {
                warn!(cuisine = %cuisine, "Rejected unknown cuisine");
                return Err(SelectionError::invalid(CriteriaField::Cuisine, cuisine.clone()));
            }
        }
        update.apply_to(&mut self.criteria, self.reset_food_type_on_diet_change);
        debug!(criteria = %self.criteria, "Criteria updated");
        Ok(())
    }

    pub fn clear_criteria(&mut self, field: CriteriaField) {
        self.criteria.clear(field);
        debug!(%field, criteria = %self.criteria, "Criteria field cleared");
    }

    pub fn reset_criteria(&mut self) {
        self.criteria.reset();
        debug!("Criteria reset");
    }

    /// Eligible set for the current criteria
    pub fn eligible(&self) -> Result<Vec<MenuItem>, SelectionError> {
        compute_eligible_set(&self.catalog, &self.criteria)
    }

    // ---------------------------------------------------------------------
    // Selection run
    // ---------------------------------------------------------------------

    /// Begin a reveal sequence for the current criteria.
    ///
    /// Returns the size of the eligible set.
    ///
    /// # Errors
    ///
    /// - `SelectionInProgress` if a run is already active (left untouched)
    /// - `EmptySelectionPool` if the criteria match nothing (no state change)
    pub fn start_selection(&mut self) -> Result<usize, SelectionError> {
        if self.is_selecting() {
            warn!("Selection requested while a reveal is running");
            return Err(SelectionError::SelectionInProgress);
        }

        let eligible = self.eligible()?;
        let seq_rng = StdRng::seed_from_u64(self.rng.next_u64());
        let sequence = run_selection(&eligible, seq_rng, self.reveal.steps)?;

        info!(
            criteria = %self.criteria,
            pool = eligible.len(),
            steps = sequence.total(),
            "Starting selection"
        );
        self.running = Some(sequence);
        self.state.is_selecting = true;
        Ok(eligible.len())
    }

    /// Emit the next pick of the running sequence.
    ///
    /// The final step commits the pick and returns the engine to Idle.
    /// Returns `None` when idle.
    pub fn advance(&mut self) -> Option<RevealStep> {
        let sequence = self.running.as_mut()?;
        let Some(step) = sequence.next() else {
            self.finish(None);
            return None;
        };

        self.state.current_display = Some(step.item.name.clone());
        debug!(step = step.step, total = step.total, item = %step.item.name, "Reveal step");

        if step.is_final() {
            self.finish(Some(step.item.clone()));
        }
        Some(step)
    }

    /// Stop a running sequence without committing.
    ///
    /// `current_display` keeps whatever was last shown. Returns false when
    /// nothing was running.
    pub fn cancel(&mut self) -> bool {
        if !self.is_selecting() {
            return false;
        }
        info!(
            remaining = self.remaining_steps(),
            "Selection cancelled"
        );
        self.finish(None);
        true
    }

    /// Drive a run synchronously and return the committed pick.
    ///
    /// Starts a new run when idle; otherwise finishes the one in flight.
    pub fn run_to_completion(&mut self) -> Result<MenuItem, SelectionError> {
        if !self.is_selecting() {
            self.start_selection()?;
        }
        while let Some(step) = self.advance() {
            if step.is_final() {
                return Ok(step.item);
            }
        }
        // Only reachable if the sequence ended without a final step
        Err(SelectionError::EmptySelectionPool {
            criteria: self.criteria.to_string(),
        })
    }

    fn finish(&mut self, pick: Option<MenuItem>) {
        self.running = None;
        self.state.is_selecting = false;
        if let Some(item) = pick {
            info!(item = %item.name, cuisine = %item.cuisine, "Selection committed");
            self.state.last_pick = Some(item);
        }
    }
}
