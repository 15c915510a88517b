//! Option selection engine
//!
//! The engine layer owns the catalog, narrows it by the current criteria and
//! produces the randomized reveal sequence that ends in a committed pick.
//!
//! # Modules
//!
//! - `eligible` - criteria → eligible set
//! - `reveal` - the finite, uniformly random reveal sequence
//! - `selection` - `SelectionEngine`, the stateful Idle/Running machine

pub mod eligible;
pub mod reveal;
pub mod selection;

pub use eligible::compute_eligible_set;
pub use reveal::{
    draw, run_selection, RevealConfig, RevealSequence, RevealStep, DEFAULT_REVEAL_INTERVAL,
    DEFAULT_REVEAL_STEPS,
};
pub use selection::{SelectionEngine, SelectionState};
