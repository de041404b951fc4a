//! Stepwise algorithm engines.
//!
//! Both engines follow the same driving pattern: the host constructs one
//! from the current canvas entities, calls [`StepAlgorithm::initialize`]
//! once, then calls [`StepAlgorithm::step`] per animation tick until
//! [`StepAlgorithm::is_finished`] reports true, rendering entity state and
//! showing the [`StepAlgorithm::report`] text after each tick.
//!
//! The engines own their entities for the lifetime of a run, so the canvas
//! membership cannot change mid-run; editing resumes when the engine is
//! dropped and a fresh one is built from the host's shape list.

mod kmeans;
mod nearest_neighbour;

#[cfg(test)]
mod engine_tests;

pub use kmeans::ClusteringEngine;
pub use nearest_neighbour::PathBuildingEngine;

/// Default animation delay stored for the host, in milliseconds.
pub(crate) const DEFAULT_SPEED: u32 = 150;

/// Which algorithm the host selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// K-Means clustering.
    Clustering,
    /// Nearest-neighbour path building.
    PathBuilding,
}

/// Lifecycle of a single run.
///
/// There are no reverse transitions; a new run requires a new engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Constructed, `initialize` not yet called.
    Uninitialized,
    /// Initialized, no step taken yet.
    Ready,
    /// At least one step taken, not yet finished.
    Stepping,
    /// `is_finished` is true.
    Done,
}

/// One discrete algorithm step at a time over host-supplied entities.
///
/// Expected conditions — inert input, exhausted pool, already converged —
/// are expressed through [`Self::is_finished`] and no-op steps, never as
/// errors.
pub trait StepAlgorithm {
    /// Which algorithm this engine runs.
    fn kind(&self) -> Algorithm;

    /// One-time run setup. A second call is a no-op.
    fn initialize(&mut self);

    /// Advance the run by exactly one iteration.
    ///
    /// Does nothing on an inert engine or an exhausted pool; stepping an
    /// already converged clustering run recomputes the same fixed point.
    fn step(&mut self);

    /// Whether further steps can change anything.
    fn is_finished(&self) -> bool;

    /// Human-readable progress summary for the host's report pane.
    ///
    /// Engines may impose preconditions on when this is first callable;
    /// see each implementation.
    fn report(&self) -> String;

    /// Current lifecycle state.
    fn state(&self) -> RunState;

    /// Animation delay hint in milliseconds. Stored verbatim; it has no
    /// effect on algorithm behavior.
    fn speed(&self) -> u32;

    /// Replace the animation delay hint.
    fn set_speed(&mut self, speed: u32);
}

/// Drive an engine until it finishes or `max_steps` is reached.
///
/// The headless equivalent of the host's timer loop: initialize once, then
/// step while unfinished. Returns the number of steps taken.
pub fn run_to_completion(engine: &mut dyn StepAlgorithm, max_steps: usize) -> usize {
    engine.initialize();
    let mut steps = 0;
    while !engine.is_finished() && steps < max_steps {
        engine.step();
        steps += 1;
    }
    steps
}
