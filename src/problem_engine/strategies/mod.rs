//! Domain strategies — one generator per math family.
//!
//! Every module follows the same shape: hold a [`DifficultyCurve`], look up
//! the operand bounds for the requested level, draw operands, and assemble a
//! [`Problem`] through the shared helpers.
//!
//! ```ignore
//! let strategy = AdditionStrategy::standard();
//! let problem = strategy.generate(local_level, &mut rng)?;
//! ```
//!
//! The factory dispatches to these through the [`StrategyRegistry`].
//!
//! [`DifficultyCurve`]: crate::problem_engine::curve::DifficultyCurve
//! [`StrategyRegistry`]: crate::problem_engine::registry::StrategyRegistry

pub mod addition;
pub mod counting;
pub mod subtraction;

use rand::RngCore;

use crate::problem_engine::{
    error::EngineError,
    models::{Domain, Problem, VisualKind},
};

pub use addition::AdditionStrategy;
pub use counting::CountingStrategy;
pub use subtraction::SubtractionStrategy;

/// Capability shared by every domain strategy.
///
/// Implementations are pure apart from consuming entropy from `rng`: no I/O,
/// no shared state. `Send + Sync` so one registry can serve unsynchronized
/// concurrent readers.
pub trait ProblemStrategy: Send + Sync {
    /// The domain this strategy serves.
    fn domain(&self) -> Domain;

    /// The visual metaphor this strategy emits. A strategy decision — the
    /// descriptor it builds is free to differ.
    fn visual_kind(&self) -> VisualKind;

    /// Produce one fully specified problem for a 1-based domain-local level.
    fn generate(&self, local_level: u32, rng: &mut dyn RngCore) -> Result<Problem, EngineError>;
}
