//! Core problem engine — level mapping, difficulty curves, and domain
//! strategies.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | All shared types: domains, visual descriptors, the problem record |
//! | `error`      | Typed engine errors (all misconfiguration, never retried) |
//! | `items`      | Concrete item bank (name + emoji) with random picks |
//! | `curve`      | Per-domain difficulty staircases as validated tables |
//! | `helpers`    | Shared option-set assembly and narration picks |
//! | `mapper`     | Global level ↔ (domain, domain-local level) |
//! | `registry`   | Domain → strategy dispatch table |
//! | `strategies` | One generator per domain (counting, addition, subtraction) |
//! | `factory`    | Façade and the single entry point `generate_problem()` |

pub mod curve;
pub mod error;
pub mod factory;
pub mod helpers;
pub mod items;
pub mod mapper;
pub mod models;
pub mod registry;
pub mod strategies;

// Re-export the public API surface so callers can use
// `problem_engine::generate_problem` without reaching into sub-modules.
pub use curve::{CurveBucket, DifficultyCurve};
pub use error::EngineError;
pub use factory::{generate_problem, ProblemFactory};
pub use helpers::OPTION_ARITY;
pub use items::{Item, ITEM_BANK};
pub use mapper::LevelMap;
pub use models::{
    Domain, LevelRange, OperandRangePolicy, Problem, ProblemRequest, VisualDescriptor,
    VisualKind, SCATTER_ROW_LEN,
};
pub use registry::StrategyRegistry;
pub use strategies::{
    AdditionStrategy, CountingStrategy, ProblemStrategy, SubtractionStrategy,
};
