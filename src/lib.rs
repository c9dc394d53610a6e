//! # math_drill_gen
//!
//! A fully offline, deterministic arithmetic practice-problem generator for
//! early-childhood learners.
//!
//! This library generates counting, addition, and subtraction problems along
//! a single global level progression. Each problem includes the correct
//! answer, shuffled multiple-choice options, a question prompt, a narration
//! line for a voice host, and a visual descriptor telling the renderer *what*
//! to draw (scattered items, merging groups, items taken away) without
//! saying *how*.
//!
//! ## How it works
//!
//! 1. Create a [`ProblemRequest`] with a level, an optional domain override,
//!    and an optional RNG seed.
//! 2. Call [`generate_problem`] — the engine resolves which domain owns the
//!    level, looks up that level's operand bounds on the domain's difficulty
//!    staircase, draws operands, builds distractor options around the
//!    answer, and picks a concrete item (ducks, stars, apples, …) to count.
//! 3. The returned [`Problem`] is a plain data record — ready for any
//!    presentation, progression, or narration layer.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same problem every time — useful for tests and progress tracking.
//! - **One flat level number**: levels 1–10 are counting, 11–20 addition,
//!   21–30 subtraction in the standard map; the engine resolves the owning
//!   domain and the domain-local difficulty for you.
//! - **Injectable everything**: the registry, level map, and difficulty
//!   curves are plain values. Swap in your own tables or strategies through
//!   [`ProblemFactory::new`] without touching the shipped ones.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{generate_problem, Domain, ProblemRequest};
//!
//! // Minimal — only the level is required (no override, entropy seed):
//! let problem = generate_problem(ProblemRequest::new(3)).unwrap();
//! println!("Q: {}", problem.prompt);
//!
//! // Full control — pin the domain and the seed:
//! let problem = generate_problem(ProblemRequest {
//!     level: 4,
//!     domain: Some(Domain::Addition),
//!     rng_seed: Some(42),
//! })
//! .unwrap();
//!
//! println!("{} ({})", problem.prompt, problem.narration_text);
//! for value in &problem.options {
//!     let mark = if *value == problem.target { "+" } else { " " };
//!     println!("[{mark}] {value}");
//! }
//! ```

pub mod problem_engine;

// Convenience re-exports so callers can use `math_drill_gen::generate_problem`
// directly without reaching into `problem_engine::`.
pub use problem_engine::{
    generate_problem, AdditionStrategy, CountingStrategy, CurveBucket, DifficultyCurve,
    Domain, EngineError, Item, LevelMap, LevelRange, OperandRangePolicy, Problem,
    ProblemFactory, ProblemRequest, ProblemStrategy, StrategyRegistry, SubtractionStrategy,
    VisualDescriptor, VisualKind, ITEM_BANK, OPTION_ARITY, SCATTER_ROW_LEN,
};
