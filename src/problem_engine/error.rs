//! Typed engine errors.
//!
//! Every variant signals misconfiguration (a caller, wiring, or table bug),
//! never a transient condition. Nothing is retried and no fallback problem
//! is substituted; the error goes straight back to the caller.

use thiserror::Error;

use crate::problem_engine::models::Domain;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A domain-local level fell outside the strategy's configured span.
    #[error("level {level} is outside the configured span for {domain}")]
    InvalidLevel { domain: Domain, level: u32 },

    /// A global level is not covered by any configured level range.
    #[error("global level {0} is not covered by any configured level range")]
    LevelOutOfRange(u32),

    /// No strategy was ever registered for the requested domain.
    #[error("no strategy registered for domain {0}")]
    UnknownDomain(Domain),

    /// The distractor band widened past its cap without yielding enough
    /// distinct candidates. Unreachable with the shipped tables.
    #[error("could not assemble {needed} distinct options around target {target}")]
    DistractorsExhausted { target: u32, needed: usize },

    /// A difficulty or level-range table failed startup validation.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}
