//! Domain → strategy dispatch table.
//!
//! Built explicitly and passed to the factory rather than living in a
//! module-wide global, so tests can substitute fake strategies without
//! cross-test leakage. After
//! startup the table is only read, and every strategy is `Send + Sync`, so
//! unsynchronized concurrent lookups are safe.

use std::collections::HashMap;

use tracing::debug;

use crate::problem_engine::{
    error::EngineError,
    models::Domain,
    strategies::{AdditionStrategy, CountingStrategy, ProblemStrategy, SubtractionStrategy},
};

pub struct StrategyRegistry {
    strategies: HashMap<Domain, Box<dyn ProblemStrategy>>,
}

impl StrategyRegistry {
    /// Empty registry; callers register every strategy themselves.
    pub fn new() -> Self {
        StrategyRegistry { strategies: HashMap::new() }
    }

    /// Registry with the three shipped strategies on their standard curves.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Domain::Counting, Box::new(CountingStrategy::standard()));
        registry.register(Domain::Addition, Box::new(AdditionStrategy::standard()));
        registry.register(Domain::Subtraction, Box::new(SubtractionStrategy::standard()));
        registry
    }

    /// Register `strategy` for `domain`. Last write wins, which is what test
    /// doubles and future extensions rely on.
    pub fn register(&mut self, domain: Domain, strategy: Box<dyn ProblemStrategy>) {
        debug!(%domain, "registering strategy");
        self.strategies.insert(domain, strategy);
    }

    /// Look up the strategy serving `domain`.
    pub fn get(&self, domain: Domain) -> Result<&dyn ProblemStrategy, EngineError> {
        self.strategies
            .get(&domain)
            .map(|s| s.as_ref())
            .ok_or(EngineError::UnknownDomain(domain))
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
