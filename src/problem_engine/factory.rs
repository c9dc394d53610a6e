//! The façade external collaborators call.
//!
//! A factory is a registry plus a level map: resolve the owning domain,
//! dispatch to its strategy, hand the problem back unchanged. It holds no
//! mutable state, so one instance can serve concurrent callers; the RNG is
//! the caller's to manage.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::problem_engine::{
    error::EngineError,
    mapper::LevelMap,
    models::{Domain, Problem, ProblemRequest},
    registry::StrategyRegistry,
};

pub struct ProblemFactory {
    registry: StrategyRegistry,
    level_map: LevelMap,
}

impl ProblemFactory {
    pub fn new(registry: StrategyRegistry, level_map: LevelMap) -> Self {
        ProblemFactory { registry, level_map }
    }

    /// Factory wired with the shipped strategies and the standard level map.
    pub fn standard() -> Self {
        Self::new(StrategyRegistry::standard(), LevelMap::standard())
    }

    pub fn level_map(&self) -> &LevelMap {
        &self.level_map
    }

    /// Generate a problem for a global level.
    pub fn generate(
        &self,
        global_level: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Problem, EngineError> {
        let (domain, local_level) = self.level_map.domain_and_index_for(global_level)?;
        debug!(%domain, global_level, local_level, "resolved global level");
        self.registry.get(domain)?.generate(local_level, rng)
    }

    /// Generate a problem in an explicitly chosen domain.
    ///
    /// `level` is taken as local to `domain` — the compatibility path for
    /// callers that track one domain's progression independently of the
    /// global numbering. The strategy still validates it against its span.
    pub fn generate_in(
        &self,
        domain: Domain,
        level: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Problem, EngineError> {
        debug!(%domain, level, "domain override, level taken as domain-local");
        self.registry.get(domain)?.generate(level, rng)
    }
}

/// One-call entry point: builds the standard factory and an RNG from the
/// request's seed (`Some` → reproducible, `None` → OS entropy).
pub fn generate_problem(request: ProblemRequest) -> Result<Problem, EngineError> {
    let factory = ProblemFactory::standard();
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    match request.domain {
        Some(domain) => factory.generate_in(domain, request.level, &mut rng),
        None         => factory.generate(request.level, &mut rng),
    }
}
