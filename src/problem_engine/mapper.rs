//! Global level → owning domain, and back.
//!
//! A player walks a single increasing level number across all domains; this
//! table decides which domain owns each stretch of it. Ranges are validated
//! once at construction — contiguous, ordered, one per domain — so a lookup
//! can only fail by falling off either end of the table.

use crate::problem_engine::{
    error::EngineError,
    models::{Domain, LevelRange},
};

/// Ordered, contiguous table of [`LevelRange`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelMap {
    ranges: Vec<LevelRange>,
}

impl LevelMap {
    /// Build a map from a range table, rejecting gaps, overlaps, reversed
    /// ranges, and domains that appear twice.
    pub fn new(ranges: Vec<LevelRange>) -> Result<Self, EngineError> {
        if ranges.is_empty() {
            return Err(EngineError::InvalidConfig(
                "level range table is empty".to_string(),
            ));
        }

        let mut prev: Option<&LevelRange> = None;
        for range in &ranges {
            if range.last_level < range.first_level {
                return Err(EngineError::InvalidConfig(format!(
                    "level range [{}, {}] for {} is reversed",
                    range.first_level, range.last_level, range.domain
                )));
            }
            if let Some(prev) = prev {
                if range.first_level != prev.last_level + 1 {
                    return Err(EngineError::InvalidConfig(format!(
                        "level ranges are not contiguous: {} ends at {} but {} \
                         starts at {}",
                        prev.domain, prev.last_level, range.domain, range.first_level
                    )));
                }
            }
            prev = Some(range);
        }

        for (i, range) in ranges.iter().enumerate() {
            if ranges[..i].iter().any(|r| r.domain == range.domain) {
                return Err(EngineError::InvalidConfig(format!(
                    "domain {} appears in more than one level range",
                    range.domain
                )));
            }
        }

        Ok(LevelMap { ranges })
    }

    /// The standard progression: ten levels per domain, counting first.
    pub fn standard() -> Self {
        LevelMap {
            ranges: vec![
                LevelRange { domain: Domain::Counting,    first_level: 1,  last_level: 10 },
                LevelRange { domain: Domain::Addition,    first_level: 11, last_level: 20 },
                LevelRange { domain: Domain::Subtraction, first_level: 21, last_level: 30 },
            ],
        }
    }

    pub fn ranges(&self) -> &[LevelRange] {
        &self.ranges
    }

    /// Resolve a global level to its owning domain and 1-based local index.
    pub fn domain_and_index_for(&self, global_level: u32) -> Result<(Domain, u32), EngineError> {
        self.ranges
            .iter()
            .find(|r| r.contains(global_level))
            .map(|r| (r.domain, global_level - r.first_level + 1))
            .ok_or(EngineError::LevelOutOfRange(global_level))
    }

    /// Inverse of [`domain_and_index_for`](Self::domain_and_index_for).
    ///
    /// Fails with [`EngineError::InvalidLevel`] when `local_index` is zero or
    /// exceeds the domain's span width.
    pub fn global_level_for(&self, domain: Domain, local_index: u32) -> Result<u32, EngineError> {
        let range = self
            .ranges
            .iter()
            .find(|r| r.domain == domain)
            .ok_or_else(|| {
                EngineError::InvalidConfig(format!("no level range registered for {domain}"))
            })?;
        if local_index == 0 || local_index > range.span() {
            return Err(EngineError::InvalidLevel { domain, level: local_index });
        }
        Ok(range.first_level + local_index - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(domain: Domain, first: u32, last: u32) -> LevelRange {
        LevelRange { domain, first_level: first, last_level: last }
    }

    #[test]
    fn resolves_domains_at_range_boundaries() {
        let map = LevelMap::standard();
        assert_eq!(map.domain_and_index_for(1).unwrap(), (Domain::Counting, 1));
        assert_eq!(map.domain_and_index_for(10).unwrap(), (Domain::Counting, 10));
        assert_eq!(map.domain_and_index_for(11).unwrap(), (Domain::Addition, 1));
        assert_eq!(map.domain_and_index_for(25).unwrap(), (Domain::Subtraction, 5));
        assert_eq!(map.domain_and_index_for(30).unwrap(), (Domain::Subtraction, 10));
    }

    #[test]
    fn round_trips_every_covered_level() {
        let map = LevelMap::standard();
        for global in 1..=30u32 {
            let (domain, local) = map.domain_and_index_for(global).unwrap();
            assert_eq!(map.global_level_for(domain, local).unwrap(), global);
        }
    }

    #[test]
    fn rejects_levels_outside_the_table() {
        let map = LevelMap::standard();
        for global in [0u32, 31, 1000] {
            assert_eq!(
                map.domain_and_index_for(global),
                Err(EngineError::LevelOutOfRange(global))
            );
        }
    }

    #[test]
    fn inverse_rejects_indices_past_the_span() {
        let map = LevelMap::standard();
        for local in [0u32, 11] {
            assert_eq!(
                map.global_level_for(Domain::Addition, local),
                Err(EngineError::InvalidLevel { domain: Domain::Addition, level: local })
            );
        }
    }

    #[test]
    fn new_rejects_gapped_tables() {
        let err = LevelMap::new(vec![
            range(Domain::Counting, 1, 10),
            range(Domain::Addition, 12, 20),
        ]);
        assert!(matches!(err, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn new_rejects_overlapping_tables() {
        let err = LevelMap::new(vec![
            range(Domain::Counting, 1, 10),
            range(Domain::Addition, 10, 20),
        ]);
        assert!(matches!(err, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn new_rejects_duplicate_domains() {
        let err = LevelMap::new(vec![
            range(Domain::Counting, 1, 10),
            range(Domain::Counting, 11, 20),
        ]);
        assert!(matches!(err, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn new_rejects_reversed_and_empty_tables() {
        assert!(matches!(
            LevelMap::new(vec![range(Domain::Counting, 10, 1)]),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(LevelMap::new(vec![]), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn standard_table_passes_validation() {
        let map = LevelMap::standard();
        assert!(LevelMap::new(map.ranges().to_vec()).is_ok());
    }
}
