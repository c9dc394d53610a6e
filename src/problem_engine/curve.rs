//! Per-domain difficulty staircases.
//!
//! A curve partitions a domain's 1-based level span into contiguous buckets,
//! each carrying an [`OperandRangePolicy`]. Bounds are configuration data,
//! not code: tuning difficulty means editing a table here, never touching
//! control flow. The constructor enforces the staircase shape — contiguous
//! coverage from level 1, `max >= min` everywhere, and both `min` and `max`
//! non-decreasing as levels climb.

use serde::{Deserialize, Serialize};

use crate::problem_engine::{
    error::EngineError,
    models::{Domain, OperandRangePolicy},
};

/// One contiguous run of levels sharing an operand-range policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveBucket {
    pub first_level: u32,
    pub last_level: u32,
    pub policy: OperandRangePolicy,
}

/// A validated, monotonic difficulty staircase for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyCurve {
    domain: Domain,
    buckets: Vec<CurveBucket>,
}

impl DifficultyCurve {
    /// Build a curve from a bucket table, validating the staircase shape.
    pub fn new(domain: Domain, buckets: Vec<CurveBucket>) -> Result<Self, EngineError> {
        if buckets.is_empty() {
            return Err(EngineError::InvalidConfig(format!(
                "difficulty table for {domain} is empty"
            )));
        }

        let mut expected_first = 1u32;
        let mut prev: Option<&CurveBucket> = None;
        for bucket in &buckets {
            if bucket.first_level != expected_first {
                return Err(EngineError::InvalidConfig(format!(
                    "difficulty table for {domain}: bucket starts at level \
                     {} where {} was expected",
                    bucket.first_level, expected_first
                )));
            }
            if bucket.last_level < bucket.first_level {
                return Err(EngineError::InvalidConfig(format!(
                    "difficulty table for {domain}: bucket [{}, {}] is reversed",
                    bucket.first_level, bucket.last_level
                )));
            }
            let p = bucket.policy;
            if p.max_a < p.min_a || p.max_b < p.min_b {
                return Err(EngineError::InvalidConfig(format!(
                    "difficulty table for {domain}: max below min at level {}",
                    bucket.first_level
                )));
            }
            if let Some(prev) = prev {
                let q = prev.policy;
                let non_decreasing = p.min_a >= q.min_a
                    && p.max_a >= q.max_a
                    && p.min_b >= q.min_b
                    && p.max_b >= q.max_b;
                if !non_decreasing {
                    return Err(EngineError::InvalidConfig(format!(
                        "difficulty table for {domain}: bounds shrink at level {}",
                        bucket.first_level
                    )));
                }
            }
            expected_first = bucket.last_level + 1;
            prev = Some(bucket);
        }

        Ok(DifficultyCurve { domain, buckets })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Highest level this curve covers.
    pub fn last_level(&self) -> u32 {
        self.buckets[self.buckets.len() - 1].last_level
    }

    pub fn buckets(&self) -> &[CurveBucket] {
        &self.buckets
    }

    /// Operand bounds for a 1-based domain-local level.
    ///
    /// Out-of-span input is a caller bug — the level mapper validates global
    /// levels before they reach a strategy — so it fails rather than clamps.
    pub fn policy_for(&self, local_level: u32) -> Result<OperandRangePolicy, EngineError> {
        self.buckets
            .iter()
            .find(|b| (b.first_level..=b.last_level).contains(&local_level))
            .map(|b| b.policy)
            .ok_or(EngineError::InvalidLevel {
                domain: self.domain,
                level: local_level,
            })
    }

    /// Standard ten-level staircase for Counting: counts grow 5 → 10 → 20.
    /// The second operand is unused for counting and pinned at zero.
    pub fn counting() -> Self {
        DifficultyCurve {
            domain: Domain::Counting,
            buckets: vec![
                CurveBucket { first_level: 1, last_level: 3,  policy: OperandRangePolicy { min_a: 1, max_a: 5,  min_b: 0, max_b: 0 } },
                CurveBucket { first_level: 4, last_level: 6,  policy: OperandRangePolicy { min_a: 1, max_a: 10, min_b: 0, max_b: 0 } },
                CurveBucket { first_level: 7, last_level: 10, policy: OperandRangePolicy { min_a: 1, max_a: 20, min_b: 0, max_b: 0 } },
            ],
        }
    }

    /// Standard ten-level staircase for Addition: addends grow 3 → 6 → 10.
    pub fn addition() -> Self {
        DifficultyCurve {
            domain: Domain::Addition,
            buckets: vec![
                CurveBucket { first_level: 1, last_level: 3,  policy: OperandRangePolicy { min_a: 1, max_a: 3,  min_b: 1, max_b: 3 } },
                CurveBucket { first_level: 4, last_level: 6,  policy: OperandRangePolicy { min_a: 1, max_a: 6,  min_b: 1, max_b: 6 } },
                CurveBucket { first_level: 7, last_level: 10, policy: OperandRangePolicy { min_a: 1, max_a: 10, min_b: 1, max_b: 10 } },
            ],
        }
    }

    /// Standard ten-level staircase for Subtraction: starting amounts grow
    /// 5 → 10 → 20, removals one below them.
    pub fn subtraction() -> Self {
        DifficultyCurve {
            domain: Domain::Subtraction,
            buckets: vec![
                CurveBucket { first_level: 1, last_level: 3,  policy: OperandRangePolicy { min_a: 3, max_a: 5,  min_b: 1, max_b: 4 } },
                CurveBucket { first_level: 4, last_level: 6,  policy: OperandRangePolicy { min_a: 3, max_a: 10, min_b: 1, max_b: 9 } },
                CurveBucket { first_level: 7, last_level: 10, policy: OperandRangePolicy { min_a: 3, max_a: 20, min_b: 1, max_b: 19 } },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(first: u32, last: u32, a: (u32, u32), b: (u32, u32)) -> CurveBucket {
        CurveBucket {
            first_level: first,
            last_level: last,
            policy: OperandRangePolicy { min_a: a.0, max_a: a.1, min_b: b.0, max_b: b.1 },
        }
    }

    #[test]
    fn standard_tables_pass_validation() {
        for curve in [
            DifficultyCurve::counting(),
            DifficultyCurve::addition(),
            DifficultyCurve::subtraction(),
        ] {
            let rebuilt = DifficultyCurve::new(curve.domain(), curve.buckets().to_vec());
            assert!(rebuilt.is_ok(), "standard table for {} rejected", curve.domain());
            assert_eq!(curve.last_level(), 10);
        }
    }

    #[test]
    fn bounds_are_non_decreasing_across_buckets() {
        for curve in [
            DifficultyCurve::counting(),
            DifficultyCurve::addition(),
            DifficultyCurve::subtraction(),
        ] {
            for pair in curve.buckets().windows(2) {
                let (lo, hi) = (pair[0].policy, pair[1].policy);
                assert!(hi.min_a >= lo.min_a && hi.max_a >= lo.max_a, "{}", curve.domain());
                assert!(hi.min_b >= lo.min_b && hi.max_b >= lo.max_b, "{}", curve.domain());
            }
        }
    }

    #[test]
    fn policy_for_respects_bucket_boundaries() {
        let curve = DifficultyCurve::addition();
        assert_eq!(curve.policy_for(3).unwrap().max_a, 3);
        assert_eq!(curve.policy_for(4).unwrap().max_a, 6);
        assert_eq!(curve.policy_for(7).unwrap().max_a, 10);
        assert_eq!(curve.policy_for(10).unwrap().max_a, 10);
    }

    #[test]
    fn policy_for_rejects_out_of_span_levels() {
        let curve = DifficultyCurve::counting();
        for level in [0, 11, 99] {
            assert_eq!(
                curve.policy_for(level),
                Err(EngineError::InvalidLevel { domain: Domain::Counting, level })
            );
        }
    }

    #[test]
    fn new_rejects_gapped_table() {
        let err = DifficultyCurve::new(
            Domain::Addition,
            vec![bucket(1, 3, (1, 3), (1, 3)), bucket(5, 10, (1, 6), (1, 6))],
        );
        assert!(matches!(err, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn new_rejects_table_not_starting_at_level_one() {
        let err = DifficultyCurve::new(Domain::Counting, vec![bucket(2, 10, (1, 5), (0, 0))]);
        assert!(matches!(err, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn new_rejects_shrinking_bounds() {
        let err = DifficultyCurve::new(
            Domain::Addition,
            vec![bucket(1, 5, (1, 6), (1, 6)), bucket(6, 10, (1, 3), (1, 3))],
        );
        assert!(matches!(err, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn new_rejects_max_below_min() {
        let err = DifficultyCurve::new(Domain::Counting, vec![bucket(1, 10, (5, 1), (0, 0))]);
        assert!(matches!(err, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn new_rejects_empty_table() {
        let err = DifficultyCurve::new(Domain::Counting, vec![]);
        assert!(matches!(err, Err(EngineError::InvalidConfig(_))));
    }
}
