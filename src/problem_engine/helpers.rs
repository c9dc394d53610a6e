//! Shared assembly helpers used by every domain strategy.
//!
//! Every strategy builds the same pieces: draw operands, pick an item, build
//! the shuffled option set, pick a narration line. The operand math lives in
//! the strategy files; the option-set and narration plumbing is centralised
//! here so strategies stay focused on their domain.

use rand::Rng;

use crate::problem_engine::error::EngineError;

/// Number of answer choices presented per problem (target plus distractors).
pub const OPTION_ARITY: usize = 3;

/// Starting half-width of the distractor offset band: ±1..=±3.
const BAND_START: u32 = 3;
/// How much the band grows when it cannot supply enough candidates.
const BAND_STEP: u32 = 3;
/// Cap on widening. The integer line above any target is unbounded, so this
/// is never reached with a sane arity; it turns a logic bug into an error
/// instead of a spin.
const BAND_LIMIT: u32 = 1024;

/// Build the full option set for `target`: `OPTION_ARITY` distinct values
/// including the target exactly once, every value at least `floor`, shuffled
/// so the target's position is unpredictable.
///
/// Distractors come from the offset band ±1..=±[`BAND_START`] around the
/// target; the band widens by [`BAND_STEP`] whenever it cannot supply enough
/// distinct candidates (only relevant near `floor`, where the downward half
/// of the band is cut off).
pub fn build_options<R: Rng + ?Sized>(
    rng: &mut R,
    target: u32,
    floor: u32,
) -> Result<Vec<u32>, EngineError> {
    let needed = OPTION_ARITY - 1;

    let mut band = BAND_START;
    let mut pool = loop {
        let pool = band_candidates(target, floor, band);
        if pool.len() >= needed {
            break pool;
        }
        band += BAND_STEP;
        if band > BAND_LIMIT {
            return Err(EngineError::DistractorsExhausted { target, needed });
        }
    };

    let mut options = Vec::with_capacity(OPTION_ARITY);
    options.push(target);
    for _ in 0..needed {
        let idx = rng.gen_range(0..pool.len());
        options.push(pool.swap_remove(idx));
    }

    shuffle(rng, &mut options);
    Ok(options)
}

/// All values within ±`band` of `target` that are valid distractors:
/// at least `floor`, never the target itself.
fn band_candidates(target: u32, floor: u32, band: u32) -> Vec<u32> {
    let mut pool = Vec::new();
    for offset in 1..=band {
        if let Some(below) = target.checked_sub(offset) {
            if below >= floor {
                pool.push(below);
            }
        }
        pool.push(target + offset);
    }
    pool
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<R: Rng + ?Sized, T>(rng: &mut R, values: &mut [T]) {
    for i in (1..values.len()).rev() {
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }
}

/// Pick one narration line from a strategy's fixed set.
pub fn pick_line<R: Rng + ?Sized>(rng: &mut R, lines: &[&str]) -> String {
    lines[rng.gen_range(0..lines.len())].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn options_contain_target_exactly_once_with_no_duplicates() {
        let mut rng = StdRng::seed_from_u64(7);
        for target in 0..=25u32 {
            let options = build_options(&mut rng, target, 0).unwrap();
            assert_eq!(options.len(), OPTION_ARITY);
            assert_eq!(options.iter().filter(|&&o| o == target).count(), 1);
            let mut seen = std::collections::HashSet::new();
            for o in &options {
                assert!(seen.insert(*o), "duplicate option {o} for target {target}");
            }
        }
    }

    #[test]
    fn options_respect_the_floor() {
        let mut rng = StdRng::seed_from_u64(11);
        for target in 1..=5u32 {
            let options = build_options(&mut rng, target, 1).unwrap();
            assert!(options.iter().all(|&o| o >= 1), "floor violated for target {target}");
        }
    }

    #[test]
    fn options_stay_inside_the_starting_band() {
        // The band above the target alone can satisfy OPTION_ARITY - 1, so
        // no widening ever happens and every option lands within ±3.
        let mut rng = StdRng::seed_from_u64(3);
        for target in 0..=25u32 {
            let options = build_options(&mut rng, target, 0).unwrap();
            for &o in &options {
                let distance = (i64::from(o) - i64::from(target)).abs();
                assert!(distance <= i64::from(BAND_START), "option {o} too far from {target}");
            }
        }
    }

    #[test]
    fn zero_target_yields_non_negative_options() {
        let mut rng = StdRng::seed_from_u64(99);
        let options = build_options(&mut rng, 0, 0).unwrap();
        assert!(options.contains(&0));
        assert_eq!(options.len(), OPTION_ARITY);
    }

    #[test]
    fn options_are_deterministic_with_seed() {
        let build = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            build_options(&mut rng, 8, 0).unwrap()
        };
        assert_eq!(build(42), build(42));
    }

    #[test]
    fn shuffle_preserves_contents() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut values: Vec<u32> = (0..20).collect();
        shuffle(&mut rng, &mut values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<u32>>());
    }
}
