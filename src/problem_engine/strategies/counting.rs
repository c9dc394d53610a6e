use rand::{Rng, RngCore};

use crate::problem_engine::{
    curve::DifficultyCurve,
    error::EngineError,
    helpers::{build_options, pick_line},
    items::pick_item,
    models::{Domain, Problem, VisualDescriptor, VisualKind},
    strategies::ProblemStrategy,
};

/// Host lines for counting problems, spoken verbatim by the narration layer.
const NARRATION_LINES: [&str; 6] = [
    "How many can you count?",
    "Let's count together!",
    "Can you count these?",
    "Count carefully!",
    "How many do you see?",
    "Take your time and count!",
];

/// "How many X?" — the child counts scattered items.
///
/// The visual is [`VisualKind::Scatter`] with `group_a` holding the count;
/// renderers wrap the items into rows of
/// [`SCATTER_ROW_LEN`](crate::problem_engine::models::SCATTER_ROW_LEN).
/// There is no operator, so `expression` is absent.
pub struct CountingStrategy {
    curve: DifficultyCurve,
}

impl CountingStrategy {
    /// Strategy over the standard ten-level staircase.
    pub fn standard() -> Self {
        CountingStrategy { curve: DifficultyCurve::counting() }
    }

    /// Strategy over a caller-supplied staircase.
    pub fn with_curve(curve: DifficultyCurve) -> Self {
        CountingStrategy { curve }
    }
}

impl ProblemStrategy for CountingStrategy {
    fn domain(&self) -> Domain {
        Domain::Counting
    }

    fn visual_kind(&self) -> VisualKind {
        VisualKind::Scatter
    }

    fn generate(&self, local_level: u32, rng: &mut dyn RngCore) -> Result<Problem, EngineError> {
        let policy = self.curve.policy_for(local_level)?;

        let count = rng.gen_range(policy.a());
        let item = pick_item(rng);

        // Counting answers start at 1; a scene with zero items is nothing
        // for the child to count.
        let options = build_options(rng, count, 1)?;

        Ok(Problem {
            domain: Domain::Counting,
            level: local_level,
            target: count,
            options,
            prompt: format!("How many {}?", item.name),
            narration_text: pick_line(rng, &NARRATION_LINES),
            item_symbol: item.emoji.to_string(),
            item_name: item.name.to_string(),
            visual: VisualDescriptor {
                kind: VisualKind::Scatter,
                group_a: count,
                group_b: 0,
                item_symbol: item.emoji.to_string(),
                animation_hint: None,
            },
            expression: None,
        })
    }
}
