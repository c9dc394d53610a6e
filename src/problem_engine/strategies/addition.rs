use rand::{Rng, RngCore};

use crate::problem_engine::{
    curve::DifficultyCurve,
    error::EngineError,
    helpers::{build_options, pick_line},
    items::pick_item,
    models::{Domain, Problem, VisualDescriptor, VisualKind},
    strategies::ProblemStrategy,
};

/// Host lines for addition problems.
const NARRATION_LINES: [&str; 6] = [
    "Let's add them together!",
    "Put them all together!",
    "How many in total?",
    "Add the groups!",
    "What's the sum?",
    "Count them all!",
];

/// "X + Y = ?" — the child watches two groups merge.
///
/// The visual is [`VisualKind::Merge`] with the two addends in `group_a` and
/// `group_b` and a `slide_merge` animation cue.
pub struct AdditionStrategy {
    curve: DifficultyCurve,
}

impl AdditionStrategy {
    /// Strategy over the standard ten-level staircase.
    pub fn standard() -> Self {
        AdditionStrategy { curve: DifficultyCurve::addition() }
    }

    /// Strategy over a caller-supplied staircase.
    pub fn with_curve(curve: DifficultyCurve) -> Self {
        AdditionStrategy { curve }
    }
}

impl ProblemStrategy for AdditionStrategy {
    fn domain(&self) -> Domain {
        Domain::Addition
    }

    fn visual_kind(&self) -> VisualKind {
        VisualKind::Merge
    }

    fn generate(&self, local_level: u32, rng: &mut dyn RngCore) -> Result<Problem, EngineError> {
        let policy = self.curve.policy_for(local_level)?;

        let a = rng.gen_range(policy.a());
        let b = rng.gen_range(policy.b());
        let target = a + b;

        let item = pick_item(rng);
        let options = build_options(rng, target, 0)?;

        Ok(Problem {
            domain: Domain::Addition,
            level: local_level,
            target,
            options,
            prompt: format!("{a} + {b} = ?"),
            narration_text: pick_line(rng, &NARRATION_LINES),
            item_symbol: item.emoji.to_string(),
            item_name: item.name.to_string(),
            visual: VisualDescriptor {
                kind: VisualKind::Merge,
                group_a: a,
                group_b: b,
                item_symbol: item.emoji.to_string(),
                animation_hint: Some("slide_merge".to_string()),
            },
            expression: Some(format!("{a} + {b}")),
        })
    }
}
