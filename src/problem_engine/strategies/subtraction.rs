use rand::{Rng, RngCore};

use crate::problem_engine::{
    curve::DifficultyCurve,
    error::EngineError,
    helpers::{build_options, pick_line},
    items::pick_item,
    models::{Domain, Problem, VisualDescriptor, VisualKind},
    strategies::ProblemStrategy,
};

/// Host lines for subtraction problems.
const NARRATION_LINES: [&str; 6] = [
    "How many are left?",
    "Take some away!",
    "What's left over?",
    "Subtract them!",
    "How many remain?",
    "Count what's left!",
];

/// "X - Y = ?" — the child watches items being taken away.
///
/// The visual is [`VisualKind::TakeAway`] with the starting amount in
/// `group_a`, the removed amount in `group_b`, and a `fade_out` animation
/// cue. `group_b <= group_a` always holds.
pub struct SubtractionStrategy {
    curve: DifficultyCurve,
}

impl SubtractionStrategy {
    /// Strategy over the standard ten-level staircase.
    pub fn standard() -> Self {
        SubtractionStrategy { curve: DifficultyCurve::subtraction() }
    }

    /// Strategy over a caller-supplied staircase.
    pub fn with_curve(curve: DifficultyCurve) -> Self {
        SubtractionStrategy { curve }
    }
}

impl ProblemStrategy for SubtractionStrategy {
    fn domain(&self) -> Domain {
        Domain::Subtraction
    }

    fn visual_kind(&self) -> VisualKind {
        VisualKind::TakeAway
    }

    fn generate(&self, local_level: u32, rng: &mut dyn RngCore) -> Result<Problem, EngineError> {
        let policy = self.curve.policy_for(local_level)?;

        let start = rng.gen_range(policy.a());
        // Clamp rather than re-draw when the removal exceeds the start, so
        // generation never loops. A clamped draw bottoms out at target 0.
        let removed = rng.gen_range(policy.b()).min(start);
        let target = start - removed;

        let item = pick_item(rng);
        let options = build_options(rng, target, 0)?;

        Ok(Problem {
            domain: Domain::Subtraction,
            level: local_level,
            target,
            options,
            prompt: format!("{start} - {removed} = ?"),
            narration_text: pick_line(rng, &NARRATION_LINES),
            item_symbol: item.emoji.to_string(),
            item_name: item.name.to_string(),
            visual: VisualDescriptor {
                kind: VisualKind::TakeAway,
                group_a: start,
                group_b: removed,
                item_symbol: item.emoji.to_string(),
                animation_hint: Some("fade_out".to_string()),
            },
            expression: Some(format!("{start} - {removed}")),
        })
    }
}
