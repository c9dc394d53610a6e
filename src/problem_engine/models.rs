use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domains and visual kinds
// ---------------------------------------------------------------------------

/// The three math problem families a player progresses through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Counting,
    Addition,
    Subtraction,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Counting    => write!(f, "Counting"),
            Domain::Addition    => write!(f, "Addition"),
            Domain::Subtraction => write!(f, "Subtraction"),
        }
    }
}

/// Visual presentation metaphors the renderer knows how to draw.
///
/// One kind is canonically associated with each [`Domain`], but that pairing
/// is a strategy decision — nothing here couples the two enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualKind {
    /// Items in a loose arrangement the child counts one by one.
    Scatter,
    /// Two groups shown apart, then combined.
    Merge,
    /// One group shown whole, then part of it removed.
    TakeAway,
}

impl fmt::Display for VisualKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualKind::Scatter  => write!(f, "scatter"),
            VisualKind::Merge    => write!(f, "merge"),
            VisualKind::TakeAway => write!(f, "take_away"),
        }
    }
}

/// Row length renderers use when wrapping `Scatter` items into rows.
/// Purely a layout hint; the descriptor itself carries only the counts.
pub const SCATTER_ROW_LEN: u32 = 5;

/// What to draw, never how.
///
/// `group_a` is the main group (or the starting amount for `TakeAway`);
/// `group_b` is the second group for `Merge`, the removed amount for
/// `TakeAway`, and 0 for `Scatter`. For `TakeAway`, `group_b <= group_a`
/// always holds — you cannot remove more than exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualDescriptor {
    pub kind: VisualKind,
    pub group_a: u32,
    pub group_b: u32,
    pub item_symbol: String,
    /// Optional animation cue, e.g. "slide_merge" or "fade_out".
    pub animation_hint: Option<String>,
}

// ---------------------------------------------------------------------------
// Problem record
// ---------------------------------------------------------------------------

/// One fully specified practice problem, ready for any consumer.
///
/// The engine hands this record to the presentation, progression, and
/// narration layers and never hears back; everything they need is in here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub domain: Domain,
    /// 1-based level inside the owning domain's range.
    pub level: u32,
    /// The correct answer.
    pub target: u32,
    /// Answer choices, shuffled; contains `target` exactly once, no duplicates.
    pub options: Vec<u32>,
    /// Question text to display, e.g. "How many ducks?" or "3 + 2 = ?".
    pub prompt: String,
    /// Encouragement line for the voice host, spoken verbatim.
    pub narration_text: String,
    /// Emoji for the item being counted.
    pub item_symbol: String,
    /// Item name for voice-bank lookup, e.g. "ducks".
    pub item_name: String,
    pub visual: VisualDescriptor,
    /// Math expression, e.g. "3 + 2". Absent for pure counting.
    pub expression: Option<String>,
}

// ---------------------------------------------------------------------------
// Configuration values
// ---------------------------------------------------------------------------

/// Inclusive operand bounds a strategy draws inside at one difficulty step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandRangePolicy {
    pub min_a: u32,
    pub max_a: u32,
    pub min_b: u32,
    pub max_b: u32,
}

impl OperandRangePolicy {
    /// Bounds for the first operand as a drawable range.
    pub fn a(&self) -> RangeInclusive<u32> {
        self.min_a..=self.max_a
    }

    /// Bounds for the second operand as a drawable range.
    pub fn b(&self) -> RangeInclusive<u32> {
        self.min_b..=self.max_b
    }
}

/// The contiguous run of global levels one domain owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRange {
    pub domain: Domain,
    pub first_level: u32,
    pub last_level: u32,
}

impl LevelRange {
    pub fn contains(&self, global_level: u32) -> bool {
        (self.first_level..=self.last_level).contains(&global_level)
    }

    /// Number of levels in this range.
    pub fn span(&self) -> u32 {
        self.last_level - self.first_level + 1
    }
}

// ---------------------------------------------------------------------------
// Request type
// ---------------------------------------------------------------------------

/// Input to [`generate_problem`](crate::problem_engine::generate_problem).
///
/// `level` is a global level unless `domain` is set, in which case it is
/// taken as local to that domain — the compatibility path for callers that
/// track a single domain's progression on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub level: u32,
    pub domain: Option<Domain>,
    /// `Some` reproduces the exact same problem every time; `None` draws
    /// from OS entropy.
    pub rng_seed: Option<u64>,
}

impl ProblemRequest {
    /// Request for a global level with no override and an entropy seed.
    pub fn new(level: u32) -> Self {
        ProblemRequest {
            level,
            domain: None,
            rng_seed: None,
        }
    }
}
