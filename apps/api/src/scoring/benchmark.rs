/// Fixed per-category targets used only for gap messaging, never for the
/// total score. Deliberately a separate table from the suggestion triggers
/// in `calculator` and the rule floors in `evaluator`: three threshold
/// tables drive three independent outputs.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    pub documentation: u32,
    pub consistency: u32,
    pub impact: u32,
    pub structure: u32,
    pub depth: u32,
}

/// The world-class reference profile.
pub const WORLD_CLASS: Benchmark = Benchmark {
    documentation: 18,
    consistency: 15,
    impact: 18,
    structure: 15,
    depth: 15,
};
