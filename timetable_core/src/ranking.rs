use crate::engine::search::Combination;

/// Deterministic quality ordering of the engine's output: highest score
/// first, ties broken by the per-subject chosen-index lists. Identical
/// assignment tuples cannot arise from distinct search paths, but are
/// removed anyway.
pub fn rank(mut combinations: Vec<Combination>) -> Vec<Combination> {
    combinations.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.choices.cmp(&b.choices))
    });
    combinations.dedup_by(|a, b| a.choices == b.choices);
    combinations
}
