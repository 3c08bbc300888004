use crate::engine::candidates::candidate_assignments;
use crate::engine::timeline::Timeline;
use crate::error::{Result, SolverError};
use crate::types::subject::{SelectionMode, SlotOption, Subject};
use serde::Serialize;

/// Optional runtime cutoffs for the combination search. The candidate space
/// is exponential in the total number of AllPreferred slots, so pathological
/// inputs must be boundable. A breached budget fails the whole run with
/// [`SolverError::BudgetExceeded`]; the engine never returns a silently
/// truncated result.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchBudget {
    /// Maximum number of search-tree nodes to visit.
    pub max_steps: Option<u64>,
    /// Maximum number of combinations to record.
    pub max_results: Option<usize>,
}

/// One complete, conflict-free assignment of chosen slots across all
/// subjects. `choices[k]` holds the chosen slot indices of the solver's
/// k-th subject (subjects are held in lexicographic name order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination {
    pub choices: Vec<Vec<usize>>,
    /// Total slots chosen by AllPreferred subjects.
    pub score: u32,
}

impl Combination {
    /// The chosen slots with their subject metadata, resolved against the
    /// solver's subject order.
    pub fn chosen_slots<'a>(
        &'a self,
        subjects: &'a [Subject],
    ) -> impl Iterator<Item = (&'a Subject, &'a SlotOption)> + 'a {
        self.choices
            .iter()
            .zip(subjects)
            .flat_map(|(chosen, subject)| {
                chosen.iter().map(move |&i| (subject, &subject.slots[i]))
            })
    }

    /// Whether every AllPreferred slot made it in.
    pub fn is_complete(&self, subjects: &[Subject]) -> bool {
        let optional_total: usize = subjects.iter().map(Subject::optional_slot_count).sum();
        self.score as usize == optional_total
    }
}

/// Depth-first backtracking search over the subjects' candidate assignments.
///
/// Subjects are brought into lexicographic name order once at construction
/// and held fixed for the run, so repeated runs on identical input yield
/// bit-identical output regardless of caller ordering.
pub struct Solver {
    subjects: Vec<Subject>,
    budget: SearchBudget,
}

struct SearchState {
    timeline: Timeline,
    path: Vec<Vec<usize>>,
    results: Vec<Combination>,
    steps: u64,
}

impl Solver {
    /// Re-validates every subject so a search never starts from a broken
    /// configuration, then fixes the subject order.
    pub fn new(mut subjects: Vec<Subject>) -> Result<Self> {
        for subject in &subjects {
            subject.validate()?;
        }
        subjects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Solver {
            subjects,
            budget: SearchBudget::default(),
        })
    }

    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// The fixed subject order the combinations' choices refer to.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Enumerates every valid combination. Zero subjects yield exactly one
    /// empty combination; an empty result means no conflict-free combination
    /// exists, which is not an error.
    pub fn solve(&self) -> Result<Vec<Combination>> {
        let mut state = SearchState {
            timeline: Timeline::new(),
            path: Vec::with_capacity(self.subjects.len()),
            results: Vec::new(),
            steps: 0,
        };
        self.descend(0, &mut state)?;
        Ok(state.results)
    }

    fn descend(&self, depth: usize, state: &mut SearchState) -> Result<()> {
        state.steps += 1;
        self.check_steps(state.steps)?;

        if depth == self.subjects.len() {
            if let Some(max) = self.budget.max_results {
                if state.results.len() >= max {
                    return Err(SolverError::BudgetExceeded {
                        visited: state.steps,
                    });
                }
            }
            state.results.push(Combination {
                choices: state.path.clone(),
                score: self.score_of(&state.path),
            });
            return Ok(());
        }

        let subject = &self.subjects[depth];
        for candidate in candidate_assignments(subject) {
            // Every examined candidate counts, so a subject with an
            // oversized subset space is cut off during enumeration, not
            // after it.
            state.steps += 1;
            self.check_steps(state.steps)?;

            let collides = candidate
                .iter()
                .any(|&i| state.timeline.conflicts(&subject.slots[i].interval));
            if collides {
                continue;
            }

            let checkpoint = state.timeline.checkpoint();
            state
                .timeline
                .commit(candidate.iter().map(|&i| subject.slots[i].interval));
            state.path.push(candidate);

            let outcome = self.descend(depth + 1, state);

            state.path.pop();
            state.timeline.rollback(checkpoint);
            outcome?;
        }
        Ok(())
    }

    fn check_steps(&self, steps: u64) -> Result<()> {
        if let Some(max) = self.budget.max_steps {
            if steps > max {
                return Err(SolverError::BudgetExceeded { visited: steps });
            }
        }
        Ok(())
    }

    fn score_of(&self, path: &[Vec<usize>]) -> u32 {
        path.iter()
            .zip(&self.subjects)
            .filter(|(_, subject)| subject.mode == SelectionMode::AllPreferred)
            .map(|(chosen, _)| chosen.len() as u32)
            .sum()
    }
}
