use crate::types::subject::{SelectionMode, Subject};

/// Lazily enumerates all ways one subject may be assigned, each candidate as
/// an ascending list of slot indices. Candidate order is fixed per mode so
/// that search output is reproducible:
/// - ExactlyOne: one candidate per slot, in slot order.
/// - AllPreferred: every subset, largest first (full set down to the empty
///   set), equal sizes in lexicographic index order.
///
/// AllPreferred subsets are generated one at a time, never materialized as a
/// whole, so the search budget can cut off a subject with many slots before
/// its exponential subset space is walked.
pub fn candidate_assignments(subject: &Subject) -> Candidates<'_> {
    let state = match subject.mode {
        SelectionMode::ExactlyOne => State::SingleSlot { next: 0 },
        SelectionMode::AllPreferred => State::Subsets {
            upcoming: Some((0..subject.slots.len()).collect()),
        },
    };
    Candidates { subject, state }
}

pub struct Candidates<'a> {
    subject: &'a Subject,
    state: State,
}

enum State {
    SingleSlot { next: usize },
    Subsets { upcoming: Option<Vec<usize>> },
}

impl Iterator for Candidates<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        match &mut self.state {
            State::SingleSlot { next } => {
                if *next < self.subject.slots.len() {
                    let i = *next;
                    *next += 1;
                    Some(vec![i])
                } else {
                    None
                }
            }
            State::Subsets { upcoming } => loop {
                let subset = upcoming.take()?;
                *upcoming = next_subset(&subset, self.subject.slots.len());
                // Construction-time validation already rules these out;
                // skip anyway.
                if !is_self_overlapping(self.subject, &subset) {
                    return Some(subset);
                }
            },
        }
    }
}

/// Successor of `subset` among the index combinations of `0..n`, ordered by
/// descending size and lexicographically within one size: after the last
/// k-element combination comes the first (k-1)-element one, ending at the
/// empty set.
fn next_subset(subset: &[usize], n: usize) -> Option<Vec<usize>> {
    let k = subset.len();
    let mut next = subset.to_vec();
    for i in (0..k).rev() {
        if next[i] < n - k + i {
            next[i] += 1;
            for j in (i + 1)..k {
                next[j] = next[j - 1] + 1;
            }
            return Some(next);
        }
    }
    if k == 0 {
        None
    } else {
        Some((0..k - 1).collect())
    }
}

fn is_self_overlapping(subject: &Subject, subset: &[usize]) -> bool {
    for (pos, &i) in subset.iter().enumerate() {
        for &j in &subset[pos + 1..] {
            if subject.slots[i].interval.overlaps(&subject.slots[j].interval) {
                return true;
            }
        }
    }
    false
}
