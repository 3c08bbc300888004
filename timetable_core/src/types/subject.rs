use crate::error::{Result, SolverError};
use crate::types::interval::TimeInterval;
use serde::{Deserialize, Serialize};

/// One candidate weekly time slot offered by a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOption {
    pub interval: TimeInterval,
    pub location: Option<String>,
}

impl SlotOption {
    pub fn new(interval: TimeInterval, location: Option<&str>) -> Self {
        SlotOption {
            interval,
            location: location.map(|s| s.to_string()),
        }
    }
}

/// How a subject's candidate slots are to be chosen. Exactly these two modes
/// exist; combination search branches differently on each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Precisely one of the candidate slots must be attended ("UE").
    ExactlyOne,
    /// Every slot is desired, but any subset is acceptable ("VO").
    AllPreferred,
}

/// A weekly commitment with its candidate slots and selection mode.
///
/// Slot order is preserved from input; it matters only for deterministic
/// tie-breaking, never for correctness. The color is opaque to the solver
/// and passed through to the renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub mode: SelectionMode,
    pub slots: Vec<SlotOption>,
    pub color: Option<String>,
}

impl Subject {
    pub fn new(
        name: &str,
        mode: SelectionMode,
        slots: Vec<SlotOption>,
        color: Option<&str>,
    ) -> Result<Self> {
        let subject = Subject {
            name: name.to_string(),
            mode,
            slots,
            color: color.map(|s| s.to_string()),
        };
        subject.validate()?;
        Ok(subject)
    }

    /// Configuration invariants, checked at construction and again before a
    /// search starts.
    pub fn validate(&self) -> Result<()> {
        if self.mode == SelectionMode::ExactlyOne && self.slots.is_empty() {
            return Err(SolverError::EmptySelection {
                subject: self.name.clone(),
            });
        }
        for slot in &self.slots {
            if slot.interval.start >= slot.interval.end {
                return Err(SolverError::InvalidInterval {
                    subject: self.name.clone(),
                    detail: slot.interval.to_string(),
                });
            }
        }
        for i in 0..self.slots.len() {
            for j in (i + 1)..self.slots.len() {
                if self.slots[i].interval.overlaps(&self.slots[j].interval) {
                    return Err(SolverError::SelfOverlap {
                        subject: self.name.clone(),
                        a: i,
                        b: j,
                    });
                }
            }
        }
        Ok(())
    }

    /// Slots that count towards a combination's score. ExactlyOne subjects
    /// always contribute exactly one slot and are excluded.
    pub fn optional_slot_count(&self) -> usize {
        match self.mode {
            SelectionMode::ExactlyOne => 0,
            SelectionMode::AllPreferred => self.slots.len(),
        }
    }
}
