//! One-time roster drafting: N numbered slots with editable names.

use crate::model::NewStudent;
use thiserror::Error;

pub const MIN_ROSTER_SIZE: usize = 1;
pub const MAX_ROSTER_SIZE: usize = 50;

/// One in-progress roster entry: a fixed sequential number and an
/// editable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSlot {
    pub student_number: u32,
    pub name: String,
}

/// The bulk-creation draft. Changing the count discards the draft and
/// renumbers from one; there is no merge of prior edits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RosterDraft {
    slots: Vec<RosterSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Enter a name for student {student_number}.")]
    BlankName { student_number: u32 },
}

impl RosterDraft {
    /// Produce `count` blank slots numbered 1..=count.
    #[must_use]
    pub fn with_count(count: usize) -> Self {
        let slots = (1..=count)
            .map(|n| RosterSlot {
                student_number: u32::try_from(n).unwrap_or(u32::MAX),
                name: String::new(),
            })
            .collect();
        Self { slots }
    }

    #[must_use]
    pub fn slots(&self) -> &[RosterSlot] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn set_name(&mut self, index: usize, name: impl Into<String>) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.name = name.into();
        }
    }

    /// Check every slot has a name and produce the bulk-creation payload.
    /// Rejection happens locally; no request is made for an incomplete
    /// draft.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first slot whose name is blank.
    pub fn validate(&self) -> Result<Vec<NewStudent>, RosterError> {
        if let Some(blank) = self.slots.iter().find(|s| s.name.trim().is_empty()) {
            return Err(RosterError::BlankName {
                student_number: blank.student_number,
            });
        }
        Ok(self
            .slots
            .iter()
            .map(|s| NewStudent {
                student_number: s.student_number,
                name: s.name.clone(),
            })
            .collect())
    }
}

/// Interpret the raw count field: integers within the roster bounds
/// only. Out-of-range input is rejected, not clamped, so the error
/// message shown for it stays truthful.
#[must_use]
pub fn parse_count(raw: &str) -> Option<usize> {
    let count: usize = raw.trim().parse().ok()?;
    (MIN_ROSTER_SIZE..=MAX_ROSTER_SIZE)
        .contains(&count)
        .then_some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_numbers_slots_sequentially() {
        let draft = RosterDraft::with_count(3);
        let numbers: Vec<u32> = draft.slots().iter().map(|s| s.student_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(draft.slots().iter().all(|s| s.name.is_empty()));
    }

    #[test]
    fn reinitializing_discards_prior_edits() {
        let mut draft = RosterDraft::with_count(3);
        draft.set_name(0, "김하늘");
        let draft = RosterDraft::with_count(5);
        assert_eq!(draft.len(), 5);
        assert!(draft.slots()[0].name.is_empty());
    }

    #[test]
    fn validation_rejects_any_blank_name() {
        let mut draft = RosterDraft::with_count(2);
        draft.set_name(0, "김하늘");
        draft.set_name(1, "   ");
        assert_eq!(
            draft.validate(),
            Err(RosterError::BlankName { student_number: 2 })
        );
    }

    #[test]
    fn validation_produces_the_bulk_payload() {
        let mut draft = RosterDraft::with_count(2);
        draft.set_name(0, "김하늘");
        draft.set_name(1, "이준호");
        let students = draft.validate().expect("complete draft");
        assert_eq!(students.len(), 2);
        assert_eq!(students[1].student_number, 2);
        assert_eq!(students[1].name, "이준호");
    }

    #[test]
    fn count_parsing_enforces_bounds() {
        assert_eq!(parse_count("30"), Some(30));
        assert_eq!(parse_count("1"), Some(1));
        assert_eq!(parse_count("50"), Some(MAX_ROSTER_SIZE));
        assert_eq!(parse_count("0"), None);
        assert_eq!(parse_count("-4"), None);
        assert_eq!(parse_count("abc"), None);
    }

    #[test]
    fn count_above_the_limit_is_rejected_not_clamped() {
        assert_eq!(parse_count("51"), None);
        assert_eq!(parse_count("200"), None);
    }

    #[test]
    fn blank_name_error_names_the_slot() {
        let mut draft = RosterDraft::with_count(2);
        draft.set_name(0, "김하늘");
        let err = draft.validate().expect_err("blank slot");
        assert_eq!(err.to_string(), "Enter a name for student 2.");
    }
}
