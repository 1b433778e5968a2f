//! The fixed daily checklist.
//!
//! 75 Zen tracks the same seven items every day. The items themselves are
//! constant; only the per-day completion flags live in the day record.

use crate::error::ValidationError;

/// A single checklist item definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Emoji shown next to the item.
    pub emoji: &'static str,
    /// Short task description.
    pub label: &'static str,
}

/// The daily checklist items, in display order.
pub const CHECKLIST_ITEMS: [ChecklistItem; 7] = [
    ChecklistItem { emoji: "\u{23f3}", label: "Time for self" },
    ChecklistItem { emoji: "\u{1f3c3}", label: "Exercise 45+ min" },
    ChecklistItem { emoji: "\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}", label: "Quality family time" },
    ChecklistItem { emoji: "\u{1f4da}", label: "Study (60+ min)" },
    ChecklistItem { emoji: "\u{1f4bc}", label: "Focused work (90+ min)" },
    ChecklistItem { emoji: "\u{1f6ab}", label: "No alcohol" },
    ChecklistItem { emoji: "\u{1f37d}\u{fe0f}", label: "Followed diet" },
];

/// Fresh completion flags, one per checklist item, all unchecked.
pub fn blank_flags() -> Vec<bool> {
    vec![false; CHECKLIST_ITEMS.len()]
}

/// Toggle the item with the given 1-based number.
///
/// Returns the new checked state of the item.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfBounds`] when the number does not name
/// a checklist item.
pub fn toggle(flags: &mut [bool], number: usize) -> Result<bool, ValidationError> {
    if number == 0 || number > flags.len() {
        return Err(ValidationError::OutOfBounds {
            collection: "checklist".to_string(),
            index: number,
            len: flags.len(),
        });
    }
    flags[number - 1] = !flags[number - 1];
    Ok(flags[number - 1])
}

/// Count of completed items.
pub fn completed_count(flags: &[bool]) -> usize {
    flags.iter().filter(|checked| **checked).count()
}

/// Whether every item is complete.
pub fn all_complete(flags: &[bool]) -> bool {
    !flags.is_empty() && flags.iter().all(|checked| *checked)
}
