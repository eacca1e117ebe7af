use crate::action::Action;
use serde::{Deserialize, Serialize};

/// State of one presentation slot after allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotState {
    Hidden,

    /// Shows the action at `index` in the input sequence; disabled when that
    /// action is the no-op sentinel.
    Action { index: usize, enabled: bool },
}

/// Result of mapping an ordered action set onto a bounded slot row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// One entry per slot, `slot_count` in total.
    pub slots: Vec<SlotState>,

    /// Slot 1 was left permanently hidden to balance an odd, non-full row.
    pub skip_middle: bool,

    /// Spacer flags mirror `skip_middle` so the consumer can reserve layout
    /// space symmetrically.
    pub left_spacer: bool,
    pub right_spacer: bool,
}

impl SlotAssignment {
    /// Input index of the action shown in `slot`, if any.
    pub fn action_at(&self, slot: usize) -> Option<usize> {
        match self.slots.get(slot) {
            Some(SlotState::Action { index, .. }) => Some(*index),
            _ => None,
        }
    }
}

/// Assigns each action, in input order, to a slot in `[0, slot_count)`.
///
/// When the set is smaller than the row and has odd size, slot 1 is skipped
/// and everything after the first action shifts by one; this keeps an odd
/// row visually centered. Actions that run past the last slot are dropped,
/// and slots without an action stay hidden. Never errors.
pub fn allocate(actions: &[Action], slot_count: usize) -> SlotAssignment {
    let skip_middle = actions.len() < slot_count && actions.len() % 2 == 1;
    let mut slots = vec![SlotState::Hidden; slot_count];
    let mut slot = 0usize;
    for (index, action) in actions.iter().enumerate() {
        if skip_middle && slot == 1 {
            slot += 1;
        }
        if slot >= slot_count {
            break;
        }
        slots[slot] = SlotState::Action {
            index,
            enabled: !action.code.is_no_op(),
        };
        slot += 1;
    }
    SlotAssignment {
        slots,
        skip_middle,
        left_spacer: skip_middle,
        right_spacer: skip_middle,
    }
}
