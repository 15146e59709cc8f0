// Lifecycle transition classification.
//
// A state change always wins over a department or position change: dismissing
// someone while moving them to another department is a dismissal, not a transfer.

use crate::modules::personnel::core::employee::{EmploymentState, Placement};
use crate::modules::personnel::core::event::LifecycleEventType;

pub fn classify(old: &Placement, new: &Placement) -> Option<LifecycleEventType> {
    use EmploymentState::*;

    if old.state != new.state {
        return match (old.state, new.state) {
            (_, Dismissed) => Some(LifecycleEventType::Dismissal),
            (Dismissed, Active) => Some(LifecycleEventType::Hire),
            (_, Unavailable) => Some(LifecycleEventType::Suspension),
            (Unavailable, Active) => Some(LifecycleEventType::Reinstatement),
            _ => None,
        };
    }
    if old.department_id != new.department_id || old.position_id != new.position_id {
        return Some(LifecycleEventType::Transfer);
    }
    None
}
