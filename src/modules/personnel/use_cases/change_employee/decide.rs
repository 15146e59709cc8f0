use crate::modules::personnel::core::classify::classify;
use crate::modules::personnel::core::employee::Employee;
use crate::modules::personnel::core::event::LifecycleEventType;
use crate::modules::personnel::use_cases::change_employee::decision::{
    ChangeDecision, ChangeRejection, TransitionProposal,
};
use chrono::NaiveDate;

pub fn decide_change(
    current: &Employee,
    proposed: &Employee,
    today: NaiveDate,
) -> Result<ChangeDecision, ChangeRejection> {
    if current.personnel_number != proposed.personnel_number {
        return Err(ChangeRejection::PersonnelNumberChanged {
            from: current.personnel_number.clone(),
            to: proposed.personnel_number.clone(),
        });
    }
    let Some(event_type) = classify(&current.placement(), &proposed.placement()) else {
        return Ok(ChangeDecision::PlainUpdate);
    };
    Ok(ChangeDecision::RequiresConfirmation(TransitionProposal {
        event_type,
        personnel_number: proposed.personnel_number.clone(),
        employee_name: proposed.full_name(),
        old_department_id: current.department_id.clone(),
        new_department_id: proposed.department_id.clone(),
        old_position_id: current.position_id.clone(),
        new_position_id: proposed.position_id.clone(),
        suggested_event_date: today,
        reason_required: event_type.requires_reason(),
    }))
}

/// Trimmed reason to record with the event. Blank counts as absent.
pub fn confirmed_reason(
    event_type: LifecycleEventType,
    raw: Option<&str>,
    max_len: usize,
) -> Result<Option<String>, ChangeRejection> {
    match raw.map(str::trim).filter(|reason| !reason.is_empty()) {
        None if event_type.requires_reason() => Err(ChangeRejection::ReasonRequired(event_type)),
        None => Ok(None),
        Some(reason) => {
            let actual = reason.chars().count();
            if actual > max_len {
                return Err(ChangeRejection::ReasonTooLong {
                    max: max_len,
                    actual,
                });
            }
            Ok(Some(reason.to_string()))
        }
    }
}
