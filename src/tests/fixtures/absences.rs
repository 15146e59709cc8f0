// Builders for absence candidates and normalized absences.
//
// Defaults describe employee E-1001 taking Monday 2024-03-04 off for the full day.

use crate::modules::attendance::core::absence::{AbsenceCandidate, NormalizedAbsence};
use crate::tests::fixtures::schedules::{monday, time};
use chrono::NaiveDate;

pub struct AbsenceCandidateBuilder {
    inner: AbsenceCandidate,
}

impl Default for AbsenceCandidateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AbsenceCandidateBuilder {
    pub fn new() -> Self {
        Self {
            inner: AbsenceCandidate {
                personnel_number: "E-1001".to_string(),
                date: "2024-03-04".to_string(),
                full_day: true,
                reason: "Sick leave".to_string(),
                manual_start: None,
                manual_end: None,
            },
        }
    }

    pub fn personnel_number(mut self, v: impl Into<String>) -> Self {
        self.inner.personnel_number = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn full_day(mut self, v: bool) -> Self {
        self.inner.full_day = v;
        self
    }

    pub fn reason(mut self, v: impl Into<String>) -> Self {
        self.inner.reason = v.into();
        self
    }

    pub fn manual_start(mut self, v: Option<&str>) -> Self {
        self.inner.manual_start = v.map(String::from);
        self
    }

    pub fn manual_end(mut self, v: Option<&str>) -> Self {
        self.inner.manual_end = v.map(String::from);
        self
    }

    /// Partial day between `start` and `end`.
    pub fn partial(self, start: &str, end: &str) -> Self {
        self.full_day(false)
            .manual_start(Some(start))
            .manual_end(Some(end))
    }

    pub fn build(self) -> AbsenceCandidate {
        self.inner
    }
}

pub struct NormalizedAbsenceBuilder {
    inner: NormalizedAbsence,
}

impl Default for NormalizedAbsenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NormalizedAbsenceBuilder {
    pub fn new() -> Self {
        Self {
            inner: NormalizedAbsence {
                personnel_number: "E-1001".to_string(),
                date: monday(),
                full_day: true,
                start: time("09:00"),
                end: time("18:00"),
                reason: "Sick leave".to_string(),
                schedule_entry_id: Some("P-DEV:1".to_string()),
            },
        }
    }

    pub fn personnel_number(mut self, v: impl Into<String>) -> Self {
        self.inner.personnel_number = v.into();
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn reason(mut self, v: impl Into<String>) -> Self {
        self.inner.reason = v.into();
        self
    }

    pub fn partial(mut self, start: &str, end: &str) -> Self {
        self.inner.full_day = false;
        self.inner.start = time(start);
        self.inner.end = time(end);
        self.inner.schedule_entry_id = None;
        self
    }

    pub fn build(self) -> NormalizedAbsence {
        self.inner
    }
}

#[cfg(test)]
mod absence_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn partial_clears_the_full_day_flag_and_sets_both_times() {
        let candidate = AbsenceCandidateBuilder::new().partial("10:00", "12:00").build();
        assert!(!candidate.full_day);
        assert_eq!(candidate.manual_start.as_deref(), Some("10:00"));
        assert_eq!(candidate.manual_end.as_deref(), Some("12:00"));
    }

    #[rstest]
    fn partial_normalized_absences_drop_the_schedule_reference() {
        let normalized = NormalizedAbsenceBuilder::new().partial("10:00", "12:00").build();
        assert_eq!(normalized.schedule_entry_id, None);
        assert_eq!(normalized.start, time("10:00"));
    }
}
