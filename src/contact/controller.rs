use log::{debug, warn};

use super::feedback::Feedback;
use super::fields::ContactFields;
use super::store::{Clock, KeyValueStore, StorageError, SubmissionLog, SubmissionRecord};
use super::validator::validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Rejected,
    Accepted,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; the form keeps its contents.
    Rejected { errors: Vec<String> },
    /// Validation passed. `stored` reports whether the record was persisted,
    /// which does not change what the user sees.
    Accepted { stored: Result<SubmissionRecord, StorageError> },
}

impl SubmitOutcome {
    pub fn phase(&self) -> Phase {
        match self {
            SubmitOutcome::Rejected { .. } => Phase::Rejected,
            SubmitOutcome::Accepted { .. } => Phase::Accepted,
        }
    }

    pub fn feedback(&self) -> Feedback {
        match self {
            SubmitOutcome::Rejected { errors } => Feedback::error(errors),
            SubmitOutcome::Accepted { .. } => Feedback::success(),
        }
    }

    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// Runs one submit event through validation and the submission log.
pub struct FormController<S, C> {
    log: SubmissionLog<S, C>,
    phase: Phase,
}

impl<S: KeyValueStore, C: Clock> FormController<S, C> {
    pub fn new(log: SubmissionLog<S, C>) -> Self {
        FormController { log, phase: Phase::Idle }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn transition(&mut self, next: Phase) {
        debug!("contact form: {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    pub fn submit(&mut self, fields: &ContactFields) -> SubmitOutcome {
        self.transition(Phase::Validating);

        let errors = validate(fields);
        let outcome = if errors.is_empty() {
            let stored = self.log.append(fields);
            if let Err(e) = &stored {
                warn!("contact submission accepted but not saved: {}", e);
            }
            SubmitOutcome::Accepted { stored }
        } else {
            SubmitOutcome::Rejected { errors }
        };

        self.transition(outcome.phase());
        self.transition(Phase::Idle);
        outcome
    }

    #[cfg(test)]
    pub fn log(&self) -> &SubmissionLog<S, C> {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::feedback::SUCCESS_MESSAGE;
    use crate::contact::store::testing::{ManualClock, MemoryStorage};

    fn controller(storage: MemoryStorage) -> FormController<MemoryStorage, ManualClock> {
        FormController::new(SubmissionLog::new(
            storage,
            ManualClock::starting_at("2026-10-17T09:00:00Z"),
        ))
    }

    fn ana() -> ContactFields {
        ContactFields::from_pairs([
            ("name", "Ana"),
            ("email", "ana@mail.com"),
            ("phone", "08123456"),
            ("instagram", "@ana.codes"),
            ("message", "Hello, I am interested in the course."),
        ])
    }

    #[test]
    fn valid_submission_is_stored_and_acknowledged() {
        let mut controller = controller(MemoryStorage::default());
        let outcome = controller.submit(&ana());

        assert_eq!(outcome.phase(), Phase::Accepted);
        assert!(outcome.clears_form());
        assert_eq!(outcome.feedback(), Feedback::Success(SUCCESS_MESSAGE.to_string()));
        let records = controller.log().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Ana");
        assert_eq!(records[0].email, "ana@mail.com");
        assert_eq!(records[0].phone, "08123456");
        assert_eq!(records[0].instagram, "@ana.codes");
        assert_eq!(records[0].message, "Hello, I am interested in the course.");
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn invalid_submission_is_rejected_without_storing() {
        let mut controller = controller(MemoryStorage::default());
        let fields = ContactFields::from_pairs([
            ("name", ""),
            ("email", "bad"),
            ("phone", "1"),
            ("message", "short"),
        ]);
        let outcome = controller.submit(&fields);

        assert_eq!(outcome.phase(), Phase::Rejected);
        assert!(!outcome.clears_form());
        assert_eq!(
            outcome.feedback(),
            Feedback::Error(
                "Name is required. Invalid email. Phone number looks too short. \
                 Message must be at least 10 characters"
                    .to_string()
            )
        );
        assert!(controller.log().records().is_empty());
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn storage_failure_still_shows_success() {
        let mut controller = controller(MemoryStorage::rejecting_writes());
        let outcome = controller.submit(&ana());

        assert!(matches!(outcome, SubmitOutcome::Accepted { stored: Err(_) }));
        assert_eq!(outcome.feedback(), Feedback::success());
        assert!(outcome.clears_form());
        assert!(controller.log().records().is_empty());
    }

    #[test]
    fn rejection_then_correction() {
        let mut controller = controller(MemoryStorage::default());
        let mut fields = ana();
        fields.phone = "12".to_string();

        assert_eq!(controller.submit(&fields).phase(), Phase::Rejected);
        fields.phone = "08123456".to_string();
        assert_eq!(controller.submit(&fields).phase(), Phase::Accepted);
        assert_eq!(controller.log().records().len(), 1);
    }

    #[test]
    fn forms_sharing_storage_append_to_one_log() {
        let storage = MemoryStorage::default();
        let mut first = controller(storage.clone());
        let mut second = controller(storage);

        first.submit(&ana());
        second.submit(&ana());
        assert_eq!(first.log().records().len(), 2);
    }
}
