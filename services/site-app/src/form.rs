//! Per-form submission state machine
//!
//! ```text
//! Idle -> Validating -> Invalid -> Idle (errors shown)
//!                    -> Valid -> Submitting -> Succeeded -> Idle (cleared after delay)
//!                                           -> Failed    -> Idle (values kept)
//! ```
//!
//! `Validating` is transient inside [`SubmissionForm::begin_submit`].
//! `Submitting` is the only state in which the submit control is disabled.

use std::cell::RefCell;
use std::time::Duration;

use crate::submission::{validate, Field, FieldErrors, FormVariant, SubmissionRecord};
use crate::transport::{submit, SubmissionTransport, SubmitOutcome};

/// How long the success banner stays up before the form is cleared
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);

pub const SUCCESS_MESSAGE: &str = "Submitted successfully! We'll be in touch soon.";
pub const FAILURE_MESSAGE: &str = "Failed to submit. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Why a submit attempt never reached the network
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("{0} field(s) failed validation")]
    Invalid(usize),

    #[error("a submission is already in flight")]
    AlreadySubmitting,

    #[error("the form is no longer mounted")]
    Detached,
}

/// State of one mounted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionForm {
    record: SubmissionRecord,
    errors: FieldErrors,
    status: FormStatus,
}

impl SubmissionForm {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            record: SubmissionRecord::empty(variant),
            errors: FieldErrors::new(),
            status: FormStatus::Idle,
        }
    }

    pub fn record(&self) -> &SubmissionRecord {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Banner text for the last finished submission, if one is showing
    pub fn banner(&self) -> Option<&'static str> {
        match self.status {
            FormStatus::Succeeded => Some(SUCCESS_MESSAGE),
            FormStatus::Failed => Some(FAILURE_MESSAGE),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }

    /// Apply one input event: overwrite the field, drop its error and any
    /// outcome banner.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
        self.errors.remove(&field);
        if matches!(self.status, FormStatus::Succeeded | FormStatus::Failed) {
            self.status = FormStatus::Idle;
        }
    }

    /// Validate and, if the record is clean, move to `Submitting` and hand
    /// back a snapshot to send.
    pub fn begin_submit(&mut self) -> Result<SubmissionRecord, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::AlreadySubmitting);
        }

        let errors = validate(&self.record);
        if !errors.is_empty() {
            let count = errors.len();
            tracing::debug!("Submission blocked by {} validation error(s)", count);
            self.errors = errors;
            self.status = FormStatus::Idle;
            return Err(SubmitRejected::Invalid(count));
        }

        self.errors.clear();
        self.status = FormStatus::Submitting;
        Ok(self.record.clone())
    }

    /// Record the outcome of the in-flight submission
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        self.status = match outcome {
            SubmitOutcome::Succeeded => FormStatus::Succeeded,
            SubmitOutcome::Failed => FormStatus::Failed,
        };
    }

    /// Leave `Submitting` without an outcome (the submit future was dropped)
    pub fn abandon_submit(&mut self) {
        if self.is_submitting() {
            self.status = FormStatus::Idle;
        }
    }

    /// Fired [`SUCCESS_RESET_DELAY`] after a success. Clears the values and
    /// the banner unless a newer submission is already in flight.
    pub fn reset_after_success(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.record.clear();
        self.errors.clear();
        if self.status == FormStatus::Succeeded {
            self.status = FormStatus::Idle;
        }
    }
}

/// When to call [`SubmissionForm::reset_after_success`] after `outcome`.
/// Failed submissions keep their values, so nothing is scheduled.
pub fn reset_delay(outcome: SubmitOutcome) -> Option<Duration> {
    match outcome {
        SubmitOutcome::Succeeded => Some(SUCCESS_RESET_DELAY),
        SubmitOutcome::Failed => None,
    }
}

/// Somewhere a [`SubmissionForm`] lives while a submission is awaited.
///
/// Returns `None` when the form has gone away (e.g. its component was
/// unmounted).
pub trait FormHandle {
    fn with_form<R>(&self, f: impl FnOnce(&mut SubmissionForm) -> R) -> Option<R>;
}

impl FormHandle for RefCell<SubmissionForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut SubmissionForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Holds a form in `Submitting` and guarantees it leaves that state on
/// every exit path.
pub struct SubmittingGuard<'a, H: FormHandle> {
    handle: &'a H,
    finished: bool,
}

impl<'a, H: FormHandle> SubmittingGuard<'a, H> {
    /// Validate the form behind `handle` and enter `Submitting`
    pub fn acquire(handle: &'a H) -> Result<(Self, SubmissionRecord), SubmitRejected> {
        let snapshot = handle
            .with_form(SubmissionForm::begin_submit)
            .ok_or(SubmitRejected::Detached)??;
        Ok((
            Self {
                handle,
                finished: false,
            },
            snapshot,
        ))
    }

    pub fn finish(mut self, outcome: SubmitOutcome) {
        self.finished = true;
        self.handle.with_form(|form| form.finish_submit(outcome));
    }
}

impl<H: FormHandle> Drop for SubmittingGuard<'_, H> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("Submission abandoned before completion");
            self.handle.with_form(SubmissionForm::abandon_submit);
        }
    }
}

/// Validate, send and record the outcome for the form behind `handle`.
///
/// No network call is made when validation fails or a submission is
/// already in flight.
pub async fn submit_form<H, T>(handle: &H, transport: &T) -> Result<SubmitOutcome, SubmitRejected>
where
    H: FormHandle,
    T: SubmissionTransport + ?Sized,
{
    let (guard, snapshot) = SubmittingGuard::acquire(handle)?;
    let outcome = submit(transport, &snapshot).await;
    guard.finish(outcome);
    Ok(outcome)
}
