//! Submission controller for the contribution form.
//!
//! [`ContributionForm`] owns the current [`FormValues`] and the in-flight
//! flag, derives validity and dirtiness on demand from the validation crate,
//! and runs the submit lifecycle: gate, send through the injected
//! [`Transport`], interpret the envelope, report the outcome through the
//! injected [`Notifier`], and reset the values on success. The in-flight flag
//! always returns to `false` when the cycle ends, whichever path it took.

mod error;

pub use error::SubmitError;

use common::{ContributeResponse, FileRef, FormValues};
use log::debug;
use validation::{Field, FieldErrors};

/// Receives the single user-visible notification of each submit cycle.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Sends a contribution to the server and decodes the response envelope.
///
/// One blocking call per submit cycle; the controller never retries and
/// enforces one submission in flight through its own gate.
pub trait Transport {
    fn submit(&self, values: &FormValues) -> Result<ContributeResponse, SubmitError>;
}

/// Outcome of a [`ContributionForm::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The gate was closed (invalid, clean, or already submitting); nothing
    /// was sent.
    NotReady,
    /// The server accepted the contribution; the form was reset.
    Accepted,
    /// The submission failed; the values are kept for correction.
    Failed(SubmitError),
}

// Returns the in-flight flag to false when dropped, so an unwinding notifier
// cannot leave the form stuck in the submitting state.
struct ClearSubmitting<'a>(&'a mut bool);

impl Drop for ClearSubmitting<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Form state and submit lifecycle.
pub struct ContributionForm<T: Transport, N: Notifier> {
    values: FormValues,
    is_submitting: bool,
    transport: T,
    notifier: N,
}

impl<T: Transport, N: Notifier> ContributionForm<T, N> {
    /// Create a form with the initial all-empty values.
    pub fn new(transport: T, notifier: N) -> Self {
        Self {
            values: FormValues::default(),
            is_submitting: false,
            transport,
            notifier,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// True once any field differs from its initial value.
    pub fn is_dirty(&self) -> bool {
        self.values != FormValues::default()
    }

    /// Current error mapping across all fields.
    pub fn errors(&self) -> FieldErrors {
        validation::validate(&self.values)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Current error of a single field.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        validation::validate_field(&self.values, field)
    }

    /// The submit control's enabled state.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.is_dirty() && self.is_valid()
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> Option<&'static str> {
        self.values.name = value.into();
        self.field_error(Field::Name)
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> Option<&'static str> {
        self.values.email = value.into();
        self.field_error(Field::Email)
    }

    pub fn set_age(&mut self, value: impl Into<String>) -> Option<&'static str> {
        self.values.age = value.into();
        self.field_error(Field::Age)
    }

    pub fn set_location(&mut self, value: impl Into<String>) -> Option<&'static str> {
        self.values.location = value.into();
        self.field_error(Field::Location)
    }

    pub fn set_topic(&mut self, value: impl Into<String>) -> Option<&'static str> {
        self.values.topic = value.into();
        self.field_error(Field::Topic)
    }

    pub fn set_description(&mut self, value: impl Into<String>) -> Option<&'static str> {
        self.values.description = value.into();
        self.field_error(Field::Description)
    }

    pub fn set_audiofile(&mut self, value: FileRef) -> Option<&'static str> {
        self.values.audiofile = value;
        self.field_error(Field::Audiofile)
    }

    pub fn set_thumbnail(&mut self, value: FileRef) -> Option<&'static str> {
        self.values.thumbnail = value;
        self.field_error(Field::Thumbnail)
    }

    pub fn set_category(&mut self, value: impl Into<String>) -> Option<&'static str> {
        self.values.category = value.into();
        self.field_error(Field::Category)
    }

    /// Run one submit cycle.
    ///
    /// Gated on `can_submit()`. Sends the current values, folds a
    /// `success: false` envelope into [`SubmitError::Rejected`], notifies the
    /// outcome ("✅ …" or "❌ …"), and resets the values only when the server
    /// accepted. No retry: a failed cycle waits for an explicit re-trigger.
    pub fn submit(&mut self) -> SubmitStatus {
        if !self.can_submit() {
            return SubmitStatus::NotReady;
        }

        self.is_submitting = true;
        let _clear = ClearSubmitting(&mut self.is_submitting);

        debug!("Submitting contribution: {:?}", self.values);

        let settled = self.transport.submit(&self.values).and_then(|response| {
            if response.success {
                Ok(response)
            } else {
                Err(SubmitError::Rejected)
            }
        });

        match settled {
            Ok(response) => {
                let message = response.message.unwrap_or_default();
                self.notifier.notify(&format!("✅ {}", message));
                self.values = FormValues::default();
                SubmitStatus::Accepted
            }
            Err(err) => {
                self.notifier.notify(&format!("❌ {}", err));
                SubmitStatus::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NeverCalled;

    impl Transport for NeverCalled {
        fn submit(&self, _values: &FormValues) -> Result<ContributeResponse, SubmitError> {
            panic!("transport must not be reached through a closed gate");
        }
    }

    impl Notifier for NeverCalled {
        fn notify(&self, _message: &str) {
            panic!("notifier must not be reached through a closed gate");
        }
    }

    #[test]
    fn new_form_is_clean_and_invalid() {
        let form = ContributionForm::new(NeverCalled, NeverCalled);
        assert!(!form.is_dirty());
        assert!(!form.is_valid());
        assert!(!form.can_submit());
    }

    #[test]
    fn setters_revalidate_the_changed_field() {
        let mut form = ContributionForm::new(NeverCalled, NeverCalled);
        assert_eq!(form.set_age("abc"), Some("Age must be a number"));
        assert_eq!(form.set_age("31"), None);
        assert_eq!(form.set_email("nope"), Some("Invalid email address"));
        assert_eq!(form.set_email("ok@example.com"), None);
        assert!(form.is_dirty());
    }

    #[test]
    fn submit_through_closed_gate_sends_nothing() {
        let mut form = ContributionForm::new(NeverCalled, NeverCalled);
        // Clean form
        assert_eq!(form.submit(), SubmitStatus::NotReady);
        // Dirty but invalid
        form.set_name("Asha");
        assert_eq!(form.submit(), SubmitStatus::NotReady);
        assert!(!form.is_submitting());
    }
}
