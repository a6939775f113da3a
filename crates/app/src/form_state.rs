use shared_types::{
    AppError, FieldErrors, FormField, InitialValues, SubmittedUser, UserFormValues,
};
use std::collections::HashSet;

/// Where the form is in its edit/submit cycle.
///
/// Validation is synchronous, so "editing" and "validating" resolve on the
/// same change into `Valid` or `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Pristine,
    Valid,
    Invalid,
    Submitting,
    Submitted,
    SubmitFailed,
}

impl FormPhase {
    /// Value of the form's `data-phase` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormPhase::Pristine => "pristine",
            FormPhase::Valid => "valid",
            FormPhase::Invalid => "invalid",
            FormPhase::Submitting => "submitting",
            FormPhase::Submitted => "submitted",
            FormPhase::SubmitFailed => "submit-failed",
        }
    }
}

/// State behind the user form: values, validation, touched fields, and
/// the results of past submissions.
///
/// `errors` always equals `values.validate_fields()`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFormState {
    initial: UserFormValues,
    values: UserFormValues,
    errors: FieldErrors,
    touched: HashSet<FormField>,
    status: Option<SubmittedUser>,
    users: Vec<SubmittedUser>,
    pending: usize,
    submit_error: Option<String>,
    phase: FormPhase,
}

impl UserFormState {
    pub fn new(initial: &InitialValues) -> Self {
        let initial = UserFormValues::from_initial(initial);
        let errors = initial.validate_fields();
        Self {
            values: initial.clone(),
            initial,
            errors,
            touched: HashSet::new(),
            status: None,
            users: Vec::new(),
            pending: 0,
            submit_error: None,
            phase: FormPhase::Pristine,
        }
    }

    pub fn values(&self) -> &UserFormValues {
        &self.values
    }

    #[cfg(test)]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// Last record returned by the endpoint.
    pub fn status(&self) -> Option<&SubmittedUser> {
        self.status.as_ref()
    }

    /// Every record returned so far, in the order responses arrived.
    pub fn users(&self) -> &[SubmittedUser] {
        &self.users
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// The message to show under `field`: only once the field was touched
    /// and while it fails validation.
    pub fn visible_error(&self, field: FormField) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn set_text(&mut self, field: FormField, value: String) {
        if self.values.set_text(field, value) {
            self.revalidate();
        }
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.values.terms = accepted;
        self.revalidate();
    }

    /// Mark `field` as visited. Called when it loses focus.
    pub fn touch(&mut self, field: FormField) {
        self.touched.insert(field);
    }

    /// Start a submission. Every field is marked touched so that all
    /// failures become visible. Returns the body to send, or `None` when
    /// any rule fails and nothing may be sent.
    pub fn begin_submit(&mut self) -> Option<UserFormValues> {
        self.touched.extend(FormField::ALL);
        self.revalidate();
        if !self.errors.is_empty() {
            tracing::debug!(failing = self.errors.len(), "Submission blocked by validation");
            return None;
        }
        self.pending += 1;
        self.submit_error = None;
        self.phase = FormPhase::Submitting;
        Some(self.values.clone())
    }

    /// Apply the outcome of one submission started by `begin_submit`.
    ///
    /// On success the record becomes the status, is appended to the list,
    /// and the fields return to their initial values. On failure the
    /// values stay as they are and a message is kept for display.
    pub fn finish_submit(&mut self, result: Result<SubmittedUser, AppError>) {
        self.pending = self.pending.saturating_sub(1);
        match result {
            Ok(user) => {
                self.users.push(user.clone());
                self.status = Some(user);
                self.submit_error = None;
                self.reset();
                self.phase = self.settled_phase(FormPhase::Submitted);
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to submit user form");
                self.submit_error = Some(err.friendly_message());
                self.phase = self.settled_phase(FormPhase::SubmitFailed);
            }
        }
    }

    fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors = self.values.validate_fields();
        self.touched.clear();
    }

    fn revalidate(&mut self) {
        self.errors = self.values.validate_fields();
        if self.pending > 0 {
            return;
        }
        self.phase = if self.errors.is_empty() {
            FormPhase::Valid
        } else {
            FormPhase::Invalid
        };
    }

    /// Stay in `Submitting` while other requests are still out.
    fn settled_phase(&self, done: FormPhase) -> FormPhase {
        if self.pending > 0 {
            FormPhase::Submitting
        } else {
            done
        }
    }
}
