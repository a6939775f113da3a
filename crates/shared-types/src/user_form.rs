use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use validator::{Validate, ValidationError, ValidationErrors};

pub const NAME_REQUIRED: &str = "Your name please";
pub const EMAIL_REQUIRED: &str = "Your email please";
pub const PASSWORD_REQUIRED: &str = "You must select a password";
pub const TERMS_REQUIRED: &str = "Must Accept Terms and Conditions";

/// One of the four inputs on the user form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Password,
    Terms,
}

impl FormField {
    /// All fields in render order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Password,
        FormField::Terms,
    ];

    /// Input `name` attribute and JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::Terms => "terms",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional overrides supplied when the form mounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitialValues {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub terms: Option<bool>,
}

/// Current contents of the form. Serializes to the request body sent to
/// the users endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserFormValues {
    #[validate(length(min = 1, message = "Your name please"))]
    pub name: String,
    #[validate(length(min = 1, message = "Your email please"))]
    pub email: String,
    #[validate(length(min = 1, message = "You must select a password"))]
    pub password: String,
    #[validate(custom(function = "validate_terms_accepted"))]
    pub terms: bool,
}

fn validate_terms_accepted(terms: &bool) -> Result<(), ValidationError> {
    if *terms {
        return Ok(());
    }
    let mut err = ValidationError::new("terms_not_accepted");
    err.message = Some(Cow::Borrowed(TERMS_REQUIRED));
    Err(err)
}

impl UserFormValues {
    /// Take each override when present, otherwise the field's default.
    pub fn from_initial(initial: &InitialValues) -> Self {
        Self {
            name: initial.name.clone().unwrap_or_default(),
            email: initial.email.clone().unwrap_or_default(),
            password: initial.password.clone().unwrap_or_default(),
            terms: initial.terms.unwrap_or(false),
        }
    }

    /// Run the rule set and collect one message per failing field.
    pub fn validate_fields(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from(errors),
        }
    }

    /// Text value of a text field. `Terms` yields `None`.
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Email => Some(&self.email),
            FormField::Password => Some(&self.password),
            FormField::Terms => None,
        }
    }

    /// Set a text field. Returns false for `Terms`, which is not a text field.
    pub fn set_text(&mut self, field: FormField, value: String) -> bool {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::Terms => return false,
        }
        true
    }
}

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(HashMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(field.as_str()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                fields.insert(field.to_string(), msg);
            }
        }
        FieldErrors(fields)
    }
}

/// Server-assigned identifier. The public endpoint answers with a string,
/// other deployments with a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

/// A user record returned by the endpoint after a successful submission.
///
/// The endpoint echoes the password back; it is dropped on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedUser {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub terms: bool,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
