pub mod submitted_users;
pub mod user_form;

pub use submitted_users::SubmittedUsersList;
pub use user_form::{FieldError, SubmitError, UserFormContainer, UserFormView};
