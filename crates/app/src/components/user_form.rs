use client::UsersClient;
use dioxus::prelude::*;
use shared_types::{FormField, InitialValues};
use shared_ui::{Button, ButtonType, Card, CardContent, CardHeader, CardTitle, Form, Input};

use super::SubmittedUsersList;
use crate::form_state::UserFormState;

/// Owns the form state and performs submissions; renders `UserFormView`.
///
/// Each submission runs as a task scoped to this component, so a pending
/// request is dropped if the form unmounts.
#[component]
pub fn UserFormContainer(#[props(default)] initial: InitialValues) -> Element {
    let client = use_context::<UsersClient>();
    let mut form = use_signal(|| UserFormState::new(&initial));

    let handle_submit = move |_: ()| {
        let Some(values) = form.write().begin_submit() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.create_user(&values).await;
            form.write().finish_submit(result);
        });
    };

    rsx! {
        UserFormView { form, on_submit: handle_submit }
    }
}

/// The four inputs, their errors, and the list of submitted users.
#[component]
pub fn UserFormView(mut form: Signal<UserFormState>, on_submit: EventHandler<()>) -> Element {
    let terms = form.read().values().terms;
    let terms_error = form.read().visible_error(FormField::Terms).map(str::to_string);
    let submit_error = form.read().submit_error().map(str::to_string);
    let users = form.read().users().to_vec();
    let phase = form.read().phase().as_str();
    let last_id = form
        .read()
        .status()
        .map(|user| user.id.to_string())
        .unwrap_or_default();
    let submitting = form.read().pending() > 0;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./user_form.css") }

        div { class: "user-form", "data-phase": phase, "data-last-id": "{last_id}",
            Card {
                CardHeader {
                    CardTitle { "User Form" }
                }
                CardContent {
                    Form { onsubmit: move |_| on_submit.call(()),
                        TextField { form, field: FormField::Name, placeholder: "Name" }
                        TextField { form, field: FormField::Email, placeholder: "Email" }
                        TextField { form, field: FormField::Password, placeholder: "Password" }

                        label { class: "checkbox-container",
                            "Terms of Service"
                            input {
                                r#type: "checkbox",
                                name: FormField::Terms.as_str(),
                                checked: terms,
                                onchange: move |evt: FormEvent| form.write().set_terms(evt.checked()),
                                onblur: move |_| form.write().touch(FormField::Terms),
                            }
                            span { class: "checkmark" }
                            FieldError { message: terms_error }
                        }

                        SubmitError { message: submit_error }

                        Button { button_type: ButtonType::Submit,
                            if submitting { "Submitting..." } else { "Submit!" }
                        }
                    }
                }
            }

            SubmittedUsersList { users }
        }
    }
}

#[component]
fn TextField(mut form: Signal<UserFormState>, field: FormField, placeholder: &'static str) -> Element {
    let value = form
        .read()
        .values()
        .text(field)
        .unwrap_or_default()
        .to_string();
    let error = form.read().visible_error(field).map(str::to_string);

    rsx! {
        div { class: "form-field",
            Input {
                name: field.as_str().to_string(),
                value,
                placeholder: placeholder.to_string(),
                invalid: error.is_some(),
                on_input: move |e: FormEvent| form.write().set_text(field, e.value()),
                on_blur: move |_| form.write().touch(field),
            }
            FieldError { message: error }
        }
    }
}

/// Inline message under a field; renders nothing when `message` is `None`.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(msg) = message {
            p { class: "error", "{msg}" }
        }
    }
}

/// Banner for a failed submission.
#[component]
pub fn SubmitError(message: Option<String>) -> Element {
    rsx! {
        if let Some(msg) = message {
            div { class: "submit-error", role: "alert", "{msg}" }
        }
    }
}
