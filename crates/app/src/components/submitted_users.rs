use dioxus::prelude::*;
use shared_types::SubmittedUser;

/// Records returned by past submissions, oldest first.
#[component]
pub fn SubmittedUsersList(users: Vec<SubmittedUser>) -> Element {
    rsx! {
        div { class: "submitted-users",
            for user in users {
                ul { key: "{user.id}", class: "submitted-user",
                    li { "Name: {user.name}" }
                    li { "Email: {user.email}" }
                    li { "Accepted terms: {user.terms}" }
                }
            }
        }
    }
}
