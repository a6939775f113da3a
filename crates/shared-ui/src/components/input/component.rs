use dioxus::prelude::*;

/// A text input bound to a form field.
///
/// `invalid` only marks the input (`aria-invalid`); the message itself is
/// rendered by the caller so it can be placed under the field.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] name: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: EventHandler<FocusEvent>,
    #[props(default)] placeholder: String,
    #[props(default = false)] invalid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let aria_invalid = if invalid { "true" } else { "false" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            input {
                r#type: "text",
                name: "{name}",
                value: value,
                placeholder: placeholder,
                "aria-invalid": aria_invalid,
                oninput: move |evt| on_input.call(evt),
                onblur: move |evt| on_blur.call(evt),
                ..merged,
            }
        }
    }
}
