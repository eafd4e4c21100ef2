use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{page_title, Page},
    router::Route,
    util::validate::is_valid_email,
};

#[component]
pub fn ResetPassword() -> Element {
    let mut email = use_signal(String::new);
    let mut sent = use_signal(|| false);
    let mut error = use_signal(|| None::<&'static str>);
    let title = page_title("Reset password");

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if is_valid_email(&email.read()) {
            error.set(None);
            sent.set(true);
        } else {
            error.set(Some("Please enter a valid email address"));
        }
    };

    rsx!(
        Title { "{title}" }
        Page { class: "reset-password",
            h1 { "Reset password" }
            if sent() {
                p { "If an account exists for {email}, you will receive a link to reset your password." }
                Link { to: Route::SignIn {}, class: "btn", "Back to sign in" }
            } else {
                form { onsubmit: submit,
                    label { r#for: "reset-email", "Email" }
                    input {
                        id: "reset-email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    if let Some(message) = error() {
                        p { class: "form-error", "{message}" }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Send reset link" }
                }
            }
        }
    )
}
