use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{page_title, OnlyUnauthenticatedRoute, Page},
    router::Route,
    store::use_session,
};

#[component]
pub fn SignIn() -> Element {
    rsx!(
        OnlyUnauthenticatedRoute { SignInForm {} }
    )
}

#[component]
fn SignInForm() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let title = page_title("Sign in");

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let result = session.write().sign_in(&email.read(), &password.read());
        match result {
            Ok(()) => {
                error.set(None);
                navigator().replace(Route::Dashboard {});
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    rsx!(
        Title { "{title}" }
        Page { class: "sign-in",
            h1 { "Sign in" }
            form { onsubmit: submit,
                label { r#for: "sign-in-email", "Email" }
                input {
                    id: "sign-in-email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                label { r#for: "sign-in-password", "Password" }
                input {
                    id: "sign-in-password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button { class: "btn btn-primary", r#type: "submit", "Sign in" }
            }
            Link { to: Route::ResetPassword {}, "Forgot your password?" }
        }
    )
}
