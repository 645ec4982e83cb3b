//! Sign-in page.

use crate::frontend::route::Route;
use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

const LOGIN_CSS: &str = r#"
.login { display: flex; align-items: center; justify-content: center; min-height: 100vh; font-family: sans-serif; }
.login-form { display: flex; flex-direction: column; gap: 12px; width: 320px; }
.login-error { color: #c0392b; min-height: 1.5em; }
"#;

/// Accepts an access token issued by the backend and starts a session.
#[component]
pub fn LoginPage() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut token = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if busy() {
            return;
        }
        busy.set(true);
        let mut auth = auth;
        spawn(async move {
            match auth.login(token()).await {
                Ok(()) => {
                    error.set(None);
                    nav.replace(Route::WorkOne {});
                }
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
    };

    rsx! {
        style { "{LOGIN_CSS}" }
        main {
            class: "login",
            form {
                class: "login-form",
                onsubmit: on_submit,
                h1 { "Sign in to WorkDesk" }
                input {
                    r#type: "password",
                    value: "{token}",
                    placeholder: "Access token",
                    autofocus: true,
                    oninput: move |e| token.set(e.value()),
                }
                button {
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Sign in" }
                }
                div {
                    class: "login-error",
                    if let Some(message) = error() {
                        "{message}"
                    }
                }
            }
        }
    }
}
