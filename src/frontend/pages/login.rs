//! Login page component.

use crate::frontend::components::PortalLayout;
use crate::frontend::services::PortalState;
use crate::frontend::services::auth::{LoginForm, submit_credentials};
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let portal = use_context::<PortalState>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut form = use_signal(LoginForm::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !form.write().begin() {
            return;
        }

        let portal = portal.clone();
        let email_value = email();
        let password_value = password();

        // Owned by this scope; dropped with the page if it unmounts mid-flight
        spawn(async move {
            match submit_credentials(
                &portal.api,
                &portal.credentials,
                &email_value,
                &password_value,
            )
            .await
            {
                Ok(route) => {
                    nav.replace(route);
                }
                Err(err) => form.write().fail(&err),
            }
        });
    };

    let busy = form.read().busy;
    let error = form.read().error.clone();

    rsx! {
        PortalLayout {
            section {
                class: "login-card",
                h1 { "Sign in to your portal" }
                form {
                    class: "login-form",
                    onsubmit: on_submit,
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        autofocus: true,
                        disabled: busy,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        disabled: busy,
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    {error.map(|message| rsx! {
                        p { class: "error-message", "{message}" }
                    })}
                    button {
                        r#type: "submit",
                        disabled: busy,
                        if busy { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
