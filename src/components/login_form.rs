//! Login Form Component
//!
//! Mock sign-in against the configured demo credentials.

use leptos::prelude::*;

use dashboard_core::{Credentials, LoginError, LoginField, Route};

use crate::context::{use_config, use_navigator, use_session, use_toasts};

#[component]
pub fn LoginForm() -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let navigator = use_navigator();
    let toasts = use_toasts();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    // Length-check failure, shown under its field
    let (invalid, set_invalid) = signal::<Option<(LoginField, String)>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(username.get(), password.get());
        set_invalid.set(None);

        match session.login(&credentials) {
            Ok(()) => {
                toasts.show("Logged in successfully");
                navigator.navigate(Route::Overview);
            }
            Err(LoginError::Invalid { field, reason }) => {
                set_invalid.set(Some((field, format!("{} {}", field, reason))));
            }
            Err(e @ LoginError::Mismatch) => {
                log::info!("login rejected for {}", credentials.username);
                toasts.show(e.to_string());
            }
        }
    };

    let message_for = move |field: LoginField| {
        move || {
            invalid.get().and_then(|(f, message)| (f == field).then(|| view! { <p class="field-error">{message}</p> }))
        }
    };

    view! {
        <div class="card login-card">
            <h1>"Login"</h1>
            <p class="muted">"Sign in to your account to continue"</p>
            <form class="login-form" on:submit=submit>
                <label>
                    "Username"
                    <input
                        type="text"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                {message_for(LoginField::Username)}
                <label>
                    "Password"
                    <div class="password-row">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="btn-ghost"
                            aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </label>
                {message_for(LoginField::Password)}
                <button type="submit" class="btn btn-primary">"Sign in"</button>
            </form>
            <div class="demo-credentials">
                <h3>"Demo Credentials"</h3>
                <div>"Username: " <code>{config.demo_credentials.username.clone()}</code></div>
                <div>"Password: " <code>{config.demo_credentials.password.clone()}</code></div>
            </div>
        </div>
    }
}
