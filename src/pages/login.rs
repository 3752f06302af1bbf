use leptos::prelude::*;

use crate::components::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <main class="login-page">
            <LoginForm />
        </main>
    }
}
