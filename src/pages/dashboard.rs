//! Role home dashboards.
//!
//! These are the canonical redirect targets for each role. Content is thin
//! chrome; the interesting work happens in the guarded routing that lands
//! users here.

use leptos::prelude::*;

use crate::state::session::Session;

fn greeting(session: &Session) -> String {
    session
        .user
        .as_ref()
        .map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.email))
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    view! {
        <section class="dashboard">
            <h2>"Admin Dashboard"</h2>
            <p>{move || greeting(&session.get())}</p>
            <p>"Manage accounts, departments, organizations, and events."</p>
        </section>
    }
}

#[component]
pub fn OfficerDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    view! {
        <section class="dashboard">
            <h2>"Officer Dashboard"</h2>
            <p>{move || greeting(&session.get())}</p>
            <p>"Run your organization's events and review member attendance."</p>
        </section>
    }
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    view! {
        <section class="dashboard">
            <h2>"Student Dashboard"</h2>
            <p>{move || greeting(&session.get())}</p>
            <p>"Check in to events and keep your clearance up to date."</p>
        </section>
    }
}
