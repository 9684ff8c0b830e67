//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing__header">
                <h1>"UniTrack"</h1>
                <A href="/login">"Sign In"</A>
            </header>
            <section class="landing__hero">
                <h2>"Attendance, clearance, and events for your campus"</h2>
                <p>
                    "One portal for administrators, organization officers, and "
                    "students to track event attendance and obligations."
                </p>
                <A href="/login">"Get Started"</A>
            </section>
        </div>
    }
}
