//! Member-facing leaf views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every view here is reachable from two path prefixes: `/student/...` inside
//! the student shell, and `/officer/...` inside the officer shell, because
//! officers are also members. The route table wires the same component into
//! both subtrees.

use leptos::prelude::*;

#[component]
pub fn CheckInPage() -> impl IntoView {
    view! {
        <section class="member-view">
            <h2>"Event Check-In"</h2>
            <p>"Present your QR code at the event desk to record attendance."</p>
        </section>
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <section class="member-view">
            <h2>"Events"</h2>
            <p>"Upcoming and past events for your organizations."</p>
        </section>
    }
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <section class="member-view">
            <h2>"My Attendance"</h2>
            <p>"Your attendance record per event."</p>
        </section>
    }
}

#[component]
pub fn ClearancePage() -> impl IntoView {
    view! {
        <section class="member-view">
            <h2>"Clearance"</h2>
            <p>"Clearance status across your organizations."</p>
        </section>
    }
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    view! {
        <section class="member-view">
            <h2>"Documents"</h2>
            <p>"Submitted requirements and their review status."</p>
        </section>
    }
}

#[component]
pub fn ObligationsPage() -> impl IntoView {
    view! {
        <section class="member-view">
            <h2>"Obligations"</h2>
            <p>"Outstanding fees and sanctions, if any."</p>
        </section>
    }
}
