//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! Every guarded subtree declares its allowed-role set and nav table here as
//! configuration; the guard components and `util::guard` supply the logic.
//! The member-facing views are wired into both the student and the officer
//! subtree on purpose: officers are also members and keep their own shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::route_guard::{Guarded, PublicOnly};
use crate::components::shell::PortalShell;
use crate::pages::dashboard::{AdminDashboardPage, OfficerDashboardPage, StudentDashboardPage};
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::member::{
    AttendancePage, CheckInPage, ClearancePage, DocumentsPage, EventsPage, ObligationsPage,
};
use crate::pages::users::UsersPage;
use crate::state::session::{BrowserSessionStore, Role, SessionStore};

/// Allowed roles per guarded subtree.
pub const ADMIN_ROUTES: &[Role] = &[Role::Admin];
pub const OFFICER_ROUTES: &[Role] = &[Role::Officer];
/// The student subtree explicitly admits officers as members.
pub const MEMBER_ROUTES: &[Role] = &[Role::Student, Role::Officer];

const ADMIN_NAV: &[(&str, &str)] = &[
    ("/admin/dashboard", "Dashboard"),
    ("/admin/users", "Users"),
];

const OFFICER_NAV: &[(&str, &str)] = &[
    ("/officer/dashboard", "Dashboard"),
    ("/officer/check-in", "Check-In"),
    ("/officer/events", "Events"),
    ("/officer/attendance", "Attendance"),
    ("/officer/clearance", "Clearance"),
    ("/officer/documents", "Documents"),
    ("/officer/obligations", "Obligations"),
];

const STUDENT_NAV: &[(&str, &str)] = &[
    ("/student/dashboard", "Dashboard"),
    ("/student/check-in", "Check-In"),
    ("/student/events", "Events"),
    ("/student/attendance", "Attendance"),
    ("/student/clearance", "Clearance"),
    ("/student/documents", "Documents"),
    ("/student/obligations", "Obligations"),
];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Loads the persisted session once at startup and provides it as the single
/// session signal; login and logout write both the store and the signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(BrowserSessionStore.load());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/unitrack.css"/>
        <Title text="UniTrack"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=|| view! {
                    <PublicOnly><LandingPage/></PublicOnly>
                }/>
                <Route path=StaticSegment("login") view=|| view! {
                    <PublicOnly><LoginPage/></PublicOnly>
                }/>

                // Admin subtree.
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=|| view! {
                    <Guarded allowed=ADMIN_ROUTES>
                        <PortalShell heading="Admin" links=ADMIN_NAV>
                            <AdminDashboardPage/>
                        </PortalShell>
                    </Guarded>
                }/>
                <Route path=(StaticSegment("admin"), StaticSegment("users")) view=|| view! {
                    <Guarded allowed=ADMIN_ROUTES>
                        <PortalShell heading="Admin" links=ADMIN_NAV>
                            <UsersPage/>
                        </PortalShell>
                    </Guarded>
                }/>

                // Officer subtree, including the member views officers reach
                // without leaving their own shell.
                <Route path=(StaticSegment("officer"), StaticSegment("dashboard")) view=|| view! {
                    <Guarded allowed=OFFICER_ROUTES>
                        <PortalShell heading="Officer" links=OFFICER_NAV>
                            <OfficerDashboardPage/>
                        </PortalShell>
                    </Guarded>
                }/>
                <Route path=(StaticSegment("officer"), StaticSegment("check-in")) view=|| view! {
                    <Guarded allowed=OFFICER_ROUTES>
                        <PortalShell heading="Officer" links=OFFICER_NAV>
                            <CheckInPage/>
                        </PortalShell>
                    </Guarded>
                }/>
                <Route path=(StaticSegment("officer"), StaticSegment("events")) view=|| view! {
                    <Guarded allowed=OFFICER_ROUTES>
                        <PortalShell heading="Officer" links=OFFICER_NAV>
                            <EventsPage/>
                        </PortalShell>
                    </Guarded>
                }/>
                <Route path=(StaticSegment("officer"), StaticSegment("attendance")) view=|| view! {
                    <Guarded allowed=OFFICER_ROUTES>
                        <PortalShell heading="Officer" links=OFFICER_NAV>
                            <AttendancePage/>
                        </PortalShell>
                    </Guarded>
                }/>
                <Route path=(StaticSegment("officer"), StaticSegment("clearance")) view=|| view! {
                    <Guarded allowed=OFFICER_ROUTES>
                        <PortalShell heading="Officer" links=OFFICER_NAV>
                            <ClearancePage/>
                        </PortalShell>
                    </Guarded>
                }/>
                <Route path=(StaticSegment("officer"), StaticSegment("documents")) view=|| view! {
                    <Guarded allowed=OFFICER_ROUTES>
                        <PortalShell heading="Officer" links=OFFICER_NAV>
                            <DocumentsPage/>
                        </PortalShell>
                    </Guarded>
                }/>
                <Route path=(StaticSegment("officer"), StaticSegment("obligations")) view=|| view! {
                    <Guarded allowed=OFFICER_ROUTES>
                        <PortalShell heading="Officer" links=OFFICER_NAV>
                            <ObligationsPage/>
                        </PortalShell>
                    </Guarded>
                }/>

                // Student subtree.
                <Route path=(StaticSegment("student"), StaticSegment("dashboard")) view=|| view! {
                    <Guarded allowed=MEMBER_ROUTES>
                        <PortalShell heading="Student" links=STUDENT_NAV>
                            <StudentDashboardPage/>
                        </PortalShell>
                    </Guarded>
                }/>
                <Route path=(StaticSegment("student"), StaticSegment("check-in")) view=|| view! {
                    <Guarded allowed=MEMBER_ROUTES>
                        <PortalShell heading="Student" links=STUDENT_NAV>
                            <CheckInPage/>
                        </PortalShell>
                    </Guarded>
                }/>
                <Route path=(StaticSegment("student"), StaticSegment("events")) view=|| view! {
                    <Guarded allowed=MEMBER_ROUTES>
                        <PortalShell heading="Student" links=STUDENT_NAV>
                            <EventsPage/>
                        </PortalShell>
                    </Guarded>
                }/>
                <Route path=(StaticSegment("student"), StaticSegment("attendance")) view=|| view! {
                    <Guarded allowed=MEMBER_ROUTES>
                        <PortalShell heading="Student" links=STUDENT_NAV>
                            <AttendancePage/>
                        </PortalShell>
                    </Guarded>
                }/>
                <Route path=(StaticSegment("student"), StaticSegment("clearance")) view=|| view! {
                    <Guarded allowed=MEMBER_ROUTES>
                        <PortalShell heading="Student" links=STUDENT_NAV>
                            <ClearancePage/>
                        </PortalShell>
                    </Guarded>
                }/>
                <Route path=(StaticSegment("student"), StaticSegment("documents")) view=|| view! {
                    <Guarded allowed=MEMBER_ROUTES>
                        <PortalShell heading="Student" links=STUDENT_NAV>
                            <DocumentsPage/>
                        </PortalShell>
                    </Guarded>
                }/>
                <Route path=(StaticSegment("student"), StaticSegment("obligations")) view=|| view! {
                    <Guarded allowed=MEMBER_ROUTES>
                        <PortalShell heading="Student" links=STUDENT_NAV>
                            <ObligationsPage/>
                        </PortalShell>
                    </Guarded>
                }/>
            </Routes>
        </Router>
    }
}
