//! Portal layout shell with role navigation and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guarded subtree renders its pages inside one of these shells; the
//! officer shell re-exposes the member-facing views under `/officer/...` so
//! officers keep their own layout for member functionality.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::{BrowserSessionStore, Session, SessionStore};
use crate::util::guard;

/// Sidebar shell wrapping a role's pages.
///
/// `links` is the role's nav table, declared alongside the route table in
/// `app`. Logout clears all persisted session keys at once and returns to the
/// login screen.
#[component]
pub fn PortalShell(
    heading: &'static str,
    links: &'static [(&'static str, &'static str)],
    children: Children,
) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let navigate = use_navigate();
    let on_logout = move |_| {
        BrowserSessionStore.clear();
        session.set(Session::default());
        navigate(guard::LOGIN_PATH, NavigateOptions::default());
    };

    let email = move || {
        session
            .get()
            .user
            .map_or_else(|| "—".to_owned(), |u| u.email)
    };

    view! {
        <div class="portal">
            <aside class="portal__sidebar">
                <h1 class="portal__brand">"UniTrack"</h1>
                <p class="portal__heading">{heading}</p>
                <nav class="portal__nav">
                    {links
                        .iter()
                        .map(|(path, label)| view! { <A href=*path>{*label}</A> })
                        .collect_view()}
                </nav>
                <div class="portal__session">
                    <span class="portal__email">{email}</span>
                    <button class="btn" on:click=on_logout>"Log out"</button>
                </div>
            </aside>
            <main class="portal__content">{children()}</main>
        </div>
    }
}
