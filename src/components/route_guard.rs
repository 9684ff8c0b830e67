//! Route guard wrappers applying session-based redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Guarded` and `PublicOnly` wrap route views so every subtree applies
//! identical redirect behavior. Decisions come from `util::guard` as pure
//! functions of the session signal; this layer only navigates and renders.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Role, Session};
use crate::util::guard::{self, GuardDecision};

/// Wrapper for routes requiring authentication. An empty `allowed` slice
/// admits any signed-in role; a wrong-role visitor is sent to their own home,
/// never to login.
#[component]
pub fn Guarded(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let decision = Memo::new(move |_| guard::guard_protected(&session.get(), allowed));

    let navigate = use_navigate();
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decision.get() {
            navigate(path, NavigateOptions::default());
        }
    });

    view! {
        {move || match decision.get() {
            GuardDecision::Render => children().into_any(),
            GuardDecision::Redirect(_) => ().into_any(),
        }}
    }
}

/// Wrapper for routes meant only for signed-out visitors (landing, login).
/// Signed-in users are sent to their role's home instead.
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let decision = Memo::new(move |_| guard::guard_public(&session.get()));

    let navigate = use_navigate();
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decision.get() {
            navigate(path, NavigateOptions::default());
        }
    });

    view! {
        {move || match decision.get() {
            GuardDecision::Render => children().into_any(),
            GuardDecision::Redirect(_) => ().into_any(),
        }}
    }
}
