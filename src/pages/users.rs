//! Admin user management page hosting the account wizard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the user list and the two reference lists the wizard consumes
//! (departments, organizations), and re-fetches users after every successful
//! save.

use leptos::prelude::*;

use crate::components::user_form_modal::UserFormModal;
use crate::net::types::{Department, Organization, UserRecord};
use crate::state::session::Role;

#[component]
pub fn UsersPage() -> impl IntoView {
    let users = RwSignal::new(Vec::<UserRecord>::new());
    let departments = RwSignal::new(Vec::<Department>::new());
    let organizations = RwSignal::new(Vec::<Organization>::new());

    let show_form = RwSignal::new(false);
    let edit_user = RwSignal::new(None::<UserRecord>);

    let load_users = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_users().await {
                Some(list) => users.set(list),
                None => log::warn!("user list fetch failed"),
            }
        });
    };
    load_users();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Some(list) = crate::net::api::fetch_departments().await {
                departments.set(list);
            }
        });
        leptos::task::spawn_local(async move {
            if let Some(list) = crate::net::api::fetch_organizations().await {
                organizations.set(list);
            }
        });
    }

    let on_new = move |_| {
        edit_user.set(None);
        show_form.set(true);
    };
    let on_close = Callback::new(move |()| show_form.set(false));
    let on_saved = Callback::new(move |()| load_users());

    view! {
        <section class="users-page">
            <header class="users-page__header">
                <h2>"Users"</h2>
                <button class="btn btn--primary" on:click=on_new>"New User"</button>
            </header>

            <table class="users-table">
                <thead>
                    <tr>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || users.get() key=|u| u.id.clone() let:user>
                        {
                            let row = user.clone();
                            let role_name = Role::from_user_type_id(&user.user_type_id)
                                .map_or("—", Role::as_role_name);
                            let status = if user.is_active == "0" { "Inactive" } else { "Active" };
                            view! {
                                <tr>
                                    <td>{user.email.clone()}</td>
                                    <td>{role_name}</td>
                                    <td>{status}</td>
                                    <td>
                                        <button
                                            class="btn"
                                            on:click=move |_| {
                                                edit_user.set(Some(row.clone()));
                                                show_form.set(true);
                                            }
                                        >
                                            "Edit"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>

            <Show when=move || show_form.get()>
                {move || {
                    view! {
                        <UserFormModal
                            edit_user=edit_user.get()
                            departments=departments
                            organizations=organizations
                            on_close=on_close
                            on_saved=on_saved
                        />
                    }
                }}
            </Show>
        </section>
    }
}
