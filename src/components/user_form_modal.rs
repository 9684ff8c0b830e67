//! Account creation/edit modal over the wizard state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! All step sequencing and invariants live in `state::wizard`; this component
//! renders the current step, wires form events into wizard transitions, and
//! performs the save call. Failures keep the modal open with values intact;
//! a response arriving after close is dropped.

#[cfg(test)]
#[path = "user_form_modal_test.rs"]
mod user_form_modal_test;

use leptos::prelude::*;

use crate::net::types::{Department, Organization, UserRecord};
use crate::state::session::Role;
use crate::state::wizard::{OrgRole, StepKind, WizardState};

/// Role options for the account step, in wire order.
const USER_TYPE_OPTIONS: &[(&str, &str)] = &[("1", "Admin"), ("2", "Officer"), ("3", "Student")];

/// Stepper label for a step kind.
fn step_label(step: StepKind) -> &'static str {
    match step {
        StepKind::Account => "Account",
        StepKind::StudentProfile => "Student Profile",
        StepKind::Organizations => "Organizations",
    }
}

/// Display name for an organization id, falling back to the raw id.
fn org_name(organizations: &[Organization], id: &str) -> String {
    organizations
        .iter()
        .find(|o| o.id == id)
        .map_or_else(|| id.to_owned(), |o| o.name.clone())
}

/// Multi-step user form modal. `edit_user` switches the wizard into edit
/// mode; reference lists are fetched by the hosting page and passed in.
#[component]
pub fn UserFormModal(
    edit_user: Option<UserRecord>,
    departments: RwSignal<Vec<Department>>,
    organizations: RwSignal<Vec<Organization>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let wizard = RwSignal::new(
        edit_user
            .as_ref()
            .map_or_else(WizardState::create, WizardState::edit),
    );

    // Add-row draft for the organizations step.
    let draft_org = RwSignal::new(String::new());
    let draft_role = RwSignal::new(OrgRole::default());
    let draft_position = RwSignal::new(String::new());

    // A save finishing after the modal unmounts must not touch state.
    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = wizard.get_untracked();
        if snapshot.saving || !snapshot.can_submit() {
            return;
        }
        wizard.update(|w| {
            w.saving = true;
            w.error = None;
        });

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let user_id = snapshot.edit_user_id().map(str::to_owned);
                let result =
                    crate::net::api::save_user(user_id.as_deref(), &snapshot.payload()).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(()) => {
                        on_saved.run(());
                        on_close.run(());
                    }
                    Err(message) => wizard.update(|w| {
                        w.saving = false;
                        w.error = Some(message);
                    }),
                }
            });
        }
    };

    let stepper = move || {
        let w = wizard.get();
        let clickable = w.is_edit();
        w.steps()
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let active = i == w.step_index();
                view! {
                    <button
                        type="button"
                        class="stepper__step"
                        class=("stepper__step--active", active)
                        disabled=!clickable
                        on:click=move |_| wizard.update(|w| w.jump(i))
                    >
                        {format!("{}. {}", i + 1, step_label(*step))}
                    </button>
                }
            })
            .collect_view()
    };

    let has_previous = move || wizard.get().has_previous_step();
    let on_last_step = move || wizard.get().is_last_step();

    let step_body = move || match wizard.get().current_step() {
        StepKind::Account => account_step(wizard).into_any(),
        StepKind::StudentProfile => profile_step(wizard, departments).into_any(),
        StepKind::Organizations => {
            organizations_step(wizard, organizations, draft_org, draft_role, draft_position)
                .into_any()
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--user-form" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if wizard.get().is_edit() { "Edit User" } else { "New User" }}</h2>

                <div class="stepper">{stepper}</div>

                <Show when=move || wizard.get().error.is_some()>
                    <p class="dialog__error">{move || wizard.get().error.unwrap_or_default()}</p>
                </Show>

                <form class="dialog__form" on:submit=on_submit>
                    {step_body}

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <Show when=has_previous>
                            <button
                                type="button"
                                class="btn"
                                on:click=move |_| wizard.update(WizardState::back)
                            >
                                "Back"
                            </button>
                        </Show>
                        <Show when=move || !on_last_step()>
                            <button
                                type="button"
                                class="btn btn--primary"
                                on:click=move |_| wizard.update(WizardState::next)
                            >
                                "Next"
                            </button>
                        </Show>
                        <Show when=on_last_step>
                            <button
                                type="submit"
                                class="btn btn--primary"
                                disabled=move || {
                                    let w = wizard.get();
                                    w.saving || !w.can_submit()
                                }
                            >
                                {move || if wizard.get().saving { "Saving..." } else { "Save" }}
                            </button>
                        </Show>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn account_step(wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>"Email"</span>
            <input
                type="email"
                required
                prop:value=move || wizard.get().form.email
                on:input=move |ev| wizard.update(|w| w.form.email = event_target_value(&ev))
            />
        </label>
        <label class="form-field">
            <span>"Password"</span>
            <input
                type="password"
                placeholder=move || {
                    if wizard.get().is_edit() { "Leave blank to keep current" } else { "" }
                }
                prop:value=move || wizard.get().form.password
                on:input=move |ev| wizard.update(|w| w.form.password = event_target_value(&ev))
            />
        </label>
        <label class="form-field">
            <span>"Role"</span>
            <select
                prop:value=move || {
                    wizard.get().form.role.map_or("", Role::as_user_type_id).to_owned()
                }
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.set_role(Role::from_user_type_id(&value)));
                }
            >
                <option value="">"Select a role"</option>
                {USER_TYPE_OPTIONS
                    .iter()
                    .map(|(id, label)| view! { <option value=*id>{*label}</option> })
                    .collect_view()}
            </select>
        </label>
        <label class="form-field">
            <span>"Status"</span>
            <select
                prop:value=move || {
                    if wizard.get().form.active { "1".to_owned() } else { "0".to_owned() }
                }
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.form.active = value == "1");
                }
            >
                <option value="1">"Active"</option>
                <option value="0">"Inactive"</option>
            </select>
        </label>
    }
}

fn profile_step(
    wizard: RwSignal<WizardState>,
    departments: RwSignal<Vec<Department>>,
) -> impl IntoView {
    let course_options = move || {
        let w = wizard.get();
        w.course_options(&departments.get()).to_vec()
    };

    view! {
        <label class="form-field">
            <span>"Student Number"</span>
            <input
                type="text"
                required
                prop:value=move || wizard.get().form.profile.student_number
                on:input=move |ev| {
                    wizard.update(|w| w.form.profile.student_number = event_target_value(&ev));
                }
            />
        </label>
        <label class="form-field">
            <span>"First Name"</span>
            <input
                type="text"
                required
                prop:value=move || wizard.get().form.profile.first_name
                on:input=move |ev| {
                    wizard.update(|w| w.form.profile.first_name = event_target_value(&ev));
                }
            />
        </label>
        <label class="form-field">
            <span>"Middle Name"</span>
            <input
                type="text"
                prop:value=move || wizard.get().form.profile.middle_name
                on:input=move |ev| {
                    wizard.update(|w| w.form.profile.middle_name = event_target_value(&ev));
                }
            />
        </label>
        <label class="form-field">
            <span>"Last Name"</span>
            <input
                type="text"
                required
                prop:value=move || wizard.get().form.profile.last_name
                on:input=move |ev| {
                    wizard.update(|w| w.form.profile.last_name = event_target_value(&ev));
                }
            />
        </label>
        <label class="form-field">
            <span>"Department"</span>
            <select
                prop:value=move || wizard.get().form.profile.department_id
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.set_department(&value));
                }
            >
                <option value="">"Select a department"</option>
                {move || {
                    departments
                        .get()
                        .iter()
                        .map(|d| {
                            view! {
                                <option value=d.id.clone()>
                                    {format!("{} ({})", d.name, d.code)}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
        <label class="form-field">
            <span>"Course"</span>
            <select
                prop:value=move || wizard.get().form.profile.course
                on:change=move |ev| {
                    wizard.update(|w| w.form.profile.course = event_target_value(&ev));
                }
            >
                <option value="">"Select a course"</option>
                {move || {
                    course_options()
                        .into_iter()
                        .map(|course| view! { <option value=course>{course}</option> })
                        .collect_view()
                }}
            </select>
        </label>
        <label class="form-field">
            <span>"Year Level"</span>
            <select
                prop:value=move || wizard.get().form.profile.year_level
                on:change=move |ev| {
                    wizard.update(|w| w.form.profile.year_level = event_target_value(&ev));
                }
            >
                <option value="">"Select a year level"</option>
                {["1", "2", "3", "4", "5"]
                    .iter()
                    .map(|year| view! { <option value=*year>{*year}</option> })
                    .collect_view()}
            </select>
        </label>
        <label class="form-field">
            <span>"Contact Number"</span>
            <input
                type="tel"
                prop:value=move || wizard.get().form.profile.contact_number
                on:input=move |ev| {
                    wizard.update(|w| w.form.profile.contact_number = event_target_value(&ev));
                }
            />
        </label>
    }
}

fn organizations_step(
    wizard: RwSignal<WizardState>,
    organizations: RwSignal<Vec<Organization>>,
    draft_org: RwSignal<String>,
    draft_role: RwSignal<OrgRole>,
    draft_position: RwSignal<String>,
) -> impl IntoView {
    // Already-assigned organizations never appear as candidates, so duplicate
    // rows are impossible from this UI.
    let candidates = move || {
        let w = wizard.get();
        w.selectable_organizations(&organizations.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };
    let is_officer = move || wizard.get().form.role == Some(Role::Officer);

    let on_add = move |_| {
        let org = draft_org.get_untracked();
        let role = draft_role.get_untracked();
        let position = draft_position.get_untracked();
        let added = wizard
            .try_update(|w| w.add_membership(&org, role, &position))
            .unwrap_or(false);
        if added {
            draft_org.set(String::new());
            draft_role.set(OrgRole::default());
            draft_position.set(String::new());
        }
    };

    view! {
        <ul class="org-list">
            {move || {
                let orgs = organizations.get();
                wizard
                    .get()
                    .form
                    .org_memberships
                    .iter()
                    .enumerate()
                    .map(|(i, m)| {
                        let name = org_name(&orgs, &m.organization_id);
                        let role_text = m.org_role.map_or("member", OrgRole::as_wire);
                        let position = m.position.clone();
                        view! {
                            <li class="org-list__row">
                                <span class="org-list__name">{name}</span>
                                <span class="org-list__role">{role_text}</span>
                                <span class="org-list__position">{position}</span>
                                <button
                                    type="button"
                                    class="btn"
                                    on:click=move |_| wizard.update(|w| w.remove_membership(i))
                                >
                                    "Remove"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>

        <div class="org-add">
            <select
                prop:value=move || draft_org.get()
                on:change=move |ev| draft_org.set(event_target_value(&ev))
            >
                <option value="">"Select an organization"</option>
                {move || {
                    candidates()
                        .into_iter()
                        .map(|o| view! { <option value=o.id.clone()>{o.name.clone()}</option> })
                        .collect_view()
                }}
            </select>
            <Show when=is_officer>
                <select
                    prop:value=move || draft_role.get().as_wire().to_owned()
                    on:change=move |ev| {
                        draft_role
                            .set(OrgRole::from_wire(&event_target_value(&ev)).unwrap_or_default());
                    }
                >
                    <option value="officer">"Officer"</option>
                    <option value="adviser">"Adviser"</option>
                </select>
            </Show>
            <input
                type="text"
                placeholder="Position (optional)"
                prop:value=move || draft_position.get()
                on:input=move |ev| draft_position.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="btn"
                disabled=move || draft_org.get().is_empty()
                on:click=on_add
            >
                "Add"
            </button>
        </div>
    }
}
