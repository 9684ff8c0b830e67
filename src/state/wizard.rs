//! Multi-step account wizard state machine.
//!
//! DESIGN
//! ======
//! The wizard owns step sequencing, field state, and the organization
//! membership list for the account form. It is deliberately free of browser
//! types so every transition rule is unit-testable; `UserFormModal` is a thin
//! view over this state. The step sequence is a single function of the
//! selected role, and both the stepper UI and validation are driven off it.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use crate::net::types::{Department, OrgMembershipWire, Organization, SaveUserRequest, UserRecord};
use crate::state::courses;
use crate::state::session::Role;

/// Kind of a wizard step, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// Credentials, role, and active flag.
    Account,
    /// Student-profile fields.
    StudentProfile,
    /// Organization membership list.
    Organizations,
}

/// Role attached to one membership row. Only officer accounts carry it;
/// students are implicit members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrgRole {
    #[default]
    Officer,
    Adviser,
}

impl OrgRole {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Officer => "officer",
            Self::Adviser => "adviser",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "officer" => Some(Self::Officer),
            "adviser" => Some(Self::Adviser),
            _ => None,
        }
    }
}

/// One organization assignment collected on the organizations step.
/// Insertion order is display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrgMembership {
    pub organization_id: String,
    pub org_role: Option<OrgRole>,
    /// Free text, optional, independent of role.
    pub position: String,
}

/// Student-profile fields collected on the profile step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentProfile {
    pub student_number: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub department_id: String,
    pub year_level: String,
    pub contact_number: String,
    pub course: String,
}

/// All fields collected by the wizard, rebuilt on every modal open.
#[derive(Clone, Debug, PartialEq)]
pub struct WizardForm {
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub active: bool,
    pub profile: StudentProfile,
    pub org_memberships: Vec<OrgMembership>,
}

impl Default for WizardForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            role: None,
            active: true,
            profile: StudentProfile::default(),
            org_memberships: Vec::new(),
        }
    }
}

/// Whether the wizard creates a new account or edits an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    Edit { user_id: String },
}

/// Step sequence for a selected role. Total for every input: admin and
/// no-selection get the single account step; officers and students get the
/// full three-step shape.
pub fn steps(role: Option<Role>) -> &'static [StepKind] {
    match role {
        Some(Role::Officer | Role::Student) => {
            &[StepKind::Account, StepKind::StudentProfile, StepKind::Organizations]
        }
        _ => &[StepKind::Account],
    }
}

/// The wizard controller: current step, form, and in-flight save state.
#[derive(Clone, Debug, PartialEq)]
pub struct WizardState {
    pub mode: WizardMode,
    pub form: WizardForm,
    pub saving: bool,
    pub error: Option<String>,
    step: usize,
}

impl WizardState {
    /// Fresh wizard for creating an account; starts on the account step.
    pub fn create() -> Self {
        Self {
            mode: WizardMode::Create,
            form: WizardForm::default(),
            saving: false,
            error: None,
            step: 0,
        }
    }

    /// Wizard populated from an existing record.
    ///
    /// When the role has an organization step the wizard lands there
    /// directly, the most common target when editing; otherwise step 1.
    pub fn edit(user: &UserRecord) -> Self {
        let form = WizardForm {
            email: user.email.clone(),
            password: String::new(),
            role: Role::from_user_type_id(&user.user_type_id),
            active: user.is_active != "0",
            profile: StudentProfile {
                student_number: user.student_number.clone(),
                first_name: user.first_name.clone(),
                middle_name: user.middle_name.clone(),
                last_name: user.last_name.clone(),
                department_id: user.department_id.clone(),
                year_level: user.year_level.clone(),
                contact_number: user.contact_number.clone(),
                course: user.course.clone(),
            },
            org_memberships: user
                .org_memberships
                .iter()
                .map(|m| OrgMembership {
                    organization_id: m.organization_id.clone(),
                    org_role: m.org_role.as_deref().and_then(OrgRole::from_wire),
                    position: m.position.clone(),
                })
                .collect(),
        };
        let step = steps(form.role).len() - 1;
        Self {
            mode: WizardMode::Edit {
                user_id: user.id.clone(),
            },
            form,
            saving: false,
            error: None,
            step,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, WizardMode::Edit { .. })
    }

    /// Id of the record being edited, if any.
    pub fn edit_user_id(&self) -> Option<&str> {
        match &self.mode {
            WizardMode::Create => None,
            WizardMode::Edit { user_id } => Some(user_id),
        }
    }

    pub fn steps(&self) -> &'static [StepKind] {
        steps(self.form.role)
    }

    pub fn total_steps(&self) -> usize {
        self.steps().len()
    }

    /// Zero-based index of the current step.
    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn current_step(&self) -> StepKind {
        self.steps()[self.step]
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 == self.total_steps()
    }

    /// Whether a Back action has anywhere to go.
    pub fn has_previous_step(&self) -> bool {
        self.step > 0
    }

    /// Advance one step. No-op unless the current step's required fields are
    /// complete; already-last stays put.
    pub fn next(&mut self) {
        if !self.step_complete(self.current_step()) {
            return;
        }
        self.step = (self.step + 1).min(self.total_steps() - 1);
    }

    /// Step back one step, stopping at the first.
    pub fn back(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// Jump directly to a step by index. Edit mode only, no validation gate,
    /// so an editor can go straight to the organization step.
    pub fn jump(&mut self, index: usize) {
        if self.is_edit() {
            self.step = index.min(self.total_steps() - 1);
        }
    }

    /// Change the selected role. Previously chosen role-specific membership
    /// fields become meaningless, so the membership list is cleared and the
    /// step is clamped into the new, possibly shorter, sequence.
    pub fn set_role(&mut self, role: Option<Role>) {
        if self.form.role == role {
            return;
        }
        self.form.role = role;
        self.form.org_memberships.clear();
        self.step = self.step.min(self.total_steps() - 1);
    }

    /// Change the selected department. The course is cleared unconditionally:
    /// the new department may offer a same-named course, but the selection is
    /// stale either way.
    pub fn set_department(&mut self, department_id: &str) {
        if self.form.profile.department_id == department_id {
            return;
        }
        self.form.profile.department_id = department_id.to_owned();
        self.form.profile.course.clear();
    }

    /// Course options for the currently selected department.
    pub fn course_options(&self, departments: &[Department]) -> &'static [&'static str] {
        courses::courses_for_department(departments, &self.form.profile.department_id)
    }

    /// Candidate organizations for the add-row: everything not already in the
    /// membership list. Duplicates are impossible by construction because an
    /// assigned id never appears as an option.
    pub fn selectable_organizations<'a>(&self, all: &'a [Organization]) -> Vec<&'a Organization> {
        all.iter()
            .filter(|org| {
                !self
                    .form
                    .org_memberships
                    .iter()
                    .any(|m| m.organization_id == org.id)
            })
            .collect()
    }

    /// Append a membership row. Requires a selected organization that is not
    /// already assigned; returns whether the row was added. `org_role` is
    /// only stored for officer accounts.
    pub fn add_membership(&mut self, organization_id: &str, org_role: OrgRole, position: &str) -> bool {
        if organization_id.is_empty() {
            return false;
        }
        if self
            .form
            .org_memberships
            .iter()
            .any(|m| m.organization_id == organization_id)
        {
            return false;
        }
        let org_role = (self.form.role == Some(Role::Officer)).then_some(org_role);
        self.form.org_memberships.push(OrgMembership {
            organization_id: organization_id.to_owned(),
            org_role,
            position: position.to_owned(),
        });
        true
    }

    /// Remove a membership row by index. Out-of-range indexes are ignored.
    pub fn remove_membership(&mut self, index: usize) {
        if index < self.form.org_memberships.len() {
            self.form.org_memberships.remove(index);
        }
    }

    /// Whether a step's required fields are filled in.
    pub fn step_complete(&self, step: StepKind) -> bool {
        match step {
            StepKind::Account => {
                // Blank password on edit means "keep existing".
                let password_ok = !self.form.password.is_empty() || self.is_edit();
                !self.form.email.is_empty() && self.form.role.is_some() && password_ok
            }
            StepKind::StudentProfile => {
                let p = &self.form.profile;
                // middle_name and contact_number are optional.
                !p.student_number.is_empty()
                    && !p.first_name.is_empty()
                    && !p.last_name.is_empty()
                    && !p.department_id.is_empty()
                    && !p.year_level.is_empty()
                    && !p.course.is_empty()
            }
            StepKind::Organizations => true,
        }
    }

    /// Whether the whole form is ready to submit.
    pub fn can_submit(&self) -> bool {
        self.is_last_step() && self.steps().iter().all(|s| self.step_complete(*s))
    }

    /// Flattened request body for the save call.
    pub fn payload(&self) -> SaveUserRequest {
        let form = &self.form;
        SaveUserRequest {
            email: form.email.clone(),
            password: (!form.password.is_empty()).then(|| form.password.clone()),
            user_type_id: form
                .role
                .map(Role::as_user_type_id)
                .unwrap_or_default()
                .to_owned(),
            is_active: if form.active { "1" } else { "0" }.to_owned(),
            student_number: form.profile.student_number.clone(),
            first_name: form.profile.first_name.clone(),
            middle_name: form.profile.middle_name.clone(),
            last_name: form.profile.last_name.clone(),
            department_id: form.profile.department_id.clone(),
            year_level: form.profile.year_level.clone(),
            contact_number: form.profile.contact_number.clone(),
            course: form.profile.course.clone(),
            org_memberships: form
                .org_memberships
                .iter()
                .map(|m| OrgMembershipWire {
                    organization_id: m.organization_id.clone(),
                    org_role: m.org_role.map(|r| r.as_wire().to_owned()),
                    position: m.position.clone(),
                })
                .collect(),
        }
    }
}
