use super::*;

#[test]
fn step_labels_cover_every_kind() {
    assert_eq!(step_label(StepKind::Account), "Account");
    assert_eq!(step_label(StepKind::StudentProfile), "Student Profile");
    assert_eq!(step_label(StepKind::Organizations), "Organizations");
}

#[test]
fn user_type_options_follow_wire_order() {
    let ids: Vec<&str> = USER_TYPE_OPTIONS.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    for (id, _) in USER_TYPE_OPTIONS {
        assert!(Role::from_user_type_id(id).is_some());
    }
}

#[test]
fn org_name_falls_back_to_raw_id() {
    let orgs = vec![Organization {
        id: "org1".to_owned(),
        name: "Student Council".to_owned(),
    }];
    assert_eq!(org_name(&orgs, "org1"), "Student Council");
    assert_eq!(org_name(&orgs, "org9"), "org9");
}
