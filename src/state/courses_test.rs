use super::*;

fn departments() -> Vec<Department> {
    vec![
        Department {
            id: "d1".to_owned(),
            name: "College of Computer Studies".to_owned(),
            code: "CCS".to_owned(),
        },
        Department {
            id: "d2".to_owned(),
            name: "College of Engineering".to_owned(),
            code: "COE".to_owned(),
        },
    ]
}

#[test]
fn every_department_code_has_courses() {
    for (code, courses) in COURSES_BY_DEPARTMENT {
        assert!(!courses.is_empty(), "no courses for {code}");
    }
}

#[test]
fn courses_for_code_returns_department_courses() {
    let courses = courses_for_code("CCS");
    assert!(courses.contains(&"BS Information Technology"));
}

#[test]
fn courses_for_code_unknown_is_empty() {
    assert!(courses_for_code("XYZ").is_empty());
    assert!(courses_for_code("").is_empty());
}

#[test]
fn courses_for_department_resolves_id_through_code() {
    let courses = courses_for_department(&departments(), "d2");
    assert!(courses.contains(&"BS Civil Engineering"));
}

#[test]
fn courses_for_department_unknown_id_is_empty() {
    assert!(courses_for_department(&departments(), "d99").is_empty());
}
