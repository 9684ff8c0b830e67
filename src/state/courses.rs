//! Static department-to-course lookup table.
//!
//! DESIGN
//! ======
//! Course offerings are fixed client-side data keyed by department code, not
//! server data. The wizard resolves the selected department id through the
//! fetched department list to reach this table.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use crate::net::types::Department;

/// Course titles offered per department code.
pub const COURSES_BY_DEPARTMENT: &[(&str, &[&str])] = &[
    (
        "CCS",
        &[
            "BS Computer Science",
            "BS Information Technology",
            "BS Information Systems",
        ],
    ),
    (
        "COE",
        &[
            "BS Civil Engineering",
            "BS Computer Engineering",
            "BS Electrical Engineering",
            "BS Mechanical Engineering",
        ],
    ),
    (
        "CBA",
        &[
            "BS Accountancy",
            "BS Business Administration",
            "BS Entrepreneurship",
        ],
    ),
    (
        "CAS",
        &["BA Communication", "BA Political Science", "BS Psychology"],
    ),
    (
        "CTE",
        &[
            "Bachelor of Elementary Education",
            "Bachelor of Secondary Education",
        ],
    ),
];

/// Courses for a department code; empty for unknown codes.
pub fn courses_for_code(code: &str) -> &'static [&'static str] {
    COURSES_BY_DEPARTMENT
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(&[], |(_, courses)| courses)
}

/// Courses for a department id, resolved through the fetched list.
pub fn courses_for_department(departments: &[Department], department_id: &str) -> &'static [&'static str] {
    departments
        .iter()
        .find(|d| d.id == department_id)
        .map_or(&[], |d| courses_for_code(&d.code))
}
