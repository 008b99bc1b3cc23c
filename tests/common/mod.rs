#![allow(dead_code)]

use edmlimits::{EdmLimit, System};

pub struct Case<'a> {
    pub name: &'a str,
    pub calculated: f64,
    pub expected: f64,
    pub tolerance: f64,
}

/// Checks every case against an absolute tolerance and prints a comparison table.
pub fn run_group_test(group_name: &str, cases: Vec<Case>) {
    println!("\nRunning Group Test: {}", group_name);
    println!("{:-<80}", "");
    println!(
        "{:<40} | {:<12} | {:<12} | {:<10}",
        "Quantity", "Expected", "Calculated", "Tolerance"
    );

    let mut failures = Vec::new();
    for case in &cases {
        let error = (case.calculated - case.expected).abs();
        println!(
            "{:<40} | {:<12.4e} | {:<12.4e} | {:<10.1e} (Err: {:.2e})",
            case.name, case.expected, case.calculated, case.tolerance, error
        );
        if !(error <= case.tolerance) {
            failures.push(case.name);
        }
    }
    println!("{:-<80}\n", "");

    assert!(
        failures.is_empty(),
        "Group '{}' cases outside tolerance: {:?}",
        group_name,
        failures
    );
}

/// One representative limit per hadronic system.
pub fn hadronic_limits(edm_bound: f64) -> Vec<EdmLimit> {
    System::HADRONIC
        .into_iter()
        .map(|system| EdmLimit::new(Some(system), 2020, edm_bound, "Test2020"))
        .collect()
}
