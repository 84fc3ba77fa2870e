//! tests for reading and rendering formula text
use conic_refine::{
    eval::{Conic, CrossLines, Curve},
    formula::{self, Formula},
};
use std::sync::Arc;

fn src(s: &str) -> Arc<String> {
    Arc::new(s.to_string())
}

#[test]
fn canonical_conic_text() {
    let conic = Conic::new([1.0, -35.0, 1.0, 45.0, 1.0, 1.0]);
    assert_eq!(
        conic.render(),
        "(1*(x^2)) + (-35*x*y) + (1*(y^2)) + (45*x) + (1*y) + 1 = 0"
    );
}

#[test]
fn conic_round_trip() {
    let conic = Conic::new([1.0, -35.0, 1.0, 45.0, 1.0, 1.0]);
    let (back, parsed) = formula::parse(&conic.render(), &Conic::new([0.0; 6]));
    assert_eq!(back, conic);
    assert_eq!(parsed.assigned, 6);
    assert!(parsed.rejected.is_empty());
}

#[test]
fn round_trip_keeps_fractions_exactly() {
    for coeffs in [
        [0.1, -2.75, 1e-7, 123456.789, -0.0, 1.0 / 3.0],
        [-49.99, 0.0, 12.5, -3.0, 0.01, -25.0],
    ] {
        let conic = Conic::new(coeffs);
        let (back, _) = formula::parse(&conic.render(), &Conic::default());
        assert_eq!(back.coeffs, coeffs);
    }
}

#[test]
fn missing_numbers_keep_prior_values() {
    let mut conic = Conic::new([9.0; 6]);
    let parsed = conic.parse_into(&src("1 2 -3"));
    assert_eq!(parsed.assigned, 3);
    assert!(!parsed.is_complete(6));
    assert_eq!(conic.coeffs, [1.0, 2.0, -3.0, 9.0, 9.0, 9.0]);
}

#[test]
fn five_numbers_leave_f_alone() {
    let mut conic = Conic::new([0.0, 0.0, 0.0, 0.0, 0.0, 7.0]);
    conic.parse_into(&src("(2*(x^2)) + (3*x*y) + (4*(y^2)) + (5*x) + (6*y) = 0"));
    // the trailing 0 lands in f
    assert_eq!(conic.coeffs, [2.0, 3.0, 4.0, 5.0, 6.0, 0.0]);

    let mut conic = Conic::new([0.0, 0.0, 0.0, 0.0, 0.0, 7.0]);
    conic.parse_into(&src("2, 3, 4, 5, 6"));
    assert_eq!(conic.coeffs, [2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn extra_numbers_are_ignored() {
    let mut conic = Conic::default();
    let parsed = conic.parse_into(&src("1 2 3 4 5 6 7 8"));
    assert_eq!(parsed.assigned, 6);
    assert_eq!(conic.coeffs, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn no_numbers_changes_nothing() {
    let mut conic = Conic::new([4.0; 6]);
    let parsed = conic.parse_into(&src("x^2 + y^2 = r"));
    assert_eq!(parsed.assigned, 0);
    assert_eq!(conic.coeffs, [4.0; 6]);
}

#[test]
fn malformed_numbers_are_reported_and_skipped() {
    let mut conic = Conic::new([0.0; 6]);
    let parsed = conic.parse_into(&src("1 . 2 1.2.3 4"));
    assert_eq!(&conic.coeffs[..3], &[1.0, 2.0, 4.0]);
    let bad: Vec<&str> = parsed.rejected.iter().map(|err| err.loc.get()).collect();
    assert_eq!(bad, vec![".", "1.2.3"]);
    assert_eq!(parsed.rejected[1].loc.start(), 6);
}

#[test]
fn subtraction_is_not_a_sign() {
    let (conic, _) = formula::parse("x - 3, -4", &Conic::new([0.0; 6]));
    assert_eq!(&conic.coeffs[..2], &[3.0, -4.0]);
}

#[test]
fn cross_lines_text() {
    let cross = CrossLines::new([1.5, -2.0, 0.0, 3.0, 4.0]);
    assert_eq!(cross.render(), "cx = 1.5, cy = -2, cz = 0, r = 3, p = 4");

    let (back, parsed) = formula::parse(&cross.render(), &CrossLines::default());
    assert_eq!(back, cross);
    assert!(parsed.is_complete(back.params().len()));
}

#[test]
fn overflowing_numbers_are_skipped() {
    let mut conic = Conic::new([0.0; 6]);
    let huge = "9".repeat(400);
    let parsed = conic.parse_into(&src(&format!("{huge} 1 2 3 4 5 6")));
    assert_eq!(parsed.rejected.len(), 1);
    assert_eq!(parsed.rejected[0].typ, formula::ParseErrTyp::NotFinite);
    assert_eq!(conic.coeffs, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}
