use super::*;

#[test]
fn longest_prefix_wins() {
    assert_eq!(Function::match_prefix("asind30"), Some((Function::Asind, 5)));
    assert_eq!(Function::match_prefix("asin1"), Some((Function::Asin, 4)));
    assert_eq!(Function::match_prefix("sind90"), Some((Function::Sind, 4)));
    assert_eq!(Function::match_prefix("\u{221a}4"), Some((Function::Sqrt, 3)));
    assert_eq!(Function::match_prefix("foo"), None);
}

#[test]
fn names_round_trip() {
    for name in ["sin", "cosd", "atand", "ln", "log", "det", "cbrt"] {
        let function = Function::from_name(name);
        assert!(function.is_some(), "{name} should be recognised");
    }
    assert_eq!(Function::from_name("cbrt"), Some(Function::Cbrt));
    assert_eq!(Function::from_name("sec"), None);
}

#[test]
fn degree_variants() {
    assert_eq!(Function::Sind.apply_scalar(90.0), 1.0);
    assert!((Function::Atand.apply_scalar(1.0) - 45.0).abs() < 1e-12);
    assert!((Function::Acosd.apply_scalar(0.0) - 90.0).abs() < 1e-12);
}

#[test]
fn scalar_determinant_is_identity() {
    assert_eq!(Function::Det.apply_scalar(-7.5), -7.5);
}

#[test]
fn out_of_domain_is_nan() {
    assert!(Function::Sqrt.apply_scalar(-1.0).is_nan());
    assert!(Function::Asin.apply_scalar(2.0).is_nan());
}
