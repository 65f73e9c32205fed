use super::*;

#[test]
fn comma_decimal_moves_matrix_separator() {
    let seps = Separators::for_decimal_point(',');
    assert_eq!(seps.matrix, ';');
    assert_eq!(seps.grouping, '.');
}

#[test]
fn dot_decimal_is_canonical() {
    assert!(Separators::for_decimal_point('.').is_canonical());
}

#[test]
fn posix_and_bcp47_tags() {
    assert_eq!(Separators::from_locale("de_DE.UTF-8").decimal_point, ',');
    assert_eq!(Separators::from_locale("pt-BR").decimal_point, ',');
    assert_eq!(Separators::from_locale("en_US.UTF-8"), Separators::canonical());
    assert_eq!(Separators::from_locale("C"), Separators::canonical());
    assert_eq!(Separators::from_locale(""), Separators::canonical());
}

#[test]
fn language_code_is_case_insensitive() {
    assert_eq!(Separators::from_locale("FR_fr").matrix, ';');
}
