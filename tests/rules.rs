use vinculum::roman::{
    lexer::{Symbol, UnknownSymbol, tokenize},
    rules::{Rule, has_repeated_non_repeatable, is_long_repetition, violated_rules,
            violates_characters},
};

#[test]
fn symbol_table() {
    let values = tokenize("IVXLCDM").unwrap()
                                    .into_iter()
                                    .map(Symbol::value)
                                    .collect::<Vec<_>>();
    assert_eq!(values, vec![1, 5, 10, 50, 100, 500, 1000]);
}

#[test]
fn tokenize_reports_first_unknown_symbol() {
    assert_eq!(tokenize("XIi"),
               Err(UnknownSymbol { text:   "i".to_string(),
                                   offset: 2, }));
}

#[test]
fn characters_rule() {
    assert!(!violates_characters(""));
    assert!(!violates_characters("MMXXVI"));
    assert!(violates_characters("IVX"));
    assert!(violates_characters("LC"));
    assert!(violates_characters("DM"));
    assert!(violates_characters("Ⅻ"));
}

#[test]
fn long_repetition_only_matches_the_whole_numeral() {
    assert!(is_long_repetition("XXXX"));
    assert!(is_long_repetition("CCCCCC"));
    assert!(!is_long_repetition(""));
    assert!(!is_long_repetition("VVVV"));
    assert!(!is_long_repetition("IIIIV"));
    assert!(!is_long_repetition("XXXXI"));
}

#[test]
fn repeated_non_repeatable_counts_any_mix() {
    assert!(has_repeated_non_repeatable("LL"));
    assert!(has_repeated_non_repeatable("MDDD"));
    assert!(has_repeated_non_repeatable("IVVI"));
    assert!(has_repeated_non_repeatable("DL"));
    assert!(has_repeated_non_repeatable("XLV"));
    assert!(has_repeated_non_repeatable("CDLV"));
    assert!(!has_repeated_non_repeatable("V"));
    assert!(!has_repeated_non_repeatable(""));
}

#[test]
fn repeated_non_repeatable_needs_a_single_run() {
    assert!(!has_repeated_non_repeatable("VVIVV"));
    assert!(!has_repeated_non_repeatable("LVIL"));
}

#[test]
fn rules_are_collected_in_order() {
    assert!(violated_rules("XXIX").is_empty());
    assert_eq!(violated_rules("IIII"), vec![Rule::ThreeConsecutiveRepetition]);
    assert_eq!(violated_rules("VVX"), vec![Rule::Characters, Rule::NoRepetition]);
}
