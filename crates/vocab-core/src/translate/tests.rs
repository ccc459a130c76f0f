use super::*;

fn lexicon_with(pairs: &[(&str, &str)]) -> Lexicon {
    let mut lex = Lexicon::new("unused.json");
    for (source, target) in pairs {
        lex.add(Direction::Forward, source, &[(*target).to_string()]);
    }
    lex
}

#[test]
fn tokenize_words_and_punctuation() {
    let tokens = tokenize("El tiempo, es oro.");
    let spans: Vec<(&str, bool)> = tokens.iter().map(|t| (t.text, t.is_word)).collect();
    assert_eq!(
        spans,
        vec![
            ("El", true),
            (" ", false),
            ("tiempo", true),
            (", ", false),
            ("es", true),
            (" ", false),
            ("oro", true),
            (".", false),
        ]
    );
}

#[test]
fn tokenize_is_lossless() {
    let inputs = [
        "",
        "hola",
        "  leading and trailing  ",
        "¡Hola, mundo! ¿Qué tal?",
        "a1b2c3",
        "--x--",
        "día...de año\tnuevo\n",
        "100% de 2 días",
    ];
    for input in inputs {
        let joined: String = tokenize(input).iter().map(|t| t.text).collect();
        assert_eq!(joined, input);
    }
}

#[test]
fn tokenize_never_yields_empty_spans() {
    for input in ["", ".", "a", ".a.", "a.a", "  ", "ñandú"] {
        for token in tokenize(input) {
            assert!(!token.text.is_empty());
        }
    }
}

#[test]
fn tokenize_digits_are_word_spans() {
    let tokens = tokenize("take 5 now");
    assert_eq!(tokens[2].text, "5");
    assert!(tokens[2].is_word);
}

#[test]
fn apply_casing_styles() {
    assert_eq!(apply_casing("DAY", "día"), "DÍA");
    assert_eq!(apply_casing("Day", "día"), "Día");
    assert_eq!(apply_casing("day", "día"), "día");
    assert_eq!(apply_casing("day", "DÍA"), "día");
}

#[test]
fn apply_casing_mixed_falls_back_to_lowercase() {
    assert_eq!(apply_casing("dAy", "día"), "día");
    assert_eq!(apply_casing("dAY", "Día"), "día");
}

#[test]
fn apply_casing_capitalized_keeps_stored_tail() {
    // Only the first character changes; the tail keeps the stored form.
    assert_eq!(apply_casing("Compania", "compañía"), "Compañía");
}

#[test]
fn apply_casing_ignores_digits_in_upper_check() {
    assert_eq!(apply_casing("DAY1", "día"), "DÍA");
}

#[test]
fn translate_partial_sentence() {
    let lex = lexicon_with(&[("tiempo", "time")]);
    let out = translate_sentence(&lex, Direction::Forward, "El tiempo es oro.");
    assert_eq!(out, "El time es oro.");
}

#[test]
fn translate_preserves_casing_per_token() {
    let lex = lexicon_with(&[("tiempo", "time"), ("oro", "gold")]);
    assert_eq!(
        translate_sentence(&lex, Direction::Forward, "TIEMPO y Oro"),
        "TIME y Gold"
    );
}

#[test]
fn translate_reverse_direction() {
    let lex = lexicon_with(&[("día", "day")]);
    assert_eq!(
        translate_sentence(&lex, Direction::Reverse, "Day by day"),
        "Día by día"
    );
}

#[test]
fn translate_unknown_words_pass_through() {
    let lex = lexicon_with(&[]);
    let input = "Nada se traduce aquí.";
    assert_eq!(translate_sentence(&lex, Direction::Forward, input), input);
}

#[test]
fn translate_punctuation_only_input() {
    let lex = lexicon_with(&[("tiempo", "time")]);
    assert_eq!(translate_sentence(&lex, Direction::Forward, "... ,,, !"), "... ,,, !");
    assert_eq!(translate_sentence(&lex, Direction::Forward, ""), "");
}

#[test]
fn translate_matches_accented_input() {
    let lex = lexicon_with(&[("día", "day"), ("año", "year")]);
    assert_eq!(
        translate_sentence(&lex, Direction::Forward, "Un DÍA del Año"),
        "Un DAY del Year"
    );
}
