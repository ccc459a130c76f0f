//! Character-level helpers for lookup-key normalization.
//!
//! Lexicon keys are lowercased and stripped of diacritics so that
//! "Día", "día" and "dia" all resolve to the same entry. Only keys are
//! normalized; stored translation values keep their original spelling.

/// Check the Combining Diacritical Marks block (U+0300..U+036F). Input
/// that arrives in decomposed form (NFD) carries accents as separate
/// combining characters; key normalization drops them.
pub fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Fold a precomposed accented Latin letter to its base letter
/// ('á' → 'a', 'ñ' → 'n'). Covers the lowercase Latin-1 Supplement
/// letters used by Spanish, French, Portuguese and German orthography;
/// anything else is returned unchanged. Callers lowercase first, so
/// only lowercase forms are mapped here.
pub fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ñ' => 'n',
        'ç' => 'c',
        _ => c,
    }
}

/// Normalize a word into its lookup key: locale-invariant lowercase,
/// combining marks dropped, precomposed accented letters folded to
/// their base letter.
///
/// Idempotent: `normalize_key(normalize_key(w)) == normalize_key(w)`.
pub fn normalize_key(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .map(fold_diacritic)
        .collect()
}
