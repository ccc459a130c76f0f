//! Sentence-level translation: tokenize, look up each word, rebuild.
//!
//! Translation is strictly per-token dictionary lookup with no
//! cross-token context. Unknown words pass through verbatim, so the
//! output is always a complete sentence with the original punctuation
//! and spacing intact.

#[cfg(test)]
mod tests;

use crate::lexicon::{Direction, Lexicon};

/// One span of the input: either a maximal alphanumeric run
/// (`is_word`) or a maximal run of everything else. Concatenating all
/// spans in order reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub is_word: bool,
}

/// Split `text` into word and non-word spans. Never yields an empty
/// span.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_word = false;
    for (i, c) in text.char_indices() {
        let word = c.is_alphanumeric();
        if i > 0 && word != in_word {
            tokens.push(Token {
                text: &text[start..i],
                is_word: in_word,
            });
            start = i;
        }
        in_word = word;
    }
    if start < text.len() {
        tokens.push(Token {
            text: &text[start..],
            is_word: in_word,
        });
    }
    tokens
}

/// Reapply the source token's capitalization style to a translated
/// word: an all-uppercase token uppercases the whole result, a leading
/// capital capitalizes only the first character (the rest keeps the
/// stored casing), anything else lowercases the result.
///
/// Purely syntactic; only the character case of `source` is inspected.
pub fn apply_casing(source: &str, translated: &str) -> String {
    let mut has_letter = false;
    let mut all_upper = true;
    for c in source.chars().filter(|c| c.is_alphabetic()) {
        has_letter = true;
        if !c.is_uppercase() {
            all_upper = false;
        }
    }
    if has_letter && all_upper {
        return translated.to_uppercase();
    }
    if source.chars().next().is_some_and(char::is_uppercase) {
        let mut rest = translated.chars();
        return match rest.next() {
            Some(first) => first.to_uppercase().chain(rest).collect(),
            None => String::new(),
        };
    }
    translated.to_lowercase()
}

/// Translate `text` word-by-word in the given direction. Word spans
/// with no lexicon entry are copied through unchanged, as are all
/// non-word spans. Read-only with respect to the lexicon.
pub fn translate_sentence(lexicon: &Lexicon, direction: Direction, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for token in tokenize(text) {
        if !token.is_word {
            out.push_str(token.text);
            continue;
        }
        match lexicon.lookup(token.text, direction) {
            Some(translated) => out.push_str(&apply_casing(token.text, translated)),
            None => out.push_str(token.text),
        }
    }
    out
}
