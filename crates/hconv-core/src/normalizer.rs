//! Normalizer: rewrites a raw header key into a lower-camel-case field name.
//!
//! `Content-Type` becomes `contentType`, `X-Cache` becomes `xCache`.
//!
//! Hyphens, slashes and spaces separate words. Inside a word, a lowercase
//! letter or a digit followed by an uppercase letter also starts a new word, so a key
//! that is already camel-cased keeps its shape when normalized again. Every
//! word is title-cased, the first word is lower-cased, and the words are
//! concatenated. Casing uses the locale-independent `char` mappings.

const SEPARATORS: &[char] = &['-', '/', ' '];

/// Normalize a header key. Never fails; empty words contribute nothing.
pub fn normalize(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let words = key.split(SEPARATORS).flat_map(split_camel);
    for (i, word) in words.enumerate() {
        if i == 0 {
            out.extend(word.chars().flat_map(char::to_lowercase));
        } else {
            push_title(&mut out, word);
        }
    }
    out
}

/// Split a separator-free segment where a lowercase letter or digit is
/// followed by an uppercase letter.
/// An empty segment yields one empty word so that a leading separator still
/// occupies the "first word" slot.
fn split_camel(segment: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (idx, c) in segment.char_indices() {
        if let Some(p) = prev {
            if (p.is_lowercase() || p.is_numeric()) && c.is_uppercase() {
                words.push(&segment[start..idx]);
                start = idx;
            }
        }
        prev = Some(c);
    }
    words.push(&segment[start..]);
    words
}

fn push_title(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.extend(chars.flat_map(char::to_lowercase));
    }
}
