//! Text normalization, input sanitization and collation.
//!
//! Everything in this module is pure and deterministic so the filter and
//! sort engines behave identically across platforms.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Lowercase a string, apply canonical decomposition and strip combining
/// diacritical marks (U+0300..=U+036F).
///
/// "São Paulo" normalizes to "sao paulo".
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !matches!(*c, '\u{0300}'..='\u{036f}'))
        .collect()
}

/// Split a string into normalized word tokens.
///
/// Tokens are maximal runs of `[a-z0-9]` in the normalized string; anything
/// else separates words. Case boundaries do not split, so "UrbanBuild" is a
/// single token.
pub fn tokenize(s: &str) -> Vec<String> {
    normalize(s)
        .split(|c: char| !matches!(c, 'a'..='z' | '0'..='9'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip injection-style characters (`<`, `>`, `` ` ``, `$`, `\`) from a
/// free-text input and trim surrounding whitespace.
pub fn sanitize_text(v: &str) -> String {
    v.chars()
        .filter(|c| !matches!(*c, '<' | '>' | '`' | '$' | '\\'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Keep only the characters meaningful in a numeric input: digits, `.`
/// and `,`.
pub fn sanitize_numeric(v: &str) -> String {
    v.chars()
        .filter(|c| c.is_ascii_digit() || matches!(*c, '.' | ','))
        .collect()
}

/// Compare two strings the way a base-sensitivity, numeric-aware locale
/// collation would: case and accents are ignored, and maximal digit runs
/// compare by value ("item2" sorts before "item10").
///
/// Equal keys return [`Ordering::Equal`] so a stable sort preserves the
/// input order of ties.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = normalize(a);
    let b = normalize(b);
    let mut xs = a.chars().peekable();
    let mut ys = b.chars().peekable();

    loop {
        match (xs.peek().copied(), ys.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_x = take_digit_run(&mut xs);
                    let run_y = take_digit_run(&mut ys);
                    match cmp_digit_runs(&run_x, &run_y) {
                        Ordering::Equal => {},
                        ord => return ord,
                    }
                } else {
                    match x.cmp(&y) {
                        Ordering::Equal => {
                            xs.next();
                            ys.next();
                        },
                        ord => return ord,
                    }
                }
            },
        }
    }
}

fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compare two digit runs by numeric value without parsing: strip leading
/// zeros, then longer runs are larger, equal lengths compare lexically.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
