//! Character-class predicates used to delimit lexemes
//!
//! Each predicate receives the previously scanned character (if any) and the
//! current one, matching the signature of [`CharStream::read_until`].
//!
//! [`CharStream::read_until`]: crate::stream::CharStream::read_until

use crate::tokens::Symbol;

/// Whitespace or the first character of a symbol ends a word
pub fn is_separator(_previous: Option<char>, current: char) -> bool {
    current.is_whitespace() || Symbol::starts_symbol(current)
}

/// Like [`is_separator`], but keeps exponent signs (`1e-5`) inside a
/// numeric lexeme
pub fn is_number_separator(previous: Option<char>, current: char) -> bool {
    match (previous, current) {
        (Some('e' | 'E'), '+' | '-') => false,
        _ => is_separator(previous, current),
    }
}

/// Whether a `.` after a digit belongs to the number, given the character
/// that follows the `.`
///
/// `1.5`, `1.e3`, `1.;` and a trailing `1.` keep the point; `1.foo` does not.
pub fn is_decimal_point_continuation(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => c.is_ascii_digit() || matches!(c, 'e' | 'E') || is_separator(None, c),
    }
}

pub fn is_not_space(_previous: Option<char>, current: char) -> bool {
    !current.is_whitespace()
}

/// Matches the `/` of a block comment's closing `*/`
pub fn is_comment_terminator(previous: Option<char>, current: char) -> bool {
    previous == Some('*') && current == '/'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        assert!(is_separator(None, ' '));
        assert!(is_separator(Some('a'), '\t'));
        assert!(is_separator(Some('a'), '('));
        assert!(is_separator(Some('a'), '-'));
        assert!(!is_separator(Some('a'), 'b'));
        assert!(!is_separator(Some('a'), '_'));
        assert!(!is_separator(None, '@'));
    }

    #[test]
    fn test_number_separators() {
        assert!(!is_number_separator(Some('e'), '-'));
        assert!(!is_number_separator(Some('E'), '+'));
        assert!(is_number_separator(Some('1'), '.'));
        assert!(is_number_separator(Some('x'), '-'));
        assert!(is_number_separator(Some('x'), '.'));
        assert!(is_number_separator(Some('1'), ';'));
        assert!(is_number_separator(Some('1'), ' '));
    }

    #[test]
    fn test_decimal_point_continuation() {
        assert!(is_decimal_point_continuation(Some('5')));
        assert!(is_decimal_point_continuation(Some('e')));
        assert!(is_decimal_point_continuation(Some('E')));
        assert!(is_decimal_point_continuation(Some(' ')));
        assert!(is_decimal_point_continuation(Some(';')));
        assert!(is_decimal_point_continuation(None));
        assert!(!is_decimal_point_continuation(Some('f')));
        assert!(!is_decimal_point_continuation(Some('_')));
    }

    #[test]
    fn test_not_space() {
        assert!(is_not_space(None, 'x'));
        assert!(!is_not_space(None, '\n'));
    }

    #[test]
    fn test_comment_terminator() {
        assert!(is_comment_terminator(Some('*'), '/'));
        assert!(!is_comment_terminator(None, '/'));
        assert!(!is_comment_terminator(Some('/'), '*'));
    }
}
