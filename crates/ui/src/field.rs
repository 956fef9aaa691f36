//! Bounded text-field storage.

/// A text field holding at most `N` UTF-8 bytes.
pub type Text<const N: usize> = heapless::String<N>;

/// Replace the contents of `field` with `value`, truncated at the last
/// character that fits.
pub fn set_text<const N: usize>(field: &mut Text<N>, value: &str) {
    field.clear();
    for ch in value.chars() {
        if field.push(ch).is_err() {
            break;
        }
    }
}

/// Build a field from `value`, truncating like [`set_text`].
#[must_use]
pub fn text<const N: usize>(value: &str) -> Text<N> {
    let mut field = Text::new();
    set_text(&mut field, value);
    field
}

/// One bullet per character, for password fields.
#[must_use]
pub fn masked(value: &str) -> String {
    "•".repeat(value.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_replaces() {
        let mut f: Text<8> = text("abc");
        set_text(&mut f, "xy");
        assert_eq!(f.as_str(), "xy");
    }

    #[test]
    fn test_set_text_truncates_at_capacity() {
        let f: Text<4> = text("abcdef");
        assert_eq!(f.as_str(), "abcd");
    }

    #[test]
    fn test_set_text_never_splits_a_character() {
        // 'é' is two bytes; only one fits after "abc" in 4 bytes.
        let f: Text<4> = text("abcé");
        assert_eq!(f.as_str(), "abc");
    }

    #[test]
    fn test_masked_counts_characters() {
        assert_eq!(masked("añb"), "•••");
        assert_eq!(masked(""), "");
    }
}
