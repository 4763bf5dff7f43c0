// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Prefix and suffix checks measured in code points.

/// Returns `true` when the first code points of `haystack` equal `needle`.
///
/// An empty needle always matches.
///
/// # Examples
///
/// ```
/// use textcraft::starts_with;
///
/// assert!(starts_with("héllo", "hé"));
/// assert!(starts_with("abc", ""));
/// assert!(!starts_with("hé", "héllo"));
/// ```
pub fn starts_with(haystack: &str, needle: &str,) -> bool
{
    let end = byte_offset(haystack, needle.chars().count(),);
    haystack[..end] == *needle
}

/// Returns `true` when `needle` occurs in `haystack` starting exactly at
/// `len(haystack) - len(needle)` code points.
///
/// A needle longer than the haystack never matches; an empty needle always
/// does.
///
/// # Examples
///
/// ```
/// use textcraft::ends_with;
///
/// assert!(ends_with("naïve", "ïve"));
/// assert!(ends_with("abc", ""));
/// assert!(!ends_with("abc", "d"));
/// ```
pub fn ends_with(haystack: &str, needle: &str,) -> bool
{
    let Some(offset,) = haystack.chars().count().checked_sub(needle.chars().count(),) else {
        return false;
    };

    let start = byte_offset(haystack, offset,);
    haystack[start..] == *needle
}

/// Byte index of the code point at position `chars`, clamped to the end.
fn byte_offset(text: &str, chars: usize,) -> usize
{
    text.char_indices().nth(chars,).map_or(text.len(), |(index, _,)| index,)
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{byte_offset, ends_with, starts_with};

    proptest! {
        #[test]
        fn starts_with_agrees_with_prefix_concatenation(prefix in "\\PC{0,8}", rest in "\\PC{0,8}") {
            let haystack = format!("{prefix}{rest}");
            prop_assert!(starts_with(&haystack, &prefix));
            prop_assert_eq!(starts_with(&rest, &haystack), rest == haystack);
        }

        #[test]
        fn ends_with_agrees_with_suffix_concatenation(head in "\\PC{0,8}", suffix in "\\PC{0,8}") {
            let haystack = format!("{head}{suffix}");
            prop_assert!(ends_with(&haystack, &suffix));
            prop_assert_eq!(ends_with(&head, &haystack), head == haystack);
        }
    }

    #[test]
    fn multibyte_prefix_counts_code_points()
    {
        assert!(starts_with("héllo", "hé"));
        assert!(starts_with("héllo", "héllo"));
        assert!(!starts_with("héllo", "he"));
    }

    #[test]
    fn empty_needle_always_matches()
    {
        assert!(starts_with("abc", ""));
        assert!(ends_with("abc", ""));
        assert!(starts_with("", ""));
        assert!(ends_with("", ""));
    }

    #[test]
    fn missing_suffix_is_rejected()
    {
        assert!(!ends_with("abc", "d"));
        assert!(!ends_with("abc", "ab"));
    }

    #[test]
    fn needle_longer_than_haystack_never_matches()
    {
        assert!(!ends_with("ab", "xab"));
        assert!(!starts_with("ab", "abc"));
        assert!(!ends_with("", "a"));
    }

    #[test]
    fn multibyte_suffix_counts_code_points()
    {
        assert!(ends_with("日本語", "語"));
        assert!(ends_with("日本語", "本語"));
        assert!(!ends_with("日本語", "日"));
    }

    #[test]
    fn byte_offset_clamps_to_length()
    {
        assert_eq!(byte_offset("héllo", 2,), 3);
        assert_eq!(byte_offset("héllo", 50,), "héllo".len());
    }
}
