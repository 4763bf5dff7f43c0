// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Case conversions for labels and identifiers.
//!
//! [`convert_to_title_case`] rewrites every word, while [`capitalize`]
//! touches only the first code point and leaves the rest of the text as it
//! was. The two are kept separate on purpose.

use std::sync::LazyLock;

use regex::Regex;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// A lowercase letter or digit directly followed by an uppercase letter.
static CAMEL_BOUNDARY: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r"([a-z0-9])([A-Z])",).expect("camel case boundary pattern is valid",)
},);

/// Word-break punctuation that is case-ignorable regardless of category.
const WORD_BREAK_IGNORABLE: &[char] = &[
    '\'', '.', ':', '\u{00B7}', '\u{0387}', '\u{055F}', '\u{05F4}', '\u{2018}', '\u{2019}',
    '\u{2024}', '\u{2027}', '\u{FE13}', '\u{FE52}', '\u{FE55}', '\u{FF07}', '\u{FF0E}', '\u{FF1A}',
];

/// Lowercases `text`, then uppercases the first letter of every word.
///
/// A letter starts a word when the closest preceding character that is not
/// case-ignorable (apostrophes, periods, combining marks of any script) is
/// not itself a cased letter. Digits therefore do not end a word boundary:
/// `"3d"` becomes `"3D"`.
///
/// # Examples
///
/// ```
/// use textcraft::convert_to_title_case;
///
/// assert_eq!(convert_to_title_case("hello world",), "Hello World");
/// assert_eq!(convert_to_title_case("JEAN-LUC o'neil",), "Jean-Luc O'neil");
/// ```
pub fn convert_to_title_case(text: &str,) -> String
{
    let lowered = text.to_lowercase();
    let mut titled = String::with_capacity(lowered.len(),);
    let mut in_word = false;

    for candidate in lowered.chars() {
        if is_case_ignorable(candidate,) {
            titled.push(candidate,);
            continue;
        }

        let cased = is_cased(candidate,);
        if cased && !in_word {
            push_titlecase(&mut titled, candidate,);
        } else {
            titled.push(candidate,);
        }
        in_word = cased;
    }

    titled
}

/// Uppercases the first code point of `text` and keeps the rest verbatim.
///
/// # Examples
///
/// ```
/// use textcraft::capitalize;
///
/// assert_eq!(capitalize("hello WORLD",), "Hello WORLD");
/// assert_eq!(capitalize("",), "");
/// ```
pub fn capitalize(text: &str,) -> String
{
    let mut chars = text.chars();
    let Some(first,) = chars.next() else {
        return String::new();
    };

    let mut capitalized = String::with_capacity(text.len(),);
    capitalized.extend(first.to_uppercase(),);
    capitalized.push_str(chars.as_str(),);
    capitalized
}

/// Turns a camelCase or PascalCase identifier into a sentence.
///
/// Words are split where an ASCII lowercase letter or digit meets an ASCII
/// uppercase letter. The result is lowercased and only its first letter is
/// capitalized.
///
/// # Examples
///
/// ```
/// use textcraft::humanize;
///
/// assert_eq!(humanize("userIdValue",), "User id value");
/// ```
pub fn humanize(text: &str,) -> String
{
    let spaced = CAMEL_BOUNDARY.replace_all(text, "${1} ${2}",);
    capitalize(&spaced.to_lowercase(),)
}

/// Turns a SCREAMING_SNAKE_CASE constant name into title-cased words.
///
/// # Examples
///
/// ```
/// use textcraft::humanize_const;
///
/// assert_eq!(humanize_const("MAX_RETRY_COUNT",), "Max Retry Count");
/// ```
pub fn humanize_const(name: &str,) -> String
{
    convert_to_title_case(&name.replace('_', " ",),)
}

/// Characters that neither start nor end a word for title casing.
///
/// This is the Unicode `Case_Ignorable` property: combining and enclosing
/// marks, format characters, modifier letters and symbols, plus the
/// word-break punctuation listed under `MidLetter`, `MidNumLet` and
/// `Single_Quote`.
fn is_case_ignorable(candidate: char,) -> bool
{
    matches!(
        candidate.general_category(),
        GeneralCategory::NonspacingMark
            | GeneralCategory::EnclosingMark
            | GeneralCategory::Format
            | GeneralCategory::ModifierLetter
            | GeneralCategory::ModifierSymbol
    ) || WORD_BREAK_IGNORABLE.contains(&candidate,)
}

/// Whether the character carries case, lowercase, uppercase or titlecase.
fn is_cased(candidate: char,) -> bool
{
    candidate.is_lowercase()
        || candidate.is_uppercase()
        || candidate.general_category() == GeneralCategory::TitlecaseLetter
}

/// Pushes the titlecase form of a lowercase letter.
///
/// Digraphs and `ß` have titlecase forms that differ from their uppercase
/// forms.
fn push_titlecase(target: &mut String, candidate: char,)
{
    match candidate {
        '\u{01C6}' => target.push('\u{01C5}',), // dž -> Dž
        '\u{01C9}' => target.push('\u{01C8}',), // lj -> Lj
        '\u{01CC}' => target.push('\u{01CB}',), // nj -> Nj
        '\u{01F3}' => target.push('\u{01F2}',), // dz -> Dz
        'ß' => target.push_str("Ss",),
        other => target.extend(other.to_uppercase(),),
    }
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{capitalize, convert_to_title_case, humanize, humanize_const};

    proptest! {
        #[test]
        fn capitalize_only_changes_first_character(first in "[a-z]", rest in "\\PC{0,24}") {
            let input = format!("{first}{rest}");
            let output = capitalize(&input);
            prop_assert_eq!(&output[1..], rest.as_str());
            prop_assert_eq!(output[..1].to_owned(), first.to_ascii_uppercase());
        }

        #[test]
        fn title_case_is_idempotent(
            input in "[A-Za-z\u{00C0}-\u{00FF}\u{0430}-\u{044F}\u{0410}-\u{042F}0-9 '_\u{0300}-\u{036F}\u{0483}\u{0591}\u{00AD}-]{0,32}"
        ) {
            let once = convert_to_title_case(&input);
            prop_assert_eq!(convert_to_title_case(&once), once);
        }
    }

    #[test]
    fn title_case_capitalizes_every_word()
    {
        assert_eq!(convert_to_title_case("hello world"), "Hello World");
    }

    #[test]
    fn title_case_lowercases_the_rest_first()
    {
        assert_eq!(convert_to_title_case("HELLO wORLD"), "Hello World");
    }

    #[test]
    fn title_case_treats_hyphens_as_boundaries()
    {
        assert_eq!(convert_to_title_case("jean-luc picard"), "Jean-Luc Picard");
    }

    #[test]
    fn title_case_keeps_apostrophes_inside_words()
    {
        assert_eq!(convert_to_title_case("o'neil's pub"), "O'neil's Pub");
    }

    #[test]
    fn title_case_capitalizes_after_digits()
    {
        assert_eq!(convert_to_title_case("3d model"), "3D Model");
    }

    #[test]
    fn title_case_is_unicode_aware()
    {
        assert_eq!(convert_to_title_case("ÉLAN vital"), "Élan Vital");
        assert_eq!(convert_to_title_case("ΟΔΥΣΣΕΥΣ"), "Οδυσσευς");
    }

    #[test]
    fn title_case_skips_combining_marks_inside_words()
    {
        assert_eq!(convert_to_title_case("\u{0430}\u{0483}\u{0431}"), "\u{0410}\u{0483}\u{0431}");
        assert_eq!(convert_to_title_case("a\u{0591}b"), "A\u{0591}b");
        assert_eq!(convert_to_title_case("a\u{1DC0}b"), "A\u{1DC0}b");
        assert_eq!(convert_to_title_case("e\u{20DD}x"), "E\u{20DD}x");
    }

    #[test]
    fn title_case_skips_format_and_modifier_characters()
    {
        assert_eq!(convert_to_title_case("co\u{00AD}op"), "Co\u{00AD}op");
        assert_eq!(convert_to_title_case("a\u{200D}b"), "A\u{200D}b");
        assert_eq!(convert_to_title_case("a\u{02C2}b"), "A\u{02C2}b");
        assert_eq!(convert_to_title_case("a\u{3005}b"), "A\u{3005}b");
    }

    #[test]
    fn title_case_skips_word_break_punctuation()
    {
        assert_eq!(convert_to_title_case("rock\u{2019}n roll"), "Rock\u{2019}n Roll");
        assert_eq!(convert_to_title_case("e.g. this"), "E.g. This");
    }

    #[test]
    fn humanize_const_keeps_marked_words_together()
    {
        assert_eq!(humanize_const("CAF\u{0301}E_NOIR"), "Caf\u{0301}e Noir");
    }

    #[test]
    fn title_case_uses_titlecase_forms()
    {
        assert_eq!(convert_to_title_case("ßa"), "Ssa");
        assert_eq!(convert_to_title_case("straße"), "Straße");
        assert_eq!(convert_to_title_case("\u{01C4}ungla"), "\u{01C5}ungla");
    }

    #[test]
    fn title_case_of_empty_is_empty()
    {
        assert_eq!(convert_to_title_case(""), "");
    }

    #[test]
    fn capitalize_leaves_rest_untouched()
    {
        assert_eq!(capitalize("hello WORLD"), "Hello WORLD");
        assert_eq!(capitalize("hELLO"), "HELLO");
    }

    #[test]
    fn capitalize_empty_is_empty()
    {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_handles_multibyte_first_character()
    {
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize("ßig"), "SSig");
    }

    #[test]
    fn capitalize_differs_from_title_case()
    {
        let input = "hello WORLD";
        assert_ne!(capitalize(input), convert_to_title_case(input));
    }

    #[test]
    fn humanize_splits_camel_case()
    {
        assert_eq!(humanize("userIdValue"), "User id value");
        assert_eq!(humanize("userId"), "User id");
    }

    #[test]
    fn humanize_splits_after_digits()
    {
        assert_eq!(humanize("version2Beta"), "Version2 beta");
    }

    #[test]
    fn humanize_keeps_acronyms_together()
    {
        assert_eq!(humanize("HTTPServer"), "Httpserver");
        assert_eq!(humanize("parseHTTPResponse"), "Parse httpresponse");
    }

    #[test]
    fn humanize_handles_pascal_case_and_empty_input()
    {
        assert_eq!(humanize("PascalCaseName"), "Pascal case name");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn humanize_const_title_cases_words()
    {
        assert_eq!(humanize_const("MAX_RETRY_COUNT"), "Max Retry Count");
        assert_eq!(humanize_const("timeout"), "Timeout");
    }

    #[test]
    fn humanize_const_keeps_surrounding_spaces()
    {
        assert_eq!(humanize_const("__INIT__"), "  Init  ");
    }
}
