// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Best-effort conversion of arbitrary-script text into ASCII.
//!
//! The [`Transliterator`] trait is the seam used by
//! [`Slugifier`](crate::Slugifier); [`AsciiTransliterator`] is the default
//! engine backed by the `deunicode` tables. A single shared instance is
//! built lazily on first use and lives for the rest of the process.

use std::{borrow::Cow, sync::OnceLock};

use deunicode::deunicode_char;
use tracing::debug;

static SHARED_ENGINE: OnceLock<AsciiTransliterator,> = OnceLock::new();

/// Maps text written in any script to a Latin/ASCII approximation.
///
/// Implementations may return non-ASCII output; callers that require ASCII
/// run [`fold_to_ascii`] afterwards.
pub trait Transliterator
{
    /// Transliterates `text`, borrowing the input when nothing changes.
    fn transliterate<'input,>(&self, text: &'input str,) -> Cow<'input, str,>;
}

impl<T,> Transliterator for &T
where
    T: Transliterator + ?Sized,
{
    fn transliterate<'input,>(&self, text: &'input str,) -> Cow<'input, str,>
    {
        (**self).transliterate(text,)
    }
}

/// Default engine converting every script `deunicode` knows into ASCII.
///
/// Characters without a known approximation are dropped.
///
/// # Examples
///
/// ```
/// use textcraft::{AsciiTransliterator, Transliterator};
///
/// let engine = AsciiTransliterator::default();
/// assert_eq!(engine.transliterate("café",), "cafe");
/// assert_eq!(engine.transliterate("Привет",), "Privet");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq,)]
pub struct AsciiTransliterator;

impl AsciiTransliterator
{
    /// Returns the process-wide engine, constructing it on first use.
    ///
    /// Concurrent first calls race on a [`OnceLock`], so exactly one instance
    /// is ever built and every caller observes the same one.
    pub fn shared() -> &'static Self
    {
        SHARED_ENGINE.get_or_init(|| {
            debug!("initializing shared ascii transliteration engine");
            Self
        },)
    }
}

impl Transliterator for AsciiTransliterator
{
    fn transliterate<'input,>(&self, text: &'input str,) -> Cow<'input, str,>
    {
        fold_to_ascii(text,)
    }
}

/// Replaces every non-ASCII character with its closest ASCII spelling.
///
/// Diacritics are stripped (`é` becomes `e`), ligatures and non-Latin
/// letters are spelled out, and characters with no approximation are
/// discarded. ASCII input is returned borrowed.
///
/// # Examples
///
/// ```
/// use textcraft::fold_to_ascii;
///
/// assert_eq!(fold_to_ascii("Grüße",), "Grusse");
/// assert_eq!(fold_to_ascii("plain",), "plain");
/// ```
pub fn fold_to_ascii(text: &str,) -> Cow<'_, str,>
{
    if text.is_ascii() {
        return Cow::Borrowed(text,);
    }

    let mut folded = String::with_capacity(text.len(),);
    for candidate in text.chars() {
        if candidate.is_ascii() {
            folded.push(candidate,);
            continue;
        }

        if let Some(replacement,) = deunicode_char(candidate,) {
            folded.extend(replacement.chars().filter(char::is_ascii,),);
        }
    }

    Cow::Owned(folded,)
}
