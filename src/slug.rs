// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for deriving URL-safe slugs from user-supplied strings.
//!
//! Slugs produced by this module contain only lowercase ASCII letters,
//! digits, underscores and hyphens. Text in any script is transliterated
//! first, so `"Привет, мир"` becomes `"privet-mir"`.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    error::Error,
    transliterate::{AsciiTransliterator, Transliterator, fold_to_ascii},
};

/// Separator placed between the words of a slug.
pub const SLUG_SEPARATOR: char = '-';

/// Runs of characters that are neither letters nor decimal digits.
static SEPARATOR_RUN: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{Nd}]+",).expect("separator run pattern is valid",)
},);

/// Slugifies `text` using the shared transliteration engine.
///
/// Returns an empty string for empty input, and also when nothing in the
/// input survives transliteration.
///
/// # Examples
///
/// ```
/// use textcraft::slugify;
///
/// assert_eq!(slugify("Hello, World!",), "hello-world");
/// assert_eq!(slugify("café",), "cafe");
/// assert_eq!(slugify("",), "");
/// ```
pub fn slugify(text: &str,) -> String
{
    Slugifier::shared().slugify(text,)
}

/// Alias of [`slugify`] kept for callers that build URLs.
pub fn urlize(text: &str,) -> String
{
    slugify(text,)
}

/// Slug generator bound to a transliteration engine.
///
/// [`slugify`] uses the process-wide [`AsciiTransliterator`]; construct a
/// `Slugifier` directly to supply a different engine.
///
/// # Examples
///
/// ```
/// use textcraft::{AsciiTransliterator, Slugifier};
///
/// let slugifier = Slugifier::new(AsciiTransliterator::default(),);
/// assert_eq!(slugifier.slugify("  Docs / Überblick  ",), "docs-uberblick");
/// ```
#[derive(Debug, Clone, Copy, Default,)]
pub struct Slugifier<T = AsciiTransliterator,>
{
    engine: T,
}

impl Slugifier<&'static AsciiTransliterator,>
{
    /// Returns a slugifier borrowing the shared engine.
    pub fn shared() -> Self
    {
        Self::new(AsciiTransliterator::shared(),)
    }
}

impl<T,> Slugifier<T,>
where
    T: Transliterator,
{
    /// Creates a slugifier that transliterates through `engine`.
    pub fn new(engine: T,) -> Self
    {
        Self {
            engine,
        }
    }

    /// Returns the engine used for transliteration.
    pub fn engine(&self,) -> &T
    {
        &self.engine
    }

    /// Builds a slug from `text`.
    ///
    /// Separator runs are collapsed and trimmed before transliteration.
    /// Hyphens that become adjacent because a word transliterated to nothing
    /// are kept as they are; hyphens left at either end are trimmed again.
    pub fn slugify(&self, text: &str,) -> String
    {
        if text.is_empty() {
            return String::new();
        }

        let separated = SEPARATOR_RUN.replace_all(text, "-",);
        let trimmed = separated.trim_matches(SLUG_SEPARATOR,);
        let transliterated = self.engine.transliterate(trimmed,);
        let folded = fold_to_ascii(&transliterated,);

        let cleaned: String = folded
            .chars()
            .map(|candidate| candidate.to_ascii_lowercase(),)
            .filter(|candidate| is_slug_char(*candidate,),)
            .collect();
        let slug = cleaned.trim_matches(SLUG_SEPARATOR,).to_owned();

        trace!(input = text, slug = slug.as_str(), "derived slug");
        slug
    }
}

/// Returns `true` for characters allowed in a slug: `[a-z0-9_-]`.
pub fn is_slug_char(candidate: char,) -> bool
{
    matches!(candidate, 'a'..='z' | '0'..='9' | '_' | '-')
}

/// Validated slug text.
///
/// The inner string only ever contains characters accepted by
/// [`is_slug_char`]. The empty slug is valid.
///
/// # Examples
///
/// ```
/// use textcraft::Slug;
///
/// let slug = Slug::from_text("Release Notes 2.0",);
/// assert_eq!(slug.as_str(), "release-notes-2-0");
///
/// assert!(Slug::parse("release-notes",).is_ok());
/// assert!(Slug::parse("Release Notes",).is_err());
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String,);

impl Slug
{
    /// Slugifies arbitrary text with the shared engine.
    pub fn from_text(text: &str,) -> Self
    {
        Self(slugify(text,),)
    }

    /// Validates text that is expected to already be a slug.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first character outside
    /// `[a-z0-9_-]`.
    pub fn parse(text: &str,) -> Result<Self, Error,>
    {
        Self::validate(text,)?;
        Ok(Self(text.to_owned(),),)
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self,) -> &str
    {
        &self.0
    }

    /// Returns `true` when the slug holds no characters.
    pub fn is_empty(&self,) -> bool
    {
        self.0.is_empty()
    }

    /// Consumes the slug and returns the inner string.
    pub fn into_string(self,) -> String
    {
        self.0
    }

    fn validate(text: &str,) -> Result<(), Error,>
    {
        match text.chars().find(|candidate| !is_slug_char(*candidate,),) {
            Some(invalid,) => Err(Error::validation(format!(
                "slug '{text}' contains invalid character {invalid:?}"
            ),),),
            None => Ok((),),
        }
    }
}

impl TryFrom<String,> for Slug
{
    type Error = Error;

    fn try_from(value: String,) -> Result<Self, Self::Error,>
    {
        Self::validate(&value,)?;
        Ok(Self(value,),)
    }
}

impl TryFrom<&str,> for Slug
{
    type Error = Error;

    fn try_from(value: &str,) -> Result<Self, Self::Error,>
    {
        Self::parse(value,)
    }
}

impl From<Slug,> for String
{
    fn from(slug: Slug,) -> Self
    {
        slug.0
    }
}

impl AsRef<str,> for Slug
{
    fn as_ref(&self,) -> &str
    {
        &self.0
    }
}

impl fmt::Display for Slug
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        formatter.write_str(&self.0,)
    }
}
