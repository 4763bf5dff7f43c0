// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Joining sequences while skipping empty elements.
//!
//! Emptiness is decided by the [`Presence`] trait. Missing values, empty
//! strings, the string `"0"`, numeric zero and `false` are all considered
//! empty and never reach the output.

use std::borrow::Cow;

/// Delimiter used by [`join_not_empty_default`].
pub const DEFAULT_DELIMITER: &str = ", ";

/// Values that may be absent from a joined sequence.
pub trait Presence
{
    /// Returns the rendered text of the value, or `None` when the value
    /// counts as empty.
    fn present_text(&self,) -> Option<Cow<'_, str,>,>;

    /// Returns `true` when the value would be skipped by [`join_not_empty`].
    fn is_blank(&self,) -> bool
    {
        self.present_text().is_none()
    }
}

impl Presence for str
{
    fn present_text(&self,) -> Option<Cow<'_, str,>,>
    {
        if self.is_empty() || self == "0" { None } else { Some(Cow::Borrowed(self,),) }
    }
}

impl Presence for String
{
    fn present_text(&self,) -> Option<Cow<'_, str,>,>
    {
        self.as_str().present_text()
    }
}

impl Presence for Cow<'_, str,>
{
    fn present_text(&self,) -> Option<Cow<'_, str,>,>
    {
        self.as_ref().present_text()
    }
}

impl Presence for char
{
    fn present_text(&self,) -> Option<Cow<'_, str,>,>
    {
        if *self == '0' { None } else { Some(Cow::Owned(self.to_string(),),) }
    }
}

impl Presence for bool
{
    fn present_text(&self,) -> Option<Cow<'_, str,>,>
    {
        self.then_some(Cow::Borrowed("1",),)
    }
}

macro_rules! integer_presence {
    ($($kind:ty),* $(,)?) => {
        $(
            impl Presence for $kind
            {
                fn present_text(&self,) -> Option<Cow<'_, str,>,>
                {
                    if *self == 0 { None } else { Some(Cow::Owned(self.to_string(),),) }
                }
            }
        )*
    };
}

integer_presence!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_presence {
    ($($kind:ty),* $(,)?) => {
        $(
            impl Presence for $kind
            {
                fn present_text(&self,) -> Option<Cow<'_, str,>,>
                {
                    if *self == 0.0 { None } else { Some(Cow::Owned(self.to_string(),),) }
                }
            }
        )*
    };
}

float_presence!(f32, f64);

impl<T,> Presence for Option<T,>
where
    T: Presence,
{
    fn present_text(&self,) -> Option<Cow<'_, str,>,>
    {
        self.as_ref().and_then(Presence::present_text,)
    }
}

impl<T,> Presence for &T
where
    T: Presence + ?Sized,
{
    fn present_text(&self,) -> Option<Cow<'_, str,>,>
    {
        (**self).present_text()
    }
}

/// Joins the present elements of `elements` with `delimiter`.
///
/// Element order is preserved. Returns an empty string when every element
/// is blank or the sequence is empty.
///
/// # Examples
///
/// ```
/// use textcraft::join_not_empty;
///
/// let parts = [Some("a",), Some("",), Some("b",), None, Some("c",)];
/// assert_eq!(join_not_empty(parts, " | ",), "a | b | c");
/// assert_eq!(join_not_empty(Vec::<&str,>::new(), ", ",), "");
/// ```
pub fn join_not_empty<I,>(elements: I, delimiter: &str,) -> String
where
    I: IntoIterator,
    I::Item: Presence,
{
    let mut joined = String::new();
    let mut first = true;

    for element in elements {
        let Some(text,) = element.present_text() else {
            continue;
        };

        if !first {
            joined.push_str(delimiter,);
        }
        joined.push_str(&text,);
        first = false;
    }

    joined
}

/// Joins the present elements of `elements` with [`DEFAULT_DELIMITER`].
///
/// # Examples
///
/// ```
/// use textcraft::join_not_empty_default;
///
/// assert_eq!(join_not_empty_default(["street", "", "city",],), "street, city");
/// ```
pub fn join_not_empty_default<I,>(elements: I,) -> String
where
    I: IntoIterator,
    I::Item: Presence,
{
    join_not_empty(elements, DEFAULT_DELIMITER,)
}
