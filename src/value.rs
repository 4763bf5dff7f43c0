// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Dynamic values and the string-coercibility predicate.
//!
//! [`Value`] models data whose shape is only known at runtime, typically
//! decoded from JSON. Scalars can always be rendered as text; collections
//! never can; opaque objects can when they expose a [`fmt::Display`]
//! rendering through [`TextObject`].

use std::{borrow::Cow, collections::BTreeMap, fmt, sync::Arc};

use crate::{error::Error, join::Presence};

/// Opaque record carried by [`Value::Object`].
pub trait TextObject: fmt::Debug + Send + Sync
{
    /// Returns the text rendering of the object, if it has one.
    fn as_display(&self,) -> Option<&dyn fmt::Display,>
    {
        None
    }
}

/// Wrapper exposing any [`fmt::Display`] type as a renderable object.
#[derive(Debug, Clone,)]
pub struct Renderable<T,>(pub T,);

impl<T,> TextObject for Renderable<T,>
where
    T: fmt::Display + fmt::Debug + Send + Sync,
{
    fn as_display(&self,) -> Option<&dyn fmt::Display,>
    {
        Some(&self.0,)
    }
}

/// Value with a runtime-determined shape.
///
/// # Examples
///
/// ```
/// use textcraft::{Value, is_coercible_to_string};
///
/// assert!(is_coercible_to_string(&Value::from(42,)));
/// assert!(!is_coercible_to_string(&Value::Null));
/// assert!(!is_coercible_to_string(&Value::List(Vec::new(),)));
/// ```
#[derive(Debug, Clone, Default,)]
pub enum Value
{
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool,),
    /// Signed integer scalar.
    Integer(i64,),
    /// Floating point scalar.
    Float(f64,),
    /// Text scalar.
    Text(String,),
    /// Ordered sequence of values.
    List(Vec<Value,>,),
    /// String-keyed mapping of values.
    Map(BTreeMap<String, Value,>,),
    /// Opaque record that may expose a text rendering.
    Object(Arc<dyn TextObject,>,),
}

impl Value
{
    /// Wraps an opaque object.
    pub fn object<T,>(object: T,) -> Self
    where
        T: TextObject + 'static,
    {
        Self::Object(Arc::new(object,),)
    }

    /// Wraps a displayable object so it renders through its `Display` impl.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::net::Ipv4Addr;
    ///
    /// use textcraft::Value;
    ///
    /// let value = Value::renderable(Ipv4Addr::LOCALHOST,);
    /// assert_eq!(value.to_text().as_deref(), Some("127.0.0.1"));
    /// ```
    pub fn renderable<T,>(object: T,) -> Self
    where
        T: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::object(Renderable(object,),)
    }

    /// Parses a JSON document into a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when `text` is not valid JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use textcraft::Value;
    ///
    /// let value = Value::from_json("[1, 2]",)?;
    /// assert!(!value.is_coercible_to_string());
    /// # Ok::<(), textcraft::Error>(())
    /// ```
    pub fn from_json(text: &str,) -> Result<Self, Error,>
    {
        let parsed: serde_json::Value = serde_json::from_str(text,)?;
        Ok(parsed.into(),)
    }

    /// Returns `true` for scalars and for objects exposing a text rendering.
    pub fn is_coercible_to_string(&self,) -> bool
    {
        match self {
            Self::Bool(_,) | Self::Integer(_,) | Self::Float(_,) | Self::Text(_,) => true,
            Self::Object(object,) => object.as_display().is_some(),
            Self::Null | Self::List(_,) | Self::Map(_,) => false,
        }
    }

    /// Renders the value as text when it is coercible.
    ///
    /// `true` renders as `"1"` and `false` as the empty string.
    pub fn to_text(&self,) -> Option<String,>
    {
        match self {
            Self::Bool(flag,) => Some(if *flag { "1".to_owned() } else { String::new() },),
            Self::Integer(number,) => Some(number.to_string(),),
            Self::Float(number,) => Some(number.to_string(),),
            Self::Text(text,) => Some(text.clone(),),
            Self::Object(object,) => object.as_display().map(ToString::to_string,),
            Self::Null | Self::List(_,) | Self::Map(_,) => None,
        }
    }

    /// Returns `true` for values treated as empty: null, `false`, zero, the
    /// strings `""` and `"0"`, and empty collections.
    pub fn is_empty_like(&self,) -> bool
    {
        match self {
            Self::Null => true,
            Self::Bool(flag,) => !flag,
            Self::Integer(number,) => *number == 0,
            Self::Float(number,) => *number == 0.0,
            Self::Text(text,) => text.is_empty() || text == "0",
            Self::List(items,) => items.is_empty(),
            Self::Map(entries,) => entries.is_empty(),
            Self::Object(_,) => false,
        }
    }
}

/// Returns `true` when `value` can be rendered as text.
///
/// Scalars (booleans, numbers, text) qualify, as do objects exposing a
/// [`fmt::Display`] rendering. Null, lists, maps and objects without a
/// rendering do not.
pub fn is_coercible_to_string(value: &Value,) -> bool
{
    value.is_coercible_to_string()
}

/// Present values are those that are not empty-like and can be rendered.
/// Non-empty collections and objects without a rendering are skipped.
impl Presence for Value
{
    fn present_text(&self,) -> Option<Cow<'_, str,>,>
    {
        if self.is_empty_like() {
            return None;
        }

        match self {
            Self::Text(text,) => Some(Cow::Borrowed(text.as_str(),),),
            other => other.to_text().map(Cow::Owned,),
        }
    }
}

impl From<serde_json::Value,> for Value
{
    fn from(value: serde_json::Value,) -> Self
    {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag,) => Self::Bool(flag,),
            serde_json::Value::Number(number,) => match number.as_i64() {
                Some(integer,) => Self::Integer(integer,),
                None => number.as_f64().map_or(Self::Null, Self::Float,),
            },
            serde_json::Value::String(text,) => Self::Text(text,),
            serde_json::Value::Array(items,) => {
                Self::List(items.into_iter().map(Self::from,).collect(),)
            }
            serde_json::Value::Object(entries,) => Self::Map(
                entries.into_iter().map(|(key, value,)| (key, Self::from(value,),),).collect(),
            ),
        }
    }
}

impl From<bool,> for Value
{
    fn from(flag: bool,) -> Self
    {
        Self::Bool(flag,)
    }
}

impl From<i64,> for Value
{
    fn from(number: i64,) -> Self
    {
        Self::Integer(number,)
    }
}

impl From<i32,> for Value
{
    fn from(number: i32,) -> Self
    {
        Self::Integer(i64::from(number,),)
    }
}

impl From<f64,> for Value
{
    fn from(number: f64,) -> Self
    {
        Self::Float(number,)
    }
}

impl From<&str,> for Value
{
    fn from(text: &str,) -> Self
    {
        Self::Text(text.to_owned(),)
    }
}

impl From<String,> for Value
{
    fn from(text: String,) -> Self
    {
        Self::Text(text,)
    }
}

impl<T,> From<Option<T,>,> for Value
where
    T: Into<Value,>,
{
    fn from(value: Option<T,>,) -> Self
    {
        value.map_or(Self::Null, Into::into,)
    }
}

impl<T,> From<Vec<T,>,> for Value
where
    T: Into<Value,>,
{
    fn from(items: Vec<T,>,) -> Self
    {
        Self::List(items.into_iter().map(Into::into,).collect(),)
    }
}
