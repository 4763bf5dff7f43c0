//! Small, pure text utilities: slugs, conditional joins, affix checks and
//! case conversions.
//!
//! Every function is total over valid UTF-8 and keeps no state between
//! calls. The only shared resource is the transliteration engine used by
//! [`slugify`], which is built once on first use; [`Slugifier`] accepts an
//! explicit engine instead.

mod affix;
mod case;
mod error;
mod join;
mod slug;
mod transliterate;
mod value;

pub use affix::{ends_with, starts_with};
pub use case::{capitalize, convert_to_title_case, humanize, humanize_const};
pub use error::Error;
pub use join::{DEFAULT_DELIMITER, Presence, join_not_empty, join_not_empty_default};
pub use slug::{SLUG_SEPARATOR, Slug, Slugifier, is_slug_char, slugify, urlize};
pub use transliterate::{AsciiTransliterator, Transliterator, fold_to_ascii};
pub use value::{Renderable, TextObject, Value, is_coercible_to_string};
