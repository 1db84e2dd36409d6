#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
//! Translation catalog and locale metadata for Barkhood.
//!
//! Every supported [`Language`] owns one complete [`TranslationSet`]. The set
//! is a plain struct with one field per [`TranslationKey`], so a language that
//! forgets a key does not compile. Text direction and the speech locale are
//! derived from the language and never stored on their own.
//!
//! ```
//! use barkhood_i18n::{Direction, Language, TranslationKey, catalog};
//!
//! let strings = catalog(Language::He);
//! assert_eq!(Language::He.direction(), Direction::Rtl);
//! assert!(!strings.text(TranslationKey::AppTitle).is_empty());
//! ```

mod catalog;
mod keys;
mod language;
mod template;

pub use catalog::catalog;
pub use keys::{TranslationKey, TranslationSet};
pub use language::{DEFAULT_LANGUAGE, Direction, Language, LocaleMapping, SpeechLocale};
pub use template::format_template;
