//! Static string tables, one per supported language.

mod de;
mod en;
mod es;
mod fr;
mod he;
mod hi;
mod zh;

use crate::keys::TranslationSet;
use crate::language::Language;

/// Complete string table for `language`.
#[must_use]
pub const fn catalog(language: Language) -> &'static TranslationSet {
    match language {
        Language::He => &he::HE,
        Language::En => &en::EN,
        Language::Zh => &zh::ZH,
        Language::Hi => &hi::HI,
        Language::De => &de::DE,
        Language::Es => &es::ES,
        Language::Fr => &fr::FR,
    }
}
