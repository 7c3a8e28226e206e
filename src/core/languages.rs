//! Languages understood by the M2M100 tokenizer

use crate::core::errors::{Result, TranslationError};
use crate::core::models::Language;

const fn lang(code: &'static str, name: &'static str) -> Language {
    Language { code, name }
}

/// The 100 language codes M2M100 was trained on, sorted by code.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    lang("af", "Afrikaans"),
    lang("am", "Amharic"),
    lang("ar", "Arabic"),
    lang("ast", "Asturian"),
    lang("az", "Azerbaijani"),
    lang("ba", "Bashkir"),
    lang("be", "Belarusian"),
    lang("bg", "Bulgarian"),
    lang("bn", "Bengali"),
    lang("br", "Breton"),
    lang("bs", "Bosnian"),
    lang("ca", "Catalan"),
    lang("ceb", "Cebuano"),
    lang("cs", "Czech"),
    lang("cy", "Welsh"),
    lang("da", "Danish"),
    lang("de", "German"),
    lang("el", "Greek"),
    lang("en", "English"),
    lang("es", "Spanish"),
    lang("et", "Estonian"),
    lang("fa", "Persian"),
    lang("ff", "Fulah"),
    lang("fi", "Finnish"),
    lang("fr", "French"),
    lang("fy", "Western Frisian"),
    lang("ga", "Irish"),
    lang("gd", "Scottish Gaelic"),
    lang("gl", "Galician"),
    lang("gu", "Gujarati"),
    lang("ha", "Hausa"),
    lang("he", "Hebrew"),
    lang("hi", "Hindi"),
    lang("hr", "Croatian"),
    lang("ht", "Haitian Creole"),
    lang("hu", "Hungarian"),
    lang("hy", "Armenian"),
    lang("id", "Indonesian"),
    lang("ig", "Igbo"),
    lang("ilo", "Iloko"),
    lang("is", "Icelandic"),
    lang("it", "Italian"),
    lang("ja", "Japanese"),
    lang("jv", "Javanese"),
    lang("ka", "Georgian"),
    lang("kk", "Kazakh"),
    lang("km", "Khmer"),
    lang("kn", "Kannada"),
    lang("ko", "Korean"),
    lang("lb", "Luxembourgish"),
    lang("lg", "Ganda"),
    lang("ln", "Lingala"),
    lang("lo", "Lao"),
    lang("lt", "Lithuanian"),
    lang("lv", "Latvian"),
    lang("mg", "Malagasy"),
    lang("mk", "Macedonian"),
    lang("ml", "Malayalam"),
    lang("mn", "Mongolian"),
    lang("mr", "Marathi"),
    lang("ms", "Malay"),
    lang("my", "Burmese"),
    lang("ne", "Nepali"),
    lang("nl", "Dutch"),
    lang("no", "Norwegian"),
    lang("ns", "Northern Sotho"),
    lang("oc", "Occitan"),
    lang("or", "Oriya"),
    lang("pa", "Punjabi"),
    lang("pl", "Polish"),
    lang("ps", "Pashto"),
    lang("pt", "Portuguese"),
    lang("ro", "Romanian"),
    lang("ru", "Russian"),
    lang("sd", "Sindhi"),
    lang("si", "Sinhala"),
    lang("sk", "Slovak"),
    lang("sl", "Slovenian"),
    lang("so", "Somali"),
    lang("sq", "Albanian"),
    lang("sr", "Serbian"),
    lang("ss", "Swati"),
    lang("su", "Sundanese"),
    lang("sv", "Swedish"),
    lang("sw", "Swahili"),
    lang("ta", "Tamil"),
    lang("th", "Thai"),
    lang("tl", "Tagalog"),
    lang("tn", "Tswana"),
    lang("tr", "Turkish"),
    lang("uk", "Ukrainian"),
    lang("ur", "Urdu"),
    lang("uz", "Uzbek"),
    lang("vi", "Vietnamese"),
    lang("wo", "Wolof"),
    lang("xh", "Xhosa"),
    lang("yi", "Yiddish"),
    lang("yo", "Yoruba"),
    lang("zh", "Chinese"),
    lang("zu", "Zulu"),
];

/// Look up a language by its code
pub fn find(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES
        .binary_search_by(|l| l.code.cmp(code))
        .ok()
        .map(|idx| &SUPPORTED_LANGUAGES[idx])
}

pub fn is_supported(code: &str) -> bool {
    find(code).is_some()
}

/// Reject codes the model cannot handle.
pub fn ensure_supported(code: &str) -> Result<&'static Language> {
    find(code).ok_or_else(|| TranslationError::UnsupportedLanguage {
        code: code.to_string(),
    })
}
