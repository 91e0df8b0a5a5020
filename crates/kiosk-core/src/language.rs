//! # Languages
//!
//! Language codes the storefront can offer. The core four are shown first
//! in the customer language picker.

/// Shown first in the customer UI.
pub const CORE_LANGUAGES: &[&str] = &["ko", "en", "zh", "ja"];

/// Every language an admin may enable.
pub const ALL_LANGUAGES: &[(&str, &str)] = &[
    ("ko", "한국어"),
    ("en", "English"),
    ("zh", "中文"),
    ("ja", "日本語"),
    // European
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("es", "Español"),
    ("it", "Italiano"),
    ("pt", "Português"),
    ("nl", "Nederlands"),
    ("pl", "Polski"),
    ("cs", "Čeština"),
    ("ro", "Română"),
    ("hu", "Magyar"),
    ("sv", "Svenska"),
    ("da", "Dansk"),
    ("no", "Norsk"),
    ("fi", "Suomi"),
    ("el", "Ελληνικά"),
    ("uk", "Українська"),
    ("bg", "Български"),
    ("hr", "Hrvatski"),
    ("sk", "Slovenčina"),
    ("sl", "Slovenščina"),
    // Asian
    ("vi", "Tiếng Việt"),
    ("th", "ภาษาไทย"),
    ("id", "Bahasa Indonesia"),
    ("ms", "Bahasa Melayu"),
    ("hi", "हिन्दी"),
    ("bn", "বাংলা"),
    ("ta", "தமிழ்"),
    ("tl", "Filipino"),
    ("km", "ខ្មែរ"),
    ("my", "မြန်မာ"),
    ("mn", "Монгол"),
    ("ne", "नेपाली"),
    // Middle Eastern
    ("ar", "العربية"),
    ("tr", "Türkçe"),
    ("he", "עברית"),
    ("fa", "فارسی"),
    // African
    ("sw", "Kiswahili"),
    ("ru", "Русский"),
];

/// Whether `code` is a known language.
pub fn is_known(code: &str) -> bool {
    ALL_LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Native label for a language code, falling back to the code itself.
pub fn label(code: &str) -> &str {
    match ALL_LANGUAGES.iter().find(|(c, _)| *c == code) {
        Some((_, l)) => l,
        None => code,
    }
}

/// Whether `code` is one of the core four.
pub fn is_core(code: &str) -> bool {
    CORE_LANGUAGES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_languages() {
        assert!(is_known("ko"));
        assert!(is_known("sw"));
        assert!(!is_known("xx"));
        assert!(!is_known(""));
    }

    #[test]
    fn test_labels() {
        assert_eq!(label("ja"), "日本語");
        assert_eq!(label("xx"), "xx");
    }

    #[test]
    fn test_core_languages_are_known() {
        for code in CORE_LANGUAGES {
            assert!(is_known(code));
            assert!(is_core(code));
        }
        assert!(!is_core("fr"));
    }
}
