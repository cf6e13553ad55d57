// src/models/lang.rs

//! Display language codes and their backend mapping.

use std::fmt;

/// Languages the site is published in.
///
/// Internal codes (`ge`, `en`, `ru`) are what the CLI and locale files use;
/// the backend expects ISO codes, so Georgian travels as `ka` on the wire.
/// Unknown codes fall back to [`Lang::Ge`], the site's primary language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Ge,
    En,
    Ru,
}

impl Lang {
    /// Internal code used by the CLI and locale file names.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Ge => "ge",
            Lang::En => "en",
            Lang::Ru => "ru",
        }
    }

    /// Code the backend expects in the `lang` query parameter.
    pub fn backend_code(self) -> &'static str {
        match self {
            Lang::Ge => "ka",
            Lang::En => "en",
            Lang::Ru => "ru",
        }
    }

    /// Parse an internal code, falling back to the default for anything else.
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "ge" | "ka" => Lang::Ge,
            "en" => Lang::En,
            "ru" => Lang::Ru,
            _ => Lang::default(),
        }
    }

    /// All supported languages, in site order.
    pub fn all() -> [Lang; 3] {
        [Lang::Ge, Lang::En, Lang::Ru]
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_mapping() {
        assert_eq!(Lang::Ge.backend_code(), "ka");
        assert_eq!(Lang::En.backend_code(), "en");
        assert_eq!(Lang::Ru.backend_code(), "ru");
    }

    #[test]
    fn test_from_code_known() {
        assert_eq!(Lang::from_code("en"), Lang::En);
        assert_eq!(Lang::from_code("RU"), Lang::Ru);
        assert_eq!(Lang::from_code("ka"), Lang::Ge);
    }

    #[test]
    fn test_from_code_unknown_falls_back() {
        assert_eq!(Lang::from_code("fr"), Lang::Ge);
        assert_eq!(Lang::from_code(""), Lang::Ge);
    }
}
