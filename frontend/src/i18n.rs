use std::str::FromStr;
use thiserror::Error;

/// Languages the reset page ships strings for (see `locales/`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale `{0}`")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept region-qualified tags such as `es-MX`
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Looks up `key` in the given locale.
pub fn tr(locale: Locale, key: &str) -> String {
    rust_i18n::t!(key, locale = locale.code()).to_string()
}

/// Countdown line shown before the automatic jump to sign-in.
pub fn redirect_notice(locale: Locale, seconds: u64) -> String {
    rust_i18n::t!("success.redirect", locale = locale.code(), seconds = seconds).to_string()
}
