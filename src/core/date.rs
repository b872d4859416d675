//! Long-form localized date for the header stamp.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Locale, TimeZone};
use log::warn;
use std::fmt::{Display, Write};

pub const DEFAULT_LOCALE: &str = "es_ES";
pub const DEFAULT_DATE_FORMAT: &str = "%A, %-d de %B de %Y";

/// Parse a POSIX locale name (`es_ES`, `en_US`), falling back to Spanish.
pub fn parse_locale(name: &str) -> Locale {
    Locale::try_from(name).ok().unwrap_or_else(|| {
        warn!("Unknown locale '{}', falling back to {}", name, DEFAULT_LOCALE);
        Locale::es_ES
    })
}

/// Whether chrono understands every specifier in `pattern`.
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Render `now` as e.g. `domingo, 18 de octubre de 2026`.
///
/// A pattern chrono cannot render falls back to [`DEFAULT_DATE_FORMAT`].
pub fn format_long_date<Tz>(now: &DateTime<Tz>, locale: Locale, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if write!(out, "{}", now.format_localized(pattern, locale)).is_ok() {
        return out;
    }

    warn!("Invalid date format '{}', using {}", pattern, DEFAULT_DATE_FORMAT);
    out.clear();
    let _ = write!(out, "{}", now.format_localized(DEFAULT_DATE_FORMAT, locale));
    out
}

/// Today's stamp in local time.
pub fn today(locale: Locale, pattern: &str) -> String {
    format_long_date(&chrono::Local::now(), locale, pattern)
}
