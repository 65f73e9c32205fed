//! Locale-derived separator characters.
//!
//! These used to be process-wide state rebuilt on every locale change. Here
//! they are an ordinary value that callers thread into each evaluation, so
//! one evaluation always sees one consistent set of characters.

/// Language codes whose locales write the decimal point as `,`.
const COMMA_DECIMAL_LANGUAGES: &[&str] = &[
    "af", "az", "be", "bg", "bs", "ca", "cs", "da", "de", "el", "es", "et", "eu", "fi", "fo",
    "fr", "gl", "hr", "hu", "hy", "id", "is", "it", "ka", "kk", "ky", "lt", "lv", "mk", "mn",
    "nb", "nl", "nn", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sq", "sr", "sv", "tr", "uk",
    "uz", "vi",
];

/// Environment variables consulted by [`Separators::from_env`], highest priority first.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_NUMERIC", "LANG"];

/// The locale-sensitive characters of the expression grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Separators {
    pub decimal_point: char,
    pub grouping: char,
    pub binary: char,
    pub hexadecimal: char,
    pub matrix: char,
}

impl Separators {
    /// The ASCII form every internal pass works in: `.` decimals, `,` columns.
    pub const fn canonical() -> Self {
        Self {
            decimal_point: '.',
            grouping: ',',
            binary: ' ',
            hexadecimal: ' ',
            matrix: ',',
        }
    }

    /// Derive the remaining separators from a decimal point.
    ///
    /// The matrix separator defaults to `,` and switches to `;` when `,` is
    /// already taken by the decimal point.
    pub const fn for_decimal_point(decimal_point: char) -> Self {
        if decimal_point == ',' {
            Self {
                decimal_point,
                grouping: '.',
                binary: ' ',
                hexadecimal: ' ',
                matrix: ';',
            }
        } else {
            Self {
                decimal_point,
                grouping: ',',
                binary: ' ',
                hexadecimal: ' ',
                matrix: ',',
            }
        }
    }

    /// Separators for a POSIX (`de_DE.UTF-8`) or BCP-47 (`pt-BR`) locale tag.
    ///
    /// Unknown tags, `C` and `POSIX` get the canonical separators.
    pub fn from_locale(tag: &str) -> Self {
        let language = tag
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if COMMA_DECIMAL_LANGUAGES.contains(&language.as_str()) {
            Self::for_decimal_point(',')
        } else {
            Self::canonical()
        }
    }

    /// Separators for the locale named by `LC_ALL`, `LC_NUMERIC` or `LANG`.
    pub fn from_env() -> Self {
        LOCALE_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .map_or_else(Self::canonical, |tag| {
                tracing::debug!(locale = %tag, "separators from environment");
                Self::from_locale(&tag)
            })
    }

    /// Whether this locale differs from the internal ASCII form.
    pub fn is_canonical(&self) -> bool {
        *self == Self::canonical()
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests;
