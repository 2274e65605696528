// src/core/locale.rs
use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The two supported display languages. Serializes as `"en"` / `"es"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// Anything that isn't Spanish collapses to English.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        let lang = code.split(['-', '_']).next().unwrap_or("");
        if lang.eq_ignore_ascii_case("es") { Locale::Es } else { Locale::En }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Es,
            Locale::Es => Locale::En,
        }
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Locale::from_code(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_spanish_codes_collapse_to_english() {
        assert_eq!(Locale::from_code("es"), Locale::Es);
        assert_eq!(Locale::from_code(" ES "), Locale::Es);
        assert_eq!(Locale::from_code("es-MX"), Locale::Es);
        assert_eq!(Locale::from_code("en"), Locale::En);
        assert_eq!(Locale::from_code("fr"), Locale::En);
        assert_eq!(Locale::from_code(""), Locale::En);
        assert_eq!(Locale::from_code("espresso"), Locale::En);
    }

    #[test]
    fn toggle_flips_between_the_two() {
        assert_eq!(Locale::En.toggled(), Locale::Es);
        assert_eq!(Locale::Es.toggled().toggled(), Locale::Es);
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Locale::Es).unwrap(), "\"es\"");
        assert_eq!(serde_json::from_str::<Locale>("\"en\"").unwrap(), Locale::En);
    }
}
