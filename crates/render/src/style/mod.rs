//! Light/dark theming.
//!
//! A [`Theme`] is nothing more than a pair of colour tokens. Night swaps the
//! two so that text stays readable against the background.

pub(crate) mod variables;

pub use self::variables::{CssVariables, Rgb};
use crate::error::{Error, ErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

const DARK: Rgb = Rgb(10, 10, 20);
const LIGHT: Rgb = Rgb(255, 255, 255);

/// A concrete colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}
impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    /// Values for `--color-dark` and `--color-light`, in that order.
    pub fn colors(&self) -> (Rgb, Rgb) {
        match self {
            Theme::Day => (DARK, LIGHT),
            Theme::Night => (LIGHT, DARK),
        }
    }

    pub fn variables(&self) -> CssVariables {
        let (dark, light) = self.colors();
        [("color-dark", dark), ("color-light", light)].into_iter().collect()
    }
}
impl FromStr for Theme {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "day" | "light" => Self::Day,
            "night" | "dark" => Self::Night,
            _ => exn::bail!(ErrorKind::UnknownTheme(s.to_string())),
        })
    }
}
impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// The configured theme, which may defer to the host's dark-mode setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Day,
    Night,
    #[default]
    System,
}
impl ThemePreference {
    pub fn resolve(&self, prefers_dark: bool) -> Theme {
        match self {
            Self::Day => Theme::Day,
            Self::Night => Theme::Night,
            Self::System if prefers_dark => Theme::Night,
            Self::System => Theme::Day,
        }
    }
}
impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Day => Self::Day,
            Theme::Night => Self::Night,
        }
    }
}
