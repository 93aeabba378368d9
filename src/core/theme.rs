//! Light/dark theme preference

use crate::core::error::DashboardError;
use std::fmt;
use std::str::FromStr;

/// Page color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light background (default)
    #[default]
    Light,
    /// Dark background
    Dark,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle button: the theme you would switch to
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }

    /// Stored/attribute value (`light` or `dark`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference, falling back to light for empty or unknown values
    #[must_use]
    pub fn from_preference(value: &str) -> Self {
        if value.trim().is_empty() {
            return Self::default();
        }
        value.parse().unwrap_or_else(|e| {
            crate::warn!("{e}; using light theme");
            Self::default()
        })
    }
}

impl FromStr for Theme {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(DashboardError::InvalidInput(format!(
                "unknown theme '{s}' (expected light or dark)"
            ))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
