// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pane sizes: automatic, absolute pixels, or a percentage of the splitter.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// Size of a pane along the splitter axis.
///
/// Parses from and formats to the familiar CSS-like forms:
///
/// ```
/// use understory_splitter::PaneSize;
///
/// assert_eq!("auto".parse(), Ok(PaneSize::Auto));
/// assert_eq!("200px".parse(), Ok(PaneSize::Pixels(200.0)));
/// assert_eq!("200".parse(), Ok(PaneSize::Pixels(200.0)));
/// assert_eq!("37.5%".parse(), Ok(PaneSize::Percent(37.5)));
/// assert_eq!(PaneSize::Percent(50.0).to_string(), "50%");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum PaneSize {
    /// Share the space left over by sized panes.
    #[default]
    Auto,
    /// Absolute length in pixels.
    Pixels(f64),
    /// Percentage of the splitter's extent.
    Percent(f64),
}

impl PaneSize {
    /// Pixel length against a splitter `extent`; `None` for [`PaneSize::Auto`].
    pub fn resolve(self, extent: f64) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Pixels(px) => Some(px),
            Self::Percent(pct) => Some(pct / 100.0 * extent),
        }
    }

    /// Returns `true` for sizes that follow the splitter's extent (percent and auto).
    pub fn is_relative(self) -> bool {
        matches!(self, Self::Auto | Self::Percent(_))
    }
}

impl fmt::Display for PaneSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Pixels(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Error returned when parsing a [`PaneSize`] fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaneSizeParseError {
    /// The input was empty.
    Empty,
    /// The numeric part is not a number.
    InvalidNumber(String),
    /// The value is negative or not finite.
    OutOfRange(String),
}

impl fmt::Display for PaneSizeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty pane size"),
            Self::InvalidNumber(s) => write!(f, "invalid pane size `{s}`"),
            Self::OutOfRange(s) => write!(f, "pane size `{s}` must be finite and non-negative"),
        }
    }
}

impl core::error::Error for PaneSizeParseError {}

impl FromStr for PaneSize {
    type Err = PaneSizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PaneSizeParseError::Empty);
        }
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        let (number, percent) = match s.strip_suffix('%') {
            Some(number) => (number, true),
            None => (s.strip_suffix("px").unwrap_or(s), false),
        };
        let value: f64 = number
            .trim_end()
            .parse()
            .map_err(|_| PaneSizeParseError::InvalidNumber(s.into()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(PaneSizeParseError::OutOfRange(s.into()));
        }
        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Pixels(value)
        })
    }
}

impl TryFrom<String> for PaneSize {
    type Error = PaneSizeParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PaneSize> for String {
    fn from(size: PaneSize) -> Self {
        use alloc::string::ToString;
        size.to_string()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn parses_forms() {
        assert_eq!(" AUTO ".parse(), Ok(PaneSize::Auto));
        assert_eq!("12.5 px".parse(), Ok(PaneSize::Pixels(12.5)));
        assert_eq!("0%".parse(), Ok(PaneSize::Percent(0.0)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<PaneSize>(), Err(PaneSizeParseError::Empty));
        assert!(matches!(
            "wide".parse::<PaneSize>(),
            Err(PaneSizeParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            "-4px".parse::<PaneSize>(),
            Err(PaneSizeParseError::OutOfRange(_))
        ));
        assert!(matches!(
            "inf%".parse::<PaneSize>(),
            Err(PaneSizeParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn resolves_against_extent() {
        assert_eq!(PaneSize::Percent(25.0).resolve(400.0), Some(100.0));
        assert_eq!(PaneSize::Pixels(30.0).resolve(400.0), Some(30.0));
        assert_eq!(PaneSize::Auto.resolve(400.0), None);
    }

    #[test]
    fn display_round_trips() {
        for size in [PaneSize::Auto, PaneSize::Pixels(120.0), PaneSize::Percent(33.25)] {
            assert_eq!(size.to_string().parse(), Ok(size));
        }
    }
}
