use std::fmt;
use std::str::FromStr;

use crate::PackError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionUnit {
    MatchParent,
    WrapContent,
    Px,
    Dp,
    Sp,
    Pt,
    In,
    Mm,
}

impl DimensionUnit {
    const SUFFIXED: [(DimensionUnit, &'static str); 6] = [
        (DimensionUnit::Px, "px"),
        (DimensionUnit::Dp, "dp"),
        (DimensionUnit::Sp, "sp"),
        (DimensionUnit::Pt, "pt"),
        (DimensionUnit::In, "in"),
        (DimensionUnit::Mm, "mm"),
    ];

    /// `match_parent` and `wrap_content` carry no magnitude of their own.
    pub fn is_keyword(self) -> bool {
        matches!(self, DimensionUnit::MatchParent | DimensionUnit::WrapContent)
    }

    pub fn suffix(self) -> Option<&'static str> {
        Self::SUFFIXED
            .iter()
            .find(|(unit, _)| *unit == self)
            .map(|(_, suffix)| *suffix)
    }
}

/// A length such as `16dp` or one of the layout keywords `match_parent`
/// (alias `fill_parent`) and `wrap_content`.
///
/// The keyword forms carry the conventional sentinel values `-1` and `-2`;
/// equality ignores `value` for them.
#[derive(Debug, Clone, Copy)]
pub struct Dimension {
    pub value: f64,
    pub unit: DimensionUnit,
}

impl Dimension {
    pub const MATCH_PARENT: Dimension = Dimension {
        value: -1.0,
        unit: DimensionUnit::MatchParent,
    };

    pub const WRAP_CONTENT: Dimension = Dimension {
        value: -2.0,
        unit: DimensionUnit::WrapContent,
    };

    pub fn new(value: f64, unit: DimensionUnit) -> Self {
        Self { value, unit }
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && (self.unit.is_keyword() || self.value == other.value)
    }
}

impl FromStr for Dimension {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "match_parent" | "fill_parent" => return Ok(Self::MATCH_PARENT),
            "wrap_content" => return Ok(Self::WRAP_CONTENT),
            _ => {}
        }
        let invalid = || PackError::InvalidDimension(s.to_owned());
        let (unit, number) = DimensionUnit::SUFFIXED
            .iter()
            .find_map(|(unit, suffix)| s.strip_suffix(*suffix).map(|n| (*unit, n)))
            .ok_or_else(invalid)?;
        let value: f64 = number.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(Self { value, unit })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            DimensionUnit::MatchParent => f.write_str("match_parent"),
            DimensionUnit::WrapContent => f.write_str("wrap_content"),
            unit => write!(f, "{}{}", self.value, unit.suffix().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_canonical_forms() {
        for text in ["12dp", "12.5sp", "-3px", "1pt", "2in", "0.5mm", "match_parent", "wrap_content"] {
            let dim: Dimension = text.parse().unwrap();
            assert_eq!(dim.to_string(), text);
        }
        let fill: Dimension = "fill_parent".parse().unwrap();
        assert_eq!(fill, Dimension::MATCH_PARENT);
        assert_eq!(fill.to_string(), "match_parent");
    }

    #[test]
    fn keyword_equality_ignores_value() {
        assert_eq!(Dimension::new(5.0, DimensionUnit::MatchParent), Dimension::MATCH_PARENT);
        assert_ne!(Dimension::MATCH_PARENT, Dimension::WRAP_CONTENT);
        assert_ne!(
            Dimension::new(1.0, DimensionUnit::Dp),
            Dimension::new(2.0, DimensionUnit::Dp)
        );
    }

    #[test]
    fn rejects_bad_dimensions() {
        for text in ["12", "dp", "12em", "abcdp", "infdp"] {
            assert_eq!(
                text.parse::<Dimension>(),
                Err(PackError::InvalidDimension(text.to_owned()))
            );
        }
    }
}
