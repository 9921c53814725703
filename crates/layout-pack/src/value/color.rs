use crate::PackError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Int(ColorInt),
    StateList(ColorStateList),
}

/// A packed ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorInt {
    pub value: i32,
}

impl ColorInt {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`.
    pub fn parse(text: &str) -> Result<Self, PackError> {
        let invalid = || PackError::InvalidColor(text.to_owned());
        let hex = text.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let rgb = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        let argb = match hex.len() {
            6 => 0xFF00_0000 | rgb,
            8 => rgb,
            _ => return Err(invalid()),
        };
        Ok(Self {
            value: argb as i32,
        })
    }
}

/// Colors selected by view state; `states[i]` is the state set for
/// `colors[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorStateList {
    states: Vec<Vec<i32>>,
    colors: Vec<i32>,
}

impl ColorStateList {
    pub fn new(states: Vec<Vec<i32>>, colors: Vec<i32>) -> Result<Self, PackError> {
        if states.len() != colors.len() {
            return Err(PackError::LengthMismatch {
                what: "color state list",
                left: states.len(),
                right: colors.len(),
            });
        }
        Ok(Self { states, colors })
    }

    pub fn states(&self) -> &[Vec<i32>] {
        &self.states
    }

    pub fn colors(&self) -> &[i32] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(ColorInt::parse("#ff0000").unwrap().value, 0xFFFF_0000_u32 as i32);
        assert_eq!(ColorInt::parse("#80112233").unwrap().value, 0x8011_2233_u32 as i32);
        assert_eq!(ColorInt::parse("#00000000").unwrap().value, 0);
        for bad in ["ff0000", "#fff", "#gg0000", "#+f0000"] {
            assert_eq!(ColorInt::parse(bad), Err(PackError::InvalidColor(bad.into())));
        }
    }

    #[test]
    fn state_list_lengths_must_match() {
        assert!(ColorStateList::new(vec![vec![1], vec![]], vec![1, 2]).is_ok());
        assert_eq!(
            ColorStateList::new(vec![vec![1]], vec![]),
            Err(PackError::LengthMismatch {
                what: "color state list",
                left: 1,
                right: 0,
            })
        );
    }
}
