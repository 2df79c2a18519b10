//! Yin/yang polarity and the 3-line and 6-line bit patterns built from it.
//!
//! Patterns store one bit per line, bit 0 = the bottom line, 1 = yang.
//! Text form lists lines bottom first, so "011010" has a yin bottom line.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::GuaError;

/// Polarity of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yin,
    Yang,
}

impl Polarity {
    /// The opposite polarity.
    pub const fn flip(self) -> Polarity {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }

    /// '1' for yang, '0' for yin.
    pub const fn digit(self) -> char {
        match self {
            Self::Yin => '0',
            Self::Yang => '1',
        }
    }

    const fn from_bit(bit: u8) -> Polarity {
        if bit & 1 == 1 { Self::Yang } else { Self::Yin }
    }
}

/// A 3-line pattern (one trigram), bit 0 = bottom line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrigramPattern(u8);

impl TrigramPattern {
    /// Build from raw bits; only the low 3 bits are kept.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    /// Parse a bottom-first string of three '0'/'1' digits in const context.
    ///
    /// Panics (at compile time when used in a const) on malformed text.
    pub const fn from_digits(s: &str) -> Self {
        Self(parse_digits(s, 3))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Polarity of line 1..=3 (bottom to top).
    pub const fn line(self, position: u8) -> Polarity {
        Polarity::from_bit(self.0 >> (position - 1))
    }

    pub fn polarities(self) -> [Polarity; 3] {
        [self.line(1), self.line(2), self.line(3)]
    }
}

impl std::fmt::Display for TrigramPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for p in self.polarities() {
            write!(f, "{}", p.digit())?;
        }
        Ok(())
    }
}

/// A 6-line pattern (one hexagram), bit 0 = line 1 (bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexagramPattern(u8);

impl HexagramPattern {
    /// Build from raw bits; only the low 6 bits are kept.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b11_1111)
    }

    /// Parse a bottom-first string of six '0'/'1' digits in const context.
    ///
    /// Panics (at compile time when used in a const) on malformed text.
    pub const fn from_digits(s: &str) -> Self {
        Self(parse_digits(s, 6))
    }

    /// Stack a lower (inner) and upper (outer) trigram.
    pub const fn from_trigrams(lower: TrigramPattern, upper: TrigramPattern) -> Self {
        Self(lower.bits() | (upper.bits() << 3))
    }

    pub fn from_polarities(lines: [Polarity; 6]) -> Self {
        let bits = lines
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, p)| if p.is_yang() { acc | (1 << i) } else { acc });
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Polarity of line 1..=6 (bottom to top).
    pub const fn line(self, position: u8) -> Polarity {
        Polarity::from_bit(self.0 >> (position - 1))
    }

    pub fn polarities(self) -> [Polarity; 6] {
        std::array::from_fn(|i| self.line(i as u8 + 1))
    }

    /// Lines 1-3.
    pub const fn lower(self) -> TrigramPattern {
        TrigramPattern::from_bits(self.0)
    }

    /// Lines 4-6.
    pub const fn upper(self) -> TrigramPattern {
        TrigramPattern::from_bits(self.0 >> 3)
    }

    /// Positions (1-based) where the two patterns differ.
    pub fn differing_positions(self, other: HexagramPattern) -> Vec<u8> {
        let diff = self.0 ^ other.0;
        (1..=6u8).filter(|p| diff & (1 << (p - 1)) != 0).collect()
    }
}

impl std::fmt::Display for HexagramPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for p in self.polarities() {
            write!(f, "{}", p.digit())?;
        }
        Ok(())
    }
}

impl FromStr for HexagramPattern {
    type Err = GuaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 6 || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(GuaError::invalid(format!(
                "expected six '0'/'1' digits bottom first, got {s:?}"
            )));
        }
        Ok(Self::from_digits(s))
    }
}

impl Serialize for HexagramPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

const fn parse_digits(s: &str, len: usize) -> u8 {
    let bytes = s.as_bytes();
    assert!(bytes.len() == len, "pattern has wrong length");
    let mut bits = 0u8;
    let mut i = 0;
    while i < len {
        match bytes[i] {
            b'1' => bits |= 1 << i,
            b'0' => {}
            _ => panic!("pattern digit must be '0' or '1'"),
        }
        i += 1;
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_bottom_first() {
        let p = HexagramPattern::from_digits("100000");
        assert_eq!(p.line(1), Polarity::Yang);
        for pos in 2..=6 {
            assert_eq!(p.line(pos), Polarity::Yin);
        }
        assert_eq!(p.bits(), 1);
    }

    #[test]
    fn display_roundtrip_all_64() {
        for bits in 0..64u8 {
            let p = HexagramPattern::from_bits(bits);
            let s = p.to_string();
            assert_eq!(s.parse::<HexagramPattern>().unwrap(), p);
        }
    }

    #[test]
    fn split_and_stack() {
        let p = HexagramPattern::from_digits("011010");
        assert_eq!(p.lower().to_string(), "011");
        assert_eq!(p.upper().to_string(), "010");
        assert_eq!(HexagramPattern::from_trigrams(p.lower(), p.upper()), p);
    }

    #[test]
    fn from_polarities_matches_digits() {
        use Polarity::{Yang, Yin};
        let p = HexagramPattern::from_polarities([Yin, Yang, Yang, Yin, Yang, Yin]);
        assert_eq!(p.to_string(), "011010");
    }

    #[test]
    fn differing_positions() {
        let a = HexagramPattern::from_digits("111111");
        let b = HexagramPattern::from_digits("011110");
        assert_eq!(a.differing_positions(b), vec![1, 6]);
        assert!(a.differing_positions(a).is_empty());
    }

    #[test]
    fn parse_rejects_bad_text() {
        assert!("01101".parse::<HexagramPattern>().is_err());
        assert!("0110102".parse::<HexagramPattern>().is_err());
        assert!("01a010".parse::<HexagramPattern>().is_err());
    }

    #[test]
    fn flip() {
        assert_eq!(Polarity::Yin.flip(), Polarity::Yang);
        assert_eq!(Polarity::Yang.flip(), Polarity::Yin);
    }
}
