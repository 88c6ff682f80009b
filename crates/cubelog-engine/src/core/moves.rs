use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ParseMoveError;

/// A single face turn in standard notation.
///
/// Each of the six faces can be turned clockwise (`F`), counter-clockwise
/// (`F'`) or by a half turn (`F2`). The declaration order is the order used
/// in every serialized move table, so it must not be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Move {
    F = 0,
    R = 1,
    U = 2,
    L = 3,
    B = 4,
    D = 5,
    FPrime = 6,
    RPrime = 7,
    UPrime = 8,
    LPrime = 9,
    BPrime = 10,
    DPrime = 11,
    F2 = 12,
    R2 = 13,
    U2 = 14,
    L2 = 15,
    B2 = 16,
    D2 = 17,
}

impl Move {
    pub const LEN: usize = 18;

    pub const ALL: [Self; Self::LEN] = {
        use Move::{
            B, B2, BPrime, D, D2, DPrime, F, F2, FPrime, L, L2, LPrime, R, R2, RPrime, U, U2,
            UPrime,
        };
        [
            F, R, U, L, B, D, FPrime, RPrime, UPrime, LPrime, BPrime, DPrime, F2, R2, U2, L2,
            B2, D2,
        ]
    };

    /// Position of this move in [`Move::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::F => "F",
            Move::R => "R",
            Move::U => "U",
            Move::L => "L",
            Move::B => "B",
            Move::D => "D",
            Move::FPrime => "F'",
            Move::RPrime => "R'",
            Move::UPrime => "U'",
            Move::LPrime => "L'",
            Move::BPrime => "B'",
            Move::DPrime => "D'",
            Move::F2 => "F2",
            Move::R2 => "R2",
            Move::U2 => "U2",
            Move::L2 => "L2",
            Move::B2 => "B2",
            Move::D2 => "D2",
        }
    }

    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == symbol)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| ParseMoveError {
            symbol: s.to_owned(),
        })
    }
}

impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, m) in Move::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!("F".parse::<Move>().unwrap(), Move::F);
        assert_eq!("U'".parse::<Move>().unwrap(), Move::UPrime);
        assert_eq!("D2".parse::<Move>().unwrap(), Move::D2);

        let err = "M".parse::<Move>().unwrap_err();
        assert_eq!(err.symbol, "M");
        assert!("f".parse::<Move>().is_err());
        assert!("F ".parse::<Move>().is_err());
    }

    #[test]
    fn test_display_matches_symbol() {
        let joined = Move::ALL.map(|m| m.to_string()).join(" ");
        assert_eq!(
            joined,
            "F R U L B D F' R' U' L' B' D' F2 R2 U2 L2 B2 D2"
        );
    }

    #[test]
    fn test_serialization() {
        let serialized = serde_json::to_string(&[Move::RPrime, Move::B2]).unwrap();
        assert_eq!(serialized, r#"["R'","B2"]"#);

        let deserialized: Vec<Move> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, vec![Move::RPrime, Move::B2]);
        assert!(serde_json::from_str::<Move>("\"X\"").is_err());
    }
}
