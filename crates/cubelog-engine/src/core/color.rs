use std::fmt;

/// Sticker color.
///
/// The discriminant is the digit used for the color in recorded cube states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Yellow = 1,
    Green = 2,
    White = 3,
    Orange = 4,
    Blue = 5,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::White,
        Color::Orange,
        Color::Blue,
    ];

    /// Parses a color token.
    ///
    /// Accepts the digit form (`"0"`..`"5"`) and the bracketed letter form
    /// written by the recorder (`"[r]"`, `"[y]"`, `"[g]"`, `"[w]"`, `"[o]"`, `"[b]"`).
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let color = match token {
            "0" | "[r]" => Color::Red,
            "1" | "[y]" => Color::Yellow,
            "2" | "[g]" => Color::Green,
            "3" | "[w]" => Color::White,
            "4" | "[o]" => Color::Orange,
            "5" | "[b]" => Color::Blue,
            _ => return None,
        };
        Some(color)
    }

    #[must_use]
    pub const fn as_digit(self) -> char {
        (b'0' + self as u8) as char
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_digit())
    }
}

/// Cube face.
///
/// Declared in the order faces appear in a recorded cube state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    /// Left
    L = 0,
    /// Up
    U = 1,
    /// Front
    F = 2,
    /// Down
    D = 3,
    /// Right
    R = 4,
    /// Back
    B = 5,
}

impl Face {
    pub const ALL: [Self; 6] = [Face::L, Face::U, Face::F, Face::D, Face::R, Face::B];

    /// Faces around the equator, which share the bottom layer with `D`.
    pub const SIDES: [Self; 4] = [Face::L, Face::F, Face::R, Face::B];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The color every sticker of this face has once the cube is solved.
    #[must_use]
    pub const fn canonical_color(self) -> Color {
        match self {
            Face::L => Color::Red,
            Face::U => Color::Yellow,
            Face::F => Color::Green,
            Face::D => Color::White,
            Face::R => Color::Orange,
            Face::B => Color::Blue,
        }
    }
}
