use std::{fmt, str::FromStr};

use super::color::{Color, Face};
use crate::ParseCubeStateError;

/// A 3×3 grid of stickers, indexed `[row][col]`.
pub type FaceGrid = [[Color; 3]; 3];

/// Snapshot of all 54 sticker colors.
///
/// Parsed from a whitespace separated list of color tokens. Every 9
/// consecutive tokens form one face (in [`Face::ALL`] order), read row by
/// row. Whether the state is physically reachable is not checked.
///
/// # Example
///
/// ```
/// use cubelog_engine::{Color, CubeState, Face};
///
/// let text = CubeState::solved().to_string();
/// let state: CubeState = text.parse().unwrap();
/// assert_eq!(state.sticker(Face::D, 1, 1), Color::White);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    faces: [FaceGrid; 6],
}

impl CubeState {
    pub const NUM_STICKERS: usize = 54;

    /// The state where every face shows its canonical color.
    #[must_use]
    pub fn solved() -> Self {
        Self {
            faces: Face::ALL.map(|face| [[face.canonical_color(); 3]; 3]),
        }
    }

    /// Builds a state from face grids given in [`Face::ALL`] order.
    #[must_use]
    pub const fn from_faces(faces: [FaceGrid; 6]) -> Self {
        Self { faces }
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face.index()]
    }

    #[must_use]
    pub fn sticker(&self, face: Face, row: usize, col: usize) -> Color {
        self.faces[face.index()][row][col]
    }

    pub fn set_sticker(&mut self, face: Face, row: usize, col: usize, color: Color) {
        self.faces[face.index()][row][col] = color;
    }

    /// Whether the sticker shows the canonical color of its face.
    #[must_use]
    pub fn is_in_place(&self, face: Face, row: usize, col: usize) -> bool {
        self.sticker(face, row, col) == face.canonical_color()
    }
}

impl FromStr for CubeState {
    type Err = ParseCubeStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split_whitespace().collect::<Vec<_>>();
        if tokens.len() != Self::NUM_STICKERS {
            return Err(ParseCubeStateError::WrongTokenCount {
                found: tokens.len(),
            });
        }

        let mut faces = [[[Color::Red; 3]; 3]; 6];
        for (index, token) in tokens.into_iter().enumerate() {
            let color =
                Color::from_token(token).ok_or_else(|| ParseCubeStateError::UnknownColor {
                    index,
                    token: token.to_owned(),
                })?;
            let (face, cell) = (index / 9, index % 9);
            faces[face][cell / 3][cell % 3] = color;
        }
        Ok(Self { faces })
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for color in self.faces.iter().flatten().flatten() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
            first = false;
        }
        Ok(())
    }
}
