//! Cube model and solve-phase classification for cube solving logs.
//!
//! - [`Move`]: the 18 face turns, in their fixed output order
//! - [`Face`] / [`Color`]: sticker faces and their canonical colors
//! - [`CubeState`]: a parsed 54-sticker snapshot
//! - [`Phase`]: CFOP solve phases and the boundary predicates between them
//!
//! # Example
//!
//! ```
//! use cubelog_engine::{CubeState, Phase};
//!
//! let state = CubeState::solved();
//! assert!(Phase::Cross.boundary_reached(&state));
//! assert_eq!(Phase::Pll.advance(&state), Phase::Solved);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCubeStateError {
    #[display("cube state must have {} tokens, found {found}", CubeState::NUM_STICKERS)]
    WrongTokenCount { found: usize },
    #[display("unknown color token '{token}' at position {index}")]
    UnknownColor { index: usize, token: String },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown move symbol '{symbol}'")]
pub struct ParseMoveError {
    pub symbol: String,
}
