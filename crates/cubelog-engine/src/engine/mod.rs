//! Solve-phase classification.
//!
//! A CFOP solve passes through four boundaries, each checked by comparing a
//! fixed set of stickers against their face's canonical color:
//!
//! 1. **Cross**: the white cross on `D` with its edge stickers on the sides
//! 2. **F2L**: the bottom two layers
//! 3. **OLL**: F2L plus the whole `U` face oriented
//! 4. **PLL**: every sticker in place
//!
//! Each boundary is a superset of the previous one, so a caller only ever
//! checks the boundary of its current [`Phase`].

pub use self::phase::*;

mod phase;
