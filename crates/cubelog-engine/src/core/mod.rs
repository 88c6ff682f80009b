pub use self::{color::*, cube_state::*, moves::*};

pub(crate) mod color;
pub(crate) mod cube_state;
pub(crate) mod moves;
