pub mod content;
mod pointer;
mod reveal;
mod tilt;
mod view_state;

pub use pointer::{ContainerRect, PointerOffset, PointerPosition, POINTER_SCALE};
pub use reveal::{RevealAnimation, RevealSection};
pub use tilt::{Tilt, TiltTarget};
pub use view_state::ViewState;
