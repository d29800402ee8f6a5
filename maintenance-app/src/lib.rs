pub mod application;
pub mod domain;

pub use application::{PageLifecycle, ViewHost, REVEAL_DELAY, SPIN_DURATION};
