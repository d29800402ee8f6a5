mod host;
mod lifecycle;

pub use host::ViewHost;
pub use lifecycle::{PageLifecycle, REVEAL_DELAY, SPIN_DURATION};
