use crate::domain::{ContainerRect, PointerPosition};
use std::time::Duration;

/// What the maintenance view needs from its environment.
///
/// Handles are RAII: dropping a `Timer` cancels it if it has not fired yet,
/// dropping a `Listener` removes the pointer subscription.
pub trait ViewHost: 'static {
    type Timer: 'static;
    type Listener: 'static;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Timer;

    /// Subscribes to pointer movement anywhere in the viewport.
    fn listen_pointer(&self, handler: Box<dyn Fn(PointerPosition)>) -> Self::Listener;

    /// Current geometry of the content container, if it is laid out.
    fn container_rect(&self) -> Option<ContainerRect>;
}
