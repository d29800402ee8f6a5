use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use leptos::html::Div;
use leptos::prelude::*;
use maintenance_app::domain::{ContainerRect, PointerPosition};
use maintenance_app::ViewHost;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

/// `ViewHost` backed by browser timers and a `mousemove` listener on `window`.
pub struct BrowserHost {
    container: NodeRef<Div>,
}

impl BrowserHost {
    pub fn new(container: NodeRef<Div>) -> Self {
        Self { container }
    }
}

impl ViewHost for BrowserHost {
    type Timer = Timeout;
    type Listener = EventListener;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }

    fn listen_pointer(&self, handler: Box<dyn Fn(PointerPosition)>) -> EventListener {
        EventListener::new(&window(), "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                handler(PointerPosition::new(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                ));
            }
        })
    }

    fn container_rect(&self) -> Option<ContainerRect> {
        let element = self.container.get_untracked()?;
        let rect = element.get_bounding_client_rect();
        Some(ContainerRect::new(
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        ))
    }
}
