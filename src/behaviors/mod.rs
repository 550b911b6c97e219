//! Page behaviors.
//!
//! Each submodule binds one behavior to the DOM and returns a [`Binding`]
//! owning its listeners. Dropping the binding unbinds the behavior.
//! A submodule returns `Ok(None)` when the elements it needs are absent.

pub mod greeting;
pub mod hover;
pub mod menu;
pub mod navbar;
pub mod parallax;
pub mod reveal;
pub mod sections;
pub mod smooth_scroll;
pub mod typewriter;
pub mod years;

use gloo::events::EventListener;
use tokio_util::sync::CancellationToken;
use wasm_bindgen::closure::Closure;
use web_sys::IntersectionObserver;

/// An `IntersectionObserver` together with the closure it calls back into.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverHandle {
    pub fn new(
        observer: IntersectionObserver,
        callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    ) -> Self {
        Self {
            observer,
            _callback: callback,
        }
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Resources keeping one behavior alive.
#[derive(Default)]
pub struct Binding {
    listeners: Vec<EventListener>,
    observer: Option<ObserverHandle>,
    task: Option<CancellationToken>,
}

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(mut self, listener: EventListener) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn push(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub fn with_observer(mut self, observer: ObserverHandle) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Tie a spawned task's lifetime to this binding.
    pub fn with_task(mut self, cancel: CancellationToken) -> Self {
        self.task = Some(cancel);
        self
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for Binding {
    fn drop(&mut self) {
        if let Some(cancel) = self.task.take() {
            cancel.cancel();
        }
    }
}
