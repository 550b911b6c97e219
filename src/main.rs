//! Portfolio page behaviors, compiled to WebAssembly.
//!
//! Loaded by the static page; binds every interactive behavior once the DOM
//! is ready.

mod app;
mod behaviors;
mod context;
mod logging;

fn main() {
    console_error_panic_hook::set_once();
    app::boot();
}
