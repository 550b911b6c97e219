//! Scheduling loop driving the typewriter.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::clock::Clock;
use super::machine::{Effect, Typewriter};
use super::TypewriterTiming;

/// Where the typewriter's output goes.
pub trait TypewriterView {
    /// Show `text` as the element's content.
    fn render_text(&mut self, text: &str);

    /// Swap the color marker. `from` is `None` for the initial color.
    fn swap_color(&mut self, from: Option<&str>, to: &str);
}

/// Drive `typewriter` until `cancel` fires.
///
/// Waits the initial delay, clears the element and applies the first word's
/// color, then alternates between sleeping for the current phase's delay and
/// performing one step. Returns the machine in whatever state it was stopped.
pub async fn run_typewriter<C, V>(
    mut typewriter: Typewriter,
    timing: TypewriterTiming,
    clock: &C,
    view: &mut V,
    cancel: CancellationToken,
) -> Typewriter
where
    C: Clock,
    V: TypewriterView,
{
    if !sleep_or_cancel(clock, timing.initial_delay(), &cancel).await {
        return typewriter;
    }

    debug!(words = typewriter.words().len(), "Typewriter started");
    view.render_text(typewriter.text());
    view.swap_color(None, &typewriter.word().color);

    loop {
        let delay = timing.delay(typewriter.phase());
        if !sleep_or_cancel(clock, delay, &cancel).await {
            break;
        }

        match typewriter.step() {
            Some(Effect::Text(text)) => view.render_text(&text),
            Some(Effect::Color { from, to }) => {
                debug!(word = %typewriter.word().word, "Typewriter advanced");
                view.swap_color(Some(&from), &to);
            }
            None => {}
        }
    }

    debug!(cycles = typewriter.completed_cycles(), "Typewriter stopped");
    typewriter
}

/// Sleep unless cancelled first. Returns `false` on cancellation.
async fn sleep_or_cancel<C: Clock>(clock: &C, duration: Duration, cancel: &CancellationToken) -> bool {
    if cancel.is_cancelled() {
        return false;
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        _ = clock.sleep(duration) => true,
    }
}
