//! Typewriter scheduling loop against tokio's paused clock
//!
//! These tests run the real loop on a spawned task and move time forward
//! manually, checking what is on screen at each instant.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tokio::task::LocalSet;
use tokio_util::sync::CancellationToken;

use folio_core::rotator::{
    color_class, run_typewriter, Clock, Typewriter, TypewriterTiming, TypewriterView, WordList,
};

// ============================================================================
// Test Utilities
// ============================================================================

/// Clock backed by tokio's timer, so `tokio::time::advance` drives it
struct TokioClock;

impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await
    }
}

/// Mimics the element: current text plus current class list
#[derive(Default)]
struct Screen {
    text: String,
    classes: Vec<String>,
    renders: usize,
}

#[derive(Clone, Default)]
struct SharedScreen(Rc<RefCell<Screen>>);

impl SharedScreen {
    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    fn renders(&self) -> usize {
        self.0.borrow().renders
    }
}

impl TypewriterView for SharedScreen {
    fn render_text(&mut self, text: &str) {
        let mut screen = self.0.borrow_mut();
        screen.text = text.to_string();
        screen.renders += 1;
    }

    fn swap_color(&mut self, from: Option<&str>, to: &str) {
        let mut screen = self.0.borrow_mut();
        if let Some(from) = from {
            let old = color_class("color-", from);
            screen.classes.retain(|c| *c != old);
        }
        screen.classes.push(color_class("color-", to));
    }
}

fn design_build() -> Typewriter {
    Typewriter::new(WordList::from_pairs(["Design", "Build"], ["blue", "green"]).unwrap())
}

/// Let the spawned loop register its first timer before time moves
async fn start() {
    tokio::task::yield_now().await;
}

/// Sleeps are relative to the moment they start, so tests advance one step
/// at a time rather than jumping across several deadlines
async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    // Let the loop observe the fired timer
    tokio::task::yield_now().await;
}

fn spawn_loop(
    local: &LocalSet,
    screen: &SharedScreen,
    cancel: &CancellationToken,
) -> tokio::task::JoinHandle<Typewriter> {
    let mut view = screen.clone();
    let cancel = cancel.clone();
    local.spawn_local(async move {
        run_typewriter(design_build(), TypewriterTiming::default(), &TokioClock, &mut view, cancel).await
    })
}

// ============================================================================
// Timeline Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_nothing_happens_before_initial_delay() {
    let local = LocalSet::new();
    let screen = SharedScreen::default();
    let cancel = CancellationToken::new();
    let handle = spawn_loop(&local, &screen, &cancel);

    local
        .run_until(async {
            start().await;
            advance_ms(2999).await;
            assert_eq!(screen.renders(), 0);
            assert!(screen.classes().is_empty());

            advance_ms(1).await;
            assert_eq!(screen.text(), "");
            assert_eq!(screen.classes(), vec!["color-blue".to_string()]);

            cancel.cancel();
            let tw = handle.await.unwrap();
            assert_eq!(tw.typed(), 0);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_typing_pause_and_deleting_cadence() {
    let local = LocalSet::new();
    let screen = SharedScreen::default();
    let cancel = CancellationToken::new();
    let handle = spawn_loop(&local, &screen, &cancel);

    local
        .run_until(async {
            start().await;
            advance_ms(3000).await;

            for expected in ["D", "De", "Des", "Desi", "Desig", "Design"] {
                advance_ms(100).await;
                assert_eq!(screen.text(), expected);
            }

            // Held for the whole pause
            advance_ms(1999).await;
            assert_eq!(screen.text(), "Design");
            advance_ms(1).await;
            assert_eq!(screen.text(), "Design");

            for expected in ["Desig", "Desi", "Des", "De", "D", ""] {
                advance_ms(50).await;
                assert_eq!(screen.text(), expected);
            }

            // Advance has no delay; the next word's color is already applied
            advance_ms(0).await;
            assert_eq!(screen.classes(), vec!["color-green".to_string()]);

            advance_ms(100).await;
            assert_eq!(screen.text(), "B");

            cancel.cancel();
            let tw = handle.await.unwrap();
            assert_eq!(tw.index(), 1);
            assert_eq!(tw.completed_cycles(), 1);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_cancel_mid_word_freezes_screen() {
    let local = LocalSet::new();
    let screen = SharedScreen::default();
    let cancel = CancellationToken::new();
    let handle = spawn_loop(&local, &screen, &cancel);

    local
        .run_until(async {
            start().await;
            advance_ms(3000).await;
            for _ in 0..3 {
                advance_ms(100).await;
            }
            assert_eq!(screen.text(), "Des");

            cancel.cancel();
            let tw = handle.await.unwrap();
            assert_eq!(tw.text(), "Des");

            advance_ms(10_000).await;
            assert_eq!(screen.text(), "Des");
        })
        .await;
}
