//! Folio Core Library
//!
//! DOM-free logic behind the portfolio page's interactive behaviors.
//!
//! ## Overview
//!
//! The page is static markup; everything interactive is a small binding from
//! a browser event (click, scroll, intersection, timer, pointer) to a class or
//! inline-style change. This crate holds the part of each binding that does
//! not need a browser, so it can be tested natively:
//!
//! - [`menu`]: mobile menu open flag
//! - [`anchor`]: in-page link targets for smooth scrolling
//! - [`reveal`]: one-way fade-in of cards entering the viewport
//! - [`sections`]: which nav link to highlight for a scroll offset
//! - [`navbar`]: navbar shadow threshold
//! - [`rotator`]: the rotating-word typewriter state machine and its loop
//! - [`parallax`]: badge offsets and per-frame coalescing
//! - [`hover`]: button lift transform
//! - [`years`]: the "years active" badge
//!
//! The `folio` binary wires these to the DOM; `folio-cli` runs them against
//! synthetic input.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::rotator::{run_typewriter, Typewriter, VirtualClock, WordList};
//!
//! let words = WordList::from_attributes(Some(r#"["Design","Build"]"#), Some(r#"["blue","green"]"#))?;
//! let clock = VirtualClock::new();
//! run_typewriter(Typewriter::new(words), timing, &clock, &mut view, cancel).await;
//! ```

pub mod anchor;
pub mod config;
pub mod error;
pub mod greeting;
pub mod hover;
pub mod logging;
pub mod menu;
pub mod navbar;
pub mod parallax;
pub mod reveal;
pub mod rotator;
pub mod sections;
pub mod years;

// Re-exports
pub use config::{Classes, PageConfig, ParallaxLayer, ScrollConfig, Selectors};
pub use error::{FolioError, FolioResult, RotatorError};
pub use greeting::ConsoleLine;
pub use menu::MenuState;
pub use parallax::FrameGate;
pub use reveal::RevealTracker;
pub use rotator::{Typewriter, TypewriterTiming, WordList};
pub use sections::{ActiveSection, SectionExtent};
