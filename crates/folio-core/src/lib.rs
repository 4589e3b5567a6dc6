//! Folio Core Library
//!
//! Browser-independent state and layout logic for the Folio landing page:
//! the scroll-driven compact mode, hover tracking, the navigation shell's
//! target styles, the mobile menu state machine, the typewriter reveal
//! schedule and the site configuration.
//!
//! Every type here is plain data updated by transition methods. The UI
//! crate keeps them in signals and calls the transitions from event
//! handlers.

pub mod config;
pub mod cursor;
pub mod error;
pub mod hover;
pub mod menu;
pub mod motion;
pub mod nav;
pub mod scroll;
pub mod shell;
pub mod typewriter;

pub use config::{CursorConfig, MotionConfig, SiteConfig, SiteMeta};
pub use cursor::CursorState;
pub use error::{CoreError, Result};
pub use hover::{HIDDEN_HIGHLIGHT_CSS, HighlightFrame, HoverGroup, HoverTracker};
pub use menu::{MenuPhase, MobileMenu};
pub use motion::Spring;
pub use nav::{NavEntry, NavLink, nav_links};
pub use scroll::{ScrollState, ScrollTracker};
pub use shell::{Elevation, ShellLayout, ShellStyle};
pub use typewriter::{Glyph, RevealTiming, RevealedWord, Word};
