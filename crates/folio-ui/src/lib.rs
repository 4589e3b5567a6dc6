//! Folio UI Components
//!
//! Leptos components for the Folio landing page.
//!
//! # Components
//!
//! ## Navigation
//! - [`Navbar`] - Sticky bar, compact once the page is scrolled
//! - [`NavBody`] / [`MobileNav`] - Desktop and mobile containers
//! - [`NavItems`] - Links with a shared hover highlight
//! - [`MobileNavToggle`] / [`MobileNavMenu`] - Mobile menu button and overlay
//! - [`NavbarLogo`] / [`NavbarButton`] - Chrome
//!
//! ## Page
//! - [`PageShell`] - Navigation bar plus content slot
//! - [`BackgroundLines`] - Animated decorative strokes
//! - [`TypewriterEffect`] - Greeting and typed headline
//! - [`CursorOverlay`] - Custom cursor dot
//!
//! # Example
//!
//! ```ignore
//! use folio_core::SiteConfig;
//! use folio_ui::{BackgroundLines, PageShell, TypewriterEffect};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Home() -> impl IntoView {
//!     let config = SiteConfig::default();
//!     let words = config.words.clone();
//!
//!     view! {
//!         <PageShell config=config>
//!             <BackgroundLines>
//!                 <TypewriterEffect greeting="Hello" words=words />
//!             </BackgroundLines>
//!         </PageShell>
//!     }
//! }
//! ```

pub mod background;
pub mod cursor;
pub mod navbar;
pub mod page;
pub mod typewriter;

pub use background::BackgroundLines;
pub use cursor::CursorOverlay;
pub use navbar::{
    ButtonVariant, MobileNav, MobileNavHeader, MobileNavMenu, MobileNavToggle, NavBody, NavItems,
    Navbar, NavbarButton, NavbarLogo,
};
pub use page::PageShell;
pub use typewriter::TypewriterEffect;
