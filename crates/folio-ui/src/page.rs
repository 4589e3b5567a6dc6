//! Page shell: navigation bar on top, content slot below.

use folio_core::{MobileMenu, SiteConfig};
use leptos::prelude::*;

use crate::{cursor::CursorOverlay, navbar::Navbar};

/// Wraps `children` with the navigation bar and the optional cursor.
///
/// Owns the mobile menu state for the lifetime of the page.
#[component]
pub fn PageShell(
    /// Site configuration.
    config: SiteConfig,
    children: Children,
) -> impl IntoView {
    let menu = RwSignal::new(MobileMenu::default());
    let SiteConfig {
        site,
        nav,
        layout,
        motion,
        cursor,
        ..
    } = config;

    view! {
      <div class="folio-page">
        <Navbar
          items=nav
          mail=site.mail
          logo=site.logo
          layout=layout
          spring=motion.spring
          menu_duration_ms=motion.menu_duration_ms
          menu=menu
        />
        <div class="folio-content">{children()}</div>
        {cursor.enabled.then(|| view! { <CursorOverlay size_px=cursor.size_px /> })}
      </div>
    }
}
