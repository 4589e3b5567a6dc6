use folio_core::SiteConfig;
use folio_ui::{BackgroundLines, PageShell, TypewriterEffect};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

/// Site configuration, compiled into the binary.
const SITE_CONFIG: &str = include_str!("../../folio.toml");

/// Parse the embedded configuration, falling back to the defaults.
pub fn site_config() -> SiteConfig {
    SiteConfig::from_toml_str_or_default(SITE_CONFIG)
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = site_config();
    log::debug!(
        "folio: {} nav entries, {} headline words",
        config.nav.len(),
        config.words.len()
    );
    let title = config.site.title.clone();
    provide_context(config);

    view! {
      <Title text=title />

      <Router>
        <main>
          <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=HomePage />
          </Routes>
        </main>
      </Router>
    }
}

/// Renders the landing page.
#[component]
fn HomePage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let greeting = config.site.greeting.clone();
    let words = config.words.clone();
    let timing = config.typewriter;

    view! {
      <PageShell config=config>
        <BackgroundLines>
          <TypewriterEffect greeting=greeting words=words timing=timing />
        </BackgroundLines>
      </PageShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SiteConfig::from_toml_str(SITE_CONFIG).expect("folio.toml parses");
        assert!(!config.site.title.is_empty());
        assert!(config.nav.len() <= folio_core::nav::RECOMMENDED_MAX_ENTRIES);
    }

    #[test]
    fn test_embedded_config_matches_stock_site() {
        assert_eq!(site_config(), SiteConfig::default());
    }
}
