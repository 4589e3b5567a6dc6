//! Navigation bar components.
//!
//! [`Navbar`] owns the scroll tracker and passes the resulting compact flag
//! to the desktop [`NavBody`] and the [`MobileNav`] it renders.

use std::time::Duration;

use folio_core::{
    HIDDEN_HIGHLIGHT_CSS, HoverGroup, HoverTracker, MenuPhase, MobileMenu, NavEntry,
    ScrollTracker, ShellLayout, ShellStyle, Spring, menu::DEFAULT_MENU_DURATION_MS, nav_links,
};
use leptos::{ev, html, prelude::*};

/// Visual style of a [`NavbarButton`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Dark,
}

impl ButtonVariant {
    /// Class selecting the variant's colors.
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "folio-button--primary",
            Self::Secondary => "folio-button--secondary",
            Self::Dark => "folio-button--dark",
        }
    }
}

/// Full class list of a button.
pub fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("folio-button {} {extra}", variant.class()),
        _ => format!("folio-button {}", variant.class()),
    }
}

/// Sticky navigation bar with desktop and mobile variants.
#[component]
pub fn Navbar(
    /// Navigation entries.
    items: Vec<NavEntry>,
    /// Target of the mail buttons.
    #[prop(into)]
    mail: String,
    /// Logo image URL.
    #[prop(into)]
    logo: String,
    /// Compact transition geometry.
    #[prop(optional)]
    layout: ShellLayout,
    /// Spring for the compact transition.
    #[prop(optional)]
    spring: Spring,
    /// Length of the mobile menu animations.
    #[prop(default = DEFAULT_MENU_DURATION_MS)]
    menu_duration_ms: u32,
    /// Mobile menu state, owned by the page shell.
    menu: RwSignal<MobileMenu>,
) -> impl IntoView {
    let tracker = RwSignal::new(ScrollTracker::new(layout.compact_threshold));
    let sync_offset = move || match window().scroll_y() {
        Ok(offset) => tracker.update(|tracker| {
            tracker.observe(offset);
        }),
        Err(_) => log::debug!("nav: scroll offset unavailable"),
    };

    // The page may be restored mid-scroll.
    sync_offset();
    let handle = window_event_listener(ev::scroll, move |_| sync_offset());
    on_cleanup(move || handle.remove());

    let compact: Signal<bool> = Memo::new(move |_| tracker.with(ScrollTracker::is_compact)).into();

    let desktop_items = items.clone();
    let desktop_logo = logo.clone();
    let desktop_mail = mail.clone();

    view! {
      <div class="folio-navbar">
        <NavBody compact=compact layout=layout spring=spring>
          <NavbarLogo src=desktop_logo />
          <NavItems items=desktop_items compact=compact spring=spring />
          <div class="folio-nav-actions">
            <NavbarButton href=desktop_mail variant=ButtonVariant::Primary>
              "Mail"
            </NavbarButton>
          </div>
        </NavBody>

        <MobileNav compact=compact layout=layout spring=spring>
          <MobileNavHeader>
            <NavbarLogo src=logo />
            <MobileNavToggle menu=menu />
          </MobileNavHeader>
          <MobileNavMenu menu=menu items=items mail=mail duration_ms=menu_duration_ms />
        </MobileNav>
      </div>
    }
}

/// Desktop bar. Shrinks and drops down when compact, glows on hover.
#[component]
pub fn NavBody(
    /// Whether the page is scrolled past the threshold.
    compact: Signal<bool>,
    #[prop(optional)] layout: ShellLayout,
    #[prop(optional)] spring: Spring,
    children: Children,
) -> impl IntoView {
    let hover = RwSignal::new(HoverTracker::default());
    let hovered = move || hover.with(HoverTracker::is_hovered);
    let style = move || ShellStyle::desktop(&layout, compact.get(), hovered()).to_css(&spring);

    view! {
      <div
        class="folio-nav-body"
        class:hovered=hovered
        style=style
        on:mouseenter=move |_| hover.update(HoverTracker::enter)
        on:mouseleave=move |_| hover.update(HoverTracker::leave)
      >
        {children()}
      </div>
    }
}

/// Interval between highlight measurements while the bar animates.
const FOLLOW_INTERVAL: Duration = Duration::from_millis(50);

/// Row of links with a shared highlight sliding behind the hovered one.
///
/// The links move whenever the bar resizes, so the highlight is measured
/// again on window resizes and throughout each compact transition.
#[component]
pub fn NavItems(
    /// Navigation entries.
    items: Vec<NavEntry>,
    /// Whether the surrounding bar is compact.
    #[prop(into)]
    compact: Signal<bool>,
    /// Spring of the bar's compact transition.
    #[prop(optional)]
    spring: Spring,
    /// Called on click, before the browser follows the link.
    #[prop(optional, into)]
    on_item_click: Option<Callback<()>>,
) -> impl IntoView {
    let group = RwSignal::new(HoverGroup::new(items.len()));
    let refs = StoredValue::new(
        items
            .iter()
            .map(|_| NodeRef::<html::A>::new())
            .collect::<Vec<_>>(),
    );
    let layout_tick = RwSignal::new(0u32);

    let settle = spring.settle_duration();
    Effect::new(move |was_compact: Option<bool>| {
        let is_compact = compact.get();
        if was_compact.is_some_and(|was| was != is_compact) {
            follow_layout(layout_tick, settle);
        }
        is_compact
    });

    let handle = window_event_listener(ev::resize, move |_| bump(layout_tick));
    on_cleanup(move || handle.remove());

    let highlight_style = move || {
        layout_tick.track();
        group
            .with(|group| {
                group.frame(|index| {
                    let link =
                        refs.with_value(|refs| refs.get(index).and_then(|node| node.get()))?;
                    Some((
                        f64::from(link.offset_left()),
                        f64::from(link.offset_width()),
                    ))
                })
            })
            .map_or_else(|| HIDDEN_HIGHLIGHT_CSS.to_string(), |frame| frame.to_css())
    };

    let links = nav_links(&items)
        .into_iter()
        .map(|link| {
            let index = link.index;
            let node_ref = refs.with_value(|refs| refs[index]);

            view! {
              <a
                node_ref=node_ref
                href=link.href
                class="folio-nav-link"
                class:active=move || group.with(|group| group.is_hovered(index))
                aria-label=link.aria_label
                on:mouseenter=move |_| group.update(|group| group.enter(index))
                on:click=move |_| {
                  if let Some(callback) = on_item_click {
                    callback.run(());
                  }
                }
              >
                <span class="folio-nav-link-label">{link.name}</span>
              </a>
            }
        })
        .collect_view();

    view! {
      <div class="folio-nav-items" on:mouseleave=move |_| group.update(HoverGroup::leave_group)>
        <div class="folio-nav-highlight" style=highlight_style aria-hidden="true"></div>
        {links}
      </div>
    }
}

fn bump(tick: RwSignal<u32>) {
    // Timers may outlive the nav row.
    let _ = tick.try_update(|tick| *tick = tick.wrapping_add(1));
}

/// Re-measure every [`FOLLOW_INTERVAL`] until `settle` has passed, then once more.
fn follow_layout(tick: RwSignal<u32>, settle: Duration) {
    bump(tick);
    match set_interval_with_handle(move || bump(tick), FOLLOW_INTERVAL) {
        Ok(interval) => set_timeout(
            move || {
                interval.clear();
                bump(tick);
            },
            settle,
        ),
        Err(_) => {
            log::debug!("nav: highlight follow interval unavailable");
            set_timeout(move || bump(tick), settle);
        }
    }
}

/// Mobile container. Narrows, pads and squares its corners when compact.
#[component]
pub fn MobileNav(
    /// Whether the page is scrolled past the threshold.
    compact: Signal<bool>,
    #[prop(optional)] layout: ShellLayout,
    #[prop(optional)] spring: Spring,
    children: Children,
) -> impl IntoView {
    let hover = RwSignal::new(HoverTracker::default());
    let hovered = move || hover.with(HoverTracker::is_hovered);
    let style = move || ShellStyle::mobile(&layout, compact.get(), hovered()).to_css(&spring);

    view! {
      <div
        class="folio-mobile-nav"
        class:hovered=hovered
        style=style
        on:mouseenter=move |_| hover.update(HoverTracker::enter)
        on:mouseleave=move |_| hover.update(HoverTracker::leave)
      >
        {children()}
      </div>
    }
}

#[component]
pub fn MobileNavHeader(children: Children) -> impl IntoView {
    view! { <div class="folio-mobile-nav-header">{children()}</div> }
}

/// Button opening and closing the mobile menu.
#[component]
pub fn MobileNavToggle(menu: RwSignal<MobileMenu>) -> impl IntoView {
    let is_open = move || menu.with(MobileMenu::is_open);

    view! {
      <button
        type="button"
        class="folio-mobile-nav-toggle"
        aria-label=move || if is_open() { "Close menu" } else { "Open menu" }
        aria-expanded=move || is_open().to_string()
        on:click=move |_| menu.update(MobileMenu::toggle)
      >
        <Show when=is_open fallback=|| view! { <MenuIcon /> }>
          <CloseIcon />
        </Show>
      </button>
    }
}

/// Overlay list of the nav entries.
///
/// Stays mounted while closing so the exit animation can finish; the
/// removal is scheduled `duration_ms` after the exit starts.
#[component]
pub fn MobileNavMenu(
    menu: RwSignal<MobileMenu>,
    items: Vec<NavEntry>,
    #[prop(into)] mail: String,
    #[prop(default = DEFAULT_MENU_DURATION_MS)] duration_ms: u32,
) -> impl IntoView {
    let items = StoredValue::new(items);
    let mail = StoredValue::new(mail);
    let hover = RwSignal::new(HoverTracker::default());

    Effect::new(move |_| {
        if let Some(epoch) = menu.with(MobileMenu::closing_epoch) {
            set_timeout(
                move || {
                    // The page may be gone by the time the exit ends.
                    let _ = menu.try_update(|menu| menu.finish_exit(epoch));
                },
                Duration::from_millis(u64::from(duration_ms)),
            );
        }
    });

    let select = move || menu.update(MobileMenu::select);
    let class = move || match menu.with(MobileMenu::phase) {
        MenuPhase::Closing { .. } => "folio-mobile-menu folio-mobile-menu--exit",
        _ => "folio-mobile-menu folio-mobile-menu--enter",
    };
    let style = format!("--folio-menu-duration: {duration_ms}ms;");

    view! {
      <Show when=move || menu.with(MobileMenu::is_mounted)>
        <div
          class=class
          class:hovered=move || hover.with(HoverTracker::is_hovered)
          style=style.clone()
          on:mouseenter=move |_| hover.update(HoverTracker::enter)
          on:mouseleave=move |_| hover.update(HoverTracker::leave)
        >
          {move || {
            items
              .get_value()
              .into_iter()
              .map(|entry| {
                let aria_label = entry.aria_label();
                view! {
                  <a
                    href=entry.link
                    class="folio-mobile-nav-link"
                    aria-label=aria_label
                    on:click=move |_| select()
                  >
                    <span>{entry.name}</span>
                  </a>
                }
              })
              .collect_view()
          }}
          <div class="folio-mobile-nav-actions">
            <NavbarButton
              href=mail.get_value()
              variant=ButtonVariant::Primary
              extra_class="folio-button--block"
              on_click=Callback::new(move |_: ()| select())
            >
              "Mail"
            </NavbarButton>
          </div>
        </div>
      </Show>
    }
}

/// Logo linking back to the top of the page.
#[component]
pub fn NavbarLogo(
    #[prop(into)] src: String,
    #[prop(default = "Logo".to_string(), into)] alt: String,
) -> impl IntoView {
    view! {
      <a href="#" class="folio-nav-logo" aria-label="Home">
        <img src=src alt=alt width="30" height="30" />
      </a>
    }
}

/// Call to action rendered as a link.
#[component]
pub fn NavbarButton(
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] extra_class: Option<String>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, extra_class.as_deref());

    view! {
      <a
        href=href
        class=class
        on:click=move |_| {
          if let Some(callback) = on_click {
            callback.run(());
          }
        }
      >
        {children()}
      </a>
    }
}

#[component]
fn MenuIcon() -> impl IntoView {
    view! {
      <svg class="folio-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
        <path d="M4 6l16 0" />
        <path d="M4 12l16 0" />
        <path d="M4 18l16 0" />
      </svg>
    }
}

#[component]
fn CloseIcon() -> impl IntoView {
    view! {
      <svg class="folio-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
        <path d="M18 6l-12 12" />
        <path d="M6 6l12 12" />
      </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_variant_classes() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonVariant::Primary.class(), "folio-button--primary");
        assert_eq!(ButtonVariant::Secondary.class(), "folio-button--secondary");
        assert_eq!(ButtonVariant::Dark.class(), "folio-button--dark");
    }

    #[test]
    fn test_button_class_with_extra() {
        assert_eq!(
            button_class(ButtonVariant::Primary, Some("folio-button--block")),
            "folio-button folio-button--primary folio-button--block"
        );
        assert_eq!(
            button_class(ButtonVariant::Dark, None),
            "folio-button folio-button--dark"
        );
        assert_eq!(
            button_class(ButtonVariant::Secondary, Some("")),
            "folio-button folio-button--secondary"
        );
    }
}
