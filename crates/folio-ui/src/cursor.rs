//! Custom cursor overlay.

use folio_core::CursorState;
use leptos::{ev, prelude::*};

/// A dot that follows the pointer and hides when it leaves the window.
#[component]
pub fn CursorOverlay(#[prop(default = 16.0)] size_px: f64) -> impl IntoView {
    let cursor = RwSignal::new(CursorState::default());

    let on_move = window_event_listener(ev::mousemove, move |event| {
        let (x, y) = (f64::from(event.client_x()), f64::from(event.client_y()));
        cursor.update(|cursor| cursor.moved(x, y));
    });
    let on_out = window_event_listener(ev::mouseout, move |event| {
        // No related target means the pointer left the document.
        if event.related_target().is_none() {
            cursor.update(CursorState::left);
        }
    });
    on_cleanup(move || {
        on_move.remove();
        on_out.remove();
    });

    let style = move || {
        format!(
            "width: {size_px}px; height: {size_px}px; {}",
            cursor.with(|cursor| cursor.to_css(size_px))
        )
    };

    view! { <div class="folio-cursor" style=style aria-hidden="true"></div> }
}
