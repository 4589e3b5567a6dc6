//! Typewriter headline.

use folio_core::{RevealTiming, Word, typewriter};
use leptos::prelude::*;

/// Accessible name of the headline: the words joined by single spaces.
pub fn headline_label(words: &[Word]) -> String {
    words
        .iter()
        .map(|word| word.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Greeting line followed by the words, typed out one character at a time.
///
/// Each character is a CSS animation with its own delay, so the sequence
/// plays once when the component mounts and never again.
#[component]
pub fn TypewriterEffect(
    /// Static line above the headline.
    #[prop(into)]
    greeting: String,
    /// Headline words, in display order.
    words: Vec<Word>,
    /// Reveal timing.
    #[prop(optional)]
    timing: RevealTiming,
) -> impl IntoView {
    let revealed = typewriter::schedule(&words, &timing);
    let caret_delay = typewriter::total_duration_ms(&revealed, &timing);
    let label = headline_label(&words);

    let line = (!revealed.is_empty()).then(move || {
        let words = revealed
            .into_iter()
            .map(|word| {
                let glyphs = word
                    .glyphs
                    .iter()
                    .map(|glyph| {
                        view! {
                          <span
                            class="folio-typewriter-glyph"
                            style=format!("animation-delay: {}ms;", glyph.delay_ms)
                          >
                            {glyph.display()}
                          </span>
                        }
                    })
                    .collect_view();

                view! { <span class=word.class()>{glyphs}</span> }
            })
            .collect_view();

        view! {
          <h1
            class="folio-typewriter-line"
            aria-label=label
            style=format!("--folio-glyph-duration: {}ms;", timing.char_duration_ms)
          >
            {words}
            <span
              class="folio-typewriter-caret"
              style=format!("animation-delay: {caret_delay}ms;")
              aria-hidden="true"
            ></span>
          </h1>
        }
    });

    view! {
      <div class="folio-typewriter">
        <p class="folio-typewriter-greeting">{greeting}</p>
        {line}
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_label_reads_words_in_order() {
        let words = vec![
            Word::new("Hi,"),
            Word::new("I'm"),
            Word::emphasized("Someone."),
        ];
        assert_eq!(headline_label(&words), "Hi, I'm Someone.");
        assert_eq!(headline_label(&[]), "");
    }
}
