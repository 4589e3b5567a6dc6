//! Reveal schedule for the typewriter headline.
//!
//! Every character fades in `char_stagger_ms` after the one before it, and
//! the gap between words counts as one extra step. A word therefore always
//! starts strictly after the previous word started.

use serde::{Deserialize, Serialize};

/// Class added to words flagged for emphasis.
pub const EMPHASIS_CLASS: &str = "folio-typewriter-word--emphasis";

/// Class every word carries.
pub const WORD_CLASS: &str = "folio-typewriter-word";

/// A word of the headline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Word {
    pub text: String,

    /// Render in the accent color.
    #[serde(default)]
    pub emphasis: bool,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: true,
        }
    }
}

/// Timing of the reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    /// Delay before the first character.
    pub start_delay_ms: u32,

    /// Increment between consecutive characters.
    pub char_stagger_ms: u32,

    /// Fade duration of a single character.
    pub char_duration_ms: u32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000,
            char_stagger_ms: 80,
            char_duration_ms: 200,
        }
    }
}

/// One character and when it appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub delay_ms: u32,
}

impl Glyph {
    /// Text to render. Spaces become non-breaking so they keep their width.
    pub fn display(&self) -> String {
        if self.ch == ' ' {
            '\u{a0}'.to_string()
        } else {
            self.ch.to_string()
        }
    }
}

/// A word with its per-character schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedWord {
    pub text: String,
    pub emphasis: bool,
    pub start_ms: u32,
    pub glyphs: Vec<Glyph>,
}

impl RevealedWord {
    /// CSS classes for the word's wrapper.
    pub fn class(&self) -> String {
        if self.emphasis {
            format!("{WORD_CLASS} {EMPHASIS_CLASS}")
        } else {
            WORD_CLASS.to_string()
        }
    }
}

/// Lay out the reveal of `words`, preserving their order.
pub fn schedule(words: &[Word], timing: &RevealTiming) -> Vec<RevealedWord> {
    let step = timing.char_stagger_ms;
    let mut cursor = timing.start_delay_ms;

    words
        .iter()
        .map(|word| {
            let start_ms = cursor;
            let glyphs: Vec<Glyph> = word
                .text
                .chars()
                .enumerate()
                .map(|(i, ch)| Glyph {
                    ch,
                    delay_ms: start_ms.saturating_add(step.saturating_mul(i as u32)),
                })
                .collect();

            let steps = glyphs.len() as u32 + 1;
            cursor = cursor.saturating_add(step.saturating_mul(steps).max(1));

            RevealedWord {
                text: word.text.clone(),
                emphasis: word.emphasis,
                start_ms,
                glyphs,
            }
        })
        .collect()
}

/// Time at which the last character finishes fading in.
pub fn total_duration_ms(revealed: &[RevealedWord], timing: &RevealTiming) -> u32 {
    revealed
        .iter()
        .flat_map(|word| word.glyphs.iter())
        .map(|glyph| glyph.delay_ms.saturating_add(timing.char_duration_ms))
        .max()
        .unwrap_or(timing.start_delay_ms)
}
