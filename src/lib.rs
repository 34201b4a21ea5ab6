//! Valentine card core crate.
//!
//! Compiles to WebAssembly and wires a single-page interactive greeting card
//! into the host document: a "No" button that dodges the pointer while the
//! copy pleads, and a "Yes" button that flips the page into celebration mode
//! (confetti, happy cat, louder music). `start_card()` is the only entry
//! point; the element ids and classes it expects are listed in the README.

use wasm_bindgen::prelude::*;

pub mod card;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Fixed copy & glyph palettes
// -----------------------------------------------------------------------------

/// Persuasive messages shown while the No button keeps dodging. Indexed by
/// the capped hover count; the final entry repeats once the list runs out.
pub const PERSUASIVE_MESSAGES: &[&str] = &[
    "Are you sure? 🥺",
    "The cat will be sad... 😿",
    "Please? Pretty please? 🐱",
    "Think about all the fun we'll have! ✨",
    "One more chance? 💝",
    "The cat is giving you the puppy eyes! 👀",
    "But... but... I got you a virtual cat! 🐈",
    "Don't break my heart! 💔",
    "I promise to be the best Valentine! 🌟",
    "The cat says yes even if you won't! 😺",
];

/// Glyphs drawn for ambient floating particles.
pub const PARTICLE_GLYPHS: &[&str] = &["💕", "💖", "💗", "💝", "✨", "💫", "⭐"];

/// Confetti piece colors (pastel palette).
pub const CONFETTI_COLORS: &[&str] = &["#FFC9DE", "#FFB3D1", "#C5A8D6", "#E5D4ED", "#D4F1E8"];

/// Cat moods. `CAT_HAPPY` is reserved for the celebration; the others cycle
/// while the user hovers the No button.
pub const CAT_PLEADING: &str = "🥺";
pub const CAT_SAD: &str = "😿";
pub const CAT_HAPPY: &str = "😻";
pub const CAT_LOVE: &str = "😽";

/// Subset of cat glyphs cycled by the evasion path (never the happy one).
pub const DISCOURAGED_CATS: &[&str] = &[CAT_PLEADING, CAT_SAD, CAT_LOVE];

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_card() -> Result<(), JsValue> {
    card::start()
}
