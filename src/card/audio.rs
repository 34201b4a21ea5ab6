//! Background music control.
//!
//! Two states, playing and paused, flipped by the explicit toggle control and
//! bootstrapped by the first page-wide click (browsers gate audible playback
//! behind a user gesture). A playback request is the card's only fallible
//! external operation: autoplay policy may reject it, in which case we log
//! and stay paused until the next explicit attempt. No retry loop.

use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::console;

/// Default volume while the question is up.
pub const BASE_VOLUME: f64 = 0.5;
/// Volume once the celebration starts.
pub const CELEBRATION_VOLUME: f64 = 1.0;

/// Ask the audio element to start. The request itself must happen inside the
/// current gesture callback, so only the completion is deferred: on resolve
/// the state flips to playing, on rejection it stays paused.
pub fn try_play() {
    let Some(play_result) = super::with_state(|state| state.music.play()) else {
        return;
    };
    match play_result {
        Ok(promise) => {
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        super::with_state(|state| {
                            state.music_playing = true;
                            state.music_toggle.class_list().remove_1("muted").ok();
                        });
                    }
                    Err(err) => {
                        // Autoplay policy rejection: wait for the next
                        // explicit user action.
                        console::warn_1(&format!("music autoplay prevented: {err:?}").into());
                    }
                }
            });
        }
        Err(err) => {
            console::warn_1(&format!("music playback request failed: {err:?}").into());
        }
    }
}

/// Flip between playing and paused from the explicit toggle control.
pub fn toggle() {
    let was_playing = super::with_state(|state| {
        if state.music_playing {
            state.music.pause().ok();
            state.music_playing = false;
            state.music_toggle.class_list().add_1("muted").ok();
            true
        } else {
            false
        }
    });
    if was_playing == Some(false) {
        try_play();
    }
}
