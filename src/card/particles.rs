//! Floating glyph particles and the celebration confetti burst.
//!
//! Every spawned element schedules its own removal, so the population is
//! bounded by spawn cadence × lifetime with no bookkeeping on our side.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, window};

use super::CardState;
use super::rng::Lcg;
use crate::{CONFETTI_COLORS, PARTICLE_GLYPHS};

/// Lifetime of one ambient particle before it removes itself (ms).
pub const PARTICLE_LIFETIME_MS: i32 = 7000;
/// Lifetime of one confetti piece (ms).
pub const CONFETTI_LIFETIME_MS: i32 = 3000;
/// Ambient spawn cadence while the question is up (ms).
pub const AMBIENT_CADENCE_MS: i32 = 800;
/// Ambient spawn cadence once the celebration starts (ms).
pub const CELEBRATION_CADENCE_MS: i32 = 200;
/// Particles spawned immediately when the card comes up.
pub const INITIAL_PARTICLES: usize = 5;
/// Confetti pieces per burst.
pub const CONFETTI_COUNT: usize = 100;
/// Stagger between consecutive confetti spawns (ms).
pub const CONFETTI_STAGGER_MS: i32 = 20;

/// Create one floating glyph element in `container` and schedule its removal.
pub fn spawn_particle(doc: &Document, container: &Element, rng: &mut Lcg) -> Result<(), JsValue> {
    let el: HtmlElement = doc.create_element("div")?.dyn_into()?;
    el.set_class_name("particle");
    el.set_text_content(Some(*rng.pick(PARTICLE_GLYPHS)));

    let style = el.style();
    style.set_property("left", &format!("{}%", rng.range(0.0, 100.0)))?;
    style.set_property("font-size", &format!("{}px", rng.range(15.0, 35.0)))?;
    style.set_property("animation-delay", &format!("{}s", rng.range(0.0, 2.0)))?;
    style.set_property("animation-duration", &format!("{}s", rng.range(4.0, 7.0)))?;

    container.append_child(&el)?;
    schedule_removal(&el, PARTICLE_LIFETIME_MS);
    Ok(())
}

/// Start spawning ambient particles at `cadence_ms`; returns the interval
/// handle so the caller can cancel it when intensifying.
pub fn start_ambient_interval(cadence_ms: i32) -> Result<i32, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::wrap(Box::new(move || {
        super::with_state(|state| {
            let CardState {
                document,
                particles: container,
                rng,
                ..
            } = &mut *state;
            spawn_particle(document, container, rng).ok();
        });
    }) as Box<dyn FnMut()>);
    let handle = win.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        cadence_ms,
    )?;
    closure.forget();
    Ok(handle)
}

/// Schedule the celebration burst: `CONFETTI_COUNT` colored pieces appended
/// to `<body>` at a fixed stagger, each self-removing after its lifetime.
pub fn burst_confetti(doc: &Document, rng: &mut Lcg) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    for i in 0..CONFETTI_COUNT {
        // Draw the random styling now so the delayed closure stays trivial.
        let left = rng.range(0.0, 100.0);
        let color = *rng.pick(CONFETTI_COLORS);
        let delay = rng.range(0.0, 0.5);

        let doc = doc.clone();
        let body = body.clone();
        let cb = Closure::once_into_js(move || {
            let Ok(el) = doc.create_element("div") else {
                return;
            };
            let Ok(el) = el.dyn_into::<HtmlElement>() else {
                return;
            };
            el.set_class_name("confetti");
            let style = el.style();
            style.set_property("left", &format!("{left}%")).ok();
            style.set_property("background-color", color).ok();
            style.set_property("animation-delay", &format!("{delay}s")).ok();
            if body.append_child(&el).is_ok() {
                schedule_removal(&el, CONFETTI_LIFETIME_MS);
            }
        });
        win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            i as i32 * CONFETTI_STAGGER_MS,
        )?;
    }
    Ok(())
}

/// Remove `el` from its parent after `delay_ms`. The closure frees itself
/// after firing, so expired elements leak neither DOM nodes nor closures.
fn schedule_removal(el: &HtmlElement, delay_ms: i32) {
    let el = el.clone();
    let cb = Closure::once_into_js(move || el.remove());
    if let Some(win) = window() {
        win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
            .ok();
    }
}
