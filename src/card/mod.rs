//! Interactive greeting controller.
//!
//! Owns the card's single mutable state record and wires every input source
//! to it: pointer/touch/click on the two buttons, the music toggle, the
//! page-wide first-click audio bootstrap, and the ambient particle timer.
//! All mutation happens inside event or timer callbacks on the UI thread;
//! the state lives in a thread-local cell for the whole page session and is
//! never reset (the experience is single-shot).

pub mod audio;
pub mod geometry;
pub mod particles;
pub mod rng;

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlAudioElement, HtmlElement, MouseEvent, ScrollBehavior,
    ScrollToOptions, TouchEvent, window,
};

use crate::{CAT_HAPPY, DISCOURAGED_CATS, PERSUASIVE_MESSAGES};
use geometry::Rect;
use rng::Lcg;

/// Color applied to the persuasive message line on every evasion trigger.
const MESSAGE_COLOR: &str = "#FF69B4";

/// Everything the controller mutates across events, plus the DOM handles it
/// mutates through. One instance per page session, held in `CARD_STATE`.
struct CardState {
    document: Document,
    yes_btn: HtmlElement,
    no_btn: HtmlElement,
    question_card: HtmlElement,
    celebration: HtmlElement,
    message: HtmlElement,
    cat_image: HtmlElement,
    music_toggle: HtmlElement,
    music: HtmlAudioElement,
    particles: Element,
    /// Evasion triggers so far; monotonic, never reset.
    hover_count: u32,
    /// Current No-button scale, in [MIN_NO_SCALE, 1.0].
    no_scale: f64,
    music_playing: bool,
    /// Latch for the one-shot first-click playback attempt.
    autoplay_bootstrapped: bool,
    /// Handle of the live ambient spawn interval, if any.
    ambient_timer: Option<i32>,
    rng: Lcg,
}

thread_local! {
    static CARD_STATE: RefCell<Option<CardState>> = RefCell::new(None);
}

/// Run `f` against the live controller state, if the card has been wired.
fn with_state<R>(f: impl FnOnce(&mut CardState) -> R) -> Option<R> {
    CARD_STATE.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Look up a required element of the markup contract by id.
fn require_html(doc: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an html element")))
}

// --- Entry -------------------------------------------------------------------

pub fn start() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let yes_btn = require_html(&doc, "yes-btn")?;
    let no_btn = require_html(&doc, "no-btn")?;
    let celebration = require_html(&doc, "celebration")?;
    let message = require_html(&doc, "persuasive-message")?;
    let cat_image = require_html(&doc, "cat-image")?;
    let music_toggle = require_html(&doc, "music-toggle")?;
    let music: HtmlAudioElement = require_html(&doc, "background-music")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("#background-music is not an audio element"))?;
    let question_card: HtmlElement = doc
        .query_selector(".question-card")?
        .ok_or_else(|| JsValue::from_str("missing .question-card"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str(".question-card is not an html element"))?;

    // Reuse the particles container when the page ships one, create it otherwise.
    let particles: Element = if let Some(el) = doc.get_element_by_id("particles-container") {
        el
    } else {
        let el = doc.create_element("div")?;
        el.set_id("particles-container");
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&el)?;
        el
    };

    music.set_volume(audio::BASE_VOLUME);

    // Keep handles around for listener registration after the state moves.
    let no_btn_wire = no_btn.clone();
    let yes_btn_wire = yes_btn.clone();
    let music_toggle_wire = music_toggle.clone();

    let state = CardState {
        document: doc.clone(),
        yes_btn,
        no_btn,
        question_card,
        celebration,
        message,
        cat_image,
        music_toggle,
        music,
        particles,
        hover_count: 0,
        no_scale: 1.0,
        music_playing: false,
        autoplay_bootstrapped: false,
        ambient_timer: None,
        rng: Lcg::from_clock(),
    };
    CARD_STATE.with(|cell| cell.replace(Some(state)));

    // Ambient particles: an initial handful, then a steady cadence.
    with_state(|state| {
        let CardState {
            document,
            particles: container,
            rng,
            ..
        } = &mut *state;
        for _ in 0..particles::INITIAL_PARTICLES {
            particles::spawn_particle(document, container, rng).ok();
        }
    });
    let handle = particles::start_ambient_interval(particles::AMBIENT_CADENCE_MS)?;
    with_state(|state| state.ambient_timer = Some(handle));

    // --- No button evasion listeners ---
    {
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            on_no_interaction(&evt);
        }) as Box<dyn FnMut(_)>);
        no_btn_wire
            .add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Mousemove over the button re-triggers once the user has engaged, so a
    // slow pointer cannot park on top of it.
    {
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            let engaged = with_state(|state| state.hover_count > 0).unwrap_or(false);
            if engaged {
                on_no_interaction(&evt);
            }
        }) as Box<dyn FnMut(_)>);
        no_btn_wire
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Touch support for mobile
    {
        let closure = Closure::wrap(Box::new(move |evt: TouchEvent| {
            on_no_interaction(&evt);
        }) as Box<dyn FnMut(_)>);
        no_btn_wire
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // A click that lands anyway only counts as another evasion trigger.
    {
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            on_no_interaction(&evt);
        }) as Box<dyn FnMut(_)>);
        no_btn_wire.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // --- Yes button ---
    {
        let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            celebrate();
        }) as Box<dyn FnMut(_)>);
        yes_btn_wire.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // --- Music controls ---
    {
        let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            audio::toggle();
        }) as Box<dyn FnMut(_)>);
        music_toggle_wire
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Browsers only allow audible playback after a user gesture; attempt the
    // bootstrap on the first page-wide click, then stand down for good.
    {
        let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            let should_try = with_state(|state| {
                if state.autoplay_bootstrapped {
                    false
                } else {
                    state.autoplay_bootstrapped = true;
                    !state.music_playing
                }
            })
            .unwrap_or(false);
            if should_try {
                audio::try_play();
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    web_sys::console::log_1(&"valentine card ready 💕".into());
    Ok(())
}

// --- No button evasion -------------------------------------------------------

/// One evasion trigger: bump the count, refresh the copy, relocate and maybe
/// shrink the No button, nudge the cat mood and the Yes button.
fn on_no_interaction(event: &Event) {
    event.prevent_default();
    with_state(|state| {
        state.hover_count += 1;
        let step = geometry::evasion_step(state.hover_count, PERSUASIVE_MESSAGES.len());

        state
            .message
            .set_text_content(Some(PERSUASIVE_MESSAGES[step.message_index]));
        state
            .message
            .style()
            .set_property("color", MESSAGE_COLOR)
            .ok();

        move_no_button(state);

        if step.shrink {
            state.no_scale = geometry::shrink_scale(state.no_scale);
            state
                .no_btn
                .style()
                .set_property("transform", &format!("scale({})", state.no_scale))
                .ok();
        }
        if step.swap_cat {
            state
                .cat_image
                .set_text_content(Some(*state.rng.pick(DISCOURAGED_CATS)));
        }
        if let Some(scale) = step.yes_scale {
            state
                .yes_btn
                .style()
                .set_property("transform", &format!("scale({scale})"))
                .ok();
        }
    });
}

/// Relocate the No button to a fresh random spot inside the question card.
fn move_no_button(state: &mut CardState) {
    let rect = state.question_card.get_bounding_client_rect();
    let card = Rect {
        left: rect.left(),
        top: rect.top(),
        right: rect.right(),
        bottom: rect.bottom(),
    };
    let u1 = state.rng.unit();
    let u2 = state.rng.unit();
    let (x, y) = geometry::evasion_position(
        card,
        f64::from(state.no_btn.offset_width()),
        f64::from(state.no_btn.offset_height()),
        state.no_scale,
        u1,
        u2,
    );

    let style = state.no_btn.style();
    // First move: leave layout flow so left/top place the button freely.
    if !state.no_btn.class_list().contains("moving") {
        state.no_btn.class_list().add_1("moving").ok();
        style.set_property("position", "fixed").ok();
    }
    style.set_property("left", &format!("{x}px")).ok();
    style.set_property("top", &format!("{y}px")).ok();
    style.set_property("transition", "all 0.3s ease").ok();
}

// --- Celebration -------------------------------------------------------------

/// Flip the page into celebration mode. The transition is one-way; re-entry
/// is harmless since the DOM mutations are absolute and the confetti/volume
/// effects simply re-run.
fn celebrate() {
    let attempt_play = with_state(|state| {
        state
            .question_card
            .style()
            .set_property("display", "none")
            .ok();
        state.celebration.class_list().remove_1("hidden").ok();

        {
            let CardState { document, rng, .. } = &mut *state;
            particles::burst_confetti(document, rng).ok();
        }

        state.cat_image.set_text_content(Some(CAT_HAPPY));

        // The intensified interval replaces the ambient one.
        if let Some(handle) = state.ambient_timer.take() {
            if let Some(win) = window() {
                win.clear_interval_with_handle(handle);
            }
        }

        if state.music_playing {
            state.music.set_volume(audio::CELEBRATION_VOLUME);
        }
        !state.music_playing
    })
    .unwrap_or(false);

    if let Ok(handle) = particles::start_ambient_interval(particles::CELEBRATION_CADENCE_MS) {
        with_state(|state| state.ambient_timer = Some(handle));
    }

    if attempt_play {
        audio::try_play();
    }

    // Make sure the celebration view is on screen.
    if let Some(win) = window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}
