//! Pure geometry and pacing rules for the evading button.
//!
//! Kept DOM-free so the host test suite can exercise the bounds, clamping,
//! and trigger-sequence invariants without a browser. Callers feed in the
//! card's bounding rect and unit random samples; nothing here touches
//! `web_sys`.

/// Padding kept between the button and the card edge (px).
pub const CARD_PADDING: f64 = 20.0;
/// Extra band below the card top reserved for the question text (px).
pub const HEADER_RESERVE: f64 = 100.0;
/// Scale floor for the shrinking No button.
pub const MIN_NO_SCALE: f64 = 0.3;
/// Scale lost per shrink step.
pub const NO_SHRINK_STEP: f64 = 0.1;
/// Growth cap for the Yes button.
pub const MAX_YES_SCALE: f64 = 1.5;
/// Yes-button growth per evasion trigger once the user is past the threshold.
pub const YES_GROWTH_PER_HOVER: f64 = 0.05;
/// Evasion triggers before the Yes button starts growing.
pub const YES_GROWTH_THRESHOLD: u32 = 3;

/// Axis-aligned rectangle in viewport pixels (mirror of a DOM bounding rect).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Persuasive-message index for a given trigger count: the list is walked
/// once and then the final entry repeats. Total for any count.
pub fn message_index(hover_count: u32, message_count: usize) -> usize {
    (hover_count as usize).min(message_count.saturating_sub(1))
}

/// What a single evasion trigger does besides relocating the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvasionStep {
    pub message_index: usize,
    /// Shrink the No button this trigger (every 2nd).
    pub shrink: bool,
    /// Swap the cat glyph this trigger (every 3rd).
    pub swap_cat: bool,
    /// New Yes-button scale, once the count passes the growth threshold.
    pub yes_scale: Option<f64>,
}

/// Decide the side effects of the `hover_count`-th trigger. `hover_count` is
/// the already-incremented value (the first trigger passes 1).
pub fn evasion_step(hover_count: u32, message_count: usize) -> EvasionStep {
    EvasionStep {
        message_index: message_index(hover_count, message_count),
        shrink: hover_count % 2 == 0,
        swap_cat: hover_count % 3 == 0,
        yes_scale: (hover_count > YES_GROWTH_THRESHOLD).then(|| yes_scale(hover_count)),
    }
}

/// One shrink step, floored at `MIN_NO_SCALE`.
pub fn shrink_scale(scale: f64) -> f64 {
    (scale - NO_SHRINK_STEP).max(MIN_NO_SCALE)
}

/// Yes-button scale for a given trigger count, capped at `MAX_YES_SCALE`.
pub fn yes_scale(hover_count: u32) -> f64 {
    (1.0 + YES_GROWTH_PER_HOVER * f64::from(hover_count)).min(MAX_YES_SCALE)
}

/// Random viewport position for the evading button, fully inside `card`
/// minus the edge padding and the reserved header band. `button_w`/`button_h`
/// are the unscaled offset dimensions; the current scale is applied here.
/// `u1`/`u2` are unit samples in [0, 1).
///
/// When the card is smaller than the button the available extent goes
/// non-positive; the range then collapses to its minimum instead of going
/// negative, so the result is finite and on the padded origin.
pub fn evasion_position(
    card: Rect,
    button_w: f64,
    button_h: f64,
    scale: f64,
    u1: f64,
    u2: f64,
) -> (f64, f64) {
    let w = button_w * scale;
    let h = button_h * scale;

    let min_x = card.left + CARD_PADDING;
    let max_x = (card.right - w - CARD_PADDING).max(min_x);
    let min_y = card.top + CARD_PADDING + HEADER_RESERVE;
    let max_y = (card.bottom - h - CARD_PADDING).max(min_y);

    (min_x + u1 * (max_x - min_x), min_y + u2 * (max_y - min_y))
}
