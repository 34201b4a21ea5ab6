// Geometry and pacing invariants for the evading No button.
// The math is DOM-free by design so these scenarios run on the host.

use valentine_card::PERSUASIVE_MESSAGES;
use valentine_card::card::geometry::{
    self, CARD_PADDING, HEADER_RESERVE, MAX_YES_SCALE, MIN_NO_SCALE, Rect,
};
use valentine_card::card::rng::Lcg;

const CARD: Rect = Rect {
    left: 40.0,
    top: 60.0,
    right: 840.0,
    bottom: 660.0,
};

#[test]
fn evasion_position_stays_inside_padded_bounds() {
    let mut rng = Lcg::new(0xC0FFEE);
    let (button_w, button_h) = (120.0, 48.0);
    for step in 0..1000 {
        // Walk the scale down the way repeated evasion does.
        let scale = (1.0 - 0.1 * f64::from(step % 8)).max(MIN_NO_SCALE);
        let (x, y) = geometry::evasion_position(CARD, button_w, button_h, scale, rng.unit(), rng.unit());
        assert!(x.is_finite() && y.is_finite());
        assert!(x >= CARD.left + CARD_PADDING, "x {} below padded left", x);
        assert!(
            x <= CARD.right - button_w * scale - CARD_PADDING,
            "x {} leaves button spilling past padded right",
            x
        );
        assert!(y >= CARD.top + CARD_PADDING + HEADER_RESERVE, "y {} inside header band", y);
        assert!(
            y <= CARD.bottom - button_h * scale - CARD_PADDING,
            "y {} leaves button spilling past padded bottom",
            y
        );
    }
}

#[test]
fn degenerate_bounds_clamp_to_padded_origin() {
    // Card smaller than the button: the available extent is negative and the
    // range must collapse instead of producing NaN or out-of-range output.
    let tiny = Rect {
        left: 10.0,
        top: 10.0,
        right: 50.0,
        bottom: 40.0,
    };
    for u in [0.0, 0.25, 0.999] {
        let (x, y) = geometry::evasion_position(tiny, 200.0, 80.0, 1.0, u, u);
        assert!(x.is_finite() && y.is_finite());
        assert_eq!(x, tiny.left + CARD_PADDING);
        assert_eq!(y, tiny.top + CARD_PADDING + HEADER_RESERVE);
    }

    // Zero-extent card behaves the same way.
    let empty = Rect {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };
    let (x, y) = geometry::evasion_position(empty, 0.0, 0.0, 1.0, 0.5, 0.5);
    assert_eq!((x, y), (CARD_PADDING, CARD_PADDING + HEADER_RESERVE));
}

#[test]
fn shrink_scale_is_non_increasing_and_floored() {
    let mut scale = 1.0;
    for _ in 0..10 {
        let next = geometry::shrink_scale(scale);
        assert!(next <= scale, "scale grew from {} to {}", scale, next);
        assert!(next >= MIN_NO_SCALE - 1e-12, "scale {} fell below floor", next);
        scale = next;
    }
    // After enough steps the floor holds exactly.
    assert!((scale - MIN_NO_SCALE).abs() < 1e-9);
    assert_eq!(geometry::shrink_scale(MIN_NO_SCALE), MIN_NO_SCALE);
}

#[test]
fn yes_scale_grows_and_caps() {
    assert!((geometry::yes_scale(4) - 1.2).abs() < 1e-12);
    assert!((geometry::yes_scale(8) - 1.4).abs() < 1e-12);
    assert_eq!(geometry::yes_scale(10), MAX_YES_SCALE);
    assert_eq!(geometry::yes_scale(100), MAX_YES_SCALE);
}

#[test]
fn trigger_sequence_one_to_ten_matches_expected_pacing() {
    let n = PERSUASIVE_MESSAGES.len();
    let mut scale = 1.0;
    for count in 1..=10u32 {
        let step = geometry::evasion_step(count, n);

        assert_eq!(step.message_index, (count as usize).min(n - 1));
        assert_eq!(step.shrink, count % 2 == 0, "shrink wrong at trigger {}", count);
        assert_eq!(
            step.swap_cat,
            count == 3 || count == 6 || count == 9,
            "cat swap wrong at trigger {}",
            count
        );

        if step.shrink {
            let next = geometry::shrink_scale(scale);
            assert!(next <= scale && next >= MIN_NO_SCALE);
            scale = next;
        }

        match step.yes_scale {
            Some(s) => {
                assert!(count > 3);
                assert!((s - (1.0 + 0.05 * f64::from(count)).min(MAX_YES_SCALE)).abs() < 1e-12);
            }
            None => assert!(count <= 3),
        }
    }
}

#[test]
fn lcg_is_deterministic_per_seed() {
    let mut a = Lcg::new(42);
    let mut b = Lcg::new(42);
    for _ in 0..100 {
        assert_eq!(a.unit(), b.unit());
    }
    let mut d = Lcg::new(42);
    let first: Vec<f64> = (0..8).map(|_| d.unit()).collect();
    // A different seed diverges somewhere in the first few draws.
    let mut c = Lcg::new(43);
    assert!(first.iter().any(|&y| c.unit() != y));
}

#[test]
fn lcg_samples_stay_in_bounds() {
    let mut rng = Lcg::new(7);
    for _ in 0..10_000 {
        let u = rng.unit();
        assert!((0.0..1.0).contains(&u), "unit sample {} out of range", u);
        let r = rng.range(15.0, 35.0);
        assert!((15.0..35.0).contains(&r), "range sample {} out of range", r);
    }
    // Empty and inverted ranges pin to the lower bound.
    assert_eq!(rng.range(5.0, 5.0), 5.0);
    assert_eq!(rng.range(9.0, 3.0), 9.0);
}

#[test]
fn lcg_pick_covers_the_slice() {
    let items = ["a", "b", "c", "d", "e", "f", "g"];
    let mut rng = Lcg::new(1234);
    let mut hit = [false; 7];
    for _ in 0..1000 {
        let picked = rng.pick(&items);
        let idx = items.iter().position(|i| i == picked).expect("pick outside slice");
        hit[idx] = true;
    }
    assert!(hit.iter().all(|h| *h), "1000 draws left a glyph unpicked: {:?}", hit);
}
