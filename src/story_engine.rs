// Pure math and state for the scroll-driven story page. No web_sys in here so
// the whole module can be unit tested off-browser.

/// How long the intro splash stays up, in milliseconds.
pub const INTRO_DURATION_MS: u32 = 3000;
/// Extra delay after the splash before the hero content reveals.
pub const CONTENT_DELAY_MS: u32 = 500;
/// Sections count as entered slightly before their exact proportional slot.
/// Tuned for animation feel, keep as is.
pub const SECTION_THRESHOLD: f64 = 0.2;

/// Phase of the one-shot intro sequence on the story page.
///
/// Linear: `Intro -> PostIntro -> ContentVisible`, driven by two timeouts
/// scheduled at mount. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Intro,
    PostIntro,
    ContentVisible,
}

impl IntroPhase {
    pub fn splash_visible(self) -> bool {
        self == IntroPhase::Intro
    }

    pub fn content_visible(self) -> bool {
        self == IntroPhase::ContentVisible
    }
}

/// Piecewise-linear interpolation through `(input, output)` stops.
///
/// Stops must be sorted by input. Values outside the stop range clamp to the
/// first/last output.
pub fn ramp(value: f64, stops: &[(f64, f64)]) -> f64 {
    let (first_in, first_out) = stops[0];
    if value <= first_in {
        return first_out;
    }
    for pair in stops.windows(2) {
        let (lo_in, lo_out) = pair[0];
        let (hi_in, hi_out) = pair[1];
        if value <= hi_in {
            let t = (value - lo_in) / (hi_in - lo_in);
            return lo_out + (hi_out - lo_out) * t;
        }
    }
    stops[stops.len() - 1].1
}

/// Normalized progress of a tall region scrolling through the viewport.
///
/// 0 while the region top sits at or below the viewport top, 1 once the
/// region bottom has reached the viewport bottom. Degenerate geometry (region
/// no taller than the viewport) snaps to 0 or 1 instead of dividing by zero.
pub fn scroll_progress(
    scroll_y: f64,
    region_top: f64,
    region_height: f64,
    viewport_height: f64,
) -> f64 {
    let range = region_height - viewport_height;
    if range <= 0.0 {
        return if scroll_y > region_top { 1.0 } else { 0.0 };
    }
    ((scroll_y - region_top) / range).clamp(0.0, 1.0)
}

/// Which section gets to play its entrance animation at this progress.
///
/// Overshoot past 1.0 saturates at the last section.
pub fn active_index(progress: f64, section_count: usize) -> usize {
    let raw = (progress * section_count as f64 + SECTION_THRESHOLD).floor();
    (raw.max(0.0) as usize).min(section_count - 1)
}

/// Per-section emphasis in [0,1], peaking when progress reaches the section's
/// own slot and falling off linearly to zero on both sides.
pub fn section_focus(progress: f64, index: usize, section_count: usize) -> f64 {
    let n = section_count as f64;
    let i = index as f64;
    ramp(
        progress,
        &[((i - 0.5) / n, 0.0), (i / n, 1.0), ((i + 1.0) / n, 0.0)],
    )
}

/// Opacity for a section at the given focus. Fades out only in the trailing
/// half of the focus window.
pub fn focus_opacity(focus: f64) -> f64 {
    ramp(focus, &[(0.5, 1.0), (0.8, 0.0)])
}

/// Scale for a section at the given focus. Slight zoom in, then settle.
pub fn focus_scale(focus: f64) -> f64 {
    ramp(focus, &[(0.0, 1.0), (0.3, 1.05), (0.8, 1.0)])
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 7;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn intro_phase_gates() {
        assert!(IntroPhase::Intro.splash_visible());
        assert!(!IntroPhase::Intro.content_visible());
        assert!(!IntroPhase::PostIntro.splash_visible());
        assert!(!IntroPhase::PostIntro.content_visible());
        assert!(!IntroPhase::ContentVisible.splash_visible());
        assert!(IntroPhase::ContentVisible.content_visible());
    }

    #[test]
    fn intro_delays() {
        assert_eq!(INTRO_DURATION_MS, 3000);
        assert_eq!(INTRO_DURATION_MS + CONTENT_DELAY_MS, 3500);
    }

    #[test]
    fn ramp_interpolates_and_clamps() {
        let stops = [(0.0, 1.0), (0.3, 1.05), (0.8, 1.0)];
        assert!(close(ramp(-1.0, &stops), 1.0));
        assert!(close(ramp(0.0, &stops), 1.0));
        assert!(close(ramp(0.15, &stops), 1.025));
        assert!(close(ramp(0.3, &stops), 1.05));
        assert!(close(ramp(0.55, &stops), 1.025));
        assert!(close(ramp(0.8, &stops), 1.0));
        assert!(close(ramp(2.0, &stops), 1.0));
    }

    #[test]
    fn progress_is_zero_before_first_scroll() {
        assert!(close(scroll_progress(0.0, 0.0, 7600.0, 1000.0), 0.0));
    }

    #[test]
    fn progress_clamps_to_unit_interval() {
        assert!(close(scroll_progress(-500.0, 0.0, 7600.0, 1000.0), 0.0));
        assert!(close(scroll_progress(3300.0, 0.0, 7600.0, 1000.0), 0.5));
        assert!(close(scroll_progress(99999.0, 0.0, 7600.0, 1000.0), 1.0));
    }

    #[test]
    fn progress_survives_degenerate_geometry() {
        assert!(close(scroll_progress(0.0, 0.0, 500.0, 1000.0), 0.0));
        assert!(close(scroll_progress(10.0, 0.0, 500.0, 1000.0), 1.0));
        assert!(close(scroll_progress(10.0, 0.0, 1000.0, 1000.0), 1.0));
    }

    #[test]
    fn active_index_matches_thresholded_floor() {
        for step in 0..=1000 {
            let p = step as f64 / 1000.0;
            let expected = ((p * N as f64 + SECTION_THRESHOLD).floor() as usize).min(N - 1);
            assert_eq!(active_index(p, N), expected, "p = {p}");
        }
    }

    #[test]
    fn active_index_endpoints() {
        assert_eq!(active_index(0.0, N), 0);
        assert_eq!(active_index(1.0, N), N - 1);
        // overshoot from resize reflow saturates instead of panicking
        assert_eq!(active_index(1.5, N), N - 1);
        assert_eq!(active_index(-0.2, N), 0);
    }

    #[test]
    fn active_index_midpoint_with_seven_sections() {
        assert_eq!(active_index(0.5, N), 3);
    }

    #[test]
    fn active_index_is_monotonic() {
        let mut last = 0;
        for step in 0..=1000 {
            let p = step as f64 / 1000.0;
            let index = active_index(p, N);
            assert!(index >= last, "index regressed at p = {p}");
            last = index;
        }
    }

    #[test]
    fn focus_peaks_at_own_slot() {
        for i in 0..N {
            let n = N as f64;
            assert!(close(section_focus(i as f64 / n, i, N), 1.0));
        }
    }

    #[test]
    fn focus_is_zero_one_slot_away() {
        let n = N as f64;
        for i in 1..N {
            assert!(close(section_focus((i as f64 - 1.0) / n, i, N), 0.0));
        }
        for i in 0..N - 1 {
            assert!(close(section_focus((i as f64 + 1.0) / n, i, N), 0.0));
        }
    }

    #[test]
    fn focus_ramps_linearly_between_stops() {
        let n = N as f64;
        // halfway up the leading edge of section 2's window
        assert!(close(section_focus(1.75 / n, 2, N), 0.5));
        // halfway down the trailing edge
        assert!(close(section_focus(2.5 / n, 2, N), 0.5));
    }

    #[test]
    fn opacity_fades_only_in_trailing_half() {
        assert!(close(focus_opacity(0.0), 1.0));
        assert!(close(focus_opacity(0.5), 1.0));
        assert!(close(focus_opacity(0.65), 0.5));
        assert!(close(focus_opacity(0.8), 0.0));
        assert!(close(focus_opacity(1.0), 0.0));
    }

    #[test]
    fn scale_pulses_then_settles() {
        assert!(close(focus_scale(0.0), 1.0));
        assert!(close(focus_scale(0.3), 1.05));
        assert!(close(focus_scale(0.8), 1.0));
        assert!(close(focus_scale(1.0), 1.0));
    }
}
