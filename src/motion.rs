use std::time::Duration;

/// Delay between consecutive hero letters entering or leaving.
pub const LETTER_STAGGER: Duration = Duration::from_millis(50);

/// Duration of a single letter's enter/exit transition.
pub const LETTER_TRANSITION: Duration = Duration::from_millis(600);

/// Fraction of the page that has been scrolled past, in `[0, 1]`.
///
/// A document no taller than the viewport has nothing to scroll and reports 0.
pub fn scroll_progress(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

pub fn letter_delay(index: usize) -> Duration {
    LETTER_STAGGER.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 2000.0, 1000.0, 0.0)]
    #[case(500.0, 2000.0, 1000.0, 0.5)]
    #[case(1000.0, 2000.0, 1000.0, 1.0)]
    #[case(1300.0, 2000.0, 1000.0, 1.0)]
    #[case(-40.0, 2000.0, 1000.0, 0.0)]
    #[case(200.0, 800.0, 1000.0, 0.0)]
    #[case(200.0, 1000.0, 1000.0, 0.0)]
    #[case(f64::NAN, 2000.0, 1000.0, 0.0)]
    fn test_scroll_progress(
        #[case] offset: f64,
        #[case] scroll_height: f64,
        #[case] viewport_height: f64,
        #[case] expected: f64,
    ) {
        let progress = scroll_progress(offset, scroll_height, viewport_height);
        assert!((progress - expected).abs() < f64::EPSILON, "got {progress}");
    }

    #[test]
    fn test_letter_delay_staggers() {
        assert_eq!(letter_delay(0), Duration::ZERO);
        assert_eq!(letter_delay(1), Duration::from_millis(50));
        assert_eq!(letter_delay(6), Duration::from_millis(300));
    }
}
