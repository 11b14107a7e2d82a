use crate::config;

/// Pulls the first run of digits out of a stat label such as "500+ teams".
pub fn extract_target(text: &str) -> Option<u64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: &str = &text[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Half-up division that stays in range for any `value`.
fn round_div(value: u64, unit: u64) -> u64 {
    value / unit + u64::from(value % unit >= unit - unit / 2)
}

/// Renders a stat with a unit suffix. Rounding that reaches the next unit is
/// carried into it, so 999_999 renders as "1M+" rather than "1000K+".
pub fn format_stat(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{}M+", round_div(value, 1_000_000))
    } else if value >= 1_000 {
        let thousands = round_div(value, 1_000);
        if thousands >= 1_000 {
            format!("{}M+", round_div(value, 1_000_000))
        } else {
            format!("{}K+", thousands)
        }
    } else if value >= 100 {
        format!("{}+", value)
    } else {
        value.to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

/// Count-up from zero to `target` in fixed steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self::with_timing(target, config::COUNTER_DURATION_MS, config::COUNTER_STEP_MS)
    }

    pub fn with_timing(target: u64, duration_ms: u32, step_ms: u32) -> Self {
        let steps = (duration_ms as f64 / step_ms.max(1) as f64).max(1.0);
        Self {
            target,
            increment: target as f64 / steps,
        }
    }

    /// The frame shown after `steps` timer ticks.
    pub fn frame(&self, steps: u32) -> CounterFrame {
        let current = self.increment * steps as f64;
        if current >= self.target as f64 {
            CounterFrame {
                text: format_stat(self.target),
                finished: true,
            }
        } else {
            CounterFrame {
                text: format_stat(current.floor() as u64),
                finished: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_integer() {
        assert_eq!(extract_target("500+ enterprise teams"), Some(500));
        assert_eq!(extract_target("Over 2500000 messages, 40 models"), Some(2_500_000));
        assert_eq!(extract_target("99.9% uptime"), Some(99));
        assert_eq!(extract_target("no numbers here"), None);
        assert_eq!(extract_target(""), None);
    }

    #[test]
    fn formats_with_suffixes() {
        assert_eq!(format_stat(0), "0");
        assert_eq!(format_stat(42), "42");
        assert_eq!(format_stat(99), "99");
        assert_eq!(format_stat(100), "100+");
        assert_eq!(format_stat(999), "999+");
        assert_eq!(format_stat(1000), "1K+");
        assert_eq!(format_stat(1499), "1K+");
        assert_eq!(format_stat(1500), "2K+");
        assert_eq!(format_stat(50_000), "50K+");
        assert_eq!(format_stat(1_000_000), "1M+");
        assert_eq!(format_stat(2_500_000), "3M+");
        assert_eq!(format_stat(2_499_999), "2M+");
    }

    #[test]
    fn rounding_carries_into_next_unit() {
        assert_eq!(format_stat(999_499), "999K+");
        assert_eq!(format_stat(999_500), "1M+");
        assert_eq!(format_stat(999_999), "1M+");
    }

    #[test]
    fn largest_label_formats_without_overflow() {
        let target = extract_target("18446744073709551615 requests");
        assert_eq!(target, Some(u64::MAX));
        assert_eq!(format_stat(u64::MAX), "18446744073710M+");
        assert_eq!(round_div(u64::MAX, 1_000), 18_446_744_073_709_552);
        assert_eq!(round_div(1_499, 1_000), 1);
        assert_eq!(round_div(1_500, 1_000), 2);
    }

    #[test]
    fn counter_starts_at_zero_and_lands_on_target() {
        let counter = CounterAnimation::new(500);
        assert_eq!(
            counter.frame(0),
            CounterFrame {
                text: "0".to_string(),
                finished: false
            }
        );

        // 2000 ms at 16 ms per step
        let last = counter.frame(125);
        assert!(last.finished);
        assert_eq!(last.text, "500+");
    }

    #[test]
    fn counter_floors_intermediate_values() {
        let counter = CounterAnimation::new(1000);
        // 8 per step
        assert_eq!(counter.frame(1).text, "8");
        assert_eq!(counter.frame(12).text, "96");
        assert_eq!(counter.frame(13).text, "104+");
        assert!(!counter.frame(124).finished);
    }

    #[test]
    fn counter_is_monotonic() {
        let counter = CounterAnimation::new(2_500_000);
        let mut previous = 0.0;
        for step in 0..=125 {
            let shown = counter.increment * step as f64;
            assert!(shown >= previous);
            previous = shown;
        }
        assert_eq!(counter.frame(125).text, "3M+");
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let counter = CounterAnimation::new(0);
        assert!(counter.frame(0).finished);
        assert_eq!(counter.frame(0).text, "0");
    }
}
