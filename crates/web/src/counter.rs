// =============================================================================
// Timeless Web - Counter Animation
// =============================================================================
// Table of Contents:
// 1. Types
// 2. Visibility Trigger
// 3. Ticking
// =============================================================================
//
// Host-independent model of the statistics counter. The component wires
// observer callbacks into `on_visibility` and interval callbacks into
// `tick`, and renders `value()`.

use crate::config::{COUNTER_TICK_MS, VISIBILITY_THRESHOLD};

// Browsers report ratios a hair under the configured threshold when the
// crossing callback fires.
const RATIO_TOLERANCE: f64 = 1e-3;

// -----------------------------------------------------------------------------
// 1. Types
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not yet seen on screen.
    Waiting,
    /// Ticking toward the target.
    Running,
    /// Holding the target value.
    Finished,
}

/// What a visibility report asks the host to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Start the interval.
    Start,
    /// Target reached without ticking; nothing to schedule.
    Settled,
    /// Nothing changes.
    Ignored,
}

/// One counter's animation, fired at most once per instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    end: i64,
    duration_ms: u32,
    tick_ms: u32,
    ticks: u32,
    value: i64,
    has_fired: bool,
    phase: Phase,
}

impl CounterAnimation {
    pub fn new(end: i64, duration_ms: u32) -> Self {
        // Non-positive targets settle up front so no tick loop ever starts
        if end <= 0 {
            return Self {
                end,
                duration_ms,
                tick_ms: COUNTER_TICK_MS,
                ticks: 0,
                value: end,
                has_fired: true,
                phase: Phase::Finished,
            };
        }

        Self {
            end,
            duration_ms,
            tick_ms: COUNTER_TICK_MS,
            ticks: 0,
            value: 0,
            has_fired: false,
            phase: Phase::Waiting,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_fired(&self) -> bool {
        self.has_fired
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Text shown in the counter element.
    pub fn display(&self, suffix: &str) -> String {
        format!("{}{}", self.value, suffix)
    }

    // -------------------------------------------------------------------------
    // 2. Visibility Trigger
    // -------------------------------------------------------------------------

    /// Feed an intersection report; only the first one past the threshold
    /// counts.
    pub fn on_visibility(&mut self, intersecting: bool, ratio: f64) -> Trigger {
        if self.has_fired {
            return Trigger::Ignored;
        }
        if !intersecting || ratio + RATIO_TOLERANCE < VISIBILITY_THRESHOLD {
            return Trigger::Ignored;
        }

        self.has_fired = true;
        if self.duration_ms == 0 {
            self.finish();
            return Trigger::Settled;
        }

        self.phase = Phase::Running;
        Trigger::Start
    }

    // -------------------------------------------------------------------------
    // 3. Ticking
    // -------------------------------------------------------------------------

    /// Advance one tick. Returns `true` while more ticks are needed.
    ///
    /// The value is derived from elapsed time instead of summing a float
    /// increment, so it cannot drift past or short of `end`.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.ticks = self.ticks.saturating_add(1);
        let elapsed = u64::from(self.ticks) * u64::from(self.tick_ms);
        let duration = u64::from(self.duration_ms);

        if elapsed >= duration {
            self.finish();
            return false;
        }

        let progressed = (self.end as f64 * elapsed as f64 / duration as f64).floor() as i64;
        self.value = progressed.clamp(self.value, self.end);
        true
    }

    fn finish(&mut self) {
        self.value = self.end;
        self.phase = Phase::Finished;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run_to_end(anim: &mut CounterAnimation) -> Vec<i64> {
        let mut seen = vec![anim.value()];
        while anim.tick() {
            seen.push(anim.value());
        }
        seen.push(anim.value());
        seen
    }

    #[test]
    fn test_waits_for_half_visibility() {
        let mut anim = CounterAnimation::new(150, 2000);
        assert_eq!(anim.on_visibility(true, 0.2), Trigger::Ignored);
        assert_eq!(anim.on_visibility(false, 0.0), Trigger::Ignored);
        assert!(!anim.tick());
        assert_eq!(anim.value(), 0);
        assert_eq!(anim.phase(), Phase::Waiting);

        assert_eq!(anim.on_visibility(true, 0.5), Trigger::Start);
        assert!(anim.has_fired());
    }

    #[test]
    fn test_ratio_just_under_threshold_counts() {
        let mut anim = CounterAnimation::new(10, 2000);
        assert_eq!(anim.on_visibility(true, 0.4999), Trigger::Start);
    }

    #[test]
    fn test_reaches_exact_end_at_duration() {
        let mut anim = CounterAnimation::new(150, 2000);
        anim.on_visibility(true, 1.0);

        // 2000ms / 16ms = 125 ticks
        for _ in 0..124 {
            assert!(anim.tick());
            assert!(anim.value() < 150);
        }
        assert!(!anim.tick());
        assert_eq!(anim.value(), 150);
        assert_eq!(anim.phase(), Phase::Finished);

        // Further ticks are no-ops
        assert!(!anim.tick());
        assert_eq!(anim.value(), 150);
    }

    #[test]
    fn test_values_monotonic_and_bounded() {
        let mut anim = CounterAnimation::new(150, 2000);
        anim.on_visibility(true, 0.75);
        let seen = run_to_end(&mut anim);

        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert!(seen.iter().all(|v| (0..=150).contains(v)));
        assert_eq!(*seen.last().unwrap(), 150);
    }

    #[test]
    fn test_retrigger_after_completion_is_ignored() {
        let mut anim = CounterAnimation::new(150, 2000);
        anim.on_visibility(true, 1.0);
        run_to_end(&mut anim);

        assert_eq!(anim.on_visibility(false, 0.0), Trigger::Ignored);
        assert_eq!(anim.on_visibility(true, 1.0), Trigger::Ignored);
        assert!(!anim.tick());
        assert_eq!(anim.value(), 150);
    }

    #[test]
    fn test_retrigger_mid_run_does_not_restart() {
        let mut anim = CounterAnimation::new(50, 2000);
        anim.on_visibility(true, 1.0);
        for _ in 0..60 {
            anim.tick();
        }
        let midway = anim.value();
        assert!(midway > 0);

        assert_eq!(anim.on_visibility(true, 1.0), Trigger::Ignored);
        assert_eq!(anim.value(), midway);
    }

    #[test]
    fn test_zero_end_settles_without_ticking() {
        let mut anim = CounterAnimation::new(0, 2000);
        assert_eq!(anim.value(), 0);
        assert_eq!(anim.phase(), Phase::Finished);
        assert_eq!(anim.on_visibility(true, 1.0), Trigger::Ignored);
        assert!(!anim.tick());
    }

    #[test]
    fn test_negative_end_shows_end() {
        let anim = CounterAnimation::new(-5, 2000);
        assert_eq!(anim.value(), -5);
        assert_eq!(anim.display("+"), "-5+");
    }

    #[test]
    fn test_zero_duration_settles_on_trigger() {
        let mut anim = CounterAnimation::new(24, 0);
        assert_eq!(anim.on_visibility(true, 1.0), Trigger::Settled);
        assert_eq!(anim.value(), 24);
        assert!(!anim.tick());
    }

    #[test]
    fn test_display_appends_suffix() {
        let mut anim = CounterAnimation::new(24, 2000);
        assert_eq!(anim.display("/7"), "0/7");
        anim.on_visibility(true, 1.0);
        run_to_end(&mut anim);
        assert_eq!(anim.display("/7"), "24/7");
    }

    proptest! {
        #[test]
        fn prop_run_is_monotonic_bounded_and_exact(
            end in 1i64..1_000_000,
            duration in 1u32..20_000,
        ) {
            let mut anim = CounterAnimation::new(end, duration);
            prop_assert_eq!(anim.on_visibility(true, 1.0), Trigger::Start);

            let mut previous = anim.value();
            let mut ticks: u64 = 0;
            while anim.tick() {
                ticks += 1;
                let value = anim.value();
                prop_assert!(value >= previous);
                prop_assert!(value >= 0 && value <= end);
                previous = value;
            }
            ticks += 1;

            prop_assert_eq!(anim.value(), end);
            // Finishes on the first tick at or past the duration
            prop_assert_eq!(ticks, u64::from(duration).div_ceil(u64::from(COUNTER_TICK_MS)));
        }
    }
}
