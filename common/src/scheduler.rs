//! Redraw scheduling and tick cadence.
//!
//! Two decisions are made here:
//!
//! - **Per tick**: the face is redrawn on every tick. The banner text is
//!   regenerated only on the first tick since start or when the second rolls
//!   over to zero.
//! - **Per settings change**: the tick subscription follows `show_seconds`.
//!   When the cadence flips, the old subscription is torn down and a new one
//!   is made, so the very next tick arrives at the new cadence.

use crate::host::TickService;
use crate::settings::Settings;
use crate::time::TimeSample;

// =============================================================================
// Tick Cadence
// =============================================================================

/// How often the host tick service fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickCadence {
    PerSecond,
    PerMinute,
}

impl TickCadence {
    /// Cadence required by the given settings.
    pub const fn for_settings(settings: &Settings) -> Self {
        if settings.show_seconds { Self::PerSecond } else { Self::PerMinute }
    }

    /// Short label for logs and the debug page.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PerSecond => "second",
            Self::PerMinute => "minute",
        }
    }
}

// =============================================================================
// Redraw Scheduler
// =============================================================================

/// What one tick asks to redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickDecision {
    /// Always set: the analog face follows every tick.
    pub redraw_face: bool,
    /// Regenerate the digital banner text.
    pub regenerate_banner: bool,
}

/// Tracks the first-tick latch and the live tick subscription.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedrawScheduler {
    initialized: bool,
    subscribed: Option<TickCadence>,
}

impl RedrawScheduler {
    pub const fn new() -> Self {
        Self {
            initialized: false,
            subscribed: None,
        }
    }

    /// Decide what a tick redraws. The first call latches `initialized`.
    pub fn on_tick(
        &mut self,
        time: TimeSample,
    ) -> TickDecision {
        let regenerate_banner = !self.initialized || time.second() == 0;
        self.initialized = true;
        TickDecision {
            redraw_face: true,
            regenerate_banner,
        }
    }

    /// Subscribe at the cadence the settings require.
    pub fn start(
        &mut self,
        settings: &Settings,
        ticks: &mut impl TickService,
    ) -> TickCadence {
        let cadence = TickCadence::for_settings(settings);
        if self.subscribed.is_some() {
            ticks.unsubscribe();
        }
        ticks.subscribe(cadence);
        self.subscribed = Some(cadence);
        cadence
    }

    /// Follow a settings change. Resubscribes only when the cadence flips.
    ///
    /// Returns the new cadence if the subscription was replaced.
    pub fn apply_settings(
        &mut self,
        settings: &Settings,
        ticks: &mut impl TickService,
    ) -> Option<TickCadence> {
        let wanted = TickCadence::for_settings(settings);
        match self.subscribed {
            Some(current) if current == wanted => None,
            _ => Some(self.start(settings, ticks)),
        }
    }

    #[inline]
    pub const fn is_initialized(&self) -> bool { self.initialized }

    #[inline]
    pub const fn cadence(&self) -> Option<TickCadence> { self.subscribed }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::test_support::{RecordingTicker, TickCall};

    fn at(second: u32) -> TimeSample { TimeSample::new(10, 20, second).unwrap() }

    #[test]
    fn test_first_tick_regenerates_banner() {
        let mut scheduler = RedrawScheduler::new();
        assert!(!scheduler.is_initialized());
        let decision = scheduler.on_tick(at(31));
        assert!(decision.redraw_face);
        assert!(decision.regenerate_banner);
        assert!(scheduler.is_initialized());
    }

    #[test]
    fn test_banner_only_on_second_zero_after_first_tick() {
        let mut scheduler = RedrawScheduler::new();
        scheduler.on_tick(at(31));
        for second in 32..60 {
            let decision = scheduler.on_tick(at(second));
            assert!(decision.redraw_face, "face redraws every tick");
            assert!(!decision.regenerate_banner, "no banner at second {second}");
        }
        assert!(scheduler.on_tick(at(0)).regenerate_banner);
        assert!(!scheduler.on_tick(at(1)).regenerate_banner, "latch is never reset");
    }

    #[test]
    fn test_start_subscribes_at_settings_cadence() {
        let mut ticks = RecordingTicker::default();
        let mut scheduler = RedrawScheduler::new();
        let settings = Settings::default();
        assert_eq!(scheduler.start(&settings, &mut ticks), TickCadence::PerSecond);
        assert_eq!(ticks.calls, [TickCall::Subscribe(TickCadence::PerSecond)]);
        assert_eq!(scheduler.cadence(), Some(TickCadence::PerSecond));
    }

    #[test]
    fn test_cadence_flip_resubscribes() {
        let mut ticks = RecordingTicker::default();
        let mut scheduler = RedrawScheduler::new();
        let mut settings = Settings::default();
        scheduler.start(&settings, &mut ticks);

        settings.show_seconds = false;
        assert_eq!(scheduler.apply_settings(&settings, &mut ticks), Some(TickCadence::PerMinute));
        assert_eq!(
            ticks.calls,
            [
                TickCall::Subscribe(TickCadence::PerSecond),
                TickCall::Unsubscribe,
                TickCall::Subscribe(TickCadence::PerMinute),
            ]
        );
        assert_eq!(ticks.active(), Some(TickCadence::PerMinute));
    }

    #[test]
    fn test_unchanged_cadence_keeps_subscription() {
        let mut ticks = RecordingTicker::default();
        let mut scheduler = RedrawScheduler::new();
        let mut settings = Settings::default();
        scheduler.start(&settings, &mut ticks);

        settings.show_bubbles = false;
        assert_eq!(scheduler.apply_settings(&settings, &mut ticks), None);
        assert_eq!(ticks.calls.len(), 1);
    }

    #[test]
    fn test_cadence_labels() {
        assert_eq!(TickCadence::PerSecond.label(), "second");
        assert_eq!(TickCadence::PerMinute.label(), "minute");
    }
}
