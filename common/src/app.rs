//! Application state and event handlers.
//!
//! [`WatchApp`] owns everything the face needs between events: the active
//! settings, the status model, the redraw scheduler, the last tick's time and
//! banner text, the layout and the event log. Each handler mutates only its
//! own part of that state and returns which layers need repainting. The host
//! composes and renders afterwards, on the same thread, so the composer
//! always sees fully-formed state.
//!
//! # Startup
//!
//! [`WatchApp::load`] reads the settings record. [`WatchApp::start`] then
//! runs the first tick from the current clock (without waiting for an event),
//! subscribes the tick service, and takes the initial battery and link
//! readings. The initial link reading never fires haptics.

use chrono::{Datelike, Timelike};
use embedded_graphics::geometry::Size;

use crate::compose::{FaceLayout, FaceOptions, compose_frame};
use crate::draw::Frame;
use crate::event_log::EventLog;
use crate::host::{Haptics, SettingsStore, TickService};
use crate::scheduler::RedrawScheduler;
use crate::settings::{ConfigMessage, Settings};
use crate::status::{HealthEvent, HeartRate, LinkChange, StatusModel, StatusSnapshot};
use crate::time::{BannerText, ClockStyle, TimeSample, format_banner};

// =============================================================================
// Redraw Requests
// =============================================================================

/// Layers a handler marked dirty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Redraw {
    pub banner: bool,
    pub dial: bool,
    pub face: bool,
}

impl Redraw {
    pub const NONE: Self = Self {
        banner: false,
        dial: false,
        face: false,
    };

    pub const ALL: Self = Self {
        banner: true,
        dial: true,
        face: true,
    };

    pub const FACE: Self = Self {
        banner: false,
        dial: false,
        face: true,
    };

    /// Whether anything needs repainting.
    #[inline]
    pub const fn any(self) -> bool { self.banner || self.dial || self.face }

    /// Union of two requests.
    #[must_use]
    pub const fn merge(
        self,
        other: Self,
    ) -> Self {
        Self {
            banner: self.banner || other.banner,
            dial: self.dial || other.dial,
            face: self.face || other.face,
        }
    }
}

// =============================================================================
// Watch App
// =============================================================================

/// Process-wide face state.
#[derive(Debug)]
pub struct WatchApp {
    settings: Settings,
    status: StatusModel,
    scheduler: RedrawScheduler,
    time: TimeSample,
    banner: BannerText,
    layout: FaceLayout,
    log: EventLog,
}

impl WatchApp {
    /// Load persisted settings (or defaults) for a screen of the given size.
    pub fn load(
        store: &impl SettingsStore,
        screen: Size,
    ) -> Self {
        let mut log = EventLog::new();
        let settings = Settings::load_or_default(store, &mut log);
        Self {
            settings,
            status: StatusModel::new(),
            scheduler: RedrawScheduler::new(),
            time: TimeSample::default(),
            banner: BannerText::new(),
            layout: FaceLayout::new(screen),
            log,
        }
    }

    /// Initial tick, tick subscription, then initial battery and link readings.
    pub fn start<T>(
        &mut self,
        now: &T,
        style: ClockStyle,
        ticks: &mut impl TickService,
        battery_percent: i32,
        link_connected: bool,
    ) -> Redraw
    where
        T: Datelike + Timelike,
    {
        self.on_tick(now, style);
        let cadence = self.scheduler.start(&self.settings, ticks);
        log_event!(self.log, "tick per {}", cadence.label());
        self.status.set_battery(battery_percent);
        self.status.prime_link(link_connected);
        Redraw::ALL
    }

    /// Clock tick. Always redraws the face; the banner text is regenerated on
    /// the first tick and at each minute rollover.
    pub fn on_tick<T>(
        &mut self,
        now: &T,
        style: ClockStyle,
    ) -> Redraw
    where
        T: Datelike + Timelike,
    {
        self.time = TimeSample::from_clock(now);
        let decision = self.scheduler.on_tick(self.time);
        if decision.regenerate_banner {
            self.banner = format_banner(now, style);
        }
        Redraw {
            banner: decision.regenerate_banner,
            dial: false,
            face: decision.redraw_face,
        }
    }

    /// Regenerate the banner text immediately, e.g. after the clock style
    /// preference changed mid-minute.
    pub fn refresh_banner<T>(
        &mut self,
        now: &T,
        style: ClockStyle,
    ) -> Redraw
    where
        T: Datelike + Timelike,
    {
        self.banner = format_banner(now, style);
        Redraw {
            banner: true,
            ..Redraw::NONE
        }
    }

    /// Battery level callback.
    pub fn on_battery(
        &mut self,
        percent: i32,
    ) -> Redraw {
        let before = self.status.battery_percent();
        self.status.set_battery(percent);
        if self.status.battery_percent() == before { Redraw::NONE } else { Redraw::FACE }
    }

    /// Link state callback. Pulses once per connected-to-disconnected edge
    /// when the wearer asked for it.
    pub fn on_link(
        &mut self,
        connected: bool,
        haptics: &mut impl Haptics,
    ) -> Redraw {
        match self.status.set_link_connected(connected) {
            LinkChange::Lost => {
                log_event!(self.log, "link lost");
                if self.settings.vibrate_on_disconnect {
                    haptics.double_pulse();
                    log_event!(self.log, "haptic pulse");
                }
                Redraw::FACE
            }
            LinkChange::Restored => {
                log_event!(self.log, "link restored");
                Redraw::FACE
            }
            LinkChange::Unchanged => Redraw::NONE,
        }
    }

    /// Health service callback.
    ///
    /// `peeked` is the current heart-rate value, `None` when the health
    /// service cannot provide one. Only heart-rate and significant updates
    /// are taken.
    pub fn on_health_event(
        &mut self,
        event: HealthEvent,
        peeked: Option<i32>,
    ) -> Redraw {
        if !event.updates_heart_rate() {
            return Redraw::NONE;
        }
        let heart_rate = peeked.map_or(HeartRate::Unknown, HeartRate::from_raw);
        if heart_rate == self.status.heart_rate() {
            return Redraw::NONE;
        }
        self.status.set_heart_rate(heart_rate);
        if let HeartRate::Bpm(bpm) = heart_rate {
            log_event!(self.log, "heart rate {}", bpm);
        }
        Redraw::FACE
    }

    /// Companion-app configuration message. Applies the sparse update,
    /// persists the full record and follows a cadence change.
    pub fn on_config_message(
        &mut self,
        message: &ConfigMessage,
        store: &mut impl SettingsStore,
        ticks: &mut impl TickService,
    ) -> Redraw {
        self.settings.apply(message);
        self.save_settings(store);
        if let Some(cadence) = self.scheduler.apply_settings(&self.settings, ticks) {
            log_event!(self.log, "tick per {}", cadence.label());
        }
        Redraw::ALL
    }

    fn save_settings(
        &mut self,
        store: &mut impl SettingsStore,
    ) {
        match self.settings.save(store) {
            Ok(()) => log_event!(self.log, "settings saved"),
            Err(_) => log_event!(self.log, "settings save failed"),
        }
    }

    /// Compose the current frame.
    pub fn compose(&self) -> Frame {
        compose_frame(
            self.time,
            &self.status.snapshot(),
            &FaceOptions::from(&self.settings),
            &self.layout,
            &self.banner,
        )
    }

    #[inline]
    pub const fn settings(&self) -> &Settings { &self.settings }

    #[inline]
    pub const fn status(&self) -> StatusSnapshot { self.status.snapshot() }

    #[inline]
    pub const fn time(&self) -> TimeSample { self.time }

    #[inline]
    pub fn banner(&self) -> &str { &self.banner }

    #[inline]
    pub const fn scheduler(&self) -> &RedrawScheduler { &self.scheduler }

    #[inline]
    pub const fn layout(&self) -> &FaceLayout { &self.layout }

    #[inline]
    pub const fn log(&self) -> &EventLog { &self.log }
}

// =============================================================================
// Tests
// =============================================================================
