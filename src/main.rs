// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // f32->i32 casts for simulated readings
#![allow(clippy::cast_precision_loss)] // elapsed seconds as f32 for signal generation
#![allow(clippy::cast_possible_wrap)] // u32->i32 for packed colors and pixel math
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! Bubble Watch desktop simulator.
//!
//! Hosts the watch face in an `embedded-graphics-simulator` window at the
//! native 144x168 resolution. The local clock drives the tick service, the
//! keyboard stands in for the companion app and the phone link, and a
//! simulated sensor feeds heart-rate samples.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `S` | Toggle second hand and second bubble |
//! | `B` | Toggle number bubbles |
//! | `V` | Toggle vibrate on disconnect |
//! | `I` | Toggle inverted colors |
//! | `C` | Cycle foreground color |
//! | `K` | Cycle background color |
//! | `L` | Toggle phone link (connected / disconnected) |
//! | `H` | Toggle the heart-rate sensor |
//! | `Up` / `Down` | Battery level +/- 5% |
//! | `T` | Toggle 12h / 24h banner |
//! | `Y` | Switch between watch face and debug page |
//!
//! Settings keys are delivered as configuration messages, exactly like the
//! companion app, so they are persisted under `.bubble-watch/`.
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

mod config;
mod host;
mod pages;
mod screens;
mod signals;

use std::thread;
use std::time::Instant;

use bubble_watch_common::colors::{PICKER_COLORS, pack_rgb};
use bubble_watch_common::{ConfigMessage, HealthEvent, MessageKey, Redraw, WatchApp, render_frame};
use bubble_watch_common::time::ClockStyle;
use chrono::Local;
use config::{
    BATTERY_KEY_STEP,
    FRAME_TIME,
    HAPTIC_FLASH,
    HEART_RATE_MAX,
    HEART_RATE_MIN,
    HEART_RATE_PERIOD,
    INITIAL_BATTERY_PERCENT,
    SETTINGS_DIR,
    WINDOW_SCALE,
    WINDOW_TITLE,
};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use host::{FileSettingsStore, SimHaptics, SimTicker};
use pages::Page;
use screens::draw_debug_page;
use signals::heart_rate_sample;

/// Border drawn while a haptic pulse is "vibrating".
const HAPTIC_FLASH_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(Rgb565::RED, 3);

fn main() {
    let screen = Size::new(
        bubble_watch_common::config::SCREEN_WIDTH,
        bubble_watch_common::config::SCREEN_HEIGHT,
    );
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(screen);
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    // ==========================================================================
    // Host Services
    // ==========================================================================

    let mut store = FileSettingsStore::new(SETTINGS_DIR);
    let mut ticks = SimTicker::new();
    let mut haptics = SimHaptics::default();

    // ==========================================================================
    // Startup
    // ==========================================================================

    let mut clock_style = ClockStyle::default();
    let mut app = WatchApp::load(&store, display.size());
    let mut redraw = app.start(&Local::now(), clock_style, &mut ticks, INITIAL_BATTERY_PERCENT, true);

    // Simulated readings (keyboard-controlled)
    let mut battery = INITIAL_BATTERY_PERCENT;
    let mut link_connected = true;
    let mut heart_sensor_on = true;
    let mut last_heart_sample: Option<Instant> = None;
    let started = Instant::now();

    // Page navigation state (Watch is default, Y toggles to Debug)
    let mut current_page = Page::default();
    let mut page_just_switched = false;
    let mut flash_shown = false;

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    let settings = *app.settings();
                    let message = match keycode {
                        Keycode::S => Some(ConfigMessage::new().with_flag(MessageKey::ShowSeconds, !settings.show_seconds)),
                        Keycode::B => Some(ConfigMessage::new().with_flag(MessageKey::ShowBubbles, !settings.show_bubbles)),
                        Keycode::V => Some(
                            ConfigMessage::new().with_flag(MessageKey::VibrateOnDisconnect, !settings.vibrate_on_disconnect),
                        ),
                        Keycode::I => Some(ConfigMessage::new().with_flag(MessageKey::Inverted, !settings.inverted)),
                        Keycode::C => Some(
                            ConfigMessage::new()
                                .with(MessageKey::ForegroundColor, next_picker_color(settings.foreground) as i32),
                        ),
                        Keycode::K => Some(
                            ConfigMessage::new()
                                .with(MessageKey::BackgroundColor, next_picker_color(settings.background) as i32),
                        ),
                        _ => None,
                    };
                    if let Some(message) = message {
                        redraw = redraw.merge(app.on_config_message(&message, &mut store, &mut ticks));
                        continue;
                    }

                    match keycode {
                        Keycode::L => {
                            link_connected = !link_connected;
                            redraw = redraw.merge(app.on_link(link_connected, &mut haptics));
                        }
                        Keycode::H => {
                            heart_sensor_on = !heart_sensor_on;
                            // A switched-off sensor reports zero on the next significant update
                            if !heart_sensor_on {
                                redraw = redraw.merge(app.on_health_event(HealthEvent::SignificantUpdate, Some(0)));
                            }
                            last_heart_sample = None;
                        }
                        Keycode::Up => {
                            battery = (battery + BATTERY_KEY_STEP).min(100);
                            redraw = redraw.merge(app.on_battery(battery));
                        }
                        Keycode::Down => {
                            battery = (battery - BATTERY_KEY_STEP).max(0);
                            redraw = redraw.merge(app.on_battery(battery));
                        }
                        Keycode::T => {
                            clock_style = clock_style.toggled();
                            redraw = redraw.merge(app.refresh_banner(&Local::now(), clock_style));
                        }
                        Keycode::Y => {
                            current_page = current_page.toggle();
                            page_just_switched = true;
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // ======================================================================
        // Tick Service
        // ======================================================================

        let now = Local::now();
        if ticks.poll(&now) {
            redraw = redraw.merge(app.on_tick(&now, clock_style));
        }

        // ======================================================================
        // Simulated Heart Rate
        // ======================================================================

        if heart_sensor_on && last_heart_sample.is_none_or(|at| at.elapsed() >= HEART_RATE_PERIOD) {
            let bpm = heart_rate_sample(started.elapsed().as_secs_f32(), HEART_RATE_MIN, HEART_RATE_MAX);
            redraw = redraw.merge(app.on_health_event(HealthEvent::HeartRateUpdate, Some(bpm)));
            last_heart_sample = Some(Instant::now());
        }

        // ======================================================================
        // Rendering
        // ======================================================================

        let flash_on = haptics.last_pulse().is_some_and(|at| at.elapsed() < HAPTIC_FLASH);
        let flash_changed = flash_on != flash_shown;

        // The face layer has no background of its own, so any dirty layer
        // repaints the whole frame.
        if redraw.any() || page_just_switched || flash_changed {
            match current_page {
                Page::Watch => {
                    render_frame(&mut display, &app.compose());
                    if flash_on {
                        Rectangle::new(Point::zero(), display.size())
                            .into_styled(HAPTIC_FLASH_STYLE)
                            .draw(&mut display)
                            .ok();
                    }
                }
                Page::Debug => draw_debug_page(&mut display, &app, clock_style),
            }
            redraw = Redraw::NONE;
            page_just_switched = false;
            flash_shown = flash_on;
        }

        window.update(&display);

        // Frame rate limiting
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Next entry of the companion app's color picker after `current`.
fn next_picker_color(current: [u8; 3]) -> u32 {
    let hex = pack_rgb(current);
    let next = PICKER_COLORS
        .iter()
        .position(|&c| c == hex)
        .map_or(0, |i| (i + 1) % PICKER_COLORS.len());
    PICKER_COLORS[next]
}
