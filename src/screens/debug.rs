//! Debug page rendering.
//!
//! Shows the active settings, tick cadence, status readings and the most
//! recent events. Press `Y` to toggle from the watch face.
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────┐
//! │ DEBUG           24H    │
//! ├────────────────────────┤
//! │ sec:on  bub:on         │
//! │ vib:off inv:off        │
//! │ fg:FFFFFF bg:000000    │
//! │ tick: second           │
//! │ batt: 80%  link: up    │
//! │ hr: 72                 │
//! ├────────────────────────┤
//! │ > settings loaded      │
//! │ > tick per second      │
//! │ > _                    │
//! └────────────────────────┘
//! ```

use core::fmt::Write;

use bubble_watch_common::WatchApp;
use bubble_watch_common::config::SCREEN_WIDTH;
use bubble_watch_common::time::ClockStyle;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use heapless::String;

// =============================================================================
// Layout Constants
// =============================================================================

/// Header Y position (text baseline)
const HEADER_Y: i32 = 9;

/// Y position of divider below header
const HEADER_DIVIDER_Y: i32 = 12;

/// Y position of the first state line
const STATE_Y: i32 = 22;

/// Y position of divider above log
const LOG_DIVIDER_Y: i32 = 76;

/// Y position where log terminal starts
const LOG_Y: i32 = 86;

/// Height of each text line
const LINE_HEIGHT: i32 = 10;

/// Left margin
const COL_X: i32 = 3;

/// X position of the clock style tag in the header
const STYLE_TAG_X: i32 = 110;

// =============================================================================
// Colors
// =============================================================================

const DEBUG_BG: Rgb565 = Rgb565::BLACK;
const HEADER_COLOR: Rgb565 = Rgb565::GREEN;
const VALUE_COLOR: Rgb565 = Rgb565::WHITE;
const LOG_PROMPT_COLOR: Rgb565 = Rgb565::GREEN;
const LOG_TEXT_COLOR: Rgb565 = Rgb565::new(31, 41, 0);
const DIVIDER_COLOR: Rgb565 = Rgb565::new(16, 32, 16);

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the debug page.
pub fn draw_debug_page<D>(
    display: &mut D,
    app: &WatchApp,
    style: ClockStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(DEBUG_BG).ok();

    draw_header(display, style);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_state(display, app);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, app);
}

fn draw_header<D>(
    display: &mut D,
    style: ClockStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let header_style = MonoTextStyle::new(&FONT_6X10, HEADER_COLOR);
    let info_style = MonoTextStyle::new(&FONT_6X10, VALUE_COLOR);

    Text::new("DEBUG", Point::new(COL_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let tag = match style {
        ClockStyle::TwentyFourHour => "24H",
        ClockStyle::TwelveHour => "12H",
    };
    Text::new(tag, Point::new(STYLE_TAG_X, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

/// One line per state group, top to bottom.
fn draw_state<D>(
    display: &mut D,
    app: &WatchApp,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let value_style = MonoTextStyle::new(&FONT_6X10, VALUE_COLOR);
    let settings = app.settings();
    let status = app.status();
    let mut y = STATE_Y;

    let mut s: String<24> = String::new();
    let _ = write!(s, "sec:{}  bub:{}", on_off(settings.show_seconds), on_off(settings.show_bubbles));
    Text::new(&s, Point::new(COL_X, y), value_style).draw(display).ok();
    y += LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "vib:{} inv:{}", on_off(settings.vibrate_on_disconnect), on_off(settings.inverted));
    Text::new(&s, Point::new(COL_X, y), value_style).draw(display).ok();
    y += LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let _ = write!(s, "fg:{:06X} bg:{:06X}", settings.foreground_hex(), settings.background_hex());
    Text::new(&s, Point::new(COL_X, y), value_style).draw(display).ok();
    y += LINE_HEIGHT;

    let mut s: String<24> = String::new();
    match app.scheduler().cadence() {
        Some(cadence) => {
            let _ = write!(s, "tick: {}", cadence.label());
        }
        None => {
            let _ = write!(s, "tick: none");
        }
    }
    Text::new(&s, Point::new(COL_X, y), value_style).draw(display).ok();
    y += LINE_HEIGHT;

    let mut s: String<24> = String::new();
    let link = if status.link_connected { "up" } else { "down" };
    let _ = write!(s, "batt: {}%  link: {link}", status.battery_percent);
    Text::new(&s, Point::new(COL_X, y), value_style).draw(display).ok();
    y += LINE_HEIGHT;

    let mut s: String<24> = String::new();
    match status.heart_rate {
        Some(bpm) => {
            let _ = write!(s, "hr: {bpm}");
        }
        None => {
            let _ = write!(s, "hr: --");
        }
    }
    Text::new(&s, Point::new(COL_X, y), value_style).draw(display).ok();
}

/// Draw the event log with terminal-style prompts.
fn draw_log_terminal<D>(
    display: &mut D,
    app: &WatchApp,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let prompt_style = MonoTextStyle::new(&FONT_6X10, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(&FONT_6X10, LOG_TEXT_COLOR);

    let mut y = LOG_Y;
    for line in app.log().iter() {
        Text::new(">", Point::new(COL_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL_X + 8, y), text_style)
            .draw(display)
            .ok();
        y += LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line<D>(
    display: &mut D,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(1, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}

const fn on_off(flag: bool) -> &'static str { if flag { "on" } else { "off" } }
