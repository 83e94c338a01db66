//! Frame composer.
//!
//! Maps a time sample, a status snapshot and the face options to the draw
//! ops of one frame. The result depends on nothing else, so composing twice
//! with the same inputs yields the same [`Frame`].
//!
//! # Paint order
//!
//! Later ops paint over earlier ones:
//!
//! 1. Banner and dial panels: background, foreground ring, background inset
//! 2. Quarter-hour ticks on the dial
//! 3. Minute hand, hour hand, then the second hand if seconds are shown
//! 4. Bubbles: hour at the center, minute and second along their hands
//! 5. Disconnect glyph when the link is down
//! 6. Battery glyph when the battery is low
//! 7. Heart-rate label with a background halo
//!
//! Hands and bubbles follow the face bounds. Overlay glyphs sit at fixed
//! pixel offsets.

use core::fmt::Write;

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;

use crate::config::{
    BANNER_CORNER_RADIUS, BANNER_HEIGHT, BATTERY_GLYPH_HEIGHT, BATTERY_GLYPH_WIDTH, BORDER_STEP, BUBBLE_DIGITS,
    BUBBLE_FILL_RADIUS, BUBBLE_RING_RADIUS, BUBBLE_TEXT_BOX, DIAL_CORNER_RADIUS, FACE_INSET, HEART_RATE_BOTTOM_OFFSET,
    HEART_RATE_TEXT_LEN, HEART_RATE_X, HOUR_HAND_WIDTH, LINK_GLYPH_ORIGIN, LINK_GLYPH_SIZE, LINK_HALO_WIDTH,
    MINUTE_BUBBLE_DISTANCE, MINUTE_HAND_WIDTH, SECOND_BUBBLE_DISTANCE, SECOND_HAND_WIDTH, TICK_LENGTH, TICK_WIDTH,
};
use crate::draw::{Corners, DrawOp, FontClass, Frame, Layer, OpText, Paint, TextAlign};
use crate::geometry::{HandLengths, compute_angles, endpoint};
use crate::settings::{Palette, Settings};
use crate::status::StatusSnapshot;
use crate::thresholds::{battery_fill_width, is_low_battery};
use crate::time::TimeSample;

// =============================================================================
// Layout
// =============================================================================

/// Screen positions of the three layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceLayout {
    pub banner: Rectangle,
    pub dial: Rectangle,
    pub face: Rectangle,
}

impl FaceLayout {
    /// Split a screen into banner, dial and the face inside the dial.
    pub const fn new(screen: Size) -> Self {
        let dial_height = screen.height.saturating_sub(BANNER_HEIGHT);
        let inset = FACE_INSET * 2;
        Self {
            banner: Rectangle::new(Point::zero(), Size::new(screen.width, BANNER_HEIGHT)),
            dial: Rectangle::new(Point::new(0, BANNER_HEIGHT as i32), Size::new(screen.width, dial_height)),
            face: Rectangle::new(
                Point::new(FACE_INSET as i32, (BANNER_HEIGHT + FACE_INSET) as i32),
                Size::new(screen.width.saturating_sub(inset), dial_height.saturating_sub(inset)),
            ),
        }
    }
}

/// Display options the composer reads, resolved from [`Settings`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceOptions {
    pub show_seconds: bool,
    pub show_bubbles: bool,
    pub palette: Palette,
}

impl From<&Settings> for FaceOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            show_seconds: settings.show_seconds,
            show_bubbles: settings.show_bubbles,
            palette: settings.palette(),
        }
    }
}

// =============================================================================
// Frame
// =============================================================================

/// Compose one frame.
///
/// `banner` is the digital banner text as last regenerated by the scheduler.
pub fn compose_frame(
    time: TimeSample,
    status: &StatusSnapshot,
    options: &FaceOptions,
    layout: &FaceLayout,
    banner: &str,
) -> Frame {
    Frame {
        banner: compose_banner(layout.banner, options.palette, banner),
        dial: compose_dial(layout.dial, options.palette),
        face: compose_face(layout.face, time, status, options),
    }
}

/// Digital banner panel and its centered text.
pub fn compose_banner(
    bounds: Rectangle,
    palette: Palette,
    text: &str,
) -> Layer {
    let mut layer = Layer::new(bounds);
    push_panel(&mut layer, BANNER_CORNER_RADIUS, palette);
    layer.push(DrawOp::Text {
        text: clipped_text(text),
        bounds: layer.local_bounds(),
        font: FontClass::Banner,
        align: TextAlign::Center,
        color: palette.foreground,
    });
    layer
}

/// Analog dial panel and its quarter-hour ticks.
pub fn compose_dial(
    bounds: Rectangle,
    palette: Palette,
) -> Layer {
    let mut layer = Layer::new(bounds);
    push_panel(&mut layer, DIAL_CORNER_RADIUS, palette);

    let w = bounds.size.width as i32;
    let h = bounds.size.height as i32;
    let ticks = [
        (Point::new(w / 2, 0), Point::new(w / 2, TICK_LENGTH)),
        (Point::new(w / 2, h - TICK_LENGTH), Point::new(w / 2, h)),
        (Point::new(0, h / 2), Point::new(TICK_LENGTH, h / 2)),
        (Point::new(w - TICK_LENGTH, h / 2), Point::new(w, h / 2)),
    ];
    for (start, end) in ticks {
        layer.push(DrawOp::Line {
            start,
            end,
            width: TICK_WIDTH,
            color: palette.foreground,
            antialiased: false,
        });
    }
    layer
}

/// Hands, bubbles and status overlays.
pub fn compose_face(
    bounds: Rectangle,
    time: TimeSample,
    status: &StatusSnapshot,
    options: &FaceOptions,
) -> Layer {
    let mut layer = Layer::new(bounds);
    let palette = options.palette;
    let size = bounds.size;
    let center = Point::new((size.width / 2) as i32, (size.height / 2) as i32);
    let angles = compute_angles(time);
    let lengths = HandLengths::for_face(size);

    // Hands
    let hand = |angle, length, width| DrawOp::Line {
        start: center,
        end: endpoint(angle, length, center),
        width,
        color: palette.foreground,
        antialiased: true,
    };
    layer.push(hand(angles.minute, lengths.minute, MINUTE_HAND_WIDTH));
    layer.push(hand(angles.hour, lengths.hour, HOUR_HAND_WIDTH));
    if options.show_seconds {
        layer.push(hand(angles.second, lengths.second, SECOND_HAND_WIDTH));
    }

    // Bubbles
    if options.show_bubbles {
        push_bubble(&mut layer, center, time.hour(), palette);
        push_bubble(&mut layer, endpoint(angles.minute, MINUTE_BUBBLE_DISTANCE, center), time.minute(), palette);
        if options.show_seconds {
            push_bubble(&mut layer, endpoint(angles.second, SECOND_BUBBLE_DISTANCE, center), time.second(), palette);
        }
    }

    // Status overlays
    if !status.link_connected {
        let glyph = Rectangle::new(
            Point::new(LINK_GLYPH_ORIGIN.0, LINK_GLYPH_ORIGIN.1),
            Size::new(LINK_GLYPH_SIZE, LINK_GLYPH_SIZE),
        );
        push_link_glyph(&mut layer, glyph, palette.background, LINK_HALO_WIDTH);
        push_link_glyph(&mut layer, glyph, palette.foreground, 1);
    }

    if is_low_battery(status.battery_percent) {
        let glyph = Rectangle::new(
            Point::new(size.width as i32 - BATTERY_GLYPH_WIDTH as i32, 0),
            Size::new(BATTERY_GLYPH_WIDTH, BATTERY_GLYPH_HEIGHT),
        );
        push_battery_glyph(&mut layer, glyph, status.battery_percent, palette);
    }

    if let Some(bpm) = status.heart_rate.filter(|&bpm| bpm > 0) {
        push_heart_rate(&mut layer, size, bpm, palette);
    }

    layer
}

// =============================================================================
// Building Blocks
// =============================================================================

/// Background fill, then the foreground ring and background inset.
fn push_panel(
    layer: &mut Layer,
    radius: u32,
    palette: Palette,
) {
    let outer = layer.local_bounds();
    let ring = inset(outer, BORDER_STEP);
    let inner = inset(ring, BORDER_STEP);
    layer.push(DrawOp::FilledRect {
        rect: outer,
        color: palette.background,
    });
    layer.push(DrawOp::RoundedRect {
        rect: ring,
        radius,
        corners: Corners::All,
        paint: Paint::Fill(palette.foreground),
    });
    layer.push(DrawOp::RoundedRect {
        rect: inner,
        radius,
        corners: Corners::All,
        paint: Paint::Fill(palette.background),
    });
}

/// Ring, background fill and two-digit label.
fn push_bubble(
    layer: &mut Layer,
    center: Point,
    value: u32,
    palette: Palette,
) {
    layer.push(DrawOp::Circle {
        center,
        radius: BUBBLE_RING_RADIUS,
        width: 1,
        color: palette.foreground,
    });
    layer.push(DrawOp::FilledCircle {
        center,
        radius: BUBBLE_FILL_RADIUS,
        color: palette.background,
    });
    let half = (BUBBLE_TEXT_BOX / 2) as i32;
    layer.push(DrawOp::Text {
        text: bubble_text(value),
        bounds: Rectangle::new(center - Point::new(half, half), Size::new(BUBBLE_TEXT_BOX, BUBBLE_TEXT_BOX)),
        font: FontClass::Bubble,
        align: TextAlign::Center,
        color: palette.foreground,
    });
}

/// Broken-link rune with an exclamation mark to its left.
fn push_link_glyph(
    layer: &mut Layer,
    bounds: Rectangle,
    color: Rgb565,
    width: u32,
) {
    let Point { x, y } = bounds.top_left;
    let w = bounds.size.width as i32;
    let h = bounds.size.height as i32;
    let strokes = [
        ((x + w / 2, y), (x + w / 2, y + h)),
        ((x + w / 2, y), (x + w / 4 * 3, y + h / 4)),
        ((x + w / 4 * 3, y + h / 4), (x + w / 4, y + h / 4 * 3)),
        ((x + w / 2, y + h), (x + w / 4 * 3, y + h / 4 * 3)),
        ((x + w / 4 * 3, y + h / 4 * 3), (x + w / 4, y + h / 4)),
        // exclamation mark
        ((x, y + 1), (x, y + h - 3)),
    ];
    for ((x0, y0), (x1, y1)) in strokes {
        layer.push(DrawOp::Line {
            start: Point::new(x0, y0),
            end: Point::new(x1, y1),
            width,
            color,
            antialiased: false,
        });
    }
    layer.push(DrawOp::pixel(Point::new(x, y + h - 1), color));
}

/// Battery outline with a nub on the left and a fill bar growing from the
/// right edge.
fn push_battery_glyph(
    layer: &mut Layer,
    bounds: Rectangle,
    percent: u8,
    palette: Palette,
) {
    let Point { x, y } = bounds.top_left;
    let w = bounds.size.width;
    let h = bounds.size.height;
    let rect = |dx: u32, dy: u32, rw: u32, rh: u32| {
        Rectangle::new(Point::new(x + dx as i32, y + dy as i32), Size::new(rw, rh))
    };

    // Clear the area behind body and nub
    layer.push(DrawOp::FilledRect {
        rect: rect(2, 0, w - 2, h),
        color: palette.background,
    });
    layer.push(DrawOp::FilledRect {
        rect: rect(0, h / 3, 3, h / 3 * 2),
        color: palette.background,
    });

    // Nub
    layer.push(DrawOp::FilledRect {
        rect: rect(1, 1 + (h - 2) / 3, 2, (h - 2) / 3 * 2),
        color: palette.foreground,
    });

    // Body
    layer.push(DrawOp::RoundedRect {
        rect: rect(3, 1, w - 3, h - 2),
        radius: 0,
        corners: Corners::None,
        paint: Paint::Stroke(palette.foreground, 1),
    });

    // Fill bar
    let fill = battery_fill_width(percent).min(w - 3);
    if fill > 0 {
        layer.push(DrawOp::FilledRect {
            rect: rect(w - fill, 1, fill, h - 2),
            color: palette.foreground,
        });
    }
}

/// `BPM: n` with a one-pixel background halo on the diagonals.
fn push_heart_rate(
    layer: &mut Layer,
    size: Size,
    bpm: u16,
    palette: Palette,
) {
    let mut label: heapless::String<HEART_RATE_TEXT_LEN> = heapless::String::new();
    write!(label, "BPM: {bpm}").ok();

    let origin = Point::new(HEART_RATE_X, size.height as i32 - HEART_RATE_BOTTOM_OFFSET);
    let passes = [
        (Point::new(-1, -1), palette.background),
        (Point::new(1, -1), palette.background),
        (Point::new(-1, 1), palette.background),
        (Point::new(1, 1), palette.background),
        (Point::zero(), palette.foreground),
    ];
    for (offset, color) in passes {
        layer.push(DrawOp::Text {
            text: clipped_text(&label),
            bounds: Rectangle::new(origin + offset, size),
            font: FontClass::Status,
            align: TextAlign::Left,
            color,
        });
    }
}

// =============================================================================
// Helpers
// =============================================================================

const fn inset(
    rect: Rectangle,
    by: u32,
) -> Rectangle {
    Rectangle::new(
        Point::new(rect.top_left.x + by as i32, rect.top_left.y + by as i32),
        Size::new(rect.size.width.saturating_sub(by * 2), rect.size.height.saturating_sub(by * 2)),
    )
}

/// Zero-padded label, kept to two characters.
fn bubble_text(value: u32) -> OpText {
    let mut text = OpText::new();
    write!(text, "{value:02}").ok();
    text.truncate(BUBBLE_DIGITS);
    text
}

/// Copy text into an op buffer, dropping characters that do not fit.
fn clipped_text(text: &str) -> OpText {
    let mut out = OpText::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, SECOND_HAND_LENGTH};
    use crate::draw::MAX_LAYER_OPS;
    use crate::geometry::QUARTER;

    const BANNER: &str = "03:07  07.03.2026";

    fn layout() -> FaceLayout { FaceLayout::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

    fn options() -> FaceOptions { FaceOptions::from(&Settings::default()) }

    fn status() -> StatusSnapshot { StatusSnapshot::default() }

    fn at(
        h: u32,
        m: u32,
        s: u32,
    ) -> TimeSample {
        TimeSample::new(h, m, s).unwrap()
    }

    fn lines_of_width(
        layer: &Layer,
        width: u32,
    ) -> usize {
        layer
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { width: w, .. } if *w == width))
            .count()
    }

    fn bubble_texts(layer: &Layer) -> std::vec::Vec<&str> {
        layer
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    text,
                    font: FontClass::Bubble,
                    ..
                } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn has_battery_glyph(layer: &Layer) -> bool {
        layer.ops().iter().any(|op| matches!(op, DrawOp::RoundedRect { paint: Paint::Stroke(..), .. }))
    }

    #[test]
    fn test_busiest_face_fits_layer_capacity() {
        let all_overlays = StatusSnapshot {
            battery_percent: 10,
            link_connected: false,
            heart_rate: Some(72),
        };
        let face = compose_face(layout().face, at(3, 7, 45), &all_overlays, &options());
        // 3 hands, 3 bubbles x 3, 2 link passes x 7, battery 5, heart rate 5
        assert_eq!(face.len(), 36);
        assert!(face.len() < MAX_LAYER_OPS, "no op was dropped");
    }

    #[test]
    fn test_layout_default_screen() {
        let layout = layout();
        assert_eq!(layout.banner, Rectangle::new(Point::zero(), Size::new(144, 25)));
        assert_eq!(layout.dial, Rectangle::new(Point::new(0, 25), Size::new(144, 143)));
        assert_eq!(layout.face, Rectangle::new(Point::new(8, 33), Size::new(128, 127)));
    }

    #[test]
    fn test_layout_tiny_screen_saturates() {
        let layout = FaceLayout::new(Size::new(10, 20));
        assert_eq!(layout.dial.size.height, 0);
        assert_eq!(layout.face.size, Size::zero());
    }

    #[test]
    fn test_panels_are_nested() {
        let frame = compose_frame(at(3, 7, 45), &status(), &options(), &layout(), BANNER);
        let ops = frame.banner.ops();
        assert_eq!(
            ops[0],
            DrawOp::FilledRect {
                rect: Rectangle::new(Point::zero(), Size::new(144, 25)),
                color: BLACK
            }
        );
        assert_eq!(
            ops[1],
            DrawOp::RoundedRect {
                rect: Rectangle::new(Point::new(2, 2), Size::new(140, 21)),
                radius: BANNER_CORNER_RADIUS,
                corners: Corners::All,
                paint: Paint::Fill(WHITE),
            }
        );
        assert_eq!(
            ops[2],
            DrawOp::RoundedRect {
                rect: Rectangle::new(Point::new(4, 4), Size::new(136, 17)),
                radius: BANNER_CORNER_RADIUS,
                corners: Corners::All,
                paint: Paint::Fill(BLACK),
            }
        );
        assert_eq!(frame.banner.texts().collect::<std::vec::Vec<_>>(), [BANNER]);

        let dial = frame.dial.ops();
        assert!(matches!(dial[1], DrawOp::RoundedRect { radius: DIAL_CORNER_RADIUS, .. }));
    }

    #[test]
    fn test_dial_ticks_at_quarters() {
        let dial = compose_dial(layout().dial, Palette::default());
        assert_eq!(lines_of_width(&dial, TICK_WIDTH), 4);
        let DrawOp::Line { start, end, antialiased, .. } = &dial.ops()[3] else {
            panic!("expected the 12 o'clock tick after the panel");
        };
        assert_eq!((*start, *end), (Point::new(72, 0), Point::new(72, 6)));
        assert!(!antialiased);
        let DrawOp::Line { start, end, .. } = &dial.ops()[6] else {
            panic!("expected the 3 o'clock tick last");
        };
        assert_eq!((*start, *end), (Point::new(138, 71), Point::new(144, 71)));
    }

    #[test]
    fn test_hands_in_stacking_order() {
        let face = compose_face(layout().face, at(3, 7, 45), &status(), &options());
        let widths: std::vec::Vec<u32> = face
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { width, antialiased: true, .. } => Some(*width),
                _ => None,
            })
            .collect();
        assert_eq!(widths, [MINUTE_HAND_WIDTH, HOUR_HAND_WIDTH, SECOND_HAND_WIDTH]);
    }

    #[test]
    fn test_scenario_03_07_45() {
        let time = at(3, 7, 45);
        assert_eq!(compute_angles(time).hour, QUARTER, "03:07 shares the 03:00 hour step");

        let face = compose_face(layout().face, time, &status(), &options());
        assert_eq!(bubble_texts(&face), ["03", "07", "45"]);

        let center = Point::new(64, 63);
        let DrawOp::Line { start, end, .. } = &face.ops()[1] else {
            panic!("hour hand is the second op");
        };
        assert_eq!(*start, center);
        assert_eq!(*end, Point::new(64 + 31, 63), "hour hand points at 3 o'clock");

        // The hour bubble sits at the center.
        let DrawOp::Circle { center: c, .. } = &face.ops()[3] else {
            panic!("hour bubble ring follows the hands");
        };
        assert_eq!(*c, center);
    }

    #[test]
    fn test_second_hand_length_is_fixed() {
        let face = compose_face(layout().face, at(0, 0, 0), &status(), &options());
        let DrawOp::Line { end, .. } = &face.ops()[2] else {
            panic!("second hand is the third op");
        };
        assert_eq!(*end, Point::new(64, 63 - SECOND_HAND_LENGTH));
    }

    #[test]
    fn test_seconds_hidden_drops_second_hand_and_bubble() {
        let mut options = options();
        options.show_seconds = false;
        let mut status = status();
        status.link_connected = false;
        status.battery_percent = 5;
        status.heart_rate = Some(70);
        for second in [0, 15, 45, 59] {
            let face = compose_face(layout().face, at(11, 59, second), &status, &options);
            assert_eq!(lines_of_width(&face, SECOND_HAND_WIDTH), 0);
            assert_eq!(bubble_texts(&face), ["11", "59"]);
        }
    }

    #[test]
    fn test_bubbles_hidden() {
        let mut options = options();
        options.show_bubbles = false;
        let face = compose_face(layout().face, at(3, 7, 45), &status(), &options);
        assert!(bubble_texts(&face).is_empty());
        assert_eq!(face.len(), 3, "only the hands remain");
    }

    #[test]
    fn test_bubble_text_zero_padded() {
        assert_eq!(bubble_text(0).as_str(), "00");
        assert_eq!(bubble_text(9).as_str(), "09");
        assert_eq!(bubble_text(23).as_str(), "23");
        assert_eq!(bubble_text(123).as_str(), "12", "clamped to two characters");
    }

    #[test]
    fn test_bubble_positions_follow_hands() {
        let face = compose_face(layout().face, at(0, 15, 30), &status(), &options());
        let centers: std::vec::Vec<Point> = face
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect();
        assert_eq!(
            centers,
            [
                Point::new(64, 63),
                Point::new(64 + MINUTE_BUBBLE_DISTANCE, 63),
                Point::new(64, 63 + SECOND_BUBBLE_DISTANCE),
            ]
        );
    }

    #[test]
    fn test_link_glyph_halo_then_fill() {
        let mut status = status();
        let connected = compose_face(layout().face, at(1, 2, 3), &status, &options());
        status.link_connected = false;
        let disconnected = compose_face(layout().face, at(1, 2, 3), &status, &options());
        assert_eq!(disconnected.len(), connected.len() + 14);

        let glyph = &disconnected.ops()[connected.len()..];
        assert!(
            glyph[..6]
                .iter()
                .all(|op| matches!(op, DrawOp::Line { width, color, .. } if *width == LINK_HALO_WIDTH && *color == BLACK))
        );
        assert_eq!(glyph[6], DrawOp::pixel(Point::new(2, 13), BLACK));
        assert!(
            glyph[7..13]
                .iter()
                .all(|op| matches!(op, DrawOp::Line { width: 1, color, .. } if *color == WHITE))
        );
        assert_eq!(glyph[13], DrawOp::pixel(Point::new(2, 13), WHITE));
    }

    #[test]
    fn test_battery_glyph_threshold() {
        let mut status = status();
        status.battery_percent = 39;
        assert!(has_battery_glyph(&compose_face(layout().face, at(1, 2, 3), &status, &options())));
        status.battery_percent = 40;
        assert!(!has_battery_glyph(&compose_face(layout().face, at(1, 2, 3), &status, &options())));
    }

    #[test]
    fn test_battery_fill_bar_quantized() {
        let face_bounds = layout().face;
        let mut status = status();
        status.battery_percent = 39;
        let face = compose_face(face_bounds, at(1, 2, 3), &status, &options());
        let Some(DrawOp::FilledRect { rect, color }) = face.ops().last() else {
            panic!("fill bar is the last op");
        };
        assert_eq!(*color, WHITE);
        assert_eq!(*rect, Rectangle::new(Point::new(128 - 6, 1), Size::new(6, 8)));

        status.battery_percent = 5;
        let face = compose_face(face_bounds, at(1, 2, 3), &status, &options());
        assert!(
            matches!(face.ops().last(), Some(DrawOp::RoundedRect { .. })),
            "empty bar is not drawn"
        );
    }

    #[test]
    fn test_heart_rate_halo() {
        let mut status = status();
        status.heart_rate = Some(72);
        let face = compose_face(layout().face, at(1, 2, 3), &status, &options());
        let labels: std::vec::Vec<(Point, Rgb565)> = face
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    text,
                    bounds,
                    font: FontClass::Status,
                    color,
                    ..
                } => {
                    assert_eq!(text.as_str(), "BPM: 72");
                    Some((bounds.top_left, *color))
                }
                _ => None,
            })
            .collect();
        let y = 127 - HEART_RATE_BOTTOM_OFFSET;
        assert_eq!(
            labels,
            [
                (Point::new(1, y - 1), BLACK),
                (Point::new(3, y - 1), BLACK),
                (Point::new(1, y + 1), BLACK),
                (Point::new(3, y + 1), BLACK),
                (Point::new(2, y), WHITE),
            ]
        );
    }

    #[test]
    fn test_heart_rate_absent_or_zero() {
        let mut status = status();
        let base = compose_face(layout().face, at(1, 2, 3), &status, &options()).len();
        status.heart_rate = Some(0);
        assert_eq!(compose_face(layout().face, at(1, 2, 3), &status, &options()).len(), base);
    }

    #[test]
    fn test_inverted_palette_flows_through() {
        let settings = Settings {
            inverted: true,
            ..Settings::default()
        };
        let frame = compose_frame(at(3, 7, 45), &status(), &FaceOptions::from(&settings), &layout(), BANNER);
        assert!(matches!(frame.banner.ops()[0], DrawOp::FilledRect { color, .. } if color == WHITE));
        assert!(matches!(frame.face.ops()[0], DrawOp::Line { color, .. } if color == BLACK));
    }

    #[test]
    fn test_compose_is_idempotent() {
        let mut status = status();
        status.link_connected = false;
        status.battery_percent = 12;
        status.heart_rate = Some(101);
        let a = compose_frame(at(23, 59, 59), &status, &options(), &layout(), BANNER);
        let b = compose_frame(at(23, 59, 59), &status, &options(), &layout(), BANNER);
        assert_eq!(a, b);
    }

    #[test]
    fn test_overlays_ignore_face_size() {
        let mut status = status();
        status.link_connected = false;
        let small = Rectangle::new(Point::new(8, 33), Size::new(60, 60));
        let face = compose_face(small, at(1, 2, 3), &status, &options());
        assert!(face.ops().contains(&DrawOp::pixel(Point::new(2, 13), WHITE)));
    }
}
