//! Rasterizes composed frames onto an `embedded-graphics` draw target.
//!
//! Each layer is drawn through a view of the target that is first clipped to
//! the layer's bounds and then translated to its top-left corner. Layer-local
//! coordinates land at the layer's screen position and anything outside the
//! layer (the long second hand, for one) is dropped. Draw errors are ignored:
//! a frame is repainted from scratch on the next tick anyway.
//!
//! `embedded-graphics` has no antialiasing; antialiased lines are drawn as
//! plain lines.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, CornerRadii, CornerRadiiBuilder, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle,
    RoundedRectangle, StrokeAlignment,
};
use embedded_graphics::text::Text;

use crate::draw::{Corners, DrawOp, Frame, Layer, Paint, TextAlign};
use crate::styles::{char_style, text_style};

/// Draw every layer of a frame in paint order.
pub fn render_frame<D>(
    display: &mut D,
    frame: &Frame,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for layer in frame.layers() {
        render_layer(display, layer);
    }
}

/// Draw one layer, clipped to its bounds.
pub fn render_layer<D>(
    display: &mut D,
    layer: &Layer,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut clipped = display.clipped(&layer.bounds);
    let mut target = clipped.translated(layer.bounds.top_left);
    for op in layer.ops() {
        render_op(&mut target, op);
    }
}

fn render_op<D>(
    display: &mut D,
    op: &DrawOp,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match op {
        DrawOp::FilledRect { rect, color } => {
            rect.into_styled(PrimitiveStyle::with_fill(*color)).draw(display).ok();
        }
        DrawOp::RoundedRect {
            rect,
            radius,
            corners,
            paint,
        } => {
            RoundedRectangle::new(*rect, corner_radii(*corners, *radius))
                .into_styled(paint_style(*paint))
                .draw(display)
                .ok();
        }
        DrawOp::Line {
            start, end, width, color, ..
        } => {
            Line::new(*start, *end)
                .into_styled(PrimitiveStyle::with_stroke(*color, *width))
                .draw(display)
                .ok();
        }
        DrawOp::Circle {
            center,
            radius,
            width,
            color,
        } => {
            Circle::with_center(*center, radius * 2 + 1)
                .into_styled(paint_style(Paint::Stroke(*color, *width)))
                .draw(display)
                .ok();
        }
        DrawOp::FilledCircle { center, radius, color } => {
            Circle::with_center(*center, radius * 2 + 1)
                .into_styled(PrimitiveStyle::with_fill(*color))
                .draw(display)
                .ok();
        }
        DrawOp::Text {
            text,
            bounds,
            font,
            align,
            color,
        } => {
            Text::with_text_style(text, anchor(bounds, *align), char_style(*font, *color), text_style(*align))
                .draw(display)
                .ok();
        }
    }
}

/// Strokes stay inside the shape's bounds.
fn paint_style(paint: Paint) -> PrimitiveStyle<Rgb565> {
    match paint {
        Paint::Fill(color) => PrimitiveStyle::with_fill(color),
        Paint::Stroke(color, width) => PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(width)
            .stroke_alignment(StrokeAlignment::Inside)
            .build(),
    }
}

fn corner_radii(
    corners: Corners,
    radius: u32,
) -> CornerRadii {
    let r = Size::new_equal(radius);
    match corners {
        Corners::None => CornerRadii::new(Size::zero()),
        Corners::All => CornerRadii::new(r),
        Corners::Left => CornerRadiiBuilder::new().left(r).build(),
        Corners::Right => CornerRadiiBuilder::new().right(r).build(),
    }
}

/// Text anchor point inside its box for an alignment.
fn anchor(
    bounds: &Rectangle,
    align: TextAlign,
) -> Point {
    match align {
        TextAlign::Left => bounds.top_left,
        TextAlign::Center => {
            bounds.top_left + Point::new((bounds.size.width / 2) as i32, (bounds.size.height / 2) as i32)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
