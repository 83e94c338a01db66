//! Renderer-agnostic draw operations.
//!
//! The composer emits [`DrawOp`] values grouped into [`Layer`]s; a host
//! rasterizer (see [`crate::render`]) turns them into pixels. Coordinates
//! inside a layer are local to the layer's top-left corner, and the layer
//! clips everything drawn into it.
//!
//! Ops are plain data. Two frames built from equal inputs compare equal.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use heapless::{String, Vec};

use crate::config::TEXT_CAPACITY;

/// Maximum ops in one layer. The face layer is the busiest: three hands, three
/// bubbles, both disconnect passes, the battery glyph and five heart-rate
/// passes.
pub const MAX_LAYER_OPS: usize = 40;

/// Text carried by a draw op.
pub type OpText = String<TEXT_CAPACITY>;

// =============================================================================
// Op Attributes
// =============================================================================

/// Which corners of a rounded rectangle are rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Corners {
    None,
    All,
    Left,
    Right,
}

/// Fill or outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Fill(Rgb565),
    Stroke(Rgb565, u32),
}

/// Font size class. Hosts map each class to a concrete font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontClass {
    /// Digital banner, bold.
    Banner,
    /// Two-digit bubble labels.
    Bubble,
    /// Status text such as the heart rate.
    Status,
}

/// Horizontal alignment of text inside its box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlign {
    /// Left edge, top of the box.
    Left,
    /// Centered on the box's center.
    Center,
}

// =============================================================================
// Draw Ops
// =============================================================================

/// One drawing instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOp {
    FilledRect {
        rect: Rectangle,
        color: Rgb565,
    },
    RoundedRect {
        rect: Rectangle,
        radius: u32,
        corners: Corners,
        paint: Paint,
    },
    Line {
        start: Point,
        end: Point,
        width: u32,
        color: Rgb565,
        antialiased: bool,
    },
    /// Circle outline.
    Circle {
        center: Point,
        radius: u32,
        width: u32,
        color: Rgb565,
    },
    FilledCircle {
        center: Point,
        radius: u32,
        color: Rgb565,
    },
    Text {
        text: OpText,
        bounds: Rectangle,
        font: FontClass,
        align: TextAlign,
        color: Rgb565,
    },
}

impl DrawOp {
    /// A single pixel.
    pub const fn pixel(
        at: Point,
        color: Rgb565,
    ) -> Self {
        Self::FilledRect {
            rect: Rectangle::new(at, Size::new(1, 1)),
            color,
        }
    }

    /// Text content if this is a text op.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

// =============================================================================
// Layers
// =============================================================================

/// Ops for one host layer, painted in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    /// Position on screen. Ops are relative to its top-left corner.
    pub bounds: Rectangle,
    ops: Vec<DrawOp, MAX_LAYER_OPS>,
}

impl Layer {
    pub const fn new(bounds: Rectangle) -> Self { Self { bounds, ops: Vec::new() } }

    /// Append an op. Ops past capacity are dropped.
    pub fn push(
        &mut self,
        op: DrawOp,
    ) {
        self.ops.push(op).ok();
    }

    /// Layer-local bounds (origin at zero).
    pub const fn local_bounds(&self) -> Rectangle { Rectangle::new(Point::zero(), self.bounds.size) }

    pub fn ops(&self) -> &[DrawOp] { &self.ops }

    /// All text op contents, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> { self.ops.iter().filter_map(DrawOp::text) }

    pub fn len(&self) -> usize { self.ops.len() }

    pub fn is_empty(&self) -> bool { self.ops.is_empty() }
}

/// One composed frame. Layers paint in field order; the face sits on the dial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub banner: Layer,
    pub dial: Layer,
    pub face: Layer,
}

impl Frame {
    /// Layers in paint order.
    pub fn layers(&self) -> [&Layer; 3] { [&self.banner, &self.dial, &self.face] }
}
