#![allow(dead_code)] // Complete drawing API, not all methods used by every target
//! Rectangle drawing primitives
//!
//! This module provides the lowest layer of the simulator: a [`Canvas`] that
//! owns every rectangle on screen, addressed by opaque [`ShapeId`] handles.
//! The layers above ([`crate::tower`]) never hold shape references directly;
//! they keep ids and call back into the canvas for every mutation, which keeps
//! the element/controller code free of ownership cycles and lets the whole
//! pipeline run headless in tests.
//!
//! # Movement model
//!
//! Shape moves are *relative*: [`Canvas::move_horizontal`] and
//! [`Canvas::move_vertical`] shift a shape by a delta from wherever it
//! currently is. Callers that want absolute placement must track the
//! last-known position themselves and compute the delta — the cup/lid layer
//! owns that bookkeeping.
//!
//! Every new rectangle starts at the default position (70, 15), 30 px tall and
//! 40 px wide, colored "red", and invisible.

use rustc_hash::FxHashMap;

/// Handle to a shape owned by a [`Canvas`]. Ids are never reused.
pub type ShapeId = u64;

/// X coordinate every new rectangle starts at
pub const DEFAULT_X: i32 = 70;

/// Y coordinate every new rectangle starts at
pub const DEFAULT_Y: i32 = 15;

/// A rectangle on the canvas
///
/// `x`/`y` are the top-left corner in screen pixels; y grows downward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectShape {
    pub x: i32,
    pub y: i32,
    pub height: i32,
    pub width: i32,
    pub color: String,
    pub visible: bool,
}

/// Arena of rectangles, keyed by [`ShapeId`]
///
/// Draw order is ascending id (creation order); shapes created later paint
/// over earlier ones.
#[derive(Debug, Default)]
pub struct Canvas {
    shapes: FxHashMap<ShapeId, RectShape>,
    next_id: ShapeId,
}

impl Canvas {
    pub fn new() -> Self {
        Canvas {
            shapes: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Create a new rectangle with the default geometry and return its handle
    pub fn create_rect(&mut self) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;
        self.shapes.insert(
            id,
            RectShape {
                x: DEFAULT_X,
                y: DEFAULT_Y,
                height: 30,
                width: 40,
                color: String::from("red"),
                visible: false,
            },
        );
        id
    }

    /// Destroy a shape. Unknown ids are ignored.
    pub fn remove(&mut self, id: ShapeId) {
        self.shapes.remove(&id);
    }

    pub fn change_color(&mut self, id: ShapeId, color: &str) {
        if let Some(shape) = self.shapes.get_mut(&id) {
            shape.color = color.to_string();
        }
    }

    pub fn change_size(&mut self, id: ShapeId, height: i32, width: i32) {
        if let Some(shape) = self.shapes.get_mut(&id) {
            shape.height = height;
            shape.width = width;
        }
    }

    /// Shift a shape right by `delta` pixels (negative shifts left)
    pub fn move_horizontal(&mut self, id: ShapeId, delta: i32) {
        if let Some(shape) = self.shapes.get_mut(&id) {
            shape.x = shape.x.saturating_add(delta);
        }
    }

    /// Shift a shape down by `delta` pixels (negative shifts up)
    pub fn move_vertical(&mut self, id: ShapeId, delta: i32) {
        if let Some(shape) = self.shapes.get_mut(&id) {
            shape.y = shape.y.saturating_add(delta);
        }
    }

    pub fn make_visible(&mut self, id: ShapeId) {
        if let Some(shape) = self.shapes.get_mut(&id) {
            shape.visible = true;
        }
    }

    pub fn make_invisible(&mut self, id: ShapeId) {
        if let Some(shape) = self.shapes.get_mut(&id) {
            shape.visible = false;
        }
    }

    /// Look up a shape by id
    pub fn get(&self, id: ShapeId) -> Option<&RectShape> {
        self.shapes.get(&id)
    }

    /// All shapes in draw order (ascending id)
    pub fn shapes(&self) -> Vec<(ShapeId, &RectShape)> {
        let mut all: Vec<(ShapeId, &RectShape)> =
            self.shapes.iter().map(|(id, s)| (*id, s)).collect();
        all.sort_by_key(|(id, _)| *id);
        all
    }

    /// Number of live shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rect_has_default_geometry() {
        let mut canvas = Canvas::new();
        let id = canvas.create_rect();
        let shape = canvas.get(id).unwrap();
        assert_eq!((shape.x, shape.y), (DEFAULT_X, DEFAULT_Y));
        assert_eq!((shape.height, shape.width), (30, 40));
        assert_eq!(shape.color, "red");
        assert!(!shape.visible);
    }

    #[test]
    fn moves_are_relative() {
        let mut canvas = Canvas::new();
        let id = canvas.create_rect();
        canvas.move_horizontal(id, -20);
        canvas.move_horizontal(id, 5);
        canvas.move_vertical(id, 100);
        let shape = canvas.get(id).unwrap();
        assert_eq!(shape.x, DEFAULT_X - 20 + 5);
        assert_eq!(shape.y, DEFAULT_Y + 100);
    }

    #[test]
    fn remove_destroys_shape_and_ids_are_not_reused() {
        let mut canvas = Canvas::new();
        let a = canvas.create_rect();
        canvas.remove(a);
        assert!(canvas.get(a).is_none());
        let b = canvas.create_rect();
        assert_ne!(a, b);
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn mutating_unknown_id_is_a_noop() {
        let mut canvas = Canvas::new();
        canvas.move_horizontal(99, 10);
        canvas.change_color(99, "blue");
        canvas.make_visible(99);
        assert!(canvas.is_empty());
    }

    #[test]
    fn shapes_iterate_in_creation_order() {
        let mut canvas = Canvas::new();
        let first = canvas.create_rect();
        let second = canvas.create_rect();
        let third = canvas.create_rect();
        let order: Vec<ShapeId> = canvas.shapes().iter().map(|(id, _)| *id).collect();
        assert_eq!(order, vec![first, second, third]);
    }
}
