#![allow(dead_code)] // Complete element API, not all accessors used by every target
//! Stack elements: cups and lids
//!
//! A [`Cup`] is drawn as three rectangles (two walls and a base); a [`Lid`] is
//! a single flat rectangle. Both kinds anchor at their *bottom-center*: every
//! `set_position` call takes the x of the element's horizontal center and the
//! y of its visual bottom, then recomputes all constituent shapes from scratch
//! so repeated moves never accumulate drift.
//!
//! Geometry is deterministic in the identity:
//! - cup height: `2^(id-1)` cm (id 1 → 1 cm, id 2 → 2 cm, id 3 → 4 cm, ...)
//! - cup width: `15 + id*3` px
//! - lid height: always 1 cm; lid width defaults to 30 px and is resized to
//!   match the paired cup when placed
//! - color: the 7-entry [`PALETTE`] indexed at `(id-1) % 7`, shared by cups
//!   and lids so a lid matches its cup's color
//!
//! Pairing between a cup and a lid is stored as the partner's identity on
//! both sides and updated through [`pair`]/[`unpair`], which take both halves
//! mutably and therefore can never leave the relation one-directional.

use crate::canvas::{Canvas, ShapeId, DEFAULT_X, DEFAULT_Y};

/// Pixels per centimeter of stacked height
pub const PIXELS_PER_CM: i32 = 10;

/// Thickness of a cup wall in pixels
const WALL_THICKNESS: i32 = 3;

/// Height of a cup's base in centimeters
const BASE_HEIGHT_CM: i32 = 1;

/// Width of a lid before it is sized to a cup
const LID_DEFAULT_WIDTH: i32 = 30;

/// Fixed cyclic color palette, indexed by identity
pub const PALETTE: [&str; 7] = [
    "blue", "red", "green", "yellow", "magenta", "cyan", "orange",
];

/// Color for an identity: `PALETTE[(id-1) % 7]`
pub fn color_for_id(id: u32) -> &'static str {
    PALETTE[(id.saturating_sub(1) % PALETTE.len() as u32) as usize]
}

/// Height in centimeters for a cup identity: `2^(id-1)`.
///
/// Identities this layer cannot represent are clamped instead of wrapping:
/// id 0 behaves like id 1, and any id of 32 or more saturates to `i32::MAX`.
pub fn height_for_id(id: u32) -> i32 {
    match id.saturating_sub(1) {
        exp @ 0..=30 => 1 << exp,
        _ => i32::MAX,
    }
}

/// Width in pixels for a cup identity: `15 + 3*id`, saturating
fn width_for_id(id: u32) -> i32 {
    (15 + id as i64 * 3).min(i32::MAX as i64) as i32
}

/// Wall height in pixels for a cup height, saturating
fn wall_height_px(height_cm: i32) -> i32 {
    height_cm
        .saturating_sub(BASE_HEIGHT_CM)
        .max(0)
        .saturating_mul(PIXELS_PER_CM)
}

/// A cup, drawn as left wall + right wall + base
#[derive(Debug)]
pub struct Cup {
    id: u32,
    height_cm: i32,
    color: &'static str,
    x: i32,
    y: i32,
    visible: bool,
    paired_lid: Option<u32>,
    left_wall: ShapeId,
    right_wall: ShapeId,
    base: ShapeId,
    // Last-known top-left of each sub-shape; canvas moves are relative
    left_wall_pos: (i32, i32),
    right_wall_pos: (i32, i32),
    base_pos: (i32, i32),
}

impl Cup {
    /// Create a cup with derived height, width, and color.
    ///
    /// The cup starts invisible, unpaired, and at an undefined position; the
    /// identity must be positive and tower-unique, which the controller
    /// guarantees before calling.
    pub fn new(id: u32, canvas: &mut Canvas) -> Self {
        let height_cm = height_for_id(id);
        let color = color_for_id(id);

        let width = width_for_id(id);
        let wall_height = wall_height_px(height_cm);
        let base_height = BASE_HEIGHT_CM * PIXELS_PER_CM;

        let left_wall = canvas.create_rect();
        canvas.change_color(left_wall, color);
        canvas.change_size(left_wall, wall_height, WALL_THICKNESS);

        let right_wall = canvas.create_rect();
        canvas.change_color(right_wall, color);
        canvas.change_size(right_wall, wall_height, WALL_THICKNESS);

        let base = canvas.create_rect();
        canvas.change_color(base, color);
        canvas.change_size(base, base_height, width);

        Cup {
            id,
            height_cm,
            color,
            x: 0,
            y: 0,
            visible: false,
            paired_lid: None,
            left_wall,
            right_wall,
            base,
            left_wall_pos: (DEFAULT_X, DEFAULT_Y),
            right_wall_pos: (DEFAULT_X, DEFAULT_Y),
            base_pos: (DEFAULT_X, DEFAULT_Y),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn height_cm(&self) -> i32 {
        self.height_cm
    }

    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Width of the cup in pixels
    pub fn width_px(&self) -> i32 {
        width_for_id(self.id)
    }

    /// Total rendered height in pixels, saturating for giant cups
    pub fn total_height_px(&self) -> i32 {
        self.height_cm.saturating_mul(PIXELS_PER_CM)
    }

    /// Anchor of the last `set_position` call: (center x, bottom y)
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Identity of the paired lid, if any
    pub fn paired_lid(&self) -> Option<u32> {
        self.paired_lid
    }

    pub fn is_lidded(&self) -> bool {
        self.paired_lid.is_some()
    }

    /// Place the cup with its bottom at `y`, horizontally centered on `x`.
    ///
    /// All three rectangles are recomputed from the anchor and moved by the
    /// delta from their tracked positions. The cup is hidden before the move
    /// and redrawn after, but only if it is currently visible.
    pub fn set_position(&mut self, canvas: &mut Canvas, x: i32, y: i32) {
        self.erase(canvas);

        self.x = x;
        self.y = y;

        let width = self.width_px();
        let wall_height = wall_height_px(self.height_cm);
        let base_height = BASE_HEIGHT_CM * PIXELS_PER_CM;

        // Base: bottom edge at y, spanning the full width
        let base_x = x - width / 2;
        let base_y = y.saturating_sub(base_height);

        // Walls sit on top of the base, flush with its outer edges
        let left_wall_x = base_x;
        let left_wall_y = y.saturating_sub(wall_height).saturating_sub(base_height);
        let right_wall_x = base_x + width - WALL_THICKNESS;
        let right_wall_y = left_wall_y;

        canvas.move_horizontal(self.base, base_x.saturating_sub(self.base_pos.0));
        canvas.move_vertical(self.base, base_y.saturating_sub(self.base_pos.1));
        canvas.move_horizontal(self.left_wall, left_wall_x.saturating_sub(self.left_wall_pos.0));
        canvas.move_vertical(self.left_wall, left_wall_y.saturating_sub(self.left_wall_pos.1));
        canvas.move_horizontal(
            self.right_wall,
            right_wall_x.saturating_sub(self.right_wall_pos.0),
        );
        canvas.move_vertical(
            self.right_wall,
            right_wall_y.saturating_sub(self.right_wall_pos.1),
        );

        self.base_pos = (base_x, base_y);
        self.left_wall_pos = (left_wall_x, left_wall_y);
        self.right_wall_pos = (right_wall_x, right_wall_y);

        self.draw(canvas);
    }

    /// Show the shapes without touching the visibility flag
    fn draw(&self, canvas: &mut Canvas) {
        if self.visible {
            canvas.make_visible(self.left_wall);
            canvas.make_visible(self.right_wall);
            canvas.make_visible(self.base);
        }
    }

    /// Hide the shapes without touching the visibility flag
    fn erase(&self, canvas: &mut Canvas) {
        if self.visible {
            canvas.make_invisible(self.left_wall);
            canvas.make_invisible(self.right_wall);
            canvas.make_invisible(self.base);
        }
    }

    pub fn make_visible(&mut self, canvas: &mut Canvas) {
        self.visible = true;
        canvas.make_visible(self.left_wall);
        canvas.make_visible(self.right_wall);
        canvas.make_visible(self.base);
    }

    pub fn make_invisible(&mut self, canvas: &mut Canvas) {
        self.visible = false;
        canvas.make_invisible(self.left_wall);
        canvas.make_invisible(self.right_wall);
        canvas.make_invisible(self.base);
    }

    /// Remove the cup's rectangles from the canvas
    pub fn destroy(&mut self, canvas: &mut Canvas) {
        canvas.remove(self.left_wall);
        canvas.remove(self.right_wall);
        canvas.remove(self.base);
    }
}

/// A lid, drawn as a single flat rectangle, always 1 cm tall
#[derive(Debug)]
pub struct Lid {
    number: u32,
    color: &'static str,
    x: i32,
    y: i32,
    width: i32,
    visible: bool,
    paired_cup: Option<u32>,
    rect: ShapeId,
    rect_pos: (i32, i32),
}

impl Lid {
    pub fn new(number: u32, canvas: &mut Canvas) -> Self {
        let color = color_for_id(number);

        let rect = canvas.create_rect();
        canvas.change_color(rect, color);
        canvas.change_size(rect, PIXELS_PER_CM, LID_DEFAULT_WIDTH);

        Lid {
            number,
            color,
            x: 0,
            y: 0,
            width: LID_DEFAULT_WIDTH,
            visible: false,
            paired_cup: None,
            rect,
            rect_pos: (DEFAULT_X, DEFAULT_Y),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Lids always contribute 1 cm of stacked height
    pub fn height_cm(&self) -> i32 {
        1
    }

    pub fn color(&self) -> &'static str {
        self.color
    }

    pub fn width_px(&self) -> i32 {
        self.width
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Identity of the paired cup, if any
    pub fn paired_cup(&self) -> Option<u32> {
        self.paired_cup
    }

    /// Place the lid with its bottom at `y`, centered on `x`.
    ///
    /// A paired lid does not size itself: the controller passes the cup's
    /// width through `width_override` so the lid visually matches the cup it
    /// sits atop.
    pub fn set_position(
        &mut self,
        canvas: &mut Canvas,
        x: i32,
        y: i32,
        width_override: Option<i32>,
    ) {
        self.erase(canvas);

        self.x = x;
        self.y = y;
        if let Some(width) = width_override {
            if width != self.width {
                self.width = width;
                canvas.change_size(self.rect, PIXELS_PER_CM, width);
            }
        }

        let rect_x = x - self.width / 2;
        let rect_y = y.saturating_sub(PIXELS_PER_CM);

        canvas.move_horizontal(self.rect, rect_x.saturating_sub(self.rect_pos.0));
        canvas.move_vertical(self.rect, rect_y.saturating_sub(self.rect_pos.1));
        self.rect_pos = (rect_x, rect_y);

        self.draw(canvas);
    }

    fn draw(&self, canvas: &mut Canvas) {
        if self.visible {
            canvas.make_visible(self.rect);
        }
    }

    fn erase(&self, canvas: &mut Canvas) {
        if self.visible {
            canvas.make_invisible(self.rect);
        }
    }

    pub fn make_visible(&mut self, canvas: &mut Canvas) {
        self.visible = true;
        canvas.make_visible(self.rect);
    }

    pub fn make_invisible(&mut self, canvas: &mut Canvas) {
        self.visible = false;
        canvas.make_invisible(self.rect);
    }

    /// Remove the lid's rectangle from the canvas
    pub fn destroy(&mut self, canvas: &mut Canvas) {
        canvas.remove(self.rect);
    }
}

/// Establish the symmetric cup↔lid pairing.
///
/// Both directions are written in one call, so the relation can never be
/// observed one-directional. Pairing the same two elements again is a no-op.
pub fn pair(cup: &mut Cup, lid: &mut Lid) {
    if cup.paired_lid == Some(lid.number) && lid.paired_cup == Some(cup.id) {
        return;
    }
    cup.paired_lid = Some(lid.number);
    lid.paired_cup = Some(cup.id);
}

/// Dissolve the pairing on both sides. A no-op unless the two elements are
/// currently paired with each other.
pub fn unpair(cup: &mut Cup, lid: &mut Lid) {
    if cup.paired_lid != Some(lid.number) || lid.paired_cup != Some(cup.id) {
        return;
    }
    cup.paired_lid = None;
    lid.paired_cup = None;
}

/// A stack entry: either a cup or a lid
#[derive(Debug)]
pub enum Element {
    Cup(Cup),
    Lid(Lid),
}

impl Element {
    /// Identity of the underlying element
    pub fn id(&self) -> u32 {
        match self {
            Element::Cup(cup) => cup.id(),
            Element::Lid(lid) => lid.number(),
        }
    }

    /// Height contributed to the stack: a cup its own height, a lid 1 cm
    pub fn height_cm(&self) -> i32 {
        match self {
            Element::Cup(cup) => cup.height_cm(),
            Element::Lid(lid) => lid.height_cm(),
        }
    }

    pub fn position(&self) -> (i32, i32) {
        match self {
            Element::Cup(cup) => cup.position(),
            Element::Lid(lid) => lid.position(),
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Element::Cup(cup) => cup.is_visible(),
            Element::Lid(lid) => lid.is_visible(),
        }
    }

    pub fn make_visible(&mut self, canvas: &mut Canvas) {
        match self {
            Element::Cup(cup) => cup.make_visible(canvas),
            Element::Lid(lid) => lid.make_visible(canvas),
        }
    }

    pub fn make_invisible(&mut self, canvas: &mut Canvas) {
        match self {
            Element::Cup(cup) => cup.make_invisible(canvas),
            Element::Lid(lid) => lid.make_invisible(canvas),
        }
    }

    pub fn destroy(&mut self, canvas: &mut Canvas) {
        match self {
            Element::Cup(cup) => cup.destroy(canvas),
            Element::Lid(lid) => lid.destroy(canvas),
        }
    }

    pub fn as_cup(&self) -> Option<&Cup> {
        match self {
            Element::Cup(cup) => Some(cup),
            Element::Lid(_) => None,
        }
    }

    pub fn as_lid(&self) -> Option<&Lid> {
        match self {
            Element::Lid(lid) => Some(lid),
            Element::Cup(_) => None,
        }
    }
}
