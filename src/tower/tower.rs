//! Tower controller
//!
//! [`Tower`] owns the ordered stack of elements, the canvas they are drawn
//! on, and the fixed visual scaffolding (frame + tick marks). Every mutating
//! operation is atomic from the caller's point of view: it either leaves the
//! stack untouched (recording an error report) or completes fully, with every
//! element at or above the mutation point repositioned before the call
//! returns. `last_operation_ok` is set exactly once per call and reflects
//! that call only.
//!
//! # Height arithmetic
//!
//! The vertical offset of stack index `i` is driven by the cumulative height
//! of the elements below it: a cup contributes `2^(id-1)` cm, a lid exactly
//! 1 cm. The sum is recomputed fresh for every repositioned element, never
//! cached, so removing an element from the middle drops everything above it
//! by exactly the removed height.

use super::element::{self, Cup, Element, Lid, PIXELS_PER_CM};
use super::errors::TowerError;
use crate::canvas::{Canvas, ShapeId, DEFAULT_X, DEFAULT_Y};

/// X coordinate of the tower's origin (left edge of the frame)
pub const ORIGIN_X: i32 = 50;

/// Y coordinate of the tower's origin (bottom of the frame)
pub const ORIGIN_Y: i32 = 250;

/// The stacking tower: ordered elements, their canvas, and the frame
#[derive(Debug)]
pub struct Tower {
    width: i32,
    max_height_cm: i32,
    visible: bool,
    last_operation_ok: bool,
    /// Bottom-to-top; index 0 is the bottom of the tower
    stack: Vec<Element>,
    canvas: Canvas,
    frame: ShapeId,
    ticks: Vec<ShapeId>,
    /// Pending user-facing reports, drained by the UI
    messages: Vec<String>,
}

impl Tower {
    /// Build a tower with a fixed frame width (px) and maximum height (cm).
    ///
    /// The frame and one tick mark per centimeter are created immediately and
    /// stay fixed for the tower's lifetime.
    pub fn new(width: i32, max_height_cm: i32) -> Self {
        let mut tower = Tower {
            width,
            max_height_cm,
            visible: true,
            last_operation_ok: true,
            stack: Vec::new(),
            canvas: Canvas::new(),
            frame: 0,
            ticks: Vec::new(),
            messages: Vec::new(),
        };
        tower.build_frame();
        tower.build_ticks();
        tower
    }

    /// Outer boundary of the tower, sized from the maximum height and width
    fn build_frame(&mut self) {
        let frame = self.canvas.create_rect();
        self.canvas
            .change_size(frame, self.max_height_cm * PIXELS_PER_CM, self.width);
        self.canvas.change_color(frame, "black");
        let top = ORIGIN_Y - self.max_height_cm * PIXELS_PER_CM;
        self.canvas.move_horizontal(frame, ORIGIN_X - DEFAULT_X);
        self.canvas.move_vertical(frame, top - DEFAULT_Y);
        self.canvas.make_visible(frame);
        self.frame = frame;
    }

    /// One 1x5 px mark per centimeter, measured up from the origin
    fn build_ticks(&mut self) {
        for cm in 1..=self.max_height_cm {
            let tick = self.canvas.create_rect();
            self.canvas.change_size(tick, 1, 5);
            self.canvas.change_color(tick, "black");
            let tick_y = ORIGIN_Y - cm * PIXELS_PER_CM;
            self.canvas.move_horizontal(tick, ORIGIN_X - DEFAULT_X);
            self.canvas.move_vertical(tick, tick_y - DEFAULT_Y);
            self.canvas.make_visible(tick);
            self.ticks.push(tick);
        }
    }

    /// Push a new cup on top of the stack.
    ///
    /// Fails with [`TowerError::DuplicateIdentity`] if any stacked element
    /// already carries this identity; the stack is left unchanged.
    pub fn push_cup(&mut self, id: u32) {
        if self.stack.iter().any(|e| e.id() == id) {
            self.fail(TowerError::DuplicateIdentity { id });
            return;
        }

        let bottom = self.top_bottom_y();
        let mut cup = Cup::new(id, &mut self.canvas);
        cup.set_position(&mut self.canvas, ORIGIN_X, bottom);
        if self.visible {
            cup.make_visible(&mut self.canvas);
        }
        self.stack.push(Element::Cup(cup));
        self.last_operation_ok = true;
    }

    /// Put a lid on cup `number`.
    ///
    /// The cup must be the top of the stack; the lid is paired with it, sized
    /// to its width, and stacked directly above it. Fails with
    /// [`TowerError::NotFound`] if the cup is absent or not exposed at the
    /// top — an already-lidded cup sits under its lid, so lidding it twice
    /// fails the same way.
    pub fn push_lid(&mut self, number: u32) {
        let mut target = None;
        for (index, elem) in self.stack.iter().enumerate() {
            if let Element::Cup(cup) = elem {
                if cup.id() == number {
                    target = Some((index, cup.width_px()));
                    break;
                }
            }
        }

        let Some((index, width)) = target else {
            self.fail(TowerError::NotFound { id: number });
            return;
        };
        if index + 1 != self.stack.len() {
            // Lid placement needs its cup exposed at the top
            self.fail(TowerError::NotFound { id: number });
            return;
        }

        let bottom = self.top_bottom_y();
        let mut lid = Lid::new(number, &mut self.canvas);
        lid.set_position(&mut self.canvas, ORIGIN_X, bottom, Some(width));
        if self.visible {
            lid.make_visible(&mut self.canvas);
        }
        if let Some(Element::Cup(cup)) = self.stack.last_mut() {
            element::pair(cup, &mut lid);
        }
        self.stack.push(Element::Lid(lid));
        self.last_operation_ok = true;
    }

    /// Remove cup `number` (and its paired lid, if any) from the stack.
    ///
    /// Everything above the removal point shifts down by the removed height.
    /// Fails with [`TowerError::NotFound`] if no such cup is stacked.
    pub fn remove_cup(&mut self, number: u32) {
        let Some(mut index) = self.find_cup_index(number) else {
            self.fail(TowerError::NotFound { id: number });
            return;
        };

        // A lidded cup takes its lid with it; unpair before tearing down
        let lid_id = self.stack[index].as_cup().and_then(Cup::paired_lid);
        if let Some(lid_id) = lid_id {
            let lid_index = self.stack.iter().position(
                |e| matches!(e, Element::Lid(l) if l.number() == lid_id && l.paired_cup() == Some(number)),
            );
            if let Some(lid_index) = lid_index {
                let cup_index = if lid_index < index { index - 1 } else { index };
                if let Element::Lid(mut lid) = self.stack.remove(lid_index) {
                    if let Some(Element::Cup(cup)) = self.stack.get_mut(cup_index) {
                        element::unpair(cup, &mut lid);
                    }
                    lid.make_invisible(&mut self.canvas);
                    lid.destroy(&mut self.canvas);
                }
                index = cup_index;
            }
        }

        let mut cup = self.stack.remove(index);
        cup.make_invisible(&mut self.canvas);
        cup.destroy(&mut self.canvas);

        self.reposition_from(index);
        self.last_operation_ok = true;
    }

    /// Show the tower: frame, ticks, and every stacked element
    pub fn make_visible(&mut self) {
        self.visible = true;
        let canvas = &mut self.canvas;
        canvas.make_visible(self.frame);
        for &tick in &self.ticks {
            canvas.make_visible(tick);
        }
        for elem in &mut self.stack {
            elem.make_visible(canvas);
        }
    }

    /// Hide the tower and everything in it
    pub fn make_invisible(&mut self) {
        self.visible = false;
        let canvas = &mut self.canvas;
        canvas.make_invisible(self.frame);
        for &tick in &self.ticks {
            canvas.make_invisible(tick);
        }
        for elem in &mut self.stack {
            elem.make_invisible(canvas);
        }
    }

    /// Stack contents, bottom-to-top
    pub fn stack(&self) -> &[Element] {
        &self.stack
    }

    /// Outcome of the most recent mutating call
    pub fn last_operation_ok(&self) -> bool {
        self.last_operation_ok
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn max_height_cm(&self) -> i32 {
        self.max_height_cm
    }

    /// Canvas holding every shape, for rendering and assertions
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Total stacked height in centimeters
    pub fn stack_height_cm(&self) -> i32 {
        self.height_up_to(self.stack.len())
    }

    /// Drain pending user-facing reports
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    /// Record a failed operation: report (visible towers only) and flag
    fn fail(&mut self, err: TowerError) {
        if self.visible {
            self.messages.push(err.to_string());
        }
        self.last_operation_ok = false;
    }

    fn find_cup_index(&self, number: u32) -> Option<usize> {
        self.stack
            .iter()
            .position(|e| matches!(e, Element::Cup(c) if c.id() == number))
    }

    /// Cumulative height (cm) of the elements strictly below `index`,
    /// saturating so giant cups cannot wrap the sum
    fn height_up_to(&self, index: usize) -> i32 {
        self.stack[..index]
            .iter()
            .fold(0i32, |total, e| total.saturating_add(e.height_cm()))
    }

    /// Bottom-Y for a given cumulative height below, saturating off-screen
    fn bottom_y_for(height_below: i32) -> i32 {
        ORIGIN_Y.saturating_sub(height_below.saturating_mul(PIXELS_PER_CM))
    }

    /// Bottom-Y for the next element pushed on top
    fn top_bottom_y(&self) -> i32 {
        Self::bottom_y_for(self.height_up_to(self.stack.len()))
    }

    /// Recompute positions for every element at or above `from_index`
    fn reposition_from(&mut self, from_index: usize) {
        let mut height_below = self.height_up_to(from_index);
        let canvas = &mut self.canvas;
        for elem in self.stack.iter_mut().skip(from_index) {
            let bottom = Self::bottom_y_for(height_below);
            match elem {
                Element::Cup(cup) => cup.set_position(canvas, ORIGIN_X, bottom),
                Element::Lid(lid) => lid.set_position(canvas, ORIGIN_X, bottom, None),
            }
            height_below = height_below.saturating_add(elem.height_cm());
        }
    }
}
