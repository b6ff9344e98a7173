//! # Introduction
//!
//! stacktty is a toy visual simulator of a cup-stacking tower: cups and lids
//! are rectangles drawn on a 2D canvas, stacked and unstacked through a small
//! in-memory list, and rendered in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Commands → Tower → Stack mutations → Canvas shapes → TUI
//! ```
//!
//! 1. [`tower`] — the model: [`tower::Tower`] owns the ordered bottom-to-top
//!    stack of [`tower::element::Element`]s, recomputes cumulative heights on
//!    every mutation, and repositions everything above a removal point.
//! 2. [`canvas`] — the drawing primitive: an arena of rectangles addressed by
//!    id, with relative moves and show/hide, renderable headlessly.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Stacking rules
//!
//! Cup `N` is `2^(N-1)` cm tall and colored from a fixed 7-entry palette;
//! every lid is 1 cm. A lid pairs symmetrically with its cup, sits directly
//! above it, and leaves the tower together with it. Failed operations (a
//! duplicate cup identity, removing an absent cup) report a message, flip the
//! tower's success flag, and leave the stack untouched.

pub mod canvas;
pub mod tower;
pub mod ui;
