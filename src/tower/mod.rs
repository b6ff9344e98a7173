//! The cup-stacking tower
//!
//! This module provides the simulator's core model:
//! - [`element`]: the stack elements — [`element::Cup`], [`element::Lid`],
//!   and the [`element::Element`] variant that lives in the stack
//! - [`tower`]: the [`Tower`] controller owning the ordered stack, the
//!   canvas, and the frame/tick scaffolding
//! - [`errors`]: the two [`errors::TowerError`] failure kinds
//!
//! # Stacking model
//!
//! The stack is a bottom-to-top sequence; insertion order is stacking order.
//! A cup's height is `2^(id-1)` cm and every lid is 1 cm. An element's
//! bottom sits at `ORIGIN_Y - (height of everything below it) * 10` px,
//! recomputed for the whole affected range after every mutation.
//!
//! A lid is paired symmetrically with its cup, sits directly above it, and
//! leaves the stack together with it.

pub mod element;
pub mod errors;
#[allow(clippy::module_inception)]
pub mod tower;

pub use element::{Cup, Element, Lid};
pub use errors::TowerError;
pub use tower::{Tower, ORIGIN_X, ORIGIN_Y};
