//! # Catalog Actions
//!
//! Action model and fixed-capacity slot allocation for library item views.
//!
//! ## Features
//!
//! - **Action model** - integer action codes with a no-op sentinel, a
//!   localization resource key, and an optional argument substituted into
//!   the resolved label
//! - **Slot allocation** - maps a variably sized ordered action set onto a
//!   bounded number of presentation slots with a deterministic middle-skip
//!   rule and symmetric spacer flags
//!
//! Both pieces are pure: no I/O, no errors. Localized label lookup itself is
//! the consumer's concern; this crate only substitutes the argument.

mod action;
mod slots;

pub use action::{Action, ActionCode};
pub use slots::{allocate, SlotAssignment, SlotState};
