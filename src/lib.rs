//! Choose the calibration flat date nearest to a light frame's date.
//!
//! [`picker::Picker`] windows the older/newer candidates into a
//! [`window::DisplayModel`], asks the user with arrow keys on a raw terminal
//! ([`interactive`]) or falls back to numbered input ([`simple`]), and
//! reports the outcome to a [`picker::PickObserver`].

pub mod candidates;
pub mod config;
pub mod interactive;
pub mod logging;
pub mod picker;
pub mod render;
pub mod selector;
pub mod simple;
pub mod window;

pub use picker::{pick_flat_date, PickOutcome, Picker};
pub use window::{DisplayModel, DEFAULT_PICKER_LIMIT, NONE_LABEL};
