//! Form domain layer
//!
//! The in-memory form document the assistant reads and writes: field
//! values, checked flags and border state, plus the labels, submit button
//! and estimate display around them.

mod carbon;
mod field;
mod form_state;

pub use carbon::{carbon_calculator, AIR_TRAVEL, DIET, TRANSPORT, VEHICLE_DISTANCE};
pub use field::{format_number, parse_float, FieldKind, FieldStatus, FormField};
pub use form_state::{EstimateDisplay, Form, FormRow, SubmitButton};
