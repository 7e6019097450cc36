//! Form rendering module
//!
//! This module contains UI components for rendering the form:
//! - `field_renderer`: Label, field, option group and error line rendering
//! - `carbon_form`: The calculator form with its visible rows

mod carbon_form;
mod field_renderer;

pub use carbon_form::draw_carbon_form;
