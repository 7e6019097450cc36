//! Reusable UI components

mod button;
mod estimate;
mod notification;
mod tooltip;

pub use button::render_button;
pub use estimate::render_estimate_panel;
pub use notification::render_notification;
pub use tooltip::render_tooltip;
