//! Form document and screen geometry

mod forms;
mod ui_area;

pub use forms::*;
pub use ui_area::*;
