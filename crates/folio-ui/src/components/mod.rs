//! Reusable UI components

mod button;
mod category_pills;
mod seek_bar;
mod slider_nav;

pub use button::*;
pub use category_pills::*;
pub use seek_bar::*;
pub use slider_nav::*;
