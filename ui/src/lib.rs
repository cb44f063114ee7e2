pub use audio::*;
pub use button::*;
pub use event::*;
pub use geometry::*;
pub use grid::*;
pub use slider::*;
pub use style::*;
pub use surface::*;
pub use title::*;

mod audio;
mod button;
mod event;
mod geometry;
mod grid;
mod slider;
mod style;
mod surface;
mod title;
