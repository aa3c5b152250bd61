#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod controller;
pub mod input;
pub mod layout;
pub mod palette;
pub mod surface;

pub use app::PaintApp;
pub use controller::SurfaceController;
pub use input::{InputEvent, InputHandler};
pub use layout::SurfaceLayout;
pub use surface::{DrawCmd, DrawSurface, SurfaceBuffer};
