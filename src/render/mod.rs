//! Drawing: the `Surface` primitives, the in-memory canvas and the terminal layout.

pub mod frame;
pub mod hud;
pub mod painter;
pub mod renderer;
pub mod surface;

pub use frame::FrameBuffer;
pub use hud::{Hud, ScoreBoard};
pub use painter::Painter;
pub use renderer::Renderer;
pub use surface::{Align, Font, Surface};
