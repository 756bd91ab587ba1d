//! Presentation adapter
//!
//! Reads simulation state into draw commands, then rasterizes them onto
//! any host [`Surface`](crate::platform::Surface).

pub mod color;
pub mod commands;
pub mod framebuffer;
pub mod glyphs;
pub mod raster;

pub use color::{Color, colors};
pub use commands::{DrawCommand, build_frame, ship_triangle};
pub use framebuffer::FrameBuffer;
pub use raster::rasterize;
