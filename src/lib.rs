pub mod backend;
pub mod error;
pub mod example;
pub mod frame;
pub mod manifest;
pub mod render_loop;
pub mod shader;

pub use error::RenderError;
pub use example::{Example, ExampleKind};
pub use render_loop::{LoopState, RenderLoop, Renderable};
