pub mod program;
pub mod renderer;
pub mod vertex_array;

/// Clear color in linear RGBA.
pub type Rgba = [f32; 4];
