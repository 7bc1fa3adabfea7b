use gl_wrapper::program::Program;
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::vertex_array::VertexArray;

use crate::error::RenderError;
use crate::frame::{DrawCall, Rgba, VertexAttrib};
use crate::shader::ShaderSources;

#[cfg(test)]
pub(crate) mod recording;

/// The graphics calls a [`crate::RenderLoop`] is allowed to make.
pub trait GraphicsBackend {
    type Program;

    fn create_program(&mut self, sources: &ShaderSources) -> Result<Self::Program, RenderError>;
    fn delete_program(&mut self, program: Self::Program);
    fn clear(&mut self, color: Rgba);
    fn use_program(&mut self, program: &Self::Program);
    fn vertex_attrib(&mut self, attrib: VertexAttrib);
    fn set_wireframe(&mut self, enabled: bool);
    fn draw(&mut self, call: DrawCall);
}

///
/// Backend talking to the OpenGL context that is current on this thread
///
pub struct GlBackend {
    renderer: GlRenderer,
    vertex_array: VertexArray,
}

impl GlBackend {
    /// GL function pointers must already be loaded.
    pub fn new() -> Self {
        Self {
            renderer: GlRenderer::new(),
            vertex_array: VertexArray::empty(),
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }
}

impl Default for GlBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsBackend for GlBackend {
    type Program = Program;

    fn create_program(&mut self, sources: &ShaderSources) -> Result<Program, RenderError> {
        Ok(sources.builder().build()?)
    }

    fn delete_program(&mut self, program: Program) {
        self.renderer.forget_program(&program);
    }

    fn clear(&mut self, color: Rgba) {
        self.renderer.clear_color(color);
    }

    fn use_program(&mut self, program: &Program) {
        self.renderer.use_program(program);
    }

    fn vertex_attrib(&mut self, attrib: VertexAttrib) {
        self.renderer.vertex_attrib(attrib.location, attrib.value);
    }

    fn set_wireframe(&mut self, enabled: bool) {
        self.renderer.wireframe(enabled);
    }

    fn draw(&mut self, call: DrawCall) {
        self.renderer
            .draw_arrays(&self.vertex_array, call.primitive, call.vertices);
    }
}
