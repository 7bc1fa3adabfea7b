use crate::program::Program;
use crate::vertex_array::VertexArray;
use crate::Rgba;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
    Patches { vertices: u8 },
}

pub struct GlRenderer {
    current_program: u32,
}

impl GlRenderer {
    pub fn new() -> Self {
        Self { current_program: 0 }
    }

    pub fn use_program(&mut self, program: &Program) {
        let p_id = program.get_id();
        if self.current_program != p_id {
            unsafe { gl::UseProgram(p_id) }
            self.current_program = p_id;
        }
    }

    /// Unbinds `program` if it is current, so a deleted id is never reused by mistake.
    pub fn forget_program(&mut self, program: &Program) {
        if self.current_program == program.get_id() {
            unsafe { gl::UseProgram(0) }
            self.current_program = 0;
        }
    }

    /// Sets a generic attribute that stays constant for every vertex of the next draws.
    pub fn vertex_attrib(&self, index: u32, value: [f32; 4]) {
        unsafe {
            gl::VertexAttrib4fv(index, value.as_ptr());
        }
    }

    pub fn draw_arrays(&self, vertex_array: &VertexArray, primitive: Primitive, count: usize) {
        unsafe {
            gl::BindVertexArray(vertex_array.vao());

            let mode = match primitive {
                Primitive::Triangles => gl::TRIANGLES,
                Primitive::Patches { vertices } => {
                    gl::PatchParameteri(gl::PATCH_VERTICES, vertices as i32);
                    gl::PATCHES
                }
            };

            gl::DrawArrays(mode, 0, count as i32);
        }
    }

    pub fn wireframe(&self, enabled: bool) {
        let mode = if enabled { gl::LINE } else { gl::FILL };

        unsafe {
            gl::PolygonMode(gl::FRONT_AND_BACK, mode);
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn clear_color(&self, color: Rgba) {
        unsafe {
            gl::ClearBufferfv(gl::COLOR, 0, color.as_ptr());
        }
    }
}

impl Default for GlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
