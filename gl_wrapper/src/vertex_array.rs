/// Vertex array object without any attached buffers.
///
/// Core profile contexts reject `glDrawArrays` unless some VAO is bound, even when the vertex
/// shader generates every position from `gl_VertexID`.
pub struct VertexArray {
    vao: u32,
}

impl VertexArray {
    pub fn empty() -> Self {
        let mut vao = 0;

        unsafe {
            gl::GenVertexArrays(1, (&mut vao) as *mut u32);
        }

        Self { vao }
    }

    pub fn vao(&self) -> u32 {
        self.vao
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, (&self.vao) as *const u32);
        }
    }
}
