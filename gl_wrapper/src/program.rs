use gl::types::{GLenum, GLuint};
use std::ffi::{c_char, CString};
use std::fmt::{Display, Formatter};
use thiserror::Error;

const LOG_CAPACITY: usize = 1024;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    TessControl,
    TessEvaluation,
    Fragment,
}

impl ShaderStage {
    pub const fn gl_enum(&self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::TessControl => gl::TESS_CONTROL_SHADER,
            ShaderStage::TessEvaluation => gl::TESS_EVALUATION_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::TessControl => "tessellation control",
            ShaderStage::TessEvaluation => "tessellation evaluation",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl Display for ShaderStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

///
/// Collects 2 or 4 shader stages and links them into one [`Program`]
///
pub struct ProgramBuilder<'a> {
    vert: &'a str,
    tess: Option<(&'a str, &'a str)>,
    frag: &'a str,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(vert_src: &'a str, frag_src: &'a str) -> Self {
        Self {
            vert: vert_src,
            tess: None,
            frag: frag_src,
        }
    }

    pub fn with_tessellation(mut self, control_src: &'a str, eval_src: &'a str) -> Self {
        self.tess = Some((control_src, eval_src));
        self
    }

    /// Stages in pipeline order.
    pub fn stages(&self) -> Vec<(ShaderStage, &'a str)> {
        let mut stages = vec![(ShaderStage::Vertex, self.vert)];

        if let Some((control, eval)) = self.tess {
            stages.push((ShaderStage::TessControl, control));
            stages.push((ShaderStage::TessEvaluation, eval));
        }

        stages.push((ShaderStage::Fragment, self.frag));
        stages
    }

    /// Needs a current GL context.
    pub fn build(self) -> Result<Program, PBError> {
        let sources = self
            .stages()
            .into_iter()
            .map(|(stage, src)| {
                CString::new(src)
                    .map(|c| (stage, c))
                    .map_err(|_| PBError::InvalidSource(stage))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut shaders = Vec::with_capacity(sources.len());

        for (stage, src) in &sources {
            match compile_stage(*stage, src) {
                Ok(id) => shaders.push(id),
                Err(e) => {
                    delete_shaders(&shaders);
                    return Err(e);
                }
            }
        }

        let mut success: i32 = 0;

        unsafe {
            let program = gl::CreateProgram();

            for shader in &shaders {
                gl::AttachShader(program, *shader);
            }

            gl::LinkProgram(program);
            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);

            if success != 1 {
                let mut buf = [0_u8; LOG_CAPACITY];

                gl::GetProgramInfoLog(
                    program,
                    LOG_CAPACITY as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );

                gl::DeleteProgram(program);
                delete_shaders(&shaders);

                return Err(PBError::Linking(info_log_to_string(&buf)));
            }

            for shader in &shaders {
                gl::DetachShader(program, *shader);
            }
            delete_shaders(&shaders);

            Ok(Program { id: program })
        }
    }
}

fn compile_stage(stage: ShaderStage, src: &CString) -> Result<GLuint, PBError> {
    let mut success: i32 = 0;

    unsafe {
        let shader = gl::CreateShader(stage.gl_enum());

        gl::ShaderSource(
            shader,
            1,
            (&src.as_ptr()) as *const *const c_char,
            std::ptr::null(),
        );

        gl::CompileShader(shader);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut i32);

        if success != 1 {
            let mut buf = [0_u8; LOG_CAPACITY];

            gl::GetShaderInfoLog(
                shader,
                LOG_CAPACITY as i32,
                std::ptr::null_mut(),
                buf.as_mut_ptr() as *mut c_char,
            );
            gl::DeleteShader(shader);

            return Err(PBError::Compilation {
                stage,
                log: info_log_to_string(&buf),
            });
        }

        Ok(shader)
    }
}

fn delete_shaders(shaders: &[GLuint]) {
    for shader in shaders {
        unsafe { gl::DeleteShader(*shader) }
    }
}

/// Info logs are NUL terminated, unless the driver filled the whole buffer.
pub fn info_log_to_string(buf: &[u8]) -> String {
    let data = buf.split(|a| *a == 0).next().unwrap_or(buf);

    String::from_utf8_lossy(data).trim_end().to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("{stage} shader failed to compile: {log}")]
    Compilation { stage: ShaderStage, log: String },
    #[error("program failed to link: {0}")]
    Linking(String),
    #[error("{0} shader source contains a NUL byte")]
    InvalidSource(ShaderStage),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_in_pipeline_order() {
        let plain = ProgramBuilder::new("v", "f");
        assert_eq!(
            plain.stages(),
            vec![(ShaderStage::Vertex, "v"), (ShaderStage::Fragment, "f")]
        );

        let tess = ProgramBuilder::new("v", "f").with_tessellation("tc", "te");
        let order: Vec<_> = tess.stages().into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            order,
            vec![
                ShaderStage::Vertex,
                ShaderStage::TessControl,
                ShaderStage::TessEvaluation,
                ShaderStage::Fragment,
            ]
        );
    }

    #[test]
    fn nul_in_source_is_rejected_before_gl() {
        let res = ProgramBuilder::new("void main() {}", "bad\0frag").build();

        assert!(matches!(
            res,
            Err(PBError::InvalidSource(ShaderStage::Fragment))
        ));
    }

    #[test]
    fn info_log_stops_at_nul() {
        let mut buf = [0_u8; 16];
        buf[..9].copy_from_slice(b"0:1 error");

        assert_eq!(info_log_to_string(&buf), "0:1 error");
        assert_eq!(info_log_to_string(b"full buffer\n"), "full buffer");
    }
}
