use gl_wrapper::program::ShaderStage;

use crate::backend::GraphicsBackend;
use crate::error::RenderError;
use crate::frame::{DrawCall, Rgba, VertexAttrib};
use crate::shader::ShaderSources;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateProgram(u32),
    DeleteProgram(u32),
    Clear(Rgba),
    UseProgram(u32),
    VertexAttrib(VertexAttrib),
    Wireframe(bool),
    Draw(DrawCall),
}

#[derive(Debug, PartialEq, Eq)]
pub struct RecordedProgram(pub u32);

/// Stores every call instead of talking to a GPU.
#[derive(Default)]
pub struct Recorder {
    pub commands: Vec<Command>,
    pub compiled: Vec<ShaderSources>,
    next_id: u32,
    reject: Option<(ShaderStage, String)>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Behaves like a driver whose compiler rejects `stage`.
    pub fn failing(stage: ShaderStage, diagnostic: &str) -> Self {
        Self {
            reject: Some((stage, diagnostic.to_string())),
            ..Self::default()
        }
    }

    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

impl GraphicsBackend for Recorder {
    type Program = RecordedProgram;

    fn create_program(&mut self, sources: &ShaderSources) -> Result<RecordedProgram, RenderError> {
        if let Some((stage, diagnostic)) = &self.reject {
            if sources.stage_source(*stage).is_some() {
                return Err(RenderError::Compile {
                    stage: stage.name().to_string(),
                    diagnostic: diagnostic.clone(),
                });
            }
        }

        self.next_id += 1;
        self.compiled.push(sources.clone());
        self.commands.push(Command::CreateProgram(self.next_id));

        Ok(RecordedProgram(self.next_id))
    }

    fn delete_program(&mut self, program: RecordedProgram) {
        self.commands.push(Command::DeleteProgram(program.0));
    }

    fn clear(&mut self, color: Rgba) {
        self.commands.push(Command::Clear(color));
    }

    fn use_program(&mut self, program: &RecordedProgram) {
        self.commands.push(Command::UseProgram(program.0));
    }

    fn vertex_attrib(&mut self, attrib: VertexAttrib) {
        self.commands.push(Command::VertexAttrib(attrib));
    }

    fn set_wireframe(&mut self, enabled: bool) {
        self.commands.push(Command::Wireframe(enabled));
    }

    fn draw(&mut self, call: DrawCall) {
        self.commands.push(Command::Draw(call));
    }
}
