use std::fmt::{Display, Formatter};

use crate::backend::GraphicsBackend;
use crate::error::RenderError;
use crate::example::Example;
use crate::frame::FrameParameters;

/// Something a window host can set up once and then repaint continuously.
pub trait Renderable<B: GraphicsBackend> {
    fn initialize(&mut self, backend: &mut B) -> Result<(), RenderError>;
    fn render_frame(
        &mut self,
        backend: &mut B,
        elapsed: f64,
    ) -> Result<FrameParameters, RenderError>;
    fn destroy(&mut self, backend: &mut B) -> Result<(), RenderError>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopState {
    Uninitialized,
    Ready,
    Destroyed,
}

impl Display for LoopState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LoopState::Uninitialized => "uninitialized",
            LoopState::Ready => "ready",
            LoopState::Destroyed => "destroyed",
        };
        f.write_str(s)
    }
}

enum State<P> {
    Uninitialized,
    // clear-only examples never own a program
    Ready { program: Option<P> },
    Destroyed,
}

///
/// Owns one linked program and issues one clear and at most one draw per frame
///
pub struct RenderLoop<B: GraphicsBackend> {
    example: Example,
    state: State<B::Program>,
}

impl<B: GraphicsBackend> RenderLoop<B> {
    pub fn new(example: Example) -> Self {
        Self {
            example,
            state: State::Uninitialized,
        }
    }

    pub fn state(&self) -> LoopState {
        match self.state {
            State::Uninitialized => LoopState::Uninitialized,
            State::Ready { .. } => LoopState::Ready,
            State::Destroyed => LoopState::Destroyed,
        }
    }

    fn invalid(&self, operation: &'static str) -> RenderError {
        RenderError::InvalidState {
            operation,
            state: self.state(),
        }
    }
}

impl<B: GraphicsBackend> Renderable<B> for RenderLoop<B> {
    fn initialize(&mut self, backend: &mut B) -> Result<(), RenderError> {
        if !matches!(self.state, State::Uninitialized) {
            return Err(self.invalid("initialize"));
        }

        let program = match &self.example.sources {
            Some(sources) => {
                let program = backend.create_program(sources)?;
                log::info!(
                    "Built {} program from {} stages",
                    self.example.kind,
                    sources.stage_count()
                );
                Some(program)
            }
            None => None,
        };

        if self.example.wireframe {
            backend.set_wireframe(true);
        }

        self.state = State::Ready { program };

        Ok(())
    }

    fn render_frame(
        &mut self,
        backend: &mut B,
        elapsed: f64,
    ) -> Result<FrameParameters, RenderError> {
        let program = match &self.state {
            State::Ready { program } => program,
            _ => return Err(self.invalid("render a frame")),
        };

        let params = FrameParameters::compute(&self.example, elapsed);

        backend.clear(params.background);

        if let Some(program) = program {
            backend.use_program(program);

            for attrib in &params.attributes {
                backend.vertex_attrib(*attrib);
            }

            if let Some(draw) = params.draw {
                backend.draw(draw);
            }
        }

        log::trace!("Frame at {elapsed:.3}s: {params:?}");

        Ok(params)
    }

    fn destroy(&mut self, backend: &mut B) -> Result<(), RenderError> {
        if !matches!(self.state, State::Ready { .. }) {
            return Err(self.invalid("destroy"));
        }

        if let State::Ready {
            program: Some(program),
        } = std::mem::replace(&mut self.state, State::Destroyed)
        {
            backend.delete_program(program);
        }

        log::info!("Released {} render loop", self.example.kind);

        Ok(())
    }
}
