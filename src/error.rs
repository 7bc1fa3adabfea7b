use gl_wrapper::program::PBError;

use thiserror::Error;

use crate::render_loop::LoopState;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{stage} stage failed: {diagnostic}")]
    Compile { stage: String, diagnostic: String },
    #[error("cannot {operation} while the render loop is {state}")]
    InvalidState {
        operation: &'static str,
        state: LoopState,
    },
}

impl From<PBError> for RenderError {
    fn from(e: PBError) -> Self {
        match e {
            PBError::Compilation { stage, log } => RenderError::Compile {
                stage: stage.name().to_string(),
                diagnostic: log,
            },
            PBError::Linking(log) => RenderError::Compile {
                stage: "link".to_string(),
                diagnostic: log,
            },
            PBError::InvalidSource(stage) => RenderError::Compile {
                stage: stage.name().to_string(),
                diagnostic: "source contains a NUL byte".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gl_wrapper::program::ShaderStage;

    #[test]
    fn builder_errors_name_their_stage() {
        let e: RenderError = PBError::Compilation {
            stage: ShaderStage::TessControl,
            log: "0:12(3): error: syntax error".into(),
        }
        .into();
        assert_eq!(
            e.to_string(),
            "tessellation control stage failed: 0:12(3): error: syntax error"
        );

        let e: RenderError = PBError::Linking("missing main".into()).into();
        assert!(matches!(e, RenderError::Compile { ref stage, .. } if stage == "link"));
    }
}
