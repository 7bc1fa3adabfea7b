use std::fmt::{Display, Formatter};

use crate::frame::{AttributeSet, BackgroundMode, DrawCall, Rgba};
use crate::shader::{
    ShaderSources, TessLevels, COLORED_FRAG, COLORED_VERT, OFFSET_VERT, PASSTHROUGH_TESC,
    PASSTHROUGH_TESE, SOLID_FRAG, TESSELLATED_FRAG, TRIANGLE_TESC, TRIANGLE_TESE, TRIANGLE_VERT,
};

pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
pub const DARK_GREEN: Rgba = [0.0, 0.2, 0.0, 1.0];
pub const GREEN: Rgba = [0.0, 0.25, 0.0, 1.0];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExampleKind {
    /// Clears the window, nothing else.
    SimpleApplication,
    FirstTriangle,
    /// Triangle moved by an offset attribute.
    VertexAttributes,
    /// Offset plus a color attribute forwarded between stages.
    PassingData,
    Tessellation,
    /// Static wireframe patch, no attributes.
    TessellatedTriangle,
}

impl ExampleKind {
    pub const ALL: [ExampleKind; 6] = [
        ExampleKind::SimpleApplication,
        ExampleKind::FirstTriangle,
        ExampleKind::VertexAttributes,
        ExampleKind::PassingData,
        ExampleKind::Tessellation,
        ExampleKind::TessellatedTriangle,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            ExampleKind::SimpleApplication => "simple application",
            ExampleKind::FirstTriangle => "first triangle",
            ExampleKind::VertexAttributes => "vertex attributes",
            ExampleKind::PassingData => "passing data",
            ExampleKind::Tessellation => "tessellation",
            ExampleKind::TessellatedTriangle => "tessellated triangle",
        }
    }
}

impl Display for ExampleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of one sample program.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub kind: ExampleKind,
    pub background: BackgroundMode,
    pub attributes: AttributeSet,
    pub wireframe: bool,
    pub sources: Option<ShaderSources>,
}

impl Example {
    pub fn new(kind: ExampleKind) -> Self {
        match kind {
            ExampleKind::SimpleApplication => Self {
                kind,
                background: BackgroundMode::Static(RED),
                attributes: AttributeSet::None,
                wireframe: false,
                sources: None,
            },
            ExampleKind::FirstTriangle => Self {
                kind,
                background: BackgroundMode::Static(DARK_GREEN),
                attributes: AttributeSet::None,
                wireframe: false,
                sources: Some(ShaderSources::new(TRIANGLE_VERT, SOLID_FRAG)),
            },
            ExampleKind::VertexAttributes => Self {
                kind,
                background: BackgroundMode::TimeDriven,
                attributes: AttributeSet::Offset,
                wireframe: false,
                sources: Some(ShaderSources::new(OFFSET_VERT, SOLID_FRAG)),
            },
            ExampleKind::PassingData => Self {
                kind,
                background: BackgroundMode::TimeDriven,
                attributes: AttributeSet::OffsetAndColor,
                wireframe: false,
                sources: Some(ShaderSources::new(COLORED_VERT, COLORED_FRAG)),
            },
            ExampleKind::Tessellation => Self {
                kind,
                background: BackgroundMode::TimeDriven,
                attributes: AttributeSet::OffsetAndColor,
                wireframe: true,
                sources: Some(
                    ShaderSources::new(COLORED_VERT, TESSELLATED_FRAG).with_builtin_tessellation(
                        TRIANGLE_TESC,
                        TRIANGLE_TESE,
                        TessLevels::DEFAULT,
                    ),
                ),
            },
            ExampleKind::TessellatedTriangle => Self {
                kind,
                background: BackgroundMode::Static(GREEN),
                attributes: AttributeSet::None,
                wireframe: true,
                sources: Some(
                    ShaderSources::new(TRIANGLE_VERT, SOLID_FRAG).with_builtin_tessellation(
                        PASSTHROUGH_TESC,
                        PASSTHROUGH_TESE,
                        TessLevels::DEFAULT,
                    ),
                ),
            },
        }
    }

    /// Replaces the built-in shaders, e.g. with ones read from a manifest.
    pub fn with_sources(mut self, sources: ShaderSources) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Patch draws follow from the presence of tessellation stages, not from the kind.
    pub fn draw_call(&self) -> Option<DrawCall> {
        self.sources.as_ref().map(|s| {
            if s.is_tessellated() {
                DrawCall::PATCH
            } else {
                DrawCall::TRIANGLE
            }
        })
    }
}
