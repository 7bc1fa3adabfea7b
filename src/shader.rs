use gl_wrapper::program::{ProgramBuilder, ShaderStage};

pub const TRIANGLE_VERT: &str = include_str!("../shaders/triangle.vert");
pub const OFFSET_VERT: &str = include_str!("../shaders/offset.vert");
pub const COLORED_VERT: &str = include_str!("../shaders/colored.vert");
pub const SOLID_FRAG: &str = include_str!("../shaders/solid.frag");
pub const COLORED_FRAG: &str = include_str!("../shaders/colored.frag");
pub const TRIANGLE_TESC: &str = include_str!("../shaders/triangle.tesc");
pub const TRIANGLE_TESE: &str = include_str!("../shaders/triangle.tese");
pub const TESSELLATED_FRAG: &str = include_str!("../shaders/tessellated.frag");
pub const PASSTHROUGH_TESC: &str = include_str!("../shaders/passthrough.tesc");
pub const PASSTHROUGH_TESE: &str = include_str!("../shaders/passthrough.tese");

/// GLSL text for every stage of one program, handed verbatim to the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSources {
    pub vertex: String,
    pub tessellation: Option<TessellationSources>,
    pub fragment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TessellationSources {
    pub control: String,
    pub evaluation: String,
}

impl ShaderSources {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            tessellation: None,
            fragment: fragment.into(),
        }
    }

    /// Adds the control/evaluation pair exactly as given.
    pub fn with_tessellation(
        mut self,
        control: impl Into<String>,
        evaluation: impl Into<String>,
    ) -> Self {
        self.tessellation = Some(TessellationSources {
            control: control.into(),
            evaluation: evaluation.into(),
        });
        self
    }

    /// For the bundled control stages, which read their levels from `TESS_LEVEL_*` macros.
    pub fn with_builtin_tessellation(
        self,
        control: &str,
        evaluation: impl Into<String>,
        levels: TessLevels,
    ) -> Self {
        self.with_tessellation(levels.inject(control), evaluation)
    }

    pub fn is_tessellated(&self) -> bool {
        self.tessellation.is_some()
    }

    pub fn stage_count(&self) -> usize {
        if self.is_tessellated() {
            4
        } else {
            2
        }
    }

    pub fn stage_source(&self, stage: ShaderStage) -> Option<&str> {
        match stage {
            ShaderStage::Vertex => Some(&self.vertex),
            ShaderStage::TessControl => self.tessellation.as_ref().map(|t| t.control.as_str()),
            ShaderStage::TessEvaluation => {
                self.tessellation.as_ref().map(|t| t.evaluation.as_str())
            }
            ShaderStage::Fragment => Some(&self.fragment),
        }
    }

    pub fn builder(&self) -> ProgramBuilder<'_> {
        let builder = ProgramBuilder::new(&self.vertex, &self.fragment);

        match &self.tessellation {
            Some(t) => builder.with_tessellation(&t.control, &t.evaluation),
            None => builder,
        }
    }
}

/// Fixed subdivision levels written by the tessellation control stage.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TessLevels {
    pub inner: f32,
    pub outer: [f32; 3],
}

impl TessLevels {
    pub const DEFAULT: TessLevels = TessLevels {
        inner: 5.0,
        outer: [5.0, 5.0, 5.0],
    };

    pub fn defines(&self) -> String {
        format!(
            "#define TESS_LEVEL_INNER {:?}\n\
             #define TESS_LEVEL_OUTER0 {:?}\n\
             #define TESS_LEVEL_OUTER1 {:?}\n\
             #define TESS_LEVEL_OUTER2 {:?}\n",
            self.inner, self.outer[0], self.outer[1], self.outer[2]
        )
    }

    /// `#version` must stay the first directive, so the defines go right after it.
    pub fn inject(&self, src: &str) -> String {
        let mut out = String::with_capacity(src.len() + 128);
        let mut injected = false;

        for line in src.lines() {
            out.push_str(line);
            out.push('\n');

            if !injected && line.trim_start().starts_with("#version") {
                out.push_str(&self.defines());
                injected = true;
            }
        }

        if injected {
            out
        } else {
            format!("{}{}", self.defines(), src)
        }
    }
}

impl Default for TessLevels {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defines_follow_version_line() {
        let src = TessLevels::DEFAULT.inject(TRIANGLE_TESC);
        let mut lines = src.lines();

        assert_eq!(lines.next(), Some("#version 440 core"));
        assert_eq!(lines.next(), Some("#define TESS_LEVEL_INNER 5.0"));
        assert_eq!(lines.next(), Some("#define TESS_LEVEL_OUTER0 5.0"));
        assert_eq!(lines.next(), Some("#define TESS_LEVEL_OUTER1 5.0"));
        assert_eq!(lines.next(), Some("#define TESS_LEVEL_OUTER2 5.0"));
        assert!(src.contains("gl_TessLevelInner[0] = TESS_LEVEL_INNER;"));
    }

    #[test]
    fn defines_are_prepended_without_version() {
        let levels = TessLevels {
            inner: 2.5,
            outer: [1.0, 2.0, 3.0],
        };
        let src = levels.inject("void main() {}");

        assert!(src.starts_with("#define TESS_LEVEL_INNER 2.5\n"));
        assert!(src.contains("#define TESS_LEVEL_OUTER2 3.0\n"));
        assert!(src.ends_with("void main() {}"));
    }

    #[test]
    fn stage_lookup() {
        let plain = ShaderSources::new(TRIANGLE_VERT, SOLID_FRAG);
        assert_eq!(plain.stage_count(), 2);
        assert_eq!(plain.stage_source(ShaderStage::TessControl), None);
        assert_eq!(plain.stage_source(ShaderStage::Fragment), Some(SOLID_FRAG));

        let tess = ShaderSources::new(COLORED_VERT, TESSELLATED_FRAG)
            .with_builtin_tessellation(TRIANGLE_TESC, TRIANGLE_TESE, TessLevels::DEFAULT);
        assert_eq!(tess.stage_count(), 4);
        assert_eq!(tess.builder().stages().len(), 4);
        assert_eq!(
            tess.stage_source(ShaderStage::TessEvaluation),
            Some(TRIANGLE_TESE)
        );
    }

    #[test]
    fn plain_tessellation_is_stored_verbatim() {
        let control = "#version 440 core\n#define TESS_LEVEL_INNER 2.0\nvoid main() {}\n";
        let sources = ShaderSources::new("v", "f").with_tessellation(control, "e");

        assert_eq!(sources.stage_source(ShaderStage::TessControl), Some(control));
        assert_eq!(sources.stage_source(ShaderStage::TessEvaluation), Some("e"));
    }
}
