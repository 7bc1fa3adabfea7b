use gl_wrapper::renderer::Primitive;
pub use gl_wrapper::Rgba;

use crate::example::Example;

pub const ATTRIB_OFFSET: u32 = 0;
pub const ATTRIB_COLOR: u32 = 1;

/// Color fed to the `color` attribute of the colored variants.
pub const TRIANGLE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BackgroundMode {
    Static(Rgba),
    TimeDriven,
}

impl BackgroundMode {
    pub fn color_at(&self, t: f64) -> Rgba {
        match self {
            BackgroundMode::Static(color) => *color,
            BackgroundMode::TimeDriven => animated_background(t),
        }
    }
}

pub fn animated_background(t: f64) -> Rgba {
    [
        (t.sin() * 0.5 + 0.5) as f32,
        (t.cos() * 0.5 + 0.5) as f32,
        0.0,
        1.0,
    ]
}

pub fn offset_at(t: f64) -> [f32; 4] {
    [(t.sin() * 0.5) as f32, (t.cos() * 0.6) as f32, 0.0, 0.0]
}

/// Which immediate attributes the vertex stage of a variant consumes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AttributeSet {
    None,
    Offset,
    OffsetAndColor,
}

impl AttributeSet {
    pub fn values_at(&self, t: f64) -> Vec<VertexAttrib> {
        let offset = VertexAttrib {
            location: ATTRIB_OFFSET,
            value: offset_at(t),
        };
        let color = VertexAttrib {
            location: ATTRIB_COLOR,
            value: TRIANGLE_COLOR,
        };

        match self {
            AttributeSet::None => vec![],
            AttributeSet::Offset => vec![offset],
            AttributeSet::OffsetAndColor => vec![offset, color],
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexAttrib {
    pub location: u32,
    pub value: [f32; 4],
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub primitive: Primitive,
    pub vertices: usize,
}

impl DrawCall {
    pub const TRIANGLE: DrawCall = DrawCall {
        primitive: Primitive::Triangles,
        vertices: 3,
    };

    pub const PATCH: DrawCall = DrawCall {
        primitive: Primitive::Patches { vertices: 3 },
        vertices: 3,
    };
}

/// Everything one frame sets before and during its single draw.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameParameters {
    pub background: Rgba,
    pub attributes: Vec<VertexAttrib>,
    pub draw: Option<DrawCall>,
}

impl FrameParameters {
    pub fn compute(example: &Example, t: f64) -> Self {
        let draw = example.draw_call();

        let attributes = match draw {
            Some(_) => example.attributes.values_at(t),
            None => vec![],
        };

        Self {
            background: example.background.color_at(t),
            attributes,
            draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::example::ExampleKind;
    use approx::assert_relative_eq;

    #[test]
    fn background_stays_in_unit_range() {
        let mut t = -1000.0;
        while t < 1000.0 {
            for c in animated_background(t) {
                assert!((0.0..=1.0).contains(&c), "{c} out of range at t={t}");
            }
            t += 0.37;
        }

        for t in [f64::MAX, f64::MIN, 1e12, -1e12] {
            for c in animated_background(t) {
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    #[test]
    fn values_at_zero() {
        assert_eq!(animated_background(0.0), [0.5, 1.0, 0.0, 1.0]);
        assert_eq!(offset_at(0.0), [0.0, 0.6, 0.0, 0.0]);
    }

    #[test]
    fn values_at_half_pi() {
        let t = std::f64::consts::FRAC_PI_2;
        let bg = animated_background(t);
        let offset = offset_at(t);

        assert_relative_eq!(bg[0], 1.0);
        assert_relative_eq!(bg[1], 0.5);
        assert_relative_eq!(offset[0], 0.5);
        assert!(offset[1].abs() < 1e-6);
    }

    #[test]
    fn static_background_ignores_time() {
        let example = Example::new(ExampleKind::FirstTriangle);

        for t in [0.0, 0.5, 3.0, 1234.5] {
            let params = FrameParameters::compute(&example, t);
            assert_eq!(params.background, [0.0, 0.2, 0.0, 1.0]);
            assert!(params.attributes.is_empty());
            assert_eq!(params.draw, Some(DrawCall::TRIANGLE));
        }
    }

    #[test]
    fn passing_data_sets_both_attributes() {
        let example = Example::new(ExampleKind::PassingData);
        let params = FrameParameters::compute(&example, 0.0);

        assert_eq!(params.background, [0.5, 1.0, 0.0, 1.0]);
        assert_eq!(
            params.attributes,
            vec![
                VertexAttrib {
                    location: ATTRIB_OFFSET,
                    value: [0.0, 0.6, 0.0, 0.0],
                },
                VertexAttrib {
                    location: ATTRIB_COLOR,
                    value: TRIANGLE_COLOR,
                },
            ]
        );
    }

    #[test]
    fn clear_only_variant_has_no_draw() {
        let example = Example::new(ExampleKind::SimpleApplication);
        let params = FrameParameters::compute(&example, 2.0);

        assert_eq!(params.background, [1.0, 0.0, 0.0, 1.0]);
        assert!(params.attributes.is_empty());
        assert_eq!(params.draw, None);
    }
}
