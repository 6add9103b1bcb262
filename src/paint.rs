/// Paint type tags as stored in the paint section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PaintType {
    Solid = 0,
    Linear = 1,
    Radial = 2,
}

/// One gradient stop: offset in [0, 1] plus a packed RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: u32,
}

/// A fill/stroke color source. Immutable once added to a scene; its paint id
/// is its zero-based insertion index.
///
/// Gradient stops are taken verbatim: the encoder neither sorts nor
/// deduplicates them, so non-decreasing offsets are the caller's
/// responsibility.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid {
        color: u32,
    },
    Linear {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        stops: Vec<GradientStop>,
    },
    Radial {
        cx: f32,
        cy: f32,
        r: f32,
        stops: Vec<GradientStop>,
    },
}

/// Pack RGBA channels into one little-endian u32, R in the lowest byte
/// through A in the highest.
///
/// Channels above 255 truncate to their low 8 bits instead of erroring.
/// Known quirk kept for fixture compatibility; callers clamp.
pub fn pack_rgba(r: u32, g: u32, b: u32, a: u32) -> u32 {
    (r & 0xFF) | (g & 0xFF) << 8 | (b & 0xFF) << 16 | (a & 0xFF) << 24
}

impl Paint {
    pub fn solid(r: u32, g: u32, b: u32, a: u32) -> Self {
        Paint::Solid {
            color: pack_rgba(r, g, b, a),
        }
    }

    pub fn linear(x0: f32, y0: f32, x1: f32, y1: f32, stops: Vec<GradientStop>) -> Self {
        Paint::Linear {
            x0,
            y0,
            x1,
            y1,
            stops,
        }
    }

    pub fn radial(cx: f32, cy: f32, r: f32, stops: Vec<GradientStop>) -> Self {
        Paint::Radial { cx, cy, r, stops }
    }

    pub fn paint_type(&self) -> PaintType {
        match self {
            Paint::Solid { .. } => PaintType::Solid,
            Paint::Linear { .. } => PaintType::Linear,
            Paint::Radial { .. } => PaintType::Radial,
        }
    }

    pub fn is_gradient(&self) -> bool {
        !matches!(self, Paint::Solid { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_red_packs_to_known_value() {
        assert_eq!(pack_rgba(255, 0, 0, 255), 0xFF00_00FF);
        assert_eq!(
            Paint::solid(255, 0, 0, 255),
            Paint::Solid { color: 0xFF00_00FF }
        );
    }

    #[test]
    fn channel_order_is_r_low_to_a_high() {
        assert_eq!(pack_rgba(0x11, 0x22, 0x33, 0x44), 0x4433_2211);
    }

    #[test]
    fn out_of_range_channels_truncate() {
        // 300 & 0xFF == 44; kept, not corrected.
        assert_eq!(pack_rgba(300, 0, 0, 255), pack_rgba(44, 0, 0, 255));
    }

    #[test]
    fn gradient_stops_are_kept_verbatim() {
        let stops = vec![
            GradientStop {
                offset: 0.8,
                color: 1,
            },
            GradientStop {
                offset: 0.2,
                color: 2,
            },
        ];
        let Paint::Linear { stops: kept, .. } =
            Paint::linear(0.0, 0.0, 1.0, 1.0, stops.clone())
        else {
            panic!("expected linear paint");
        };
        assert_eq!(kept, stops);
    }
}
