use kurbo::{BezPath, PathEl};

/// Path segment kinds. Each verb implies a fixed number of coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Verb {
    MoveTo = 0,
    LineTo = 1,
    QuadTo = 2,
    CubicTo = 3,
    Close = 4,
}

impl Verb {
    /// Number of f32 coordinates consumed by this verb.
    pub fn coord_count(self) -> usize {
        match self {
            Verb::MoveTo | Verb::LineTo => 2,
            Verb::QuadTo => 4,
            Verb::CubicTo => 6,
            Verb::Close => 0,
        }
    }
}

/// Path geometry: an ordered verb list plus a flat f32 coordinate list.
///
/// Coordinates are stored flat, not grouped by verb; a decoder re-derives the
/// grouping from the verb arities. Construction is append-only and cannot
/// fail; nothing checks winding or self-intersection. Coordinate arguments
/// are taken as f64 and narrowed to f32 on append, so shapes built from f64
/// arithmetic reproduce the historical fixture bytes exactly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub verbs: Vec<Verb>,
    pub points: Vec<f32>,
}

/// Control-point fraction for a cubic-bezier quarter-circle arc of unit
/// radius. Historical fixtures depend on this exact literal.
const CIRCLE_K: f64 = 0.5522847498;

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.verbs.push(Verb::MoveTo);
        self.points.extend([x as f32, y as f32]);
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.verbs.push(Verb::LineTo);
        self.points.extend([x as f32, y as f32]);
        self
    }

    pub fn quad_to(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.verbs.push(Verb::QuadTo);
        self.points
            .extend([cx as f32, cy as f32, x as f32, y as f32]);
        self
    }

    pub fn cubic_to(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.verbs.push(Verb::CubicTo);
        self.points.extend([
            c1x as f32, c1y as f32, c2x as f32, c2y as f32, x as f32, y as f32,
        ]);
        self
    }

    pub fn close(mut self) -> Self {
        self.verbs.push(Verb::Close);
        self
    }

    /// Axis-aligned rectangle: MoveTo, three LineTo, Close.
    pub fn rect(self, x: f64, y: f64, w: f64, h: f64) -> Self {
        self.move_to(x, y)
            .line_to(x + w, y)
            .line_to(x + w, y + h)
            .line_to(x, y + h)
            .close()
    }

    /// Circle approximated by four cubic bezier arcs: one MoveTo followed by
    /// four CubicTo verbs. The last arc lands back on the start point, so no
    /// Close verb is emitted.
    pub fn circle(self, cx: f64, cy: f64, r: f64) -> Self {
        let k = CIRCLE_K;
        self.move_to(cx + r, cy)
            .cubic_to(cx + r, cy + r * k, cx + r * k, cy + r, cx, cy + r)
            .cubic_to(cx - r * k, cy + r, cx - r, cy + r * k, cx - r, cy)
            .cubic_to(cx - r, cy - r * k, cx - r * k, cy - r, cx, cy - r)
            .cubic_to(cx + r * k, cy - r, cx + r, cy - r * k, cx + r, cy)
    }

    /// Map a kurbo path onto IR verbs one-to-one.
    pub fn from_bez_path(bez: &BezPath) -> Self {
        let mut path = Path::new();
        for el in bez.elements() {
            path = match *el {
                PathEl::MoveTo(p) => path.move_to(p.x, p.y),
                PathEl::LineTo(p) => path.line_to(p.x, p.y),
                PathEl::QuadTo(c, p) => path.quad_to(c.x, c.y, p.x, p.y),
                PathEl::CurveTo(c1, c2, p) => path.cubic_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
                PathEl::ClosePath => path.close(),
            };
        }
        path
    }

    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }

    /// Number of stored f32 coordinate values (2 per point).
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}
