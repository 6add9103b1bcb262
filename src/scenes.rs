//! Built-in scene catalog for the generator.
//!
//! Each entry builds one scene deterministically; the batch runner in
//! `generate` turns the catalog into `.irbin` files plus the aggregate
//! manifest.

use crate::{
    format::{FillRule, StrokeCap, StrokeJoin},
    geometry::Path,
    paint::{GradientStop, Paint, pack_rgba},
    scene::SceneBuilder,
};

/// One catalog entry: identity, artifact location, and a deterministic
/// construction function.
#[derive(Clone, Copy)]
pub struct SceneDef {
    pub scene_id: &'static str,
    pub ir_path: &'static str,
    pub description: &'static str,
    pub build: fn() -> SceneBuilder,
}

pub fn builtin_scenes() -> Vec<SceneDef> {
    vec![
        SceneDef {
            scene_id: "fills/solid_basic",
            ir_path: "fills/solid_basic.irbin",
            description: "Basic solid fill scene with rectangles and circles",
            build: solid_basic,
        },
        SceneDef {
            scene_id: "fills/nested_rects",
            ir_path: "fills/nested_rects.irbin",
            description: "Performance test with 20 nested rectangles",
            build: nested_rects,
        },
        SceneDef {
            scene_id: "fills/spiral_circles",
            ir_path: "fills/spiral_circles.irbin",
            description: "50 circles in a spiral pattern with rainbow colors",
            build: spiral_circles,
        },
        SceneDef {
            scene_id: "gradients/linear_radial",
            ir_path: "gradients/linear_radial.irbin",
            description: "Linear and radial gradient fills with multi-stop ramps",
            build: linear_radial,
        },
        SceneDef {
            scene_id: "strokes/caps_joins",
            ir_path: "strokes/caps_joins.irbin",
            description: "Stroked paths exercising width, cap, and join variants",
            build: caps_joins,
        },
        SceneDef {
            scene_id: "baseline/noop_clear",
            ir_path: "baseline/noop_clear.irbin",
            description: "Clear-only scene for measuring baseline overhead",
            build: noop_clear,
        },
        SceneDef {
            scene_id: "misc/kurbo_star",
            ir_path: "misc/kurbo_star.irbin",
            description: "Concave star polygon filled with the even-odd rule",
            build: kurbo_star,
        },
    ]
}

fn solid_basic() -> SceneBuilder {
    let mut scene = SceneBuilder::new(800, 600);

    let red = scene.add_paint(Paint::solid(255, 0, 0, 255));
    let green = scene.add_paint(Paint::solid(0, 255, 0, 255));
    let blue = scene.add_paint(Paint::solid(0, 0, 255, 255));
    let yellow = scene.add_paint(Paint::solid(255, 255, 0, 255));

    let rect1 = scene.add_path(Path::new().rect(50.0, 50.0, 200.0, 150.0));
    let rect2 = scene.add_path(Path::new().rect(300.0, 50.0, 200.0, 150.0));
    let rect3 = scene.add_path(Path::new().rect(550.0, 50.0, 200.0, 150.0));
    let circle1 = scene.add_path(Path::new().circle(150.0, 400.0, 100.0));
    let circle2 = scene.add_path(Path::new().circle(400.0, 400.0, 80.0));
    let circle3 = scene.add_path(Path::new().circle(650.0, 400.0, 60.0));

    scene.clear(255, 255, 255, 255);
    scene.set_fill(red, FillRule::NonZero).fill_path(rect1);
    scene.set_fill(green, FillRule::NonZero).fill_path(rect2);
    scene.set_fill(blue, FillRule::NonZero).fill_path(rect3);
    scene.set_fill(yellow, FillRule::NonZero).fill_path(circle1);
    scene.set_fill(red, FillRule::NonZero).fill_path(circle2);
    scene.set_fill(blue, FillRule::NonZero).fill_path(circle3);
    scene
}

fn nested_rects() -> SceneBuilder {
    let mut scene = SceneBuilder::new(800, 600);

    let mut layers = Vec::new();
    for i in 0..20u32 {
        let t = f64::from(i) / 20.0;
        let r = (255.0 * (1.0 - t)) as u32;
        let g = (128.0 * t) as u32;
        let b = (255.0 * t) as u32;
        let paint = scene.add_paint(Paint::solid(r, g, b, 200));

        let size = 380.0 - f64::from(i) * 18.0;
        let x = 400.0 - size / 2.0;
        let y = 300.0 - size / 2.0;
        let path = scene.add_path(Path::new().rect(x, y, size, size));
        layers.push((paint, path));
    }

    scene.clear(32, 32, 32, 255);
    for (paint, path) in layers {
        scene.set_fill(paint, FillRule::NonZero).fill_path(path);
    }
    scene
}

fn spiral_circles() -> SceneBuilder {
    let mut scene = SceneBuilder::new(800, 600);

    let mut discs = Vec::new();
    for i in 0..50u32 {
        let (r, g, b) = hue_to_rgb((i * 7) % 360);
        let paint = scene.add_paint(Paint::solid(r, g, b, 255));

        let angle = f64::from(i) * 0.5;
        let radius = 20.0 + f64::from(i) * 5.0;
        let x = 400.0 + angle.cos() * radius;
        let y = 300.0 + angle.sin() * radius;
        let path = scene.add_path(Path::new().circle(x, y, 15.0));
        discs.push((paint, path));
    }

    scene.clear(255, 255, 255, 255);
    for (paint, path) in discs {
        scene.set_fill(paint, FillRule::NonZero).fill_path(path);
    }
    scene
}

/// Hue-only HSV to RGB, full saturation and value.
fn hue_to_rgb(hue: u32) -> (u32, u32, u32) {
    let h = f64::from(hue) / 60.0;
    let f = h.fract();
    let (r, g, b) = match h as u32 % 6 {
        0 => (1.0, f, 0.0),
        1 => (1.0 - f, 1.0, 0.0),
        2 => (0.0, 1.0, f),
        3 => (0.0, 1.0 - f, 1.0),
        4 => (f, 0.0, 1.0),
        _ => (1.0, 0.0, 1.0 - f),
    };
    ((r * 255.0) as u32, (g * 255.0) as u32, (b * 255.0) as u32)
}

fn linear_radial() -> SceneBuilder {
    let mut scene = SceneBuilder::new(800, 600);

    let sky = scene.add_paint(Paint::linear(
        0.0,
        0.0,
        0.0,
        280.0,
        vec![
            GradientStop {
                offset: 0.0,
                color: pack_rgba(16, 48, 160, 255),
            },
            GradientStop {
                offset: 0.6,
                color: pack_rgba(120, 180, 240, 255),
            },
            GradientStop {
                offset: 1.0,
                color: pack_rgba(250, 240, 210, 255),
            },
        ],
    ));
    let sun = scene.add_paint(Paint::radial(
        400.0,
        420.0,
        140.0,
        vec![
            GradientStop {
                offset: 0.0,
                color: pack_rgba(255, 240, 160, 255),
            },
            GradientStop {
                offset: 1.0,
                color: pack_rgba(255, 120, 0, 0),
            },
        ],
    ));

    let band = scene.add_path(Path::new().rect(0.0, 0.0, 800.0, 280.0));
    let disc = scene.add_path(Path::new().circle(400.0, 420.0, 140.0));

    scene.clear(255, 255, 255, 255);
    scene.set_fill(sky, FillRule::NonZero).fill_path(band);
    scene.set_fill(sun, FillRule::NonZero).fill_path(disc);
    scene
}

fn caps_joins() -> SceneBuilder {
    let mut scene = SceneBuilder::new(800, 600);

    let ink = scene.add_paint(Paint::solid(30, 30, 30, 255));
    let accent = scene.add_paint(Paint::solid(200, 40, 40, 255));

    let caps = [StrokeCap::Butt, StrokeCap::Round, StrokeCap::Square];
    let joins = [StrokeJoin::Miter, StrokeJoin::Round, StrokeJoin::Bevel];

    let mut rows = Vec::new();
    for (i, (&cap, &join)) in caps.iter().zip(joins.iter()).enumerate() {
        let y = 100.0 + i as f64 * 160.0;
        let zigzag = scene.add_path(
            Path::new()
                .move_to(100.0, y + 80.0)
                .line_to(250.0, y)
                .line_to(400.0, y + 80.0)
                .line_to(550.0, y),
        );
        rows.push((zigzag, cap, join));
    }
    let ring = scene.add_path(Path::new().circle(680.0, 300.0, 70.0));

    scene.clear(245, 245, 245, 255);
    for (i, (path, cap, join)) in rows.into_iter().enumerate() {
        scene.save();
        scene.set_stroke(ink, 8.0 + i as f32 * 6.0, cap, join);
        scene.stroke_path(path);
        scene.restore();
    }
    scene.set_stroke(accent, 10.0, StrokeCap::Butt, StrokeJoin::Miter);
    scene.stroke_path(ring);
    scene
}

fn noop_clear() -> SceneBuilder {
    let mut scene = SceneBuilder::new(800, 600);
    scene.clear(16, 16, 16, 255);
    scene
}

fn kurbo_star() -> SceneBuilder {
    let mut scene = SceneBuilder::new(800, 600);

    let gold = scene.add_paint(Paint::solid(230, 180, 40, 255));

    // Self-intersecting pentagram; even-odd leaves the center open.
    let mut bez = kurbo::BezPath::new();
    for i in 0..5u32 {
        let angle = -std::f64::consts::FRAC_PI_2 + f64::from(i * 2) * 2.0 * std::f64::consts::PI / 5.0;
        let x = 400.0 + 220.0 * angle.cos();
        let y = 300.0 + 220.0 * angle.sin();
        if i == 0 {
            bez.move_to((x, y));
        } else {
            bez.line_to((x, y));
        }
    }
    bez.close_path();
    let star = scene.add_path(Path::from_bez_path(&bez));

    scene.clear(255, 255, 255, 255);
    scene.set_fill(gold, FillRule::EvenOdd).fill_path(star);
    scene
}
