use std::collections::BTreeMap;

use crate::{
    command::{Command, PaintId, PathId},
    encode,
    format::{FillRule, StrokeCap, StrokeJoin},
    geometry::Path,
    paint::{Paint, pack_rgba},
};

/// Accumulates one renderable scene and finalizes it into container bytes.
///
/// Paints, paths, and commands are single-owner, append-only collections;
/// the zero-based insertion index is the id referenced by commands and stays
/// stable for the scene's lifetime. The builder performs no semantic
/// validation: dangling ids, unbalanced save/restore, or mismatched verb
/// arities serialize without complaint and surface only in a decoder. That
/// minimal-validation contract is deliberate; it keeps the encoder a pure
/// write path.
#[derive(Clone, Debug, Default)]
pub struct SceneBuilder {
    width: u32,
    height: u32,
    paints: Vec<Paint>,
    paths: Vec<Path>,
    commands: Vec<Command>,
}

impl SceneBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Append a paint and return its id.
    pub fn add_paint(&mut self, paint: Paint) -> PaintId {
        let id = self.paints.len() as PaintId;
        self.paints.push(paint);
        id
    }

    /// Append a path and return its id.
    pub fn add_path(&mut self, path: Path) -> PathId {
        let id = self.paths.len() as PathId;
        self.paths.push(path);
        id
    }

    pub fn clear(&mut self, r: u32, g: u32, b: u32, a: u32) -> &mut Self {
        self.commands.push(Command::Clear {
            rgba: pack_rgba(r, g, b, a),
        });
        self
    }

    pub fn set_fill(&mut self, paint_id: PaintId, rule: FillRule) -> &mut Self {
        self.commands.push(Command::SetFill { paint_id, rule });
        self
    }

    pub fn set_stroke(
        &mut self,
        paint_id: PaintId,
        width: f32,
        cap: StrokeCap,
        join: StrokeJoin,
    ) -> &mut Self {
        self.commands.push(Command::SetStroke {
            paint_id,
            width,
            cap,
            join,
        });
        self
    }

    pub fn fill_path(&mut self, path_id: PathId) -> &mut Self {
        self.commands.push(Command::FillPath { path_id });
        self
    }

    pub fn stroke_path(&mut self, path_id: PathId) -> &mut Self {
        self.commands.push(Command::StrokePath { path_id });
        self
    }

    pub fn save(&mut self) -> &mut Self {
        self.commands.push(Command::Save);
        self
    }

    pub fn restore(&mut self) -> &mut Self {
        self.commands.push(Command::Restore);
        self
    }

    pub fn paints(&self) -> &[Paint] {
        &self.paints
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Decoder capabilities this scene exercises, derived from its content
    /// rather than declared by the caller. The map feeds the manifest's
    /// `required_features` object.
    pub fn required_features(&self) -> BTreeMap<String, bool> {
        let mut features = BTreeMap::new();
        for cmd in &self.commands {
            match cmd {
                Command::SetFill { rule, .. } => {
                    let flag = match rule {
                        FillRule::NonZero => "needs_nonzero",
                        FillRule::EvenOdd => "needs_evenodd",
                    };
                    features.insert(flag.to_string(), true);
                }
                Command::SetStroke { .. } | Command::StrokePath { .. } => {
                    features.insert("needs_stroking".to_string(), true);
                }
                _ => {}
            }
        }
        if self.paints.iter().any(Paint::is_gradient) {
            features.insert("needs_gradients".to_string(), true);
        }
        features
    }

    /// Serialize the scene into its container bytes. Infallible and
    /// deterministic: an unmodified scene builds to identical bytes every
    /// time.
    pub fn build(&self) -> Vec<u8> {
        encode::encode_container(&self.paints, &self.paths, &self.commands)
    }
}
