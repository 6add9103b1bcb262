#![forbid(unsafe_code)]

pub mod command;
pub mod encode;
pub mod error;
pub mod format;
pub mod generate;
pub mod geometry;
pub mod manifest;
pub mod paint;
pub mod scene;
pub mod scenes;

pub use command::{Command, PaintId, PathId};
pub use error::{VgirError, VgirResult};
pub use format::{FillRule, Opcode, SectionType, StrokeCap, StrokeJoin};
pub use geometry::{Path, Verb};
pub use manifest::{Manifest, SceneEntry};
pub use paint::{GradientStop, Paint, pack_rgba};
pub use scene::SceneBuilder;
