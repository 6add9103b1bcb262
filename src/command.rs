use crate::format::{FillRule, Opcode, StrokeCap, StrokeJoin};

/// Zero-based insertion index of a paint within its scene.
pub type PaintId = u16;

/// Zero-based insertion index of a path within its scene.
pub type PathId = u16;

/// One drawing operation. Commands execute in encoding order; `SetFill` and
/// `SetStroke` set ambient state consumed by later `FillPath`/`StrokePath`
/// until overwritten.
///
/// Paint and path ids are carried by value and never range-checked here; a
/// dangling id serializes fine and only surfaces when a decoder resolves it.
/// Save/restore balance is likewise the caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Save,
    Restore,
    Clear {
        rgba: u32,
    },
    SetFill {
        paint_id: PaintId,
        rule: FillRule,
    },
    SetStroke {
        paint_id: PaintId,
        width: f32,
        cap: StrokeCap,
        join: StrokeJoin,
    },
    FillPath {
        path_id: PathId,
    },
    StrokePath {
        path_id: PathId,
    },
}

impl Command {
    pub fn opcode(&self) -> Opcode {
        match self {
            Command::Save => Opcode::Save,
            Command::Restore => Opcode::Restore,
            Command::Clear { .. } => Opcode::Clear,
            Command::SetFill { .. } => Opcode::SetFill,
            Command::SetStroke { .. } => Opcode::SetStroke,
            Command::FillPath { .. } => Opcode::FillPath,
            Command::StrokePath { .. } => Opcode::StrokePath,
        }
    }

    /// Argument payload size in bytes, after the 1-byte opcode.
    pub fn arg_len(&self) -> usize {
        match self {
            Command::Save | Command::Restore => 0,
            Command::Clear { .. } => 4,
            Command::SetFill { .. } => 3,
            Command::SetStroke { .. } => 7,
            Command::FillPath { .. } | Command::StrokePath { .. } => 2,
        }
    }
}
