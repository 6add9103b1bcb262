//! Wire-format constants for the VGIR binary container.
//!
//! All multi-byte integers in the container are little-endian. The layout is
//! a 16-byte file header followed by zero or more length-prefixed sections.

/// File magic bytes: `'V' 'G' 'I' 'R'`.
pub const IR_MAGIC: [u8; 4] = *b"VGIR";

pub const IR_MAJOR_VERSION: u8 = 1;
pub const IR_MINOR_VERSION: u8 = 0;

/// Size of the file header in bytes.
pub const HEADER_LEN: usize = 16;

/// Size of a section sub-header (type + reserved + length) in bytes.
pub const SECTION_HEADER_LEN: usize = 6;

/// Version string recorded in manifest entries, e.g. `"1.0.0"`.
pub fn ir_version_string() -> String {
    format!("{IR_MAJOR_VERSION}.{IR_MINOR_VERSION}.0")
}

/// Section type tags.
///
/// Sections, when present, appear in the fixed order Paint, Path, Command.
/// `Info` and `Extension` are reserved by the format; the encoder never
/// emits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum SectionType {
    Info = 0x01,
    Paint = 0x02,
    Path = 0x03,
    Command = 0x04,
    Extension = 0xFF,
}

/// Command opcodes. Each opcode implies a fixed argument layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// End of stream sentinel, no arguments.
    End = 0x00,
    /// Push graphics state, no arguments.
    Save = 0x01,
    /// Pop graphics state, no arguments.
    Restore = 0x02,
    /// Clear canvas: rgba (u32).
    Clear = 0x10,
    /// Set fill paint and rule: paint_id (u16), rule (u8).
    SetFill = 0x30,
    /// Set stroke paint and params: paint_id (u16), width (f32), opts (u8).
    SetStroke = 0x31,
    /// Fill path at index: path_id (u16).
    FillPath = 0x40,
    /// Stroke path at index: path_id (u16).
    StrokePath = 0x41,
}

/// Fill rule carried by `SetFill`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum FillRule {
    #[default]
    NonZero = 0,
    EvenOdd = 1,
}

/// Stroke cap, bits 0-1 of the stroke options byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum StrokeCap {
    #[default]
    Butt = 0,
    Round = 1,
    Square = 2,
}

/// Stroke join, bits 2-3 of the stroke options byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum StrokeJoin {
    #[default]
    Miter = 0,
    Round = 1,
    Bevel = 2,
}

/// Pack stroke cap and join into the single options byte of `SetStroke`.
pub fn pack_stroke_options(cap: StrokeCap, join: StrokeJoin) -> u8 {
    cap as u8 | (join as u8) << 2
}
