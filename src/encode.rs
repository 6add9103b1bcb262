//! Section encoders and container assembly.
//!
//! Each encoder turns one model collection into its section payload,
//! independent of the others. `encode_container` concatenates the present
//! sections in the fixed Paint, Path, Command order, computes a CRC-32 over
//! the section bytes only, and prepends the 16-byte file header.

use crate::{
    command::Command,
    format::{
        HEADER_LEN, IR_MAGIC, IR_MAJOR_VERSION, IR_MINOR_VERSION, Opcode, SECTION_HEADER_LEN,
        SectionType, pack_stroke_options,
    },
    geometry::Path,
    paint::{GradientStop, Paint},
};

fn put_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn put_f32(buf: &mut Vec<u8>, v: f32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn put_stops(buf: &mut Vec<u8>, stops: &[GradientStop]) {
    put_u16(buf, stops.len() as u16);
    for stop in stops {
        put_f32(buf, stop.offset);
        put_u32(buf, stop.color);
    }
}

/// Paint section payload: u16 count, then per paint a u8 type tag followed
/// by tag-specific fields.
pub fn encode_paint_section(paints: &[Paint]) -> Vec<u8> {
    let mut buf = Vec::new();
    put_u16(&mut buf, paints.len() as u16);
    for paint in paints {
        buf.push(paint.paint_type() as u8);
        match paint {
            Paint::Solid { color } => put_u32(&mut buf, *color),
            Paint::Linear {
                x0,
                y0,
                x1,
                y1,
                stops,
            } => {
                put_f32(&mut buf, *x0);
                put_f32(&mut buf, *y0);
                put_f32(&mut buf, *x1);
                put_f32(&mut buf, *y1);
                put_stops(&mut buf, stops);
            }
            Paint::Radial { cx, cy, r, stops } => {
                put_f32(&mut buf, *cx);
                put_f32(&mut buf, *cy);
                put_f32(&mut buf, *r);
                put_stops(&mut buf, stops);
            }
        }
    }
    buf
}

/// Path section payload: u16 count, then per path u16 verb count, u16 point
/// count, the verbs as u8s, and the flat f32 coordinates.
pub fn encode_path_section(paths: &[Path]) -> Vec<u8> {
    let mut buf = Vec::new();
    put_u16(&mut buf, paths.len() as u16);
    for path in paths {
        put_u16(&mut buf, path.verbs.len() as u16);
        put_u16(&mut buf, path.points.len() as u16);
        for &verb in &path.verbs {
            buf.push(verb as u8);
        }
        for &pt in &path.points {
            put_f32(&mut buf, pt);
        }
    }
    buf
}

/// Command section payload: one (u8 opcode + fixed args) per command, always
/// terminated by a trailing `End` sentinel.
pub fn encode_command_section(commands: &[Command]) -> Vec<u8> {
    let mut buf = Vec::new();
    for cmd in commands {
        buf.push(cmd.opcode() as u8);
        match *cmd {
            Command::Save | Command::Restore => {}
            Command::Clear { rgba } => put_u32(&mut buf, rgba),
            Command::SetFill { paint_id, rule } => {
                put_u16(&mut buf, paint_id);
                buf.push(rule as u8);
            }
            Command::SetStroke {
                paint_id,
                width,
                cap,
                join,
            } => {
                put_u16(&mut buf, paint_id);
                put_f32(&mut buf, width);
                buf.push(pack_stroke_options(cap, join));
            }
            Command::FillPath { path_id } | Command::StrokePath { path_id } => {
                put_u16(&mut buf, path_id);
            }
        }
    }
    buf.push(Opcode::End as u8);
    buf
}

/// Wrap a payload in the uniform section sub-header: u8 type, u8 reserved,
/// u32 length counted from the start of the sub-header inclusive.
pub fn wrap_section(ty: SectionType, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(SECTION_HEADER_LEN + payload.len());
    buf.push(ty as u8);
    buf.push(0);
    put_u32(&mut buf, (SECTION_HEADER_LEN + payload.len()) as u32);
    buf.extend_from_slice(payload);
    buf
}

/// Assemble the full container. Empty collections produce no section at all
/// rather than an empty one. Output is deterministic for identical inputs.
pub fn encode_container(paints: &[Paint], paths: &[Path], commands: &[Command]) -> Vec<u8> {
    let mut sections = Vec::new();
    if !paints.is_empty() {
        sections.extend(wrap_section(SectionType::Paint, &encode_paint_section(paints)));
    }
    if !paths.is_empty() {
        sections.extend(wrap_section(SectionType::Path, &encode_path_section(paths)));
    }
    if !commands.is_empty() {
        sections.extend(wrap_section(
            SectionType::Command,
            &encode_command_section(commands),
        ));
    }

    let checksum = crc32fast::hash(&sections);

    let mut out = Vec::with_capacity(HEADER_LEN + sections.len());
    out.extend_from_slice(&IR_MAGIC);
    out.push(IR_MAJOR_VERSION);
    out.push(IR_MINOR_VERSION);
    put_u16(&mut out, 0);
    put_u32(&mut out, (HEADER_LEN + sections.len()) as u32);
    put_u32(&mut out, checksum);
    out.extend_from_slice(&sections);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FillRule;

    #[test]
    fn section_length_counts_its_own_header() {
        let wrapped = wrap_section(SectionType::Paint, &[1, 2, 3, 4]);
        assert_eq!(wrapped.len(), 10);
        assert_eq!(wrapped[0], 0x02);
        assert_eq!(wrapped[1], 0);
        assert_eq!(u32::from_le_bytes([wrapped[2], wrapped[3], wrapped[4], wrapped[5]]), 10);
    }

    #[test]
    fn solid_paint_entry_is_five_bytes() {
        let payload = encode_paint_section(&[Paint::solid(255, 0, 0, 255)]);
        assert_eq!(payload, vec![1, 0, 0, 0xFF, 0x00, 0x00, 0xFF]);
    }

    #[test]
    fn linear_paint_entry_layout() {
        let payload = encode_paint_section(&[Paint::linear(
            0.0,
            0.0,
            1.0,
            1.0,
            vec![
                GradientStop {
                    offset: 0.0,
                    color: 0xFF00_00FF,
                },
                GradientStop {
                    offset: 1.0,
                    color: 0xFFFF_FFFF,
                },
            ],
        )]);
        // count + tag + 4 f32 endpoints + stop count + 2 stops of 8 bytes.
        assert_eq!(payload.len(), 2 + 1 + 16 + 2 + 16);
        assert_eq!(payload[2], 1);
        assert_eq!(
            u16::from_le_bytes([payload[19], payload[20]]),
            2,
            "stop count follows endpoints"
        );
    }

    #[test]
    fn empty_command_stream_is_just_the_sentinel() {
        assert_eq!(encode_command_section(&[]), vec![0x00]);
    }

    #[test]
    fn sentinel_follows_the_last_command() {
        let payload = encode_command_section(&[Command::SetFill {
            paint_id: 7,
            rule: FillRule::EvenOdd,
        }]);
        assert_eq!(payload, vec![0x30, 7, 0, 1, 0x00]);
    }

    #[test]
    fn header_checksum_covers_section_bytes_only() {
        let bytes = encode_container(&[Paint::solid(1, 2, 3, 4)], &[], &[]);
        let stored = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
        assert_eq!(stored, crc32fast::hash(&bytes[HEADER_LEN..]));
    }

    #[test]
    fn empty_scene_is_header_only() {
        let bytes = encode_container(&[], &[], &[]);
        assert_eq!(bytes.len(), HEADER_LEN);
        assert_eq!(&bytes[..4], b"VGIR");
        let total = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        assert_eq!(total, HEADER_LEN as u32);
        // CRC over zero bytes.
        let stored = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
        assert_eq!(stored, crc32fast::hash(&[]));
    }
}
