//! Line-oriented vessel persistence
//!
//! The on-disk form is a plain text record, one field per header line
//! followed by one line per member:
//!
//! ```text
//! owner
//! world-name
//! HEADING
//! member-count
//! x,y,z,MATERIAL,data
//! ...
//! ```
//!
//! Loading then saving an unmodified vessel reproduces the file byte
//! for byte (member order is preserved).

use crate::block::{BlockSample, Material};
use crate::heading::Heading;
use crate::scan::Topology;
use crate::vessel::Vessel;
use glam::IVec3;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// A vessel record that cannot be read back.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to read vessel record")]
    Io(#[from] io::Error),

    #[error("record ends before the {expected} line")]
    MissingLine { expected: &'static str },

    #[error("unknown heading {found:?}")]
    UnknownHeading { found: String },

    #[error("line {line}: unknown material {found:?}")]
    UnknownMaterial { line: usize, found: String },

    #[error("line {line}: invalid number {found:?}")]
    InvalidNumber { line: usize, found: String },

    #[error("line {line}: expected 5 fields, found {found}")]
    WrongFieldCount { line: usize, found: usize },
}

/// Write `vessel` in the persisted line format.
pub fn save<W: Write>(vessel: &Vessel, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", vessel.owner())?;
    writeln!(writer, "{}", vessel.world())?;
    writeln!(writer, "{}", vessel.heading())?;
    writeln!(writer, "{}", vessel.len())?;
    for member in vessel.members() {
        writeln!(
            writer,
            "{},{},{},{},{}",
            member.pos.x, member.pos.y, member.pos.z, member.material, member.data
        )?;
    }
    Ok(())
}

/// Read a vessel back from the persisted line format.
///
/// The record does not carry the scan topology; reloaded vessels
/// rescan with the 26-neighbor mode.
pub fn load<R: BufRead>(reader: R) -> Result<Vessel, PersistError> {
    let mut lines = reader.lines();

    let owner = next_line(&mut lines, "owner")?;
    let world = next_line(&mut lines, "world")?;

    let heading_name = next_line(&mut lines, "heading")?;
    let heading = Heading::from_name(&heading_name).ok_or(PersistError::UnknownHeading {
        found: heading_name,
    })?;

    let count_text = next_line(&mut lines, "member count")?;
    let count: usize = count_text
        .parse()
        .map_err(|_| PersistError::InvalidNumber {
            line: 4,
            found: count_text,
        })?;

    let mut members = Vec::with_capacity(count);
    for i in 0..count {
        let line_no = 5 + i;
        let line = next_line(&mut lines, "member")?;
        members.push(parse_member(&line, line_no)?);
    }

    Ok(Vessel::assemble(
        owner,
        world,
        heading,
        Topology::Moore26,
        members,
    ))
}

fn next_line<R: BufRead>(
    lines: &mut io::Lines<R>,
    expected: &'static str,
) -> Result<String, PersistError> {
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(PersistError::MissingLine { expected }),
    }
}

fn parse_member(line: &str, line_no: usize) -> Result<BlockSample, PersistError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 5 {
        return Err(PersistError::WrongFieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let number = |text: &str| -> Result<i32, PersistError> {
        text.parse().map_err(|_| PersistError::InvalidNumber {
            line: line_no,
            found: text.to_string(),
        })
    };

    let x = number(fields[0])?;
    let y = number(fields[1])?;
    let z = number(fields[2])?;

    let material = Material::from_name(fields[3]).ok_or_else(|| PersistError::UnknownMaterial {
        line: line_no,
        found: fields[3].to_string(),
    })?;

    let data: u8 = fields[4].parse().map_err(|_| PersistError::InvalidNumber {
        line: line_no,
        found: fields[4].to_string(),
    })?;

    Ok(BlockSample::new(IVec3::new(x, y, z), material, data))
}

/// Save a vessel to `path`, creating or truncating the file.
pub fn save_to_path(vessel: &Vessel, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    save(vessel, &mut writer)?;
    writer.flush()
}

/// Load a vessel from `path`.
pub fn load_from_path(path: &Path) -> Result<Vessel, PersistError> {
    let reader = BufReader::new(File::open(path)?);
    load(reader)
}
