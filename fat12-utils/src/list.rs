use std::io::Write;

use chrono::NaiveDateTime;
use fat12::VolumeImage;

use crate::error::Error;

pub fn list<W: Write>(out: &mut W, image: &VolumeImage, path: &str, long: bool) -> Result<(), Error> {
    for entry in image.list(path)? {
        if !long {
            writeln!(out, "{}", entry.full_name())?;
            continue;
        }
        let attrs = entry.attributes;
        write!(out, "{}", if attrs.directory() { "d" } else { "-" })?;
        write!(out, "{}", if attrs.read_only() { "r" } else { "-" })?;
        write!(out, "{}", if attrs.system() { "s" } else { "-" })?;
        write!(out, "{}", if attrs.hidden() { "h" } else { "-" })?;
        write!(out, "{}", if attrs.archive() { "a" } else { "-" })?;
        write!(out, " {:8}", entry.file_size)?;
        write!(out, " {:4}", u16::from(entry.first_cluster))?;
        let modified = entry.last_modified;
        match NaiveDateTime::try_from(modified) {
            Ok(modified_at) if !modified.is_zero() => {
                write!(out, " {}", modified_at.format("%Y-%m-%d %H:%M:%S"))?
            }
            _ => write!(out, " {:19}", "-")?,
        }
        if attrs.directory() {
            writeln!(out, " {}\\", entry.full_name())?;
        } else {
            writeln!(out, " {}", entry.full_name())?;
        }
    }
    Ok(())
}
