use std::io::Write;

use fat12::VolumeImage;

use crate::error::Error;

pub fn boot_sector<W: Write>(out: &mut W, image: &VolumeImage) -> Result<(), Error> {
    writeln!(out, "{}", pretty_hex::pretty_hex(&image.boot_sector()))?;
    Ok(())
}
