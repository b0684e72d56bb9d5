use std::io::Write;

use fat12::VolumeImage;

use crate::error::Error;

macro_rules! field {
    ($out:expr, $label:expr, $value:expr) => {
        writeln!($out, "{:<23}: {}", $label, $value)
    };
}

pub fn details<W: Write>(out: &mut W, image: &VolumeImage) -> Result<(), Error> {
    let geometry = image.geometry();
    field!(out, "Data size", image.data_size())?;
    field!(out, "Signature", geometry.oem_signature)?;
    field!(out, "Block size", geometry.bytes_per_sector)?;
    field!(out, "Sectors per cluster", geometry.sectors_per_cluster)?;
    field!(out, "Cluster size", geometry.cluster_size())?;
    field!(out, "Num of reserved blocks", geometry.reserved_sectors)?;
    field!(out, "Num of FAT", geometry.number_of_fats)?;
    field!(out, "Sectors per FAT", geometry.sectors_per_fat)?;
    field!(out, "Root directory entries", geometry.root_dir_entries)?;
    field!(out, "Total blocks on disk", geometry.total_sectors)?;
    field!(out, "Volume label", image.volume_label())?;
    field!(out, "File System Identifier", geometry.filesystem_id)?;
    field!(out, "Media type descriptor", geometry.media_descriptor.description())?;
    Ok(())
}

pub fn extended<W: Write>(out: &mut W, image: &VolumeImage) -> Result<(), Error> {
    let geometry = image.geometry();
    field!(out, "First FAT offset", format_args!("{:#06X}", geometry.fat_offset()))?;
    field!(out, "Root directory offset", format_args!("{:#06X}", geometry.root_dir_offset()))?;
    Ok(())
}
