// Boot sector, BIOS parameter block

use crate::endian::ByteReader;
use crate::error::Error;
use crate::fs::VolumeGeometry;

pub(crate) const OEM_SIGNATURE: usize = 3;
pub(crate) const BYTES_PER_SECTOR: usize = 11;
pub(crate) const SECTORS_PER_CLUSTER: usize = 13;
pub(crate) const RESERVED_SECTORS: usize = 14;
pub(crate) const NUMBER_OF_FATS: usize = 16;
pub(crate) const ROOT_DIR_ENTRIES: usize = 17;
pub(crate) const TOTAL_SECTORS: usize = 19;
pub(crate) const MEDIA_DESCRIPTOR: usize = 21;
pub(crate) const SECTORS_PER_FAT: usize = 22;
pub(crate) const VOLUME_LABEL: usize = 43;
pub(crate) const FILESYSTEM_ID: usize = 54;

/// Through end of filesystem identifier
pub(crate) const MIN_SIZE: usize = FILESYSTEM_ID + 8;

pub(crate) fn parse(bytes: &[u8]) -> Result<VolumeGeometry, Error> {
    let reader = ByteReader::new(bytes);
    if reader.len() < MIN_SIZE {
        return Err(Error::TruncatedImage { required: MIN_SIZE, actual: reader.len() });
    }
    let geometry = VolumeGeometry {
        oem_signature: reader.read_fixed(OEM_SIGNATURE)?,
        bytes_per_sector: reader.read_u16(BYTES_PER_SECTOR)?,
        sectors_per_cluster: reader.read_u8(SECTORS_PER_CLUSTER)?,
        reserved_sectors: reader.read_u16(RESERVED_SECTORS)?,
        number_of_fats: reader.read_u8(NUMBER_OF_FATS)? as i8,
        root_dir_entries: reader.read_i16(ROOT_DIR_ENTRIES)?,
        total_sectors: reader.read_i16(TOTAL_SECTORS)? as i32,
        media_descriptor: reader.read_u8(MEDIA_DESCRIPTOR)?.into(),
        sectors_per_fat: reader.read_u16(SECTORS_PER_FAT)?,
        volume_label: reader.read_fixed(VOLUME_LABEL)?,
        filesystem_id: reader.read_fixed(FILESYSTEM_ID)?,
    };
    validate(&geometry)?;
    debug!(
        "FAT offset {:#X} root directory offset {:#X} cluster size {}",
        geometry.fat_offset(),
        geometry.root_dir_offset(),
        geometry.cluster_size()
    );

    let required = (geometry.root_dir_offset() + geometry.root_dir_length()) as usize;
    if reader.len() < required {
        return Err(Error::TruncatedImage { required, actual: reader.len() });
    }
    Ok(geometry)
}

fn validate(geometry: &VolumeGeometry) -> Result<(), Error> {
    if geometry.bytes_per_sector == 0 {
        return Err(Error::InvalidGeometry("zero bytes per sector"));
    }
    if geometry.sectors_per_cluster == 0 {
        return Err(Error::InvalidGeometry("zero sectors per cluster"));
    }
    if geometry.number_of_fats <= 0 {
        return Err(Error::InvalidGeometry("no FAT present"));
    }
    if geometry.root_dir_entries < 0 {
        return Err(Error::InvalidGeometry("negative root directory entries"));
    }
    let sectors = geometry.reserved_sectors as i64
        + geometry.sectors_per_fat as i64 * geometry.number_of_fats as i64;
    if geometry.total_sectors > 0 && sectors > geometry.total_sectors as i64 {
        warn!("FAT region exceeds total sectors {}", geometry.total_sectors);
    }
    Ok(())
}
