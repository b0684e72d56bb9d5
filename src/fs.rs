use derive_more::{From, Into};

use crate::region::dir::ENTRY_SIZE;
use crate::types::ClusterID;

const MEDIA_DESCRIPTORS: &[(u8, &str)] =
    &[(0xF0, "3.5 1.44MB/2.88MB or 5.25 1.2MB double-sided floppy")];

#[derive(Copy, Clone, Debug, Default, From, Into, Eq, PartialEq)]
pub struct MediaDescriptor(u8);

impl MediaDescriptor {
    pub fn description(&self) -> &'static str {
        match MEDIA_DESCRIPTORS.iter().find(|(byte, _)| *byte == self.0) {
            Some((_, description)) => description,
            None => "Unknown media type",
        }
    }
}

/// Volume parameters decoded from boot sector, fixed once image loaded
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VolumeGeometry {
    pub oem_signature: heapless::String<8>,
    pub bytes_per_sector: u16,
    pub sectors_per_cluster: u8,
    pub reserved_sectors: u16,
    pub number_of_fats: i8,
    pub root_dir_entries: i16,
    pub total_sectors: i32,
    pub media_descriptor: MediaDescriptor,
    pub sectors_per_fat: u16,
    /// Boot sector copy, root directory may carry another one
    pub volume_label: heapless::String<11>,
    pub filesystem_id: heapless::String<8>,
}

impl VolumeGeometry {
    pub fn cluster_size(&self) -> u32 {
        self.sectors_per_cluster as u32 * self.bytes_per_sector as u32
    }

    /// Byte offset of first FAT
    pub fn fat_offset(&self) -> u64 {
        self.reserved_sectors as u64 * self.bytes_per_sector as u64
    }

    /// Length in bytes of a single FAT
    pub fn fat_length(&self) -> u64 {
        self.sectors_per_fat as u64 * self.bytes_per_sector as u64
    }

    /// Number of entries a single FAT is able to hold
    pub fn fat_entries(&self) -> u64 {
        self.fat_length() * 2 / 3
    }

    pub fn root_dir_offset(&self) -> u64 {
        self.fat_offset() + self.fat_length() * self.number_of_fats.max(0) as u64
    }

    pub fn root_dir_length(&self) -> u64 {
        self.root_dir_entries.max(0) as u64 * ENTRY_SIZE as u64
    }

    /// Root directory is padded up to whole sectors
    pub fn data_region_offset(&self) -> u64 {
        let sector_size = (self.bytes_per_sector as u64).max(1);
        let sectors = self.root_dir_length().div_ceil(sector_size);
        self.root_dir_offset() + sectors * sector_size
    }

    pub fn cluster_offset(&self, cluster: ClusterID) -> Option<u64> {
        let cluster_size = self.cluster_size() as u64;
        match cluster.valid() {
            true => Some(self.data_region_offset() + cluster.offset() as u64 * cluster_size),
            false => None,
        }
    }

    pub fn volume_label(&self) -> &str {
        self.volume_label.trim()
    }
}
