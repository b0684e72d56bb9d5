// Synthetic 1.44MB floppy images

use alloc::vec;
use alloc::vec::Vec;

use crate::region::boot;
use crate::region::dir;

pub(crate) const SIZE: usize = 2880 * 512;
pub(crate) const FAT_OFFSET: usize = 0x200;
pub(crate) const FAT_LENGTH: usize = 9 * 512;
pub(crate) const ROOT_DIR_OFFSET: usize = 0x2600;
pub(crate) const DATA_OFFSET: usize = 0x4200;

pub(crate) struct Floppy {
    pub bytes: Vec<u8>,
}

impl Floppy {
    pub fn new() -> Self {
        let mut bytes = vec![0u8; SIZE];
        bytes[..3].copy_from_slice(&hex!("EB 3C 90"));
        bytes[boot::OEM_SIGNATURE..][..8].copy_from_slice(b"MSDOS5.0");
        bytes[boot::BYTES_PER_SECTOR..][..2].copy_from_slice(&512u16.to_le_bytes());
        bytes[boot::SECTORS_PER_CLUSTER] = 1;
        bytes[boot::RESERVED_SECTORS..][..2].copy_from_slice(&1u16.to_le_bytes());
        bytes[boot::NUMBER_OF_FATS] = 2;
        bytes[boot::ROOT_DIR_ENTRIES..][..2].copy_from_slice(&224u16.to_le_bytes());
        bytes[boot::TOTAL_SECTORS..][..2].copy_from_slice(&2880u16.to_le_bytes());
        bytes[boot::MEDIA_DESCRIPTOR] = 0xF0;
        bytes[boot::SECTORS_PER_FAT..][..2].copy_from_slice(&9u16.to_le_bytes());
        bytes[38] = 0x29;
        bytes[boot::VOLUME_LABEL..][..11].copy_from_slice(b"BOOTDISK   ");
        bytes[boot::FILESYSTEM_ID..][..8].copy_from_slice(b"FAT12   ");
        bytes[510..512].copy_from_slice(&hex!("55 AA"));
        Self { bytes }.fat(0, 0xFF0).fat(1, 0xFFF)
    }

    /// Same value into both FATs
    pub fn fat(mut self, cluster: u16, value: u16) -> Self {
        for copy in 0..2 {
            let offset = FAT_OFFSET + copy * FAT_LENGTH + cluster as usize * 3 / 2;
            let word = u16::from_le_bytes([self.bytes[offset], self.bytes[offset + 1]]);
            let word = match cluster % 2 {
                0 => (word & 0xF000) | (value & 0x0FFF),
                _ => (word & 0x000F) | ((value & 0x0FFF) << 4),
            };
            self.bytes[offset..offset + 2].copy_from_slice(&word.to_le_bytes());
        }
        self
    }

    /// Raw slot, `name` holds 8.3 name space padded
    pub fn slot(mut self, index: usize, name: &[u8; 11], attributes: u8, cluster: u16, size: u32) -> Self {
        let offset = ROOT_DIR_OFFSET + index * dir::ENTRY_SIZE;
        let slot = &mut self.bytes[offset..offset + dir::ENTRY_SIZE];
        slot.fill(0);
        slot[dir::NAME..dir::NAME + 11].copy_from_slice(name);
        slot[dir::ATTRIBUTES] = attributes;
        slot[dir::FIRST_CLUSTER..][..2].copy_from_slice(&cluster.to_le_bytes());
        slot[dir::FILE_SIZE..][..4].copy_from_slice(&size.to_le_bytes());
        self
    }

    pub fn modified(mut self, index: usize, date: u16, time: u16) -> Self {
        let offset = ROOT_DIR_OFFSET + index * dir::ENTRY_SIZE;
        self.bytes[offset + dir::LAST_MODIFIED_TIME..][..2].copy_from_slice(&time.to_le_bytes());
        self.bytes[offset + dir::LAST_MODIFIED_DATE..][..2].copy_from_slice(&date.to_le_bytes());
        self
    }

    pub fn data(mut self, cluster: u16, data: &[u8]) -> Self {
        let offset = DATA_OFFSET + (cluster as usize - 2) * 512;
        self.bytes[offset..offset + data.len()].copy_from_slice(data);
        self
    }
}
