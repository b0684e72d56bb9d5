use core::fmt::Write;

use alloc::vec::Vec;

use crate::endian::ByteReader;
use crate::error::Error;
use crate::fs::VolumeGeometry;
use crate::region::dir::{self, is_allowable, Attributes, Timestamp, ENTRY_SIZE};
use crate::types::ClusterID;

/// Root directory entry, built per scan and never cached
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub(crate) slot: usize,
    name: heapless::String<8>,
    extension: heapless::String<3>,
    pub attributes: Attributes,
    pub first_cluster: ClusterID,
    pub file_size: u32,
    pub last_modified: Timestamp,
}

impl DirectoryEntry {
    pub fn name(&self) -> &str {
        self.name.trim()
    }

    /// Empty when extension does not lead with an allowable character
    pub fn extension(&self) -> &str {
        self.extension.trim()
    }

    pub fn full_name(&self) -> heapless::String<12> {
        let mut full_name = heapless::String::new();
        // 8 + 1 + 3 always fits
        let _ = match self.extension() {
            "" => write!(full_name, "{}", self.name()),
            extension => write!(full_name, "{}.{}", self.name(), extension),
        };
        full_name
    }

    /// Index of slot within root directory
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn is_read_only(&self) -> bool {
        self.attributes.read_only()
    }

    pub fn is_hidden(&self) -> bool {
        self.attributes.hidden()
    }

    pub fn is_system(&self) -> bool {
        self.attributes.system()
    }

    pub fn is_volume_label(&self) -> bool {
        self.attributes.volume_label()
    }

    pub fn is_directory(&self) -> bool {
        self.attributes.directory()
    }

    pub fn is_archive(&self) -> bool {
        self.attributes.archive()
    }

    pub fn is_device(&self) -> bool {
        self.attributes.device()
    }
}

pub(crate) struct RootDirectory<'a> {
    reader: ByteReader<'a>,
    offset: usize,
    entries: usize,
}

impl<'a> RootDirectory<'a> {
    pub fn new(bytes: &'a [u8], geometry: &VolumeGeometry) -> Self {
        Self {
            reader: ByteReader::new(bytes),
            offset: geometry.root_dir_offset() as usize,
            entries: geometry.root_dir_entries.max(0) as usize,
        }
    }

    fn slot_offset(&self, slot: usize) -> usize {
        self.offset + slot * ENTRY_SIZE
    }

    fn entry(&self, slot: usize) -> Result<Option<DirectoryEntry>, Error> {
        let offset = self.slot_offset(slot);
        let lead = self.reader.read_u8(offset + dir::NAME)?;
        match lead {
            dir::END_OF_DIRECTORY | dir::ESCAPED_E5 | dir::DELETED => return Ok(None),
            byte if !is_allowable(byte) => {
                trace!("Slot {} dropped, lead byte {:#04X}", slot, byte);
                return Ok(None);
            }
            _ => (),
        }
        let attributes = self.reader.read_u8(offset + dir::ATTRIBUTES)?;
        if attributes == dir::LONG_NAME {
            trace!("Slot {} skipped, long name entry", slot);
            return Ok(None);
        }
        let extension = match is_allowable(self.reader.read_u8(offset + dir::EXTENSION)?) {
            true => self.reader.read_fixed(offset + dir::EXTENSION)?,
            false => heapless::String::new(),
        };
        let date = self.reader.read_u16(offset + dir::LAST_MODIFIED_DATE)?;
        let time = self.reader.read_u16(offset + dir::LAST_MODIFIED_TIME)?;
        let entry = DirectoryEntry {
            slot,
            name: self.reader.read_fixed(offset + dir::NAME)?,
            extension,
            attributes: attributes.into(),
            first_cluster: self.reader.read_u16(offset + dir::FIRST_CLUSTER)?.into(),
            file_size: self.reader.read_u32(offset + dir::FILE_SIZE)?,
            last_modified: Timestamp::new(date, time),
        };
        trace!("Slot {} holds {:?}", slot, entry);
        Ok(Some(entry))
    }

    /// Visits `root_dir_entries + 1` slots, one past the declared count
    pub fn scan(&self) -> Result<Vec<DirectoryEntry>, Error> {
        let mut entries = Vec::new();
        for slot in 0..=self.entries {
            if let Some(entry) = self.entry(slot)? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    /// Raw 11-byte name of a slot, used by volume labels
    pub fn label(&self, entry: &DirectoryEntry) -> Result<&'a str, Error> {
        let length = dir::NAME_LENGTH + dir::EXTENSION_LENGTH;
        self.reader.read_fixed_string(self.slot_offset(entry.slot) + dir::NAME, length)
    }
}

pub fn scan_root(bytes: &[u8], geometry: &VolumeGeometry) -> Result<Vec<DirectoryEntry>, Error> {
    RootDirectory::new(bytes, geometry).scan()
}

/// Entries shown to users, volume labels and devices excluded
pub fn list_visible(
    bytes: &[u8],
    geometry: &VolumeGeometry,
) -> Result<Vec<DirectoryEntry>, Error> {
    let mut entries = scan_root(bytes, geometry)?;
    entries.retain(|entry| entry.attributes.visible());
    Ok(entries)
}

#[cfg(test)]
mod test {
    use super::{list_visible, scan_root};
    use crate::error::Error;
    use crate::region::boot;
    use crate::testing::{Floppy, ROOT_DIR_OFFSET};
    use crate::types::ClusterID;

    fn floppy() -> Floppy {
        Floppy::new()
            .slot(0, b"BOOTDISK   ", 0x08, 0, 0)
            .slot(1, b"IO      SYS", 0x07, 2, 40566)
            .slot(2, b"COMMAND COM", 0x20, 82, 54645)
            .slot(3, b"\xE5ELETED TXT", 0x20, 190, 12)
            .slot(4, b"\x05SCAPED TXT", 0x20, 191, 12)
            .slot(6, b"_LOG       ", 0x20, 192, 100)
            .slot(7, b"#HASH   TXT", 0x20, 193, 100)
            .slot(8, b"~TMP    TXT", 0x20, 194, 100)
            .slot(9, b"CONFIG  ~1 ", 0x20, 195, 100)
            .slot(10, b"SUBDIR     ", 0x10, 196, 0)
            .slot(11, b"CON        ", 0x40, 0, 0)
    }

    #[test]
    fn test_scan() {
        let floppy = floppy();
        let geometry = boot::parse(&floppy.bytes).unwrap();
        let entries = scan_root(&floppy.bytes, &geometry).unwrap();
        let names: Vec<_> = entries.iter().map(|entry| entry.full_name()).collect();
        let expected = [
            "BOOTDISK", "IO.SYS", "COMMAND.COM", "_LOG", "#HASH.TXT", "CONFIG", "SUBDIR", "CON",
        ];
        assert_eq!(names, expected);
        let slots: Vec<_> = entries.iter().map(|entry| entry.slot()).collect();
        assert_eq!(slots, [0, 1, 2, 6, 7, 9, 10, 11]);

        let command = &entries[2];
        assert_eq!(command.name(), "COMMAND");
        assert_eq!(command.extension(), "COM");
        assert_eq!(command.first_cluster, ClusterID::from(82));
        assert_eq!(command.file_size, 54645);
        assert!(command.is_archive());
        let io = &entries[1];
        assert!(io.is_read_only() && io.is_hidden() && io.is_system());
        assert!(entries[0].is_volume_label());
        assert!(entries[6].is_directory());
        assert!(entries[7].is_device());
    }

    #[test]
    fn test_scan_skips_free_slots() {
        let floppy = floppy();
        let geometry = boot::parse(&floppy.bytes).unwrap();
        for entry in scan_root(&floppy.bytes, &geometry).unwrap() {
            let lead = floppy.bytes[ROOT_DIR_OFFSET + entry.slot() * 32];
            assert!(![0x00, 0x05, 0xE5].contains(&lead));
        }
    }

    #[test]
    fn test_scan_reads_extra_slot() {
        let floppy = Floppy::new().slot(224, b"EXTRA      ", 0x20, 0, 0);
        let geometry = boot::parse(&floppy.bytes).unwrap();
        let entries = scan_root(&floppy.bytes, &geometry).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "EXTRA");
        assert_eq!(entries[0].slot(), 224);
    }

    #[test]
    fn test_scan_out_of_range() {
        let floppy = Floppy::new();
        let geometry = boot::parse(&floppy.bytes).unwrap();
        let end = ROOT_DIR_OFFSET + 224 * 32;
        match scan_root(&floppy.bytes[..end], &geometry) {
            Err(Error::OutOfRange { offset, .. }) => assert_eq!(offset, end),
            result => panic!("Unexpected {:?}", result),
        }
    }

    #[test]
    fn test_invalid_name_encoding() {
        let floppy = Floppy::new().slot(0, b"AB\xFFD    TXT", 0x20, 2, 1);
        let geometry = boot::parse(&floppy.bytes).unwrap();
        let result = scan_root(&floppy.bytes, &geometry);
        assert!(matches!(result, Err(Error::InvalidEncoding { offset: ROOT_DIR_OFFSET })));
    }

    #[test]
    fn test_scan_skips_long_name() {
        let long_name = [0x41, b'a', 0, b'b', 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF];
        let floppy = Floppy::new()
            .slot(0, &long_name, 0x0F, 0, 0)
            .slot(1, b"README  TXT", 0x20, 2, 1500);
        let geometry = boot::parse(&floppy.bytes).unwrap();
        let entries = list_visible(&floppy.bytes, &geometry).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].full_name(), "README.TXT");
        assert_eq!(entries[0].slot(), 1);
    }

    #[test]
    fn test_list_visible() {
        let floppy = floppy();
        let geometry = boot::parse(&floppy.bytes).unwrap();
        let entries = list_visible(&floppy.bytes, &geometry).unwrap();
        let names: Vec<_> = entries.iter().map(|entry| entry.full_name()).collect();
        assert_eq!(names, ["IO.SYS", "COMMAND.COM", "_LOG", "#HASH.TXT", "CONFIG", "SUBDIR"]);
        for entry in entries {
            assert!(!entry.is_volume_label() && !entry.is_device());
        }
    }

    #[test]
    fn test_last_modified() {
        let date = (37 << 9) | (11 << 5) | 17;
        let floppy = floppy().modified(2, date, 12 << 11);
        let geometry = boot::parse(&floppy.bytes).unwrap();
        let entries = scan_root(&floppy.bytes, &geometry).unwrap();
        let timestamp = entries[2].last_modified;
        assert_eq!((timestamp.year(), timestamp.month(), timestamp.day()), (2017, 11, 17));
        assert_eq!(timestamp.hour(), 12);
        assert!(entries[1].last_modified.is_zero());
    }
}
