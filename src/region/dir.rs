use bitfield::bitfield;
#[cfg(feature = "chrono")]
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use derive_more::{From, Into};

pub const ENTRY_SIZE: usize = 32;

pub(crate) const NAME: usize = 0;
pub(crate) const NAME_LENGTH: usize = 8;
pub(crate) const EXTENSION: usize = 8;
pub(crate) const EXTENSION_LENGTH: usize = 3;
pub(crate) const ATTRIBUTES: usize = 11;
pub(crate) const LAST_MODIFIED_TIME: usize = 22;
pub(crate) const LAST_MODIFIED_DATE: usize = 24;
pub(crate) const FIRST_CLUSTER: usize = 26;
pub(crate) const FILE_SIZE: usize = 28;

pub(crate) const END_OF_DIRECTORY: u8 = 0x00;
/// Lead byte 0xE5 stored as 0x05
pub(crate) const ESCAPED_E5: u8 = 0x05;
pub(crate) const DELETED: u8 = 0xE5;
/// Attribute byte of VFAT long name slots, which hold UTF-16 text
pub(crate) const LONG_NAME: u8 = 0x0F;

/// Stricter than FAT itself, entries leading with anything else are dropped
pub fn is_allowable(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'#'
}

bitfield! {
    #[derive(Copy, Clone, Default, Debug, From, Into, PartialEq, Eq)]
    pub struct Attributes(u8);
    pub read_only, set_read_only: 0;
    pub hidden, set_hidden: 1;
    pub system, set_system: 2;
    pub volume_label, set_volume_label: 3;
    pub directory, set_directory: 4;
    pub archive, set_archive: 5;
    pub device, set_device: 6;
}

impl Attributes {
    /// Volume labels and devices never show up in listings
    pub fn visible(&self) -> bool {
        !self.volume_label() && !self.device()
    }
}

bitfield! {
    /// DOS date in high half, time in low half
    #[derive(Copy, Clone, Default, Debug, From, Into, PartialEq, Eq)]
    pub struct Timestamp(u32);
    year_offset, _: 31, 25;
    pub month, _: 24, 21;
    pub day, _: 20, 16;
    pub hour, _: 15, 11;
    pub minute, _: 10, 5;
    double_second, _: 4, 0;
}

impl Timestamp {
    pub fn new(date: u16, time: u16) -> Self {
        Self((date as u32) << 16 | time as u32)
    }

    pub fn year(&self) -> u32 {
        self.year_offset() + 1980
    }

    pub fn second(&self) -> u32 {
        self.double_second() * 2
    }

    /// Slot carries no modification time
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Timestamp> for NaiveDateTime {
    type Error = ();
    fn try_from(timestamp: Timestamp) -> Result<NaiveDateTime, ()> {
        let (year, month, day) = (timestamp.year() as i32, timestamp.month(), timestamp.day());
        let date = NaiveDate::from_ymd_opt(year, month, day);
        let (hour, minute, second) = (timestamp.hour(), timestamp.minute(), timestamp.second());
        let time = NaiveTime::from_hms_opt(hour, minute, second);
        Ok(NaiveDateTime::new(date.ok_or(())?, time.ok_or(())?))
    }
}
