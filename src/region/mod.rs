/// Boot sector, BIOS parameter block
/// [`reserved-sectors`][link] sectors, the first of which holds the BPB
///
/// [link]: crate::fs::VolumeGeometry
pub(crate) mod boot;

/// FAT region, 12-bit packed cluster chains
/// [`sectors-per-fat`][link] * [`number-of-fats`][link] sectors
///
/// [link]: crate::fs::VolumeGeometry
pub(crate) mod fat;

/// Root directory region, fixed number of 32-byte slots
pub mod dir;
