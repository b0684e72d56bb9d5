#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate hex_literal;
#[macro_use]
extern crate log;

pub mod directory;
mod endian;
pub mod error;
pub mod fat;
pub mod fs;
pub mod locator;
mod region;
#[cfg(test)]
mod testing;
pub mod types;

use alloc::vec::Vec;

pub use directory::DirectoryEntry;
use error::Error;
pub use fs::{MediaDescriptor, VolumeGeometry};
pub use locator::ROOT;
pub use region::dir::{Attributes, Timestamp};
use types::ClusterID;

/// Whole image held in memory, never written
pub struct VolumeImage<B = Vec<u8>> {
    bytes: B,
    geometry: VolumeGeometry,
}

impl<B: AsRef<[u8]>> VolumeImage<B> {
    pub fn new(bytes: B) -> Result<Self, Error> {
        let geometry = region::boot::parse(bytes.as_ref())?;
        debug!("Volume geometry {:?}", geometry);
        Ok(Self { bytes, geometry })
    }

    pub fn geometry(&self) -> &VolumeGeometry {
        &self.geometry
    }

    pub fn data_size(&self) -> usize {
        self.bytes.as_ref().len()
    }

    pub fn boot_sector(&self) -> &[u8] {
        let bytes = self.bytes.as_ref();
        &bytes[..bytes.len().min(self.geometry.bytes_per_sector as usize)]
    }

    /// Every accepted slot, volume labels and devices included
    pub fn root_entries(&self) -> Result<Vec<DirectoryEntry>, Error> {
        directory::scan_root(self.bytes.as_ref(), &self.geometry)
    }

    pub fn list(&self, path: &str) -> Result<Vec<DirectoryEntry>, Error> {
        locator::root(self.bytes.as_ref(), &self.geometry, path)?;
        directory::list_visible(self.bytes.as_ref(), &self.geometry)
    }

    pub fn resolve(&self, path: &str, name: &str, ext: &str) -> Result<DirectoryEntry, Error> {
        locator::resolve(self.bytes.as_ref(), &self.geometry, path, name, ext)
    }

    pub fn cluster_chain(&self, path: &str, name: &str, ext: &str) -> Result<Vec<ClusterID>, Error> {
        locator::cluster_chain(self.bytes.as_ref(), &self.geometry, path, name, ext)
    }

    pub fn successor_of(&self, cluster: ClusterID) -> Result<u16, Error> {
        fat::successor_of(self.bytes.as_ref(), &self.geometry, cluster)
    }

    pub fn read_file(&self, path: &str, name: &str, ext: &str) -> Result<Vec<u8>, Error> {
        locator::read_file(self.bytes.as_ref(), &self.geometry, path, name, ext)
    }

    pub fn volume_label(&self) -> heapless::String<11> {
        locator::volume_label(self.bytes.as_ref(), &self.geometry)
    }

    pub fn into_inner(self) -> B {
        self.bytes
    }
}

#[cfg(feature = "std")]
impl VolumeImage<Vec<u8>> {
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self, error::LoadError> {
        let bytes = std::fs::read(path)?;
        debug!("Loaded {} bytes", bytes.len());
        Ok(Self::new(bytes)?)
    }
}
