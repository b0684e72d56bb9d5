use alloc::vec::Vec;

use crate::directory::{DirectoryEntry, RootDirectory};
use crate::endian::ByteReader;
use crate::error::Error;
use crate::fat::FAT;
use crate::fs::VolumeGeometry;
use crate::types::ClusterID;

/// The only directory reachable, subdirectories are not traversed
pub const ROOT: &str = "\\";

pub(crate) fn root<'a>(
    bytes: &'a [u8],
    geometry: &VolumeGeometry,
    path: &str,
) -> Result<RootDirectory<'a>, Error> {
    match path {
        ROOT => Ok(RootDirectory::new(bytes, geometry)),
        _ => Err(Error::PathNotFound),
    }
}

/// Case sensitive match on trimmed name and extension
pub fn resolve(
    bytes: &[u8],
    geometry: &VolumeGeometry,
    path: &str,
    name: &str,
    extension: &str,
) -> Result<DirectoryEntry, Error> {
    let (name, extension) = (name.trim(), extension.trim());
    let mut matches: Vec<_> = root(bytes, geometry, path)?
        .scan()?
        .into_iter()
        .filter(|entry| entry.name() == name && entry.extension() == extension)
        .collect();
    match matches.len() {
        0 => Err(Error::FileNotFound),
        1 => Ok(matches.remove(0)),
        count => {
            warn!("{} entries named {}.{}", count, name, extension);
            Err(Error::DuplicateFileFound(count))
        }
    }
}

pub fn cluster_chain(
    bytes: &[u8],
    geometry: &VolumeGeometry,
    path: &str,
    name: &str,
    extension: &str,
) -> Result<Vec<ClusterID>, Error> {
    let entry = resolve(bytes, geometry, path, name, extension)?;
    debug!("{} starts at cluster {}", entry.full_name(), entry.first_cluster);
    FAT::new(bytes, geometry).clusters(entry.first_cluster)
}

/// File content, clusters concatenated and cut to file size
pub fn read_file(
    bytes: &[u8],
    geometry: &VolumeGeometry,
    path: &str,
    name: &str,
    extension: &str,
) -> Result<Vec<u8>, Error> {
    let entry = resolve(bytes, geometry, path, name, extension)?;
    let reader = ByteReader::new(bytes);
    let cluster_size = geometry.cluster_size() as usize;
    let file_size = entry.file_size as usize;
    let chain = FAT::new(bytes, geometry).clusters(entry.first_cluster)?;
    // Directory entry size is untrusted, the chain bounds what can be read
    let mut data = Vec::with_capacity(file_size.min(chain.len().saturating_mul(cluster_size)));
    for cluster in chain {
        let offset = match geometry.cluster_offset(cluster) {
            Some(offset) => offset as usize,
            None => break,
        };
        let length = cluster_size.min(file_size - data.len());
        if length == 0 {
            break;
        }
        data.extend_from_slice(reader.bytes(offset, length)?);
    }
    if data.len() < file_size {
        warn!("Chain of {} holds {} of {} bytes", entry.full_name(), data.len(), file_size);
    }
    Ok(data)
}

fn label_entry<'a>(bytes: &'a [u8], geometry: &VolumeGeometry) -> Result<Option<&'a str>, Error> {
    let root = RootDirectory::new(bytes, geometry);
    let entries = root.scan()?;
    match entries.iter().find(|entry| entry.is_volume_label() && !entry.is_system()) {
        Some(entry) => Ok(Some(root.label(entry)?.trim())),
        None => Ok(None),
    }
}

/// Root directory label entry if any, boot sector label otherwise
pub fn volume_label(bytes: &[u8], geometry: &VolumeGeometry) -> heapless::String<11> {
    let label = match label_entry(bytes, geometry) {
        Ok(Some(label)) => label,
        Ok(None) => {
            debug!("No volume label entry in root directory");
            geometry.volume_label()
        }
        Err(e) => {
            warn!("Volume label lookup failed: {}", e);
            geometry.volume_label()
        }
    };
    let mut string = heapless::String::new();
    // never longer than 11 bytes
    let _ = string.push_str(label);
    string
}
