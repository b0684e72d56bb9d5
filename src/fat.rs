use alloc::vec::Vec;

use crate::endian::ByteReader;
use crate::error::Error;
use crate::fs::VolumeGeometry;
use crate::region::fat::Entry;
use crate::types::ClusterID;

/// First copy of the allocation table, others are never consulted
#[derive(Copy, Clone, Debug)]
pub struct FAT<'a> {
    reader: ByteReader<'a>,
    offset: usize,
    entries: usize,
}

impl<'a> FAT<'a> {
    pub fn new(bytes: &'a [u8], geometry: &VolumeGeometry) -> Self {
        Self {
            reader: ByteReader::new(bytes),
            offset: geometry.fat_offset() as usize,
            entries: geometry.fat_entries() as usize,
        }
    }

    /// Raw 12-bit value stored for `cluster`
    pub fn successor_of(&self, cluster: ClusterID) -> Result<u16, Error> {
        let index = u16::from(cluster) as usize;
        let value = self.reader.read_u16(self.offset + index * 3 / 2)?;
        Ok(match index % 2 {
            0 => value & 0x0FFF,
            _ => value >> 4,
        })
    }

    pub(crate) fn next_cluster(&self, cluster: ClusterID) -> Result<Entry, Error> {
        self.successor_of(cluster).map(Entry::from)
    }

    /// Always yields `first`, even when nothing is allocated to it
    pub fn clusters(&self, first: ClusterID) -> Result<Vec<ClusterID>, Error> {
        let mut chain = Vec::from([first]);
        if !first.valid() {
            return Ok(chain);
        }
        let mut cluster = first;
        loop {
            let entry = self.next_cluster(cluster)?;
            trace!("Cluster {} followed by {:?}", cluster, entry);
            cluster = match entry {
                Entry::Next(next) => next,
                Entry::Free => return Err(Error::CorruptChain(cluster)),
                Entry::Reserved(value) => {
                    warn!("Reserved value {:#X} terminates chain at cluster {}", value, cluster);
                    break;
                }
                Entry::BadCluster | Entry::Last => break,
            };
            if chain.len() >= self.entries {
                warn!("Cluster chain from {} loops", first);
                return Err(Error::CorruptChain(cluster));
            }
            chain.push(cluster);
        }
        Ok(chain)
    }
}

/// Successor of `cluster` as stored in first FAT
pub fn successor_of(
    bytes: &[u8],
    geometry: &VolumeGeometry,
    cluster: ClusterID,
) -> Result<u16, Error> {
    FAT::new(bytes, geometry).successor_of(cluster)
}
