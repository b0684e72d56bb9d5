use crate::types::ClusterID;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Entry {
    Free,
    Next(ClusterID),
    Reserved(u16),
    BadCluster,
    Last,
}

impl From<u16> for Entry {
    fn from(value: u16) -> Self {
        match value & 0xFFF {
            0 => Self::Free,
            value @ 2..=0xFEF => Self::Next(value.into()),
            0xFF7 => Self::BadCluster,
            value @ (1 | 0xFF0..=0xFF6) => Self::Reserved(value),
            _ => Self::Last,
        }
    }
}
