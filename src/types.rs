use derive_more::{Display, From, Into};

#[derive(Copy, Clone, Debug, Default, Display, From, Into, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub struct ClusterID(u16);

impl ClusterID {
    pub(crate) const FIRST: Self = Self(2);
    pub(crate) const LAST: Self = Self(0xFEF);

    /// Whether this cluster lies in the data region
    pub fn valid(&self) -> bool {
        Self::FIRST <= *self && *self <= Self::LAST
    }

    pub(crate) fn offset(self) -> u32 {
        (self.0 - Self::FIRST.0) as u32
    }
}
