use std::fmt::{self, Display};

///
/// Region struct, one detected sRNA candidate on the coverage coordinate axis.
///
/// `start` and `end` are the first and last outlier positions of the merged
/// runs, so both ends are inclusive coordinates taken from the coverage table.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct Region {
    pub start: u32,
    pub end: u32,
}

impl Region {
    pub fn new(start: u32, end: u32) -> Self {
        Region { start, end }
    }

    ///
    /// Get length of the region, `end - start`
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    ///
    /// Get file string of Region
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}", self.start, self.end)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<(u32, u32)> for Region {
    fn from(value: (u32, u32)) -> Self {
        Region::new(value.0, value.1)
    }
}

///
/// A region together with its position in the merged region list.
///
/// Length filtering drops regions but keeps the index of the survivors, and
/// output names are built from that index.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct IndexedRegion {
    pub index: usize,
    pub region: Region,
}

impl IndexedRegion {
    pub fn new(index: usize, region: Region) -> Self {
        IndexedRegion { index, region }
    }
}
