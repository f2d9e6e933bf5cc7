use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use strum::{Display, EnumIter, EnumString};

/// Regions with a known contiguous block of National Dex numbers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Region {
    Kanto,
    Johto,
}

/// Range returned for region names outside the table. `1..=0` yields nothing.
pub const EMPTY_ID_RANGE: RangeInclusive<u32> = 1..=0;

impl Region {
    pub fn id_range(&self) -> RangeInclusive<u32> {
        match self {
            Region::Kanto => 1..=151,
            Region::Johto => 152..=251,
        }
    }
}

/// Region name (any case) to its inclusive species-ID range; unknown names map to an empty range.
pub fn region_id_range(region_name: &str) -> RangeInclusive<u32> {
    region_name
        .parse::<Region>()
        .map(|region| region.id_range())
        .unwrap_or(EMPTY_ID_RANGE)
}
