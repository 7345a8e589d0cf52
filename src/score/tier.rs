//! Tier banding of the adjusted composite.

use crate::domain::Tier;

pub const SOLID_MIN: u32 = 50;
pub const HIGH_MIN: u32 = 75;
pub const ELITE_MIN: u32 = 90;

/// Lower edges are inclusive; anything above 100 is treated as `Elite`.
pub fn tier_for(adjusted_composite: u32) -> Tier {
    match adjusted_composite {
        s if s >= ELITE_MIN => Tier::Elite,
        s if s >= HIGH_MIN => Tier::High,
        s if s >= SOLID_MIN => Tier::Solid,
        _ => Tier::Emerging,
    }
}
