//! Classic Era rule set, also the shared base layer of the seasonal
//! editions.

mod bosses;
mod casters;
mod druid;
mod general;
mod hunter;
mod paladin;
mod rogue;
mod warrior;

use threatline_types::Edition;

use super::{ConfigBuilder, ThreatConfig};
use crate::error::Result;

pub const VERSION: u32 = 14;

pub fn config() -> Result<ThreatConfig> {
    let mut builder = ConfigBuilder::new(Edition::Era, VERSION, super::is_era);
    populate(&mut builder)?;
    Ok(builder.build())
}

/// Merge every era layer into `builder`.
pub(super) fn populate(builder: &mut ConfigBuilder) -> Result<()> {
    general::populate(builder)?;
    builder
        .extend_class(warrior::bundle())?
        .extend_class(druid::bundle())?
        .extend_class(paladin::bundle())?
        .extend_class(hunter::bundle())?
        .extend_class(rogue::bundle())?;
    for bundle in casters::bundles() {
        builder.extend_class(bundle)?;
    }
    bosses::populate(builder)?;
    Ok(())
}
