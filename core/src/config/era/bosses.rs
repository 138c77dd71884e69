//! Hostile abilities that move threat, and the encounter preprocessors.

use threatline_types::ThreatScope;

use crate::config::ConfigBuilder;
use crate::encounter;
use crate::error::Result;
use crate::formulas::{threat_scale, threat_scale_on_hit};
use crate::spells;

const LAYER: &str = "era bosses";

pub(super) fn populate(builder: &mut ConfigBuilder) -> Result<()> {
    let mut abilities = vec![
        (
            spells::ONYXIA_KNOCK_AWAY,
            threat_scale_on_hit(0.75, ThreatScope::Target),
        ),
        (
            spells::BROODLORD_KNOCK_AWAY,
            threat_scale_on_hit(0.5, ThreatScope::Target),
        ),
        (spells::WING_BUFFET, threat_scale_on_hit(0.5, ThreatScope::Target)),
    ];
    abilities.extend(
        spells::NOTH_BLINK
            .iter()
            .map(|id| (*id, threat_scale(0.0, ThreatScope::All))),
    );

    builder
        .extend_abilities(LAYER, abilities)?
        .extend_encounters(
            LAYER,
            vec![
                (
                    spells::RAGNAROS_ENCOUNTER,
                    encounter::ragnaros as encounter::PreprocessorFactory,
                ),
                (spells::TWIN_EMPERORS_ENCOUNTER, encounter::twin_emperors),
            ],
        )?;
    Ok(())
}
