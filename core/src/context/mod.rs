mod roster;
mod threat_context;

pub use roster::Roster;
pub use threat_context::{LedgerView, ThreatContext, resolve_amount};
