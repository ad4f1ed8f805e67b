//! Like tracking: client identities and the like ledger.

mod identity;
mod ledger;

pub use identity::ClientIdentity;
pub use ledger::LikeLedger;
