//! Component record bookkeeping.
//!
//! Records live in a generational arena; the transport's token is mapped to
//! an arena key rather than used as the owner of the record. A token that is
//! reused after removal therefore never resolves to the old record.

mod arena;
mod executor;
mod store;

pub use arena::{RecordArena, RecordKey};
pub use executor::ExecutorHandle;
pub use store::{ComponentRecord, RecordStore};
