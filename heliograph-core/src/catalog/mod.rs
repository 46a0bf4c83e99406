//! Catalog loading
//!
//! Turns the on-storage code database (one CSV file per appliance, rows of
//! `functionName,protocolId,device,subdevice,function`) into the in-memory
//! [`Repository`](crate::device::Repository). Vendor function spellings are
//! normalized through the alias table; anything unrecognized or malformed
//! is skipped, never fatal.

pub mod alias;
pub mod loader;
pub mod record;

pub use alias::canonical_name;
pub use loader::{load, CatalogError, CatalogFile, CatalogSource, MemoryCatalog};
pub use record::RawRecord;
