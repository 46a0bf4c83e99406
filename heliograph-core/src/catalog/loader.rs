//! Catalog loader
//!
//! Scans the storage root for `.csv` code files and builds the repository.
//! Each qualifying file becomes one appliance; its display name is the
//! file name with the extension stripped and underscores turned into
//! spaces. Loading is tolerant by design: bad rows and unknown function
//! names are skipped, and capacity overflow silently stops taking more.

use heliograph_ir::Protocol;

use super::alias::canonical_name;
use super::record::RawRecord;
use crate::config::MAX_COMMANDS;
use crate::device::{Appliance, Command, Repository};

/// Recognized code-file extension.
const CATALOG_EXT: &str = ".csv";

/// Errors from a catalog load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// The storage medium could not be opened
    StorageUnavailable,
    /// The medium opened but produced zero usable appliances
    NoCatalogs,
}

impl CatalogError {
    /// Fixed message for the error screen.
    pub fn message(&self) -> &'static str {
        match self {
            CatalogError::StorageUnavailable => "! INSERT SD CARD !",
            CatalogError::NoCatalogs => "! NO DEVICES FOUND !",
        }
    }
}

/// One candidate file on the storage medium.
#[derive(Debug, Clone, Copy)]
pub struct CatalogFile<'a> {
    /// File name, possibly with a leading path
    pub name: &'a str,
    /// Full file contents
    pub contents: &'a str,
}

/// Storage medium abstraction.
///
/// Board code implements this over the SD/flash filesystem; tests and
/// simulators use [`MemoryCatalog`]. Enumeration is sequential and not
/// reentrant, matching how the loader consumes it.
pub trait CatalogSource {
    /// Open the medium. An error here surfaces as
    /// [`CatalogError::StorageUnavailable`].
    fn open(&mut self) -> Result<(), ()>;

    /// Next file in the storage root, `None` once exhausted.
    fn next_file(&mut self) -> Option<CatalogFile<'_>>;
}

/// Load the full catalog from a source.
///
/// Appliances with zero surviving commands are not added; a completely
/// empty result is [`CatalogError::NoCatalogs`].
pub fn load<S: CatalogSource>(source: &mut S) -> Result<Repository, CatalogError> {
    source.open().map_err(|_| CatalogError::StorageUnavailable)?;

    let mut repo = Repository::new();
    while let Some(file) = source.next_file() {
        if !repo.has_capacity() {
            break;
        }
        if !file.name.ends_with(CATALOG_EXT) {
            continue;
        }
        if let Some(appliance) = load_file(&file) {
            repo.push(appliance);
        }
    }

    if repo.is_empty() {
        return Err(CatalogError::NoCatalogs);
    }
    Ok(repo)
}

/// Parse one catalog file into an appliance, `None` if nothing survived.
fn load_file(file: &CatalogFile<'_>) -> Option<Appliance> {
    let mut appliance = Appliance::new("");
    derive_display_name(file.name, &mut appliance);

    for line in file.contents.lines() {
        if appliance.commands.len() == MAX_COMMANDS {
            break;
        }
        let Some(record) = RawRecord::parse(line) else {
            continue;
        };
        let Some(name) = canonical_name(record.function_name) else {
            continue;
        };
        let protocol = Protocol::from_catalog_id(record.protocol_id);
        let code = protocol.encode(record.device, record.subdevice, record.function);
        appliance.push_command(Command::new(name, code, protocol));
    }

    if appliance.commands.is_empty() {
        None
    } else {
        Some(appliance)
    }
}

/// File name -> display name: strip path and extension, underscores
/// become spaces, truncated to the name capacity.
fn derive_display_name(file_name: &str, appliance: &mut Appliance) {
    let stem = file_name
        .rsplit('/')
        .next()
        .unwrap_or(file_name)
        .trim_end_matches(CATALOG_EXT);

    for c in stem.chars() {
        let c = if c == '_' { ' ' } else { c };
        if appliance.name.push(c).is_err() {
            break;
        }
    }
}

/// In-memory catalog source for host tests and simulators.
pub struct MemoryCatalog<'a> {
    files: &'a [(&'a str, &'a str)],
    index: usize,
    available: bool,
}

impl<'a> MemoryCatalog<'a> {
    /// Source over `(file name, contents)` pairs.
    pub fn new(files: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            files,
            index: 0,
            available: true,
        }
    }

    /// Source whose `open` fails, for storage-error paths.
    pub fn unavailable() -> Self {
        Self {
            files: &[],
            index: 0,
            available: false,
        }
    }
}

impl CatalogSource for MemoryCatalog<'_> {
    fn open(&mut self) -> Result<(), ()> {
        if self.available {
            Ok(())
        } else {
            Err(())
        }
    }

    fn next_file(&mut self) -> Option<CatalogFile<'_>> {
        let (name, contents) = *self.files.get(self.index)?;
        self.index += 1;
        Some(CatalogFile { name, contents })
    }
}
