//! Document analysis seam.
//!
//! Both workflows turn a business plan into a structured profile. The only
//! built-in analyzer does not read the document at all: it picks one of two
//! static profiles depending on whether the file can be opened. A real text
//! analyzer plugs in by implementing [`DocumentAnalyzer`].

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use crate::error::{FounderError, FounderResult};
use crate::growth::TargetProfile;
use crate::mandate::BusinessProfile;

/// Extracts structured profiles from plan documents.
///
/// Implementations must return a fallback profile, not an error, when the
/// document does not exist.
pub trait DocumentAnalyzer: Send + Sync {
    /// Marketing profile used to write ad copy.
    fn target_profile(&self, path: &Path) -> FounderResult<TargetProfile>;

    /// Business profile used in the mandate.
    fn business_profile(&self, path: &Path) -> FounderResult<BusinessProfile>;
}

/// Selects a static profile keyed only on whether the document exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExistenceGatedAnalyzer;

impl ExistenceGatedAnalyzer {
    /// Returns `true` if the document opened, `false` if it does not exist.
    fn document_present(path: &Path) -> FounderResult<bool> {
        match File::open(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(FounderError::io(path, e)),
        }
    }
}

impl DocumentAnalyzer for ExistenceGatedAnalyzer {
    fn target_profile(&self, path: &Path) -> FounderResult<TargetProfile> {
        if Self::document_present(path)? {
            Ok(TargetProfile::from_plan())
        } else {
            warn!(path = %path.display(), "business plan not found, using default target profile");
            Ok(TargetProfile::fallback())
        }
    }

    fn business_profile(&self, path: &Path) -> FounderResult<BusinessProfile> {
        if Self::document_present(path)? {
            Ok(BusinessProfile::from_plan())
        } else {
            warn!(path = %path.display(), "business plan not found, using default business profile");
            Ok(BusinessProfile::fallback())
        }
    }
}
