use crate::domain::model::ContentCatalog;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::Path;

/// Loads a TOML profile replacing the built-in catalog. The skill invariants
/// (range, uniqueness) are enforced during deserialization, the rest by
/// `ContentCatalog::validate`.
pub fn load_profile(path: &Path) -> Result<ContentCatalog> {
    tracing::debug!(path = %path.display(), "Loading content profile");
    let raw = std::fs::read_to_string(path)?;
    let catalog: ContentCatalog = toml::from_str(&raw)?;
    catalog.validate()?;
    Ok(catalog)
}
