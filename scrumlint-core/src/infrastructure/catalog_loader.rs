// scrumlint-core/src/infrastructure/catalog_loader.rs

use crate::domain::catalog::{RuleCatalog, default_catalog};
use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Loads a rule catalog from disk, picking the parser by file extension.
/// A file that cannot be parsed as structured data is fatal to loading;
/// a file that parses but whose individual rules are broken is not (those
/// rules simply never match).
#[instrument]
pub fn load_catalog(path: &Path) -> Result<RuleCatalog, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::CatalogNotFound(
            path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(path)?;
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_else(|| "json".to_string());

    let catalog: RuleCatalog = match format.as_str() {
        "json" => serde_json::from_str(&content)?,
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        other => return Err(InfrastructureError::UnsupportedFormat(other.to_string())),
    };

    info!(path = ?path, rules = catalog.len(), "Rule catalog loaded");
    Ok(catalog)
}

/// Loading policy: an explicit rule file wins; anything that keeps it
/// from loading falls back to the built-in knowledge base with a warning.
pub fn load_catalog_or_default(path: Option<&Path>) -> RuleCatalog {
    let Some(path) = path else {
        info!("No rule file supplied, using the built-in catalog");
        return default_catalog();
    };

    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(path = ?path, error = %e, "Falling back to the built-in catalog");
            default_catalog()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    const MINIMAL_JSON: &str = r#"{
        "anti_patterns": [{
            "id": "BP-01",
            "name": "Outdated Items",
            "category": "Product Backlog",
            "severity": "Medium",
            "description": "Stale items create noise.",
            "detection_logic": {"field": "Updated", "operator": "older_than_days", "threshold": 90},
            "remedy": "Review and delete."
        }]
    }"#;

    #[test]
    fn test_load_json_catalog() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_temp(&dir, "rules.json", MINIMAL_JSON);

        let catalog = load_catalog(&path)?;
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.rules()[0].id, "BP-01");
        Ok(())
    }

    #[test]
    fn test_load_yaml_catalog() -> Result<()> {
        let yaml = r#"
anti_patterns:
  - id: SP-01
    name: Oversized Item
    category: Sprint Planning
    severity: Medium
    description: Too big for one sprint.
    detection_logic:
      field: Story Points
      operator: greater_than
      threshold: 13
    remedy: Split the story.
"#;
        let dir = tempfile::tempdir()?;
        let path = write_temp(&dir, "rules.yaml", yaml);

        let catalog = load_catalog(&path)?;
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.rules()[0].detection_logic.threshold.as_ref().unwrap().as_days(),
            Some(13)
        );
        Ok(())
    }

    #[test]
    fn test_invalid_syntax_is_a_structure_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_temp(&dir, "rules.json", "{ not json at all");

        let result = load_catalog(&path);
        assert!(matches!(result, Err(InfrastructureError::JsonError(_))));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_distinct_from_parse_failure() {
        let result = load_catalog(Path::new("/nonexistent/rules.json"));
        assert!(matches!(result, Err(InfrastructureError::CatalogNotFound(_))));
    }

    #[test]
    fn test_unsupported_extension() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_temp(&dir, "rules.toml", "anti_patterns = []");

        let result = load_catalog(&path);
        assert!(matches!(result, Err(InfrastructureError::UnsupportedFormat(f)) if f == "toml"));
        Ok(())
    }

    #[test]
    fn test_fallback_to_builtin_on_broken_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_temp(&dir, "rules.json", "{{{{");

        let catalog = load_catalog_or_default(Some(&path));
        assert_eq!(catalog, default_catalog());
        Ok(())
    }

    #[test]
    fn test_no_path_means_builtin() {
        assert_eq!(load_catalog_or_default(None), default_catalog());
    }
}
