//! Configuration for the scrub extension.
//!
//! The host build hands configuration over as in-memory YAML or JSON text;
//! nothing here touches the filesystem. The table is built once at startup
//! and passed explicitly to the components that hold it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ScrubError;

/// Allow-list of members per module and class.
///
/// Maps a module-qualified name to the classes it exposes, and each class to
/// the member names permitted through the filter. Declaration order is
/// preserved across serde round trips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InclusionTable {
    modules: IndexMap<String, IndexMap<String, Vec<String>>>,
}

impl InclusionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the permitted members for a class of a module, replacing any
    /// previous entry for that class.
    pub fn insert(
        &mut self,
        module: impl Into<String>,
        class: impl Into<String>,
        members: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.modules
            .entry(module.into())
            .or_default()
            .insert(class.into(), members.into_iter().map(Into::into).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Number of modules with at least one entry.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// The members permitted for a class, if the module and class are listed.
    pub fn allowed_members(&self, module: &str, class: &str) -> Option<&[String]> {
        self.modules
            .get(module)
            .and_then(|classes| classes.get(class))
            .map(Vec::as_slice)
    }

    /// Whether the table explicitly permits a member.
    ///
    /// An unlisted module or class permits nothing; a listed class permits
    /// exactly the member names it enumerates.
    pub fn permits(&self, module: &str, class: &str, member: &str) -> bool {
        self.allowed_members(module, class)
            .map(|members| members.iter().any(|m| m == member))
            .unwrap_or(false)
    }

    fn validate(&self) -> Result<(), ScrubError> {
        for (module, classes) in &self.modules {
            if module.is_empty() {
                return Err(ScrubError::ValidationError(
                    "Inclusion table contains an empty module name".to_string(),
                ));
            }
            for (class, members) in classes {
                if class.is_empty() {
                    return Err(ScrubError::ValidationError(format!(
                        "Module '{}' contains an empty class name",
                        module
                    )));
                }
                if members.iter().any(String::is_empty) {
                    return Err(ScrubError::ValidationError(format!(
                        "Class '{}.{}' lists an empty member name",
                        module, class
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Configuration handed to the extension by the host build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubConfig {
    /// Members allowed through the filter, per module and class.
    pub include_members: InclusionTable,
}

impl Default for ScrubConfig {
    /// The configuration the API reference build ships with.
    fn default() -> Self {
        let mut include_members = InclusionTable::new();
        include_members.insert("inferences.inferences", "Inferences", ["__init__"]);
        Self { include_members }
    }
}

impl ScrubConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ScrubError> {
        let config: Self =
            serde_yaml::from_str(text).map_err(|e| ScrubError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ScrubError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ScrubError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for malformed entries.
    pub fn validate(&self) -> Result<(), ScrubError> {
        self.include_members.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_carries_shipped_table() {
        let config = ScrubConfig::default();
        assert_eq!(config.include_members.module_count(), 1);
        assert_eq!(
            config
                .include_members
                .allowed_members("inferences.inferences", "Inferences"),
            Some(&["__init__".to_string()][..])
        );
    }

    #[test]
    fn test_permits_requires_listed_module_class_and_member() {
        let mut table = InclusionTable::new();
        table.insert("pkg.core", "Client", ["connect", "close"]);

        assert!(table.permits("pkg.core", "Client", "connect"));
        assert!(table.permits("pkg.core", "Client", "close"));
        assert!(!table.permits("pkg.core", "Client", "retry"));
        assert!(!table.permits("pkg.core", "Server", "connect"));
        assert!(!table.permits("pkg.other", "Client", "connect"));
    }

    #[test]
    fn test_allowed_members_missing_entries() {
        let table = InclusionTable::new();
        assert!(table.is_empty());
        assert_eq!(table.allowed_members("pkg", "Class"), None);
    }

    #[test]
    fn test_insert_replaces_class_entry() {
        let mut table = InclusionTable::new();
        table.insert("pkg", "Client", ["a"]);
        table.insert("pkg", "Client", ["b", "c"]);

        assert_eq!(
            table.allowed_members("pkg", "Client"),
            Some(&["b".to_string(), "c".to_string()][..])
        );
        assert_eq!(table.module_count(), 1);
    }

    #[test]
    fn test_from_yaml_str() {
        let config = ScrubConfig::from_yaml_str(
            r#"
include_members:
  inferences.inferences:
    Inferences: ["__init__"]
  pkg.core:
    Client: [connect]
"#,
        )
        .unwrap();

        assert_eq!(config.include_members.module_count(), 2);
        assert!(config
            .include_members
            .permits("inferences.inferences", "Inferences", "__init__"));
        assert!(config.include_members.permits("pkg.core", "Client", "connect"));
    }

    #[test]
    fn test_from_yaml_str_missing_key_uses_shipped_table() {
        let config = ScrubConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ScrubConfig::default());
    }

    #[test]
    fn test_from_json_str() {
        let config = ScrubConfig::from_json_str(
            r#"{"include_members": {"pkg.core": {"Client": ["connect"]}}}"#,
        )
        .unwrap();

        assert!(config.include_members.permits("pkg.core", "Client", "connect"));
        assert!(!config
            .include_members
            .permits("inferences.inferences", "Inferences", "__init__"));
    }

    #[test]
    fn test_from_yaml_str_rejects_garbage() {
        let err = ScrubConfig::from_yaml_str("include_members: 42").unwrap_err();
        assert!(matches!(err, ScrubError::ConfigError(_)));

        let err = ScrubConfig::from_json_str("{\"include_members\": [").unwrap_err();
        assert!(matches!(err, ScrubError::ConfigError(_)));
    }

    #[test]
    fn test_validate_rejects_empty_names() {
        let mut table = InclusionTable::new();
        table.insert("", "Client", ["connect"]);
        let config = ScrubConfig {
            include_members: table,
        };
        assert!(matches!(
            config.validate(),
            Err(ScrubError::ValidationError(_))
        ));

        let mut table = InclusionTable::new();
        table.insert("pkg", "Client", [""]);
        let config = ScrubConfig {
            include_members: table,
        };
        assert!(matches!(
            config.validate(),
            Err(ScrubError::ValidationError(_))
        ));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let config = ScrubConfig::from_yaml_str(
            r#"
include_members:
  z.last:
    Z: [run]
  a.first:
    A: [run]
"#,
        )
        .unwrap();

        let yaml = serde_yaml::to_string(&config).unwrap();
        let z_pos = yaml.find("z.last").unwrap();
        let a_pos = yaml.find("a.first").unwrap();
        assert!(z_pos < a_pos);
    }
}
