//! Schema Registry for Version Management
//!
//! Schemas are registered under a qualified name such as
//! `risk_assessment_v1`; the suffix after the last `_v` is the version.
//! The registry tracks every version of a base name and which one is
//! latest, so consumers can ask for "the current assessment layout"
//! without hard-coding a version.

use apache_avro::Schema;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::schemas::NAMESPACE;
use crate::SchemaError;

/// Schema metadata for registry entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaMetadata {
    /// Base name (e.g. "sensor_reading")
    pub name: String,

    /// Version (e.g. "v1")
    pub version: String,

    /// Qualified name (e.g. "sensor_reading_v1")
    pub qualified_name: String,

    /// Schema namespace
    pub namespace: String,
}

impl SchemaMetadata {
    /// Split a qualified name into base name and version; names without a
    /// `_v` suffix are version `v1`
    pub fn from_qualified_name(qualified_name: &str) -> Self {
        let (name, version) = match qualified_name.rfind("_v") {
            Some(pos) => (&qualified_name[..pos], &qualified_name[pos + 1..]),
            None => (qualified_name, "v1"),
        };

        Self {
            name: name.to_string(),
            version: version.to_string(),
            qualified_name: qualified_name.to_string(),
            namespace: NAMESPACE.to_string(),
        }
    }

    fn version_number(&self) -> u32 {
        self.version
            .trim_start_matches('v')
            .parse()
            .unwrap_or(0)
    }
}

/// Thread-safe schema registry with version management
pub struct SchemaRegistry {
    /// Schemas indexed by qualified name
    schemas: RwLock<HashMap<String, (Schema, SchemaMetadata)>>,

    /// Base name -> registered versions, in registration order
    versions: RwLock<HashMap<String, Vec<String>>>,

    /// Base name -> latest metadata
    latest: RwLock<HashMap<String, SchemaMetadata>>,
}

fn poisoned<T>(_: T) -> SchemaError {
    SchemaError::ParseError("Lock poisoned".to_string())
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            schemas: RwLock::new(HashMap::new()),
            versions: RwLock::new(HashMap::new()),
            latest: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry holding the WearGuard v1 schemas
    pub fn with_defaults() -> Result<Self, SchemaError> {
        let registry = Self::new();
        registry.load_defaults()?;
        Ok(registry)
    }

    /// Register a schema with metadata
    pub fn register_with_metadata(
        &self,
        schema: Schema,
        metadata: SchemaMetadata,
    ) -> Result<(), SchemaError> {
        self.validate_schema(&metadata)?;

        let base_name = metadata.name.clone();
        let version = metadata.version.clone();

        {
            let mut latest = self.latest.write().map_err(poisoned)?;
            let newer = latest
                .get(&base_name)
                .map_or(true, |current| metadata.version_number() > current.version_number());
            if newer {
                latest.insert(base_name.clone(), metadata.clone());
            }
        }

        self.versions
            .write()
            .map_err(poisoned)?
            .entry(base_name)
            .or_default()
            .push(version);

        log::debug!("registered schema {}", metadata.qualified_name);
        self.schemas
            .write()
            .map_err(poisoned)?
            .insert(metadata.qualified_name.clone(), (schema, metadata));

        Ok(())
    }

    /// Register a schema under its qualified name
    pub fn register(&self, name: &str, schema: Schema) -> Result<(), SchemaError> {
        self.register_with_metadata(schema, SchemaMetadata::from_qualified_name(name))
    }

    /// Get a schema by qualified name
    pub fn get(&self, name: &str) -> Result<Schema, SchemaError> {
        let schemas = self.schemas.read().map_err(poisoned)?;

        schemas
            .get(name)
            .map(|(schema, _)| schema.clone())
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Get the latest version of a schema
    pub fn get_latest(&self, base_name: &str) -> Result<Schema, SchemaError> {
        let qualified_name = {
            let latest = self.latest.read().map_err(poisoned)?;
            latest
                .get(base_name)
                .map(|metadata| metadata.qualified_name.clone())
                .ok_or_else(|| SchemaError::NotFound(format!("No versions of {base_name}")))?
        };
        self.get(&qualified_name)
    }

    /// All registered versions of a schema
    pub fn get_versions(&self, base_name: &str) -> Result<Vec<String>, SchemaError> {
        let versions = self.versions.read().map_err(poisoned)?;
        Ok(versions.get(base_name).cloned().unwrap_or_default())
    }

    /// Get schema metadata
    pub fn get_metadata(&self, name: &str) -> Result<SchemaMetadata, SchemaError> {
        let schemas = self.schemas.read().map_err(poisoned)?;

        schemas
            .get(name)
            .map(|(_, metadata)| metadata.clone())
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    fn validate_schema(&self, metadata: &SchemaMetadata) -> Result<(), SchemaError> {
        if self.get(&metadata.qualified_name).is_ok() {
            return Err(SchemaError::ValidationError(format!(
                "Schema {} already registered",
                metadata.qualified_name
            )));
        }
        Ok(())
    }

    /// Load the WearGuard v1 schemas
    pub fn load_defaults(&self) -> Result<(), SchemaError> {
        use crate::schemas;

        self.register("sensor_reading_v1", schemas::sensor_reading_v1()?)?;
        self.register("risk_assessment_v1", schemas::risk_assessment_v1()?)?;
        self.register("cost_savings_v1", schemas::cost_savings_v1()?)?;

        Ok(())
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
