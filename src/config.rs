//! Deployment configuration model.
//! Each configuration axis (application, database, addons) is a tagged enum
//! whose variants carry only the tiers that are legal for that kind, so an
//! invalid kind/tier pairing cannot be constructed. The remaining invariants
//! are checked once, in [`Configuration::new`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Pricing tiers available for App Service hosting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppServiceTier {
    Free,
    Basic,
    Standard,
}

/// Pricing tiers available for Function hosting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionTier {
    Consumption,
    Premium,
}

/// How the application itself is hosted.
///
/// Exactly one kind is chosen per configuration; the tier travels with the
/// kind that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "tier", rename_all = "kebab-case")]
pub enum ApplicationConfiguration {
    AppService(AppServiceTier),
    Function(FunctionTier),
}

impl Default for ApplicationConfiguration {
    fn default() -> Self {
        ApplicationConfiguration::AppService(AppServiceTier::Free)
    }
}

impl ApplicationConfiguration {
    /// Stable kind name, matching the template group key.
    pub fn kind(&self) -> &'static str {
        match self {
            ApplicationConfiguration::AppService(_) => "app-service",
            ApplicationConfiguration::Function(_) => "function",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MysqlTier {
    Basic,
    GeneralPurpose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostgresqlTier {
    Basic,
    GeneralPurpose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SqlServerTier {
    Serverless,
    GeneralPurpose,
}

/// The managed database attached to the application, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "tier", rename_all = "kebab-case")]
pub enum DatabaseConfiguration {
    None,
    Mysql(MysqlTier),
    Postgresql(PostgresqlTier),
    SqlServer(SqlServerTier),
}

impl Default for DatabaseConfiguration {
    fn default() -> Self {
        DatabaseConfiguration::None
    }
}

impl DatabaseConfiguration {
    /// Stable kind name, matching the template group key.
    pub fn kind(&self) -> &'static str {
        match self {
            DatabaseConfiguration::None => "none",
            DatabaseConfiguration::Mysql(_) => "mysql",
            DatabaseConfiguration::Postgresql(_) => "postgresql",
            DatabaseConfiguration::SqlServer(_) => "sql-server",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CosmosdbMongodbTier {
    Free,
    Serverless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedisTier {
    Basic,
    Standard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBlobTier {
    Basic,
    Standard,
}

/// An optional service deployed next to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "tier", rename_all = "kebab-case")]
pub enum AddonConfiguration {
    CosmosdbMongodb(CosmosdbMongodbTier),
    Redis(RedisTier),
    StorageBlob(StorageBlobTier),
}

impl AddonConfiguration {
    /// Stable kind name, matching the template group key.
    pub fn kind(&self) -> &'static str {
        match self {
            AddonConfiguration::CosmosdbMongodb(_) => "cosmosdb-mongodb",
            AddonConfiguration::Redis(_) => "redis",
            AddonConfiguration::StorageBlob(_) => "storage-blob",
        }
    }

    /// Stable tier name, as exposed to templates.
    pub fn tier_name(&self) -> &'static str {
        match self {
            AddonConfiguration::CosmosdbMongodb(CosmosdbMongodbTier::Free) => "free",
            AddonConfiguration::CosmosdbMongodb(CosmosdbMongodbTier::Serverless) => "serverless",
            AddonConfiguration::Redis(RedisTier::Basic) => "basic",
            AddonConfiguration::Redis(RedisTier::Standard) => "standard",
            AddonConfiguration::StorageBlob(StorageBlobTier::Basic) => "basic",
            AddonConfiguration::StorageBlob(StorageBlobTier::Standard) => "standard",
        }
    }
}

/// The full description of one deployment target.
///
/// Immutable once constructed: selection and rendering only ever read it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct Configuration {
    application_name: String,
    region: String,
    application: ApplicationConfiguration,
    database: DatabaseConfiguration,
    addons: Vec<AddonConfiguration>,
}

/// Wire representation of a configuration, before validation.
#[derive(Deserialize)]
struct RawConfiguration {
    application_name: String,
    region: String,
    #[serde(default)]
    application: ApplicationConfiguration,
    #[serde(default)]
    database: DatabaseConfiguration,
    #[serde(default)]
    addons: Vec<AddonConfiguration>,
}

impl TryFrom<RawConfiguration> for Configuration {
    type Error = Error;

    fn try_from(raw: RawConfiguration) -> Result<Self> {
        Configuration::new(raw.application_name, raw.region, raw.application, raw.database, raw.addons)
    }
}

impl Configuration {
    /// Validates and builds a configuration.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the application name is empty
    /// * `Error::ConfigError` if the same addon kind appears more than once
    pub fn new(
        application_name: impl Into<String>,
        region: impl Into<String>,
        application: ApplicationConfiguration,
        database: DatabaseConfiguration,
        addons: Vec<AddonConfiguration>,
    ) -> Result<Self> {
        let application_name = application_name.into();
        if application_name.trim().is_empty() {
            return Err(Error::ConfigError("application name must not be empty".to_string()));
        }

        let mut seen: Vec<&'static str> = Vec::new();
        for addon in &addons {
            if seen.contains(&addon.kind()) {
                return Err(Error::ConfigError(format!("duplicate addon '{}'", addon.kind())));
            }
            seen.push(addon.kind());
        }

        Ok(Self { application_name, region: region.into(), application, database, addons })
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn application(&self) -> ApplicationConfiguration {
        self.application
    }

    pub fn database(&self) -> DatabaseConfiguration {
        self.database
    }

    pub fn addons(&self) -> &[AddonConfiguration] {
        &self.addons
    }

    /// Returns true when an addon of the given kind is configured.
    pub fn has_addon(&self, kind: &str) -> bool {
        self.addons.iter().any(|addon| addon.kind() == kind)
    }

    fn addon_tier(&self, kind: &str) -> Option<&'static str> {
        self.addons.iter().find(|addon| addon.kind() == kind).map(AddonConfiguration::tier_name)
    }

    /// Builds the context every template is evaluated against.
    ///
    /// Exposes the raw configuration fields plus derived convenience flags,
    /// so templates can gate whole sections on the presence of a database
    /// or a specific addon.
    pub fn template_context(&self) -> serde_json::Value {
        json!({
            "application_name": &self.application_name,
            "region": &self.region,
            "application": &self.application,
            "database": &self.database,
            "addons": &self.addons,
            "has_database": self.database != DatabaseConfiguration::None,
            "has_cosmosdb_mongodb": self.has_addon("cosmosdb-mongodb"),
            "has_redis": self.has_addon("redis"),
            "has_storage_blob": self.has_addon("storage-blob"),
            "cosmosdb_mongodb_tier": self.addon_tier("cosmosdb-mongodb"),
            "redis_tier": self.addon_tier("redis"),
            "storage_blob_tier": self.addon_tier("storage-blob"),
        })
    }
}
