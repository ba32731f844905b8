//! Template selection rules.
//! A pure function from a configuration to the ordered list of catalog
//! identifiers that apply to it.

use crate::catalog;
use crate::config::{AddonConfiguration, ApplicationConfiguration, Configuration, DatabaseConfiguration};

/// Selects the templates to generate for a configuration.
///
/// The result is ordered: the main group first, then exactly one of the
/// application groups, then the database group (if a database is
/// configured), then one group per addon in addon order. Intra-group order
/// follows the catalog tables. The result is never empty.
pub fn select_templates(config: &Configuration) -> Vec<&'static str> {
    let mut templates: Vec<&'static str> = Vec::new();

    templates.extend_from_slice(catalog::MAIN_TEMPLATES);

    match config.application() {
        ApplicationConfiguration::AppService(_) => {
            templates.extend_from_slice(catalog::APP_SERVICE_TEMPLATES)
        }
        ApplicationConfiguration::Function(_) => {
            templates.extend_from_slice(catalog::FUNCTION_TEMPLATES)
        }
    }

    match config.database() {
        DatabaseConfiguration::None => {}
        DatabaseConfiguration::Mysql(_) => templates.extend_from_slice(catalog::MYSQL_TEMPLATES),
        DatabaseConfiguration::Postgresql(_) => {
            templates.extend_from_slice(catalog::POSTGRESQL_TEMPLATES)
        }
        DatabaseConfiguration::SqlServer(_) => {
            templates.extend_from_slice(catalog::SQL_SERVER_TEMPLATES)
        }
    }

    for addon in config.addons() {
        match addon {
            AddonConfiguration::CosmosdbMongodb(_) => {
                templates.extend_from_slice(catalog::COSMOSDB_MONGODB_TEMPLATES)
            }
            AddonConfiguration::Redis(_) => templates.extend_from_slice(catalog::REDIS_TEMPLATES),
            AddonConfiguration::StorageBlob(_) => {
                templates.extend_from_slice(catalog::STORAGE_BLOB_TEMPLATES)
            }
        }
    }

    templates
}
