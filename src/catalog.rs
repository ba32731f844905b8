//! Embedded template catalog.
//! All template bodies are compiled into the binary and addressed by a
//! stable identifier, which is also the path of the generated file. The
//! tables below are the only view of the catalog: read-only, grouped by the
//! selection category that pulls them in.

/// Templates generated for every configuration.
pub const MAIN_TEMPLATES: &[&str] = &[
    "README.md",
    ".gitignore",
    "terraform/main.tf",
    "terraform/variables.tf",
    "terraform/outputs.tf",
];

/// Templates for applications hosted on App Service.
pub const APP_SERVICE_TEMPLATES: &[&str] = &[
    "terraform/modules/app-service/main.tf",
    "terraform/modules/app-service/variables.tf",
    "terraform/modules/app-service/outputs.tf",
];

/// Templates for applications hosted as Functions.
pub const FUNCTION_TEMPLATES: &[&str] = &[
    "terraform/modules/function/main.tf",
    "terraform/modules/function/variables.tf",
    "terraform/modules/function/outputs.tf",
];

pub const MYSQL_TEMPLATES: &[&str] = &[
    "terraform/modules/mysql/main.tf",
    "terraform/modules/mysql/variables.tf",
    "terraform/modules/mysql/outputs.tf",
];

pub const POSTGRESQL_TEMPLATES: &[&str] = &[
    "terraform/modules/postgresql/main.tf",
    "terraform/modules/postgresql/variables.tf",
    "terraform/modules/postgresql/outputs.tf",
];

pub const SQL_SERVER_TEMPLATES: &[&str] = &[
    "terraform/modules/sql-server/main.tf",
    "terraform/modules/sql-server/variables.tf",
    "terraform/modules/sql-server/outputs.tf",
];

pub const COSMOSDB_MONGODB_TEMPLATES: &[&str] = &[
    "terraform/modules/cosmosdb-mongodb/main.tf",
    "terraform/modules/cosmosdb-mongodb/variables.tf",
    "terraform/modules/cosmosdb-mongodb/outputs.tf",
];

pub const REDIS_TEMPLATES: &[&str] = &[
    "terraform/modules/redis/main.tf",
    "terraform/modules/redis/variables.tf",
    "terraform/modules/redis/outputs.tf",
];

pub const STORAGE_BLOB_TEMPLATES: &[&str] = &[
    "terraform/modules/storage-blob/main.tf",
    "terraform/modules/storage-blob/variables.tf",
    "terraform/modules/storage-blob/outputs.tf",
];

/// Identifier to embedded template body, for every catalog entry.
const TEMPLATE_SOURCES: &[(&str, &str)] = &[
    ("README.md", include_str!("../templates/README.md.j2")),
    (".gitignore", include_str!("../templates/.gitignore.j2")),
    ("terraform/main.tf", include_str!("../templates/terraform/main.tf.j2")),
    ("terraform/variables.tf", include_str!("../templates/terraform/variables.tf.j2")),
    ("terraform/outputs.tf", include_str!("../templates/terraform/outputs.tf.j2")),
    (
        "terraform/modules/app-service/main.tf",
        include_str!("../templates/terraform/modules/app-service/main.tf.j2"),
    ),
    (
        "terraform/modules/app-service/variables.tf",
        include_str!("../templates/terraform/modules/app-service/variables.tf.j2"),
    ),
    (
        "terraform/modules/app-service/outputs.tf",
        include_str!("../templates/terraform/modules/app-service/outputs.tf.j2"),
    ),
    (
        "terraform/modules/function/main.tf",
        include_str!("../templates/terraform/modules/function/main.tf.j2"),
    ),
    (
        "terraform/modules/function/variables.tf",
        include_str!("../templates/terraform/modules/function/variables.tf.j2"),
    ),
    (
        "terraform/modules/function/outputs.tf",
        include_str!("../templates/terraform/modules/function/outputs.tf.j2"),
    ),
    (
        "terraform/modules/mysql/main.tf",
        include_str!("../templates/terraform/modules/mysql/main.tf.j2"),
    ),
    (
        "terraform/modules/mysql/variables.tf",
        include_str!("../templates/terraform/modules/mysql/variables.tf.j2"),
    ),
    (
        "terraform/modules/mysql/outputs.tf",
        include_str!("../templates/terraform/modules/mysql/outputs.tf.j2"),
    ),
    (
        "terraform/modules/postgresql/main.tf",
        include_str!("../templates/terraform/modules/postgresql/main.tf.j2"),
    ),
    (
        "terraform/modules/postgresql/variables.tf",
        include_str!("../templates/terraform/modules/postgresql/variables.tf.j2"),
    ),
    (
        "terraform/modules/postgresql/outputs.tf",
        include_str!("../templates/terraform/modules/postgresql/outputs.tf.j2"),
    ),
    (
        "terraform/modules/sql-server/main.tf",
        include_str!("../templates/terraform/modules/sql-server/main.tf.j2"),
    ),
    (
        "terraform/modules/sql-server/variables.tf",
        include_str!("../templates/terraform/modules/sql-server/variables.tf.j2"),
    ),
    (
        "terraform/modules/sql-server/outputs.tf",
        include_str!("../templates/terraform/modules/sql-server/outputs.tf.j2"),
    ),
    (
        "terraform/modules/cosmosdb-mongodb/main.tf",
        include_str!("../templates/terraform/modules/cosmosdb-mongodb/main.tf.j2"),
    ),
    (
        "terraform/modules/cosmosdb-mongodb/variables.tf",
        include_str!("../templates/terraform/modules/cosmosdb-mongodb/variables.tf.j2"),
    ),
    (
        "terraform/modules/cosmosdb-mongodb/outputs.tf",
        include_str!("../templates/terraform/modules/cosmosdb-mongodb/outputs.tf.j2"),
    ),
    (
        "terraform/modules/redis/main.tf",
        include_str!("../templates/terraform/modules/redis/main.tf.j2"),
    ),
    (
        "terraform/modules/redis/variables.tf",
        include_str!("../templates/terraform/modules/redis/variables.tf.j2"),
    ),
    (
        "terraform/modules/redis/outputs.tf",
        include_str!("../templates/terraform/modules/redis/outputs.tf.j2"),
    ),
    (
        "terraform/modules/storage-blob/main.tf",
        include_str!("../templates/terraform/modules/storage-blob/main.tf.j2"),
    ),
    (
        "terraform/modules/storage-blob/variables.tf",
        include_str!("../templates/terraform/modules/storage-blob/variables.tf.j2"),
    ),
    (
        "terraform/modules/storage-blob/outputs.tf",
        include_str!("../templates/terraform/modules/storage-blob/outputs.tf.j2"),
    ),
];

/// Looks up the embedded template body for an identifier.
///
/// Returns `None` for identifiers the catalog does not know about.
pub fn template_body(identifier: &str) -> Option<&'static str> {
    TEMPLATE_SOURCES.iter().find(|(name, _)| *name == identifier).map(|(_, body)| *body)
}
