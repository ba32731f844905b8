use nimbus::catalog;
use nimbus::config::{
    AddonConfiguration, ApplicationConfiguration, Configuration, CosmosdbMongodbTier,
    DatabaseConfiguration, FunctionTier, MysqlTier, RedisTier,
};
use nimbus::selector::select_templates;

fn config_with(
    application: ApplicationConfiguration,
    database: DatabaseConfiguration,
    addons: Vec<AddonConfiguration>,
) -> Configuration {
    Configuration::new("myapp", "westeurope", application, database, addons).unwrap()
}

#[test]
fn test_main_group_is_always_selected_first() {
    let config = config_with(
        ApplicationConfiguration::Function(FunctionTier::Consumption),
        DatabaseConfiguration::Mysql(MysqlTier::Basic),
        vec![AddonConfiguration::Redis(RedisTier::Basic)],
    );

    let selection = select_templates(&config);

    assert!(!selection.is_empty());
    assert_eq!(&selection[..catalog::MAIN_TEMPLATES.len()], catalog::MAIN_TEMPLATES);
}

#[test]
fn test_application_groups_are_mutually_exclusive() {
    let app_service = config_with(
        ApplicationConfiguration::default(),
        DatabaseConfiguration::None,
        vec![],
    );
    let selection = select_templates(&app_service);
    assert!(selection.contains(&"terraform/modules/app-service/main.tf"));
    assert!(!selection.iter().any(|id| id.contains("modules/function")));

    let function = config_with(
        ApplicationConfiguration::Function(FunctionTier::Consumption),
        DatabaseConfiguration::None,
        vec![],
    );
    let selection = select_templates(&function);
    assert!(selection.contains(&"terraform/modules/function/main.tf"));
    assert!(!selection.iter().any(|id| id.contains("modules/app-service")));
}

#[test]
fn test_no_database_selects_no_database_group() {
    let config = config_with(
        ApplicationConfiguration::default(),
        DatabaseConfiguration::None,
        vec![],
    );

    let selection = select_templates(&config);

    for group in [catalog::MYSQL_TEMPLATES, catalog::POSTGRESQL_TEMPLATES, catalog::SQL_SERVER_TEMPLATES] {
        for id in group {
            assert!(!selection.contains(id));
        }
    }
}

#[test]
fn test_database_selects_exactly_its_group() {
    let config = config_with(
        ApplicationConfiguration::default(),
        DatabaseConfiguration::Mysql(MysqlTier::Basic),
        vec![],
    );

    let selection = select_templates(&config);

    for id in catalog::MYSQL_TEMPLATES {
        assert!(selection.contains(id));
    }
    for group in [catalog::POSTGRESQL_TEMPLATES, catalog::SQL_SERVER_TEMPLATES] {
        for id in group {
            assert!(!selection.contains(id));
        }
    }
}

#[test]
fn test_addon_groups_follow_addon_order() {
    let config = config_with(
        ApplicationConfiguration::default(),
        DatabaseConfiguration::None,
        vec![
            AddonConfiguration::CosmosdbMongodb(CosmosdbMongodbTier::Free),
            AddonConfiguration::Redis(RedisTier::Basic),
        ],
    );

    let selection = select_templates(&config);

    let cosmos_pos = selection
        .iter()
        .position(|id| *id == "terraform/modules/cosmosdb-mongodb/main.tf")
        .unwrap();
    let redis_pos =
        selection.iter().position(|id| *id == "terraform/modules/redis/main.tf").unwrap();
    assert!(cosmos_pos < redis_pos);
}

#[test]
fn test_adding_an_addon_is_monotonic() {
    let without = select_templates(&config_with(
        ApplicationConfiguration::default(),
        DatabaseConfiguration::None,
        vec![],
    ));
    let with = select_templates(&config_with(
        ApplicationConfiguration::default(),
        DatabaseConfiguration::None,
        vec![AddonConfiguration::Redis(RedisTier::Basic)],
    ));

    assert_eq!(&with[..without.len()], without.as_slice());
    assert_eq!(&with[without.len()..], catalog::REDIS_TEMPLATES);
}

#[test]
fn test_every_selected_template_exists_in_catalog() {
    let config = config_with(
        ApplicationConfiguration::Function(FunctionTier::Consumption),
        DatabaseConfiguration::Mysql(MysqlTier::Basic),
        vec![
            AddonConfiguration::CosmosdbMongodb(CosmosdbMongodbTier::Free),
            AddonConfiguration::Redis(RedisTier::Basic),
        ],
    );

    for id in select_templates(&config) {
        assert!(catalog::template_body(id).is_some(), "missing catalog entry for {}", id);
    }
}
