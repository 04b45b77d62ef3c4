//! Tests for the db module's public surface: factory, config, checksum.

use slate_rust::db::{
    calculate_checksum, RepositoryConfig, RepositoryFactory, RepositoryType, TimetableRepository,
};

#[tokio::test]
async fn test_factory_local_repository_works_end_to_end() {
    let repo = RepositoryFactory::create(RepositoryType::Local).unwrap();
    assert!(repo.health_check().await.unwrap());

    let record = slate_rust::db::NewTimetable {
        id: None,
        teacher_name: None,
        payload: serde_json::json!({"sections": []}),
    };
    let id = repo.store_timetable(record).await.unwrap();
    let fetched = repo.fetch_timetable(&id).await.unwrap();
    assert_eq!(fetched.id, id.value());
}

#[test]
fn test_repository_type_parsing() {
    assert_eq!("local".parse::<RepositoryType>().unwrap(), RepositoryType::Local);
    assert!("sqlite".parse::<RepositoryType>().is_err());
}

#[test]
fn test_repository_config_from_file() {
    let dir = std::env::temp_dir().join("slate-repo-config-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("repository.toml");
    std::fs::write(&path, "[repository]\ntype = \"local\"\n").unwrap();

    let config = RepositoryConfig::from_file(&path).unwrap();
    assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_repository_config_missing_file_errors() {
    let err = RepositoryConfig::from_file("/nonexistent/repository.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_checksum_is_stable_hex() {
    let checksum = calculate_checksum("{}");
    assert_eq!(checksum.len(), 64);
    assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(checksum, calculate_checksum("{}"));
}

#[test]
fn test_global_repository_initializes_once() {
    slate_rust::db::init_repository().unwrap();
    let first = slate_rust::db::get_repository().unwrap();
    let second = slate_rust::db::get_repository().unwrap();
    assert!(std::sync::Arc::ptr_eq(first, second));
}
