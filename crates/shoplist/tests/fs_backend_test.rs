use shoplist::api::ShoplistApi;
use shoplist::config::ShoplistConfig;
use shoplist::model::Entry;
use shoplist::store::backend::StorageBackend;
use shoplist::store::fs_backend::FsBackend;
use shoplist::store::PersistenceGateway;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("state"));
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_slot_io() {
    let (_dir, backend) = setup();

    // 1. Absent
    assert_eq!(backend.read_slot("shoppingitems").unwrap(), None);

    // 2. Write + read
    backend.write_slot("shoppingitems", "[]").unwrap();
    assert_eq!(
        backend.read_slot("shoppingitems").unwrap(),
        Some("[]".to_string())
    );

    // 3. Remove
    backend.remove_slot("shoppingitems").unwrap();
    assert_eq!(backend.read_slot("shoppingitems").unwrap(), None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    backend.write_slot("shoppingitems", "[1]").unwrap();
    backend.write_slot("shoppingitems", "[2]").unwrap();

    let expected_path = backend.root().join("shoppingitems.json");
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "[2]");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let (_dir, backend) = setup();
    assert!(backend.write_slot("../escape", "x").is_err());
    assert!(backend.write_slot("", "x").is_err());
    assert!(backend.read_slot(".hidden").is_err());
}

#[test]
fn test_gateway_round_trip_on_disk() {
    let (_dir, backend) = setup();
    let gateway = PersistenceGateway::with_backend(backend);
    let entries = vec![
        Entry::new("b".into(), "Bread"),
        Entry::new("e".into(), "Eggs").with_completed(true),
    ];
    gateway.save(&entries).unwrap();
    assert_eq!(gateway.load(), entries);
}

#[test]
fn test_corrupt_file_loads_as_empty() {
    let (_dir, backend) = setup();
    fs::create_dir_all(backend.root()).unwrap();
    fs::write(backend.root().join("shoppingitems.json"), "{{{").unwrap();

    let gateway = PersistenceGateway::with_backend(backend);
    assert!(gateway.load().is_empty());
}

#[test]
fn test_list_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let config = ShoplistConfig::default();

    {
        let mut api = ShoplistApi::open(FsBackend::new(dir.path()), &config);
        api.on_submit("Eggs").unwrap();
        api.on_submit("Bread").unwrap();
        let eggs = api.current_order()[1].id.clone();
        api.on_toggle(&eggs, true).unwrap();
    }

    let api = ShoplistApi::open(FsBackend::new(dir.path()), &config);
    let names: Vec<_> = api.current_order().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Bread", "Eggs"]);
    assert!(api.current_order()[1].completed);
}
