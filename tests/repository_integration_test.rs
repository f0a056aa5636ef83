// ==========================================
// Service API integration tests
// ==========================================
// Exercises the registration / query / deletion contract end
// to end over a real temp database.
// ==========================================

mod test_helpers;

use apiary_monitor::{logging, ApiaryApi, MonitorConfig};
use chrono::Local;

fn create_test_api(db_path: &str) -> ApiaryApi {
    logging::init_test();
    ApiaryApi::new(MonitorConfig::new(db_path))
}

#[test]
fn test_duplicate_hive_code() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let api = create_test_api(&db_path);

    assert!(api.register_hive("H1", "Apiary A"));
    assert!(!api.register_hive("H1", "Apiary B"));

    let hives = api.list_hives();
    assert_eq!(hives.len(), 1);
    assert_eq!(hives[0].code, "H1");
    assert_eq!(hives[0].location, "Apiary A");
}

#[test]
fn test_child_writes_require_existing_hive() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let api = create_test_api(&db_path);

    assert!(!api.register_inspection(999, 30.0, 60.0, false, "good", None));
    assert!(!api.register_production(999, 4.2, "standard"));

    let conn = test_helpers::open_test_connection(&db_path).expect("Failed to open db");
    assert_eq!(test_helpers::count_rows(&conn, "inspections"), 0);
    assert_eq!(test_helpers::count_rows(&conn, "production_records"), 0);
}

#[test]
fn test_delete_hive_cascades_to_dependents() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let api = create_test_api(&db_path);

    assert!(api.register_hive("H1", "Apiary A"));
    let hive_id = api.list_hives()[0].id;

    assert!(api.register_inspection(hive_id, 30.0, 60.0, false, "good", None));
    assert!(api.register_inspection(hive_id, 28.5, 58.0, true, "pests spotted", Some("mites")));
    assert!(api.register_production(hive_id, 3.0, "standard"));
    assert!(api.register_production(hive_id, 4.5, "premium"));
    assert!(api.register_production(hive_id, 2.2, "standard"));

    {
        let conn = test_helpers::open_test_connection(&db_path).expect("Failed to open db");
        assert_eq!(test_helpers::count_rows(&conn, "hives"), 1);
        assert_eq!(test_helpers::count_rows(&conn, "inspections"), 2);
        assert_eq!(test_helpers::count_rows(&conn, "production_records"), 3);
    }

    assert!(api.delete_hive(hive_id));

    assert!(api.get_hive_by_id(hive_id).is_none());
    assert!(api.list_inspections_by_hive(hive_id).is_empty());
    assert!(api.list_productions_by_hive(hive_id).is_empty());

    let conn = test_helpers::open_test_connection(&db_path).expect("Failed to open db");
    assert_eq!(test_helpers::count_rows(&conn, "hives"), 0);
    assert_eq!(test_helpers::count_rows(&conn, "inspections"), 0);
    assert_eq!(test_helpers::count_rows(&conn, "production_records"), 0);
}

#[test]
fn test_delete_unknown_hive_is_reported() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let api = create_test_api(&db_path);

    assert!(!api.delete_hive(424242));
}

#[test]
fn test_list_hives_sorted_by_code() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let api = create_test_api(&db_path);

    assert!(api.register_hive("B1", "south field"));
    assert!(api.register_hive("A1", "north field"));

    let codes: Vec<String> = api.list_hives().into_iter().map(|h| h.code).collect();
    assert_eq!(codes, vec!["A1".to_string(), "B1".to_string()]);
}

#[test]
fn test_end_to_end_inspection_flow() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let api = create_test_api(&db_path);

    assert!(api.register_hive("H1", "Apiary A"));
    let hive_id = api.list_hives()[0].id;

    assert!(api.register_inspection(hive_id, 30.0, 60.0, false, "good", Some("")));

    let inspections = api.list_inspections_by_hive(hive_id);
    assert_eq!(inspections.len(), 1);

    let inspection = &inspections[0];
    assert_eq!(inspection.hive_id, hive_id);
    assert_eq!(inspection.inspection_date, Local::now().date_naive());
    assert_eq!(inspection.temperature, Some(30.0));
    assert_eq!(inspection.humidity, Some(60.0));
    assert!(!inspection.pest_presence);
    assert_eq!(inspection.general_condition.as_deref(), Some("good"));
}

#[test]
fn test_register_hive_rejects_blank_input() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("Failed to create test db");
    let api = create_test_api(&db_path);

    assert!(!api.register_hive("", "Apiary A"));
    assert!(!api.register_hive("H1", "   "));
    assert!(api.list_hives().is_empty());
}

#[test]
fn test_no_store_mode_degrades_instead_of_panicking() {
    logging::init_test();

    // parent directory does not exist, so the connection cannot be opened
    let api = ApiaryApi::new(MonitorConfig::new("/nonexistent-apiary-dir/sub/apiary.db"));

    assert!(!api.has_store());
    assert!(!api.register_hive("H1", "Apiary A"));
    assert!(!api.register_inspection(1, 30.0, 60.0, false, "good", None));
    assert!(!api.register_production(1, 1.0, "standard"));
    assert!(!api.delete_hive(1));
    assert!(api.list_hives().is_empty());
    assert!(api.get_hive_by_id(1).is_none());
    assert!(api.list_inspections_by_hive(1).is_empty());
    assert!(api.list_productions_by_hive(1).is_empty());
    assert!(api.check_alerts().is_empty());
    assert!(!api.generate_production_report());
}
