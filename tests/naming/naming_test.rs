use schemagraph::naming::{
    child_table_name, folder_name, is_enterprise_warehouse_table, is_extension_table,
    is_folder_related, is_folder_related_table, is_profile_table,
};

#[test]
fn test_is_folder_related() {
    assert!(is_folder_related("Claims_Profile"));
    assert!(is_folder_related("Claims_Extension"));
    assert!(is_folder_related("Claims_Folder"));
    assert!(is_folder_related("Claims_Task"));
    assert!(is_folder_related("Claims_Flow"));
    assert!(is_folder_related("Claims_File"));
    assert!(is_folder_related("Claims_Note"));

    assert!(!is_folder_related("Claims"));
    assert!(!is_folder_related(""));
    // Containment is case-sensitive, matching the stored names.
    assert!(!is_folder_related("claims_profile"));
}

#[test]
fn test_folder_name() {
    assert_eq!(folder_name("Claims_Profile"), Some("Claims"));
    assert_eq!(folder_name("Claims_Open_Items_Report"), Some("Claims"));
    // No underscore: the precondition does not hold, so no folder name.
    assert_eq!(folder_name("Claims"), None);
    // Leading underscore yields an empty folder prefix.
    assert_eq!(folder_name("_Profile"), Some(""));
}

#[test]
fn test_profile_and_extension_tables() {
    assert!(is_profile_table("Claims_Profile"));
    assert!(!is_profile_table("Claims_Extension"));
    assert!(is_extension_table("Claims_Extension"));
    assert!(!is_extension_table("Claims_Profile"));
}

#[test]
fn test_enterprise_warehouse_suffix() {
    assert!(is_enterprise_warehouse_table("Sales_EDW"));
    assert!(is_enterprise_warehouse_table("sales_edw"));
    assert!(is_enterprise_warehouse_table("SalesEdw"));
    // Suffix only: an EDW marker in the middle does not qualify.
    assert!(!is_enterprise_warehouse_table("Sales_edw_archive"));
    assert!(!is_enterprise_warehouse_table("Sales"));
}

#[test]
fn test_is_folder_related_table() {
    assert!(is_folder_related_table("Claims", "Claims_Summary_Report"));
    assert!(is_folder_related_table("Claims", "Claims"));
    assert!(!is_folder_related_table("Claims", "Policies_Summary_Report"));
}

#[test]
fn test_child_table_name_match() {
    assert_eq!(
        child_table_name("Claims_Summary_Report", "Claims", "Report"),
        Some("Summary".to_string())
    );
}

#[test]
fn test_child_table_name_mismatch_is_none() {
    assert_eq!(child_table_name("Other_X_Report", "Claims", "Report"), None);
    assert_eq!(child_table_name("Claims_Summary", "Claims", "Report"), None);
    assert_eq!(child_table_name("", "Claims", "Report"), None);
}

#[test]
fn test_child_table_name_multiword_child() {
    // Greedy capture takes the widest middle; only the first underscore
    // becomes a space.
    assert_eq!(
        child_table_name("Claims_Open_Items_Report", "Claims", "Report"),
        Some("Open Items".to_string())
    );
    assert_eq!(
        child_table_name("Claims_A_B_C_Report", "Claims", "Report"),
        Some("A B_C".to_string())
    );
}

#[test]
fn test_child_table_name_anchored_at_start_only() {
    // The pattern anchors the start but not the end.
    assert_eq!(child_table_name("XClaims_Summary_Report", "Claims", "Report"), None);
    assert_eq!(
        child_table_name("Claims_Summary_Reports", "Claims", "Report"),
        Some("Summary".to_string())
    );
}
