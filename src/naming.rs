//! Table naming-convention classification.
//!
//! Pure string predicates over metadata table names, used by UI grouping to
//! arrange tables into folder hierarchies. These run independently of the
//! augmentation pipeline: they never mutate input and never touch the
//! object graph.
//!
//! The convention encodes structure into compound names:
//! `Claims_Profile` is the profile table of the `Claims` folder, and
//! `Claims_Summary_Report` is the `Summary` child of type `Report` under
//! `Claims`.

use regex::Regex;

/// Marker suffixes that place a table inside a named folder group.
const FOLDER_MARKERS: [&str; 7] = [
    "_Profile",
    "_Extension",
    "_Folder",
    "_Task",
    "_Flow",
    "_File",
    "_Note",
];

/// Whether the name contains any folder marker.
///
/// Containment, not anchored: `Claims_Profile_Archive` still counts.
pub fn is_folder_related(name: &str) -> bool {
    FOLDER_MARKERS.iter().any(|marker| name.contains(marker))
}

/// The folder group name: everything before the first underscore.
///
/// Returns `None` when the name has no underscore. Callers normally guard
/// with [`is_folder_related`] first.
pub fn folder_name(name: &str) -> Option<&str> {
    name.split_once('_').map(|(prefix, _)| prefix)
}

/// Whether the name marks a profile table.
pub fn is_profile_table(name: &str) -> bool {
    name.contains("_Profile")
}

/// Whether the name marks an extension table.
pub fn is_extension_table(name: &str) -> bool {
    name.contains("_Extension")
}

/// Whether the table belongs to the enterprise data warehouse.
///
/// Case-insensitive suffix match: `Sales_EDW` and `sales_edw` qualify,
/// `Sales_edw_archive` does not.
pub fn is_enterprise_warehouse_table(name: &str) -> bool {
    name.to_ascii_uppercase().ends_with("EDW")
}

/// Whether `table_name` belongs to the folder named `folder_name`.
///
/// Plain containment, matching how folder membership is displayed.
pub fn is_folder_related_table(folder_name: &str, table_name: &str) -> bool {
    table_name.contains(folder_name)
}

/// Extract the child display name from a `{folder}_{child}_{type}` name.
///
/// Matches `table_name` against `^{folder}_(.*)_{type}` and returns the
/// captured middle with its first underscore replaced by a space
/// (`Claims_Open_Items_Report` under folder `Claims`, type `Report` yields
/// `Open Items`). Both interpolated parts are escaped, so folder or type
/// names containing regex metacharacters match literally.
///
/// Returns `None` when the pattern does not match; callers treat that as
/// "no child relationship", not as an error.
pub fn child_table_name(table_name: &str, folder_name: &str, table_type: &str) -> Option<String> {
    let pattern = format!(
        "^{}_(.*)_{}",
        regex::escape(folder_name),
        regex::escape(table_type)
    );
    let re = Regex::new(&pattern).ok()?;
    let captured = re.captures(table_name)?.get(1)?;
    Some(captured.as_str().replacen('_', " ", 1))
}
