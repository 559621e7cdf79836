mod common;

use schemagraph::augment::{augment_database, TargetTable};
use schemagraph::model::{Database, FieldType};

use common::{field, fk_field, table};

fn sample_database() -> Database {
    Database {
        id: 1,
        name: "warehouse".to_string(),
        tables: vec![
            table(
                1,
                "Orders",
                vec![
                    field(10, "id", FieldType::Pk),
                    fk_field(11, "customer_id", 2),
                    fk_field(12, "supplier_id", 99), // no such sibling
                ],
            ),
            table(2, "Customers", vec![field(20, "id", FieldType::Pk)]),
        ],
    }
}

#[test]
fn test_tables_lookup_complete() {
    let db = augment_database(sample_database());

    assert_eq!(db.tables_lookup.len(), db.tables.len());
    assert_eq!(db.table(1).unwrap().name, "Orders");
    assert_eq!(db.table(2).unwrap().name, "Customers");
    assert!(db.table(99).is_none());
}

#[test]
fn test_every_field_enriched_and_indexed() {
    let db = augment_database(sample_database());

    for table in &db.tables {
        assert_eq!(table.fields_lookup.len(), table.fields.len());
        for field in &table.fields {
            assert!(!field.operators.is_empty());
            assert_eq!(field.operators_lookup.len(), field.operators.len());
        }
    }
}

#[test]
fn test_targets_resolve_to_siblings() {
    let db = augment_database(sample_database());

    let orders = db.table(1).unwrap();
    let target = orders.field(11).unwrap().target.as_ref().unwrap();
    assert_eq!(target.table_id, 2);
    match target.table.as_ref().unwrap() {
        TargetTable::Sibling(idx) => assert_eq!(db.tables[*idx].id, 2),
        TargetTable::Fetched(_) => panic!("database augmentation must not fetch"),
    }

    let resolved = db.target_table(orders.field(11).unwrap()).unwrap();
    assert_eq!(resolved.id, 2);
}

#[test]
fn test_missing_sibling_left_unresolved() {
    let db = augment_database(sample_database());

    let orders = db.table(1).unwrap();
    let dangling = orders.field(12).unwrap().target.as_ref().unwrap();
    assert_eq!(dangling.table_id, 99);
    assert!(dangling.table.is_none());
    assert!(db.target_table(orders.field(12).unwrap()).is_none());
}

#[test]
fn test_duplicate_table_id_last_wins() {
    let db = augment_database(Database {
        id: 1,
        name: "warehouse".to_string(),
        tables: vec![
            table(7, "First", vec![]),
            table(7, "Last", vec![]),
        ],
    });

    assert_eq!(db.tables.len(), 2);
    assert_eq!(db.table(7).unwrap().name, "Last");
}
