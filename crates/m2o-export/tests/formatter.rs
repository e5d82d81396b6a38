use m2o_catalog::CatalogIndex;
use m2o_export::{format_rows, is_price_column};
use m2o_model::{RawTable, ResolvedItem, SelectionKey, describe};

fn index() -> CatalogIndex {
    let headers = [
        "Product Family",
        "Product Display Name",
        "Upholstery Type",
        "Upholstery Color",
        "Base Color",
        "Item No",
        "Article No",
        "Item Name",
        "Wholesale Price (EUR)",
    ];
    let rows: Vec<Vec<String>> = [
        [
            "Rest", "Sofa", "Fabric", "Blue", "N/A", "IT-1", "A-1", "Rest Sofa Blue", "1200",
        ],
        [
            "Rest", "Sofa", "Fabric", "Grey", "Oak", "IT-2", "A-2", "", "1300",
        ],
    ]
    .iter()
    .map(|row| row.iter().map(ToString::to_string).collect())
    .collect();
    CatalogIndex::load(&RawTable {
        headers: headers.iter().map(ToString::to_string).collect(),
        rows,
    })
    .expect("index loads")
}

fn item(item_number: &str, color: &str, base: Option<&str>) -> ResolvedItem {
    let key = SelectionKey::new("Rest", "Sofa", "Fabric", color);
    ResolvedItem {
        description: describe(&key, base),
        item_number: item_number.to_string(),
        article_number: None,
        source_key: key,
        base_color: base.map(ToString::to_string),
    }
}

fn template() -> Vec<String> {
    [
        "Item No",
        "Product",
        "Wholesale Price (EUR)",
        "retail price DKK",
        "Upholstery Color",
        "Not In Catalog",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[test]
fn price_columns_never_survive_the_template() {
    let table = format_rows(&[item("IT-1", "Blue", None)], &index(), &template());
    assert_eq!(
        table.columns,
        vec!["Item No", "Product", "Upholstery Color", "Not In Catalog"]
    );
    assert!(!table.columns.iter().any(|c| is_price_column(c)));
}

#[test]
fn product_column_prefers_item_name() {
    let items = [item("IT-1", "Blue", None), item("IT-2", "Grey", Some("Oak"))];
    let table = format_rows(&items, &index(), &template());
    assert_eq!(table.rows.len(), 2);
    // IT-1 carries an Item Name; IT-2 falls back to the display name.
    assert_eq!(table.rows[0][1], "Rest Sofa Blue");
    assert_eq!(table.rows[1][1], "Sofa");
}

#[test]
fn unmatched_template_columns_stay_blank() {
    let table = format_rows(&[item("IT-1", "Blue", None)], &index(), &template());
    assert_eq!(table.rows[0][0], "IT-1");
    assert_eq!(table.rows[0][2], "Blue");
    assert_eq!(table.rows[0][3], "");
}

#[test]
fn unknown_item_numbers_are_skipped() {
    let items = [item("IT-404", "Blue", None), item("IT-1", "Blue", None)];
    let table = format_rows(&items, &index(), &template());
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][0], "IT-1");
}

#[test]
fn empty_template_falls_back_to_catalog_columns() {
    let table = format_rows(&[item("IT-1", "Blue", None)], &index(), &[]);
    assert!(table.columns.iter().any(|c| c == "Product Family"));
    assert!(table.columns.iter().any(|c| c == "Item Name"));
    assert!(!table.columns.iter().any(|c| is_price_column(c)));
    let color_idx = table
        .columns
        .iter()
        .position(|c| c == "Upholstery Color")
        .expect("color column present");
    assert_eq!(table.rows[0][color_idx], "Blue");
}
