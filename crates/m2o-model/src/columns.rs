//! Canonical catalog column names.
//!
//! The raw catalog is a flat export whose headers vary only in whitespace
//! and casing; everything downstream addresses columns through these
//! constants so the spelling lives in one place.

pub const PRODUCT_FAMILY: &str = "Product Family";
pub const PRODUCT_TYPE: &str = "Product Type";
pub const PRODUCT_MODEL: &str = "Product Model";
pub const PRODUCT_DISPLAY_NAME: &str = "Product Display Name";
pub const SOFA_DIRECTION: &str = "Sofa Direction";
pub const UPHOLSTERY_TYPE: &str = "Upholstery Type";
pub const UPHOLSTERY_COLOR: &str = "Upholstery Color";
pub const BASE_COLOR: &str = "Base Color";
pub const ITEM_NO: &str = "Item No";
pub const ARTICLE_NO: &str = "Article No";
pub const ITEM_NAME: &str = "Item Name";
pub const IMAGE_URL_SWATCH: &str = "Image URL swatch";

/// Columns the index cannot be built without. `Product Display Name` is
/// deliberately absent: it is derived from `Product Type` / `Product Model`
/// when the export does not carry it.
pub const REQUIRED: &[&str] = &[
    PRODUCT_FAMILY,
    UPHOLSTERY_TYPE,
    UPHOLSTERY_COLOR,
    BASE_COLOR,
    ITEM_NO,
];

/// Columns used for display and export enrichment. Their absence degrades
/// the output (fewer populated fields) but never fails the load.
pub const EXPECTED: &[&str] = &[
    PRODUCT_TYPE,
    PRODUCT_MODEL,
    SOFA_DIRECTION,
    ARTICLE_NO,
    ITEM_NAME,
    IMAGE_URL_SWATCH,
];
