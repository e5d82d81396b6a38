//! Product display name composition.
//!
//! Catalogs that do not carry a `Product Display Name` column get one
//! derived from product type and model. Chaise longue sofas additionally
//! carry their direction, since left and right variants are otherwise
//! indistinguishable.

use m2o_model::is_absent;

const DIRECTIONAL_TYPE: &str = "sofa chaise longue";

/// Join the non-absent parts of {type, model} with `" - "`, appending the
/// direction only for chaise longue sofas with a usable direction value.
pub fn compose_display_name(
    product_type: &str,
    product_model: &str,
    direction: &str,
) -> String {
    let mut name = String::new();
    for part in [product_type, product_model] {
        if is_absent(part) {
            continue;
        }
        if !name.is_empty() {
            name.push_str(" - ");
        }
        name.push_str(part.trim());
    }
    if product_type.trim().eq_ignore_ascii_case(DIRECTIONAL_TYPE) && !is_absent(direction) {
        if !name.is_empty() {
            name.push_str(" - ");
        }
        name.push_str(direction.trim());
    }
    name
}
