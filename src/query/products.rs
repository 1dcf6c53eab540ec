//! Product filter, sort, and search derivations.

use std::cmp::Ordering;

use crate::domain::Product;

use super::{ProductQuery, SortDirection, SortHeader};

/// Derive the product table view: status filter first, then an
/// in-place sort of the survivors. Products are never dropped,
/// duplicated, or altered beyond their order.
pub fn derive_products(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    let mut derived: Vec<Product> = match query.status_filter.status() {
        None => products.to_vec(),
        Some(status) => products
            .iter()
            .filter(|product| product.status == status)
            .cloned()
            .collect(),
    };

    sort_products(&mut derived, query.sort_header, query.sort_direction);
    derived
}

/// Sort in place by the selected column. Uses `slice::sort_by`, which
/// is stable, so equal keys keep their incoming order. String columns
/// compare case-sensitively by code point; numeric columns use total
/// float ordering, with an absent rating ordering as zero.
fn sort_products(products: &mut [Product], header: SortHeader, direction: SortDirection) {
    products.sort_by(|a, b| {
        let ordering = compare_by_header(a, b, header);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_by_header(a: &Product, b: &Product, header: SortHeader) -> Ordering {
    match header {
        SortHeader::Name => a.name.cmp(&b.name),
        SortHeader::Price => a.price_amount.total_cmp(&b.price_amount),
        SortHeader::Specs => a.specs.cmp(&b.specs),
        SortHeader::SupplierInfo => a.supplier_info.cmp(&b.supplier_info),
        SortHeader::Country => a.made_in.cmp(&b.made_in),
        SortHeader::Company => a
            .production_company_name
            .cmp(&b.production_company_name),
        SortHeader::Rating => a
            .rating
            .unwrap_or(0.0)
            .total_cmp(&b.rating.unwrap_or(0.0)),
    }
}

/// Case-insensitive substring search on the product name only. The
/// result is neither status-filtered nor re-sorted; search bypasses
/// the table's filter and sort state entirely.
pub fn search_products(products: &[Product], term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
