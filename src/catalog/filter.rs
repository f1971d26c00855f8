//! Size filtering over a fetched catalog.

use std::collections::HashSet;

use crate::catalog::Product;

/// Keep products that offer at least one of `sizes`, preserving order.
///
/// An empty size list keeps everything.
pub fn filter_by_sizes<S: AsRef<str>>(products: &[Product], sizes: &[S]) -> Vec<Product> {
    if sizes.is_empty() {
        return products.to_vec();
    }

    let wanted: HashSet<&str> = sizes.iter().map(AsRef::as_ref).collect();
    products
        .iter()
        .filter(|p| p.available_sizes().any(|s| wanted.contains(s)))
        .cloned()
        .collect()
}
