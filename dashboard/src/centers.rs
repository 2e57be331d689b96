//! Lookups and labels derived from a list of centers.
//!
//! Ids are compared in stringified form: ids from route parameters are
//! strings while fetched records usually carry numbers.

use payloads::{find_by_id, responses::Center};
use std::fmt::Display;

/// One entry of a center `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterOption {
    pub value: String,
    pub label: String,
    pub full_address: String,
}

/// `"<address>, <city>"`, or just the city when the address is unknown.
pub fn full_address(center: &Center) -> String {
    match center.address.as_deref() {
        Some(address) if !address.is_empty() => {
            format!("{}, {}", address, center.city)
        }
        _ => center.city.clone(),
    }
}

/// Selection entries in the order the centers were fetched.
pub fn options_for_select(centers: &[Center]) -> Vec<CenterOption> {
    centers
        .iter()
        .map(|center| CenterOption {
            value: center.id.to_string(),
            label: format!("{} - {}", center.name, center.city),
            full_address: full_address(center),
        })
        .collect()
}

pub fn center_by_id(centers: &[Center], id: impl Display) -> Option<&Center> {
    find_by_id(centers, id)
}

/// Full address of the center, or an empty string if there is no such
/// center.
pub fn center_address(centers: &[Center], id: impl Display) -> String {
    center_by_id(centers, id)
        .map(full_address)
        .unwrap_or_default()
}
