//! Shared fixtures for command and state tests.

use kiosk_core::order::OptionRef;

use crate::state::CatalogState;

/// Two categories: coffee (americano, latte, inactive vanilla latte) and
/// dessert (cheesecake).
pub const SAMPLE_CATALOG: &str = include_str!("../catalog.sample.json");

pub fn loaded_catalog() -> CatalogState {
    CatalogState::from_json(SAMPLE_CATALOG).expect("sample catalog is valid")
}

pub fn refs(pairs: &[(i64, i64)]) -> Vec<OptionRef> {
    pairs
        .iter()
        .map(|&(group_id, option_id)| OptionRef { group_id, option_id })
        .collect()
}
