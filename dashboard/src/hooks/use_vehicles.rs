use payloads::responses;
use yew::prelude::*;

use super::{FetchOptions, ListHookReturn, use_list_fetch};
use crate::get_api_client;

/// Hook to list the rental fleet
///
/// Availability changes quickly, so a failed refetch empties the list
/// instead of showing vehicles that may already be rented out.
#[hook]
pub fn use_vehicles() -> ListHookReturn<responses::Vehicle> {
    use_list_fetch(
        (),
        FetchOptions::new("Erreur lors du chargement des véhicules")
            .clear_on_failure(),
        |_| async move { get_api_client().list_vehicles().await },
    )
}
