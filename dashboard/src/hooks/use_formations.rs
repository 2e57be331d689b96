use payloads::responses;
use yew::prelude::*;

use super::{FetchOptions, ListHookReturn, use_list_fetch};
use crate::get_api_client;

/// Hook to list the course catalog
#[hook]
pub fn use_formations() -> ListHookReturn<responses::Formation> {
    use_list_fetch(
        (),
        FetchOptions::new("Erreur lors du chargement des formations"),
        |_| async move { get_api_client().list_formations().await },
    )
}
