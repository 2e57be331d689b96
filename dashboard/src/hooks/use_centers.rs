use payloads::{CenterType, responses::Center};
use std::fmt::Display;
use yew::prelude::*;

use super::{FetchOptions, use_list_fetch};
use crate::centers::{self, CenterOption};
use crate::get_api_client;

pub const CENTERS_ERROR_MESSAGE: &str =
    "Erreur lors du chargement des centres";

/// Hook return type for centers data
pub struct CentersHookReturn {
    pub centers: Vec<Center>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    pub set_centers: Callback<Vec<Center>>,
}

impl CentersHookReturn {
    pub fn centers_for_select(&self) -> Vec<CenterOption> {
        centers::options_for_select(&self.centers)
    }

    pub fn center_address(&self, id: impl Display) -> String {
        centers::center_address(&self.centers, id)
    }

    pub fn center_by_id(&self, id: impl Display) -> Option<&Center> {
        centers::center_by_id(&self.centers, id)
    }
}

/// Hook to list the centers of one type.
///
/// Switching `center_type` starts a new fetch against that type's endpoint.
#[hook]
pub fn use_centers(center_type: CenterType) -> CentersHookReturn {
    let list = use_list_fetch(
        center_type,
        FetchOptions::new(CENTERS_ERROR_MESSAGE),
        |center_type| async move {
            get_api_client().list_centers(center_type).await
        },
    );

    CentersHookReturn {
        centers: list.data,
        is_loading: list.is_loading,
        error: list.error,
        refetch: list.refetch,
        set_centers: list.set_data,
    }
}
