use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod centers;
pub mod components;
pub mod contexts;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod utils;

use components::layout::MainLayout;
use contexts::toast::ToastProvider;
use pages::{CentersPage, FormationsPage, VehiclesPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| {
            // Fallback to same origin
            web_sys::window().and_then(|window| window.location().origin().ok())
        })
        .unwrap_or_default();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/centres")]
    Centers,
    #[at("/formations")]
    Formations,
    #[at("/vehicules")]
    Vehicles,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Centers => html! { <CentersPage /> },
        Route::Formations => html! { <FormationsPage /> },
        Route::Vehicles => html! { <VehiclesPage /> },
        Route::NotFound => html! {
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"404"}</h1>
                <p class="text-gray-600 dark:text-gray-300">{"Page introuvable"}</p>
            </div>
        },
    }
}
