use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    let link_class = "text-sm font-medium text-neutral-600 dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white";

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <h1 class="text-xl font-semibold text-gray-900 dark:text-white">{"Auto-École Taxi"}</h1>
                    </div>
                    <nav class="flex items-center space-x-6">
                        <Link<Route> to={Route::Centers} classes={classes!(link_class)}>{"Centres"}</Link<Route>>
                        <Link<Route> to={Route::Formations} classes={classes!(link_class)}>{"Formations"}</Link<Route>>
                        <Link<Route> to={Route::Vehicles} classes={classes!(link_class)}>{"Véhicules"}</Link<Route>>
                    </nav>
                </div>
            </div>
        </header>
    }
}
