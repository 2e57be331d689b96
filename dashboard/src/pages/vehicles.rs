use payloads::{ResourceId, responses::Vehicle};
use yew::prelude::*;

use crate::contexts::toast::{use_error_toast, use_toast};
use crate::hooks::use_vehicles;
use crate::utils::format_euros;

/// Flip the availability of one vehicle, leaving the others untouched.
fn toggle_availability(vehicles: &[Vehicle], id: &ResourceId) -> Vec<Vehicle> {
    vehicles
        .iter()
        .cloned()
        .map(|mut vehicle| {
            if &vehicle.id == id {
                vehicle.available = !vehicle.available;
            }
            vehicle
        })
        .collect()
}

#[function_component]
pub fn VehiclesPage() -> Html {
    let vehicles_hook = use_vehicles();
    let toasts = use_toast();
    use_error_toast(vehicles_hook.error.clone());

    let on_toggle = {
        let vehicles = vehicles_hook.data.clone();
        let set_data = vehicles_hook.set_data.clone();
        Callback::from(move |id: ResourceId| {
            let updated = toggle_availability(&vehicles, &id);
            if let Some(vehicle) = updated.iter().find(|v| v.id == id) {
                let status = if vehicle.available { "disponible" } else { "réservé" };
                toasts.success(format!(
                    "{} {} marqué comme {}",
                    vehicle.brand, vehicle.model, status
                ));
            }
            set_data.emit(updated);
        })
    };

    let on_refresh = {
        let refetch = vehicles_hook.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold">{"Véhicules"}</h2>
                <button onclick={on_refresh} class="text-sm hover:underline">{"Actualiser"}</button>
            </div>
            {vehicles_hook.render("véhicules", |vehicles, _, _| html! {
                <table class="w-full text-sm">
                    <thead>
                        <tr class="text-left text-neutral-500">
                            <th class="py-2">{"Véhicule"}</th>
                            <th class="py-2">{"Tarif / jour"}</th>
                            <th class="py-2">{"Statut"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for vehicles.iter().map(|vehicle| {
                            let onclick = {
                                let on_toggle = on_toggle.clone();
                                let id = vehicle.id.clone();
                                Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
                            };
                            html! {
                                <tr key={vehicle.id.to_string()} class="border-t border-neutral-200 dark:border-neutral-700">
                                    <td class="py-2">{format!("{} {}", vehicle.brand, vehicle.model)}</td>
                                    <td class="py-2">{format_euros(vehicle.daily_rate)}</td>
                                    <td class="py-2">
                                        <button onclick={onclick} class="hover:underline">
                                            {if vehicle.available { "Disponible" } else { "Réservé" }}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            })}
        </div>
    }
}
