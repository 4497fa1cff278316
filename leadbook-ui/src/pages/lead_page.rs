//! Lead Page
//!
//! Serves both `/new` (empty form) and `/customers/:id` (edit form).

use leadbook::routes::{customer_id_from_param, paths};
use leadbook::LeadId;
use leptos::*;
use leptos_router::*;

use crate::components::LeadForm;
use crate::state::use_global_state;

/// Lead create/edit page component
#[component]
pub fn LeadPage() -> impl IntoView {
    let state = use_global_state();
    let params = use_params_map();

    // The router has already percent-decoded the segment
    let lead_id = move || params.with(|p| p.get("id").map(|raw| customer_id_from_param(raw)));

    view! {
        <div class="space-y-6">
            {move || match lead_id() {
                None => view! {
                    <h1 class="text-3xl font-bold">"New Lead"</h1>
                    <LeadForm existing=None />
                }.into_view(),
                Some(id) => match state.lead(&id) {
                    Some(lead) => view! {
                        <h1 class="text-3xl font-bold">{format!("Lead {}", id)}</h1>
                        <LeadForm existing=Some(lead) />
                    }.into_view(),
                    None => view! { <MissingLead id=id /> }.into_view(),
                },
            }}
        </div>
    }
}

#[component]
fn MissingLead(id: LeadId) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-8 text-center">
            <h1 class="text-2xl font-bold mb-2">"Lead not found"</h1>
            <p class="text-gray-400 mb-6">{format!("There is no lead with id {}.", id)}</p>
            <A href=paths::ROOT class="text-primary-400 hover:text-primary-300">
                "Back to Customers"
            </A>
        </div>
    }
}
