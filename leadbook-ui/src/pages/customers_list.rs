//! Customers List Page
//!
//! Home page: every lead in insertion order, with edit links.

use leadbook::routes::{customer_path, paths};
use leadbook::Lead;
use leptos::*;
use leptos_router::*;

use crate::state::use_global_state;

/// Customers list page component
#[component]
pub fn CustomersList() -> impl IntoView {
    let state = use_global_state();
    let leads = state.leads;

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Customers"</h1>
                    <p class="text-gray-400 mt-1">"Leads saved in this browser"</p>
                </div>
                <A
                    href=paths::NEW_LEAD
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ New Lead"
                </A>
            </div>

            {move || {
                if leads.with(Vec::is_empty) {
                    view! {
                        <div class="bg-gray-800 rounded-xl p-8 text-center text-gray-400">
                            "No leads yet."
                        </div>
                    }.into_view()
                } else {
                    view! { <LeadTable leads=leads.get() /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn LeadTable(leads: Vec<Lead>) -> impl IntoView {
    view! {
        <table class="w-full bg-gray-800 rounded-xl overflow-hidden">
            <thead class="bg-gray-700 text-left text-sm text-gray-300">
                <tr>
                    <th class="px-4 py-3">"ID"</th>
                    <th class="px-4 py-3">"Name"</th>
                    <th class="px-4 py-3">"Company"</th>
                    <th class="px-4 py-3">"Email"</th>
                    <th class="px-4 py-3"></th>
                </tr>
            </thead>
            <tbody>
                // Ids are not guaranteed unique, so rows are rendered by position
                {leads.into_iter().map(|lead| view! { <LeadRow lead=lead /> }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn LeadRow(lead: Lead) -> impl IntoView {
    let text = |key: &str| lead.get_str(key).unwrap_or("—").to_string();
    let (name, company, email) = (text("name"), text("company"), text("email"));

    view! {
        <tr class="border-t border-gray-700 hover:bg-gray-750">
            <td class="px-4 py-3 font-mono text-sm text-gray-400">{lead.id.to_string()}</td>
            <td class="px-4 py-3">{name}</td>
            <td class="px-4 py-3">{company}</td>
            <td class="px-4 py-3">{email}</td>
            <td class="px-4 py-3 text-right">
                <A href=customer_path(&lead.id) class="text-primary-400 hover:text-primary-300">
                    "Edit"
                </A>
            </td>
        </tr>
    }
}
