//! Lead Form Component
//!
//! Create or edit a lead. Only the listed fields are edited; any other
//! payload fields of an existing lead are left as they are.

use leadbook::routes::paths;
use leadbook::{Lead, LeadId};
use leptos::*;
use leptos_router::*;

use crate::state::use_global_state;

/// Editable fields: (payload key, label, multiline)
const FORM_FIELDS: &[(&str, &str, bool)] = &[
    ("name", "Name", false),
    ("company", "Company", false),
    ("email", "Email", false),
    ("phone", "Phone", false),
    ("notes", "Notes", true),
];

/// Lead form. With `existing` set, saving merges into that lead; otherwise
/// a new lead is added with the next free numeric id.
#[component]
pub fn LeadForm(existing: Option<Lead>) -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let editing_id: Option<LeadId> = existing.as_ref().map(|lead| lead.id.clone());
    let fields: Vec<(&'static str, &'static str, bool, RwSignal<String>)> = FORM_FIELDS
        .iter()
        .map(|&(key, label, multiline)| {
            let initial = existing
                .as_ref()
                .and_then(|lead| lead.get_str(key))
                .unwrap_or_default()
                .to_string();
            (key, label, multiline, create_rw_signal(initial))
        })
        .collect();

    let submit_fields = fields.clone();
    let submit_id = editing_id.clone();
    let submit_state = state.clone();
    let submit_navigate = navigate.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let id = submit_id.clone().unwrap_or_else(|| submit_state.next_id());
        let mut lead = Lead::new(id);
        for (key, _, _, value) in &submit_fields {
            lead.set(*key, value.get_untracked().trim().to_string());
        }

        let saved = if submit_id.is_some() {
            submit_state.update_lead(lead)
        } else {
            submit_state.add_lead(lead)
        };
        if saved {
            submit_navigate(paths::ROOT, Default::default());
        }
    };

    let delete_button = editing_id.map(|id| {
        let state = state.clone();
        let navigate = navigate.clone();
        view! {
            <button
                type="button"
                class="px-6 py-3 bg-red-600 hover:bg-red-700 rounded-lg font-medium transition-colors"
                on:click=move |_| {
                    if state.delete_lead(&id) {
                        navigate(paths::ROOT, Default::default());
                    }
                }
            >
                "Delete"
            </button>
        }
    });

    view! {
        <form on:submit=on_submit class="space-y-4 max-w-xl">
            {fields
                .into_iter()
                .map(|(key, label, multiline, value)| view! {
                    <FormField field=key label=label multiline=multiline value=value />
                })
                .collect_view()}

            <div class="flex items-center space-x-3">
                <button
                    type="submit"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold transition-colors"
                >
                    "Save"
                </button>
                <A href=paths::ROOT class="px-6 py-3 text-gray-300 hover:text-white">
                    "Cancel"
                </A>
                {delete_button}
            </div>
        </form>
    }
}

#[component]
fn FormField(
    field: &'static str,
    label: &'static str,
    multiline: bool,
    value: RwSignal<String>,
) -> impl IntoView {
    let input_class = "w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 \
                       focus:outline-none focus:border-primary-500";

    let input = if multiline {
        view! {
            <textarea
                id=field
                rows="4"
                class=input_class
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_view()
    } else {
        view! {
            <input
                id=field
                type="text"
                class=input_class
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_view()
    };

    view! {
        <div>
            <label for=field class="block text-sm font-medium text-gray-300 mb-1">{label}</label>
            {input}
        </div>
    }
}
