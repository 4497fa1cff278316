//! Navigation Component

use leadbook::routes::paths;
use leptos::*;
use leptos_router::*;

use crate::state::use_global_state;

/// (href, label) of the header links
const LINKS: &[(&str, &str)] = &[(paths::ROOT, "Customers"), (paths::NEW_LEAD, "New Lead")];

/// Header with the lead count and page links
#[component]
pub fn Nav() -> impl IntoView {
    let leads = use_global_state().leads;
    let count = move || match leads.with(Vec::len) {
        1 => "1 lead".to_string(),
        n => format!("{} leads", n),
    };

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <nav class="container mx-auto px-4 h-14 flex items-center gap-6">
                <A href=paths::ROOT class="font-bold text-lg">"Leadbook"</A>
                <span class="text-xs text-gray-400">{count}</span>
                <div class="ml-auto flex gap-2">
                    {LINKS
                        .iter()
                        .map(|&(href, label)| view! {
                            <A
                                href=href
                                exact=true
                                class="px-3 py-1 rounded text-gray-300 hover:text-white"
                                active_class="bg-gray-700 text-white"
                            >
                                {label}
                            </A>
                        })
                        .collect_view()}
                </div>
            </nav>
        </header>
    }
}
