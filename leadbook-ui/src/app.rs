//! App Root Component
//!
//! Main application component with routing and global providers. Route
//! paths come from the shared `leadbook::routes` table.

use leadbook::routes::paths;
use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{CustomersList, LeadPage};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Load leads from local storage and provide state to all components
    provide_global_state();

    view! {
        <Router>
            <Routes>
                <Route path=paths::ROOT view=MainLayout>
                    <Route path=paths::NEW_LEAD view=LeadPage />
                    <Route path=paths::CUSTOMER view=LeadPage />
                    <Route path=paths::ROOT view=CustomersList />
                </Route>
                // Always last
                <Route path=paths::CATCH_ALL view=NotFound />
            </Routes>
        </Router>
    }
}

/// Shell around every page
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Nav />

            <main class="flex-1 container mx-auto px-4 py-8">
                <Outlet />
            </main>

            <Toast />
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=paths::ROOT
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Customers"
            </A>
        </div>
    }
}
