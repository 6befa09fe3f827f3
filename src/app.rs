//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::pages::{Dashboard, Landing};
use crate::state::session::provide_session;

/// Keyframes for the decorative animations used across both pages.
const KEYFRAMES: &str = "
@keyframes scroll-marquee {
  0% { transform: translateX(0); }
  100% { transform: translateX(-50%); }
}
@keyframes modal-in {
  from { opacity: 0; transform: scale(0.95) translateY(10px); }
  to { opacity: 1; transform: scale(1) translateY(0); }
}
@keyframes fade-in-up {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: translateY(0); }
}
.animate-modal-in { animation: modal-in 0.25s cubic-bezier(0.16, 1, 0.3, 1) forwards; }
";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the session store to all components
    provide_session();

    view! {
        <Router>
            <style>{KEYFRAMES}</style>
            <div class="min-h-screen bg-gray-950 text-gray-100 antialiased">
                <Routes>
                    <Route path="/" view=Landing />
                    <Route path="/dashboard" view=Dashboard />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </div>
        </Router>
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
                href="/"
                class="px-6 py-3 bg-cyan-600 hover:bg-cyan-700 rounded-lg font-medium transition-colors"
            >
                "Back to Avia"
            </A>
        </div>
    }
}
