//! Logo Marquee Component
//!
//! Horizontally scrolling company logos. The track is rendered twice so the
//! CSS animation loops seamlessly at -50%.

use leptos::*;

/// Scrolling "trusted by" logo strip
#[component]
pub fn LogoMarquee(logos: &'static [&'static str]) -> impl IntoView {
    let track = move || {
        logos
            .iter()
            .map(|name| {
                view! {
                    <div class="flex items-center gap-2 text-gray-400 text-lg font-semibold shrink-0">
                        <span>{*name}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="relative overflow-hidden">
            // Fade edges
            <div class="absolute left-0 top-0 bottom-0 w-12 bg-gradient-to-r from-gray-950 to-transparent z-10 pointer-events-none" />
            <div class="absolute right-0 top-0 bottom-0 w-12 bg-gradient-to-l from-gray-950 to-transparent z-10 pointer-events-none" />

            <div
                class="flex items-center gap-10 opacity-40"
                style="animation: scroll-marquee 25s linear infinite; width: max-content;"
            >
                {track()}
                // Duplicate for seamless loop
                {track()}
            </div>
        </div>
    }
}
