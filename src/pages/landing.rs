//! Landing Page
//!
//! Public marketing page: nav with sign-in, hero with animated stats, live
//! product demo with a typewriter transcript, pricing, FAQ, and newsletter.
//! Signing in writes the session marker the dashboard later checks.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{SignInModal, StatCounter};
use crate::content;
use crate::effects::{self, Typewriter};
use crate::state::session::Session;
use crate::state::toggle::toggle_open;

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not provided");

    // Read once at mount; the marker is not reactive to other tabs
    let (identity, set_identity) = create_signal(session.identity());
    let (show_sign_in, set_show_sign_in) = create_signal(false);

    let session_for_in = session.clone();
    let sign_in = Callback::new(move |email: String| {
        session_for_in.sign_in(&email);
        set_identity.set(session_for_in.identity());
        set_show_sign_in.set(false);
    });

    let session_for_out = session.clone();
    let sign_out = Callback::new(move |_: ()| {
        session_for_out.sign_out();
        set_identity.set(None);
    });

    let open_sign_in = Callback::new(move |_: ()| set_show_sign_in.set(true));
    let close_sign_in = Callback::new(move |_: ()| set_show_sign_in.set(false));

    view! {
        <div class="overflow-x-hidden">
            <LandingNav
                identity=identity
                on_open_sign_in=open_sign_in
                on_sign_out=sign_out
            />

            {move || {
                show_sign_in.get().then(|| view! {
                    <SignInModal on_sign_in=sign_in on_close=close_sign_in />
                })
            }}

            <Hero />
            <TrustedBy />
            <FeaturesSection />
            <HowItWorks />
            <DemoSection />
            <PricingSection />
            <TestimonialsSection />
            <FaqSection />
            <Newsletter />
            <LandingFooter />
        </div>
    }
}

/// Fixed top navigation with scroll-aware background
#[component]
fn LandingNav(
    identity: ReadSignal<Option<String>>,
    on_open_sign_in: Callback<()>,
    on_sign_out: Callback<()>,
) -> impl IntoView {
    let (scrolled, set_scrolled) = create_signal(false);
    let (mobile_open, set_mobile_open) = create_signal(false);
    let (user_menu_open, set_user_menu_open) = create_signal(false);

    // Swap the nav background once the page scrolls past the top edge
    create_effect(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(w) = web_sys::window() {
                set_scrolled.set(w.scroll_y().unwrap_or(0.0) > 20.0);
            }
        });
        let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());

        on_cleanup(move || {
            if let Some(w) = web_sys::window() {
                let _ = w.remove_event_listener_with_callback(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                );
            }
        });
    });

    let nav_class = move || {
        if scrolled.get() {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 \
             bg-gray-950/80 backdrop-blur-xl border-b border-white/10 shadow-lg"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16 lg:h-20">
                    // Logo
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"🧠"</span>
                        <span class="text-xl font-bold bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                            "Avia"
                        </span>
                    </div>

                    // Desktop links
                    <div class="hidden md:flex items-center gap-8">
                        {content::NAV_LINKS.iter().map(|link| view! {
                            <button
                                on:click=move |_| effects::scroll_to_id(link.target)
                                class="text-sm text-gray-400 hover:text-white transition-colors"
                            >
                                {link.label}
                            </button>
                        }).collect_view()}
                    </div>

                    // Desktop CTA: Sign In or Dashboard + user menu
                    <div class="hidden md:flex items-center gap-4">
                        {move || match identity.get() {
                            Some(id) => view! {
                                <div class="relative">
                                    <A
                                        href="/dashboard"
                                        class="px-4 py-2.5 text-sm font-medium rounded-lg bg-gradient-to-r from-cyan-500 to-blue-600 hover:from-cyan-400 hover:to-blue-500 text-white transition-all shadow-lg shadow-cyan-500/25"
                                    >
                                        "Dashboard"
                                    </A>
                                    <button
                                        on:click=move |_| set_user_menu_open.update(|open| *open = !*open)
                                        class="ml-2 w-9 h-9 rounded-full bg-white/5 border border-white/10 text-sm text-gray-300 hover:text-white"
                                        aria-label="Account menu"
                                    >
                                        "👤"
                                    </button>
                                    {move || user_menu_open.get().then(|| {
                                        let id = id.clone();
                                        view! {
                                            // Click-away layer closes the menu
                                            <div
                                                class="fixed inset-0 z-40"
                                                on:click=move |_| set_user_menu_open.set(false)
                                            />
                                            <div class="absolute right-0 mt-2 w-56 rounded-xl bg-gray-900 border border-white/10 shadow-2xl overflow-hidden z-50">
                                                <div class="px-4 py-3 border-b border-white/5">
                                                    <p class="text-xs text-gray-500">"Signed in as"</p>
                                                    <p class="text-sm text-white truncate">{id}</p>
                                                </div>
                                                <button
                                                    on:click=move |_| {
                                                        set_user_menu_open.set(false);
                                                        on_sign_out.call(());
                                                    }
                                                    class="w-full flex items-center gap-2 px-4 py-3 text-sm text-gray-400 hover:text-white hover:bg-white/5 transition-colors"
                                                >
                                                    "Sign Out"
                                                </button>
                                            </div>
                                        }
                                    })}
                                </div>
                            }.into_view(),
                            None => view! {
                                <button
                                    on:click=move |_| on_open_sign_in.call(())
                                    class="px-5 py-2.5 text-sm font-medium rounded-lg bg-gradient-to-r from-cyan-500 to-blue-600 hover:from-cyan-400 hover:to-blue-500 text-white transition-all shadow-lg shadow-cyan-500/25"
                                >
                                    "Sign In"
                                </button>
                            }.into_view(),
                        }}
                    </div>

                    // Mobile menu toggle
                    <button
                        class="md:hidden text-gray-400 hover:text-white p-2"
                        on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                        aria-label="Toggle menu"
                    >
                        {move || if mobile_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            // Mobile menu
            {move || mobile_open.get().then(|| view! {
                <div class="md:hidden bg-gray-950/95 backdrop-blur-xl border-t border-white/10 px-4 py-6 space-y-4">
                    {content::NAV_LINKS.iter().map(|link| view! {
                        <button
                            on:click=move |_| {
                                set_mobile_open.set(false);
                                effects::scroll_to_id(link.target);
                            }
                            class="block w-full text-left text-gray-300 hover:text-white py-2 text-base"
                        >
                            {link.label}
                        </button>
                    }).collect_view()}

                    {move || match identity.get() {
                        Some(_) => view! {
                            <A
                                href="/dashboard"
                                class="block w-full text-center px-5 py-2.5 text-sm font-medium rounded-lg bg-gradient-to-r from-cyan-500 to-blue-600 text-white mt-4"
                            >
                                "Dashboard"
                            </A>
                        }.into_view(),
                        None => view! {
                            <button
                                on:click=move |_| {
                                    set_mobile_open.set(false);
                                    on_open_sign_in.call(());
                                }
                                class="w-full px-5 py-2.5 text-sm font-medium rounded-lg bg-gradient-to-r from-cyan-500 to-blue-600 text-white mt-4"
                            >
                                "Sign In"
                            </button>
                        }.into_view(),
                    }}
                </div>
            })}
        </nav>
    }
}

/// Hero section with the four animated stats
#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center pt-20 pb-16 overflow-hidden">
            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 w-full">
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-16 items-center">
                    <div class="text-center lg:text-left">
                        <div class="inline-flex items-center gap-2 px-4 py-1.5 rounded-full bg-white/5 border border-white/10 mb-6">
                            <div class="w-2 h-2 rounded-full bg-green-400 animate-pulse" />
                            <span class="text-xs text-gray-400 font-medium">"Now in Public Beta"</span>
                        </div>

                        <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold leading-tight tracking-tight">
                            "Ace Every Interview with "
                            <span class="bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-500 bg-clip-text text-transparent">
                                "AI-Powered"
                            </span>
                            " Confidence"
                        </h1>

                        <p class="mt-6 text-base sm:text-lg text-gray-400 max-w-xl mx-auto lg:mx-0 leading-relaxed">
                            "Avia is your invisible interview copilot. Get real-time AI answers, coding support, and personalized coaching - completely undetectable."
                        </p>

                        <div class="mt-8 flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                            <button
                                on:click=move |_| effects::scroll_to_id("pricing")
                                class="px-8 py-3.5 text-base font-semibold rounded-xl bg-gradient-to-r from-cyan-500 to-blue-600 hover:from-cyan-400 hover:to-blue-500 text-white transition-all shadow-lg shadow-cyan-500/25"
                            >
                                "Start Free Trial"
                            </button>
                            <button
                                on:click=move |_| effects::scroll_to_id("demo")
                                class="px-8 py-3.5 text-base font-semibold rounded-xl border border-white/20 text-gray-300 hover:text-white hover:border-white/40 hover:bg-white/5 transition-all"
                            >
                                "▶ Watch Demo"
                            </button>
                        </div>

                        // Stats: counters start on first scroll into view
                        <div class="mt-12 grid grid-cols-2 sm:grid-cols-4 gap-6">
                            <StatCounter target=50 suffix="K+" label="Active Users" />
                            <StatCounter target=94 suffix="%" label="Success Rate" />
                            <StatCounter target=200 suffix="+" label="Companies" />
                            <StatCounter target=49 tenths=true label="User Rating" />
                        </div>
                    </div>

                    // Floating product mockup
                    <div class="hidden lg:block relative">
                        <div class="rounded-2xl bg-gray-900/80 backdrop-blur-xl border border-white/10 p-6 shadow-2xl">
                            <div class="flex items-center gap-2 mb-4">
                                <div class="w-3 h-3 rounded-full bg-red-500/80" />
                                <div class="w-3 h-3 rounded-full bg-yellow-500/80" />
                                <div class="w-3 h-3 rounded-full bg-green-500/80" />
                                <span class="text-xs text-gray-500 ml-2">"Avia Interview Copilot"</span>
                            </div>
                            <div class="space-y-3">
                                <div class="bg-white/5 rounded-lg p-3 border border-white/5">
                                    <div class="text-xs text-cyan-400 font-medium mb-1">"Interviewer"</div>
                                    <div class="text-sm text-gray-300">"How would you optimize a slow database query?"</div>
                                </div>
                                <div class="bg-gradient-to-r from-cyan-500/10 to-blue-500/10 rounded-lg p-3 border border-cyan-500/20">
                                    <div class="text-xs text-cyan-400 font-medium mb-1">"🧠 Avia AI Response"</div>
                                    <div class="text-sm text-gray-300 space-y-1">
                                        <p>"I would start by analyzing the query execution plan..."</p>
                                        <p class="text-gray-500">"1. Check indexes and add composite indexes"</p>
                                        <p class="text-gray-500">"2. Optimize JOIN operations"</p>
                                        <p class="text-gray-500">"3. Consider query caching with Redis"</p>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="absolute -top-4 -right-4 bg-gradient-to-br from-green-500 to-emerald-600 rounded-xl px-4 py-2 shadow-lg">
                            <span class="text-xs font-semibold text-white">"🛡️ Undetectable"</span>
                        </div>
                        <div class="absolute -bottom-3 -left-3 bg-gray-900 border border-white/10 rounded-xl px-4 py-2 shadow-lg">
                            <div class="text-xs text-gray-500">"Response Time"</div>
                            <div class="text-lg font-bold text-cyan-400">"0.3s"</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Static "trusted by" logo row
#[component]
fn TrustedBy() -> impl IntoView {
    view! {
        <section class="py-16 border-y border-white/5">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <p class="text-center text-sm text-gray-500 uppercase tracking-widest mb-10">
                    "Trusted by engineers at"
                </p>
                <div class="flex items-center gap-12 md:gap-16 justify-center flex-wrap opacity-40">
                    {content::COMPANY_LOGOS.iter().map(|name| view! {
                        <span class="text-gray-400 text-xl font-semibold shrink-0">{*name}</span>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature grid
#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-24 relative">
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold">
                        "Everything You Need to "
                        <span class="bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                            "Ace Your Interview"
                        </span>
                    </h2>
                    <p class="mt-4 text-gray-400 max-w-2xl mx-auto text-lg">
                        "Comprehensive AI-powered tools designed to give you the edge in every interview scenario."
                    </p>
                </div>

                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {content::FEATURES.iter().map(|feature| view! {
                        <div class="group relative rounded-2xl bg-white/[0.03] border border-white/[0.06] p-6 hover:bg-white/[0.06] hover:border-white/[0.12] transition-all">
                            <div class="w-12 h-12 rounded-xl bg-gradient-to-br from-cyan-500 to-blue-500 flex items-center justify-center mb-5 text-2xl">
                                {feature.icon}
                            </div>
                            <h3 class="text-lg font-semibold text-white mb-2">{feature.title}</h3>
                            <p class="text-sm text-gray-400 leading-relaxed">{feature.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Three-step explainer
#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="py-24 relative">
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold">
                        "How "
                        <span class="bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">"Avia"</span>
                        " Works"
                    </h2>
                    <p class="mt-4 text-gray-400 max-w-2xl mx-auto text-lg">
                        "Get up and running in minutes. Three simple steps to interview success."
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {content::STEPS.iter().map(|step| view! {
                        <div class="relative text-center group">
                            <div class="relative inline-flex items-center justify-center mb-6">
                                <div class="w-[72px] h-[72px] rounded-2xl bg-gradient-to-br from-cyan-500/20 to-blue-600/20 border border-cyan-500/20 flex items-center justify-center text-3xl">
                                    {step.icon}
                                </div>
                                <div class="absolute -top-2 -right-2 w-7 h-7 rounded-full bg-gradient-to-br from-cyan-500 to-blue-600 flex items-center justify-center text-xs font-bold text-white">
                                    {step.number}
                                </div>
                            </div>
                            <h3 class="text-xl font-semibold text-white mb-3">{step.title}</h3>
                            <p class="text-sm text-gray-400 leading-relaxed max-w-xs mx-auto">{step.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Live demo with tabbed typewriter transcript. Switching tabs drops the
/// in-flight typewriter and retypes the new answer from the empty string.
#[component]
fn DemoSection() -> impl IntoView {
    let (active_tab, set_active_tab) = create_signal(0usize);
    let (typed, set_typed) = create_signal(String::new());
    let (complete, set_complete) = create_signal(false);

    let typer: Rc<RefCell<Option<Typewriter>>> = Rc::new(RefCell::new(None));
    let typer_for_effect = typer.clone();
    create_effect(move |_| {
        let tab = &content::DEMO_TABS[active_tab.get()];
        // Replacing the previous run cancels its interval before the new
        // one starts, so two writers never interleave
        *typer_for_effect.borrow_mut() = Some(Typewriter::start(
            tab.answer.to_string(),
            8,
            set_typed,
            set_complete,
        ));
    });

    let typer_for_cleanup = typer.clone();
    on_cleanup(move || {
        typer_for_cleanup.borrow_mut().take();
    });

    view! {
        <section id="demo" class="py-24 relative">
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold">
                        "See Avia "
                        <span class="bg-gradient-to-r from-cyan-400 to-purple-500 bg-clip-text text-transparent">
                            "in Action"
                        </span>
                    </h2>
                    <p class="mt-4 text-gray-400 max-w-2xl mx-auto text-lg">
                        "Watch how Avia generates intelligent answers in real-time across different interview types."
                    </p>
                </div>

                // Tab switcher
                <div class="flex justify-center mb-8">
                    <div class="inline-flex bg-white/5 rounded-xl p-1 border border-white/10">
                        {content::DEMO_TABS.iter().enumerate().map(|(index, tab)| view! {
                            <button
                                on:click=move |_| set_active_tab.set(index)
                                class=move || {
                                    if active_tab.get() == index {
                                        "px-5 py-2.5 rounded-lg text-sm font-medium transition-all bg-gradient-to-r from-cyan-500 to-blue-600 text-white shadow-lg"
                                    } else {
                                        "px-5 py-2.5 rounded-lg text-sm font-medium transition-all text-gray-400 hover:text-white"
                                    }
                                }
                            >
                                {tab.label}
                            </button>
                        }).collect_view()}
                    </div>
                </div>

                // Demo interface
                <div class="max-w-5xl mx-auto rounded-2xl bg-gray-900/80 backdrop-blur-xl border border-white/10 overflow-hidden shadow-2xl">
                    <div class="flex items-center gap-2 px-5 py-3 border-b border-white/5 bg-white/[0.02]">
                        <div class="w-3 h-3 rounded-full bg-red-500/80" />
                        <div class="w-3 h-3 rounded-full bg-yellow-500/80" />
                        <div class="w-3 h-3 rounded-full bg-green-500/80" />
                        <span class="text-xs text-gray-500 ml-3">"avia-copilot - Interview Session"</span>
                    </div>

                    <div class="grid md:grid-cols-2 divide-x divide-white/5">
                        // Interviewer panel
                        <div class="p-6">
                            <div class="flex items-center gap-2 mb-4">
                                <div class="w-8 h-8 rounded-full bg-gradient-to-br from-orange-500 to-red-500 flex items-center justify-center">
                                    <span class="text-xs font-bold text-white">"IN"</span>
                                </div>
                                <div>
                                    <div class="text-sm font-medium text-white">"Interviewer"</div>
                                    <div class="text-xs text-gray-500">"Live Session"</div>
                                </div>
                            </div>
                            <div class="bg-white/5 rounded-xl p-4 border border-white/5">
                                <p class="text-sm text-gray-300 leading-relaxed">
                                    {move || content::DEMO_TABS[active_tab.get()].question}
                                </p>
                            </div>
                        </div>

                        // AI response panel
                        <div class="p-6">
                            <div class="flex items-center gap-2 mb-4">
                                <div class="w-8 h-8 rounded-full bg-gradient-to-br from-cyan-500 to-blue-600 flex items-center justify-center">
                                    <span class="text-sm">"🧠"</span>
                                </div>
                                <div>
                                    <div class="text-sm font-medium text-cyan-400">"Avia AI"</div>
                                    <div class="text-xs text-gray-500">
                                        {move || if complete.get() { "Response complete" } else { "Generating response..." }}
                                    </div>
                                </div>
                            </div>
                            <div class="bg-gradient-to-br from-cyan-500/5 to-blue-500/5 rounded-xl p-4 border border-cyan-500/10 max-h-[400px] overflow-y-auto">
                                <div class="text-sm text-gray-300 leading-relaxed whitespace-pre-wrap font-mono">
                                    {move || typed.get()}
                                    <span
                                        class="inline-block w-0.5 h-4 bg-cyan-400 ml-0.5 animate-pulse"
                                        class:hidden=move || complete.get()
                                    />
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Pricing cards with monthly/annual toggle
#[component]
fn PricingSection() -> impl IntoView {
    let (annual, set_annual) = create_signal(false);

    view! {
        <section id="pricing" class="py-24 relative">
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold">
                        "Simple, "
                        <span class="bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                            "Transparent"
                        </span>
                        " Pricing"
                    </h2>
                    <p class="mt-4 text-gray-400 max-w-2xl mx-auto text-lg">
                        "Choose the plan that fits your interview prep needs."
                    </p>
                </div>

                // Period toggle
                <div class="flex items-center justify-center gap-4 mb-12">
                    <span class=move || if annual.get() { "text-sm font-medium text-gray-500" } else { "text-sm font-medium text-white" }>
                        "Monthly"
                    </span>
                    <button
                        on:click=move |_| set_annual.update(|a| *a = !*a)
                        class="relative w-14 h-7 rounded-full bg-white/10 border border-white/10 transition-colors"
                        aria-label="Toggle annual pricing"
                    >
                        <div class=move || {
                            if annual.get() {
                                "absolute top-0.5 left-[30px] w-6 h-6 rounded-full bg-gradient-to-r from-cyan-500 to-blue-600 transition-all shadow-lg"
                            } else {
                                "absolute top-0.5 left-0.5 w-6 h-6 rounded-full bg-gradient-to-r from-cyan-500 to-blue-600 transition-all shadow-lg"
                            }
                        } />
                    </button>
                    <span class=move || if annual.get() { "text-sm font-medium text-white" } else { "text-sm font-medium text-gray-500" }>
                        "Annual " <span class="text-cyan-400 text-xs font-semibold ml-1">"Save 35%"</span>
                    </span>
                </div>

                <div class="grid md:grid-cols-3 gap-6 max-w-5xl mx-auto">
                    {content::PRICING_PLANS.iter().map(|plan| {
                        let card_class = if plan.highlighted {
                            "relative rounded-2xl p-6 transition-all bg-gradient-to-b from-cyan-500/10 to-blue-600/5 border-2 border-cyan-500/30 shadow-2xl md:scale-105"
                        } else {
                            "relative rounded-2xl p-6 transition-all bg-white/[0.03] border border-white/[0.06] hover:bg-white/[0.05] hover:border-white/10"
                        };
                        let button_class = if plan.highlighted {
                            "w-full py-3 rounded-xl text-sm font-semibold transition-all bg-gradient-to-r from-cyan-500 to-blue-600 hover:from-cyan-400 hover:to-blue-500 text-white shadow-lg"
                        } else {
                            "w-full py-3 rounded-xl text-sm font-semibold transition-all bg-white/10 hover:bg-white/15 text-white border border-white/10"
                        };

                        view! {
                            <div class=card_class>
                                {plan.badge.map(|badge| view! {
                                    <div class="absolute -top-3.5 left-1/2 -translate-x-1/2 px-4 py-1 rounded-full bg-gradient-to-r from-cyan-500 to-blue-600 text-xs font-semibold text-white shadow-lg">
                                        {badge}
                                    </div>
                                })}

                                <div class="text-center pt-2">
                                    <h3 class="text-lg font-semibold text-white">{plan.name}</h3>
                                    <p class="text-sm text-gray-500 mt-1">{plan.description}</p>
                                    <div class="mt-5 mb-6">
                                        <span class="text-4xl font-bold text-white">
                                            {move || format!("${}", if annual.get() { plan.annual_price } else { plan.monthly_price })}
                                        </span>
                                        <span class="text-gray-500 text-sm">"/mo"</span>
                                    </div>
                                </div>

                                <ul class="space-y-3 mb-8">
                                    {plan.features.iter().map(|feat| view! {
                                        <li class="flex items-start gap-3 text-sm text-gray-300">
                                            <span class="text-cyan-400 shrink-0">"✓"</span>
                                            {*feat}
                                        </li>
                                    }).collect_view()}
                                </ul>

                                // Inert affordance - no payment flow behind it
                                <button class=button_class>{plan.cta}</button>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Testimonial cards
#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="py-24 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold">
                        "Loved by Engineers "
                        <span class="bg-gradient-to-r from-cyan-400 to-purple-500 bg-clip-text text-transparent">
                            "Worldwide"
                        </span>
                    </h2>
                    <p class="mt-4 text-gray-400 max-w-2xl mx-auto text-lg">
                        "See what our users have to say about their interview experience with Avia."
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-6 max-w-5xl mx-auto">
                    {content::TESTIMONIALS.iter().map(|testimonial| view! {
                        <div class="rounded-2xl bg-white/[0.03] border border-white/[0.06] p-6 hover:bg-white/[0.06] hover:border-white/[0.12] transition-all">
                            <div class="flex gap-1 mb-4 text-yellow-400">"★★★★★"</div>
                            <p class="text-sm text-gray-300 leading-relaxed mb-6 italic">
                                "\u{201c}" {testimonial.text} "\u{201d}"
                            </p>
                            <div class="flex items-center gap-3">
                                <div class="w-10 h-10 rounded-full bg-gradient-to-br from-cyan-500 to-blue-500 flex items-center justify-center">
                                    <span class="text-xs font-bold text-white">{testimonial.initials}</span>
                                </div>
                                <div>
                                    <div class="text-sm font-medium text-white">{testimonial.name}</div>
                                    <div class="text-xs text-gray-500">{testimonial.role}</div>
                                </div>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion, at most one entry open
#[component]
fn FaqSection() -> impl IntoView {
    let (open, set_open) = create_signal(None::<usize>);

    view! {
        <section id="faq" class="py-24 relative">
            <div class="relative max-w-3xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold">
                        "Frequently Asked "
                        <span class="bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                            "Questions"
                        </span>
                    </h2>
                    <p class="mt-4 text-gray-400 text-lg">"Everything you need to know about Avia."</p>
                </div>

                <div class="space-y-3">
                    {content::FAQS.iter().enumerate().map(|(index, faq)| view! {
                        <div class="rounded-xl bg-white/[0.03] border border-white/[0.06] overflow-hidden transition-all hover:border-white/10">
                            <button
                                on:click=move |_| set_open.update(|o| *o = toggle_open(*o, index))
                                class="w-full flex items-center justify-between px-6 py-5 text-left"
                                aria-expanded=move || (open.get() == Some(index)).to_string()
                            >
                                <span class="text-sm sm:text-base font-medium text-white pr-4">{faq.question}</span>
                                <span class="text-gray-500 shrink-0">
                                    {move || if open.get() == Some(index) { "▲" } else { "▼" }}
                                </span>
                            </button>
                            {move || (open.get() == Some(index)).then(|| view! {
                                <div class="px-6 pb-5">
                                    <p class="text-sm text-gray-400 leading-relaxed">{faq.answer}</p>
                                </div>
                            })}
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Newsletter call-to-action. Inert: the submit just flips a local
/// confirmation for a few seconds and clears the input.
#[component]
fn Newsletter() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (submitted, set_submitted) = create_signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().trim().is_empty() {
            return;
        }
        set_submitted.set(true);
        set_email.set(String::new());
        Timeout::new(3000, move || set_submitted.set(false)).forget();
    };

    view! {
        <section class="py-24 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="relative rounded-3xl overflow-hidden bg-gradient-to-br from-cyan-600/20 via-blue-600/30 to-purple-600/20">
                    <div class="relative px-6 py-16 sm:px-12 sm:py-20 text-center">
                        <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-white mb-4">
                            "Ready to Ace Your Next Interview?"
                        </h2>
                        <p class="text-gray-400 text-lg max-w-xl mx-auto mb-8">
                            "Join 50,000+ engineers who trust Avia for their interviews."
                        </p>

                        <form on:submit=submit class="flex flex-col sm:flex-row gap-3 max-w-md mx-auto">
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                placeholder="Enter your email address"
                                class="flex-1 px-5 py-3 rounded-xl bg-white/10 border border-white/10 text-white placeholder:text-gray-500 focus:outline-none focus:border-cyan-500/50 text-sm"
                                required
                            />
                            <button
                                type="submit"
                                class="px-6 py-3 rounded-xl bg-gradient-to-r from-cyan-500 to-blue-600 hover:from-cyan-400 hover:to-blue-500 text-white font-semibold text-sm transition-all shadow-lg whitespace-nowrap"
                            >
                                {move || if submitted.get() { "✓ Subscribed!" } else { "Get Early Access →" }}
                            </button>
                        </form>

                        <p class="text-xs text-gray-500 mt-4">"No credit card required. Free tier available."</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Footer with link columns
#[component]
fn LandingFooter() -> impl IntoView {
    const PRODUCT_LINKS: &[(&str, &str)] = &[
        ("Features", "features"),
        ("Pricing", "pricing"),
        ("How It Works", "how-it-works"),
        ("Demo", "demo"),
    ];

    view! {
        <footer class="border-t border-white/5 bg-gray-950">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 lg:gap-12">
                    <div class="col-span-2 md:col-span-1">
                        <div class="flex items-center gap-2 mb-4">
                            <span class="text-2xl">"🧠"</span>
                            <span class="text-xl font-bold bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                                "Avia"
                            </span>
                        </div>
                        <p class="text-sm text-gray-500 mb-5 max-w-xs">
                            "Your AI-powered interview copilot. Ace every interview with confidence."
                        </p>
                    </div>

                    <div>
                        <h4 class="text-sm font-semibold text-white mb-4 uppercase tracking-wider">"Product"</h4>
                        <ul class="space-y-2.5">
                            {PRODUCT_LINKS.iter().map(|(label, target)| view! {
                                <li>
                                    <button
                                        on:click=move |_| effects::scroll_to_id(target)
                                        class="text-sm text-gray-500 hover:text-white transition-colors"
                                    >
                                        {*label}
                                    </button>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-sm font-semibold text-white mb-4 uppercase tracking-wider">"Company"</h4>
                        <ul class="space-y-2.5">
                            {["About", "Blog", "Careers", "Press"].map(|item| view! {
                                <li>
                                    <a href="#" class="text-sm text-gray-500 hover:text-white transition-colors">{item}</a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-sm font-semibold text-white mb-4 uppercase tracking-wider">"Legal"</h4>
                        <ul class="space-y-2.5">
                            {["Privacy Policy", "Terms of Service", "Cookie Policy"].map(|item| view! {
                                <li>
                                    <a href="#" class="text-sm text-gray-500 hover:text-white transition-colors">{item}</a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>
            </div>

            <div class="border-t border-white/5">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                    <p class="text-center text-xs text-gray-600">"Copyright 2024 Avia. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
