//! Dashboard Page
//!
//! Authenticated area behind the route guard: collapsible sidebar, onboarding
//! step cards, "where did you hear about us" survey, and the referral card.
//! The guard resolves once per mount from the session marker; visitors without
//! one are sent back to the landing page before any protected content renders.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;
use std::collections::HashSet;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::LogoMarquee;
use crate::content;
use crate::effects;
use crate::state::referral;
use crate::state::session::{self, resolve_guard, GuardOutcome, Session};
use crate::state::toggle::{can_submit, toggle_member, toggle_open};

/// Dashboard page component (route guard wrapper)
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not provided");

    // checking -> {authenticated, redirected}; resolved exactly once
    let (guard, set_guard) = create_signal(None::<GuardOutcome>);

    let navigate = use_navigate();
    create_effect(move |_| {
        let outcome = resolve_guard(session.identity());
        if outcome == GuardOutcome::Redirected {
            navigate("/", Default::default());
        }
        set_guard.set(Some(outcome));
    });

    move || match guard.get() {
        Some(GuardOutcome::Authenticated(identity)) => {
            view! { <DashboardShell identity=identity /> }.into_view()
        }
        // Still checking, or redirecting away - never protected content
        _ => view! { <LoadingSplash /> }.into_view(),
    }
}

/// Splash shown while the guard resolves
#[component]
fn LoadingSplash() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-950 flex items-center justify-center">
            <div class="flex flex-col items-center gap-4">
                <div class="w-12 h-12 rounded-xl bg-gradient-to-br from-cyan-500 to-blue-600 flex items-center justify-center animate-pulse">
                    <span class="text-2xl">"🧠"</span>
                </div>
                <p class="text-sm text-gray-500">"Loading dashboard..."</p>
            </div>
        </div>
    }
}

/// Viewport width at which the sidebar becomes static and the mobile
/// overlay controls (backdrop, close button) disappear
const SIDEBAR_STATIC_WIDTH: f64 = 1024.0;

/// Whether the mobile sidebar overlay may stay open at this viewport width.
/// At desktop widths it must close, since nothing visible can dismiss it.
fn keeps_mobile_sidebar(width: f64) -> bool {
    width < SIDEBAR_STATIC_WIDTH
}

/// Authenticated dashboard layout
#[component]
fn DashboardShell(identity: String) -> impl IntoView {
    let (sidebar_open, set_sidebar_open) = create_signal(false);
    let (active_nav, set_active_nav) = create_signal("dashboard");

    // Body scroll is locked while the mobile sidebar is open and always
    // restored on teardown
    create_effect(move |_| effects::set_scroll_locked(sidebar_open.get()));
    on_cleanup(|| effects::set_scroll_locked(false));

    // Close the mobile sidebar when the viewport grows past the breakpoint,
    // otherwise the scroll lock would outlive its dismiss controls
    create_effect(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(w) = web_sys::window() {
                let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                if !keeps_mobile_sidebar(width) {
                    set_sidebar_open.set(false);
                }
            }
        });
        let _ =
            window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());

        on_cleanup(move || {
            if let Some(w) = web_sys::window() {
                let _ = w.remove_event_listener_with_callback(
                    "resize",
                    callback.as_ref().unchecked_ref(),
                );
            }
        });
    });

    view! {
        <div class="min-h-screen bg-gray-950 text-gray-100 flex">
            // Mobile sidebar backdrop
            {move || sidebar_open.get().then(|| view! {
                <div
                    class="fixed inset-0 z-40 bg-black/60 backdrop-blur-sm lg:hidden"
                    on:click=move |_| set_sidebar_open.set(false)
                />
            })}

            <Sidebar
                identity=identity.clone()
                open=sidebar_open
                set_open=set_sidebar_open
                active=active_nav
                set_active=set_active_nav
            />

            <div class="flex-1 flex flex-col min-h-screen lg:min-w-0">
                <DashboardHeader identity=identity set_sidebar_open=set_sidebar_open />

                <main class="flex-1 overflow-y-auto">
                    <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-6 sm:py-8 space-y-8 sm:space-y-10">
                        <StepCardsSection />
                        <SurveySection />

                        // Trusted-by marquee
                        <section>
                            <div class="rounded-2xl bg-white/[0.02] border border-white/[0.06] py-6 overflow-hidden">
                                <p class="text-center text-xs text-gray-600 uppercase tracking-widest mb-5">
                                    "Trusted by engineers at"
                                </p>
                                <LogoMarquee logos=content::COMPANY_LOGOS />
                            </div>
                        </section>

                        <ReferralSection />
                    </div>
                </main>
            </div>
        </div>
    }
}

/// Collapsible sidebar with navigation and the sign-out control
#[component]
fn Sidebar(
    identity: String,
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    active: ReadSignal<&'static str>,
    set_active: WriteSignal<&'static str>,
) -> impl IntoView {
    let session = use_context::<Session>().expect("Session not provided");
    let navigate = use_navigate();

    let sign_out = move |_| {
        session.sign_out();
        navigate("/", Default::default());
    };

    let name = session::first_name(&identity);
    let badge = session::initial(&identity);

    let aside_class = move || {
        if open.get() {
            "fixed top-0 left-0 z-50 h-full w-64 bg-gray-900/95 backdrop-blur-xl border-r border-white/[0.06] flex flex-col transition-transform duration-300 lg:translate-x-0 lg:static translate-x-0"
        } else {
            "fixed top-0 left-0 z-50 h-full w-64 bg-gray-900/95 backdrop-blur-xl border-r border-white/[0.06] flex flex-col transition-transform duration-300 lg:translate-x-0 lg:static -translate-x-full"
        }
    };

    view! {
        <aside class=aside_class>
            // Logo row
            <div class="flex items-center justify-between px-5 py-5 border-b border-white/[0.06]">
                <div class="flex items-center gap-2.5">
                    <span class="text-2xl">"🧠"</span>
                    <span class="text-lg font-bold bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                        "Avia"
                    </span>
                </div>
                <button
                    on:click=move |_| set_open.set(false)
                    class="lg:hidden w-8 h-8 rounded-lg flex items-center justify-center text-gray-500 hover:text-white hover:bg-white/5 transition-all"
                    aria-label="Close sidebar"
                >
                    "✕"
                </button>
            </div>

            // Navigation
            <nav class="flex-1 px-3 py-4 space-y-1 overflow-y-auto">
                {content::SIDEBAR_ITEMS.iter().map(|item| view! {
                    <button
                        on:click=move |_| {
                            set_active.set(item.id);
                            set_open.set(false);
                        }
                        class=move || {
                            if active.get() == item.id {
                                "w-full flex items-center gap-3 px-3 py-2.5 rounded-lg text-sm font-medium transition-all bg-gradient-to-r from-cyan-500/10 to-blue-500/10 text-cyan-400 border border-cyan-500/20"
                            } else {
                                "w-full flex items-center gap-3 px-3 py-2.5 rounded-lg text-sm font-medium transition-all text-gray-400 hover:text-white hover:bg-white/[0.04]"
                            }
                        }
                    >
                        <span>{item.icon}</span>
                        {item.label}
                    </button>
                }).collect_view()}
            </nav>

            // User block + sign out
            <div class="px-3 py-4 border-t border-white/[0.06] space-y-2">
                <div class="flex items-center gap-3 px-3 py-2">
                    <div class="w-8 h-8 rounded-full bg-gradient-to-br from-cyan-500 to-blue-600 flex items-center justify-center shrink-0">
                        <span class="text-xs font-bold text-white">{badge}</span>
                    </div>
                    <div class="min-w-0 flex-1">
                        <p class="text-sm font-medium text-white truncate">
                            {if name.is_empty() { "User".to_string() } else { name }}
                        </p>
                        <p class="text-xs text-gray-500 truncate">{identity.clone()}</p>
                    </div>
                </div>
                <button
                    on:click=sign_out
                    class="w-full flex items-center gap-3 px-3 py-2.5 rounded-lg text-sm text-gray-500 hover:text-red-400 hover:bg-red-500/5 transition-all"
                >
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}

/// Sticky top header with greeting and credits
#[component]
fn DashboardHeader(identity: String, set_sidebar_open: WriteSignal<bool>) -> impl IntoView {
    let name = session::first_name(&identity);
    let badge = session::initial(&identity);
    let welcome = if name.is_empty() {
        "Welcome back".to_string()
    } else {
        format!("Welcome back, {name}")
    };

    view! {
        <header class="sticky top-0 z-30 bg-gray-950/80 backdrop-blur-xl border-b border-white/[0.06]">
            <div class="flex items-center justify-between px-4 sm:px-6 lg:px-8 py-3">
                <div class="flex items-center gap-3">
                    <button
                        on:click=move |_| set_sidebar_open.set(true)
                        class="lg:hidden w-9 h-9 rounded-lg flex items-center justify-center text-gray-400 hover:text-white hover:bg-white/5 transition-all"
                        aria-label="Open sidebar"
                    >
                        "☰"
                    </button>
                    <div>
                        <h1 class="text-base sm:text-lg font-semibold text-white">{welcome}</h1>
                        <p class="text-xs text-gray-500 hidden sm:block">"Here is your interview preparation hub"</p>
                    </div>
                </div>

                <div class="flex items-center gap-3">
                    <div class="flex items-center gap-1.5 px-3 py-1.5 rounded-full bg-white/[0.04] border border-white/[0.08]">
                        <span class="text-yellow-400">"🪙"</span>
                        <span class="text-xs font-medium text-gray-300">"15 min"</span>
                    </div>
                    // Inert affordance - no billing behind it
                    <button class="hidden sm:flex items-center gap-1.5 px-3.5 py-1.5 rounded-full bg-gradient-to-r from-cyan-500 to-blue-600 text-xs font-semibold text-white hover:from-cyan-400 hover:to-blue-500 transition-all shadow-md">
                        "⚡ Get Credits"
                    </button>
                    <div class="w-8 h-8 rounded-full bg-gradient-to-br from-purple-500 to-blue-600 flex items-center justify-center ring-2 ring-white/10">
                        <span class="text-xs font-bold text-white">{badge}</span>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Get-started onboarding cards, including the interview-type chips
#[component]
fn StepCardsSection() -> impl IntoView {
    // At most one interview type selected; clicking it again clears it
    let (selected_type, set_selected_type) = create_signal(None::<usize>);

    view! {
        <section>
            <div class="flex items-center gap-2 mb-5">
                <span class="text-cyan-400">"▦"</span>
                <h2 class="text-lg font-semibold text-white">"Get Started"</h2>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-4 gap-4">
                {content::STEP_CARDS.iter().map(|step| view! {
                    <div class="group relative rounded-2xl bg-white/[0.02] border border-white/[0.06] p-5 hover:bg-white/[0.05] hover:border-white/[0.12] transition-all">
                        <div class="flex items-start justify-between mb-4">
                            <div class="w-8 h-8 rounded-full bg-gradient-to-br from-cyan-500 to-blue-600 flex items-center justify-center text-sm font-bold text-white shadow-md">
                                {step.number}
                            </div>
                            <div class="w-10 h-10 rounded-xl bg-cyan-500/10 border border-cyan-500/10 flex items-center justify-center text-xl">
                                {step.icon}
                            </div>
                        </div>

                        <h3 class="text-sm font-semibold text-white mb-2">{step.title}</h3>
                        <p class="text-xs text-gray-500 leading-relaxed mb-4">{step.description}</p>

                        {match step.number {
                            "1" => view! {
                                <button class="w-full py-2 rounded-lg bg-white/[0.06] border border-white/[0.08] text-xs font-medium text-gray-300 hover:bg-white/[0.1] hover:text-white transition-all">
                                    "📤 Upload Resume"
                                </button>
                            }.into_view(),
                            "2" => view! {
                                <div class="flex flex-wrap gap-1.5">
                                    {content::INTERVIEW_TYPES.iter().enumerate().map(|(index, label)| view! {
                                        <button
                                            on:click=move |_| set_selected_type.update(|s| *s = toggle_open(*s, index))
                                            class=move || {
                                                if selected_type.get() == Some(index) {
                                                    "px-2.5 py-1 rounded-md text-[11px] font-medium transition-all bg-cyan-500/15 border border-cyan-500/40 text-cyan-400"
                                                } else {
                                                    "px-2.5 py-1 rounded-md text-[11px] font-medium transition-all bg-white/[0.04] border border-white/[0.08] text-gray-400 hover:text-gray-300"
                                                }
                                            }
                                        >
                                            {*label}
                                        </button>
                                    }).collect_view()}
                                </div>
                            }.into_view(),
                            "3" => view! {
                                <button class="w-full py-2 rounded-lg bg-gradient-to-r from-cyan-500 to-blue-600 text-xs font-semibold text-white hover:from-cyan-400 hover:to-blue-500 transition-all shadow-md">
                                    "📈 Create Session"
                                </button>
                            }.into_view(),
                            _ => view! {
                                <button class="w-full py-2 rounded-lg bg-transparent border border-white/[0.12] text-xs font-medium text-gray-300 hover:bg-white/[0.04] hover:text-white transition-all">
                                    "🕑 View History"
                                </button>
                            }.into_view(),
                        }}
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

/// "Where did you hear about us?" survey: multi-select, submit disabled
/// while the selection is empty
#[component]
fn SurveySection() -> impl IntoView {
    let (selected, set_selected) = create_signal(HashSet::<&'static str>::new());
    let (submitted, set_submitted) = create_signal(false);

    view! {
        <section>
            <div class="rounded-2xl bg-white/[0.02] border border-white/[0.06] p-5 sm:p-6">
                {move || {
                    if submitted.get() {
                        view! {
                            <div class="flex flex-col items-center justify-center py-8 text-center">
                                <div class="w-14 h-14 rounded-full bg-gradient-to-br from-green-500/20 to-emerald-500/20 border border-green-500/20 flex items-center justify-center mb-4 text-2xl text-green-400">
                                    "✓"
                                </div>
                                <h3 class="text-lg font-semibold text-white mb-1">"Thanks for your feedback!"</h3>
                                <p class="text-sm text-gray-500">"Your response helps us improve Avia for everyone."</p>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="mb-5">
                                <h3 class="text-base font-semibold text-white mb-1">"Where did you hear about us?"</h3>
                                <p class="text-xs text-gray-500">"Help us improve by telling us where you found Avia."</p>
                            </div>
                            <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-3 mb-5">
                                {content::SURVEY_OPTIONS.iter().map(|option| view! {
                                    <button
                                        on:click=move |_| set_selected.update(|s| toggle_member(s, option.id))
                                        class=move || {
                                            if selected.get().contains(option.id) {
                                                "flex items-center gap-2.5 px-3.5 py-3 rounded-xl text-sm font-medium transition-all bg-cyan-500/10 border border-cyan-500/30 text-cyan-400"
                                            } else {
                                                "flex items-center gap-2.5 px-3.5 py-3 rounded-xl text-sm font-medium transition-all bg-white/[0.02] border border-white/[0.06] text-gray-400 hover:bg-white/[0.04] hover:text-gray-300"
                                            }
                                        }
                                    >
                                        <span>{option.icon}</span>
                                        <span class="text-xs sm:text-sm">{option.label}</span>
                                        {move || selected.get().contains(option.id).then(|| view! {
                                            <span class="ml-auto text-cyan-400">"✓"</span>
                                        })}
                                    </button>
                                }).collect_view()}
                            </div>
                            <button
                                on:click=move |_| {
                                    if can_submit(&selected.get()) {
                                        set_submitted.set(true);
                                    }
                                }
                                disabled=move || !can_submit(&selected.get())
                                class=move || {
                                    if can_submit(&selected.get()) {
                                        "px-5 py-2 rounded-lg text-sm font-medium transition-all bg-gradient-to-r from-cyan-500 to-blue-600 text-white hover:from-cyan-400 hover:to-blue-500 shadow-md"
                                    } else {
                                        "px-5 py-2 rounded-lg text-sm font-medium transition-all bg-white/[0.04] text-gray-600 cursor-not-allowed"
                                    }
                                }
                            >
                                "Submit →"
                            </button>
                        }.into_view()
                    }
                }}
            </div>
        </section>
    }
}

/// Referral card: a fresh code every mount, optimistic copy confirmation
#[component]
fn ReferralSection() -> impl IntoView {
    // Regenerated once per mount, never persisted
    let code = referral::generate_code();
    let share = referral::share_code(&code);
    let (copied, set_copied) = create_signal(false);

    let share_for_copy = share.clone();
    let copy = move |_| {
        // Clipboard failure is swallowed; the confirmation is optimistic
        effects::copy_text(&share_for_copy);
        set_copied.set(true);
        Timeout::new(2000, move || set_copied.set(false)).forget();
    };

    view! {
        <section class="pb-6">
            <div class="relative rounded-2xl overflow-hidden bg-gradient-to-br from-cyan-600/15 via-blue-600/20 to-purple-600/15">
                <div class="relative px-5 py-8 sm:px-8 sm:py-10">
                    <div class="flex flex-col lg:flex-row lg:items-center lg:justify-between gap-6">
                        <div class="flex-1">
                            <div class="flex items-center gap-2 mb-2">
                                <span class="text-cyan-400">"⚡"</span>
                                <span class="text-xs font-semibold uppercase tracking-wider text-cyan-400">"Referral Program"</span>
                            </div>
                            <h3 class="text-xl sm:text-2xl font-bold text-white mb-2">"Invite Friends, Get Rewarded"</h3>
                            <p class="text-sm text-gray-400 max-w-lg leading-relaxed">
                                "Share your referral code with friends. When they sign up, you both get 2 free interview sessions."
                            </p>
                            <div class="flex items-center gap-4 mt-4 text-xs text-gray-500">
                                <span>"0 Referrals"</span>
                                <span class="w-1 h-1 rounded-full bg-gray-600" />
                                <span>"0 Credits Earned"</span>
                            </div>
                        </div>

                        <div class="flex flex-col items-start lg:items-end gap-3">
                            <div class="flex items-center gap-2">
                                <div class="flex items-center gap-2 px-4 py-2.5 rounded-xl bg-white/[0.06] border border-white/[0.1]">
                                    <span class="text-sm font-mono font-semibold text-white tracking-wider">{share.clone()}</span>
                                </div>
                                <button
                                    on:click=copy
                                    class=move || {
                                        if copied.get() {
                                            "flex items-center gap-1.5 px-3.5 py-2.5 rounded-xl text-xs font-medium transition-all bg-green-500/15 border border-green-500/30 text-green-400"
                                        } else {
                                            "flex items-center gap-1.5 px-3.5 py-2.5 rounded-xl text-xs font-medium transition-all bg-white/[0.06] border border-white/[0.1] text-gray-300 hover:bg-white/[0.1] hover:text-white"
                                        }
                                    }
                                >
                                    {move || if copied.get() { "✓ Copied!" } else { "⧉ Copy" }}
                                </button>
                            </div>
                            // Inert affordance - no mail client integration
                            <button class="flex items-center gap-1.5 px-4 py-2 rounded-xl bg-gradient-to-r from-cyan-500 to-blue-600 text-xs font-semibold text-white hover:from-cyan-400 hover:to-blue-500 transition-all shadow-md">
                                "✉ Share via Email"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_sidebar_stays_open_below_breakpoint() {
        assert!(keeps_mobile_sidebar(375.0));
        assert!(keeps_mobile_sidebar(1023.0));
    }

    #[test]
    fn mobile_sidebar_closes_at_desktop_widths() {
        assert!(!keeps_mobile_sidebar(1024.0));
        assert!(!keeps_mobile_sidebar(1920.0));
    }
}
