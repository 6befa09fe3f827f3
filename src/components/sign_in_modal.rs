//! Sign-In Modal Component
//!
//! Client-only sign-in: either the one-click Google-style button or an email
//! form. Body scroll is locked while the modal is mounted and restored on
//! teardown, so closing by any path releases the lock.

use leptos::*;

use crate::effects;

/// Modal dialog for signing in
#[component]
pub fn SignInModal(
    #[prop(into)] on_sign_in: Callback<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());

    effects::set_scroll_locked(true);
    on_cleanup(|| effects::set_scroll_locked(false));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = email.get();
        if !value.trim().is_empty() {
            on_sign_in.call(value);
        }
    };

    view! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center">
            // Backdrop
            <div
                class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                on:click=move |_| on_close.call(())
            />

            // Modal card
            <div class="relative w-full max-w-[420px] mx-4 animate-modal-in">
                <div class="rounded-2xl bg-white shadow-2xl shadow-black/20 p-8 sm:p-10">
                    <button
                        on:click=move |_| on_close.call(())
                        class="absolute top-4 right-4 w-8 h-8 rounded-lg flex items-center justify-center
                               text-gray-400 hover:text-gray-600 hover:bg-gray-100 transition-all"
                        aria-label="Close sign in"
                    >
                        "✕"
                    </button>

                    <h2 class="text-2xl sm:text-3xl font-bold text-gray-900 mb-8">"Sign In"</h2>

                    <button
                        on:click=move |_| on_sign_in.call("user@gmail.com".to_string())
                        class="w-full flex items-center justify-center gap-3 px-6 py-3.5 rounded-xl
                               bg-gray-900 hover:bg-gray-800 text-white font-medium text-sm
                               transition-all shadow-sm hover:shadow-md"
                    >
                        <span class="text-lg">"G"</span>
                        "Sign in with Google"
                    </button>

                    // Divider
                    <div class="flex items-center gap-4 my-6">
                        <div class="flex-1 h-px bg-gray-200" />
                        <span class="text-sm text-gray-400 whitespace-nowrap">"or continue with email"</span>
                        <div class="flex-1 h-px bg-gray-200" />
                    </div>

                    <form on:submit=submit class="relative">
                        <div class="relative flex items-center">
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                placeholder="Enter your email address"
                                class="w-full pl-4 pr-14 py-3.5 rounded-xl bg-gray-50 border border-gray-200
                                       text-gray-900 placeholder:text-gray-400 focus:outline-none
                                       focus:border-gray-400 text-sm transition-all"
                                required
                            />
                            <button
                                type="submit"
                                class="absolute right-2 w-10 h-10 rounded-lg bg-gray-900 hover:bg-gray-800
                                       flex items-center justify-center text-white transition-all shadow-sm"
                                aria-label="Submit email"
                            >
                                "→"
                            </button>
                        </div>
                    </form>

                    <p class="text-xs text-gray-400 text-center mt-6 leading-relaxed">
                        "By signing in, you agree to our "
                        <a href="#" class="text-gray-600 underline underline-offset-2 hover:text-gray-800">
                            "Terms of Service"
                        </a>
                        " and "
                        <a href="#" class="text-gray-600 underline underline-offset-2 hover:text-gray-800">
                            "Privacy Policy"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
