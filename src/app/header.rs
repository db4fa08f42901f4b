use leptos::prelude::*;

use super::{icon::IconSvg, PageState};
use crate::content::{theme_toggle_icon, NAV_ENTRIES, PROFILE};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <ProgressBar />
        <NavBar />
    }
}

/// Thin bar across the top of the viewport tracking how far the page is read.
#[component]
fn ProgressBar() -> impl IntoView {
    let page = expect_context::<PageState>();
    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-blue-600 z-[100] origin-left transition-transform duration-300 ease-out"
            style=move || format!("transform: scaleX({})", page.progress())
        />
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let page = expect_context::<PageState>();

    let nav_class = move || {
        let style = if page.scrolled() {
            "backdrop-blur-xl bg-black/60 py-3 px-8 shadow-2xl"
        } else {
            "bg-transparent py-5 px-6"
        };
        format!(
            "fixed top-6 left-1/2 -translate-x-1/2 z-50 transition-all duration-500 w-[95%] max-w-4xl rounded-full border border-white/10 {style}"
        )
    };

    view! {
        <nav class=nav_class>
            <div class="flex justify-between items-center">
                <h1 class="text-xl font-black tracking-tighter uppercase">
                    {PROFILE.mark} <span class="text-blue-600">"."</span>
                </h1>
                <div class="flex items-center gap-6 md:gap-10">
                    {NAV_ENTRIES
                        .iter()
                        .map(|entry| {
                            view! {
                                <a href=entry.href() class="flex items-center gap-2 group transition-all">
                                    <span class="text-blue-500 group-hover:scale-125 transition-transform">
                                        <IconSvg icon=entry.icon />
                                    </span>
                                    <span class="hidden lg:block text-[10px] font-black uppercase tracking-widest opacity-40 group-hover:opacity-100">
                                        {entry.name}
                                    </span>
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        on:click=move |_| page.toggle_theme()
                        class="cursor-pointer p-2 rounded-full hover:bg-white/10 transition-colors"
                        aria-label="Toggle theme"
                    >
                        {move || view! { <IconSvg icon=theme_toggle_icon(page.theme()) /> }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
