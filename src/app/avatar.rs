use leptos::prelude::*;

use crate::content::{INTERESTS, PROFILE};

#[component]
pub fn Portrait() -> impl IntoView {
    view! {
        <div class="relative group">
            <div class="absolute -inset-4 bg-gradient-to-tr from-blue-600 to-purple-600 rounded-[40px] blur-2xl opacity-20 group-hover:opacity-40 transition-opacity" />
            <div class="relative aspect-square rounded-[40px] overflow-hidden border border-white/10">
                <img
                    src=PROFILE.portrait
                    class="relative rounded-2xl w-full grayscale hover:grayscale-0 transition-all duration-500"
                    alt="About"
                />
            </div>
        </div>
    }
}

#[component]
pub fn InterestTags() -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-4">
            {INTERESTS
                .iter()
                .map(|item| {
                    view! {
                        <span class="px-6 py-2 bg-white/5 rounded-full border border-white/10 text-[10px] font-bold uppercase tracking-widest italic">
                            {*item}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
