use leptos::prelude::*;

use super::{icon::IconSvg, PageState};
use crate::{
    content::{Icon, PROFILE},
    motion::{letter_delay, LETTER_TRANSITION},
};

const LETTER_BASE: &str = "inline-block text-7xl md:text-[150px] font-black leading-none tracking-tighter uppercase transition-all ease-[cubic-bezier(0.34,1.56,0.64,1)]";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="h-screen flex flex-col items-center justify-center relative overflow-hidden">
            <div class="text-center z-10">
                <div class="h-[140px] md:h-[180px] flex justify-center items-center overflow-hidden">
                    <MagicName />
                </div>
                <h2 class="text-2xl md:text-5xl font-black tracking-[0.3em] uppercase opacity-20 mt-4">
                    {PROFILE.family_name}
                </h2>
                <div class="mt-12">
                    <a
                        href=PROFILE.resume
                        download=""
                        class="group bg-blue-600 text-white px-10 py-5 rounded-full font-black uppercase tracking-widest text-[10px] hover:scale-105 transition-all inline-flex items-center gap-2"
                    >
                        <IconSvg icon=Icon::Download size=16 />
                        " Download Resume"
                    </a>
                </div>
            </div>
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[600px] h-[600px] bg-blue-600/10 blur-[150px] rounded-full pointer-events-none" />
        </section>
    }
}

/// Given name, one span per letter, sliding out and back in whenever the
/// controller flips `name_visible`.
#[component]
fn MagicName() -> impl IntoView {
    let page = expect_context::<PageState>();
    let duration = LETTER_TRANSITION.as_millis();

    view! {
        <div class="flex gap-2" aria-label=PROFILE.given_name>
            {PROFILE
                .letters()
                .enumerate()
                .map(|(i, letter)| {
                    let delay = letter_delay(i).as_millis();
                    let class = move || {
                        if page.name_visible() {
                            format!("{LETTER_BASE} translate-y-0 opacity-100")
                        } else {
                            format!("{LETTER_BASE} -translate-y-[150px] opacity-0")
                        }
                    };
                    view! {
                        <span
                            class=class
                            style=format!(
                                "transition-delay: {delay}ms; transition-duration: {duration}ms",
                            )
                            aria-hidden="true"
                        >
                            {letter.to_string()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
