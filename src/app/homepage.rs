use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    avatar::{InterestTags, Portrait},
    hero::Hero,
    icon::IconSvg,
};
use crate::content::{Icon, ACHIEVEMENTS, CONTACT, GALLERY, PROFILE, SKILLS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Milestones />
        <Gallery />
        <Contact />
        <Footer />
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-32 container mx-auto px-6">
            <div class="grid md:grid-cols-12 gap-12 items-center">
                <div class="md:col-span-5">
                    <Portrait />
                </div>
                <div class="md:col-span-7">
                    <h3 class="text-5xl font-black uppercase tracking-tighter mb-6 italic text-blue-600">
                        {PROFILE.headline}
                    </h3>
                    <p class="text-xl opacity-50 leading-relaxed mb-10 max-w-xl">{PROFILE.about}</p>
                    <InterestTags />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-24 container mx-auto px-6">
            <h3 class="text-4xl font-black mb-16 uppercase tracking-widest">
                "Stack" <span class="text-blue-600">"."</span>
            </h3>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                {SKILLS
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="p-10 bg-white/5 rounded-[40px] border border-white/5 hover:bg-blue-600 hover:-translate-y-2.5 transition-all group">
                                <div class="mb-6 text-blue-500 group-hover:text-white transition-colors">
                                    <IconSvg icon=skill.icon size=24 />
                                </div>
                                <h4 class="text-xl font-bold uppercase mb-2 group-hover:text-white">
                                    {skill.name}
                                </h4>
                                <p class="text-[10px] uppercase font-bold opacity-30 group-hover:text-white/70">
                                    {skill.tools}
                                </p>
                                <div class="mt-4 text-2xl font-black group-hover:text-white">
                                    {skill.level_label()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Milestones() -> impl IntoView {
    view! {
        <section id="achievements" class="py-24 bg-[#0a0a0a]">
            <div class="container mx-auto px-6 text-inherit">
                <h3 class="text-4xl font-black mb-16 uppercase tracking-widest">"Milestones"</h3>
                <div class="space-y-4">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|a| {
                            view! {
                                <div class="p-10 bg-white/5 rounded-[40px] flex justify-between items-center border border-white/5 hover:translate-x-5 transition-all">
                                    <div>
                                        <h4 class="text-2xl font-bold uppercase">{a.title}</h4>
                                        <p class="opacity-40">{a.description}</p>
                                    </div>
                                    <span class="text-blue-500 font-black">{a.year}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Gallery() -> impl IntoView {
    view! {
        <section id="gallery" class="py-32 container mx-auto px-6">
            <h3 class="text-4xl font-black mb-20 uppercase italic">"Life & Code"</h3>
            <div class="grid md:grid-cols-2 gap-10">
                {GALLERY
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="relative rounded-[50px] overflow-hidden aspect-video border border-white/10 group cursor-pointer hover:scale-[1.02] transition-transform">
                                <img
                                    src=item.image
                                    class="w-full h-full object-cover grayscale group-hover:grayscale-0 transition-all duration-700 group-hover:scale-110"
                                    alt=item.title
                                />
                                <div class="absolute inset-0 bg-black/40 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity">
                                    <div class="text-center">
                                        <p class="text-white font-black uppercase text-xl">
                                            {item.title}
                                        </p>
                                        <IconSvg
                                            icon=Icon::ArrowUpRight
                                            size=24
                                            class="mx-auto mt-2 text-blue-400"
                                        />
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-32 px-6">
            <div class="max-w-5xl mx-auto bg-blue-600 rounded-[60px] p-20 text-center relative overflow-hidden shadow-2xl">
                <h3 class="text-5xl md:text-[90px] font-black uppercase tracking-tighter mb-10 text-white italic">
                    "Let's Connect."
                </h3>
                <div class="flex flex-wrap justify-center gap-6">
                    <a
                        href=CONTACT.mailto()
                        class="bg-white text-black px-12 py-5 rounded-full font-black uppercase tracking-widest text-[10px] hover:scale-110 transition-all"
                    >
                        "Email Me"
                    </a>
                    <div class="flex gap-4">
                        <a
                            href=CONTACT.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-5 bg-black text-white rounded-full hover:bg-zinc-900 transition-all shadow-xl"
                            aria-label="GitHub Profile"
                        >
                            <IconSvg icon=Icon::Github size=24 />
                        </a>
                        <a
                            href=CONTACT.linkedin
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-5 bg-black text-white rounded-full hover:bg-zinc-900 transition-all shadow-xl"
                            aria-label="LinkedIn Profile"
                        >
                            <IconSvg icon=Icon::Linkedin size=24 />
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 opacity-20 text-center text-[10px] font-bold tracking-[0.4em] uppercase">
            {format!("© {} {} - All rights reserved", env!("BUILD_YEAR"), PROFILE.full_name())}
        </footer>
    }
}
