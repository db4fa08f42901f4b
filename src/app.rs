mod avatar;
mod browser_timer;
mod header;
mod hero;
mod homepage;
mod icon;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_scroll;

use browser_timer::BrowserScheduler;
use header::Header;
use homepage::HomePage;

use crate::{
    content::PROFILE,
    motion::scroll_progress,
    view_state::{ControllerConfig, ThemeMode, ViewState, ViewStateController},
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// Reactive handle on the page's view state, shared through context.
#[derive(Clone, Copy)]
pub struct PageState {
    view: ReadSignal<ViewState>,
    progress: ReadSignal<f64>,
    controller: StoredValue<ViewStateController<BrowserScheduler>>,
}

impl PageState {
    pub fn theme(&self) -> ThemeMode {
        self.view.get().theme
    }

    pub fn scrolled(&self) -> bool {
        self.view.get().scrolled
    }

    pub fn name_visible(&self) -> bool {
        self.view.get().name_visible
    }

    pub fn progress(&self) -> f64 {
        self.progress.get()
    }

    pub fn toggle_theme(&self) {
        self.controller.with_value(|c| c.toggle_theme());
    }
}

fn page_progress(offset: f64) -> f64 {
    let scroll_height = document()
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or_default();
    let viewport_height = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    scroll_progress(offset, scroll_height, viewport_height)
}

fn provide_page_state() -> PageState {
    let (view, set_view) = signal(ViewState::default());
    let (progress, set_progress) = signal(0.0);
    let controller = StoredValue::new(ViewStateController::new(
        BrowserScheduler,
        ControllerConfig::default(),
    ));
    controller.with_value(|c| c.subscribe(move |state| set_view.set(state)));

    // effects only run once hydrated, so timers never start during SSR
    Effect::new(move |_| {
        controller.with_value(|c| {
            if let Err(err) = c.start() {
                log::warn!("hero animation disabled: {err}");
            }
        });
    });
    on_cleanup(move || {
        controller.try_with_value(|c| c.stop());
    });

    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let offset = scroll_y.get();
        controller.with_value(|c| c.on_scroll(offset));
        set_progress.set(page_progress(offset));
    });

    let state = PageState {
        view,
        progress,
        controller,
    };
    provide_context(state);
    state
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let page = provide_page_state();

    let page_class = move || {
        let palette = if page.theme().is_dark() {
            "bg-[#050505] text-white"
        } else {
            "bg-slate-50 text-slate-900"
        };
        format!("{palette} min-h-screen transition-colors duration-700 selection:bg-blue-600")
    };

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", PROFILE.full_name()) />

        <Router>
            <div class=page_class>
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
