use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod contact;
mod dom;
mod hooks;
mod shortcuts;
mod stats;
mod components {
    pub mod anchor;
    pub mod back_to_top;
    pub mod careers_modal;
    pub mod chat_widget;
    pub mod code_block;
    pub mod contact_form;
    pub mod faq;
    pub mod form_field;
    pub mod lazy_image;
    pub mod nav;
    pub mod reveal;
    pub mod stats;
    pub mod tabs;
}
mod pages {
    pub mod about;
    pub mod home;
}

use components::{
    back_to_top::BackToTop,
    chat_widget::ChatWidget,
    nav::Nav,
};
use pages::{about::About, home::Home};
use shortcuts::{use_shortcut, Shortcut};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <section class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
                </section>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    let focus_search = use_callback(|_, _| shortcuts::focus_search(&dom::BrowserPage), ());
    use_shortcut(Shortcut::FocusSearch, focus_search);

    // Report load timings once the page has finished loading
    use_effect_with_deps(
        |_| {
            let listener = match dom::document() {
                Ok(document) if document.ready_state() == "complete" => {
                    defer_timing_report();
                    None
                }
                _ => match dom::window().and_then(|window| {
                    dom::Listener::new(&window, "load", |_| defer_timing_report())
                }) {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        log::debug!("load timings not reported: {}", e);
                        None
                    }
                },
            };
            move || drop(listener)
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <BackToTop />
            <ChatWidget />
        </BrowserRouter>
    }
}

fn welcome_banner() {
    gloo_console::log!(
        "%cWelcome to SuperChat!",
        "font-size: 20px; font-weight: bold; color: #4f46e5;"
    );
    gloo_console::log!(
        "%cEnterprise AI Solutions - Built with privacy and control in mind.",
        "font-size: 14px; color: #6b7280;"
    );
    gloo_console::log!(
        "%cWebsite: https://superchat.ai | Email: hello@superchat.ai",
        "font-size: 12px; color: #9ca3af;"
    );
}

/// Milliseconds from navigation start to `event_end`, if the browser has
/// recorded both.
fn elapsed_ms(navigation_start: f64, event_end: f64) -> Option<u64> {
    if navigation_start > 0.0 && event_end >= navigation_start {
        Some((event_end - navigation_start).round() as u64)
    } else {
        None
    }
}

fn report_page_timings() {
    let Some(timing) = web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.timing())
    else {
        log::debug!("performance timing unavailable");
        return;
    };

    let start = timing.navigation_start();
    if let Some(ms) = elapsed_ms(start, timing.load_event_end()) {
        gloo_console::log!(
            format!("%cPage Load Time: {}ms", ms),
            "color: #10b981; font-weight: bold;"
        );
    }
    if let Some(ms) = elapsed_ms(start, timing.dom_content_loaded_event_end()) {
        gloo_console::log!(format!("%cDOM Ready Time: {}ms", ms), "color: #10b981;");
    }
}

// loadEventEnd is only set after the load handlers return
fn defer_timing_report() {
    Timeout::new(0, report_page_timings).forget();
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    welcome_banner();
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
