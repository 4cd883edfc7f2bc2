use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod effects;
mod contact {
    pub mod controller;
    pub mod feedback;
    pub mod fields;
    pub mod form;
    pub mod store;
    pub mod validator;
}
mod components {
    pub mod carousel;
    pub mod pop;
    pub mod reveal;
    pub mod ripple;
    pub mod tilt;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

/// In-page sections the nav links to, in page order.
pub const SECTIONS: [(&str, &str); 4] = [
    ("#courses", "Courses"),
    ("#testimonials", "Alumni"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
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
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<&'static str>);

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::<dyn Fn()>::new(move || {
                let Some(window) = web_sys::window() else { return };
                if let Ok(scroll_y) = window.scroll_y() {
                    is_scrolled.set(effects::is_scrolled_past_nav(scroll_y));
                }
                let ids: Vec<&'static str> = SECTIONS
                    .iter()
                    .filter_map(|(href, _)| effects::anchor_target(*href))
                    .collect();
                active.set(effects::current_section(&ids));
            });

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let scroll_to = |href: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(id) = effects::anchor_target(href) {
                if effects::smooth_scroll_to(id) {
                    e.prevent_default();
                }
            }
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#top" class="nav-logo" onclick={scroll_to("#top")}>
                    {"CodeCamp"}
                </a>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTIONS.iter().map(|(href, label)| {
                        let is_active = active.is_some() && *active == effects::anchor_target(*href);
                        html! {
                            <a
                                href={*href}
                                class={classes!("nav-link", is_active.then(|| "active"))}
                                onclick={scroll_to(*href)}
                            >
                                { *label }
                            </a>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
