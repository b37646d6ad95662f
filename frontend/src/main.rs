use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod components {
    pub mod carousel;
    pub mod faq;
    pub mod mount_guard;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

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
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_top = window
                            .as_ref()
                            .and_then(|w| w.document())
                            .and_then(|d| d.document_element())
                            .map(|e| e.scroll_top())
                            .unwrap_or(0);
                        is_scrolled.set(scroll_top > config::HEADER_SCROLL_THRESHOLD);
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-brand">
                    <img src="/assets/logo.png" alt="Saramatic logo" width="36" height="36" />
                    <span class="brand-text">
                        <span class="brand-name">{config::BRAND_NAME}</span>
                        <span class="brand-product">{config::PRODUCT_NAME}</span>
                    </span>
                </Link<Route>>
                <a href={config::PRIMARY_CTA_HREF} class="header-cta">
                    {"Get the Planner"}
                </a>
            </div>
            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 20;
                    border-bottom: 1px solid #F3E7E7;
                    background: rgba(255, 249, 249, 0.9);
                    backdrop-filter: blur(8px);
                    transition: box-shadow 0.3s ease;
                }

                .site-header.scrolled {
                    box-shadow: 0 4px 12px rgba(120, 59, 90, 0.12);
                }

                .header-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .header-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }

                .header-brand img {
                    border-radius: 9999px;
                }

                .brand-text {
                    display: flex;
                    flex-direction: column;
                    line-height: 1.2;
                }

                .brand-name {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #0B4F6C;
                }

                .brand-product {
                    font-size: 11px;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    color: #A3769F;
                }

                .header-cta {
                    border-radius: 9999px;
                    padding: 0.75rem 2rem;
                    background: #0B4F6C;
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }

                .header-cta:hover {
                    background: #783B5A;
                }

                @media (max-width: 640px) {
                    .header-cta {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
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
