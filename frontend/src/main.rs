use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, Window};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod contact;
mod scroll;
mod scene {
    pub mod model;
    pub mod global;
    pub mod hero;
    pub mod motion;
    pub mod render;
}
mod components {
    pub mod scene_canvas;
    pub mod scroll_reveal;
    pub mod scroll_section;
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod process;
    pub mod cta;
    pub mod contact_dialog;
    pub mod footer;
}
mod pages {
    pub mod index;
    pub mod not_found;
}

use pages::{index::Index, not_found::NotFound};

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
            html! { <Index /> }
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Value for the `--vh` custom property: one percent of the viewport height.
fn viewport_unit(height: f64) -> String {
    format!("{}px", height * 0.01)
}

fn visible_height(window: &Window) -> f64 {
    window
        .visual_viewport()
        .map(|v| v.height())
        .or_else(|| window.inner_height().ok().and_then(|h| h.as_f64()))
        .unwrap_or(0.0)
}

fn apply_viewport_height(window: &Window) {
    let root = window
        .document()
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(root) = root {
        let _ = root
            .style()
            .set_property("--vh", &viewport_unit(visible_height(window)));
    }
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(move |_| {
        let window = window().unwrap();

        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            let _ = root.class_list().add_1("dark");
        }
        apply_viewport_height(&window);

        let window_clone = window.clone();
        let resize_callback = Closure::wrap(Box::new(move || {
            apply_viewport_height(&window_clone);
        }) as Box<dyn FnMut()>);

        let _ = window.add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref());
        let visual_viewport = window.visual_viewport();
        if let Some(viewport) = &visual_viewport {
            let _ = viewport.add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref());
        }

        move || {
            let _ = window.remove_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref());
            if let Some(viewport) = &visual_viewport {
                let _ = viewport.remove_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref());
            }
        }
    }, ());

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
            <style>
                {r#"
                :root {
                    --background: #1c1b1a;
                    --foreground: #f5f0e8;
                    --muted: #a8a096;
                    --border: #3c3936;
                    --accent: #c9a96e;
                }

                html, body {
                    margin: 0;
                    background: var(--background);
                    color: var(--foreground);
                    font-family: 'Inter', system-ui, sans-serif;
                }

                h1, h2, h3, p { margin: 0; }

                .page {
                    position: relative;
                    z-index: 1;
                    overflow-x: hidden;
                }

                .section {
                    position: relative;
                    padding: 6rem 2rem;
                }

                .section__inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .section__header {
                    margin-bottom: 4rem;
                }

                .section__title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                }

                .eyebrow {
                    margin-bottom: 1rem;
                    font-size: 0.875rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: var(--muted);
                }

                @media (min-width: 768px) {
                    .section { padding: 8rem 4rem; }
                    .section__title { font-size: 3rem; }
                }

                @media (min-width: 1024px) {
                    .section { padding: 8rem 6rem; }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting upward Solution");
    yew::Renderer::<App>::new().render();
}
