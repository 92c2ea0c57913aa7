use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();

    {
        let path = location.map(|l| l.path().to_string()).unwrap_or_default();
        use_effect_with_deps(
            move |path| {
                log::warn!("404: no route for {}", path);
                || ()
            },
            path,
        );
    }

    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Oops! Seite nicht gefunden."}</p>
            <Link<Route> to={Route::Home} classes="not-found__link">
                {"Zurück zur Startseite"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: calc(var(--vh, 1vh) * 100);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-align: center;
                }

                .not-found h1 {
                    font-size: 2.25rem;
                    font-weight: 700;
                }

                .not-found p {
                    color: var(--muted);
                    font-size: 1.25rem;
                }

                .not-found__link {
                    color: var(--accent);
                    text-decoration: underline;
                }
                "#}
            </style>
        </div>
    }
}
