use yew::prelude::*;

use crate::components::contact_dialog::ContactDialog;
use crate::components::scroll_reveal::ScrollReveal;

#[function_component(Cta)]
pub fn cta() -> Html {
    let open = use_state(|| false);

    let open_dialog = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let close_dialog = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };

    html! {
        <div class="cta">
            <ScrollReveal distance={20.0} duration={1.0} margin={80.0} class="cta__inner">
                <h2 class="cta__title">
                    {"Bereit für deinen"}<br />
                    {"nächsten Schritt?"}
                </h2>
                <p class="cta__copy">
                    {"Lass uns gemeinsam eine E-Commerce-Plattform schaffen, die deine \
                      Marke auf das nächste Level hebt."}
                </p>
                <button class="cta__button" onclick={open_dialog}>
                    {"Kontakt aufnehmen"}
                </button>
            </ScrollReveal>

            <ContactDialog open={*open} on_close={close_dialog} />

            <style>
                {r#"
                .cta {
                    position: relative;
                    padding: 6rem 1.5rem;
                }

                .cta__inner {
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .cta__title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    line-height: 1.1;
                    margin-bottom: 1rem;
                }

                .cta__copy {
                    max-width: 36rem;
                    margin: 0 auto 2rem;
                    color: rgba(168, 160, 150, 0.6);
                    font-size: 0.875rem;
                    line-height: 1.7;
                }

                .cta__button {
                    display: inline-block;
                    padding: 0.75rem 2rem;
                    border: 1px solid rgba(245, 240, 232, 0.2);
                    background: transparent;
                    color: var(--foreground);
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    cursor: pointer;
                    transition: all 0.7s;
                }

                .cta__button:hover {
                    background: var(--foreground);
                    color: var(--background);
                    transform: scale(1.03);
                }

                .cta__button:active {
                    transform: scale(0.98);
                }

                @media (min-width: 640px) {
                    .cta { padding: 9rem 2rem; }
                    .cta__title { font-size: 1.875rem; margin-bottom: 1.5rem; }
                    .cta__copy { font-size: 1rem; margin-bottom: 2.5rem; }
                    .cta__button { padding: 1rem 2.5rem; font-size: 0.875rem; }
                }

                @media (min-width: 768px) {
                    .cta { padding: 12rem 4rem; }
                    .cta__title { font-size: 3rem; }
                    .cta__copy { font-size: 1.125rem; }
                }

                @media (min-width: 1024px) {
                    .cta__title { font-size: 3.75rem; }
                }
                "#}
            </style>
        </div>
    }
}
