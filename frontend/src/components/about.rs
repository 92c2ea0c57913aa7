use yew::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::scroll::RevealDirection;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="about section">
            <div class="section__inner about__grid">
                <ScrollReveal direction={RevealDirection::Left} duration={0.8} margin={100.0}>
                    <img
                        src="/assets/julian.jpeg"
                        alt="Julian Schumacher"
                        class="about__portrait"
                    />
                </ScrollReveal>

                <ScrollReveal direction={RevealDirection::Right} duration={0.8} delay={0.2} margin={100.0}>
                    <p class="eyebrow">{"Dein Ansprechpartner für"}</p>
                    <h2 class="about__title">
                        {"E-COMMERCE."}<br />
                        {"MARKETING."}<br />
                        {"SHOPIFY."}
                    </h2>
                    <p class="about__copy">
                        {"Bei upward Solution verbinden wir Design, Technologie und Markenidentität, \
                          um Onlineshops zu kreieren, die weit mehr tun als nur Produkte zu verkaufen \
                          – sie erzählen eine Geschichte."}
                    </p>
                    <p class="about__copy">
                        {"Unser Ansatz geht über standardisierte Lösungen hinaus, indem wir Shops \
                          erschaffen, die ein einzigartiges Erlebnis bieten und deine Kunden \
                          nachhaltig begeistern."}
                    </p>
                </ScrollReveal>
            </div>

            <style>
                {r#"
                .about__grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .about__portrait {
                    width: 100%;
                    max-width: 28rem;
                    margin: 0 auto;
                    display: block;
                    filter: grayscale(1);
                    transition: filter 0.7s;
                }

                .about__portrait:hover {
                    filter: grayscale(0);
                }

                .about__title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    margin-bottom: 2rem;
                }

                .about__copy {
                    color: var(--muted);
                    line-height: 1.7;
                    font-size: 1.125rem;
                }

                .about__copy + .about__copy {
                    margin-top: 1rem;
                }

                @media (min-width: 1024px) {
                    .about__grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 6rem;
                    }
                    .about__portrait { margin: 0; }
                    .about__title { font-size: 3rem; }
                }
                "#}
            </style>
        </section>
    }
}
