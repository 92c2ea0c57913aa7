use yew::prelude::*;

use crate::components::scene_canvas::HeroScene;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero__background" style="background-image: url('/assets/hero-bg.jpg');" />
            <div class="hero__tint" />
            <HeroScene />

            <div class="hero__content">
                <p class="hero__brand">{"upward Solution"}</p>
                <h1 class="hero__headline">
                    {"CREATE."}<br />
                    {"DESIGN."}<br />
                    {"DEVELOP."}
                </h1>
            </div>

            <div class="hero__scroll-hint">
                <div class="hero__scroll-line" />
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: calc(var(--vh, 1vh) * 100);
                    width: 100%;
                    overflow: hidden;
                }

                .hero__background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                }

                .hero__tint {
                    position: absolute;
                    inset: 0;
                    background: rgba(40, 38, 36, 0.3);
                }

                .hero__content {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    height: 100%;
                    padding: 2rem;
                }

                .hero__brand {
                    margin-bottom: 1rem;
                    font-size: 0.875rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: rgba(245, 240, 232, 0.7);
                    opacity: 0;
                    animation: heroRise 0.8s ease-out 0.2s forwards;
                    --rise: 20px;
                }

                .hero__headline {
                    font-size: 2.25rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    line-height: 1.05;
                    color: #f5f0e8;
                    opacity: 0;
                    animation: heroRise 1s ease-out 0.4s forwards;
                    --rise: 40px;
                }

                .hero__scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    opacity: 0;
                    animation: heroFade 1s ease-out 1.5s forwards;
                }

                .hero__scroll-line {
                    height: 4rem;
                    width: 1px;
                    background: rgba(245, 240, 232, 0.4);
                    animation: heroPulse 2s ease-in-out infinite;
                }

                @keyframes heroRise {
                    from { opacity: 0; transform: translateY(var(--rise)); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes heroFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes heroPulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }

                @media (min-width: 768px) {
                    .hero__content { padding: 4rem; }
                    .hero__headline { font-size: 3.75rem; }
                }

                @media (min-width: 1024px) {
                    .hero__content { padding: 6rem; }
                    .hero__headline { font-size: 6rem; }
                }
                "#}
            </style>
        </section>
    }
}
