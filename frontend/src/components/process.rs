use yew::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::components::scroll_section::ScrollSection;

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Analyse",
        description: "Wir verstehen deine Marke, deine Ziele und deine Zielgruppe.",
    },
    Step {
        number: "02",
        title: "Konzept",
        description: "Wir entwickeln eine maßgeschneiderte Strategie für deinen Erfolg.",
    },
    Step {
        number: "03",
        title: "Umsetzung",
        description: "Design und Entwicklung deines individuellen Onlineshops.",
    },
    Step {
        number: "04",
        title: "Launch",
        description: "Go-Live mit kontinuierlicher Optimierung und Support.",
    },
];

pub fn stagger(index: usize) -> f64 {
    index as f64 * 0.15
}

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section class="process section">
            <ScrollSection class="section__inner">
                <ScrollReveal distance={30.0} duration={0.6} margin={100.0} class="section__header">
                    <p class="eyebrow">{"Wie wir arbeiten"}</p>
                    <h2 class="section__title">{"Unser Prozess"}</h2>
                </ScrollReveal>

                <div class="process__grid">
                    {
                        STEPS.iter().enumerate().map(|(index, step)| html! {
                            <ScrollReveal
                                key={step.number}
                                distance={30.0}
                                duration={0.6}
                                delay={stagger(index)}
                                margin={50.0}
                            >
                                <span class="process__number">{step.number}</span>
                                <h3 class="process__title">{step.title}</h3>
                                <p class="process__copy">{step.description}</p>
                            </ScrollReveal>
                        }).collect::<Html>()
                    }
                </div>
            </ScrollSection>

            <style>
                {r#"
                .process__grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .process__number {
                    font-size: 4.5rem;
                    font-weight: 700;
                    line-height: 1;
                    color: var(--border);
                }

                .process__title {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0.5rem 0;
                }

                .process__copy {
                    color: var(--muted);
                    line-height: 1.7;
                }

                @media (min-width: 768px) {
                    .process__grid { grid-template-columns: 1fr 1fr; }
                }

                @media (min-width: 1024px) {
                    .process__grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_in_sequence() {
        let numbers: Vec<_> = STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, ["01", "02", "03", "04"]);
        assert_eq!(STEPS[3].title, "Launch");
    }

    #[test]
    fn steps_reveal_with_wider_stagger() {
        assert!((stagger(2) - 0.3).abs() < 1e-12);
    }
}
