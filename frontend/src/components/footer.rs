use chrono::Datelike;
use yew::prelude::*;

pub const IMPRINT: &str = "upward Solution Inh. Julian Schumacher · Ratweg 4 · 65582 Diez";

pub fn copyright(year: i32) -> String {
    format!("© {} upward Solution", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer__inner">
                <p>{IMPRINT}</p>
                <p>{copyright(year)}</p>
            </div>
            <style>
                {r#"
                .footer {
                    position: relative;
                    padding: 2rem 1.5rem;
                    border-top: 1px solid rgba(245, 240, 232, 0.06);
                }

                .footer__inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    font-size: 0.75rem;
                    color: rgba(168, 160, 150, 0.4);
                    text-align: center;
                }

                @media (min-width: 768px) {
                    .footer { padding: 2rem 4rem; }
                    .footer__inner { flex-direction: row; font-size: 0.875rem; }
                }
                "#}
            </style>
        </footer>
    }
}
