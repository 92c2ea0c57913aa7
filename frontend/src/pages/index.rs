use yew::prelude::*;

use crate::components::{
    about::About, cta::Cta, footer::Footer, hero::Hero, process::Process,
    scene_canvas::GlobalScene, services::Services,
};

#[function_component(Index)]
pub fn index() -> Html {
    html! {
        <>
            <GlobalScene />
            <main class="page">
                <Hero />
                <About />
                <Services />
                <Process />
                <Cta />
                <Footer />
            </main>
        </>
    }
}
