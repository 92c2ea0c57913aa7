use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::scroll::{is_in_view, reveal_style, RevealDirection};

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(RevealDirection::Up)]
    pub direction: RevealDirection,
    #[prop_or(40.0)]
    pub distance: f64,
    #[prop_or(0.7)]
    pub duration: f64,
    #[prop_or(0.0)]
    pub delay: f64,
    /// Stay revealed after the first time the element is seen.
    #[prop_or(true)]
    pub once: bool,
    #[prop_or(60.0)]
    pub margin: f64,
}

/// Window events after which an element's position in the viewport is re-read.
pub(crate) const RECHECK_EVENTS: [&str; 2] = ["scroll", "resize"];

pub(crate) fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

fn element_in_view(node: &NodeRef, margin: f64) -> Option<bool> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(is_in_view(rect.top(), rect.bottom(), viewport_height(), margin))
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    let revealed = use_mut_ref(|| false);

    let check = {
        let node = node.clone();
        let visible = visible.clone();
        let once = props.once;
        let margin = props.margin;
        move || {
            if let Some(in_view) = element_in_view(&node, margin) {
                let show = in_view || (once && *revealed.borrow());
                *revealed.borrow_mut() = show;
                visible.set(show);
            }
        }
    };

    {
        let check = check.clone();
        use_event_with_window(RECHECK_EVENTS[0], move |_: Event| check());
    }
    {
        let check = check.clone();
        use_event_with_window(RECHECK_EVENTS[1], move |_: Event| check());
    }
    use_mount(check);

    let style = reveal_style(*visible, props.direction, props.distance, props.duration, props.delay);

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
