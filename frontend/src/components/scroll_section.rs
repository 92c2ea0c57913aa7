use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::scroll_reveal::{viewport_height, RECHECK_EVENTS};
use crate::scroll::{element_progress, SectionRanges};

#[derive(Properties, PartialEq)]
pub struct ScrollSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(80.0)]
    pub parallax_offset: f64,
    #[prop_or((0.92, 1.0))]
    pub scale_range: (f64, f64),
    #[prop_or((0.3, 1.0))]
    pub opacity_range: (f64, f64),
}

/// Slides, scales and fades its children in as the section scrolls into view.
#[function_component(ScrollSection)]
pub fn scroll_section(props: &ScrollSectionProps) -> Html {
    let node = use_node_ref();
    let ranges = SectionRanges {
        parallax_offset: props.parallax_offset,
        scale: props.scale_range,
        opacity: props.opacity_range,
    };
    let initial = ranges.at(0.0);
    let motion = use_state_eq(move || initial);

    let update = {
        let node = node.clone();
        let motion = motion.clone();
        move || {
            if let Some(element) = node.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                let progress = element_progress(rect.top(), rect.height(), viewport_height());
                motion.set(ranges.at(progress));
            }
        }
    };

    {
        let update = update.clone();
        use_event_with_window(RECHECK_EVENTS[0], move |_: Event| update());
    }
    {
        let update = update.clone();
        use_event_with_window(RECHECK_EVENTS[1], move |_: Event| update());
    }
    use_mount(update);

    html! {
        <div ref={node} class={props.class.clone()}>
            <div style={motion.style()}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
