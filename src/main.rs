use slide_carousel::{attach_navigation, NavigationControls, SlideCarousel};
use web_sys::HtmlElement;
use yew::prelude::*;

const SLIDES: &[(&str, &str)] = &[
    ("Dawn", "#f4a261"),
    ("Harbor", "#2a9d8f"),
    ("Summit", "#264653"),
    ("Dunes", "#e9c46a"),
    ("Night", "#3d348b"),
];
const DEMO_CONFIG: &str = r#"{"initialIndex": 2}"#;

fn attach_demo(
    wrapper_ref: &NodeRef,
    strip_ref: &NodeRef,
    previous_ref: &NodeRef,
    next_ref: &NodeRef,
) -> Option<(SlideCarousel, NavigationControls)> {
    let wrapper = wrapper_ref.cast::<HtmlElement>()?;
    let strip = strip_ref.cast::<HtmlElement>()?;
    let previous = previous_ref.cast::<HtmlElement>()?;
    let next = next_ref.cast::<HtmlElement>()?;
    match SlideCarousel::attach_elements(wrapper, strip) {
        Ok(carousel) => {
            let navigation = attach_navigation(&previous, &next, carousel.entry_points());
            Some((carousel, navigation))
        }
        Err(err) => {
            gloo::console::warn!("carousel: attach failed", err.to_string());
            None
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let wrapper_ref = use_node_ref();
    let strip_ref = use_node_ref();
    let previous_ref = use_node_ref();
    let next_ref = use_node_ref();

    {
        let wrapper_ref = wrapper_ref.clone();
        let strip_ref = strip_ref.clone();
        let previous_ref = previous_ref.clone();
        let next_ref = next_ref.clone();
        use_effect_with((), move |_| {
            let attached = attach_demo(&wrapper_ref, &strip_ref, &previous_ref, &next_ref);
            move || {
                if let Some((carousel, navigation)) = attached {
                    drop(navigation);
                    carousel.detach();
                }
            }
        });
    }

    let slides = SLIDES.iter().map(|(label, color)| {
        let style = format!("background: {color};");
        html! {
            <li class="slide-item" {style}>
                <span>{ *label }</span>
            </li>
        }
    });

    html! {
        <main class="carousel-demo">
            <div class="slide-wrapper" ref={wrapper_ref} data-carousel={DEMO_CONFIG}>
                <ul class="slide" ref={strip_ref}>
                    { for slides }
                </ul>
            </div>
            <nav class="arrow-nav">
                <button class="prev" ref={previous_ref}>{ "Previous" }</button>
                <button class="next" ref={next_ref}>{ "Next" }</button>
            </nav>
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
