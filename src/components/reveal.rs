use gloo_console::log;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Calls `on_visible` the first time `element` scrolls into view, then stops
/// watching it. Returns `None` when the browser has no IntersectionObserver.
fn observe_once(
    element: &Element,
    on_visible: impl Fn() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                on_visible();
                observer.unobserve(&entry.target());
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some((observer, callback))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let watch = node.cast::<Element>().and_then(|element| {
                    let visible = visible.clone();
                    observe_once(&element, move || visible.set(true))
                });
                if watch.is_none() {
                    log!("IntersectionObserver unavailable, revealing immediately");
                    visible.set(true);
                }
                move || {
                    if let Some((observer, _callback)) = watch {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), (*visible).then_some("visible"))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
