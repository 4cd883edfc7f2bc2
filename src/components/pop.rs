use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct PopCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Card that plays a short "pop" when clicked. Hover scaling is CSS only.
#[function_component(PopCard)]
pub fn pop_card(props: &PopCardProps) -> Html {
    let popping = use_state(|| false);

    let onclick = {
        let popping = popping.clone();
        Callback::from(move |_: MouseEvent| {
            popping.set(true);
            let popping = popping.clone();
            Timeout::new(config::POP_LIFETIME_MS, move || popping.set(false)).forget();
        })
    };

    html! {
        <article class={classes!("card", props.class.clone(), (*popping).then_some("pop"))} {onclick}>
            { for props.children.iter() }
        </article>
    }
}
