use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Ripple {
    /// Centers a ripple on the click point, sized to cover the button.
    pub fn at(id: u32, click_x: f64, click_y: f64, left: f64, top: f64, width: f64, height: f64) -> Self {
        let size = width.max(height);
        Ripple {
            id,
            x: click_x - left - size / 2.0,
            y: click_y - top - size / 2.0,
            size,
        }
    }
}

pub enum RippleAction {
    Add(Ripple),
    Remove(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RippleSet {
    pub items: Vec<Ripple>,
}

impl Reducible for RippleSet {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RippleAction::Add(ripple) => next.items.push(ripple),
            RippleAction::Remove(id) => next.items.retain(|r| r.id != id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let ripples = use_reducer(RippleSet::default);
    // Ids are handed out here so the removal timer knows exactly which
    // ripple it owns, even when clicks land between renders.
    let next_id = use_mut_ref(|| 0u32);

    let onclick = {
        let ripples = ripples.clone();
        let parent = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(target) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
                let rect = target.get_bounding_client_rect();
                let id = {
                    let mut next_id = next_id.borrow_mut();
                    let id = *next_id;
                    *next_id = next_id.wrapping_add(1);
                    id
                };
                ripples.dispatch(RippleAction::Add(Ripple::at(
                    id,
                    e.client_x() as f64,
                    e.client_y() as f64,
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                )));
                let ripples = ripples.clone();
                Timeout::new(config::RIPPLE_LIFETIME_MS, move || {
                    ripples.dispatch(RippleAction::Remove(id));
                })
                .forget();
            }
            parent.emit(e);
        })
    };

    html! {
        <button
            type={props.button_type.clone()}
            class={classes!("ripple-button", props.class.clone())}
            {onclick}
        >
            { for props.children.iter() }
            { for ripples.items.iter().map(|r| html! {
                <span
                    key={r.id}
                    class="ripple"
                    style={format!("left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px;", r.x, r.y, r.size, r.size)}
                />
            }) }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centered_on_click() {
        let ripple = Ripple::at(0, 150.0, 70.0, 100.0, 50.0, 200.0, 40.0);
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.x, -50.0);
        assert_eq!(ripple.y, -80.0);
    }

    #[test]
    fn ripples_are_added_and_removed_by_id() {
        let add = |id| RippleAction::Add(Ripple::at(id, 10.0, 10.0, 0.0, 0.0, 20.0, 20.0));
        let set = Rc::new(RippleSet::default()).reduce(add(0)).reduce(add(1));
        assert_eq!(set.items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![0, 1]);

        let set = set.reduce(RippleAction::Remove(0));
        assert_eq!(set.items.len(), 1);
        assert_eq!(set.items[0].id, 1);
    }

    #[test]
    fn back_to_back_clicks_each_clear_their_own_ripple() {
        let add = |id| RippleAction::Add(Ripple::at(id, 10.0, 10.0, 0.0, 0.0, 20.0, 20.0));
        let set = Rc::new(RippleSet::default()).reduce(add(4)).reduce(add(5));

        let set = set.reduce(RippleAction::Remove(4)).reduce(RippleAction::Remove(5));
        assert!(set.items.is_empty());
    }
}
