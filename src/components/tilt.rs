use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config;

/// Rotation `(x_deg, y_deg)` for a pointer at `(x, y)` over a box. The
/// pointer offset from the box center is clamped to the box, so the result
/// never exceeds `max_deg` on either axis.
pub fn tilt_angles(x: f64, y: f64, left: f64, top: f64, width: f64, height: f64, max_deg: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = (((x - left) / width - 0.5) * 2.0).clamp(-1.0, 1.0);
    let ny = (((y - top) / height - 0.5) * 2.0).clamp(-1.0, 1.0);
    (-ny * max_deg, nx * max_deg)
}

#[derive(Properties, PartialEq)]
pub struct TiltProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Tilt)]
pub fn tilt(props: &TiltProps) -> Html {
    let angles = use_state(|| (0.0f64, 0.0f64));

    let onmousemove = {
        let angles = angles.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            angles.set(tilt_angles(
                e.client_x() as f64,
                e.client_y() as f64,
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
                config::MAX_TILT_DEG,
            ));
        })
    };

    let onmouseleave = {
        let angles = angles.clone();
        Callback::from(move |_: MouseEvent| angles.set((0.0, 0.0)))
    };

    let (rx, ry) = *angles;
    html! {
        <div
            class={classes!("tilt", props.class.clone())}
            style={format!("transform: perspective(900px) rotateX({:.2}deg) rotateY({:.2}deg);", rx, ry)}
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}
