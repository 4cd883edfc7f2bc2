use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub enum CarouselAction {
    Next,
    Prev,
    Go(usize),
}

/// Which slide is showing. Moves wrap around at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        CarouselState { index: 0, len }
    }

    fn moved(self, action: CarouselAction) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Next => (self.index + 1) % self.len,
            CarouselAction::Prev => (self.index + self.len - 1) % self.len,
            CarouselAction::Go(index) if index < self.len => index,
            CarouselAction::Go(_) => self.index,
        };
        CarouselState { index, ..self }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.moved(action))
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &CarouselProps) -> Html {
    let len = props.testimonials.len();
    let state = use_reducer(|| CarouselState::new(len));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::CAROUSEL_INTERVAL_MS, move || {
                    state.dispatch(CarouselAction::Next);
                });
                move || drop(interval)
            },
            len,
        );
    }

    let on_prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Next))
    };

    let Some(current) = props.testimonials.get(state.index) else {
        return html! {};
    };

    html! {
        <div class="carousel">
            <button class="carousel-arrow prev" aria-label="Previous testimonial" onclick={on_prev}>{"‹"}</button>
            <figure class="testimonial" key={state.index}>
                <blockquote>{ current.quote }</blockquote>
                <figcaption>
                    <strong>{ current.author }</strong>
                    <span>{ current.role }</span>
                </figcaption>
            </figure>
            <button class="carousel-arrow next" aria-label="Next testimonial" onclick={on_next}>{"›"}</button>
            <div class="carousel-dots">
                { for (0..len).map(|i| {
                    let state = state.clone();
                    html! {
                        <button
                            class={classes!("dot", (i == state.index).then_some("active"))}
                            aria-label={format!("Show testimonial {}", i + 1)}
                            onclick={Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Go(i)))}
                        />
                    }
                }) }
            </div>
        </div>
    }
}
