use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent. We'll get back to you soon.";

/// What the form's status region currently shows. Each new state replaces
/// the previous one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    Hidden,
    Error(String),
    Success(String),
}

impl Feedback {
    pub fn error(messages: &[String]) -> Self {
        Feedback::Error(messages.join(". "))
    }

    pub fn success() -> Self {
        Feedback::Success(SUCCESS_MESSAGE.to_string())
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Feedback::Hidden => None,
            Feedback::Error(message) | Feedback::Success(message) => Some(message),
        }
    }

    pub fn style(&self) -> Option<&'static str> {
        match self {
            Feedback::Hidden => None,
            Feedback::Error(_) => Some("error"),
            Feedback::Success(_) => Some("success"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusRegionProps {
    pub feedback: Feedback,
}

#[function_component(StatusRegion)]
pub fn status_region(props: &StatusRegionProps) -> Html {
    let feedback = &props.feedback;
    html! {
        <div
            class={classes!("form-status", feedback.style())}
            role="status"
            aria-live="polite"
        >
            { feedback.message().unwrap_or_default() }
        </div>
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub dx: f64,
    pub dy: f64,
    pub hue: u16,
    pub delay_ms: u32,
}

/// Lays out a ring of particles; `seed` varies distances and colors between
/// bursts without needing a random source.
pub fn burst_particles(seed: u32, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let mix = (seed.wrapping_mul(2_654_435_761) ^ (i as u32).wrapping_mul(40_503)) % 1000;
            let angle = (i as f64 / count as f64) * std::f64::consts::TAU;
            let distance = 60.0 + (mix % 60) as f64;
            Particle {
                dx: angle.cos() * distance,
                dy: angle.sin() * distance,
                hue: ((mix * 37) % 360) as u16,
                delay_ms: (mix % 5) * 40,
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct BurstProps {
    /// Bumped once per successful submission; zero shows nothing.
    pub generation: u32,
}

#[function_component(Burst)]
pub fn burst(props: &BurstProps) -> Html {
    let particles = use_state(Vec::<Particle>::new);

    {
        let particles = particles.clone();
        use_effect_with_deps(
            move |generation| {
                let timeout = if *generation > 0 {
                    particles.set(burst_particles(*generation, config::BURST_PARTICLES));
                    let particles = particles.clone();
                    Some(Timeout::new(config::BURST_LIFETIME_MS, move || {
                        particles.set(Vec::new());
                    }))
                } else {
                    None
                };
                move || drop(timeout)
            },
            props.generation,
        );
    }

    if particles.is_empty() {
        return html! {};
    }

    html! {
        <div class="burst" aria-hidden="true">
            { for particles.iter().map(|p| html! {
                <span
                    class="burst-particle"
                    style={format!(
                        "--dx: {:.1}px; --dy: {:.1}px; background: hsl({}, 90%, 60%); animation-delay: {}ms;",
                        p.dx, p.dy, p.hue, p.delay_ms
                    )}
                />
            }) }
        </div>
    }
}
