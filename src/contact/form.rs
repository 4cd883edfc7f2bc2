use log::info;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use super::controller::{FormController, SubmitOutcome};
use super::feedback::{Burst, Feedback, StatusRegion};
use super::fields::read_form;
use super::store::{BrowserStorage, SubmissionLog, SystemClock};
use crate::components::ripple::RippleButton;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or(AttrValue::Static("Send message"))]
    pub submit_label: AttrValue,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form_ref = use_node_ref();
    let feedback = use_state(Feedback::default);
    let burst_generation = use_state(|| 0u32);
    let controller = use_mut_ref(|| {
        FormController::new(SubmissionLog::new(BrowserStorage, SystemClock))
    });

    let onsubmit = {
        let form_ref = form_ref.clone();
        let feedback = feedback.clone();
        let burst_generation = burst_generation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };

            let fields = read_form(&form);
            let outcome = controller.borrow_mut().submit(&fields);
            if let SubmitOutcome::Accepted { stored: Ok(record) } = &outcome {
                info!("Contact submission saved at {}", record.submitted_at);
            }
            if outcome.clears_form() {
                form.reset();
                burst_generation.set(*burst_generation + 1);
            }
            feedback.set(outcome.feedback());
        })
    };

    // Controls are left unnamed here; they get their field names by
    // position on submit.
    html! {
        <form class="contact-form" ref={form_ref} {onsubmit} novalidate=true>
            <div class="form-row">
                <input type="text" placeholder="Full name" autocomplete="name" />
                <input type="email" placeholder="Email address" autocomplete="email" />
            </div>
            <div class="form-row">
                <input type="tel" placeholder="Phone / WhatsApp" autocomplete="tel" />
                <input type="text" placeholder="Instagram (optional)" />
            </div>
            <textarea rows="5" placeholder="Which course are you interested in?" />
            <RippleButton class="btn btn-primary" button_type="submit">
                { props.submit_label.clone() }
            </RippleButton>
            <StatusRegion feedback={(*feedback).clone()} />
            <Burst generation={*burst_generation} />
        </form>
    }
}
