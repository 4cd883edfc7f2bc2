use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::carousel::{Testimonial, TestimonialCarousel};
use crate::components::pop::PopCard;
use crate::components::reveal::Reveal;
use crate::components::ripple::RippleButton;
use crate::components::tilt::Tilt;
use crate::contact::form::ContactForm;
use crate::effects;

struct Course {
    title: &'static str,
    length: &'static str,
    summary: &'static str,
    image: &'static str,
}

const COURSES: [Course; 3] = [
    Course {
        title: "Full-Stack Web Development",
        length: "16 weeks",
        summary: "HTML, CSS and JavaScript up to production web apps with a real database behind them.",
        image: "/assets/course-web.jpg",
    },
    Course {
        title: "Data Analytics",
        length: "12 weeks",
        summary: "SQL, spreadsheets and Python notebooks, finishing with a dashboard built on your own data.",
        image: "/assets/course-data.jpg",
    },
    Course {
        title: "UI/UX Design",
        length: "10 weeks",
        summary: "Research, wireframes and high-fidelity prototypes, with a portfolio review at the end.",
        image: "/assets/course-design.jpg",
    },
];

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "I switched careers from retail to junior developer in five months. The mentors answered every late-night question.",
            author: "Rina S.",
            role: "Frontend Developer",
        },
        Testimonial {
            quote: "The projects felt like real client work. My final dashboard is what got me the interview.",
            author: "Dimas P.",
            role: "Data Analyst",
        },
        Testimonial {
            quote: "Small classes, honest feedback, and a portfolio I am actually proud of.",
            author: "Maya L.",
            role: "Product Designer",
        },
    ]
}

const FAQ: [(&str, &str); 3] = [
    ("Do I need prior experience?", "No. Every track starts from the basics and the first two weeks are paced for beginners."),
    ("Are classes online?", "Yes, live online sessions in the evening, with recordings for anything you miss."),
    ("Is there a payment plan?", "You can pay per month for the length of the course. Ask us through the contact form."),
];

#[function_component]
pub fn Home() -> Html {
    let to_contact = Callback::from(|_: MouseEvent| {
        effects::smooth_scroll_to("contact");
    });

    html! {
        <div class="home" id="top">
            <style>
                {r#"
                    html { scroll-behavior: smooth; }
                    body { margin: 0; background: #0f1115; color: #e8e8e8; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; }
                    .top-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 10; transition: background 0.3s ease; }
                    .top-nav.scrolled { background: rgba(15, 17, 21, 0.92); backdrop-filter: blur(8px); box-shadow: 0 2px 16px rgba(0,0,0,0.4); }
                    .nav-content { max-width: 1100px; margin: 0 auto; padding: 1rem 1.5rem; display: flex; align-items: center; justify-content: space-between; }
                    .nav-logo { color: #fff; font-weight: 700; font-size: 1.3rem; text-decoration: none; }
                    .nav-right { display: flex; gap: 1.5rem; }
                    .nav-link { color: rgba(255,255,255,0.75); text-decoration: none; padding-bottom: 2px; border-bottom: 2px solid transparent; }
                    .nav-link.active, .nav-link:hover { color: #fff; border-bottom-color: #ffb347; }
                    .burger-menu { display: none; background: none; border: 0; cursor: pointer; }
                    .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
                    @media (max-width: 768px) {
                        .burger-menu { display: block; }
                        .nav-right { display: none; position: absolute; top: 100%; left: 0; right: 0; flex-direction: column; padding: 1rem 1.5rem; background: rgba(15, 17, 21, 0.97); }
                        .nav-right.mobile-menu-open { display: flex; }
                    }

                    section { max-width: 1100px; margin: 0 auto; padding: 6rem 1.5rem 3rem; }
                    .hero { min-height: 90vh; display: flex; align-items: center; gap: 3rem; }
                    .hero h1 { font-size: 3rem; line-height: 1.1; margin: 0 0 1rem; }
                    .hero p { color: rgba(255,255,255,0.75); font-size: 1.15rem; }
                    .tilt { transition: transform 0.15s ease-out; will-change: transform; }
                    .hero-card { padding: 2rem; border-radius: 20px; background: linear-gradient(135deg, #ffb347, #ff5e62); color: #1a1a1a; min-width: 260px; box-shadow: 0 20px 40px rgba(0,0,0,0.35); }

                    .btn { border: 0; border-radius: 999px; padding: 0.85rem 1.8rem; font-size: 1rem; cursor: pointer; }
                    .btn-primary { background: #ffb347; color: #1a1a1a; font-weight: 600; }
                    .ripple-button { position: relative; overflow: hidden; }
                    .ripple { position: absolute; border-radius: 50%; background: rgba(255,255,255,0.55); transform: scale(0); animation: ripple 0.6s linear; pointer-events: none; }
                    @keyframes ripple { to { transform: scale(2.5); opacity: 0; } }

                    .reveal { opacity: 0; transform: translateY(24px); transition: opacity 0.6s ease, transform 0.6s ease; }
                    .reveal.visible { opacity: 1; transform: none; }

                    .courses { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; }
                    .card { background: #181b22; border-radius: 16px; overflow: hidden; cursor: pointer; transition: transform 0.2s ease; }
                    .card:hover { transform: scale(1.03); }
                    .card.pop { animation: pop 0.4s ease; }
                    @keyframes pop { 0% { transform: scale(1); } 40% { transform: scale(1.08); } 100% { transform: scale(1); } }
                    .card img { width: 100%; height: 160px; object-fit: cover; display: block; }
                    .card-body { padding: 1.2rem; }
                    .card-body small { color: #ffb347; }

                    .carousel { position: relative; text-align: center; padding: 0 3rem; }
                    .testimonial { margin: 0; animation: fadeIn 0.5s ease-in-out; }
                    .testimonial blockquote { font-size: 1.3rem; margin: 0 0 1rem; }
                    .testimonial figcaption span { display: block; color: rgba(255,255,255,0.6); }
                    .carousel-arrow { position: absolute; top: 30%; background: none; border: 0; color: #fff; font-size: 2.5rem; cursor: pointer; }
                    .carousel-arrow.prev { left: 0; }
                    .carousel-arrow.next { right: 0; }
                    .carousel-dots { margin-top: 1.5rem; display: flex; justify-content: center; gap: 0.5rem; }
                    .dot { width: 10px; height: 10px; border-radius: 50%; border: 0; background: rgba(255,255,255,0.3); cursor: pointer; }
                    .dot.active { background: #ffb347; }
                    @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }

                    details { background: #181b22; border-radius: 12px; padding: 1rem 1.2rem; margin-bottom: 0.8rem; }
                    summary { cursor: pointer; font-weight: 600; }

                    .contact-form { position: relative; display: flex; flex-direction: column; gap: 1rem; max-width: 640px; }
                    .form-row { display: flex; gap: 1rem; }
                    .form-row input { flex: 1; }
                    .contact-form input, .contact-form textarea { background: #181b22; border: 1px solid #2a2f3a; border-radius: 10px; padding: 0.8rem 1rem; color: #fff; font: inherit; }
                    .form-status:empty { display: none; }
                    .form-status { padding: 0.8rem 1rem; border-radius: 10px; }
                    .form-status.error { background: rgba(255, 82, 82, 0.12); color: #ff8a8a; }
                    .form-status.success { background: rgba(76, 175, 80, 0.15); color: #8be28f; }
                    .burst { position: absolute; left: 50%; bottom: 4rem; pointer-events: none; }
                    .burst-particle { position: absolute; width: 8px; height: 8px; border-radius: 50%; animation: burst 1.2s ease-out forwards; }
                    @keyframes burst { from { transform: translate(0, 0); opacity: 1; } to { transform: translate(var(--dx), var(--dy)); opacity: 0; } }
                    @media (max-width: 768px) { .hero { flex-direction: column; } .form-row { flex-direction: column; } }
                "#}
            </style>

            <section class="hero">
                <div>
                    <h1>{"Learn to code. Get hired."}</h1>
                    <p>{"Live, mentor-led bootcamps for people changing careers. Evening classes, real projects, and a portfolio you can show."}</p>
                    <RippleButton class="btn btn-primary" onclick={to_contact}>
                        {"Talk to an advisor"}
                    </RippleButton>
                </div>
                <Tilt>
                    <div class="hero-card">
                        <h3>{"Next intake"}</h3>
                        <p>{"Applications open for the next cohort. Seats are limited to 20 per class."}</p>
                    </div>
                </Tilt>
            </section>

            <section id="courses">
                <Reveal><h2>{"Courses"}</h2></Reveal>
                <div class="courses">
                    { for COURSES.iter().enumerate().map(|(i, course)| html! {
                        <Reveal delay_ms={(i as u32) * 120}>
                            <PopCard>
                                <img src={course.image} alt={course.title} loading="lazy" />
                                <div class="card-body">
                                    <small>{ course.length }</small>
                                    <h3>{ course.title }</h3>
                                    <p>{ course.summary }</p>
                                </div>
                            </PopCard>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="testimonials">
                <Reveal><h2>{"What our alumni say"}</h2></Reveal>
                <Reveal>
                    <TestimonialCarousel testimonials={testimonials()} />
                </Reveal>
            </section>

            <section id="faq">
                <Reveal><h2>{"FAQ"}</h2></Reveal>
                { for FAQ.iter().map(|(question, answer)| html! {
                    <Reveal>
                        <details>
                            <summary>{ *question }</summary>
                            <p>{ *answer }</p>
                        </details>
                    </Reveal>
                }) }
            </section>

            <section id="contact">
                <Reveal><h2>{"Get in touch"}</h2></Reveal>
                <Reveal>
                    <ContactForm />
                </Reveal>
            </section>
        </div>
    }
}
