use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::navbar::Navbar;
use crate::config;
use crate::reveal::observer::RevealObserver;
use crate::utils::scroll;

fn feature_card(icon: &'static str, title: &'static str, description: &'static str) -> Html {
    html! {
        <div class="feature-card reveal-on-scroll">
            <i class={format!("fas {}", icon)}></i>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

fn pipeline_step(number: u32, name: &'static str, description: &'static str) -> Html {
    html! {
        <div class="pipeline-step reveal-on-scroll">
            <span class="step-number">{number}</span>
            <div class="step-text">
                <h3>{name}</h3>
                <p>{description}</p>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let scroll_y = use_state(|| 0.0);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // One scroll listener; the navbar preset and the hero parallax both
    // derive from the stored depth.
    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scroll_y = scroll_y.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(depth) = win.scroll_y() {
                                    scroll_y.set(depth);
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Initial call
                    if let Ok(depth) = window.scroll_y() {
                        scroll_y.set(depth);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Reveal-on-scroll for section headings, cards and pipeline steps.
    {
        use_effect_with_deps(
            move |_| {
                let observer =
                    RevealObserver::install(config::REVEAL_SELECTOR, config::REVEAL_THRESHOLD);
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let hero_cta = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll::smooth_scroll_to("contact");
    });

    html! {
        <div class="landing-page">
            <Navbar scroll_y={*scroll_y} />
            <header class="hero">
                <div
                    class="hero-background"
                    style={format!("background-position: center {}px;", scroll::parallax_offset(*scroll_y))}
                ></div>
                <div class="hero-content">
                    <h1 class="hero-title">{"Hiring, Run by AI Agents"}</h1>
                    <p class="hero-subtitle">
                        {"Screen resumes, run interviews, match candidates and keep every role moving - without drowning your team in busywork."}
                    </p>
                    <a href="#contact" class="hero-cta" onclick={hero_cta}>{"Talk to Us"}</a>
                </div>
            </header>

            <section id="features" class="features-section">
                <h2 class="section-title reveal-on-scroll">{"Four Agents, One Team"}</h2>
                <div class="feature-grid">
                    { feature_card(
                        "fa-file-lines",
                        "Resume Screening",
                        "The screener agent parses every resume, scores it against the role \
                         and explains its reasoning, so no application sits unread.",
                    ) }
                    { feature_card(
                        "fa-comments",
                        "AI Interviews",
                        "The interviewer agent runs structured first-round interviews, adapts \
                         its questions to each answer and writes up an evaluation.",
                    ) }
                    { feature_card(
                        "fa-user-check",
                        "Candidate Matching",
                        "The matcher agent compares candidate profiles against open roles and \
                         surfaces the strongest fits across your whole job board.",
                    ) }
                    { feature_card(
                        "fa-diagram-project",
                        "Pipeline Coordination",
                        "The coordinator agent moves candidates between stages, schedules the \
                         next step and keeps recruiters ahead of every deadline.",
                    ) }
                </div>
            </section>

            <section id="pipeline" class="pipeline-section">
                <h2 class="section-title reveal-on-scroll">{"From Application to Offer"}</h2>
                <div class="pipeline-steps">
                    { pipeline_step(1, "Screening", "Every application is parsed, scored and ranked the moment it lands.") }
                    { pipeline_step(2, "Interview", "Qualified candidates get an adaptive AI interview within a day.") }
                    { pipeline_step(3, "Assessment", "Interview evaluations and role match scores roll up into one view.") }
                    { pipeline_step(4, "Offer", "Your team steps in for the final call with the full history at hand.") }
                    { pipeline_step(5, "Hired", "The pipeline closes out and the next role picks up where you left off.") }
                </div>
            </section>

            <section id="contact" class="contact-section">
                <h2 class="section-title reveal-on-scroll">{"Get in Touch"}</h2>
                <p class="contact-intro reveal-on-scroll">
                    {"Tell us about your hiring volume and we'll set up a walkthrough with your own roles."}
                </p>
                <ContactForm />
            </section>

            <footer class="footer">
                <p class="footer-blurb">
                    {"AI Hiring Assistant - screening, interviews, matching and coordination in one place."}
                </p>
                <p class="footer-note">{"No smartphone app, no plugins. It runs where your candidates already are."}</p>
            </footer>

            <style>
                {r#"
    .landing-page {
        min-height: 100vh;
        overflow-x: hidden;
    }

    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 0 2rem;
    }
    .hero-background {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 100vh;
        background-image:
            radial-gradient(circle at 20% 30%, rgba(30, 144, 255, 0.25), transparent 40%),
            radial-gradient(circle at 80% 70%, rgba(126, 178, 255, 0.18), transparent 45%),
            linear-gradient(180deg, #10131a 0%, #1a1a1a 100%);
        background-size: 140% 140%;
        background-repeat: no-repeat;
        z-index: -2;
        pointer-events: none;
    }
    .hero-title {
        font-size: 3.5rem;
        margin-bottom: 1rem;
        background: linear-gradient(45deg, #fff, #7EB2FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-subtitle {
        font-size: 1.3rem;
        color: #ddd;
        max-width: 620px;
        margin: 0 auto 2rem;
        line-height: 1.5;
    }
    .hero-cta {
        display: inline-block;
        padding: 1rem 2.5rem;
        background: #1E90FF;
        color: #fff;
        text-decoration: none;
        border-radius: 8px;
        font-size: 1.1rem;
        font-weight: 600;
        transition: background 0.3s ease, transform 0.3s ease;
    }
    .hero-cta:hover {
        background: #7EB2FF;
        transform: translateY(-2px);
    }

    .section-title {
        font-size: 2.5rem;
        text-align: center;
        margin-bottom: 2.5rem;
        background: linear-gradient(45deg, #fff, #7EB2FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }

    .features-section {
        padding: 5rem 2rem;
        max-width: 1100px;
        margin: 0 auto;
    }
    .feature-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1.5rem;
    }
    .feature-card {
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(30, 144, 255, 0.1);
        border-radius: 16px;
        padding: 2rem;
    }
    .feature-card i {
        color: #7EB2FF;
        font-size: 1.8rem;
        margin-bottom: 1rem;
    }
    .feature-card h3 {
        margin: 0 0 0.75rem;
        font-size: 1.2rem;
    }
    .feature-card p {
        margin: 0;
        color: #bbb;
        line-height: 1.5;
        font-size: 0.95rem;
    }

    .pipeline-section {
        padding: 5rem 2rem;
        max-width: 720px;
        margin: 0 auto;
    }
    .pipeline-step {
        display: flex;
        align-items: flex-start;
        gap: 1.25rem;
        padding: 1.25rem 0;
        border-bottom: 1px solid rgba(30, 144, 255, 0.1);
    }
    .step-number {
        flex-shrink: 0;
        width: 2.2rem;
        height: 2.2rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 50%;
        background: rgba(30, 144, 255, 0.15);
        color: #7EB2FF;
        font-weight: 700;
    }
    .step-text h3 {
        margin: 0 0 0.4rem;
        font-size: 1.1rem;
    }
    .step-text p {
        margin: 0;
        color: #bbb;
        line-height: 1.5;
        font-size: 0.95rem;
    }

    .contact-section {
        padding: 5rem 2rem 6rem;
        max-width: 720px;
        margin: 0 auto;
        text-align: center;
    }
    .contact-intro {
        color: #ddd;
        margin-bottom: 2rem;
    }

    .footer {
        padding: 3rem 2rem;
        text-align: center;
        border-top: 1px solid rgba(30, 144, 255, 0.1);
    }
    .footer-blurb {
        color: #ddd;
        margin: 0 0 0.5rem;
    }
    .footer-note {
        color: #777;
        font-size: 0.9rem;
        margin: 0;
    }

    @media (max-width: 768px) {
        .hero-title {
            font-size: 2.4rem;
        }
        .hero-subtitle {
            font-size: 1.1rem;
        }
        .section-title {
            font-size: 2rem;
        }
        .features-section,
        .pipeline-section {
            padding: 3rem 1rem;
        }
    }
                "#}
            </style>
        </div>
    }
}
