use gloo_console::log;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

/// Lifecycle of one simulated submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    /// Label shown on the submit button.
    pub fn label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Send Message",
            SubmitPhase::Sending => "Sending...",
            SubmitPhase::Sent => "Sent!",
        }
    }

    /// Only an idle form takes a new submission; a submit while a send is in
    /// flight is ignored instead of starting a second timer chain.
    pub fn accepts_submit(self) -> bool {
        matches!(self, SubmitPhase::Idle)
    }

    pub fn button_style(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "background: #1E90FF;",
            SubmitPhase::Sending => "background: #1E90FF; opacity: 0.7; cursor: wait;",
            SubmitPhase::Sent => "background: #34c759;",
        }
    }
}

/// What a real deployment would post to the backend. Serialized and logged
/// in place of a network call.
#[derive(Serialize, Debug)]
struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let phase = use_state(|| SubmitPhase::Idle);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let phase = phase.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !phase.accepts_submit() {
                return;
            }
            let payload = ContactMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            match serde_json::to_string(&payload) {
                Ok(body) => log!("contact form captured (not sent):", body),
                Err(e) => log!("failed to serialize contact message:", e.to_string()),
            }
            phase.set(SubmitPhase::Sending);
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let phase = phase.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(config::SEND_DELAY_MS).await;
                phase.set(SubmitPhase::Sent);
                gloo_timers::future::TimeoutFuture::new(config::SENT_RESET_MS).await;
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                phase.set(SubmitPhase::Idle);
            });
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <input
                type="text"
                placeholder="Your name"
                value={(*name).clone()}
                onchange={let name = name.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    name.set(input.value());
                }}
            />
            <input
                type="email"
                placeholder="Work email"
                value={(*email).clone()}
                onchange={let email = email.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    email.set(input.value());
                }}
            />
            <textarea
                placeholder="What does your hiring look like today?"
                rows="5"
                value={(*message).clone()}
                onchange={let message = message.clone(); move |e: Event| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    message.set(area.value());
                }}
            />
            <button
                type="submit"
                disabled={!phase.accepts_submit()}
                style={phase.button_style()}
            >
                {phase.label()}
            </button>
            <style>
                {r#"
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        width: 100%;
        max-width: 480px;
        margin: 0 auto;
    }
    .contact-form input,
    .contact-form textarea {
        padding: 0.9rem 1rem;
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(30, 144, 255, 0.2);
        border-radius: 8px;
        color: #fff;
        font-size: 1rem;
        font-family: inherit;
        transition: border-color 0.3s ease;
    }
    .contact-form input:focus,
    .contact-form textarea:focus {
        outline: none;
        border-color: #1E90FF;
    }
    .contact-form textarea {
        resize: vertical;
    }
    .contact-form button {
        padding: 1rem;
        border: none;
        border-radius: 8px;
        color: #fff;
        font-size: 1rem;
        font-weight: 600;
        cursor: pointer;
        transition: background 0.3s ease, opacity 0.3s ease;
    }
    .contact-form button:disabled {
        cursor: default;
    }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::SubmitPhase;

    #[test]
    fn only_idle_accepts_a_submit() {
        assert!(SubmitPhase::Idle.accepts_submit());
        assert!(!SubmitPhase::Sending.accepts_submit());
        assert!(!SubmitPhase::Sent.accepts_submit());
    }

    #[test]
    fn labels_follow_the_submission_lifecycle() {
        assert_eq!(SubmitPhase::Idle.label(), "Send Message");
        assert_eq!(SubmitPhase::Sending.label(), "Sending...");
        assert_eq!(SubmitPhase::Sent.label(), "Sent!");
    }

    #[test]
    fn sent_switches_to_the_success_color() {
        assert!(SubmitPhase::Sent.button_style().contains("#34c759"));
        assert!(SubmitPhase::Idle.button_style().contains("#1E90FF"));
        assert_ne!(
            SubmitPhase::Sent.button_style(),
            SubmitPhase::Idle.button_style()
        );
    }
}
