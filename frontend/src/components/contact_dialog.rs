use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{self, ContactForm, EMAIL_MAX, MESSAGE_MAX, NAME_MAX};

const SENT_MESSAGE: &str = "Nachricht gesendet! Wir melden uns so schnell wie möglich bei dir.";
const FAILED_MESSAGE: &str = "Nachricht konnte nicht gesendet werden. Bitte versuche es erneut.";
const CLOSE_AFTER_MS: u32 = 1_500;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Status {
    Sent,
    Failed,
}

/// Counts open/close transitions so a delayed close only applies to the
/// session it was scheduled in.
#[derive(Debug, Default)]
struct Session(u32);

impl Session {
    fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    fn ticket(&self) -> u32 {
        self.0
    }

    fn is_current(&self, ticket: u32) -> bool {
        self.0 == ticket
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ContactDialog)]
pub fn contact_dialog(props: &ContactDialogProps) -> Html {
    let form = use_state(ContactForm::default);
    let sending = use_state(|| false);
    let status = use_state(|| None::<Status>);
    let session = use_mut_ref(Session::default);

    // A reopened dialog starts without the previous result.
    {
        let status = status.clone();
        let session = session.clone();
        use_effect_with_deps(
            move |open| {
                session.borrow_mut().advance();
                if *open {
                    status.set(None);
                }
                || ()
            },
            props.open,
        );
    }

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { name: input.value(), ..(*form).clone() });
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { email: input.value(), ..(*form).clone() });
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm { message: input.value(), ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let sending = sending.clone();
        let status = status.clone();
        let on_close = props.on_close.clone();
        let session = session.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            let Some(payload) = form.payload() else {
                return;
            };

            sending.set(true);
            status.set(None);

            let form = form.clone();
            let sending = sending.clone();
            let status = status.clone();
            let on_close = on_close.clone();
            let session = session.clone();
            let ticket = session.borrow().ticket();
            wasm_bindgen_futures::spawn_local(async move {
                match contact::submit(&payload).await {
                    Ok(()) => {
                        log::info!("Contact request delivered");
                        form.set(ContactForm::default());
                        status.set(Some(Status::Sent));
                        sending.set(false);
                        gloo_timers::future::TimeoutFuture::new(CLOSE_AFTER_MS).await;
                        if session.borrow().is_current(ticket) {
                            on_close.emit(());
                        }
                    }
                    Err(error) => {
                        log::error!("Contact request failed: {}", error);
                        status.set(Some(Status::Failed));
                        sending.set(false);
                    }
                }
            });
        })
    };

    if !props.open {
        return html! {};
    }

    let close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="contact-dialog" onclick={close.clone()}>
            <div class="contact-dialog__panel" onclick={keep_open}>
                <button class="contact-dialog__close" aria-label="Schließen" onclick={close}>
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                        <path d="M18 6 6 18" />
                        <path d="m6 6 12 12" />
                    </svg>
                </button>

                <h3 class="contact-dialog__title">{"Kontakt aufnehmen"}</h3>
                <p class="contact-dialog__lead">{"Schreib uns eine Nachricht und wir melden uns bei dir."}</p>

                <form class="contact-dialog__form" {onsubmit}>
                    <label>
                        <span>{"Name"}</span>
                        <input
                            type="text"
                            required=true
                            maxlength={NAME_MAX.to_string()}
                            placeholder="Dein Name"
                            value={form.name.clone()}
                            oninput={on_name}
                        />
                    </label>
                    <label>
                        <span>{"E-Mail"}</span>
                        <input
                            type="email"
                            required=true
                            maxlength={EMAIL_MAX.to_string()}
                            placeholder="deine@email.de"
                            value={form.email.clone()}
                            oninput={on_email}
                        />
                    </label>
                    <label>
                        <span>{"Nachricht"}</span>
                        <textarea
                            required=true
                            rows="4"
                            maxlength={MESSAGE_MAX.to_string()}
                            placeholder="Deine Nachricht..."
                            value={form.message.clone()}
                            oninput={on_message}
                        />
                    </label>

                    {
                        match *status {
                            Some(Status::Sent) => html! {
                                <p class="contact-dialog__status contact-dialog__status--sent">{SENT_MESSAGE}</p>
                            },
                            Some(Status::Failed) => html! {
                                <p class="contact-dialog__status contact-dialog__status--failed">{FAILED_MESSAGE}</p>
                            },
                            None => html! {},
                        }
                    }

                    <button type="submit" class="contact-dialog__submit" disabled={*sending}>
                        { if *sending { "Wird gesendet..." } else { "Absenden" } }
                    </button>
                </form>
            </div>

            <style>
                {r#"
                .contact-dialog {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(245, 240, 232, 0.15);
                    backdrop-filter: blur(4px);
                    animation: dialogFade 0.3s ease-out;
                }

                .contact-dialog__panel {
                    position: relative;
                    width: 100%;
                    max-width: 32rem;
                    padding: 2rem;
                    background: var(--background);
                    border: 1px solid var(--border);
                    animation: dialogRise 0.3s ease-out;
                }

                .contact-dialog__close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    width: 1.25rem;
                    height: 1.25rem;
                    padding: 0;
                    border: none;
                    background: none;
                    color: var(--muted);
                    cursor: pointer;
                }

                .contact-dialog__close:hover {
                    color: var(--foreground);
                }

                .contact-dialog__title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .contact-dialog__lead {
                    color: var(--muted);
                    margin-bottom: 2rem;
                }

                .contact-dialog__form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }

                .contact-dialog__form label span {
                    display: block;
                    font-size: 0.875rem;
                    margin-bottom: 0.375rem;
                }

                .contact-dialog__form input,
                .contact-dialog__form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border: 1px solid var(--border);
                    background: var(--background);
                    color: var(--foreground);
                    font: inherit;
                    resize: none;
                }

                .contact-dialog__form input:focus,
                .contact-dialog__form textarea:focus {
                    outline: none;
                    border-color: var(--accent);
                }

                .contact-dialog__status {
                    font-size: 0.875rem;
                    line-height: 1.5;
                }

                .contact-dialog__status--sent { color: #8fbf8f; }
                .contact-dialog__status--failed { color: #e07a6f; }

                .contact-dialog__submit {
                    width: 100%;
                    padding: 0.75rem;
                    border: none;
                    background: var(--foreground);
                    color: var(--background);
                    font-size: 0.875rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    cursor: pointer;
                    transition: opacity 0.3s;
                }

                .contact-dialog__submit:disabled {
                    opacity: 0.5;
                    cursor: default;
                }

                @keyframes dialogFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes dialogRise {
                    from { opacity: 0; transform: translateY(40px) scale(0.97); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }

                @media (min-width: 768px) {
                    .contact-dialog__panel { padding: 2.5rem; }
                }
                "#}
            </style>
        </div>
    }
}
