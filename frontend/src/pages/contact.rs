use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::config;
use crate::inquiry::{Composer, InquiryField, SubmissionStatus};
use crate::link::BrowserOpener;

pub enum ContactMsg {
    SetField(InquiryField, String),
    Submit,
    /// Preparing delay elapsed for the given round.
    Deliver(u32),
    /// Success panel timed out for the given round.
    Revert(u32),
    NewInquiry,
}

/// Contact page with the WhatsApp inquiry form.
///
/// Both timers live on the component, so unmounting drops and cancels them.
pub struct Contact {
    composer: Composer,
    opener: BrowserOpener,
    deliver_timer: Option<Timeout>,
    revert_timer: Option<Timeout>,
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            composer: Composer::default(),
            opener: BrowserOpener,
            deliver_timer: None,
            revert_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::SetField(field, value) => {
                self.composer.update_field(field, value);
                true
            }
            ContactMsg::Submit => match self.composer.begin_submit() {
                Ok(round) => {
                    let link = ctx.link().clone();
                    self.deliver_timer = Some(Timeout::new(config::SUBMIT_DELAY_MS, move || {
                        link.send_message(ContactMsg::Deliver(round));
                    }));
                    true
                }
                Err(e) => {
                    log::debug!("Ignoring submit: {}", e);
                    false
                }
            },
            ContactMsg::Deliver(round) => {
                self.deliver_timer.take();
                match self.composer.deliver(round, &self.opener) {
                    Ok(_) => {
                        info!("Opened WhatsApp inquiry link");
                        let link = ctx.link().clone();
                        self.revert_timer = Some(Timeout::new(config::SUCCESS_RESET_MS, move || {
                            link.send_message(ContactMsg::Revert(round));
                        }));
                    }
                    Err(e) => log::debug!("Inquiry round {} not delivered: {}", round, e),
                }
                true
            }
            ContactMsg::Revert(round) => {
                self.revert_timer.take();
                self.composer.auto_revert(round)
            }
            ContactMsg::NewInquiry => {
                if let Some(timer) = self.revert_timer.take() {
                    drop(timer); // cancels the pending auto-revert
                }
                self.composer.reset_to_idle()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="contact-page">
                <style>
                    {r#"
                        .contact-page { max-width: 80rem; margin: 0 auto; padding: 10rem 1rem 5rem; }
                        .contact-header { text-align: center; margin-bottom: 5rem; }
                        .contact-header h2 { font-size: clamp(3rem, 7vw, 4.5rem); font-weight: 900; letter-spacing: -0.05em; margin-bottom: 2rem; }
                        .contact-header p { font-size: 1.25rem; color: #94a3b8; max-width: 42rem; margin: 0 auto; }
                        .contact-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(340px, 1fr)); gap: 4rem; align-items: start; }
                        .details-title { color: #a855f7; font-weight: 900; letter-spacing: 0.3em; text-transform: uppercase; font-size: 0.625rem; border-bottom: 1px solid rgba(255, 255, 255, 0.1); padding-bottom: 1.5rem; margin-bottom: 2.5rem; }
                        .detail-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 2rem; }
                        .detail-card { display: flex; flex-direction: column; gap: 1.5rem; background: rgba(255, 255, 255, 0.05); padding: 2rem; border-radius: 2.5rem; border: 1px solid rgba(255, 255, 255, 0.05); color: #fff; text-decoration: none; }
                        .detail-label { font-size: 0.625rem; color: #64748b; font-weight: 900; text-transform: uppercase; letter-spacing: 0.1em; }
                        .detail-value { font-size: 1.25rem; font-weight: 900; }
                        .detail-value.phone { color: #facc15; }
                        .patient-info { background: rgba(147, 51, 234, 0.1); padding: 2.5rem; border-radius: 2.5rem; border: 1px solid rgba(168, 85, 247, 0.2); margin-top: 2.5rem; }
                        .patient-info p { color: #cbd5e1; }
                        .inquiry-card { position: relative; background: rgba(255, 255, 255, 0.05); padding: 3rem; border-radius: 4rem; border: 1px solid rgba(255, 255, 255, 0.1); }
                        .quick-badge { position: absolute; top: -1rem; right: 3rem; background: #facc15; color: #000; padding: 0.625rem 2rem; border-radius: 9999px; font-weight: 900; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; }
                        .inquiry-form { display: flex; flex-direction: column; gap: 2rem; }
                        .inquiry-form label { font-size: 0.625rem; color: #64748b; text-transform: uppercase; letter-spacing: 0.1em; font-weight: 900; }
                        .inquiry-form input, .inquiry-form textarea { width: 100%; background: rgba(0, 0, 0, 0.4); border: 1px solid rgba(255, 255, 255, 0.1); padding: 1.25rem; border-radius: 1rem; color: #fff; font-weight: 700; outline: none; }
                        .inquiry-form input:focus, .inquiry-form textarea:focus { border-color: #a855f7; }
                        .inquiry-form textarea { height: 11rem; resize: none; }
                        .submit-button { width: 100%; background: #facc15; color: #000; font-weight: 900; padding: 1.5rem; border-radius: 1.5rem; border: none; font-size: 1.125rem; cursor: pointer; }
                        .submit-button:disabled { opacity: 0.5; cursor: wait; }
                        .form-error { color: #f87171; font-weight: 700; text-align: center; }
                        .privacy-note { text-align: center; font-size: 0.5625rem; color: #475569; text-transform: uppercase; letter-spacing: 0.1em; font-weight: 900; }
                        .success-panel { padding: 6rem 0; text-align: center; }
                        .success-icon { width: 6rem; height: 6rem; margin: 0 auto 2rem; border-radius: 9999px; background: rgba(34, 197, 94, 0.2); color: #22c55e; font-size: 3rem; display: flex; align-items: center; justify-content: center; }
                        .success-panel h3 { font-size: 1.875rem; font-weight: 900; margin-bottom: 1rem; }
                        .success-panel p { color: #94a3b8; font-size: 1.125rem; }
                        .new-inquiry { margin-top: 3rem; background: none; border: none; color: #c084fc; font-weight: 900; text-decoration: underline; text-underline-offset: 8px; cursor: pointer; }
                    "#}
                </style>
                <div class="contact-header">
                    <h2>{"Contact Us"}</h2>
                    <p>{"Take the first step towards better heart health. Connect with Dr. Mugisha's team directly today."}</p>
                </div>

                <div class="contact-grid">
                    { self.clinic_details() }
                    <div class="inquiry-card">
                        <div class="quick-badge">{"Quick Inquiry"}</div>
                        {
                            if self.composer.status() == SubmissionStatus::Success {
                                self.success_panel(ctx)
                            } else {
                                self.inquiry_form(ctx)
                            }
                        }
                    </div>
                </div>
            </div>
        }
    }
}

impl Contact {
    fn clinic_details(&self) -> Html {
        html! {
            <div class="clinic-details">
                <h3 class="details-title">{"Clinic Details"}</h3>
                <div class="detail-grid">
                    <a href={config::chat_url()} class="detail-card">
                        <span class="detail-label">{"WhatsApp"}</span>
                        <span class="detail-value phone">{config::CLINIC_PHONE_DISPLAY}</span>
                    </a>
                    <div class="detail-card">
                        <span class="detail-label">{"Email"}</span>
                        <span class="detail-value">{config::CLINIC_EMAIL}</span>
                    </div>
                    <div class="detail-card">
                        <span class="detail-label">{"Location"}</span>
                        <span class="detail-value">{config::CLINIC_LOCATION}</span>
                    </div>
                    <div class="detail-card">
                        <span class="detail-label">{"Working Hours"}</span>
                        <span class="detail-value">{config::CLINIC_HOURS}</span>
                    </div>
                </div>
                <div class="patient-info">
                    <h4>{"✓ Patient Info"}</h4>
                    <p>
                        {"Direct WhatsApp integration ensures your inquiry is received instantly. Please include your preferred date for a follow-up consultation."}
                    </p>
                </div>
            </div>
        }
    }

    fn success_panel(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="success-panel">
                <div class="success-icon">{"✓"}</div>
                <h3>{"Ready to send!"}</h3>
                <p>{"Redirecting you to WhatsApp..."}</p>
                <button class="new-inquiry" onclick={ctx.link().callback(|_| ContactMsg::NewInquiry)}>
                    {"New inquiry"}
                </button>
            </div>
        }
    }

    fn inquiry_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let draft = self.composer.draft();
        let submitting = self.composer.status() == SubmissionStatus::Submitting;

        let input_for = |field: InquiryField| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactMsg::SetField(field, input.value())
            })
        };

        html! {
            <>
                <h3>{"Direct Inquiry"}</h3>
                <form class="inquiry-form" onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    ContactMsg::Submit
                })}>
                    <div>
                        <label>{"Full Name"}</label>
                        <input
                            required={true}
                            type="text"
                            placeholder="e.g. John Doe"
                            value={draft.get(InquiryField::Name).to_string()}
                            oninput={input_for(InquiryField::Name)}
                        />
                    </div>
                    <div>
                        <label>{"Contact Info"}</label>
                        <input
                            required={true}
                            type="text"
                            placeholder="Email or Phone"
                            value={draft.get(InquiryField::Contact).to_string()}
                            oninput={input_for(InquiryField::Contact)}
                        />
                    </div>
                    <div>
                        <label>{"Message"}</label>
                        <textarea
                            required={true}
                            placeholder="Briefly describe your concerns..."
                            value={draft.get(InquiryField::Message).to_string()}
                            oninput={link.callback(|e: InputEvent| {
                                let area: HtmlTextAreaElement = e.target_unchecked_into();
                                ContactMsg::SetField(InquiryField::Message, area.value())
                            })}
                        />
                    </div>
                    {
                        if let Some(error) = self.composer.error() {
                            html! { <p class="form-error">{error}</p> }
                        } else {
                            html! {}
                        }
                    }
                    <button class="submit-button" type="submit" disabled={submitting}>
                        { if submitting { "Preparing..." } else { "Inquire via WhatsApp" } }
                    </button>
                    <p class="privacy-note">{"Professional Privacy Assured"}</p>
                </form>
            </>
        }
    }
}
