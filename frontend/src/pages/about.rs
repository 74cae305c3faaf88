use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::view::View;

pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
}

pub const HIGHLIGHTS: [&str; 4] = [
    "Cardiac Diagnostics",
    "Patient-First Care",
    "5 Years Expert Clinical Exp.",
    "100+ Cardiac Treatments",
];

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        name: "Amani S.",
        text: "Dr. Jordan is the best. He took time to explain my condition in simple Swahili and English. My heart health has improved significantly under his care over the last year.",
    },
    Testimonial {
        name: "Esther K.",
        text: "Professional, kind, and extremely knowledgeable. He treated me like family and ensured I was comfortable throughout the entire process. I highly recommend him.",
    },
];

fn stars() -> Html {
    html! { <div class="stars">{"★★★★★"}</div> }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub on_select: Callback<View>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let book = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(View::Contact))
    };

    html! {
        <div class="about-page">
            <style>
                {r#"
                    .about-page { max-width: 80rem; margin: 0 auto; padding: 10rem 1rem 5rem; }
                    .profile-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 5rem; align-items: center; margin-bottom: 10rem; }
                    .profile-portrait { position: relative; }
                    .profile-portrait img { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 3rem; border: 1px solid rgba(255, 255, 255, 0.1); }
                    .trusted-badge { position: absolute; bottom: -2rem; right: -2rem; background: #facc15; color: #000; padding: 2rem; border-radius: 2rem; font-weight: 900; text-transform: uppercase; font-size: 0.875rem; letter-spacing: 0.1em; }
                    .profile-tag { color: #facc15; font-weight: 900; letter-spacing: 0.2em; text-transform: uppercase; font-size: 0.625rem; margin-bottom: 1.5rem; }
                    .profile-text h3 { font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 900; letter-spacing: -0.05em; margin-bottom: 2.5rem; }
                    .profile-text h3 .accent { color: #a855f7; }
                    .profile-text p { color: #94a3b8; font-size: 1.125rem; margin-bottom: 2rem; }
                    .highlights { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1.25rem; margin-top: 2.5rem; }
                    .highlight-chip { background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.05); padding: 1.25rem; border-radius: 1rem; font-weight: 700; font-size: 0.875rem; }
                    .highlight-chip::before { content: '✓ '; color: #c084fc; }
                    .profile-cta { margin-top: 2.5rem; background: #9333ea; color: #fff; border: none; padding: 1rem 2.5rem; border-radius: 1rem; font-weight: 900; cursor: pointer; }
                    .testimonials { background: rgba(15, 23, 42, 0.4); border-radius: 4rem; padding: 6rem 3rem; border: 1px solid rgba(255, 255, 255, 0.05); }
                    .testimonials h4 { text-align: center; font-size: clamp(2.25rem, 4vw, 3rem); font-weight: 900; margin-bottom: 5rem; }
                    .testimonial-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 4rem; }
                    .stars { color: #facc15; font-size: 1.25rem; margin-bottom: 1.5rem; }
                    .testimonial-text { font-size: 1.5rem; font-weight: 300; font-style: italic; margin-bottom: 2rem; }
                    .testimonial-name { color: #c084fc; font-weight: 900; text-transform: uppercase; letter-spacing: 0.1em; }
                "#}
            </style>
            <div class="profile-grid">
                <div class="profile-portrait">
                    <img src={config::ABOUT_PORTRAIT_URL} alt="Dr. Mugisha Professional Consultation" />
                    <div class="trusted-badge">
                        {stars()}
                        {"Trusted Care"}
                    </div>
                </div>
                <div class="profile-text">
                    <h2 class="profile-tag">{"Physician Profile"}</h2>
                    <h3>{"Dedicated to"}<br/><span class="accent">{"Your Heart's"}</span>{" Vitality"}</h3>
                    <p>
                        {"Dr. Jordan Mugisha is a cardiologist based in Tanzania with 5 years of experience in diagnosing and treating heart-related conditions. He has helped over 100 patients improve their heart health, providing compassionate and professional care."}
                    </p>
                    <p>
                        {"Dr. Mugisha specializes in various cardiac treatments, ensuring every patient receives personalized attention. He believes in treating every patient like family and is committed to improving heart health across the community."}
                    </p>
                    <div class="highlights">
                        {
                            HIGHLIGHTS.iter().map(|item| html! {
                                <div key={*item} class="highlight-chip">{*item}</div>
                            }).collect::<Html>()
                        }
                    </div>
                    <button class="profile-cta" onclick={book}>{"Book a Consultation"}</button>
                </div>
            </div>

            <section class="testimonials">
                <h4>{"Patient Testimonials"}</h4>
                <div class="testimonial-grid">
                    {
                        TESTIMONIALS.iter().map(|t| html! {
                            <div key={t.name} class="testimonial">
                                {stars()}
                                <p class="testimonial-text">{format!("\"{}\"", t.text)}</p>
                                <p class="testimonial-name">{t.name}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </div>
    }
}
