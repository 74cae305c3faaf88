use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::view::View;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_select: Callback<View>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let go_to = |view: View| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(view))
    };

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .hero { position: relative; min-height: 95vh; display: flex; align-items: center; padding: 6rem 0 3rem; overflow: hidden; }
                    .hero-grid { max-width: 80rem; margin: 0 auto; padding: 0 1rem; display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 4rem; align-items: center; }
                    .hero-tag { display: inline-block; background: rgba(168, 85, 247, 0.15); border: 1px solid rgba(168, 85, 247, 0.2); color: #d8b4fe; padding: 0.375rem 1rem; border-radius: 9999px; font-size: 0.625rem; font-weight: 900; letter-spacing: 0.1em; text-transform: uppercase; margin-bottom: 2rem; }
                    .hero h1 { font-size: clamp(3rem, 8vw, 6rem); font-weight: 900; line-height: 0.9; letter-spacing: -0.05em; margin-bottom: 2rem; }
                    .hero h1 .accent { background: linear-gradient(to right, #a855f7, #facc15); -webkit-background-clip: text; color: transparent; }
                    .hero-subtitle { font-size: 1.25rem; color: #94a3b8; max-width: 32rem; margin-bottom: 2.5rem; }
                    .hero-actions { display: flex; flex-wrap: wrap; gap: 1.25rem; }
                    .hero-cta { background: #9333ea; color: #fff; border: none; padding: 1.25rem 2.5rem; border-radius: 1rem; font-weight: 900; font-size: 1.125rem; cursor: pointer; }
                    .hero-secondary { background: rgba(255, 255, 255, 0.05); color: #fff; border: 1px solid rgba(255, 255, 255, 0.1); padding: 1.25rem 2.5rem; border-radius: 1rem; font-weight: 900; font-size: 1.125rem; cursor: pointer; }
                    .hero-portrait { position: relative; border-radius: 2.5rem; overflow: hidden; border: 1px solid rgba(255, 255, 255, 0.1); background: #0f172a; aspect-ratio: 3 / 4; }
                    .hero-portrait img { width: 100%; height: 100%; object-fit: cover; }
                    .stat-badge { position: absolute; bottom: 1.5rem; left: 1.5rem; background: #0f172a; border: 1px solid rgba(255, 255, 255, 0.1); padding: 1.25rem; border-radius: 1.5rem; }
                    .stat-value { font-size: 1.875rem; font-weight: 900; color: #facc15; }
                    .stat-label { font-size: 0.625rem; color: #64748b; text-transform: uppercase; font-weight: 900; letter-spacing: 0.1em; }
                    .commitment { padding: 8rem 1rem; text-align: center; border-top: 1px solid rgba(255, 255, 255, 0.05); border-bottom: 1px solid rgba(255, 255, 255, 0.05); }
                    .commitment h2 { color: #facc15; font-weight: 900; text-transform: uppercase; letter-spacing: 0.3em; font-size: 0.75rem; margin-bottom: 2.5rem; }
                    .commitment blockquote { max-width: 56rem; margin: 0 auto; font-size: clamp(1.5rem, 3vw, 2.25rem); font-weight: 300; font-style: italic; }
                    .commitment .highlight { color: #c084fc; font-weight: 600; }
                    .commitment-stats { margin-top: 4rem; display: flex; justify-content: center; gap: 8rem; }
                    .commitment-stats .stat-value { font-size: 3rem; color: #a855f7; }
                "#}
            </style>
            <section class="hero">
                <div class="hero-grid">
                    <div>
                        <span class="hero-tag">{"Trusted Cardiac Excellence"}</span>
                        <h1>{"Dr. Jordan"}<br/><span class="accent">{"Mugisha"}</span></h1>
                        <p class="hero-subtitle">
                            {"Expert Cardiologist in Tanzania providing professional heart care with 5+ years of specialized experience."}
                        </p>
                        <div class="hero-actions">
                            <button class="hero-cta" onclick={go_to(View::Contact)}>
                                {"Book Your Appointment"}
                            </button>
                            <button class="hero-secondary" onclick={go_to(View::About)}>
                                {"Learn More"}
                            </button>
                        </div>
                    </div>
                    <div class="hero-portrait">
                        <img src={config::HERO_PORTRAIT_URL} alt="Dr. Jordan Mugisha" />
                        <div class="stat-badge">
                            <p class="stat-value">{"100+"}</p>
                            <p class="stat-label">{"Lives Impacted"}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="commitment">
                <h2>{"A Commitment to Excellence"}</h2>
                <blockquote>
                    {"\"With over 100 patients treated for various heart conditions, Dr. Jordan Mugisha is dedicated to keeping your heart healthy. Trusted by patients across Tanzania for "}
                    <span class="highlight">{"compassionate and professional care"}</span>
                    {".\""}
                </blockquote>
                <div class="commitment-stats">
                    <div>
                        <p class="stat-value">{"5+"}</p>
                        <p class="stat-label">{"Years Practice"}</p>
                    </div>
                    <div>
                        <p class="stat-value">{"100+"}</p>
                        <p class="stat-label">{"Patients Helped"}</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
