use yew::prelude::*;

pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Diagnostic and Treatment",
        icon: "〰",
        description: "Care for common heart problems including hypertension, heart failure, rheumatic and ischemic heart disease.",
    },
    Service {
        title: "Basic Investigations",
        icon: "🩺",
        description: "ECG, echocardiography and clinical heart assessment for accurate diagnosis.",
    },
    Service {
        title: "Prevention & Education",
        icon: "✓",
        description: "Blood pressure control, lifestyle counselling and education to prevent heart disease.",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <style>
                {r#"
                    .services-page { max-width: 80rem; margin: 0 auto; padding: 10rem 1rem 5rem; }
                    .services-header { text-align: center; margin-bottom: 6rem; }
                    .services-header h2 { color: #a855f7; font-weight: 900; text-transform: uppercase; letter-spacing: 0.3em; font-size: 0.625rem; margin-bottom: 1.5rem; }
                    .services-header h3 { font-size: clamp(3rem, 7vw, 4.5rem); font-weight: 900; letter-spacing: -0.05em; }
                    .services-header h3 .accent { color: #facc15; }
                    .service-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2.5rem; }
                    .service-card { background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.1); padding: 3rem; border-radius: 3.5rem; transition: border-color 0.3s; }
                    .service-card:hover { border-color: rgba(168, 85, 247, 0.5); }
                    .service-icon { background: #000; border: 1px solid rgba(255, 255, 255, 0.05); padding: 1.25rem; border-radius: 1rem; width: fit-content; margin-bottom: 2.5rem; color: #a855f7; font-size: 2.5rem; }
                    .service-card h4 { font-size: 1.5rem; font-weight: 900; margin-bottom: 1.5rem; }
                    .service-card p { color: #94a3b8; }
                "#}
            </style>
            <div class="services-header">
                <h2>{"Comprehensive Care"}</h2>
                <h3>{"Cardiac "}<span class="accent">{"Expertise"}</span></h3>
            </div>
            <div class="service-grid">
                {
                    SERVICES.iter().map(|s| html! {
                        <div key={s.title} class="service-card">
                            <div class="service-icon">{s.icon}</div>
                            <h4>{s.title}</h4>
                            <p>{s.description}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
