use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose timer and state logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// What the contact form does when the browser refuses to open the chat link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkPolicy {
    /// Log the failure and show the success panel anyway.
    Optimistic,
    /// Go back to the form with the draft intact and show the error.
    Strict,
}

pub const LINK_POLICY: LinkPolicy = LinkPolicy::Optimistic;

// WhatsApp deep link target
pub const MESSAGING_DOMAIN: &str = "wa.me";
pub const RECIPIENT_ID: &str = "255712345678";

pub const CLINIC_PHONE_DISPLAY: &str = "+255 712 345 678";
pub const CLINIC_EMAIL: &str = "jordan@cardiologist.tz";
pub const CLINIC_LOCATION: &str = "Dar es Salaam, TZ";
pub const CLINIC_HOURS: &str = "Mon-Sat 8AM-5PM";

/// Artificial "Preparing..." pause before the chat link opens.
pub const SUBMIT_DELAY_MS: u32 = 1200;
/// How long the success panel stays up before the form comes back.
pub const SUCCESS_RESET_MS: u32 = 5000;

/// Scroll offset (px) after which the navbar turns solid.
pub const SCROLL_THRESHOLD: f64 = 20.0;

pub const HERO_PORTRAIT_URL: &str =
    "https://ik.imagekit.io/Doctoragi123/Gemini_Generated_Image_ma2mlmma2mlmma2m_014846.png?updatedAt=1768561409292";
pub const ABOUT_PORTRAIT_URL: &str =
    "https://ik.imagekit.io/Doctoragi123/1768560359537.jpg?updatedAt=1768561407755";

/// Plain chat link used by the "WhatsApp" clinic card.
pub fn chat_url() -> String {
    format!("https://{}/{}", MESSAGING_DOMAIN, RECIPIENT_ID)
}
