//! Opening external links (the WhatsApp deep link) from the page.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkOpenError {
    #[error("no browser window available")]
    NoWindow,
    #[error("browser refused to open the link: {0}")]
    Refused(String),
    #[error("new tab was blocked by the browser")]
    Blocked,
}

/// Port for handing a URL to the platform in a new browsing context.
///
/// The contact form only ever talks to this trait, so its flow can be
/// driven in tests with a recording fake instead of a real window.
pub trait LinkOpener {
    fn open_external(&self, url: &str) -> Result<(), LinkOpenError>;
}

/// Opens links with `window.open(url, "_blank")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open_external(&self, url: &str) -> Result<(), LinkOpenError> {
        let window = web_sys::window().ok_or(LinkOpenError::NoWindow)?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            // Popup blockers hand back a null window instead of throwing
            Ok(None) => Err(LinkOpenError::Blocked),
            Err(e) => Err(LinkOpenError::Refused(format!("{:?}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_read_as_sentences() {
        assert_eq!(LinkOpenError::Blocked.to_string(), "new tab was blocked by the browser");
        assert_eq!(
            LinkOpenError::Refused("SecurityError".to_string()).to_string(),
            "browser refused to open the link: SecurityError"
        );
    }
}
