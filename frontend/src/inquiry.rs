//! Contact inquiry: the draft the visitor types, the submission status,
//! and the WhatsApp link built from them.
//!
//! Everything in here is plain state so the contact page only has to wire
//! it to inputs and timers.

use log::{debug, warn};
use thiserror::Error;

use crate::config::{self, LinkPolicy};
use crate::link::{LinkOpenError, LinkOpener};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InquiryField {
    Name,
    Contact,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryDraft {
    pub name: String,
    /// Email or phone, whatever the visitor typed.
    pub contact: String,
    pub message: String,
}

impl InquiryDraft {
    pub fn set(&mut self, field: InquiryField, value: String) {
        match field {
            InquiryField::Name => self.name = value,
            InquiryField::Contact => self.contact = value,
            InquiryField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::Name => &self.name,
            InquiryField::Contact => &self.contact,
            InquiryField::Message => &self.message,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.contact.is_empty() && !self.message.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    #[error("all fields are required")]
    Incomplete,
    #[error("an inquiry is already in progress")]
    NotIdle,
    #[error("no submission is waiting to be sent")]
    NotSubmitting,
    #[error(transparent)]
    Link(#[from] LinkOpenError),
}

/// Message body in the format the practice's WhatsApp inbox expects.
pub fn compose_message(draft: &InquiryDraft) -> String {
    format!(
        "Habari Dr. Mugisha,\n\nInquiry from: {}\nContact: {}\n\nMessage: {}",
        draft.name, draft.contact, draft.message
    )
}

/// Percent-encodes like JavaScript's `encodeURIComponent`.
///
/// `urlencoding` escapes `! ' ( ) *` as well; those are put back so the
/// output matches links produced by browsers byte for byte.
pub fn encode_uri_component(raw: &str) -> String {
    let encoded = urlencoding::encode(raw);
    let mut out = String::with_capacity(encoded.len());
    let mut rest: &str = &encoded;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let triplet = &rest[pos..pos + 3];
        match triplet {
            "%21" => out.push('!'),
            "%27" => out.push('\''),
            "%28" => out.push('('),
            "%29" => out.push(')'),
            "%2A" => out.push('*'),
            _ => out.push_str(triplet),
        }
        rest = &rest[pos + 3..];
    }
    out.push_str(rest);
    out
}

pub fn whatsapp_link(draft: &InquiryDraft) -> String {
    format!(
        "https://{}/{}?text={}",
        config::MESSAGING_DOMAIN,
        config::RECIPIENT_ID,
        encode_uri_component(&compose_message(draft))
    )
}

/// Submission state machine for the contact form.
///
/// Each submission gets a round number. The delayed steps (`deliver`,
/// `auto_revert`) must present the round they were scheduled for, so a
/// timer left over from an earlier round is ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct Composer {
    draft: InquiryDraft,
    status: SubmissionStatus,
    // Draft as it was when submit was pressed; edits made while
    // "Preparing..." is shown do not leak into the link.
    pending: Option<InquiryDraft>,
    round: u32,
    policy: LinkPolicy,
    error: Option<String>,
}

impl Composer {
    pub fn new(policy: LinkPolicy) -> Self {
        Self {
            draft: InquiryDraft::default(),
            status: SubmissionStatus::Idle,
            pending: None,
            round: 0,
            policy,
            error: None,
        }
    }

    pub fn draft(&self) -> &InquiryDraft {
        &self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn update_field(&mut self, field: InquiryField, value: String) {
        self.draft.set(field, value);
    }

    /// `Idle -> Submitting`. Returns the round the delivery timer has to carry.
    pub fn begin_submit(&mut self) -> Result<u32, InquiryError> {
        if self.status != SubmissionStatus::Idle {
            return Err(InquiryError::NotIdle);
        }
        if !self.draft.is_complete() {
            return Err(InquiryError::Incomplete);
        }
        self.round = self.round.wrapping_add(1);
        self.pending = Some(self.draft.clone());
        self.error = None;
        self.status = SubmissionStatus::Submitting;
        debug!("Inquiry round {} submitting", self.round);
        Ok(self.round)
    }

    /// Builds the link, opens it once and moves to `Success`, clearing the draft.
    ///
    /// Under [`LinkPolicy::Strict`] a failed open sends the form back to
    /// `Idle` with the draft kept and the error recorded.
    pub fn deliver(&mut self, round: u32, opener: &dyn LinkOpener) -> Result<String, InquiryError> {
        if self.status != SubmissionStatus::Submitting || round != self.round {
            return Err(InquiryError::NotSubmitting);
        }
        let snapshot = self.pending.take().ok_or(InquiryError::NotSubmitting)?;
        let url = whatsapp_link(&snapshot);

        if let Err(e) = opener.open_external(&url) {
            match self.policy {
                LinkPolicy::Optimistic => {
                    warn!("Could not open WhatsApp link, continuing: {}", e);
                }
                LinkPolicy::Strict => {
                    warn!("Could not open WhatsApp link: {}", e);
                    self.error = Some(e.to_string());
                    self.status = SubmissionStatus::Idle;
                    return Err(e.into());
                }
            }
        }

        self.status = SubmissionStatus::Success;
        self.draft.clear();
        debug!("Inquiry round {} delivered", round);
        Ok(url)
    }

    /// "New inquiry" button. Only does something from `Success`.
    pub fn reset_to_idle(&mut self) -> bool {
        if self.status != SubmissionStatus::Success {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    /// Timer-driven `Success -> Idle` for the given round.
    pub fn auto_revert(&mut self, round: u32) -> bool {
        if round != self.round {
            return false;
        }
        let reverted = self.reset_to_idle();
        if reverted {
            debug!("Inquiry round {} reverted to idle", round);
        }
        reverted
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(config::LINK_POLICY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
        fail_with: Option<LinkOpenError>,
    }

    impl LinkOpener for RecordingOpener {
        fn open_external(&self, url: &str) -> Result<(), LinkOpenError> {
            self.opened.borrow_mut().push(url.to_string());
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn filled(composer: &mut Composer) {
        composer.update_field(InquiryField::Name, "Amani".to_string());
        composer.update_field(InquiryField::Contact, "+255700000000".to_string());
        composer.update_field(InquiryField::Message, "Need a checkup".to_string());
    }

    fn amani() -> InquiryDraft {
        InquiryDraft {
            name: "Amani".to_string(),
            contact: "+255700000000".to_string(),
            message: "Need a checkup".to_string(),
        }
    }

    #[test]
    fn message_body_matches_inbox_format() {
        assert_eq!(
            compose_message(&amani()),
            "Habari Dr. Mugisha,\n\nInquiry from: Amani\nContact: +255700000000\n\nMessage: Need a checkup"
        );
    }

    #[test]
    fn encoded_body_has_no_raw_separators() {
        let encoded = encode_uri_component(&compose_message(&amani()));
        for c in ['\n', ' ', '&', '='] {
            assert!(!encoded.contains(c), "found {:?} in {}", c, encoded);
        }
        assert_eq!(
            encoded,
            "Habari%20Dr.%20Mugisha%2C%0A%0AInquiry%20from%3A%20Amani%0AContact%3A%20%2B255700000000%0A%0AMessage%3A%20Need%20a%20checkup"
        );
    }

    #[test]
    fn encoding_keeps_browser_unreserved_marks() {
        assert_eq!(encode_uri_component("Hi (again)! it's *urgent* ~ok"), "Hi%20(again)!%20it's%20*urgent*%20~ok");
        assert_eq!(encode_uri_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_uri_component("100%"), "100%25");
        assert_eq!(encode_uri_component("%21"), "%2521");
        assert_eq!(encode_uri_component("Moyo € ü"), "Moyo%20%E2%82%AC%20%C3%BC");
    }

    #[test]
    fn link_targets_practice_number() {
        let url = whatsapp_link(&amani());
        assert!(url.starts_with("https://wa.me/255712345678?text=Habari%20Dr.%20Mugisha"));
        assert_eq!(url.matches('?').count(), 1);
    }

    #[test]
    fn update_field_only_touches_named_field() {
        let mut draft = amani();
        draft.set(InquiryField::Contact, "amani@example.com".to_string());
        assert_eq!(draft.name, "Amani");
        assert_eq!(draft.contact, "amani@example.com");
        assert_eq!(draft.message, "Need a checkup");
        assert_eq!(draft.get(InquiryField::Contact), "amani@example.com");
    }

    #[test]
    fn interleaved_updates_converge() {
        let name = [(InquiryField::Name, "A"), (InquiryField::Name, "Am")];
        let contact = [(InquiryField::Contact, "+2"), (InquiryField::Contact, "+255")];

        let mut a = InquiryDraft::default();
        for (f, v) in name.iter().chain(contact.iter()) {
            a.set(*f, v.to_string());
        }

        let mut b = InquiryDraft::default();
        for (f, v) in [contact[0], name[0], contact[1], name[1]] {
            b.set(f, v.to_string());
        }

        assert_eq!(a, b);
        assert_eq!(a.message, "");
    }

    #[test]
    fn submit_walks_idle_submitting_success() {
        let opener = RecordingOpener::default();
        let mut composer = Composer::new(LinkPolicy::Optimistic);
        filled(&mut composer);
        assert_eq!(composer.status(), SubmissionStatus::Idle);

        let round = composer.begin_submit().unwrap();
        assert_eq!(composer.status(), SubmissionStatus::Submitting);

        let url = composer.deliver(round, &opener).unwrap();
        assert_eq!(composer.status(), SubmissionStatus::Success);
        assert_eq!(composer.draft(), &InquiryDraft::default());
        assert_eq!(*opener.opened.borrow(), vec![url]);
    }

    #[test]
    fn incomplete_draft_is_refused() {
        let mut composer = Composer::default();
        composer.update_field(InquiryField::Name, "Amani".to_string());
        assert_eq!(composer.begin_submit(), Err(InquiryError::Incomplete));
        assert_eq!(composer.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn second_submit_while_preparing_is_refused() {
        let opener = RecordingOpener::default();
        let mut composer = Composer::default();
        filled(&mut composer);
        let round = composer.begin_submit().unwrap();
        assert_eq!(composer.begin_submit(), Err(InquiryError::NotIdle));

        composer.deliver(round, &opener).unwrap();
        assert_eq!(composer.deliver(round, &opener), Err(InquiryError::NotSubmitting));
        assert_eq!(opener.opened.borrow().len(), 1);
    }

    #[test]
    fn link_uses_draft_as_submitted() {
        let opener = RecordingOpener::default();
        let mut composer = Composer::default();
        filled(&mut composer);
        let round = composer.begin_submit().unwrap();
        composer.update_field(InquiryField::Name, "Someone else".to_string());

        let url = composer.deliver(round, &opener).unwrap();
        assert_eq!(url, whatsapp_link(&amani()));
        assert_eq!(composer.draft(), &InquiryDraft::default());
    }

    #[test]
    fn reset_is_ignored_outside_success() {
        let mut composer = Composer::default();
        assert!(!composer.reset_to_idle());

        filled(&mut composer);
        composer.begin_submit().unwrap();
        assert!(!composer.reset_to_idle());
        assert_eq!(composer.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn auto_revert_returns_to_idle() {
        let opener = RecordingOpener::default();
        let mut composer = Composer::default();
        filled(&mut composer);
        let round = composer.begin_submit().unwrap();
        composer.deliver(round, &opener).unwrap();

        assert!(composer.auto_revert(round));
        assert_eq!(composer.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn manual_reset_preempts_auto_revert() {
        let opener = RecordingOpener::default();
        let mut composer = Composer::default();
        filled(&mut composer);
        let first = composer.begin_submit().unwrap();
        composer.deliver(first, &opener).unwrap();

        assert!(composer.reset_to_idle());
        assert!(!composer.auto_revert(first));

        // A stale timer must not cut the next round's success panel short
        filled(&mut composer);
        let second = composer.begin_submit().unwrap();
        composer.deliver(second, &opener).unwrap();
        assert!(!composer.auto_revert(first));
        assert_eq!(composer.status(), SubmissionStatus::Success);
        assert!(composer.auto_revert(second));
    }

    #[test]
    fn blocked_link_is_optimistic_by_default() {
        let opener = RecordingOpener {
            fail_with: Some(LinkOpenError::Blocked),
            ..Default::default()
        };
        let mut composer = Composer::new(LinkPolicy::Optimistic);
        filled(&mut composer);
        let round = composer.begin_submit().unwrap();

        assert!(composer.deliver(round, &opener).is_ok());
        assert_eq!(composer.status(), SubmissionStatus::Success);
        assert_eq!(composer.error(), None);
    }

    #[test]
    fn strict_policy_keeps_draft_on_blocked_link() {
        let opener = RecordingOpener {
            fail_with: Some(LinkOpenError::Blocked),
            ..Default::default()
        };
        let mut composer = Composer::new(LinkPolicy::Strict);
        filled(&mut composer);
        let round = composer.begin_submit().unwrap();

        assert_eq!(
            composer.deliver(round, &opener),
            Err(InquiryError::Link(LinkOpenError::Blocked))
        );
        assert_eq!(composer.status(), SubmissionStatus::Idle);
        assert_eq!(composer.draft(), &amani());
        assert_eq!(composer.error(), Some("new tab was blocked by the browser"));

        // Retrying clears the error
        composer.begin_submit().unwrap();
        assert_eq!(composer.error(), None);
    }
}
