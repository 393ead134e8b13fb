//! Contact form: validation, the `mailto:` delegate, the optimistic submit flow
//! and the "copied" feedback for the copy-email button.

use std::future::Future;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::content::profile;

/// How long the form stays in [`FormPhase::Submitting`] before showing success.
pub const SUBMIT_DELAY_MS: u64 = 1000;
/// How long the copy-email confirmation stays visible.
pub const COPY_RESET_MS: u64 = 2000;
/// Mail clients start dropping data past roughly this many bytes of URI.
pub const MAILTO_URI_LIMIT: usize = 2000;

/// Characters `encodeURIComponent` leaves alone, removed from the escape set.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("cannot {action} while {phase:?}")]
    InvalidTransition {
        action: &'static str,
        phase: FormPhase,
    },
    #[error("clipboard write rejected: {0}")]
    Clipboard(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Portfolio Contact: {}", self.name)
    }

    fn body(&self, message: &str) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, message
        )
    }

    /// Builds the `mailto:` URI. Only the message is trimmed to keep the URI
    /// within [`MAILTO_URI_LIMIT`] bytes; an oversized name or email is passed
    /// through whole.
    pub fn mailto_uri(&self, recipient: &str) -> String {
        let uri = self.uri_with(recipient, &self.message);
        if uri.len() <= MAILTO_URI_LIMIT {
            return uri;
        }

        let base = self.uri_with(recipient, "").len();
        let mut budget = MAILTO_URI_LIMIT.saturating_sub(base);
        let mut end = 0;
        let mut buf = [0u8; 4];
        for (i, c) in self.message.char_indices() {
            let cost = encode_component(c.encode_utf8(&mut buf)).len();
            if cost > budget {
                break;
            }
            budget -= cost;
            end = i + c.len_utf8();
        }
        log::debug!(
            "mailto message truncated from {} to {} bytes",
            self.message.len(),
            end
        );
        self.uri_with(recipient, &self.message[..end])
    }

    fn uri_with(&self, recipient: &str, message: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_component(&self.subject()),
            encode_component(&self.body(message))
        )
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl FormPhase {
    pub fn submit(self) -> Result<Self, ContactError> {
        match self {
            Self::Idle => Ok(Self::Submitting),
            phase => Err(ContactError::InvalidTransition {
                action: "submit",
                phase,
            }),
        }
    }

    /// The fixed delay elapsed. Success does not depend on the mail client opening.
    pub fn settle(self) -> Result<Self, ContactError> {
        match self {
            Self::Submitting => Ok(Self::Success),
            phase => Err(ContactError::InvalidTransition {
                action: "settle",
                phase,
            }),
        }
    }

    /// "Show form again"
    pub fn reset(self) -> Result<Self, ContactError> {
        match self {
            Self::Success => Ok(Self::Idle),
            phase => Err(ContactError::InvalidTransition {
                action: "reset",
                phase,
            }),
        }
    }

    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// "Copied" confirmation for the copy-email button.
///
/// Every successful copy schedules its own reset [`COPY_RESET_MS`] later, and
/// whichever reset comes due first clears the flag. A second copy inside the
/// window therefore does not extend it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyFeedback {
    copied: bool,
    resets_due: Vec<f64>,
}

impl CopyFeedback {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Apply the outcome of a clipboard write made at `now_ms`.
    pub fn record(&mut self, result: Result<(), ContactError>, now_ms: f64) {
        match result {
            Ok(()) => {
                self.copied = true;
                self.resets_due.push(now_ms + COPY_RESET_MS as f64);
            }
            Err(e) => log::warn!("{e}"),
        }
    }

    /// Called when a scheduled reset fires.
    pub fn expire(&mut self, now_ms: f64) {
        let before = self.resets_due.len();
        self.resets_due.retain(|due| *due > now_ms);
        if self.resets_due.len() < before {
            self.copied = false;
        }
    }
}

/// What the copy-email button needs from its surroundings: a clipboard, a
/// clock, a timer and the place its [`CopyFeedback`] lives.
pub trait CopyHost {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ContactError>>;
    fn now_ms(&self) -> f64;
    /// Run `f` once `delay_ms` has elapsed.
    fn after(&self, delay_ms: u64, f: impl FnOnce() + 'static);
    fn feedback(&self, f: impl FnOnce(&mut CopyFeedback));
}

/// Copies the contact address, records the outcome and schedules the
/// confirmation reset for a successful write.
pub async fn copy_email<H: CopyHost + Clone + 'static>(host: &H) {
    let started = host.now_ms();
    let result = host.write_text(profile::EMAIL).await;
    let copied = result.is_ok();
    host.feedback(|f| f.record(result, started));

    if copied {
        let timer_host = host.clone();
        host.after(COPY_RESET_MS, move || {
            let now = timer_host.now_ms();
            timer_host.feedback(|f| f.expire(now));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn jane() -> ContactForm {
        ContactForm::new("Jane", "jane@x.com", "Hi")
    }

    #[test]
    fn test_mailto_scenario() {
        let uri = jane().mailto_uri(profile::EMAIL);
        assert!(uri.starts_with(&format!("mailto:{}?", profile::EMAIL)));
        assert!(uri.contains("subject=Portfolio%20Contact%3A%20Jane"));
        assert!(uri.contains("body=Name%3A%20Jane%0AEmail%3A%20jane%40x.com%0A%0AMessage%3A%0AHi"));
    }

    #[test]
    fn test_encode_component_matches_uri_component_set() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_component("a b&c=d?e#f"), "a%20b%26c%3Dd%3Fe%23f");
        assert_eq!(encode_component("100% + /"), "100%25%20%2B%20%2F");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_mailto_truncates_long_message() {
        let form = ContactForm::new("Jane", "jane@x.com", "ü".repeat(2000));
        let uri = form.mailto_uri(profile::EMAIL);
        assert!(uri.len() <= MAILTO_URI_LIMIT);
        // no split escape sequence at the end
        assert!(uri.ends_with("%C3%BC"));

        let short = jane().mailto_uri(profile::EMAIL);
        assert!(short.ends_with("Hi"));
    }

    #[test]
    fn test_mailto_keeps_oversized_name_whole() {
        let name = "n".repeat(3000);
        let form = ContactForm::new(name.as_str(), "jane@x.com", "Hi");
        let uri = form.mailto_uri(profile::EMAIL);
        assert!(uri.len() > MAILTO_URI_LIMIT);
        assert!(uri.contains(&format!("subject=Portfolio%20Contact%3A%20{name}")));
        // message budget is exhausted
        assert!(uri.ends_with("Message%3A%0A"));
    }

    #[test]
    fn test_validate() {
        assert_eq!(jane().validate(), Ok(()));
        assert_eq!(
            ContactForm::new("  ", "jane@x.com", "Hi").validate(),
            Err(ContactError::MissingField("name"))
        );
        assert_eq!(
            ContactForm::new("Jane", "", "Hi").validate(),
            Err(ContactError::MissingField("email"))
        );
        assert_eq!(
            ContactForm::new("Jane", "jane.x.com", "Hi").validate(),
            Err(ContactError::InvalidEmail("jane.x.com".to_string()))
        );
        assert_eq!(
            ContactForm::new("Jane", "ja ne@x.com", "Hi").validate(),
            Err(ContactError::InvalidEmail("ja ne@x.com".to_string()))
        );
        assert_eq!(
            ContactForm::new("Jane", "jane@x.com", "\n").validate(),
            Err(ContactError::MissingField("message"))
        );
    }

    #[test]
    fn test_phase_flow() {
        let phase = FormPhase::default();
        assert_eq!(phase, FormPhase::Idle);
        let phase = phase.submit().unwrap();
        assert!(phase.is_submitting());
        let phase = phase.settle().unwrap();
        assert_eq!(phase, FormPhase::Success);
        assert_eq!(phase.reset(), Ok(FormPhase::Idle));
    }

    #[test]
    fn test_phase_rejects_out_of_order() {
        assert!(matches!(
            FormPhase::Submitting.submit(),
            Err(ContactError::InvalidTransition { action: "submit", .. })
        ));
        assert!(FormPhase::Success.submit().is_err());
        assert!(FormPhase::Idle.settle().is_err());
        assert!(FormPhase::Idle.reset().is_err());
        assert!(FormPhase::Submitting.reset().is_err());
    }

    type Timer = (f64, Box<dyn FnOnce()>);

    #[derive(Default)]
    struct FakeCopyState {
        clock: Cell<f64>,
        reject: bool,
        writes: RefCell<Vec<String>>,
        timers: RefCell<Vec<Timer>>,
        feedback: RefCell<CopyFeedback>,
    }

    #[derive(Clone, Default)]
    struct FakeCopyHost(Rc<FakeCopyState>);

    impl FakeCopyHost {
        fn rejecting() -> Self {
            Self(Rc::new(FakeCopyState {
                reject: true,
                ..Default::default()
            }))
        }

        fn is_copied(&self) -> bool {
            self.0.feedback.borrow().is_copied()
        }

        /// Moves the clock to `now_ms`, firing due timers in order.
        fn advance_to(&self, now_ms: f64) {
            loop {
                let next = {
                    let mut timers = self.0.timers.borrow_mut();
                    timers.sort_by(|a, b| a.0.total_cmp(&b.0));
                    match timers.first() {
                        Some((due, _)) if *due <= now_ms => Some(timers.remove(0)),
                        _ => None,
                    }
                };
                let Some((due, run)) = next else { break };
                self.0.clock.set(due);
                run();
            }
            self.0.clock.set(now_ms);
        }
    }

    impl CopyHost for FakeCopyHost {
        async fn write_text(&self, text: &str) -> Result<(), ContactError> {
            if self.0.reject {
                return Err(ContactError::Clipboard("NotAllowedError".to_string()));
            }
            self.0.writes.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn now_ms(&self) -> f64 {
            self.0.clock.get()
        }

        fn after(&self, delay_ms: u64, f: impl FnOnce() + 'static) {
            let due = self.now_ms() + delay_ms as f64;
            self.0.timers.borrow_mut().push((due, Box::new(f)));
        }

        fn feedback(&self, f: impl FnOnce(&mut CopyFeedback)) {
            f(&mut self.0.feedback.borrow_mut());
        }
    }

    #[tokio::test]
    async fn test_copy_email_twice_resets_after_first() {
        let host = FakeCopyHost::default();

        copy_email(&host).await;
        host.advance_to(1200.0);
        copy_email(&host).await;

        assert_eq!(
            *host.0.writes.borrow(),
            vec![profile::EMAIL.to_string(), profile::EMAIL.to_string()]
        );
        assert!(host.is_copied());

        host.advance_to(1999.0);
        assert!(host.is_copied());

        // first reset clears it even though the second copy is newer
        host.advance_to(2000.0);
        assert!(!host.is_copied());

        host.advance_to(3200.0);
        assert!(!host.is_copied());
        assert!(host.0.timers.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_copy_email_rejected_schedules_nothing() {
        let host = FakeCopyHost::rejecting();

        copy_email(&host).await;

        assert!(host.0.writes.borrow().is_empty());
        assert!(!host.is_copied());
        assert!(host.0.timers.borrow().is_empty());
    }

    #[test]
    fn test_copy_rejected_never_confirms() {
        let mut feedback = CopyFeedback::default();
        feedback.record(
            Err(ContactError::Clipboard("NotAllowedError".to_string())),
            0.0,
        );
        assert!(!feedback.is_copied());
        feedback.expire(2000.0);
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_copy_early_expire_keeps_flag() {
        let mut feedback = CopyFeedback::default();
        feedback.record(Ok(()), 0.0);
        feedback.expire(1999.0);
        assert!(feedback.is_copied());
    }
}
