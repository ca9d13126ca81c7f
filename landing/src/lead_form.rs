//! Lead capture form: field validation, submission state machine, sink seam.
//!
//! The form moves through *empty* → *partially filled* → *valid* →
//! *submitted*. Submission is terminal for an instance: once a
//! [`LeadSubmissionSink`] accepts the lead the form drops its values, shows
//! the acknowledgment and refuses further edits. Start a new [`LeadForm`] for
//! another lead.
//!
//! Nothing here talks to the network. The sink is the only place a lead
//! leaves the form, and it is only reached when every required field passes.
//!
//! # Example
//!
//! ```rust
//! use caulking_landing::lead_form::{InMemorySink, LeadForm, LeadFormState};
//!
//! let mut form = LeadForm::new(InMemorySink::default());
//! form.set_name("Jane").unwrap();
//! form.set_phone("+16475551234").unwrap();
//! form.set_postal_code("m4b 1b3").unwrap();
//!
//! let ack = form.submit().unwrap();
//! assert_eq!(form.state(), LeadFormState::Submitted);
//! assert_eq!(form.sink().submissions()[0].postal_code, "M4B 1B3");
//! assert!(!ack.message.is_empty());
//! ```

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::content::ServiceKind;

/// Largest photo accepted with a lead.
pub const MAX_PHOTO_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted for the optional photo.
pub const ALLOWED_PHOTO_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/heic"];

/// Confirmation shown after a lead is accepted.
pub const DEFAULT_ACK_MESSAGE: &str = "Thanks! We’ll contact you shortly.";

/// Required form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Phone,
    PostalCode,
}

impl Field {
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Phone, Field::PostalCode];

    /// DOM id and form name of the input.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::PostalCode => "postal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone",
            Field::PostalCode => "Postal code",
        }
    }
}

/// What is wrong with a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    /// Empty after trimming
    Missing,
    /// Present but does not match the field's pattern
    Malformed,
}

/// A flagged field, shown next to the input for correction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: Field,
    pub problem: Problem,
}

impl FieldIssue {
    pub fn message(&self) -> &'static str {
        match (self.field, self.problem) {
            (Field::Name, _) => "Please enter your name.",
            (Field::Phone, Problem::Missing) => "Please enter a phone number.",
            (Field::Phone, Problem::Malformed) => {
                "Use digits, spaces, ( ) + or -, at least 7 characters."
            }
            (Field::PostalCode, _) => "Please enter your postal code.",
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message())
    }
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9()+\-\s]{7,}$").expect("phone pattern compiles"))
}

/// Validate one required field value.
///
/// All fields must be non-empty after trimming. The phone must also consist
/// of digits, spaces, parentheses, `+` and `-`, at least 7 characters long.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldIssue> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldIssue {
            field,
            problem: Problem::Missing,
        });
    }
    if field == Field::Phone && !phone_re().is_match(value) {
        return Err(FieldIssue {
            field,
            problem: Problem::Malformed,
        });
    }
    Ok(())
}

/// Photo rejected at attach time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error("photo {0:?} is empty")]
    Empty(String),
    #[error("photo is {size} bytes, the limit is {max} bytes")]
    TooLarge { size: u64, max: u64 },
    #[error("photo type {0:?} is not supported (use JPEG, PNG, WebP or HEIC)")]
    UnsupportedType(String),
}

impl PhotoError {
    /// Visitor-facing text shown next to the photo input.
    pub fn message(&self) -> &'static str {
        match self {
            PhotoError::Empty(_) => "That photo is empty. Please pick another one.",
            PhotoError::TooLarge { .. } => "Photos must be 10 MB or smaller.",
            PhotoError::UnsupportedType(_) => "Please use a JPEG, PNG, WebP or HEIC photo.",
        }
    }
}

/// Reference to a photo the visitor picked. The bytes stay in the browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl PhotoAttachment {
    pub fn validate(&self) -> Result<(), PhotoError> {
        let mime = self.mime_type.trim().to_ascii_lowercase();
        if !ALLOWED_PHOTO_TYPES.contains(&mime.as_str()) {
            return Err(PhotoError::UnsupportedType(self.mime_type.clone()));
        }
        if self.size_bytes == 0 {
            return Err(PhotoError::Empty(self.file_name.clone()));
        }
        if self.size_bytes > MAX_PHOTO_BYTES {
            return Err(PhotoError::TooLarge {
                size: self.size_bytes,
                max: MAX_PHOTO_BYTES,
            });
        }
        Ok(())
    }
}

/// A validated lead handed to the sink. Values are trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFormSubmission {
    pub name: String,
    pub phone: String,
    /// Uppercased, e.g. "M4B 1B3"
    pub postal_code: String,
    pub service: Option<ServiceKind>,
    pub photo: Option<PhotoAttachment>,
}

/// Acknowledgment returned by a sink and shown to the visitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

impl Default for Ack {
    fn default() -> Self {
        Self {
            message: DEFAULT_ACK_MESSAGE.into(),
        }
    }
}

/// Sink refused or failed to take a lead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("lead rejected: {0}")]
    Rejected(String),
    #[error("lead sink unavailable: {0}")]
    Unavailable(String),
}

/// Where validated leads go.
///
/// The form depends on this capability only. Swapping in a real transport
/// means writing another implementation; validation code does not change.
pub trait LeadSubmissionSink {
    fn accept(&mut self, submission: LeadFormSubmission) -> Result<Ack, SubmissionError>;
}

/// Drops every lead and acknowledges it.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardSink;

impl LeadSubmissionSink for DiscardSink {
    fn accept(&mut self, _submission: LeadFormSubmission) -> Result<Ack, SubmissionError> {
        Ok(Ack::default())
    }
}

/// Keeps accepted leads in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemorySink {
    submissions: Vec<LeadFormSubmission>,
}

impl InMemorySink {
    pub fn submissions(&self) -> &[LeadFormSubmission] {
        &self.submissions
    }
}

impl LeadSubmissionSink for InMemorySink {
    fn accept(&mut self, submission: LeadFormSubmission) -> Result<Ack, SubmissionError> {
        self.submissions.push(submission);
        Ok(Ack::default())
    }
}

impl<S: LeadSubmissionSink + ?Sized> LeadSubmissionSink for Box<S> {
    fn accept(&mut self, submission: LeadFormSubmission) -> Result<Ack, SubmissionError> {
        (**self).accept(submission)
    }
}

/// Lifecycle position of a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadFormState {
    Empty,
    PartiallyFilled,
    Valid,
    Submitted,
}

/// Why an operation on the form was refused.
#[derive(Debug, Error)]
pub enum LeadFormError {
    /// Required fields failed; every offending field is listed
    #[error("{} field(s) need attention: {}", .0.len(), join_issues(.0))]
    Invalid(Vec<FieldIssue>),
    #[error(transparent)]
    Photo(#[from] PhotoError),
    #[error("this form was already submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Sink(#[from] SubmissionError),
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// What the page composer needs to draw the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFormView {
    pub name: String,
    pub phone: String,
    pub postal_code: String,
    pub service: Option<ServiceKind>,
    /// Fields flagged by the last rejected submit
    pub issues: Vec<FieldIssue>,
    /// Present once submitted
    pub ack: Option<Ack>,
}

impl LeadFormView {
    pub fn issue_for(&self, field: Field) -> Option<&FieldIssue> {
        self.issues.iter().find(|issue| issue.field == field)
    }
}

/// One lead form instance, owning its sink.
#[derive(Debug)]
pub struct LeadForm<S> {
    sink: S,
    name: String,
    phone: String,
    postal_code: String,
    service: Option<ServiceKind>,
    photo: Option<PhotoAttachment>,
    issues: Vec<FieldIssue>,
    ack: Option<Ack>,
}

impl<S: LeadSubmissionSink> LeadForm<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            name: String::new(),
            phone: String::new(),
            postal_code: String::new(),
            service: None,
            photo: None,
            issues: Vec::new(),
            ack: None,
        }
    }

    pub fn set_name(&mut self, value: &str) -> Result<(), LeadFormError> {
        self.ensure_open()?;
        self.name = value.to_string();
        self.clear_issue(Field::Name);
        Ok(())
    }

    pub fn set_phone(&mut self, value: &str) -> Result<(), LeadFormError> {
        self.ensure_open()?;
        self.phone = value.to_string();
        self.clear_issue(Field::Phone);
        Ok(())
    }

    /// Stored uppercased.
    pub fn set_postal_code(&mut self, value: &str) -> Result<(), LeadFormError> {
        self.ensure_open()?;
        self.postal_code = value.to_uppercase();
        self.clear_issue(Field::PostalCode);
        Ok(())
    }

    /// Set one required field by name.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), LeadFormError> {
        match field {
            Field::Name => self.set_name(value),
            Field::Phone => self.set_phone(value),
            Field::PostalCode => self.set_postal_code(value),
        }
    }

    pub fn select_service(&mut self, service: Option<ServiceKind>) -> Result<(), LeadFormError> {
        self.ensure_open()?;
        self.service = service;
        Ok(())
    }

    /// Attach a photo. Rejected photos leave any previous attachment in place.
    pub fn attach_photo(&mut self, photo: PhotoAttachment) -> Result<(), LeadFormError> {
        self.ensure_open()?;
        photo.validate()?;
        self.photo = Some(photo);
        Ok(())
    }

    pub fn clear_photo(&mut self) -> Result<(), LeadFormError> {
        self.ensure_open()?;
        self.photo = None;
        Ok(())
    }

    pub fn state(&self) -> LeadFormState {
        if self.ack.is_some() {
            return LeadFormState::Submitted;
        }
        if self.check().is_empty() {
            return LeadFormState::Valid;
        }
        let untouched = [&self.name, &self.phone, &self.postal_code]
            .iter()
            .all(|value| value.trim().is_empty())
            && self.service.is_none()
            && self.photo.is_none();
        if untouched {
            LeadFormState::Empty
        } else {
            LeadFormState::PartiallyFilled
        }
    }

    /// Issues for every required field, without flagging them.
    pub fn check(&self) -> Vec<FieldIssue> {
        Field::REQUIRED
            .into_iter()
            .filter_map(|field| validate_field(field, self.value(field)).err())
            .collect()
    }

    /// Validate, hand the lead to the sink and enter the submitted state.
    ///
    /// On any failure the form keeps its values and stays open.
    pub fn submit(&mut self) -> Result<Ack, LeadFormError> {
        self.ensure_open()?;

        let issues = self.check();
        if !issues.is_empty() {
            debug!(count = issues.len(), "lead form rejected, flagging fields");
            self.issues = issues.clone();
            return Err(LeadFormError::Invalid(issues));
        }
        self.issues.clear();

        let submission = LeadFormSubmission {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            service: self.service,
            photo: self.photo.clone(),
        };

        match self.sink.accept(submission) {
            Ok(ack) => {
                info!(
                    service = self.service.map(ServiceKind::slug).unwrap_or("unspecified"),
                    has_photo = self.photo.is_some(),
                    "lead accepted"
                );
                self.name.clear();
                self.phone.clear();
                self.postal_code.clear();
                self.service = None;
                self.photo = None;
                self.ack = Some(ack.clone());
                Ok(ack)
            }
            Err(err) => {
                warn!(error = %err, "lead sink refused submission");
                Err(err.into())
            }
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::PostalCode => &self.postal_code,
        }
    }

    pub fn photo(&self) -> Option<&PhotoAttachment> {
        self.photo.as_ref()
    }

    /// Fields flagged by the last rejected submit.
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn ack(&self) -> Option<&Ack> {
        self.ack.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> LeadFormView {
        LeadFormView {
            name: self.name.clone(),
            phone: self.phone.clone(),
            postal_code: self.postal_code.clone(),
            service: self.service,
            issues: self.issues.clone(),
            ack: self.ack.clone(),
        }
    }

    fn ensure_open(&self) -> Result<(), LeadFormError> {
        if self.ack.is_some() {
            return Err(LeadFormError::AlreadySubmitted);
        }
        Ok(())
    }

    fn clear_issue(&mut self, field: Field) {
        self.issues.retain(|issue| issue.field != field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(name: &str, phone: &str, postal: &str) -> LeadForm<InMemorySink> {
        let mut form = LeadForm::new(InMemorySink::default());
        form.set_name(name).unwrap();
        form.set_phone(phone).unwrap();
        form.set_postal_code(postal).unwrap();
        form
    }

    struct FailingSink;

    impl LeadSubmissionSink for FailingSink {
        fn accept(&mut self, _submission: LeadFormSubmission) -> Result<Ack, SubmissionError> {
            Err(SubmissionError::Unavailable("offline".into()))
        }
    }

    /// Refuses leads outside the served area.
    struct OutOfAreaSink;

    impl LeadSubmissionSink for OutOfAreaSink {
        fn accept(&mut self, submission: LeadFormSubmission) -> Result<Ack, SubmissionError> {
            if submission.postal_code.starts_with('M') {
                Ok(Ack::default())
            } else {
                Err(SubmissionError::Rejected(format!(
                    "postal code {} is outside the service area",
                    submission.postal_code
                )))
            }
        }
    }

    fn jpeg(size_bytes: u64) -> PhotoAttachment {
        PhotoAttachment {
            file_name: "tub.jpg".into(),
            mime_type: "image/jpeg".into(),
            size_bytes,
        }
    }

    #[test]
    fn permissive_phone_formats_pass() {
        for phone in ["+1 (647) 000-0000", "6475550199", "+16475551234", "647 555 0199", "  (647)5550199  "] {
            assert_eq!(validate_field(Field::Phone, phone), Ok(()), "{phone}");
        }
    }

    #[test]
    fn short_or_foreign_phones_fail() {
        for phone in ["abc", "123456", "647-55", "647.555.0199", "+1 647 CALL NOW", "ext 12345678"] {
            assert_eq!(
                validate_field(Field::Phone, phone),
                Err(FieldIssue {
                    field: Field::Phone,
                    problem: Problem::Malformed
                }),
                "{phone}"
            );
        }
    }

    #[test]
    fn blank_is_missing_for_every_field() {
        for field in Field::REQUIRED {
            assert_eq!(
                validate_field(field, "   "),
                Err(FieldIssue {
                    field,
                    problem: Problem::Missing
                })
            );
        }
    }

    #[test]
    fn state_progression() {
        let mut form = LeadForm::new(DiscardSink);
        assert_eq!(form.state(), LeadFormState::Empty);

        form.set_name("Jane").unwrap();
        assert_eq!(form.state(), LeadFormState::PartiallyFilled);

        form.set_phone("+16475551234").unwrap();
        form.set_postal_code("M4B 1B3").unwrap();
        assert_eq!(form.state(), LeadFormState::Valid);

        form.submit().unwrap();
        assert_eq!(form.state(), LeadFormState::Submitted);
    }

    #[test]
    fn selecting_a_service_alone_is_partial() {
        let mut form = LeadForm::new(DiscardSink);
        form.select_service(Some(ServiceKind::MinorTileRepair)).unwrap();
        assert_eq!(form.state(), LeadFormState::PartiallyFilled);
    }

    #[test]
    fn jane_submits_and_sink_gets_trimmed_uppercase_lead() {
        let mut form = filled(" Jane ", "+16475551234", "m4b 1b3");
        form.select_service(Some(ServiceKind::KitchenSinkCaulking)).unwrap();

        let ack = form.submit().unwrap();

        assert_eq!(ack.message, DEFAULT_ACK_MESSAGE);
        assert_eq!(form.ack(), Some(&ack));
        assert_eq!(
            form.sink().submissions(),
            [LeadFormSubmission {
                name: "Jane".into(),
                phone: "+16475551234".into(),
                postal_code: "M4B 1B3".into(),
                service: Some(ServiceKind::KitchenSinkCaulking),
                photo: None,
            }]
        );
        // Values are dropped once handed off
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.view().ack, Some(ack));
    }

    #[test]
    fn empty_phone_keeps_form_open_and_flags_phone() {
        let mut form = filled("Jane", "", "M4B 1B3");

        let err = form.submit().unwrap_err();

        match err {
            LeadFormError::Invalid(issues) => assert_eq!(
                issues,
                vec![FieldIssue {
                    field: Field::Phone,
                    problem: Problem::Missing
                }]
            ),
            other => panic!("unexpected error: {other}"),
        }
        assert_ne!(form.state(), LeadFormState::Submitted);
        assert_eq!(form.view().issue_for(Field::Phone).map(|i| i.problem), Some(Problem::Missing));
        assert!(form.sink().submissions().is_empty());
        assert_eq!(form.value(Field::Name), "Jane");
    }

    #[test]
    fn missing_any_single_required_field_blocks_submit() {
        let complete = [("Jane", Field::Name), ("+16475551234", Field::Phone), ("M4B 1B3", Field::PostalCode)];
        for (skip, _) in complete.iter().enumerate() {
            let mut form = LeadForm::new(InMemorySink::default());
            for (i, (value, field)) in complete.iter().enumerate() {
                if i != skip {
                    form.set_field(*field, value).unwrap();
                }
            }

            assert!(matches!(form.submit(), Err(LeadFormError::Invalid(_))));
            assert_ne!(form.state(), LeadFormState::Submitted);
            assert_eq!(form.issues().len(), 1);
            assert_eq!(form.issues()[0].field, complete[skip].1);
            assert!(form.sink().submissions().is_empty());
        }
    }

    #[test]
    fn all_offending_fields_are_reported() {
        let mut form = filled("", "abc", "");
        let Err(LeadFormError::Invalid(issues)) = form.submit() else {
            panic!("expected validation failure");
        };
        let fields: Vec<_> = issues.iter().map(|i| (i.field, i.problem)).collect();
        assert_eq!(
            fields,
            vec![
                (Field::Name, Problem::Missing),
                (Field::Phone, Problem::Malformed),
                (Field::PostalCode, Problem::Missing),
            ]
        );
    }

    #[test]
    fn editing_a_flagged_field_clears_its_flag() {
        let mut form = filled("Jane", "", "");
        let _ = form.submit();
        assert_eq!(form.issues().len(), 2);

        form.set_phone("6475550199").unwrap();
        assert_eq!(form.issues().len(), 1);
        assert_eq!(form.issues()[0].field, Field::PostalCode);
    }

    #[test]
    fn submitted_is_terminal() {
        let mut form = filled("Jane", "+16475551234", "M4B 1B3");
        form.submit().unwrap();

        assert!(matches!(form.submit(), Err(LeadFormError::AlreadySubmitted)));
        assert!(matches!(form.set_name("John"), Err(LeadFormError::AlreadySubmitted)));
        assert_eq!(form.sink().submissions().len(), 1);
    }

    #[test]
    fn sink_failure_leaves_form_open() {
        let mut form = LeadForm::new(FailingSink);
        form.set_name("Jane").unwrap();
        form.set_phone("+16475551234").unwrap();
        form.set_postal_code("M4B 1B3").unwrap();

        assert!(matches!(form.submit(), Err(LeadFormError::Sink(SubmissionError::Unavailable(_)))));
        assert_eq!(form.state(), LeadFormState::Valid);
        assert_eq!(form.value(Field::Phone), "+16475551234");
    }

    #[test]
    fn rejected_lead_keeps_values_for_correction() {
        let mut form = LeadForm::new(OutOfAreaSink);
        form.set_name("Jane").unwrap();
        form.set_phone("+16475551234").unwrap();
        form.set_postal_code("k1a 0b1").unwrap();

        let err = form.submit().unwrap_err();
        assert!(matches!(&err, LeadFormError::Sink(SubmissionError::Rejected(_))));
        assert_eq!(
            err.to_string(),
            "lead rejected: postal code K1A 0B1 is outside the service area"
        );
        assert_eq!(form.state(), LeadFormState::Valid);
        assert_eq!(form.ack(), None);

        form.set_postal_code("M4B 1B3").unwrap();
        assert!(form.submit().is_ok());
        assert_eq!(form.state(), LeadFormState::Submitted);
    }

    #[test]
    fn photo_errors_have_visitor_messages() {
        assert_eq!(MAX_PHOTO_BYTES, 10 * 1024 * 1024);
        let too_large = jpeg(MAX_PHOTO_BYTES + 1).validate().unwrap_err();
        assert_eq!(too_large.message(), "Photos must be 10 MB or smaller.");

        let empty = jpeg(0).validate().unwrap_err();
        assert_eq!(empty, PhotoError::Empty("tub.jpg".into()));
        assert!(empty.message().contains("empty"));

        let gif = PhotoAttachment {
            mime_type: "image/gif".into(),
            ..jpeg(10)
        };
        assert!(gif.validate().unwrap_err().message().contains("JPEG, PNG, WebP or HEIC"));
    }

    #[test]
    fn boxed_sink_is_a_sink() {
        let sink: Box<dyn LeadSubmissionSink> = Box::new(DiscardSink);
        let mut form = LeadForm::new(sink);
        form.set_name("Jane").unwrap();
        form.set_phone("6475550199").unwrap();
        form.set_postal_code("M4B 1B3").unwrap();
        assert!(form.submit().is_ok());
    }

    #[test]
    fn photo_constraints() {
        assert_eq!(jpeg(2_000_000).validate(), Ok(()));
        assert_eq!(jpeg(MAX_PHOTO_BYTES).validate(), Ok(()));
        assert_eq!(
            jpeg(MAX_PHOTO_BYTES + 1).validate(),
            Err(PhotoError::TooLarge {
                size: MAX_PHOTO_BYTES + 1,
                max: MAX_PHOTO_BYTES
            })
        );
        assert!(matches!(jpeg(0).validate(), Err(PhotoError::Empty(_))));

        let gif = PhotoAttachment {
            mime_type: "image/gif".into(),
            ..jpeg(10)
        };
        assert!(matches!(gif.validate(), Err(PhotoError::UnsupportedType(_))));

        let upper = PhotoAttachment {
            mime_type: "IMAGE/PNG".into(),
            ..jpeg(10)
        };
        assert_eq!(upper.validate(), Ok(()));
    }

    #[test]
    fn rejected_photo_keeps_previous_attachment() {
        let mut form = LeadForm::new(DiscardSink);
        form.attach_photo(jpeg(100)).unwrap();
        let pdf = PhotoAttachment {
            file_name: "quote.pdf".into(),
            mime_type: "application/pdf".into(),
            size_bytes: 100,
        };

        assert!(matches!(form.attach_photo(pdf), Err(LeadFormError::Photo(_))));
        assert_eq!(form.photo(), Some(&jpeg(100)));
    }

    #[test]
    fn photo_travels_with_submission() {
        let mut form = filled("Jane", "+16475551234", "M4B 1B3");
        form.attach_photo(jpeg(4096)).unwrap();
        form.submit().unwrap();
        assert_eq!(form.into_sink().submissions()[0].photo, Some(jpeg(4096)));
    }
}
