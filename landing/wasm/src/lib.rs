//! WASM module for the landing page lead form.
//!
//! Binds to the server-rendered `#lead` panel and runs every submit through
//! the same [`LeadForm`] state machine the renderer uses, so browser and
//! server agree on what a valid lead is. Accepted leads go to a
//! [`DiscardSink`]: the page only acknowledges them.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use caulking_landing::content::ServiceKind;
use caulking_landing::lead_form::{
    DiscardSink, Field, FieldIssue, LeadForm, LeadFormError, PhotoAttachment, validate_field,
};

/// Raw values read from the form controls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormValues {
    pub name: String,
    pub phone: String,
    pub postal_code: String,
    /// `<option value>` of the service select; empty for "not sure yet"
    pub service: String,
    pub photo: Option<PhotoAttachment>,
}

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Accepted { message: String },
    Flagged { issues: Vec<FlaggedField> },
    PhotoRejected { message: String },
    Failed { message: String },
}

/// A flagged field as the page shows it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlaggedField {
    /// DOM id of the input
    pub input_id: &'static str,
    pub message: &'static str,
}

impl From<&FieldIssue> for FlaggedField {
    fn from(issue: &FieldIssue) -> Self {
        Self {
            input_id: issue.field.input_id(),
            message: issue.message(),
        }
    }
}

/// Run the values through a fresh [`LeadForm`].
pub fn evaluate(values: FormValues) -> Outcome {
    let mut form = match filled_form(&values) {
        Ok(form) => form,
        Err(err) => {
            return Outcome::Failed {
                message: err.to_string(),
            };
        }
    };

    if let Some(photo) = values.photo {
        match form.attach_photo(photo) {
            Ok(()) => {}
            Err(LeadFormError::Photo(err)) => {
                return Outcome::PhotoRejected {
                    message: err.message().to_string(),
                };
            }
            Err(err) => {
                return Outcome::Failed {
                    message: err.to_string(),
                };
            }
        }
    }

    match form.submit() {
        Ok(ack) => Outcome::Accepted { message: ack.message },
        Err(LeadFormError::Invalid(issues)) => Outcome::Flagged {
            issues: issues.iter().map(FlaggedField::from).collect(),
        },
        Err(err) => Outcome::Failed {
            message: err.to_string(),
        },
    }
}

fn filled_form(values: &FormValues) -> Result<LeadForm<DiscardSink>, LeadFormError> {
    let mut form = LeadForm::new(DiscardSink);
    form.set_name(&values.name)?;
    form.set_phone(&values.phone)?;
    form.set_postal_code(&values.postal_code)?;
    form.select_service(ServiceKind::from_slug(&values.service))?;
    Ok(form)
}

// ============================================================================
// WASM Exports
// ============================================================================

/// Whether `value` is an acceptable phone number for the quote form.
#[wasm_bindgen]
pub fn validate_phone(value: &str) -> bool {
    validate_field(Field::Phone, value).is_ok()
}

/// Evaluate form values given as JSON and return the outcome as JSON.
///
/// # Arguments
/// * `values_json` - `{"name", "phone", "postal_code", "service", "photo"}`
#[wasm_bindgen]
pub fn check_lead(values_json: &str) -> Result<String, JsValue> {
    let values: FormValues = serde_json::from_str(values_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))?;
    serde_json::to_string(&evaluate(values))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize outcome: {}", e)))
}

/// Bind the submit handler of the server-rendered lead form.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Ok(());
    };
    let Some(panel) = document.get_element_by_id("lead") else {
        return Ok(());
    };
    let Some(form) = panel.query_selector("form")? else {
        return Ok(());
    };
    let form: HtmlFormElement = form.dyn_into()?;

    let handler_form = form.clone();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        if let Err(err) = handle_submit(&document, &panel, &handler_form) {
            web_sys::console::error_1(&err);
        }
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // The handler lives as long as the page
    on_submit.forget();
    // Tells the inline fallback script to stand down
    form.set_attribute("data-handler", "wasm")?;
    Ok(())
}

fn handle_submit(document: &Document, panel: &Element, form: &HtmlFormElement) -> Result<(), JsValue> {
    let values = FormValues {
        name: input_value(document, Field::Name.input_id())?,
        phone: input_value(document, Field::Phone.input_id())?,
        postal_code: input_value(document, Field::PostalCode.input_id())?,
        service: match document.get_element_by_id("service") {
            Some(select) => select.dyn_into::<HtmlSelectElement>()?.value(),
            None => String::new(),
        },
        photo: selected_photo(document)?,
    };

    let outcome = evaluate(values);
    show_photo_error(panel, None)?;
    match outcome {
        Outcome::Accepted { message } => {
            for field in Field::REQUIRED {
                show_field_error(document, panel, field.input_id(), None)?;
            }
            form.reset();
            form.set_hidden(true);
            form.set_attribute("data-state", "submitted")?;
            if let Some(ack) = panel.query_selector("[data-role=\"lead-ack\"]")? {
                if let Some(text) = ack.query_selector("[data-role=\"lead-ack-text\"]")? {
                    text.set_text_content(Some(&message));
                }
                ack.dyn_into::<HtmlElement>()?.set_hidden(false);
            }
        }
        Outcome::Flagged { issues } => {
            for field in Field::REQUIRED {
                let message = issues
                    .iter()
                    .find(|flagged| flagged.input_id == field.input_id())
                    .map(|flagged| flagged.message);
                show_field_error(document, panel, field.input_id(), message)?;
            }
        }
        Outcome::PhotoRejected { message } => show_photo_error(panel, Some(&message))?,
        Outcome::Failed { message } => web_sys::console::warn_1(&JsValue::from_str(&message)),
    }
    Ok(())
}

fn input_value(document: &Document, id: &str) -> Result<String, JsValue> {
    match document.get_element_by_id(id) {
        Some(input) => Ok(input.dyn_into::<HtmlInputElement>()?.value()),
        None => Ok(String::new()),
    }
}

fn selected_photo(document: &Document) -> Result<Option<PhotoAttachment>, JsValue> {
    let Some(input) = document.get_element_by_id("photo") else {
        return Ok(None);
    };
    let input: HtmlInputElement = input.dyn_into()?;
    Ok(input.files().and_then(|files| files.get(0)).map(|file| PhotoAttachment {
        file_name: file.name(),
        mime_type: file.type_(),
        size_bytes: file.size() as u64,
    }))
}

fn show_field_error(document: &Document, panel: &Element, id: &str, message: Option<&str>) -> Result<(), JsValue> {
    if let Some(input) = document.get_element_by_id(id) {
        input.set_attribute("aria-invalid", if message.is_some() { "true" } else { "false" })?;
    }
    let Some(slot) = panel.query_selector(&format!("[data-error-for=\"{}\"]", id))? else {
        return Ok(());
    };
    if let Some(text) = slot.query_selector("[data-role=\"error-text\"]")? {
        text.set_text_content(Some(message.unwrap_or("")));
    }
    slot.dyn_into::<HtmlElement>()?.set_hidden(message.is_none());
    Ok(())
}

fn show_photo_error(panel: &Element, message: Option<&str>) -> Result<(), JsValue> {
    let Some(slot) = panel.query_selector("[data-error-for=\"photo\"]")? else {
        return Ok(());
    };
    slot.set_text_content(Some(message.unwrap_or("")));
    slot.dyn_into::<HtmlElement>()?.set_hidden(message.is_none());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(name: &str, phone: &str, postal: &str) -> FormValues {
        FormValues {
            name: name.into(),
            phone: phone.into(),
            postal_code: postal.into(),
            ..Default::default()
        }
    }

    #[test]
    fn phone_rule_matches_the_server() {
        assert!(validate_phone("+1 (647) 555-0199"));
        assert!(validate_phone("  6475550199 "));
        assert!(!validate_phone("555-12"));
        assert!(!validate_phone("call me"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn complete_lead_is_acknowledged() {
        let mut lead = values("Jane", "+1 647 555 1234", "m4b 1b3");
        lead.service = "grout_cleaning_sealing".into();

        assert_eq!(
            evaluate(lead),
            Outcome::Accepted {
                message: "Thanks! We’ll contact you shortly.".into()
            }
        );
    }

    #[test]
    fn every_bad_field_is_flagged() {
        let outcome = evaluate(values("", "abc", " "));

        assert_eq!(
            outcome,
            Outcome::Flagged {
                issues: vec![
                    FlaggedField {
                        input_id: "name",
                        message: "Please enter your name."
                    },
                    FlaggedField {
                        input_id: "phone",
                        message: "Use digits, spaces, ( ) + or -, at least 7 characters."
                    },
                    FlaggedField {
                        input_id: "postal",
                        message: "Please enter your postal code."
                    },
                ]
            }
        );
    }

    #[test]
    fn oversized_photo_is_rejected_before_submit() {
        let mut lead = values("Jane", "6475551234", "M4B 1B3");
        lead.photo = Some(PhotoAttachment {
            file_name: "tub.jpg".into(),
            mime_type: "image/jpeg".into(),
            size_bytes: 11 * 1024 * 1024,
        });

        assert_eq!(
            evaluate(lead),
            Outcome::PhotoRejected {
                message: "Photos must be 10 MB or smaller.".into()
            }
        );
    }

    #[test]
    fn unknown_service_counts_as_not_sure() {
        let mut lead = values("Jane", "6475551234", "M4B 1B3");
        lead.service = "roofing".into();

        assert!(matches!(evaluate(lead), Outcome::Accepted { .. }));
    }

    #[test]
    fn check_lead_speaks_json() {
        let json = check_lead(r#"{"name":"Jane","phone":"12","postal_code":"M4B"}"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["outcome"], "flagged");
        assert_eq!(value["issues"][0]["input_id"], "phone");
    }
}
