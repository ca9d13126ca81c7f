//! Quote request form panel.
//!
//! Renders a [`LeadFormView`]: current values, flagged fields and, once
//! submitted, the acknowledgment. The browser-side behavior lives in the wasm
//! companion crate (or the inline fallback in [`super::PageScripts`]); both
//! prevent the form from being posted anywhere.
//!
//! Validation messages and photo limits are written onto the inputs as
//! `data-*` attributes so the fallback script reads them from here instead of
//! keeping its own copies.

use leptos::prelude::*;

use super::{ICON_CHECK, ICON_WARNING_CIRCLE, Icon};
use crate::content::ServiceKind;
use crate::lead_form::{
    ALLOWED_PHOTO_TYPES, DEFAULT_ACK_MESSAGE, Field, FieldIssue, LeadFormView, MAX_PHOTO_BYTES, PhotoError,
    Problem,
};

/// HTML `pattern` mirroring the phone rule in [`crate::lead_form::validate_field`].
///
/// Punctuation is escaped so the class also compiles under the `v` flag
/// browsers use for `pattern`.
pub const PHONE_PATTERN: &str = r"[0-9\(\)\+\-\s]{7,}";

#[component]
pub fn LeadFormPanel(form: LeadFormView) -> impl IntoView {
    let submitted = form.ack.is_some();
    let ack_message = form
        .ack
        .as_ref()
        .map(|ack| ack.message.clone())
        .unwrap_or_else(|| DEFAULT_ACK_MESSAGE.to_string());
    let error_for = |field: Field| form.issue_for(field).map(|issue| issue.message()).unwrap_or("");
    let (name_error, phone_error, postal_error) =
        (error_for(Field::Name), error_for(Field::Phone), error_for(Field::PostalCode));
    let selected_service = form.service;
    let photo_hint = format!("JPEG, PNG, WebP or HEIC, up to {} MB", MAX_PHOTO_BYTES / (1024 * 1024));
    let state = if submitted { "submitted" } else { "open" };
    let photo_type_message = PhotoError::UnsupportedType(String::new()).message();
    let photo_empty_message = PhotoError::Empty(String::new()).message();
    let photo_size_message = PhotoError::TooLarge {
        size: MAX_PHOTO_BYTES + 1,
        max: MAX_PHOTO_BYTES,
    }
    .message();

    view! {
        <div id="lead" class="lead-panel">
            <div class="lead-panel-title">"Request a Free Quote"</div>
            <p class="muted">"Leave 3 fields. We respond within 15 minutes during business hours."</p>
            <form
                class="lead-form"
                aria-label="Quote request form"
                novalidate=true
                hidden=submitted
                data-state=state
            >
                <TextField
                    field=Field::Name
                    value=form.name
                    error=name_error
                    placeholder="Your name"
                    autocomplete="name"
                />
                <TextField
                    field=Field::Phone
                    value=form.phone
                    error=phone_error
                    placeholder="+1 (647) 000-0000"
                    input_type="tel"
                    pattern=PHONE_PATTERN
                    autocomplete="tel"
                    hint="Format: +1 (XXX) XXX-XXXX"
                />
                <TextField
                    field=Field::PostalCode
                    value=form.postal_code
                    error=postal_error
                    placeholder="M4B 1B3"
                    autocomplete="postal-code"
                    class="postal-input"
                />
                <div>
                    <label for="service">"Service " <span class="optional">"(optional)"</span></label>
                    <select id="service" name="service">
                        <option value="" selected=selected_service.is_none()>"Not sure yet"</option>
                        {ServiceKind::ALL.into_iter().map(|kind| view! {
                            <option value=kind.slug() selected=selected_service == Some(kind)>
                                {kind.label()}
                            </option>
                        }).collect::<Vec<_>>()}
                    </select>
                </div>
                <div>
                    <label for="photo">"Photo " <span class="optional">"(optional)"</span></label>
                    <input
                        id="photo"
                        name="photo"
                        type="file"
                        accept=ALLOWED_PHOTO_TYPES.join(",")
                        data-allowed-types=ALLOWED_PHOTO_TYPES.join(",")
                        data-max-bytes=MAX_PHOTO_BYTES.to_string()
                        data-msg-type=photo_type_message
                        data-msg-empty=photo_empty_message
                        data-msg-size=photo_size_message
                    />
                    <p class="field-hint">{photo_hint}</p>
                    <p class="field-error" data-error-for="photo" role="alert" hidden=true></p>
                </div>
                <button type="submit" class="cta-button">"Get My Quote"</button>
                <p class="muted">"By submitting, you agree to be contacted by phone/SMS/email. CASL-compliant, no spam."</p>
            </form>
            <div class="lead-ack" role="status" data-role="lead-ack" hidden=!submitted>
                <Icon path=ICON_CHECK class="icon-sm" />
                <span data-role="lead-ack-text">{ack_message}</span>
            </div>
        </div>
    }
}

/// Labelled required input with its error slot.
#[component]
fn TextField(
    field: Field,
    value: String,
    /// Message for a flagged field, empty when the field is fine
    error: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] pattern: &'static str,
    #[prop(default = "")] autocomplete: &'static str,
    #[prop(default = "")] hint: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let id = field.input_id();
    let error_id = format!("{}-error", id);
    let flagged = !error.is_empty();
    let missing_message = FieldIssue { field, problem: Problem::Missing }.message();
    let malformed_message = (!pattern.is_empty()).then(|| {
        FieldIssue {
            field,
            problem: Problem::Malformed,
        }
        .message()
    });

    view! {
        <div>
            <label for=id>{field.label()} " " <span class="optional">"(required)"</span></label>
            <input
                id=id
                name=id
                type=input_type
                class=class
                value=value
                placeholder=placeholder
                required=true
                pattern=(!pattern.is_empty()).then_some(pattern)
                autocomplete=(!autocomplete.is_empty()).then_some(autocomplete)
                aria-invalid=if flagged { "true" } else { "false" }
                aria-describedby=error_id.clone()
                data-msg-missing=missing_message
                data-msg-malformed=malformed_message
            />
            {(!hint.is_empty()).then(|| view! { <p class="field-hint">{hint}</p> })}
            <p id=error_id class="field-error" data-error-for=id role="alert" hidden=!flagged>
                <Icon path=ICON_WARNING_CIRCLE class="icon-sm" />
                <span data-role="error-text">{error}</span>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead_form::validate_field;
    use regex::Regex;

    #[test]
    fn html_pattern_agrees_with_field_rule() {
        // `pattern` is anchored to the whole value by the browser
        let anchored = Regex::new(&format!("^(?:{})$", PHONE_PATTERN)).unwrap();
        for value in ["+1 (647) 000-0000", "6475550199", "abc", "647-55", "(416)555 0123"] {
            assert_eq!(
                anchored.is_match(value),
                validate_field(Field::Phone, value).is_ok(),
                "{value}"
            );
        }
    }
}
