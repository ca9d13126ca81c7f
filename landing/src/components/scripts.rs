//! Browser behavior for the static page.
//!
//! The FAQ sync script always runs. Lead form submits are handled by the wasm
//! module when one is configured and loads. The inline fallback is always
//! present and steps aside once the module marks the form with
//! `data-handler="wasm"`, so a module that fails to load still leaves a
//! working form. Neither ever submits the form anywhere.

use leptos::prelude::*;

/// Loads the wasm lead-form module when `lead_form_module` is set, plus the inline fallback.
#[component]
pub fn PageScripts(#[prop(default = String::new())] lead_form_module: String) -> impl IntoView {
    let loader = (!lead_form_module.is_empty()).then(|| module_loader(&lead_form_module));

    view! {
        <script>{FAQ_SCRIPT}</script>
        <script>{LEAD_FORM_FALLBACK}</script>
        {loader.map(|source| view! { <script type="module">{source}</script> })}
    }
}

/// `import init from "<url>"; init();` with the URL JSON-quoted.
fn module_loader(url: &str) -> String {
    let quoted = serde_json::Value::String(url.to_string()).to_string();
    format!("import init from {}; init();", quoted.replace("</", "<\\/"))
}

/// Mirrors `<details>` toggles into `data-state`.
const FAQ_SCRIPT: &str = r#"
(() => {
  document.querySelectorAll('details.faq-item').forEach(item => {
    item.addEventListener('toggle', () => {
      item.dataset.state = item.open ? 'expanded' : 'collapsed';
    });
  });
})();
"#;

/// Client-side checks driven by the rendered form: required inputs, their
/// `pattern`, the `data-msg-*` messages and the photo's `data-*` limits.
const LEAD_FORM_FALLBACK: &str = r#"
(() => {
  const panel = document.getElementById('lead');
  if (!panel) return;
  const form = panel.querySelector('form');
  const ack = panel.querySelector('[data-role="lead-ack"]');
  if (!form || !ack) return;

  const showError = (key, input, message) => {
    if (input) input.setAttribute('aria-invalid', message ? 'true' : 'false');
    const slot = panel.querySelector('[data-error-for="' + key + '"]');
    if (!slot) return;
    const text = slot.querySelector('[data-role="error-text"]') || slot;
    text.textContent = message || '';
    slot.hidden = !message;
  };

  const fieldMessage = input => {
    const value = input.value.trim();
    if (!value) return input.dataset.msgMissing || '';
    if (input.pattern && !new RegExp('^(?:' + input.pattern + ')$').test(value)) {
      return input.dataset.msgMalformed || '';
    }
    return '';
  };

  const photoMessage = input => {
    const file = input && input.files ? input.files[0] : null;
    if (!file) return '';
    const allowed = (input.dataset.allowedTypes || '').split(',');
    if (allowed.indexOf((file.type || '').trim().toLowerCase()) === -1) return input.dataset.msgType || '';
    if (file.size === 0) return input.dataset.msgEmpty || '';
    if (file.size > Number(input.dataset.maxBytes)) return input.dataset.msgSize || '';
    return '';
  };

  form.addEventListener('submit', event => {
    event.preventDefault();
    if (form.dataset.handler === 'wasm') return;
    let ok = true;
    form.querySelectorAll('input[required]').forEach(input => {
      const message = fieldMessage(input);
      showError(input.id, input, message);
      if (message) ok = false;
    });
    const photoError = photoMessage(form.querySelector('#photo'));
    showError('photo', null, photoError);
    if (photoError) ok = false;
    if (!ok) return;
    form.reset();
    form.hidden = true;
    form.dataset.state = 'submitted';
    ack.hidden = false;
  });
})();
"#;
