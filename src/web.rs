//! Browser binding: wires a page's clip form to a [`SubmissionHandler`].
//!
//! Expects a `<form id="clip-form">` with the fields listed in
//! [`FIELDS`](crate::form::FIELDS) and an output element `#response`.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, HtmlFormElement};

use crate::client::HttpClipApi;
use crate::config::ClientConfig;
use crate::error::ClipError;
use crate::form::{FormData, SubmitEvent, FIELDS};
use crate::handler::SubmissionHandler;
use crate::sink::OutputSink;

pub const FORM_ID: &str = "clip-form";
pub const OUTPUT_ID: &str = "response";

/// Renders into a DOM element's `innerHTML`.
#[derive(Debug, Clone)]
pub struct ElementSink {
    element: Element,
}

impl ElementSink {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl OutputSink for ElementSink {
    fn replace(&self, html: &str) {
        self.element.set_inner_html(html);
    }
}

/// Snapshot the fields the handler reads from a live form.
pub fn form_snapshot(form: &HtmlFormElement) -> Result<FormData, JsValue> {
    let data = web_sys::FormData::new_with_form(form)?;
    let mut snapshot = FormData::new();
    for name in FIELDS {
        if let Some(value) = data.get(name).as_string() {
            snapshot.append(name, value);
        }
    }
    Ok(snapshot)
}

/// Message text of a thrown JS value (`Error.message` when it is an `Error`).
fn js_error_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

/// Attach the handler to `#clip-form`, rendering into `#response`.
#[wasm_bindgen(js_name = attachClipForm)]
pub fn attach_clip_form() -> Result<(), JsValue> {
    attach(FORM_ID, OUTPUT_ID)
}

/// Attach the handler to the form `form_id`, rendering into `output_id`.
///
/// Requests go to the page's own origin.
pub fn attach(form_id: &str, output_id: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let form: HtmlFormElement = document
        .get_element_by_id(form_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{form_id}")))?
        .dyn_into()?;
    let output = document
        .get_element_by_id(output_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{output_id}")))?;

    let origin = window.location().origin()?;
    let api = HttpClipApi::new(ClientConfig::new().with_base_url(origin));
    let handler = Rc::new(SubmissionHandler::new(api, ElementSink::new(output)));

    let submit_form = form.clone();
    let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let snapshot = match form_snapshot(&submit_form) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                event.prevent_default();
                handler.reject(ClipError::validation(format!(
                    "Could not read form: {}",
                    js_error_message(&err)
                )));
                return;
            }
        };
        let mut submit = SubmitEvent::new(snapshot);

        let pending = handler.begin(&mut submit);
        if submit.default_prevented() {
            event.prevent_default();
        }

        let handler = Rc::clone(&handler);
        wasm_bindgen_futures::spawn_local(async move {
            handler.complete(pending).await;
        });
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}
