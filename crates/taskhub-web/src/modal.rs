use std::cell::Cell;
use std::rc::Rc;

use gloo::dialogs::alert;
use gloo::events::EventListener;
use taskhub_web_shared::fields;
use wasm_bindgen::{
  JsCast,
  JsValue,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
  Document,
  Element,
  FormData,
  HtmlElement,
  HtmlFormElement,
};

use crate::api;
use crate::config::PageConfig;

const SUBMIT_FAILURE_ALERT: &str = "An unexpected error occurred. Please try again.";

/// Wires the add-task modal: open controls, the three close hit-targets, and
/// the background form submission. Pages that render neither the modal nor
/// the form (anonymous visitors) leave the controller inert.
pub fn setup(document: &Document, page: &PageConfig) -> Result<(), JsValue> {
  let Some(modal) = document
    .get_element_by_id(&page.selectors.modal_id)
    .and_then(|element| element.dyn_into::<HtmlElement>().ok())
  else {
    return Ok(());
  };
  let Some(form) = document
    .get_element_by_id(&page.selectors.form_id)
    .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
  else {
    return Ok(());
  };

  let openers = document.query_selector_all(&page.selectors.open_modal)?;
  for index in 0..openers.length() {
    let Some(opener) = openers.item(index) else {
      continue;
    };
    let modal = modal.clone();
    EventListener::new(&opener, "click", move |event| {
      event.prevent_default();
      open(&modal);
    })
    .forget();
  }

  {
    // One delegated listener on the modal root covers the close button, the
    // cancel button and the backdrop.
    let close_classes = page.selectors.close_classes.clone();
    let modal_target = modal.clone();
    let modal = modal.clone();
    EventListener::new(&modal_target, "click", move |event| {
      let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
      else {
        return;
      };
      if is_close_control(&target.class_name(), &close_classes) {
        close(&modal);
      }
    })
    .forget();
  }

  {
    let form_target = form.clone();
    let in_flight = Rc::new(Cell::new(false));
    EventListener::new(&form_target, "submit", move |event| {
      event.prevent_default();
      if in_flight.get() {
        tracing::debug!("task form submission already in flight");
        return;
      }
      let payload = match FormData::new_with_form(&form) {
        Ok(payload) => payload,
        Err(error) => {
          tracing::error!(?error, "failed reading task form fields");
          alert(SUBMIT_FAILURE_ALERT);
          return;
        }
      };
      in_flight.set(true);
      let url = form.action();
      let in_flight = Rc::clone(&in_flight);
      spawn_local(async move {
        match api::submit_task_form(&url, payload).await {
          Ok(outcome) if outcome.success => {
            // The server renders the new task; a reload picks it up.
            if let Some(window) = web_sys::window() {
              let _ = window.location().reload();
            }
          }
          Ok(outcome) => {
            alert(&outcome.alert_message());
            in_flight.set(false);
          }
          Err(error) => {
            tracing::error!(%error, "task form submission failed");
            alert(SUBMIT_FAILURE_ALERT);
            in_flight.set(false);
          }
        }
      });
    })
    .forget();
  }

  Ok(())
}

fn open(modal: &HtmlElement) {
  let _ = modal.style().set_property("display", "flex");
  let title_selector = format!("input[name=\"{}\"]", fields::TITLE);
  if let Some(input) = modal
    .query_selector(&title_selector)
    .ok()
    .flatten()
    .and_then(|element| element.dyn_into::<HtmlElement>().ok())
  {
    let _ = input.focus();
  }
}

fn close(modal: &HtmlElement) {
  let _ = modal.style().set_property("display", "none");
}

/// Whether a clicked element carries one of the close-control classes.
/// Matches whole class tokens, not substrings.
fn is_close_control(class_attr: &str, close_classes: &[String]) -> bool {
  class_attr
    .split_whitespace()
    .any(|class| close_classes.iter().any(|close| close == class))
}

#[cfg(test)]
mod tests {
  use super::is_close_control;

  fn close_classes() -> Vec<String> {
    vec![
      "close-modal".to_string(),
      "btn-cancel".to_string(),
      "modal-backdrop".to_string(),
    ]
  }

  #[test]
  fn matches_any_close_class_token() {
    assert!(is_close_control("close-modal", &close_classes()));
    assert!(is_close_control("btn btn-cancel", &close_classes()));
    assert!(is_close_control("modal-backdrop dimmed", &close_classes()));
  }

  #[test]
  fn ignores_other_elements() {
    assert!(!is_close_control("modal-content", &close_classes()));
    assert!(!is_close_control("", &close_classes()));
  }

  #[test]
  fn does_not_match_substrings() {
    assert!(!is_close_control("close-modal-icon", &close_classes()));
    assert!(!is_close_control("not-a-modal-backdrop", &close_classes()));
  }
}
