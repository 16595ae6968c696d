use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::{
  JsCast,
  JsValue,
};
use wasm_bindgen_futures::{
  JsFuture,
  spawn_local,
};
use web_sys::{
  Event,
  ServiceWorkerRegistration,
  Window,
};

use crate::config::PageConfig;

/// Deferred install-prompt handle. The browser hands the event over at most
/// once per page session; whichever component later offers a custom install
/// button takes it from here.
#[derive(Clone, Default)]
pub struct InstallPrompt {
  event: Rc<RefCell<Option<Event>>>,
}

impl InstallPrompt {
  fn capture(&self, event: Event) {
    self.event.borrow_mut().replace(event);
  }

  // TODO: hand this to the install button once the navbar grows one.
  #[allow(dead_code)]
  pub fn take(&self) -> Option<Event> {
    self.event.borrow_mut().take()
  }
}

/// Registers the service worker and starts capturing the install prompt.
pub fn setup(window: &Window, page: &PageConfig) -> Result<InstallPrompt, JsValue> {
  register_service_worker(window, &page.pwa.service_worker_path);

  let prompt = InstallPrompt::default();
  let captured = prompt.clone();
  EventListener::new(window, "beforeinstallprompt", move |event| {
    // Suppress the browser's mini-infobar; keep the handle instead.
    event.prevent_default();
    captured.capture(event.clone());
    tracing::debug!("install prompt captured");
  })
  .forget();

  Ok(prompt)
}

fn register_service_worker(window: &Window, script_path: &str) {
  let navigator = window.navigator();
  let supported =
    js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("serviceWorker")).unwrap_or(false);
  if !supported {
    tracing::debug!("service workers unsupported; skipping registration");
    return;
  }

  let registering = JsFuture::from(navigator.service_worker().register(script_path));
  let script_path = script_path.to_string();
  spawn_local(async move {
    match registering.await {
      Ok(value) => {
        let scope = value
          .dyn_into::<ServiceWorkerRegistration>()
          .map(|registration| registration.scope())
          .unwrap_or_default();
        tracing::info!(%scope, "service worker registered");
      }
      Err(error) => {
        tracing::error!(?error, script = %script_path, "service worker registration failed");
      }
    }
  });
}
