use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{
  Document,
  Element,
};

use crate::config::PageConfig;

const TOGGLE_CLASS: &str = "mobile-menu-toggle";
const TOGGLE_ICON_HTML: &str = "<i class=\"fas fa-bars\"></i>";
const OVERLAY_CLASS: &str = "mobile-overlay";
const SIDEBAR_OPEN_CLASS: &str = "mobile-open";
const OVERLAY_ACTIVE_CLASS: &str = "active";

/// Creates the hamburger toggle and the click-away overlay, and wires the
/// open/close behavior. Pages without a navbar or sidebar get no menu.
pub fn setup(document: &Document, page: &PageConfig) -> Result<(), JsValue> {
  let Some(navbar) = document.query_selector(&page.selectors.navbar)? else {
    return Ok(());
  };
  let Some(sidebar) = document.query_selector(&page.selectors.sidebar)? else {
    return Ok(());
  };
  // A toggle already in the navbar means the menu was wired up earlier.
  if document.query_selector(&format!(".{TOGGLE_CLASS}"))?.is_some() {
    return Ok(());
  }
  let Some(body) = document.body() else {
    return Ok(());
  };

  let toggle = document.create_element("div")?;
  toggle.set_class_name(TOGGLE_CLASS);
  toggle.set_inner_html(TOGGLE_ICON_HTML);
  navbar.append_child(&toggle)?;

  let overlay = document.create_element("div")?;
  overlay.set_class_name(OVERLAY_CLASS);
  body.append_child(&overlay)?;

  {
    let sidebar = sidebar.clone();
    let overlay = overlay.clone();
    EventListener::new(&toggle, "click", move |_| {
      // The sidebar and overlay classes always flip as a pair.
      if sidebar.class_list().contains(SIDEBAR_OPEN_CLASS) {
        close_menu(&sidebar, &overlay);
      } else {
        let _ = sidebar.class_list().add_1(SIDEBAR_OPEN_CLASS);
        let _ = overlay.class_list().add_1(OVERLAY_ACTIVE_CLASS);
      }
    })
    .forget();
  }

  {
    let overlay_target = overlay.clone();
    EventListener::new(&overlay_target, "click", move |_| {
      close_menu(&sidebar, &overlay);
    })
    .forget();
  }

  Ok(())
}

fn close_menu(sidebar: &Element, overlay: &Element) {
  let _ = sidebar.class_list().remove_1(SIDEBAR_OPEN_CLASS);
  let _ = overlay.class_list().remove_1(OVERLAY_ACTIVE_CLASS);
}
