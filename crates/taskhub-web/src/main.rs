mod api;
mod clock;
mod config;
mod menu;
mod modal;
mod pwa;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!("starting Taskhub page glue");

  let Some(window) = web_sys::window() else {
    tracing::error!("no global window; nothing to wire up");
    return;
  };
  let Some(document) = window.document() else {
    tracing::error!("window has no document; nothing to wire up");
    return;
  };

  let page = config::PageConfig::load();

  // Each behavior installs independently; a failure in one must not keep the
  // others from installing.
  if let Err(error) = menu::setup(&document, &page) {
    tracing::error!(?error, "mobile menu setup failed");
  }
  if let Err(error) = clock::setup(&document, &page) {
    tracing::error!(?error, "clock setup failed");
  }
  if let Err(error) = modal::setup(&document, &page) {
    tracing::error!(?error, "add-task modal setup failed");
  }
  match pwa::setup(&window, &page) {
    // The capture listener keeps the holder alive; a future install button
    // component receives this handle.
    Ok(_install_prompt) => {}
    Err(error) => tracing::error!(?error, "pwa setup failed"),
  }
}
