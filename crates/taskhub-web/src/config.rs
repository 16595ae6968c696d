use serde::Deserialize;

const PAGE_CONFIG_TOML: &str = include_str!("../assets/page.toml");

/// The page contract: selectors and ids the server-rendered templates expose,
/// plus the clock period and the service-worker script path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageConfig {
  #[serde(default)]
  pub version: u32,
  #[serde(default)]
  pub selectors: Selectors,
  #[serde(default)]
  pub clock: ClockConfig,
  #[serde(default)]
  pub pwa: PwaConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Selectors {
  #[serde(default = "default_navbar")]
  pub navbar: String,
  #[serde(default = "default_sidebar")]
  pub sidebar: String,
  #[serde(default = "default_date_display")]
  pub date_display: String,
  #[serde(default = "default_open_modal")]
  pub open_modal: String,
  #[serde(default = "default_modal_id")]
  pub modal_id: String,
  #[serde(default = "default_form_id")]
  pub form_id: String,
  #[serde(default = "default_close_classes")]
  pub close_classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClockConfig {
  #[serde(default = "default_refresh_seconds")]
  pub refresh_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PwaConfig {
  #[serde(default = "default_service_worker_path")]
  pub service_worker_path: String,
}

impl PageConfig {
  pub fn load() -> Self {
    match toml::from_str(PAGE_CONFIG_TOML) {
      Ok(config) => config,
      Err(error) => {
        tracing::error!(%error, "failed parsing embedded page contract; using defaults");
        Self::default()
      }
    }
  }
}

impl Default for PageConfig {
  fn default() -> Self {
    Self {
      version: 1,
      selectors: Selectors::default(),
      clock: ClockConfig::default(),
      pwa: PwaConfig::default(),
    }
  }
}

impl Default for Selectors {
  fn default() -> Self {
    Self {
      navbar: default_navbar(),
      sidebar: default_sidebar(),
      date_display: default_date_display(),
      open_modal: default_open_modal(),
      modal_id: default_modal_id(),
      form_id: default_form_id(),
      close_classes: default_close_classes(),
    }
  }
}

impl Default for ClockConfig {
  fn default() -> Self {
    Self {
      refresh_seconds: default_refresh_seconds(),
    }
  }
}

impl Default for PwaConfig {
  fn default() -> Self {
    Self {
      service_worker_path: default_service_worker_path(),
    }
  }
}

fn default_navbar() -> String {
  ".navbar-left".to_string()
}

fn default_sidebar() -> String {
  ".sidebar".to_string()
}

fn default_date_display() -> String {
  ".date-day".to_string()
}

fn default_open_modal() -> String {
  ".invite-btn".to_string()
}

fn default_modal_id() -> String {
  "add-task-modal".to_string()
}

fn default_form_id() -> String {
  "add-task-form".to_string()
}

fn default_close_classes() -> Vec<String> {
  vec![
    "close-modal".to_string(),
    "btn-cancel".to_string(),
    "modal-backdrop".to_string(),
  ]
}

fn default_refresh_seconds() -> u32 {
  60
}

fn default_service_worker_path() -> String {
  "/static/taskhub/sw.js".to_string()
}

#[cfg(test)]
mod tests {
  use super::PageConfig;

  #[test]
  fn embedded_contract_parses() {
    let config = PageConfig::load();
    assert_eq!(config.selectors.navbar, ".navbar-left");
    assert_eq!(config.selectors.sidebar, ".sidebar");
    assert_eq!(config.selectors.date_display, ".date-day");
    assert_eq!(config.selectors.open_modal, ".invite-btn");
    assert_eq!(config.selectors.modal_id, "add-task-modal");
    assert_eq!(config.selectors.form_id, "add-task-form");
    assert_eq!(
      config.selectors.close_classes,
      ["close-modal", "btn-cancel", "modal-backdrop"]
    );
    assert_eq!(config.clock.refresh_seconds, 60);
    assert_eq!(config.pwa.service_worker_path, "/static/taskhub/sw.js");
  }

  #[test]
  fn embedded_contract_matches_defaults() {
    assert_eq!(PageConfig::load(), PageConfig::default());
  }

  #[test]
  fn partial_contract_fills_in_defaults() {
    let config: PageConfig =
      toml::from_str("[selectors]\nnavbar = \".topbar\"").expect("parse partial contract");
    assert_eq!(config.selectors.navbar, ".topbar");
    assert_eq!(config.selectors.sidebar, ".sidebar");
    assert_eq!(config.clock.refresh_seconds, 60);
  }
}
