use chrono::{
  Local,
  NaiveDate,
};
use gloo::timers::callback::Interval;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config::PageConfig;

/// Renders the navbar date display once and schedules the periodic re-render.
pub fn setup(document: &Document, page: &PageConfig) -> Result<(), JsValue> {
  render(document, &page.selectors.date_display)?;

  let document = document.clone();
  let selector = page.selectors.date_display.clone();
  let millis = page.clock.refresh_seconds.saturating_mul(1000);
  Interval::new(millis, move || {
    if let Err(error) = render(&document, &selector) {
      tracing::debug!(?error, "clock re-render failed");
    }
  })
  .forget();

  Ok(())
}

fn render(document: &Document, selector: &str) -> Result<(), JsValue> {
  let Some(element) = document.query_selector(selector)? else {
    return Ok(());
  };
  let (weekday, date) = segments(Local::now().date_naive());
  element.set_inner_html(&format!("<span>{weekday}</span><span>{date}</span>"));
  Ok(())
}

/// Weekday name and day/month/year date, the two segments of the display.
fn segments(date: NaiveDate) -> (String, String) {
  (date.format("%A").to_string(), date.format("%d/%m/%Y").to_string())
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::segments;

  #[test]
  fn renders_weekday_and_day_month_year() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
    let (weekday, formatted) = segments(date);
    assert_eq!(weekday, "Friday");
    assert_eq!(formatted, "15/03/2024");
  }

  #[test]
  fn pads_single_digit_days_and_months() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 2).expect("valid date");
    let (weekday, formatted) = segments(date);
    assert_eq!(weekday, "Friday");
    assert_eq!(formatted, "02/01/2026");
  }
}
