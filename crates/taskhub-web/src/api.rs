use gloo::net::http::Request;
use taskhub_web_shared::TaskFormResponse;
use web_sys::FormData;

/// Header that tells the server to answer with a JSON verdict instead of a
/// rendered page.
const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

pub async fn submit_task_form(url: &str, fields: FormData) -> Result<TaskFormResponse, String> {
  let request = Request::post(url)
    .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
    .body(fields)
    .map_err(|e| format!("failed to encode form payload: {e}"))?;

  let response = request
    .send()
    .await
    .map_err(|e| format!("request error: {e}"))?;

  response
    .json::<TaskFormResponse>()
    .await
    .map_err(|e| format!("decode error: {e}"))
}
