use taskhub_web_shared::TaskFormResponse;

#[test]
fn parses_success_payload() {
  let response: TaskFormResponse =
    serde_json::from_str(r#"{"success": true, "message": "Task created successfully!"}"#)
      .expect("parse success payload");

  assert!(response.success);
  assert_eq!(response.message.as_deref(), Some("Task created successfully!"));
  assert!(response.errors.is_empty());
}

#[test]
fn parses_validation_failure_payload() {
  let response: TaskFormResponse = serde_json::from_str(
    r#"{"success": false, "errors": {"title": ["This field is required."]}}"#,
  )
  .expect("parse failure payload");

  assert!(!response.success);
  assert_eq!(
    response
      .errors
      .get("title")
      .and_then(|errors| errors.first())
      .map(String::as_str),
    Some("This field is required.")
  );
}

#[test]
fn alert_message_lists_first_error_per_field() {
  let response: TaskFormResponse = serde_json::from_str(
    r#"{
      "success": false,
      "errors": {
        "title": ["This field is required.", "Ensure this value has at most 200 characters."],
        "due_date": ["Enter a valid date."]
      }
    }"#,
  )
  .expect("parse failure payload");

  let message = response.alert_message();
  assert!(message.starts_with("Please correct the following errors:\n\n"));
  assert!(message.contains("- Title: This field is required.\n"));
  assert!(message.contains("- Due_date: Enter a valid date.\n"));
  assert!(!message.contains("at most 200 characters"));
}

#[test]
fn alert_message_skips_fields_without_messages() {
  let response: TaskFormResponse =
    serde_json::from_str(r#"{"success": false, "errors": {"category": []}}"#)
      .expect("parse failure payload");

  assert_eq!(response.alert_message(), "Please correct the following errors:\n\n");
}
