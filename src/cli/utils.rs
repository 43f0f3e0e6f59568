use serde_json::{json, Value};
use crate::cli::OutputFormat;

/// Output a success message in the appropriate format.
/// `data` fields are merged into the JSON object next to `message`.
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&success_json(message, data))?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

fn success_json(message: &str, data: Option<Value>) -> Value {
    let mut response = json!({
        "success": true,
        "message": message
    });

    match (response.as_object_mut(), data) {
        (Some(target), Some(Value::Object(fields))) => target.extend(fields),
        (Some(target), Some(other)) => {
            target.insert("data".to_string(), other);
        }
        _ => {}
    }

    response
}
