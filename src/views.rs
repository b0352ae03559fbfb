use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Rendering boundary
///
/// HTML templating lives outside this service; pages answer with the view name
/// and the data a template would receive.
pub fn render(view: &str, data: impl Serialize) -> Json<Value> {
    let data = serde_json::to_value(data).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize data for view {}: {}", view, e);
        Value::Null
    });

    Json(json!({
        "view": view,
        "data": data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wraps_view_and_data() {
        let Json(body) = render("index.html", json!({ "q": "mouse" }));

        assert_eq!(body["view"], "index.html");
        assert_eq!(body["data"]["q"], "mouse");
    }
}
