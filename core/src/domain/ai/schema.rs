use serde_json::json;

/// JSON schema for ingredient parsing responses.
pub fn get_parse_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "weight_grams": { "type": "number" }
            },
            "required": ["name", "weight_grams"]
        }
    })
}

/// JSON schema for reformulation advice responses.
pub fn get_reformulation_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "summary": { "type": "string" },
            "suggestions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ingredient": { "type": "string" },
                        "replace_with": { "type": "string" },
                        "reason": { "type": "string" }
                    },
                    "required": ["ingredient", "replace_with", "reason"]
                }
            }
        },
        "required": ["summary", "suggestions"]
    })
}

/// Extract JSON from a model response, stripping markdown code fences.
pub fn extract_json(raw: &str) -> Result<serde_json::Value, serde_json::Error> {
    let mut content = raw.trim();
    if let Some(stripped) = content.strip_prefix("```json") {
        content = stripped;
    } else if let Some(stripped) = content.strip_prefix("```") {
        content = stripped;
    }
    if let Some(stripped) = content.strip_suffix("```") {
        content = stripped;
    }
    serde_json::from_str(content.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markdown_fences() {
        let fenced = "```json\n[{\"name\": \"Rice\", \"weight_grams\": 100}]\n```";
        let value = extract_json(fenced).unwrap();
        assert_eq!(value[0]["name"], "Rice");

        let bare = "{\"summary\": \"ok\"}";
        assert!(extract_json(bare).is_ok());
    }
}
