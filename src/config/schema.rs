use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "reports": {
                "type": "object",
                "properties": {
                    "base_url": { "type": "string", "format": "uri" }
                },
                "additionalProperties": false
            }
        },
        "additionalProperties": false
    })
});
