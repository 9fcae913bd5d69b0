use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request body for the remote evaluation service: the rasterized surface
/// as a PNG data URL plus a snapshot of the variable environment.
#[derive(Debug, Serialize)]
pub struct EvalRequest<'a> {
    pub image: &'a str,
    pub dict_of_vars: &'a BTreeMap<String, String>,
}

/// One detected expression with its evaluated result. `assign` marks
/// entries that bind a variable and must be folded into the environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EvalEntry {
    pub expr: String,
    pub result: String,
    #[serde(default)]
    pub assign: bool,
}

#[derive(Debug, Deserialize)]
pub struct EvalResponse {
    pub data: Vec<EvalEntry>,
}

#[cfg(test)]
mod tests {
    use super::{EvalRequest, EvalResponse};
    use std::collections::BTreeMap;

    #[test]
    fn request_serializes_with_wire_field_names() {
        let mut vars = BTreeMap::new();
        vars.insert("x".to_string(), "5".to_string());
        let request = EvalRequest {
            image: "data:image/png;base64,AAAA",
            dict_of_vars: &vars,
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["image"], "data:image/png;base64,AAAA");
        assert_eq!(json["dict_of_vars"]["x"], "5");
    }

    #[test]
    fn response_entries_preserve_array_order() {
        let body = r#"{"data":[
            {"expr":"x","result":"5","assign":true},
            {"expr":"2+2","result":"4","assign":false}
        ]}"#;
        let response: EvalResponse = serde_json::from_str(body).expect("parse");
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].expr, "x");
        assert!(response.data[0].assign);
        assert_eq!(response.data[1].expr, "2+2");
        assert!(!response.data[1].assign);
    }

    #[test]
    fn missing_assign_flag_defaults_to_false() {
        let body = r#"{"data":[{"expr":"1+1","result":"2"}]}"#;
        let response: EvalResponse = serde_json::from_str(body).expect("parse");
        assert!(!response.data[0].assign);
    }
}
