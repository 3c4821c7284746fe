//! Request parameter encoding.
//!
//! Parameter records travel either as a query string (GET/DELETE) or as a JSON
//! body (POST/PUT/PATCH). Both paths start from the same serde-derived
//! conversion of a record into a JSON object; the query path then applies the
//! server's encoding conventions (`1`/`0` booleans, `key[]=` list pairs,
//! omitted null and empty-string fields).
//!
//! The `preserve_order` feature of `serde_json` keeps the object map in field
//! declaration order, so query parameters come out in the order the record
//! declares them.

use serde::Serialize;
use serde_json::{Map, Value};

/// Convert a parameter record into a JSON object map.
///
/// Structured records become their field map, plain maps pass through
/// unchanged, and any other shape yields an empty object. This never fails:
/// the fallback mirrors the trusted-input stance of the rest of the client.
pub(crate) fn to_object<P: Serialize + ?Sized>(params: &P) -> Map<String, Value> {
    match serde_json::to_value(params) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Append `params` to `path` as a query string.
///
/// Joins with `?` unless the path already contains one. Returns the path
/// unchanged when no parameter survives encoding.
pub(crate) fn append_query(path: &str, params: &Map<String, Value>) -> String {
    let mut pairs: Vec<String> = Vec::new();
    for (key, value) in params {
        encode_pair(&mut pairs, key, value);
    }

    if pairs.is_empty() {
        return path.to_string();
    }

    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}{}", pairs.join("&"))
}

fn encode_pair(pairs: &mut Vec<String>, key: &str, value: &Value) {
    match value {
        // Absent fields are simply not sent.
        Value::Null => {}
        Value::Bool(flag) => pairs.push(format!("{key}={}", if *flag { 1 } else { 0 })),
        // Empty strings are treated the same as absent fields; the wire
        // format cannot distinguish "unset" from "explicitly empty".
        Value::String(text) => {
            if !text.is_empty() {
                pairs.push(format!("{key}={}", urlencoding::encode(text)));
            }
        }
        Value::Number(number) => pairs.push(format!("{key}={number}")),
        // Lists expand to one `key[]=item` pair per element.
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::String(text) => {
                        pairs.push(format!("{key}[]={}", urlencoding::encode(text)));
                    }
                    Value::Number(number) => pairs.push(format!("{key}[]={number}")),
                    other => {
                        pairs.push(format!("{key}[]={}", urlencoding::encode(&other.to_string())));
                    }
                }
            }
        }
        other => pairs.push(format!("{key}={}", urlencoding::encode(&other.to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct SampleParams {
        project_id: i64,
        archived: String,
        getcolumn: Option<String>,
        silence: bool,
        userid: Vec<i64>,
    }

    #[test]
    fn encodes_fields_in_declaration_order() {
        let params = to_object(&SampleParams {
            project_id: 7,
            archived: "no".into(),
            getcolumn: None,
            silence: true,
            userid: vec![1, 2],
        });
        let url = append_query("/api/project/lists", &params);
        assert_eq!(
            url,
            "/api/project/lists?project_id=7&archived=no&silence=1&userid[]=1&userid[]=2"
        );
    }

    #[test]
    fn omits_null_and_empty_string_fields() {
        let params = to_object(&json!({"a": null, "b": "", "c": "x"}));
        assert_eq!(append_query("/p", &params), "/p?c=x");
    }

    #[test]
    fn booleans_encode_as_one_and_zero() {
        let params = to_object(&json!({"on": true, "off": false}));
        assert_eq!(append_query("/p", &params), "/p?on=1&off=0");
    }

    #[test]
    fn list_elements_expand_to_bracket_pairs() {
        let params = to_object(&json!({"userid": [5, 6], "tag": ["a b", "c"]}));
        assert_eq!(
            append_query("/p", &params),
            "/p?userid[]=5&userid[]=6&tag[]=a%20b&tag[]=c"
        );
    }

    #[test]
    fn empty_list_produces_no_pairs() {
        let params = to_object(&json!({"userid": []}));
        assert_eq!(append_query("/api/users/basic", &params), "/api/users/basic");
    }

    #[test]
    fn textual_values_are_percent_encoded() {
        let params = to_object(&json!({"key": "hello world/团队"}));
        assert_eq!(
            append_query("/p", &params),
            "/p?key=hello%20world%2F%E5%9B%A2%E9%98%9F"
        );
    }

    #[test]
    fn joins_with_ampersand_when_path_has_query() {
        let params = to_object(&json!({"page": 2}));
        assert_eq!(append_query("/p?fixed=1", &params), "/p?fixed=1&page=2");
    }

    #[test]
    fn non_object_inputs_fall_back_to_empty_map() {
        assert!(to_object(&()).is_empty());
        assert!(to_object(&42).is_empty());
        assert!(to_object(&vec![1, 2]).is_empty());
    }

    #[test]
    fn path_unchanged_when_nothing_survives_encoding() {
        let params = to_object(&json!({"a": null, "b": ""}));
        assert_eq!(append_query("/p", &params), "/p");
    }
}
