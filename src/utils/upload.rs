//! Request body extraction for the document endpoints.
//!
//! The create and update routes accept either a plain JSON body or
//! `multipart/form-data` carrying the same fields as text parts plus at
//! most one binary part (an image). The binary part's field name is a
//! dot-path naming where the bytes belong inside the payload; handlers
//! embed them there as base64 before persisting.

use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Map, Value};

use crate::state::AppState;
use crate::utils::errors::AppError;

fn bad_request() -> AppError {
    AppError::bad_request(anyhow::anyhow!("参数不对"))
}

/// One uploaded binary part, kept in memory.
#[derive(Debug)]
pub struct UploadedFile {
    /// Dot-path field name, e.g. `goods.subCategory.goods.img`.
    pub field: String,
    pub bytes: Vec<u8>,
}

/// Parsed request body: the JSON payload plus an optional uploaded file.
#[derive(Debug)]
pub struct DocumentUpload {
    pub body: Value,
    pub file: Option<UploadedFile>,
}

impl DocumentUpload {
    /// Takes the object stored under `wrapper` (e.g. `goods`, `values`)
    /// and, when a file was uploaded below that wrapper, embeds its bytes
    /// as base64 at the file's dot-path. A missing wrapper, a non-object
    /// payload, or a file addressed outside the wrapper is a 400.
    pub fn into_wrapped(self, wrapper: &str) -> Result<Value, AppError> {
        let mut payload = self.body.get(wrapper).cloned().ok_or_else(bad_request)?;
        if !payload.is_object() {
            return Err(bad_request());
        }

        if let Some(file) = self.file {
            let path = file
                .field
                .strip_prefix(wrapper)
                .and_then(|rest| rest.strip_prefix('.'))
                .ok_or_else(bad_request)?;
            embed_base64(&mut payload, path, &file.bytes);
        }

        Ok(payload)
    }
}

/// Writes `bytes` as a base64 string at the dot-separated `path`,
/// creating intermediate objects as needed.
fn embed_base64(payload: &mut Value, path: &str, bytes: &[u8]) {
    let mut segments = path.split('.').peekable();
    let mut cursor = payload;

    while let Some(segment) = segments.next() {
        if !cursor.is_object() {
            *cursor = Value::Object(Map::new());
        }
        let Value::Object(map) = cursor else { return };

        if segments.peek().is_none() {
            map.insert(segment.to_string(), Value::String(BASE64.encode(bytes)));
            return;
        }
        cursor = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}

impl FromRequest<AppState> for DocumentUpload {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if !is_multipart {
            let axum::Json(body) = axum::Json::<Value>::from_request(req, state)
                .await
                .map_err(|_| bad_request())?;
            return Ok(Self { body, file: None });
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|_| bad_request())?;

        let mut body = Map::new();
        let mut file: Option<UploadedFile> = None;

        while let Some(field) = multipart.next_field().await.map_err(|_| bad_request())? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if field.file_name().is_some() {
                // Mirror single-file upload semantics: a second binary part
                // is an unexpected field.
                if file.is_some() {
                    return Err(bad_request());
                }
                let bytes = field.bytes().await.map_err(|_| bad_request())?;
                file = Some(UploadedFile {
                    field: name,
                    bytes: bytes.to_vec(),
                });
            } else {
                let text = field.text().await.map_err(|_| bad_request())?;
                // Text parts carrying JSON are parsed; anything else is
                // kept as a plain string.
                let value = serde_json::from_str(&text).unwrap_or(Value::String(text));
                body.insert(name, value);
            }
        }

        Ok(Self {
            body: Value::Object(body),
            file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embed_creates_intermediate_objects() {
        let mut payload = json!({"category": "tea"});
        embed_base64(&mut payload, "subCategory.goods.img", b"bytes");
        assert_eq!(
            payload["subCategory"]["goods"]["img"],
            json!(BASE64.encode(b"bytes"))
        );
        assert_eq!(payload["category"], "tea");
    }

    #[test]
    fn embed_overwrites_existing_leaf() {
        let mut payload = json!({"img": "old"});
        embed_base64(&mut payload, "img", b"new");
        assert_eq!(payload["img"], json!(BASE64.encode(b"new")));
    }

    #[test]
    fn wrapped_payload_requires_wrapper_key() {
        let upload = DocumentUpload {
            body: json!({"other": {}}),
            file: None,
        };
        assert!(upload.into_wrapped("goods").is_err());
    }

    #[test]
    fn file_outside_wrapper_is_rejected() {
        let upload = DocumentUpload {
            body: json!({"goods": {"category": "tea"}}),
            file: Some(UploadedFile {
                field: "values.img".to_string(),
                bytes: b"x".to_vec(),
            }),
        };
        assert!(upload.into_wrapped("goods").is_err());
    }

    #[test]
    fn file_inside_wrapper_is_embedded() {
        let upload = DocumentUpload {
            body: json!({"goods": {"category": "tea"}}),
            file: Some(UploadedFile {
                field: "goods.subCategory.goods.img".to_string(),
                bytes: b"png".to_vec(),
            }),
        };
        let payload = upload.into_wrapped("goods").unwrap();
        assert_eq!(
            payload["subCategory"]["goods"]["img"],
            json!(BASE64.encode(b"png"))
        );
    }
}
