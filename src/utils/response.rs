use serde::Serialize;

/// Success envelope shared by every endpoint.
///
/// The login endpoint reports its text under `message`, the CRUD endpoints
/// under `msg`. Both keys are kept to stay wire-compatible with existing
/// clients; unused keys are omitted from the serialized body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            code: 1,
            message: None,
            msg: None,
            data: Some(data),
        }
    }

    pub fn msg(msg: impl Into<String>) -> Self {
        Self {
            code: 1,
            message: None,
            msg: Some(msg.into()),
            data: None,
        }
    }

    pub fn msg_with_data(msg: impl Into<String>, data: T) -> Self {
        Self {
            code: 1,
            message: None,
            msg: Some(msg.into()),
            data: Some(data),
        }
    }

    pub fn message_with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 1,
            message: Some(message.into()),
            msg: None,
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn unused_envelope_keys_are_omitted() {
        let body = serde_json::to_value(ApiResponse::<Value>::msg("删除商品成功")).unwrap();
        assert_eq!(body, json!({"code": 1, "msg": "删除商品成功"}));
    }

    #[test]
    fn login_envelope_uses_message_key() {
        let body =
            serde_json::to_value(ApiResponse::message_with_data("登录成功", json!({"a": 1})))
                .unwrap();
        assert_eq!(
            body,
            json!({"code": 1, "message": "登录成功", "data": {"a": 1}})
        );
    }
}
