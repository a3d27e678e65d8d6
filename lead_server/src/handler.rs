//! `/api/loops` request handling, independent of the HTTP server.

use samwise_common::LeadRequest;
use samwise_common::lead::ApiMessage;

use crate::loops::LeadSink;

pub const MSG_SUCCESS: &str = "Success";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
pub const MSG_MISSING_FIELDS: &str = "Missing required fields";
pub const MSG_UPSTREAM_FAILURE: &str = "An error occurred while processing your request";

/// Status plus JSON message, ready to be written by the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ApiMessage,
}

impl ApiReply {
    pub fn new(status: u16, message: &str) -> Self {
        Self {
            status,
            body: ApiMessage::new(message),
        }
    }

    pub fn to_json(&self) -> Vec<u8> {
        serde_json::to_vec(&self.body).unwrap_or_else(|_| b"{}".to_vec())
    }
}

/// Validate the request and hand the lead to `sink`.
///
/// `is_post` is checked first; the body is only parsed for POST requests and
/// the sink is only reached with all three fields present.
pub async fn handle_lead<S: LeadSink>(is_post: bool, body: &[u8], sink: &S) -> ApiReply {
    if !is_post {
        return ApiReply::new(405, MSG_METHOD_NOT_ALLOWED);
    }

    let lead = match serde_json::from_slice::<LeadRequest>(body) {
        Ok(lead) if lead.is_complete() => lead,
        Ok(_) => return ApiReply::new(400, MSG_MISSING_FIELDS),
        Err(err) => {
            tracing::debug!(error = %err, "unparseable lead body");
            return ApiReply::new(400, MSG_MISSING_FIELDS);
        }
    };

    match sink.record(&lead).await {
        Ok(()) => ApiReply::new(200, MSG_SUCCESS),
        Err(err) => {
            tracing::error!(error = %err, "error processing lead");
            ApiReply::new(500, MSG_UPSTREAM_FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loops::LoopsError;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records calls; fails when `fail` is set.
    #[derive(Default)]
    struct MemorySink {
        seen: Mutex<Vec<LeadRequest>>,
        fail: bool,
    }

    impl LeadSink for MemorySink {
        async fn record(&self, lead: &LeadRequest) -> Result<(), LoopsError> {
            self.seen.lock().unwrap().push(lead.clone());
            if self.fail {
                Err(LoopsError::Api {
                    step: "contact",
                    status: 500,
                    message: "down".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    const BODY: &[u8] =
        br#"{"email":"sam@shire.me","downloadUrl":"https://dl/a.exe","applicationName":"Samwise"}"#;

    #[tokio::test]
    async fn non_post_is_rejected() {
        let sink = MemorySink::default();
        let reply = handle_lead(false, BODY, &sink).await;
        assert_eq!(reply, ApiReply::new(405, MSG_METHOD_NOT_ALLOWED));
        assert!(sink.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_never_reach_upstream() {
        let sink = MemorySink::default();
        for body in [
            &br#"{"email":"sam@shire.me","downloadUrl":"https://dl/a.exe"}"#[..],
            &br#"{"email":"","downloadUrl":"u","applicationName":"n"}"#[..],
            &b"not json"[..],
            &b""[..],
        ] {
            let reply = handle_lead(true, body, &sink).await;
            assert_eq!(reply.status, 400);
            assert_eq!(reply.body.message, MSG_MISSING_FIELDS);
        }
        assert!(sink.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn complete_lead_is_recorded() {
        let sink = MemorySink::default();
        let reply = handle_lead(true, BODY, &sink).await;
        assert_eq!(reply, ApiReply::new(200, MSG_SUCCESS));
        assert_eq!(
            sink.seen.lock().unwrap().clone(),
            vec![LeadRequest::new("sam@shire.me", "https://dl/a.exe", "Samwise")]
        );
        assert_eq!(reply.to_json(), br#"{"message":"Success"}"#.to_vec());
    }

    #[tokio::test]
    async fn upstream_failure_is_generic_500() {
        let sink = MemorySink {
            fail: true,
            ..MemorySink::default()
        };
        let reply = handle_lead(true, BODY, &sink).await;
        assert_eq!(reply, ApiReply::new(500, MSG_UPSTREAM_FAILURE));
    }
}
