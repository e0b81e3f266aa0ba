use serde::{Deserialize, Serialize};

use super::SubscribeOutcome;

/// `POST /api/subscribe` body. Everything but `email` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscribedContact {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub already_subscribed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SubscribedContact>,
}

impl From<SubscribeOutcome> for SubscribeResponse {
    fn from(outcome: SubscribeOutcome) -> Self {
        match outcome {
            SubscribeOutcome::Subscribed(subscriber) => Self {
                success: true,
                message: "subscribed",
                already_subscribed: None,
                data: Some(SubscribedContact {
                    id: subscriber.id,
                    email: subscriber.email,
                }),
            },
            SubscribeOutcome::AlreadySubscribed => Self {
                success: true,
                message: "already_subscribed",
                already_subscribed: Some(true),
                data: None,
            },
        }
    }
}
