/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::Method;
use reqwest::multipart::Form;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Body of an API request
///
/// The presence of a payload decides the HTTP method: requests without one
/// are sent as `GET`, every other request as `POST`.
#[derive(Default)]
pub enum Payload {
    /// No body, sent as `GET`
    #[default]
    None,
    /// JSON body, sent with `Content-Type: application/json`
    Json(Value),
    /// Multipart form body, content type chosen by the transport
    Form(Form),
}

impl Payload {
    /// Serializes `body` into a JSON payload
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, AppError> {
        Ok(Payload::Json(serde_json::to_value(body)?))
    }

    /// Wraps a multipart form
    pub fn form(form: Form) -> Self {
        Payload::Form(form)
    }

    /// Whether a body will be sent
    pub fn is_some(&self) -> bool {
        !matches!(self, Payload::None)
    }

    /// HTTP method implied by the payload
    pub fn method(&self) -> Method {
        if self.is_some() {
            Method::POST
        } else {
            Method::GET
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::None => write!(f, "None"),
            Payload::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Payload::Form(form) => f.debug_tuple("Form").field(&form.boundary()).finish(),
        }
    }
}

impl From<Form> for Payload {
    fn from(form: Form) -> Self {
        Payload::Form(form)
    }
}
