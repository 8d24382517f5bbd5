use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::document::GeometryDocument;
use crate::error::GisError;
use crate::provider::DocumentProvider;

/// Provider answering every request with the same canned result.
pub(crate) struct FakeProvider {
    response: Response,
    requested: Mutex<Vec<String>>,
}

enum Response {
    Document(Value),
    Failure(fn(&str) -> GisError),
}

impl FakeProvider {
    pub(crate) fn document(value: Value) -> Self {
        Self::new(Response::Document(value))
    }

    pub(crate) fn failing(error: fn(&str) -> GisError) -> Self {
        Self::new(Response::Failure(error))
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.lock().expect("poisoned mutex").clone()
    }

    fn new(response: Response) -> Self {
        Self {
            response,
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DocumentProvider for FakeProvider {
    async fn load(&self, url: &str) -> Result<GeometryDocument, GisError> {
        self.requested
            .lock()
            .expect("poisoned mutex")
            .push(url.to_string());

        match &self.response {
            Response::Document(value) => GeometryDocument::from_value(value.clone()),
            Response::Failure(error) => Err(error(url)),
        }
    }
}
