//! Wire types for the backend endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of a successful `POST /ask`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Answer {
    /// Markdown answer text
    pub answer: String,
    /// Source file names the answer was drawn from
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}

/// Body of `GET /documents`
#[derive(Debug, Deserialize)]
pub(crate) struct DocumentList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub documents: Vec<Document>,
}

/// `"documents": null` lists nothing
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Document>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Document>>::deserialize(deserializer)?.unwrap_or_default())
}

/// An uploaded document as listed by the backend.
///
/// The backend may send more fields; only the name is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Document {
    pub name: String,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A file picked for upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Original file name, forwarded to the backend
    pub file_name: String,
    /// Content type reported by the browser, if any
    pub content_type: Option<String>,
    /// Raw bytes
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}
