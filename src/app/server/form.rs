//! Extraction of HTML form submissions.

use crate::{
    core::{
        document::extension,
        model::document::{DocumentCategory, FilePayload},
    },
    error::DeskError,
};
use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::debug;

/// A submitted form, either `multipart/form-data` or urlencoded.
/// Text fields and files are kept apart; file contents are fully buffered.
#[derive(Debug, Default)]
pub(super) struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, FilePayload>,
}

impl FormData {
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn require(&self, key: &str) -> Result<&str, DeskError> {
        self.text(key)
            .ok_or_else(|| DeskError::InvalidForm(format!("missing field '{key}'")))
    }

    /// The action the form asks for.
    pub fn intent(&self) -> Result<&str, DeskError> {
        self.require("intent")
    }

    /// The document category, sent as `type`.
    pub fn category(&self) -> Result<DocumentCategory, DeskError> {
        self.require("type")?.parse()
    }

    pub fn take_file(&mut self, key: &str) -> Option<FilePayload> {
        self.files.remove(key)
    }

    /// Take the non-empty files sent under the document category names,
    /// failing if any of them has a name that cannot be stored.
    pub fn take_documents(&mut self) -> Result<Vec<(DocumentCategory, FilePayload)>, DeskError> {
        let mut documents = vec![];

        for category in DocumentCategory::ALL {
            let Some(file) = self.take_file(category.as_str()) else {
                continue;
            };

            if file.is_empty() {
                debug!("Skipping empty {category} field");
                continue;
            }

            extension(&file.name)?;
            documents.push((category, file));
        }

        Ok(documents)
    }

    /// Deserialize the text fields into `T`. Unknown fields are ignored.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, DeskError> {
        serde_json::to_value(&self.fields)
            .and_then(serde_json::from_value)
            .map_err(|e| DeskError::InvalidForm(e.to_string()))
    }

    async fn from_multipart(mut form: Multipart) -> Result<Self, DeskError> {
        let mut data = Self::default();

        while let Some(field) = form.next_field().await? {
            let Some(name) = field.name().map(String::from) else {
                continue;
            };

            match field.file_name().map(String::from) {
                Some(file_name) => {
                    let content = field.bytes().await?;
                    data.files
                        .insert(name, FilePayload::new(file_name, content.to_vec()));
                }
                None => {
                    let value = field.text().await?;
                    data.fields.insert(name, value);
                }
            }
        }

        Ok(data)
    }
}

#[axum::async_trait]
impl<S> FromRequest<S> for FormData
where
    S: Send + Sync,
{
    type Rejection = DeskError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ctype| ctype.to_str().ok())
            .is_some_and(|ctype| ctype.starts_with("multipart/form-data"));

        if is_multipart {
            let form = Multipart::from_request(req, state)
                .await
                .map_err(|e| DeskError::InvalidForm(e.body_text()))?;
            return Self::from_multipart(form).await;
        }

        let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
            .await
            .map_err(|e| DeskError::InvalidForm(e.body_text()))?;

        Ok(Self {
            fields,
            files: HashMap::new(),
        })
    }
}
