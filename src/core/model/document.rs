use crate::error::DeskError;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, str::FromStr};

/// The purpose of a document attached to an employee.
/// Each category maps to exactly one column on the `employees` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Photo,
    Cv,
    IdDoc,
}

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 3] = [Self::Photo, Self::Cv, Self::IdDoc];

    /// The tag used in forms and as the stored file name prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Cv => "cv",
            Self::IdDoc => "id_doc",
        }
    }

    /// The `employees` column holding the document path.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Photo => "photo_path",
            Self::Cv => "cv_path",
            Self::IdDoc => "id_document_path",
        }
    }
}

impl std::fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentCategory {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photo" => Ok(Self::Photo),
            "cv" => Ok(Self::Cv),
            "id_doc" => Ok(Self::IdDoc),
            _ => Err(DeskError::InvalidCategory(s.to_string())),
        }
    }
}

/// An uploaded file, fully buffered.
#[derive(Debug, Clone, Default)]
pub struct FilePayload {
    /// The file name as sent by the client.
    pub name: String,

    /// File contents.
    pub content: Vec<u8>,
}

impl FilePayload {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Location of a stored document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath {
    /// Where the file lives on disk.
    pub absolute: PathBuf,

    /// Path under which the file is publicly reachable, e.g. `/uploads/7/photo-1729.png`.
    pub public: String,
}

/// A file found in document storage.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub path: StoragePath,

    /// Time since the file was last modified.
    pub age: std::time::Duration,
}

/// Result of attaching a document to an employee.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    pub employee_id: i32,
    pub category: DocumentCategory,
    pub path: String,
}
