//! Naming rules and the storage abstraction for employee documents.

use crate::{core::model::document::DocumentCategory, error::DeskError};
use std::sync::atomic::{AtomicI64, Ordering};

pub mod store;

/// URL prefix under which stored documents are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Issues millisecond timestamps that are strictly increasing for the lifetime
/// of the clock, so that two allocations never receive the same stamp even when
/// they happen within the same millisecond.
#[derive(Debug, Default)]
pub struct StampClock {
    last: AtomicI64,
}

impl StampClock {
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// The current UNIX time in milliseconds, or one past the previously issued
    /// stamp if the clock has not advanced since.
    pub fn next(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Acquire);
        loop {
            let next = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Extract the extension of an uploaded file's name, case preserved.
/// Names without a dot, or ending in one, have no extension.
///
/// * `name`: The original file name.
pub fn extension(name: &str) -> Result<Option<&str>, DeskError> {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return Ok(None);
    };

    if ext.contains(['/', '\\', '\0']) {
        return Err(DeskError::InvalidFileName(format!(
            "extension contains a path separator: {name}"
        )));
    }

    Ok((!ext.is_empty()).then_some(ext))
}

/// `{category}-{stamp}.{ext}`, or `{category}-{stamp}` without an extension.
pub fn file_name(category: DocumentCategory, stamp: i64, ext: Option<&str>) -> String {
    match ext {
        Some(ext) => format!("{category}-{stamp}.{ext}"),
        None => format!("{category}-{stamp}"),
    }
}

/// The public path of a document file owned by `owner`.
pub fn public_path(owner: &str, file_name: &str) -> String {
    format!("{PUBLIC_PREFIX}/{owner}/{file_name}")
}
