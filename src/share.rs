//! Shareable boards
//!
//! Wire format of the share endpoints and the store collaborator:
//!
//! - `POST /api/fretboards` with `{tuning: "64_59_...", notetocolor: {...}}`
//!   answers `{"shareable-link": "/<id>"}`
//! - `GET /share/<id>` answers the same `{tuning, notetocolor}` body
//!
//! A loaded board gets string ids `0..n`, so annotation keys are rewritten
//! to positional ids when the payload is built.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::ShareError;
use crate::models::{AnnotationMap, CellKey, Pitch, StringId, StringSet};

/// Body of the save request and of the load response
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SharePayload {
    /// Open-string pitches joined by `_`, highest string first
    pub tuning: String,

    /// Cell key to color
    pub notetocolor: AnnotationMap,
}

impl SharePayload {
    /// Build the payload for a board. Annotations on strings that no longer
    /// exist are dropped.
    pub fn from_board(strings: &StringSet, annotations: &AnnotationMap) -> Self {
        let tuning = encode_tuning(&strings.pitches());
        let positions: HashMap<StringId, StringId> = strings
            .strings()
            .iter()
            .enumerate()
            .map(|(index, s)| (s.id, index as StringId))
            .collect();

        let notetocolor = annotations
            .iter()
            .filter_map(|(key, color)| {
                positions
                    .get(&key.string_id)
                    .map(|&index| (CellKey::new(key.pitch, index), color.clone()))
            })
            .collect();

        Self { tuning, notetocolor }
    }

    /// Strings (ids `0..n`) and annotations carried by this payload
    pub fn into_board(self) -> Result<(StringSet, AnnotationMap), ShareError> {
        let pitches = decode_tuning(&self.tuning)?;
        Ok((StringSet::from_pitches(&pitches), self.notetocolor))
    }

    pub fn to_json(&self) -> Result<String, ShareError> {
        serde_json::to_string(self).map_err(|e| ShareError::Malformed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ShareError> {
        serde_json::from_str(json).map_err(|e| ShareError::Malformed(e.to_string()))
    }
}

/// `[64, 59, 55]` → `"64_59_55"`
pub fn encode_tuning(pitches: &[Pitch]) -> String {
    pitches
        .iter()
        .map(|p| p.value().to_string())
        .collect::<Vec<_>>()
        .join("_")
}

/// Most strings a shared board may carry (the extended all-fourths preset)
pub const MAX_SHARED_STRINGS: usize = 13;

/// `"64_59_55"` → `[64, 59, 55]`. Every pitch must be one the tuning editor
/// accepts.
pub fn decode_tuning(tuning: &str) -> Result<Vec<Pitch>, ShareError> {
    if tuning.trim().is_empty() {
        return Err(ShareError::Malformed("empty tuning".to_string()));
    }
    let pitches = tuning
        .split('_')
        .map(|part| {
            let pitch = part
                .trim()
                .parse::<i32>()
                .map(Pitch)
                .map_err(|_| ShareError::Malformed(format!("invalid pitch '{}' in tuning", part)))?;
            if !pitch.is_valid() {
                return Err(ShareError::Malformed(format!("pitch {} out of range in tuning", pitch)));
            }
            Ok(pitch)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if pitches.len() > MAX_SHARED_STRINGS {
        return Err(ShareError::Malformed(format!(
            "{} strings in tuning (max {})",
            pitches.len(),
            MAX_SHARED_STRINGS
        )));
    }
    Ok(pitches)
}

/// Response body of a successful save
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ShareLink {
    #[serde(rename = "shareable-link")]
    pub shareable_link: String,
}

impl ShareLink {
    pub fn for_id(id: &str) -> Self {
        Self {
            shareable_link: format!("/{}", id),
        }
    }

    /// Opaque id without the leading slash
    pub fn id(&self) -> &str {
        self.shareable_link.trim_start_matches('/')
    }
}

/// Key → JSON blob store behind the share endpoints
pub trait ShareStore {
    fn save(&mut self, payload: &SharePayload) -> Result<ShareLink, ShareError>;
    fn load(&self, id: &str) -> Result<SharePayload, ShareError>;
}

/// Store keeping blobs in memory, keyed by random UUIDs
#[derive(Debug, Default)]
pub struct InMemoryShareStore {
    blobs: HashMap<String, String>,
}

impl InMemoryShareStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl ShareStore for InMemoryShareStore {
    fn save(&mut self, payload: &SharePayload) -> Result<ShareLink, ShareError> {
        let blob = payload
            .to_json()
            .map_err(|e| ShareError::SaveFailed(e.to_string()))?;
        let id = uuid::Uuid::new_v4().simple().to_string();
        self.blobs.insert(id.clone(), blob);
        log::info!("Stored shared board {}", id);
        Ok(ShareLink::for_id(&id))
    }

    fn load(&self, id: &str) -> Result<SharePayload, ShareError> {
        let blob = self
            .blobs
            .get(id)
            .ok_or_else(|| ShareError::NotFound(id.to_string()))?;
        SharePayload::from_json(blob)
    }
}
