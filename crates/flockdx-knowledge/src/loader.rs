use std::path::Path;

use serde::de::DeserializeOwned;

use crate::base::KnowledgeBase;
use crate::error::KnowledgeError;
use crate::tables::{
    DISEASES_FILE, KnowledgeTables, REFERENCE_FILE, SYMPTOMS_FILE, TOOLS_FILE, TREATMENTS_FILE,
};

/// Load a single JSON table. Returns `Ok(None)` if the file does not exist.
pub fn load_table<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Option<T>, KnowledgeError> {
    let path = dir.join(file);
    if !path.exists() {
        tracing::warn!(path = %path.display(), "knowledge table missing, using empty table");
        return Ok(None);
    }

    let bytes = std::fs::read(&path).map_err(|source| KnowledgeError::Io {
        path: path.clone(),
        source,
    })?;
    let value = serde_json::from_slice(&bytes).map_err(|source| KnowledgeError::Parse {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "knowledge table loaded");
    Ok(Some(value))
}

/// Read all tables from a directory without resolving them.
pub fn load_tables(dir: &Path) -> Result<KnowledgeTables, KnowledgeError> {
    if !dir.is_dir() {
        return Err(KnowledgeError::Unavailable {
            path: dir.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let tables = KnowledgeTables {
        diseases: load_table(dir, DISEASES_FILE)?,
        symptoms: load_table(dir, SYMPTOMS_FILE)?,
        treatments: load_table(dir, TREATMENTS_FILE)?,
        reference: load_table(dir, REFERENCE_FILE)?,
        tools: load_table(dir, TOOLS_FILE)?,
    };

    if tables.present_count() == 0 {
        return Err(KnowledgeError::Unavailable {
            path: dir.to_path_buf(),
            reason: "none of the knowledge tables are present".to_string(),
        });
    }

    Ok(tables)
}

/// Load and resolve the knowledge base stored in `dir`.
///
/// Individual missing tables fall back to empty. A missing directory, a
/// directory with no tables at all, or malformed JSON is an error: callers
/// should treat it as fatal at startup.
pub fn load_dir(dir: &Path) -> Result<KnowledgeBase, KnowledgeError> {
    let tables = load_tables(dir)?;
    let kb = KnowledgeBase::from_tables(tables);

    tracing::info!(
        path = %dir.display(),
        general = kb.general().len(),
        layer_specific = kb.layer_specific().len(),
        nutritional = kb.nutritional().len(),
        total = kb.disease_count(),
        "knowledge base loaded"
    );

    Ok(kb)
}
