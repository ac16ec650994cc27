//! Document CRUD, search/aggregation, and file download.

use serde_json::json;

use strato_core::error::{Result, StratoError};
use strato_core::payload::{Documents, Payload};
use strato_core::request::Attachment;

use crate::dispatch::{PendingBytes, PendingJson};

use super::Strato;

impl Strato {
    /// Insert one or many documents into a collection. A missing collection
    /// is created server-side; attachments land in the backend file store and
    /// surface as a `cb_files` field on the stored document.
    pub fn insert_document(
        &self,
        collection: &str,
        documents: Documents,
        attachments: Vec<Attachment>,
    ) -> Result<PendingJson> {
        let request = self
            .request("data", &format!("{collection}/insert"))?
            .payload(Payload::Array(documents.into_batch()))
            .attachments(attachments);
        Ok(self.dispatcher.submit(request))
    }

    /// Replace documents matching `conditions`. Every outgoing document gains
    /// a `cb_search_key` entry carrying the conditions, so each must be a
    /// JSON object.
    pub fn update_document(
        &self,
        collection: &str,
        conditions: Payload,
        documents: Documents,
        attachments: Vec<Attachment>,
    ) -> Result<PendingJson> {
        let mut batch = documents.into_batch();
        for doc in &mut batch {
            let Payload::Object(map) = doc else {
                return Err(StratoError::BadRequest(
                    "update documents must be json objects".into(),
                ));
            };
            map.insert("cb_search_key".into(), conditions.clone());
        }

        let request = self
            .request("data", &format!("{collection}/update"))?
            .payload(Payload::Array(batch))
            .attachments(attachments);
        Ok(self.dispatcher.submit(request))
    }

    /// Search a collection. `conditions` follows the backend's condition
    /// document format and is passed through untyped.
    pub fn search_documents(&self, collection: &str, conditions: Payload) -> Result<PendingJson> {
        let request = self
            .request("data", &format!("{collection}/search"))?
            .payload(conditions);
        Ok(self.dispatcher.submit(request))
    }

    /// Search with server-side aggregation commands applied to the output.
    /// Each command is a one-entry object keyed by its command type.
    pub fn search_documents_aggregate(
        &self,
        collection: &str,
        commands: Vec<Payload>,
    ) -> Result<PendingJson> {
        let request = self
            .request("data", &format!("{collection}/aggregate"))?
            .payload(json!({ "cb_aggregate_key": commands }));
        Ok(self.dispatcher.submit(request))
    }

    /// Fetch a stored file by the id found in a document's `cb_files` field.
    /// Binary path: the response bytes arrive undecoded.
    pub fn download_file(&self, file_id: &str) -> Result<PendingBytes> {
        let request = self.request("download", &format!("file/{file_id}"))?;
        Ok(self.dispatcher.submit_download(request))
    }
}
