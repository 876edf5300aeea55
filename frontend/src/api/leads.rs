//! Lead listing and CSV bulk import against `/api/leads` and
//! `/api/load_file`.
//!
//! The listing response is the backend's two-element tuple
//! `[records, total]` where `total` counts every lead matching the filters,
//! not just the returned page. Wire records are translated to view `Lead`s
//! here; nothing downstream sees the snake_case shape.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use common::model::lead::{Interest, Lead, LeadRecord, Source, Status};
use common::model::load::LoadResult;

use super::{error_from_response, token_store, FetchError, API_BASE};

/// Server-side filter and pagination parameters for `GET /leads`.
///
/// `None` fields are omitted from the query string entirely — the backend
/// distinguishes "no filter" from an empty value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadQuery {
    pub source: Option<Source>,
    pub interest: Option<Interest>,
    pub status: Option<Status>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl LeadQuery {
    /// Only the parameters that are actually present, as wire strings.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(source) = self.source {
            pairs.push(("source", source.to_string()));
        }
        if let Some(interest) = self.interest {
            pairs.push(("interest", interest.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// One page of leads plus the total count across all pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadsPage {
    pub leads: Vec<Lead>,
    pub total: u64,
}

/// Fetches one page of leads. Sends the stored bearer token when one is
/// present. Fallible like everything else in this layer; the dashboard
/// decides to degrade to an empty page.
pub async fn fetch_leads(query: &LeadQuery) -> Result<LeadsPage, FetchError> {
    let mut request = Request::get(&format!("{}/leads", API_BASE));

    let pairs = query.to_pairs();
    if !pairs.is_empty() {
        request = request.query(pairs.iter().map(|(key, value)| (*key, value.as_str())));
    }
    if let Some(token) = token_store::get() {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request.send().await?;
    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let (records, total): (Vec<LeadRecord>, u64) = response.json().await?;
    Ok(LeadsPage {
        leads: records.into_iter().map(Lead::from).collect(),
        total,
    })
}

/// Posts a CSV file for bulk import.
///
/// The bearer token is an explicit argument — the caller proves it has a
/// session before any network work happens — and failures propagate with
/// the server's `detail` message so the UI can show them verbatim.
pub async fn upload_leads_csv(file: File, token: &str) -> Result<LoadResult, FetchError> {
    let form = FormData::new()
        .map_err(|_| FetchError::Network("could not build multipart form".to_string()))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|_| FetchError::Network("could not attach file to form".to_string()))?;

    let response = Request::post(&format!("{}/load_file", API_BASE))
        .header("Authorization", &format!("Bearer {}", token))
        .body(form)?
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_sends_nothing() {
        assert!(LeadQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn only_present_params_are_sent() {
        let query = LeadQuery {
            source: Some(Source::Website),
            offset: Some(10),
            limit: Some(5),
            ..LeadQuery::default()
        };
        let pairs = query.to_pairs();
        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains(&("source", "Website".to_string())));
        assert!(pairs.contains(&("offset", "10".to_string())));
        assert!(pairs.contains(&("limit", "5".to_string())));
    }

    #[test]
    fn enum_params_use_wire_strings() {
        let query = LeadQuery {
            source: Some(Source::ColdCall),
            interest: Some(Interest::High),
            status: Some(Status::New),
            ..LeadQuery::default()
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("source", "Cold Call".to_string())));
        assert!(pairs.contains(&("interest", "High".to_string())));
        assert!(pairs.contains(&("status", "New".to_string())));
    }
}
