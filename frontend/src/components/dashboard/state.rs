//! Dashboard state and the pure logic behind it.
//!
//! Everything that can be decided without touching the network or the DOM
//! lives here as plain methods: mapping filters onto API parameters,
//! applying the client-side search, pagination bounds, and the generation
//! checks that keep a slow response from overwriting newer state. `update`
//! only wires messages to these methods and spawns the actual requests.

use common::model::lead::{Interest, Lead, Source, Status};
use common::model::load::LoadResult;

use crate::api::leads::{LeadQuery, LeadsPage};
use crate::api::FetchError;

pub const PAGE_SIZE: u32 = 10;

/// Current filter selection. `search` is applied client-side against the
/// loaded page; the other three go to the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub search: String,
    pub source: Option<Source>,
    pub interest: Option<Interest>,
    pub status: Option<Status>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pager {
    pub offset: u32,
    pub limit: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Pager {
            offset: 0,
            limit: PAGE_SIZE,
        }
    }
}

/// Where the CSV import currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadStatus {
    Idle,
    Uploading,
    Done(LoadResult),
    Failed(String),
}

pub struct Dashboard {
    pub filters: Filters,
    pub pager: Pager,
    /// The page as the server returned it.
    pub leads: Vec<Lead>,
    /// `leads` after the client-side search filter.
    pub visible: Vec<Lead>,
    /// Total matching leads across all pages (server count).
    pub total: u64,
    pub loading: bool,
    pub load_failed: bool,
    pub upload: UploadStatus,
    /// Generation of the newest scheduled fetch; responses carrying an
    /// older generation are discarded.
    pub(super) fetch_seq: u32,
    pub(super) upload_seq: u32,
}

impl Dashboard {
    pub fn new() -> Self {
        Dashboard {
            filters: Filters::default(),
            pager: Pager::default(),
            leads: Vec::new(),
            visible: Vec::new(),
            total: 0,
            // The component fetches on mount; start in the loading state
            // so the first paint does not flash "no leads".
            loading: true,
            load_failed: false,
            upload: UploadStatus::Idle,
            fetch_seq: 0,
            upload_seq: 0,
        }
    }

    /// Maps the current filters and pager onto API parameter names.
    /// (`interest_level` on the view side is `interest` on the wire.)
    pub fn query(&self) -> LeadQuery {
        LeadQuery {
            source: self.filters.source,
            interest: self.filters.interest,
            status: self.filters.status,
            offset: Some(self.pager.offset),
            limit: Some(self.pager.limit),
        }
    }

    /// Search only narrows the already-loaded page; no fetch involved.
    pub fn set_search(&mut self, term: String) {
        self.filters.search = term;
        self.refilter();
    }

    pub fn set_source(&mut self, source: Option<Source>) {
        self.filters.source = source;
        self.pager.offset = 0;
    }

    pub fn set_interest(&mut self, interest: Option<Interest>) {
        self.filters.interest = interest;
        self.pager.offset = 0;
    }

    pub fn set_status(&mut self, status: Option<Status>) {
        self.filters.status = status;
        self.pager.offset = 0;
    }

    /// Moves one page back; `false` when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.pager.offset == 0 {
            return false;
        }
        self.pager.offset = self.pager.offset.saturating_sub(self.pager.limit);
        true
    }

    /// Moves one page forward; `false` when the last page is showing.
    pub fn next_page(&mut self) -> bool {
        if u64::from(self.pager.offset + self.pager.limit) >= self.total {
            return false;
        }
        self.pager.offset += self.pager.limit;
        true
    }

    /// Claims the next fetch generation and flags the page as loading.
    pub fn next_fetch(&mut self) -> u32 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// Applies a finished fetch. Stale generations are ignored outright.
    /// Errors degrade to an empty page with the failure banner raised —
    /// the fail-soft policy for the listing lives here.
    pub fn apply_fetch(&mut self, seq: u32, result: Result<LeadsPage, FetchError>) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.load_failed = false;
                self.leads = page.leads;
                self.total = page.total;
            }
            Err(_) => {
                self.load_failed = true;
                self.leads = Vec::new();
                self.total = 0;
            }
        }
        self.refilter();
        true
    }

    /// Gate for starting an upload. Returns the token to post with, or
    /// records why the upload cannot start (no session token, not a CSV)
    /// without any network call.
    pub fn begin_upload(&mut self, token: Option<&str>, filename: &str) -> Option<String> {
        if !filename.ends_with(".csv") {
            self.upload =
                UploadStatus::Failed("Invalid file type. Please upload a CSV file.".to_string());
            return None;
        }
        let Some(token) = token else {
            self.upload =
                UploadStatus::Failed("You must be signed in to import leads.".to_string());
            return None;
        };
        self.upload_seq += 1;
        self.upload = UploadStatus::Uploading;
        Some(token.to_string())
    }

    pub fn finish_upload(&mut self, seq: u32, result: Result<LoadResult, FetchError>) -> bool {
        if seq != self.upload_seq {
            return false;
        }
        self.upload = match result {
            Ok(summary) => UploadStatus::Done(summary),
            Err(err) => UploadStatus::Failed(err.to_string()),
        };
        true
    }

    pub fn clear_upload_status(&mut self, seq: u32) -> bool {
        if seq != self.upload_seq || self.upload == UploadStatus::Uploading {
            return false;
        }
        self.upload = UploadStatus::Idle;
        true
    }

    pub fn status_count(&self, status: Status) -> usize {
        self.visible.iter().filter(|l| l.status == status).count()
    }

    pub fn high_interest_count(&self) -> usize {
        self.visible
            .iter()
            .filter(|l| l.interest_level == Interest::High)
            .count()
    }

    fn refilter(&mut self) {
        let needle = self.filters.search.trim().to_lowercase();
        self.visible = if needle.is_empty() {
            self.leads.clone()
        } else {
            self.leads
                .iter()
                .filter(|lead| matches_search(lead, &needle))
                .cloned()
                .collect()
        };
    }
}

/// Case-insensitive substring match over id, name and contact info.
fn matches_search(lead: &Lead, needle_lower: &str) -> bool {
    lead.id.to_lowercase().contains(needle_lower)
        || lead.name.to_lowercase().contains(needle_lower)
        || lead.contact_info.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: &str, name: &str, contact: &str) -> Lead {
        Lead {
            id: id.to_string(),
            name: name.to_string(),
            contact_info: contact.to_string(),
            source: Source::Website,
            interest_level: Interest::Medium,
            status: Status::New,
            assigned_salesperson: "Bob".to_string(),
            salesperson_id: Some(1),
        }
    }

    fn loaded_dashboard() -> Dashboard {
        let mut dash = Dashboard::new();
        let seq = dash.next_fetch();
        dash.apply_fetch(
            seq,
            Ok(LeadsPage {
                leads: vec![
                    lead("1", "Ada Lovelace", "ada@calc.org"),
                    lead("2", "Grace Hopper", "grace@navy.mil"),
                ],
                total: 25,
            }),
        );
        dash
    }

    #[test]
    fn search_narrows_visible_but_not_leads() {
        let mut dash = loaded_dashboard();
        dash.set_search("GRACE".to_string());
        assert_eq!(dash.visible.len(), 1);
        assert_eq!(dash.visible[0].id, "2");
        assert_eq!(dash.leads.len(), 2);
    }

    #[test]
    fn search_matches_id_and_contact_too() {
        let mut dash = loaded_dashboard();
        dash.set_search("navy".to_string());
        assert_eq!(dash.visible.len(), 1);
        dash.set_search("1".to_string());
        assert_eq!(dash.visible.len(), 1);
        assert_eq!(dash.visible[0].id, "1");
    }

    #[test]
    fn search_with_no_match_empties_visible_only() {
        let mut dash = loaded_dashboard();
        dash.set_search("zzz".to_string());
        assert!(dash.visible.is_empty());
        assert_eq!(dash.leads.len(), 2);
    }

    #[test]
    fn server_filters_reset_offset_search_does_not() {
        let mut dash = loaded_dashboard();
        dash.pager.offset = 20;
        dash.set_search("ada".to_string());
        assert_eq!(dash.pager.offset, 20);
        dash.set_source(Some(Source::Referral));
        assert_eq!(dash.pager.offset, 0);

        dash.pager.offset = 20;
        dash.set_interest(Some(Interest::High));
        assert_eq!(dash.pager.offset, 0);

        dash.pager.offset = 20;
        dash.set_status(None);
        assert_eq!(dash.pager.offset, 0);
    }

    #[test]
    fn failed_fetch_degrades_to_empty_page() {
        let mut dash = loaded_dashboard();
        let seq = dash.next_fetch();
        let changed = dash.apply_fetch(seq, Err(FetchError::Network("offline".to_string())));
        assert!(changed);
        assert!(dash.load_failed);
        assert!(dash.leads.is_empty());
        assert!(dash.visible.is_empty());
        assert_eq!(dash.total, 0);
        assert!(!dash.loading);
    }

    #[test]
    fn stale_fetch_response_is_discarded() {
        let mut dash = Dashboard::new();
        let old = dash.next_fetch();
        let new = dash.next_fetch();
        assert!(new > old);

        // The newer request resolves first.
        dash.apply_fetch(
            new,
            Ok(LeadsPage {
                leads: vec![lead("9", "Newest", "new@x.com")],
                total: 1,
            }),
        );
        // The superseded one limps in afterwards and must change nothing.
        let changed = dash.apply_fetch(
            old,
            Ok(LeadsPage {
                leads: vec![lead("1", "Stale", "old@x.com")],
                total: 99,
            }),
        );
        assert!(!changed);
        assert_eq!(dash.leads[0].id, "9");
        assert_eq!(dash.total, 1);
    }

    #[test]
    fn pagination_respects_bounds() {
        let mut dash = loaded_dashboard();
        assert!(!dash.prev_page());
        assert!(dash.next_page());
        assert_eq!(dash.pager.offset, PAGE_SIZE);
        assert!(dash.prev_page());
        assert_eq!(dash.pager.offset, 0);

        dash.pager.offset = 20;
        // 25 total, page of 10 starting at 20 is the last one.
        assert!(!dash.next_page());
    }

    #[test]
    fn upload_without_token_is_rejected_locally() {
        let mut dash = Dashboard::new();
        assert_eq!(dash.begin_upload(None, "leads.csv"), None);
        assert!(matches!(dash.upload, UploadStatus::Failed(_)));
    }

    #[test]
    fn upload_rejects_non_csv_before_token_check() {
        let mut dash = Dashboard::new();
        assert_eq!(dash.begin_upload(Some("tok"), "leads.xlsx"), None);
        match &dash.upload {
            UploadStatus::Failed(message) => assert!(message.contains("CSV")),
            other => panic!("unexpected upload status: {:?}", other),
        }
    }

    #[test]
    fn upload_with_token_yields_it_and_marks_uploading() {
        let mut dash = Dashboard::new();
        let token = dash.begin_upload(Some("tok"), "leads.csv");
        assert_eq!(token.as_deref(), Some("tok"));
        assert_eq!(dash.upload, UploadStatus::Uploading);
    }

    #[test]
    fn stale_upload_notice_cannot_clear_newer_upload() {
        let mut dash = Dashboard::new();
        dash.begin_upload(Some("tok"), "a.csv");
        let first = dash.upload_seq;
        dash.finish_upload(
            first,
            Ok(LoadResult {
                filename: "a.csv".to_string(),
                rows_processed: 1,
                rows_imported: 1,
                rows_updated: 0,
                duplicates_found: 0,
                errors: vec![],
            }),
        );
        // A second import starts before the first notice expires.
        dash.begin_upload(Some("tok"), "b.csv");
        assert!(!dash.clear_upload_status(first));
        assert_eq!(dash.upload, UploadStatus::Uploading);
    }
}
