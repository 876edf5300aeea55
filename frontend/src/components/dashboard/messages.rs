use common::model::lead::{Interest, Source, Status};
use common::model::load::LoadResult;

use crate::api::leads::LeadsPage;
use crate::api::FetchError;

pub enum Msg {
    SearchChanged(String),
    SourceChanged(Option<Source>),
    InterestChanged(Option<Interest>),
    StatusChanged(Option<Status>),
    PrevPage,
    NextPage,
    LeadsLoaded {
        seq: u32,
        result: Result<LeadsPage, FetchError>,
    },
    FileChosen(web_sys::File),
    UploadFinished {
        seq: u32,
        result: Result<LoadResult, FetchError>,
    },
    UploadNoticeExpired(u32),
    DismissUploadStatus,
}
