//! Update function for the dashboard, Elm-style: receives the state and a
//! message, mutates, returns whether to re-render. All network work is
//! spawned from here; responses come back as messages carrying the
//! generation they belong to, and `state` decides whether they still
//! matter.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::leads::{self, LeadQuery};

use super::messages::Msg;
use super::state::{Dashboard, UploadStatus};

pub fn update(dashboard: &mut Dashboard, ctx: &Context<Dashboard>, msg: Msg) -> bool {
    match msg {
        Msg::SearchChanged(term) => {
            // Client-side only: narrows the loaded page, no request.
            dashboard.set_search(term);
            true
        }
        Msg::SourceChanged(source) => {
            dashboard.set_source(source);
            refetch(dashboard, ctx);
            true
        }
        Msg::InterestChanged(interest) => {
            dashboard.set_interest(interest);
            refetch(dashboard, ctx);
            true
        }
        Msg::StatusChanged(status) => {
            dashboard.set_status(status);
            refetch(dashboard, ctx);
            true
        }
        Msg::PrevPage => {
            if dashboard.prev_page() {
                refetch(dashboard, ctx);
            }
            true
        }
        Msg::NextPage => {
            if dashboard.next_page() {
                refetch(dashboard, ctx);
            }
            true
        }
        Msg::LeadsLoaded { seq, result } => {
            if let Err(err) = &result {
                gloo_console::error!("failed to fetch leads", err.to_string());
            }
            dashboard.apply_fetch(seq, result)
        }
        Msg::FileChosen(file) => {
            let token = ctx.props().token.as_deref();
            if let Some(token) = dashboard.begin_upload(token, &file.name()) {
                let seq = dashboard.upload_seq;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = leads::upload_leads_csv(file, &token).await;
                    link.send_message(Msg::UploadFinished { seq, result });
                });
            }
            true
        }
        Msg::UploadFinished { seq, result } => {
            if !dashboard.finish_upload(seq, result) {
                return false;
            }
            let (any_imported, clean) = match &dashboard.upload {
                UploadStatus::Done(summary) => {
                    (summary.rows_imported > 0, summary.errors.is_empty())
                }
                _ => (false, false),
            };
            if any_imported {
                // New rows exist server-side; reload the whole set,
                // ignoring whatever filters and page are showing.
                refetch_unfiltered(dashboard, ctx);
            }
            if clean {
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(6_000).await;
                    link.send_message(Msg::UploadNoticeExpired(seq));
                });
            }
            true
        }
        Msg::UploadNoticeExpired(seq) => dashboard.clear_upload_status(seq),
        Msg::DismissUploadStatus => {
            let seq = dashboard.upload_seq;
            dashboard.clear_upload_status(seq)
        }
    }
}

/// Schedules a fetch for the current filters and page. The claimed
/// generation travels with the response so a superseded request can never
/// overwrite newer state.
pub(super) fn refetch(dashboard: &mut Dashboard, ctx: &Context<Dashboard>) {
    let seq = dashboard.next_fetch();
    let query = dashboard.query();
    spawn(ctx, seq, query);
}

fn refetch_unfiltered(dashboard: &mut Dashboard, ctx: &Context<Dashboard>) {
    let seq = dashboard.next_fetch();
    spawn(ctx, seq, LeadQuery::default());
}

fn spawn(ctx: &Context<Dashboard>, seq: u32, query: LeadQuery) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = leads::fetch_leads(&query).await;
        link.send_message(Msg::LeadsLoaded { seq, result });
    });
}
