//! View rendering for the dashboard: header with the import button, stat
//! cards, filter bar, the leads grid and pagination. Purely a projection
//! of `state`; every interaction goes back through `Msg`.

use yew::html::Scope;
use yew::prelude::*;

use common::model::lead::Status;

use crate::components::filter_bar::FilterBar;
use crate::components::leads_table::LeadsTable;
use crate::components::pagination::Pagination;
use crate::components::stat_cards::StatCards;
use crate::components::upload::CsvUpload;

use super::messages::Msg;
use super::state::{Dashboard, UploadStatus};

pub fn view(dashboard: &Dashboard, ctx: &Context<Dashboard>) -> Html {
    let link = ctx.link();

    html! {
        <div class="dashboard">
            { build_header(dashboard, ctx) }
            { build_upload_notice(dashboard, link) }
            <StatCards
                total={dashboard.total}
                new_count={dashboard.status_count(Status::New)}
                qualified_count={dashboard.status_count(Status::Qualified)}
                high_interest_count={dashboard.high_interest_count()}
            />
            <FilterBar
                filters={dashboard.filters.clone()}
                on_search={link.callback(Msg::SearchChanged)}
                on_source={link.callback(Msg::SourceChanged)}
                on_interest={link.callback(Msg::InterestChanged)}
                on_status={link.callback(Msg::StatusChanged)}
            />
            {
                if dashboard.load_failed {
                    html! { <div class="banner banner-error">{"Failed to load leads."}</div> }
                } else {
                    html! {}
                }
            }
            <LeadsTable leads={dashboard.visible.clone()} loading={dashboard.loading} />
            <Pagination
                offset={dashboard.pager.offset}
                limit={dashboard.pager.limit}
                total={dashboard.total}
                on_prev={link.callback(|_| Msg::PrevPage)}
                on_next={link.callback(|_| Msg::NextPage)}
            />
        </div>
    }
}

fn build_header(dashboard: &Dashboard, ctx: &Context<Dashboard>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let uploading = dashboard.upload == UploadStatus::Uploading;

    html! {
        <header class="dashboard-header">
            <h1>{"Glimpse"}</h1>
            <div class="header-actions">
                <CsvUpload on_file={link.callback(Msg::FileChosen)} busy={uploading} />
                <span class="user-email">{ props.user_email.clone() }</span>
                <button class="logout-btn" onclick={props.on_logout.reform(|_: MouseEvent| ())}>
                    {"Sign out"}
                </button>
            </div>
        </header>
    }
}

/// The import status strip under the header: progress, a full summary of
/// the finished import, or the reason it never started.
fn build_upload_notice(dashboard: &Dashboard, link: &Scope<Dashboard>) -> Html {
    match &dashboard.upload {
        UploadStatus::Idle => html! {},
        UploadStatus::Uploading => html! {
            <div class="banner banner-info">{"Importing leads…"}</div>
        },
        UploadStatus::Failed(message) => html! {
            <div class="banner banner-error">
                { message.clone() }
                <button class="banner-dismiss" onclick={link.callback(|_| Msg::DismissUploadStatus)}>
                    {"✕"}
                </button>
            </div>
        },
        UploadStatus::Done(summary) => html! {
            <div class="banner banner-success">
                <strong>{ format!("Imported {}", summary.filename) }</strong>
                <span>
                    { format!(
                        "{} rows processed, {} imported, {} updated, {} duplicates",
                        summary.rows_processed,
                        summary.rows_imported,
                        summary.rows_updated,
                        summary.duplicates_found,
                    ) }
                </span>
                {
                    if summary.errors.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <ul class="import-errors">
                                { for summary.errors.iter().map(|e| html! { <li>{ e.clone() }</li> }) }
                            </ul>
                        }
                    }
                }
                <button class="banner-dismiss" onclick={link.callback(|_| Msg::DismissUploadStatus)}>
                    {"✕"}
                </button>
            </div>
        },
    }
}
