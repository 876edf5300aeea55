//! Leads dashboard: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and messages.
//!
//! The component fetches its first page on mount and re-fetches whenever a
//! server-side filter, the page, or the session token changes. The
//! client-side search never triggers a request.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::{Dashboard, Filters, Pager, UploadStatus, PAGE_SIZE};

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    /// Session token; the import action refuses to run without one.
    pub token: Option<String>,
    pub user_email: String,
    pub on_logout: Callback<()>,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Dashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().token != old_props.token {
            update::refetch(self, ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::refetch(self, ctx);
        }
    }
}
