//! Search box and the three server-side filter selects. The empty option
//! of each select maps to `None` (filter removed from the request), every
//! other option to the enum value carrying the same label.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use common::model::lead::{Interest, Source, Status};

use super::dashboard::Filters;

#[derive(Properties, PartialEq, Clone)]
pub struct FilterBarProps {
    pub filters: Filters,
    pub on_search: Callback<String>,
    pub on_source: Callback<Option<Source>>,
    pub on_interest: Callback<Option<Interest>>,
    pub on_status: Callback<Option<Status>>,
}

pub struct FilterBar;

impl Component for FilterBar {
    type Message = ();
    type Properties = FilterBarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FilterBar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let filters = &props.filters;

        let on_source = props.on_source.reform(|e: Event| {
            Source::from_label(&e.target_unchecked_into::<HtmlSelectElement>().value())
        });
        let on_interest = props.on_interest.reform(|e: Event| {
            Interest::from_label(&e.target_unchecked_into::<HtmlSelectElement>().value())
        });
        let on_status = props.on_status.reform(|e: Event| {
            Status::from_label(&e.target_unchecked_into::<HtmlSelectElement>().value())
        });

        html! {
            <div class="filter-bar">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search id, name or contact…"
                    value={filters.search.clone()}
                    oninput={props.on_search.reform(|e: InputEvent| {
                        e.target_unchecked_into::<HtmlInputElement>().value()
                    })}
                />
                <select onchange={on_source}>
                    <option value="" selected={filters.source.is_none()}>{"All sources"}</option>
                    { for Source::ALL.iter().map(|s| html! {
                        <option value={s.as_str()} selected={filters.source == Some(*s)}>
                            { s.as_str() }
                        </option>
                    }) }
                </select>
                <select onchange={on_interest}>
                    <option value="" selected={filters.interest.is_none()}>{"All interest levels"}</option>
                    { for Interest::ALL.iter().map(|i| html! {
                        <option value={i.as_str()} selected={filters.interest == Some(*i)}>
                            { i.as_str() }
                        </option>
                    }) }
                </select>
                <select onchange={on_status}>
                    <option value="" selected={filters.status.is_none()}>{"All statuses"}</option>
                    { for Status::ALL.iter().map(|s| html! {
                        <option value={s.as_str()} selected={filters.status == Some(*s)}>
                            { s.as_str() }
                        </option>
                    }) }
                </select>
            </div>
        }
    }
}
