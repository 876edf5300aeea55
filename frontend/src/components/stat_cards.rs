use num_format::{Locale, ToFormattedString};
use yew::prelude::*;

/// Summary strip above the table. The total comes from the server count
/// across all pages; the other three are counted over the rows currently
/// showing.
#[derive(Properties, PartialEq, Clone)]
pub struct StatCardsProps {
    pub total: u64,
    pub new_count: usize,
    pub qualified_count: usize,
    pub high_interest_count: usize,
}

pub struct StatCards;

impl Component for StatCards {
    type Message = ();
    type Properties = StatCardsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StatCards
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="stat-cards">
                { card("Total leads", props.total.to_formatted_string(&Locale::en)) }
                { card("New (this page)", props.new_count.to_string()) }
                { card("Qualified (this page)", props.qualified_count.to_string()) }
                { card("High interest (this page)", props.high_interest_count.to_string()) }
            </div>
        }
    }
}

fn card(label: &'static str, value: String) -> Html {
    html! {
        <div class="stat-card">
            <span class="stat-value">{ value }</span>
            <span class="stat-label">{ label }</span>
        </div>
    }
}
