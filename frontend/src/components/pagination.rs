use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PaginationProps {
    pub offset: u32,
    pub limit: u32,
    pub total: u64,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

pub struct Pagination;

impl Component for Pagination {
    type Message = ();
    type Properties = PaginationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Pagination
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let at_start = props.offset == 0;
        let at_end = u64::from(props.offset + props.limit) >= props.total;

        let range = if props.total == 0 {
            "No leads".to_string()
        } else {
            let first = u64::from(props.offset) + 1;
            let last = u64::from(props.offset + props.limit).min(props.total);
            format!("{}–{} of {}", first, last, props.total)
        };

        html! {
            <div class="pagination">
                <button
                    disabled={at_start}
                    onclick={props.on_prev.reform(|_: MouseEvent| ())}
                >
                    {"Previous"}
                </button>
                <span class="page-range">{ range }</span>
                <button
                    disabled={at_end}
                    onclick={props.on_next.reform(|_: MouseEvent| ())}
                >
                    {"Next"}
                </button>
            </div>
        }
    }
}
