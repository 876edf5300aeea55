use common::model::lead::Lead;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeadsTableProps {
    pub leads: Vec<Lead>,
    pub loading: bool,
}

pub struct LeadsTable;

impl Component for LeadsTable {
    type Message = ();
    type Properties = LeadsTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LeadsTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <table class="leads-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Name"}</th>
                        <th>{"Contact"}</th>
                        <th>{"Source"}</th>
                        <th>{"Interest"}</th>
                        <th>{"Status"}</th>
                        <th>{"Salesperson"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        if props.loading {
                            html! { <tr><td colspan="7" class="table-notice">{"Loading…"}</td></tr> }
                        } else if props.leads.is_empty() {
                            html! { <tr><td colspan="7" class="table-notice">{"No leads found."}</td></tr> }
                        } else {
                            props.leads.iter().map(row).collect::<Html>()
                        }
                    }
                </tbody>
            </table>
        }
    }
}

fn row(lead: &Lead) -> Html {
    html! {
        <tr key={lead.id.clone()}>
            <td>{ lead.id.clone() }</td>
            <td>{ lead.name.clone() }</td>
            <td>{ lead.contact_info.clone() }</td>
            <td>{ lead.source.as_str() }</td>
            <td>
                <span class={format!("badge badge-{}", lead.interest_level.as_str().to_lowercase())}>
                    { lead.interest_level.as_str() }
                </span>
            </td>
            <td>
                <span class={format!("badge badge-{}", lead.status.as_str().to_lowercase())}>
                    { lead.status.as_str() }
                </span>
            </td>
            <td>{ lead.assigned_salesperson.clone() }</td>
        </tr>
    }
}
