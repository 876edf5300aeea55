//! CSV import button: a visible button fronting a hidden file input. The
//! chosen `File` is handed up untouched; the dashboard decides whether it
//! may be posted (session token, extension) and tracks the outcome.

use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CsvUploadProps {
    pub on_file: Callback<File>,
    pub busy: bool,
}

pub enum Msg {
    OpenPicker,
    Picked(File),
}

pub struct CsvUpload {
    input_ref: NodeRef,
}

impl Component for CsvUpload {
    type Message = Msg;
    type Properties = CsvUploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CsvUpload {
            input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenPicker => {
                if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
                false
            }
            Msg::Picked(file) => {
                ctx.props().on_file.emit(file);
                // Reset so picking the same file again re-fires onchange.
                if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <>
                <input
                    ref={self.input_ref.clone()}
                    type="file"
                    accept=".csv"
                    style="display: none;"
                    onchange={link.batch_callback(|e: Event| {
                        let input = e.target_unchecked_into::<HtmlInputElement>();
                        input.files().and_then(|files| files.get(0)).map(Msg::Picked)
                    })}
                />
                <button
                    class="upload-btn"
                    disabled={ctx.props().busy}
                    onclick={link.callback(|_| Msg::OpenPicker)}
                >
                    { if ctx.props().busy { "Importing…" } else { "Import CSV" } }
                </button>
            </>
        }
    }
}
