//! Login form. Owns only the two input fields; the actual round-trip and
//! the resulting session live in the root component, which hands outcome
//! flags back down through the props.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginFormProps {
    pub on_submit: Callback<(String, String)>,
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
}

pub struct LoginForm {
    email: String,
    password: String,
}

impl Component for LoginForm {
    type Message = Msg;
    type Properties = LoginFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LoginForm {
            email: String::new(),
            password: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(value) => {
                self.email = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                ctx.props()
                    .on_submit
                    .emit((self.email.clone(), self.password.clone()));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();

        html! {
            <div class="login-screen">
                <form
                    class="login-card"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <h1>{"Glimpse"}</h1>
                    {
                        match &props.error {
                            Some(message) => html! {
                                <div class="banner banner-error">{ message.clone() }</div>
                            },
                            None => html! {},
                        }
                    }
                    <label for="login-email">{"Email"}</label>
                    <input
                        id="login-email"
                        type="email"
                        value={self.email.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <label for="login-password">{"Password"}</label>
                    <input
                        id="login-password"
                        type="password"
                        value={self.password.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <button type="submit" disabled={props.loading}>
                        { if props.loading { "Signing in…" } else { "Sign in" } }
                    </button>
                </form>
            </div>
        }
    }
}
