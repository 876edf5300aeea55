//! Root component: owns the `Session`, runs the mount-time token
//! verification, and routes between the login form and the dashboard.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::auth::Verification;

use crate::api::{self, token_store};
use crate::components::dashboard::Dashboard;
use crate::components::login::LoginForm;
use crate::session::{Session, SessionState};

pub enum Msg {
    /// Mount-time verification finished; `Some((token, email))` when the
    /// stored token checked out.
    Hydrated(Option<(String, String)>),
    LoginSubmitted((String, String)),
    LoginSucceeded { token: String, email: String },
    LoginFailed(String),
    LoggedOut,
}

pub struct App {
    session: Session,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            session: Session::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Hydrated(outcome) => {
                // A login finishing before hydration is tolerated: last
                // write to the session wins.
                self.session.hydrated(outcome);
                true
            }
            Msg::LoginSubmitted((email, password)) => {
                self.session.begin_login();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::auth::login(&email, &password).await {
                        Ok(token) => link.send_message(Msg::LoginSucceeded { token, email }),
                        Err(err) => link.send_message(Msg::LoginFailed(err.to_string())),
                    }
                });
                true
            }
            Msg::LoginSucceeded { token, email } => {
                self.session.login_succeeded(token, email);
                true
            }
            Msg::LoginFailed(message) => {
                self.session.login_failed(message);
                true
            }
            Msg::LoggedOut => {
                api::auth::logout();
                self.session.logged_out();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.session.state {
            SessionState::Initializing => html! {
                <div class="boot-screen">{"Loading…"}</div>
            },
            SessionState::Unauthenticated => html! {
                <LoginForm
                    on_submit={ctx.link().callback(Msg::LoginSubmitted)}
                    loading={self.session.loading}
                    error={self.session.error.clone()}
                />
            },
            SessionState::Authenticated { email } => html! {
                <Dashboard
                    token={self.session.token.clone()}
                    user_email={email.clone()}
                    on_logout={ctx.link().callback(|_| Msg::LoggedOut)}
                />
            },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let Some(token) = token_store::get() else {
                    link.send_message(Msg::Hydrated(None));
                    return;
                };
                match api::auth::verify_token(&token).await {
                    Ok(Verification {
                        valid: true,
                        email: Some(email),
                    }) => {
                        link.send_message(Msg::Hydrated(Some((token, email))));
                    }
                    Ok(_) => {
                        // Expired or tampered token: silent logout.
                        token_store::clear();
                        link.send_message(Msg::Hydrated(None));
                    }
                    Err(err) => {
                        gloo_console::warn!("token verification failed", err.to_string());
                        token_store::clear();
                        link.send_message(Msg::Hydrated(None));
                    }
                }
            });
        }
    }
}
