mod components;

use components::handlers;
use components::landing::render_landing;
use components::login_modal::render_login_modal;
use components::nav::render_nav;
use components::results::render_results;
use components::upload_section::render_upload_section;
use components::utils::render_error_message;
use gloo_file::FileReadError;
use gloo_file::callbacks::FileReader;
use shared::{Outcome, RequestId, Session, Workflow};
use web_sys::{DragEvent, Event, SubmitEvent};
use yew::prelude::*;

/// Self-contained displayable encoding of the uploaded X-ray plus its source
/// file name. Nothing else survives of the original file.
#[derive(Clone, PartialEq)]
pub struct StoredImage {
    pub name: String,
    pub data_url: String,
}

pub enum Msg {
    // Auth
    ShowLogin(bool),
    SubmitLogin(SubmitEvent),
    Logout,

    // Image intake
    FileSelected(Event),
    HandleDrop(DragEvent),
    SetDragging(bool),
    ImageRead(String, Result<String, FileReadError>),
    RemoveImage,

    // Analysis
    Analyze,
    AnalysisDone(RequestId, Outcome),
}

pub struct Model {
    pub session: Option<Session>,
    pub show_login: bool,
    pub login_error: Option<String>,
    pub workflow: Workflow<StoredImage>,
    pub is_dragging: bool,
    pub error: Option<String>,
    /// Keeps the in-progress file read alive; dropping it aborts the read.
    pub pending_read: Option<FileReader>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: None,
            show_login: false,
            login_error: None,
            workflow: Workflow::new(),
            is_dragging: false,
            error: None,
            pending_read: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Auth
            Msg::ShowLogin(show) => {
                self.show_login = show;
                if !show {
                    self.login_error = None;
                }
                true
            }
            Msg::SubmitLogin(event) => handlers::handle_submit_login(self, event),
            Msg::Logout => handlers::handle_logout(self),

            // Image intake
            Msg::FileSelected(event) => handlers::handle_file_selected(self, ctx, event),
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::SetDragging(dragging) => {
                self.is_dragging = dragging;
                true
            }
            Msg::ImageRead(name, data) => handlers::handle_image_read(self, name, data),
            Msg::RemoveImage => handlers::handle_remove_image(self),

            // Analysis
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::AnalysisDone(request, outcome) => {
                handlers::handle_analysis_done(self, request, outcome)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.session {
            None => html! {
                <div class="landing">
                    { render_landing(ctx) }
                    { render_login_modal(self, ctx) }
                </div>
            },
            Some(session) => html! {
                <div class="app">
                    { render_nav(session, ctx) }
                    <main class="dashboard">
                        <div class="dashboard-intro">
                            <h1>{"Pneumonia Detection Dashboard"}</h1>
                            <p>{"Upload a chest X-ray for AI-powered pneumonia analysis"}</p>
                        </div>
                        { render_error_message(self) }
                        <div class="dashboard-grid">
                            { render_upload_section(self, ctx) }
                            { render_results(self) }
                        </div>
                    </main>
                </div>
            },
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("PneumoAI demo starting...");
    yew::Renderer::<Model>::new().render();
}
