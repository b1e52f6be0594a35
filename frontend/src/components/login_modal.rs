use super::super::{Model, Msg};
use yew::prelude::*;

/// Email/password modal. Submission runs the credential verifier; a rejection
/// is rendered inline instead of closing the modal.
pub fn render_login_modal(model: &Model, ctx: &Context<Model>) -> Html {
    if !model.show_login {
        return html! {};
    }

    let link = ctx.link();

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <div class="modal-icon"><i class="fa-solid fa-stethoscope"></i></div>
                    <h2>{"Welcome Back"}</h2>
                    <p>{"Sign in to access PneumoAI"}</p>
                </div>

                <form onsubmit={link.callback(Msg::SubmitLogin)}>
                    <input name="email" type="email" placeholder="Email address" required=true />
                    <input name="password" type="password" placeholder="Password" required=true />
                    {
                        if let Some(message) = &model.login_error {
                            html! {
                                <p class="login-error">
                                    <i class="fa-solid fa-circle-exclamation"></i>
                                    { format!(" {message}") }
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <button type="submit" class="primary-btn full-width">{"Sign In"}</button>
                </form>

                <button class="cancel-btn" onclick={link.callback(|_| Msg::ShowLogin(false))}>
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
