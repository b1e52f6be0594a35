use super::super::{Model, Msg};
use shared::Session;
use yew::prelude::*;

/// Dashboard navigation bar: product mark, who is signed in, and sign-out.
pub fn render_nav(session: &Session, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <nav class="navbar">
            <div class="brand">
                <div class="brand-mark"><i class="fa-solid fa-brain"></i></div>
                <span class="brand-name">{"PneumoAI"}</span>
            </div>
            <div class="nav-user">
                <span class="user-name" title={session.email.clone()}>
                    <i class="fa-solid fa-user"></i>
                    { format!(" {}", session.name) }
                </span>
                <button class="logout-btn" onclick={link.callback(|_| Msg::Logout)} title="Sign out">
                    <i class="fa-solid fa-right-from-bracket"></i>{" Sign Out"}
                </button>
            </div>
        </nav>
    }
}
