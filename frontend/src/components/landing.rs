use super::super::{Model, Msg};
use yew::prelude::*;

/// Marketing page shown while nobody is signed in. Static apart from the
/// sign-in triggers.
pub fn render_landing(ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <>
            <nav class="landing-nav">
                <div class="brand">
                    <div class="brand-mark"><i class="fa-solid fa-brain"></i></div>
                    <span class="brand-name">{"PneumoAI"}</span>
                </div>
                <button class="primary-btn" onclick={link.callback(|_| Msg::ShowLogin(true))}>
                    <i class="fa-solid fa-right-to-bracket"></i>{" Sign In"}
                </button>
            </nav>

            <div class="hero">
                <div class="hero-badge">
                    <i class="fa-solid fa-shield-halved"></i>
                    <span>{"FDA-Grade AI Technology"}</span>
                </div>
                <h1>
                    {"AI-Powered"}
                    <span class="hero-accent">{"Pneumonia Detection"}</span>
                </h1>
                <p class="hero-copy">
                    {"Revolutionary artificial intelligence platform that analyzes chest X-rays \
                      with unprecedented accuracy, helping healthcare professionals detect \
                      pneumonia faster and more reliably than ever before."}
                </p>

                <div class="hero-actions">
                    <button class="primary-btn large" onclick={link.callback(|_| Msg::ShowLogin(true))}>
                        {"Start Analysis"}
                    </button>
                    <button class="ghost-btn large">{"Learn More"}</button>
                </div>

                <div class="stats-grid">
                    { render_stat("98.7%", "Detection Accuracy") }
                    { render_stat("2.3s", "Average Analysis Time") }
                    { render_stat("50K+", "X-rays Analyzed") }
                </div>
            </div>

            <div class="landing-glow landing-glow-top"></div>
            <div class="landing-glow landing-glow-bottom"></div>
        </>
    }
}

fn render_stat(value: &'static str, label: &'static str) -> Html {
    html! {
        <div class="stat-card">
            <div class="stat-value">{ value }</div>
            <div class="stat-label">{ label }</div>
        </div>
    }
}
