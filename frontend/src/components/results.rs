use super::super::Model;
use shared::{AnalysisResult, Prediction};
use wasm_bindgen::JsValue;
use yew::prelude::*;

/// Results panel with three mutually exclusive states: idle (nothing to
/// show), busy (analysis in flight), and the rendered result card.
pub fn render_results(model: &Model) -> Html {
    html! {
        <div class="panel results-panel">
            <h2><i class="fa-solid fa-brain"></i>{" Analysis Results"}</h2>
            {
                if model.workflow.is_analyzing() {
                    render_busy()
                } else if let Some(result) = model.workflow.result() {
                    render_result(result)
                } else {
                    render_idle()
                }
            }
        </div>
    }
}

fn render_idle() -> Html {
    html! {
        <div class="results-placeholder">
            <i class="fa-solid fa-wave-square"></i>
            <p>{"Upload an X-ray to see AI analysis results"}</p>
        </div>
    }
}

fn render_busy() -> Html {
    html! {
        <div class="results-busy">
            <div class="busy-pulse"><i class="fa-solid fa-brain"></i></div>
            <p class="busy-headline">{"AI is analyzing your X-ray..."}</p>
            <p class="busy-note">{"This may take a few seconds"}</p>
        </div>
    }
}

fn render_result(result: &AnalysisResult) -> Html {
    let positive = result.prediction.is_positive();

    html! {
        <div class="result-details">
            <div class={classes!("verdict", if positive { "verdict-positive" } else { "verdict-negative" })}>
                {
                    if positive {
                        html! { <i class="fa-solid fa-triangle-exclamation"></i> }
                    } else {
                        html! { <i class="fa-solid fa-circle-check"></i> }
                    }
                }
                <div>
                    <h3>{ result.prediction.to_string() }</h3>
                    <p>{ format!("Confidence: {:.1}%", result.confidence * 100.0) }</p>
                </div>
            </div>

            <div class="detailed-results">
                <h4>{"Detailed Analysis"}</h4>
                { render_probability_bar("Normal", result.normal_probability, "bar-normal") }
                { render_probability_bar("Pneumonia", result.pneumonia_probability, "bar-pneumonia") }
            </div>

            <div class="result-footer">
                <p>{ format!("Analysis completed: {}", format_timestamp(&result.completed_at)) }</p>
                <p>
                    <strong>{"Disclaimer:"}</strong>
                    {" This is a demonstration. Always consult healthcare professionals for medical diagnosis."}
                </p>
            </div>
        </div>
    }
}

fn render_probability_bar(label: &'static str, probability: f64, bar_class: &'static str) -> Html {
    let percentage = probability * 100.0;

    html! {
        <div class="result-item">
            <div class="result-row">
                <span class="result-label">{ label }</span>
                <span class="result-value">{ format!("{percentage:.1}%") }</span>
            </div>
            <div class="result-bar-container">
                <div class={classes!("result-bar", bar_class)} style={format!("width: {percentage}%")}></div>
            </div>
        </div>
    }
}

fn format_timestamp(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    String::from(date.to_locale_string("en-US", &JsValue::UNDEFINED))
}
