use super::super::{Model, Msg, StoredImage};
use gloo_file::File as GlooFile;
use gloo_file::FileReadError;
use gloo_file::callbacks::read_as_data_url;
use gloo_timers::callback::Timeout;
use shared::classify::ANALYSIS_DELAY_MS;
use shared::{Classifier, CredentialVerifier, DemoVerifier, Outcome, RequestId, SimulatedClassifier};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, FormData, HtmlFormElement, HtmlInputElement, SubmitEvent};
use yew::prelude::*;

pub fn handle_submit_login(model: &mut Model, event: SubmitEvent) -> bool {
    event.prevent_default();

    let Some(form) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
    else {
        return false;
    };
    let Ok(fields) = FormData::new_with_form(&form) else {
        return false;
    };
    let email = fields.get("email").as_string().unwrap_or_default();
    let password = fields.get("password").as_string().unwrap_or_default();

    match DemoVerifier.verify(&email, &password) {
        Ok(session) => {
            log::info!("signed in as {}", session.email);
            model.session = Some(session);
            model.show_login = false;
            model.login_error = None;
        }
        Err(e) => {
            model.login_error = Some(e.to_string());
        }
    }
    true
}

/// Signing out cascades: session, image, result, and any pending read or
/// in-flight analysis all go.
pub fn handle_logout(model: &mut Model) -> bool {
    model.session = None;
    model.workflow.reset();
    model.pending_read = None;
    model.error = None;
    model.login_error = None;
    model.show_login = false;
    model.is_dragging = false;
    true
}

pub fn handle_file_selected(model: &mut Model, ctx: &Context<Model>, event: Event) -> bool {
    let input: HtmlInputElement = event.target_unchecked_into();
    let file = input.files().and_then(|list| list.item(0));
    input.set_value("");

    match file {
        Some(file) => intake_image(model, ctx, file),
        None => false,
    }
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file) = event
        .data_transfer()
        .and_then(|transfer| transfer.files())
        .and_then(|list| list.item(0))
    {
        intake_image(model, ctx, file);
    }
    true
}

/// Both intake paths (file picker and drop) converge here. Only the first
/// entry matters: the dashboard holds one X-ray at a time.
fn intake_image(model: &mut Model, ctx: &Context<Model>, file: web_sys::File) -> bool {
    if !file.type_().starts_with("image/") {
        log::warn!("rejecting non-image file: {} ({})", file.name(), file.type_());
        model.error = Some(format!("\"{}\" is not an image file.", file.name()));
        return true;
    }

    model.error = None;
    let name = file.name();
    let link = ctx.link().clone();
    let file = GlooFile::from(file);

    // Replacing pending_read aborts a previous read still in progress.
    model.pending_read = Some(read_as_data_url(&file, move |data| {
        link.send_message(Msg::ImageRead(name, data));
    }));
    true
}

pub fn handle_image_read(
    model: &mut Model,
    name: String,
    data: Result<String, FileReadError>,
) -> bool {
    model.pending_read = None;
    match data {
        Ok(data_url) => {
            model.workflow.accept_image(StoredImage { name, data_url });
            model.error = None;
        }
        Err(e) => {
            log::warn!("failed to read {name}: {e}");
            model.error = Some(format!("Could not read \"{name}\": {e}"));
        }
    }
    true
}

pub fn handle_remove_image(model: &mut Model) -> bool {
    model.workflow.remove_image();
    model.error = None;
    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(image) = model.workflow.image().cloned() else {
        return false;
    };
    let Some(request) = model.workflow.begin_analysis() else {
        // Single-flight: the control is disabled while analyzing, but a
        // stray trigger still lands here and is ignored.
        return false;
    };

    model.error = None;
    let link = ctx.link().clone();
    Timeout::new(ANALYSIS_DELAY_MS, move || {
        let mut classifier = SimulatedClassifier::new(js_sys::Math::random);
        let outcome = classifier.predict(&image);
        link.send_message(Msg::AnalysisDone(request, outcome));
    })
    .forget();
    true
}

pub fn handle_analysis_done(model: &mut Model, request: RequestId, outcome: Outcome) -> bool {
    let completed_at = String::from(js_sys::Date::new_0().to_iso_string());
    let result = outcome.into_result(completed_at);

    if !model.workflow.complete_analysis(request, result.clone()) {
        log::debug!("discarding stale analysis completion ({request})");
        return false;
    }

    if let Ok(json) = serde_json::to_string(&result) {
        log::info!("analysis complete: {json}");
    }
    true
}
