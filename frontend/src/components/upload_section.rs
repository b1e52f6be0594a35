use super::super::{Model, Msg, StoredImage};
use super::utils::debounce;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="panel upload-panel">
            <h2><i class="fa-solid fa-file-image"></i>{" X-ray Upload"}</h2>
            {
                match model.workflow.image() {
                    None => render_drop_zone(model, ctx),
                    Some(image) => render_preview(model, ctx, image),
                }
            }
        </div>
    }
}

fn render_drop_zone(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(Msg::FileSelected);
    let handle_drag_enter = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });
    let handle_drag_over = Callback::from(|e: DragEvent| e.prevent_default());
    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });
    let handle_drop = link.callback(Msg::HandleDrop);

    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"))
        {
            if let Ok(element) = input.dyn_into::<web_sys::HtmlElement>() {
                element.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("drop-zone", model.is_dragging.then_some("drag-over"))}
                ondragenter={handle_drag_enter}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <p>{"Drag and drop your X-ray image here, or click to browse"}</p>
                <span class="browse-btn">{"Choose File"}</span>
            </div>
        </>
    }
}

fn render_preview(model: &Model, ctx: &Context<Model>, image: &StoredImage) -> Html {
    let link = ctx.link().clone();
    let analyzing = model.workflow.is_analyzing();

    html! {
        <div class="preview">
            <div class="preview-frame">
                <img src={image.data_url.clone()} alt={image.name.clone()} />
                <button
                    class="remove-btn"
                    title="Remove this image"
                    onclick={link.callback(|_| Msg::RemoveImage)}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
            </div>

            <button
                class="analyze-btn"
                disabled={analyzing}
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.send_message(Msg::Analyze)
                })}
            >
                {
                    if analyzing {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-wave-square"></i>{" Analyze X-ray"}</> }
                    }
                }
            </button>
        </div>
    }
}
