use gridle_core as game;
use web_sys::DragEvent;
use yew::prelude::*;

use crate::app::DragPayload;
use crate::app::grid::feedback_class;

#[derive(Properties, Clone, PartialEq)]
pub(in crate::app) struct PaletteProps {
    pub mode: game::Mode,
    #[prop_or_default]
    pub picked: Option<DragPayload>,
    /// Fired when a chip drag starts.
    pub onpick: Callback<DragPayload>,
    /// Fired when a chip is tapped; tapping the picked chip puts it back.
    pub ontap: Callback<DragPayload>,
    pub ondragend: Callback<()>,
}

#[function_component(PaletteView)]
pub(in crate::app) fn palette_view(props: &PaletteProps) -> Html {
    use game::Feedback::*;

    let values = props
        .mode
        .palette()
        .into_iter()
        .map(|symbol| chip(DragPayload::Value(symbol), props));
    let feedback = [Match, Present, Absent]
        .into_iter()
        .map(|feedback| chip(DragPayload::Feedback(feedback), props));

    let values_class = match props.mode {
        game::Mode::Mixed => classes!("chips", "values", "wide"),
        _ => classes!("chips", "values"),
    };

    html! {
        <>
            <h2>{ "Drag values:" }</h2>
            <div class={values_class}>{ for values }</div>
            <h2>{ "Drag feedback:" }</h2>
            <div class="chips feedback">{ for feedback }</div>
        </>
    }
}

fn chip(payload: DragPayload, props: &PaletteProps) -> Html {
    let label = match payload {
        DragPayload::Value(symbol) => symbol.to_string(),
        DragPayload::Feedback(feedback) => feedback.glyph().to_string(),
    };

    let mut class = classes!(
        "chip",
        match payload {
            DragPayload::Value(_) => classes!("value"),
            DragPayload::Feedback(feedback) => classes!("feedback", feedback_class(feedback)),
        }
    );
    if props.picked == Some(payload) {
        class.push("picked");
    }

    let ondragstart = {
        let onpick = props.onpick.clone();
        let label = label.clone();
        Callback::from(move |e: DragEvent| {
            // Firefox needs drag data for the drag to start at all
            if let Some(dt) = e.data_transfer() {
                let _ = dt.set_data("text/plain", &label);
                dt.set_effect_allowed("copy");
            }
            onpick.emit(payload);
        })
    };
    let onclick = {
        let ontap = props.ontap.clone();
        Callback::from(move |_: MouseEvent| ontap.emit(payload))
    };
    let ondragend = {
        let ondragend = props.ondragend.clone();
        Callback::from(move |_: DragEvent| ondragend.emit(()))
    };

    html! {
        <div {class} draggable="true" {ondragstart} {ondragend} {onclick}>{ label }</div>
    }
}
