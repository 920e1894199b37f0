use gridle_core as game;
use web_sys::DragEvent;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum CellMsg {
    Drop { row: game::Row, col: game::Col },
    Click { row: game::Row, col: game::Col },
}

#[derive(Properties, Clone, PartialEq)]
pub(in crate::app) struct CellProps {
    pub row: game::Row,
    pub col: game::Col,
    pub cell: game::Cell,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub winner: bool,
    pub callback: Callback<CellMsg>,
}

#[function_component(CellView)]
pub(in crate::app) fn cell_view(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        cell,
        active,
        winner,
        callback,
    } = props.clone();

    let mut class = classes!("cell");
    if active {
        class.push("active");
    }
    if winner {
        class.push("winner");
    }

    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());
    let ondrop = {
        let callback = callback.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            callback.emit(CellMsg::Drop { row, col });
        })
    };
    let onclick = Callback::from(move |_: MouseEvent| callback.emit(CellMsg::Click { row, col }));

    html! {
        <td {class} {ondragover} {ondrop} {onclick} title="Click to clear">
            if let Some(value) = cell.value {
                <span class="value">{ value.to_string() }</span>
            }
            if let Some(feedback) = cell.feedback {
                <span class={classes!("badge", feedback_class(feedback))}>
                    { feedback.glyph().to_string() }
                </span>
            }
        </td>
    }
}

pub(in crate::app) const fn feedback_class(feedback: game::Feedback) -> &'static str {
    use game::Feedback::*;
    match feedback {
        Match => "match",
        Present => "present",
        Absent => "absent",
    }
}
