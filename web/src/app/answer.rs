use gridle_core as game;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(in crate::app) struct AnswerProps {
    #[prop_or_default]
    pub open: bool,
    pub config: game::GameConfig,
    pub value: String,
    pub oninput: Callback<String>,
    pub onsubmit: Callback<()>,
    pub oncancel: Callback<()>,
}

#[function_component(AnswerView)]
pub(in crate::app) fn answer_view(props: &AnswerProps) -> Html {
    use game::Mode::*;

    let (hint, placeholder) = match props.config.mode {
        Numeric => ("numbers 0-9", "12345"),
        Alphabetic => ("letters A-Z", "HAPPY"),
        Mixed => ("letters and numbers", "H3LL0"),
    };

    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };
    let onsubmit = {
        let onsubmit = props.onsubmit.clone();
        Callback::from(move |_: MouseEvent| onsubmit.emit(()))
    };
    let onkeydown = {
        let onsubmit = props.onsubmit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                onsubmit.emit(());
            }
        })
    };
    let oncancel = {
        let oncancel = props.oncancel.clone();
        Callback::from(move |_: MouseEvent| oncancel.emit(()))
    };

    html! {
        <dialog id="answer" open={props.open}>
            <article>
                <h2>{ "Set Correct Answer" }</h2>
                <p>{ format!("Enter the {}-character answer ({}):", props.config.columns, hint) }</p>
                <input
                    type="text"
                    class="answer-input"
                    value={props.value.clone()}
                    {placeholder}
                    maxlength={props.config.columns.to_string()}
                    {oninput}
                    {onkeydown}
                />
                <footer>
                    <button type="reset" onclick={oncancel}>{ "Cancel" }</button>
                    <button onclick={onsubmit}>{ "Set Answer" }</button>
                </footer>
            </article>
        </dialog>
    }
}
