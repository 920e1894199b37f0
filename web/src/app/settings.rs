use gridle_core as game;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Editable copy of the configuration shown in the settings dialog. Numbers
/// stay as raw text until Apply so partial input never panics.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SettingsForm {
    pub columns: String,
    pub max_rows: String,
    pub mode: game::Mode,
    pub distinct: bool,
}

impl SettingsForm {
    pub fn from_config(config: &game::GameConfig) -> Self {
        Self {
            columns: config.columns.to_string(),
            max_rows: config.max_rows.to_string(),
            mode: config.mode,
            distinct: config.distinct,
        }
    }

    pub fn to_config(&self) -> game::Result<game::GameConfig> {
        let columns = self
            .columns
            .trim()
            .parse()
            .map_err(|_| game::GameError::InvalidConfig)?;
        let max_rows = self
            .max_rows
            .trim()
            .parse()
            .map_err(|_| game::GameError::InvalidConfig)?;
        game::GameConfig::new(columns, max_rows, self.mode, self.distinct)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SettingsEdit {
    Columns(String),
    MaxRows(String),
    Mode(game::Mode),
    Distinct(bool),
}

#[derive(Properties, PartialEq)]
pub(in crate::app) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub form: SettingsForm,
    pub onedit: Callback<SettingsEdit>,
    pub onapply: Callback<()>,
    pub oncancel: Callback<()>,
}

#[function_component(SettingsView)]
pub(in crate::app) fn settings_view(props: &SettingsProps) -> Html {
    use game::Mode::*;

    let oninput_columns = {
        let onedit = props.onedit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            onedit.emit(SettingsEdit::Columns(input.value()));
        })
    };
    let oninput_rows = {
        let onedit = props.onedit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            onedit.emit(SettingsEdit::MaxRows(input.value()));
        })
    };
    let onchange_mode = {
        let onedit = props.onedit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mode = match select.value().as_str() {
                "numeric" => Numeric,
                "mixed" => Mixed,
                _ => Alphabetic,
            };
            onedit.emit(SettingsEdit::Mode(mode));
        })
    };
    let onchange_distinct = {
        let onedit = props.onedit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            onedit.emit(SettingsEdit::Distinct(input.checked()));
        })
    };
    let onapply = {
        let onapply = props.onapply.clone();
        Callback::from(move |_: MouseEvent| onapply.emit(()))
    };
    let oncancel = {
        let oncancel = props.oncancel.clone();
        Callback::from(move |_: MouseEvent| oncancel.emit(()))
    };

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{ "Game Settings" }</h2>
                <label>
                    { "Game mode" }
                    <select onchange={onchange_mode}>
                        <option value="alphabetic" selected={props.form.mode == Alphabetic}>
                            { "Letters (A-Z) - Wordle style" }
                        </option>
                        <option value="numeric" selected={props.form.mode == Numeric}>
                            { "Numbers (0-9) - Maths style" }
                        </option>
                        <option value="mixed" selected={props.form.mode == Mixed}>
                            { "Mixed (letters + numbers)" }
                        </option>
                    </select>
                </label>
                <label>
                    { "Columns (3-10)" }
                    <input
                        type="number"
                        min="3"
                        max="10"
                        value={props.form.columns.clone()}
                        oninput={oninput_columns}
                    />
                </label>
                <label>
                    { "Maximum rows (3-12)" }
                    <input
                        type="number"
                        min="3"
                        max="12"
                        value={props.form.max_rows.clone()}
                        oninput={oninput_rows}
                    />
                </label>
                <label class="toggle">
                    <input
                        type="checkbox"
                        checked={props.form.distinct}
                        onchange={onchange_distinct}
                    />
                    { "No repeated values in a row" }
                </label>
                <footer>
                    <button type="reset" onclick={oncancel}>{ "Cancel" }</button>
                    <button onclick={onapply}>{ "Apply Settings" }</button>
                </footer>
            </article>
        </dialog>
    }
}
