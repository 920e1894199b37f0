use gloo::timers::callback::{Interval, Timeout};
use gridle_core as game;
use yew::prelude::*;

use answer::AnswerView;
use grid::{CellMsg, CellView};
use palette::PaletteView;
use settings::{SettingsEdit, SettingsForm, SettingsView};
use utils::{Modal, js_random_unit};

mod answer;
mod audio;
mod grid;
mod palette;
mod settings;
mod utils;

const REVEAL_TICK_MS: u32 = 700;
const WARNING_MS: u32 = 3_000;
const CELEBRATION_MS: u32 = 3_000;
const CONFETTI_COUNT: usize = 50;

/// Whatever the user is currently dragging or has tapped to pick up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum DragPayload {
    Value(game::Symbol),
    Feedback(game::Feedback),
}

pub(crate) enum Msg {
    PickUp(DragPayload),
    TogglePick(DragPayload),
    DragEnd,
    Cell(CellMsg),
    Check,
    RevealTick,
    ToggleSettings,
    EditSettings(SettingsEdit),
    ApplySettings,
    ToggleAnswer,
    AnswerInput(String),
    SubmitAnswer,
    ClearValues,
    ClearFeedback,
    DismissWarning,
    EndCelebration,
}

pub(crate) struct App {
    session: game::Session,
    form: SettingsForm,
    answer_input: String,
    picked: Option<DragPayload>,
    warning: Option<String>,
    warning_timer: Option<Timeout>,
    celebrating: bool,
    celebration_timer: Option<Timeout>,
    reveal_timer: Option<Interval>,
    settings_open: bool,
    answer_open: bool,
}

impl App {
    fn warn(&mut self, ctx: &Context<Self>, message: String) {
        log::debug!("warning: {}", message);
        self.warning = Some(message);
        let link = ctx.link().clone();
        // replacing the handle cancels the superseded timer
        self.warning_timer = Some(Timeout::new(WARNING_MS, move || {
            link.send_message(Msg::DismissWarning);
        }));
    }

    fn start_reveal(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.reveal_timer = Some(Interval::new(REVEAL_TICK_MS, move || {
            link.send_message(Msg::RevealTick);
        }));
    }

    fn celebrate(&mut self, ctx: &Context<Self>) {
        audio::play_victory();
        self.celebrating = true;
        let link = ctx.link().clone();
        self.celebration_timer = Some(Timeout::new(CELEBRATION_MS, move || {
            link.send_message(Msg::EndCelebration);
        }));
    }

    /// Places the picked payload into a cell. Drops on the header row are
    /// ignored without a warning.
    fn apply_payload(&mut self, ctx: &Context<Self>, row: game::Row, col: game::Col) -> bool {
        let Some(payload) = self.picked else {
            return false;
        };
        let result = match payload {
            DragPayload::Value(value) => self.session.place_value(row, col, value),
            DragPayload::Feedback(feedback) => self.session.place_feedback(row, col, feedback),
        };
        match result {
            Ok(outcome) => outcome.has_update(),
            Err(game::GameError::HeaderRow) => false,
            Err(err) => {
                self.warn(ctx, warning_text(&err));
                true
            }
        }
    }

    fn view_warning(&self) -> Html {
        let Some(message) = &self.warning else {
            return Html::default();
        };
        html! {
            <Modal>
                <div class="warning">
                    <span class="icon">{ "⚠️" }</span>
                    <span>{ message.clone() }</span>
                </div>
            </Modal>
        }
    }

    fn view_celebration(&self) -> Html {
        if !self.celebrating {
            return Html::default();
        }
        html! {
            <Modal>
                <div class="celebration">
                    <div class="banner">{ "🎉 WINNER! 🎉" }</div>
                    {
                        for (0..CONFETTI_COUNT).map(|i| {
                            let style = format!(
                                "left:{:.0}%;top:{:.0}%;animation-delay:{:.2}s;",
                                js_random_unit() * 100.0,
                                js_random_unit() * 100.0,
                                js_random_unit() * 2.0,
                            );
                            html! { <span class="confetti" key={i} {style}/> }
                        })
                    }
                </div>
            </Modal>
        }
    }

    fn view_controls(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let mode = self.session.config().mode;
        let title = match mode {
            game::Mode::Numeric => "Number Puzzle Game",
            game::Mode::Alphabetic => "Word Puzzle Game",
            game::Mode::Mixed => "Mixed Puzzle Game",
        };
        let answer_set = self.session.has_answer();
        let answer_label = if answer_set { "✓ Answer Set" } else { "Set Answer" };
        let (revealed, queued) = self.session.reveal_progress();

        html! {
            <aside class="controls">
                <h1>{ title }</h1>
                <ul class="instructions">
                    <li>{ "Drag or tap values into the grid" }</li>
                    <li>{ "The facilitator sets the correct answer first" }</li>
                    <li>{ "Check Answer reveals the results one cell at a time" }</li>
                    <li>{ "✓ = correct position, ○ = wrong position, ✗ = not in answer" }</li>
                    <li>{ "✓ values carry into the next row" }</li>
                </ul>
                <div class="buttons">
                    <button class="settings" onclick={ctx.link().callback(|_| ToggleSettings)}>
                        { "Game Settings" }
                    </button>
                    <button
                        class={classes!("answer", answer_set.then_some("set"))}
                        onclick={ctx.link().callback(|_| ToggleAnswer)}
                    >
                        { answer_label }
                    </button>
                    <button class="check" onclick={ctx.link().callback(|_| Check)}>
                        { "Check Answer" }
                    </button>
                    if self.session.phase().is_revealing() {
                        <div class="revealing">{ format!("Revealing {}/{}", revealed, queued) }</div>
                    }
                    <button class="clear" onclick={ctx.link().callback(|_| ClearValues)}>
                        { "Clear Values" }
                    </button>
                    <button class="clear" onclick={ctx.link().callback(|_| ClearFeedback)}>
                        { "Clear Feedback" }
                    </button>
                </div>
            </aside>
        }
    }

    fn view_grid(&self, ctx: &Context<Self>) -> Html {
        let grid = self.session.grid();
        let columns = grid.columns();
        let active_row = grid.guess_rows();
        let winner = self.session.winner_row();
        let callback = ctx.link().callback(Msg::Cell);

        html! {
            <main class="board">
                <table class="grid">
                    <tr class="header">
                        { for (0..columns).map(|col| html! { <th>{ grid.label(col) }</th> }) }
                    </tr>
                    {
                        for (1..=grid.guess_rows()).map(|row| {
                            let row_winner = winner == Some(row);
                            html! {
                                <tr class={classes!(row_winner.then_some("winner"))}>
                                    {
                                        for (0..columns).map(|col| {
                                            let cell = grid.cell(row, col).copied().unwrap_or_default();
                                            let callback = callback.clone();
                                            html! {
                                                <CellView
                                                    {row}
                                                    {col}
                                                    {cell}
                                                    active={row == active_row && winner.is_none()}
                                                    winner={row_winner}
                                                    {callback}
                                                />
                                            }
                                        })
                                    }
                                </tr>
                            }
                        })
                    }
                </table>
            </main>
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = game::GameConfig::default();
        Self {
            form: SettingsForm::from_config(&config),
            session: game::Session::new(config),
            answer_input: String::new(),
            picked: None,
            warning: None,
            warning_timer: None,
            celebrating: false,
            celebration_timer: None,
            reveal_timer: None,
            settings_open: false,
            answer_open: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            PickUp(payload) => {
                let changed = self.picked != Some(payload);
                self.picked = Some(payload);
                changed
            }
            TogglePick(payload) => {
                if self.picked == Some(payload) {
                    self.picked = None;
                } else {
                    self.picked = Some(payload);
                }
                true
            }
            DragEnd => self.picked.take().is_some(),
            Cell(CellMsg::Drop { row, col }) => {
                self.apply_payload(ctx, row, col);
                self.picked = None;
                true
            }
            Cell(CellMsg::Click { row, col }) => {
                if self.picked.is_some() {
                    self.apply_payload(ctx, row, col);
                    self.picked = None;
                    true
                } else {
                    match self.session.clear_cell(row, col) {
                        Ok(outcome) => outcome.has_update(),
                        // header clicks and stray coordinates are ignored
                        Err(_) => false,
                    }
                }
            }
            Check => match self.session.check() {
                Ok(row) => {
                    log::debug!("checking row {}", row);
                    self.start_reveal(ctx);
                    true
                }
                Err(err) => {
                    self.warn(ctx, warning_text(&err));
                    true
                }
            },
            RevealTick => match self.session.reveal_next() {
                Ok(outcome) => {
                    if outcome.revealed_cell().feedback.is_match() {
                        audio::play_ding();
                    }
                    if let game::RevealOutcome::Finished { result, .. } = outcome {
                        self.reveal_timer = None;
                        if matches!(result, game::RowResult::Won) {
                            self.celebrate(ctx);
                        }
                    }
                    true
                }
                Err(err) => {
                    log::warn!("reveal tick with nothing to do: {}", err);
                    self.reveal_timer = None;
                    false
                }
            },
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                if self.settings_open {
                    self.form = SettingsForm::from_config(self.session.config());
                }
                true
            }
            EditSettings(edit) => {
                match edit {
                    SettingsEdit::Columns(value) => self.form.columns = value,
                    SettingsEdit::MaxRows(value) => self.form.max_rows = value,
                    SettingsEdit::Mode(mode) => self.form.mode = mode,
                    SettingsEdit::Distinct(distinct) => self.form.distinct = distinct,
                }
                true
            }
            ApplySettings => match self.form.to_config() {
                Ok(config) => {
                    self.session.reconfigure(config);
                    self.reveal_timer = None;
                    self.celebrating = false;
                    self.celebration_timer = None;
                    self.picked = None;
                    self.settings_open = false;
                    true
                }
                Err(err) => {
                    self.warn(ctx, warning_text(&err));
                    true
                }
            },
            ToggleAnswer => {
                self.answer_open = !self.answer_open;
                if !self.answer_open {
                    self.answer_input.clear();
                }
                true
            }
            AnswerInput(value) => {
                let columns = self.session.config().columns as usize;
                self.answer_input = value
                    .chars()
                    .take(columns)
                    .map(|c| c.to_ascii_uppercase())
                    .collect();
                true
            }
            SubmitAnswer => match self.session.set_answer(&self.answer_input) {
                Ok(()) => {
                    self.answer_open = false;
                    self.answer_input.clear();
                    true
                }
                Err(game::GameError::AnswerLength(_) | game::GameError::AnswerSymbol) => {
                    let message = answer_warning(self.session.config());
                    self.warn(ctx, message);
                    true
                }
                Err(err) => {
                    self.warn(ctx, warning_text(&err));
                    true
                }
            },
            ClearValues => {
                self.session.clear_values();
                self.reveal_timer = None;
                self.celebrating = false;
                self.celebration_timer = None;
                true
            }
            ClearFeedback => {
                self.session.clear_feedback();
                self.reveal_timer = None;
                true
            }
            DismissWarning => {
                self.warning_timer = None;
                self.warning.take().is_some()
            }
            EndCelebration => {
                self.celebration_timer = None;
                let was_celebrating = self.celebrating;
                self.celebrating = false;
                was_celebrating
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = *self.session.config();

        html! {
            <div class="gridle">
                { self.view_warning() }
                { self.view_celebration() }
                { self.view_controls(ctx) }
                { self.view_grid(ctx) }
                <aside class="sidebar">
                    <PaletteView
                        mode={config.mode}
                        picked={self.picked}
                        onpick={ctx.link().callback(Msg::PickUp)}
                        ontap={ctx.link().callback(Msg::TogglePick)}
                        ondragend={ctx.link().callback(|_| Msg::DragEnd)}
                    />
                </aside>
                <SettingsView
                    open={self.settings_open}
                    form={self.form.clone()}
                    onedit={ctx.link().callback(Msg::EditSettings)}
                    onapply={ctx.link().callback(|_| Msg::ApplySettings)}
                    oncancel={ctx.link().callback(|_| Msg::ToggleSettings)}
                />
                <AnswerView
                    open={self.answer_open}
                    config={config}
                    value={self.answer_input.clone()}
                    oninput={ctx.link().callback(Msg::AnswerInput)}
                    onsubmit={ctx.link().callback(|_| Msg::SubmitAnswer)}
                    oncancel={ctx.link().callback(|_| Msg::ToggleAnswer)}
                />
            </div>
        }
    }
}

/// User-facing text for rejected actions.
fn warning_text(err: &game::GameError) -> String {
    use game::GameError::*;
    match err {
        NoAnswer => "Please set the correct answer first!".to_string(),
        RevealInProgress => "Wait for the current reveal to finish!".to_string(),
        NothingToCheck => "Please enter some content first!".to_string(),
        DuplicateValue(value) => format!("{} is already used in this row!", value),
        InvalidConfig => "Invalid settings. Columns: 3-10, Rows: 3-12".to_string(),
        other => other.to_string(),
    }
}

fn answer_warning(config: &game::GameConfig) -> String {
    use game::Mode::*;
    let what = match config.mode {
        Numeric => "digits (0-9)",
        Alphabetic => "letters (A-Z)",
        Mixed => "characters (letters and numbers)",
    };
    format!("Please enter exactly {} {}", config.columns, what)
}
