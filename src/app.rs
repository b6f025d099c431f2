use crate::display::DisplaySurface;
use crate::editor::Input;
use crate::history::{History, HistoryRecord, HistorySink};
use crate::session::{CalculatorSession, Mode};
use log::info;

/// A calculator with one session per mode and a history shared between
/// them. All input goes through press, one input at a time, so inputs from
/// several sources cannot interleave partial edits.
pub struct Calculator<D: DisplaySurface> {
    basic: CalculatorSession,
    scientific: CalculatorSession,
    mode: Mode,
    history: History,
    display: D,
}

impl<D: DisplaySurface> Calculator<D> {
    /// Returns a calculator showing the given mode
    pub fn new(mode: Mode, history: History, display: D) -> Calculator<D> {
        let mut calculator = Calculator {
            basic: CalculatorSession::new(Mode::Basic),
            scientific: CalculatorSession::new(Mode::Scientific),
            mode,
            history,
            display,
        };
        calculator.refresh();

        calculator
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches to another mode. Each mode keeps its own state while it is
    /// not shown.
    pub fn select(&mut self, mode: Mode) {
        if mode != self.mode {
            info!("switching from {} to {} mode", self.mode, mode);
            self.mode = mode;
        }
        self.refresh();
    }

    /// Applies one input to the active session and refreshes the display
    pub fn press(&mut self, input: Input) {
        let session = match self.mode {
            Mode::Basic => &mut self.basic,
            Mode::Scientific => &mut self.scientific,
        };
        let text = session.apply(input, &mut self.history);
        self.display.set_text(text);
    }

    /// Applies a sequence of inputs in order
    pub fn press_all<I: IntoIterator<Item = Input>>(&mut self, inputs: I) {
        for input in inputs {
            self.press(input);
        }
    }

    /// Records a line produced outside the expression calculators, such as
    /// a conversion or a date calculation
    pub fn record(&mut self, record: HistoryRecord) {
        self.history.record(record);
    }

    /// Returns the session for the active mode
    pub fn session(&self) -> &CalculatorSession {
        match self.mode {
            Mode::Basic => &self.basic,
            Mode::Scientific => &self.scientific,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    fn refresh(&mut self) {
        let text = self.session().buffer().to_string();
        self.display.set_text(&text);
    }
}
