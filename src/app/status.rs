use crate::state::SelectionOutcome;

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn loading(&mut self) {
        self.message = "Loading catalog".to_string();
    }

    pub fn loaded(&mut self, count: usize) {
        self.message = format!("{count} entries loaded");
    }

    pub fn load_failed(&mut self) {
        self.message = "Catalog unavailable".to_string();
    }

    pub fn page_edge(&mut self) {
        self.message = "No more pages".to_string();
    }

    pub fn picked(&mut self, outcome: SelectionOutcome) {
        self.message = match outcome {
            SelectionOutcome::Selected(id) => format!("Selected #{id}"),
            SelectionOutcome::Empty => READY_STATUS.to_string(),
            SelectionOutcome::Invalid(id) => format!("Entry #{id} is not available"),
        };
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
