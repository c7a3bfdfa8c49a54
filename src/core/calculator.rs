//! Interactive calculator session
//!
//! Every edit of a unit field converts immediately, but the history append is
//! debounced: a burst of edits produces one entry carrying the last value.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::core::debounce::Scheduler;
use crate::core::features::land_converter::{classify_input, convert, format_number, InputAction};
use crate::core::lock;
use crate::core::state::AppState;
use crate::shared::types::{ConversionValues, LandUnit};

const HISTORY_TIMER: &str = "history-append";

pub struct LandCalculator {
    state: Arc<Mutex<AppState>>,
    scheduler: Scheduler,
    debounce: Duration,
    fields: HashMap<LandUnit, String>,
    pending: Arc<Mutex<Option<ConversionValues>>>,
}

impl LandCalculator {
    pub fn new(state: Arc<Mutex<AppState>>, scheduler: Scheduler, debounce: Duration) -> Self {
        Self {
            state,
            scheduler,
            debounce,
            fields: HashMap::new(),
            pending: Arc::new(Mutex::new(None)),
        }
    }

    pub fn state(&self) -> MutexGuard<'_, AppState> {
        lock(&self.state)
    }

    /// Text currently shown in the field for `unit`
    pub fn field(&self, unit: LandUnit) -> &str {
        self.fields.get(&unit).map(String::as_str).unwrap_or("")
    }

    /// Handle the user typing `text` into the field for `unit`.
    ///
    /// Returns false when the edit was rejected and nothing changed.
    pub fn on_input(&mut self, unit: LandUnit, text: &str) -> bool {
        match classify_input(text) {
            InputAction::Ignore => false,
            InputAction::Clear => {
                // A cleared field leaves nothing to record
                self.scheduler.cancel(HISTORY_TIMER);
                lock(&self.pending).take();
                self.fields.clear();
                self.state().set_current_values(ConversionValues::default());
                true
            }
            InputAction::Convert(value) => {
                let converted = convert(value, unit);

                for (field_unit, field_value) in converted.iter() {
                    let display = if field_unit == unit {
                        text.to_string()
                    } else {
                        format_number(field_value, field_unit)
                    };
                    self.fields.insert(field_unit, display);
                }

                self.state().set_current_values(converted);
                self.schedule_history(converted);
                true
            }
        }
    }

    fn schedule_history(&self, values: ConversionValues) {
        *lock(&self.pending) = Some(values);

        let state = Arc::clone(&self.state);
        let pending = Arc::clone(&self.pending);
        self.scheduler.schedule(HISTORY_TIMER, self.debounce, move || {
            let values = lock(&pending).take();
            if let Some(values) = values {
                lock(&state).add_to_history(values);
            }
        });
    }

    /// Write any pending history entry now instead of waiting
    pub fn flush(&self) {
        self.scheduler.cancel(HISTORY_TIMER);
        let values = lock(&self.pending).take();
        if let Some(values) = values {
            self.state().add_to_history(values);
        }
    }
}
