//! Application state

use chart_core::{Breakdown, ChartConfig, DefenderSelection, LoadOutcome, TypeChart, MAX_DEFENDERS};
use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Chart,
    Calculator,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Chart, Tab::Calculator, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Chart => "Chart",
            Tab::Calculator => "Calc",
            Tab::Help => "Help",
        }
    }
}

/// Destructive action waiting for a yes/no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    RemoveType(String),
    Reset,
}

impl PendingAction {
    pub fn question(&self) -> String {
        match self {
            PendingAction::RemoveType(name) => format!("Do you want to remove {}?", name),
            PendingAction::Reset => "Are you sure you want to reset the configuration?".to_string(),
        }
    }
}

/// Input mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing the name of a new type
    AddingType { input: String },
    Confirm(PendingAction),
}

pub struct App {
    pub chart: TypeChart,
    pub config: ChartConfig,
    pub current_tab: Tab,
    pub mode: Mode,
    /// Grid cursor: attacker row, defender column
    pub cursor_row: usize,
    pub cursor_col: usize,
    pub selection: DefenderSelection,
    pub focused_slot: usize,
    /// Last calculator result; kept when a calculation is a no-op
    pub breakdown: Option<Breakdown>,
    pub status: String,
}

impl App {
    /// Build the app and load the working chart, like a fresh start of the tool
    pub fn new(config: ChartConfig) -> Self {
        let mut app = App {
            chart: TypeChart::new(),
            config,
            current_tab: Tab::Chart,
            mode: Mode::Normal,
            cursor_row: 0,
            cursor_col: 0,
            selection: DefenderSelection::new(),
            focused_slot: 0,
            breakdown: None,
            status: String::new(),
        };
        app.load();
        app
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn toggle_help(&mut self) {
        self.current_tab = if self.current_tab == Tab::Help {
            Tab::Chart
        } else {
            Tab::Help
        };
    }

    pub fn is_prompting(&self) -> bool {
        self.mode != Mode::Normal
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Chart => self.cursor_row = self.cursor_row.saturating_sub(1),
            Tab::Calculator => self.step_slot(-1),
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Chart => {
                if self.cursor_row + 1 < self.chart.types().len() {
                    self.cursor_row += 1;
                }
            }
            Tab::Calculator => self.step_slot(1),
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        match self.current_tab {
            Tab::Chart => self.cursor_col = self.cursor_col.saturating_sub(1),
            Tab::Calculator => self.focused_slot = self.focused_slot.saturating_sub(1),
            Tab::Help => {}
        }
    }

    pub fn on_right(&mut self) {
        match self.current_tab {
            Tab::Chart => {
                if self.cursor_col + 1 < self.chart.types().len() {
                    self.cursor_col += 1;
                }
            }
            Tab::Calculator => {
                if self.focused_slot + 1 < MAX_DEFENDERS {
                    self.focused_slot += 1;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Chart => self.cycle_cell(),
            Tab::Calculator => self.calculate(),
            Tab::Help => {}
        }
    }

    /// The (attacker, defender) pair under the cursor
    pub fn focused_matchup(&self) -> Option<(&str, &str)> {
        let types = self.chart.types();
        let attacker = types.get(self.cursor_row)?;
        let defender = types.get(self.cursor_col)?;
        Some((attacker.as_str(), defender.as_str()))
    }

    /// Toggle the matchup under the cursor
    pub fn cycle_cell(&mut self) {
        let Some((attacker, defender)) = self.focused_matchup() else {
            return;
        };
        let (attacker, defender) = (attacker.to_string(), defender.to_string());
        let value = self.chart.cycle(&attacker, &defender);
        self.status = format!("{} → {} = {}", attacker, defender, value);
    }

    /// Move the focused calculator slot through None + registered types
    fn step_slot(&mut self, delta: isize) {
        let types = self.chart.types();
        // Option 0 is None, option i is types[i - 1]
        let options = types.len() as isize + 1;
        let current = self
            .selection
            .get(self.focused_slot)
            .and_then(|name| types.iter().position(|t| t == name))
            .map_or(0, |idx| idx as isize + 1);
        let next = (current + delta).rem_euclid(options);
        let choice = if next == 0 {
            None
        } else {
            Some(types[next as usize - 1].clone())
        };
        self.selection.set(self.focused_slot, choice);
    }

    pub fn calculate(&mut self) {
        match self.chart.calculate(&self.selection) {
            Some(breakdown) => {
                let defenders: Vec<&str> = self.selection.defenders().collect();
                self.status = format!("Calculated against {}", defenders.join("/"));
                self.breakdown = Some(breakdown);
            }
            None => {
                self.status = "Select at least one defending type".to_string();
            }
        }
    }

    pub fn begin_add_type(&mut self) {
        self.mode = Mode::AddingType {
            input: String::new(),
        };
    }

    /// Ask to remove the type on the cursor row
    pub fn request_remove(&mut self) {
        if let Some(name) = self.chart.types().get(self.cursor_row) {
            self.mode = Mode::Confirm(PendingAction::RemoveType(name.clone()));
        }
    }

    pub fn request_reset(&mut self) {
        self.mode = Mode::Confirm(PendingAction::Reset);
    }

    /// Key handling while a prompt is open
    pub fn on_prompt_key(&mut self, code: KeyCode) {
        match std::mem::replace(&mut self.mode, Mode::Normal) {
            Mode::Normal => {}
            Mode::AddingType { mut input } => match code {
                KeyCode::Enter => self.add_type(&input),
                KeyCode::Esc => self.status = "Add cancelled".to_string(),
                KeyCode::Backspace => {
                    input.pop();
                    self.mode = Mode::AddingType { input };
                }
                KeyCode::Char(c) => {
                    input.push(c);
                    self.mode = Mode::AddingType { input };
                }
                _ => self.mode = Mode::AddingType { input },
            },
            Mode::Confirm(action) => match code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm(action),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.status = "Cancelled".to_string();
                }
                _ => self.mode = Mode::Confirm(action),
            },
        }
    }

    fn confirm(&mut self, action: PendingAction) {
        match action {
            PendingAction::RemoveType(name) => self.remove_type(&name),
            PendingAction::Reset => self.reset(),
        }
    }

    pub fn add_type(&mut self, name: &str) {
        if self.chart.add_type(name) {
            self.status = format!("Added type {}", name.trim());
            self.after_registry_change();
        } else if name.trim().is_empty() {
            self.status = "Type name is empty".to_string();
        } else {
            self.status = format!("{} already exists", name.trim());
        }
    }

    pub fn remove_type(&mut self, name: &str) {
        if self.chart.remove_type(name) {
            self.status = format!("Removed type {}", name);
            self.after_registry_change();
        }
    }

    pub fn save(&mut self) {
        let path = self.config.paths.working.clone();
        self.status = match self.chart.save_to(&path) {
            Ok(count) => format!("Saved {} matchups to {}", count, path.display()),
            Err(e) => {
                log::error!("Save failed: {}", e);
                format!("Save failed: {}", e)
            }
        };
    }

    pub fn load(&mut self) {
        let path = self.config.paths.working.clone();
        self.status = match self.chart.load_from(&path) {
            Ok(LoadOutcome::Loaded { entries, new_types }) => {
                self.after_registry_change();
                format!(
                    "Loaded {} matchups ({} new types) from {}",
                    entries,
                    new_types.len(),
                    path.display()
                )
            }
            Ok(LoadOutcome::Missing) => "No configuration file found.".to_string(),
            Err(e) => {
                log::error!("Load failed: {}", e);
                format!("Load failed: {}", e)
            }
        };
    }

    pub fn reset(&mut self) {
        let path = self.config.paths.factory.clone();
        self.status = match self.chart.reset_from(&path) {
            Ok(LoadOutcome::Loaded { entries, .. }) => {
                self.after_registry_change();
                format!("Reset to factory chart ({} matchups)", entries)
            }
            Ok(LoadOutcome::Missing) => "No base configuration file found.".to_string(),
            Err(e) => {
                log::error!("Reset failed: {}", e);
                format!("Reset failed: {}", e)
            }
        };
    }

    /// Keep the cursor and calculator consistent with the registry
    fn after_registry_change(&mut self) {
        let last = self.chart.types().len().saturating_sub(1);
        self.cursor_row = self.cursor_row.min(last);
        self.cursor_col = self.cursor_col.min(last);
        self.selection.retain_registered(self.chart.registry());
        self.breakdown = None;
    }
}
