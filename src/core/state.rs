//! Explicit application state container.
//!
//! # Responsibility
//! - Own the in-memory [`AppState`] for the lifetime of a command.
//! - Persist every whole-value replacement through an injected [`Persist`].
//!
//! # Invariants
//! - Collections are only ever replaced, never patched in place.
//! - A replacement is visible in memory only after it has been persisted.

use crate::errors::AppResult;
use crate::models::report::IncidentReport;
use crate::models::resident::Resident;
use crate::models::schedule::ResidentSchedule;
use crate::models::shift::Shift;
use crate::models::staff::Staff;
use crate::models::stock::StockItem;
use crate::models::task::Task;
use crate::models::todo::Todo;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage keys, one per persisted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    Tasks,
    Shifts,
    Staff,
    EnableAlerts,
    Residents,
    ResidentSchedules,
    Stock,
    Reports,
    Todos,
}

impl StateKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateKey::Tasks => "careSyncTasks",
            StateKey::Shifts => "careSyncShifts",
            StateKey::Staff => "careSyncStaff",
            StateKey::EnableAlerts => "careSyncEnableAlerts",
            StateKey::Residents => "careSyncResidents",
            StateKey::ResidentSchedules => "careSyncResidentSchedules",
            StateKey::Stock => "careSyncStock",
            StateKey::Reports => "careSyncReports",
            StateKey::Todos => "careSyncTodos",
        }
    }
}

/// Save-on-change side effect. Last write to a key wins.
pub trait Persist {
    fn persist(&mut self, key: StateKey, value: &serde_json::Value) -> AppResult<()>;
}

/// Source of the initial state.
pub trait Load {
    fn load_value(&mut self, key: StateKey) -> AppResult<Option<serde_json::Value>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub tasks: Vec<Task>,
    pub shifts: Vec<Shift>,
    pub staff: Vec<Staff>,
    pub enable_alerts: bool,
    pub residents: Vec<Resident>,
    pub schedules: Vec<ResidentSchedule>,
    pub stock: Vec<StockItem>,
    pub reports: Vec<IncidentReport>,
    pub todos: Vec<Todo>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            shifts: Vec::new(),
            staff: Staff::default_roster(),
            enable_alerts: true,
            residents: Vec::new(),
            schedules: Vec::new(),
            stock: Vec::new(),
            reports: Vec::new(),
            todos: Vec::new(),
        }
    }
}

fn load_or<T, L>(loader: &mut L, key: StateKey, fallback: T) -> AppResult<T>
where
    T: DeserializeOwned,
    L: Load + ?Sized,
{
    match loader.load_value(key)? {
        Some(v) => Ok(serde_json::from_value(v)?),
        None => Ok(fallback),
    }
}

impl AppState {
    /// Read every key, using defaults for keys never written.
    pub fn load<L: Load + ?Sized>(loader: &mut L) -> AppResult<Self> {
        let d = AppState::default();
        Ok(Self {
            tasks: load_or(loader, StateKey::Tasks, d.tasks)?,
            shifts: load_or(loader, StateKey::Shifts, d.shifts)?,
            staff: load_or(loader, StateKey::Staff, d.staff)?,
            enable_alerts: load_or(loader, StateKey::EnableAlerts, d.enable_alerts)?,
            residents: load_or(loader, StateKey::Residents, d.residents)?,
            schedules: load_or(loader, StateKey::ResidentSchedules, d.schedules)?,
            stock: load_or(loader, StateKey::Stock, d.stock)?,
            reports: load_or(loader, StateKey::Reports, d.reports)?,
            todos: load_or(loader, StateKey::Todos, d.todos)?,
        })
    }
}

pub struct StateContainer<P: Persist> {
    state: AppState,
    persist: P,
}

impl<P: Persist> StateContainer<P> {
    pub fn new(state: AppState, persist: P) -> Self {
        Self { state, persist }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The injected persistence backend.
    pub fn backend(&self) -> &P {
        &self.persist
    }

    pub fn into_parts(self) -> (AppState, P) {
        (self.state, self.persist)
    }

    fn save<T: Serialize>(&mut self, key: StateKey, value: &T) -> AppResult<()> {
        let json = serde_json::to_value(value)?;
        self.persist.persist(key, &json)
    }

    pub fn replace_tasks(&mut self, tasks: Vec<Task>) -> AppResult<()> {
        self.save(StateKey::Tasks, &tasks)?;
        self.state.tasks = tasks;
        Ok(())
    }

    pub fn replace_shifts(&mut self, shifts: Vec<Shift>) -> AppResult<()> {
        self.save(StateKey::Shifts, &shifts)?;
        self.state.shifts = shifts;
        Ok(())
    }

    pub fn replace_staff(&mut self, staff: Vec<Staff>) -> AppResult<()> {
        self.save(StateKey::Staff, &staff)?;
        self.state.staff = staff;
        Ok(())
    }

    pub fn set_enable_alerts(&mut self, enabled: bool) -> AppResult<()> {
        self.save(StateKey::EnableAlerts, &enabled)?;
        self.state.enable_alerts = enabled;
        Ok(())
    }

    pub fn replace_residents(&mut self, residents: Vec<Resident>) -> AppResult<()> {
        self.save(StateKey::Residents, &residents)?;
        self.state.residents = residents;
        Ok(())
    }

    pub fn replace_schedules(&mut self, schedules: Vec<ResidentSchedule>) -> AppResult<()> {
        self.save(StateKey::ResidentSchedules, &schedules)?;
        self.state.schedules = schedules;
        Ok(())
    }

    pub fn replace_stock(&mut self, stock: Vec<StockItem>) -> AppResult<()> {
        self.save(StateKey::Stock, &stock)?;
        self.state.stock = stock;
        Ok(())
    }

    pub fn replace_reports(&mut self, reports: Vec<IncidentReport>) -> AppResult<()> {
        self.save(StateKey::Reports, &reports)?;
        self.state.reports = reports;
        Ok(())
    }

    pub fn replace_todos(&mut self, todos: Vec<Todo>) -> AppResult<()> {
        self.save(StateKey::Todos, &todos)?;
        self.state.todos = todos;
        Ok(())
    }

    pub fn resident_name(&self, id: &str) -> Option<&str> {
        self.state
            .residents
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.name.as_str())
    }

    pub fn staff_name(&self, id: &str) -> Option<&str> {
        self.state
            .staff
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.as_str())
    }
}

/// Persist into a plain list, in call order. Useful where nothing should
/// touch disk.
#[derive(Debug, Default)]
pub struct MemoryPersist {
    pub writes: Vec<(StateKey, serde_json::Value)>,
}

impl Persist for MemoryPersist {
    fn persist(&mut self, key: StateKey, value: &serde_json::Value) -> AppResult<()> {
        self.writes.push((key, value.clone()));
        Ok(())
    }
}

impl Load for MemoryPersist {
    fn load_value(&mut self, key: StateKey) -> AppResult<Option<serde_json::Value>> {
        Ok(self
            .writes
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone()))
    }
}
