use crate::core::calendar::Granularity;
use crate::models::report::ReportType;
use crate::models::schedule::ScheduleKind;
use crate::models::shift::ShiftSlot;
use crate::models::stock::{StockCategory, StockOwner};
use clap::{Parser, Subcommand};

/// Command-line interface definition for caresync
/// Care facility task board: overdue alerts, shift calendar, staff roster
#[derive(Parser)]
#[command(
    name = "caresync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Care facility task board: overdue-task alerts and shift calendar windows",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "fix",
            requires = "check",
            help = "Rewrite the configuration file with missing fields filled in"
        )]
        fix: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Add, list, complete or delete tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Evaluate overdue tasks once
    Overdue {
        #[arg(long = "at", help = "Evaluate at this time of day (HH:MM) instead of now")]
        at: Option<String>,
    },

    /// Run the overdue monitor until stdin closes or enough ticks elapsed
    Watch {
        #[arg(long = "interval", help = "Seconds between evaluations (default from config)")]
        interval: Option<u64>,

        #[arg(long = "ticks", help = "Stop after this many evaluations")]
        ticks: Option<u64>,

        #[arg(long = "silent", help = "Do not ring the terminal bell on alerts")]
        silent: bool,
    },

    /// Enable or disable overdue alerts
    Alerts {
        #[arg(long = "on", conflicts_with = "off")]
        on: bool,

        #[arg(long = "off")]
        off: bool,
    },

    /// Print a day / week / month calendar window
    Calendar {
        #[arg(long = "view", value_enum, help = "Zoom level (default from config)")]
        view: Option<Granularity>,

        #[arg(long = "date", help = "Reference date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(
            long = "shift",
            default_value_t = 0,
            allow_negative_numbers = true,
            help = "Move N pages forward (negative: backward)"
        )]
        shift: i64,

        #[arg(long = "no-padding", help = "Month view without previous-month days")]
        no_padding: bool,

        #[arg(long = "list", help = "One date per line instead of a grid")]
        list: bool,
    },

    /// Manage day / night shift assignments
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },

    /// Manage the staff roster
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },

    /// Manage resident records and vitals
    Resident {
        #[command(subcommand)]
        action: ResidentAction,
    },

    /// Manage resident schedules (day care, visits, home stays)
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },

    /// Manage stock and reorder requests
    Stock {
        #[command(subcommand)]
        action: StockAction,
    },

    /// File and read incident reports
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Personal todos of a staff member
    Todo {
        #[command(subcommand)]
        action: TodoAction,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        #[arg(long = "time", help = "Scheduled time (HH:MM)")]
        time: String,

        #[arg(long = "title")]
        title: String,

        #[arg(long = "description", default_value = "")]
        description: String,

        #[arg(
            long = "category",
            help = "MEAL, MEDICATION, HYGIENE, ACTIVITY, ADMIN or OTHER"
        )]
        category: Option<String>,

        #[arg(long = "priority", help = "LOW, MEDIUM, HIGH or URGENT")]
        priority: Option<String>,

        #[arg(long = "assigned-to", help = "Staff id")]
        assigned_to: Option<String>,

        #[arg(long = "resident", help = "Resident id")]
        resident: Option<String>,

        #[arg(long = "id", help = "Explicit task id (generated when omitted)")]
        id: Option<String>,
    },

    /// List tasks
    List {
        #[arg(long = "category")]
        category: Option<String>,

        #[arg(long = "at", help = "Mark overdue tasks as of this time (HH:MM)")]
        at: Option<String>,
    },

    /// Mark a task completed
    Done { id: String },

    /// Reopen a completed task
    Undo { id: String },

    /// Delete a task
    Del { id: String },
}

#[derive(Subcommand)]
pub enum ShiftAction {
    /// Assign a staff member to a slot
    Assign {
        /// Date of the shift (YYYY-MM-DD)
        date: String,

        #[arg(long = "slot", value_enum)]
        slot: ShiftSlot,

        #[arg(long = "staff", help = "Staff id")]
        staff: String,
    },

    /// Empty a slot
    Clear {
        date: String,

        #[arg(long = "slot", value_enum)]
        slot: ShiftSlot,
    },

    /// Show shifts for a calendar window
    Show {
        #[arg(long = "view", value_enum)]
        view: Option<Granularity>,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "shift", default_value_t = 0, allow_negative_numbers = true)]
        shift: i64,
    },
}

#[derive(Subcommand)]
pub enum StaffAction {
    /// List staff members
    List,

    /// Add a staff member
    Add {
        #[arg(long = "id")]
        id: String,

        #[arg(long = "name")]
        name: String,

        #[arg(long = "role", default_value = "staff", help = "manager, staff or nurse")]
        role: String,
    },
}

#[derive(Subcommand)]
pub enum ResidentAction {
    /// Add a resident
    Add {
        #[arg(long = "id", help = "Explicit resident id (generated when omitted)")]
        id: Option<String>,

        #[arg(long = "name")]
        name: String,

        #[arg(long = "room")]
        room: String,

        #[arg(long = "age", default_value_t = 0)]
        age: u32,

        #[arg(long = "birth-date", help = "YYYY-MM-DD")]
        birth_date: Option<String>,

        #[arg(long = "blood-type")]
        blood_type: Option<String>,

        #[arg(long = "diagnosis")]
        diagnosis: Option<String>,

        #[arg(long = "disability-level", default_value = "")]
        disability_level: String,

        #[arg(long = "assessment", default_value = "")]
        assessment: String,

        #[arg(long = "care-plan", default_value = "")]
        care_plan: String,
    },

    /// List residents
    List,

    /// Show a resident profile and vitals history
    Show { id: String },

    /// Change profile fields
    Update {
        id: String,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "room")]
        room: Option<String>,

        #[arg(long = "age")]
        age: Option<u32>,

        #[arg(long = "birth-date")]
        birth_date: Option<String>,

        #[arg(long = "blood-type")]
        blood_type: Option<String>,

        #[arg(long = "diagnosis")]
        diagnosis: Option<String>,

        #[arg(long = "disability-level")]
        disability_level: Option<String>,

        #[arg(long = "assessment")]
        assessment: Option<String>,

        #[arg(long = "care-plan")]
        care_plan: Option<String>,
    },

    /// Record vitals (now, or at --at HH:MM today)
    Vitals {
        id: String,

        #[arg(long = "weight", help = "kg")]
        weight: Option<f64>,

        #[arg(long = "temp", help = "Body temperature (°C)")]
        temperature: Option<f64>,

        #[arg(long = "sys", help = "Systolic blood pressure (mmHg)")]
        systolic: Option<u32>,

        #[arg(long = "dia", help = "Diastolic blood pressure (mmHg)")]
        diastolic: Option<u32>,

        #[arg(long = "pulse")]
        pulse: Option<u32>,

        #[arg(long = "spo2")]
        spo2: Option<u32>,

        #[arg(long = "notes")]
        notes: Option<String>,

        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Delete a resident and their schedule entries
    Del { id: String },
}

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Add a schedule entry
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[arg(long = "resident", help = "Resident id")]
        resident: String,

        #[arg(long = "title")]
        title: String,

        #[arg(long = "kind", value_enum, default_value_t = ScheduleKind::DayCare)]
        kind: ScheduleKind,

        #[arg(long = "start", help = "HH:MM")]
        start: Option<String>,

        #[arg(long = "end", help = "HH:MM")]
        end: Option<String>,

        #[arg(long = "notes")]
        notes: Option<String>,
    },

    /// Delete a schedule entry
    Del { id: String },

    /// Show resident plans for a calendar window
    Show {
        #[arg(long = "view", value_enum)]
        view: Option<Granularity>,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "shift", default_value_t = 0, allow_negative_numbers = true)]
        shift: i64,

        #[arg(long = "resident", help = "Only this resident")]
        resident: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum StockAction {
    /// Add a stock item
    Add {
        #[arg(long = "id", help = "Explicit item id (generated when omitted)")]
        id: Option<String>,

        #[arg(long = "name")]
        name: String,

        #[arg(long = "category", value_enum, default_value_t = StockCategory::Daily)]
        category: StockCategory,

        #[arg(long = "quantity", default_value_t = 0)]
        quantity: u32,

        #[arg(long = "unit", default_value = "pcs")]
        unit: String,

        #[arg(long = "threshold", default_value_t = 0, help = "Reorder point")]
        threshold: u32,

        #[arg(long = "resident", help = "Resident owning the item (default: facility stock)")]
        resident: Option<String>,
    },

    /// List stock items
    List {
        #[arg(long = "owner", value_enum)]
        owner: Option<StockOwner>,

        #[arg(long = "resident")]
        resident: Option<String>,

        #[arg(long = "category", value_enum)]
        category: Option<StockCategory>,

        #[arg(long = "search")]
        search: Option<String>,

        #[arg(long = "low", help = "Only items at or below their reorder point")]
        low: bool,
    },

    /// Change a quantity by DELTA (negative to consume)
    Adjust {
        id: String,

        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },

    /// Flip the reorder-requested flag of an item
    ToggleOrder { id: String },

    /// Print the reorder list
    Orders {
        #[arg(long = "owner", value_enum)]
        owner: Option<StockOwner>,

        #[arg(long = "resident")]
        resident: Option<String>,

        #[arg(long = "mark", help = "Mark the listed items as reordered")]
        mark: bool,
    },

    /// Delete a stock item
    Del { id: String },
}

#[derive(Subcommand)]
pub enum ReportAction {
    /// File a report (5W1H)
    Add {
        #[arg(long = "type", value_enum)]
        kind: ReportType,

        #[arg(long = "author", help = "Staff id of the author")]
        author: String,

        #[arg(long = "when")]
        when: String,

        #[arg(long = "where")]
        place: String,

        #[arg(long = "who")]
        who: String,

        #[arg(long = "what")]
        what: String,

        #[arg(long = "why", default_value = "")]
        why: String,

        #[arg(long = "how", default_value = "")]
        how: String,
    },

    /// List reports, newest first
    List {
        #[arg(long = "type", value_enum)]
        kind: Option<ReportType>,

        #[arg(long = "as", help = "Staff id: mark reports this person has not read")]
        reader: Option<String>,
    },

    /// Show a report; with --as, record that the staff member read it
    Show {
        id: String,

        #[arg(long = "as")]
        reader: Option<String>,
    },

    /// Export reports as CSV
    Export {
        #[arg(long = "type", value_enum)]
        kind: Option<ReportType>,

        #[arg(long = "output", help = "Output file (default: stdout)")]
        output: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a todo
    Add {
        #[arg(long = "staff", help = "Staff id")]
        staff: String,

        content: String,
    },

    /// List the todos of a staff member
    List {
        #[arg(long = "staff")]
        staff: String,
    },

    /// Flip a todo between open and done
    Toggle { id: String },

    /// Delete a todo
    Del { id: String },
}
