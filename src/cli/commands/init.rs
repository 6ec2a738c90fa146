use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::state::StateKey;
use crate::db::store::Store;
use crate::errors::AppResult;

use super::audit;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the default staff roster, when none is stored yet
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing caresync…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let store = Store::open(&cfg.database)?;
    let seed_staff = store.get_raw(StateKey::Staff.as_str())?.is_none();

    let mut container = store.into_container()?;
    if seed_staff {
        let roster = container.state().staff.clone();
        let count = roster.len();
        container.replace_staff(roster)?;
        println!("👥 Seeded {} staff members", count);
    }

    audit(
        container.backend(),
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    );

    println!("✅ Database initialized at {}", &cfg.database);
    Ok(())
}
