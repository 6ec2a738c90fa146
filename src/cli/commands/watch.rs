use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::monitor::{MonitorConfig, OverdueMonitor, TaskSnapshot, Tick};
use crate::core::state::AppState;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{alert, info, success};
use std::io::BufRead;

/// Run the overdue monitor in the foreground.
///
/// The task list is re-read from the database before every tick, so edits
/// made by other `caresync` invocations are picked up.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Watch {
        interval,
        ticks,
        silent,
    } = cmd
    else {
        return Ok(());
    };

    let monitor_cfg = MonitorConfig::from_secs(interval.unwrap_or(cfg.poll_interval_secs));
    let db_path = cfg.database.clone();
    // Fail early on an unreadable database rather than on every tick.
    Store::open(&db_path)?;

    let source = move || -> AppResult<TaskSnapshot> {
        let mut store = Store::open(&db_path)?;
        let state = AppState::load(&mut store)?;
        Ok(TaskSnapshot {
            tasks: state.tasks,
            alerts_enabled: state.enable_alerts,
        })
    };

    let (seq_tx, seq_rx) = crossbeam_channel::unbounded::<u64>();
    let audible = !*silent;
    let sink = move |tick: &Tick| {
        let ev = &tick.evaluation;
        println!(
            "[{}] #{} overdue={}",
            tick.at.format("%H:%M:%S"),
            tick.seq,
            ev.count()
        );
        if ev.should_alert {
            let titles: Vec<&str> = ev.overdue_tasks.iter().map(|t| t.title.as_str()).collect();
            alert(
                format!("{} overdue task(s): {}", ev.count(), titles.join(", ")),
                audible,
            );
        }
        let _ = seq_tx.send(tick.seq);
    };

    info(format!(
        "Watching overdue tasks every {}s{}",
        monitor_cfg.period.as_secs(),
        if ticks.is_none() {
            " (press Enter or close stdin to stop)"
        } else {
            ""
        }
    ));

    let mut handle = OverdueMonitor::start(monitor_cfg, source, SystemClock, sink)?;

    let evaluations = match ticks {
        Some(n) => {
            let mut last = 0;
            while last < *n {
                last = seq_rx
                    .recv()
                    .map_err(|_| AppError::Monitor("monitor worker has exited".to_string()))?;
            }
            last
        }
        None => {
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            seq_rx.try_iter().last().unwrap_or(0)
        }
    };

    handle.stop();
    success(format!("Monitor stopped after {} evaluation(s)", evaluations));
    Ok(())
}
