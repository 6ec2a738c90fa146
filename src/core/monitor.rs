//! Polling overdue monitor.
//!
//! # Responsibility
//! - Re-run [`evaluate`] immediately on start, on every [`MonitorHandle::refresh`]
//!   and then once per period.
//! - Carry the previous overdue count between ticks so an alert fires once
//!   per growth of the overdue set.
//!
//! # Invariants
//! - Exactly one worker thread per monitor; ticks never overlap.
//! - After [`MonitorHandle::stop`] returns (or the handle is dropped) no
//!   further evaluation runs.
//! - A failing task source skips the tick; it never ends the loop.

use crate::core::clock::Clock;
use crate::core::overdue::{OverdueEvaluation, evaluate};
use crate::errors::{AppError, AppResult};
use crate::models::task::Task;
use chrono::NaiveDateTime;
use crossbeam_channel::{Receiver, Sender, select, tick, unbounded};
use log::{debug, error, info, warn};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy)]
pub struct MonitorConfig {
    pub period: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_POLL_PERIOD,
        }
    }
}

impl MonitorConfig {
    /// Period in whole seconds; zero falls back to the default.
    pub fn from_secs(secs: u64) -> Self {
        if secs == 0 {
            Self::default()
        } else {
            Self {
                period: Duration::from_secs(secs),
            }
        }
    }
}

/// What the monitor reads on every tick.
#[derive(Debug, Clone, Default)]
pub struct TaskSnapshot {
    pub tasks: Vec<Task>,
    pub alerts_enabled: bool,
}

pub trait TaskSource: Send + 'static {
    fn snapshot(&mut self) -> AppResult<TaskSnapshot>;
}

impl<F> TaskSource for F
where
    F: FnMut() -> AppResult<TaskSnapshot> + Send + 'static,
{
    fn snapshot(&mut self) -> AppResult<TaskSnapshot> {
        self()
    }
}

/// One completed evaluation as seen by the sink.
#[derive(Debug, Clone)]
pub struct Tick {
    /// 1-based sequence number of the evaluation.
    pub seq: u64,
    pub at: NaiveDateTime,
    pub evaluation: OverdueEvaluation,
}

/// Receives every evaluation. Reacting to `should_alert` (sound, banner)
/// is the sink's job. A sink must not call [`MonitorHandle::stop`].
pub trait AlertSink: Send + 'static {
    fn on_tick(&mut self, tick: &Tick);
}

impl<F> AlertSink for F
where
    F: FnMut(&Tick) + Send + 'static,
{
    fn on_tick(&mut self, tick: &Tick) {
        self(tick)
    }
}

enum Control {
    Refresh,
    Stop,
}

pub struct OverdueMonitor;

impl OverdueMonitor {
    /// Spawn the monitor. The returned handle owns the worker: stop it
    /// explicitly or let it drop.
    pub fn start<S, C, K>(
        config: MonitorConfig,
        source: S,
        clock: C,
        sink: K,
    ) -> AppResult<MonitorHandle>
    where
        S: TaskSource,
        C: Clock + 'static,
        K: AlertSink,
    {
        let (ctl_tx, ctl_rx) = unbounded();

        let worker = thread::Builder::new()
            .name("overdue-monitor".to_string())
            .spawn(move || {
                Worker {
                    source,
                    clock,
                    sink,
                    previous_count: 0,
                    seq: 0,
                }
                .run(config.period, ctl_rx)
            })?;

        info!(
            "event=monitor_start module=monitor status=ok period_secs={}",
            config.period.as_secs()
        );

        Ok(MonitorHandle {
            ctl: ctl_tx,
            worker: Some(worker),
        })
    }
}

struct Worker<S, C, K> {
    source: S,
    clock: C,
    sink: K,
    previous_count: usize,
    seq: u64,
}

impl<S: TaskSource, C: Clock, K: AlertSink> Worker<S, C, K> {
    fn run(mut self, period: Duration, ctl: Receiver<Control>) {
        let ticker = tick(period);

        self.evaluate_once();

        loop {
            select! {
                recv(ticker) -> _ => self.evaluate_once(),
                recv(ctl) -> msg => match msg {
                    Ok(Control::Refresh) => self.evaluate_once(),
                    Ok(Control::Stop) | Err(_) => break,
                },
            }
        }

        debug!(
            "event=monitor_exit module=monitor evaluations={}",
            self.seq
        );
    }

    fn evaluate_once(&mut self) {
        let snapshot = match self.source.snapshot() {
            Ok(s) => s,
            Err(e) => {
                warn!("event=monitor_tick module=monitor status=skipped error={e}");
                return;
            }
        };

        let at = self.clock.now();
        let evaluation = evaluate(
            &snapshot.tasks,
            at,
            snapshot.alerts_enabled,
            self.previous_count,
        );

        self.previous_count = evaluation.count();
        self.seq += 1;

        debug!(
            "event=monitor_tick module=monitor seq={} overdue={} alert={}",
            self.seq,
            evaluation.count(),
            evaluation.should_alert
        );

        self.sink.on_tick(&Tick {
            seq: self.seq,
            at,
            evaluation,
        });
    }
}

/// Cancellation handle of a running monitor.
pub struct MonitorHandle {
    ctl: Sender<Control>,
    worker: Option<JoinHandle<()>>,
}

impl MonitorHandle {
    /// Ask for an immediate re-evaluation (the task list changed).
    pub fn refresh(&self) -> AppResult<()> {
        if self.worker.is_none() {
            return Err(AppError::Monitor("monitor already stopped".to_string()));
        }
        self.ctl
            .send(Control::Refresh)
            .map_err(|_| AppError::Monitor("monitor worker has exited".to_string()))
    }

    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Stop scheduling ticks and wait for the worker. Idempotent.
    pub fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };

        // The worker may already be gone (sink panic); joining reports it.
        let _ = self.ctl.send(Control::Stop);

        if worker.join().is_err() {
            error!("event=monitor_stop module=monitor status=error reason=worker_panicked");
        } else {
            info!("event=monitor_stop module=monitor status=ok");
        }
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
