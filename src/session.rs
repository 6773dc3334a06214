// ============================================================================
// session.rs — sequential build execution
// ============================================================================
//
// spec.md's Non-goals exclude parallel building, so the teacher's threaded
// job-queue scheduler (builder.rs) is not carried over: BuildSession::run is
// a plain sequential loop over the resolved/filtered order, grounded on
// cmd/unibuild/main.go's runBuild (`for _, p := range filterSuite.Order() {
// p.Build(ctx, os.Stdout) }`). The cancellation token reuses the
// `Arc<AtomicBool>` primitive already used by the teacher's
// build_and_stream_output for GUI cancellation, now paired with an optional
// wall-clock deadline.
// ============================================================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::Error;
use crate::log_sink::{LogLevel, LogSink};
use crate::project::Project;

/// Carried through a build run: a cooperative cancellation flag plus an
/// optional deadline. Projects are expected to consult `is_cancelled`
/// between steps of their own `build`, the same way the teacher's
/// long-running jobs check `cancel` between compile/link steps.
#[derive(Clone)]
pub struct BuildContext {
    cancel: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl BuildContext {
    pub fn new() -> Self {
        BuildContext {
            cancel: Arc::new(AtomicBool::new(false)),
            deadline: None,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        BuildContext {
            cancel: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst) || self.is_past_deadline()
    }

    fn is_past_deadline(&self) -> bool {
        matches!(self.deadline, Some(deadline) if Instant::now() >= deadline)
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a completed (non-cancelled) run: how many projects built, in
/// what order, so main.rs can report a summary line.
#[derive(Debug)]
pub struct BuildReport {
    pub built: Vec<String>,
}

pub struct BuildSession;

impl BuildSession {
    /// Builds every project in `order`, stopping at the first failure or at
    /// cancellation. A cancelled run returns `Ok` with only the projects
    /// that finished; cancellation is cooperative and reported via `log`,
    /// not surfaced as an Error (a user-initiated stop is not a failure).
    pub fn run(
        order: &[Box<dyn Project>],
        ctx: &BuildContext,
        log: &mut dyn LogSink,
    ) -> Result<BuildReport, Error> {
        let mut built = Vec::with_capacity(order.len());

        for project in order {
            if ctx.is_cancelled() {
                log.line(None, LogLevel::Warn, "build cancelled");
                break;
            }

            let info = project.info();
            log.line(Some(&info.name), LogLevel::Info, "building");

            match project.build(ctx, log) {
                Ok(()) => {
                    built.push(info.name);
                }
                Err(source) => {
                    log.line(Some(&info.name), LogLevel::Error, "build failed");
                    return Err(Error::BuildFailed {
                        project: info.name,
                        source,
                    });
                }
            }
        }

        Ok(BuildReport { built })
    }
}
