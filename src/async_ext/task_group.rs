//! Structured group of fallible tasks with first-error semantics.

use core::future::Future;

use tokio::task::JoinSet;

use crate::types::{AppError, AppResult, StatusCode};

/// Runs a set of tasks working on subtasks of one operation.
///
/// The first task to return an error decides the group's outcome: the
/// remaining tasks are aborted and [`wait`](TaskGroup::wait) returns that
/// error. A panicking task is reported as a 500-class error rather than
/// propagating the panic.
///
/// # Examples
///
/// ```rust,ignore
/// use app_error::async_ext::TaskGroup;
///
/// let mut group = TaskGroup::new();
/// for shard in shards {
///     group.spawn(async move { reindex(shard).await });
/// }
/// group.wait().await?;
/// ```
#[derive(Debug, Default)]
pub struct TaskGroup {
    tasks: JoinSet<AppResult<()>>,
}

impl TaskGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self { tasks: JoinSet::new() }
    }

    /// Spawns a task onto the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, as `tokio::spawn` does.
    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = AppResult<()>> + Send + 'static,
    {
        self.tasks.spawn(task);
    }

    /// Number of tasks still owned by the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if nothing has been spawned or everything has been
    /// reaped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Waits for every task, returning the first error if any occurred.
    ///
    /// On the first failure the remaining tasks are aborted; their
    /// cancellation results are discarded. An empty group returns `Ok(())`.
    pub async fn wait(mut self) -> AppResult<()> {
        let mut first: Option<AppError> = None;

        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    if first.is_none() {
                        first = Some(err);
                        self.tasks.abort_all();
                    }
                }
                Err(join_err) => {
                    // Aborted siblings surface as cancelled joins; only
                    // genuine panics become errors.
                    if join_err.is_panic() && first.is_none() {
                        first = Some(AppError::wrap(
                            "task panicked",
                            StatusCode::InternalServerError,
                            join_err,
                        ));
                        self.tasks.abort_all();
                    }
                }
            }
        }

        match first {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
