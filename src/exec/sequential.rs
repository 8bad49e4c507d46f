use std::future::Future;

/// Runs deferred tasks strictly one at a time, in list order.
///
/// Task i+1 is not started until task i's future resolved. The first failure
/// is returned immediately and no later task runs; already-produced side
/// effects are left in place. On success the results come back in input
/// order.
///
/// Dump tools contend for database connection slots, so at most one task's
/// asynchronous operation may be outstanding at any time.
pub async fn run_sequential<T, E, F, Fut>(tasks: Vec<F>) -> Result<Vec<T>, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut results = Vec::with_capacity(tasks.len());
    for task in tasks {
        results.push(task().await?);
    }
    Ok(results)
}
