//! Bounded-concurrency mapping.

use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use tracing::debug;

/// Default number of tasks [`parallel_limit`] callers usually want in flight.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Run `f(item, index)` over `items` with at most `concurrency` futures in
/// flight, returning the outputs in input order.
///
/// A `concurrency` of zero is treated as one.
///
/// # Errors
///
/// Fails fast: the first error is returned as soon as it is observed and
/// every future still in flight is dropped. Items not yet started are never
/// started.
///
/// # Examples
///
/// ```
/// use casoon_util_async::parallel_limit;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let doubled = parallel_limit(vec![1, 2, 3, 4, 5], |n, _index| async move { Ok::<_, ()>(n * 2) }, 2).await;
/// assert_eq!(doubled, Ok(vec![2, 4, 6, 8, 10]));
/// # });
/// ```
pub async fn parallel_limit<I, F, Fut, T, E>(
    items: I,
    mut f: F,
    concurrency: usize,
) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let items: Vec<I::Item> = items.into_iter().collect();
    let total = items.len();
    let limit = concurrency.max(1);
    debug!(total, concurrency = limit, "starting bounded parallel run");

    let mut results: Vec<Option<T>> = Vec::with_capacity(total);
    results.resize_with(total, || None);

    let mut queue = items.into_iter().enumerate();
    let mut in_flight = FuturesUnordered::new();
    for (index, item) in queue.by_ref().take(limit) {
        in_flight.push(indexed(index, f(item, index)));
    }

    while let Some((index, outcome)) = in_flight.next().await {
        match outcome {
            Ok(value) => results[index] = Some(value),
            Err(err) => {
                debug!(index, abandoned = in_flight.len(), "task failed, abandoning the rest");
                return Err(err);
            }
        }
        if let Some((next, item)) = queue.next() {
            in_flight.push(indexed(next, f(item, next)));
        }
    }

    Ok(results.into_iter().flatten().collect())
}

async fn indexed<Fut: Future>(index: usize, future: Fut) -> (usize, Fut::Output) {
    (index, future.await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_empty_input() {
        let out: Result<Vec<u8>, ()> =
            parallel_limit(Vec::<u8>::new(), |n, _| async move { Ok(n) }, 3).await;
        assert_eq!(out, Ok(vec![]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_order_follows_input_not_completion() {
        let out: Result<Vec<usize>, ()> = parallel_limit(
            vec![30u64, 10, 20],
            |ms, index| async move {
                tokio::time::sleep(Duration::from_millis(ms)).await;
                Ok(index)
            },
            3,
        )
        .await;
        assert_eq!(out, Ok(vec![0, 1, 2]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_respects_limit() {
        let active = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let out: Result<Vec<u32>, ()> = parallel_limit(
            0..10u32,
            |n, _| {
                let active = Arc::clone(&active);
                let peak = Arc::clone(&peak);
                async move {
                    let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    active.fetch_sub(1, Ordering::SeqCst);
                    Ok(n)
                }
            },
            3,
        )
        .await;

        assert_eq!(out.unwrap(), (0..10).collect::<Vec<_>>());
        assert_eq!(peak.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_concurrency_runs_sequentially() {
        let peak = Arc::new(AtomicUsize::new(0));
        let active = Arc::new(AtomicUsize::new(0));

        let out: Result<Vec<u32>, ()> = parallel_limit(
            vec![1u32, 2, 3],
            |n, _| {
                let active = Arc::clone(&active);
                let peak = Arc::clone(&peak);
                async move {
                    let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(1)).await;
                    active.fetch_sub(1, Ordering::SeqCst);
                    Ok(n)
                }
            },
            0,
        )
        .await;

        assert_eq!(out, Ok(vec![1, 2, 3]));
        assert_eq!(peak.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fails_fast() {
        let started = Arc::new(AtomicUsize::new(0));

        let out: Result<Vec<u32>, String> = parallel_limit(
            1..=6u32,
            |n, _| {
                let started = Arc::clone(&started);
                async move {
                    started.fetch_add(1, Ordering::SeqCst);
                    if n == 2 {
                        return Err(format!("item {n} failed"));
                    }
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    Ok(n)
                }
            },
            2,
        )
        .await;

        assert_eq!(out, Err("item 2 failed".to_string()));
        // Items past the first window never start
        assert!(started.load(Ordering::SeqCst) <= 2);
    }
}
