use futures::future::{select, Either};
use std::future::Future;

/// Drive `work` until `deadline` resolves. `None` means the deadline won and
/// `work` was dropped unfinished.
pub async fn within<W, D>(work: W, deadline: D) -> Option<W::Output>
where
    W: Future,
    D: Future<Output = ()>,
{
    futures::pin_mut!(work, deadline);
    match select(work, deadline).await {
        Either::Left((out, _)) => Some(out),
        Either::Right(((), _)) => None,
    }
}

/// Wrap `f` so it can sit behind a repeatable callback: the first call runs
/// it, later calls do nothing and report `false`.
pub fn once<F: FnOnce()>(f: F) -> impl FnMut() -> bool {
    let mut pending = Some(f);
    move || match pending.take() {
        Some(f) => {
            f();
            true
        }
        None => false,
    }
}
