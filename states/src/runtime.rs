//! Platform shim for spawning command futures.
//!
//! On native we reuse the ambient tokio runtime when one exists (tests) and
//! otherwise lazily build a small shared runtime; eframe apps have no runtime
//! of their own. On wasm the browser event loop does the driving.

use std::future::Future;
use std::pin::Pin;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn spawn(fut: Pin<Box<dyn Future<Output = ()> + Send>>) {
    use std::sync::OnceLock;

    static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        handle.spawn(fut);
        return;
    }

    RUNTIME
        .get_or_init(|| {
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .expect("failed to build command runtime")
        })
        .spawn(fut);
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn spawn(fut: Pin<Box<dyn Future<Output = ()> + Send>>) {
    wasm_bindgen_futures::spawn_local(fut);
}
