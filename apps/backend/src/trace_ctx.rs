//! Task-local trace id for the request being served.
//!
//! `RequestTrace` establishes the scope; error rendering reads it so the
//! Problem Details body and the `x-trace-id` header always agree.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current task, or "unknown" outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run `future` with `trace_id` installed as the task-local trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
