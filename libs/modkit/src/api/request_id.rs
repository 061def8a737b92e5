//! Request id of the HTTP call being served, readable from inside handlers.
//!
//! The ingress runs every request inside [`with_request_id`]; error mappers call
//! [`current_request_id`] to stamp it on problem documents.

use std::future::Future;

tokio::task_local! {
    static REQUEST_ID: String;
}

/// Run `fut` with `id` as the current request id.
pub async fn with_request_id<F>(id: String, fut: F) -> F::Output
where
    F: Future,
{
    REQUEST_ID.scope(id, fut).await
}

/// `None` outside a request scope.
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(Clone::clone).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn id_is_visible_only_inside_the_scope() {
        assert_eq!(current_request_id(), None);
        let seen = with_request_id("req-1".to_string(), async { current_request_id() }).await;
        assert_eq!(seen.as_deref(), Some("req-1"));
        assert_eq!(current_request_id(), None);
    }
}
