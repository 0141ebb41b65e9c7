//! Completion notifications for the request pipeline.
//!
//! Observers registered on an [`HttpClient`](crate::clients::HttpClient) are
//! called synchronously, in registration order, once a successful response
//! has been decoded into the caller's type. Failed requests, and responses
//! that do not decode, are not reported.
//!
//! Any `Fn(&HttpRequest, &HttpResponse) + Send + Sync` closure is an observer:
//!
//! ```rust
//! use gs1_pds::clients::{HttpRequest, HttpResponse, RequestObserver};
//!
//! fn assert_observer<O: RequestObserver>(_: O) {}
//!
//! assert_observer(|request: &HttpRequest, response: &HttpResponse| {
//!     println!("{} {} -> {}", request.http_method, request.path, response.code);
//! });
//! ```

use crate::clients::{HttpRequest, HttpResponse};

/// Receives the request and raw response of every successful call.
pub trait RequestObserver: Send + Sync {
    /// Called once per successful request, after the body is decoded.
    fn on_request_completed(&self, request: &HttpRequest, response: &HttpResponse);
}

impl<F> RequestObserver for F
where
    F: Fn(&HttpRequest, &HttpResponse) + Send + Sync,
{
    fn on_request_completed(&self, request: &HttpRequest, response: &HttpResponse) {
        self(request, response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_closure_observer_is_invoked() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let observer = move |_: &HttpRequest, response: &HttpResponse| {
            assert_eq!(response.code, 200);
            seen.fetch_add(1, Ordering::SeqCst);
        };

        let request = HttpRequest::builder(HttpMethod::Get, "products")
            .build()
            .unwrap();
        let response = HttpResponse::new(200, "OK", HashMap::new(), serde_json::json!([]));

        let boxed: Box<dyn RequestObserver> = Box::new(observer);
        boxed.on_request_completed(&request, &response);
        boxed.on_request_completed(&request, &response);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
