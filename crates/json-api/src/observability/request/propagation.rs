//! W3C trace context extraction from incoming headers.

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::http::{HeaderMap, HeaderName};

/// Parent context carried by the request, if it names a valid remote span.
pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    let carrier = HeaderCarrier(headers);

    global::get_text_map_propagator(|propagator| {
        // Fresh base so requests without trace headers start a new root.
        let context = propagator.extract_with_context(&Context::new(), &carrier);

        context
            .span()
            .span_context()
            .is_valid()
            .then_some(context)
    })
}

#[derive(Debug)]
struct HeaderCarrier<'a>(&'a HeaderMap);

impl Extractor for HeaderCarrier<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}
