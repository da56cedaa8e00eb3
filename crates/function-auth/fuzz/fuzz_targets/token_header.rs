#![no_main]

use axum::http::{HeaderMap, HeaderValue};
use function_auth::{AuthConfig, Authenticator, RuntimeIdentity, TOKEN_HEADER};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Key material is fuzzed too: any PEM text must fail cleanly
    let split = data.iter().position(|b| *b == 0).unwrap_or(data.len());
    let (pem, token) = data.split_at(split);

    let Ok(pem) = std::str::from_utf8(pem) else {
        return;
    };
    let Ok(value) = HeaderValue::from_bytes(token.get(1..).unwrap_or_default()) else {
        return;
    };

    let mut headers = HeaderMap::new();
    headers.insert(TOKEN_HEADER, value);

    let authenticator = Authenticator::new(AuthConfig::new(
        RuntimeIdentity::private("app-1", "ns-1"),
        pem,
    ));
    let _ = authenticator.authenticate(&headers);
});
