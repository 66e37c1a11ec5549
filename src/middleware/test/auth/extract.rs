use super::*;

/// Tests reading the token from the bearer header.
#[test]
fn reads_bearer_token() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, "Bearer abc123".parse().unwrap());

    assert_eq!(extract_token(&headers).as_deref(), Some("abc123"));
}

/// Tests reading the token from the access token cookie.
#[test]
fn reads_cookie_token() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        "theme=dark; accessToken=abc123; other=1".parse().unwrap(),
    );

    assert_eq!(extract_token(&headers).as_deref(), Some("abc123"));
}

/// Tests that the cookie wins when both carriers are present.
#[test]
fn cookie_takes_precedence_over_bearer() {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, "accessToken=from-cookie".parse().unwrap());
    headers.insert(
        header::AUTHORIZATION,
        "Bearer from-header".parse().unwrap(),
    );

    assert_eq!(extract_token(&headers).as_deref(), Some("from-cookie"));
}

/// Tests the empty case.
#[test]
fn returns_none_without_token() {
    let headers = HeaderMap::new();

    assert!(extract_token(&headers).is_none());
}

/// Tests that a malformed authorization scheme is not treated as a token.
#[test]
fn ignores_non_bearer_authorization() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, "Basic abc123".parse().unwrap());

    assert!(extract_token(&headers).is_none());
}

/// Tests named cookie lookup.
#[test]
fn finds_named_cookie() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        "accessToken=a; refreshToken=r".parse().unwrap(),
    );

    assert_eq!(cookie_value(&headers, "refreshToken").as_deref(), Some("r"));
    assert!(cookie_value(&headers, "missing").is_none());
}
