//! Captured header corpora used across harnesses.
//!
//! Each fixture is what `curl -sI` (or `curl -sD -`) printed for a real-looking
//! response, CRLF line endings included.

/// HTTP/1.1 response with a duplicated `Set-Cookie`.
pub const CURL_HEAD_HTTP11: &str = "HTTP/1.1 200 OK\r\n\
Date: Mon, 15 Jan 2024 10:00:00 GMT\r\n\
Content-Type: text/html; charset=UTF-8\r\n\
Content-Length: 1256\r\n\
Connection: keep-alive\r\n\
Cache-Control: max-age=604800\r\n\
X-Cache: HIT\r\n\
Set-Cookie: a=1; Path=/\r\n\
Set-Cookie: b=2; Path=/\r\n\
\r\n";

/// Redirect with a folded (obsolete line-continuation) header and noise.
pub const CURL_HEAD_FOLDED: &str = "HTTP/1.1 301 Moved Permanently\r\n\
Location: https://example.com/\r\n\
X-Long-Header: first part\r\n \
continued part here\r\n\
Server: nginx\r\n\
ok\r\n\
\r\n";

/// HTTP/2 status lines carry no reason phrase, so after trimming they do not
/// match the status pattern.
pub const CURL_HEAD_HTTP2: &str = "HTTP/2 200 \r\n\
content-type: application/json\r\n\
x-amz-cf-pop: FRA56-P1\r\n\
access-control-allow-origin: *\r\n\
\r\n";

/// Body text that leaked into the capture.
pub const NOT_A_HEADER: &str = "not a real header line that is long enough";
