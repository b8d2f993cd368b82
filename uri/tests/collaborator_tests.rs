use abnf::{MatchSet, Recognizer};

#[test]
fn test_host_accepts_empty_input() {
    assert_eq!(uri::host().find(b""), MatchSet::empty_prefix());
}

#[test]
fn test_host_reports_every_reg_name_prefix() {
    let offsets = uri::host().find(b"255.255.255.255");

    assert_eq!(offsets.len(), 16);
    assert_eq!(offsets.longest(), Some(15));
}

#[test]
fn test_segment_stops_at_slash() {
    assert_eq!(uri::segment().find(b"index.html/x").longest(), Some(10));
}

#[test]
fn test_query_and_port() {
    assert_eq!(uri::query().find(b"key=value&x=%20 rest").longest(), Some(15));
    assert_eq!(uri::port().find(b"8080/").longest(), Some(4));
    assert_eq!(uri::port().find(b"/").longest(), Some(0));
}

#[test]
fn test_absolute_uri_with_ipv6_authority() {
    let data = b"http://[2001:db8::1]:8080/index.html?q";

    assert_eq!(uri::absolute_uri().find(data).longest(), Some(data.len()));
}
