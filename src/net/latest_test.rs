use super::*;

#[test]
fn newest_ticket_is_current() {
    let mut latest = LatestRequest::default();
    let first = latest.begin();
    assert!(latest.is_current(first));
}

#[test]
fn older_ticket_is_dropped_after_newer_request() {
    let mut latest = LatestRequest::default();
    let page_one = latest.begin();
    let page_two = latest.begin();
    assert!(!latest.is_current(page_one));
    assert!(latest.is_current(page_two));
}

#[test]
fn supersede_invalidates_outstanding_ticket() {
    let mut latest = LatestRequest::default();
    let ticket = latest.begin();
    latest.supersede();
    assert!(!latest.is_current(ticket));
}
