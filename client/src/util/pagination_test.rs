use super::*;

fn tx_at(id: &str, timestamp: &str) -> Transaction {
    Transaction {
        id: id.to_owned(),
        amount: 1.0,
        kind: "fund".to_owned(),
        status: None,
        timestamp: timestamp.to_owned(),
        sender: None,
        receiver: None,
        description: None,
    }
}

/// `count` transactions on consecutive days, oldest first, ids `t0..`.
fn daily(count: usize) -> Vec<Transaction> {
    (0..count)
        .map(|i| {
            let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64);
            tx_at(&format!("t{i}"), &format!("{}T12:00:00Z", day.format("%Y-%m-%d")))
        })
        .collect()
}

// =============================================================
// Page counts
// =============================================================

#[test]
fn page_count_is_ceiling_of_ten() {
    assert_eq!(total_pages(0), 0);
    assert_eq!(total_pages(1), 1);
    assert_eq!(total_pages(10), 1);
    assert_eq!(total_pages(11), 2);
    assert_eq!(total_pages(25), 3);
}

#[test]
fn clamp_page_bounds() {
    assert_eq!(clamp_page(0, 3), 1);
    assert_eq!(clamp_page(2, 3), 2);
    assert_eq!(clamp_page(9, 3), 3);
    assert_eq!(clamp_page(4, 0), 1);
}

// =============================================================
// paginate
// =============================================================

#[test]
fn first_page_holds_ten_most_recent() {
    let page = paginate(&daily(25), 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 1);
    assert_eq!(page.items.len(), 10);
    let ids: Vec<&str> = page.items.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t24", "t23", "t22", "t21", "t20", "t19", "t18", "t17", "t16", "t15"]);
    assert!(!page.has_prev());
    assert!(page.has_next());
}

#[test]
fn last_page_holds_remainder() {
    let page = paginate(&daily(25), 3);
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.items[0].id, "t4");
    assert_eq!(page.items[4].id, "t0");
    assert!(!page.has_next());
}

#[test]
fn out_of_range_page_is_clamped() {
    let page = paginate(&daily(12), 7);
    assert_eq!(page.page, 2);
    assert_eq!(page.items.len(), 2);
}

#[test]
fn empty_history_yields_empty_first_page() {
    let page = paginate(&[], 1);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
    assert!(!page.has_next());
}

#[test]
fn sort_respects_timezone_offsets() {
    let mut txs = vec![
        tx_at("utc", "2024-03-01T10:00:00Z"),
        tx_at("plus2", "2024-03-01T11:00:00+02:00"),
    ];
    sort_newest_first(&mut txs);
    assert_eq!(txs[0].id, "utc");
}

#[test]
fn unparseable_timestamps_sort_last_and_stay_stable() {
    let mut txs = vec![
        tx_at("bad1", "yesterday"),
        tx_at("old", "2023-01-01"),
        tx_at("bad2", ""),
        tx_at("new", "2024-06-01T00:00:00Z"),
    ];
    sort_newest_first(&mut txs);
    let ids: Vec<&str> = txs.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["new", "old", "bad1", "bad2"]);
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn status_label_capitalizes_and_defaults() {
    assert_eq!(status_label(Some("PENDING")), "Pending");
    assert_eq!(status_label(Some("approved")), "Approved");
    assert_eq!(status_label(None), "Approved");
    assert_eq!(status_label(Some("  ")), "Approved");
}

#[test]
fn short_reference_takes_five_chars() {
    assert_eq!(short_reference("abcdef123"), "TXNabcde");
    assert_eq!(short_reference("42"), "TXN42");
}

#[test]
fn display_date_formats_or_passes_through() {
    assert_eq!(display_date("2024-05-01T23:30:00Z"), "2024-05-01");
    assert_eq!(display_date("soon"), "soon");
}
