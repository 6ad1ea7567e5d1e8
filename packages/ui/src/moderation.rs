//! # Working-list logic for the approvals table
//!
//! The approvals view fetches one snapshot of pending registrations and
//! does everything else locally: refine ([`working_list`]), search
//! ([`filter_by_query`]), slice ([`page_slice`]), and gate the two actions
//! ([`can_approve`], [`can_reject`]). All of it is pure so the table's
//! behavior is testable without a backend or a DOM.

use api::PendingUser;

/// Refine a fetched snapshot into the working list: unapproved records
/// only, sorted by name ascending. Ordering is case-insensitive (Unicode
/// lowercasing as an approximation of locale collation) and stable, so
/// records with equal names keep their fetched order. Idempotent.
pub fn working_list(mut fetched: Vec<PendingUser>) -> Vec<PendingUser> {
    fetched.retain(|record| !record.approved);
    fetched.sort_by_key(|record| record.name.to_lowercase());
    fetched
}

/// Case-insensitive substring filter over name OR email. An empty or
/// whitespace-only query keeps the whole list. Never reorders.
pub fn filter_by_query(list: &[PendingUser], query: &str) -> Vec<PendingUser> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return list.to_vec();
    }
    list.iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&needle)
                || record.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Number of pages for `total` rows at `page_size` rows per page. An empty
/// list still renders one (empty) page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// The 1-based `page` slice of the list.
pub fn page_slice(list: &[PendingUser], page: usize, page_size: usize) -> Vec<PendingUser> {
    if page_size == 0 {
        return Vec::new();
    }
    let start = page.saturating_sub(1).saturating_mul(page_size);
    list.iter().skip(start).take(page_size).cloned().collect()
}

/// Approve requires that the target record is the one currently opened
/// ("viewed") in this UI session.
pub fn can_approve(selected: Option<i64>, target: i64) -> bool {
    selected == Some(target)
}

/// Reject requires an armed confirmation for the same record: the first
/// click arms it, the second fires.
pub fn can_reject(armed: Option<i64>, target: i64) -> bool {
    armed == Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str, email: &str, approved: bool) -> PendingUser {
        PendingUser {
            id,
            role: 1,
            name: name.to_string(),
            email: email.to_string(),
            mobile: String::new(),
            country: String::new(),
            approved,
            client_name: String::new(),
            client_address: String::new(),
            client_phone: String::new(),
            gst_number: String::new(),
            pan: String::new(),
        }
    }

    #[test]
    fn test_working_list_keeps_only_unapproved() {
        let fetched = vec![
            record(1, "Bea", "bea@example.com", true),
            record(2, "Ana", "ana@example.com", false),
            record(3, "Cyn", "cyn@example.com", false),
        ];

        let list = working_list(fetched);
        assert_eq!(
            list.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![2, 3],
            "approved records must not appear"
        );
    }

    #[test]
    fn test_working_list_sorts_case_insensitively() {
        let fetched = vec![
            record(1, "charlie", "c@example.com", false),
            record(2, "Alice", "a@example.com", false),
            record(3, "bob", "b@example.com", false),
        ];

        let names: Vec<_> = working_list(fetched).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alice", "bob", "charlie"]);
    }

    #[test]
    fn test_working_list_is_idempotent() {
        let fetched = vec![
            record(1, "Zed", "z@example.com", false),
            record(2, "Amy", "a@example.com", true),
            record(3, "Kim", "k@example.com", false),
        ];

        let once = working_list(fetched);
        let twice = working_list(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_twelve_users_paginate_into_ten_and_two() {
        // Fetched in reverse name order; the working list re-sorts them.
        let names = [
            "Zoe", "Yann", "Xena", "Walt", "Vera", "Uma", "Tara", "Sami", "Rhea", "Quin", "Pia",
            "Omar",
        ];
        let fetched: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, name)| record(i as i64, name, "u@example.com", false))
            .collect();

        let list = working_list(fetched);
        assert_eq!(list.len(), 12);
        assert_eq!(list[0].name, "Omar");

        assert_eq!(page_count(list.len(), 10), 2);

        let first = page_slice(&list, 1, 10);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].name, "Omar");
        assert_eq!(first[9].name, "Xena");

        let second = page_slice(&list, 2, 10);
        assert_eq!(
            second.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            vec!["Yann", "Zoe"]
        );
    }

    #[test]
    fn test_page_slice_past_the_end_is_empty() {
        let list = working_list(vec![record(1, "Ana", "a@example.com", false)]);
        assert!(page_slice(&list, 3, 10).is_empty());
    }

    #[test]
    fn test_page_count_minimum_is_one() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
    }

    #[test]
    fn test_filter_matches_name_or_email_case_insensitively() {
        let list = vec![
            record(1, "Ana Torres", "ana@acme.com", false),
            record(2, "Ben", "ben@torres.io", false),
            record(3, "Cleo", "cleo@acme.com", false),
        ];

        let hits = filter_by_query(&list, "TORRES");
        assert_eq!(hits.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_filter_result_is_subset_preserving_order() {
        let list = vec![
            record(1, "Ana", "ana@acme.com", false),
            record(2, "Ben", "ben@beta.io", false),
            record(3, "Cleo", "cleo@acme.com", false),
        ];

        let hits = filter_by_query(&list, "acme");
        assert!(hits.iter().all(|h| list.contains(h)));
        assert_eq!(hits.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let list = vec![
            record(1, "Ana", "a@example.com", false),
            record(2, "Ben", "b@example.com", false),
        ];
        assert_eq!(filter_by_query(&list, ""), list);
        assert_eq!(filter_by_query(&list, "   "), list);
    }

    #[test]
    fn test_approve_requires_matching_selection() {
        assert!(!can_approve(None, 5));
        assert!(!can_approve(Some(4), 5));
        assert!(can_approve(Some(5), 5));
    }

    #[test]
    fn test_reject_requires_armed_confirmation_for_same_record() {
        assert!(!can_reject(None, 5));
        assert!(!can_reject(Some(4), 5));
        assert!(can_reject(Some(5), 5));
    }
}
