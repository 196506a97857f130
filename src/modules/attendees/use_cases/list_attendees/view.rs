// Display shaping for the attendee listing.
//
// The endpoint serves the full ordered sequence; a viewer may narrow it to
// confirmations after a cutoff and collapse repeated names. Both are pure
// transforms over the list result, never a storage guarantee.

use crate::modules::attendees::core::record::AttendeeRecord;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListFilter {
    /// Keep only records confirmed at or after this cutoff.
    pub since: Option<DateTime<Utc>>,
    /// Keep the first occurrence of each name in the incoming order.
    pub dedup: bool,
}

pub fn shape(records: Vec<AttendeeRecord>, filter: ListFilter) -> Vec<AttendeeRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            filter
                .since
                .is_none_or(|cutoff| record.confirmed_at >= cutoff)
        })
        .filter(|record| !filter.dedup || seen.insert(record.name.clone()))
        .collect()
}
