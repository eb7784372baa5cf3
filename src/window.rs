//! Windowing of candidate dates into a bounded, labeled display model.
//!
//! Older candidates keep the entries closest to the target (the tail of the
//! ascending list) and newer candidates keep the head, so truncation never
//! hides a closer date behind a farther one. The "none of these" sentinel
//! always sits between the two blocks.

use chrono::NaiveDate;

/// Label of the sentinel row that declines every candidate.
pub const NONE_LABEL: &str = "None of these (rig changed)";

/// Number of candidates shown per side when the caller has no preference.
pub const DEFAULT_PICKER_LIMIT: usize = 5;

/// One selectable row. `value` is `None` only for the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub label: String,
    pub value: Option<NaiveDate>,
}

impl DisplayItem {
    fn candidate(date: NaiveDate, target: NaiveDate) -> Self {
        Self {
            label: format!("{}  {}", date.format("%Y-%m-%d"), day_diff_label(date, target)),
            value: Some(date),
        }
    }

    fn sentinel() -> Self {
        Self {
            label: NONE_LABEL.to_string(),
            value: None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.value.is_none()
    }
}

/// Immutable picker state for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    items: Vec<DisplayItem>,
    none_index: usize,
    older_hidden: Option<usize>,
    newer_hidden: Option<usize>,
}

impl DisplayModel {
    /// Build the display model.
    ///
    /// Precondition: `older` and `newer` are each sorted ascending, every
    /// entry of `older` is strictly before `target` and every entry of
    /// `newer` strictly after it. Classifying candidates is the caller's
    /// job (see [`crate::candidates::Candidates`]); nothing is re-sorted here.
    pub fn build(
        target: NaiveDate,
        older: &[NaiveDate],
        newer: &[NaiveDate],
        limit: usize,
    ) -> Self {
        let visible_older = &older[older.len().saturating_sub(limit)..];
        let visible_newer = &newer[..newer.len().min(limit)];

        let mut items = Vec::with_capacity(visible_older.len() + 1 + visible_newer.len());
        items.extend(visible_older.iter().map(|d| DisplayItem::candidate(*d, target)));
        let none_index = items.len();
        items.push(DisplayItem::sentinel());
        items.extend(visible_newer.iter().map(|d| DisplayItem::candidate(*d, target)));

        Self {
            items,
            none_index,
            older_hidden: hidden_count(older.len(), limit),
            newer_hidden: hidden_count(newer.len(), limit),
        }
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: the sentinel row is present in every model.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn none_index(&self) -> usize {
        self.none_index
    }

    pub fn older_hidden(&self) -> Option<usize> {
        self.older_hidden
    }

    pub fn newer_hidden(&self) -> Option<usize> {
        self.newer_hidden
    }

    /// Value behind row `index`; `None` for the sentinel or an index past the end.
    pub fn value(&self, index: usize) -> Option<NaiveDate> {
        self.items.get(index).and_then(|item| item.value)
    }

    pub fn older_notice(&self) -> Option<String> {
        self.older_hidden
            .map(|n| format!("... {} more older flats not shown", n))
    }

    pub fn newer_notice(&self) -> Option<String> {
        self.newer_hidden
            .map(|n| format!("... {} more newer flats not shown", n))
    }
}

fn hidden_count(count: usize, limit: usize) -> Option<usize> {
    (count > limit).then(|| count - limit)
}

/// Relative-day descriptor of `candidate` measured from `target`.
pub fn day_diff_label(candidate: NaiveDate, target: NaiveDate) -> String {
    let diff = candidate.signed_duration_since(target).num_days();
    let magnitude = diff.unsigned_abs();
    let unit = if magnitude == 1 { "day" } else { "days" };
    match diff {
        d if d < 0 => format!("({} {} older)", magnitude, unit),
        d if d > 0 => format!("({} {} newer)", magnitude, unit),
        _ => "(same day)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn values(model: &DisplayModel) -> Vec<Option<NaiveDate>> {
        model.items().iter().map(|i| i.value).collect()
    }

    #[test]
    fn day_diff_labels() {
        let target = d(2025, 8, 20);
        assert_eq!(day_diff_label(d(2025, 8, 19), target), "(1 day older)");
        assert_eq!(day_diff_label(d(2025, 8, 10), target), "(10 days older)");
        assert_eq!(day_diff_label(d(2025, 8, 21), target), "(1 day newer)");
        assert_eq!(day_diff_label(d(2025, 8, 25), target), "(5 days newer)");
        assert_eq!(day_diff_label(d(2025, 8, 20), target), "(same day)");
    }

    #[test]
    fn builds_older_sentinel_newer_in_order() {
        let target = d(2025, 8, 20);
        let older = [d(2025, 8, 10), d(2025, 8, 17)];
        let newer = [d(2025, 8, 25), d(2025, 9, 1)];

        let model = DisplayModel::build(target, &older, &newer, 5);

        assert_eq!(model.len(), 5);
        assert_eq!(model.none_index(), 2);
        assert_eq!(model.items()[2].label, NONE_LABEL);
        assert!(model.items()[2].is_sentinel());
        assert_eq!(
            values(&model),
            vec![Some(older[0]), Some(older[1]), None, Some(newer[0]), Some(newer[1])]
        );
        assert_eq!(model.older_notice(), None);
        assert_eq!(model.newer_notice(), None);
    }

    #[test]
    fn labels_carry_iso_date_and_distance() {
        let target = d(2025, 8, 20);
        let model = DisplayModel::build(target, &[d(2025, 8, 17)], &[d(2025, 8, 25)], 5);

        assert_eq!(model.items()[0].label, "2025-08-17  (3 days older)");
        assert_eq!(model.items()[2].label, "2025-08-25  (5 days newer)");
    }

    #[test]
    fn truncates_older_to_most_recent() {
        let target = d(2025, 8, 20);
        let older = [
            d(2025, 7, 1),
            d(2025, 7, 15),
            d(2025, 8, 1),
            d(2025, 8, 10),
            d(2025, 8, 17),
        ];

        let model = DisplayModel::build(target, &older, &[], 3);

        assert_eq!(model.len(), 4);
        assert_eq!(model.none_index(), 3);
        assert_eq!(
            values(&model),
            vec![Some(d(2025, 8, 1)), Some(d(2025, 8, 10)), Some(d(2025, 8, 17)), None]
        );
        assert_eq!(model.older_hidden(), Some(2));
        assert_eq!(
            model.older_notice().as_deref(),
            Some("... 2 more older flats not shown")
        );
        assert_eq!(model.newer_hidden(), None);
    }

    #[test]
    fn truncates_newer_to_earliest() {
        let target = d(2025, 8, 20);
        let newer = [
            d(2025, 8, 25),
            d(2025, 9, 1),
            d(2025, 9, 10),
            d(2025, 9, 20),
            d(2025, 10, 1),
        ];

        let model = DisplayModel::build(target, &[], &newer, 3);

        assert_eq!(model.none_index(), 0);
        assert_eq!(
            values(&model),
            vec![None, Some(d(2025, 8, 25)), Some(d(2025, 9, 1)), Some(d(2025, 9, 10))]
        );
        assert_eq!(model.older_hidden(), None);
        assert_eq!(
            model.newer_notice().as_deref(),
            Some("... 2 more newer flats not shown")
        );
    }

    #[test]
    fn empty_inputs_leave_only_the_sentinel() {
        let model = DisplayModel::build(d(2025, 8, 20), &[], &[], 5);

        assert_eq!(model.len(), 1);
        assert_eq!(model.none_index(), 0);
        assert_eq!(model.items()[0].label, NONE_LABEL);
        assert_eq!(model.older_hidden(), None);
        assert_eq!(model.newer_hidden(), None);
    }

    #[test]
    fn zero_limit_hides_everything() {
        let target = d(2025, 8, 20);
        let older = [d(2025, 8, 10), d(2025, 8, 17)];
        let newer = [d(2025, 8, 25)];

        let model = DisplayModel::build(target, &older, &newer, 0);

        assert_eq!(model.len(), 1);
        assert_eq!(model.none_index(), 0);
        assert_eq!(model.older_hidden(), Some(2));
        assert_eq!(model.newer_hidden(), Some(1));
    }

    #[test]
    fn length_and_window_hold_for_every_limit() {
        let target = d(2025, 8, 20);
        let older: Vec<NaiveDate> = (1..=7).map(|day| d(2025, 8, day)).collect();
        let newer: Vec<NaiveDate> = (21..=24).map(|day| d(2025, 8, day)).collect();

        for limit in 0..10 {
            let model = DisplayModel::build(target, &older, &newer, limit);
            let shown_older = older.len().min(limit);
            let shown_newer = newer.len().min(limit);

            assert_eq!(model.len(), shown_older + 1 + shown_newer, "limit {}", limit);
            assert_eq!(model.none_index(), shown_older, "limit {}", limit);

            let vals = values(&model);
            let got_older: Vec<NaiveDate> = vals[..shown_older].iter().flatten().copied().collect();
            let got_newer: Vec<NaiveDate> = vals[shown_older + 1..].iter().flatten().copied().collect();
            assert_eq!(got_older, &older[older.len() - shown_older..]);
            assert_eq!(got_newer, &newer[..shown_newer]);

            assert_eq!(model.older_hidden(), (older.len() > limit).then(|| older.len() - limit));
            assert_eq!(model.newer_hidden(), (newer.len() > limit).then(|| newer.len() - limit));
        }
    }

    #[test]
    fn value_past_the_end_is_none() {
        let model = DisplayModel::build(d(2025, 8, 20), &[d(2025, 8, 19)], &[], 5);
        assert_eq!(model.value(0), Some(d(2025, 8, 19)));
        assert_eq!(model.value(1), None);
        assert_eq!(model.value(9), None);
    }
}
