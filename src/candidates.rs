use chrono::NaiveDate;

/// Candidate dates split around a target, ready for [`crate::window::DisplayModel::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    /// The target date itself was among the inputs.
    pub exact: bool,
    pub older: Vec<NaiveDate>,
    pub newer: Vec<NaiveDate>,
}

impl Candidates {
    /// Sort, de-duplicate and partition `dates` relative to `target`.
    pub fn classify<I>(target: NaiveDate, dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut all: Vec<NaiveDate> = dates.into_iter().collect();
        all.sort_unstable();
        all.dedup();

        let mut out = Candidates::default();
        for date in all {
            match date.cmp(&target) {
                std::cmp::Ordering::Less => out.older.push(date),
                std::cmp::Ordering::Equal => out.exact = true,
                std::cmp::Ordering::Greater => out.newer.push(date),
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.older.is_empty() && self.newer.is_empty()
    }
}
