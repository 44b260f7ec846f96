//! Month-over-month net change.

use frontline_types::MonthlyChange;
use frontline_utils::dates::month_key;
use std::collections::BTreeMap;

/// First and last value observed within one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthSpan {
    pub first: f64,
    pub last: f64,
}

/// Group observations by "YYYY-MM".
///
/// `last` is overwritten on every observation, so with dates in ascending
/// order it holds the final value of the month. Keys iterate in
/// chronological order.
pub fn month_spans<S: AsRef<str>>(dates: &[S], values: &[f64]) -> BTreeMap<String, MonthSpan> {
    let mut by_month: BTreeMap<String, MonthSpan> = BTreeMap::new();
    for (date, &value) in dates.iter().zip(values) {
        by_month
            .entry(month_key(date.as_ref()).to_string())
            .and_modify(|span| span.last = value)
            .or_insert(MonthSpan {
                first: value,
                last: value,
            });
    }
    by_month
}

/// Net change per month: last value of the month minus the last value of
/// the previous month that has any data.
///
/// The first month has no predecessor and produces no record, so `k`
/// months yield `k - 1` changes. A month with no observations at all is
/// skipped and the next month is compared against the nearest earlier one.
pub fn monthly_changes<S: AsRef<str>>(dates: &[S], values: &[f64]) -> Vec<MonthlyChange> {
    let spans = month_spans(dates, values);
    let months: Vec<(&String, &MonthSpan)> = spans.iter().collect();

    months
        .windows(2)
        .map(|pair| {
            let (_, prev) = pair[0];
            let (month, curr) = pair[1];
            MonthlyChange {
                month: month.clone(),
                change: curr.last - prev.last,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_months() {
        let dates = ["2024-01-05", "2024-01-20", "2024-02-10"];
        let values = [10.0, 15.0, 25.0];

        let spans = month_spans(&dates, &values);
        assert_eq!(spans["2024-01"], MonthSpan { first: 10.0, last: 15.0 });
        assert_eq!(spans["2024-02"], MonthSpan { first: 25.0, last: 25.0 });

        let changes = monthly_changes(&dates, &values);
        assert_eq!(
            changes,
            vec![MonthlyChange {
                month: "2024-02".to_string(),
                change: 10.0
            }]
        );
    }

    #[test]
    fn test_record_count_is_months_minus_one() {
        assert!(monthly_changes::<&str>(&[], &[]).is_empty());
        assert!(monthly_changes(&["2024-03-01", "2024-03-31"], &[1.0, 2.0]).is_empty());

        let dates = ["2023-11-30", "2023-12-01", "2024-01-01", "2024-02-01", "2024-02-02"];
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let changes = monthly_changes(&dates, &values);
        assert_eq!(changes.len(), 3);
        let months: Vec<&str> = changes.iter().map(|c| c.month.as_str()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn test_gap_month_diffs_against_nearest_prior_month() {
        // March has no data; April is compared against February directly,
        // so the two-month movement lands in a single record.
        let dates = ["2024-02-28", "2024-04-01", "2024-04-30"];
        let values = [100.0, 130.0, 160.0];
        let changes = monthly_changes(&dates, &values);
        assert_eq!(
            changes,
            vec![MonthlyChange {
                month: "2024-04".to_string(),
                change: 60.0
            }]
        );
    }

    #[test]
    fn test_negative_change() {
        let changes = monthly_changes(&["2024-08-31", "2024-09-30"], &[1200.0, 950.5]);
        assert_eq!(changes[0].change, -249.5);
    }
}
