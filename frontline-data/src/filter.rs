//! Date-range filtering applied before any layer is extracted.

use frontline_types::{DailyArea, DateRange, MilitaryEvent};

/// Keep the records whose date falls inside `range`, both ends included.
pub fn filter_by_date_range(data: &[DailyArea], range: &DateRange) -> Vec<DailyArea> {
    let bounds = range.iso_bounds();
    data.iter()
        .filter(|d| bounds.contains(&d.date))
        .cloned()
        .collect()
}

/// Keep the events whose date falls inside `range`, both ends included.
pub fn filter_events_by_date_range(events: &[MilitaryEvent], range: &DateRange) -> Vec<MilitaryEvent> {
    let bounds = range.iso_bounds();
    events
        .iter()
        .filter(|e| bounds.contains(&e.date))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(date: &str, name: &str) -> MilitaryEvent {
        MilitaryEvent {
            date: date.to_string(),
            name: name.to_string(),
            importance: 5.0,
            territorial: 5.0,
            strategic: 5.0,
            cascade: 5.0,
            confidence: "medium".to_string(),
        }
    }

    #[test]
    fn test_filter_is_inclusive() {
        let data = vec![
            DailyArea::new("2023-12-31", "ukraine_control_map", 1.0),
            DailyArea::new("2024-01-01", "ukraine_control_map", 2.0),
            DailyArea::new("2024-01-15", "kursk_russian_advances", 3.0),
            DailyArea::new("2024-01-31", "ukraine_control_map", 4.0),
            DailyArea::new("2024-02-01", "ukraine_control_map", 5.0),
        ];
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        let filtered = filter_by_date_range(&data, &range);
        let areas: Vec<f64> = filtered.iter().map(|d| d.area_km2).collect();
        assert_eq!(areas, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_filter_keeps_input_order() {
        let data = vec![
            DailyArea::new("2024-01-03", "ukraine_control_map", 3.0),
            DailyArea::new("2024-01-01", "ukraine_control_map", 1.0),
        ];
        let range = DateRange::parse("2024-01-01", "2024-01-03").unwrap();
        let filtered = filter_by_date_range(&data, &range);
        assert_eq!(filtered, data);
    }

    #[test]
    fn test_filter_events() {
        let events = vec![
            event("2024-02-17", "Avdiivka"),
            event("2024-08-06", "Kursk incursion"),
        ];
        let range = DateRange::parse("2024-08-01", "2024-08-31").unwrap();
        let visible = filter_events_by_date_range(&events, &range);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Kursk incursion");
    }

    #[test]
    fn test_filter_events_is_inclusive() {
        let events = vec![
            event("2024-07-31", "before"),
            event("2024-08-01", "first day"),
            event("2024-08-31", "last day"),
            event("2024-09-01", "after"),
        ];
        let range = DateRange::parse("2024-08-01", "2024-08-31").unwrap();
        let names: Vec<String> = filter_events_by_date_range(&events, &range)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["first day", "last day"]);
    }
}
