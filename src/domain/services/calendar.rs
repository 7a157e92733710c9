use crate::domain::models::event::{Event, EventStatus};
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

pub const GRID_CELLS: usize = 42;

pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"];

/// A calendar month, held as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarMonth(NaiveDate);

impl CalendarMonth {
    /// `None` for a month outside 1..=12 or a year chrono cannot represent.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self(date.checked_sub_days(Days::new(date.day0().into())).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            4 | 6 | 9 | 11 => 30,
            2 if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Weekday of day 1, 0 = Sunday.
    pub fn first_weekday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn prev(&self) -> Self {
        Self(shift_month(self.0, -1))
    }

    pub fn next(&self) -> Self {
        Self(shift_month(self.0, 1))
    }

    /// Display title, e.g. "Marzo 2024".
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.0.month0() as usize], self.year())
    }
}

/// Day 1 of the month `delta` months away from `date`'s month. Saturates at
/// the bounds of the representable calendar.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = CalendarMonth::containing(date).0;
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    shifted.unwrap_or(first)
}

/// Dot shown under a day: green when something is confirmed, yellow otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayMarker {
    None,
    Confirmed,
    Pending,
}

pub fn day_marker(events: &[&Event]) -> DayMarker {
    if events.is_empty() {
        DayMarker::None
    } else if events.iter().any(|e| e.status == EventStatus::Confirmed) {
        DayMarker::Confirmed
    } else {
        DayMarker::Pending
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell<'a> {
    pub day: u32,
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub marker: DayMarker,
    pub events: Vec<&'a Event>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarGrid<'a> {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub cells: Vec<DayCell<'a>>,
}

/// Lays out six Sunday-first weeks around `month`. Only in-month cells carry
/// events, in the order they appear in `events`.
pub fn build_grid<'a>(month: CalendarMonth, events: &'a [Event], today: NaiveDate) -> CalendarGrid<'a> {
    let first = month.first_day();
    let start = first
        .checked_sub_days(Days::new(month.first_weekday().into()))
        .unwrap_or(first);

    let cells = start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| {
            let is_current_month = CalendarMonth::containing(date) == month;
            let day_events: Vec<&Event> = if is_current_month {
                events.iter().filter(|e| e.date == date).collect()
            } else {
                Vec::new()
            };

            DayCell {
                day: date.day(),
                date,
                is_current_month,
                is_today: is_current_month && date == today,
                marker: day_marker(&day_events),
                events: day_events,
            }
        })
        .collect();

    CalendarGrid {
        year: month.year(),
        month: month.month(),
        title: month.title(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::event::VenueAssignment;
    use chrono::{NaiveTime, Utc};

    fn event(date: &str, status: EventStatus) -> Event {
        let now = Utc::now();
        Event {
            id: date.to_string(),
            user_id: "owner-1".into(),
            name: "Evento".into(),
            event_type: "Boda".into(),
            status,
            date: date.parse().unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            setup_time: None,
            teardown_time: None,
            client: None,
            venue: VenueAssignment { salon: "Diamante".into(), ..Default::default() },
            services: vec![],
            equipment: vec![],
            staff: Default::default(),
            financial: None,
            logistics: Default::default(),
            legal: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_every_month_has_42_cells() {
        let today = date("2024-01-01");
        for year in [2023, 2024, 2100] {
            for m in 1..=12 {
                let month = CalendarMonth::new(year, m).unwrap();
                let grid = build_grid(month, &[], today);
                assert_eq!(grid.cells.len(), GRID_CELLS);
                let in_month = grid.cells.iter().filter(|c| c.is_current_month).count();
                assert_eq!(in_month as u32, month.days_in_month(), "{}-{}", year, m);
            }
        }
    }

    #[test]
    fn test_leading_and_trailing_cells() {
        // March 2024 starts on a Friday; February 2024 has 29 days.
        let grid = build_grid(CalendarMonth::new(2024, 3).unwrap(), &[], date("2024-03-15"));
        let leading: Vec<u32> = grid.cells.iter().take(5).map(|c| c.day).collect();
        assert_eq!(leading, vec![25, 26, 27, 28, 29]);
        assert!(grid.cells[..5].iter().all(|c| !c.is_current_month));
        assert_eq!(grid.cells[5].day, 1);
        assert!(grid.cells[5].is_current_month);

        let trailing: Vec<u32> = grid.cells[36..].iter().map(|c| c.day).collect();
        assert_eq!(trailing, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_cells() {
        // September 2024 starts on a Sunday.
        let month = CalendarMonth::new(2024, 9).unwrap();
        assert_eq!(month.first_weekday(), 0);
        let grid = build_grid(month, &[], date("2024-01-01"));
        assert_eq!(grid.cells[0].day, 1);
        assert!(grid.cells[0].is_current_month);
    }

    #[test]
    fn test_events_attach_to_in_month_cells_only() {
        let events = vec![
            event("2024-03-05", EventStatus::Pending),
            event("2024-03-05", EventStatus::Confirmed),
            event("2024-04-01", EventStatus::Confirmed),
        ];
        let grid = build_grid(CalendarMonth::new(2024, 3).unwrap(), &events, date("2024-03-01"));

        for cell in &grid.cells {
            if cell.is_current_month && cell.day == 5 {
                assert_eq!(cell.events.len(), 2);
                assert_eq!(cell.marker, DayMarker::Confirmed);
            } else {
                // April 1st is shown as a trailing cell but carries nothing.
                assert!(cell.events.is_empty());
                assert_eq!(cell.marker, DayMarker::None);
            }
        }
    }

    #[test]
    fn test_pending_marker() {
        let events = vec![event("2024-03-07", EventStatus::Pending)];
        let refs: Vec<&Event> = events.iter().collect();
        assert_eq!(day_marker(&refs), DayMarker::Pending);
        assert_eq!(day_marker(&[]), DayMarker::None);
    }

    #[test]
    fn test_today_is_flagged_in_current_month_only() {
        let grid = build_grid(CalendarMonth::new(2024, 3).unwrap(), &[], date("2024-03-10"));
        let today: Vec<&DayCell> = grid.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].day, 10);

        let grid = build_grid(CalendarMonth::new(2024, 2).unwrap(), &[], date("2024-03-01"));
        assert!(grid.cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_navigation_rolls_years() {
        let january = CalendarMonth::new(2024, 1).unwrap();
        let december = january.prev();
        assert_eq!((december.year(), december.month()), (2023, 12));
        assert_eq!(december.next(), january);

        assert_eq!(shift_month(date("2024-01-31"), 1), date("2024-02-01"));
        assert_eq!(shift_month(date("2024-03-31"), -1), date("2024-02-01"));
    }

    #[test]
    fn test_days_in_month_and_title() {
        assert_eq!(CalendarMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(CalendarMonth::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(CalendarMonth::new(2024, 4).unwrap().days_in_month(), 30);
        assert_eq!(CalendarMonth::new(2024, 3).unwrap().title(), "Marzo 2024");
        assert_eq!(CalendarMonth::new(2024, 9).unwrap().title(), "Septiembre 2024");
        assert_eq!(CalendarMonth::new(2024, 12).unwrap().title(), "Diciembre 2024");
        assert!(CalendarMonth::new(2024, 13).is_none());
    }
}
