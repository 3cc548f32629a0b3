#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use eckho::db::employees::Employee;
    use eckho::libs::record::TimeRecord;
    use eckho::libs::report::{
        day_roster, expected_window, filter_by_range, group_by_month, group_by_week,
        resolve_status, tally_statuses,
    };
    use eckho::libs::status::Status;
    use std::collections::HashMap;

    fn warehouse_employee(id: i64) -> Employee {
        Employee {
            id,
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            username: format!("john.smith{}", id),
            expected_start_time: None,
        }
    }

    fn field_employee(id: i64, expected_start: &str) -> Employee {
        Employee {
            id,
            first_name: "Ava".to_string(),
            last_name: "Martinez".to_string(),
            username: format!("ava.martinez{}", id),
            expected_start_time: Some(expected_start.to_string()),
        }
    }

    fn record(employee_id: i64, date: NaiveDate) -> TimeRecord {
        TimeRecord {
            employee_id,
            date,
            time_in: Some("08:00 AM".to_string()),
            time_out: Some("05:00 PM".to_string()),
            break_in: Some("12:00 PM".to_string()),
            break_out: Some("01:00 PM".to_string()),
            status: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_roster_covers_every_employee() {
        let employees = vec![warehouse_employee(1), warehouse_employee(2)];
        let day = date(2024, 1, 15);
        let mut records = HashMap::new();
        records.insert(1, record(1, day));

        let rows = day_roster(&employees, &records);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].status, Status::OnTime);
        assert!(rows[0].record.is_some());

        // No record for the second employee synthesizes a No Record row.
        assert_eq!(rows[1].status, Status::NoRecord);
        assert!(rows[1].record.is_none());
    }

    #[test]
    fn test_resolve_status_recomputes_and_falls_back() {
        let employee = warehouse_employee(1);
        let day = date(2024, 1, 15);

        // A stale stored label is overridden by the recomputed one.
        let mut stale = record(1, day);
        stale.status = Some(Status::Late);
        assert_eq!(resolve_status(&employee, &stale), Status::OnTime);

        // An incomplete record falls back to the stored label.
        let mut incomplete = record(1, day);
        incomplete.break_in = None;
        incomplete.break_out = None;
        incomplete.status = Some(Status::Late);
        assert_eq!(resolve_status(&employee, &incomplete), Status::Late);
    }

    #[test]
    fn test_resolve_status_honors_field_schedule() {
        let employee = field_employee(1, "09:00 AM");
        let day = date(2024, 1, 15);
        let record = TimeRecord {
            employee_id: 1,
            date: day,
            time_in: Some("09:05 AM".to_string()),
            time_out: Some("05:10 PM".to_string()),
            break_in: Some("12:00 PM".to_string()),
            break_out: Some("12:30 PM".to_string()),
            status: None,
        };
        assert_eq!(resolve_status(&employee, &record), Status::Undertime);
    }

    #[test]
    fn test_expected_window_per_cohort() {
        let (start, end) = expected_window(&warehouse_employee(1));
        assert_eq!(start, "08:00 AM");
        assert_eq!(end.as_deref(), Some("05:00 PM"));

        let (start, end) = expected_window(&field_employee(2, "11:30 PM"));
        assert_eq!(start, "11:30 PM");
        assert_eq!(end, None);
    }

    #[test]
    fn test_filter_by_range_is_inclusive() {
        let records = vec![
            record(1, date(2024, 1, 10)),
            record(1, date(2024, 1, 15)),
            record(1, date(2024, 1, 20)),
        ];
        let kept = filter_by_range(&records, date(2024, 1, 10), date(2024, 1, 15));
        let dates: Vec<NaiveDate> = kept.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 10), date(2024, 1, 15)]);
    }

    #[test]
    fn test_group_by_week_starts_on_sunday() {
        // 2024-01-07 was a Sunday; 2024-01-06 belongs to the prior week.
        let records = vec![
            record(1, date(2024, 1, 6)),
            record(1, date(2024, 1, 7)),
            record(1, date(2024, 1, 10)),
        ];
        let groups = group_by_week(&records);
        assert_eq!(groups.len(), 2);

        // Newest week first, newest record first inside it.
        assert_eq!(groups[0].week_start, date(2024, 1, 7));
        let dates: Vec<NaiveDate> = groups[0].records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 10), date(2024, 1, 7)]);

        assert_eq!(groups[1].week_start, date(2023, 12, 31));
        assert_eq!(groups[1].records.len(), 1);
    }

    #[test]
    fn test_group_by_month_newest_first() {
        let records = vec![
            record(1, date(2023, 12, 29)),
            record(1, date(2024, 2, 5)),
            record(1, date(2024, 2, 1)),
            record(1, date(2024, 1, 15)),
        ];
        let groups = group_by_month(&records);
        let keys: Vec<(i32, u32)> = groups.iter().map(|g| (g.year, g.month)).collect();
        assert_eq!(keys, vec![(2024, 2), (2024, 1), (2023, 12)]);
        assert_eq!(groups[0].records.len(), 2);
        assert_eq!(groups[0].records[0].date, date(2024, 2, 5));
    }

    #[test]
    fn test_tally_counts_classified_statuses() {
        let employee = warehouse_employee(1);
        let day = date(2024, 1, 15);

        let on_time = record(1, day);
        let mut late = record(1, date(2024, 1, 16));
        late.time_in = Some("08:20 AM".to_string());
        let mut on_duty = record(1, date(2024, 1, 17));
        on_duty.time_out = None;

        let tally = tally_statuses(&employee, &[on_time, late, on_duty]);
        assert_eq!(tally.days, 3);
        assert_eq!(tally.on_time, 1);
        assert_eq!(tally.late, 1);
        assert_eq!(tally.undertime, 0);
        assert_eq!(tally.overtime, 0);
        // The live On Duty label lands in the other bucket.
        assert_eq!(tally.other, 1);
    }
}
