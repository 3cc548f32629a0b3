#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use eckho::db::records::TimeRecords;
    use eckho::libs::record::TimeRecord;
    use eckho::libs::status::Status;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct RecordsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for RecordsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RecordsTestContext { _temp_dir: temp_dir }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(employee_id: i64, day: NaiveDate, status: Option<Status>) -> TimeRecord {
        TimeRecord {
            employee_id,
            date: day,
            time_in: Some("08:00 AM".to_string()),
            time_out: Some("05:00 PM".to_string()),
            break_in: Some("12:00 PM".to_string()),
            break_out: Some("01:00 PM".to_string()),
            status,
        }
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_upsert_and_fetch_round_trip(_ctx: &mut RecordsTestContext) {
        let mut records = TimeRecords::new().unwrap();
        let day = date(2024, 1, 15);
        let stored = record(9001, day, Some(Status::OnTime));
        records.upsert(&stored).unwrap();

        let fetched = records.fetch(9001, day).unwrap().expect("stored record");
        assert_eq!(fetched, stored);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_upsert_overwrites_the_day(_ctx: &mut RecordsTestContext) {
        let mut records = TimeRecords::new().unwrap();
        let day = date(2024, 1, 15);

        let mut first = record(9002, day, Some(Status::OnDuty));
        first.time_out = None;
        records.upsert(&first).unwrap();

        let second = record(9002, day, Some(Status::OnTime));
        records.upsert(&second).unwrap();

        let fetched = records.fetch(9002, day).unwrap().unwrap();
        assert_eq!(fetched.time_out.as_deref(), Some("05:00 PM"));
        assert_eq!(fetched.status, Some(Status::OnTime));
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_fetch_range_is_inclusive_and_newest_first(_ctx: &mut RecordsTestContext) {
        let mut records = TimeRecords::new().unwrap();
        for day in [date(2024, 1, 10), date(2024, 1, 15), date(2024, 1, 20)] {
            records.upsert(&record(9003, day, None)).unwrap();
        }

        let fetched = records
            .fetch_range(9003, date(2024, 1, 10), date(2024, 1, 15))
            .unwrap();
        let dates: Vec<NaiveDate> = fetched.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 15), date(2024, 1, 10)]);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_fetch_month_filters_by_calendar_month(_ctx: &mut RecordsTestContext) {
        let mut records = TimeRecords::new().unwrap();
        records.upsert(&record(9004, date(2024, 1, 15), None)).unwrap();
        records.upsert(&record(9004, date(2024, 1, 31), None)).unwrap();
        records.upsert(&record(9004, date(2024, 2, 1), None)).unwrap();

        let january = records.fetch_month(9004, date(2024, 1, 20)).unwrap();
        let dates: Vec<NaiveDate> = january.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 31), date(2024, 1, 15)]);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_fetch_day_spans_employees(_ctx: &mut RecordsTestContext) {
        let mut records = TimeRecords::new().unwrap();
        let day = date(2031, 3, 3);
        records.upsert(&record(9005, day, None)).unwrap();
        records.upsert(&record(9006, day, None)).unwrap();

        let fetched = records.fetch_day(day).unwrap();
        let ids: Vec<i64> = fetched.iter().map(|r| r.employee_id).collect();
        assert!(ids.contains(&9005));
        assert!(ids.contains(&9006));
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_clear_for_drops_one_employees_history(_ctx: &mut RecordsTestContext) {
        let mut records = TimeRecords::new().unwrap();
        let day = date(2031, 4, 4);
        records.upsert(&record(9007, day, None)).unwrap();
        records.upsert(&record(9008, day, None)).unwrap();

        records.clear_for(9007).unwrap();
        assert!(records.fetch(9007, day).unwrap().is_none());
        assert!(records.fetch(9008, day).unwrap().is_some());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_status_labels_survive_storage(_ctx: &mut RecordsTestContext) {
        let mut records = TimeRecords::new().unwrap();
        let day = date(2031, 5, 5);
        records.upsert(&record(9009, day, Some(Status::Late))).unwrap();
        records.upsert(&record(9010, day, None)).unwrap();

        assert_eq!(
            records.fetch(9009, day).unwrap().unwrap().status,
            Some(Status::Late)
        );
        assert_eq!(records.fetch(9010, day).unwrap().unwrap().status, None);
    }
}
