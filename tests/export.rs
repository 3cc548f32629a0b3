#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use eckho::db::employees::Employee;
    use eckho::libs::export::{ExportFormat, Exporter};
    use eckho::libs::record::TimeRecord;
    use eckho::libs::report::RosterRow;
    use eckho::libs::status::Status;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ExportTestContext { temp_dir }
        }
    }

    fn employee() -> Employee {
        Employee {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            username: "john.smith".to_string(),
            expected_start_time: None,
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn record() -> TimeRecord {
        TimeRecord {
            employee_id: 1,
            date: day(),
            time_in: Some("08:00 AM".to_string()),
            time_out: Some("05:00 PM".to_string()),
            break_in: Some("12:00 PM".to_string()),
            break_out: Some("01:00 PM".to_string()),
            status: None,
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_roster_export(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("roster.csv");
        let rows = vec![RosterRow {
            employee: employee(),
            record: Some(record()),
            status: Status::OnTime,
        }];

        let exporter = Exporter::new(ExportFormat::Csv, Some(output.clone()));
        let written = exporter.export_roster(day(), &rows).unwrap();
        assert_eq!(written, output);

        let contents = std::fs::read_to_string(&written).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("date,employee,time_in,time_out,break_in,break_out,status")
        );
        assert_eq!(
            lines.next(),
            Some("2024-01-15,John Smith,08:00 AM,05:00 PM,12:00 PM,01:00 PM,On Time")
        );
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_roster_marks_missing_days(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("roster_missing.csv");
        let rows = vec![RosterRow {
            employee: employee(),
            record: None,
            status: Status::NoRecord,
        }];

        Exporter::new(ExportFormat::Csv, Some(output.clone()))
            .export_roster(day(), &rows)
            .unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert!(contents.contains("2024-01-15,John Smith,-,-,-,-,No Record"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_history_export(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("history.json");
        let rows = vec![(record(), Status::OnTime)];

        Exporter::new(ExportFormat::Json, Some(output.clone()))
            .export_history(&employee(), &rows)
            .unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["date"], "2024-01-15");
        assert_eq!(entries[0]["employee"], "John Smith");
        assert_eq!(entries[0]["time_in"], "08:00 AM");
        assert_eq!(entries[0]["status"], "On Time");
    }
}
