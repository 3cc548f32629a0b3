#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use eckho::libs::record::TimeRecord;
    use eckho::libs::status::Status;
    use eckho::libs::tracker::{DaySheet, TrackingAction, TrackingError, TrackingState};

    #[test]
    fn test_happy_path_walks_all_states() {
        let mut sheet = DaySheet::new();
        assert_eq!(sheet.state(), TrackingState::NotStarted);

        assert_eq!(sheet.time_in("08:00 AM"), Ok(Status::OnDuty));
        assert_eq!(sheet.state(), TrackingState::OnDuty);

        assert_eq!(sheet.break_in("12:00 PM"), Ok(Status::OnBreak));
        assert_eq!(sheet.state(), TrackingState::OnBreak);

        assert_eq!(sheet.break_out("01:00 PM"), Ok(Status::OnDuty));
        assert_eq!(sheet.state(), TrackingState::OnDuty);

        assert_eq!(sheet.time_out("05:00 PM"), Ok(Status::Completed));
        assert_eq!(sheet.state(), TrackingState::Completed);

        assert_eq!(sheet.time_in.as_deref(), Some("08:00 AM"));
        assert_eq!(sheet.break_in.as_deref(), Some("12:00 PM"));
        assert_eq!(sheet.break_out.as_deref(), Some("01:00 PM"));
        assert_eq!(sheet.time_out.as_deref(), Some("05:00 PM"));
    }

    #[test]
    fn test_double_time_in_is_rejected() {
        let mut sheet = DaySheet::new();
        sheet.time_in("08:00 AM").unwrap();
        assert_eq!(sheet.time_in("08:05 AM"), Err(TrackingError::AlreadyTimedIn));
        // The original stamp survives the rejected action.
        assert_eq!(sheet.time_in.as_deref(), Some("08:00 AM"));
    }

    #[test]
    fn test_actions_before_time_in_are_rejected() {
        let mut sheet = DaySheet::new();
        assert_eq!(sheet.time_out("05:00 PM"), Err(TrackingError::NotTimedIn));
        assert_eq!(sheet.break_in("12:00 PM"), Err(TrackingError::NotTimedIn));
        assert_eq!(sheet.break_out("01:00 PM"), Err(TrackingError::NotTimedIn));
        assert_eq!(sheet, DaySheet::new());
    }

    #[test]
    fn test_time_out_is_forbidden_while_on_break() {
        let mut sheet = DaySheet::new();
        sheet.time_in("08:00 AM").unwrap();
        sheet.break_in("12:00 PM").unwrap();
        assert_eq!(sheet.time_out("05:00 PM"), Err(TrackingError::TimeOutOnBreak));
        assert_eq!(sheet.state(), TrackingState::OnBreak);
    }

    #[test]
    fn test_break_out_without_open_break_is_rejected() {
        let mut sheet = DaySheet::new();
        sheet.time_in("08:00 AM").unwrap();
        assert_eq!(sheet.break_out("01:00 PM"), Err(TrackingError::NoOpenBreak));
    }

    #[test]
    fn test_double_break_in_is_rejected() {
        let mut sheet = DaySheet::new();
        sheet.time_in("08:00 AM").unwrap();
        sheet.break_in("12:00 PM").unwrap();
        assert_eq!(sheet.break_in("12:30 PM"), Err(TrackingError::AlreadyOnBreak));
    }

    #[test]
    fn test_second_break_replaces_closed_one() {
        let mut sheet = DaySheet::new();
        sheet.time_in("08:00 AM").unwrap();
        sheet.break_in("10:00 AM").unwrap();
        sheet.break_out("10:15 AM").unwrap();

        assert_eq!(sheet.break_in("02:00 PM"), Ok(Status::OnBreak));
        assert_eq!(sheet.break_in.as_deref(), Some("02:00 PM"));
        assert_eq!(sheet.break_out, None);
    }

    #[test]
    fn test_nothing_is_accepted_after_completion() {
        let mut sheet = DaySheet::new();
        sheet.time_in("08:00 AM").unwrap();
        sheet.time_out("05:00 PM").unwrap();

        assert_eq!(sheet.time_in("06:00 PM"), Err(TrackingError::AlreadyCompleted));
        assert_eq!(sheet.time_out("06:00 PM"), Err(TrackingError::AlreadyTimedOut));
        assert_eq!(sheet.break_in("06:00 PM"), Err(TrackingError::AlreadyCompleted));
        assert_eq!(sheet.break_out("06:00 PM"), Err(TrackingError::AlreadyCompleted));
    }

    #[test]
    fn test_apply_routes_wire_actions() {
        let mut sheet = DaySheet::new();
        assert_eq!(sheet.apply(TrackingAction::TimeIn, "08:00 AM"), Ok(Status::OnDuty));
        assert_eq!(sheet.apply(TrackingAction::BreakIn, "12:00 PM"), Ok(Status::OnBreak));
        assert_eq!(sheet.apply(TrackingAction::BreakOut, "12:30 PM"), Ok(Status::OnDuty));
        assert_eq!(sheet.apply(TrackingAction::TimeOut, "05:00 PM"), Ok(Status::Completed));
    }

    #[test]
    fn test_tracking_action_wire_names() {
        assert_eq!(
            serde_json::to_string(&TrackingAction::TimeIn).unwrap(),
            "\"time_in\""
        );
        assert_eq!(
            serde_json::from_str::<TrackingAction>("\"break_out\"").unwrap(),
            TrackingAction::BreakOut
        );
    }

    #[test]
    fn test_record_round_trip_carries_live_status() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut sheet = DaySheet::new();
        sheet.time_in("08:00 AM").unwrap();
        sheet.break_in("12:00 PM").unwrap();

        let record: TimeRecord = sheet.clone().into_record(7, date);
        assert_eq!(record.employee_id, 7);
        assert_eq!(record.status, Some(Status::OnBreak));

        let restored = DaySheet::from_record(&record);
        assert_eq!(restored, sheet);
        assert_eq!(restored.state(), TrackingState::OnBreak);
    }
}
