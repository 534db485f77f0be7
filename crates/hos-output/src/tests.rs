//! Tests for hos-output.

#[cfg(test)]
mod csv_tests {
    use hos_core::{DutyStatus, HosRules};
    use hos_plan::{Leg, Plan, generate};
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, EVENTS_FILE, TOTALS_FILE};
    use crate::export::write_plan;
    use crate::row::EventRow;
    use crate::writer::PlanWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn two_leg_plan() -> Plan {
        let legs = [Leg::drive(1.0).with_load(1.0), Leg::drive(13.0).with_unload(1.0)];
        generate(&legs, 24.0, &HosRules::default()).unwrap()
    }

    #[test]
    fn files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir.path().join(EVENTS_FILE)), ["day", "status", "start_hour", "end_hour"]);
        assert_eq!(
            headers(&dir.path().join(TOTALS_FILE)),
            ["day", "off_duty", "sleeper", "driving", "on_duty"]
        );
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(EVENTS_FILE).exists());
    }

    #[test]
    fn event_row_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = EventRow { day: 1, status: DutyStatus::OffDuty, start_hour: 13.0, end_hour: 24.0 };
        w.write_events(&[row]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join(EVENTS_FILE));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "off-duty");
        assert_eq!(&rows[0][2], "13");
        assert_eq!(&rows[0][3], "24");
    }

    #[test]
    fn whole_plan_export() {
        let plan = two_leg_plan();
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        write_plan(&mut w, &plan).unwrap();
        w.finish().unwrap();

        let events = records(&dir.path().join(EVENTS_FILE));
        let expected: usize = plan.per_day.iter().map(|d| d.events.len()).sum();
        assert_eq!(events.len(), expected);
        assert_eq!(&events[0][1], "sleeper");
        assert_eq!(&events[events.len() - 1][0], "1");

        let totals = records(&dir.path().join(TOTALS_FILE));
        assert_eq!(totals.len(), 2);
        // day 0: 0.5 off, 11 sleeper, 11 driving, 1.5 on-duty
        assert_eq!(&totals[0][1], "0.5");
        assert_eq!(&totals[0][2], "11");
        assert_eq!(&totals[0][3], "11");
        assert_eq!(&totals[0][4], "1.5");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod export_tests {
    use hos_core::{DutyStatus, HosRules};
    use hos_plan::generate;

    use crate::export::{event_rows, totals_rows};

    #[test]
    fn rows_follow_day_order() {
        let plan = generate(&[], 72.0, &HosRules::default()).unwrap();
        let rows = event_rows(&plan);
        assert!(rows.windows(2).all(|w| w[0].day <= w[1].day));
        // 44 h of sleeper from minute 0: day 0 and most of day 1.
        assert_eq!(rows[0].status, DutyStatus::Sleeper);
        assert_eq!((rows[0].day, rows[0].end_hour), (0, 24.0));
        assert_eq!((rows[1].day, rows[1].end_hour), (1, 20.0));

        let totals = totals_rows(&plan);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[1].sleeper, 20.0);
        assert_eq!(totals[1].on_duty, 0.5);
        assert_eq!(totals[1].off_duty, 3.5);
    }
}
