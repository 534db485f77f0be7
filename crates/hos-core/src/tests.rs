//! Unit tests for hos-core primitives.

#[cfg(test)]
mod time {
    use crate::{MAX_DURATION_MINUTES, Minute, hours_to_minutes, minutes_to_hours, round2};

    #[test]
    fn minute_arithmetic() {
        let t = Minute(10);
        assert_eq!(t + 5, Minute(15));
        assert_eq!(t.offset(3), Minute(13));
        assert_eq!(Minute(15) - Minute(10), 5u64);
        assert_eq!(Minute(15).since(Minute(10)), 5);
    }

    #[test]
    fn day_index_and_offset() {
        assert_eq!(Minute(0).day(), 0);
        assert_eq!(Minute(1_439).day(), 0);
        assert_eq!(Minute(1_440).day(), 1);
        assert_eq!(Minute(1_500).minute_of_day(), 60);
        assert_eq!(Minute::day_start(3), Minute(4_320));
    }

    #[test]
    fn ceil_day_keeps_boundaries() {
        assert_eq!(Minute(0).ceil_day(), Minute(0));
        assert_eq!(Minute(1).ceil_day(), Minute(1_440));
        assert_eq!(Minute(1_440).ceil_day(), Minute(1_440));
        assert_eq!(Minute(2_221).ceil_day(), Minute(2_880));
    }

    #[test]
    fn display() {
        assert_eq!(Minute(0).to_string(), "day 0 00:00");
        assert_eq!(Minute(1_440 + 7 * 60 + 5).to_string(), "day 1 07:05");
    }

    #[test]
    fn hours_round_to_nearest_minute() {
        assert_eq!(hours_to_minutes(0.5), 30);
        assert_eq!(hours_to_minutes(13.0), 780);
        // 0.3333 h = 19.998 min
        assert_eq!(hours_to_minutes(0.3333), 20);
    }

    #[test]
    fn bad_hours_clamp_to_zero() {
        assert_eq!(hours_to_minutes(-2.0), 0);
        assert_eq!(hours_to_minutes(f64::NAN), 0);
        assert_eq!(hours_to_minutes(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn huge_hours_saturate() {
        assert_eq!(hours_to_minutes(2.0e17), MAX_DURATION_MINUTES);
        assert_eq!(hours_to_minutes(f64::INFINITY), MAX_DURATION_MINUTES);
        assert_eq!(hours_to_minutes(100_000.0), MAX_DURATION_MINUTES);
        assert!(MAX_DURATION_MINUTES < i64::MAX as u64);
    }

    #[test]
    fn day_index_at_end_of_time() {
        let t = Minute(u64::MAX - 5);
        let start = Minute::day_start(t.day());
        assert!(start <= t);
        assert!(t - start < 1_440);
        assert_eq!(t.next_day_start(), Minute(u64::MAX));
        assert_eq!(t.ceil_day(), Minute(u64::MAX));
        assert_eq!(t + 10, Minute(u64::MAX));
    }

    #[test]
    fn round_two_decimals() {
        assert_eq!(round2(minutes_to_hours(20)), 0.33);
        assert_eq!(round2(minutes_to_hours(40)), 0.67);
        assert_eq!(round2(24.0), 24.0);
    }
}

#[cfg(test)]
mod status {
    use crate::DutyStatus;

    #[test]
    fn on_duty_split() {
        assert!(DutyStatus::Driving.is_on_duty());
        assert!(DutyStatus::OnDuty.is_on_duty());
        assert!(DutyStatus::OffDuty.is_rest());
        assert!(DutyStatus::Sleeper.is_rest());
    }

    #[test]
    fn display() {
        assert_eq!(DutyStatus::OffDuty.to_string(), "off-duty");
        assert_eq!(DutyStatus::OnDuty.to_string(), "on-duty");
    }

    #[test]
    fn grid_order() {
        let labels: Vec<_> = DutyStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(labels, ["off-duty", "sleeper", "driving", "on-duty"]);
    }
}

#[cfg(test)]
mod rules {
    use crate::{HosRules, RuleMinutes};

    #[test]
    fn defaults_in_minutes() {
        let m = RuleMinutes::default();
        assert_eq!(m.initial_rest, 600);
        assert_eq!(m.pre_drive, 30);
        assert_eq!(m.window, 840);
        assert_eq!(m.driving_per_window, 660);
        assert_eq!(m.continuous_driving, 480);
        assert_eq!(m.break_len, 30);
        assert_eq!(m.rest_after_window, 600);
        assert_eq!(m.restart, 2_040);
        assert_eq!(m.cycle_limit, 4_200);
        assert_eq!(m.horizon, 10_080);
    }

    #[test]
    fn negative_options_clamp() {
        let rules = HosRules {
            pre_drive_on_duty_hours: -1.0,
            max_window_hours: -14.0,
            ..HosRules::default()
        };
        let m = rules.to_minutes();
        assert_eq!(m.pre_drive, 0);
        assert_eq!(m.window, 0);
    }

    #[test]
    fn break_is_at_least_one_minute() {
        let zero = HosRules { break_minutes_after_continuous: 0.0, ..HosRules::default() };
        assert_eq!(zero.to_minutes().break_len, 1);
        let nan = HosRules { break_minutes_after_continuous: f64::NAN, ..HosRules::default() };
        assert_eq!(nan.to_minutes().break_len, 1);
        let odd = HosRules { break_minutes_after_continuous: 14.6, ..HosRules::default() };
        assert_eq!(odd.to_minutes().break_len, 15);
    }

    #[test]
    fn oversized_options_saturate() {
        let rules = HosRules {
            rest_before_start_hours: 1.0e18,
            break_minutes_after_continuous: f64::INFINITY,
            ..HosRules::default()
        };
        let m = rules.to_minutes();
        assert_eq!(m.initial_rest, crate::MAX_DURATION_MINUTES);
        assert_eq!(m.break_len, crate::MAX_DURATION_MINUTES);
    }
}

#[cfg(all(test, feature = "serde"))]
mod rules_toml {
    use std::io::Write;

    use crate::HosRules;

    #[test]
    fn partial_file_keeps_defaults() {
        let rules = HosRules::from_toml_str("cycle_limit_hours = 60\nrestart_hours = 24\n").unwrap();
        assert_eq!(rules.cycle_limit_hours, 60.0);
        assert_eq!(rules.restart_hours, 24.0);
        assert_eq!(rules.max_window_hours, 14.0);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(HosRules::from_toml_str("").unwrap(), HosRules::default());
    }

    #[test]
    fn unknown_key_errors() {
        assert!(HosRules::from_toml_str("max_team_hours = 3\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_plan_hours = 48").unwrap();
        let rules = HosRules::load(file.path()).unwrap();
        assert_eq!(rules.max_plan_hours, 48.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = HosRules::load(std::path::Path::new("/nonexistent/rules.toml")).unwrap_err();
        assert!(matches!(err, crate::HosError::Io(_)));
    }
}
