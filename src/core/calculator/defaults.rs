use serde::{Deserialize, Serialize};

pub const DEFAULT_CLOCK_IN: &str = "07:00";
pub const DEFAULT_CLOCK_OUT: &str = "16:00";
pub const DEFAULT_BREAK_MINUTES: u32 = 60;

/// Company work-day settings as stored in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkDaySettings {
    #[serde(default)]
    pub work_day_start: Option<String>,
    #[serde(default)]
    pub work_day_end: Option<String>,
    #[serde(default)]
    pub break_time: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimesheetDefaults {
    pub clock_in: String,
    pub clock_out: String,
    pub break_duration: u32,
}

/// Company values where configured, otherwise 07:00 / 16:00 / 60 minutes.
pub fn get_default_timesheet_values(settings: Option<&WorkDaySettings>) -> TimesheetDefaults {
    let start = settings.and_then(|s| non_blank(&s.work_day_start));
    let end = settings.and_then(|s| non_blank(&s.work_day_end));
    let brk = settings.and_then(|s| s.break_time);

    TimesheetDefaults {
        clock_in: start.unwrap_or(DEFAULT_CLOCK_IN).to_string(),
        clock_out: end.unwrap_or(DEFAULT_CLOCK_OUT).to_string(),
        break_duration: brk.unwrap_or(DEFAULT_BREAK_MINUTES),
    }
}

/// Explicit per-call values laid over the company defaults field by field.
pub fn resolve_entry_times(
    clock_in: Option<String>,
    clock_out: Option<String>,
    break_duration: Option<u32>,
    settings: Option<&WorkDaySettings>,
) -> TimesheetDefaults {
    let defaults = get_default_timesheet_values(settings);

    TimesheetDefaults {
        clock_in: clock_in.unwrap_or(defaults.clock_in),
        clock_out: clock_out.unwrap_or(defaults.clock_out),
        break_duration: break_duration.unwrap_or(defaults.break_duration),
    }
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_settings_gives_fixed_defaults() {
        assert_eq!(
            get_default_timesheet_values(None),
            TimesheetDefaults {
                clock_in: "07:00".into(),
                clock_out: "16:00".into(),
                break_duration: 60,
            }
        );
    }

    #[test]
    fn partial_settings_fall_back_per_field() {
        let settings = WorkDaySettings {
            work_day_start: Some("08:00".into()),
            ..Default::default()
        };
        let v = get_default_timesheet_values(Some(&settings));
        assert_eq!(v.clock_in, "08:00");
        assert_eq!(v.clock_out, "16:00");
        assert_eq!(v.break_duration, 60);
    }

    #[test]
    fn full_settings_win() {
        let settings = WorkDaySettings {
            work_day_start: Some("06:30".into()),
            work_day_end: Some("15:00".into()),
            break_time: Some(30),
        };
        let v = get_default_timesheet_values(Some(&settings));
        assert_eq!(v.clock_in, "06:30");
        assert_eq!(v.clock_out, "15:00");
        assert_eq!(v.break_duration, 30);
    }

    #[test]
    fn blank_setting_is_ignored() {
        let settings = WorkDaySettings {
            work_day_end: Some("  ".into()),
            break_time: Some(0),
            ..Default::default()
        };
        let v = get_default_timesheet_values(Some(&settings));
        assert_eq!(v.clock_out, "16:00");
        assert_eq!(v.break_duration, 0);
    }

    #[test]
    fn overrides_beat_settings() {
        let settings = WorkDaySettings {
            work_day_start: Some("06:00".into()),
            work_day_end: Some("14:00".into()),
            break_time: Some(45),
        };
        let v = resolve_entry_times(None, Some("18:00".into()), Some(15), Some(&settings));
        assert_eq!(v.clock_in, "06:00");
        assert_eq!(v.clock_out, "18:00");
        assert_eq!(v.break_duration, 15);
    }
}
