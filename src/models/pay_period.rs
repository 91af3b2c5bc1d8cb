use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPeriod {
    #[default]
    Weekly,
    Biweekly,
    Monthly,
}

impl PayPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayPeriod::Weekly => "weekly",
            PayPeriod::Biweekly => "biweekly",
            PayPeriod::Monthly => "monthly",
        }
    }

    /// Inclusive date range of the pay period holding `date`.
    ///
    /// Weekly and biweekly windows are aligned on `anchor`, extending
    /// backwards for dates before it. Monthly periods ignore the anchor.
    pub fn containing(&self, date: NaiveDate, anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
        let len = match self {
            PayPeriod::Weekly => 7,
            PayPeriod::Biweekly => 14,
            PayPeriod::Monthly => return month_bounds(date),
        };

        let offset = (date - anchor).num_days();
        let start = anchor + Duration::days(offset.div_euclid(len) * len);
        (start, start + Duration::days(len - 1))
    }
}

fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    let last = next_month.and_then(|d| d.pred_opt()).unwrap_or(date);
    (first, last)
}
