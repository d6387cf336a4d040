use anyhow::Result;
use calendar_diff::{diff, CalendarDifference, Timestamp};

/// 1967-09-10 到 1973-08-07：日借位使用七月 (31 天)
#[test]
fn test_years_months_days_with_day_borrow() -> Result<()> {
    let lo = Timestamp::parse("1967-09-10")?;
    let hi = Timestamp::parse("1973-08-07")?;

    let d = diff(lo, hi);
    assert_eq!(d, CalendarDifference::from_date(5, 10, 28));
    assert!(!d.has_time());
    assert_eq!(d.to_string(), "5 years, 10 months, 28 days");

    // Independent check: 1973-07-10 to 1973-08-07 is 21 + 7 days.
    let anchor = Timestamp::from_ymd(1973, 7, 10)?;
    let remaining = hi.as_naive().date() - anchor.as_naive().date();
    assert_eq!(remaining.num_days(), i64::from(d.days()));
    Ok(())
}

#[test]
fn test_years_months_days_without_borrow() -> Result<()> {
    let d = diff(Timestamp::parse("1967-09-10")?, Timestamp::parse("1989-08-21")?);
    assert_eq!(d, CalendarDifference::from_date(21, 11, 11));
    assert_eq!(d.format(true), "21 years, 11 months, 11 days");
    Ok(())
}

#[test]
fn test_one_millisecond_short_of_a_day() -> Result<()> {
    let this_date = Timestamp::new(2016, 1, 2, 10, 0, 0, 11)?;
    let other_date = Timestamp::new(2016, 1, 3, 10, 0, 0, 10)?;

    let d = this_date.date_diff(&other_date);
    assert_eq!(d, CalendarDifference::new(0, 0, 0, 23, 59, 59, 999));
    assert_eq!(d.format(false), "23:59:59:999");
    assert_eq!(
        d.format(true),
        "23 hours, 59 minutes, 59 seconds, 999 milliseconds"
    );
    Ok(())
}

#[test]
fn test_same_timestamp_is_no_difference() -> Result<()> {
    let t = Timestamp::parse("1967-09-10T12:00:00")?;
    let d = diff(t, t);
    assert!(d.is_zero());
    assert_eq!(d.format(false), "no difference");
    assert_eq!(d.format(true), "no difference");
    Ok(())
}

#[test]
fn test_end_of_month_leap_rules() -> Result<()> {
    assert_eq!(Timestamp::from_ymd(2020, 2, 1)?.end_of_month().day(), 29);
    assert_eq!(Timestamp::from_ymd(2019, 2, 1)?.end_of_month().day(), 28);
    assert_eq!(Timestamp::from_ymd(1900, 2, 1)?.end_of_month().day(), 28);
    assert_eq!(Timestamp::from_ymd(2000, 2, 1)?.end_of_month().day(), 29);
    assert_eq!(Timestamp::from_ymd(2021, 4, 15)?.end_of_month().day(), 30);
    Ok(())
}

#[test]
fn test_date_and_time_rendering() -> Result<()> {
    let lo = Timestamp::parse("2000-01-01T00:00:00")?;
    let hi = Timestamp::parse("2001-03-02T04:05:06.007")?;
    let d = diff(lo, hi);

    assert_eq!(d, CalendarDifference::new(1, 2, 1, 4, 5, 6, 7));
    assert_eq!(format!("{}", d), "1 year, 2 months, 1 day 04:05:06:007");
    assert_eq!(
        format!("{:#}", d),
        "1 year, 2 months, 1 day, 4 hours, 5 minutes, 6 seconds, 7 milliseconds"
    );
    Ok(())
}

#[test]
fn test_json_report() -> Result<()> {
    let from = Timestamp::parse("2016-01-02T10:00:00.011")?;
    let to = Timestamp::parse("2016-01-03T10:00:00.010")?;
    let difference = diff(from, to);
    let report = calendar_diff::DiffReport {
        from,
        to,
        difference,
        text: difference.to_string(),
    };

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["from"], "2016-01-02T10:00:00.011");
    assert_eq!(json["difference"]["hours"], 23);
    assert_eq!(json["difference"]["milliseconds"], 999);
    assert_eq!(json["text"], "23:59:59:999");
    Ok(())
}
