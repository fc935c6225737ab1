use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::America::{Chicago, New_York};
use chrono_tz::Asia::Tokyo;
use tradeclock::time::{TradingDays, TradingSchedule};
use tradeclock::utils::time::{minute_of_day, minutes_forward};
use tradeclock::{evaluate, evaluate_board, ClockError, Exchange, FixedClock};

fn nyse() -> TradingSchedule {
    TradingSchedule::from_hm("America/New_York", (9, 30), (16, 0)).unwrap()
}

fn overnight(zone: &str) -> TradingSchedule {
    TradingSchedule::from_hm(zone, (21, 0), (5, 0))
        .unwrap()
        .with_trading_days(TradingDays::EVERY_DAY)
}

fn new_york(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    New_York.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap().with_timezone(&Utc)
}

#[test]
fn nyse_open_mid_morning() {
    // Tuesday
    let status = evaluate(&nyse(), new_york(2025, 3, 4, 10, 0)).unwrap();
    assert!(status.is_open);
    assert_eq!(status.local_weekday, Weekday::Tue);
    assert_eq!(status.minutes_remaining.minutes(), 360);
    assert_eq!(status.time_remaining, "6h");
}

#[test]
fn nyse_closing_instant_is_closed() {
    let status = evaluate(&nyse(), new_york(2025, 3, 4, 16, 0)).unwrap();
    assert!(!status.is_open);
    // Until 09:30 the next morning
    assert_eq!(status.minutes_remaining.minutes(), 17 * 60 + 30);
    assert_eq!(status.time_remaining, "17h 30m");
}

#[test]
fn nyse_opening_instant_is_open() {
    let status = evaluate(&nyse(), new_york(2025, 3, 4, 9, 30)).unwrap();
    assert!(status.is_open);
    assert_eq!(status.time_remaining, "6h 30m");
}

#[test]
fn overnight_session_before_midnight() {
    let instant = Chicago.with_ymd_and_hms(2025, 3, 5, 23, 30, 0).unwrap().with_timezone(&Utc);
    let status = evaluate(&overnight("America/Chicago"), instant).unwrap();
    assert!(status.is_open);
    assert_eq!(status.time_remaining, "5h 30m");
}

#[test]
fn overnight_session_after_midnight() {
    let instant = Chicago.with_ymd_and_hms(2025, 3, 6, 2, 0, 0).unwrap().with_timezone(&Utc);
    let status = evaluate(&overnight("America/Chicago"), instant).unwrap();
    assert!(status.is_open);
    assert_eq!(status.minutes_remaining.minutes(), 180);
    assert_eq!(status.time_remaining, "3h");
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

#[test]
fn weekday_overnight_closed_early_monday() {
    // Sunday evening never opened, so Monday 02:00 waits for Monday 21:00
    let schedule = TradingSchedule::from_hm("UTC", (21, 0), (5, 0)).unwrap();
    let status = evaluate(&schedule, utc(2025, 3, 3, 2, 0)).unwrap();
    assert_eq!(status.local_weekday, Weekday::Mon);
    assert!(!status.is_open);
    assert_eq!(status.minutes_remaining.minutes(), 19 * 60);
    assert_eq!(status.time_remaining, "19h");
}

#[test]
fn weekday_overnight_open_early_saturday() {
    // Friday's session runs on into Saturday morning
    let schedule = TradingSchedule::from_hm("UTC", (21, 0), (5, 0)).unwrap();
    let status = evaluate(&schedule, utc(2025, 3, 8, 2, 0)).unwrap();
    assert_eq!(status.local_weekday, Weekday::Sat);
    assert!(status.is_open);
    assert_eq!(status.time_remaining, "3h");
}

#[test]
fn nyse_closed_on_saturday() {
    let status = evaluate(&nyse(), new_york(2025, 3, 8, 10, 0)).unwrap();
    assert_eq!(status.local_weekday, Weekday::Sat);
    assert!(!status.is_open);
}

#[test]
fn nyse_closed_all_weekend() {
    let saturday = new_york(2025, 3, 8, 0, 0);
    for minute in 0..(2 * 1440) {
        let status = evaluate(&nyse(), saturday + Duration::minutes(minute)).unwrap();
        assert!(!status.is_open, "open at weekend minute {}", minute);
    }
}

#[test]
fn tokyo_uses_its_own_calendar() {
    let tse = TradingSchedule::from_hm("Asia/Tokyo", (9, 0), (15, 30)).unwrap();

    // Sunday evening in New York is Monday morning in Tokyo
    let instant = new_york(2025, 3, 2, 20, 0);
    let status = evaluate(&tse, instant).unwrap();
    assert_eq!(status.local_weekday, Weekday::Mon);
    assert_eq!(status.local_time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    assert_eq!(
        status.local_date,
        Tokyo.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap().date_naive()
    );
    assert!(status.is_open);
    assert_eq!(status.time_remaining, "5h 30m");

    // Friday evening in UTC is already Saturday in Tokyo
    let friday_utc = Utc.with_ymd_and_hms(2025, 3, 7, 23, 0, 0).unwrap();
    let status = evaluate(&tse, friday_utc).unwrap();
    assert_eq!(status.local_weekday, Weekday::Sat);
    assert!(!status.is_open);
}

#[test]
fn same_day_schedules_match_window_every_minute() {
    let schedules = [((9, 30), (16, 0)), ((0, 0), (23, 59)), ((0, 1), (0, 2))];
    // Wednesday midnight UTC
    let day = Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap();

    for (open, close) in schedules {
        let schedule = TradingSchedule::from_hm("UTC", open, close).unwrap();
        let (o, c) = (schedule.opening_minute(), schedule.closing_minute());
        for minute in 0..1440u16 {
            let status = evaluate(&schedule, day + Duration::minutes(i64::from(minute))).unwrap();
            assert_eq!(status.is_open, o <= minute && minute < c, "{:?}-{:?} at {}", open, close, minute);
        }
    }
}

#[test]
fn overnight_schedules_match_window_every_minute() {
    let schedules = [((21, 0), (5, 0)), ((23, 59), (0, 0)), ((12, 0), (11, 59))];
    let day = Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap();

    for (open, close) in schedules {
        let schedule = TradingSchedule::from_hm("UTC", open, close)
            .unwrap()
            .with_trading_days(TradingDays::EVERY_DAY);
        let (o, c) = (schedule.opening_minute(), schedule.closing_minute());
        for minute in 0..1440u16 {
            let status = evaluate(&schedule, day + Duration::minutes(i64::from(minute))).unwrap();
            assert_eq!(status.is_open, minute >= o || minute < c, "{:?}-{:?} at {}", open, close, minute);
        }
    }
}

#[test]
fn degenerate_schedule_is_always_closed() {
    let schedule = TradingSchedule::from_hm("UTC", (10, 0), (10, 0))
        .unwrap()
        .with_trading_days(TradingDays::EVERY_DAY);
    let day = Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap();

    for minute in 0..1440 {
        let status = evaluate(&schedule, day + Duration::minutes(minute)).unwrap();
        assert!(!status.is_open);
        assert!(status.minutes_remaining.minutes() < 1440);
    }
    let at_open = evaluate(&schedule, day + Duration::minutes(600)).unwrap();
    assert_eq!(at_open.time_remaining, "0m");
}

#[test]
fn remaining_plus_elapsed_is_session_length() {
    let schedules = [((9, 30), (16, 0)), ((21, 0), (5, 0)), ((8, 0), (16, 30))];
    let day = Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap();

    for (open, close) in schedules {
        let schedule = TradingSchedule::from_hm("UTC", open, close)
            .unwrap()
            .with_trading_days(TradingDays::EVERY_DAY);
        let length = schedule.session_minutes();
        let (o, c) = (schedule.opening_minute(), schedule.closing_minute());

        for minute in 0..1440i64 {
            let status = evaluate(&schedule, day + Duration::minutes(minute)).unwrap();
            let t = minute_of_day(status.local_time);
            let remaining = status.minutes_remaining.minutes();
            assert!(remaining < 1440);
            if status.is_open {
                assert_eq!(remaining + minutes_forward(o, t), length);
            } else {
                assert_eq!(remaining + minutes_forward(c, t), 1440 - length);
            }
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let instant = Utc.with_ymd_and_hms(2025, 7, 1, 13, 45, 12).unwrap();
    let schedule = overnight("Europe/London");
    assert_eq!(evaluate(&schedule, instant).unwrap(), evaluate(&schedule, instant).unwrap());
}

#[test]
fn board_reports_failures_per_exchange() {
    let exchanges = vec![
        Exchange::new("nyse", "New York Stock Exchange", nyse()),
        Exchange::new(
            "ghost",
            "Ghost Exchange",
            TradingSchedule::from_hm("Not/AZone", (9, 0), (17, 0)).unwrap(),
        ),
        Exchange::new(
            "tse",
            "Tokyo Stock Exchange",
            TradingSchedule::from_hm("Asia/Tokyo", (9, 0), (15, 30)).unwrap(),
        ),
    ];
    let clock = FixedClock::new(new_york(2025, 3, 4, 10, 0));

    let board = evaluate_board(&exchanges, &clock);

    let ids: Vec<&str> = board.entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["nyse", "ghost", "tse"]);
    assert!(board.entries[0].status().unwrap().is_open);
    assert!(matches!(board.entries[1].error(), Some(ClockError::InvalidTimeZone(_))));
    // 10:00 New York is midnight in Tokyo
    assert!(!board.entries[2].status().unwrap().is_open);
    assert_eq!(board.failures().count(), 1);
    assert_eq!(board.open_count(), 1);
}
