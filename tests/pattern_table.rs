//! Snapshot of the pattern table
//!
//! The order of this listing is the priority order used by the extractor, so
//! any reordering shows up here.

use multimatum_dates::datetime::patterns;

#[test]
fn test_pattern_table_order() {
    let listing = patterns()
        .iter()
        .map(|pattern| pattern.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(listing, @r###"
    hour-minute-meridiem: 'at' HOUR12 ':'|'h' MINUTE 'am'|'pm'
    hour-minute-meridiem: HOUR12 ':'|'h' MINUTE 'am'|'pm'
    hour-minute: 'at' HOUR24 ':'|'h' MINUTE
    hour-minute: HOUR24 ':'|'h' MINUTE
    hour-meridiem: 'at' HOUR12 'am'|'pm'
    hour-meridiem: HOUR12 'am'|'pm'
    hour: 'at' HOUR24 'h'|'hour'|'hours'
    hour: HOUR24 'h'|'hour'|'hours'
    noon: 'at' 'noon'|'midday'
    noon: 'noon'|'midday'
    midnight: 'at' 'midnight'
    midnight: 'midnight'
    year-month-day: 'on' YEAR '.'|'/'|'-' MONTH# '.'|'/'|'-' DAY
    year-month-day: YEAR '.'|'/'|'-' MONTH# '.'|'/'|'-' DAY
    day-month-year: 'on' DAY '.'|'/'|'-' MONTH# '.'|'/'|'-' YEAR
    day-month-year: DAY '.'|'/'|'-' MONTH# '.'|'/'|'-' YEAR
    day-month: 'on' DAY '.'|'/' MONTH#
    day-month: DAY '.'|'/' MONTH#
    month-name-day-year: 'on' MONTH DAY 'st'|'nd'|'rd'|'th' YEAR
    month-name-day-year: MONTH DAY 'st'|'nd'|'rd'|'th' YEAR
    month-name-day-year: 'on' MONTH DAY YEAR
    month-name-day-year: MONTH DAY YEAR
    day-month-name-year: 'on' DAY 'st'|'nd'|'rd'|'th' MONTH YEAR
    day-month-name-year: DAY 'st'|'nd'|'rd'|'th' MONTH YEAR
    day-month-name-year: 'on' DAY MONTH YEAR
    day-month-name-year: DAY MONTH YEAR
    month-name-day: 'on' MONTH DAY 'st'|'nd'|'rd'|'th'
    month-name-day: MONTH DAY 'st'|'nd'|'rd'|'th'
    month-name-day: 'on' MONTH DAY
    month-name-day: MONTH DAY
    month-name-day: 'on' MONTH '.'|'/'|'-' DAY
    month-name-day: MONTH '.'|'/'|'-' DAY
    day-month-name: 'on' DAY 'st'|'nd'|'rd'|'th' 'of' MONTH
    day-month-name: DAY 'st'|'nd'|'rd'|'th' 'of' MONTH
    day-month-name: 'on' DAY 'st'|'nd'|'rd'|'th' MONTH
    day-month-name: DAY 'st'|'nd'|'rd'|'th' MONTH
    day-month-name: 'on' DAY MONTH
    day-month-name: DAY MONTH
    day-month-name: 'on' DAY '.'|'/'|'-' MONTH
    day-month-name: DAY '.'|'/'|'-' MONTH
    day-after-tomorrow: 'on' 'day' 'after' 'tomorrow'
    day-after-tomorrow: 'day' 'after' 'tomorrow'
    tomorrow: 'on' 'tomorrow'
    tomorrow: 'tomorrow'
    today: 'on' 'today'|'tonight'
    today: 'today'|'tonight'
    next-week: 'on' 'next' 'week'
    next-week: 'next' 'week'
    weekday-day: 'on' WEEKDAY DAY
    weekday-day: WEEKDAY DAY
    next-weekday: 'on' 'next' WEEKDAY
    next-weekday: 'next' WEEKDAY
    weekday: 'on' WEEKDAY
    weekday: WEEKDAY
    "###);
}

#[test]
fn test_every_pattern_has_an_at_or_on_variant() {
    let table = patterns();
    for pair in table.chunks(2) {
        let prefix = pair[0].predicates()[0].to_string();
        assert!(prefix == "'at'" || prefix == "'on'", "{}", pair[0]);
        assert_eq!(&pair[0].predicates()[1..], pair[1].predicates());
    }
}
