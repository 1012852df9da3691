//! Day identifiers - the string keys task lists are stored under.

/// The seven canonical weekday identifiers, in the fixed order the weekly
/// view renders them.
pub const WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Display placeholder used by the add-task flow when no target day is
/// supplied.
///
/// Not a canonical weekday: a record stored under this key is a valid
/// record, but the weekly view never lists it.
pub const TODAY_PLACEHOLDER: &str = "Today";

/// Full English name for a `chrono` weekday.
pub fn weekday_name(weekday: chrono::Weekday) -> &'static str {
    match weekday {
        chrono::Weekday::Mon => WEEK[0],
        chrono::Weekday::Tue => WEEK[1],
        chrono::Weekday::Wed => WEEK[2],
        chrono::Weekday::Thu => WEEK[3],
        chrono::Weekday::Fri => WEEK[4],
        chrono::Weekday::Sat => WEEK[5],
        chrono::Weekday::Sun => WEEK[6],
    }
}
