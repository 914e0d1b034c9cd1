//! The local timezone that class times are expressed in.

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};

/// VTIMEZONE definition for America/Los_Angeles, as exported by Google Calendar.
const LOS_ANGELES_VTIMEZONE: &str = "\
BEGIN:VTIMEZONE
TZID:America/Los_Angeles
X-LIC-LOCATION:America/Los_Angeles
BEGIN:DAYLIGHT
TZOFFSETFROM:-0800
TZOFFSETTO:-0700
TZNAME:PDT
DTSTART:19700308T020000
RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=2SU
END:DAYLIGHT
BEGIN:STANDARD
TZOFFSETFROM:-0700
TZOFFSETTO:-0800
TZNAME:PST
DTSTART:19701101T020000
RRULE:FREQ=YEARLY;BYMONTH=11;BYDAY=1SU
END:STANDARD
END:VTIMEZONE";

/// Timezone identity attached to every local time the pipeline builds.
///
/// The offset is fixed: values carry no daylight-saving adjustment. Calendar
/// clients resolve the wall-clock times through `tzid` and the VTIMEZONE
/// block, so only the naive local part ends up in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalZone {
    pub tzid: &'static str,
    pub utc_offset_secs: i32,
    vtimezone: &'static str,
}

/// Pacific time, the zone course schedules are published in.
pub const PACIFIC: LocalZone = LocalZone {
    tzid: "America/Los_Angeles",
    utc_offset_secs: -8 * 3600,
    vtimezone: LOS_ANGELES_VTIMEZONE,
};

impl LocalZone {
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_secs).unwrap_or_else(|| Utc.fix())
    }

    /// Attach this zone to a naive local date-time.
    pub fn localize(&self, local: NaiveDateTime) -> DateTime<FixedOffset> {
        let offset = self.offset();
        let utc = local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
        offset.from_utc_datetime(&utc)
    }

    /// Combine a calendar date with a time of day in this zone.
    pub fn at(&self, date: NaiveDate, time: NaiveTime) -> DateTime<FixedOffset> {
        self.localize(date.and_time(time))
    }

    /// The VTIMEZONE lines describing this zone's transitions (no line terminators).
    pub fn vtimezone_lines(&self) -> impl Iterator<Item = &'static str> {
        self.vtimezone.lines()
    }
}
