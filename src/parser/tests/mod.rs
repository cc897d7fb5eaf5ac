//! Test fixtures for the forecast report parser
//!
//! Sample page text mixing the supported row layouts with the headers,
//! footers and column titles real reports carry.

mod parser_tests;

/// Page with an issue stamp, a weekday-prefixed table and noise
pub fn weekday_page() -> String {
    r#"OFFSHORE WEATHER FORECAST
Issued 15.02.2024 06:00 UTC
Day Date Time Ws10 Ws50m Wg Hs Tz Tp
Mon 16/02 01:00 32 29 38 7.1 5.8 7.3
Mon 16/02 04:00 18 21 24 5.0 4.1 4.6
Mon 16/02 07:00 15 17 20 4.2 3.9 4.1

Page 1 of 2"#
        .to_string()
}

/// Page with date+hour rows carrying bullets and direction codes
pub fn date_hour_page() -> String {
    r#"Date Hr Conf Dir Ws10 Wg10 Ws50 Wg50 Hs Hmax Tz Tp
16/02 10 ● NNW 12 15 14 18 3.1 5.2 3.9 4.4
16/02 13 SW 11 14 13 17 2.9 4.8 3.7 4.2
16/02 16 ○ 10 13 12 16 2.5 4.1 3.5 3.9
Page 2 of 2"#
        .to_string()
}
