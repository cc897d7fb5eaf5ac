//! Tests for the analysis pipeline
//!
//! Covers single-document analysis end to end and batch processing over
//! temporary report files.


/// Two-page report: a weekday table and a date+hour table, with an issue stamp
pub fn sample_report_text() -> String {
    [
        "NORTH FIELD MARINE FORECAST",
        "Issued 15.02.2024 06:00 UTC",
        "Day Date Time Ws10 Ws50m Wg Hs Tz Tp",
        "Mon 16/02 01:00 32 29 38 7.1 5.8 7.3",
        "Mon 16/02 04:00 14 16 19 4.0 3.6 4.2",
        "Mon 16/02 07:00 12 15 17 3.8 3.4 4.0",
        "Mon 16/02 10:00 20 24 27 5.1 4.0 4.8",
        "\x0cDate Hr Conf Dir Ws10 Wg10 Ws50 Wg50 Hs Hmax Tz Tp",
        "16/02 13 ● NNW 10 13 12 16 2.5 4.1 3.5 3.9",
        "16/02 16 ● NW 9 12 11 15 2.2 3.8 3.3 3.7",
        "16/02 19 ○ W 8 11 10 14 2.0 3.4 3.1 3.5",
        "16/02 22 ○ W 15 19 18 23 6.4 9.9 4.4 5.6",
    ]
    .join("\n")
}
