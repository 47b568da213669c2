use tidemark_core::TimePoint;

use super::midnight_ms;

pub fn by_name(name: &str) -> Option<Vec<TimePoint>> {
    match name {
        "unsorted" => Some(vec![
            TimePoint::new(midnight_ms("2024-01-02"), 1.0),
            TimePoint::new(midnight_ms("2024-01-03"), 1.0),
            TimePoint::new(midnight_ms("2024-01-01"), 1.0),
        ]),
        "nan" => Some(vec![
            TimePoint::new(midnight_ms("2024-01-01"), 1.0),
            TimePoint::new(midnight_ms("2024-01-02"), f64::NAN),
        ]),
        _ => None,
    }
}
