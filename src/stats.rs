use std::time::Duration;

/// Percentage of attempted words that were correct, 0 when nothing was attempted
pub fn accuracy(correct: u32, attempted: u32) -> f64 {
    if attempted == 0 {
        return 0.0;
    }
    (correct.min(attempted) as f64 / attempted as f64) * 100.0
}

/// Correct words per elapsed minute, rounded to the nearest word
pub fn words_per_minute(correct: u32, elapsed: Duration) -> f64 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if correct == 0 || minutes <= 0.0 {
        return 0.0;
    }
    (correct as f64 / minutes).round()
}
