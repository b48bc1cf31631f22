use std::collections::VecDeque;

use time::{Duration, OffsetDateTime};

/// A numeric measurement at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub at: OffsetDateTime,
    pub value: f64,
}

impl Sample {
    pub fn new(at: OffsetDateTime, value: f64) -> Self {
        Self { at, value }
    }
}

/// Largest absolute difference between an inside and an outside sample taken
/// close enough in time.
///
/// Two samples pair when the gap between them, truncated to whole minutes, is
/// at most `delta_minutes`. Returns `None` when no pair exists.
pub fn max_difference(inside: &[Sample], outside: &[Sample], delta_minutes: i64) -> Option<f64> {
    if delta_minutes < 0 {
        return None;
    }

    let mut inside = inside.to_vec();
    let mut outside = outside.to_vec();
    inside.sort_by_key(|sample| sample.at);
    outside.sort_by_key(|sample| sample.at);

    // Pairs satisfy |gap| < window. No window means every pair qualifies.
    let window = delta_minutes
        .checked_add(1)
        .and_then(|minutes| minutes.checked_mul(60))
        .map(Duration::seconds);

    let mut highest: VecDeque<usize> = VecDeque::new();
    let mut lowest: VecDeque<usize> = VecDeque::new();
    let mut next = 0;
    let mut best: Option<f64> = None;

    for sample in &inside {
        let upper = window.and_then(|window| sample.at.checked_add(window));
        while next < outside.len() && upper.is_none_or(|upper| outside[next].at < upper) {
            let value = outside[next].value;
            while highest.back().is_some_and(|&i| outside[i].value <= value) {
                highest.pop_back();
            }
            highest.push_back(next);
            while lowest.back().is_some_and(|&i| outside[i].value >= value) {
                lowest.pop_back();
            }
            lowest.push_back(next);
            next += 1;
        }

        if let Some(lower) = window.and_then(|window| sample.at.checked_sub(window)) {
            while highest.front().is_some_and(|&i| outside[i].at <= lower) {
                highest.pop_front();
            }
            while lowest.front().is_some_and(|&i| outside[i].at <= lower) {
                lowest.pop_front();
            }
        }

        if let (Some(&high), Some(&low)) = (highest.front(), lowest.front()) {
            let candidate = (sample.value - outside[high].value)
                .abs()
                .max((sample.value - outside[low].value).abs());
            best = Some(best.map_or(candidate, |best| best.max(candidate)));
        }
    }

    best
}

/// Samples of one source sorted by time with running sums.
struct Series {
    times: Vec<OffsetDateTime>,
    sums: Vec<f64>,
}

impl Series {
    fn new(samples: &[Sample]) -> Self {
        let mut sorted = samples.to_vec();
        sorted.sort_by_key(|sample| sample.at);

        let mut sums = Vec::with_capacity(sorted.len() + 1);
        sums.push(0.0);
        for sample in &sorted {
            let last = sums.last().copied().unwrap_or(0.0);
            sums.push(last + sample.value);
        }

        Self {
            times: sorted.into_iter().map(|sample| sample.at).collect(),
            sums,
        }
    }

    /// Mean over `[from, to)`, or `[from, to]` when `closed`. Zero when empty.
    fn average(&self, from: OffsetDateTime, to: OffsetDateTime, closed: bool) -> f64 {
        let first = self.times.partition_point(|at| *at < from);
        let last = if closed {
            self.times.partition_point(|at| *at <= to)
        } else {
            self.times.partition_point(|at| *at < to)
        };

        if last <= first {
            return 0.0;
        }
        (self.sums[last] - self.sums[first]) / (last - first) as f64
    }
}

/// Highest load over consecutive intervals of `[start, end]`.
///
/// The period is cut into `ceil((end - start) / interval)` intervals, half-open
/// except for the last one. For every interval each source contributes the
/// mean of its samples (zero when it has none) and the contributions are
/// summed. Returns `0.0` for an empty period or a non-positive interval.
pub fn peak_interval_load(
    sources: &[Vec<Sample>],
    start: OffsetDateTime,
    end: OffsetDateTime,
    interval: Duration,
) -> f64 {
    if end < start || !interval.is_positive() {
        return 0.0;
    }

    let series: Vec<Series> = sources.iter().map(|samples| Series::new(samples)).collect();
    let mut peak: Option<f64> = None;
    let mut from = start;

    loop {
        let to = match from.checked_add(interval) {
            Some(to) if to < end => to,
            _ => end,
        };
        let closed = to == end;

        let load: f64 = series.iter().map(|series| series.average(from, to, closed)).sum();
        peak = Some(peak.map_or(load, |peak| peak.max(load)));

        if closed {
            break;
        }
        from = to;
    }

    peak.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn at(minute: i64, second: i64) -> OffsetDateTime {
        datetime!(2024-03-01 12:00 UTC) + Duration::minutes(minute) + Duration::seconds(second)
    }

    fn brute_force(inside: &[Sample], outside: &[Sample], delta: i64) -> Option<f64> {
        let mut best: Option<f64> = None;
        for a in inside {
            for b in outside {
                if (a.at - b.at).abs().whole_minutes() <= delta {
                    let difference = (a.value - b.value).abs();
                    best = Some(best.map_or(difference, |best| best.max(difference)));
                }
            }
        }
        best
    }

    #[test]
    fn test_max_difference_pairs_within_tolerance() {
        let inside = vec![Sample::new(at(0, 0), 21.0), Sample::new(at(10, 0), 22.0)];
        let outside = vec![Sample::new(at(1, 0), 5.0), Sample::new(at(30, 0), -10.0)];

        assert_eq!(max_difference(&inside, &outside, 1), Some(16.0));
        assert_eq!(max_difference(&inside, &outside, 20), Some(32.0));
    }

    #[test]
    fn test_max_difference_truncates_to_whole_minutes() {
        let inside = vec![Sample::new(at(0, 0), 20.0)];
        let outside = vec![Sample::new(at(1, 59), 10.0)];

        assert_eq!(max_difference(&inside, &outside, 1), Some(10.0));
        assert_eq!(max_difference(&inside, &outside, 0), None);

        let outside = vec![Sample::new(at(2, 0), 10.0)];
        assert_eq!(max_difference(&inside, &outside, 1), None);
    }

    #[test]
    fn test_max_difference_is_symmetric_in_time() {
        let inside = vec![Sample::new(at(10, 0), 20.0)];
        let before = vec![Sample::new(at(8, 0), 12.0)];
        let after = vec![Sample::new(at(12, 0), 12.0)];

        assert_eq!(max_difference(&inside, &before, 2), Some(8.0));
        assert_eq!(max_difference(&inside, &after, 2), Some(8.0));
    }

    #[test]
    fn test_max_difference_without_pairs() {
        assert_eq!(max_difference(&[], &[Sample::new(at(0, 0), 1.0)], 5), None);
        assert_eq!(max_difference(&[Sample::new(at(0, 0), 1.0)], &[], 5), None);
        assert_eq!(
            max_difference(&[Sample::new(at(0, 0), 1.0)], &[Sample::new(at(0, 0), 3.0)], -1),
            None
        );
    }

    #[test]
    fn test_max_difference_with_huge_tolerance() {
        let inside = vec![Sample::new(at(0, 0), 20.0)];
        let outside = vec![Sample::new(at(100, 0), 5.0), Sample::new(at(-5000, 0), 8.0)];

        assert_eq!(max_difference(&inside, &outside, i64::MAX), Some(15.0));
        assert_eq!(max_difference(&inside, &outside, i64::MAX / 2), Some(15.0));
        assert_eq!(max_difference(&inside, &outside, i64::MAX / 60), Some(15.0));
    }

    #[test]
    fn test_max_difference_matches_brute_force() {
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        };

        for round in 0..50 {
            let inside: Vec<Sample> = (0..40)
                .map(|_| Sample::new(at((next() % 240) as i64, (next() % 60) as i64), (next() % 400) as f64 / 10.0 - 10.0))
                .collect();
            let outside: Vec<Sample> = (0..40)
                .map(|_| Sample::new(at((next() % 240) as i64, (next() % 60) as i64), (next() % 500) as f64 / 10.0 - 25.0))
                .collect();
            let delta = round % 7;

            assert_eq!(
                max_difference(&inside, &outside, delta),
                brute_force(&inside, &outside, delta),
                "round {round}"
            );
        }
    }

    #[test]
    fn test_peak_interval_load_sums_averages() {
        let heater = vec![
            Sample::new(at(0, 0), 100.0),
            Sample::new(at(5, 0), 300.0),
            Sample::new(at(20, 0), 50.0),
        ];
        let oven = vec![Sample::new(at(2, 0), 1000.0), Sample::new(at(25, 0), 10.0)];

        // [0, 15): 200 + 1000, [15, 30]: 50 + 10
        let peak = peak_interval_load(&[heater, oven], at(0, 0), at(30, 0), Duration::minutes(15));
        assert_eq!(peak, 1200.0);
    }

    #[test]
    fn test_peak_interval_load_boundaries() {
        let meter = vec![Sample::new(at(15, 0), 40.0), Sample::new(at(30, 0), 80.0)];

        // 15:00 belongs to the second interval, 30:00 closes the last one.
        let peak = peak_interval_load(
            &[meter.clone()],
            at(0, 0),
            at(30, 0),
            Duration::minutes(15),
        );
        assert_eq!(peak, 60.0);

        // Uneven split leaves a short last interval: [0, 20) and [20, 30].
        let peak = peak_interval_load(&[meter], at(0, 0), at(30, 0), Duration::minutes(20));
        assert_eq!(peak, 80.0);
    }

    #[test]
    fn test_peak_interval_load_degenerate_inputs() {
        let meter = vec![Sample::new(at(0, 0), 40.0)];

        assert_eq!(peak_interval_load(&[meter.clone()], at(0, 0), at(0, 0), Duration::minutes(5)), 40.0);
        assert_eq!(peak_interval_load(&[meter.clone()], at(5, 0), at(0, 0), Duration::minutes(5)), 0.0);
        assert_eq!(peak_interval_load(&[meter], at(0, 0), at(5, 0), Duration::ZERO), 0.0);
        assert_eq!(peak_interval_load(&[], at(0, 0), at(5, 0), Duration::minutes(1)), 0.0);
    }

    #[test]
    fn test_peak_interval_load_with_interval_longer_than_period() {
        let meter = vec![Sample::new(at(0, 0), 40.0), Sample::new(at(5, 0), 80.0)];

        let peak = peak_interval_load(&[meter], at(0, 0), at(5, 0), Duration::MAX);
        assert_eq!(peak, 60.0);
    }
}
