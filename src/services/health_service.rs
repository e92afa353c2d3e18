use chrono::{DateTime, Duration, Utc};

use crate::models::{DashboardSummary, VitalKind, VitalSample};

/// Session log of vital samples plus the health-data authorization flag.
/// Samples are always captured; the dashboard reports zeros until the user
/// grants access.
#[derive(Debug, Default)]
pub struct VitalsLog {
    samples: Vec<VitalSample>,
    authorized: bool,
}

impl VitalsLog {
    pub fn set_authorized(&mut self, granted: bool) {
        self.authorized = granted;
    }

    pub fn record(
        &mut self,
        kind: VitalKind,
        value: f64,
        recorded_at: DateTime<Utc>,
    ) -> Result<(), String> {
        if !value.is_finite() || value < 0.0 {
            return Err("Vital values must be finite and non-negative".to_string());
        }

        self.samples.push(VitalSample {
            kind,
            value,
            recorded_at,
        });
        Ok(())
    }

    /// Dashboard aggregates as of `now`: step and active-energy totals for
    /// the current UTC day, the most recent heart-rate reading today, and
    /// sleep hours summed over the trailing 24 h window.
    pub fn summary(&self, now: DateTime<Utc>) -> DashboardSummary {
        if !self.authorized {
            return DashboardSummary {
                authorized: false,
                steps_today: 0.0,
                active_energy_today: 0.0,
                latest_heart_rate: None,
                sleep_hours_last_night: 0.0,
                as_of: now,
            };
        }

        let today = now.date_naive();
        let sleep_window_start = now - Duration::hours(24);

        let mut steps = 0.0;
        let mut energy = 0.0;
        let mut sleep = 0.0;
        let mut latest_heart_rate: Option<&VitalSample> = None;

        for sample in &self.samples {
            // ignore clock skew from the future
            if sample.recorded_at > now {
                continue;
            }

            match sample.kind {
                VitalKind::Steps if sample.recorded_at.date_naive() == today => {
                    steps += sample.value;
                }
                VitalKind::ActiveEnergy if sample.recorded_at.date_naive() == today => {
                    energy += sample.value;
                }
                VitalKind::SleepHours if sample.recorded_at >= sleep_window_start => {
                    sleep += sample.value;
                }
                VitalKind::HeartRate if sample.recorded_at.date_naive() == today => {
                    if latest_heart_rate.map_or(true, |prev| sample.recorded_at >= prev.recorded_at)
                    {
                        latest_heart_rate = Some(sample);
                    }
                }
                _ => {}
            }
        }

        DashboardSummary {
            authorized: true,
            steps_today: steps,
            active_energy_today: energy,
            latest_heart_rate: latest_heart_rate.map(|s| s.value),
            sleep_hours_last_night: sleep,
            as_of: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(timestamp: &str) -> DateTime<Utc> {
        timestamp.parse().unwrap()
    }

    #[test]
    fn unauthorized_summary_reads_zero() {
        let mut log = VitalsLog::default();
        log.record(VitalKind::Steps, 4000.0, at("2025-03-10T09:00:00Z"))
            .unwrap();

        let summary = log.summary(at("2025-03-10T12:00:00Z"));
        assert!(!summary.authorized);
        assert_eq!(summary.steps_today, 0.0);
        assert_eq!(summary.latest_heart_rate, None);
    }

    #[test]
    fn steps_sum_over_the_current_day_only() {
        let mut log = VitalsLog::default();
        log.set_authorized(true);
        log.record(VitalKind::Steps, 3000.0, at("2025-03-10T09:00:00Z"))
            .unwrap();
        log.record(VitalKind::Steps, 2000.0, at("2025-03-10T11:00:00Z"))
            .unwrap();
        log.record(VitalKind::Steps, 9999.0, at("2025-03-09T18:00:00Z"))
            .unwrap();

        let summary = log.summary(at("2025-03-10T12:00:00Z"));
        assert_eq!(summary.steps_today, 5000.0);
    }

    #[test]
    fn latest_heart_rate_is_the_most_recent_today() {
        let mut log = VitalsLog::default();
        log.set_authorized(true);
        log.record(VitalKind::HeartRate, 61.0, at("2025-03-10T07:00:00Z"))
            .unwrap();
        log.record(VitalKind::HeartRate, 74.0, at("2025-03-10T11:30:00Z"))
            .unwrap();
        log.record(VitalKind::HeartRate, 90.0, at("2025-03-09T22:00:00Z"))
            .unwrap();

        let summary = log.summary(at("2025-03-10T12:00:00Z"));
        assert_eq!(summary.latest_heart_rate, Some(74.0));
    }

    #[test]
    fn heart_rate_is_absent_without_a_reading_today() {
        let mut log = VitalsLog::default();
        log.set_authorized(true);
        log.record(VitalKind::HeartRate, 68.0, at("2025-03-09T22:00:00Z"))
            .unwrap();

        let summary = log.summary(at("2025-03-10T12:00:00Z"));
        assert_eq!(summary.latest_heart_rate, None);
    }

    #[test]
    fn sleep_window_crosses_midnight() {
        let mut log = VitalsLog::default();
        log.set_authorized(true);
        // logged when the user woke up, covers last night
        log.record(VitalKind::SleepHours, 7.5, at("2025-03-10T06:30:00Z"))
            .unwrap();
        // the night before, outside the window
        log.record(VitalKind::SleepHours, 6.0, at("2025-03-09T06:30:00Z"))
            .unwrap();

        let summary = log.summary(at("2025-03-10T08:00:00Z"));
        assert_eq!(summary.sleep_hours_last_night, 7.5);
    }

    #[test]
    fn rejects_invalid_values() {
        let mut log = VitalsLog::default();
        assert!(log
            .record(VitalKind::Steps, -1.0, at("2025-03-10T08:00:00Z"))
            .is_err());
        assert!(log
            .record(VitalKind::Steps, f64::NAN, at("2025-03-10T08:00:00Z"))
            .is_err());
        assert!(log
            .record(VitalKind::Steps, f64::INFINITY, at("2025-03-10T08:00:00Z"))
            .is_err());
    }

    #[test]
    fn future_samples_are_ignored() {
        let mut log = VitalsLog::default();
        log.set_authorized(true);
        log.record(VitalKind::Steps, 500.0, at("2025-03-10T18:00:00Z"))
            .unwrap();

        let summary = log.summary(at("2025-03-10T12:00:00Z"));
        assert_eq!(summary.steps_today, 0.0);
    }
}
