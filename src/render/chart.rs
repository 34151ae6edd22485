use crate::types::HistorySample;

/// Window of history samples shown on the chart.
pub const MAX_CHART_POINTS: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

/// Opaque line-chart seam: the adapter only needs in-place, non-animated
/// replacement of the whole series.
pub trait LineChart {
    fn replace(&mut self, series: ChartSeries);
}

/// In-process chart that just holds the last series it was given.
#[derive(Debug, Default)]
pub struct BufferedChart {
    pub series: Option<ChartSeries>,
}

impl LineChart for BufferedChart {
    fn replace(&mut self, series: ChartSeries) {
        self.series = Some(series);
    }
}

/// Reduce the history to the most recent `MAX_CHART_POINTS` samples, in their
/// original time order, labeled HH:MM. Empty history leaves the chart
/// untouched so the last good series stays on screen.
pub fn update(chart: &mut dyn LineChart, history: &[HistorySample]) {
    if history.is_empty() {
        return;
    }

    let recent = &history[history.len().saturating_sub(MAX_CHART_POINTS)..];
    chart.replace(ChartSeries {
        labels: recent
            .iter()
            .map(|h| h.timestamp.format("%H:%M").to_string())
            .collect(),
        values: recent.iter().map(|h| h.count).collect(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(minute: u32, count: u64) -> HistorySample {
        HistorySample {
            timestamp: NaiveDate::from_ymd_opt(2026, 8, 30)
                .unwrap()
                .and_hms_opt(14, minute % 60, 0)
                .unwrap(),
            count,
        }
    }

    #[test]
    fn empty_history_leaves_prior_series_untouched() {
        let mut chart = BufferedChart::default();
        update(&mut chart, &[sample(5, 7)]);
        let before = chart.series.clone();

        update(&mut chart, &[]);

        assert_eq!(chart.series, before);
        assert!(chart.series.is_some());
    }

    #[test]
    fn short_history_is_used_as_is_without_padding() {
        let mut chart = BufferedChart::default();
        update(&mut chart, &[sample(1, 2), sample(2, 3)]);

        let series = chart.series.unwrap();
        assert_eq!(series.values, vec![2, 3]);
        assert_eq!(series.labels, vec!["14:01", "14:02"]);
    }

    #[test]
    fn long_history_keeps_last_twenty_in_time_order() {
        let history: Vec<HistorySample> = (0..25).map(|i| sample(i, i as u64)).collect();
        let mut chart = BufferedChart::default();
        update(&mut chart, &history);

        let series = chart.series.unwrap();
        assert_eq!(series.values.len(), MAX_CHART_POINTS);
        assert_eq!(series.values, (5..25).collect::<Vec<u64>>());
        assert_eq!(series.labels.first().unwrap(), "14:05");
        assert_eq!(series.labels.last().unwrap(), "14:24");
    }
}
