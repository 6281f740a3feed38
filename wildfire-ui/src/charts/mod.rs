//! Chart Model
//!
//! Chart widgets are created once per page with empty data. A refresh
//! replaces the label and series arrays of an existing widget in place; the
//! reactive signal change triggers the canvas redraw.

pub mod canvas;

use leptos::*;

/// Series colors for the weather chart
pub const TEMPERATURE_COLOR: &str = "#ff4d4d";
pub const HUMIDITY_COLOR: &str = "#17a2b8";

/// Fixed feature importance weights shown in the doughnut chart.
/// These are constants of the page, not server data.
pub const IMPORTANCE_WEIGHTS: [(&str, f64, &str); 6] = [
    ("Temp", 40.0, "#e74c3c"),
    ("Humidity", 30.0, "#3498db"),
    ("Wind", 10.0, "#f1c40f"),
    ("Rain", 5.0, "#2ecc71"),
    ("NDVI", 10.0, "#9b59b6"),
    ("History", 5.0, "#34495e"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
}

/// One data series
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    /// One color per series, or one per value for doughnut slices
    pub colors: Vec<String>,
    /// Shade the area under a line series
    pub fill: bool,
}

impl Dataset {
    pub fn new(label: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            values: Vec::new(),
            colors: vec![color.to_string()],
            fill: false,
        }
    }

    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn color(&self, index: usize) -> &str {
        self.colors
            .get(index % self.colors.len().max(1))
            .map(String::as_str)
            .unwrap_or("#a0a0a5")
    }
}

/// Labels plus the series drawn against them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// True when every series has exactly one value per label
    pub fn is_aligned(&self) -> bool {
        self.datasets.iter().all(|d| d.values.len() == self.labels.len())
    }

    /// Replace labels and series values, keeping series styling.
    /// Series beyond the provided ones are cleared.
    pub fn replace(&mut self, labels: Vec<String>, series: Vec<Vec<f64>>) {
        self.labels = labels;
        let mut series = series.into_iter();
        for dataset in &mut self.datasets {
            dataset.values = series.next().unwrap_or_default();
        }
    }
}

/// Handle to a chart widget; the widget lives as long as the page.
#[derive(Debug, Clone, Copy)]
pub struct ChartHandle {
    pub kind: ChartKind,
    pub data: RwSignal<ChartData>,
}

impl ChartHandle {
    pub fn new(kind: ChartKind, data: ChartData) -> Self {
        Self {
            kind,
            data: create_rw_signal(data),
        }
    }

    /// Dual-series temperature/humidity line chart
    pub fn weather() -> Self {
        Self::new(
            ChartKind::Line,
            ChartData {
                labels: Vec::new(),
                datasets: vec![
                    Dataset::new("Temp (°C)", TEMPERATURE_COLOR).filled(),
                    Dataset::new("Hum (%)", HUMIDITY_COLOR).filled(),
                ],
            },
        )
    }

    /// Temperature bar chart used as the risk trend proxy
    pub fn risk_trend() -> Self {
        Self::new(
            ChartKind::Bar,
            ChartData {
                labels: Vec::new(),
                datasets: vec![Dataset::new("Temperature", TEMPERATURE_COLOR)],
            },
        )
    }

    /// Static feature importance doughnut
    pub fn importance() -> Self {
        let mut dataset = Dataset::new("Importance", "");
        dataset.values = IMPORTANCE_WEIGHTS.iter().map(|(_, w, _)| *w).collect();
        dataset.colors = IMPORTANCE_WEIGHTS.iter().map(|(_, _, c)| c.to_string()).collect();

        Self::new(
            ChartKind::Doughnut,
            ChartData {
                labels: IMPORTANCE_WEIGHTS.iter().map(|(l, _, _)| l.to_string()).collect(),
                datasets: vec![dataset],
            },
        )
    }

    /// Replace the chart's data in place, which schedules a redraw.
    pub fn update(&self, labels: Vec<String>, series: Vec<Vec<f64>>) {
        self.data.update(|data| data.replace(labels, series));
    }

    pub fn snapshot(&self) -> ChartData {
        self.data.get_untracked()
    }
}
