//! ETA and cost series for the routing analytics card
//!
//! Turns orders into chart points and lays them out as SVG polylines on two
//! independent y-axes (days on the left, cost on the right).

use super::orders::Order;

/// Most orders plotted at once
pub const MAX_POINTS: usize = 8;

/// Target number of intervals on each y-axis
const TARGET_TICKS: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsPoint {
    /// "#2", "#1", newest first
    pub label: String,
    pub eta: f64,
    pub cost: f64,
}

/// One point per order (first [`MAX_POINTS`]), zero where unrouted
pub fn analytics_points(orders: &[Order]) -> Vec<AnalyticsPoint> {
    orders
        .iter()
        .take(MAX_POINTS)
        .enumerate()
        .map(|(idx, order)| AnalyticsPoint {
            label: format!("#{}", orders.len() - idx),
            eta: order.provider.as_ref().map(|p| p.eta_days as f64).unwrap_or(0.0),
            cost: order.provider.as_ref().map(|p| p.cost).unwrap_or(0.0),
        })
        .collect()
}

/// A positioned axis label
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub position: f64,
    pub text: String,
}

/// A y-axis scale from zero to a rounded maximum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub max: f64,
    pub step: f64,
}

impl AxisScale {
    /// Smallest 1/2/5 step covering `max_value` in about four intervals
    pub fn fit(max_value: f64) -> Self {
        let target = if max_value > 0.0 { max_value } else { 1.0 };
        let step = nice_step(target / TARGET_TICKS);
        let max = (target / step).ceil() * step;
        Self { max, step }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.max / self.step).round() as usize;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|candidate| *candidate >= raw)
        .unwrap_or(10.0 * magnitude)
}

/// Computed SVG geometry for the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// `points` attribute of the ETA polyline
    pub eta_line: String,
    /// `points` attribute of the cost polyline
    pub cost_line: String,
    pub x_labels: Vec<AxisLabel>,
    /// Left axis, suffixed with "d"
    pub eta_ticks: Vec<AxisLabel>,
    /// Right axis, suffixed with "€"
    pub cost_ticks: Vec<AxisLabel>,
}

/// Fixed chart canvas (SVG user units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineChart {
    pub width: f64,
    pub height: f64,
    /// Space reserved on every side for axis labels
    pub margin: f64,
}

impl Default for LineChart {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 180.0,
            margin: 32.0,
        }
    }
}

impl LineChart {
    fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }

    /// Bottom edge of the plot area
    pub fn baseline(&self) -> f64 {
        self.height - self.margin
    }

    fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.margin + self.plot_width() / 2.0;
        }
        self.margin + index as f64 * self.plot_width() / (count - 1) as f64
    }

    fn y_at(&self, value: f64, scale: &AxisScale) -> f64 {
        self.baseline() - (value / scale.max) * self.plot_height()
    }

    pub fn layout(&self, points: &[AnalyticsPoint]) -> ChartLayout {
        let eta_scale = AxisScale::fit(points.iter().map(|p| p.eta).fold(0.0, f64::max));
        let cost_scale = AxisScale::fit(points.iter().map(|p| p.cost).fold(0.0, f64::max));

        let line = |value: fn(&AnalyticsPoint) -> f64, scale: &AxisScale| {
            points
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    format!(
                        "{:.1},{:.1}",
                        self.x_at(i, points.len()),
                        self.y_at(value(p), scale)
                    )
                })
                .collect::<Vec<_>>()
                .join(" ")
        };

        let ticks = |scale: &AxisScale, suffix: &str| {
            scale
                .ticks()
                .into_iter()
                .map(|v| AxisLabel {
                    position: self.y_at(v, scale),
                    text: format!("{}{}", v, suffix),
                })
                .collect::<Vec<_>>()
        };

        ChartLayout {
            eta_line: line(|p| p.eta, &eta_scale),
            cost_line: line(|p| p.cost, &cost_scale),
            x_labels: points
                .iter()
                .enumerate()
                .map(|(i, p)| AxisLabel {
                    position: self.x_at(i, points.len()),
                    text: p.label.clone(),
                })
                .collect(),
            eta_ticks: ticks(&eta_scale, "d"),
            cost_ticks: ticks(&cost_scale, "€"),
        }
    }
}
