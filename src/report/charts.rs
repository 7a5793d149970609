//! Comparison charts: specs, SVG rendering and chart instance lifecycle.
//!
//! A chart instance lives on a [`ChartBackend`] and must be destroyed before
//! it is replaced. [`ChartsView`] owns the two instances for one dataset and
//! recreates them only when it is handed a different dataset, destroying the
//! old ones first. Dropping the view destroys whatever is still live.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Arc;

use tracing::debug;

use super::escape_markup;
use crate::core::schema::{ChartDataset, GOEMANS_WILLIAMSON, QUANTUM_ANNEALER, SUBJECT_METHOD};

/// Lower bound of the approximation ratio axis.
pub const RATIO_AXIS_MIN: f64 = 0.85;
/// Upper bound of the approximation ratio axis.
pub const RATIO_AXIS_MAX: f64 = 0.90;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 260.0;
const PAD_L: f64 = 56.0;
const PAD_R: f64 = 16.0;
const PAD_T: f64 = 36.0;
const PAD_B: f64 = 32.0;
const AXIS_COLOR: &str = "#2d3a5c";
const TICK_COLOR: &str = "#a0a0a0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChartKind {
    ExecutionTime,
    ApproximationRatio,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisScale {
    Logarithmic,
    Linear { min: f64, max: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: &'static str,
    pub y_axis_title: &'static str,
    pub labels: Vec<String>,
    pub series: Vec<SeriesSpec>,
    pub scale: AxisScale,
    /// Decimals shown in tooltips
    pub precision: usize,
    /// Unit appended to tooltip values
    pub unit: &'static str,
}

fn method_color(method: &str) -> &'static str {
    match method {
        SUBJECT_METHOD => "#00F5D4",
        GOEMANS_WILLIAMSON => "#F7B801",
        QUANTUM_ANNEALER => "#F15BB5",
        _ => "#E0E0E0",
    }
}

impl ChartSpec {
    /// Bar chart of execution time per size, logarithmic axis.
    pub fn execution_time(data: &ChartDataset) -> Self {
        ChartSpec {
            kind: ChartKind::ExecutionTime,
            title: "Execution Time Comparison",
            y_axis_title: "Execution Time (s)",
            labels: data.labels.clone(),
            series: data
                .methods()
                .iter()
                .map(|&(name, s)| SeriesSpec {
                    label: name,
                    color: method_color(name),
                    values: s.execution_times.clone(),
                    dashed: false,
                })
                .collect(),
            scale: AxisScale::Logarithmic,
            precision: 4,
            unit: "s",
        }
    }

    /// Line chart of approximation ratio per size on a fixed window.
    pub fn approximation_ratio(data: &ChartDataset) -> Self {
        ChartSpec {
            kind: ChartKind::ApproximationRatio,
            title: "Approximation Ratio Comparison",
            y_axis_title: "Approximation Ratio",
            labels: data.labels.clone(),
            series: data
                .methods()
                .iter()
                .map(|&(name, s)| SeriesSpec {
                    label: name,
                    color: method_color(name),
                    values: s.approximation_ratios.clone(),
                    dashed: name == GOEMANS_WILLIAMSON,
                })
                .collect(),
            scale: AxisScale::Linear {
                min: RATIO_AXIS_MIN,
                max: RATIO_AXIS_MAX,
            },
            precision: 3,
            unit: "",
        }
    }

    /// Tooltip text for one point, e.g. `Goemans-Williamson: 0.1000s`.
    pub fn tooltip(&self, series: &SeriesSpec, value: f64) -> String {
        format!(
            "{}: {:.prec$}{}",
            series.label,
            value,
            self.unit,
            prec = self.precision
        )
    }
}

/// Vertical axis mapping for one chart.
struct YAxis {
    scale: AxisScale,
    lo: f64,
    hi: f64,
}

impl YAxis {
    fn for_spec(spec: &ChartSpec) -> Self {
        match spec.scale {
            AxisScale::Linear { min, max } => YAxis {
                scale: spec.scale,
                lo: min,
                hi: max,
            },
            AxisScale::Logarithmic => {
                let positive = spec
                    .series
                    .iter()
                    .flat_map(|s| s.values.iter().copied())
                    .filter(|v| *v > 0.0 && v.is_finite());
                let (min, max) = positive.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                    (lo.min(v), hi.max(v))
                });
                let (lo, mut hi) = if min.is_finite() {
                    (min.log10().floor(), max.log10().ceil())
                } else {
                    (0.0, 1.0)
                };
                if hi <= lo {
                    hi = lo + 1.0;
                }
                YAxis {
                    scale: spec.scale,
                    lo,
                    hi,
                }
            }
        }
    }

    /// Fraction of the plot height for `value`, clamped to the axis.
    fn fraction(&self, value: f64) -> f64 {
        let v = match self.scale {
            AxisScale::Logarithmic if value > 0.0 => value.log10(),
            AxisScale::Logarithmic => self.lo,
            AxisScale::Linear { .. } => value,
        };
        ((v - self.lo) / (self.hi - self.lo)).clamp(0.0, 1.0)
    }

    fn y(&self, value: f64) -> f64 {
        let plot_h = HEIGHT - PAD_T - PAD_B;
        PAD_T + plot_h * (1.0 - self.fraction(value))
    }

    /// `(value, label)` pairs for gridlines.
    fn ticks(&self) -> Vec<(f64, String)> {
        match self.scale {
            AxisScale::Logarithmic => {
                let (lo, hi) = (self.lo as i32, self.hi as i32);
                (lo..=hi)
                    .map(|exp| {
                        let v = 10f64.powi(exp);
                        (v, format!("{v}"))
                    })
                    .collect()
            }
            AxisScale::Linear { min, max } => {
                let steps = 5;
                (0..=steps)
                    .map(|i| {
                        let v = min + (max - min) * i as f64 / steps as f64;
                        (v, format!("{v:.2}"))
                    })
                    .collect()
            }
        }
    }
}

/// Render a chart as a standalone SVG element.
pub fn render_svg(spec: &ChartSpec) -> String {
    let axis = YAxis::for_spec(spec);
    let plot_w = WIDTH - PAD_L - PAD_R;
    let groups = spec.labels.len().max(1) as f64;
    let group_w = plot_w / groups;
    let center_x = |i: usize| PAD_L + group_w * (i as f64 + 0.5);

    let mut svg = String::with_capacity(8 * 1024);
    let _ = write!(
        svg,
        r#"<svg class="chart" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{}">"#,
        escape_markup(spec.title)
    );

    // Gridlines and tick labels
    for (value, label) in axis.ticks() {
        let y = axis.y(value);
        let _ = write!(
            svg,
            r#"<line x1="{PAD_L}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{AXIS_COLOR}" stroke-width="1"/><text x="{:.1}" y="{:.1}" fill="{TICK_COLOR}" font-size="10" text-anchor="end">{}</text>"#,
            WIDTH - PAD_R,
            PAD_L - 6.0,
            y + 3.0,
            escape_markup(&label)
        );
    }

    // Category labels
    for (i, label) in spec.labels.iter().enumerate() {
        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" fill="{TICK_COLOR}" font-size="11" text-anchor="middle">{}</text>"#,
            center_x(i),
            HEIGHT - PAD_B + 16.0,
            escape_markup(label)
        );
    }

    // Y axis title
    let _ = write!(
        svg,
        r#"<text x="12" y="{:.1}" fill="{TICK_COLOR}" font-size="10" text-anchor="middle" transform="rotate(-90 12 {:.1})">{}</text>"#,
        HEIGHT / 2.0,
        HEIGHT / 2.0,
        escape_markup(spec.y_axis_title)
    );

    match spec.kind {
        ChartKind::ExecutionTime => render_bars(&mut svg, spec, &axis, group_w, &center_x),
        ChartKind::ApproximationRatio => render_lines(&mut svg, spec, &axis, &center_x),
    }

    // Legend
    let mut x = PAD_L;
    for series in &spec.series {
        let _ = write!(
            svg,
            r##"<rect x="{x:.1}" y="10" width="12" height="12" fill="{}"/><text x="{:.1}" y="20" fill="#E0E0E0" font-size="12">{}</text>"##,
            series.color,
            x + 16.0,
            escape_markup(series.label)
        );
        x += 16.0 + 7.0 * series.label.chars().count() as f64 + 14.0;
    }

    svg.push_str("</svg>");
    svg
}

fn render_bars(
    svg: &mut String,
    spec: &ChartSpec,
    axis: &YAxis,
    group_w: f64,
    center_x: &dyn Fn(usize) -> f64,
) {
    let count = spec.series.len().max(1) as f64;
    let bar_w = group_w * 0.8 / count;
    let base_y = HEIGHT - PAD_B;
    for (s_idx, series) in spec.series.iter().enumerate() {
        for (i, value) in series.values.iter().copied().enumerate() {
            if value <= 0.0 || !value.is_finite() {
                continue;
            }
            let x = center_x(i) - group_w * 0.4 + bar_w * s_idx as f64;
            let y = axis.y(value);
            let _ = write!(
                svg,
                r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{:.1}" fill="{}"><title>{}</title></rect>"#,
                (base_y - y).max(0.0),
                series.color,
                escape_markup(&spec.tooltip(series, value))
            );
        }
    }
}

fn render_lines(svg: &mut String, spec: &ChartSpec, axis: &YAxis, center_x: &dyn Fn(usize) -> f64) {
    for series in &spec.series {
        let points: Vec<String> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{:.1},{:.1}", center_x(i), axis.y(*v)))
            .collect();
        let dash = if series.dashed {
            r#" stroke-dasharray="5,5""#
        } else {
            ""
        };
        let _ = write!(
            svg,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"{dash}/>"#,
            points.join(" "),
            series.color
        );
        for (i, value) in series.values.iter().copied().enumerate() {
            let _ = write!(
                svg,
                r#"<circle cx="{:.1}" cy="{:.1}" r="4" fill="{}"><title>{}</title></circle>"#,
                center_x(i),
                axis.y(value),
                series.color,
                escape_markup(&spec.tooltip(series, value))
            );
        }
    }
}

/// Identifier of a live chart instance on a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChartId(pub u64);

/// Surface that owns chart instances.
pub trait ChartBackend {
    /// Create a chart instance for `spec`.
    fn create(&mut self, spec: &ChartSpec) -> ChartId;

    /// Release a chart instance. Unknown ids are ignored.
    fn destroy(&mut self, id: ChartId);
}

/// Backend that renders each chart to SVG and keeps it until destroyed.
#[derive(Debug, Default)]
pub struct SvgChartBackend {
    next_id: u64,
    live: BTreeMap<ChartId, (ChartKind, String)>,
    created: usize,
    destroyed: usize,
}

impl SvgChartBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG of the live chart of `kind`, if any.
    pub fn svg(&self, kind: ChartKind) -> Option<&str> {
        self.live
            .values()
            .find(|(k, _)| *k == kind)
            .map(|(_, svg)| svg.as_str())
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn created(&self) -> usize {
        self.created
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed
    }
}

impl ChartBackend for SvgChartBackend {
    fn create(&mut self, spec: &ChartSpec) -> ChartId {
        self.next_id += 1;
        let id = ChartId(self.next_id);
        self.live.insert(id, (spec.kind, render_svg(spec)));
        self.created += 1;
        id
    }

    fn destroy(&mut self, id: ChartId) {
        if self.live.remove(&id).is_some() {
            self.destroyed += 1;
        }
    }
}

/// The pair of comparison charts bound to one dataset.
pub struct ChartsView<B: ChartBackend> {
    backend: B,
    dataset: Option<Arc<ChartDataset>>,
    charts: Vec<ChartId>,
}

impl<B: ChartBackend> ChartsView<B> {
    pub fn new(backend: B) -> Self {
        ChartsView {
            backend,
            dataset: None,
            charts: Vec::new(),
        }
    }

    /// Show `data`. Returns true if the charts were (re)created.
    ///
    /// The same `Arc` is a no-op; any other dataset destroys the current
    /// charts before creating new ones.
    pub fn render(&mut self, data: &Arc<ChartDataset>) -> bool {
        if let Some(current) = &self.dataset {
            if Arc::ptr_eq(current, data) {
                return false;
            }
        }
        self.teardown();
        for spec in [ChartSpec::execution_time(data), ChartSpec::approximation_ratio(data)] {
            let id = self.backend.create(&spec);
            self.charts.push(id);
        }
        self.dataset = Some(Arc::clone(data));
        debug!(charts = self.charts.len(), "charts created");
        true
    }

    /// Destroy every live chart.
    pub fn teardown(&mut self) {
        for id in self.charts.drain(..) {
            self.backend.destroy(id);
        }
        self.dataset = None;
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn chart_ids(&self) -> &[ChartId] {
        &self.charts
    }
}

impl<B: ChartBackend> Drop for ChartsView<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::chart_dataset;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Created(ChartId, ChartKind),
        Destroyed(ChartId),
    }

    #[derive(Clone, Default)]
    struct RecordingBackend {
        events: Rc<RefCell<Vec<Event>>>,
        next: u64,
    }

    impl ChartBackend for RecordingBackend {
        fn create(&mut self, spec: &ChartSpec) -> ChartId {
            self.next += 1;
            let id = ChartId(self.next);
            self.events.borrow_mut().push(Event::Created(id, spec.kind));
            id
        }

        fn destroy(&mut self, id: ChartId) {
            self.events.borrow_mut().push(Event::Destroyed(id));
        }
    }

    #[test]
    fn test_execution_time_spec() {
        let spec = ChartSpec::execution_time(&chart_dataset());
        assert_eq!(spec.scale, AxisScale::Logarithmic);
        assert_eq!(spec.series.len(), 3);
        assert_eq!(spec.series[1].label, GOEMANS_WILLIAMSON);
        assert_eq!(spec.series[1].values, vec![0.1, 1.2, 15.0]);
        assert_eq!(
            spec.tooltip(&spec.series[1], 0.1),
            "Goemans-Williamson: 0.1000s"
        );
    }

    #[test]
    fn test_ratio_spec_window() {
        let spec = ChartSpec::approximation_ratio(&chart_dataset());
        assert_eq!(
            spec.scale,
            AxisScale::Linear {
                min: 0.85,
                max: 0.90
            }
        );
        assert!(spec.series[1].dashed);
        assert_eq!(spec.tooltip(&spec.series[0], 0.892), "Structured Entropy: 0.892");
    }

    #[test]
    fn test_log_axis_spans_decades() {
        let spec = ChartSpec::execution_time(&chart_dataset());
        let axis = YAxis::for_spec(&spec);
        assert_eq!((axis.lo, axis.hi), (-2.0, 2.0));
        assert!(axis.y(15.0) < axis.y(0.07));
    }

    #[test]
    fn test_linear_axis_clamps_out_of_window() {
        let spec = ChartSpec::approximation_ratio(&chart_dataset());
        let axis = YAxis::for_spec(&spec);
        assert_eq!(axis.y(0.5), axis.y(0.85));
        assert_eq!(axis.y(0.99), axis.y(0.90));
    }

    #[test]
    fn test_render_svg_contains_labels_and_tooltips() {
        let svg = render_svg(&ChartSpec::execution_time(&chart_dataset()));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        for label in ["N=5", "N=20", "N=50", "Quantum Annealer"] {
            assert!(svg.contains(label), "missing {label}");
        }
        assert!(svg.contains("<title>Goemans-Williamson: 15.0000s</title>"));
        assert_eq!(svg.matches("<rect").count(), 9 + 3);
    }

    #[test]
    fn test_view_recreates_only_on_new_dataset() {
        let backend = RecordingBackend::default();
        let events = Rc::clone(&backend.events);
        let mut view = ChartsView::new(backend);

        let data = Arc::new(chart_dataset());
        assert!(view.render(&data));
        assert!(!view.render(&Arc::clone(&data)));
        assert_eq!(events.borrow().len(), 2);

        // Equal contents, different reference: still recreated
        let fresh = Arc::new(chart_dataset());
        assert!(view.render(&fresh));
        let log = events.borrow();
        assert_eq!(
            log[2..4],
            [Event::Destroyed(ChartId(1)), Event::Destroyed(ChartId(2))]
        );
        assert_eq!(log[4], Event::Created(ChartId(3), ChartKind::ExecutionTime));
        assert_eq!(log[5], Event::Created(ChartId(4), ChartKind::ApproximationRatio));
    }

    #[test]
    fn test_view_drop_destroys_live_charts() {
        let backend = RecordingBackend::default();
        let events = Rc::clone(&backend.events);
        {
            let mut view = ChartsView::new(backend);
            view.render(&Arc::new(chart_dataset()));
        }
        let destroyed = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Destroyed(_)))
            .count();
        assert_eq!(destroyed, 2);
    }

    #[test]
    fn test_svg_backend_counts() {
        let mut view = ChartsView::new(SvgChartBackend::new());
        view.render(&Arc::new(chart_dataset()));
        view.render(&Arc::new(chart_dataset()));
        let backend = view.backend();
        assert_eq!(backend.created(), 4);
        assert_eq!(backend.destroyed(), 2);
        assert_eq!(backend.live_count(), 2);
        assert!(backend.svg(ChartKind::ApproximationRatio).is_some());
    }
}
