//! Chart Components
//!
//! Inline SVG line and bar charts for the overview page. Geometry lives in
//! plain functions so it can be tested without a DOM.

use leptos::prelude::*;

use dashboard_core::{UserActivity, UserPosts};

// ========================
// Geometry
// ========================

/// Drawing area in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBox {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartBox {
    fn default() -> Self {
        Self { width: 480.0, height: 240.0, padding: 32.0 }
    }
}

impl ChartBox {
    fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    fn y_for(&self, value: usize, max: usize) -> f64 {
        self.baseline() - self.inner_height() * value as f64 / max as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Top of the value axis: the largest value, never below 1
pub fn axis_max<'a>(series: impl IntoIterator<Item = &'a [usize]>) -> usize {
    series
        .into_iter()
        .flat_map(|values| values.iter().copied())
        .max()
        .unwrap_or(0)
        .max(1)
}

/// X coordinate of the `index`-th of `count` evenly spread points
pub fn point_x(index: usize, count: usize, chart: ChartBox) -> f64 {
    if count <= 1 {
        return chart.padding + chart.inner_width() / 2.0;
    }
    chart.padding + chart.inner_width() * index as f64 / (count - 1) as f64
}

/// `points` attribute of an SVG polyline
pub fn polyline_points(values: &[usize], max: usize, chart: ChartBox) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| format!("{:.1},{:.1}", point_x(i, values.len(), chart), chart.y_for(v, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One bar per value, each centred in an equal slot
pub fn bar_rects(values: &[usize], max: usize, chart: ChartBox) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = chart.inner_width() / values.len() as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let y = chart.y_for(v, max);
            BarRect {
                x: chart.padding + slot * i as f64 + slot * 0.2,
                y,
                width: slot * 0.6,
                height: chart.baseline() - y,
            }
        })
        .collect()
}

// ========================
// Components
// ========================

/// Posts and todos per user, two series
#[component]
pub fn ActivityLineChart(#[prop(into)] data: Signal<Vec<UserActivity>>) -> impl IntoView {
    let chart = ChartBox::default();
    let view_box = format!("0 0 {} {}", chart.width, chart.height);

    let geometry = Memo::new(move |_| {
        data.with(|rows| {
            let posts: Vec<usize> = rows.iter().map(|r| r.posts).collect();
            let todos: Vec<usize> = rows.iter().map(|r| r.todos).collect();
            let max = axis_max([posts.as_slice(), todos.as_slice()]);
            let labels: Vec<(f64, String)> = rows
                .iter()
                .enumerate()
                .map(|(i, r)| (point_x(i, rows.len(), chart), r.name.clone()))
                .collect();
            (polyline_points(&posts, max, chart), polyline_points(&todos, max, chart), labels, max)
        })
    });

    view! {
        <div class="card chart-card">
            <h3>"User Activity"</h3>
            <svg class="chart" viewBox=view_box.clone()>
                <line class="axis" x1=chart.padding y1=chart.baseline() x2={chart.width - chart.padding} y2=chart.baseline() />
                <text class="axis-label" x=4 y=chart.padding>{move || geometry.with(|g| g.3.to_string())}</text>
                <polyline class="series series-posts" fill="none" points=move || geometry.with(|g| g.0.clone()) />
                <polyline class="series series-todos" fill="none" points=move || geometry.with(|g| g.1.clone()) />
                {move || geometry.with(|g| g.2.iter().map(|(x, name)| view! {
                    <text class="axis-label" x={*x} y={chart.height - 8.0} text-anchor="middle">{name.clone()}</text>
                }).collect_view())}
            </svg>
            <div class="legend">
                <span class="legend-posts">"Posts"</span>
                <span class="legend-todos">"Todos"</span>
            </div>
        </div>
    }
}

/// Posts per user as bars
#[component]
pub fn PostsBarChart(#[prop(into)] data: Signal<Vec<UserPosts>>) -> impl IntoView {
    let chart = ChartBox::default();
    let view_box = format!("0 0 {} {}", chart.width, chart.height);

    let bars = Memo::new(move |_| {
        data.with(|rows| {
            let posts: Vec<usize> = rows.iter().map(|r| r.posts).collect();
            let max = axis_max([posts.as_slice()]);
            bar_rects(&posts, max, chart)
                .into_iter()
                .zip(rows.iter().map(|r| r.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="card chart-card">
            <h3>"Posts by User"</h3>
            <svg class="chart" viewBox=view_box>
                <line class="axis" x1=chart.padding y1=chart.baseline() x2={chart.width - chart.padding} y2=chart.baseline() />
                {move || bars.with(|bars| bars.iter().map(|(bar, name)| view! {
                    <g>
                        <rect class="bar" x=bar.x y=bar.y width=bar.width height=bar.height />
                        <text class="axis-label" x={bar.x + bar.width / 2.0} y={chart.height - 8.0} text-anchor="middle">
                            {name.clone()}
                        </text>
                    </g>
                }).collect_view())}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BOX: ChartBox = ChartBox { width: 100.0, height: 60.0, padding: 10.0 };

    #[test]
    fn test_axis_max_never_zero() {
        let empty: [usize; 0] = [];
        assert_eq!(axis_max([empty.as_slice()]), 1);
        assert_eq!(axis_max([[0, 0].as_slice()]), 1);
        assert_eq!(axis_max([[3, 1].as_slice(), [2, 7].as_slice()]), 7);
    }

    #[test]
    fn test_polyline_spans_inner_width() {
        assert_eq!(polyline_points(&[0, 4, 2], 4, BOX), "10.0,50.0 50.0,10.0 90.0,30.0");
        assert_eq!(polyline_points(&[2], 4, BOX), "50.0,30.0");
        assert_eq!(polyline_points(&[], 4, BOX), "");
    }

    #[test]
    fn test_bars_stand_on_baseline() {
        let bars = bar_rects(&[10, 5], 10, BOX);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0], BarRect { x: 18.0, y: 10.0, width: 24.0, height: 40.0 });
        assert_eq!(bars[1], BarRect { x: 58.0, y: 30.0, width: 24.0, height: 20.0 });
        assert!(bar_rects(&[], 1, BOX).is_empty());
    }
}
