use std::f64::consts::PI;

use web_sys::HtmlElement;
use yew::prelude::*;

/// Chart renderer component: draws a [`ChartData`] as inline SVG
#[derive(Properties, PartialEq)]
pub struct ChartRendererProps {
    pub chart: ChartData,
    pub chart_id: AttrValue,
}

#[function_component(ChartRenderer)]
pub fn chart_renderer(props: &ChartRendererProps) -> Html {
    let chart_container_ref = use_node_ref();

    {
        let chart_container_ref = chart_container_ref.clone();
        use_effect_with(props.chart.clone(), move |chart| {
            if let Some(container) = chart_container_ref.cast::<HtmlElement>() {
                container.set_inner_html(&generate_chart_html(chart));
            }
            || ()
        });
    }

    html! {
        <div class="chart-container" id={format!("chart-{}", props.chart_id)} ref={chart_container_ref}>
            <div class="chart-loading">
                {"Loading chart..."}
            </div>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartType {
    Bar,
    Pie,
}

/// Chart data structure for the renderer
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub chart_type: ChartType,
    pub config: ChartConfig,
    pub points: Vec<DataPoint>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    /// Series name, shown as the bar chart's axis label
    pub series_label: String,
    pub width: u32,
    pub height: u32,
    pub colors: Vec<String>,
    pub border_color: Option<String>,
    pub show_legend: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

const DEFAULT_COLOR: &str = "#3B82F6";

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Counts and whole hours print without decimals.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn color_at(colors: &[String], index: usize) -> &str {
    if colors.is_empty() {
        DEFAULT_COLOR
    } else {
        colors[index % colors.len()].as_str()
    }
}

/// Generate HTML representation of the chart
pub fn generate_chart_html(chart_data: &ChartData) -> String {
    match chart_data.chart_type {
        ChartType::Bar => generate_bar_chart_html(chart_data),
        ChartType::Pie => generate_pie_chart_html(chart_data),
    }
}

fn generate_bar_chart_html(chart_data: &ChartData) -> String {
    let config = &chart_data.config;
    let points = &chart_data.points;
    if points.is_empty() {
        return "<div class='chart-error'>No data available for bar chart</div>".to_string();
    }

    let width = config.width as f64;
    let height = config.height as f64;
    // 80px at the bottom for labels and axis
    let plot_height = height - 80.0;
    let max_value = points.iter().map(|p| p.value).fold(0.0, f64::max);
    let slot = (width - 50.0) / points.len() as f64;
    let bar_width = slot * 0.8;
    let stroke = config
        .border_color
        .as_deref()
        .map(|c| format!(" stroke=\"{}\" stroke-width=\"1\"", c))
        .unwrap_or_default();

    let bars_html: String = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = 50.0 + i as f64 * slot + slot * 0.1;
            let bar_height = if max_value > 0.0 {
                point.value / max_value * plot_height * 0.9
            } else {
                0.0
            };
            let y = plot_height - bar_height;
            format!(
                r#"<g class="bar-group"><rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"{} class="bar"/><text x="{:.2}" y="{:.2}" text-anchor="middle" class="bar-label">{}</text><text x="{:.2}" y="{:.2}" text-anchor="middle" class="bar-value">{}</text></g>"#,
                x,
                y,
                bar_width,
                bar_height,
                color_at(&config.colors, i),
                stroke,
                x + bar_width / 2.0,
                height - 50.0,
                escape_html(&point.label),
                x + bar_width / 2.0,
                y - 5.0,
                format_value(point.value)
            )
        })
        .collect();

    let axis_html = format!(
        r##"<g class="chart-axes"><text x="20" y="{:.2}" text-anchor="middle" transform="rotate(-90, 20, {:.2})" class="y-axis-label">{}</text><line x1="50" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#e5e7eb" stroke-width="1"/></g>"##,
        plot_height / 2.0,
        plot_height / 2.0,
        escape_html(&config.series_label),
        plot_height,
        width,
        plot_height
    );

    let legend_html = if config.show_legend {
        format!(
            r#"<div class="chart-legend"><div class="legend-item"><span class="legend-color" style="background-color: {}"></span><span class="legend-label">{}</span></div></div>"#,
            color_at(&config.colors, 0),
            escape_html(&config.series_label)
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="chart-wrapper"><h3 class="chart-title">{}</h3>{}<div class="chart-content"><svg width="{}" height="{}" viewBox="0 0 {} {}"><g class="chart-area">{}{}</g></svg></div></div>"#,
        escape_html(&config.title),
        legend_html,
        config.width,
        config.height,
        config.width,
        config.height,
        axis_html,
        bars_html
    )
}

fn generate_pie_chart_html(chart_data: &ChartData) -> String {
    let config = &chart_data.config;
    let points = &chart_data.points;
    let total: f64 = points.iter().map(|p| p.value).sum();
    if points.is_empty() || total <= 0.0 {
        return "<div class='chart-error'>No data available for pie chart</div>".to_string();
    }

    let center_x = config.width as f64 / 2.0;
    let center_y = config.height as f64 / 2.0;
    let radius = (config.width.min(config.height) as f64 / 2.0) * 0.8;

    // Start at twelve o'clock and go clockwise
    let mut current_angle = -PI / 2.0;
    let slices_html: String = points
        .iter()
        .enumerate()
        .filter(|(_, point)| point.value > 0.0)
        .map(|(i, point)| {
            let slice_angle = point.value / total * 2.0 * PI;
            let start_angle = current_angle;
            let end_angle = start_angle + slice_angle;
            current_angle = end_angle;
            let color = color_at(&config.colors, i);

            let shape = if slice_angle >= 2.0 * PI - 1e-9 {
                format!(
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" class="slice"/>"#,
                    center_x, center_y, radius, color
                )
            } else {
                let large_arc_flag = if slice_angle > PI { 1 } else { 0 };
                format!(
                    r#"<path d="M {:.2},{:.2} L {:.2},{:.2} A {:.2},{:.2} 0 {},1 {:.2},{:.2} Z" fill="{}" class="slice"/>"#,
                    center_x,
                    center_y,
                    center_x + radius * start_angle.cos(),
                    center_y + radius * start_angle.sin(),
                    radius,
                    radius,
                    large_arc_flag,
                    center_x + radius * end_angle.cos(),
                    center_y + radius * end_angle.sin(),
                    color
                )
            };

            let mid_angle = start_angle + slice_angle / 2.0;
            format!(
                r#"<g class="pie-slice">{}<title>{}: {}</title></g>"#,
                shape,
                escape_html(&point.label),
                format_value(point.value),
            ) + &format!(
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" class="slice-label">{}</text>"#,
                center_x + radius * 0.65 * mid_angle.cos(),
                center_y + radius * 0.65 * mid_angle.sin(),
                escape_html(&point.label)
            )
        })
        .collect();

    let legend_html = if config.show_legend {
        format!(
            r#"<div class="chart-legend">{}</div>"#,
            generate_legend_html(points, &config.colors)
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="chart-wrapper"><h3 class="chart-title">{}</h3><div class="chart-content"><svg width="{}" height="{}" viewBox="0 0 {} {}"><g class="chart-area">{}</g></svg>{}</div></div>"#,
        escape_html(&config.title),
        config.width,
        config.height,
        config.width,
        config.height,
        slices_html,
        legend_html
    )
}

fn generate_legend_html(data_points: &[DataPoint], colors: &[String]) -> String {
    data_points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            format!(
                r#"<div class="legend-item"><span class="legend-color" style="background-color: {}"></span><span class="legend-label">{}</span><span class="legend-value">{}</span></div>"#,
                color_at(colors, i),
                escape_html(&point.label),
                format_value(point.value)
            )
        })
        .collect::<Vec<String>>()
        .join("")
}
