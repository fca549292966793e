//! Static SVG chart rendering for aggregate outputs.
//!
//! Each function assembles a standalone SVG document as a string; writing it
//! to disk is the report module's job.

use crate::aggregate::{DayHourMatrix, MonthBucketMatrix};
use crate::model::{DAY_NAMES, TimeBucket};

const WIDTH: u32 = 680;
const HEIGHT: u32 = 360;
const MARGIN_LEFT: u32 = 60;
const MARGIN_RIGHT: u32 = 20;
const MARGIN_TOP: u32 = 40;
const MARGIN_BOTTOM: u32 = 70;

pub(crate) fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn chart_frame(title: &str, x_label: &str, y_label: &str, body: &str) -> String {
    let plot_bottom = HEIGHT - MARGIN_BOTTOM;
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" style="background:white">
  <text x="{}" y="22" text-anchor="middle" font-size="15" font-weight="600" fill="#374151">{}</text>
  <text x="{}" y="{}" text-anchor="middle" font-size="12" fill="#6b7280">{}</text>
  <text x="16" y="{}" text-anchor="middle" font-size="12" fill="#6b7280" transform="rotate(-90, 16, {})">{}</text>
  <line x1="{MARGIN_LEFT}" y1="{plot_bottom}" x2="{}" y2="{plot_bottom}" stroke="#e5e7eb" stroke-width="2"/>
  <line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{plot_bottom}" stroke="#e5e7eb" stroke-width="2"/>
  {body}
</svg>"##,
        WIDTH / 2,
        xml_escape(title),
        WIDTH / 2,
        HEIGHT - 8,
        xml_escape(x_label),
        (HEIGHT + MARGIN_TOP) / 2,
        (HEIGHT + MARGIN_TOP) / 2,
        xml_escape(y_label),
        WIDTH - MARGIN_RIGHT,
    )
}

/// A vertical bar chart over labeled categories.
///
/// Zero-count categories get an x-axis label but no visible bar, so the
/// category domain stays readable even when sparse.
pub fn bar_chart(title: &str, x_label: &str, y_label: &str, data: &[(String, usize)]) -> String {
    let plot_w = (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) as f64;
    let plot_h = (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM) as f64;
    let plot_bottom = (HEIGHT - MARGIN_BOTTOM) as f64;

    let max = data.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);
    let slot_w = if data.is_empty() {
        plot_w
    } else {
        plot_w / data.len() as f64
    };

    let mut body = String::new();
    for (i, (label, count)) in data.iter().enumerate() {
        let x = MARGIN_LEFT as f64 + i as f64 * slot_w;
        let bar_h = (*count as f64 / max as f64) * plot_h;
        let y = plot_bottom - bar_h;

        if *count > 0 {
            body.push_str(&format!(
                r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="#1f77b4" opacity="0.85"/>"##,
                x + slot_w * 0.1,
                y,
                slot_w * 0.8,
                bar_h
            ));
        }

        let cx = x + slot_w / 2.0;
        body.push_str(&format!(
            r##"<text x="{cx:.1}" y="{:.1}" text-anchor="end" font-size="10" fill="#6b7280" transform="rotate(-45, {cx:.1}, {:.1})">{}</text>"##,
            plot_bottom + 14.0,
            plot_bottom + 14.0,
            xml_escape(label)
        ));
    }

    // y-axis reference: max count at the top of the plot
    body.push_str(&format!(
        r##"<text x="{}" y="{}" text-anchor="end" font-size="10" fill="#6b7280">{max}</text>"##,
        MARGIN_LEFT - 6,
        MARGIN_TOP + 4
    ));

    chart_frame(title, x_label, y_label, &body)
}

/// Linear interpolation over a dark-to-light sequential ramp.
fn heat_color(count: usize, max: usize) -> String {
    let t = count as f64 / max as f64;
    let lerp = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        lerp(0.0, 255.0),
        lerp(32.0, 233.0),
        lerp(77.0, 69.0)
    )
}

/// Day-by-hour heatmap with per-cell count annotations.
pub fn day_hour_heatmap(matrix: &DayHourMatrix) -> String {
    let plot_w = (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) as f64;
    let plot_h = (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM) as f64;
    let cell_w = plot_w / 24.0;
    let cell_h = plot_h / 7.0;
    let max = matrix.max_cell();

    let mut body = String::new();
    for (day, row) in matrix.cells.iter().enumerate() {
        let y = MARGIN_TOP as f64 + day as f64 * cell_h;

        body.push_str(&format!(
            r##"<text x="{}" y="{:.1}" text-anchor="end" font-size="10" fill="#6b7280">{}</text>"##,
            MARGIN_LEFT - 6,
            y + cell_h / 2.0 + 3.0,
            DAY_NAMES[day]
        ));

        for (hour, &count) in row.iter().enumerate() {
            let x = MARGIN_LEFT as f64 + hour as f64 * cell_w;
            body.push_str(&format!(
                r##"<rect x="{x:.1}" y="{y:.1}" width="{cell_w:.1}" height="{cell_h:.1}" fill="{}" stroke="white" stroke-width="0.5"/>"##,
                heat_color(count, max)
            ));
            if count > 0 {
                let text_fill = if count * 2 > max { "#1f2937" } else { "#f9fafb" };
                body.push_str(&format!(
                    r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="8" fill="{text_fill}">{count}</text>"##,
                    x + cell_w / 2.0,
                    y + cell_h / 2.0 + 3.0
                ));
            }
        }
    }

    for hour in (0..24).step_by(3) {
        body.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="10" fill="#6b7280">{hour}</text>"##,
            MARGIN_LEFT as f64 + (hour as f64 + 0.5) * cell_w,
            MARGIN_TOP as f64 + plot_h + 14.0
        ));
    }

    chart_frame("Crime Heatmap by Day and Hour", "Hour", "Day", &body)
}

/// Dash pattern and marker shape per bucket series, distinct enough to
/// survive black-and-white printing.
fn series_style(bucket: TimeBucket) -> (&'static str, &'static str) {
    match bucket {
        TimeBucket::Morning => ("8,4", "diamond"),
        TimeBucket::Midday => ("", "circle"),
        TimeBucket::Evening => ("10,4,2,4", "square"),
        TimeBucket::LateNight => ("2,4", "triangle"),
    }
}

fn series_color(bucket: TimeBucket) -> &'static str {
    match bucket {
        TimeBucket::Morning => "#1f77b4",
        TimeBucket::Midday => "#ff7f0e",
        TimeBucket::Evening => "#2ca02c",
        TimeBucket::LateNight => "#d62728",
    }
}

fn marker(shape: &str, x: f64, y: f64, color: &str) -> String {
    match shape {
        "circle" => format!(r##"<circle cx="{x:.1}" cy="{y:.1}" r="3.5" fill="{color}"/>"##),
        "square" => format!(
            r##"<rect x="{:.1}" y="{:.1}" width="7" height="7" fill="{color}"/>"##,
            x - 3.5,
            y - 3.5
        ),
        "diamond" => format!(
            r##"<rect x="{:.1}" y="{:.1}" width="6" height="6" fill="{color}" transform="rotate(45, {x:.1}, {y:.1})"/>"##,
            x - 3.0,
            y - 3.0
        ),
        _ => format!(
            r##"<polygon points="{x:.1},{:.1} {:.1},{:.1} {:.1},{:.1}" fill="{color}"/>"##,
            y - 4.0,
            x - 3.5,
            y + 3.0,
            x + 3.5,
            y + 3.0
        ),
    }
}

/// Multi-series line chart: monthly counts broken down by time bucket.
pub fn month_bucket_lines(matrix: &MonthBucketMatrix) -> String {
    let plot_w = (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) as f64;
    let plot_h = (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM) as f64;
    let plot_bottom = (HEIGHT - MARGIN_BOTTOM) as f64;

    let max = matrix
        .months
        .iter()
        .flat_map(|&m| matrix.buckets.iter().map(move |&b| matrix.count(m, b)))
        .max()
        .unwrap_or(0)
        .max(1);

    let x_for = |i: usize| {
        if matrix.months.len() <= 1 {
            MARGIN_LEFT as f64 + plot_w / 2.0
        } else {
            MARGIN_LEFT as f64 + i as f64 / (matrix.months.len() - 1) as f64 * plot_w
        }
    };
    let y_for = |count: usize| plot_bottom - count as f64 / max as f64 * plot_h;

    let mut body = String::new();

    for &bucket in &matrix.buckets {
        let (dash, shape) = series_style(bucket);
        let color = series_color(bucket);

        let points: Vec<String> = matrix
            .months
            .iter()
            .enumerate()
            .map(|(i, &m)| format!("{:.1},{:.1}", x_for(i), y_for(matrix.count(m, bucket))))
            .collect();

        let dash_attr = if dash.is_empty() {
            String::new()
        } else {
            format!(r#" stroke-dasharray="{dash}""#)
        };

        body.push_str(&format!(
            r##"<polyline points="{}" fill="none" stroke="{color}" stroke-width="2"{dash_attr}/>"##,
            points.join(" ")
        ));

        for (i, &m) in matrix.months.iter().enumerate() {
            body.push_str(&marker(shape, x_for(i), y_for(matrix.count(m, bucket)), color));
        }
    }

    for (i, &m) in matrix.months.iter().enumerate() {
        body.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="10" fill="#6b7280">{m}</text>"##,
            x_for(i),
            plot_bottom + 16.0
        ));
    }

    // legend, one swatch per occurring bucket
    for (i, &bucket) in matrix.buckets.iter().enumerate() {
        let y = MARGIN_TOP as f64 + 12.0 + i as f64 * 16.0;
        let x = (WIDTH - MARGIN_RIGHT) as f64 - 170.0;
        body.push_str(&format!(
            r##"<line x1="{x:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{}" stroke-width="2"/>"##,
            x + 22.0,
            series_color(bucket)
        ));
        body.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" font-size="10" fill="#374151">{}</text>"##,
            x + 28.0,
            y + 3.0,
            xml_escape(bucket.label())
        ));
    }

    body.push_str(&format!(
        r##"<text x="{}" y="{}" text-anchor="end" font-size="10" fill="#6b7280">{max}</text>"##,
        MARGIN_LEFT - 6,
        MARGIN_TOP + 4
    ));

    chart_frame(
        "Monthly Crime Trends by Time Period",
        "Month",
        "Crime Count",
        &body,
    )
}
