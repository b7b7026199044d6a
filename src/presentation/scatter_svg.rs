// SVG scatter chart renderer
use crate::domain::dataset::{Dataset, Rgba};
use crate::domain::palette::FALLBACK_COLOR;
use crate::presentation::chart_options::{ChartOptions, LegendPosition};
use crate::presentation::tooltip::tooltip_text;
use std::fmt::Write;

const TARGET_TICKS: f64 = 6.0;
const LEGEND_HEIGHT: f64 = 36.0;
const LEGEND_SWATCH: f64 = 12.0;
const LEGEND_GAP: f64 = 24.0;
// Rough glyph advance for the 12px legend font
const CHAR_WIDTH: f64 = 7.0;

/// Escape text for use in SVG/HTML content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisRange {
    min: f64,
    max: f64,
    step: f64,
}

impl AxisRange {
    fn new(lo: f64, hi: f64, begin_at_zero: bool) -> Self {
        let (mut lo, mut hi) = if begin_at_zero {
            (lo.min(0.0), hi.max(0.0))
        } else {
            (lo, hi)
        };
        if hi - lo <= 0.0 {
            hi = lo + 1.0;
        }
        let step = nice_step((hi - lo) / TARGET_TICKS);
        lo = (lo / step).floor() * step;
        hi = (hi / step).ceil() * step;
        Self { min: lo, max: hi, step }
    }

    fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count).map(|i| self.min + i as f64 * self.step).collect()
    }

    fn tick_label(&self, value: f64) -> String {
        let decimals = (-self.step.log10().floor()).max(0.0) as usize;
        format!("{:.*}", decimals, value)
    }

    fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

/// Round a raw step up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn series_color(color: Option<Rgba>) -> Rgba {
    color.unwrap_or(FALLBACK_COLOR)
}

/// Render the dataset as a standalone SVG document.
///
/// Every finite point becomes a `<circle>` carrying a `<title>` tooltip.
/// Points with a NaN or infinite coordinate are left out of the drawing.
pub fn render_scatter(dataset: &Dataset, options: &ChartOptions) -> String {
    let width = options.width;
    let height = options.height;
    let margin_left = 80.0;
    let margin_right = 30.0;
    let (margin_top, margin_bottom) = match options.legend_position {
        LegendPosition::Top => (20.0 + LEGEND_HEIGHT, 60.0),
        LegendPosition::Bottom => (20.0, 60.0 + LEGEND_HEIGHT),
    };
    let plot_w = width - margin_left - margin_right;
    let plot_h = height - margin_top - margin_bottom;

    let (x_lo, y_lo) = dataset.min_extent().unwrap_or((0.0, 0.0));
    let (x_hi, y_hi) = dataset.max_extent().unwrap_or((0.0, 0.0));
    let x_range = AxisRange::new(x_lo, x_hi, options.x_axis.begin_at_zero);
    let y_range = AxisRange::new(y_lo, y_hi, options.y_axis.begin_at_zero);

    let x_of = |x: f64| margin_left + x_range.fraction(x) * plot_w;
    let y_of = |y: f64| margin_top + plot_h - y_range.fraction(y) * plot_h;

    let mut svg = String::with_capacity(4096 + dataset.point_count() * 160);

    let _ = write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="100%" font-family="Arial, sans-serif" font-size="12">"##
    );
    let _ = write!(
        svg,
        r##"<rect x="{margin_left}" y="{margin_top}" width="{plot_w}" height="{plot_h}" fill="#ffffff" stroke="#e5e5e5"/>"##
    );

    // Grid and tick labels
    for tick in x_range.ticks() {
        let x = x_of(tick);
        let _ = write!(
            svg,
            r##"<line x1="{x:.1}" y1="{margin_top}" x2="{x:.1}" y2="{:.1}" stroke="#e5e5e5" stroke-width="1"/>"##,
            margin_top + plot_h
        );
        let _ = write!(
            svg,
            r##"<text x="{x:.1}" y="{:.1}" fill="#666" text-anchor="middle">{}</text>"##,
            margin_top + plot_h + 18.0,
            x_range.tick_label(tick)
        );
    }
    for tick in y_range.ticks() {
        let y = y_of(tick);
        let _ = write!(
            svg,
            r##"<line x1="{margin_left}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#e5e5e5" stroke-width="1"/>"##,
            margin_left + plot_w
        );
        let _ = write!(
            svg,
            r##"<text x="{:.1}" y="{:.1}" fill="#666" text-anchor="end">{}</text>"##,
            margin_left - 8.0,
            y + 4.0,
            y_range.tick_label(tick)
        );
    }

    // Axis titles
    let _ = write!(
        svg,
        r##"<text x="{:.1}" y="{:.1}" fill="#333" text-anchor="middle" font-size="13">{}</text>"##,
        margin_left + plot_w / 2.0,
        margin_top + plot_h + 42.0,
        escape_xml(&options.x_axis.title)
    );
    let (ty_x, ty_y) = (22.0, margin_top + plot_h / 2.0);
    let _ = write!(
        svg,
        r##"<text x="{ty_x}" y="{ty_y:.1}" fill="#333" text-anchor="middle" font-size="13" transform="rotate(-90,{ty_x},{ty_y:.1})">{}</text>"##,
        escape_xml(&options.y_axis.title)
    );

    // Markers, one group per series
    for series in &dataset.series {
        let color = series_color(series.color);
        let _ = write!(
            svg,
            r##"<g class="series" data-label="{}" fill="{}" stroke="{}">"##,
            escape_xml(&series.label),
            color,
            color.to_css_rgb()
        );
        for point in series.points.iter().filter(|p| p.is_finite()) {
            let _ = write!(
                svg,
                r##"<circle cx="{:.1}" cy="{:.1}" r="{}"><title>{}</title></circle>"##,
                x_of(point.x),
                y_of(point.y),
                options.point_radius,
                escape_xml(&tooltip_text(&series.label, point))
            );
        }
        svg.push_str("</g>");
    }

    render_legend(&mut svg, dataset, options, margin_top + plot_h);

    svg.push_str("</svg>");
    svg
}

fn render_legend(svg: &mut String, dataset: &Dataset, options: &ChartOptions, plot_bottom: f64) {
    if dataset.series.is_empty() {
        return;
    }

    let item_width = |label: &str| LEGEND_SWATCH + 6.0 + label.chars().count() as f64 * CHAR_WIDTH;
    let total: f64 = dataset
        .series
        .iter()
        .map(|s| item_width(&s.label))
        .sum::<f64>()
        + LEGEND_GAP * (dataset.series.len() - 1) as f64;

    let baseline = match options.legend_position {
        LegendPosition::Top => 24.0,
        LegendPosition::Bottom => plot_bottom + 60.0 + LEGEND_HEIGHT / 2.0,
    };

    let mut x = ((options.width - total) / 2.0).max(0.0);
    svg.push_str(r#"<g class="legend">"#);
    for series in &dataset.series {
        let color = series_color(series.color);
        let _ = write!(
            svg,
            r##"<rect x="{x:.1}" y="{:.1}" width="{LEGEND_SWATCH}" height="{LEGEND_SWATCH}" fill="{}" stroke="{}"/>"##,
            baseline - LEGEND_SWATCH + 2.0,
            color,
            color.to_css_rgb()
        );
        let _ = write!(
            svg,
            r##"<text x="{:.1}" y="{baseline:.1}" fill="#333">{}</text>"##,
            x + LEGEND_SWATCH + 6.0,
            escape_xml(&series.label)
        );
        x += item_width(&series.label) + LEGEND_GAP;
    }
    svg.push_str("</g>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::transformer::build_dataset;
    use crate::domain::palette::Palette;
    use crate::domain::record::VideoRecord;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"Tom & Jerry <"live"> 'now'"#),
            "Tom &amp; Jerry &lt;&quot;live&quot;&gt; &#39;now&#39;"
        );
    }

    #[test]
    fn test_axis_range_begins_at_zero() {
        let range = AxisRange::new(12.0, 31.5, true);
        assert_eq!(range.min, 0.0);
        assert!(range.max >= 31.5);
        assert_eq!(range.step, 10.0);
        assert_eq!(range.ticks(), vec![0.0, 10.0, 20.0, 30.0, 40.0]);
        assert_eq!(range.tick_label(20.0), "20");
    }

    #[test]
    fn test_axis_range_degenerate_span() {
        let range = AxisRange::new(0.0, 0.0, true);
        assert!(range.max > range.min);
        assert_eq!(range.tick_label(0.2), "0.2");
    }

    #[test]
    fn test_one_circle_per_finite_point() {
        let records = vec![
            VideoRecord::new("Gaming", 12.0, 500.6, "A"),
            VideoRecord::new("Gaming", 20.0, 300.1, "B"),
            VideoRecord::new("Educational", f64::NAN, 10.0, "broken"),
            VideoRecord::new("Educational", 30.0, 640.0, "C"),
        ];
        let svg = render_scatter(&build_dataset(&records, &Palette::default()), &ChartOptions::default());

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("<title>A\nType: Gaming\nVirality: 501\nLength: 12 min</title>"));
        assert!(!svg.contains("broken"));
        assert!(svg.contains("Video Length (Minutes)"));
        assert!(svg.contains("Engineered Virality Score (Engagement-Adjusted)"));
    }

    #[test]
    fn test_titles_are_escaped_and_unknown_category_uses_fallback() {
        let records = vec![VideoRecord::new("Music", 3.0, 42.0, "Rock & <Roll>")];
        let svg = render_scatter(&build_dataset(&records, &Palette::default()), &ChartOptions::default());

        assert!(svg.contains("Rock &amp; &lt;Roll&gt;"));
        assert!(!svg.contains("<Roll>"));
        assert!(svg.contains(&FALLBACK_COLOR.to_string()));
    }

    #[test]
    fn test_legend_lists_series_in_order() {
        let records = vec![
            VideoRecord::new("Short-Form Drama", 5.0, 900.0, "S"),
            VideoRecord::new("Gaming", 12.0, 500.0, "G"),
        ];
        let svg = render_scatter(&build_dataset(&records, &Palette::default()), &ChartOptions::default());

        let legend = &svg[svg.find(r#"<g class="legend">"#).unwrap()..];
        let drama = legend.find("Short-Form Drama").unwrap();
        let gaming = legend.find("Gaming").unwrap();
        assert!(drama < gaming);
    }

    #[test]
    fn test_bottom_legend_sits_below_plot() {
        let records = vec![VideoRecord::new("Gaming", 12.0, 500.0, "G")];
        let dataset = build_dataset(&records, &Palette::default());
        let options = ChartOptions {
            legend_position: LegendPosition::Bottom,
            ..ChartOptions::default()
        };
        let svg = render_scatter(&dataset, &options);

        let legend = &svg[svg.find(r#"<g class="legend">"#).unwrap()..];
        let expected = format!(r#"y="{:.1}""#, options.height - LEGEND_HEIGHT / 2.0);
        assert!(legend.contains(&expected));
    }

    #[test]
    fn test_empty_dataset_renders_axes_only() {
        let svg = render_scatter(&Dataset::default(), &ChartOptions::default());
        assert_eq!(svg.matches("<circle").count(), 0);
        assert!(!svg.contains(r#"class="legend""#));
    }
}
