// Tooltip text for a plotted point
use crate::domain::dataset::Point;
use crate::domain::number::format_number;

pub fn tooltip_title(point: &Point) -> &str {
    &point.title
}

/// Body lines: category, rounded score, length in minutes.
pub fn tooltip_lines(label: &str, point: &Point) -> [String; 3] {
    [
        format!("Type: {}", label),
        format!("Virality: {}", format_number(point.y.round())),
        format!("Length: {} min", format_number(point.x)),
    ]
}

/// Header line followed by the body lines, newline separated.
pub fn tooltip_text(label: &str, point: &Point) -> String {
    let mut text = tooltip_title(point).to_string();
    for line in tooltip_lines(label, point) {
        text.push('\n');
        text.push_str(&line);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> Point {
        Point::new(x, y, "How I beat the game".to_string())
    }

    #[test]
    fn test_virality_is_rounded() {
        let lines = tooltip_lines("Gaming", &point(12.0, 873.4));
        assert_eq!(lines[1], "Virality: 873");

        let lines = tooltip_lines("Gaming", &point(12.0, 873.5));
        assert_eq!(lines[1], "Virality: 874");
    }

    #[test]
    fn test_lines() {
        let p = point(7.5, 120.0);
        assert_eq!(
            tooltip_lines("Vlog/Lifestyle", &p),
            [
                "Type: Vlog/Lifestyle".to_string(),
                "Virality: 120".to_string(),
                "Length: 7.5 min".to_string(),
            ]
        );
        assert_eq!(tooltip_title(&p), "How I beat the game");
    }

    #[test]
    fn test_tooltip_text() {
        assert_eq!(
            tooltip_text("Gaming", &point(12.0, 500.6)),
            "How I beat the game\nType: Gaming\nVirality: 501\nLength: 12 min"
        );
    }

    #[test]
    fn test_non_finite_values() {
        let lines = tooltip_lines("Gaming", &point(f64::NAN, f64::INFINITY));
        assert_eq!(lines[1], "Virality: Infinity");
        assert_eq!(lines[2], "Length: NaN min");
    }

    #[test]
    fn test_extreme_values_use_exponent_form() {
        let lines = tooltip_lines("Gaming", &point(1e-7, 1e21));
        assert_eq!(lines[1], "Virality: 1e+21");
        assert_eq!(lines[2], "Length: 1e-7 min");
    }
}
