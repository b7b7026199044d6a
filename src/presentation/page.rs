// HTML page for each view state
use crate::application::view_controller::LoadState;
use crate::domain::dataset::Dataset;
use crate::domain::error::LoadFailure;
use crate::infrastructure::config::PageSettings;
use crate::presentation::chart_options::ChartOptions;
use crate::presentation::scatter_svg::{escape_xml, render_scatter};

const DESCRIPTION: &str = "Identifying high-impact content formats by plotting Video Length against an \
Engineered Virality Score (Views per Day * Like Ratio). The clusters reveal optimal duration for \
different content types.";

const INSIGHTS: [&str; 4] = [
    "Optimal Length: We can visually identify the sweet spot for each genre. For example, highly viral \
Short-Form Drama (teal/green points) consistently peaks under 8 minutes.",
    "Educational Investment: Educational content (blue points) has a high-virality distribution across \
longer formats (15-30+ minutes), suggesting audiences are willing to invest more time in quality \
educational series.",
    "Recommended Insights: Creators should prioritize creating snappy, short-form pilots for drama/comedy \
(to capture quick attention) and invest in longer, binge-worthy content for educational/documentary genres.",
    "Note: The current Engineered Virality Score is calculated solely using intrinsic metrics (Views, Likes, \
and Time Since Publish). While this effectively measures a video's immediate success based on audience \
reception, it is subject to significant external bias. (Some factors not accounted for include: Creator \
Bias - videos being well-established creators with large, loyal subscriber bases and External Market - \
Aggressive promotion on other platforms (e.g., Tiktok, Instagram, TV commercials). Therefore my current \
insight on \"optimal length\" better reflects the consumption habits of already-primed audiences, rather \
than true organic format effectiveness.",
];

fn layout(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
{head_extra}
</head>
<body>
<div style="padding: 20px; max-width: 1200px; margin: 0 auto; font-family: Arial, sans-serif">
{body}
</div>
</body>
</html>
"##,
        title = escape_xml(title),
    )
}

pub fn render_loading(settings: &PageSettings) -> String {
    let refresh = format!(
        r#"<meta http-equiv="refresh" content="{}">"#,
        settings.refresh_secs
    );
    layout(
        &settings.title,
        &refresh,
        r#"<div style="text-align: center; padding: 50px">Loading Content Genome... 🎬</div>"#,
    )
}

pub fn render_failed(settings: &PageSettings, failure: &LoadFailure) -> String {
    let body = format!(
        r#"<div style="text-align: center; padding: 50px">
<h2 style="color: #E50914">Could not load the dataset</h2>
<p>{}</p>
<p>Check that the dataset has been generated, then restart the service.</p>
</div>"#,
        escape_xml(&failure.to_string())
    );
    layout(&settings.title, "", &body)
}

pub fn render_chart(settings: &PageSettings, dataset: &Dataset, options: &ChartOptions) -> String {
    let insights: String = INSIGHTS
        .iter()
        .map(|item| format!("<li>{}</li>\n", escape_xml(item)))
        .collect();

    let body = format!(
        r##"<h1 style="color: #E50914">📈 {title}</h1>
<p style="font-size: 1.1em; margin-bottom: 30px">{description}</p>
<div style="border: 1px solid #ddd; padding: 15px; border-radius: 8px">
{chart}
</div>
<h3 style="margin-top: 40px; border-bottom: 2px solid #E50914; padding-bottom: 5px">🔑 Data Storytelling: Business Insights</h3>
<ul style="line-height: 1.6">
{insights}</ul>"##,
        title = escape_xml(&settings.title),
        description = escape_xml(DESCRIPTION),
        chart = render_scatter(dataset, options),
    );
    layout(&settings.title, "", &body)
}

/// Pick the view for the current lifecycle state.
pub fn render_page(state: &LoadState, settings: &PageSettings, options: &ChartOptions) -> String {
    match state {
        LoadState::Uninitialized | LoadState::Loading => render_loading(settings),
        LoadState::Loaded { dataset, .. } => render_chart(settings, dataset, options),
        LoadState::Failed(failure) => render_failed(settings, failure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::{Point, Series};
    use crate::presentation::chart_options::LegendPosition;
    use chrono::Utc;
    use std::sync::Arc;

    fn settings() -> PageSettings {
        PageSettings {
            title: "Personal Project: YouTube Content Genome".to_string(),
            refresh_secs: 3,
            legend: LegendPosition::Top,
        }
    }

    #[test]
    fn test_loading_view_refreshes() {
        let html = render_page(&LoadState::Loading, &settings(), &ChartOptions::default());
        assert!(html.contains("Loading Content Genome"));
        assert!(html.contains(r#"<meta http-equiv="refresh" content="3">"#));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_failed_view_shows_error() {
        let failure = LoadFailure::Status {
            location: "http://localhost/youtube_trends.json".to_string(),
            status: 404,
        };
        let html = render_page(&LoadState::Failed(failure), &settings(), &ChartOptions::default());
        assert!(html.contains("Could not load the dataset"));
        assert!(html.contains("HTTP status 404"));
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_loaded_view_embeds_chart() {
        let mut series = Series::new("Gaming".to_string(), None);
        series.points.push(Point::new(12.0, 500.6, "A".to_string()));
        let state = LoadState::Loaded {
            dataset: Arc::new(Dataset::new(vec![series])),
            loaded_at: Utc::now(),
        };

        let html = render_page(&state, &settings(), &ChartOptions::default());
        assert!(html.contains("<svg"));
        assert!(html.contains("Data Storytelling: Business Insights"));
        assert_eq!(html.matches("<li>").count(), INSIGHTS.len());
        assert!(html.contains("Creator Bias - videos being well-established creators"));
        assert!(html.contains("insight on &quot;optimal length&quot; better reflects"));
    }
}
