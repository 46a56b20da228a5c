//! HTML study plan document.
//!
//! Produces a self-contained HTML file with all CSS inlined and print rules
//! that lay it out as A4 pages.

use anyhow::{Context, Result};
use chrono::Datelike;
use std::path::Path;

use studyplan_core::model::Allocation;
use studyplan_core::plan::StudyPlan;
use studyplan_core::predictor::ScoreBand;

/// Static study tips printed on the second page: (title, detail).
pub const STUDY_TIPS: [(&str, &str); 6] = [
    ("Pomodoro Technique", "25 min study + 5 min break = 1 Pomodoro"),
    ("Active Recall", "Test yourself regularly, don't just read"),
    ("Spaced Repetition", "Review material at increasing intervals"),
    ("Sleep Well", "7-8 hours of sleep helps memory consolidation"),
    ("Stay Hydrated", "Water improves cognitive function"),
    ("Take Breaks", "Short walks boost creativity and focus"),
];

const QUOTES: [&str; 5] = [
    "The secret of getting ahead is getting started.",
    "Success is the sum of small efforts, repeated day in and day out.",
    "Your only limit is your mind.",
    "Consistency is more important than perfection.",
    "Small progress is still progress.",
];

/// Shown instead of the score when the predictor could not be trained.
pub const PREDICTION_PLACEHOLDER: &str =
    "Prediction unavailable: the model could not be trained for this session.";

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate the study plan document.
pub fn generate_html(plan: &StudyPlan) -> String {
    let mut html = String::new();
    let title = plan.name.as_deref().unwrap_or("Daily Study Plan");

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>studyplan: {}</title>\n",
        html_escape(title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Page 1: summary, schedule, chart, prediction
    html.push_str("<section class=\"page\">\n");
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(title)));
    html.push_str(&format!(
        "<p class=\"meta\">Generated on {} | Exam on {} | {} day(s) remaining ({})</p>\n",
        plan.created_at.format("%B %d, %Y"),
        plan.exam_date.format("%B %d, %Y"),
        plan.days_remaining,
        plan.urgency()
    ));
    html.push_str("</header>\n");

    html.push_str("<h2>Daily Study Allocation</h2>\n");
    html.push_str("<table class=\"summary\">\n<tbody>\n");
    html.push_str(&format!(
        "<tr><th>Total Daily Hours</th><td>{:.1}h</td><td>Target: achieve the daily goal</td></tr>\n",
        plan.total_daily_hours()
    ));
    html.push_str(&format!(
        "<tr><th>Number of Subjects</th><td>{}</td><td>Focus on weak areas</td></tr>\n",
        plan.subject_count()
    ));
    html.push_str(&format!(
        "<tr><th>Average per Subject</th><td>{:.1}h</td><td>Priority: {}</td></tr>\n",
        plan.average_hours_per_subject(),
        html_escape(&plan.primary_focus.subject)
    ));
    html.push_str(&format!(
        "<tr><th>Total Study Time</th><td>{}h</td><td>{} day(s) at {}h per day</td></tr>\n",
        plan.total_study_hours(),
        plan.days_remaining,
        plan.daily_hours
    ));
    html.push_str("</tbody></table>\n");

    html.push_str("<h2>Detailed Study Schedule</h2>\n");
    html.push_str("<table class=\"schedule\">\n");
    html.push_str("<thead><tr><th>Subject</th><th>Difficulty</th><th>Difficulty Weight</th><th>Daily Allocated Hours</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for a in &plan.allocations {
        let level = a
            .difficulty()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{:.2} hrs</td></tr>\n",
            level.to_lowercase(),
            html_escape(&a.subject),
            level,
            a.weight,
            a.display_hours()
        ));
    }
    html.push_str("</tbody></table>\n");

    if !plan.allocations.is_empty() {
        html.push_str(&generate_bar_chart(&plan.allocations));
    }

    html.push_str("<h2>Smart Suggestions</h2>\n<ul class=\"focus\">\n");
    html.push_str(&format!(
        "<li><strong>Primary focus:</strong> {} ({:.1}h daily). {}</li>\n",
        html_escape(&plan.primary_focus.subject),
        plan.primary_focus.daily_hours,
        html_escape(&plan.primary_focus.advice)
    ));
    html.push_str(&format!(
        "<li><strong>Maintain strength:</strong> {} ({:.1}h daily). {}</li>\n",
        html_escape(&plan.maintain_strength.subject),
        plan.maintain_strength.daily_hours,
        html_escape(&plan.maintain_strength.advice)
    ));
    html.push_str("</ul>\n");

    html.push_str("<h2>Performance Prediction</h2>\n");
    match &plan.prediction {
        Some(p) => {
            html.push_str(&format!(
                "<p class=\"prediction {}\"><span class=\"score\">{:.2}%</span> {}</p>\n",
                band_class(p.band),
                p.display_score(),
                p.band
            ));
            html.push_str(&format!(
                "<p>{}</p>\n",
                html_escape(p.band.recommendation())
            ));
        }
        None => {
            html.push_str(&format!(
                "<p class=\"placeholder\">{PREDICTION_PLACEHOLDER}</p>\n"
            ));
        }
    }
    html.push_str("</section>\n");

    // Page 2: tips and quote
    html.push_str("<section class=\"page\">\n");
    html.push_str("<h2>Smart Study Tips</h2>\n");
    html.push_str("<table class=\"tips\">\n<tbody>\n");
    for (tip, detail) in STUDY_TIPS {
        html.push_str(&format!(
            "<tr><th>{}</th><td>{}</td></tr>\n",
            html_escape(tip),
            html_escape(detail)
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str(&format!(
        "<blockquote>{}</blockquote>\n",
        html_escape(quote_for(plan))
    ));
    html.push_str(&format!(
        "<footer>studyplan v{} | {}</footer>\n",
        env!("CARGO_PKG_VERSION"),
        plan.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    html.push_str("</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write the study plan document to a file.
pub fn write_html_report(plan: &StudyPlan, path: &Path) -> Result<()> {
    let html = generate_html(plan);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

/// Same plan date, same quote.
fn quote_for(plan: &StudyPlan) -> &'static str {
    QUOTES[plan.created_at.ordinal() as usize % QUOTES.len()]
}

fn band_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::AtRisk => "at-risk",
        ScoreBand::OnTrack => "on-track",
        ScoreBand::Excellent => "excellent",
    }
}

fn generate_bar_chart(allocations: &[Allocation]) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 200;

    let max_hours = allocations
        .iter()
        .map(|a| a.hours)
        .fold(0.0f64, f64::max)
        .max(f64::EPSILON);

    let total_height = allocations.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg class=\"chart\" width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 80,
        total_height
    );

    for (i, a) in allocations.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = (a.hours / max_hours * max_width as f64) as usize;

        let color = match a.weight {
            3 => "#ef4444",
            2 => "#eab308",
            _ => "#22c55e",
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(&a.subject)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.1}h</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            a.hours
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a2e; --muted: #6b7280; --border: #e0e7ff; --accent: #667eea; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1 { color: var(--accent); margin-bottom: 0.25rem; }
h2 { margin-top: 2rem; border-bottom: 2px solid var(--border); padding-bottom: 0.25rem; }
.meta { color: var(--muted); }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
.schedule thead th { background: var(--accent); color: #fff; }
.schedule tr.weak td:first-child { border-left: 4px solid #ef4444; }
.schedule tr.medium td:first-child { border-left: 4px solid #eab308; }
.schedule tr.strong td:first-child { border-left: 4px solid #22c55e; }
.prediction .score { font-size: 1.6rem; font-weight: bold; margin-right: 0.5rem; }
.at-risk .score { color: #ef4444; }
.on-track .score { color: #eab308; }
.excellent .score { color: #22c55e; }
.placeholder { color: var(--muted); font-style: italic; }
blockquote { text-align: center; font-style: italic; color: var(--accent); margin: 2rem 0; }
footer { color: var(--muted); font-size: 0.85rem; text-align: center; }
svg { margin: 1rem 0; }
@page { size: A4; margin: 2cm; }
@media print {
  body { padding: 0; }
  .page { page-break-after: always; }
  .page:last-child { page-break-after: auto; }
}
"#;
