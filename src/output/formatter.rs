//! Output formatters for recommendation reports

use crate::analysis::{PerCareerAnalysis, StructuredAnalysis};
use crate::config::OutputFormat;
use crate::error::{PathfinderError, Result};
use crate::output::report::*;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting recommendation reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for downstream tooling
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Recomendaciones de carrera</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #5b3cc4;
            padding-bottom: 20px;
        }
        .section h2 {
            color: #5b3cc4;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        table { width: 100%; border-collapse: collapse; }
        th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e9ecef; }
        tr.repeat { color: #adb5bd; }
        .badge {
            display: inline-block;
            padding: 2px 10px;
            border-radius: 12px;
            color: white;
            font-weight: bold;
        }
        .match-high { background: #28a745; }
        .match-medium { background: #17a2b8; }
        .match-low { background: #ffc107; color: #000; }
        .narrative {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #5b3cc4;
            margin: 10px 0;
        }
        .feedback { white-space: pre-line; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Recomendaciones de carrera</h1>
            <p>Generado: {{ generated_at }}</p>
        </div>

        <div class="section">
            <h2>Tu perfil</h2>
            <p><strong>Campo principal:</strong> {{ primary_field }} | <strong>Secundario:</strong> {{ secondary_field }}</p>
            <p><strong>Rasgo principal:</strong> {{ primary_trait }}</p>
            <p class="feedback">{{ feedback }}</p>
        </div>

        <div class="section">
            <h2>Carreras recomendadas</h2>
            <table>
                <tr><th>#</th><th>Carrera</th><th>Institución</th><th>Ciudad</th><th>Campo</th><th>Afinidad</th></tr>
                {% for line in careers %}
                <tr{% if line.is_repeat %} class="repeat"{% endif %}>
                    <td>{{ line.rank }}</td>
                    <td>{{ line.name }}</td>
                    <td>{{ line.institution }}</td>
                    <td>{{ line.city }}</td>
                    <td>{{ line.field_label }}</td>
                    <td><span class="badge {{ line.badge_class }}">{{ line.percentage }}%</span></td>
                </tr>
                {% endfor %}
            </table>
        </div>

        {% if has_narratives %}
        <div class="section">
            <h2>Análisis por carrera</h2>
            {% for narrative in narratives %}
            <div class="narrative">
                <h3>{{ narrative.career }} <small>({{ narrative.institution }})</small></h3>
                <p><strong>Personalidad:</strong> {{ narrative.personality_fit }}</p>
                <p><strong>Inteligencias:</strong> {{ narrative.intelligences_fit }}</p>
                <p><strong>Por qué:</strong> {{ narrative.why_recommended }}</p>
                <ul>
                {% for skill in narrative.skills %}
                    <li>{{ skill }}</li>
                {% endfor %}
                </ul>
            </div>
            {% endfor %}
        </div>
        {% endif %}

        {% if has_structured %}
        <div class="section">
            <h2>Análisis general</h2>
            <p><strong>Personalidad:</strong> {{ personality_summary }}</p>
            <p><strong>Inteligencias:</strong> {{ intelligences_summary }}</p>
            <p><strong>Justificación:</strong> {{ recommendation_rationale }}</p>
            <h3>Oportunidades</h3>
            <ul>
            {% for item in opportunities %}
                <li>{{ item }}</li>
            {% endfor %}
            </ul>
            <h3>Desafíos</h3>
            <ul>
            {% for item in challenges %}
                <li>{{ item }}</li>
            {% endfor %}
            </ul>
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>career-pathfinder v{{ version }}</strong> | Catálogo: {{ catalog_size }} carreras</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    primary_field: String,
    secondary_field: String,
    primary_trait: String,
    feedback: String,
    careers: Vec<HtmlCareer>,
    has_narratives: bool,
    narratives: Vec<HtmlNarrative>,
    has_structured: bool,
    personality_summary: String,
    intelligences_summary: String,
    recommendation_rationale: String,
    opportunities: Vec<String>,
    challenges: Vec<String>,
    version: String,
    catalog_size: usize,
}

#[derive(Debug, Clone)]
struct HtmlCareer {
    rank: usize,
    name: String,
    institution: String,
    city: String,
    field_label: String,
    percentage: u8,
    badge_class: String,
    is_repeat: bool,
}

#[derive(Debug, Clone)]
struct HtmlNarrative {
    career: String,
    institution: String,
    personality_fit: String,
    intelligences_fit: String,
    why_recommended: String,
    skills: Vec<String>,
}

fn format_timestamp(report: &RecommendationReport) -> String {
    report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_match_badge(&self, percentage: u8) -> String {
        let (badge, color) = match percentage {
            80..=100 => ("ALTA", Color::Green),
            60..=79 => ("MEDIA", Color::Yellow),
            _ => ("BAJA", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_list(&self, items: &[String]) -> String {
        items.iter().map(|item| format!("  • {}\n", item)).collect()
    }

    /// One career's narrative, used by the report and the `analyze` command.
    pub fn format_career_analysis(&self, career: &str, analysis: &PerCareerAnalysis) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header(career, 3));
        output.push_str(&format!(
            "{} {}\n",
            self.colorize("Personalidad:", Color::Cyan),
            analysis.personality_fit
        ));
        output.push_str(&format!(
            "{} {}\n",
            self.colorize("Inteligencias:", Color::Cyan),
            analysis.intelligences_fit
        ));
        output.push_str(&format!(
            "{} {}\n",
            self.colorize("Por qué:", Color::Cyan),
            analysis.why_recommended
        ));
        output.push_str(&format!("{}\n", self.colorize("Habilidades a desarrollar:", Color::Cyan)));
        output.push_str(&self.format_list(&analysis.skills_to_focus));
        output
    }

    fn format_structured(&self, analysis: &StructuredAnalysis) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header("Análisis general", 2));
        output.push_str(&format!("{}\n\n", analysis.personality_summary));
        output.push_str(&format!("{}\n\n", analysis.intelligences_summary));
        output.push_str(&format!("{}\n", analysis.recommendation_rationale));
        output.push_str(&self.format_header("Habilidades sugeridas", 3));
        output.push_str(&self.format_list(&analysis.suggested_skills));
        output.push_str(&self.format_header("Oportunidades", 3));
        output.push_str(&self.format_list(&analysis.opportunities));
        output.push_str(&self.format_header("Desafíos", 3));
        output.push_str(&self.format_list(&analysis.challenges));
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("RECOMENDACIONES DE CARRERA", 1));
        output.push_str(&format!("Generado: {}\n", format_timestamp(report)));

        output.push_str(&self.format_header("Tu perfil", 2));
        output.push_str(&format!(
            "Campo principal: {} | Secundario: {} | Rasgo principal: {}\n\n",
            self.colorize(report.profile.primary_field.label(), Color::Cyan),
            report.profile.secondary_field.label(),
            report.profile.primary_trait.label()
        ));
        output.push_str(&format!("{}\n", report.feedback.trim_end()));

        output.push_str(&self.format_header("Carreras recomendadas", 2));
        let lines: Vec<&CareerLine> = if self.detailed {
            report.careers.iter().collect()
        } else {
            report.distinct_careers().collect()
        };
        for line in lines {
            let name = if line.is_repeat {
                self.colorize(&format!("{} (repetida)", line.name), Color::BrightBlack)
            } else {
                self.colorize(&line.name, Color::White)
            };
            output.push_str(&format!(
                "{:>2}. {} {} {}%\n    {} · {} · {} · {}\n",
                line.rank,
                name,
                self.format_match_badge(line.match_percentage),
                line.match_percentage,
                line.institution,
                line.city,
                line.field_label,
                line.duration
            ));
            if self.detailed {
                output.push_str(&format!("    puntuación: {:.3}\n", line.score));
            }
        }

        if !report.narratives.is_empty() {
            output.push_str(&self.format_header("Análisis por carrera", 2));
            let narratives: Vec<&CareerNarrative> = if self.detailed {
                report.narratives.iter().collect()
            } else {
                report.narratives.iter().take(3).collect()
            };
            for narrative in narratives {
                output.push_str(&self.format_career_analysis(&narrative.career, &narrative.analysis));
            }
        }

        if let Some(structured) = &report.structured_analysis {
            if self.detailed {
                output.push_str(&self.format_structured(structured));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Metadatos", 4));
            output.push_str(&format!("Versión: {}\n", report.metadata.version));
            output.push_str(&format!("Catálogo: {} carreras\n", report.metadata.catalog_size));
            if let Some(scores) = &report.metadata.scores_file {
                output.push_str(&format!("Perfil: {}\n", scores));
            }
            if let Some(analysis) = &report.metadata.analysis_file {
                output.push_str(&format!("Análisis: {}\n", analysis));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &RecommendationReport) -> HtmlTemplate {
        let careers = report
            .careers
            .iter()
            .map(|line| HtmlCareer {
                rank: line.rank,
                name: line.name.clone(),
                institution: line.institution.clone(),
                city: line.city.clone(),
                field_label: line.field_label.clone(),
                percentage: line.match_percentage,
                badge_class: match line.match_percentage {
                    80..=100 => "match-high",
                    60..=79 => "match-medium",
                    _ => "match-low",
                }
                .to_string(),
                is_repeat: line.is_repeat,
            })
            .collect();

        let narratives: Vec<HtmlNarrative> = report
            .narratives
            .iter()
            .map(|n| HtmlNarrative {
                career: n.career.clone(),
                institution: n.institution.clone(),
                personality_fit: n.analysis.personality_fit.clone(),
                intelligences_fit: n.analysis.intelligences_fit.clone(),
                why_recommended: n.analysis.why_recommended.clone(),
                skills: n.analysis.skills_to_focus.clone(),
            })
            .collect();

        let structured = report.structured_analysis.clone();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: format_timestamp(report),
            primary_field: report.profile.primary_field.label().to_string(),
            secondary_field: report.profile.secondary_field.label().to_string(),
            primary_trait: report.profile.primary_trait.label().to_string(),
            feedback: report.feedback.clone(),
            careers,
            has_narratives: !narratives.is_empty(),
            narratives,
            has_structured: structured.is_some(),
            personality_summary: structured
                .as_ref()
                .map(|s| s.personality_summary.clone())
                .unwrap_or_default(),
            intelligences_summary: structured
                .as_ref()
                .map(|s| s.intelligences_summary.clone())
                .unwrap_or_default(),
            recommendation_rationale: structured
                .as_ref()
                .map(|s| s.recommendation_rationale.clone())
                .unwrap_or_default(),
            opportunities: structured.as_ref().map(|s| s.opportunities.clone()).unwrap_or_default(),
            challenges: structured.map(|s| s.challenges).unwrap_or_default(),
            version: report.metadata.version.clone(),
            catalog_size: report.metadata.catalog_size,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| PathfinderError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_match_badge(percentage: u8) -> &'static str {
        match percentage {
            80..=100 => "🟢",
            60..=79 => "🟡",
            _ => "🔴",
        }
    }

    fn markdown_list(items: &[String]) -> String {
        items.iter().map(|item| format!("- {}\n", item)).collect()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Recomendaciones de carrera\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generado:** {} | **Versión:** {}\n\n",
                format_timestamp(report),
                report.metadata.version
            ));
        }

        output.push_str("## Tu perfil\n\n");
        output.push_str(&format!(
            "**Campo principal:** {} | **Secundario:** {} | **Rasgo principal:** {}\n\n",
            report.profile.primary_field.label(),
            report.profile.secondary_field.label(),
            report.profile.primary_trait.label()
        ));
        output.push_str(&format!("{}\n\n", report.feedback.trim_end()));

        output.push_str("## Carreras recomendadas\n\n");
        output.push_str("| # | Carrera | Institución | Ciudad | Campo | Afinidad |\n");
        output.push_str("|---|---------|-------------|--------|-------|----------|\n");
        for line in report.distinct_careers() {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} {}% |\n",
                line.rank,
                line.name,
                line.institution,
                line.city,
                line.field_label,
                Self::markdown_match_badge(line.match_percentage),
                line.match_percentage
            ));
        }
        output.push('\n');

        if !report.narratives.is_empty() {
            output.push_str("## Análisis por carrera\n\n");
            for narrative in &report.narratives {
                output.push_str(&format!("### {} ({})\n\n", narrative.career, narrative.institution));
                output.push_str(&format!("**Personalidad:** {}\n\n", narrative.analysis.personality_fit));
                output.push_str(&format!("**Inteligencias:** {}\n\n", narrative.analysis.intelligences_fit));
                output.push_str(&format!("**Por qué:** {}\n\n", narrative.analysis.why_recommended));
                output.push_str("**Habilidades a desarrollar:**\n\n");
                output.push_str(&Self::markdown_list(&narrative.analysis.skills_to_focus));
                output.push('\n');
            }
        }

        if let Some(structured) = &report.structured_analysis {
            output.push_str("## Análisis general\n\n");
            output.push_str(&format!("{}\n\n", structured.personality_summary));
            output.push_str(&format!("{}\n\n", structured.intelligences_summary));
            output.push_str(&format!("{}\n\n", structured.recommendation_rationale));
            output.push_str("**Oportunidades:**\n\n");
            output.push_str(&Self::markdown_list(&structured.opportunities));
            output.push_str("\n**Desafíos:**\n\n");
            output.push_str(&Self::markdown_list(&structured.challenges));
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*career-pathfinder v{} | Catálogo: {} carreras*\n",
                report.metadata.version, report.metadata.catalog_size
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &RecommendationReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }

    pub fn console(&self) -> &ConsoleFormatter {
        &self.console_formatter
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, profile_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(profile_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_carreras{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_carreras{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_carreras{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_carreras{}.html", base_name, timestamp_suffix),
    }
}
