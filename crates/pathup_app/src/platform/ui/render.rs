use pathup_core::{AppViewModel, ReportView, ResultItem, RESUME_ACCEPT_HINT};

use super::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print links as `title <url>` instead of OSC 8 hyperlinks.
    pub plain_links: bool,
    /// Include the resume, job-description and submit lines.
    pub show_form: bool,
}

pub fn banner() -> Vec<String> {
    vec![TITLE.to_string(), TAGLINE.to_string(), String::new()]
}

pub fn render(view: &AppViewModel, options: RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();

    if options.show_form {
        let resume = match &view.resume_name {
            Some(name) => name.clone(),
            None => format!("(none selected; accepts {RESUME_ACCEPT_HINT})"),
        };
        lines.push(format!("{RESUME_LABEL}: {resume}"));
        if view.job_description_chars == 0 {
            lines.push(format!("Job description: {JD_PLACEHOLDER}"));
        } else {
            lines.push(format!(
                "Job description: {} characters",
                view.job_description_chars
            ));
        }
        let suffix = if view.submit_enabled { "" } else { " (disabled)" };
        lines.push(format!("[ {} ]{}", view.submit_label, suffix));
        lines.push(String::new());
    }

    if let Some(error) = &view.error {
        lines.push(format!("Error: {error}"));
    }

    if view.in_flight {
        lines.push(LOADING_TEXT.to_string());
    }

    if let Some(report) = &view.report {
        lines.extend(render_groups(report, options));
    }

    lines
}

fn render_groups(report: &ReportView, options: RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();
    for group in &report.groups {
        lines.push(format!("== {} ==", group.heading()));
        for item in &group.items {
            let text = match item {
                ResultItem::Skill(skill) => skill.clone(),
                ResultItem::Link { label, url } => link(label, url, options.plain_links),
            };
            lines.push(format!("  - {text}"));
        }
        lines.push(String::new());
    }
    lines
}

fn link(label: &str, url: &str, plain: bool) -> String {
    if plain {
        format!("{label} <{url}>")
    } else {
        format!("\x1b]8;;{url}\x1b\\{label}\x1b]8;;\x1b\\")
    }
}
