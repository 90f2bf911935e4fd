//! Projection of an [`AnalysisReport`] into display groups.

use crate::AnalysisReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    ResumeSkills,
    JobSkills,
    MissingSkills,
    Recommendations,
}

impl GroupKind {
    pub fn heading(self) -> &'static str {
        match self {
            GroupKind::ResumeSkills => "Skills Found in Your Resume",
            GroupKind::JobSkills => "Skills Required by the Job",
            GroupKind::MissingSkills => "Missing Skills",
            GroupKind::Recommendations => "Recommended Courses to Bridge the Gap",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultItem {
    Skill(String),
    /// Opens outside the application.
    Link { label: String, url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGroup {
    pub kind: GroupKind,
    pub items: Vec<ResultItem>,
}

impl ResultGroup {
    pub fn heading(&self) -> &'static str {
        self.kind.heading()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportView {
    pub groups: Vec<ResultGroup>,
}

impl ReportView {
    pub fn group(&self, kind: GroupKind) -> Option<&ResultGroup> {
        self.groups.iter().find(|group| group.kind == kind)
    }
}

/// Lists the report in display order.
///
/// Resume and job skills are always present, even when empty. Missing skills
/// and recommendations are left out entirely when there are none.
pub fn render_report(report: &AnalysisReport) -> ReportView {
    let mut groups = vec![
        skill_group(GroupKind::ResumeSkills, &report.resume_skills),
        skill_group(GroupKind::JobSkills, &report.jd_skills),
    ];

    if !report.missing_skills.is_empty() {
        groups.push(skill_group(GroupKind::MissingSkills, &report.missing_skills));
    }

    if !report.recommendations.is_empty() {
        groups.push(ResultGroup {
            kind: GroupKind::Recommendations,
            items: report
                .recommendations
                .iter()
                .map(|rec| ResultItem::Link {
                    label: rec.title.clone(),
                    url: rec.url.clone(),
                })
                .collect(),
        });
    }

    ReportView { groups }
}

fn skill_group(kind: GroupKind, skills: &[String]) -> ResultGroup {
    ResultGroup {
        kind,
        items: skills.iter().cloned().map(ResultItem::Skill).collect(),
    }
}
