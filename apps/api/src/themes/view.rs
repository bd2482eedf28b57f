//! Shared view models for theme templates.
//!
//! Templates never see `Option`: every view field is a plain `String` (empty
//! when absent) or a `Vec` (empty when absent), so Tera conditionals stay
//! simple truthiness checks. Date strings are pre-formatted here with chrono.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::resume::{
    Award, Certificate, EducationEntry, Interest, Language, Project, Publication, Reference,
    Skill, VolunteerEntry, WorkEntry,
};

// ────────────────────────────────────────────────────────────────────────────
// Date formatting
// ────────────────────────────────────────────────────────────────────────────

/// Formats a résumé date ("2020", "2020-03", "2020-03-15") as "Mar 2020".
/// Partial dates resolve to the first day of the period; unparseable input is
/// passed through untouched.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let candidates = [raw.to_string(), format!("{raw}-01"), format!("{raw}-01-01")];
    for candidate in &candidates {
        if let Ok(date) = NaiveDate::parse_from_str(candidate, "%Y-%m-%d") {
            return date.format("%b %Y").to_string();
        }
    }
    raw.to_string()
}

/// Formats a start/end pair as "Mar 2020 - Jun 2022". An open end date
/// renders as "Present" when `use_present` is set, otherwise as a bare start.
pub fn format_date_range(
    start: Option<&str>,
    end: Option<&str>,
    use_present: bool,
) -> String {
    match (start, end) {
        (None, None) => String::new(),
        (None, Some(end)) => format_date(end),
        (Some(start), end) => {
            let end_text = match end {
                Some(end) => format_date(end),
                None if use_present => "Present".to_string(),
                None => String::new(),
            };
            format!("{} - {}", format_date(start), end_text)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section views
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct WorkView {
    pub name: String,
    pub position: String,
    pub location: String,
    pub summary: String,
    pub date_range: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct VolunteerView {
    pub organization: String,
    pub position: String,
    pub date_range: String,
    pub summary: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EducationView {
    pub institution: String,
    pub location: String,
    pub study_type: String,
    pub area: String,
    pub score: String,
    pub specialization: String,
    pub date_range: String,
    pub courses: Vec<String>,
}

/// Shared shape for awards, certificates, and publications.
#[derive(Debug, Serialize)]
pub struct ItemView {
    pub title: String,
    pub org: String,
    pub date: String,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub name: String,
    pub entity: String,
    pub kind: String,
    pub description: String,
    pub date_range: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillView {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LanguageView {
    pub language: String,
    pub fluency: String,
}

#[derive(Debug, Serialize)]
pub struct InterestView {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReferenceView {
    pub name: String,
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────────────────────────────────

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn list(value: &Option<Vec<String>>) -> Vec<String> {
    value.clone().unwrap_or_default()
}

pub fn work_views(work: &[WorkEntry]) -> Vec<WorkView> {
    work.iter()
        .map(|job| WorkView {
            // `company` is the legacy spelling of `name`.
            name: job.name.clone().or_else(|| job.company.clone()).unwrap_or_default(),
            position: text(&job.position),
            location: text(&job.location),
            summary: text(&job.summary),
            date_range: format_date_range(
                job.start_date.as_deref(),
                job.end_date.as_deref(),
                true,
            ),
            highlights: list(&job.highlights),
        })
        .collect()
}

pub fn volunteer_views(volunteer: &[VolunteerEntry]) -> Vec<VolunteerView> {
    volunteer
        .iter()
        .map(|vol| VolunteerView {
            organization: text(&vol.organization),
            position: text(&vol.position),
            date_range: format_date_range(
                vol.start_date.as_deref(),
                vol.end_date.as_deref(),
                true,
            ),
            summary: text(&vol.summary),
            highlights: list(&vol.highlights),
        })
        .collect()
}

/// Normalizes the score line: a bare number gets a " GPA" suffix; values
/// already carrying "GPA" or a percent sign pass through.
pub fn normalize_score(entry: &EducationEntry) -> String {
    let raw = entry.score.clone().or_else(|| entry.gpa.clone());
    match raw {
        Some(score) if !score.is_empty() => {
            if score.to_uppercase().contains("GPA") || score.contains('%') {
                score
            } else {
                format!("{score} GPA")
            }
        }
        _ => String::new(),
    }
}

pub fn education_views(education: &[EducationEntry]) -> Vec<EducationView> {
    education
        .iter()
        .map(|edu| EducationView {
            institution: text(&edu.institution),
            location: text(&edu.location),
            study_type: text(&edu.study_type),
            area: text(&edu.area),
            score: normalize_score(edu),
            specialization: text(&edu.specialization),
            date_range: format_date_range(
                edu.start_date.as_deref(),
                edu.end_date.as_deref(),
                true,
            ),
            courses: list(&edu.courses),
        })
        .collect()
}

pub fn award_views(awards: &[Award]) -> Vec<ItemView> {
    awards
        .iter()
        .map(|award| ItemView {
            title: text(&award.title),
            org: text(&award.awarder),
            date: award.date.as_deref().map(format_date).unwrap_or_default(),
            summary: text(&award.summary),
        })
        .collect()
}

pub fn certificate_views(certificates: &[Certificate]) -> Vec<ItemView> {
    certificates
        .iter()
        .map(|cert| ItemView {
            // Some producers write `title` instead of `name`.
            title: cert.name.clone().or_else(|| cert.title.clone()).unwrap_or_default(),
            org: text(&cert.issuer),
            date: cert.date.as_deref().map(format_date).unwrap_or_default(),
            summary: text(&cert.summary),
        })
        .collect()
}

pub fn publication_views(publications: &[Publication]) -> Vec<ItemView> {
    publications
        .iter()
        .map(|publication| ItemView {
            title: text(&publication.name),
            org: text(&publication.publisher),
            date: publication
                .release_date
                .as_deref()
                .map(format_date)
                .unwrap_or_default(),
            summary: text(&publication.summary),
        })
        .collect()
}

pub fn project_views(projects: &[Project]) -> Vec<ProjectView> {
    projects
        .iter()
        .map(|project| ProjectView {
            name: text(&project.name),
            entity: text(&project.entity),
            kind: text(&project.kind),
            description: text(&project.description),
            date_range: format_date_range(
                project.start_date.as_deref(),
                project.end_date.as_deref(),
                false,
            ),
            highlights: list(&project.highlights),
        })
        .collect()
}

pub fn skill_views(skills: &[Skill]) -> Vec<SkillView> {
    skills
        .iter()
        .map(|skill| SkillView {
            name: text(&skill.name),
            keywords: list(&skill.keywords),
        })
        .collect()
}

pub fn language_views(languages: &[Language]) -> Vec<LanguageView> {
    languages
        .iter()
        .map(|lang| LanguageView {
            language: text(&lang.language),
            fluency: text(&lang.fluency),
        })
        .collect()
}

pub fn interest_views(interests: &[Interest]) -> Vec<InterestView> {
    interests
        .iter()
        .map(|interest| InterestView {
            name: text(&interest.name),
            keywords: list(&interest.keywords),
        })
        .collect()
}

pub fn reference_views(references: &[Reference]) -> Vec<ReferenceView> {
    references
        .iter()
        .map(|reference| ReferenceView {
            name: text(&reference.name),
            text: text(&reference.reference),
        })
        .collect()
}
