//! Theme registry: dispatches a résumé document to one of the registered
//! HTML themes.
//!
//! Templates are compiled once at startup into a single shared `Tera`
//! instance; per-request work is pure context building plus substitution.
//! Everything a template touches is pre-normalized by `view` so the markup
//! never branches on null.

pub mod classic;
pub mod compact;
pub mod engineering;
pub mod view;

use anyhow::Context as _;
use tera::{Context, Tera};

use crate::errors::AppError;
use crate::models::resume::ResumeSchema;

/// A registered theme: turns a résumé document into a complete HTML page.
pub trait Theme: Send + Sync {
    fn name(&self) -> &'static str;
    fn render(&self, tera: &Tera, resume: &ResumeSchema) -> Result<String, AppError>;
}

pub struct ThemeRegistry {
    tera: Tera,
    themes: Vec<Box<dyn Theme>>,
}

impl ThemeRegistry {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("compact.html", include_str!("../../templates/compact.html.tera")),
            ("classic.html", include_str!("../../templates/classic.html.tera")),
            (
                "engineering.html",
                include_str!("../../templates/engineering.html.tera"),
            ),
        ])
        .context("Failed to compile theme templates")?;

        Ok(Self {
            tera,
            themes: vec![
                Box::new(compact::CompactTheme),
                Box::new(classic::ClassicTheme),
                Box::new(engineering::EngineeringTheme),
            ],
        })
    }

    pub fn available(&self) -> Vec<&'static str> {
        self.themes.iter().map(|t| t.name()).collect()
    }

    /// Renders `resume` with the named theme. Unknown names report the
    /// available set so callers can self-correct.
    pub fn render(&self, theme_name: &str, resume: &ResumeSchema) -> Result<String, AppError> {
        let theme = self
            .themes
            .iter()
            .find(|t| t.name() == theme_name)
            .ok_or_else(|| {
                AppError::ThemeNotFound(format!(
                    "Theme '{theme_name}' not found. Available themes: {}",
                    self.available().join(", ")
                ))
            })?;
        theme.render(&self.tera, resume)
    }
}

/// Builds the section context shared by every theme: header fields plus the
/// normalized view of each résumé section.
fn base_context(resume: &ResumeSchema) -> Context {
    let mut ctx = Context::new();

    let basics = resume.basics.as_ref();
    ctx.insert(
        "name",
        &basics.and_then(|b| b.name.clone()).unwrap_or_default(),
    );
    ctx.insert(
        "label",
        &basics.and_then(|b| b.label.clone()).unwrap_or_default(),
    );
    ctx.insert(
        "summary",
        &basics.and_then(|b| b.summary.clone()).unwrap_or_default(),
    );

    ctx.insert(
        "work",
        &view::work_views(resume.work.as_deref().unwrap_or_default()),
    );
    ctx.insert(
        "volunteer",
        &view::volunteer_views(resume.volunteer.as_deref().unwrap_or_default()),
    );
    ctx.insert(
        "education",
        &view::education_views(resume.education.as_deref().unwrap_or_default()),
    );
    ctx.insert(
        "awards",
        &view::award_views(resume.awards.as_deref().unwrap_or_default()),
    );
    ctx.insert(
        "certificates",
        &view::certificate_views(resume.certificates.as_deref().unwrap_or_default()),
    );
    ctx.insert(
        "publications",
        &view::publication_views(resume.publications.as_deref().unwrap_or_default()),
    );
    ctx.insert(
        "skills",
        &view::skill_views(resume.skills.as_deref().unwrap_or_default()),
    );
    ctx.insert(
        "languages",
        &view::language_views(resume.languages.as_deref().unwrap_or_default()),
    );
    ctx.insert(
        "interests",
        &view::interest_views(resume.interests.as_deref().unwrap_or_default()),
    );
    ctx.insert(
        "references",
        &view::reference_views(resume.references.as_deref().unwrap_or_default()),
    );
    ctx.insert(
        "projects",
        &view::project_views(resume.projects.as_deref().unwrap_or_default()),
    );

    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Basics, WorkEntry};

    fn sample_resume() -> ResumeSchema {
        ResumeSchema {
            basics: Some(Basics {
                name: Some("Ada Lovelace".to_string()),
                email: Some("ada@example.com".to_string()),
                summary: Some("First programmer.".to_string()),
                ..Basics::default()
            }),
            work: Some(vec![WorkEntry {
                name: Some("Analytical Engines Ltd".to_string()),
                position: Some("Programmer".to_string()),
                start_date: Some("1842-01".to_string()),
                highlights: Some(vec!["Published the first algorithm".to_string()]),
                ..WorkEntry::default()
            }]),
            ..ResumeSchema::default()
        }
    }

    #[test]
    fn test_registry_registers_three_themes() {
        let registry = ThemeRegistry::new().unwrap();
        assert_eq!(registry.available(), vec!["compact", "classic", "engineering"]);
    }

    #[test]
    fn test_unknown_theme_lists_available() {
        let registry = ThemeRegistry::new().unwrap();
        let err = registry
            .render("elegant", &sample_resume())
            .expect_err("unknown theme must fail");
        let msg = err.to_string();
        assert!(msg.contains("elegant"), "got: {msg}");
        assert!(msg.contains("compact"), "got: {msg}");
    }

    #[test]
    fn test_every_theme_renders_sample_resume() {
        let registry = ThemeRegistry::new().unwrap();
        for theme in registry.available() {
            let html = registry.render(theme, &sample_resume()).unwrap();
            assert!(html.contains("Ada Lovelace"), "{theme} missing name");
            assert!(html.contains("<!DOCTYPE html>"), "{theme} not a document");
            assert!(
                html.contains("Published the first algorithm"),
                "{theme} missing highlight"
            );
        }
    }

    #[test]
    fn test_every_theme_renders_empty_document() {
        let registry = ThemeRegistry::new().unwrap();
        for theme in registry.available() {
            registry
                .render(theme, &ResumeSchema::default())
                .unwrap_or_else(|e| panic!("{theme} failed on empty document: {e}"));
        }
    }

    #[test]
    fn test_compact_render_is_deterministic_with_seed() {
        let registry = ThemeRegistry::new().unwrap();
        let mut resume = sample_resume();
        resume.enable_variations = Some(true);
        resume.variation_seed = Some("test-seed-1".to_string());

        let first = registry.render("compact", &resume).unwrap();
        for _ in 0..9 {
            assert_eq!(registry.render("compact", &resume).unwrap(), first);
        }
    }

    #[test]
    fn test_compact_render_differs_across_seeds() {
        let registry = ThemeRegistry::new().unwrap();
        let mut a = sample_resume();
        a.enable_variations = Some(true);
        a.variation_seed = Some("seed-A".to_string());
        let mut b = sample_resume();
        b.enable_variations = Some(true);
        b.variation_seed = Some("seed-B".to_string());

        assert_ne!(
            registry.render("compact", &a).unwrap(),
            registry.render("compact", &b).unwrap()
        );
    }
}
