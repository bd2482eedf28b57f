//! Classic theme: static centered layout with inline SVG contact icons for
//! email, phone, and LinkedIn. Like `engineering`, it never consults the
//! variation engine.

use tera::Tera;

use crate::errors::AppError;
use crate::models::resume::ResumeSchema;
use crate::themes::{base_context, Theme};

pub struct ClassicTheme;

impl Theme for ClassicTheme {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn render(&self, tera: &Tera, resume: &ResumeSchema) -> Result<String, AppError> {
        let mut ctx = base_context(resume);

        let basics = resume.basics.as_ref();
        ctx.insert(
            "email",
            &basics.and_then(|b| b.email.clone()).unwrap_or_default(),
        );
        ctx.insert(
            "phone",
            &basics.and_then(|b| b.phone.clone()).unwrap_or_default(),
        );
        ctx.insert("linkedin_url", &linkedin_url(resume));

        Ok(tera.render("classic.html", &ctx)?)
    }
}

/// URL of the first LinkedIn profile, empty when none is listed.
fn linkedin_url(resume: &ResumeSchema) -> String {
    resume
        .basics
        .as_ref()
        .and_then(|b| b.profiles.as_ref())
        .and_then(|profiles| {
            profiles.iter().find(|p| {
                p.network
                    .as_deref()
                    .is_some_and(|n| n.eq_ignore_ascii_case("linkedin"))
            })
        })
        .and_then(|p| p.url.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Basics, Profile};

    #[test]
    fn test_linkedin_url_found_case_insensitively() {
        let resume = ResumeSchema {
            basics: Some(Basics {
                profiles: Some(vec![
                    Profile {
                        network: Some("GitHub".to_string()),
                        url: Some("https://github.com/ada".to_string()),
                        ..Profile::default()
                    },
                    Profile {
                        network: Some("LinkedIn".to_string()),
                        url: Some("https://linkedin.com/in/ada".to_string()),
                        ..Profile::default()
                    },
                ]),
                ..Basics::default()
            }),
            ..ResumeSchema::default()
        };
        assert_eq!(linkedin_url(&resume), "https://linkedin.com/in/ada");
    }

    #[test]
    fn test_linkedin_url_empty_without_profiles() {
        assert_eq!(linkedin_url(&ResumeSchema::default()), "");
    }
}
