//! Engineering theme: static serif layout with a centered header and
//! float-based entry rows. No variation engine involvement: output depends
//! only on document content.

use tera::Tera;

use crate::errors::AppError;
use crate::models::resume::ResumeSchema;
use crate::themes::{base_context, Theme};

pub struct EngineeringTheme;

impl Theme for EngineeringTheme {
    fn name(&self) -> &'static str {
        "engineering"
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
        ctx.insert("location_line", &location_line(resume));

        Ok(tera.render("engineering.html", &ctx)?)
    }
}

/// "City, Region PostalCode"; empty when no city is present.
fn location_line(resume: &ResumeSchema) -> String {
    let Some(location) = resume.basics.as_ref().and_then(|b| b.location.as_ref()) else {
        return String::new();
    };
    let Some(city) = location.city.as_deref().filter(|c| !c.is_empty()) else {
        return String::new();
    };

    let mut line = city.to_string();
    if let Some(region) = location.region.as_deref().filter(|r| !r.is_empty()) {
        line.push_str(&format!(", {region}"));
    }
    if let Some(postal) = location.postal_code.as_deref().filter(|p| !p.is_empty()) {
        line.push_str(&format!(" {postal}"));
    }
    line
}
