//! JSON Resume data model.
//!
//! Every field is optional: the service renders whatever the caller sends
//! and does not validate schema conformance beyond typed deserialization.
//! Two control fields (`enableVariations`, `variationSeed`) are consumed
//! only by the variation engine; everything else is presentation data.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeSchema {
    pub basics: Option<Basics>,
    pub work: Option<Vec<WorkEntry>>,
    pub volunteer: Option<Vec<VolunteerEntry>>,
    pub education: Option<Vec<EducationEntry>>,
    pub awards: Option<Vec<Award>>,
    pub certificates: Option<Vec<Certificate>>,
    pub publications: Option<Vec<Publication>>,
    pub skills: Option<Vec<Skill>>,
    pub languages: Option<Vec<Language>>,
    pub interests: Option<Vec<Interest>>,
    pub references: Option<Vec<Reference>>,
    pub projects: Option<Vec<Project>>,
    pub meta: Option<Value>,
    /// When false or absent, themed renders use the fixed default style.
    pub enable_variations: Option<bool>,
    /// Explicit seed string; takes precedence over content-based seeding.
    pub variation_seed: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Basics {
    pub name: Option<String>,
    pub label: Option<String>,
    pub image: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
    pub location: Option<Location>,
    pub profiles: Option<Vec<Profile>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub network: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkEntry {
    pub name: Option<String>,
    /// Legacy alias for `name` still found in the wild; themes fall back to
    /// it when `name` is absent.
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub summary: Option<String>,
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolunteerEntry {
    pub organization: Option<String>,
    pub position: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub summary: Option<String>,
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub area: Option<String>,
    pub study_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub score: Option<String>,
    /// Non-standard alias for `score`.
    pub gpa: Option<String>,
    pub specialization: Option<String>,
    pub courses: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    pub title: Option<String>,
    pub date: Option<String>,
    pub awarder: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub name: Option<String>,
    /// Alias for `name` used by some producers.
    pub title: Option<String>,
    pub date: Option<String>,
    pub issuer: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Publication {
    pub name: Option<String>,
    pub publisher: Option<String>,
    pub release_date: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: Option<String>,
    pub level: Option<String>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub language: Option<String>,
    pub fluency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Interest {
    pub name: Option<String>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    pub name: Option<String>,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: Option<String>,
    pub description: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub url: Option<String>,
    pub entity: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Stable, total serialization of the document used for content-based
/// seeding. Struct fields serialize in declaration order, so the same
/// logical document always yields the same byte string.
pub fn canonical_json(resume: &ResumeSchema) -> String {
    // The model contains only string-keyed structures; serialization cannot
    // fail for well-typed input.
    serde_json::to_string(resume).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "basics": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "location": { "city": "London", "region": "England" },
                "profiles": [
                    { "network": "GitHub", "username": "ada", "url": "https://github.com/ada" }
                ]
            },
            "work": [{
                "company": "Analytical Engines Ltd",
                "position": "Programmer",
                "startDate": "1842-01",
                "highlights": ["Wrote the first published algorithm"]
            }],
            "education": [{
                "institution": "Home tutoring",
                "studyType": "Mathematics",
                "gpa": "4.0"
            }],
            "enableVariations": true,
            "variationSeed": "test-seed-1"
        })
    }

    #[test]
    fn test_deserializes_camel_case_fields() {
        let resume: ResumeSchema = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(resume.enable_variations, Some(true));
        assert_eq!(resume.variation_seed.as_deref(), Some("test-seed-1"));

        let work = &resume.work.as_ref().unwrap()[0];
        assert_eq!(work.company.as_deref(), Some("Analytical Engines Ltd"));
        assert_eq!(work.start_date.as_deref(), Some("1842-01"));

        let edu = &resume.education.as_ref().unwrap()[0];
        assert_eq!(edu.study_type.as_deref(), Some("Mathematics"));
        assert_eq!(edu.gpa.as_deref(), Some("4.0"));
    }

    #[test]
    fn test_missing_sections_default_to_none() {
        let resume: ResumeSchema = serde_json::from_str("{}").unwrap();
        assert!(resume.basics.is_none());
        assert!(resume.work.is_none());
        assert!(resume.enable_variations.is_none());
        assert!(resume.variation_seed.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let resume: ResumeSchema =
            serde_json::from_str(r#"{"basics":{"name":"Ada"},"x-custom":42}"#).unwrap();
        assert_eq!(resume.basics.unwrap().name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_project_type_keyword_roundtrips() {
        let project: Project =
            serde_json::from_str(r#"{"name":"Engine","type":"application"}"#).unwrap();
        assert_eq!(project.kind.as_deref(), Some("application"));
        let back = serde_json::to_value(&project).unwrap();
        assert_eq!(back["type"], "application");
    }

    #[test]
    fn test_canonical_json_is_stable_across_calls() {
        let resume: ResumeSchema = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(canonical_json(&resume), canonical_json(&resume));
    }

    #[test]
    fn test_canonical_json_equal_for_equal_documents() {
        let a: ResumeSchema = serde_json::from_value(sample_json()).unwrap();
        let b: ResumeSchema = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(canonical_json(&a), canonical_json(&b));
    }

    #[test]
    fn test_canonical_json_differs_when_content_differs() {
        let a: ResumeSchema = serde_json::from_value(sample_json()).unwrap();
        let mut b = a.clone();
        b.basics.as_mut().unwrap().name = Some("Someone Else".to_string());
        assert_ne!(canonical_json(&a), canonical_json(&b));
    }
}
