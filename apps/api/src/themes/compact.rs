//! Compact theme: the variation-driven single-page layout.
//!
//! The only theme wired to the variation engine: every render computes a
//! `StyleConfig` (seeded or default) and substitutes it into the CSS. The
//! contact row honors the style's display toggles, so its items are built
//! here rather than in the shared views.

use serde::Serialize;
use tera::Tera;

use crate::errors::AppError;
use crate::models::resume::{Basics, Location, Profile, ResumeSchema};
use crate::themes::{base_context, Theme};
use crate::variations::{compute_style, StyleConfig};

pub struct CompactTheme;

impl Theme for CompactTheme {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn render(&self, tera: &Tera, resume: &ResumeSchema) -> Result<String, AppError> {
        let style = compute_style(resume);

        let mut ctx = base_context(resume);
        ctx.insert("style", &style);
        ctx.insert("contact_items", &contact_items(resume.basics.as_ref(), &style));

        Ok(tera.render("compact.html", &ctx)?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Contact row
// ────────────────────────────────────────────────────────────────────────────

/// A single entry in the header contact row. An empty `href` renders as a
/// plain span; an empty `icon` renders without a glyph.
#[derive(Debug, PartialEq, Serialize)]
pub struct ContactItem {
    pub href: String,
    pub text: String,
    pub icon: String,
}

/// Characters that make a profile URL unreadable inline; such URLs fall back
/// to the bare network name.
const URL_SPECIAL_CHARS: &[char] = &['%', '&', '?', '=', '#', '+', '@'];

fn network_icon(network: &str) -> &'static str {
    match network {
        "linkedin" => "fa-linkedin-square",
        "github" => "fa-github",
        "twitter" => "fa-twitter",
        "facebook" => "fa-facebook",
        "instagram" => "fa-instagram",
        "youtube" => "fa-youtube",
        "stackoverflow" => "fa-stack-overflow",
        "medium" => "fa-medium",
        "dev.to" => "fa-dev",
        "codepen" => "fa-codepen",
        "dribbble" => "fa-dribbble",
        "behance" => "fa-behance",
        _ => "fa-globe",
    }
}

fn contact_items(basics: Option<&Basics>, style: &StyleConfig) -> Vec<ContactItem> {
    let Some(basics) = basics else {
        return Vec::new();
    };

    let mut items = Vec::new();

    if let Some(email) = basics.email.as_deref().filter(|e| !e.is_empty()) {
        items.push(ContactItem {
            href: format!("mailto:{email}"),
            text: email.to_string(),
            icon: String::new(),
        });
    }

    if let Some(phone) = basics.phone.as_deref().filter(|p| !p.is_empty()) {
        items.push(ContactItem {
            href: String::new(),
            text: phone.to_string(),
            icon: String::new(),
        });
    }

    if let Some(profiles) = &basics.profiles {
        items.extend(profiles.iter().filter_map(|p| profile_item(p, style)));
    }

    if let Some(location) = &basics.location {
        let text = location_line(location);
        if !text.is_empty() {
            items.push(ContactItem {
                href: String::new(),
                text,
                icon: String::new(),
            });
        }
    }

    items
}

fn profile_item(profile: &Profile, style: &StyleConfig) -> Option<ContactItem> {
    let url = profile.url.as_deref().filter(|u| !u.is_empty())?;
    let network = profile
        .network
        .as_deref()
        .map(|n| n.to_lowercase())
        .filter(|n| !n.is_empty());
    let has_special_chars = url.contains(URL_SPECIAL_CHARS);

    let text = match &network {
        // Unreadable URL: show the bare network name instead.
        Some(network) if has_special_chars => network.clone(),
        Some(network)
            if style.use_full_urls_and_no_blue_links
                && (network == "linkedin" || network == "github") =>
        {
            url.to_string()
        }
        Some(network) if style.use_network_name => network.clone(),
        _ => profile
            .username
            .clone()
            .filter(|u| !u.is_empty())
            .or_else(|| network.clone())
            .unwrap_or_else(|| url.to_string()),
    };

    Some(ContactItem {
        href: url.to_string(),
        text,
        icon: network_icon(network.as_deref().unwrap_or_default()).to_string(),
    })
}

/// Joins address, region, and city while dropping components already spelled
/// out inside an earlier one.
fn location_line(location: &Location) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(address) = location.address.as_deref().filter(|a| !a.is_empty()) {
        parts.push(address.to_string());
    }

    if let Some(region) = location.region.as_deref().filter(|r| !r.is_empty()) {
        let covered = location
            .address
            .as_deref()
            .map(|a| a.to_lowercase().contains(&region.to_lowercase()))
            .unwrap_or(false);
        if !covered {
            parts.push(region.to_string());
        }
    }

    if let Some(city) = location.city.as_deref().filter(|c| !c.is_empty()) {
        let address_and_region = [location.address.as_deref(), location.region.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if !address_and_region.contains(&city.to_lowercase()) {
            parts.push(city.to_string());
        }
    }

    parts.join(", ")
}
