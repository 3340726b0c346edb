//! # Content Store
//!
//! Static, read-only portfolio data: profile, projects, skill categories,
//! and education history. Everything here is defined at build time and
//! rendered by the TUI; the project list is additionally serialized into
//! the assistant's system instruction.

mod data;

use serde::Serialize;

/// A featured portfolio project.
///
/// Serialized as JSON into the assistant system instruction, so the model
/// can answer detailed questions about each project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub goal: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub implementation: &'static [&'static str],
    pub results: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
}

/// Icon selector for a skill category.
///
/// A closed enumeration resolved to a glyph and color at render time;
/// the Content Store itself knows nothing about how icons are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Terminal,
    Cpu,
    LayoutGrid,
    Tool,
}

/// A named group of skills shown on the Skills tab.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
    pub icon: Icon,
}

/// Header/hero data shown on the About tab and in the shell chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub availability: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

/// Current degree program shown on the Education tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Education {
    pub program: &'static str,
    pub level: &'static str,
    pub status: &'static str,
    pub focus: &'static str,
    pub coursework: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

/// A certification card shown below the degree program.
#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub fn profile() -> &'static Profile {
    &data::PROFILE
}

pub fn projects() -> &'static [Project] {
    &data::PROJECTS
}

pub fn skill_categories() -> &'static [SkillCategory] {
    &data::SKILL_CATEGORIES
}

pub fn education() -> &'static Education {
    &data::EDUCATION
}

pub fn certifications() -> &'static [Certification] {
    &data::CERTIFICATIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_are_unique() {
        let ids: HashSet<_> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn test_projects_are_fully_populated() {
        assert!(!projects().is_empty());
        for project in projects() {
            assert!(!project.title.is_empty(), "{}: empty title", project.id);
            assert!(!project.tags.is_empty(), "{}: no tags", project.id);
            assert!(!project.tech.is_empty(), "{}: no tech", project.id);
            assert!(
                !project.implementation.is_empty(),
                "{}: no implementation notes",
                project.id
            );
            assert!(!project.results.is_empty(), "{}: empty results", project.id);
        }
    }

    #[test]
    fn test_every_skill_category_has_skills() {
        assert!(!skill_categories().is_empty());
        for category in skill_categories() {
            assert!(!category.skills.is_empty(), "{}: no skills", category.name);
        }
    }

    #[test]
    fn test_projects_serialize_to_json() {
        let json = serde_json::to_string_pretty(projects()).unwrap();
        assert!(json.contains("book-system"));
        assert!(json.contains("smart-home"));
    }
}
