use std::collections::BTreeMap;

use log::error;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::Result;

const PROJECTS_JSON: &str = include_str!("../../content/projects.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub category: String,
    pub title: String,
    pub details: Vec<Detail>,
    pub description: String,
}

impl Project {
    /// Description paragraphs, one per line of the source text.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.description
            .lines()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

pub type ProjectTable = BTreeMap<String, Project>;

pub fn parse_table(json: &str) -> Result<ProjectTable> {
    Ok(serde_json::from_str(json)?)
}

static PROJECTS: Lazy<ProjectTable> = Lazy::new(|| {
    parse_table(PROJECTS_JSON).unwrap_or_else(|err| {
        error!("Project table unavailable: {}", err);
        ProjectTable::new()
    })
});

pub fn lookup(id: &str) -> Option<&'static Project> {
    PROJECTS.get(id)
}

pub fn ids() -> impl Iterator<Item = &'static str> {
    PROJECTS.keys().map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_parses() {
        let table = parse_table(PROJECTS_JSON).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(ids().collect::<Vec<_>>(), vec!["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn ullagaram_has_five_detail_rows() {
        let project = lookup("p1").unwrap();
        assert_eq!(project.title, "Ullagaram Duplex House");
        assert_eq!(project.category, "Facade Treatment · Residential");
        assert_eq!(project.details.len(), 5);
        assert_eq!(
            project.details[1],
            Detail {
                label: "Location".to_string(),
                value: "Ullagaram, Chennai".to_string(),
            }
        );
    }

    #[test]
    fn every_project_is_complete() {
        for id in ids() {
            let project = lookup(id).unwrap();
            assert!(!project.title.is_empty(), "{} has no title", id);
            assert_eq!(project.details.len(), 5, "{} detail rows", id);
            assert!(!project.paragraphs().is_empty(), "{} has no description", id);
        }
    }

    #[test]
    fn unknown_ids_are_absent() {
        assert!(lookup("p9").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn descriptions_split_into_trimmed_paragraphs() {
        let paragraphs = lookup("p3").unwrap().paragraphs();
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[0].starts_with("For Glo Clinic"));
        assert!(paragraphs[1].starts_with("The Janata Seva"));

        let single = lookup("p4").unwrap().paragraphs();
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(parse_table(r#"{"p1": {"title": "missing fields"}}"#).is_err());
    }
}
