//! Demonstration data seeded on first run when the store is empty.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::project::{
    Comment, CustomField, Department, ImportantLink, Project, ProjectStatus,
};
use crate::types::Timestamp;

fn ts(s: &str) -> Timestamp {
    DateTime::parse_from_rfc3339(s)
        .expect("seed timestamps are valid RFC 3339")
        .with_timezone(&Utc)
}

/// The fixed demonstration set. Ids are stable (`"1"`..`"3"`) so repeated
/// bootstraps against a non-empty store are a no-op by construction.
pub fn demo_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            title: "Project Hub".into(),
            emoji: "📊".into(),
            description: "Central platform for tracking every team project.".into(),
            department: Department::Present,
            status: ProjectStatus::Active,
            secondary_status: Some("In development".into()),
            goal: Some("One place for project status and cross-team knowledge sharing".into()),
            github_url: Some("https://github.com/example/project-hub".into()),
            requirements: Some("React, TypeScript, Tailwind CSS".into()),
            inventory: vec![
                "MacBook Pro".into(),
                "Design kit".into(),
                "Project management tooling".into(),
            ],
            custom_fields: vec![
                CustomField {
                    id: "cf1".into(),
                    name: "Priority".into(),
                    value: "High".into(),
                },
                CustomField {
                    id: "cf2".into(),
                    name: "Team size".into(),
                    value: "4".into(),
                },
            ],
            important_links: vec![
                ImportantLink {
                    id: "il1".into(),
                    title: "Design mockups".into(),
                    url: "https://figma.com/file/project-hub".into(),
                    description: Some("UI/UX designs for the hub interface".into()),
                },
                ImportantLink {
                    id: "il2".into(),
                    title: "API documentation".into(),
                    url: "https://docs.example.com/api".into(),
                    description: Some("REST API specifications".into()),
                },
            ],
            comments: vec![Comment {
                id: "c1".into(),
                text: "Design phase complete. Moving on to development.".into(),
                user_id: "admin".into(),
                username: "Administrator".into(),
                created_at: ts("2023-05-01T10:30:00Z"),
                reactions: BTreeMap::from([("👍".to_string(), 2), ("🎉".to_string(), 1)]),
            }],
            created_at: ts("2023-04-15T08:00:00Z"),
            updated_at: ts("2023-05-01T10:30:00Z"),
        },
        Project {
            id: "2".into(),
            title: "Marketing website".into(),
            emoji: "🌐".into(),
            description: "Public company site showcasing services and portfolio.".into(),
            department: Department::Present,
            status: ProjectStatus::Income,
            secondary_status: Some("Under review".into()),
            goal: Some("Attract new clients with an engaging online presence".into()),
            github_url: Some("https://github.com/example/website".into()),
            requirements: Some("Next.js, GSAP, Contentful CMS".into()),
            inventory: vec![
                "Design assets".into(),
                "Content plan".into(),
                "SEO strategy".into(),
            ],
            custom_fields: vec![
                CustomField {
                    id: "cf1".into(),
                    name: "Launch date".into(),
                    value: "June 30, 2023".into(),
                },
                CustomField {
                    id: "cf2".into(),
                    name: "Budget".into(),
                    value: "$12,000".into(),
                },
            ],
            important_links: vec![ImportantLink {
                id: "il1".into(),
                title: "Content calendar".into(),
                url: "https://notion.so/example/content-calendar".into(),
                description: Some("Blog publication schedule and content plan".into()),
            }],
            comments: vec![],
            created_at: ts("2023-03-10T09:15:00Z"),
            updated_at: ts("2023-03-10T09:15:00Z"),
        },
        Project {
            id: "3".into(),
            title: "Mobile app".into(),
            emoji: "📱".into(),
            description: "Cross-platform mobile app for clients.".into(),
            department: Department::Future,
            status: ProjectStatus::OnHold,
            secondary_status: Some("Planning".into()),
            goal: Some("Let clients track their projects on the go".into()),
            github_url: None,
            requirements: Some("React Native, Firebase, Redux".into()),
            inventory: vec!["UI/UX designs".into(), "API documentation".into()],
            custom_fields: vec![CustomField {
                id: "cf1".into(),
                name: "Planned start".into(),
                value: "Q3 2023".into(),
            }],
            important_links: vec![ImportantLink {
                id: "il1".into(),
                title: "Market research".into(),
                url: "https://drive.google.com/file/market-research".into(),
                description: Some("Competitor analysis and user interviews".into()),
            }],
            comments: vec![Comment {
                id: "c1".into(),
                text: "We should consider Expo to speed up development.".into(),
                user_id: "user1".into(),
                username: "Project manager".into(),
                created_at: ts("2023-05-02T14:20:00Z"),
                reactions: BTreeMap::new(),
            }],
            created_at: ts("2023-04-28T11:45:00Z"),
            updated_at: ts("2023-05-02T14:20:00Z"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_set_has_unique_ids_and_valid_timestamps() {
        let projects = demo_projects();
        assert_eq!(projects.len(), 3);

        let mut ids: Vec<_> = projects.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);

        for project in &projects {
            assert!(project.updated_at >= project.created_at, "{}", project.id);
        }
    }

    #[test]
    fn seed_set_partitions_into_both_departments() {
        let projects = demo_projects();
        assert!(projects.iter().any(|p| p.department == Department::Present));
        assert!(projects.iter().any(|p| p.department == Department::Future));
    }
}
