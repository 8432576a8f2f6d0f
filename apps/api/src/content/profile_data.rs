//! Compiled-in profile content.
//!
//! The projects and timeline pages each carry their own copy of overlapping
//! work. They are maintained independently and may differ in detail.

use crate::content::assembler::{EntryRecords, PageHeader, PageRecords, ProfileRecords};
use crate::content::catalog::{ContentSnapshot, ContentSource};
use crate::errors::ContentError;
use crate::models::records::{
    ContactLink, Education, Experience, ImpactMetric, Profile, Project, Skill, TimelineEntry,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProfile;

impl ContentSource for StaticProfile {
    fn load(&self) -> Result<ContentSnapshot, ContentError> {
        Ok(ContentSnapshot {
            profile: PageRecords::Profile(profile_page()?),
            projects: PageRecords::Entries(projects_page()?),
            timeline: PageRecords::Entries(timeline_page()?),
        })
    }
}

/// Skills are declared as `(name, category)` literals; category names are
/// checked against the closed set.
fn skills(list: &[(&str, &str)]) -> Result<Vec<Skill>, ContentError> {
    list.iter()
        .map(|(name, category)| Skill::parse(*name, category))
        .collect()
}

fn profile_page() -> Result<ProfileRecords, ContentError> {
    let profile = Profile::new(
        "Jordan Reyes",
        "Senior Full-Stack & Cloud Engineer",
        "Full-stack engineer with eight years of experience building web platforms \
         end to end, from React front ends to .NET and Node.js services running on \
         AWS and Azure. Focused on cost-efficient cloud architecture, reliable data \
         pipelines and mentoring teams through large migrations.",
        vec![
            ContactLink::new("GitHub", "https://github.com/jordanreyes", "github")?,
            ContactLink::new("LinkedIn", "https://www.linkedin.com/in/jordanreyes", "linkedin")?,
            ContactLink::new("Email", "mailto:jordan.reyes@example.com", "mail")?,
        ],
    )?;

    let skills = skills(&[
        ("React.js", "frontend"),
        ("TypeScript", "frontend"),
        ("Next.js", "frontend"),
        ("C#", "backend"),
        (".NET", "backend"),
        ("Node.js", "backend"),
        ("GraphQL", "backend"),
        ("AWS", "cloud"),
        ("Azure", "cloud"),
        ("Terraform", "cloud"),
        ("Docker", "cloud"),
        ("PostgreSQL", "data"),
        ("Redis", "data"),
        ("Apache Kafka", "data"),
    ])?;

    let education = Education::new(
        "University of Texas at Austin",
        "B.S. Computer Science",
        "2012 - 2016",
        Some("Austin, TX"),
    )?;

    let experiences = vec![
        Experience::builder("Senior Software Engineer", "Northwind Commerce", "2021 - Present")
            .location("Remote")
            .description(
                "Lead engineer for the checkout and billing platform serving \
                 two million monthly shoppers.",
            )
            .achievements([
                "Re-architected checkout services on AWS, cutting infrastructure spend \
                 by $25K+/month",
                "Reduced p95 checkout latency from 1.8s to 420ms",
                "Mentored six engineers through the monolith-to-services migration",
            ])
            .technologies(["C#", ".NET", "AWS", "Terraform", "PostgreSQL"])
            .build()?,
        Experience::builder("Software Engineer", "Contoso Health", "2018 - 2021")
            .location("Austin, TX")
            .description(
                "Built patient-facing scheduling tools and the integration layer behind them.",
            )
            .achievements([
                "Shipped a React scheduling app adopted by 140 clinics",
                "Built a Kafka ingestion pipeline processing 3M events per day",
            ])
            .technologies(["React.js", "TypeScript", "Node.js", "Apache Kafka", "Azure"])
            .build()?,
        Experience::builder("Junior Developer", "Fabrikam Studio", "2016 - 2018")
            .location("Austin, TX")
            .description("Full-stack work on client marketing sites and internal dashboards.")
            .build()?,
    ];

    Ok(ProfileRecords {
        profile,
        skills,
        education,
        experiences,
    })
}

fn projects_page() -> Result<EntryRecords, ContentError> {
    let entries = vec![
        Project::builder(
            "Checkout Platform Re-architecture",
            "Split a monolithic checkout into independently deployable services on AWS.",
        )
        .impact(vec![
            ImpactMetric::new("Cloud savings", "$25K+/month", "savings")?,
            ImpactMetric::new("p95 latency", "-77%", "speed")?,
            ImpactMetric::new("Deploys", "40/week", "rocket")?,
        ])
        .achievements([
            "Designed the service boundaries and event contracts",
            "Moved provisioning to Terraform with per-service budgets",
        ])
        .technologies(["C#", ".NET", "AWS", "Terraform"])
        .build()?,
        Project::builder(
            "Clinic Scheduling App",
            "Self-service appointment booking for a regional healthcare network.",
        )
        .impact(vec![
            ImpactMetric::new("Clinics onboarded", "140", "building")?,
            ImpactMetric::new("Phone bookings", "-35%", "phone")?,
        ])
        .achievements(["Built an accessible booking flow passing WCAG 2.1 AA"])
        .technologies(["React.js", "TypeScript", "Node.js"])
        .build()?,
        Project::builder(
            "Open-source Terraform Modules",
            "A small set of reusable modules for tagging and cost alerts on AWS.",
        )
        .technologies(["Terraform", "AWS"])
        .build()?,
    ];

    Ok(EntryRecords {
        header: PageHeader::new("Projects", Some("Selected work and its measured impact"))?,
        entries,
    })
}

fn timeline_page() -> Result<EntryRecords, ContentError> {
    let entries: Vec<TimelineEntry> = vec![
        TimelineEntry::builder(
            "Billing engine migration",
            "Moved invoicing off the legacy monolith with zero missed billing runs.",
        )
        .timeline_label("2023")
        .impact(vec![
            ImpactMetric::new("Cloud savings", "$25K+/month", "savings")?,
            ImpactMetric::new("Missed runs", "0", "check")?,
        ])
        .achievements([
            "Ran old and new engines in parallel for two billing cycles",
            "Wrote the reconciliation tooling used during cut-over",
        ])
        .technologies([".NET", "PostgreSQL", "AWS"])
        .build()?,
        TimelineEntry::builder(
            "Promoted to Senior Software Engineer",
            "Took ownership of the checkout and billing platform.",
        )
        .timeline_label("2021")
        .build()?,
        TimelineEntry::builder(
            "Event ingestion pipeline",
            "Kafka-based pipeline feeding clinic analytics.",
        )
        .timeline_label("2020")
        .impact(vec![ImpactMetric::new("Events/day", "3M", "chart")?])
        .achievements(["Cut analytics freshness from 24h to 5 minutes"])
        .technologies(["Apache Kafka", "Node.js", "Azure"])
        .build()?,
        TimelineEntry::builder("Graduated from UT Austin", "B.S. Computer Science.")
            .timeline_label("2016")
            .build()?,
    ];

    Ok(EntryRecords {
        header: PageHeader::new("Timeline", Some("Milestones, newest first"))?,
        entries,
    })
}
