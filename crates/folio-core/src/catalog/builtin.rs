//! Compiled-in portfolio catalog.

use folio_types::{Category, DocumentLink, Project, ProjectContent};

pub(super) fn categories() -> Vec<Category> {
    vec![
        Category::all(),
        Category::new("ai", "AI Projects"),
        Category::new("ux-cognition", "UX Analysis & Cognition"),
    ]
}

fn pdf(url: &str) -> ProjectContent {
    ProjectContent::Pdf {
        content_url: url.to_string(),
    }
}

#[allow(clippy::too_many_lines)] // flat data table
pub(super) fn projects() -> Vec<Project> {
    vec![
        Project::new(
            1u64,
            "Mood Tales",
            "Emotion Aware Interactive storytelling AI for children",
            "ai",
            "/assets/thumbnail/mood_tales.png",
            pdf("/assets/MoodTales_Presentation.pdf"),
        ),
        Project::new(
            2u64,
            "Interaction Analysis",
            "Analysis of good and bad design principles in interfaces, \
             Ergonomics/Human factors for Design Assignment 1",
            "ux-cognition",
            "/assets/thumbnail/efd_1.png",
            pdf("/assets/InteractionAnalysis_Presentation.pdf"),
        ),
        Project::new(
            3u64,
            "AI Agents",
            "Transforming Enterprise Workflows research paper",
            "ai",
            "/assets/thumbnail/ai_agents.png",
            pdf("/assets/AIAgents_Paper.pdf"),
        ),
        Project::new(
            4u64,
            "MakeMyTrip Website Interaction Scenario",
            "Cognition of information processing and design Assignment 1",
            "ux-cognition",
            "/assets/thumbnail/cipd_1.png",
            pdf("/assets/MakeMyTrip_InteractionScenario.pdf"),
        ),
        Project::new(
            5u64,
            "Design Principles Review",
            "Assignment 2: Design principles review of MakeMyTrip",
            "ux-cognition",
            "/assets/thumbnail/cipd_2.png",
            pdf("/assets/MakeMyTrip_DesignPrinciples.pdf"),
        ),
        Project::new(
            6u64,
            "Task Analysis - Norman's Interaction Cycle",
            "Assignment 4: MakeMyTrip Website Analysis",
            "ux-cognition",
            "/assets/thumbnail/cipd_4.png",
            pdf("/assets/MakeMyTrip_TaskAnalysis.pdf"),
        ),
        Project::new(
            7u64,
            "Impact of Attention and Multitasking on UI Design",
            "Cognition project on effective UI design",
            "ux-cognition",
            "/assets/thumbnail/cipd_project.png",
            ProjectContent::MultiPdf {
                content_urls: vec![
                    DocumentLink::new(
                        "Presentation",
                        "/assets/AttentionMultitasking_Presentation.pdf",
                    ),
                    DocumentLink::new("Report", "/assets/AttentionMultitasking_Report.pdf"),
                ],
            },
        ),
        Project::new(
            8u64,
            "FOOD DETECTION AND ANALYSIS",
            "Website for making informed dietary choices",
            "ai",
            "/assets/thumbnail/food_detection.png",
            pdf("/assets/FoodDetection_Website.pdf"),
        ),
        Project::new(
            10u64,
            "DL Based Image Analysis for CDC",
            "Crossmatch workflow and technical architecture",
            "ai",
            "/assets/CDC_Workflow.png",
            ProjectContent::ImageGallery {
                images: vec![
                    DocumentLink::new(
                        "Technical Architecture",
                        "/assets/CDC_TechnicalArchitecture.png",
                    ),
                    DocumentLink::new("Workflow Diagram", "/assets/CDC_Workflow.png"),
                ],
            },
        ),
    ]
}
