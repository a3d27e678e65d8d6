use leptos::prelude::*;
use samwise_common::{CaptureEvent, REPO_URL};

use crate::services::{track, use_services};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Status {
    Completed,
    InProgress,
    Planned,
}

impl Status {
    const COLUMNS: [Status; 3] = [Status::Completed, Status::InProgress, Status::Planned];

    fn title(self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::InProgress => "in progress",
            Status::Planned => "planned",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Status::Completed => "roadmap-column completed",
            Status::InProgress => "roadmap-column in-progress",
            Status::Planned => "roadmap-column planned",
        }
    }
}

struct Item {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    status: Status,
}

const ITEMS: &[Item] = &[
    Item { icon: "🎙️", title: "Local Conversation Recording", description: "Implement local recording without requiring a bot in meetings.", status: Status::Completed },
    Item { icon: "📝", title: "Post-Meeting Transcription", description: "Develop API-based transcription for recorded conversations.", status: Status::Completed },
    Item { icon: "🤖", title: "LLM-Powered Analysis", description: "Integrate LLMs for generating summaries, action items, and facilitating deeper discussions.", status: Status::Completed },
    Item { icon: "📊", title: "AI Powered Insights", description: "Insights about the speech, tone, and clarity. Methods to improve the conversation.", status: Status::InProgress },
    Item { icon: "🗂️", title: "Enhanced Data Organisation", description: "Project-Based Organization with RAG implementation for better data management.", status: Status::InProgress },
    Item { icon: "⚡", title: "Real-Time Transcription", description: "Develop live, real-time transcription capabilities.", status: Status::Planned },
    Item { icon: "🔍", title: "Post-Conversation Insights", description: "Generate advanced analytics and insights after conversations.", status: Status::Planned },
    Item { icon: "🎭", title: "Scenario-Based Practice", description: "Create real-time practice environments for specific scenarios.", status: Status::Planned },
    Item { icon: "🧭", title: "Real-Time Conversation Guidance", description: "Provide real-time course correction and advice during live conversations.", status: Status::Planned },
];

#[component]
pub fn Roadmap() -> impl IntoView {
    let services = use_services();
    let issues_url = format!("{REPO_URL}/issues");
    let issues_link = issues_url.clone();
    let on_issues = move |_| {
        track(services, CaptureEvent::link_clicked("GitHub Issues", issues_link.clone(), "roadmap"));
    };

    view! {
        <section id="roadmap" class="roadmap">
            <div class="container">
                <h2 class="section-title">"Roadmap"</h2>
                <div class="roadmap-board">
                    {Status::COLUMNS
                        .into_iter()
                        .map(|status| {
                            view! {
                                <div class=status.class()>
                                    <h3 class="roadmap-status">{status.title()}</h3>
                                    {ITEMS
                                        .iter()
                                        .filter(|item| item.status == status)
                                        .map(|item| view! {
                                            <div class="roadmap-item">
                                                <span class="roadmap-icon">{item.icon}</span>
                                                <h4>{item.title}</h4>
                                                <p>{item.description}</p>
                                            </div>
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="roadmap-cta">
                    <h3>"We're Building This Open Source! 🚀"</h3>
                    <p>"We'd love your feedback and feature suggestions. Join the discussion on GitHub."</p>
                    <a href=issues_url target="_blank" rel="noopener noreferrer" class="btn btn-secondary" on:click=on_issues>
                        "Share Feedback"
                    </a>
                </div>
            </div>
        </section>
    }
}
