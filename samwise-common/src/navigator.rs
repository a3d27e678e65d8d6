//! Setup guide navigation.
//!
//! Three independent inputs (platform, active step, search term) plus a few
//! presentation toggles, all in one record. Everything the page shows is
//! derived from it on demand.
//!
//! Previous/Next walk the flattened step list, but whether they are enabled
//! is decided by the position inside the current section. A disabled button
//! is a no-op here too, so in practice the walk never leaves the section;
//! crossing sections happens through the sidebar.

use std::collections::BTreeSet;

use crate::setup::{SetupPlatform, SetupSection, SetupStep, flatten};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    SetPlatform(SetupPlatform),
    SelectStep(&'static str),
    Search(String),
    ToggleSection(&'static str),
    Previous,
    Next,
    ToggleDarkMode,
    OpenMobileNav,
    CloseMobileNav,
}

/// "Step `number` of `total`" inside the current section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepPosition {
    pub number: usize,
    pub total: usize,
}

/// A section after search filtering; never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteredSection {
    pub title: &'static str,
    pub steps: Vec<&'static SetupStep>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigatorState {
    pub platform: SetupPlatform,
    pub active_step_id: Option<&'static str>,
    pub search_term: String,
    pub expanded_sections: BTreeSet<&'static str>,
    pub mobile_nav_open: bool,
    pub dark_mode: bool,
}

impl NavigatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outline(&self) -> &'static [SetupSection] {
        self.platform.outline()
    }

    fn first_step(&self) -> &'static SetupStep {
        &self.outline()[0].steps[0]
    }

    /// The active step, or the platform's first step when unset or unknown.
    pub fn current_step(&self) -> &'static SetupStep {
        self.active_step_id
            .and_then(|id| flatten(self.outline()).find(|step| step.id == id))
            .unwrap_or_else(|| self.first_step())
    }

    pub fn current_section(&self) -> &'static SetupSection {
        let id = self.current_step().id;
        self.outline()
            .iter()
            .find(|section| section.steps.iter().any(|step| step.id == id))
            .unwrap_or(&self.outline()[0])
    }

    pub fn position(&self) -> StepPosition {
        let section = self.current_section();
        let id = self.current_step().id;
        let index = section
            .steps
            .iter()
            .position(|step| step.id == id)
            .unwrap_or(0);
        StepPosition {
            number: index + 1,
            total: section.steps.len(),
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.position().number > 1
    }

    pub fn can_go_next(&self) -> bool {
        let position = self.position();
        position.number < position.total
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.current_step().id == id
    }

    /// Sections are shown open when toggled open, or while a search is active.
    pub fn is_section_open(&self, title: &str) -> bool {
        self.expanded_sections.contains(title) || !self.search_term.is_empty()
    }

    /// Outline narrowed by the search term; empty sections are dropped.
    pub fn filtered_outline(&self) -> Vec<FilteredSection> {
        let needle = self.search_term.to_lowercase();
        self.outline()
            .iter()
            .map(|section| FilteredSection {
                title: section.title,
                steps: section
                    .steps
                    .iter()
                    .filter(|step| needle.is_empty() || step.matches(&needle))
                    .collect(),
            })
            .filter(|section| !section.steps.is_empty())
            .collect()
    }

    pub fn reduce(&mut self, action: NavAction) {
        match action {
            NavAction::SetPlatform(platform) => {
                if platform != self.platform {
                    self.platform = platform;
                    self.active_step_id = Some(self.first_step().id);
                }
            }
            NavAction::SelectStep(id) => {
                self.active_step_id = Some(id);
                self.mobile_nav_open = false;
            }
            NavAction::Search(term) => self.search_term = term,
            NavAction::ToggleSection(title) => {
                if !self.expanded_sections.remove(title) {
                    self.expanded_sections.insert(title);
                }
            }
            NavAction::Previous => {
                if self.can_go_previous() {
                    self.step_by(-1);
                }
            }
            NavAction::Next => {
                if self.can_go_next() {
                    self.step_by(1);
                }
            }
            NavAction::ToggleDarkMode => self.dark_mode = !self.dark_mode,
            NavAction::OpenMobileNav => self.mobile_nav_open = true,
            NavAction::CloseMobileNav => self.mobile_nav_open = false,
        }
    }

    fn step_by(&mut self, delta: isize) {
        let steps: Vec<&'static SetupStep> = flatten(self.outline()).collect();
        let current = self.current_step().id;
        let Some(index) = steps.iter().position(|step| step.id == current) else {
            return;
        };
        if let Some(target) = index.checked_add_signed(delta).and_then(|i| steps.get(i)) {
            self.active_step_id = Some(target.id);
        }
    }
}
