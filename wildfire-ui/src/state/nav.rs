//! Section Navigation
//!
//! Exactly one content section is visible and exactly one navigation item
//! is active at any time. Both follow from `NavState::active`.

/// Content sections of the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Data,
    Prediction,
    Visualization,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Data,
        Section::Prediction,
        Section::Visualization,
    ];

    /// Key used in the `data-section` attribute
    pub fn key(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Data => "data",
            Section::Prediction => "prediction",
            Section::Visualization => "visualization",
        }
    }

    /// Nav item text, also shown as the page title
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Data => "Satellite Data",
            Section::Prediction => "Risk Prediction",
            Section::Visualization => "Visualization",
        }
    }

    /// Element id of the section container: `<key>-section`
    pub fn element_id(&self) -> String {
        format!("{}-section", self.key())
    }

    /// Whether opening this section refreshes the dashboard data
    pub fn refreshes(&self) -> bool {
        matches!(self, Section::Dashboard | Section::Visualization)
    }
}

/// Sidebar entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Section(Section),
    /// Real page navigation to `/logout`, never intercepted
    Logout,
}

/// Result of a navigation click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The browser performs the default navigation
    PassThrough,
    Switched { refresh: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    active: Section,
    title: String,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(Section::Dashboard)
    }
}

impl NavState {
    pub fn new(active: Section) -> Self {
        Self {
            active,
            title: active.title().to_string(),
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.active == section
    }

    pub fn is_active(&self, item: NavItem) -> bool {
        item == NavItem::Section(self.active)
    }

    /// Handle a click on a sidebar item.
    pub fn click(&mut self, item: NavItem) -> NavOutcome {
        match item {
            NavItem::Logout => NavOutcome::PassThrough,
            NavItem::Section(section) => {
                self.active = section;
                self.title = section.title().to_string();
                NavOutcome::Switched {
                    refresh: section.refreshes(),
                }
            }
        }
    }
}
