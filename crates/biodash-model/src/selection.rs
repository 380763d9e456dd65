//! Explicit UI selection state.
//!
//! The dashboard's drill-down interactions are modeled as pure value
//! transitions: the rendering layer holds exactly one state object with
//! defined moves (selected to none, selected to other) instead of
//! free-floating mutable bindings.

/// Map drill-down selection: at most one state, and within it at most one
/// expanded role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub state: Option<String>,
    pub role: Option<String>,
}

impl Selection {
    /// Clicking a state selects it; clicking the selected state again
    /// clears the selection. Changing state always collapses the role.
    #[must_use]
    pub fn toggle_state(self, name: &str) -> Self {
        if self.state.as_deref() == Some(name) {
            Self::default()
        } else {
            Self {
                state: Some(name.to_string()),
                role: None,
            }
        }
    }

    /// Expanding a role collapses the previously expanded one; expanding
    /// the same role again collapses it. Without a selected state there is
    /// no panel, so the toggle is a no-op.
    #[must_use]
    pub fn toggle_role(self, role: &str) -> Self {
        if self.state.is_none() {
            return self;
        }
        let role = if self.role.as_deref() == Some(role) {
            None
        } else {
            Some(role.to_string())
        };
        Self { role, ..self }
    }
}

/// Guided-tour scenes, in presentation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scene {
    #[default]
    Overview,
    SalaryTrends,
    Layoffs,
    UsMap,
    End,
}

impl Scene {
    /// Advance the tour; `End` is terminal.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Overview => Self::SalaryTrends,
            Self::SalaryTrends => Self::Layoffs,
            Self::Layoffs => Self::UsMap,
            Self::UsMap | Self::End => Self::End,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_state_selects_and_clears() {
        let selection = Selection::default().toggle_state("Massachusetts");
        assert_eq!(selection.state.as_deref(), Some("Massachusetts"));

        let cleared = selection.clone().toggle_state("Massachusetts");
        assert_eq!(cleared, Selection::default());

        let switched = selection.toggle_state("California");
        assert_eq!(switched.state.as_deref(), Some("California"));
    }

    #[test]
    fn switching_state_collapses_role() {
        let selection = Selection::default()
            .toggle_state("Massachusetts")
            .toggle_role("Scientist");
        assert_eq!(selection.role.as_deref(), Some("Scientist"));

        let switched = selection.toggle_state("California");
        assert_eq!(switched.role, None);
    }

    #[test]
    fn toggle_role_requires_selected_state() {
        let selection = Selection::default().toggle_role("Scientist");
        assert_eq!(selection, Selection::default());

        let expanded = Selection::default()
            .toggle_state("Massachusetts")
            .toggle_role("Scientist");
        let collapsed = expanded.toggle_role("Scientist");
        assert_eq!(collapsed.role, None);
        assert_eq!(collapsed.state.as_deref(), Some("Massachusetts"));
    }

    #[test]
    fn scene_progression_terminates() {
        let mut scene = Scene::default();
        scene = scene.next();
        assert_eq!(scene, Scene::SalaryTrends);
        scene = scene.next().next();
        assert_eq!(scene, Scene::UsMap);
        assert_eq!(scene.next(), Scene::End);
        assert_eq!(Scene::End.next(), Scene::End);
    }
}
