// ABOUTME: View router state machine
// ABOUTME: Single immutable AppState transformed by a pure reducer

use crate::catalog::AgentDescriptor;
use crate::types::User;

/// Top-level screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Login,
    Gallery,
    Agent,
}

/// The routing state: which screen, who is signed in, which agent is open.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub view: AppView,
    pub user: Option<User>,
    pub selected_agent: Option<AgentDescriptor>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: AppView::Login,
            user: None,
            selected_agent: None,
        }
    }
}

/// Routing actions. Every action is legal from its source state; reaching
/// the agent view requires a descriptor by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LogIn(User),
    SelectAgent(AgentDescriptor),
    BackToGallery,
    LogOut,
}

/// Pure transition function. Consumes the previous state and returns the
/// next one; no side effects.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::LogIn(user) => AppState {
            view: AppView::Gallery,
            user: Some(user),
            ..state
        },
        Action::SelectAgent(agent) => AppState {
            view: AppView::Agent,
            selected_agent: Some(agent),
            ..state
        },
        Action::BackToGallery => AppState {
            view: AppView::Gallery,
            selected_agent: None,
            ..state
        },
        Action::LogOut => AppState {
            view: AppView::Login,
            user: None,
            selected_agent: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn demo_user() -> User {
        User {
            id: "1".to_string(),
            name: "a".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_login() {
        let state = AppState::default();
        assert_eq!(state.view, AppView::Login);
        assert!(state.user.is_none());
        assert!(state.selected_agent.is_none());
    }

    #[test]
    fn test_login_moves_to_gallery() {
        let state = reduce(AppState::default(), Action::LogIn(demo_user()));
        assert_eq!(state.view, AppView::Gallery);
        assert_eq!(state.user.as_ref().unwrap().name, "a");
    }

    #[test]
    fn test_select_agent_moves_to_agent_view() {
        let state = reduce(AppState::default(), Action::LogIn(demo_user()));
        let agent = *catalog::find("data-analyst").unwrap();
        let state = reduce(state, Action::SelectAgent(agent));
        assert_eq!(state.view, AppView::Agent);
        assert_eq!(state.selected_agent.unwrap().id, "data-analyst");
        // user survives the transition
        assert!(state.user.is_some());
    }

    #[test]
    fn test_back_clears_selection_but_keeps_user() {
        let agent = *catalog::find("content-creator").unwrap();
        let mut state = reduce(AppState::default(), Action::LogIn(demo_user()));
        state = reduce(state, Action::SelectAgent(agent));
        state = reduce(state, Action::BackToGallery);
        assert_eq!(state.view, AppView::Gallery);
        assert!(state.selected_agent.is_none());
        assert!(state.user.is_some());
    }

    #[test]
    fn test_logout_clears_everything_from_any_state() {
        let agent = *catalog::find("content-creator").unwrap();
        let mut state = reduce(AppState::default(), Action::LogIn(demo_user()));
        state = reduce(state, Action::SelectAgent(agent));
        let state = reduce(state, Action::LogOut);
        assert_eq!(state.view, AppView::Login);
        assert!(state.user.is_none());
        assert!(state.selected_agent.is_none());
    }
}
