//! # Screen Stack
//!
//! Drivers → Driver Details → Race Results, pushed and popped like a
//! native stack navigator. The race results screen owns the race store's
//! lifetime: pushing it loads the driver's races, popping it clears them.

use log::debug;

use crate::core::action::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Drivers,
    DriverDetails(String),
    Races(String),
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Drivers => "F1 Drivers",
            Screen::DriverDetails(_) => "Driver Details",
            Screen::Races(_) => "Race Results",
        }
    }
}

/// Never empty: `Drivers` is the root and cannot be popped.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Drivers],
        }
    }

    pub fn current(&self) -> &Screen {
        // The root is never popped.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Enters `screen`, returning the store action its scope starts with.
    pub fn push(&mut self, screen: Screen) -> Option<Action> {
        debug!("Navigate to {:?}", screen);
        let action = match &screen {
            Screen::Races(driver_id) => Some(Action::LoadRaces(driver_id.clone())),
            _ => None,
        };
        self.stack.push(screen);
        action
    }

    /// Leaves the current screen, returning the action its scope ends with.
    pub fn pop(&mut self) -> Option<Action> {
        if self.stack.len() == 1 {
            return None;
        }
        let left = self.stack.pop()?;
        debug!("Leave {:?}", left);
        match left {
            Screen::Races(_) => Some(Action::ClearRaces),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_drivers() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), &Screen::Drivers);
        assert!(nav.pop().is_none());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_races_scope_loads_and_clears() {
        let mut nav = Navigator::new();
        assert!(nav.push(Screen::DriverDetails("hamilton".into())).is_none());

        let enter = nav.push(Screen::Races("hamilton".into()));
        assert!(matches!(enter, Some(Action::LoadRaces(ref id)) if id == "hamilton"));

        let leave = nav.pop();
        assert!(matches!(leave, Some(Action::ClearRaces)));
        assert_eq!(nav.current(), &Screen::DriverDetails("hamilton".into()));

        assert!(nav.pop().is_none());
        assert_eq!(nav.current(), &Screen::Drivers);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Screen::Drivers.title(), "F1 Drivers");
        assert_eq!(Screen::Races("x".into()).title(), "Race Results");
    }
}
