//! Widget state definitions and transition logic.

/// The visual state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    /// Pointer is elsewhere.
    #[default]
    Idle,
    /// Pointer is over the widget.
    Hovered,
    /// Primary button is held over the widget. Left on the paired release.
    Pressed,
}

impl ButtonState {
    /// Index into a widget's color and texture triples.
    pub fn index(self) -> usize {
        match self {
            ButtonState::Idle => 0,
            ButtonState::Hovered => 1,
            ButtonState::Pressed => 2,
        }
    }
}

/// Which triple a widget applies on state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualMode {
    /// Fill (or tint) with the color triple.
    #[default]
    Color,
    /// Bind the texture triple.
    Textured,
}

/// Input to the state machine, with hit-testing already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Pointer moved; `inside` tells whether it is over the widget.
    Move { inside: bool },
    /// Primary button went down.
    Press { inside: bool },
    /// Primary button went up.
    Release { inside: bool },
    /// Programmatic hover.
    ForceHover,
    /// Programmatic return to idle.
    ForceIdle,
    /// Programmatic activation, bypassing hit-testing.
    ForceActivate,
}

/// Outcome of a handled trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State whose visual must be applied.
    pub state: ButtonState,
    /// Invoke the activation callback before applying the visual.
    pub activate: bool,
}

impl Transition {
    fn to(state: ButtonState) -> Self {
        Self {
            state,
            activate: false,
        }
    }

    fn activating(state: ButtonState) -> Self {
        Self {
            state,
            activate: true,
        }
    }
}

/// Idle / hovered / pressed transition logic of a single widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetStateMachine {
    state: ButtonState,
}

impl WidgetStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Feed a trigger. Returns `None` when the trigger is ignored (presses
    /// and releases outside the widget).
    ///
    /// A release inside activates even without a preceding press; a press
    /// followed by a move outside returns to idle, so the later release
    /// outside is ignored.
    pub fn handle(&mut self, trigger: Trigger) -> Option<Transition> {
        let transition = match trigger {
            Trigger::Move { inside: true } => Transition::to(ButtonState::Hovered),
            Trigger::Move { inside: false } => Transition::to(ButtonState::Idle),
            Trigger::Press { inside: true } => Transition::to(ButtonState::Pressed),
            Trigger::Release { inside: true } => Transition::activating(ButtonState::Hovered),
            Trigger::Press { inside: false } | Trigger::Release { inside: false } => return None,
            Trigger::ForceHover => Transition::to(ButtonState::Hovered),
            Trigger::ForceIdle => Transition::to(ButtonState::Idle),
            Trigger::ForceActivate => Transition::activating(ButtonState::Hovered),
        };
        if transition.state != self.state {
            log::trace!("{:?} -> {:?} on {:?}", self.state, transition.state, trigger);
        }
        self.state = transition.state;
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_sequence() {
        let mut machine = WidgetStateMachine::new();

        let hover = machine.handle(Trigger::Move { inside: true });
        assert_eq!(hover, Some(Transition::to(ButtonState::Hovered)));

        let press = machine.handle(Trigger::Press { inside: true });
        assert_eq!(press, Some(Transition::to(ButtonState::Pressed)));
        assert_eq!(machine.state(), ButtonState::Pressed);

        let release = machine.handle(Trigger::Release { inside: true });
        assert_eq!(release, Some(Transition::activating(ButtonState::Hovered)));
        assert_eq!(machine.state(), ButtonState::Hovered);
    }

    #[test]
    fn test_release_outside_is_ignored() {
        let mut machine = WidgetStateMachine::new();
        machine.handle(Trigger::Press { inside: true });
        machine.handle(Trigger::Move { inside: false });

        assert_eq!(machine.handle(Trigger::Release { inside: false }), None);
        assert_eq!(machine.state(), ButtonState::Idle);
    }

    #[test]
    fn test_press_outside_keeps_state() {
        let mut machine = WidgetStateMachine::new();
        machine.handle(Trigger::ForceHover);
        assert_eq!(machine.handle(Trigger::Press { inside: false }), None);
        assert_eq!(machine.state(), ButtonState::Hovered);
    }

    #[test]
    fn test_forced_transitions() {
        let mut machine = WidgetStateMachine::new();

        assert_eq!(
            machine.handle(Trigger::ForceActivate),
            Some(Transition::activating(ButtonState::Hovered))
        );
        assert_eq!(
            machine.handle(Trigger::ForceIdle),
            Some(Transition::to(ButtonState::Idle))
        );
        assert_eq!(machine.state(), ButtonState::Idle);
    }

    #[test]
    fn test_state_indices() {
        assert_eq!(ButtonState::Idle.index(), 0);
        assert_eq!(ButtonState::Hovered.index(), 1);
        assert_eq!(ButtonState::Pressed.index(), 2);
    }
}
