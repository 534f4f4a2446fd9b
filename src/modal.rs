//! The four sign-in/sign-up dialogs and their visibility.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownModal;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Login,
    Signup,
    Participant,
    Organizer,
}

/// Input rows a dialog's form is built from, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Email,
    Password,
    PrimarySport,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Email => "Email",
            FormField::Password => "Password",
            FormField::PrimarySport => "Primary Sport",
        }
    }

    /// `<input type=...>`; `None` for the sport select.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FormField::FullName => Some("text"),
            FormField::Email => Some("email"),
            FormField::Password => Some("password"),
            FormField::PrimarySport => None,
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FormField::FullName => Some("Enter your full name"),
            FormField::Email => Some("Enter your email"),
            FormField::Password => Some("Enter your password"),
            FormField::PrimarySport => None,
        }
    }
}

impl ModalKind {
    pub const ALL: [ModalKind; 4] = [
        ModalKind::Login,
        ModalKind::Signup,
        ModalKind::Participant,
        ModalKind::Organizer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModalKind::Login => "login",
            ModalKind::Signup => "signup",
            ModalKind::Participant => "participant",
            ModalKind::Organizer => "organizer",
        }
    }

    /// DOM id of the dialog overlay.
    pub fn element_id(self) -> String {
        format!("{}-modal", self.as_str())
    }

    pub fn title(self) -> &'static str {
        match self {
            ModalKind::Login => "Welcome Back",
            ModalKind::Signup => "Join Our Community",
            ModalKind::Participant => "Join as Participant",
            ModalKind::Organizer => "Become an Organizer",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            ModalKind::Login => "Sign In",
            ModalKind::Signup => "Create Account",
            ModalKind::Participant => "Join Community",
            ModalKind::Organizer => "Start Organizing",
        }
    }

    pub fn fields(self) -> &'static [FormField] {
        use FormField::*;
        match self {
            ModalKind::Login => &[Email, Password],
            ModalKind::Signup => &[FullName, Email, Password],
            ModalKind::Participant | ModalKind::Organizer => {
                &[FullName, Email, Password, PrimarySport]
            }
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModalKind {
    type Err = UnknownModal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModalKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownModal(s.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    /// CSS class to add for this state and the one to remove.
    pub fn classes(self) -> (&'static str, &'static str) {
        match self {
            Visibility::Shown => ("flex", "hidden"),
            Visibility::Hidden => ("hidden", "flex"),
        }
    }
}

/// Visibility of every dialog. All start hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalDeck {
    states: [Visibility; 4],
}

impl ModalDeck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous state.
    pub fn set(&mut self, kind: ModalKind, state: Visibility) -> Visibility {
        std::mem::replace(&mut self.states[kind.index()], state)
    }

    pub fn show(&mut self, kind: ModalKind) -> Visibility {
        self.set(kind, Visibility::Shown)
    }

    pub fn hide(&mut self, kind: ModalKind) -> Visibility {
        self.set(kind, Visibility::Hidden)
    }

    pub fn toggle(&mut self, kind: ModalKind) -> Visibility {
        let next = match self.state(kind) {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        };
        self.set(kind, next);
        next
    }

    pub fn state(&self, kind: ModalKind) -> Visibility {
        self.states[kind.index()]
    }

    pub fn is_visible(&self, kind: ModalKind) -> bool {
        self.state(kind) == Visibility::Shown
    }

    pub fn visible(&self) -> impl Iterator<Item = ModalKind> + '_ {
        ModalKind::ALL.into_iter().filter(|k| self.is_visible(*k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_touches_only_its_own_modal() {
        for kind in ModalKind::ALL {
            let mut deck = ModalDeck::new();
            assert_eq!(deck.show(kind), Visibility::Hidden);
            assert_eq!(deck.visible().collect::<Vec<_>>(), vec![kind]);
            deck.hide(kind);
            assert_eq!(deck, ModalDeck::new());
        }
    }

    #[test]
    fn toggle_flips() {
        let mut deck = ModalDeck::new();
        assert_eq!(deck.toggle(ModalKind::Organizer), Visibility::Shown);
        assert_eq!(deck.toggle(ModalKind::Organizer), Visibility::Hidden);
    }

    #[test]
    fn ids_and_parsing() {
        assert_eq!(ModalKind::Participant.element_id(), "participant-modal");
        for kind in ModalKind::ALL {
            assert_eq!(kind.to_string().parse::<ModalKind>(), Ok(kind));
        }
        assert_eq!(
            "newsletter".parse::<ModalKind>(),
            Err(UnknownModal("newsletter".into()))
        );
    }

    #[test]
    fn login_has_no_name_field() {
        assert!(!ModalKind::Login.fields().contains(&FormField::FullName));
        assert!(ModalKind::Organizer.fields().contains(&FormField::PrimarySport));
        assert!(!ModalKind::Signup.fields().contains(&FormField::PrimarySport));
    }
}
