/// Presenter surface: what a renderer implements, plus `Screen`, an
/// in-memory model of everything currently visible.
use crate::schema::directive::{ChoiceId, Directive, Glyph};

/// Consumes directives in order. Directives carry no return value.
pub trait Presenter {
    fn present(&mut self, directive: &Directive);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceButton {
    pub id: ChoiceId,
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    pub duration_ms: u64,
    pub particles: u32,
}

/// Visible state after applying every directive so far. Spacer lines are
/// kept as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub narration: Vec<String>,
    pub hint: Option<String>,
    pub visual: Option<Glyph>,
    pub tokens: Vec<Glyph>,
    pub choices: Vec<ChoiceButton>,
    /// Placeholder of the text input while it is shown.
    pub text_input: Option<String>,
    pub emphasized: bool,
    pub celebrations: Vec<Celebration>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_all<'a>(&mut self, directives: impl IntoIterator<Item = &'a Directive>) {
        for directive in directives {
            self.present(directive);
        }
    }

    /// Labels of the offered choices, with their disabled flag.
    pub fn choice_labels(&self) -> Vec<(&str, bool)> {
        self.choices
            .iter()
            .map(|c| (c.label.as_str(), c.disabled))
            .collect()
    }

    /// Id of the first offered choice labelled `label`.
    pub fn choice(&self, label: &str) -> Option<ChoiceId> {
        self.choices.iter().find(|c| c.label == label).map(|c| c.id)
    }
}

impl Presenter for Screen {
    fn present(&mut self, directive: &Directive) {
        match directive {
            Directive::ClearNarration => self.narration.clear(),
            Directive::ShowNarration(text) => self.narration = vec![text.clone()],
            Directive::RenderLine(text) => self.narration.push(text.clone()),
            Directive::RenderSpacer => self.narration.push(String::new()),
            Directive::Emphasize => self.emphasized = true,
            Directive::EndEmphasis => self.emphasized = false,
            Directive::ShowTextInput { placeholder } => self.text_input = Some(placeholder.clone()),
            Directive::HideTextInput => self.text_input = None,
            Directive::AddChoice {
                id,
                label,
                disabled,
            } => self.choices.push(ChoiceButton {
                id: *id,
                label: label.clone(),
                disabled: *disabled,
            }),
            Directive::DisableChoice(id) => {
                if let Some(choice) = self.choices.iter_mut().find(|c| c.id == *id) {
                    choice.disabled = true;
                }
            }
            Directive::ClearChoices => self.choices.clear(),
            Directive::SetHint(text) => self.hint = Some(text.clone()),
            Directive::ClearHint => self.hint = None,
            // The visual area holds either one glyph or the token strip.
            Directive::SetVisual(glyph) => {
                self.visual = Some(*glyph);
                self.tokens.clear();
            }
            Directive::ClearVisual => {
                self.visual = None;
                self.tokens.clear();
            }
            Directive::AppendToken(glyph) => self.tokens.push(*glyph),
            Directive::Confetti {
                duration_ms,
                particles,
            } => self.celebrations.push(Celebration {
                duration_ms: *duration_ms,
                particles: *particles,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_lines_and_spacers() {
        let mut screen = Screen::new();
        screen.apply_all(&[
            Directive::RenderLine("one".to_string()),
            Directive::RenderSpacer,
            Directive::RenderLine("two".to_string()),
        ]);
        assert_eq!(screen.narration, vec!["one", "", "two"]);

        screen.present(&Directive::ShowNarration("loading...".to_string()));
        assert_eq!(screen.narration, vec!["loading..."]);

        screen.present(&Directive::ClearNarration);
        assert!(screen.narration.is_empty());
    }

    #[test]
    fn choices_can_be_disabled_and_cleared() {
        let mut screen = Screen::new();
        screen.apply_all(&[
            Directive::AddChoice {
                id: ChoiceId(1),
                label: "5".to_string(),
                disabled: false,
            },
            Directive::AddChoice {
                id: ChoiceId(2),
                label: "22".to_string(),
                disabled: false,
            },
            Directive::DisableChoice(ChoiceId(2)),
        ]);
        assert_eq!(screen.choice_labels(), vec![("5", false), ("22", true)]);
        assert_eq!(screen.choice("22"), Some(ChoiceId(2)));

        screen.present(&Directive::ClearChoices);
        assert!(screen.choices.is_empty());
    }

    #[test]
    fn visual_replaces_token_strip() {
        let mut screen = Screen::new();
        screen.present(&Directive::AppendToken(Glyph::Apple));
        screen.present(&Directive::AppendToken(Glyph::Apple));
        assert_eq!(screen.tokens.len(), 2);

        screen.present(&Directive::SetVisual(Glyph::Hourglass));
        assert!(screen.tokens.is_empty());
        assert_eq!(screen.visual, Some(Glyph::Hourglass));
    }
}
