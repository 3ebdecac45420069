//! Question definitions for the prompt flow

use crate::answers::{
    Choice, Extra, Forms, Framework, Icons, PackageManager, PartialAnswers, Query, Routing,
    StateManagement, Styling,
};
use crate::error::UnknownChoice;

/// Answer field a question fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Framework,
    PackageManager,
    Routing,
    Query,
    Forms,
    StateManagement,
    Styling,
    Icons,
    Extras,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Exactly one choice
    Select,
    /// Any number of choices, including none
    MultiSelect,
}

/// A single prompt: its type, message, choices and default
#[derive(Debug, Clone)]
pub struct Question {
    pub field: Field,
    pub kind: QuestionKind,
    pub message: &'static str,
    /// (value, title) pairs in display order
    pub choices: Vec<(&'static str, &'static str)>,
    /// Index of the preselected choice (select questions only)
    pub initial: Option<usize>,
}

impl Question {
    fn select<C: Choice>(field: Field, message: &'static str, initial: usize) -> Self {
        Self {
            field,
            kind: QuestionKind::Select,
            message,
            choices: choices::<C>(),
            initial: Some(initial),
        }
    }

    fn multiselect<C: Choice>(field: Field, message: &'static str) -> Self {
        Self {
            field,
            kind: QuestionKind::MultiSelect,
            message,
            choices: choices::<C>(),
            initial: None,
        }
    }

    /// Value of the preselected choice
    pub fn initial_value(&self) -> Option<&'static str> {
        self.initial
            .and_then(|idx| self.choices.get(idx))
            .map(|(value, _)| *value)
    }
}

fn choices<C: Choice>() -> Vec<(&'static str, &'static str)> {
    C::ALL
        .iter()
        .map(|choice| (choice.value(), choice.title()))
        .collect()
}

/// The ordered question list
pub fn questions() -> Vec<Question> {
    vec![
        Question::select::<Framework>(Field::Framework, "Select a framework", 0),
        Question::select::<PackageManager>(
            Field::PackageManager,
            "Select a package manager",
            2,
        ),
        Question::select::<Routing>(Field::Routing, "Select a routing library", 0),
        Question::select::<Query>(Field::Query, "Select a data fetching library", 0),
        Question::select::<Forms>(Field::Forms, "Select a forms library", 0),
        Question::select::<StateManagement>(
            Field::StateManagement,
            "Select a state management library",
            0,
        ),
        Question::select::<Styling>(Field::Styling, "Select a styling solution", 0),
        Question::select::<Icons>(Field::Icons, "Select an icon library", 0),
        Question::multiselect::<Extra>(Field::Extras, "Select extra tools to include"),
    ]
}

impl PartialAnswers {
    /// Whether a field already has an answer
    pub fn is_answered(&self, field: Field) -> bool {
        match field {
            Field::Framework => self.framework.is_some(),
            Field::PackageManager => self.package_manager.is_some(),
            Field::Routing => self.routing.is_some(),
            Field::Query => self.query.is_some(),
            Field::Forms => self.forms.is_some(),
            Field::StateManagement => self.state_management.is_some(),
            Field::Styling => self.styling.is_some(),
            Field::Icons => self.icons.is_some(),
            Field::Extras => self.extras.is_some(),
        }
    }

    /// Record the answer to a question from its raw values
    ///
    /// Select questions use the first value (none means "skip"); the extras
    /// question uses all of them.
    pub fn answer(&mut self, field: Field, values: &[&str]) -> Result<(), UnknownChoice> {
        let first = values.first().copied().unwrap_or("");
        match field {
            Field::Framework => self.framework = Some(Framework::parse(first)?),
            Field::PackageManager => self.package_manager = Some(PackageManager::parse(first)?),
            Field::Routing => self.routing = Some(Routing::parse(first)?),
            Field::Query => self.query = Some(Query::parse(first)?),
            Field::Forms => self.forms = Some(Forms::parse(first)?),
            Field::StateManagement => {
                self.state_management = Some(StateManagement::parse(first)?)
            }
            Field::Styling => self.styling = Some(Styling::parse(first)?),
            Field::Icons => self.icons = Some(Icons::parse(first)?),
            Field::Extras => {
                let mut extras = Vec::new();
                for value in values {
                    let extra = Extra::parse(value)?;
                    if !extras.contains(&extra) {
                        extras.push(extra);
                    }
                }
                self.extras = Some(extras);
            }
        }
        Ok(())
    }

    /// Answer every open question with its default (`--yes` mode)
    pub fn fill_defaults(&mut self) {
        let questions = questions();
        self.framework = self
            .framework
            .or_else(|| default_choice(&questions, Field::Framework));
        self.package_manager = self
            .package_manager
            .or_else(|| default_choice(&questions, Field::PackageManager));
        self.routing = self
            .routing
            .or_else(|| default_choice(&questions, Field::Routing));
        self.query = self.query.or_else(|| default_choice(&questions, Field::Query));
        self.forms = self.forms.or_else(|| default_choice(&questions, Field::Forms));
        self.state_management = self
            .state_management
            .or_else(|| default_choice(&questions, Field::StateManagement));
        self.styling = self
            .styling
            .or_else(|| default_choice(&questions, Field::Styling));
        self.icons = self.icons.or_else(|| default_choice(&questions, Field::Icons));
        if self.extras.is_none() {
            self.extras = Some(Vec::new());
        }
    }
}

/// The preselected choice of a field's question
fn default_choice<C: Choice>(questions: &[Question], field: Field) -> Option<C> {
    let question = questions.iter().find(|q| q.field == field)?;
    C::ALL.get(question.initial?).copied()
}
