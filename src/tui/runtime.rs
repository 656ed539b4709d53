//! Form state for the terminal UI.

use crate::error::ValidationError;
use crate::household::{Appliance, HomeConfiguration, HousingType, Submission};
use crate::projection::EnergyRate;
use crate::runner::{Calculation, calculate};

/// Focusable form fields, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    City,
    Area,
    HousingType,
    Configuration,
    Appliance(Appliance),
    Calculate,
}

impl Field {
    pub const ALL: [Self; 10] = [
        Self::Name,
        Self::Age,
        Self::City,
        Self::Area,
        Self::HousingType,
        Self::Configuration,
        Self::Appliance(Appliance::AirConditioning),
        Self::Appliance(Appliance::Refrigerator),
        Self::Appliance(Appliance::WashingMachine),
        Self::Calculate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Age => "Age",
            Self::City => "City",
            Self::Area => "Area Name",
            Self::HousingType => "Housing Type",
            Self::Configuration => "Home Configuration",
            Self::Appliance(Appliance::AirConditioning) => "Air Conditioning",
            Self::Appliance(Appliance::Refrigerator) => "Refrigerator",
            Self::Appliance(Appliance::WashingMachine) => "Washing Machine",
            Self::Calculate => "Calculate Energy Consumption",
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, Self::Name | Self::City | Self::Area)
    }
}

/// Result of the last calculate action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Calculated(Calculation),
    Rejected(ValidationError),
}

/// TUI application state.
pub struct App {
    /// Current form values.
    pub submission: Submission,
    /// Index into [`Field::ALL`].
    pub focus: usize,
    /// Session tariff, adjustable with PageUp/PageDown.
    pub rate: EnergyRate,
    pub currency: String,
    /// Result of the last calculate action.
    pub outcome: Option<Outcome>,
    /// Whether the user has requested quit.
    pub quit: bool,
}

/// Steps through `None` (placeholder) followed by every option, wrapping.
fn cycle<T: Copy + PartialEq>(current: Option<T>, options: &[T], forward: bool) -> Option<T> {
    let n = options.len() + 1;
    let pos = current
        .and_then(|c| options.iter().position(|&o| o == c))
        .map_or(0, |i| i + 1);
    let next = if forward { (pos + 1) % n } else { (pos + n - 1) % n };
    next.checked_sub(1).map(|i| options[i])
}

impl App {
    pub fn new(rate: EnergyRate, currency: impl Into<String>) -> Self {
        Self {
            submission: Submission::default(),
            focus: 0,
            rate,
            currency: currency.into(),
            outcome: None,
            quit: false,
        }
    }

    pub fn focused(&self) -> Field {
        Field::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Field::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focused() {
            Field::Name => Some(&mut self.submission.name),
            Field::City => Some(&mut self.submission.city),
            Field::Area => Some(&mut self.submission.area),
            _ => None,
        }
    }

    /// Types a character into the focused text field; ignored elsewhere.
    pub fn input_char(&mut self, c: char) {
        if let Some(text) = self.text_mut() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    /// Left/Right on a selector or the age stepper.
    pub fn adjust(&mut self, forward: bool) {
        let field = self.focused();
        let s = &mut self.submission;
        match field {
            Field::Age => {
                s.age = if forward {
                    s.age.increment()
                } else {
                    s.age.decrement()
                };
            }
            Field::HousingType => s.housing_type = cycle(s.housing_type, &HousingType::ALL, forward),
            Field::Configuration => {
                s.configuration = cycle(s.configuration, &HomeConfiguration::ALL, forward);
            }
            Field::Appliance(a) => s.appliances.toggle(a),
            _ => {}
        }
    }

    /// Space on a checkbox toggles it; on a text field it types a space.
    pub fn toggle(&mut self) {
        match self.focused() {
            Field::Appliance(a) => self.submission.appliances.toggle(a),
            Field::Calculate => self.submit(),
            f if f.is_text() => self.input_char(' '),
            _ => {}
        }
    }

    /// Runs the calculation on the current form values.
    pub fn submit(&mut self) {
        self.outcome = Some(match calculate(self.submission.clone(), self.rate) {
            Ok(calc) => Outcome::Calculated(calc),
            Err(e) => Outcome::Rejected(e),
        });
    }

    /// Changes the tariff; a shown result is recalculated at the new rate.
    pub fn set_rate(&mut self, rate: EnergyRate) {
        self.rate = rate;
        if matches!(self.outcome, Some(Outcome::Calculated(_))) {
            self.submit();
        }
    }

    pub fn rate_up(&mut self) {
        self.set_rate(self.rate.increment());
    }

    pub fn rate_down(&mut self) {
        self.set_rate(self.rate.decrement());
    }

    /// The shown calculation, if the last submit succeeded.
    pub fn calculation(&self) -> Option<&Calculation> {
        match &self.outcome {
            Some(Outcome::Calculated(c)) => Some(c),
            _ => None,
        }
    }
}
