use crate::{error::CalcError, evaluate_expression, interpreter::bindings::Bindings};

/// An evaluation session.
///
/// `Calculator` owns the variable bindings that outlive individual
/// evaluations. Each call to [`Calculator::evaluate`] runs the whole pipeline
/// from scratch against the current bindings.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    bindings: Bindings,
}

impl Calculator {
    /// Creates a session with no variables bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that starts from existing bindings.
    #[must_use]
    pub const fn with_bindings(bindings: Bindings) -> Self {
        Self { bindings }
    }

    /// Evaluates one expression against the session's bindings.
    ///
    /// # Errors
    /// Returns the first error raised by any stage of the pipeline.
    ///
    /// # Examples
    /// ```
    /// use exprcalc::interpreter::calculator::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// calc.set_variable("x", 5.0);
    /// calc.set_variable("y", 2.0);
    /// assert_eq!(calc.evaluate("x * y + 3").unwrap(), 13.0);
    /// ```
    pub fn evaluate(&self, expression: &str) -> Result<f64, CalcError> {
        evaluate_expression(expression, &self.bindings)
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn set_variable(&mut self, name: impl Into<String>, value: f64) {
        self.bindings.set(name, value);
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn bindings(&self) -> &Bindings {
        &self.bindings
    }
}
