//! Continuation returned by passing checks.

/// Lets a passing check chain further checks on the same subject.
#[derive(Debug, Clone)]
pub struct AndConstraint<T> {
    subject: T,
}

impl<T> AndConstraint<T> {
    pub fn new(subject: T) -> Self {
        Self { subject }
    }

    /// Continue with the next check.
    pub fn and(self) -> T {
        self.subject
    }

    pub fn subject(&self) -> &T {
        &self.subject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_returns_the_subject() {
        let c = AndConstraint::new(vec![1, 2]);
        assert_eq!(c.subject().len(), 2);
        assert_eq!(c.and(), vec![1, 2]);
    }
}
