/// Defines logistic regression trained with RMSprop.
mod logreg;

pub use logreg::{LogisticRegression, LogisticRegressionConfig};
