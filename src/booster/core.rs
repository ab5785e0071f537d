//! Provides `Booster` trait.

use crate::error::Result;

use std::ops::ControlFlow;


/// The trait [`Booster`] defines the standard framework of Boosting.
///
/// You need to implement [`Booster::preprocess`],
/// [`Booster::boost`],
/// and [`Booster::postprocess`]
/// to write a new boosting algorithm.
pub trait Booster<W> {
    /// The combined hypothesis returned by [`Booster::run`].
    type Output;


    /// A main function that runs boosting algorithm.
    fn run(&mut self, weak_learner: &W) -> Result<Self::Output> {
        self.preprocess(weak_learner)?;

        let _ = (1..).try_for_each(|iter| {
            self.boost(weak_learner, iter)
        });

        self.postprocess(weak_learner)
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`],
    /// This method is called before the boosting process.
    /// Fails if the training set cannot be boosted.
    fn preprocess(&mut self, weak_learner: &W) -> Result<()>;


    /// Boosting step per iteration.
    /// This method returns
    /// `ControlFlow::Continue(())` while rounds remain,
    /// `ControlFlow::Break(terminated_iter)` otherwise.
    fn boost(&mut self, weak_learner: &W, iteration: usize)
        -> ControlFlow<usize>;


    /// Post-processing.
    /// This method returns the combined hypothesis.
    fn postprocess(&mut self, weak_learner: &W) -> Result<Self::Output>;
}
