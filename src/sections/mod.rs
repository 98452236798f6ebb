//! The home page section stack.

mod call_to_action;
mod hero;
mod impact;
mod partners;
mod problem;
mod solution;
mod why_vbhc;

pub use call_to_action::CallToAction;
pub use hero::Hero;
pub use impact::MeasurableImpact;
pub use partners::WhoWeWorkWith;
pub use problem::TheProblem;
pub use solution::TheSolution;
pub use why_vbhc::WhyVbhc;
