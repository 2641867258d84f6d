mod bernoulli_source;
mod churn_source;

pub use bernoulli_source::BernoulliSource;
pub use churn_source::ChurnSource;
