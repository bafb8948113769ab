use crate::services::crawler::SweepFinder;

pub mod matches;

pub struct AppState<S> {
    pub finder: SweepFinder<S>,
}
