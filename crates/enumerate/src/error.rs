/// Errors that can occur while enumerating or persisting a problem instance.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The search space has more states than the configured limit.
    ///
    /// `states` is `None` if `∏ d_i` overflows `usize`.
    #[error("search space exceeds the limit of {limit} states ({})", count(*states))]
    TooManyStates { states: Option<usize>, limit: usize },

    #[error("problem error: {0}")]
    Core(#[from] qmoo_core::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn count(states: Option<usize>) -> String {
    states.map_or_else(|| "overflow".to_owned(), |s| s.to_string())
}
