use fairway_core::Club;

pub(crate) mod logging;
pub mod state;

uniffi::setup_scaffolding!();

/// Install logging and route panics into it.
/// Call this once at startup from Kotlin/Swift
#[uniffi::export]
pub fn init_logging() {
    logging::setup_logging();
}

/// Club labels in bag order, as accepted by `RoundSession::select_club`
#[uniffi::export]
pub fn club_labels() -> Vec<String> {
    Club::all().map(|club| club.label().to_owned()).collect()
}
