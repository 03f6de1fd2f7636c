use thiserror::Error;

/// Usage errors reported by [`crate::Tracker`].
///
/// Both variants are programmer errors: a required collaborator was not attached (or has been
/// dropped) at the moment its answer was needed. They never abort a pass; see
/// [`crate::Tracker::recalculate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("no scroll host is attached; the scroll direction cannot be resolved")]
    MissingScrollHost,
    #[error("no data source is attached; the tracking rect is unavailable")]
    MissingTrackingRect,
}
