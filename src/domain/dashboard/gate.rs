/// Decides between the loading placeholder and the composed dashboard.
///
/// Only the primary asset query feeds the gate; history refreshes never
/// bring the placeholder back.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataAvailabilityGate;

impl DataAvailabilityGate {
    /// `primary_fetch_in_flight` is true until the primary query has produced
    /// its first result for the current asset.
    pub fn should_render_loading(primary_fetch_in_flight: bool) -> bool {
        primary_fetch_in_flight
    }
}
