/// A stored IP → location mapping. Rows are written by an external import job
/// and are only ever read by this service.
#[derive(Debug, Clone, PartialEq)]
pub struct GeolocationRecord {
    pub ip_address: String,
    pub country: String,
    pub city: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub isp: Option<String>,
}
