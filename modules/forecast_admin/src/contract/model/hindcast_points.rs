#[derive(Debug, Clone, PartialEq)]
pub struct HindcastPoint {
    pub id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub url: String,
    pub models: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewHindcastPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub url: String,
    pub models: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HindcastPointPatch {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub url: Option<String>,
    pub models: Option<Vec<String>>,
}
