/// Member names looked up inside a zip archive when the storage does not
/// name one explicitly.
pub struct Config {
    pub legacy_file_name: String,
    pub current_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            legacy_file_name: "Divvy_Trips_2019_Q1.csv".into(),
            current_file_name: "Divvy_Trips_2020_Q1.csv".into(),
        }
    }
}
