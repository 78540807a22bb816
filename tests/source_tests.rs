use bikeshare::{
    prelude::*,
    source::{self, Config},
};
use std::{fs::File, io::Write, path::PathBuf};
use zip::{ZipWriter, write::SimpleFileOptions};

const LEGACY_CSV: &str = "\
trip_id,start_time,end_time,bikeid,tripduration,from_station_id,from_station_name,to_station_id,to_station_name,usertype,gender,birthyear
21742443,2019-01-01 00:04:37,2019-01-01 00:11:07,2167,390.0,199,Wabash Ave & Grand Ave,84,Milwaukee Ave & Grand Ave,Subscriber,Male,1989
21742444,2019-01-01 00:08:13,2019-01-01 00:15:34,4386,441.0,44,State St & Randolph St,,,Customer,,
";

const CURRENT_CSV: &str = "\
ride_id,rideable_type,started_at,ended_at,start_station_name,start_station_id,end_station_name,end_station_id,start_lat,start_lng,end_lat,end_lng,member_casual
EACB19130B0CDA4A,docked_bike,2020-01-21 20:06:59,2020-01-21 20:14:30,Western Ave & Leland Ave,239,Clark St & Leland Ave,326,41.9665,-87.6884,41.9671,-87.6674,member
8FED874C809DC021,docked_bike,2020-01-30 14:22:39,2020-01-30 14:26:22,Clark St & Montrose Ave,234,Southport Ave & Irving Park Rd,318,41.9616,-87.666,41.9542,-87.6644,casual
";

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bikeshare-{}-{}", std::process::id(), name))
}

#[test]
fn read_legacy_ignores_extra_columns() {
    let rows = TripSource::default()
        .read_legacy(LEGACY_CSV.as_bytes())
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].trip_id, 21742443);
    assert_eq!(rows[0].usertype, "Subscriber");
    assert_eq!(rows[0].from_station_name.as_deref(), Some("Wabash Ave & Grand Ave"));
}

#[test]
fn read_legacy_blank_station_is_none() {
    let rows = TripSource::default()
        .read_legacy(LEGACY_CSV.as_bytes())
        .unwrap();
    assert_eq!(rows[1].to_station_id, None);
    assert_eq!(rows[1].to_station_name, None);
    assert_eq!(rows[1].from_station_id.as_deref(), Some("44"));
}

#[test]
fn read_current_rows() {
    let rows = TripSource::default()
        .read_current(CURRENT_CSV.as_bytes())
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].ride_id, "8FED874C809DC021");
    assert_eq!(rows[1].member_casual, "casual");
    assert_eq!(rows[1].end_station_id.as_deref(), Some("318"));
}

#[test]
fn read_legacy_malformed_id_is_an_error() {
    let csv = "\
trip_id,start_time,end_time,from_station_id,from_station_name,to_station_id,to_station_name,usertype
abc,2019-01-01 00:04:37,2019-01-01 00:11:07,1,A,2,B,Subscriber
";
    let result = TripSource::default().read_legacy(csv.as_bytes());
    assert!(matches!(result, Err(source::Error::Csv(_))));
}

#[test]
fn storage_from_path() {
    assert_eq!(
        Storage::from_path("trips/Divvy_Trips_2019_Q1.zip"),
        Storage::Zip {
            path: PathBuf::from("trips/Divvy_Trips_2019_Q1.zip"),
            member: None,
        }
    );
    assert_eq!(
        Storage::from_path("trips/Divvy_Trips_2020_Q1.csv"),
        Storage::File(PathBuf::from("trips/Divvy_Trips_2020_Q1.csv"))
    );
}

#[test]
fn load_from_file() {
    let path = temp_path("current.csv");
    File::create(&path)
        .unwrap()
        .write_all(CURRENT_CSV.as_bytes())
        .unwrap();
    let rows = TripSource::default()
        .load_current(&Storage::File(path.clone()))
        .unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn load_missing_file() {
    let result = TripSource::default().load_legacy(&Storage::File(temp_path("missing.csv")));
    assert!(matches!(result, Err(source::Error::Io(_))));
}

#[test]
fn load_from_zip_default_member() {
    let path = temp_path("legacy.zip");
    let config = Config::default();
    let mut zip = ZipWriter::new(File::create(&path).unwrap());
    zip.start_file(config.legacy_file_name.as_str(), SimpleFileOptions::default())
        .unwrap();
    zip.write_all(LEGACY_CSV.as_bytes()).unwrap();
    zip.finish().unwrap();

    let rows = TripSource::new(config)
        .load_legacy(&Storage::from_path(&path))
        .unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].usertype, "Customer");
}

#[test]
fn load_from_zip_missing_member() {
    let path = temp_path("empty.zip");
    let mut zip = ZipWriter::new(File::create(&path).unwrap());
    zip.start_file("other.csv", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(CURRENT_CSV.as_bytes()).unwrap();
    zip.finish().unwrap();

    let result = TripSource::default().load_current(&Storage::Zip {
        path: path.clone(),
        member: Some("trips.csv".into()),
    });
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(source::Error::FileNotFound(name)) if name == "trips.csv"));
}

#[test]
fn loaded_rows_normalize_end_to_end() {
    let trip_source = TripSource::default();
    let normalizer = TripNormalizer::default();
    let legacy = trip_source.read_legacy(LEGACY_CSV.as_bytes()).unwrap();
    let current = trip_source.read_current(CURRENT_CSV.as_bytes()).unwrap();
    let trips = normalizer.merge_and_enrich(
        normalizer.normalize_legacy(legacy),
        normalizer.normalize_current(current),
    );
    assert_eq!(trips.len(), 4);
    assert_eq!(&*trips[0].ride_id, "21742443");
    assert_eq!(trips[0].ride_length_secs(), Some(390));
    assert_eq!(trips[2].ride_length_secs(), Some(451));
    assert!(trips.iter().all(|trip| trip.member_casual.is_known()));
}
