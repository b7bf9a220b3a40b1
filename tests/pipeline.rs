// file: tests/pipeline.rs
// description: end-to-end run over a temporary data folder

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use weather_analyzer::{Config, PipelineOrchestrator, Season};

const YEAR_1990: &str = "\
STATION_NAME,STN_ID,January,February,March,April,May,June,July,August,September,October,November,December
Darwin,14015,29.0,29.0,29.0,29.0,27.0,25.0,25.0,26.0,28.0,29.0,29.0,29.0
Canberra,70351,21.0,20.0,17.0,13.0,9.0,6.0,5.0,6.0,9.0,12.0,16.0,19.0
";

const YEAR_1991: &str = "\
STATION_NAME,January,July
Darwin,30.0,NA
Canberra,22.0,4.0
Mawson,,
";

fn setup() -> (TempDir, TempDir, Config) {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    fs::write(data.path().join("stations_group_1990.csv"), YEAR_1990).unwrap();
    fs::write(data.path().join("stations_group_1991.csv"), YEAR_1991).unwrap();
    fs::write(data.path().join("stations_group_draft.csv"), YEAR_1991).unwrap();
    fs::write(data.path().join("readme.txt"), "not data").unwrap();

    let mut config = Config::default_config();
    config.data.data_folder = data.path().to_path_buf();
    config.output.output_dir = output.path().join("reports");

    (data, output, config)
}

#[test]
fn test_full_run_writes_reports() {
    let (_data, _output, config) = setup();
    let output_dir = config.output.output_dir.clone();

    let outcome = PipelineOrchestrator::new(config).unwrap().run().unwrap();

    // 24 readings from 1990, 3 from 1991 (Darwin July is NA, Mawson is empty)
    assert_eq!(outcome.report.overview.total_records, 27);
    assert_eq!(outcome.stats.files_processed, 2);
    assert_eq!(outcome.stats.files_skipped, 1);
    assert_eq!(outcome.report.overview.years, vec![1990, 1991]);
    assert_eq!(
        outcome.report.overview.stations,
        vec!["Canberra".to_string(), "Darwin".to_string()]
    );
    assert_eq!(outcome.written.len(), 4);

    let seasonal = fs::read_to_string(output_dir.join("average_temp.txt")).unwrap();
    let summer = outcome
        .report
        .seasonal
        .iter()
        .find(|s| s.season == Season::Summer)
        .unwrap();
    // Darwin 29, 29, 29, 30 and Canberra 21, 20, 19, 22
    assert_eq!(summer.mean, Some(24.875));
    assert!(seasonal.contains("Summer: 24.9°C\n"));

    let range = fs::read_to_string(output_dir.join("largest_temp_range_station.txt")).unwrap();
    assert!(range.contains("Station Canberra: Range 18.0°C (Max: 22.0°C, Min: 4.0°C)\n"));

    let stability =
        fs::read_to_string(output_dir.join("temperature_stability_stations.txt")).unwrap();
    assert!(stability.contains("Most Stable: Station Darwin"));
    assert!(stability.contains("Most Variable: Station Canberra"));

    let summary = fs::read_to_string(output_dir.join("analysis_summary.txt")).unwrap();
    assert!(summary.starts_with("AUSTRALIAN WEATHER STATION TEMPERATURE ANALYSIS SUMMARY\n"));
    assert!(summary.contains("Analysis Period: 1990 to 1991\n"));
    assert!(summary.contains("Total Records Analyzed: 27\n"));
    assert!(summary.contains("Absolute Maximum: 30.0°C\n"));
    assert!(summary.contains("Absolute Minimum: 4.0°C\n"));
    assert!(summary.contains(" 1. Canberra\n 2. Darwin\n"));
}

#[test]
fn test_missing_data_folder_fails() {
    let mut config = Config::default_config();
    config.data.data_folder = "/definitely/not/a/folder".into();

    let result = PipelineOrchestrator::new(config).unwrap().run();
    assert!(result.is_err());
}
