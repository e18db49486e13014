use clap::Parser;
use hotspot_cli::{
    format_summary, run, Args, CliError, TableError, HOTSPOT_COUNT_INVALID,
    HOTSPOT_POINT_TABLE_NAME, HOTSPOT_RADIUS_INVALID,
};
use hotspot_int_test::test_util::{create_test_context, square_corners, to_csv};
use std::fs;

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("hotspot").chain(args.iter().copied())).unwrap()
}

fn read_rows(path: &std::path::Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

#[test]
fn test_planar_run() {
    let ctx = create_test_context().unwrap();
    let table = ctx
        .write_table("points.csv", &to_csv("x", "y", &square_corners(10.0)))
        .unwrap();
    let target = ctx.path().join("result");

    let config = parse(&[
        "--interest-point-table-path",
        table.to_str().unwrap(),
        "--interest-point-table-x-column",
        "x",
        "--interest-point-table-y-column",
        "y",
        "--hotspot-point-count",
        "1",
        "--hotspot-point-radius-in-meters",
        "1",
        "--iteration-count",
        "5",
        "--seed",
        "3",
        "--target-folder",
        target.to_str().unwrap(),
    ])
    .into_run_config()
    .unwrap();

    let summary = run(&config).unwrap();
    let output = target.join(HOTSPOT_POINT_TABLE_NAME);
    assert!(format_summary(&summary)
        .starts_with(&format!("hotspot_point_table_path = {}", output.display())));

    let rows = read_rows(&output);
    assert_eq!(rows[0], vec!["x", "y"]);
    assert_eq!(rows.len(), 2);
    let x: f64 = rows[1][0].parse().unwrap();
    let y: f64 = rows[1][1].parse().unwrap();
    assert!((x - 5.0).abs() < 0.05 && (y - 5.0).abs() < 0.05, "got ({}, {})", x, y);
}

#[test]
fn test_geographic_run_keeps_column_order() {
    let ctx = create_test_context().unwrap();
    let table = ctx
        .write_table(
            "stops.csv",
            "name,lat,lon\na,48.10,11.50\nb,48.10,11.60\nc,48.20,11.50\nd,48.20,11.60\n",
        )
        .unwrap();
    let target = ctx.path().join("result");

    // Latitude given as x is swapped into (longitude, latitude)
    let config = parse(&[
        "--interest-point-table-path",
        table.to_str().unwrap(),
        "--interest-point-table-x-column",
        "lat",
        "--interest-point-table-y-column",
        "lon",
        "--hotspot-point-count",
        "2",
        "--hotspot-point-radius-in-meters",
        "500",
        "--seed",
        "12",
        "--parallel",
        "--target-folder",
        target.to_str().unwrap(),
    ])
    .into_run_config()
    .unwrap();

    run(&config).unwrap();

    let rows = read_rows(&target.join(HOTSPOT_POINT_TABLE_NAME));
    assert_eq!(rows[0], vec!["lat", "lon"]);
    assert_eq!(rows.len(), 3);
    for row in &rows[1..] {
        let lat: f64 = row[0].parse().unwrap();
        let lon: f64 = row[1].parse().unwrap();
        assert!(lat > 47.5 && lat < 48.8, "latitude {}", lat);
        assert!(lon > 11.0 && lon < 12.1, "longitude {}", lon);
    }
}

#[test]
fn test_validation_messages() {
    let base = [
        "--interest-point-table-path",
        "unused.csv",
        "--interest-point-table-x-column",
        "x",
        "--interest-point-table-y-column",
        "y",
    ];

    let mut args = base.to_vec();
    args.extend(["--hotspot-point-count", "0", "--hotspot-point-radius-in-meters", "10"]);
    let err = parse(&args).into_run_config().unwrap_err();
    assert_eq!(err.to_string(), HOTSPOT_COUNT_INVALID);

    let mut args = base.to_vec();
    args.extend(["--hotspot-point-count", "2", "--hotspot-point-radius-in-meters", "-10"]);
    let err = parse(&args).into_run_config().unwrap_err();
    assert_eq!(err.to_string(), HOTSPOT_RADIUS_INVALID);
}

#[test]
fn test_missing_column_fails_run() {
    let ctx = create_test_context().unwrap();
    let table = ctx.write_table("points.csv", "a,b\n1,2\n").unwrap();

    let config = parse(&[
        "--interest-point-table-path",
        table.to_str().unwrap(),
        "--interest-point-table-x-column",
        "x",
        "--interest-point-table-y-column",
        "y",
        "--hotspot-point-count",
        "1",
        "--hotspot-point-radius-in-meters",
        "1",
        "--target-folder",
        ctx.path().join("result").to_str().unwrap(),
    ])
    .into_run_config()
    .unwrap();

    match run(&config) {
        Err(CliError::Table(TableError::MissingColumn { column })) => assert_eq!(column, "x"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}
