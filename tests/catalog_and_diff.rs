mod common;

use std::fs;

use approx::assert_relative_eq;
use common::{ceres, cleanup, pw_1996, scratch_dir};
use hifitime::Epoch;
use orbsample::{
    compare::compare_files, position_file::read_positions, BoundingBox, ErrorCategory,
    LabelMode, OrbSampleError, OrbitCatalog, OrbitSampler, SamplerConfig,
};

const CATALOG: &str = r#"
orbits:
  - name: "1996 PW"
    attractor: sun
    semi_major_axis: 3.79035922723884e10
    eccentricity: 0.9901593
    inclination: 0.5228416517687837
    ascending_node: 2.519967809619083
    periapsis_argument: 3.169512336568096
    true_anomaly: 0.03539440456581901
"#;

#[test]
fn test_catalog_from_file_without_epoch() {
    let dir = scratch_dir("catalog-file");
    let path = dir.join("orbits.yaml");
    fs::write(&path, CATALOG).unwrap();

    let catalog = OrbitCatalog::from_path(&path).unwrap();
    let def = catalog.get("1996 PW").unwrap();
    assert_eq!(def.epoch, None);

    let sampler = OrbitSampler::new(SamplerConfig {
        sample_count: 10,
        ..Default::default()
    });
    let files = sampler.export_catalog(&catalog, &dir).unwrap();
    assert_eq!(read_positions(&files[0]).unwrap().len(), 11);

    cleanup(&dir);
}

#[test]
fn test_missing_catalog_is_io_error() {
    let err = OrbitCatalog::from_path("/nonexistent/orbits.yaml").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Io);
}

#[test]
fn test_diff_of_identical_exports_is_zero() {
    let dir_a = scratch_dir("diff-a");
    let dir_b = scratch_dir("diff-b");
    let sampler = OrbitSampler::default();
    let catalog = OrbitCatalog::verification();

    let a = sampler.export_catalog(&catalog, &dir_a).unwrap();
    let b = sampler.export_catalog(&catalog, &dir_b).unwrap();

    let cmp = compare_files(&a[1], &b[1]).unwrap();
    assert_eq!(cmp.count, 366);
    assert_eq!(cmp.sum, 0.0);

    cleanup(&dir_a);
    cleanup(&dir_b);
}

#[test]
fn test_diff_against_shifted_series() {
    let dir = scratch_dir("diff-shift");
    let sampler = OrbitSampler::new(SamplerConfig {
        sample_count: 3,
        ..Default::default()
    });
    let def = OrbitCatalog::verification().get("1").cloned().unwrap();
    let orbit = def.to_orbit().unwrap();

    let exported = sampler.export_orbit("1", &orbit, &dir).unwrap();
    let shifted: String = sampler
        .sample("1", &orbit)
        .unwrap()
        .iter()
        .map(|s| {
            format!(
                "1,{},{},{},{}\n",
                s.label,
                s.position.x + 3.0,
                s.position.y - 3.0,
                s.position.z
            )
        })
        .collect();
    let reference = dir.join("reference.csv");
    fs::write(&reference, shifted).unwrap();

    let cmp = compare_files(&exported, &reference).unwrap();
    assert_eq!(cmp.count, 4);
    for row in &cmp.rows {
        assert_relative_eq!(row.difference, 2.0, epsilon = 1e-6);
    }

    let short = dir.join("short.csv");
    fs::write(&short, "1,0,0,0,0\n").unwrap();
    assert_eq!(
        compare_files(&exported, &short),
        Err(OrbSampleError::RecordCountMismatch { left: 4, right: 1 })
    );

    cleanup(&dir);
}

#[test]
fn test_names_sharing_an_output_file_are_rejected() {
    let mut spaced = ceres();
    spaced.name = "a b".into();
    let mut underscored = pw_1996();
    underscored.name = "a_b".into();

    assert_eq!(
        OrbitCatalog::new(vec![spaced, underscored]),
        Err(OrbSampleError::DuplicateOrbitName("a_b".into()))
    );
}

#[test]
fn test_bounding_box_of_exported_file() {
    let dir = scratch_dir("bounds");
    let sampler = OrbitSampler::new(SamplerConfig {
        label_mode: LabelMode::Timestamp,
        ..Default::default()
    });
    let def = ceres();
    let path = sampler.export_definition(&def, &dir).unwrap();

    let samples = read_positions(&path).unwrap();
    let bbox = BoundingBox::from_samples(&samples).unwrap();
    assert!(samples.iter().all(|s| bbox.contains(s)));

    let span = bbox.time.unwrap();
    assert_eq!(span.start, Epoch::from_gregorian_utc_at_midnight(2018, 1, 1));
    assert_eq!(span.end, Epoch::from_gregorian_utc_at_midnight(2019, 1, 1));

    let apo = def.elements.apoapsis();
    assert!(bbox.max.amax() <= apo * (1.0 + 1e-9));

    let days = OrbitSampler::default();
    let day_path = days.export_orbit("by day", &def.to_orbit().unwrap(), &dir).unwrap();
    let day_box = BoundingBox::from_samples(&read_positions(&day_path).unwrap()).unwrap();
    assert_eq!(day_box.time, None);
    assert!(day_box.overlaps(&bbox));

    cleanup(&dir);
}
