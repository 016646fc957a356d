mod common;

use std::fs;

use common::{assert_within_conic, ceres, cleanup, pw_1996, scratch_dir};
use hifitime::Epoch;
use orbsample::{
    keplerian_element::classical_to_state,
    position_file::{is_strictly_ascending, read_positions},
    sampler::output_path,
    LabelMode, OrbitCatalog, OrbitSampler, OrbitState, SampleLabel, SamplerConfig,
};

#[test]
fn test_row_counts_and_ordering() {
    let def = ceres();
    let orbit = def.to_orbit().unwrap();

    let with_epoch = OrbitSampler::default().sample(&def.name, &orbit).unwrap();
    assert_eq!(with_epoch.len(), 366);
    assert!(is_strictly_ascending(&with_epoch));

    let without_epoch = OrbitSampler::new(SamplerConfig {
        include_epoch_sample: false,
        ..Default::default()
    })
    .sample(&def.name, &orbit)
    .unwrap();
    assert_eq!(without_epoch.len(), 365);
    assert_eq!(without_epoch[0].label, SampleLabel::Day(1));
    assert_eq!(without_epoch[..], with_epoch[1..]);
}

#[test]
fn test_epoch_sample_is_initial_state() {
    let def = pw_1996();
    let orbit = def.to_orbit().unwrap();
    let samples = OrbitSampler::default().sample(&def.name, &orbit).unwrap();

    let (r0, _) = classical_to_state(&def.elements, def.attractor.mu());
    assert_eq!(samples[0].name, "1996 PW");
    assert_eq!(samples[0].label, SampleLabel::Day(0));
    assert_eq!(samples[0].position, orbit.position());
    assert_eq!(samples[0].position, r0);
}

#[test]
fn test_sampling_is_not_incremental() {
    let def = pw_1996();
    let orbit = def.to_orbit().unwrap();
    let sampler = OrbitSampler::default();

    let full = sampler.sample(&def.name, &orbit).unwrap();
    for k in [1, 17, 200, 365] {
        let alone = sampler.sample_at(&def.name, &orbit, k).unwrap();
        assert_eq!(alone, full[k as usize]);
    }
}

#[test]
fn test_samples_stay_on_the_conic() {
    for def in OrbitCatalog::verification().iter() {
        let orbit = def.to_orbit().unwrap();
        let samples = OrbitSampler::default().sample(&def.name, &orbit).unwrap();
        assert_within_conic(def, &samples);
    }
}

#[test]
fn test_export_file_name_and_content() {
    let dir = scratch_dir("export-pw");
    let def = pw_1996();

    let path = OrbitSampler::default()
        .export_definition(&def, &dir)
        .unwrap();
    assert_eq!(path, dir.join("1996_PW.csv"));

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 366);
    assert!(content.ends_with('\n'));
    assert!(lines[0].starts_with("1996 PW,0,"));
    assert!(lines[365].starts_with("1996 PW,365,"));
    assert!(!content.contains('e'), "coordinates must be plain decimals");

    let (r0, _) = classical_to_state(&def.elements, def.attractor.mu());
    let rows = read_positions(&path).unwrap();
    assert_eq!(rows[0].position, r0);

    cleanup(&dir);
}

#[test]
fn test_export_is_deterministic() {
    let dir_a = scratch_dir("determinism-a");
    let dir_b = scratch_dir("determinism-b");
    let sampler = OrbitSampler::default();
    let catalog = OrbitCatalog::verification();

    let files_a = sampler.export_catalog(&catalog, &dir_a).unwrap();
    let files_b = sampler.export_catalog(&catalog, &dir_b).unwrap();

    for (a, b) in files_a.iter().zip(&files_b) {
        assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
    }

    // a second export into the same directory truncates the previous file
    let again = sampler.export_catalog(&catalog, &dir_a).unwrap();
    assert_eq!(fs::read(&again[0]).unwrap(), fs::read(&files_b[0]).unwrap());

    cleanup(&dir_a);
    cleanup(&dir_b);
}

#[test]
fn test_timestamp_label_export() {
    let dir = scratch_dir("timestamps");
    let sampler = OrbitSampler::new(SamplerConfig {
        label_mode: LabelMode::Timestamp,
        emit_diagnostic: true,
        ..Default::default()
    });

    let path = sampler.export_definition(&ceres(), &dir).unwrap();
    assert_eq!(path, output_path(&dir, "1"));

    let rows = read_positions(&path).unwrap();
    assert_eq!(rows.len(), 366);
    assert_eq!(
        rows[0].label,
        SampleLabel::Timestamp(Epoch::from_gregorian_utc_at_midnight(2018, 1, 1))
    );
    assert_eq!(
        rows[365].label,
        SampleLabel::Timestamp(Epoch::from_gregorian_utc_at_midnight(2019, 1, 1))
    );
    assert!(is_strictly_ascending(&rows));

    cleanup(&dir);
}

#[test]
fn test_failed_orbit_keeps_previous_files() {
    let dir = scratch_dir("fail-fast");
    let mut broken = ceres();
    broken.name = "broken".into();
    broken.elements.eccentricity = 1.5;

    let catalog = OrbitCatalog::new(vec![ceres(), broken, pw_1996()]).unwrap();
    let res = OrbitSampler::default().export_catalog(&catalog, &dir);

    assert!(res.is_err());
    assert!(output_path(&dir, "1").exists());
    assert!(!output_path(&dir, "broken").exists());
    assert!(!output_path(&dir, "1996 PW").exists());

    cleanup(&dir);
}
