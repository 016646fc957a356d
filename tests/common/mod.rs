use std::{
    fs,
    path::{Path, PathBuf},
};

use orbsample::{OrbitCatalog, OrbitDefinition, PositionSample};

/// Fresh scratch directory unique to this test process and `tag`.
pub fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("orbsample-{tag}-{}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn cleanup(dir: &Path) {
    let _ = fs::remove_dir_all(dir);
}

pub fn pw_1996() -> OrbitDefinition {
    OrbitCatalog::verification()
        .get("1996 PW")
        .cloned()
        .expect("1996 PW is part of the verification catalog")
}

pub fn ceres() -> OrbitDefinition {
    OrbitCatalog::verification()
        .get("1")
        .cloned()
        .expect("Ceres is part of the verification catalog")
}

/// Every sample must lie between periapsis and apoapsis.
pub fn assert_within_conic(def: &OrbitDefinition, samples: &[PositionSample]) {
    let peri = def.elements.periapsis();
    let apo = def.elements.apoapsis();
    for s in samples {
        let r = s.position.norm();
        assert!(
            r >= peri * (1.0 - 1e-9) && r <= apo * (1.0 + 1e-9),
            "{} at {}: |r| = {r} outside [{peri}, {apo}]",
            s.name,
            s.label
        );
    }
}
