use edmlimits::loader::{load_electron, load_hadronic};
use edmlimits::{EdmError, System, summarize};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TABLES: [(System, &str); 6] = [
    (
        System::Neutron,
        "# year  edm_e_cm  reference\n\
         1957 5e-20    Smith1957\n\
         2006 2.9e-26  Baker2006\n\
         2020 1.8e-26  Abel2020\n",
    ),
    (
        System::Hg,
        "2001 2.1e-28 Romalis2001\n2009 3.1e-29 Griffith09\n2016 7.4e-30 Graner2016\n",
    ),
    (System::Xe, "2001 4.1e-27 Rosenberry\n2019 1.4e-27 Sachdeva19\n"),
    (System::TlF, "1991 2.9e-23 Cho1991\n"),
    (System::Ra, "2015 5e-22 Parker2015\n2016 1.4e-23 Bishof2016\n"),
    (System::Yb, "2022 1.5e-26 Zheng2022\n"),
];

fn write_data_dir(dir: &Path) {
    let hadronic = dir.join("hadronic");
    fs::create_dir_all(&hadronic).unwrap();
    for (system, content) in TABLES {
        fs::write(hadronic.join(format!("{}.txt", system.tag())), content).unwrap();
    }

    let electron = dir.join("electron");
    fs::create_dir_all(&electron).unwrap();
    fs::write(electron.join("eEDM.txt"), "2023 4.1e-30 Roussy2023\n").unwrap();
}

#[test]
fn test_load_full_data_directory() {
    let dir = TempDir::new().unwrap();
    write_data_dir(dir.path());

    let expected_rows = [3, 3, 2, 1, 2, 1];
    for (system, expected) in System::HADRONIC.into_iter().zip(expected_rows) {
        let limits = load_hadronic(dir.path(), system).unwrap();
        assert_eq!(limits.len(), expected, "{system}");
        assert!(limits.iter().all(|l| l.system() == Some(system)));

        for row in summarize(&limits) {
            let theta = row.theta_qcd.unwrap();
            assert!(theta.is_finite() && theta > 0.0, "{system} {theta}");
            assert!(row.new_particle_mass.unwrap() > 0.0);
        }
    }

    let electron = load_electron(dir.path(), "eEDM.txt").unwrap();
    assert_eq!(electron.len(), 1);
    assert_eq!(electron[0].year(), 2023);
    let one_loop = electron[0].one_loop_mass_limit().unwrap();
    assert!((one_loop - 48.0 * (1e-29_f64 / 4.1e-30).sqrt()).abs() < 1e-12);
}

#[test]
fn test_latest_neutron_limit_is_tightest() {
    let dir = TempDir::new().unwrap();
    write_data_dir(dir.path());

    let limits = load_hadronic(dir.path(), System::Neutron).unwrap();
    let tightest = limits
        .iter()
        .min_by(|a, b| a.edm_bound().total_cmp(&b.edm_bound()))
        .unwrap();
    assert_eq!(tightest.reference(), "Abel2020");
}

#[test]
fn test_malformed_file_aborts_loading() {
    let dir = TempDir::new().unwrap();
    write_data_dir(dir.path());
    fs::write(
        dir.path().join("hadronic").join("Hg.txt"),
        "2001 2.1e-28 Romalis2001\n2009 Griffith09\n",
    )
    .unwrap();

    match load_hadronic(dir.path(), System::Hg) {
        Err(EdmError::MalformedInputRow {
            source_name, line, ..
        }) => {
            assert!(source_name.ends_with("Hg.txt"));
            assert_eq!(line, 2);
        }
        other => panic!("expected MalformedInputRow, got {other:?}"),
    }
}
