use linkmark_cli::commands::{inspect, list, load, pack, save, unpack, verify};
use linkmark_persistence::envelope::EnvelopeHeader;
use linkmark_persistence::fixtures::{generate_sample_store, sample_event_log, sample_state};
use linkmark_persistence::StoreConfig;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_inputs(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let state = dir.join("state.db");
    let events = dir.join("events.log");
    fs::write(&state, sample_state(4)).unwrap();
    fs::write(&events, sample_event_log(4)).unwrap();
    (state, events)
}

fn store_config(root: &Path) -> StoreConfig {
    StoreConfig {
        root: root.to_path_buf(),
        ..StoreConfig::default()
    }
}

#[test]
fn test_pack_unpack_files() {
    let dir = tempdir().unwrap();
    let (state, events) = write_inputs(dir.path());
    let blob = dir.path().join("out").join("snapshot.bin");

    let size = pack::run(&state, &events, &blob, false).unwrap();
    assert_eq!(
        size,
        EnvelopeHeader::SIZE + 8 + sample_state(4).len() + sample_event_log(4).len()
    );

    let state_out = dir.path().join("restored.db");
    let events_out = dir.path().join("restored.log");
    unpack::run(&blob, &state_out, &events_out, false).unwrap();

    assert_eq!(fs::read(&state_out).unwrap(), sample_state(4));
    assert_eq!(fs::read(&events_out).unwrap(), sample_event_log(4));
    verify::run(&blob).unwrap();
}

#[test]
fn test_raw_pack_is_bare_container() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("s");
    let events = dir.path().join("e");
    fs::write(&state, [0x01, 0x02, 0x03]).unwrap();
    fs::write(&events, [0xFF]).unwrap();
    let blob = dir.path().join("raw.bin");

    pack::run(&state, &events, &blob, true).unwrap();
    assert_eq!(
        fs::read(&blob).unwrap(),
        vec![0x03, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x01, 0x00, 0x00, 0x00, 0xFF]
    );

    let rows = inspect::describe(&fs::read(&blob).unwrap(), true).unwrap();
    assert!(rows.contains(&("State bytes".to_string(), "3".to_string())));
    assert!(rows.contains(&("Event log bytes".to_string(), "1".to_string())));
}

#[test]
fn test_verify_detects_corruption() {
    let dir = tempdir().unwrap();
    let (state, events) = write_inputs(dir.path());
    let blob = dir.path().join("snapshot.bin");
    pack::run(&state, &events, &blob, false).unwrap();

    let mut bytes = fs::read(&blob).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x55;
    fs::write(&blob, &bytes).unwrap();

    assert!(verify::run(&blob).is_err());
    assert!(unpack::run(&blob, &dir.path().join("a"), &dir.path().join("b"), false).is_err());
}

#[test]
fn test_save_load_list() {
    let dir = tempdir().unwrap();
    let (state, events) = write_inputs(dir.path());
    let cfg = store_config(&dir.path().join("store"));

    save::run(&cfg, "bookmarks", &state, &events).unwrap();
    assert_eq!(list::run(&cfg).unwrap(), vec!["bookmarks"]);

    let state_out = dir.path().join("out.db");
    let events_out = dir.path().join("out.log");
    load::run(&cfg, "bookmarks", &state_out, &events_out).unwrap();
    assert_eq!(fs::read(&state_out).unwrap(), sample_state(4));
    assert_eq!(fs::read(&events_out).unwrap(), sample_event_log(4));

    assert!(load::run(&cfg, "absent", &state_out, &events_out).is_err());
}

#[test]
fn test_list_sample_store() {
    let dir = tempdir().unwrap();
    let sample = generate_sample_store(dir.path()).unwrap();
    let keys = list::run(&store_config(&sample.root)).unwrap();
    assert_eq!(keys, sample.keys);
}

#[test]
fn test_inspect_enveloped_blob() {
    let dir = tempdir().unwrap();
    let sample = generate_sample_store(dir.path()).unwrap();
    let blob = fs::read(sample.root.join("small")).unwrap();

    let rows = inspect::describe(&blob, false).unwrap();
    assert!(rows.contains(&("Format".to_string(), "LMSN v1".to_string())));
    assert!(rows.contains(&(
        "Event log bytes".to_string(),
        sample_event_log(3).len().to_string()
    )));

    inspect::run(&sample.root.join("small"), false, true).unwrap();
}
